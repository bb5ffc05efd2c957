//! Async workers report through a channel; the main task feeds the bar.

use std::time::Duration;

use tally_line::*;

#[tokio::main]
async fn main() {
    let bar = ProgressBar::new();
    let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel::<u32>();

    let total = 120u32;
    for worker in 0..4u64 {
        let tx = tx.clone();
        tokio::spawn(async move {
            for _ in 0..total / 4 {
                tokio::time::sleep(Duration::from_millis(20 + worker * 5)).await;
                if tx.send(1).is_err() {
                    break;
                }
            }
        });
    }
    drop(tx);

    let mut done = 0u32;
    while let Some(n) = rx.recv().await {
        done += n;
        bar.report(f64::from(done) / f64::from(total));
    }

    bar.dispose();
    println!("processed {done} items");
}
