//! Reports progress from a worker thread while the bar animates on its own.

use std::io::Write;
use std::time::Duration;

use tally_line::*;

fn main() {
    print!("Copying files ");
    let _ = std::io::stdout().flush();
    let bar = ProgressBar::new();
    bar.start(true);

    std::thread::scope(|s| {
        s.spawn(|| {
            for step in 0..=200 {
                bar.report(step as f64 / 200.0);
                std::thread::sleep(Duration::from_millis(25));
            }
        });
    });

    // Keep the finished bar on screen.
    bar.configure(|c| c.clear_on_dispose = false);
    bar.dispose();
    println!();
}
