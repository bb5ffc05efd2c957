//! Drives the bar from `tracing` events carrying a `progress` field.

use std::sync::Arc;
use std::time::Duration;

use tally_line::*;
use tracing::info;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

fn main() {
    let bar = Arc::new(ProgressBar::new());
    tracing_subscriber::registry()
        .with(progress_layer(bar.clone()))
        .init();

    let files = ["a.txt", "b.txt", "c.txt", "d.txt", "e.txt"];
    for (i, file) in files.iter().enumerate() {
        std::thread::sleep(Duration::from_millis(600));
        info!(progress = (i + 1) as f64 / files.len() as f64, file, "indexed");
    }

    bar.dispose();
}
