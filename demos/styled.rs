//! Custom glyphs, color and whole-line redraw on stderr.

use std::io::IsTerminal;
use std::time::Duration;

use tally_line::*;

fn main() {
    let bar = ProgressBar::builder()
        .writer(std::io::stderr())
        .interactive(std::io::stderr().is_terminal())
        .interval(Duration::from_millis(80))
        .config(
            DisplayConfig::default()
                .blocks(30)
                .brackets("▕", "▏")
                .glyphs("█", "░")
                .spinner("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏")
                .foreground(AnsiColors::Cyan)
                .redraw(RedrawMode::WholeLine),
        )
        .build();

    for step in 0..=100 {
        bar.report(step as f64 / 100.0);
        if step == 50 {
            bar.configure(|c| c.foreground = Some(AnsiColors::Green));
        }
        std::thread::sleep(Duration::from_millis(40));
    }
    bar.dispose();
    eprintln!("done");
}
