use std::fmt::Write;
use std::time::Duration;

use super::{BarGraphic, Spinner, clock};
use crate::DisplayConfig;

const PERCENT_WIDTH: usize = 4;

/// Builds the display line for one tick.
///
/// Layout is `bar␠percent␠spinner␠runtime␠(eta left)` with disabled fields
/// left out and trailing spaces trimmed. `spinner` advances by one frame per
/// call whether or not the glyph is shown.
///
/// ```rust,ignore
/// let line = format_line(0.25, Duration::from_secs(10), &mut spinner, &config);
/// // => "[##--------]  25% | 10.0 (30 left)"
/// ```
pub fn format_line(
    fraction: f64, elapsed: Duration, spinner: &mut Spinner, config: &DisplayConfig,
) -> String {
    let fraction = fraction.clamp(0.0, 1.0);
    let running = fraction > 0.0 && fraction < 1.0;
    let mut line = String::new();

    if config.show_bar {
        let _ = write!(line, "{} ", BarGraphic::new(fraction, config));
    }

    if config.show_percent {
        line.push_str(&percent(fraction));
        line.push(' ');
    }

    let frame = spinner.advance(&config.spinner_sequence);
    if config.show_spinner
        && fraction < 1.0
        && let Some(frame) = frame
    {
        line.push(frame);
    }

    if config.show_runtime && running {
        let _ = write!(line, " {}", clock::runtime(elapsed));
    }

    if config.show_eta && running {
        let per_unit = elapsed.as_secs_f64() / fraction;
        if let Ok(remaining) = Duration::try_from_secs_f64((1.0 - fraction) * per_unit) {
            let _ = write!(line, " ({} left)", clock::eta(remaining));
        }
    }

    let trimmed = line.trim_end().len();
    line.truncate(trimmed);
    line
}

/// Whole-number percentage, right-aligned to four columns with U+00A0 so the
/// line keeps its length as the digits change.
pub fn percent(fraction: f64) -> String {
    let text = format!("{}%", (fraction * 100.0).round() as u32);
    let pad = PERCENT_WIDTH.saturating_sub(text.chars().count());
    let mut out = "\u{a0}".repeat(pad);
    out.push_str(&text);
    out
}
