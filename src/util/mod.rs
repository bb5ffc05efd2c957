//! Text building blocks for the progress line.
//!
//! # Bar graphic
//!
//! [`BarGraphic`] renders the bracketed block bar from a fraction:
//!
//! ```rust,ignore
//! let bar = BarGraphic::new(0.45, &DisplayConfig::default());
//! // => [####------]
//! ```
//!
//! # Spinner
//!
//! [`Spinner`] cycles through the configured glyph sequence, one frame per
//! render tick.
//!
//! # Line
//!
//! [`format_line`] puts the pieces together with percent, runtime and ETA:
//!
//! ```text
//! [####------]  40% | 12.0 (18 left)
//! ```

mod bar;
pub(crate) mod clock;
mod format;
mod spinner;

pub use bar::*;
pub use format::*;
pub use spinner::*;
