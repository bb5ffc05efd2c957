#![doc = include_str!("../README.md")]

use std::sync::{Mutex, MutexGuard, PoisonError};

pub(crate) mod bar;
pub(crate) mod config;
#[cfg(feature = "layer")]
pub(crate) mod layer;
pub(crate) mod progress;
pub(crate) mod runner;
pub(crate) mod state;
pub mod util;
pub(crate) mod writer;


/// Re-exports of all public types and traits.
pub mod prelude {
    pub use crate::bar::{ProgressBar, ProgressBarBuilder};
    pub use crate::config::{DisplayConfig, RedrawMode};
    #[cfg(feature = "layer")]
    pub use crate::layer::{ProgressLayer, progress_layer};
    pub use crate::progress::{FnProgress, Progress, from_fn};
    pub use crate::runner::{Phase, RenderScheduler};
    pub use crate::state::{ProgressState, Snapshot};
    pub use crate::writer::{DiffRenderer, Patch};
    pub use owo_colors::AnsiColors;
}

pub use crate::prelude::*;

/// Locks `mutex`, recovering the data if a previous holder panicked. A
/// torn frame is better than a dead progress line.
pub(crate) fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
