use std::sync::Mutex;
use std::time::{Duration, Instant};

use crate::lock;

/// Values at or beyond these bounds count as "not started" / "finished" and
/// restart the runtime clock.
const RESET_LOW: f64 = 0.001;
const RESET_HIGH: f64 = 0.999;

/// Latest reported fraction and the instant runtime is measured from.
///
/// Written by any number of host threads through [`ProgressState::report`],
/// read by the render thread through [`ProgressState::snapshot`].
#[derive(Debug)]
pub struct ProgressState {
    inner: Mutex<Inner>,
}

#[derive(Debug, Clone, Copy)]
struct Inner {
    fraction: f64,
    started_at: Instant,
}

/// A consistent copy of [`ProgressState`] taken at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Snapshot {
    /// Fraction complete, always within `[0, 1]`.
    pub fraction: f64,
    /// When the current run started.
    pub started_at: Instant,
    /// Time since `started_at` at the moment of the snapshot.
    pub elapsed: Duration,
}

impl Default for ProgressState {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressState {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner {
                fraction: 0.0,
                started_at: Instant::now(),
            }),
        }
    }

    /// Stores `value` clamped into `[0, 1]`.
    ///
    /// Reaching either end restarts the runtime clock, so a bar reused for a
    /// second task measures it from zero.
    pub fn report(&self, value: f64) {
        let fraction = clamp_fraction(value);
        let mut inner = lock(&self.inner);
        inner.fraction = fraction;
        if !(RESET_LOW..=RESET_HIGH).contains(&fraction) {
            inner.started_at = Instant::now();
        }
    }

    pub fn snapshot(&self) -> Snapshot {
        let inner = *lock(&self.inner);
        Snapshot {
            fraction: inner.fraction,
            started_at: inner.started_at,
            elapsed: inner.started_at.elapsed(),
        }
    }

    pub fn fraction(&self) -> f64 {
        lock(&self.inner).fraction
    }
}

/// NaN maps to zero; everything else saturates at the bounds.
pub(crate) fn clamp_fraction(value: f64) -> f64 {
    if value.is_nan() {
        return 0.0;
    }
    value.clamp(0.0, 1.0)
}
