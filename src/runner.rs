use std::io::Write;
use std::sync::atomic::{AtomicBool, AtomicU8, Ordering};
use std::sync::{Arc, Condvar, Mutex, OnceLock, PoisonError};
use std::thread::{JoinHandle, ThreadId};
use std::time::Duration;

use crate::util::{Spinner, format_line};
use crate::{DiffRenderer, DisplayConfig, ProgressState, lock};

/// Lifecycle of a [`RenderScheduler`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Constructed but not ticking, e.g. because output is redirected.
    Idle,
    /// The render thread is running.
    Active,
    /// Terminal state; no further ticks.
    Disposed,
}

impl Phase {
    fn from_u8(raw: u8) -> Self {
        match raw {
            0 => Phase::Idle,
            1 => Phase::Active,
            _ => Phase::Disposed,
        }
    }
}

/// State shared between the host-facing handle and the render thread.
pub(crate) struct Shared<W: Write> {
    pub(crate) progress: ProgressState,
    pub(crate) config: Mutex<DisplayConfig>,
    slot: Mutex<RenderSlot<W>>,
    wake: Condvar,
    /// Only written with `slot` held; readable without it so a writer
    /// running inside a tick can still ask.
    phase: AtomicU8,
    render_thread: OnceLock<ThreadId>,
    /// Set by a dispose issued from inside a tick; the render loop honours
    /// it once the tick returns.
    dispose_requested: AtomicBool,
}

/// Everything a tick touches. Held locked for the whole tick, so disposal
/// waits for an in-flight render to finish.
pub(crate) struct RenderSlot<W: Write> {
    pub(crate) renderer: DiffRenderer<W>,
    spinner: Spinner,
}

impl<W: Write> Shared<W> {
    fn phase(&self) -> Phase {
        Phase::from_u8(self.phase.load(Ordering::Acquire))
    }

    fn set_phase(&self, phase: Phase) {
        self.phase.store(phase as u8, Ordering::Release);
    }

    fn on_render_thread(&self) -> bool {
        self.render_thread.get() == Some(&std::thread::current().id())
    }

    /// Snapshot, format and draw one frame.
    fn tick(&self, slot: &mut RenderSlot<W>) {
        let snapshot = self.progress.snapshot();
        let line = {
            let config = lock(&self.config);
            slot.renderer.set_mode(config.redraw);
            slot.renderer.set_start_column(config.start_column);
            slot.renderer.set_color(config.foreground);
            format_line(snapshot.fraction, snapshot.elapsed, &mut slot.spinner, &config)
        };
        // A broken terminal must not take the render thread down; the next
        // tick tries again.
        if let Err(error) = slot.renderer.render(&line) {
            tracing::warn!(%error, "progress line render failed");
        }
    }

    fn finish(&self, slot: &mut RenderSlot<W>) {
        let clear = lock(&self.config).clear_on_dispose;
        let result = if clear {
            slot.renderer.clear()
        } else {
            self.tick(slot);
            Ok(())
        };
        if let Err(error) = result {
            tracing::warn!(%error, "failed to clear progress line");
        }
    }
}

/// Drives redraws of one progress line on a dedicated thread.
///
/// Each tick snapshots the [`ProgressState`], formats the line and hands it to
/// the [`DiffRenderer`], then sleeps one `interval` before the next. The
/// sleep starts after the render, so ticks never overlap.
///
/// ```rust,ignore
/// let scheduler = RenderScheduler::new(std::io::stderr(), DisplayConfig::default())
///     .interval(Duration::from_millis(80));
/// scheduler.activate();
/// scheduler.progress().report(0.5);
/// scheduler.dispose();
/// ```
pub struct RenderScheduler<W: Write + Send + 'static> {
    shared: Arc<Shared<W>>,
    interval: Duration,
    worker: Mutex<Option<JoinHandle<()>>>,
}

impl<W: Write + Send + 'static> RenderScheduler<W> {
    /// Default tick period, eight frames per second.
    pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(125);

    /// Creates an idle scheduler drawing to `writer`.
    pub fn new(writer: W, config: DisplayConfig) -> Self {
        Self {
            shared: Arc::new(Shared {
                progress: ProgressState::new(),
                config: Mutex::new(config),
                slot: Mutex::new(RenderSlot {
                    renderer: DiffRenderer::new(writer),
                    spinner: Spinner::default(),
                }),
                wake: Condvar::new(),
                phase: AtomicU8::new(Phase::Idle as u8),
                render_thread: OnceLock::new(),
                dispose_requested: AtomicBool::new(false),
            }),
            interval: Self::DEFAULT_INTERVAL,
            worker: Mutex::new(None),
        }
    }

    /// Set the repaint interval. Only affects a scheduler not yet activated.
    pub fn interval(mut self, d: Duration) -> Self {
        self.interval = d;
        self
    }

    pub fn progress(&self) -> &ProgressState {
        &self.shared.progress
    }

    pub(crate) fn config(&self) -> &Mutex<DisplayConfig> {
        &self.shared.config
    }

    pub fn phase(&self) -> Phase {
        self.shared.phase()
    }

    /// Runs `f` with the render slot locked, i.e. between ticks.
    pub(crate) fn with_slot<T>(&self, f: impl FnOnce(&mut RenderSlot<W>) -> T) -> T {
        f(&mut lock(&self.shared.slot))
    }

    /// Moves Idle → Active and starts the render thread. No-op in any other
    /// phase.
    pub fn activate(&self) -> std::io::Result<()> {
        let _slot = lock(&self.shared.slot);
        if self.shared.phase() != Phase::Idle {
            return Ok(());
        }

        let shared = self.shared.clone();
        let interval = self.interval;
        let handle = std::thread::Builder::new()
            .name("tally-line".into())
            .spawn(move || run(shared, interval))?;

        // Recorded before the slot is released, so the thread cannot tick
        // without it.
        let _ = self.shared.render_thread.set(handle.thread().id());
        self.shared.set_phase(Phase::Active);
        *lock(&self.worker) = Some(handle);
        tracing::debug!(?interval, "progress line scheduler active");
        Ok(())
    }

    /// Stops ticking for good.
    ///
    /// Waits for an in-flight tick, then either erases the line or paints a
    /// final frame depending on [`DisplayConfig::clear_on_dispose`]. Safe to
    /// call repeatedly and from any thread.
    ///
    /// Called from inside a tick (e.g. by the writer), disposal is deferred
    /// until that tick returns and the call does not wait for it.
    pub fn dispose(&self) {
        if self.shared.on_render_thread() {
            self.shared.dispose_requested.store(true, Ordering::Release);
            return;
        }

        {
            let mut slot = lock(&self.shared.slot);
            match self.shared.phase() {
                Phase::Active => {
                    self.shared.finish(&mut slot);
                    self.shared.set_phase(Phase::Disposed);
                    tracing::debug!("progress line scheduler disposed");
                }
                Phase::Idle => self.shared.set_phase(Phase::Disposed),
                Phase::Disposed => {}
            }
            self.shared.wake.notify_all();
        }

        let handle = lock(&self.worker).take();
        if let Some(handle) = handle {
            let _ = handle.join();
        }
    }
}

impl<W: Write + Send + 'static> Drop for RenderScheduler<W> {
    fn drop(&mut self) {
        self.dispose();
    }
}

fn run<W: Write>(shared: Arc<Shared<W>>, interval: Duration) {
    let mut slot = lock(&shared.slot);
    loop {
        let (guard, _) = shared
            .wake
            .wait_timeout_while(slot, interval, |_| shared.phase() != Phase::Disposed)
            .unwrap_or_else(PoisonError::into_inner);
        slot = guard;
        if shared.phase() == Phase::Disposed {
            break;
        }
        shared.tick(&mut slot);
        if shared.dispose_requested.load(Ordering::Acquire) {
            shared.finish(&mut slot);
            shared.set_phase(Phase::Disposed);
            tracing::debug!("progress line scheduler disposed from its own tick");
            break;
        }
    }
}
