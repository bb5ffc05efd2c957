use std::io::{IsTerminal, Stdout, Write};
use std::time::Duration;

use crate::runner::{Phase, RenderScheduler};
use crate::{DisplayConfig, Progress, lock};

/// A single-line, in-place progress indicator.
///
/// Rendering starts as soon as the bar is built, on a background thread, and
/// stops when the bar is disposed or dropped. When the output is not an
/// interactive terminal nothing is ever drawn.
///
/// ```rust,ignore
/// let bar = ProgressBar::new();
/// for i in 0..=100 {
///     bar.report(i as f64 / 100.0);
///     do_work();
/// }
/// bar.dispose();
/// ```
pub struct ProgressBar<W: Write + Send + 'static = Stdout> {
    scheduler: RenderScheduler<W>,
}

impl<W: Write + Send + 'static> std::fmt::Debug for ProgressBar<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProgressBar")
            .field("fraction", &self.fraction())
            .field("phase", &self.phase())
            .finish_non_exhaustive()
    }
}

impl ProgressBar<Stdout> {
    /// Renders to stdout with the default configuration.
    pub fn new() -> Self {
        Self::with_config(DisplayConfig::default())
    }

    /// Renders to stdout with `config`.
    pub fn with_config(config: DisplayConfig) -> Self {
        Self::builder().config(config).build()
    }

    /// Starts a builder targeting stdout.
    pub fn builder() -> ProgressBarBuilder<Stdout> {
        let stdout = std::io::stdout();
        let interactive = stdout.is_terminal();
        ProgressBarBuilder {
            writer: stdout,
            interactive,
            interval: RenderScheduler::<Stdout>::DEFAULT_INTERVAL,
            config: DisplayConfig::default(),
        }
    }
}

impl Default for ProgressBar<Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write + Send + 'static> ProgressBar<W> {
    /// Records the fraction complete, clamped into `[0, 1]`.
    ///
    /// Never blocks on rendering; the next tick picks the value up.
    pub fn report(&self, value: f64) {
        self.scheduler.progress().report(value);
    }

    /// Current fraction complete.
    pub fn fraction(&self) -> f64 {
        self.scheduler.progress().fraction()
    }

    /// With `inline`, anchors the line's start column to where the terminal
    /// cursor is right now, so the bar can follow text already on the line.
    ///
    /// Only [`RedrawMode::WholeLine`](crate::RedrawMode::WholeLine) uses the
    /// start column.
    pub fn start(&self, inline: bool) -> &Self {
        if !inline || self.phase() != Phase::Active {
            return self;
        }
        // Hold the render slot so no tick writes while the terminal answers
        // the position query.
        self.scheduler.with_slot(|slot| {
            let previous = slot.renderer.start_column();
            match crossterm::cursor::position() {
                Ok((column, _)) => {
                    lock(self.scheduler.config()).start_column = column;
                    slot.renderer.set_start_column(column);
                }
                Err(error) => {
                    tracing::debug!(%error, previous, "cursor position unavailable");
                }
            }
        });
        self
    }

    /// Changes the display configuration; takes effect on the next tick.
    ///
    /// ```rust,ignore
    /// bar.configure(|c| {
    ///     c.show_eta = false;
    ///     c.foreground = Some(AnsiColors::Cyan);
    /// });
    /// ```
    pub fn configure(&self, f: impl FnOnce(&mut DisplayConfig)) {
        f(&mut lock(self.scheduler.config()));
    }

    /// Copy of the current display configuration.
    pub fn config(&self) -> DisplayConfig {
        lock(self.scheduler.config()).clone()
    }

    pub fn phase(&self) -> Phase {
        self.scheduler.phase()
    }

    pub fn is_active(&self) -> bool {
        self.phase() == Phase::Active
    }

    /// Stops rendering. Idempotent; also runs on drop.
    pub fn dispose(&self) {
        self.scheduler.dispose();
    }
}

impl<W: Write + Send + 'static> Progress for ProgressBar<W> {
    fn report(&self, value: f64) {
        ProgressBar::report(self, value);
    }
}

/// Configures and builds a [`ProgressBar`].
///
/// ```rust,ignore
/// let bar = ProgressBar::builder()
///     .writer(std::io::stderr())
///     .interval(Duration::from_millis(80))
///     .config(DisplayConfig::default().blocks(30))
///     .build();
/// ```
pub struct ProgressBarBuilder<W> {
    writer: W,
    interactive: bool,
    interval: Duration,
    config: DisplayConfig,
}

impl<W: Write + Send + 'static> ProgressBarBuilder<W> {
    /// Draws to `writer` instead. The writer is assumed to be an interactive
    /// terminal; override with [`interactive`](Self::interactive).
    pub fn writer<T: Write + Send + 'static>(self, writer: T) -> ProgressBarBuilder<T> {
        ProgressBarBuilder {
            writer,
            interactive: true,
            interval: self.interval,
            config: self.config,
        }
    }

    /// Whether the writer is an interactive terminal. A non-interactive bar
    /// never renders.
    pub fn interactive(mut self, yes: bool) -> Self {
        self.interactive = yes;
        self
    }

    /// Set the repaint interval.
    pub fn interval(mut self, d: Duration) -> Self {
        self.interval = d;
        self
    }

    pub fn config(mut self, config: DisplayConfig) -> Self {
        self.config = config;
        self
    }

    /// Builds the bar and, for an interactive writer, starts rendering.
    pub fn build(self) -> ProgressBar<W> {
        let scheduler = RenderScheduler::new(self.writer, self.config).interval(self.interval);
        if !self.interactive {
            tracing::debug!("output is not a terminal; progress line disabled");
        } else if let Err(error) = scheduler.activate() {
            tracing::warn!(%error, "failed to spawn progress render thread");
        }
        ProgressBar { scheduler }
    }
}
