use owo_colors::AnsiColors;

/// How [`crate::DiffRenderer`] turns the old line into the new one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RedrawMode {
    /// Backspace to the first differing character and write only the suffix.
    #[default]
    Diff,
    /// Jump to the start column and rewrite the whole line every tick.
    ///
    /// The start column is absolute: if the terminal scrolls or the line
    /// wraps between ticks, the bar is redrawn in the wrong place.
    WholeLine,
}

/// Everything that controls what a tick draws.
///
/// Read once per tick. Change it on a live bar with
/// [`crate::ProgressBar::configure`].
///
/// ```rust,ignore
/// let config = DisplayConfig::default()
///     .blocks(20)
///     .glyphs("=", " ")
///     .spinner("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏")
///     .show_eta(false);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayConfig {
    pub block_count: usize,
    pub start_bracket: String,
    pub end_bracket: String,
    pub completed_block: String,
    pub incomplete_block: String,
    /// Spinner frames, one per `char`.
    pub spinner_sequence: String,
    pub show_bar: bool,
    pub show_percent: bool,
    pub show_spinner: bool,
    pub show_runtime: bool,
    pub show_eta: bool,
    pub foreground: Option<AnsiColors>,
    pub redraw: RedrawMode,
    /// Zero-based terminal column the line begins at.
    pub start_column: u16,
    /// Erase the line on disposal instead of painting a final frame.
    pub clear_on_dispose: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            block_count: 10,
            start_bracket: "[".into(),
            end_bracket: "]".into(),
            completed_block: "#".into(),
            incomplete_block: "-".into(),
            spinner_sequence: "|/-\\".into(),
            show_bar: true,
            show_percent: true,
            show_spinner: true,
            show_runtime: true,
            show_eta: true,
            foreground: None,
            redraw: RedrawMode::Diff,
            start_column: 0,
            clear_on_dispose: true,
        }
    }
}

impl DisplayConfig {
    pub fn blocks(mut self, count: usize) -> Self {
        self.block_count = count;
        self
    }

    pub fn brackets(mut self, start: impl Into<String>, end: impl Into<String>) -> Self {
        self.start_bracket = start.into();
        self.end_bracket = end.into();
        self
    }

    /// Glyphs for the filled and unfilled parts of the bar.
    pub fn glyphs(mut self, completed: impl Into<String>, incomplete: impl Into<String>) -> Self {
        self.completed_block = completed.into();
        self.incomplete_block = incomplete.into();
        self
    }

    pub fn spinner(mut self, sequence: impl Into<String>) -> Self {
        self.spinner_sequence = sequence.into();
        self
    }

    pub fn show_bar(mut self, yes: bool) -> Self {
        self.show_bar = yes;
        self
    }

    pub fn show_percent(mut self, yes: bool) -> Self {
        self.show_percent = yes;
        self
    }

    pub fn show_spinner(mut self, yes: bool) -> Self {
        self.show_spinner = yes;
        self
    }

    pub fn show_runtime(mut self, yes: bool) -> Self {
        self.show_runtime = yes;
        self
    }

    pub fn show_eta(mut self, yes: bool) -> Self {
        self.show_eta = yes;
        self
    }

    pub fn foreground(mut self, color: AnsiColors) -> Self {
        self.foreground = Some(color);
        self
    }

    pub fn redraw(mut self, mode: RedrawMode) -> Self {
        self.redraw = mode;
        self
    }

    pub fn start_column(mut self, column: u16) -> Self {
        self.start_column = column;
        self
    }

    pub fn clear_on_dispose(mut self, yes: bool) -> Self {
        self.clear_on_dispose = yes;
        self
    }
}
