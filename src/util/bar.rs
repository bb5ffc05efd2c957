use crate::DisplayConfig;

/// The bracketed block graphic, e.g. `[####------]`.
///
/// ```rust,ignore
/// let bar = BarGraphic::new(0.45, &config);
/// write!(f, "{bar}")?;
/// // => [####------]
/// ```
pub struct BarGraphic<'a> {
    completed: usize,
    config: &'a DisplayConfig,
}

impl<'a> BarGraphic<'a> {
    pub fn new(fraction: f64, config: &'a DisplayConfig) -> Self {
        let blocks = config.block_count;
        let completed = ((fraction.clamp(0.0, 1.0) * blocks as f64).floor() as usize).min(blocks);
        Self { completed, config }
    }

    /// Number of blocks drawn with the completed glyph.
    pub fn completed(&self) -> usize {
        self.completed
    }
}

impl std::fmt::Display for BarGraphic<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let config = self.config;
        let remaining = config.block_count - self.completed;
        write!(
            f,
            "{}{}{}{}",
            config.start_bracket,
            config.completed_block.repeat(self.completed),
            config.incomplete_block.repeat(remaining),
            config.end_bracket,
        )
    }
}
