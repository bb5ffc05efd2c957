/// Picks spinner frames out of a glyph sequence by a running frame counter.
///
/// The counter lives with the render thread; each call to [`Spinner::advance`]
/// returns the current frame and moves one position on.
///
/// ```rust,ignore
/// let mut spinner = Spinner::default();
/// let sequence = "|/-\\";
/// assert_eq!(spinner.advance(sequence), Some('|'));
/// assert_eq!(spinner.advance(sequence), Some('/'));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Spinner {
    index: usize,
}

impl Spinner {
    /// Starts at `index` instead of the first frame.
    pub fn at(index: usize) -> Self {
        Self { index }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Frame at the current index, without advancing.
    pub fn frame(&self, sequence: &str) -> Option<char> {
        let len = sequence.chars().count();
        if len == 0 {
            return None;
        }
        sequence.chars().nth(self.index % len)
    }

    /// Returns the current frame and advances by one.
    pub fn advance(&mut self, sequence: &str) -> Option<char> {
        let frame = self.frame(sequence);
        self.tick();
        frame
    }

    /// Advance to the next frame.
    pub fn tick(&mut self) {
        self.index = self.index.wrapping_add(1);
    }
}
