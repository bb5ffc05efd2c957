use std::io::Write;

use owo_colors::{AnsiColors, OwoColorize};

use crate::RedrawMode;

const BACKSPACE: u8 = 0x08;

/// The terminal edit that turns one displayed line into another.
///
/// Applied in order: optional jump to an absolute column, `backspaces`
/// cursor steps left, `text` written, then `overhang` columns blanked and
/// stepped back over.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Patch<'a> {
    pub move_to: Option<u16>,
    pub backspaces: usize,
    pub text: &'a str,
    pub overhang: usize,
}

impl<'a> Patch<'a> {
    /// Backspace to the first differing character and rewrite from there.
    pub fn diff(current: &str, next: &'a str) -> Self {
        let prefix = common_prefix(current, next);
        Self {
            move_to: None,
            backspaces: current.chars().count() - prefix,
            text: &next[byte_offset(next, prefix)..],
            overhang: overhang(current, next),
        }
    }

    /// Jump to `column` and rewrite the whole line.
    pub fn whole_line(current: &str, next: &'a str, column: u16) -> Self {
        Self {
            move_to: Some(column),
            backspaces: 0,
            text: next,
            overhang: overhang(current, next),
        }
    }

    /// `true` when applying the patch would write nothing.
    pub fn is_empty(&self) -> bool {
        self.move_to.is_none() && self.backspaces == 0 && self.text.is_empty() && self.overhang == 0
    }

    fn write_to(&self, target: &mut dyn Write, color: Option<AnsiColors>) -> std::io::Result<()> {
        if let Some(column) = self.move_to {
            // CHA is one-based.
            write!(target, "\x1b[{}G", u32::from(column) + 1)?;
        }
        target.write_all(&[BACKSPACE].repeat(self.backspaces))?;
        if !self.text.is_empty() {
            match color {
                Some(color) => write!(target, "{}", self.text.color(color))?,
                None => target.write_all(self.text.as_bytes())?,
            }
        }
        if self.overhang > 0 {
            target.write_all(" ".repeat(self.overhang).as_bytes())?;
            target.write_all(&[BACKSPACE].repeat(self.overhang))?;
        }
        Ok(())
    }
}

/// Owns the text currently shown on the progress line and rewrites it in
/// place with as few control characters as it can.
///
/// Columns are counted one per `char`; wide glyphs will desynchronise the
/// cursor.
///
/// ```rust,ignore
/// let mut line = DiffRenderer::new(std::io::stdout());
/// line.render("[####------]  40% ")?;
/// line.render("[#####-----]  50% ")?; // backspaces 12, writes "#-----]  50% "
/// ```
pub struct DiffRenderer<W: Write> {
    target: W,
    current: String,
    mode: RedrawMode,
    start_column: u16,
    color: Option<AnsiColors>,
}

impl<W: Write> std::fmt::Debug for DiffRenderer<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DiffRenderer")
            .field("current", &self.current)
            .field("mode", &self.mode)
            .field("start_column", &self.start_column)
            .field("color", &self.color)
            .finish_non_exhaustive()
    }
}

impl<W: Write> DiffRenderer<W> {
    pub fn new(target: W) -> Self {
        Self {
            target,
            current: String::new(),
            mode: RedrawMode::default(),
            start_column: 0,
            color: None,
        }
    }

    pub fn set_mode(&mut self, mode: RedrawMode) {
        self.mode = mode;
    }

    pub fn set_start_column(&mut self, column: u16) {
        self.start_column = column;
    }

    pub fn set_color(&mut self, color: Option<AnsiColors>) {
        self.color = color;
    }

    pub fn start_column(&self) -> u16 {
        self.start_column
    }

    /// Text currently on screen.
    pub fn current(&self) -> &str {
        &self.current
    }

    pub fn target(&self) -> &W {
        &self.target
    }

    pub fn target_mut(&mut self) -> &mut W {
        &mut self.target
    }

    /// Replaces the displayed line with `next`.
    ///
    /// On error the recorded line is left as it was.
    pub fn render(&mut self, next: &str) -> std::io::Result<()> {
        let patch = match self.mode {
            RedrawMode::Diff => Patch::diff(&self.current, next),
            RedrawMode::WholeLine => Patch::whole_line(&self.current, next, self.start_column),
        };

        if !patch.is_empty() {
            patch.write_to(&mut self.target, self.color)?;
            self.target.flush()?;
        }

        self.current.clear();
        self.current.push_str(next);
        Ok(())
    }

    /// Erases the displayed line and leaves the cursor where it started.
    pub fn clear(&mut self) -> std::io::Result<()> {
        self.render("")
    }
}

/// Number of leading `char`s `a` and `b` share.
pub fn common_prefix(a: &str, b: &str) -> usize {
    a.chars().zip(b.chars()).take_while(|(x, y)| x == y).count()
}

fn overhang(current: &str, next: &str) -> usize {
    current.chars().count().saturating_sub(next.chars().count())
}

fn byte_offset(s: &str, chars: usize) -> usize {
    s.char_indices().nth(chars).map_or(s.len(), |(i, _)| i)
}
