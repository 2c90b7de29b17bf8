//! The single rewritable status line.
//!
//! Every update is padded to the widest text ever shown, so a short message
//! fully covers whatever a longer one left behind on the terminal line.

/// Last rendered text and the widest width seen so far.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DisplayLine {
    text: String,
    max_width: usize,
}

impl DisplayLine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the line with `text`, right-padded with spaces.
    ///
    /// Returns `false` when the padded result is identical to what is already
    /// shown, so callers can skip the write.
    pub fn set(&mut self, text: &str) -> bool {
        let width = text.chars().count();
        self.max_width = self.max_width.max(width);

        let pad = self.max_width - width;
        if self.text.len() == text.len() + pad
            && self.text.starts_with(text)
            && self.text[text.len()..].bytes().all(|b| b == b' ')
        {
            return false;
        }

        self.text.clear();
        self.text.push_str(text);
        self.text.extend(std::iter::repeat(' ').take(pad));
        true
    }

    /// Forget what is on screen so the next `set` always reports a change.
    ///
    /// The widest width is kept.
    pub fn invalidate(&mut self) {
        self.text.clear();
    }

    /// The padded text currently on screen.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Widest text rendered so far; never decreases.
    pub fn max_width(&self) -> usize {
        self.max_width
    }
}
