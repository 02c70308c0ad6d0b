//! Text display helpers

use std::borrow::Cow;

/// Characters shown before long text is collapsed.
pub const DEFAULT_SHOW_MORE_LIMIT: usize = 250;

const ELLIPSIS: &str = "...";

/// Collapsible block of vendor text.
///
/// Vendor text encodes line breaks as a literal `\n` sequence, so lines are
/// split on both the escaped and the real form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShowMore<'a> {
    text: &'a str,
    limit: usize,
}

impl<'a> ShowMore<'a> {
    /// Wrap `text` using [`DEFAULT_SHOW_MORE_LIMIT`].
    pub fn new(text: &'a str) -> Self {
        Self::with_limit(text, DEFAULT_SHOW_MORE_LIMIT)
    }

    /// Wrap `text`, collapsing after `limit` characters.
    pub fn with_limit(text: &'a str, limit: usize) -> Self {
        Self { text, limit }
    }

    /// Whether the text is long enough to offer a toggle.
    pub fn is_collapsible(&self) -> bool {
        self.text.chars().count() > self.limit
    }

    /// Text to display for the given toggle state.
    pub fn visible(&self, expanded: bool) -> Cow<'a, str> {
        if expanded || !self.is_collapsible() {
            return Cow::Borrowed(self.text);
        }

        let cut = self
            .text
            .char_indices()
            .nth(self.limit)
            .map_or(self.text.len(), |(index, _)| index);

        let head = self.text.get(..cut).unwrap_or(self.text);

        Cow::Owned(format!("{head}{ELLIPSIS}"))
    }

    /// Displayed lines for the given toggle state.
    pub fn lines(&self, expanded: bool) -> Vec<String> {
        self.visible(expanded)
            .replace("\\n", "\n")
            .split('\n')
            .map(str::to_string)
            .collect()
    }
}

/// Placeholder label for an empty section, e.g. `- Your cart is empty -`.
pub fn section_fallback(text: &str) -> String {
    format!("- {text} -")
}
