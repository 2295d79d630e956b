//! Skill card: a checked title, a line of content, and a level bar.
//!
//! ```text
//! ✓ Rust
//!   Systems programming
//!   ■■■■□
//! ```

use crate::render::{Line, Span, SpanStyle, pad};
use crate::theme::SelectTheme;

/// Highest level a card can show.
pub const MAX_LEVEL: u8 = 5;

/// Columns taken by the check icon, and by the indent of the lines below it.
const ICON_WIDTH: u16 = 2;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillCard {
    pub title: String,
    pub content: String,
    pub level: u8,
}

impl SkillCard {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            level: 0,
        }
    }

    /// Set the level, clamped to [`MAX_LEVEL`].
    pub fn level(mut self, level: u8) -> Self {
        self.level = level.min(MAX_LEVEL);
        self
    }

    /// Render the card as three lines, each exactly `width` columns.
    pub fn render(&self, width: u16, theme: &SelectTheme) -> Vec<Line> {
        let icon_width = ICON_WIDTH.min(width) as usize;
        let body = width as usize - icon_width;

        let base = SpanStyle::new().bg(theme.surface);
        let check = base.fg(theme.selected).bold();
        let title = base.fg(theme.text).bold();
        let muted = base.fg(theme.muted);

        let indent = || Span::styled(pad("", icon_width), base);

        let filled = (self.level.min(MAX_LEVEL) as usize).min(body);
        let empty = MAX_LEVEL.saturating_sub(self.level) as usize;
        let empty = empty.min(body - filled);
        let bar = Line::new(vec![
            indent(),
            Span::styled("■".repeat(filled), base.fg(theme.selected)),
            Span::styled("□".repeat(empty), muted),
            Span::styled(pad("", body - filled - empty), base),
        ]);

        vec![
            Line::new(vec![
                Span::styled(pad("✓", icon_width), check),
                Span::styled(pad(&self.title, body), title),
            ]),
            Line::new(vec![indent(), Span::styled(pad(&self.content, body), muted)]),
            bar,
        ]
    }
}
