//! Rendering of a single option row.

use unicode_width::UnicodeWidthStr;

use crate::render::{Line, Span, SpanStyle, pad};
use crate::theme::SelectTheme;

use super::SelectOption;

/// One row in the open panel.
///
/// Holds only what is needed to draw the row; toggling goes back through
/// [`Select::toggle_selection`](super::Select::toggle_selection).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionRow<'a> {
    pub option: &'a SelectOption,
    pub multi: bool,
    pub selected: bool,
    pub active: bool,
}

impl<'a> OptionRow<'a> {
    pub fn new(
        option: &'a SelectOption,
        multi: bool,
        selection: &[SelectOption],
        active_id: Option<&str>,
    ) -> Self {
        Self {
            option,
            multi,
            selected: selection.iter().any(|o| o.id == option.id),
            active: active_id == Some(option.id.as_str()),
        }
    }

    fn marker(&self) -> &'static str {
        match (self.multi, self.selected) {
            (true, true) => "[x] ",
            (true, false) => "[ ] ",
            (false, true) => "(•) ",
            (false, false) => "( ) ",
        }
    }

    /// Render the row padded to exactly `width` columns.
    pub fn render(&self, width: u16, theme: &SelectTheme) -> Line {
        let width = width as usize;
        let marker = self.marker();
        let marker_width = marker.width().min(width);

        let mut style = SpanStyle::new().fg(theme.text).bg(theme.surface);
        if self.selected {
            style = style.fg(theme.selected).bold();
        }
        if self.active {
            style = style.bg(theme.active_background);
        }

        Line::new(vec![
            Span::styled(pad(marker, marker_width), style),
            Span::styled(pad(&self.option.value, width - marker_width), style),
        ])
    }
}
