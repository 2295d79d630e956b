//! Layout and rendering for the Select widget.
//!
//! The widget is one row tall while closed. Open, the top row turns into the
//! filter input and one row per visible option is drawn directly below.

use std::io::Write;

use log::trace;

use crate::error::Result;
use crate::layout::Rect;
use crate::render::{Line, Span, SpanStyle, draw_lines, pad};
use crate::theme::SelectTheme;

use super::row::OptionRow;
use super::state::TopTarget;
use super::Select;

/// Columns reserved for the dropdown arrow at the right of the top row.
pub const ARROW_WIDTH: u16 = 2;

/// Screen area of one option row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowLayout {
    pub option_id: String,
    pub area: Rect,
    pub aria_selected: bool,
}

/// Where each part of a placed select sits on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectLayout {
    /// Everything the widget covers; presses outside it are outside clicks
    pub area: Rect,
    /// The clickable top row
    pub top: Rect,
    /// Caption (closed) or filter input (open)
    pub field: Rect,
    pub arrow: Rect,
    /// Option panel, present while open
    pub panel: Option<Rect>,
    pub rows: Vec<RowLayout>,
    pub open: bool,
    pub aria_multiselectable: bool,
}

impl SelectLayout {
    /// Which top-area target, if any, covers `(x, y)`.
    pub fn top_target_at(&self, x: u16, y: u16) -> Option<TopTarget> {
        if !self.top.contains(x, y) {
            return None;
        }
        if self.arrow.contains(x, y) {
            Some(TopTarget::Arrow)
        } else if self.open {
            Some(TopTarget::FilterInput)
        } else {
            Some(TopTarget::Caption)
        }
    }

    /// The option row covering `(x, y)`.
    pub fn row_at(&self, x: u16, y: u16) -> Option<&RowLayout> {
        self.rows.iter().find(|row| row.area.contains(x, y))
    }
}

impl Select {
    /// Compute the layout for the current state and placement.
    ///
    /// Returns `None` until [`Select::place`] has been called.
    pub fn layout(&self) -> Option<SelectLayout> {
        let placement = self.placement()?;
        let top = Rect::new(placement.x, placement.y, placement.width, 1);
        let field_width = placement.width.saturating_sub(ARROW_WIDTH);
        let field = Rect::new(top.x, top.y, field_width, 1);
        let arrow = Rect::new(
            top.x.saturating_add(field_width),
            top.y,
            placement.width - field_width,
            1,
        );

        let open = self.is_open();
        let (panel, rows) = if open {
            let visible = self.visible_options();
            // Rows stop at the last screen row.
            let panel_y = top.y.saturating_add(1);
            let height = u16::try_from(visible.len())
                .unwrap_or(u16::MAX)
                .min(u16::MAX - panel_y);
            let rows: Vec<RowLayout> = visible
                .iter()
                .zip(0..height)
                .map(|(option, i)| RowLayout {
                    option_id: option.id.clone(),
                    area: top.row(i + 1),
                    aria_selected: self.is_selected(&option.id),
                })
                .collect();
            let panel = Rect::new(top.x, panel_y, placement.width, height);
            (Some(panel), rows)
        } else {
            (None, Vec::new())
        };

        let area = match panel {
            Some(panel) => top.union(panel),
            None => top,
        };

        Some(SelectLayout {
            area,
            top,
            field,
            arrow,
            panel,
            rows,
            open,
            aria_multiselectable: self.is_multi(),
        })
    }

    /// Area covered by the widget, if placed.
    pub fn bounds(&self) -> Option<Rect> {
        self.layout().map(|layout| layout.area)
    }

    /// Render the widget into lines, top row first.
    pub fn render(&self, theme: &SelectTheme) -> Vec<Line> {
        let Some(layout) = self.layout() else {
            return Vec::new();
        };
        let base = SpanStyle::new().fg(theme.text).bg(theme.surface);
        let muted = SpanStyle::new().fg(theme.muted).bg(theme.surface);

        let field_text = if layout.open {
            let query = self.query();
            if query.is_empty() {
                Span::styled(
                    pad(self.placeholder(), layout.field.width as usize),
                    muted.dim(),
                )
            } else {
                Span::styled(pad(&query, layout.field.width as usize), base)
            }
        } else {
            Span::styled(pad(self.caption(), layout.field.width as usize), base)
        };
        let arrow = if layout.open { " ▲" } else { " ▼" };
        let mut lines = vec![Line::new(vec![
            field_text,
            Span::styled(pad(arrow, layout.arrow.width as usize), muted),
        ])];

        if layout.open {
            let selection = self.selected();
            let active = self.active_id();
            for option in self.visible_options().iter().take(layout.rows.len()) {
                let row = OptionRow::new(option, self.is_multi(), &selection, active.as_deref());
                lines.push(row.render(layout.top.width, theme));
            }
        }

        trace!("Select {} rendered {} lines", self.id(), lines.len());
        lines
    }

    /// Render and queue the widget at its placement. Caller flushes.
    pub fn draw<W: Write>(&self, out: &mut W, theme: &SelectTheme) -> Result<()> {
        let Some(layout) = self.layout() else {
            return Ok(());
        };
        draw_lines(out, layout.top.x, layout.top.y, &self.render(theme))?;
        self.clear_dirty();
        Ok(())
    }
}
