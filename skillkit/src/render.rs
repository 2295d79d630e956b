//! Styled text lines and drawing them through crossterm.

use std::io::Write;

use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::style::{Attribute, Print, SetAttribute, SetBackgroundColor, SetForegroundColor};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::error::Result;
use crate::theme::Rgb;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SpanStyle {
    pub fg: Option<Rgb>,
    pub bg: Option<Rgb>,
    pub bold: bool,
    pub dim: bool,
}

impl SpanStyle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fg(mut self, color: Rgb) -> Self {
        self.fg = Some(color);
        self
    }

    pub fn bg(mut self, color: Rgb) -> Self {
        self.bg = Some(color);
        self
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn dim(mut self) -> Self {
        self.dim = true;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub style: SpanStyle,
}

impl Span {
    pub fn styled(text: impl Into<String>, style: SpanStyle) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }

    pub fn width(&self) -> usize {
        self.text.width()
    }
}

/// One terminal row made of styled spans.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Line {
    pub spans: Vec<Span>,
}

impl Line {
    pub fn new(spans: Vec<Span>) -> Self {
        Self { spans }
    }

    pub fn width(&self) -> usize {
        self.spans.iter().map(Span::width).sum()
    }

    /// Concatenated text without styling.
    pub fn plain(&self) -> String {
        self.spans.iter().map(|s| s.text.as_str()).collect()
    }
}

/// Cut `text` to at most `max_width` display columns, ending with `…` when cut.
pub fn truncate(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > max_width - 1 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

/// Right-pad `text` with spaces to exactly `width` display columns.
/// Text wider than `width` is truncated first.
pub fn pad(text: &str, width: usize) -> String {
    let mut out = truncate(text, width);
    let used = out.width();
    out.extend(std::iter::repeat_n(' ', width.saturating_sub(used)));
    out
}

/// Queue `lines` at `(x, y)`, one per row. Caller flushes.
pub fn draw_lines<W: Write>(out: &mut W, x: u16, y: u16, lines: &[Line]) -> Result<()> {
    for (row, line) in lines.iter().enumerate() {
        queue!(out, MoveTo(x, y.saturating_add(row as u16)))?;
        for span in &line.spans {
            queue!(out, SetAttribute(Attribute::Reset))?;
            if let Some(fg) = span.style.fg {
                queue!(out, SetForegroundColor(fg.into()))?;
            }
            if let Some(bg) = span.style.bg {
                queue!(out, SetBackgroundColor(bg.into()))?;
            }
            if span.style.bold {
                queue!(out, SetAttribute(Attribute::Bold))?;
            }
            if span.style.dim {
                queue!(out, SetAttribute(Attribute::Dim))?;
            }
            queue!(out, Print(&span.text))?;
        }
        queue!(out, SetAttribute(Attribute::Reset))?;
    }
    Ok(())
}
