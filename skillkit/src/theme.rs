//! Colour theme for the select widget.
//!
//! Themes are plain data so hosts can load them from config files:
//!
//! ```json
//! { "selected": { "r": 120, "g": 200, "b": 140 }, "active_background": { "r": 50, "g": 50, "b": 70 } }
//! ```
//!
//! Missing fields fall back to [`SelectTheme::dark`].

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl From<Rgb> for crossterm::style::Color {
    fn from(c: Rgb) -> Self {
        crossterm::style::Color::Rgb {
            r: c.r,
            g: c.g,
            b: c.b,
        }
    }
}

/// Named colours used when rendering a select.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectTheme {
    /// Regular option and caption text
    pub text: Rgb,
    /// Placeholder text and the dropdown arrow
    pub muted: Rgb,
    /// Foreground of selected options
    pub selected: Rgb,
    /// Background of the active (last touched) option
    pub active_background: Rgb,
    /// Background of the whole widget
    pub surface: Rgb,
}

impl SelectTheme {
    pub fn dark() -> Self {
        Self {
            text: Rgb::new(225, 225, 232),
            muted: Rgb::new(140, 140, 155),
            selected: Rgb::new(120, 200, 140),
            active_background: Rgb::new(55, 58, 80),
            surface: Rgb::new(30, 31, 40),
        }
    }

    pub fn light() -> Self {
        Self {
            text: Rgb::new(30, 30, 36),
            muted: Rgb::new(110, 110, 120),
            selected: Rgb::new(20, 120, 60),
            active_background: Rgb::new(215, 222, 245),
            surface: Rgb::new(250, 250, 252),
        }
    }
}

impl Default for SelectTheme {
    fn default() -> Self {
        Self::dark()
    }
}
