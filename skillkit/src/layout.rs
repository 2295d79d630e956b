//! Cell-grid geometry shared by layout, hit testing and outside-click checks.

mod rect;

pub use rect::Rect;
