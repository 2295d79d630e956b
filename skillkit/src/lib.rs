//! Small terminal widget kit.
//!
//! The centrepiece is [`Select`]: a dropdown with an inline prefix filter,
//! single or multi selection, and dismissal on presses outside its bounds.
//! [`SkillCard`] renders one chosen skill with its level.

pub mod error;
pub mod event;
pub mod layout;
pub mod outside_click;
pub mod pointer;
pub mod render;
pub mod theme;
pub mod widgets;

pub use error::{Error, Result};
pub use event::{Event, EventResult, Key, Modifiers, MouseButton, PointerEvent, convert_event};
pub use layout::Rect;
pub use outside_click::OutsideClick;
pub use pointer::{PointerHub, PointerListener, PointerSource, SubscriptionId};
pub use theme::{Rgb, SelectTheme};
pub use widgets::{
    Mounted, OptionRow, Select, SelectId, SelectItem, SelectLayout, SelectOption, SelectProps,
    SkillCard, TopTarget, options_from,
};
