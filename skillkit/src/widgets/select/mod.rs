//! Select widget - a dropdown with an inline prefix filter and single or
//! multi selection.

mod events;
pub mod filter;
pub mod item;
pub mod props;
pub mod render;
pub mod row;
mod state;

pub use item::{SelectItem, SelectOption, options_from};
pub use props::{OnChange, SelectProps};
pub use render::{RowLayout, SelectLayout};
pub use row::OptionRow;
pub use state::{Mounted, Select, SelectId, TopTarget};
