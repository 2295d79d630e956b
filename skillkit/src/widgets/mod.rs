pub mod select;
pub mod skill_card;

pub use select::{
    Mounted, OptionRow, Select, SelectId, SelectItem, SelectLayout, SelectOption, SelectProps,
    TopTarget, options_from,
};
pub use skill_card::SkillCard;
