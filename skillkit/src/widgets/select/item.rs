//! Option records and conversions into them.

use serde::{Deserialize, Serialize};

/// One selectable candidate: a unique id plus the text shown and matched.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SelectOption {
    pub id: String,
    pub value: String,
}

impl SelectOption {
    pub fn new(id: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            value: value.into(),
        }
    }
}

/// Trait for items that can be offered in a Select widget.
///
/// # Example
///
/// ```ignore
/// struct Skill {
///     slug: String,
///     name: String,
/// }
///
/// impl SelectItem for Skill {
///     fn select_id(&self) -> String {
///         self.slug.clone()
///     }
///
///     fn select_label(&self) -> String {
///         self.name.clone()
///     }
/// }
/// ```
pub trait SelectItem {
    /// Unique identifier for this item.
    fn select_id(&self) -> String;

    /// Display text; also what the filter input matches against.
    fn select_label(&self) -> String;

    fn to_option(&self) -> SelectOption {
        SelectOption::new(self.select_id(), self.select_label())
    }
}

impl SelectItem for SelectOption {
    fn select_id(&self) -> String {
        self.id.clone()
    }

    fn select_label(&self) -> String {
        self.value.clone()
    }

    fn to_option(&self) -> SelectOption {
        self.clone()
    }
}

// Label doubles as id
impl SelectItem for String {
    fn select_id(&self) -> String {
        self.clone()
    }

    fn select_label(&self) -> String {
        self.clone()
    }
}

impl SelectItem for &str {
    fn select_id(&self) -> String {
        (*self).to_string()
    }

    fn select_label(&self) -> String {
        (*self).to_string()
    }
}

// (id, label) tuples
impl<S1, S2> SelectItem for (S1, S2)
where
    S1: AsRef<str>,
    S2: AsRef<str>,
{
    fn select_id(&self) -> String {
        self.0.as_ref().to_string()
    }

    fn select_label(&self) -> String {
        self.1.as_ref().to_string()
    }
}

/// Collect any iterable of items into option records.
pub fn options_from<I, T>(items: I) -> Vec<SelectOption>
where
    I: IntoIterator<Item = T>,
    T: SelectItem,
{
    items.into_iter().map(|item| item.to_option()).collect()
}
