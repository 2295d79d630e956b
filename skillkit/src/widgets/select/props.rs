//! Construction properties for a Select.

use std::sync::Arc;

use super::SelectOption;

/// Selection-change callback. Receives the selection as it is right after
/// the change, newest first in multi mode.
pub type OnChange = Arc<dyn Fn(Vec<SelectOption>) + Send + Sync>;

pub const DEFAULT_CAPTION: &str = "Select...";
pub const DEFAULT_PLACEHOLDER: &str = "Type to filter...";

/// Builder for [`Select`](super::Select).
///
/// # Example
///
/// ```ignore
/// let skills = Select::new(
///     SelectProps::new(options_from([("rs", "Rust"), ("go", "Go")]))
///         .multi(true)
///         .caption("Pick your skills")
///         .on_change(|selected| log::info!("{} skills", selected.len())),
/// );
/// ```
#[derive(Clone)]
pub struct SelectProps {
    pub(crate) multi: bool,
    pub(crate) options: Vec<SelectOption>,
    pub(crate) on_change: Option<OnChange>,
    pub(crate) caption: String,
    pub(crate) placeholder: String,
}

impl SelectProps {
    pub fn new(options: impl IntoIterator<Item = SelectOption>) -> Self {
        Self {
            multi: false,
            options: options.into_iter().collect(),
            on_change: None,
            caption: DEFAULT_CAPTION.into(),
            placeholder: DEFAULT_PLACEHOLDER.into(),
        }
    }

    /// Allow more than one option to be selected at once.
    pub fn multi(mut self, multi: bool) -> Self {
        self.multi = multi;
        self
    }

    /// Called with the current selection on construction and after every change.
    pub fn on_change<F>(mut self, f: F) -> Self
    where
        F: Fn(Vec<SelectOption>) + Send + Sync + 'static,
    {
        self.on_change = Some(Arc::new(f));
        self
    }

    /// Text shown in the top area while the panel is closed.
    pub fn caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = caption.into();
        self
    }

    /// Placeholder of the filter input while the panel is open.
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }
}

impl std::fmt::Debug for SelectProps {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SelectProps")
            .field("multi", &self.multi)
            .field("options", &self.options)
            .field("on_change", &self.on_change.is_some())
            .field("caption", &self.caption)
            .field("placeholder", &self.placeholder)
            .finish()
    }
}
