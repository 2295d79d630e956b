//! Select widget state.

use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

use log::debug;

use crate::error::{Error, Result};
use crate::outside_click::OutsideClick;
use crate::pointer::PointerSource;

use super::SelectOption;
use super::filter::filter_prefix;
use super::props::{OnChange, SelectProps};

/// Unique identifier for a Select widget instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SelectId(usize);

impl SelectId {
    fn new() -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

impl std::fmt::Display for SelectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "__select_{}", self.0)
    }
}

/// What part of the top area received a click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TopTarget {
    /// The caption text (panel closed)
    Caption,
    /// The dropdown arrow
    Arrow,
    /// The inline filter input (panel open). Never toggles the panel.
    FilterInput,
}

/// Where the widget was last placed on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Placement {
    pub x: u16,
    pub y: u16,
    pub width: u16,
}

#[derive(Debug, Default)]
struct SelectInner {
    /// Full caller-supplied list, never filtered
    options: Vec<SelectOption>,
    /// Working list shown in the panel
    visible: Vec<SelectOption>,
    /// Selection, newest first
    selected: Vec<SelectOption>,
    /// Last option interacted with
    active_id: Option<String>,
    /// Text in the filter input
    query: String,
    placement: Option<Placement>,
}

/// A dropdown select with an inline filter and single or multi selection.
///
/// `Select` is a handle: clones share the same state, so a clone can be
/// captured by event listeners (see [`Select::mount`]).
///
/// # Example
///
/// ```ignore
/// let fruit = Select::new(
///     SelectProps::new(options_from([("1", "Apple"), ("2", "Banana")]))
///         .caption("Favourite fruit"),
/// );
/// let _mounted = fruit.mount(Arc::new(hub.clone()));
///
/// fruit.toggle_open(TopTarget::Caption);
/// fruit.filter_options("ap");
/// fruit.toggle_selection(&SelectOption::new("1", "Apple"));
/// assert_eq!(fruit.selected()[0].id, "1");
/// ```
#[derive(Clone)]
pub struct Select {
    id: SelectId,
    multi: bool,
    caption: Arc<str>,
    placeholder: Arc<str>,
    on_change: Option<OnChange>,
    inner: Arc<RwLock<SelectInner>>,
    /// Dirty flag for re-render
    dirty: Arc<AtomicBool>,
    is_open: Arc<AtomicBool>,
}

impl Select {
    /// Create a select. Duplicate option ids are not checked; see
    /// [`Select::try_new`].
    ///
    /// `on_change` is invoked once here with the empty initial selection.
    pub fn new(props: SelectProps) -> Self {
        let select = Self {
            id: SelectId::new(),
            multi: props.multi,
            caption: props.caption.into(),
            placeholder: props.placeholder.into(),
            on_change: props.on_change,
            inner: Arc::new(RwLock::new(SelectInner {
                visible: props.options.clone(),
                options: props.options,
                ..Default::default()
            })),
            dirty: Arc::new(AtomicBool::new(true)),
            is_open: Arc::new(AtomicBool::new(false)),
        };

        debug!(
            "Select::new id={} multi={} options={}",
            select.id,
            select.multi,
            select.options().len()
        );

        select.notify(Vec::new());
        select
    }

    /// Create a select, rejecting option lists with repeated ids.
    pub fn try_new(props: SelectProps) -> Result<Self> {
        let duplicate = {
            let mut seen = HashSet::new();
            props
                .options
                .iter()
                .find(|o| !seen.insert(o.id.as_str()))
                .map(|o| o.id.clone())
        };
        match duplicate {
            Some(id) => Err(Error::DuplicateOptionId(id)),
            None => Ok(Self::new(props)),
        }
    }

    pub fn id(&self) -> SelectId {
        self.id
    }

    pub fn is_multi(&self) -> bool {
        self.multi
    }

    pub fn caption(&self) -> &str {
        &self.caption
    }

    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    // -------------------------------------------------------------------------
    // Open/close state
    // -------------------------------------------------------------------------

    pub fn is_open(&self) -> bool {
        self.is_open.load(Ordering::SeqCst)
    }

    /// Open the panel, showing the full option list.
    pub fn open(&self) {
        self.reset_working_list();
        if !self.is_open.swap(true, Ordering::SeqCst) {
            debug!("Select {} opened", self.id);
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Close the panel. No-op when already closed.
    pub fn close(&self) {
        if self.is_open.swap(false, Ordering::SeqCst) {
            debug!("Select {} closed", self.id);
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Handle a click on the top area.
    ///
    /// The working list is reset to the full list on every click. The panel
    /// flips open/closed unless the click landed in the filter input, so
    /// clicking into the input while typing keeps it open.
    pub fn toggle_open(&self, target: TopTarget) {
        self.reset_working_list();
        if target == TopTarget::FilterInput {
            return;
        }
        if self.is_open() {
            self.close();
        } else {
            self.open();
        }
    }

    fn reset_working_list(&self) {
        if let Ok(mut guard) = self.inner.write() {
            guard.visible = guard.options.clone();
            guard.query.clear();
        }
        self.dirty.store(true, Ordering::SeqCst);
    }

    // -------------------------------------------------------------------------
    // Options and filtering
    // -------------------------------------------------------------------------

    /// The full option list as supplied.
    pub fn options(&self) -> Vec<SelectOption> {
        self.inner
            .read()
            .map(|guard| guard.options.clone())
            .unwrap_or_default()
    }

    /// The working list: options matching the current filter query.
    pub fn visible_options(&self) -> Vec<SelectOption> {
        self.inner
            .read()
            .map(|guard| guard.visible.clone())
            .unwrap_or_default()
    }

    /// Current filter query.
    pub fn query(&self) -> String {
        self.inner
            .read()
            .map(|guard| guard.query.clone())
            .unwrap_or_default()
    }

    /// Narrow the working list to options whose value starts with `query`,
    /// ignoring case. The full list and the selection are left alone.
    pub fn filter_options(&self, query: &str) {
        if let Ok(mut guard) = self.inner.write() {
            guard.visible = filter_prefix(&guard.options, query);
            guard.query = query.to_string();
            debug!(
                "Select {} filter {:?} -> {} of {}",
                self.id,
                query,
                guard.visible.len(),
                guard.options.len()
            );
        }
        self.dirty.store(true, Ordering::SeqCst);
    }

    /// Replace the full option list.
    ///
    /// Selected options whose id disappeared are dropped; the rest pick up
    /// the new record. Resets the working list and notifies if the selection
    /// changed.
    pub fn set_options(&self, options: impl IntoIterator<Item = SelectOption>) {
        let options: Vec<SelectOption> = options.into_iter().collect();
        let changed = {
            let Ok(mut guard) = self.inner.write() else {
                return;
            };
            let kept: Vec<SelectOption> = guard
                .selected
                .iter()
                .filter_map(|sel| options.iter().find(|o| o.id == sel.id).cloned())
                .collect();
            let changed = (kept != guard.selected).then(|| kept.clone());
            guard.selected = kept;
            guard.visible = options.clone();
            guard.options = options;
            guard.query.clear();
            changed
        };
        self.dirty.store(true, Ordering::SeqCst);
        if let Some(selection) = changed {
            self.notify(selection);
        }
    }

    // -------------------------------------------------------------------------
    // Selection
    // -------------------------------------------------------------------------

    /// Current selection, newest first.
    pub fn selected(&self) -> Vec<SelectOption> {
        self.inner
            .read()
            .map(|guard| guard.selected.clone())
            .unwrap_or_default()
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.inner
            .read()
            .map(|guard| guard.selected.iter().any(|o| o.id == id))
            .unwrap_or(false)
    }

    /// Id of the option last interacted with.
    pub fn active_id(&self) -> Option<String> {
        self.inner
            .read()
            .map(|guard| guard.active_id.clone())
            .unwrap_or(None)
    }

    /// Toggle `option` in the selection.
    ///
    /// Multi mode adds it at the front or removes it if already selected.
    /// Single mode makes it the only selected option. Options not in the
    /// working list are ignored. Returns whether the selection was touched.
    pub fn toggle_selection(&self, option: &SelectOption) -> bool {
        self.toggle_selection_id(&option.id)
    }

    pub(crate) fn toggle_selection_id(&self, id: &str) -> bool {
        let selection = {
            let Ok(mut guard) = self.inner.write() else {
                return false;
            };
            let Some(record) = guard.visible.iter().find(|o| o.id == id).cloned() else {
                debug!("Select {} ignoring toggle of unlisted option {:?}", self.id, id);
                return false;
            };

            guard.active_id = Some(record.id.clone());
            if self.multi {
                match guard.selected.iter().position(|o| o.id == record.id) {
                    Some(pos) => {
                        guard.selected.remove(pos);
                    }
                    None => guard.selected.insert(0, record),
                }
            } else {
                guard.selected = vec![record];
            }
            guard.selected.clone()
        };

        debug!(
            "Select {} toggled {:?}, {} selected",
            self.id,
            id,
            selection.len()
        );
        self.dirty.store(true, Ordering::SeqCst);
        self.notify(selection);
        true
    }

    /// Empty the selection, notifying if anything was selected.
    pub fn clear_selection(&self) {
        let was_empty = {
            let Ok(mut guard) = self.inner.write() else {
                return;
            };
            let was_empty = guard.selected.is_empty();
            guard.selected.clear();
            was_empty
        };
        if !was_empty {
            self.dirty.store(true, Ordering::SeqCst);
            self.notify(Vec::new());
        }
    }

    pub(crate) fn set_active_id(&self, id: Option<String>) {
        if let Ok(mut guard) = self.inner.write() {
            guard.active_id = id;
        }
        self.dirty.store(true, Ordering::SeqCst);
    }

    fn notify(&self, selection: Vec<SelectOption>) {
        if let Some(ref on_change) = self.on_change {
            on_change(selection);
        }
    }

    // -------------------------------------------------------------------------
    // Placement and mounting
    // -------------------------------------------------------------------------

    /// Place the widget's top-left corner at `(x, y)` with the given width.
    /// Hit testing and outside-click bounds follow the latest placement.
    pub fn place(&self, x: u16, y: u16, width: u16) {
        if let Ok(mut guard) = self.inner.write() {
            let placement = Some(Placement { x, y, width });
            if guard.placement != placement {
                guard.placement = placement;
                self.dirty.store(true, Ordering::SeqCst);
            }
        }
    }

    pub(crate) fn placement(&self) -> Option<Placement> {
        self.inner.read().map(|guard| guard.placement).unwrap_or(None)
    }

    /// Start listening for presses outside the widget; such a press closes
    /// the panel. Dropping the returned guard stops listening.
    pub fn mount(&self, source: Arc<dyn PointerSource>) -> Mounted {
        let bounds_of = self.clone();
        let closer = self.clone();
        let outside = OutsideClick::new(
            source,
            move || bounds_of.bounds(),
            move |event| {
                if closer.is_open() {
                    debug!(
                        "Select {} closing on outside press at ({}, {})",
                        closer.id, event.x, event.y
                    );
                }
                closer.close();
            },
        );
        debug!("Select {} mounted", self.id);
        Mounted {
            select: self.id,
            _outside: outside,
        }
    }

    // -------------------------------------------------------------------------
    // Dirty tracking
    // -------------------------------------------------------------------------

    pub fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::SeqCst)
    }

    pub fn clear_dirty(&self) {
        self.dirty.store(false, Ordering::SeqCst);
    }
}

impl std::fmt::Debug for Select {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Select")
            .field("id", &self.id)
            .field("multi", &self.multi)
            .field("open", &self.is_open())
            .field("selected", &self.selected())
            .finish()
    }
}

/// A mounted select. Dropping it unmounts the outside-click listener.
#[derive(Debug)]
pub struct Mounted {
    select: SelectId,
    _outside: OutsideClick,
}

impl Drop for Mounted {
    fn drop(&mut self) {
        debug!("Select {} unmounted", self.select);
    }
}
