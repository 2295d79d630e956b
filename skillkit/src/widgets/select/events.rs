//! Event handling for the Select widget.

use log::debug;

use crate::event::{Event, EventResult, Key, Modifiers, MouseButton, PointerEvent};

use super::Select;

impl Select {
    /// Route an input event to the widget.
    ///
    /// Pointer presses are hit-tested against the current layout. Presses
    /// outside the widget are ignored here; closing on those is the job of
    /// the outside-click listener installed by [`Select::mount`]. Key events
    /// are expected only while the widget has focus.
    pub fn handle_event(&self, event: &Event) -> EventResult {
        match event {
            Event::Pointer(pointer) => self.on_pointer(pointer),
            Event::Key { key, modifiers } => self.on_key(*key, *modifiers),
            Event::Resize { .. } | Event::Quit => EventResult::Ignored,
        }
    }

    fn on_pointer(&self, pointer: &PointerEvent) -> EventResult {
        if pointer.button != MouseButton::Left {
            return EventResult::Ignored;
        }
        let Some(layout) = self.layout() else {
            return EventResult::Ignored;
        };

        if let Some(target) = layout.top_target_at(pointer.x, pointer.y) {
            debug!("Select {} top click on {:?}", self.id(), target);
            self.toggle_open(target);
            return EventResult::Consumed;
        }

        if let Some(row) = layout.row_at(pointer.x, pointer.y) {
            self.toggle_selection_id(&row.option_id);
            return EventResult::Consumed;
        }

        EventResult::Ignored
    }

    fn on_key(&self, key: Key, modifiers: Modifiers) -> EventResult {
        if modifiers.ctrl || modifiers.alt {
            return EventResult::Ignored;
        }

        if !self.is_open() {
            return match key {
                Key::Enter | Key::Down | Key::Char(' ') => {
                    self.open();
                    EventResult::Consumed
                }
                _ => EventResult::Ignored,
            };
        }

        match key {
            Key::Char(c) => {
                let mut query = self.query();
                query.push(c);
                self.filter_options(&query);
                EventResult::Consumed
            }
            Key::Backspace => {
                let mut query = self.query();
                if query.pop().is_some() {
                    self.filter_options(&query);
                }
                EventResult::Consumed
            }
            Key::Up => {
                self.move_active(-1);
                EventResult::Consumed
            }
            Key::Down => {
                self.move_active(1);
                EventResult::Consumed
            }
            Key::Home => {
                self.set_active_id(self.visible_options().first().map(|o| o.id.clone()));
                EventResult::Consumed
            }
            Key::End => {
                self.set_active_id(self.visible_options().last().map(|o| o.id.clone()));
                EventResult::Consumed
            }
            Key::Enter => {
                if let Some(id) = self.active_id() {
                    self.toggle_selection_id(&id);
                }
                EventResult::Consumed
            }
            Key::Escape => {
                self.close();
                EventResult::Consumed
            }
            _ => EventResult::Ignored,
        }
    }

    /// Move the highlight through the working list, clamping at both ends.
    /// With no highlighted visible option, any move lands on the first row.
    fn move_active(&self, delta: isize) {
        let visible = self.visible_options();
        if visible.is_empty() {
            return;
        }
        let current = self
            .active_id()
            .and_then(|id| visible.iter().position(|o| o.id == id));
        let next = match current {
            Some(index) => index
                .saturating_add_signed(delta)
                .min(visible.len() - 1),
            None => 0,
        };
        self.set_active_id(Some(visible[next].id.clone()));
    }
}
