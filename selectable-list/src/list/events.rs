//! Event handling for the selectable list.

use listdom::{closest_with_class, find_element, find_element_mut, Event, MouseButton};

use crate::events::EventResult;

use super::item;
use super::state::SelectableList;

impl<T: Clone> SelectableList<T> {
    /// Handle a pointer or input event aimed somewhere inside the list.
    ///
    /// - click: makes the item under the pointer current; a click on the
    ///   checkbox toggles it instead
    /// - double-click: makes the item current
    /// - mouse over / out: shows / hides the item's action panel
    /// - change: a checkbox was toggled elsewhere; reports the new selection
    ///
    /// Returns `Consumed` when the event landed on an item.
    pub fn handle_event(&mut self, event: &Event) -> EventResult {
        log::trace!("List '{}': handling {event:?}", self.container.id);

        match event {
            Event::Click {
                target: Some(target),
                button: MouseButton::Left,
                ..
            } => self.on_item_click(target),
            Event::DoubleClick {
                target: Some(target),
                ..
            } => self.on_item_double_click(target),
            Event::MouseOver { target } => self.on_item_hover(target, true),
            Event::MouseOut { target } => self.on_item_hover(target, false),
            Event::Change { target } => self.on_checkbox_change(target),
            _ => EventResult::Ignored,
        }
    }

    /// Id of the item that is or contains `target`.
    fn item_containing(&self, target: &str) -> Option<String> {
        let found = closest_with_class(&self.container, target, &self.options.item_class)?;
        // Only direct children of the container count as items
        self.item(&found.id).map(|el| el.id.clone())
    }

    fn is_checkbox(&self, target: &str) -> bool {
        find_element(&self.container, target).is_some_and(|el| el.is_checkbox())
    }

    fn on_item_click(&mut self, target: &str) -> EventResult {
        let Some(item_id) = self.item_containing(target) else {
            return EventResult::Ignored;
        };

        if self.is_checkbox(target) {
            // The click flips the checkbox, which then reports a change
            if let Some(checkbox) = find_element_mut(&mut self.container, target) {
                let checked = checkbox.is_checked();
                checkbox.set_checked(!checked);
            }
            return self.on_checkbox_change(target);
        }

        self.change_current_item(Some(item_id), true);
        EventResult::Consumed
    }

    fn on_item_double_click(&mut self, target: &str) -> EventResult {
        let Some(item_id) = self.item_containing(target) else {
            return EventResult::Ignored;
        };
        self.change_current_item(Some(item_id), true);
        EventResult::Consumed
    }

    fn on_item_hover(&mut self, target: &str, visible: bool) -> EventResult {
        let Some(item_id) = self.item_containing(target) else {
            return EventResult::Ignored;
        };

        let action_class = self.options.item_action_class.clone();
        if let Some(el) = self.item_mut(&item_id) {
            item::set_action_panels_visible(el, &action_class, visible);
        }
        EventResult::Consumed
    }

    fn on_checkbox_change(&mut self, target: &str) -> EventResult {
        if self.item_containing(target).is_none() || !self.is_checkbox(target) {
            return EventResult::Ignored;
        }
        self.fire_selection_changed();
        EventResult::Consumed
    }
}
