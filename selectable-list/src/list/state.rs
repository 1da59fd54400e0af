//! Selectable list state and operations.

use listdom::{find_element, Content, Element};

use crate::data_map::DataMap;
use crate::error::ListError;
use crate::events::{CurrentItem, ListEvent, ListEventKind, Listeners};
use crate::options::Options;
use crate::visual::VisualState;

use super::item;

/// A list of items with one current item and checkbox multi-select.
///
/// The list owns its container element; render it with
/// [`container`](Self::container). Every item in the container has exactly
/// one data entry, and at most one item is current at a time.
///
/// # Example
///
/// ```
/// use listdom::Element;
/// use selectable_list::{ListEventKind, Options, SelectableList};
///
/// let mut list = SelectableList::new(Element::col().id("spaces"), Options::default());
/// list.on(ListEventKind::ItemRemoved, |event| println!("removed: {event:?}"));
///
/// list.add_item(Element::row().id("s1").child(Element::text("Space 1")), "s1-data").unwrap();
/// list.set_current_item("s1");
/// list.remove_by_id("s1");
///
/// assert!(list.current_item().is_none());
/// assert!(list.is_empty());
/// ```
pub struct SelectableList<T> {
    pub(super) options: Options,
    pub(super) container: Element,
    data: DataMap<T>,
    current: Option<CurrentItem<T>>,
    listeners: Listeners<T>,
}

impl<T: Clone> SelectableList<T> {
    /// Create a list over `container`. Whatever the container held before is
    /// dropped; the list starts empty.
    pub fn new(mut container: Element, options: Options) -> Self {
        container.content = Content::Children(Vec::new());
        Self {
            options,
            container,
            data: DataMap::new(),
            current: None,
            listeners: Listeners::default(),
        }
    }

    /// Bind a handler for one kind of list event.
    pub fn on(&mut self, kind: ListEventKind, handler: impl FnMut(&ListEvent<T>) + 'static) {
        self.listeners.bind(kind, Box::new(handler));
    }

    // -------------------------------------------------------------------------
    // Items
    // -------------------------------------------------------------------------

    /// Append `item` and record `data` for it.
    ///
    /// The item is decorated with the item class, a leading checkbox (when
    /// selectable) and a hidden action panel (its last block child). Fails if
    /// the id is already used anywhere under the container.
    pub fn add_item(&mut self, mut item: Element, data: T) -> Result<(), ListError> {
        if self.data.contains(&item.id) || find_element(&self.container, &item.id).is_some() {
            return Err(ListError::DuplicateId { id: item.id });
        }
        if !item.is_block() {
            return Err(ListError::NotAContainer { id: item.id });
        }

        let container = &self.container;
        item::decorate(&mut item, &self.options, |id| {
            find_element(container, id).is_some()
        });
        log::debug!("List '{}': adding item '{}'", self.container.id, item.id);

        self.data.insert(item.id.clone(), data);
        self.container.append_child(item);
        Ok(())
    }

    /// Remove the item with `id` and its data.
    ///
    /// Clears the current item whether or not it was the one removed, then
    /// fires `itemRemoved`. Returns None, firing nothing, if no such item.
    pub fn remove_by_id(&mut self, id: &str) -> Option<Element> {
        let item = self.container.remove_child(id)?;
        self.data.remove(id);
        log::debug!("List '{}': removed item '{id}'", self.container.id);

        self.change_current_item(None, true);
        self.trigger(ListEvent::ItemRemoved { item: item.clone() });
        Some(item)
    }

    /// Drop every item and its data and clear the current item.
    pub fn clear(&mut self) {
        self.current = None;
        self.container.clear_children();
        self.data.clear();
        self.change_current_item(None, true);
    }

    // -------------------------------------------------------------------------
    // Selection
    // -------------------------------------------------------------------------

    /// Check or uncheck every checkbox.
    pub fn select(&mut self, checked: bool) {
        self.container
            .for_each_descendant_mut(&mut |el: &mut Element| {
                el.set_checked(checked);
            });
        self.fire_selection_changed();
    }

    /// Check or uncheck one item's checkbox. Returns false if the item does
    /// not exist or has no checkbox.
    pub fn set_item_checked(&mut self, id: &str, checked: bool) -> bool {
        let Some(checkbox) = self.item_mut(id).and_then(item::checkbox_mut) else {
            return false;
        };
        checkbox.set_checked(checked);
        self.fire_selection_changed();
        true
    }

    /// Data of every checked item, in list order.
    pub fn get_selected_data(&self) -> Vec<&T> {
        self.selected_items()
            .filter_map(|item| self.data.get(&item.id))
            .collect()
    }

    /// Ids of every checked item, in list order.
    pub fn selected_ids(&self) -> Vec<String> {
        self.selected_items().map(|item| item.id.clone()).collect()
    }

    pub fn is_checked(&self, id: &str) -> bool {
        self.item(id).is_some_and(item::is_checked)
    }

    /// Id of the checkbox injected into the item with `id`.
    pub fn checkbox_id(&self, id: &str) -> Option<&str> {
        let item = self.item(id)?;
        item.find_first(&|el: &Element| el.is_checkbox())
            .map(|el| el.id.as_str())
    }

    // -------------------------------------------------------------------------
    // Current item
    // -------------------------------------------------------------------------

    /// Make the item with `id` current, unchecking every checkbox.
    ///
    /// An unknown id clears the current item. Fires `currentItemChanged`
    /// when `notify` is set.
    pub fn set_current_item_by_id(&mut self, id: &str, notify: bool) {
        let target = self.item(id).map(|item| item.id.clone());
        if target.is_none() {
            log::debug!("List '{}': no item '{id}', clearing current item", self.container.id);
        }
        self.change_current_item(target, notify);
    }

    /// [`set_current_item_by_id`](Self::set_current_item_by_id) with notification.
    pub fn set_current_item(&mut self, id: &str) {
        self.set_current_item_by_id(id, true);
    }

    /// Make the first item current. No-op on an empty list.
    pub fn set_first_item_as_current(&mut self) {
        let first = self.container.child_elements().first().map(|el| el.id.clone());
        if let Some(first) = first {
            self.change_current_item(Some(first), true);
        }
    }

    pub fn current_item(&self) -> Option<&CurrentItem<T>> {
        self.current.as_ref()
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    /// Data of the last item in the list.
    pub fn last_item_data(&self) -> Option<&T> {
        let last = self.container.child_elements().last()?;
        self.data.get(&last.id)
    }

    pub fn len(&self) -> usize {
        self.container.child_elements().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn data_by_id(&self, id: &str) -> Option<&T> {
        self.data.get(id)
    }

    pub fn data(&self) -> &DataMap<T> {
        &self.data
    }

    pub fn item(&self, id: &str) -> Option<&Element> {
        self.container.child_elements().iter().find(|el| el.id == id)
    }

    /// Item ids in list order.
    pub fn item_ids(&self) -> impl Iterator<Item = &str> {
        self.container.child_elements().iter().map(|el| el.id.as_str())
    }

    pub fn container(&self) -> &Element {
        &self.container
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    // -------------------------------------------------------------------------
    // Internals shared with the event handlers
    // -------------------------------------------------------------------------

    pub(super) fn item_mut(&mut self, id: &str) -> Option<&mut Element> {
        self.container
            .child_elements_mut()?
            .iter_mut()
            .find(|el| el.id == id)
    }

    /// Set (or clear) the current item. Every checkbox is unchecked.
    pub(super) fn change_current_item(&mut self, id: Option<String>, notify: bool) {
        self.current = id.and_then(|id| {
            let data = self.data.get(&id)?.clone();
            Some(CurrentItem { id, data })
        });

        self.container
            .for_each_descendant_mut(&mut |el: &mut Element| {
                el.set_checked(false);
            });
        self.restyle();

        if notify {
            let event = ListEvent::CurrentItemChanged {
                current_item: self.current.clone(),
                selected_items: self.selected_ids(),
            };
            self.trigger(event);
        }
    }

    pub(super) fn fire_selection_changed(&mut self) {
        self.restyle();
        let event = ListEvent::SelectionChanged {
            selected_items: self.selected_ids(),
            current_item: self.current.clone(),
        };
        self.trigger(event);
    }

    fn items(&self) -> impl Iterator<Item = &Element> {
        let class = self.options.item_class.as_str();
        self.container
            .child_elements()
            .iter()
            .filter(move |el| el.has_class(class))
    }

    fn selected_items(&self) -> impl Iterator<Item = &Element> {
        self.items().filter(|el| item::is_checked(el))
    }

    /// Put every item in the visual state matching (current?, checked?).
    fn restyle(&mut self) {
        let current = self.current.as_ref().map(|c| c.id.as_str());
        let class = self.options.item_class.as_str();

        let Some(children) = self.container.child_elements_mut() else {
            return;
        };
        for el in children.iter_mut().filter(|el| el.has_class(class)) {
            let state = VisualState::new(current == Some(el.id.as_str()), item::is_checked(el));
            state.apply(el);
        }
    }

    fn trigger(&mut self, event: ListEvent<T>) {
        let count = self.listeners.trigger(&event);
        log::debug!(
            "List '{}': fired {} to {count} listener(s)",
            self.container.id,
            event.kind()
        );
    }
}
