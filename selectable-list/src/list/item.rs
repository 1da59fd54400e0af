//! Item decoration and item-level queries.

use listdom::{find_element, Element, FLOAT_RIGHT};

use crate::options::Options;

/// A fresh checkbox whose generated id is not `taken` and not used inside
/// `item`.
fn unique_checkbox(item: &Element, taken: &impl Fn(&str) -> bool) -> Element {
    loop {
        let checkbox = Element::checkbox(false);
        if !taken(&checkbox.id) && find_element(item, &checkbox.id).is_none() {
            return checkbox;
        }
    }
}

/// Turn a plain element into a list item.
///
/// Adds the item class, prepends a checkbox when the list is selectable,
/// marks the last block child as the action panel and hides every action
/// panel. `taken` reports ids already used elsewhere in the list.
pub(super) fn decorate(item: &mut Element, options: &Options, taken: impl Fn(&str) -> bool) {
    item.add_class(options.item_class.clone());

    if options.selectable {
        let checkbox = unique_checkbox(item, &taken);
        item.prepend_child(checkbox);
    }

    let action_class = options.item_action_class.as_str();
    if let Some(children) = item.child_elements_mut() {
        if let Some(panel) = children.iter_mut().rev().find(|child| child.is_block()) {
            panel.add_class(FLOAT_RIGHT);
            panel.add_class(action_class);
        }
    }

    set_action_panels_visible(item, action_class, false);
}

pub(super) fn set_action_panels_visible(item: &mut Element, action_class: &str, visible: bool) {
    item.for_each_descendant_mut(&mut |el: &mut Element| {
        if el.has_class(action_class) {
            el.hidden = !visible;
        }
    });
}

/// Whether any checkbox inside the item is checked.
pub(super) fn is_checked(item: &Element) -> bool {
    item.find_first(&|el: &Element| el.is_checked()).is_some()
}

pub(super) fn checkbox_mut(item: &mut Element) -> Option<&mut Element> {
    item.find_first_mut(&|el: &Element| el.is_checkbox())
}
