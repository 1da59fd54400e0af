//! Per-item visual state.
//!
//! Every item is in exactly one of four states, picked by whether it is the
//! current item and whether its checkbox is checked. Each state but
//! `Unselected` maps to one style class; the classes are mutually exclusive.

use listdom::{Element, Rgb, Style, Theme};

use crate::options::Options;

pub const SELECTED_CLASS: &str = "dc-selected-list-item";
pub const CHECKED_CLASS: &str = "dc-checked-list-item";
pub const CHECKED_SELECTED_CLASS: &str = "dc-checked-selected-list-item";

const STATE_CLASSES: [&str; 3] = [SELECTED_CLASS, CHECKED_CLASS, CHECKED_SELECTED_CLASS];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VisualState {
    #[default]
    Unselected,
    /// Current item, checkbox unchecked.
    Selected,
    /// Not current, checkbox checked.
    Checked,
    /// Current item with its checkbox checked.
    CheckedSelected,
}

impl VisualState {
    pub fn new(current: bool, checked: bool) -> Self {
        match (current, checked) {
            (false, false) => Self::Unselected,
            (true, false) => Self::Selected,
            (false, true) => Self::Checked,
            (true, true) => Self::CheckedSelected,
        }
    }

    pub fn class(self) -> Option<&'static str> {
        match self {
            Self::Unselected => None,
            Self::Selected => Some(SELECTED_CLASS),
            Self::Checked => Some(CHECKED_CLASS),
            Self::CheckedSelected => Some(CHECKED_SELECTED_CLASS),
        }
    }

    /// Read the state back from an item's classes.
    pub fn of(item: &Element) -> Self {
        if item.has_class(CHECKED_SELECTED_CLASS) {
            Self::CheckedSelected
        } else if item.has_class(SELECTED_CLASS) {
            Self::Selected
        } else if item.has_class(CHECKED_CLASS) {
            Self::Checked
        } else {
            Self::Unselected
        }
    }

    /// Replace whatever state class the item had with this one.
    pub fn apply(self, item: &mut Element) {
        item.remove_classes(&STATE_CLASSES);
        if let Some(class) = self.class() {
            item.add_class(class);
        }
    }
}

/// Theme covering the item, state and action panel classes.
pub fn default_theme(options: &Options) -> Theme {
    let accent = Rgb::oklch(0.45, 0.12, 250.0);
    let checked = Rgb::oklch(0.35, 0.08, 150.0);
    let both = Rgb::oklch(0.5, 0.12, 180.0);

    Theme::new()
        .class(
            options.item_class.clone(),
            Style::new().foreground(Rgb::oklch(0.9, 0.01, 250.0)),
        )
        .class(SELECTED_CLASS, Style::new().background(accent).bold())
        .class(CHECKED_CLASS, Style::new().background(checked))
        .class(CHECKED_SELECTED_CLASS, Style::new().background(both).bold())
        .class(
            options.item_action_class.clone(),
            Style::new().foreground(Rgb::oklch(0.75, 0.15, 60.0)),
        )
}
