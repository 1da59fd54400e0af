//! Construction options.

use serde::{Deserialize, Serialize};

use crate::error::ListError;

pub const DEFAULT_ITEM_CLASS: &str = "dc-item";
pub const DEFAULT_ACTION_CLASS: &str = "dc-action-panel";

/// Options for a [`SelectableList`](crate::SelectableList).
///
/// Field names serialize in camelCase, so the JSON form is
/// `{"itemClass": "dc-item", "selectable": true, "itemActionClass": "dc-action-panel"}`.
/// Missing fields take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Options {
    /// Class added to every item.
    pub item_class: String,
    /// Whether items get a leading checkbox.
    pub selectable: bool,
    /// Class marking an item's action panel.
    pub item_action_class: String,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            item_class: DEFAULT_ITEM_CLASS.to_string(),
            selectable: true,
            item_action_class: DEFAULT_ACTION_CLASS.to_string(),
        }
    }
}

impl Options {
    pub fn from_json(json: &str) -> Result<Self, ListError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn item_class(mut self, class: impl Into<String>) -> Self {
        self.item_class = class.into();
        self
    }

    pub fn selectable(mut self, selectable: bool) -> Self {
        self.selectable = selectable;
        self
    }

    pub fn item_action_class(mut self, class: impl Into<String>) -> Self {
        self.item_action_class = class.into();
        self
    }
}
