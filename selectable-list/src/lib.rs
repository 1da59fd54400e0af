//! A selectable list widget on top of `listdom`.
//!
//! The list owns a container element whose direct children are items. Each
//! item gets the item class, an optional leading checkbox, and a hidden
//! action panel that is revealed on hover. The list tracks one current item,
//! any number of checked items, and one data value per item, and tells bound
//! listeners when any of that changes.
//!
//! # Example
//!
//! ```
//! use listdom::Element;
//! use selectable_list::{Options, SelectableList};
//!
//! let mut list = SelectableList::new(Element::col().id("files"), Options::default());
//! list.add_item(Element::row().id("a").child(Element::text("a.txt")), 1).unwrap();
//! list.add_item(Element::row().id("b").child(Element::text("b.txt")), 2).unwrap();
//!
//! list.select(true);
//! assert_eq!(list.get_selected_data(), vec![&1, &2]);
//!
//! list.set_current_item("b");
//! assert_eq!(list.current_item().map(|c| c.data), Some(2));
//! ```

pub mod data_map;
pub mod error;
pub mod events;
pub mod list;
pub mod options;
pub mod visual;

pub use data_map::DataMap;
pub use error::ListError;
pub use events::{CurrentItem, EventResult, ListEvent, ListEventKind};
pub use list::SelectableList;
pub use options::Options;
pub use visual::VisualState;
