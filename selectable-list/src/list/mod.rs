//! The selectable list widget.
//!
//! - `state`: the list itself and its operations
//! - `item`: item decoration and item-level queries
//! - `events`: pointer and input handling

mod events;
mod item;
mod state;

pub use state::SelectableList;
