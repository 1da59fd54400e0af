//! List events and listener registry.
//!
//! The list fires three kinds of event. Page code binds handlers per kind
//! with [`SelectableList::on`](crate::SelectableList::on); handlers run
//! synchronously, in bind order, inside the operation that fired them.

use std::fmt;

use listdom::Element;

/// The current item: its id and a copy of its data.
#[derive(Debug, Clone, PartialEq)]
pub struct CurrentItem<T> {
    pub id: String,
    pub data: T,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListEventKind {
    CurrentItemChanged,
    SelectionChanged,
    ItemRemoved,
}

impl ListEventKind {
    pub fn name(self) -> &'static str {
        match self {
            Self::CurrentItemChanged => "currentItemChanged",
            Self::SelectionChanged => "selectionChanged",
            Self::ItemRemoved => "itemRemoved",
        }
    }
}

impl fmt::Display for ListEventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ListEvent<T> {
    /// The current item was set or cleared.
    CurrentItemChanged {
        current_item: Option<CurrentItem<T>>,
        /// Ids of checked items.
        selected_items: Vec<String>,
    },
    /// A checkbox changed, or every checkbox was set at once.
    SelectionChanged {
        selected_items: Vec<String>,
        current_item: Option<CurrentItem<T>>,
    },
    /// An item left the list.
    ItemRemoved { item: Element },
}

impl<T> ListEvent<T> {
    pub fn kind(&self) -> ListEventKind {
        match self {
            Self::CurrentItemChanged { .. } => ListEventKind::CurrentItemChanged,
            Self::SelectionChanged { .. } => ListEventKind::SelectionChanged,
            Self::ItemRemoved { .. } => ListEventKind::ItemRemoved,
        }
    }
}

/// Result of handling an interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Event was ignored, try other handlers.
    Ignored,
    /// Event was consumed, stop propagation.
    Consumed,
}

impl EventResult {
    pub fn is_handled(&self) -> bool {
        matches!(self, EventResult::Consumed)
    }
}

type Handler<T> = Box<dyn FnMut(&ListEvent<T>)>;

pub(crate) struct Listeners<T> {
    handlers: Vec<(ListEventKind, Handler<T>)>,
}

impl<T> Default for Listeners<T> {
    fn default() -> Self {
        Self {
            handlers: Vec::new(),
        }
    }
}

impl<T> Listeners<T> {
    pub(crate) fn bind(&mut self, kind: ListEventKind, handler: Handler<T>) {
        self.handlers.push((kind, handler));
    }

    /// Run every handler bound to the event's kind. Returns how many ran.
    pub(crate) fn trigger(&mut self, event: &ListEvent<T>) -> usize {
        let kind = event.kind();
        let mut count = 0;
        for (_, handler) in self.handlers.iter_mut().filter(|(k, _)| *k == kind) {
            handler(event);
            count += 1;
        }
        count
    }
}
