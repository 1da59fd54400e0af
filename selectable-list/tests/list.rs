use std::cell::RefCell;
use std::rc::Rc;

use listdom::{Content, Element, FLOAT_RIGHT};
use selectable_list::visual::{CHECKED_CLASS, CHECKED_SELECTED_CLASS, SELECTED_CLASS};
use selectable_list::{
    CurrentItem, ListError, ListEvent, ListEventKind, Options, SelectableList, VisualState,
};

#[derive(Debug, Clone, PartialEq)]
struct Data {
    v: i32,
}

fn item(id: &str) -> Element {
    Element::row()
        .id(id)
        .child(Element::text(format!("Item {id}")))
        .child(Element::row().id(format!("{id}-panel")).child(Element::text("delete")))
}

fn list_with(ids: &[&str]) -> SelectableList<Data> {
    let mut list = SelectableList::new(Element::col().id("list"), Options::default());
    for (i, id) in ids.iter().enumerate() {
        list.add_item(item(id), Data { v: i as i32 + 1 }).unwrap();
    }
    list
}

fn record(list: &mut SelectableList<Data>) -> Rc<RefCell<Vec<ListEvent<Data>>>> {
    let events = Rc::new(RefCell::new(Vec::new()));
    for kind in [
        ListEventKind::CurrentItemChanged,
        ListEventKind::SelectionChanged,
        ListEventKind::ItemRemoved,
    ] {
        let sink = Rc::clone(&events);
        list.on(kind, move |event| sink.borrow_mut().push(event.clone()));
    }
    events
}

fn kinds(events: &Rc<RefCell<Vec<ListEvent<Data>>>>) -> Vec<ListEventKind> {
    events.borrow().iter().map(|e| e.kind()).collect()
}

fn data_values(list: &SelectableList<Data>) -> Vec<i32> {
    list.get_selected_data().iter().map(|d| d.v).collect()
}

// ============================================================================
// Adding Items
// ============================================================================

#[test]
fn test_add_item_decorates() {
    let list = list_with(&["a"]);
    let a = list.item("a").unwrap();

    assert!(a.has_class("dc-item"));

    // Checkbox is prepended
    let first = &a.child_elements()[0];
    assert_eq!(first.content, Content::Checkbox { checked: false });
    assert_eq!(list.checkbox_id("a"), Some(first.id.as_str()));

    // Last block child becomes the hidden action panel
    let panel = a.child_elements().last().unwrap();
    assert_eq!(panel.id, "a-panel");
    assert!(panel.has_class("dc-action-panel"));
    assert!(panel.has_class(FLOAT_RIGHT));
    assert!(panel.hidden);
}

#[test]
fn test_add_item_not_selectable_has_no_checkbox() {
    let mut list = SelectableList::new(Element::col(), Options::default().selectable(false));
    list.add_item(item("a"), Data { v: 1 }).unwrap();

    let a = list.item("a").unwrap();
    assert!(a.find_first(&|el: &Element| el.is_checkbox()).is_none());
    assert!(!list.set_item_checked("a", true));
}

#[test]
fn test_add_item_custom_classes() {
    let options = Options::default()
        .item_class("row-item")
        .item_action_class("tools");
    let mut list = SelectableList::new(Element::col(), options);
    list.add_item(item("a"), Data { v: 1 }).unwrap();

    let a = list.item("a").unwrap();
    assert!(a.has_class("row-item"));
    assert!(!a.has_class("dc-item"));
    assert!(a.child_elements().last().unwrap().has_class("tools"));
}

#[test]
fn test_add_item_without_panel() {
    let mut list = SelectableList::new(Element::col(), Options::default());
    list.add_item(Element::row().id("a").child(Element::text("plain")), Data { v: 1 })
        .unwrap();

    let a = list.item("a").unwrap();
    assert!(a.child_elements().iter().all(|el| !el.has_class("dc-action-panel")));
}

#[test]
fn test_add_duplicate_id_rejected() {
    let mut list = list_with(&["a"]);
    let err = list.add_item(item("a"), Data { v: 9 }).unwrap_err();

    assert!(matches!(err, ListError::DuplicateId { ref id } if id == "a"));
    assert_eq!(list.len(), 1);
    assert_eq!(list.data_by_id("a"), Some(&Data { v: 1 }));
}

#[test]
fn test_add_id_used_inside_list_rejected() {
    let mut list = list_with(&["a"]);
    let checkbox = list.checkbox_id("a").unwrap().to_string();

    for id in [checkbox.as_str(), "a-panel", "list"] {
        let err = list.add_item(item(id), Data { v: 9 }).unwrap_err();
        assert!(matches!(err, ListError::DuplicateId { id: ref taken } if taken == id));
    }
    assert_eq!(list.item_ids().collect::<Vec<_>>(), vec!["a"]);
    assert_eq!(list.data().len(), 1);
}

#[test]
fn test_checkbox_id_never_matches_an_item_id() {
    let mut list = list_with(&["a-checkbox", "a"]);
    let checkboxes = [list.checkbox_id("a-checkbox"), list.checkbox_id("a")];

    for checkbox in checkboxes {
        let checkbox = checkbox.unwrap();
        assert!(list.item(checkbox).is_none());
    }
    assert_ne!(list.checkbox_id("a"), list.checkbox_id("a-checkbox"));
}

fn count_ids(root: &Element, id: &str) -> usize {
    let own = usize::from(root.id == id);
    own + root
        .child_elements()
        .iter()
        .map(|child| count_ids(child, id))
        .sum::<usize>()
}

#[test]
fn test_checkbox_skips_ids_already_in_the_list() {
    // Claim the ids the checkbox generator is about to hand out
    let next: u64 = Element::checkbox(false)
        .id
        .trim_start_matches("checkbox-")
        .parse()
        .unwrap();
    let mut taken = Element::row().id("taken");
    for n in next..next + 64 {
        taken.append_child(Element::text("x").id(format!("checkbox-{n}")));
    }

    let mut list = list_with(&[]);
    list.add_item(taken, Data { v: 1 }).unwrap();
    list.add_item(item("b"), Data { v: 2 }).unwrap();

    for id in ["taken", "b"] {
        let checkbox = list.checkbox_id(id).unwrap().to_string();
        assert_eq!(count_ids(list.container(), &checkbox), 1);
    }
}

#[test]
fn test_add_leaf_rejected() {
    let mut list = list_with(&[]);
    let err = list
        .add_item(Element::text("leaf").id("leaf"), Data { v: 1 })
        .unwrap_err();

    assert!(matches!(err, ListError::NotAContainer { .. }));
    assert!(list.is_empty());
    assert!(list.data().is_empty());
}

#[test]
fn test_new_drops_existing_children() {
    let container = Element::col().id("c").child(Element::text("stale"));
    let list: SelectableList<Data> = SelectableList::new(container, Options::default());
    assert_eq!(list.len(), 0);
}

// ============================================================================
// Data Map
// ============================================================================

#[test]
fn test_data_map_tracks_items() {
    let mut list = list_with(&["a", "b", "c"]);
    list.remove_by_id("b");
    list.add_item(item("d"), Data { v: 4 }).unwrap();
    list.remove_by_id("a");

    let items: Vec<_> = list.item_ids().collect();
    let keys: Vec<_> = list.data().keys().collect();
    assert_eq!(items, vec!["c", "d"]);
    assert_eq!(keys, items);
}

#[test]
fn test_last_item_data() {
    let mut list = list_with(&[]);
    assert_eq!(list.last_item_data(), None);

    list.add_item(item("a"), Data { v: 1 }).unwrap();
    list.add_item(item("b"), Data { v: 2 }).unwrap();
    assert_eq!(list.last_item_data(), Some(&Data { v: 2 }));

    list.remove_by_id("b");
    assert_eq!(list.last_item_data(), Some(&Data { v: 1 }));
}

// ============================================================================
// Selection
// ============================================================================

#[test]
fn test_select_all_and_none() {
    let mut list = list_with(&["a", "b", "c"]);

    list.select(true);
    assert_eq!(data_values(&list), vec![1, 2, 3]);
    assert_eq!(list.selected_ids(), vec!["a", "b", "c"]);

    list.select(false);
    assert!(list.get_selected_data().is_empty());
}

#[test]
fn test_select_none_fires_selection_changed() {
    let mut list = list_with(&["a", "b"]);
    list.select(true);
    let events = record(&mut list);

    list.select(false);

    assert_eq!(kinds(&events), vec![ListEventKind::SelectionChanged]);
    assert_eq!(
        events.borrow()[0],
        ListEvent::SelectionChanged {
            selected_items: Vec::new(),
            current_item: None,
        }
    );
}

#[test]
fn test_select_then_remove() {
    let mut list = list_with(&["a", "b"]);
    list.select(true);
    assert_eq!(list.get_selected_data(), vec![&Data { v: 1 }, &Data { v: 2 }]);

    list.remove_by_id("a");
    assert_eq!(list.get_selected_data(), vec![&Data { v: 2 }]);
}

#[test]
fn test_select_fires_selection_changed() {
    let mut list = list_with(&["a", "b"]);
    list.set_current_item_by_id("b", false);
    let events = record(&mut list);

    list.select(true);

    let events = events.borrow();
    assert_eq!(events.len(), 1);
    assert_eq!(
        events[0],
        ListEvent::SelectionChanged {
            selected_items: vec!["a".into(), "b".into()],
            current_item: Some(CurrentItem {
                id: "b".into(),
                data: Data { v: 2 },
            }),
        }
    );
}

#[test]
fn test_set_item_checked() {
    let mut list = list_with(&["a", "b"]);
    let events = record(&mut list);

    assert!(list.set_item_checked("b", true));
    assert!(list.is_checked("b"));
    assert!(!list.is_checked("a"));
    assert_eq!(data_values(&list), vec![2]);
    assert!(!list.set_item_checked("missing", true));

    assert_eq!(kinds(&events), vec![ListEventKind::SelectionChanged]);
}

// ============================================================================
// Current Item
// ============================================================================

#[test]
fn test_set_current_item_by_id() {
    let mut list = list_with(&["a", "b"]);
    let events = record(&mut list);

    list.set_current_item("b");

    assert_eq!(
        list.current_item(),
        Some(&CurrentItem {
            id: "b".into(),
            data: Data { v: 2 },
        })
    );
    assert_eq!(
        events.borrow().as_slice(),
        &[ListEvent::CurrentItemChanged {
            current_item: Some(CurrentItem {
                id: "b".into(),
                data: Data { v: 2 },
            }),
            selected_items: vec![],
        }]
    );
}

#[test]
fn test_set_current_item_silently() {
    let mut list = list_with(&["a"]);
    let events = record(&mut list);

    list.set_current_item_by_id("a", false);

    assert_eq!(list.current_item().map(|c| c.id.as_str()), Some("a"));
    assert!(events.borrow().is_empty());
}

#[test]
fn test_set_current_item_clears_checkboxes() {
    let mut list = list_with(&["a", "b"]);
    list.select(true);

    list.set_current_item("a");

    assert!(list.get_selected_data().is_empty());
}

#[test]
fn test_set_current_unknown_id_clears() {
    let mut list = list_with(&["a"]);
    list.set_current_item("a");
    let events = record(&mut list);

    list.set_current_item("zzz");

    assert!(list.current_item().is_none());
    assert_eq!(kinds(&events), vec![ListEventKind::CurrentItemChanged]);
}

#[test]
fn test_set_first_item_as_current() {
    let mut list = list_with(&["a", "b"]);
    let events = record(&mut list);

    list.set_first_item_as_current();

    assert_eq!(list.current_item().map(|c| c.data.v), Some(1));
    assert_eq!(kinds(&events), vec![ListEventKind::CurrentItemChanged]);
}

#[test]
fn test_set_first_item_on_empty_list_is_noop() {
    let mut list = list_with(&[]);
    let events = record(&mut list);

    list.set_first_item_as_current();

    assert!(list.current_item().is_none());
    assert!(events.borrow().is_empty());
}

// ============================================================================
// Visual State
// ============================================================================

fn state_of(list: &SelectableList<Data>, id: &str) -> VisualState {
    VisualState::of(list.item(id).unwrap())
}

#[test]
fn test_visual_states() {
    let mut list = list_with(&["a", "b", "c"]);

    list.set_current_item("b");
    assert_eq!(state_of(&list, "a"), VisualState::Unselected);
    assert_eq!(state_of(&list, "b"), VisualState::Selected);

    list.set_item_checked("b", true);
    list.set_item_checked("c", true);
    assert_eq!(state_of(&list, "a"), VisualState::Unselected);
    assert_eq!(state_of(&list, "b"), VisualState::CheckedSelected);
    assert_eq!(state_of(&list, "c"), VisualState::Checked);

    let b = list.item("b").unwrap();
    assert!(b.has_class(CHECKED_SELECTED_CLASS));
    assert!(!b.has_class(SELECTED_CLASS));
    assert!(!b.has_class(CHECKED_CLASS));
}

#[test]
fn test_visual_states_without_current_item() {
    let mut list = list_with(&["a", "b"]);
    list.set_item_checked("a", true);

    assert_eq!(state_of(&list, "a"), VisualState::Checked);
    assert_eq!(state_of(&list, "b"), VisualState::Unselected);

    list.select(false);
    assert_eq!(state_of(&list, "a"), VisualState::Unselected);
}

#[test]
fn test_at_most_one_current() {
    let mut list = list_with(&["a", "b", "c"]);
    list.set_current_item("a");
    list.set_current_item("c");

    let current: Vec<_> = ["a", "b", "c"]
        .into_iter()
        .filter(|id| {
            matches!(
                state_of(&list, id),
                VisualState::Selected | VisualState::CheckedSelected
            )
        })
        .collect();
    assert_eq!(current, vec!["c"]);
}

// ============================================================================
// Removal
// ============================================================================

#[test]
fn test_remove_current_item() {
    let mut list = list_with(&["a", "b"]);
    list.set_current_item("a");
    let events = record(&mut list);

    let removed = list.remove_by_id("a").map(|el| el.id);

    assert_eq!(removed.as_deref(), Some("a"));
    assert!(list.current_item().is_none());
    assert_eq!(
        kinds(&events),
        vec![ListEventKind::CurrentItemChanged, ListEventKind::ItemRemoved]
    );

    let events = events.borrow();
    let ListEvent::ItemRemoved { item } = &events[1] else {
        panic!("expected itemRemoved, got {:?}", events[1]);
    };
    assert_eq!(item.id, "a");
}

#[test]
fn test_remove_other_item_still_clears_current() {
    let mut list = list_with(&["a", "b"]);
    list.set_current_item("a");

    list.remove_by_id("b");

    assert!(list.current_item().is_none());
    assert_eq!(state_of(&list, "a"), VisualState::Unselected);
}

#[test]
fn test_remove_unknown_id() {
    let mut list = list_with(&["a"]);
    list.set_current_item("a");
    let events = record(&mut list);

    assert!(list.remove_by_id("nope").is_none());

    assert!(events.borrow().is_empty());
    assert!(list.current_item().is_some());
    assert_eq!(list.len(), 1);
}

// ============================================================================
// Clear
// ============================================================================

#[test]
fn test_clear() {
    let mut list = list_with(&["a", "b"]);
    list.set_current_item("a");
    let events = record(&mut list);

    list.clear();

    assert_eq!(list.len(), 0);
    assert!(list.is_empty());
    assert!(list.current_item().is_none());
    assert!(list.data().is_empty());
    assert_eq!(list.last_item_data(), None);
    assert_eq!(
        events.borrow().as_slice(),
        &[ListEvent::CurrentItemChanged {
            current_item: None,
            selected_items: vec![],
        }]
    );
}

#[test]
fn test_listeners_only_get_their_kind() {
    let mut list = list_with(&["a"]);
    let removed = Rc::new(RefCell::new(0));
    let sink = Rc::clone(&removed);
    list.on(ListEventKind::ItemRemoved, move |_| *sink.borrow_mut() += 1);

    list.set_current_item("a");
    list.select(true);
    list.remove_by_id("a");

    assert_eq!(*removed.borrow(), 1);
}
