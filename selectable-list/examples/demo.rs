//! Interactive selectable list in the terminal.
//!
//! Click an item to make it current, click its checkbox to select it, hover
//! to reveal its actions. Keys: `a` select all, `n` select none, `f` first
//! item, `d` remove the current item, `c` clear, `q` quit.

use std::cell::RefCell;
use std::fs::File;
use std::rc::Rc;
use std::time::Duration;

use crossterm::event::Event as CtEvent;
use listdom::{Element, Event, Key, PointerState, Style, Terminal, Theme};
use log::LevelFilter;
use selectable_list::visual::default_theme;
use selectable_list::{ListEvent, ListEventKind, Options, SelectableList};
use simplelog::{Config, WriteLogger};

#[derive(Debug, Clone)]
struct Space {
    name: String,
    bytes: u64,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let log_file = File::create("selectable-list-demo.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)?;

    let options = Options::default();
    let theme = default_theme(&options).class("status", Style::new().dim());
    let mut list = SelectableList::new(Element::col().id("spaces"), options);

    for (i, (name, bytes)) in [
        ("photos", 48_213_004),
        ("backups", 1_204_889_310),
        ("invoices", 912_004),
        ("scratch", 0),
    ]
    .into_iter()
    .enumerate()
    {
        let item = Element::row()
            .id(format!("space-{i}"))
            .child(Element::text(name))
            .child(Element::text(format!("{bytes} bytes")))
            .child(Element::row().child(Element::text("[delete]")));
        list.add_item(
            item,
            Space {
                name: name.to_string(),
                bytes,
            },
        )?;
    }

    let status = Rc::new(RefCell::new(String::from("Ready")));
    bind_status(&mut list, &status);

    let mut term = Terminal::new()?;
    let mut pointer = PointerState::new();

    loop {
        let root = ui(&list, &status.borrow());
        term.render(&root, &theme)?;

        for raw in term.poll(Duration::from_millis(100))? {
            match &raw {
                CtEvent::Mouse(mouse) => {
                    for event in pointer.translate(mouse, &root, term.layout()) {
                        list.handle_event(&event);
                    }
                }
                other => {
                    if let Some(Event::Key {
                        key: Key::Char(c),
                        modifiers,
                    }) = Event::from_crossterm(other)
                    {
                        if !modifiers.none() {
                            continue;
                        }
                        match c {
                            'q' => return Ok(()),
                            'a' => list.select(true),
                            'n' => list.select(false),
                            'f' => list.set_first_item_as_current(),
                            'c' => list.clear(),
                            'd' => {
                                let current = list.current_item().map(|c| c.id.clone());
                                if let Some(id) = current {
                                    list.remove_by_id(&id);
                                }
                            }
                            _ => {}
                        }
                    }
                }
            }
        }
    }
}

fn bind_status(list: &mut SelectableList<Space>, status: &Rc<RefCell<String>>) {
    let sink = Rc::clone(status);
    list.on(ListEventKind::CurrentItemChanged, move |event| {
        if let ListEvent::CurrentItemChanged { current_item, .. } = event {
            *sink.borrow_mut() = match current_item {
                Some(current) => format!(
                    "Current: {} ({} bytes)",
                    current.data.name, current.data.bytes
                ),
                None => "No current item".to_string(),
            };
        }
    });

    let sink = Rc::clone(status);
    list.on(ListEventKind::SelectionChanged, move |event| {
        if let ListEvent::SelectionChanged { selected_items, .. } = event {
            *sink.borrow_mut() = format!("{} selected", selected_items.len());
        }
    });

    let sink = Rc::clone(status);
    list.on(ListEventKind::ItemRemoved, move |event| {
        if let ListEvent::ItemRemoved { item } = event {
            *sink.borrow_mut() = format!("Removed {}", item.id);
        }
    });
}

fn ui(list: &SelectableList<Space>, status: &str) -> Element {
    let total: u64 = list.get_selected_data().iter().map(|s| s.bytes).sum();

    Element::col()
        .id("root")
        .child(Element::text("Spaces").id("title"))
        .child(Element::text(""))
        .child(list.container().clone())
        .child(Element::text(""))
        .child(Element::text(format!("{status} · {total} bytes checked")).class("status"))
        .child(
            Element::text("a: all  n: none  f: first  d: delete current  c: clear  q: quit")
                .class("status"),
        )
}
