//! Mouse input translation.
//!
//! Terminals only report raw button presses and motion. `PointerState`
//! hit-tests each mouse event against the last layout and turns it into
//! targeted [`Event`]s, synthesizing double-clicks and over/out pairs.

use std::time::{Duration, Instant};

use crossterm::event::{MouseEvent, MouseEventKind};

use crate::element::Element;
use crate::event::{Event, MouseButton};
use crate::hit::hit_test;
use crate::layout::LayoutResult;

const DEFAULT_DOUBLE_CLICK: Duration = Duration::from_millis(400);

#[derive(Debug, Clone)]
pub struct PointerState {
    double_click_window: Duration,
    /// Target and time of the last left click that could start a double-click.
    last_click: Option<(String, Instant)>,
    /// Element currently under the pointer.
    hovered: Option<String>,
}

impl Default for PointerState {
    fn default() -> Self {
        Self::new()
    }
}

impl PointerState {
    pub fn new() -> Self {
        Self {
            double_click_window: DEFAULT_DOUBLE_CLICK,
            last_click: None,
            hovered: None,
        }
    }

    pub fn with_double_click_window(mut self, window: Duration) -> Self {
        self.double_click_window = window;
        self
    }

    pub fn hovered(&self) -> Option<&str> {
        self.hovered.as_deref()
    }

    pub fn translate(
        &mut self,
        mouse: &MouseEvent,
        root: &Element,
        layout: &LayoutResult,
    ) -> Vec<Event> {
        self.translate_at(mouse, root, layout, Instant::now())
    }

    /// Same as [`translate`](Self::translate) with an explicit clock.
    pub fn translate_at(
        &mut self,
        mouse: &MouseEvent,
        root: &Element,
        layout: &LayoutResult,
        now: Instant,
    ) -> Vec<Event> {
        let (x, y) = (mouse.column, mouse.row);
        let target = hit_test(layout, root, x, y);

        match mouse.kind {
            MouseEventKind::Down(button) => {
                let button = MouseButton::from(button);
                let mut events = vec![Event::Click {
                    target: target.clone(),
                    x,
                    y,
                    button,
                }];
                if button == MouseButton::Left {
                    if let Some(event) = self.register_click(target, x, y, now) {
                        events.push(event);
                    }
                }
                events
            }
            MouseEventKind::Moved | MouseEventKind::Drag(_) => self.move_to(target),
            _ => Vec::new(),
        }
    }

    fn register_click(
        &mut self,
        target: Option<String>,
        x: u16,
        y: u16,
        now: Instant,
    ) -> Option<Event> {
        let Some(target) = target else {
            self.last_click = None;
            return None;
        };

        let is_double = matches!(
            &self.last_click,
            Some((last, at)) if *last == target && now.duration_since(*at) <= self.double_click_window
        );

        if is_double {
            log::trace!("Double-click on '{target}'");
            self.last_click = None;
            Some(Event::DoubleClick {
                target: Some(target),
                x,
                y,
            })
        } else {
            self.last_click = Some((target, now));
            None
        }
    }

    fn move_to(&mut self, target: Option<String>) -> Vec<Event> {
        if target == self.hovered {
            return Vec::new();
        }

        let mut events = Vec::new();
        if let Some(old) = self.hovered.take() {
            events.push(Event::MouseOut { target: old });
        }
        if let Some(new) = &target {
            events.push(Event::MouseOver {
                target: new.clone(),
            });
        }
        self.hovered = target;
        events
    }
}
