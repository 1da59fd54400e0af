use std::sync::atomic::{AtomicU64, Ordering};

use super::Content;

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

fn generate_id(prefix: &str) -> String {
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{id}")
}

/// Main axis for laying out children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    Row,
    #[default]
    Column,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    // Identity
    pub id: String,

    // Content
    pub content: Content,
    pub direction: Direction,

    // Style classes, in the order they were added. Never contains duplicates.
    pub classes: Vec<String>,

    /// Hidden elements keep their layout space but are neither painted nor hit.
    pub hidden: bool,
}

impl Default for Element {
    fn default() -> Self {
        Self {
            id: generate_id("el"),
            content: Content::None,
            direction: Direction::Column,
            classes: Vec::new(),
            hidden: false,
        }
    }
}

impl Element {
    pub fn box_() -> Self {
        Self {
            id: generate_id("box"),
            ..Default::default()
        }
    }

    pub fn col() -> Self {
        Self {
            id: generate_id("col"),
            direction: Direction::Column,
            ..Default::default()
        }
    }

    pub fn row() -> Self {
        Self {
            id: generate_id("row"),
            direction: Direction::Row,
            ..Default::default()
        }
    }

    pub fn text(content: impl Into<String>) -> Self {
        Self {
            id: generate_id("text"),
            content: Content::Text(content.into()),
            ..Default::default()
        }
    }

    pub fn checkbox(checked: bool) -> Self {
        Self {
            id: generate_id("checkbox"),
            content: Content::Checkbox { checked },
            ..Default::default()
        }
    }

    // Builders

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.add_class(class);
        self
    }

    pub fn hidden(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }

    pub fn child(mut self, child: Element) -> Self {
        self.append_child(child);
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = Element>) -> Self {
        for child in children {
            self.append_child(child);
        }
        self
    }

    // Kind

    pub fn is_block(&self) -> bool {
        self.content.is_block()
    }

    pub fn is_checkbox(&self) -> bool {
        matches!(self.content, Content::Checkbox { .. })
    }

    /// Checked state of a checkbox element. Always false for anything else.
    pub fn is_checked(&self) -> bool {
        matches!(self.content, Content::Checkbox { checked: true })
    }

    /// Set the checked state. Returns false if this is not a checkbox.
    pub fn set_checked(&mut self, value: bool) -> bool {
        match &mut self.content {
            Content::Checkbox { checked } => {
                *checked = value;
                true
            }
            _ => false,
        }
    }

    // Classes

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn add_class(&mut self, class: impl Into<String>) {
        let class = class.into();
        if !self.has_class(&class) {
            self.classes.push(class);
        }
    }

    pub fn remove_class(&mut self, class: &str) {
        self.classes.retain(|c| c != class);
    }

    pub fn remove_classes(&mut self, classes: &[&str]) {
        self.classes.retain(|c| !classes.contains(&c.as_str()));
    }

    /// Add the class when `on`, remove it otherwise.
    pub fn toggle_class(&mut self, class: &str, on: bool) {
        if on {
            self.add_class(class);
        } else {
            self.remove_class(class);
        }
    }

    // Children

    /// Direct children. Leaves and empty boxes have none.
    pub fn child_elements(&self) -> &[Element] {
        match &self.content {
            Content::Children(children) => children,
            _ => &[],
        }
    }

    /// Mutable access to the child list. An empty box is upgraded to an
    /// empty child list; leaves return `None`.
    pub fn child_elements_mut(&mut self) -> Option<&mut Vec<Element>> {
        if matches!(self.content, Content::None) {
            self.content = Content::Children(Vec::new());
        }
        match &mut self.content {
            Content::Children(children) => Some(children),
            _ => None,
        }
    }

    pub fn append_child(&mut self, child: Element) {
        let parent = self.id.clone();
        match self.child_elements_mut() {
            Some(children) => children.push(child),
            None => log::warn!("Ignoring child '{}' appended to leaf '{parent}'", child.id),
        }
    }

    pub fn prepend_child(&mut self, child: Element) {
        let parent = self.id.clone();
        match self.child_elements_mut() {
            Some(children) => children.insert(0, child),
            None => log::warn!("Ignoring child '{}' prepended to leaf '{parent}'", child.id),
        }
    }

    /// Remove the direct child with the given id.
    pub fn remove_child(&mut self, id: &str) -> Option<Element> {
        let Content::Children(children) = &mut self.content else {
            return None;
        };
        let index = children.iter().position(|c| c.id == id)?;
        Some(children.remove(index))
    }

    pub fn clear_children(&mut self) {
        if let Content::Children(children) = &mut self.content {
            children.clear();
        }
    }

    // Descendant queries (self excluded)

    /// First descendant, depth-first, matching the predicate.
    pub fn find_first<F: Fn(&Element) -> bool>(&self, pred: &F) -> Option<&Element> {
        for child in self.child_elements() {
            if pred(child) {
                return Some(child);
            }
            if let Some(found) = child.find_first(pred) {
                return Some(found);
            }
        }
        None
    }

    pub fn find_first_mut<F: Fn(&Element) -> bool>(&mut self, pred: &F) -> Option<&mut Element> {
        let Content::Children(children) = &mut self.content else {
            return None;
        };
        for child in children.iter_mut() {
            if pred(child) {
                return Some(child);
            }
            if let Some(found) = child.find_first_mut(pred) {
                return Some(found);
            }
        }
        None
    }

    /// Visit every descendant, depth-first.
    pub fn for_each_descendant_mut<F: FnMut(&mut Element)>(&mut self, f: &mut F) {
        if let Content::Children(children) = &mut self.content {
            for child in children.iter_mut() {
                f(child);
                child.for_each_descendant_mut(f);
            }
        }
    }
}
