mod content;
mod node;

pub use content::Content;
pub use node::{Direction, Element};

/// Find an element by ID in the tree.
pub fn find_element<'a>(root: &'a Element, id: &str) -> Option<&'a Element> {
    if root.id == id {
        return Some(root);
    }

    for child in root.child_elements() {
        if let Some(found) = find_element(child, id) {
            return Some(found);
        }
    }

    None
}

pub fn find_element_mut<'a>(root: &'a mut Element, id: &str) -> Option<&'a mut Element> {
    if root.id == id {
        return Some(root);
    }

    if let Content::Children(children) = &mut root.content {
        for child in children.iter_mut() {
            if let Some(found) = find_element_mut(child, id) {
                return Some(found);
            }
        }
    }

    None
}

/// Child indices leading from `root` to the element with `id`.
///
/// The root itself has an empty path.
pub fn find_path(root: &Element, id: &str) -> Option<Vec<usize>> {
    let mut path = Vec::new();
    if search_path(root, id, &mut path) {
        Some(path)
    } else {
        None
    }
}

fn search_path(element: &Element, id: &str, path: &mut Vec<usize>) -> bool {
    if element.id == id {
        return true;
    }

    for (index, child) in element.child_elements().iter().enumerate() {
        path.push(index);
        if search_path(child, id, path) {
            return true;
        }
        path.pop();
    }

    false
}

pub fn element_at_path<'a>(root: &'a Element, path: &[usize]) -> Option<&'a Element> {
    let mut current = root;
    for &index in path {
        current = current.child_elements().get(index)?;
    }
    Some(current)
}

/// Nearest element carrying `class`, starting at the element with `id` and
/// walking up through its ancestors.
pub fn closest_with_class<'a>(root: &'a Element, id: &str, class: &str) -> Option<&'a Element> {
    let path = find_path(root, id)?;

    (0..=path.len())
        .rev()
        .filter_map(|depth| element_at_path(root, &path[..depth]))
        .find(|element| element.has_class(class))
}
