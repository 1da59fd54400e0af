use crate::element::Element;
use crate::layout::LayoutResult;

/// Find the deepest visible element at the given coordinates.
///
/// Hidden elements and everything below them are skipped. Returns None if
/// nothing laid out contains the point.
pub fn hit_test(layout: &LayoutResult, root: &Element, x: u16, y: u16) -> Option<String> {
    hit_test_element(layout, root, x, y)
}

fn hit_test_element(layout: &LayoutResult, element: &Element, x: u16, y: u16) -> Option<String> {
    if element.hidden {
        return None;
    }

    let rect = layout.get(&element.id)?;
    if !rect.contains(x, y) {
        return None;
    }

    // Check children in reverse order (last rendered = on top)
    for child in element.child_elements().iter().rev() {
        if let Some(id) = hit_test_element(layout, child, x, y) {
            return Some(id);
        }
    }

    Some(element.id.clone())
}
