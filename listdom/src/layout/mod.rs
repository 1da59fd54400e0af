mod rect;

pub use rect::Rect;

use std::collections::HashMap;

use crate::element::{Content, Direction, Element};
use crate::text::display_width;

pub type LayoutResult = HashMap<String, Rect>;

/// Children of a row carrying this class are pushed to its right edge.
pub const FLOAT_RIGHT: &str = "float-r";

/// Columns between siblings in a row.
const ROW_GAP: u16 = 1;

/// Lay out the tree inside `available`.
///
/// The root takes the full available width and its measured height. Children
/// that fall outside their parent's rect are not laid out at all, so they are
/// never painted or hit.
pub fn layout(root: &Element, available: Rect) -> LayoutResult {
    let mut result = LayoutResult::new();
    let (_, height) = measure(root);
    let rect = Rect::new(
        available.x,
        available.y,
        available.width,
        height.min(available.height),
    );
    place(root, rect, &mut result);
    result
}

/// Intrinsic (width, height) of an element.
pub fn measure(element: &Element) -> (u16, u16) {
    match &element.content {
        Content::None => (0, 0),
        Content::Text(text) => (clamp_u16(display_width(text)), 1),
        Content::Checkbox { .. } => (3, 1),
        Content::Children(children) => {
            let sizes = children.iter().map(measure);
            match element.direction {
                Direction::Column => sizes.fold((0, 0), |(w, h), (cw, ch)| {
                    (w.max(cw), h.saturating_add(ch))
                }),
                Direction::Row => {
                    let gaps = ROW_GAP.saturating_mul(clamp_u16(children.len().saturating_sub(1)));
                    let (w, h) = sizes.fold((0u16, 0u16), |(w, h), (cw, ch)| {
                        (w.saturating_add(cw), h.max(ch))
                    });
                    (w.saturating_add(gaps), h)
                }
            }
        }
    }
}

fn place(element: &Element, rect: Rect, result: &mut LayoutResult) {
    result.insert(element.id.clone(), rect);

    let children = element.child_elements();
    if children.is_empty() {
        return;
    }

    match element.direction {
        Direction::Column => place_column(children, rect, result),
        Direction::Row => place_row(children, rect, result),
    }
}

fn place_column(children: &[Element], rect: Rect, result: &mut LayoutResult) {
    let mut y = rect.y;
    for child in children {
        if y >= rect.bottom() {
            break;
        }
        let (_, height) = measure(child);
        let height = height.min(rect.bottom() - y);
        place(child, Rect::new(rect.x, y, rect.width, height), result);
        y = y.saturating_add(height);
    }
}

fn place_row(children: &[Element], rect: Rect, result: &mut LayoutResult) {
    // Floats first, so flow children know where the free space ends
    let mut right = rect.right();
    for child in children.iter().filter(|c| c.has_class(FLOAT_RIGHT)) {
        let (width, _) = measure(child);
        let width = width.min(right - rect.x);
        right -= width;
        place(child, Rect::new(right, rect.y, width, rect.height), result);
        right = right.saturating_sub(ROW_GAP).max(rect.x);
    }

    let mut x = rect.x;
    for child in children.iter().filter(|c| !c.has_class(FLOAT_RIGHT)) {
        if x >= right {
            break;
        }
        let (width, _) = measure(child);
        let width = width.min(right - x);
        place(child, Rect::new(x, rect.y, width, rect.height), result);
        x = x.saturating_add(width).saturating_add(ROW_GAP);
    }
}

fn clamp_u16(value: usize) -> u16 {
    u16::try_from(value).unwrap_or(u16::MAX)
}
