use crate::buffer::Buffer;
use crate::element::{Content, Element};
use crate::layout::LayoutResult;
use crate::text::truncate_to_width;
use crate::theme::{Style, Theme};

const CHECKED: &str = "[x]";
const UNCHECKED: &str = "[ ]";

/// Paint a laid-out tree into the buffer.
///
/// Hidden elements and elements missing from the layout are skipped along
/// with their subtrees.
pub fn render_to_buffer(root: &Element, layout: &LayoutResult, theme: &Theme, buf: &mut Buffer) {
    render_element(root, layout, theme, Style::default(), buf);
}

fn render_element(
    element: &Element,
    layout: &LayoutResult,
    theme: &Theme,
    inherited: Style,
    buf: &mut Buffer,
) {
    if element.hidden {
        return;
    }
    let Some(rect) = layout.get(&element.id) else {
        return;
    };
    if rect.is_empty() {
        return;
    }

    let style = theme.resolve(inherited, &element.classes);

    // Only paint the rect when one of this element's own classes sets a
    // background; inherited backgrounds are already painted by the parent.
    let own_background = element
        .classes
        .iter()
        .rev()
        .find_map(|class| theme.style_for(class).and_then(|s| s.background));
    if let Some(bg) = own_background {
        buf.fill_background(*rect, bg);
    }

    match &element.content {
        Content::None => {}
        Content::Text(text) => {
            let text = truncate_to_width(text, rect.width as usize);
            buf.put_str(rect.x, rect.y, rect.right(), &text, &style);
        }
        Content::Checkbox { checked } => {
            let indicator = if *checked { CHECKED } else { UNCHECKED };
            buf.put_str(rect.x, rect.y, rect.right(), indicator, &style);
        }
        Content::Children(children) => {
            for child in children {
                render_element(child, layout, theme, style, buf);
            }
        }
    }
}
