pub mod buffer;
pub mod element;
pub mod event;
pub mod hit;
pub mod layout;
pub mod pointer;
pub mod render;
pub mod terminal;
pub mod text;
pub mod theme;

pub use buffer::{Buffer, Cell};
pub use element::{
    closest_with_class, element_at_path, find_element, find_element_mut, find_path, Content,
    Direction, Element,
};
pub use event::{Event, Key, Modifiers, MouseButton};
pub use hit::hit_test;
pub use layout::{layout, LayoutResult, Rect, FLOAT_RIGHT};
pub use pointer::PointerState;
pub use render::render_to_buffer;
pub use terminal::Terminal;
pub use theme::{Rgb, Style, Theme};
