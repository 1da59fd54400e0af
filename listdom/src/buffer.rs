use crate::layout::Rect;
use crate::text::char_width;
use crate::theme::{Rgb, Style};

const DEFAULT_FG: Rgb = Rgb::new(220, 220, 220);
const DEFAULT_BG: Rgb = Rgb::new(0, 0, 0);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub char: char,
    pub fg: Rgb,
    pub bg: Rgb,
    pub bold: bool,
    pub dim: bool,
    /// Second column of a wide character; nothing is written here.
    pub wide_continuation: bool,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            char: ' ',
            fg: DEFAULT_FG,
            bg: DEFAULT_BG,
            bold: false,
            dim: false,
            wide_continuation: false,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Buffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl Buffer {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::default(); (width as usize) * (height as usize)],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        self.index(x, y).map(|i| &self.cells[i])
    }

    pub fn get_mut(&mut self, x: u16, y: u16) -> Option<&mut Cell> {
        self.index(x, y).map(|i| &mut self.cells[i])
    }

    fn index(&self, x: u16, y: u16) -> Option<usize> {
        (x < self.width && y < self.height)
            .then(|| (y as usize) * (self.width as usize) + (x as usize))
    }

    /// Paint the background of every cell in `rect`.
    pub fn fill_background(&mut self, rect: Rect, color: Rgb) {
        for y in rect.y..rect.bottom() {
            for x in rect.x..rect.right() {
                if let Some(cell) = self.get_mut(x, y) {
                    cell.bg = color;
                }
            }
        }
    }

    /// Write `text` starting at (x, y), never past `max_x`. Cells keep their
    /// background unless the style sets one.
    pub fn put_str(&mut self, x: u16, y: u16, max_x: u16, text: &str, style: &Style) {
        let mut cx = x;
        for ch in text.chars() {
            let w = char_width(ch) as u16;
            if w == 0 {
                continue;
            }
            if cx.saturating_add(w) > max_x {
                break;
            }
            self.put_char(cx, y, ch, style, false);
            if w == 2 {
                self.put_char(cx + 1, y, ' ', style, true);
            }
            cx += w;
        }
    }

    fn put_char(&mut self, x: u16, y: u16, ch: char, style: &Style, continuation: bool) {
        if let Some(cell) = self.get_mut(x, y) {
            cell.char = ch;
            cell.fg = style.foreground.unwrap_or(DEFAULT_FG);
            if let Some(bg) = style.background {
                cell.bg = bg;
            }
            cell.bold = style.bold;
            cell.dim = style.dim;
            cell.wide_continuation = continuation;
        }
    }

    /// Text of one row, without wide-character padding.
    pub fn row_text(&self, y: u16) -> String {
        (0..self.width)
            .filter_map(|x| self.get(x, y))
            .filter(|cell| !cell.wide_continuation)
            .map(|cell| cell.char)
            .collect()
    }

    pub fn diff<'a>(&'a self, other: &'a Buffer) -> impl Iterator<Item = (u16, u16, &'a Cell)> {
        let width = self.width as usize;
        self.cells
            .iter()
            .zip(other.cells.iter())
            .enumerate()
            .filter(|(_, (a, b))| a != b)
            .map(move |(i, (cell, _))| ((i % width) as u16, (i / width) as u16, cell))
    }

    pub fn clear(&mut self) {
        self.cells.fill(Cell::default());
    }
}
