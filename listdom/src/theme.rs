//! Class-based styling.
//!
//! Elements carry class names; a [`Theme`] maps each class to a [`Style`].
//! An element's style is its parent's style with every class style merged on
//! top, in class order.

use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Convert an OKLCH colour (lightness 0..1, chroma, hue in degrees).
    pub fn oklch(l: f32, c: f32, h: f32) -> Self {
        use palette::{IntoColor, Oklch, Srgb};

        let srgb: Srgb = Oklch::new(l, c, h).into_color();
        let (r, g, b) = srgb.into_format::<u8>().into_components();
        Self::new(r, g, b)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Style {
    pub foreground: Option<Rgb>,
    pub background: Option<Rgb>,
    pub bold: bool,
    pub dim: bool,
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn foreground(mut self, color: Rgb) -> Self {
        self.foreground = Some(color);
        self
    }

    pub fn background(mut self, color: Rgb) -> Self {
        self.background = Some(color);
        self
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn dim(mut self) -> Self {
        self.dim = true;
        self
    }

    /// `other` on top of `self`: colours it sets win, flags accumulate.
    pub fn merge(self, other: &Style) -> Style {
        Style {
            foreground: other.foreground.or(self.foreground),
            background: other.background.or(self.background),
            bold: self.bold || other.bold,
            dim: self.dim || other.dim,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Theme {
    classes: HashMap<String, Style>,
}

impl Theme {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn class(mut self, name: impl Into<String>, style: Style) -> Self {
        self.classes.insert(name.into(), style);
        self
    }

    pub fn style_for(&self, class: &str) -> Option<&Style> {
        self.classes.get(class)
    }

    /// Resolve the style for an element with the given classes.
    pub fn resolve<'a>(&self, inherited: Style, classes: impl IntoIterator<Item = &'a String>) -> Style {
        classes
            .into_iter()
            .filter_map(|class| self.style_for(class))
            .fold(inherited, |style, class_style| style.merge(class_style))
    }
}
