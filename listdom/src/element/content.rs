/// What an element holds.
///
/// `None` and `Children` are block elements (containers); `Text` and
/// `Checkbox` are leaves.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Content {
    #[default]
    None,
    Text(String),
    /// A checkbox input. Paints as `[x]` or `[ ]`.
    Checkbox { checked: bool },
    Children(Vec<super::Element>),
}

impl Content {
    pub fn is_block(&self) -> bool {
        matches!(self, Self::None | Self::Children(_))
    }
}
