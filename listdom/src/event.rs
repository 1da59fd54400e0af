/// High-level events with element targeting
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Mouse button pressed
    Click {
        target: Option<String>,
        x: u16,
        y: u16,
        button: MouseButton,
    },
    /// Second left click on the same element within the double-click window
    DoubleClick {
        target: Option<String>,
        x: u16,
        y: u16,
    },
    /// Pointer entered an element
    MouseOver { target: String },
    /// Pointer left an element
    MouseOut { target: String },
    /// An input's value changed (checkbox toggled)
    Change { target: String },
    /// Key press
    Key { key: Key, modifiers: Modifiers },
    /// Terminal resized
    Resize { width: u16, height: u16 },
}

impl Event {
    /// Id of the element the event is aimed at, if any.
    pub fn target(&self) -> Option<&str> {
        match self {
            Self::Click { target, .. } | Self::DoubleClick { target, .. } => target.as_deref(),
            Self::MouseOver { target } | Self::MouseOut { target } | Self::Change { target } => {
                Some(target.as_str())
            }
            Self::Key { .. } | Self::Resize { .. } => None,
        }
    }

    /// Convert a crossterm key or resize event. Mouse input goes through
    /// [`crate::PointerState`] instead, since it needs hit testing.
    pub fn from_crossterm(event: &crossterm::event::Event) -> Option<Self> {
        use crossterm::event::{Event as CtEvent, KeyEventKind};
        match event {
            CtEvent::Key(key) if key.kind != KeyEventKind::Release => Some(Self::Key {
                key: Key::from_code(key.code)?,
                modifiers: key.modifiers.into(),
            }),
            CtEvent::Resize(width, height) => Some(Self::Resize {
                width: *width,
                height: *height,
            }),
            _ => None,
        }
    }
}

/// Simplified key representation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Enter,
    Backspace,
    Delete,
    Tab,
    Escape,
    Up,
    Down,
    Home,
    End,
}

impl Key {
    pub fn from_code(code: crossterm::event::KeyCode) -> Option<Self> {
        use crossterm::event::KeyCode;
        let key = match code {
            KeyCode::Char(c) => Key::Char(c),
            KeyCode::Enter => Key::Enter,
            KeyCode::Backspace => Key::Backspace,
            KeyCode::Delete => Key::Delete,
            KeyCode::Tab => Key::Tab,
            KeyCode::Esc => Key::Escape,
            KeyCode::Up => Key::Up,
            KeyCode::Down => Key::Down,
            KeyCode::Home => Key::Home,
            KeyCode::End => Key::End,
            _ => return None,
        };
        Some(key)
    }
}

/// Key modifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
}

impl Modifiers {
    pub fn none(&self) -> bool {
        !self.shift && !self.ctrl && !self.alt
    }
}

impl From<crossterm::event::KeyModifiers> for Modifiers {
    fn from(mods: crossterm::event::KeyModifiers) -> Self {
        use crossterm::event::KeyModifiers;
        Self {
            shift: mods.contains(KeyModifiers::SHIFT),
            ctrl: mods.contains(KeyModifiers::CONTROL),
            alt: mods.contains(KeyModifiers::ALT),
        }
    }
}

/// Mouse button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

impl From<crossterm::event::MouseButton> for MouseButton {
    fn from(btn: crossterm::event::MouseButton) -> Self {
        use crossterm::event::MouseButton as CtBtn;
        match btn {
            CtBtn::Left => MouseButton::Left,
            CtBtn::Right => MouseButton::Right,
            CtBtn::Middle => MouseButton::Middle,
        }
    }
}
