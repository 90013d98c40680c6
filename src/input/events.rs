use serde::{Deserialize, Serialize};

/// Input events the session reacts to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum InputEvent {
    /// The footer link/button was clicked
    ButtonClick,
    /// Keyboard input anywhere on the page
    KeyPress {
        key: KeyCode,
        modifiers: KeyModifiers,
    },
    /// Pointer moved over the map viewport
    PointerEnterMap,
    /// Pointer left the map viewport
    PointerLeaveMap,
    /// The settings checkbox for the hotkey changed
    HotkeyToggled(bool),
}

impl InputEvent {
    /// Key press for a plain character with no modifiers
    pub fn key(c: char) -> Self {
        InputEvent::KeyPress {
            key: KeyCode::Char(c),
            modifiers: KeyModifiers::default(),
        }
    }
}

/// Keyboard key codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KeyCode {
    Char(char),
    Escape,
    Enter,
    /// Any other named key
    Other,
}

impl KeyCode {
    /// Maps a DOM `KeyboardEvent.key` value
    pub fn from_dom_key(key: &str) -> Self {
        let mut chars = key.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => KeyCode::Char(c),
            _ => match key {
                "Escape" => KeyCode::Escape,
                "Enter" => KeyCode::Enter,
                _ => KeyCode::Other,
            },
        }
    }

    pub fn as_char(&self) -> Option<char> {
        match self {
            KeyCode::Char(c) => Some(*c),
            _ => None,
        }
    }
}

/// Keyboard modifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct KeyModifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

/// Whether an event was handled. `Handled` also means the page should
/// suppress the event's default action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventHandled {
    Handled,
    NotHandled,
}

impl EventHandled {
    pub fn is_handled(&self) -> bool {
        matches!(self, EventHandled::Handled)
    }
}
