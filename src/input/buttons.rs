//! Button mapping for keyboard hosts
//!
//! The handheld has an A button (draw) and a B button (show all). On a
//! keyboard A/B map directly; Z/X cover the usual emulator positions, and
//! Space/Enter/Tab are offered as convenience keys.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// The game's two logical buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    /// Draw the next number / return to the current-number screen
    Primary,
    /// Show every number drawn so far
    Secondary,
}

/// What a key press means to a host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostInput {
    Press(Button),
    /// Leave the host; the game itself never ends
    Quit,
}

impl HostInput {
    /// Convert a Windows virtual key code
    pub fn from_vk_code(vk_code: u32) -> Option<Self> {
        match vk_code {
            0x41 => Some(HostInput::Press(Button::Primary)), // A
            0x5a => Some(HostInput::Press(Button::Primary)), // Z
            0x20 => Some(HostInput::Press(Button::Primary)), // VK_SPACE
            0x0d => Some(HostInput::Press(Button::Primary)), // VK_RETURN

            0x42 => Some(HostInput::Press(Button::Secondary)), // B
            0x58 => Some(HostInput::Press(Button::Secondary)), // X
            0x09 => Some(HostInput::Press(Button::Secondary)), // VK_TAB

            0x1b => Some(HostInput::Quit), // VK_ESCAPE
            0x51 => Some(HostInput::Quit), // Q

            _ => None,
        }
    }

    /// Convert a terminal key event; releases and repeats are ignored
    pub fn from_key_event(event: &KeyEvent) -> Option<Self> {
        if event.kind != KeyEventKind::Press {
            return None;
        }

        if event.modifiers.contains(KeyModifiers::CONTROL) {
            return match event.code {
                KeyCode::Char('c') | KeyCode::Char('C') => Some(HostInput::Quit),
                _ => None,
            };
        }

        match event.code {
            KeyCode::Char(c) => match c.to_ascii_lowercase() {
                'a' | 'z' | ' ' => Some(HostInput::Press(Button::Primary)),
                'b' | 'x' => Some(HostInput::Press(Button::Secondary)),
                'q' => Some(HostInput::Quit),
                _ => None,
            },
            KeyCode::Enter => Some(HostInput::Press(Button::Primary)),
            KeyCode::Tab => Some(HostInput::Press(Button::Secondary)),
            KeyCode::Esc => Some(HostInput::Quit),
            _ => None,
        }
    }
}
