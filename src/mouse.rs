//! Mouse bindings for dragging and raising floating windows.

use crate::action::{Action, WindowCommand};
use crate::keys::Modifier;
use serde::{Deserialize, Serialize};

/// A pointer button as the host names it (`Button1` is the left button).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Button {
    Button1,
    Button2,
    Button3,
}

/// A mouse binding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MouseBinding {
    /// `start` runs on button press, `action` on every motion event after.
    Drag {
        modifiers: Vec<Modifier>,
        button: Button,
        action: Action,
        start: Action,
    },
    Click {
        modifiers: Vec<Modifier>,
        button: Button,
        action: Action,
    },
}

impl MouseBinding {
    pub fn button(&self) -> Button {
        match self {
            MouseBinding::Drag { button, .. } | MouseBinding::Click { button, .. } => *button,
        }
    }
}

/// Move floating windows with `m+Button1`, resize with `m+Button3`, raise
/// with `m+Button2`.
pub fn mouse_bindings(m: Modifier) -> Vec<MouseBinding> {
    vec![
        MouseBinding::Drag {
            modifiers: vec![m],
            button: Button::Button1,
            action: Action::Window(WindowCommand::SetPositionFloating),
            start: Action::Window(WindowCommand::GetPosition),
        },
        MouseBinding::Drag {
            modifiers: vec![m],
            button: Button::Button3,
            action: Action::Window(WindowCommand::SetSizeFloating),
            start: Action::Window(WindowCommand::GetSize),
        },
        MouseBinding::Click {
            modifiers: vec![m],
            button: Button::Button2,
            action: Action::Window(WindowCommand::BringToFront),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_binding_per_button() {
        let b = mouse_bindings(Modifier::Mod4);
        let buttons: Vec<Button> = b.iter().map(MouseBinding::button).collect();
        assert_eq!(buttons, vec![Button::Button1, Button::Button3, Button::Button2]);
    }

    #[test]
    fn resize_drag_starts_from_current_size() {
        let b = mouse_bindings(Modifier::Mod4);
        match &b[1] {
            MouseBinding::Drag { action, start, .. } => {
                assert_eq!(*action, Action::Window(WindowCommand::SetSizeFloating));
                assert_eq!(*start, Action::Window(WindowCommand::GetSize));
            }
            other => panic!("expected drag, got {:?}", other),
        }
    }

    #[test]
    fn click_serialises_with_type_tag() {
        let b = mouse_bindings(Modifier::Mod4);
        let v = serde_json::to_value(&b[2]).unwrap();
        assert_eq!(v["type"], "click");
        assert_eq!(v["button"], "Button2");
        assert_eq!(v["modifiers"][0], "mod4");
    }
}
