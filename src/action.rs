//! Deferred actions bound to input events.
//!
//! An [`Action`] is a description of what the host should do when a key
//! chord or mouse button fires.  Nothing here executes anything: the host
//! interprets the action later, at dispatch time.
//!
//! On the wire each action is externally tagged by its category:
//!
//! ```json
//! {"Spawn":{"command":"alacritty"}}
//! {"Layout":"ShuffleLeft"}
//! {"Window":{"ToGroup":{"group":"DEV","switch_group":true}}}
//! {"Host":"ReloadConfig"}
//! ```

use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Cardinal direction used by focus, shuffle and grow commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// All directions in the order bindings are generated (h, l, j, k).
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Down,
        Direction::Up,
    ];

    /// The vi-style key bound to this direction.
    pub fn vi_key(self) -> &'static str {
        match self {
            Direction::Left => "h",
            Direction::Right => "l",
            Direction::Down => "j",
            Direction::Up => "k",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Left => write!(f, "left"),
            Direction::Right => write!(f, "right"),
            Direction::Up => write!(f, "up"),
            Direction::Down => write!(f, "down"),
        }
    }
}

/// Parse a direction string (case-insensitive).
fn parse_direction(s: &str) -> Option<Direction> {
    match s.trim().to_ascii_lowercase().as_str() {
        "left" | "h" => Some(Direction::Left),
        "right" | "l" => Some(Direction::Right),
        "up" | "k" => Some(Direction::Up),
        "down" | "j" => Some(Direction::Down),
        _ => None,
    }
}

impl<'de> Deserialize<'de> for Direction {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        parse_direction(&s).ok_or_else(|| DeError::custom(format!("invalid direction: {:?}", s)))
    }
}

/// Commands addressed to the current group's layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LayoutCommand {
    /// Move focus.
    Focus(Direction),
    /// Focus the next window in the layout.
    Next,
    /// Move the focused window within the layout.
    Shuffle(Direction),
    /// Grow the focused window.  At a screen edge this shrinks instead.
    Grow(Direction),
    /// Reset all window sizes.
    Normalize,
    /// Toggle between split and unsplit sides of the stack.
    ToggleSplit,
}

/// Commands addressed to the focused window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WindowCommand {
    Kill,
    /// Send the window to `group`, following it when `switch_group` is set.
    ToGroup { group: String, switch_group: bool },
    SetPositionFloating,
    SetSizeFloating,
    GetPosition,
    GetSize,
    BringToFront,
}

/// Commands addressed to the window manager itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum HostCommand {
    /// Cycle to the next layout in the configured order.
    NextLayout,
    ReloadConfig,
    Shutdown,
    /// Open the prompt widget to run a command.
    SpawnCmd,
    /// Show `group` on the current screen.
    GroupToScreen { group: String },
}

/// A deferred, host-interpreted action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    /// Launch an external program.
    Spawn { command: String },
    Layout(LayoutCommand),
    Window(WindowCommand),
    Host(HostCommand),
}

impl Action {
    pub fn spawn(command: impl Into<String>) -> Self {
        Action::Spawn {
            command: command.into(),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Spawn { command } => write!(f, "spawn({})", command),
            Action::Layout(cmd) => match cmd {
                LayoutCommand::Focus(d) => write!(f, "layout.{}()", d),
                LayoutCommand::Next => write!(f, "layout.next()"),
                LayoutCommand::Shuffle(d) => write!(f, "layout.shuffle_{}()", d),
                LayoutCommand::Grow(d) => write!(f, "layout.grow_{}()", d),
                LayoutCommand::Normalize => write!(f, "layout.normalize()"),
                LayoutCommand::ToggleSplit => write!(f, "layout.toggle_split()"),
            },
            Action::Window(cmd) => match cmd {
                WindowCommand::Kill => write!(f, "window.kill()"),
                WindowCommand::ToGroup {
                    group,
                    switch_group,
                } => write!(f, "window.togroup({}, switch_group={})", group, switch_group),
                WindowCommand::SetPositionFloating => write!(f, "window.set_position_floating()"),
                WindowCommand::SetSizeFloating => write!(f, "window.set_size_floating()"),
                WindowCommand::GetPosition => write!(f, "window.get_position()"),
                WindowCommand::GetSize => write!(f, "window.get_size()"),
                WindowCommand::BringToFront => write!(f, "window.bring_to_front()"),
            },
            Action::Host(cmd) => match cmd {
                HostCommand::NextLayout => write!(f, "next_layout()"),
                HostCommand::ReloadConfig => write!(f, "reload_config()"),
                HostCommand::Shutdown => write!(f, "shutdown()"),
                HostCommand::SpawnCmd => write!(f, "spawncmd()"),
                HostCommand::GroupToScreen { group } => write!(f, "group[{}].toscreen()", group),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_display() {
        assert_eq!(Direction::Left.to_string(), "left");
        assert_eq!(Direction::Right.to_string(), "right");
        assert_eq!(Direction::Up.to_string(), "up");
        assert_eq!(Direction::Down.to_string(), "down");
    }

    #[test]
    fn direction_deserialises_leniently() {
        let d: Direction = serde_json::from_str(r#""LEFT""#).unwrap();
        assert_eq!(d, Direction::Left);
        let d: Direction = serde_json::from_str(r#""j""#).unwrap();
        assert_eq!(d, Direction::Down);
        assert!(serde_json::from_str::<Direction>(r#""sideways""#).is_err());
    }

    #[test]
    fn vi_keys_are_hjkl() {
        let keys: Vec<&str> = Direction::ALL.iter().map(|d| d.vi_key()).collect();
        assert_eq!(keys, vec!["h", "l", "j", "k"]);
    }

    #[test]
    fn wire_format_is_tagged_by_category() {
        let a = Action::Layout(LayoutCommand::Shuffle(Direction::Left));
        assert_eq!(
            serde_json::to_string(&a).unwrap(),
            r#"{"Layout":{"Shuffle":"Left"}}"#
        );
        let a = Action::Host(HostCommand::ReloadConfig);
        assert_eq!(serde_json::to_string(&a).unwrap(), r#"{"Host":"ReloadConfig"}"#);
    }

    #[test]
    fn parse_to_group_from_json() {
        let json = r#"{"Window":{"ToGroup":{"group":"DEV","switch_group":true}}}"#;
        let a: Action = serde_json::from_str(json).unwrap();
        assert_eq!(
            a,
            Action::Window(WindowCommand::ToGroup {
                group: "DEV".into(),
                switch_group: true
            })
        );
    }

    #[test]
    fn display_reads_like_a_lazy_call() {
        assert_eq!(
            Action::Layout(LayoutCommand::Grow(Direction::Up)).to_string(),
            "layout.grow_up()"
        );
        assert_eq!(
            Action::Host(HostCommand::GroupToScreen { group: "WWW".into() }).to_string(),
            "group[WWW].toscreen()"
        );
        assert_eq!(Action::spawn("kitty").to_string(), "spawn(kitty)");
    }
}
