//! Key-binding table.
//!
//! [`build_keys`] returns the static bindings followed by two bindings per
//! group, keyed to the group's 1-based position.

use crate::action::{Action, Direction, HostCommand, LayoutCommand, WindowCommand};
use crate::group::Group;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// A keyboard modifier as the host names it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Modifier {
    /// Super / logo key.
    Mod4,
    /// Alt.
    Mod1,
    Shift,
    Control,
}

impl fmt::Display for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Modifier::Mod4 => write!(f, "mod4"),
            Modifier::Mod1 => write!(f, "mod1"),
            Modifier::Shift => write!(f, "shift"),
            Modifier::Control => write!(f, "control"),
        }
    }
}

/// One key binding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Key {
    pub modifiers: Vec<Modifier>,
    pub key: String,
    pub action: Action,
    pub desc: String,
}

impl Key {
    pub fn new(
        modifiers: &[Modifier],
        key: impl Into<String>,
        action: Action,
        desc: impl Into<String>,
    ) -> Self {
        Self {
            modifiers: modifiers.to_vec(),
            key: key.into(),
            action,
            desc: desc.into(),
        }
    }

    /// The (modifier set, key) pair the host dispatches on.
    ///
    /// Modifier order does not matter to the host, so the set is sorted.
    pub fn chord(&self) -> (Vec<Modifier>, String) {
        let mut mods = self.modifiers.clone();
        mods.sort();
        mods.dedup();
        (mods, self.key.clone())
    }
}

fn focus_desc(d: Direction) -> String {
    match d {
        Direction::Left | Direction::Right => format!("Move focus to {}", d),
        Direction::Up | Direction::Down => format!("Move focus {}", d),
    }
}

fn shuffle_desc(d: Direction) -> String {
    match d {
        Direction::Left | Direction::Right => format!("Move window to the {}", d),
        Direction::Up | Direction::Down => format!("Move window {}", d),
    }
}

fn grow_desc(d: Direction) -> String {
    match d {
        Direction::Left | Direction::Right => format!("Grow window to the {}", d),
        Direction::Up | Direction::Down => format!("Grow window {}", d),
    }
}

/// Bindings that do not depend on the group list.
pub fn static_keys(m: Modifier, terminal: &str) -> Vec<Key> {
    let mut keys = Vec::new();

    // Switch between windows
    for d in Direction::ALL {
        keys.push(Key::new(
            &[m],
            d.vi_key(),
            Action::Layout(LayoutCommand::Focus(d)),
            focus_desc(d),
        ));
    }
    keys.push(Key::new(
        &[m],
        "space",
        Action::Layout(LayoutCommand::Next),
        "Move window focus to other window",
    ));

    // Moving out of range in the columns layout creates a new column.
    for d in Direction::ALL {
        keys.push(Key::new(
            &[m, Modifier::Shift],
            d.vi_key(),
            Action::Layout(LayoutCommand::Shuffle(d)),
            shuffle_desc(d),
        ));
    }

    for d in Direction::ALL {
        keys.push(Key::new(
            &[m, Modifier::Control],
            d.vi_key(),
            Action::Layout(LayoutCommand::Grow(d)),
            grow_desc(d),
        ));
    }
    keys.push(Key::new(
        &[m],
        "n",
        Action::Layout(LayoutCommand::Normalize),
        "Reset all window sizes",
    ));

    keys.push(Key::new(
        &[m, Modifier::Shift],
        "Return",
        Action::Layout(LayoutCommand::ToggleSplit),
        "Toggle between split and unsplit sides of stack",
    ));
    keys.push(Key::new(&[m], "Return", Action::spawn(terminal), "Launch terminal"));
    keys.push(Key::new(
        &[m],
        "Tab",
        Action::Host(HostCommand::NextLayout),
        "Toggle between layouts",
    ));
    keys.push(Key::new(
        &[m],
        "w",
        Action::Window(WindowCommand::Kill),
        "Kill focused window",
    ));
    keys.push(Key::new(
        &[m, Modifier::Control],
        "r",
        Action::Host(HostCommand::ReloadConfig),
        "Reload the config",
    ));
    keys.push(Key::new(
        &[m, Modifier::Control],
        "q",
        Action::Host(HostCommand::Shutdown),
        "Shutdown the window manager",
    ));
    keys.push(Key::new(
        &[m],
        "r",
        Action::Host(HostCommand::SpawnCmd),
        "Spawn a command using a prompt widget",
    ));

    keys
}

/// Switch-to and move-to bindings for every group.
pub fn group_keys(m: Modifier, groups: &[Group]) -> Vec<Key> {
    groups
        .iter()
        .enumerate()
        .flat_map(|(i, group)| {
            let digit = (i + 1).to_string();
            [
                Key::new(
                    &[m],
                    digit.clone(),
                    Action::Host(HostCommand::GroupToScreen {
                        group: group.name.clone(),
                    }),
                    format!("Switch to group {}", group.name),
                ),
                Key::new(
                    &[m, Modifier::Shift],
                    digit,
                    Action::Window(WindowCommand::ToGroup {
                        group: group.name.clone(),
                        switch_group: true,
                    }),
                    format!("Switch to & move focused window to group {}", group.name),
                ),
            ]
        })
        .collect()
}

/// The full key table: static bindings, then per-group bindings.
pub fn build_keys(m: Modifier, terminal: &str, groups: &[Group]) -> Vec<Key> {
    let mut keys = static_keys(m, terminal);
    keys.extend(group_keys(m, groups));
    keys
}

/// Chords bound more than once, with how many bindings share each.
pub fn find_duplicate_chords(keys: &[Key]) -> Vec<((Vec<Modifier>, String), usize)> {
    let mut counts: HashMap<(Vec<Modifier>, String), usize> = HashMap::new();
    let mut order = Vec::new();
    for k in keys {
        let chord = k.chord();
        let n = counts.entry(chord.clone()).or_insert(0);
        if *n == 0 {
            order.push(chord);
        }
        *n += 1;
    }
    order
        .into_iter()
        .filter_map(|chord| {
            let n = counts[&chord];
            (n > 1).then_some((chord, n))
        })
        .collect()
}
