//! Floating-window rules.
//!
//! A rule matches a window by class, title or window type; matching windows
//! float instead of being tiled.  Evaluation is the host's job, this module
//! only declares the rules.

use serde::{Deserialize, Serialize};

/// A predicate identifying windows that should float.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchRule {
    WmClass(String),
    Title(String),
    WmType(String),
    /// Any window that declares itself transient for another window.
    TransientFor,
}

impl MatchRule {
    /// Whether the rule has something to match against.
    pub fn is_well_formed(&self) -> bool {
        match self {
            MatchRule::WmClass(s) | MatchRule::Title(s) | MatchRule::WmType(s) => {
                !s.trim().is_empty()
            }
            MatchRule::TransientFor => true,
        }
    }
}

/// The rules the host applies when no floating layout is configured.
pub fn default_float_rules() -> Vec<MatchRule> {
    let types = ["utility", "notification", "toolbar", "splash", "dialog"];
    let classes = [
        "file_progress",
        "confirm",
        "dialog",
        "download",
        "error",
        "notification",
        "splash",
        "toolbar",
    ];
    types
        .iter()
        .map(|t| MatchRule::WmType((*t).into()))
        .chain(classes.iter().map(|c| MatchRule::WmClass((*c).into())))
        .chain(std::iter::once(MatchRule::TransientFor))
        .collect()
}

/// Dialogs from gitk, ssh-askpass and pinentry.
fn extra_float_rules() -> Vec<MatchRule> {
    vec![
        MatchRule::WmClass("confirmreset".into()),
        MatchRule::WmClass("makebranch".into()),
        MatchRule::WmClass("maketag".into()),
        MatchRule::WmClass("ssh-askpass".into()),
        MatchRule::Title("branchdialog".into()),
        // GPG key password entry
        MatchRule::Title("pinentry".into()),
    ]
}

/// Host defaults followed by the extra dialog rules.
pub fn float_rules() -> Vec<MatchRule> {
    let mut rules = default_float_rules();
    rules.extend(extra_float_rules());
    rules
}
