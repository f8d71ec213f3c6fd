//! Groups (workspaces) and layout strategies.

use crate::color::{Color, ColorError};
use crate::floating::MatchRule;
use serde::{Deserialize, Serialize};

/// A named workspace with the layout it starts in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    pub name: String,
    pub layout: String,
}

impl Group {
    pub fn new(name: impl Into<String>, layout: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            layout: layout.into(),
        }
    }
}

/// Names of the stock groups, in key order (`mod+1` is `WWW`).
pub const GROUP_NAMES: [&str; 9] = ["WWW", "DEV", "SYS", "DOC", "VID", "PHO", "MUS", "COM", "GFX"];

/// The stock groups, all starting in the `max` layout.
pub fn groups() -> Vec<Group> {
    GROUP_NAMES.iter().map(|name| Group::new(*name, "max")).collect()
}

/// A layout strategy and its styling parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LayoutSpec {
    Columns {
        /// Border colours of a focused window in a stacked column.
        border_focus_stack: [Color; 2],
        border_width: u32,
    },
    Max,
    Floating {
        float_rules: Vec<MatchRule>,
    },
}

impl LayoutSpec {
    /// The name groups use to select this layout.
    pub fn name(&self) -> &'static str {
        match self {
            LayoutSpec::Columns { .. } => "columns",
            LayoutSpec::Max => "max",
            LayoutSpec::Floating { .. } => "floating",
        }
    }
}

/// The tiling layouts, in "next layout" cycle order.
pub fn layouts() -> Result<Vec<LayoutSpec>, ColorError> {
    Ok(vec![
        LayoutSpec::Columns {
            border_focus_stack: [Color::parse("#d75f5f")?, Color::parse("#8f3d3d")?],
            border_width: 2,
        },
        LayoutSpec::Max,
    ])
}

/// Groups whose default layout is not among `layouts`.
///
/// The host rejects such groups at load time; this lets a caller find them
/// first.
pub fn unknown_group_layouts<'a>(groups: &'a [Group], layouts: &[LayoutSpec]) -> Vec<&'a Group> {
    groups
        .iter()
        .filter(|g| !layouts.iter().any(|l| l.name() == g.layout))
        .collect()
}
