//! Bar widget descriptors.
//!
//! A [`Widget`] names a host widget kind and carries its static styling.
//! Live values (network rates, battery level, the clock) are read by the
//! host on its own refresh timer.

use crate::color::{Color, ColorPair};
use serde::{Deserialize, Serialize};

/// Font and spacing applied to every widget unless it overrides them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WidgetDefaults {
    pub font: String,
    pub fontsize: u32,
    pub padding: u32,
}

impl Default for WidgetDefaults {
    fn default() -> Self {
        Self {
            font: "Ubuntu Regular".into(),
            fontsize: 12,
            padding: 3,
        }
    }
}

/// How the group box marks the current group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HighlightMethod {
    Border,
    Block,
    Text,
    Line,
}

/// Optional styling shared by text-based widgets.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub foreground: Option<ColorPair>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<ColorPair>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_shadow: Option<ColorPair>,
}

impl TextStyle {
    pub fn on(background: &ColorPair) -> Self {
        Self {
            background: Some(background.clone()),
            ..Self::default()
        }
    }
}

/// Parameters of the battery widget.
///
/// `low_percentage` is a fraction (`0.2` is 20 %); below it the widget
/// switches to `low_foreground`.  The host sends a desktop notification once
/// the charge drops under `notify_below` percent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatteryWidget {
    pub format: String,
    pub charge_char: String,
    pub discharge_char: String,
    pub background: ColorPair,
    pub low_foreground: ColorPair,
    pub low_percentage: f64,
    pub notify_below: u32,
}

/// One bar segment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "widget", rename_all = "snake_case")]
pub enum Widget {
    /// Fixed-width blank space.
    Spacer {
        length: u32,
        #[serde(skip_serializing_if = "Option::is_none")]
        background: Option<ColorPair>,
    },
    GroupBox {
        highlight_method: HighlightMethod,
        highlight_color: ColorPair,
        this_current_screen_border: Color,
        inactive: Color,
        background: ColorPair,
    },
    TextBox {
        text: String,
        #[serde(flatten)]
        style: TextStyle,
    },
    Prompt,
    WindowName {
        max_chars: u32,
    },
    /// Network throughput.
    Net {
        format: String,
        background: ColorPair,
    },
    CurrentLayout {
        background: ColorPair,
    },
    Clock {
        format: String,
        #[serde(flatten)]
        style: TextStyle,
    },
    Battery(BatteryWidget),
    Systray {
        background: ColorPair,
    },
}

impl Widget {
    /// The host's name for this widget kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Widget::Spacer { .. } => "Spacer",
            Widget::GroupBox { .. } => "GroupBox",
            Widget::TextBox { .. } => "TextBox",
            Widget::Prompt => "Prompt",
            Widget::WindowName { .. } => "WindowName",
            Widget::Net { .. } => "Net",
            Widget::CurrentLayout { .. } => "CurrentLayout",
            Widget::Clock { .. } => "Clock",
            Widget::Battery(_) => "Battery",
            Widget::Systray { .. } => "Systray",
        }
    }

    /// Whether the widget only draws spacing or a separator glyph.
    pub fn is_decoration(&self) -> bool {
        match self {
            Widget::Spacer { .. } => true,
            Widget::TextBox { text, .. } => text == crate::bar::SEPARATOR_GLYPH,
            _ => false,
        }
    }

    pub fn spacer(length: u32, background: &ColorPair) -> Self {
        Widget::Spacer {
            length,
            background: Some(background.clone()),
        }
    }

    /// A text label drawn on `background`.
    pub fn label(text: impl Into<String>, background: &ColorPair) -> Self {
        Widget::TextBox {
            text: text.into(),
            style: TextStyle::on(background),
        }
    }
}
