//! The window-manager configuration.
//!
//! [`Config::build`] assembles every table the host reads (keys, groups,
//! layouts, screens, mouse bindings, floating rules and scalar settings)
//! into one immutable value.  It is built once per load and passed by
//! reference; a reload builds a fresh one.
//!
//! A few knobs can be overridden from a JSON file without recompiling.
//! Every field is optional:
//!
//! ```json
//! {
//!   "modifier": "mod1",
//!   "terminal": "kitty",
//!   "widget_defaults": { "fontsize": 13 },
//!   "follow_mouse_focus": false
//! }
//! ```

use crate::bar::{screens, Screen};
use crate::color::{ColorError, Palette};
use crate::floating::{float_rules, MatchRule};
use crate::group::{groups, layouts, unknown_group_layouts, Group, LayoutSpec};
use crate::keys::{build_keys, find_duplicate_chords, Key, Modifier};
use crate::mouse::{mouse_bindings, MouseBinding};
use crate::terminal::guess_terminal;
use crate::widget::WidgetDefaults;
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Terminal used when discovery finds nothing.
pub const FALLBACK_TERMINAL: &str = "xterm";

/// What the host does when a window asks to be activated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FocusOnActivation {
    /// Focus only if the window is on the current group, otherwise mark it urgent.
    Smart,
    Focus,
    Urgent,
    Never,
}

/// Scalar settings passed through to the host unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HostSettings {
    pub dgroups_key_binder: Option<String>,
    pub dgroups_app_rules: Vec<String>,
    pub follow_mouse_focus: bool,
    pub bring_front_click: bool,
    pub cursor_warp: bool,
    pub auto_fullscreen: bool,
    pub focus_on_window_activation: FocusOnActivation,
    pub reconfigure_screens: bool,
    /// Let applications minimise themselves when they lose focus.
    pub auto_minimize: bool,
    /// Wayland input-device rules, if any.
    pub wl_input_rules: Option<serde_json::Value>,
    /// Name reported to clients.  `LG3D` keeps Java toolkits happy.
    pub wmname: String,
}

impl Default for HostSettings {
    fn default() -> Self {
        Self {
            dgroups_key_binder: None,
            dgroups_app_rules: Vec::new(),
            follow_mouse_focus: true,
            bring_front_click: false,
            cursor_warp: false,
            auto_fullscreen: true,
            focus_on_window_activation: FocusOnActivation::Smart,
            reconfigure_screens: true,
            auto_minimize: true,
            wl_input_rules: None,
            wmname: "LG3D".into(),
        }
    }
}

/// User overrides read from the JSON file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub modifier: Modifier,
    /// Preferred terminal; discovery is used when unset or not installed.
    pub terminal: Option<String>,
    pub widget_defaults: WidgetDefaults,
    #[serde(flatten)]
    pub host: HostSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            modifier: Modifier::Mod4,
            terminal: None,
            widget_defaults: WidgetDefaults::default(),
            host: HostSettings::default(),
        }
    }
}

impl Settings {
    /// Load overrides from a JSON file at `path`.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError(format!("failed to read {}: {}", path.display(), e)))?;
        let settings: Self = serde_json::from_str(&contents)
            .map_err(|e| ConfigError(format!("failed to parse {}: {}", path.display(), e)))?;
        Ok(settings)
    }
}

/// Error from loading overrides or building the configuration.
#[derive(Debug, thiserror::Error)]
#[error("config error: {0}")]
pub struct ConfigError(String);

impl From<ColorError> for ConfigError {
    fn from(e: ColorError) -> Self {
        ConfigError(e.to_string())
    }
}

/// The complete configuration, serialised under the names the host reads.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Config {
    #[serde(rename = "mod")]
    pub modifier: Modifier,
    pub terminal: String,
    pub keys: Vec<Key>,
    pub groups: Vec<Group>,
    pub layouts: Vec<LayoutSpec>,
    pub colors: Palette,
    pub widget_defaults: WidgetDefaults,
    pub extension_defaults: WidgetDefaults,
    pub screens: Vec<Screen>,
    pub mouse: Vec<MouseBinding>,
    pub floating_layout: LayoutSpec,
    #[serde(flatten)]
    pub host: HostSettings,
}

impl Config {
    /// Build the configuration, discovering the terminal from the
    /// environment.
    pub fn build(settings: Settings) -> Result<Self, ConfigError> {
        let terminal = guess_terminal(settings.terminal.as_deref()).unwrap_or_else(|| {
            warn!("no terminal emulator found, falling back to {}", FALLBACK_TERMINAL);
            FALLBACK_TERMINAL.to_string()
        });
        Self::build_with_terminal(settings, terminal)
    }

    /// Build the configuration with an already chosen terminal.
    pub fn build_with_terminal(settings: Settings, terminal: String) -> Result<Self, ConfigError> {
        let colors = Palette::new()?;
        let groups = groups();
        let keys = build_keys(settings.modifier, &terminal, &groups);
        let screens = screens(&colors)?;
        info!(
            "built config: {} keys, {} groups, {} screens, terminal {}",
            keys.len(),
            groups.len(),
            screens.len(),
            terminal
        );
        Ok(Self {
            modifier: settings.modifier,
            terminal,
            keys,
            groups,
            layouts: layouts()?,
            colors,
            extension_defaults: settings.widget_defaults.clone(),
            widget_defaults: settings.widget_defaults,
            screens,
            mouse: mouse_bindings(settings.modifier),
            floating_layout: LayoutSpec::Floating {
                float_rules: float_rules(),
            },
            host: settings.host,
        })
    }

    /// The floating rules, or an empty slice if the floating layout was
    /// replaced by something else.
    pub fn float_rules(&self) -> &[MatchRule] {
        match &self.floating_layout {
            LayoutSpec::Floating { float_rules } => float_rules.as_slice(),
            _ => &[],
        }
    }

    /// Problems the host would trip over at load time.
    pub fn validate(&self) -> Vec<String> {
        let mut problems = Vec::new();
        for ((mods, key), n) in find_duplicate_chords(&self.keys) {
            let mods: Vec<String> = mods.iter().map(ToString::to_string).collect();
            problems.push(format!("chord [{}] {} bound {} times", mods.join("+"), key, n));
        }
        for g in unknown_group_layouts(&self.groups, &self.layouts) {
            problems.push(format!("group {} uses unknown layout {:?}", g.name, g.layout));
        }
        for r in self.float_rules().iter().filter(|r| !r.is_well_formed()) {
            problems.push(format!("malformed float rule {:?}", r));
        }
        problems
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::floating::default_float_rules;

    fn stock() -> Config {
        Config::build_with_terminal(Settings::default(), "alacritty".into()).unwrap()
    }

    #[test]
    fn deserialize_empty_uses_defaults() {
        let s: Settings = serde_json::from_str("{}").unwrap();
        assert_eq!(s, Settings::default());
        assert_eq!(s.modifier, Modifier::Mod4);
        assert!(s.host.follow_mouse_focus);
        assert_eq!(s.host.wmname, "LG3D");
    }

    #[test]
    fn deserialize_partial_overrides() {
        let json = r#"{
            "modifier": "mod1",
            "terminal": "kitty",
            "widget_defaults": { "fontsize": 14 },
            "cursor_warp": true,
            "focus_on_window_activation": "urgent"
        }"#;
        let s: Settings = serde_json::from_str(json).unwrap();
        assert_eq!(s.modifier, Modifier::Mod1);
        assert_eq!(s.terminal.as_deref(), Some("kitty"));
        assert_eq!(s.widget_defaults.fontsize, 14);
        assert_eq!(s.widget_defaults.font, "Ubuntu Regular");
        assert!(s.host.cursor_warp);
        assert_eq!(s.host.focus_on_window_activation, FocusOnActivation::Urgent);
        assert!(s.host.auto_fullscreen);
    }

    #[test]
    fn unknown_top_level_keys_ignored() {
        let json = r#"{ "modifier": "mod4", "future_section": { "key": 42 } }"#;
        let _s: Settings = serde_json::from_str(json).unwrap();
    }

    #[test]
    fn load_reports_missing_file() {
        let err = Settings::load(Path::new("/nonexistent/tilecfg/config.json")).unwrap_err();
        assert!(err.to_string().contains("failed to read"));
    }

    #[test]
    fn stock_config_is_valid() {
        let c = stock();
        assert!(c.validate().is_empty(), "{:?}", c.validate());
    }

    #[test]
    fn stock_scalar_settings() {
        let c = stock();
        assert_eq!(c.host.dgroups_key_binder, None);
        assert!(c.host.dgroups_app_rules.is_empty());
        assert!(c.host.follow_mouse_focus);
        assert!(!c.host.bring_front_click);
        assert!(!c.host.cursor_warp);
        assert!(c.host.auto_fullscreen);
        assert!(c.host.reconfigure_screens);
        assert!(c.host.auto_minimize);
        assert_eq!(c.host.wl_input_rules, None);
        assert_eq!(c.extension_defaults, c.widget_defaults);
    }

    #[test]
    fn float_rules_extend_host_defaults() {
        let c = stock();
        assert_eq!(c.float_rules().len(), default_float_rules().len() + 6);
    }

    #[test]
    fn serialises_host_names_at_top_level() {
        let v = serde_json::to_value(stock()).unwrap();
        for name in [
            "mod",
            "keys",
            "groups",
            "layouts",
            "screens",
            "mouse",
            "floating_layout",
            "widget_defaults",
            "extension_defaults",
            "follow_mouse_focus",
            "bring_front_click",
            "cursor_warp",
            "auto_fullscreen",
            "focus_on_window_activation",
            "reconfigure_screens",
            "auto_minimize",
            "wmname",
        ] {
            assert!(v.get(name).is_some(), "missing top-level {}", name);
        }
        assert_eq!(v["mod"], "mod4");
        assert_eq!(v["colors"].as_array().map(Vec::len), Some(10));
        assert_eq!(v["floating_layout"]["type"], "floating");
    }

    #[test]
    fn modifier_override_reaches_keys_and_mouse() {
        let s = Settings {
            modifier: Modifier::Mod1,
            ..Settings::default()
        };
        let c = Config::build_with_terminal(s, "xterm".into()).unwrap();
        assert!(c.keys.iter().all(|k| k.modifiers.contains(&Modifier::Mod1)));
        assert!(c.keys.iter().all(|k| !k.modifiers.contains(&Modifier::Mod4)));
        let v = serde_json::to_value(&c.mouse).unwrap();
        assert_eq!(v[0]["modifiers"][0], "mod1");
    }
}
