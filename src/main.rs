//! Entry point for the **tilecfg** binary.
//!
//! ```text
//! tilecfg [dump]   print the configuration as JSON
//! tilecfg check    report problems the host would reject
//! tilecfg battery  print the current battery colour
//! tilecfg start    run the startup hooks once, then print the configuration
//! ```

use tilecfg::battery::{battery_color_status, try_battery_tier};
use tilecfg::color::Palette;
use tilecfg::config::{Config, ConfigError, Settings};
use tilecfg::hooks::{home_dir, register_autostart};
use tilecfg::session::Session;
use tilecfg::sys::power::SysfsBattery;
use tilecfg::sys::process::DetachedSpawner;
use log::{error, info, warn};

/// Resolve the config directory (`$XDG_CONFIG_HOME/tilecfg`).
fn config_dir() -> std::path::PathBuf {
    let base = std::env::var("XDG_CONFIG_HOME").unwrap_or_else(|_| {
        let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".into());
        format!("{}/.config", home)
    });
    std::path::PathBuf::from(base).join("tilecfg")
}

/// Try to load overrides from `$XDG_CONFIG_HOME/tilecfg/config.json`,
/// falling back to compiled-in defaults.
fn load_settings() -> Settings {
    let path = config_dir().join("config.json");
    match Settings::load(&path) {
        Ok(s) => {
            info!("loaded settings from {}", path.display());
            s
        }
        Err(e) => {
            info!("no settings file ({}), using defaults", e);
            Settings::default()
        }
    }
}

fn load_config() -> Result<Config, ConfigError> {
    Config::build(load_settings())
}

fn print_json(config: &Config) -> i32 {
    match serde_json::to_string_pretty(config) {
        Ok(json) => {
            println!("{}", json);
            0
        }
        Err(e) => {
            error!("failed to serialise config: {}", e);
            1
        }
    }
}

//  Commands

fn dump() -> i32 {
    match load_config() {
        Ok(config) => print_json(&config),
        Err(e) => {
            error!("{}", e);
            1
        }
    }
}

fn check() -> i32 {
    let config = match load_config() {
        Ok(c) => c,
        Err(e) => {
            error!("{}", e);
            return 1;
        }
    };
    let problems = config.validate();
    if problems.is_empty() {
        println!(
            "ok: {} keys, {} groups, {} screens",
            config.keys.len(),
            config.groups.len(),
            config.screens.len()
        );
        0
    } else {
        for p in &problems {
            println!("{}", p);
        }
        1
    }
}

fn battery() -> i32 {
    let palette = match Palette::new() {
        Ok(p) => p,
        Err(e) => {
            error!("{}", e);
            return 1;
        }
    };
    let sensor = SysfsBattery::new();
    match try_battery_tier(&sensor) {
        Ok(tier) => println!("tier: {:?}", tier),
        Err(e) => println!("tier: unknown ({})", e),
    }
    let pair = battery_color_status(&palette, &sensor);
    println!("color: {} {}", pair.normal, pair.alternate);
    0
}

fn start() -> i32 {
    let mut session = Session::new(load_config);
    match home_dir() {
        Some(home) => register_autostart(session.hooks_mut(), &home, DetachedSpawner),
        None => warn!("HOME is not set, autostart disabled"),
    }
    match session.start() {
        Ok(config) => print_json(config),
        Err(e) => {
            error!("{}", e);
            1
        }
    }
}

//  Main

fn main() {
    env_logger::init();

    let command = std::env::args().nth(1).unwrap_or_else(|| "dump".into());
    let code = match command.as_str() {
        "dump" => dump(),
        "check" => check(),
        "battery" => battery(),
        "start" => start(),
        other => {
            eprintln!("unknown command {:?} (expected dump, check, battery or start)", other);
            2
        }
    };
    std::process::exit(code);
}
