//! Terminal emulator discovery.

use log::debug;
use std::ffi::OsStr;
use std::path::Path;

/// Emulators tried in order when neither a preference nor `$TERMINAL` is set.
pub const CANDIDATES: [&str; 21] = [
    "roxterm",
    "sakura",
    "hyper",
    "alacritty",
    "terminator",
    "termite",
    "gnome-terminal",
    "konsole",
    "xfce4-terminal",
    "lxterminal",
    "mate-terminal",
    "kitty",
    "yakuake",
    "tilix",
    "guake",
    "eterm",
    "st",
    "urxvt",
    "wezterm",
    "xterm",
    "x-terminal-emulator",
];

/// Whether `program` is an executable file in one of the `path` directories.
fn on_path(program: &str, path: &OsStr) -> bool {
    std::env::split_paths(path).any(|dir| is_executable(&dir.join(program)))
}

#[cfg(unix)]
fn is_executable(p: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    p.metadata()
        .map(|m| m.is_file() && m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(p: &Path) -> bool {
    p.is_file()
}

/// Pick a terminal using an explicit search path.
///
/// Order: `preference`, then `env_terminal`, then [`CANDIDATES`].  The
/// first entry that is an executable on `path` wins.
pub fn guess_terminal_in(
    preference: Option<&str>,
    env_terminal: Option<&str>,
    path: &OsStr,
) -> Option<String> {
    preference
        .into_iter()
        .chain(env_terminal)
        .chain(CANDIDATES.iter().copied())
        .filter(|t| !t.is_empty())
        .find(|t| {
            let found = on_path(t, path);
            debug!("terminal candidate {}: {}", t, if found { "found" } else { "missing" });
            found
        })
        .map(str::to_string)
}

/// Pick a terminal from the process environment (`$TERMINAL`, `$PATH`).
pub fn guess_terminal(preference: Option<&str>) -> Option<String> {
    let env_terminal = std::env::var("TERMINAL").ok();
    let path = std::env::var_os("PATH").unwrap_or_default();
    guess_terminal_in(preference, env_terminal.as_deref(), &path)
}
