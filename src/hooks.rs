//! Lifecycle hooks.
//!
//! A [`HookRegistry`] is an event table: subscribers register for a
//! [`HookEvent`] and run, in registration order, whenever the host fires
//! that event.  A failing subscriber is logged and does not stop the others.
//!
//! [`HookEvent::StartupOnce`] is delivered at most once per registry, which
//! lives for the whole session.  Reloading the configuration fires
//! [`HookEvent::Reload`] instead, so one-shot work such as the autostart
//! script never runs twice.

use crate::traits::ProcessSpawner;
use log::{debug, error, info};
use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};

/// Events the host fires over a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HookEvent {
    /// First startup of the session only.
    StartupOnce,
    /// Every startup, including restarts.
    Startup,
    /// The configuration was rebuilt.
    Reload,
    Shutdown,
}

impl fmt::Display for HookEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HookEvent::StartupOnce => write!(f, "startup_once"),
            HookEvent::Startup => write!(f, "startup"),
            HookEvent::Reload => write!(f, "reload"),
            HookEvent::Shutdown => write!(f, "shutdown"),
        }
    }
}

/// A subscriber failed.
#[derive(Debug, thiserror::Error)]
#[error("hook {name} failed: {message}")]
pub struct HookError {
    pub name: String,
    pub message: String,
}

type Subscriber = Box<dyn FnMut() -> Result<(), HookError>>;

/// Process-wide hook table.
#[derive(Default)]
pub struct HookRegistry {
    subscribers: HashMap<HookEvent, Vec<(String, Subscriber)>>,
    startup_once_fired: bool,
}

impl fmt::Debug for HookRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let counts: HashMap<&HookEvent, usize> =
            self.subscribers.iter().map(|(k, v)| (k, v.len())).collect();
        f.debug_struct("HookRegistry")
            .field("subscribers", &counts)
            .field("startup_once_fired", &self.startup_once_fired)
            .finish()
    }
}

impl HookRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `hook` under `name` for `event`.
    pub fn subscribe<F>(&mut self, event: HookEvent, name: impl Into<String>, hook: F)
    where
        F: FnMut() -> Result<(), HookError> + 'static,
    {
        let name = name.into();
        debug!("subscribed {} to {}", name, event);
        self.subscribers
            .entry(event)
            .or_default()
            .push((name, Box::new(hook)));
    }

    /// Number of subscribers for `event`.
    pub fn subscriber_count(&self, event: HookEvent) -> usize {
        self.subscribers.get(&event).map_or(0, Vec::len)
    }

    /// Run every subscriber of `event` and return how many ran.
    ///
    /// A second `StartupOnce` is ignored and returns 0.
    pub fn fire(&mut self, event: HookEvent) -> usize {
        if event == HookEvent::StartupOnce {
            if self.startup_once_fired {
                debug!("{} already delivered this session, skipping", event);
                return 0;
            }
            self.startup_once_fired = true;
        }

        let Some(subs) = self.subscribers.get_mut(&event) else {
            return 0;
        };
        info!("firing {} ({} subscriber(s))", event, subs.len());
        for (name, hook) in subs.iter_mut() {
            if let Err(e) = hook() {
                error!("{} hook error: {}", event, e);
            } else {
                debug!("{} hook {} ok", event, name);
            }
        }
        subs.len()
    }
}

//  Autostart

/// The user's home directory from `$HOME`.
pub fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .filter(|h| !h.is_empty())
        .map(PathBuf::from)
}

/// Location of the autostart script under `home`.
pub fn autostart_script(home: &Path) -> PathBuf {
    home.join(".config").join("qtile").join("autostart.sh")
}

/// Subscribe a `StartupOnce` hook that launches the autostart script.
///
/// The script is started detached; its exit status is never collected.
pub fn register_autostart<S>(registry: &mut HookRegistry, home: &Path, spawner: S)
where
    S: ProcessSpawner + 'static,
{
    let script = autostart_script(home);
    registry.subscribe(HookEvent::StartupOnce, "autostart", move || {
        info!("running autostart script {}", script.display());
        spawner.spawn_detached(&script).map_err(|e| HookError {
            name: "autostart".into(),
            message: e.to_string(),
        })
    });
}
