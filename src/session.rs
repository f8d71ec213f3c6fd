//! Session lifecycle: load, reload, shutdown.
//!
//! [`Session`] plays the host's part in the configuration lifecycle.  It
//! owns the [`HookRegistry`] for the whole session and rebuilds the
//! [`Config`] from scratch on every reload.  A reload that fails keeps the
//! previous configuration in place.

use crate::config::{Config, ConfigError};
use crate::hooks::{HookEvent, HookRegistry};
use log::{error, info};

/// Possible errors from the session.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("session not started")]
    NotStarted,
    #[error("session already started")]
    AlreadyStarted,
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Drives a configuration through one window-manager session.
///
/// ```ignore
/// let mut session = Session::new(|| Config::build(Settings::default()));
/// register_autostart(session.hooks_mut(), &home, DetachedSpawner);
/// session.start()?;
/// session.reload()?; // autostart does not run again
/// ```
pub struct Session<L>
where
    L: FnMut() -> Result<Config, ConfigError>,
{
    loader: L,
    hooks: HookRegistry,
    config: Option<Config>,
    generation: u32,
}

impl<L> Session<L>
where
    L: FnMut() -> Result<Config, ConfigError>,
{
    /// Create a session that builds its configuration with `loader`.
    pub fn new(loader: L) -> Self {
        Self {
            loader,
            hooks: HookRegistry::new(),
            config: None,
            generation: 0,
        }
    }

    /// The hook table, for registering subscribers before [`start`](Self::start).
    pub fn hooks_mut(&mut self) -> &mut HookRegistry {
        &mut self.hooks
    }

    /// The active configuration.
    pub fn config(&self) -> Option<&Config> {
        self.config.as_ref()
    }

    /// How many times a configuration has been built successfully.
    pub fn generation(&self) -> u32 {
        self.generation
    }

    /// Load the configuration and fire the startup hooks.
    pub fn start(&mut self) -> Result<&Config, SessionError> {
        if self.config.is_some() {
            return Err(SessionError::AlreadyStarted);
        }
        let config = (self.loader)()?;
        self.generation += 1;
        self.config = Some(config);
        info!("session started");
        self.hooks.fire(HookEvent::StartupOnce);
        self.hooks.fire(HookEvent::Startup);
        self.config.as_ref().ok_or(SessionError::NotStarted)
    }

    /// Rebuild the configuration from scratch.
    ///
    /// On failure the previous configuration stays active and the error is
    /// returned.  Startup hooks are not fired again.
    pub fn reload(&mut self) -> Result<&Config, SessionError> {
        if self.config.is_none() {
            return Err(SessionError::NotStarted);
        }
        match (self.loader)() {
            Ok(config) => {
                self.generation += 1;
                self.config = Some(config);
                info!("configuration reloaded (generation {})", self.generation);
                self.hooks.fire(HookEvent::Reload);
            }
            Err(e) => {
                error!("reload failed, keeping previous configuration: {}", e);
                return Err(e.into());
            }
        }
        self.config.as_ref().ok_or(SessionError::NotStarted)
    }

    /// Fire the shutdown hooks and drop the configuration.
    pub fn shutdown(&mut self) {
        self.hooks.fire(HookEvent::Shutdown);
        self.config = None;
        info!("session ended");
    }
}
