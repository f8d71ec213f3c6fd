//! Traits that decouple the configuration from the operating system.
//!
//! The battery helper and the autostart hook only depend on these
//! abstractions.  Concrete implementations live in [`sys`](crate::sys);
//! tests substitute recording doubles.

use std::path::Path;

/// A source of the current battery charge.
pub trait BatterySensor {
    /// The error type produced by this sensor.
    type Error: std::error::Error + Send + 'static;

    /// Current charge in percent (`0.0..=100.0`), or `None` when the
    /// machine has no battery.
    ///
    /// Called on every refresh; implementations must not cache.
    fn percent(&self) -> Result<Option<f64>, Self::Error>;
}

/// Launches external programs.
pub trait ProcessSpawner {
    /// The error type produced by this spawner.
    type Error: std::error::Error + Send + 'static;

    /// Start `program` with no arguments and return without waiting for it.
    fn spawn_detached(&self, program: &Path) -> Result<(), Self::Error>;
}
