//! [`ProcessSpawner`] that starts children without waiting on them.

use crate::traits::ProcessSpawner;
use log::debug;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// Spawns programs with null stdio and drops the child handle.
///
/// The child is never waited on; it keeps running after the caller returns
/// and is reaped by init once it exits.
#[derive(Debug, Default, Clone, Copy)]
pub struct DetachedSpawner;

/// A program could not be started.
#[derive(Debug, thiserror::Error)]
#[error("failed to spawn {path}: {source}")]
pub struct SpawnError {
    pub path: PathBuf,
    #[source]
    pub source: std::io::Error,
}

impl ProcessSpawner for DetachedSpawner {
    type Error = SpawnError;

    fn spawn_detached(&self, program: &Path) -> Result<(), SpawnError> {
        let child = Command::new(program)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|source| SpawnError {
                path: program.to_path_buf(),
                source,
            })?;
        debug!("spawned {} (pid {})", program.display(), child.id());
        Ok(())
    }
}
