//! [`BatterySensor`] backed by the Linux power-supply class in sysfs.
//!
//! Each supply is a directory under `/sys/class/power_supply` with a `type`
//! file.  Batteries report their charge in `capacity` (integer percent).
//! When `capacity` is missing the charge is derived from
//! `energy_now / energy_full` or `charge_now / charge_full`.

use crate::traits::BatterySensor;
use log::debug;
use std::path::{Path, PathBuf};

const POWER_SUPPLY_ROOT: &str = "/sys/class/power_supply";

/// Reads the first battery found under the power-supply root.
pub struct SysfsBattery {
    root: PathBuf,
}

/// Errors reading the power-supply class.
#[derive(Debug, thiserror::Error)]
pub enum SysfsBatteryError {
    #[error("io error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("unparseable value in {path}: {value:?}")]
    Parse { path: PathBuf, value: String },
}

impl Default for SysfsBattery {
    fn default() -> Self {
        Self::new()
    }
}

impl SysfsBattery {
    pub fn new() -> Self {
        Self::with_root(POWER_SUPPLY_ROOT)
    }

    /// Read supplies from `root` instead of the sysfs default.
    pub fn with_root(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Battery directories, sorted by name so `BAT0` wins over `BAT1`.
    fn batteries(&self) -> Result<Vec<PathBuf>, SysfsBatteryError> {
        let entries = match std::fs::read_dir(&self.root) {
            Ok(e) => e,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(source) => {
                return Err(SysfsBatteryError::Io {
                    path: self.root.clone(),
                    source,
                })
            }
        };
        let mut found: Vec<PathBuf> = entries
            .filter_map(Result::ok)
            .map(|e| e.path())
            .filter(|p| {
                std::fs::read_to_string(p.join("type"))
                    .map(|t| t.trim() == "Battery")
                    .unwrap_or(false)
            })
            .collect();
        found.sort();
        Ok(found)
    }
}

fn read_number(path: &Path) -> Result<Option<f64>, SysfsBatteryError> {
    let text = match std::fs::read_to_string(path) {
        Ok(t) => t,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(source) => {
            return Err(SysfsBatteryError::Io {
                path: path.to_path_buf(),
                source,
            })
        }
    };
    text.trim()
        .parse::<f64>()
        .map(Some)
        .map_err(|_| SysfsBatteryError::Parse {
            path: path.to_path_buf(),
            value: text.trim().to_string(),
        })
}

/// `now / full` as a percentage, if both files exist and `full` is non-zero.
fn ratio(dir: &Path, now: &str, full: &str) -> Result<Option<f64>, SysfsBatteryError> {
    match (read_number(&dir.join(now))?, read_number(&dir.join(full))?) {
        (Some(n), Some(f)) if f > 0.0 => Ok(Some(n / f * 100.0)),
        _ => Ok(None),
    }
}

impl BatterySensor for SysfsBattery {
    type Error = SysfsBatteryError;

    fn percent(&self) -> Result<Option<f64>, SysfsBatteryError> {
        let Some(dir) = self.batteries()?.into_iter().next() else {
            debug!("no battery under {}", self.root.display());
            return Ok(None);
        };
        let pct = match read_number(&dir.join("capacity"))? {
            Some(p) => Some(p),
            None => match ratio(&dir, "energy_now", "energy_full")? {
                Some(p) => Some(p),
                None => ratio(&dir, "charge_now", "charge_full")?,
            },
        };
        Ok(pct.map(|p| p.clamp(0.0, 100.0)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    static TEST_ID: AtomicU32 = AtomicU32::new(0);

    /// A fresh fake power-supply root for each test.
    fn tmp_root() -> PathBuf {
        let id = TEST_ID.fetch_add(1, Ordering::SeqCst);
        let dir = std::env::temp_dir().join(format!(
            "tilecfg-power-test-{}-{}",
            std::process::id(),
            id
        ));
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    fn supply(root: &Path, name: &str, files: &[(&str, &str)]) {
        let dir = root.join(name);
        std::fs::create_dir_all(&dir).unwrap();
        for (file, contents) in files {
            std::fs::write(dir.join(file), format!("{}\n", contents)).unwrap();
        }
    }

    #[test]
    fn reads_capacity() {
        let root = tmp_root();
        supply(&root, "AC", &[("type", "Mains")]);
        supply(&root, "BAT0", &[("type", "Battery"), ("capacity", "57")]);
        let s = SysfsBattery::with_root(&root);
        assert_eq!(s.percent().unwrap(), Some(57.0));
        let _ = std::fs::remove_dir_all(&root);
    }

    #[test]
    fn falls_back_to_energy_ratio() {
        let root = tmp_root();
        supply(
            &root,
            "BAT1",
            &[("type", "Battery"), ("energy_now", "25000"), ("energy_full", "50000")],
        );
        let s = SysfsBattery::with_root(&root);
        assert_eq!(s.percent().unwrap(), Some(50.0));
        let _ = std::fs::remove_dir_all(&root);
    }

    #[test]
    fn no_battery_is_none() {
        let root = tmp_root();
        supply(&root, "AC", &[("type", "Mains")]);
        let s = SysfsBattery::with_root(&root);
        assert_eq!(s.percent().unwrap(), None);
        let _ = std::fs::remove_dir_all(&root);
    }

    #[test]
    fn missing_root_is_none() {
        let s = SysfsBattery::with_root("/nonexistent/tilecfg/power_supply");
        assert_eq!(s.percent().unwrap(), None);
    }

    #[test]
    fn garbage_capacity_is_an_error() {
        let root = tmp_root();
        supply(&root, "BAT0", &[("type", "Battery"), ("capacity", "lots")]);
        let s = SysfsBattery::with_root(&root);
        assert!(matches!(s.percent(), Err(SysfsBatteryError::Parse { .. })));
        let _ = std::fs::remove_dir_all(&root);
    }

    #[test]
    fn reads_live_value_each_time() {
        let root = tmp_root();
        supply(&root, "BAT0", &[("type", "Battery"), ("capacity", "90")]);
        let s = SysfsBattery::with_root(&root);
        assert_eq!(s.percent().unwrap(), Some(90.0));
        std::fs::write(root.join("BAT0/capacity"), "15\n").unwrap();
        assert_eq!(s.percent().unwrap(), Some(15.0));
        let _ = std::fs::remove_dir_all(&root);
    }
}
