//! Battery status colour.
//!
//! The host calls [`battery_color_status`] on every bar refresh, so the
//! sensor is read each time and nothing is cached.
//!
//! | Charge          | Tier     | Palette role |
//! |-----------------|----------|--------------|
//! | `< 20`          | `Red`    | `Red`        |
//! | `20 ..< 40`     | `Orange` | `Yellow`     |
//! | `>= 40`         | `Green`  | `Green`      |
//!
//! When there is no battery, or the sensor cannot be read, the neutral
//! colour (the battery segment's own background) is returned and a warning
//! is logged once per process.

use crate::color::{ColorPair, Palette, Role};
use crate::traits::BatterySensor;
use log::{debug, warn};
use serde::Serialize;
use std::sync::atomic::{AtomicBool, Ordering};

/// Charge level bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BatteryTier {
    Red,
    Orange,
    Green,
}

impl BatteryTier {
    /// Palette entry used to draw this tier.
    pub fn role(self) -> Role {
        match self {
            BatteryTier::Red => Role::Red,
            BatteryTier::Orange => Role::Yellow,
            BatteryTier::Green => Role::Green,
        }
    }
}

/// Lower bound (inclusive) of the orange tier.
pub const LOW_THRESHOLD: f64 = 20.0;
/// Lower bound (inclusive) of the green tier.
pub const OK_THRESHOLD: f64 = 40.0;

/// Bucket a charge percentage.
pub fn tier_for(percent: f64) -> BatteryTier {
    if percent < LOW_THRESHOLD {
        BatteryTier::Red
    } else if percent < OK_THRESHOLD {
        BatteryTier::Orange
    } else {
        BatteryTier::Green
    }
}

/// Palette entry shown when the charge is unknown.
pub const NEUTRAL_ROLE: Role = Role::Blue;

/// The sensor produced no usable reading.
#[derive(Debug, thiserror::Error)]
pub enum BatteryError {
    #[error("no battery present")]
    NoBattery,
    #[error("battery sensor error: {0}")]
    Sensor(String),
}

/// Read the sensor and return the tier, without any fallback.
pub fn try_battery_tier<S: BatterySensor>(sensor: &S) -> Result<BatteryTier, BatteryError> {
    let percent = sensor
        .percent()
        .map_err(|e| BatteryError::Sensor(e.to_string()))?
        .ok_or(BatteryError::NoBattery)?;
    Ok(tier_for(percent))
}

/// Read the sensor and return the colour, without any fallback.
pub fn try_battery_color_status<'p, S: BatterySensor>(
    palette: &'p Palette,
    sensor: &S,
) -> Result<&'p ColorPair, BatteryError> {
    try_battery_tier(sensor).map(|tier| palette.get(tier.role()))
}

static WARNED: AtomicBool = AtomicBool::new(false);

/// Colour for the current charge, or the neutral colour if unknown.
pub fn battery_color_status<'p, S: BatterySensor>(palette: &'p Palette, sensor: &S) -> &'p ColorPair {
    match try_battery_color_status(palette, sensor) {
        Ok(pair) => pair,
        Err(e) => {
            if !WARNED.swap(true, Ordering::Relaxed) {
                warn!("{}; using neutral battery colour", e);
            } else {
                debug!("{}; using neutral battery colour", e);
            }
            palette.get(NEUTRAL_ROLE)
        }
    }
}
