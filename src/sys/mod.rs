//! Operating-system backends.
//!
//! Concrete implementations of the [`BatterySensor`](crate::traits::BatterySensor)
//! and [`ProcessSpawner`](crate::traits::ProcessSpawner) traits.  Nothing
//! outside this module touches sysfs or spawns processes directly.

pub mod power;
pub mod process;
