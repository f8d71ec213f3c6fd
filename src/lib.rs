//! **tilecfg** — declarative configuration for a tiling window manager.
//!
//! The crate produces the tables a window-manager host reads at startup and
//! on every reload: key and mouse bindings, workspace groups, layouts, a
//! colour palette, one status bar per screen and the floating-window rules.
//! The host owns everything else (tiling, input dispatch, rendering).
//!
//! # Architecture
//!
//! * [`config::Config`] is the single immutable value handed to the host.
//!   It serialises to JSON under the names the host expects.
//! * [`action::Action`] describes what a binding does without doing it.
//! * [`hooks::HookRegistry`] and [`session::Session`] model the lifecycle:
//!   start once, reload many times, with one-shot startup hooks.
//! * [`traits::BatterySensor`] and [`traits::ProcessSpawner`] keep the
//!   battery colour and the autostart hook independent of the operating
//!   system.  Concrete implementations live in [`sys`].

pub mod action;
pub mod bar;
pub mod battery;
pub mod color;
pub mod config;
pub mod floating;
pub mod group;
pub mod hooks;
pub mod keys;
pub mod mouse;
pub mod session;
pub mod sys;
pub mod terminal;
pub mod traits;
pub mod widget;
