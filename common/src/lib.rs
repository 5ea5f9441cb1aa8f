//! Platform-agnostic core of the weather dial watch face.
//!
//! Shared between the desktop simulator and the Pico 2 firmware:
//!
//! - [`app`]: [`WatchFace`], the single application state and its event handlers
//! - [`dial`]: cached dial disc and tick marks
//! - [`hands`]: hand polygons, angles and rotation
//! - [`weather`]: weather state and the icon category mapping
//! - [`icons`]: icon store trait and the release-before-load icon slot
//! - [`message`]: inbound dictionary codec
//! - [`link`]: serial framing for the companion link
//! - [`visibility`]: cancel-and-rearm hands timer
//! - [`log`]: event log ring buffer
//! - [`render`]: dirty layer tracking
//! - [`clock`], [`trig`]: wall-clock time and fixed-point trigonometry
//! - [`colors`], [`config`], [`styles`], [`widgets`]: drawing constants and helpers
//!
//! # no_std Compatibility
//!
//! The crate is `no_std` outside of tests and has no time source of its own:
//! callers pass wall-clock time and monotonic milliseconds in.

#![cfg_attr(not(test), no_std)]
// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

pub mod app;
pub mod clock;
pub mod colors;
pub mod config;
pub mod dial;
pub mod hands;
pub mod icons;
pub mod link;
pub mod log;
pub mod message;
pub mod render;
pub mod styles;
pub mod trig;
pub mod visibility;
pub mod weather;
pub mod widgets;

#[cfg(test)]
mod testing;

// Re-export commonly used items
pub use app::WatchFace;
pub use clock::{ClockTime, MinuteTicker};
pub use colors::*;
pub use config::*;
pub use icons::{BakedIcons, IconSlot, IconStore};
pub use link::{ACK, DropReason, FrameDecoder, LinkEvent, NACK, encode_frame};
pub use log::{EventLog, LogEntry, LogLevel};
pub use message::{DictError, Dictionary, DictionaryBuilder, WeatherReport};
pub use weather::{IconCategory, ResourceId, select_icon};
