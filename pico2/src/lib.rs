//! Weather dial firmware library - the host-testable half of the firmware.
//!
//! The binary (`main.rs`) adds the embedded-specific code: display bring-up,
//! the UART link task and the render loop.
//!
//! # Testing
//!
//! Run tests on host with:
//! ```bash
//! cargo test --lib --target x86_64-unknown-linux-gnu  # Linux/macOS
//! cargo test --lib --target x86_64-pc-windows-msvc    # Windows
//! ```

// Use no_std only when NOT testing (tests need std for the test harness)
#![cfg_attr(not(test), no_std)]
// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]

pub mod button;
pub mod config;
pub mod inbox;

pub use button::ButtonState;
pub use inbox::{LinkMessage, Payload};
