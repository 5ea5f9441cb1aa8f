//! Timing constants for the simulator.
//!
//! These use `std::time::Duration`, which is not available in `no_std`, so
//! they live here rather than in the common crate.

use std::time::Duration;

/// Target frame time (~50 FPS). The main loop sleeps if a frame completes early.
pub const FRAME_TIME: Duration = Duration::from_millis(20);

/// Window pixel scale; the face is only 144x168.
pub const WINDOW_SCALE: u32 = 3;
