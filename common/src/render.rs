//! Render state tracking.
//!
//! The face is three stacked layers: the static dial, the weather readout
//! and the hands. Events mark the layers they touch; the platform loop asks
//! [`RenderState::needs_redraw`] once per iteration and only pushes a frame
//! when something is dirty.
//!
//! | Layer | Marked by |
//! |-------|-----------|
//! | Dial | First frame, display cleared externally |
//! | Weather | Complete inbound message |
//! | Hands | Minute tick, hide/show toggle |
//!
//! The hands sweep over the dial and the readout, so any dirty layer causes
//! the dial and everything above it to be recomposed. Only a dirty dial
//! layer also wipes the corners outside the disc.

/// One layer of the face.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Layer {
    Dial,
    Weather,
    Hands,
}

impl Layer {
    const fn bit(self) -> u8 {
        match self {
            Self::Dial => 1 << 0,
            Self::Weather => 1 << 1,
            Self::Hands => 1 << 2,
        }
    }
}

/// Dirty flags for the three layers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RenderState {
    dirty: u8,
}

impl RenderState {
    /// Everything dirty: the first frame paints the whole face.
    pub const fn new() -> Self {
        Self {
            dirty: Layer::Dial.bit() | Layer::Weather.bit() | Layer::Hands.bit(),
        }
    }

    #[inline]
    pub fn mark(
        &mut self,
        layer: Layer,
    ) {
        self.dirty |= layer.bit();
    }

    #[inline]
    pub const fn is_dirty(
        &self,
        layer: Layer,
    ) -> bool {
        self.dirty & layer.bit() != 0
    }

    /// Something changed since the last frame.
    #[inline]
    pub const fn needs_redraw(&self) -> bool { self.dirty != 0 }

    /// The display was wiped by someone else (e.g. the simulator log page).
    pub fn mark_display_cleared(&mut self) {
        self.mark(Layer::Dial);
        self.mark(Layer::Weather);
        self.mark(Layer::Hands);
    }

    /// Call after a frame has been drawn.
    pub fn end_frame(&mut self) {
        self.dirty = 0;
    }
}

impl Default for RenderState {
    fn default() -> Self { Self::new() }
}

// =============================================================================
// Unit Tests
// =============================================================================
