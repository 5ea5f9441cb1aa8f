//! Weather icon ownership.
//!
//! Icons are loaded through an [`IconStore`] and held by an [`IconSlot`]. The
//! slot owns at most one loaded bitmap and always hands the previous one back
//! to the store before loading a replacement.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;

use crate::weather::ResourceId;
use crate::widgets::draw_baked_icon;

/// Source of icon bitmaps.
pub trait IconStore {
    type Bitmap;

    /// Load the bitmap for `id`.
    fn load(
        &mut self,
        id: ResourceId,
    ) -> Self::Bitmap;

    /// Give back a bitmap obtained from [`IconStore::load`].
    fn release(
        &mut self,
        bitmap: Self::Bitmap,
    );

    /// Composite `bitmap` with its top-left corner at `origin`.
    fn draw<D>(
        &self,
        bitmap: &Self::Bitmap,
        origin: Point,
        display: &mut D,
    ) where
        D: DrawTarget<Color = Rgb565>;
}

/// Icons drawn from the baked vector art in [`crate::widgets`].
///
/// Nothing is allocated, so the handle is just the resource id.
#[derive(Clone, Copy, Debug, Default)]
pub struct BakedIcons;

impl IconStore for BakedIcons {
    type Bitmap = ResourceId;

    fn load(
        &mut self,
        id: ResourceId,
    ) -> ResourceId {
        id
    }

    fn release(
        &mut self,
        _bitmap: ResourceId,
    ) {
    }

    fn draw<D>(
        &self,
        bitmap: &ResourceId,
        origin: Point,
        display: &mut D,
    ) where
        D: DrawTarget<Color = Rgb565>,
    {
        draw_baked_icon(display, *bitmap, origin);
    }
}

/// Holder for the currently displayed icon.
pub struct IconSlot<S: IconStore> {
    store: S,
    current: Option<(ResourceId, S::Bitmap)>,
}

impl<S: IconStore> IconSlot<S> {
    /// Empty slot; nothing is shown until the first [`IconSlot::show`].
    pub const fn new(store: S) -> Self {
        Self {
            store,
            current: None,
        }
    }

    /// Display `id`. Returns false when it was already shown.
    pub fn show(
        &mut self,
        id: ResourceId,
    ) -> bool {
        if self.current_id() == Some(id) {
            return false;
        }
        if let Some((_, previous)) = self.current.take() {
            self.store.release(previous);
        }
        let bitmap = self.store.load(id);
        self.current = Some((id, bitmap));
        true
    }

    /// Release the shown icon, if any.
    pub fn clear(&mut self) {
        if let Some((_, previous)) = self.current.take() {
            self.store.release(previous);
        }
    }

    #[inline]
    pub fn current_id(&self) -> Option<ResourceId> { self.current.as_ref().map(|(id, _)| *id) }

    /// Draw the shown icon at `origin`; draws nothing when empty.
    pub fn draw<D>(
        &self,
        display: &mut D,
        origin: Point,
    ) where
        D: DrawTarget<Color = Rgb565>,
    {
        if let Some((_, bitmap)) = &self.current {
            self.store.draw(bitmap, origin, display);
        }
    }

    #[inline]
    pub const fn store(&self) -> &S { &self.store }
}

impl<S: IconStore> Drop for IconSlot<S> {
    fn drop(&mut self) { self.clear(); }
}

// =============================================================================
// Unit Tests
// =============================================================================
