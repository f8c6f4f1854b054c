//! Memoizing cache over a texture generator: at-most-once generation per
//! index, bit-identical replay forever after.

use std::fmt;

use log::debug;
use tilefx_surface_core::{DrawOp, Surface, SurfaceError};

use super::TextureGenerator;

/// Slot cache wrapping a [`TextureGenerator`]. The slot space is small and
/// bounded (one slot per discrete frame or icon variant), so there is no
/// eviction: once filled, a slot is replayed for the lifetime of the cache.
pub struct TextureCache {
    generator: TextureGenerator,
    size: f32,
    slots: Vec<Option<Vec<DrawOp>>>,
}

impl TextureCache {
    /// Wrap `generator`, allocating `slot_count` empty slots for textures of
    /// `size` pixels.
    pub fn new(generator: TextureGenerator, size: f32, slot_count: usize) -> Self {
        Self {
            generator,
            size,
            slots: vec![None; slot_count],
        }
    }

    /// Draw the texture at `index` onto `surface`. The first request for an
    /// index records the generator's output; every request replays the
    /// recording verbatim.
    ///
    /// An index outside `0..slot_count` is a caller contract violation and
    /// panics. A generator that leaves a save scope open fails the recording
    /// with [`SurfaceError::UnbalancedSave`].
    pub fn draw(&mut self, index: usize, surface: &mut Surface) -> Result<(), SurfaceError> {
        assert!(
            index < self.slots.len(),
            "texture index {index} out of range (slot count {})",
            self.slots.len()
        );
        if self.slots[index].is_none() {
            let mut recording = Surface::new();
            (self.generator)(index, &mut recording);
            let ops = recording.finish()?;
            debug!(
                "cached texture slot {index} ({} ops at {}px)",
                ops.len(),
                self.size
            );
            self.slots[index] = Some(ops);
        }
        if let Some(ops) = &self.slots[index] {
            surface.replay(ops);
        }
        Ok(())
    }

    pub fn is_cached(&self, index: usize) -> bool {
        self.slots.get(index).is_some_and(|slot| slot.is_some())
    }

    #[inline]
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// Texture edge length baked into the generator, in pixels.
    #[inline]
    pub fn size(&self) -> f32 {
        self.size
    }
}

impl fmt::Debug for TextureCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cached = self.slots.iter().filter(|slot| slot.is_some()).count();
        f.debug_struct("TextureCache")
            .field("size", &self.size)
            .field("slot_count", &self.slots.len())
            .field("cached", &cached)
            .finish()
    }
}
