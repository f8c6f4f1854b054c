//! Unrevealed-tile shimmer: a looping glint pass over the rounded tile base.

use std::f32::consts::TAU;

use tilefx_surface_core::{color, rounded_rectangle};

use super::{TextureGenerator, CORNER_RADIUS_RATIO};

/// Build the generator for the unrevealed-shimmer family: `frames` discrete
/// frames of `tile_size` pixels. The frame phase is derived only from
/// `index / frames`, so the sequence tiles seamlessly when replayed in a
/// loop and the output depends on nothing but the baked size and the index.
pub fn shimmer_texture_generator(tile_size: f32, frames: usize) -> TextureGenerator {
    Box::new(move |index, surface| {
        assert!(
            index < frames,
            "shimmer frame {index} out of range (frame count {frames})"
        );
        let phase = index as f32 / frames as f32 * TAU;
        let radius = tile_size * CORNER_RADIUS_RATIO;
        surface.scoped(|s| {
            // Confine the glints to the tile silhouette.
            rounded_rectangle(s, 0.0, 0.0, tile_size, tile_size, radius);
            s.clip();
            s.fill_rounded_rect(0.0, 0.0, tile_size, tile_size, radius, color::TILE_BASE);
            for lane in 0..3u32 {
                let lane = lane as f32;
                let drift = phase + lane * 2.1;
                let cx = (0.5 + 0.38 * drift.cos()) * tile_size;
                let cy = (0.5 + 0.38 * (drift * 0.5 + lane).sin()) * tile_size;
                let r = tile_size * (0.06 + 0.02 * lane);
                let glow = 0.25 + 0.15 * (drift.sin() * 0.5 + 0.5);
                s.fill_circle(cx, cy, r, color::SHIMMER_GLINT.with_alpha(glow));
            }
        });
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tilefx_surface_core::Surface;

    #[test]
    fn frames_are_deterministic_and_distinct() {
        let generator = shimmer_texture_generator(60.0, 300);

        let mut a = Surface::new();
        generator(17, &mut a);
        let mut b = Surface::new();
        generator(17, &mut b);
        assert_eq!(a.ops(), b.ops());

        let mut c = Surface::new();
        generator(18, &mut c);
        assert_ne!(a.ops(), c.ops());
    }

    #[test]
    fn recording_is_balanced() {
        let generator = shimmer_texture_generator(60.0, 300);
        let mut s = Surface::new();
        generator(0, &mut s);
        assert_eq!(s.depth(), 0);
    }
}
