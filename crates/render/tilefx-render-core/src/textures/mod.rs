//! Procedural texture generators and their memoizing cache.

pub mod cache;
pub mod icons;
pub mod shimmer;

use serde::{Deserialize, Serialize};
use tilefx_surface_core::Surface;

/// Corner radius of the tile silhouette as a fraction of its edge length.
pub const CORNER_RADIUS_RATIO: f32 = 76.0 / 650.0;

/// Deterministic draw of one discrete frame or icon variant into local
/// (0, 0)-origin coordinates. Same index, same output — the precondition
/// that makes caching sound.
pub type TextureGenerator = Box<dyn Fn(usize, &mut Surface)>;

/// Bounded enumeration of the static icon family. Indices are dense so the
/// variants map directly onto cache slots.
#[derive(Copy, Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum StaticTexture {
    Number0,
    Number1,
    Number2,
    Number3,
    Number4,
    Number5,
    Number6,
    Number7,
    Number8,
    Outline,
    Flag,
    Mine,
}

impl StaticTexture {
    /// Total number of icon variants; the icon cache's slot count.
    pub const COUNT: usize = 12;

    const ALL: [StaticTexture; Self::COUNT] = [
        StaticTexture::Number0,
        StaticTexture::Number1,
        StaticTexture::Number2,
        StaticTexture::Number3,
        StaticTexture::Number4,
        StaticTexture::Number5,
        StaticTexture::Number6,
        StaticTexture::Number7,
        StaticTexture::Number8,
        StaticTexture::Outline,
        StaticTexture::Flag,
        StaticTexture::Mine,
    ];

    /// Dense cache-slot index.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Icon for a numeric reveal with `touching` adjacent mines (0..=8).
    pub fn for_touching(touching: u8) -> Self {
        assert!(touching <= 8, "touching count out of range: {touching}");
        Self::ALL[touching as usize]
    }

    /// Glyph drawn for this variant, if it is a numeric one. Zero tiles show
    /// no glyph.
    pub(crate) fn glyph(self) -> Option<char> {
        match self.index() {
            n @ 1..=8 => char::from_digit(n as u32, 10),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_roundtrip() {
        for index in 0..StaticTexture::COUNT {
            let icon = StaticTexture::from_index(index).expect("dense index");
            assert_eq!(icon.index(), index);
        }
        assert_eq!(StaticTexture::from_index(StaticTexture::COUNT), None);
    }

    #[test]
    fn touching_maps_to_number_variants() {
        assert_eq!(StaticTexture::for_touching(0), StaticTexture::Number0);
        assert_eq!(StaticTexture::for_touching(8), StaticTexture::Number8);
        assert_eq!(StaticTexture::for_touching(3).glyph(), Some('3'));
        assert_eq!(StaticTexture::Number0.glyph(), None);
        assert_eq!(StaticTexture::Mine.glyph(), None);
    }

    #[test]
    #[should_panic(expected = "touching count out of range")]
    fn touching_out_of_range_panics() {
        let _ = StaticTexture::for_touching(9);
    }
}
