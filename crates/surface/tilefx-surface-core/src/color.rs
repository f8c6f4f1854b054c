//! Color values and the palette shared by the tile render routines.
//! All components are linear f32 in [0, 1].

use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    /// Opaque color.
    #[inline]
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    #[inline]
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Same color with a different alpha.
    #[inline]
    pub const fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }
}

pub const WHITE: Rgba = Rgba::rgb(1.0, 1.0, 1.0);

/// Accent tint painted source-atop over flagged tiles and surrounding reveals.
pub const ACCENT: Rgba = Rgba::rgb(0.157, 0.894, 0.741);

/// Unrevealed tile body.
pub const TILE_BASE: Rgba = Rgba::rgb(0.086, 0.106, 0.204);

/// Tile outline and neutral glyph color.
pub const GRID_LINE: Rgba = Rgba::rgb(0.847, 0.871, 0.914);

/// Highlight dots of the shimmer pass; alpha is modulated per frame.
pub const SHIMMER_GLINT: Rgba = Rgba::rgb(0.565, 0.780, 0.988);

pub const FLAG_RED: Rgba = Rgba::rgb(0.918, 0.263, 0.337);

pub const MINE_DARK: Rgba = Rgba::rgb(0.137, 0.141, 0.180);

/// Glyph palette for numeric reveals, indexed by touching count 1..=8.
const NUMBER_COLORS: [Rgba; 8] = [
    Rgba::rgb(0.353, 0.710, 0.980), // 1
    Rgba::rgb(0.345, 0.859, 0.569), // 2
    Rgba::rgb(0.992, 0.694, 0.282), // 3
    Rgba::rgb(0.918, 0.263, 0.337), // 4
    Rgba::rgb(0.718, 0.455, 0.976), // 5
    Rgba::rgb(0.157, 0.894, 0.741), // 6
    Rgba::rgb(0.976, 0.859, 0.345), // 7
    Rgba::rgb(0.847, 0.871, 0.914), // 8
];

/// Glyph color for a numeric reveal. Zero never draws a glyph and maps to the
/// neutral grid color.
#[inline]
pub fn number_color(touching: u8) -> Rgba {
    match touching {
        1..=8 => NUMBER_COLORS[touching as usize - 1],
        _ => GRID_LINE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_alpha_keeps_channels() {
        let c = ACCENT.with_alpha(0.25);
        assert_eq!(c.r, ACCENT.r);
        assert_eq!(c.g, ACCENT.g);
        assert_eq!(c.b, ACCENT.b);
        assert_eq!(c.a, 0.25);
    }

    #[test]
    fn number_colors_cover_full_range() {
        for touching in 1..=8u8 {
            assert_ne!(number_color(touching), TILE_BASE);
        }
        assert_eq!(number_color(0), GRID_LINE);
        assert_eq!(number_color(9), GRID_LINE);
    }
}
