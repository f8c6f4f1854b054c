//! Static icon family: tile outline, numeric glyphs, flag, mine.

use tilefx_surface_core::{color, Surface};

use super::{StaticTexture, TextureGenerator, CORNER_RADIUS_RATIO};

/// Build the generator for the static icon family at `tile_size` pixels.
/// Indices follow [`StaticTexture`]'s dense ordering.
pub fn static_texture_generator(tile_size: f32) -> TextureGenerator {
    Box::new(move |index, surface| {
        let Some(icon) = StaticTexture::from_index(index) else {
            panic!(
                "static texture index {index} out of range (variant count {})",
                StaticTexture::COUNT
            );
        };
        match icon {
            // A zero tile shows no glyph; the slot caches an empty recording.
            StaticTexture::Number0 => {}
            StaticTexture::Number1
            | StaticTexture::Number2
            | StaticTexture::Number3
            | StaticTexture::Number4
            | StaticTexture::Number5
            | StaticTexture::Number6
            | StaticTexture::Number7
            | StaticTexture::Number8 => draw_number(icon, tile_size, surface),
            StaticTexture::Outline => draw_outline(tile_size, surface),
            StaticTexture::Flag => draw_flag(tile_size, surface),
            StaticTexture::Mine => draw_mine(tile_size, surface),
        }
    })
}

fn draw_number(icon: StaticTexture, tile_size: f32, surface: &mut Surface) {
    let Some(glyph) = icon.glyph() else { return };
    let touching = icon.index() as u8;
    surface.fill_glyph(
        glyph,
        tile_size / 2.0,
        tile_size / 2.0,
        tile_size * 0.55,
        color::number_color(touching),
    );
}

fn draw_outline(tile_size: f32, surface: &mut Surface) {
    let line_width = tile_size * 0.04;
    let inset = line_width / 2.0;
    let edge = tile_size - line_width;
    surface.stroke_rounded_rect(
        inset,
        inset,
        edge,
        edge,
        edge * CORNER_RADIUS_RATIO,
        line_width,
        color::GRID_LINE,
    );
}

fn draw_flag(tile_size: f32, surface: &mut Surface) {
    let pole_x = 0.32 * tile_size;
    let pole_w = 0.05 * tile_size;
    surface.fill_rect(pole_x, 0.18 * tile_size, pole_w, 0.62 * tile_size, color::GRID_LINE);
    surface.fill_triangle(
        [pole_x + pole_w, 0.18 * tile_size],
        [0.76 * tile_size, 0.32 * tile_size],
        [pole_x + pole_w, 0.46 * tile_size],
        color::FLAG_RED,
    );
}

fn draw_mine(tile_size: f32, surface: &mut Surface) {
    let center = tile_size / 2.0;
    let body = 0.22 * tile_size;
    let spike = 0.36 * tile_size;
    let half = 0.07 * tile_size;
    surface.fill_circle(center, center, body, color::MINE_DARK);
    // four spikes, one per cardinal direction
    surface.fill_triangle(
        [center - half, center],
        [center + half, center],
        [center, center - spike],
        color::MINE_DARK,
    );
    surface.fill_triangle(
        [center - half, center],
        [center + half, center],
        [center, center + spike],
        color::MINE_DARK,
    );
    surface.fill_triangle(
        [center, center - half],
        [center, center + half],
        [center - spike, center],
        color::MINE_DARK,
    );
    surface.fill_triangle(
        [center, center - half],
        [center, center + half],
        [center + spike, center],
        color::MINE_DARK,
    );
    surface.fill_circle(
        center - 0.08 * tile_size,
        center - 0.08 * tile_size,
        0.06 * tile_size,
        color::WHITE.with_alpha(0.6),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use tilefx_surface_core::DrawOp;

    #[test]
    fn zero_tile_records_nothing() {
        let generator = static_texture_generator(60.0);
        let mut s = Surface::new();
        generator(StaticTexture::Number0.index(), &mut s);
        assert!(s.is_empty());
    }

    #[test]
    fn numbers_draw_their_glyph_in_their_color() {
        let generator = static_texture_generator(60.0);
        for touching in 1..=8u8 {
            let mut s = Surface::new();
            generator(StaticTexture::for_touching(touching).index(), &mut s);
            match s.ops() {
                [DrawOp::FillGlyph { glyph, color, .. }] => {
                    assert_eq!(*glyph, char::from_digit(touching as u32, 10).unwrap());
                    assert_eq!(*color, color::number_color(touching));
                }
                ops => panic!("expected a single glyph op, got {ops:?}"),
            }
        }
    }

    #[test]
    fn every_variant_records_balanced_ops() {
        let generator = static_texture_generator(60.0);
        for index in 0..StaticTexture::COUNT {
            let mut s = Surface::new();
            generator(index, &mut s);
            assert_eq!(s.depth(), 0, "variant {index} left a scope open");
        }
    }
}
