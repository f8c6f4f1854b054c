//! Generic path-drawing primitives shared by render routines and texture
//! generators.

use crate::surface::Surface;

/// Trace a rounded-rectangle path for a following clip or fill. The corner
/// radius is clamped so it never exceeds half of either extent.
pub fn rounded_rectangle(
    surface: &mut Surface,
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    radius: f32,
) {
    let radius = radius.min(width / 2.0).min(height / 2.0).max(0.0);
    surface.path_rounded_rect(x, y, width, height, radius);
}
