//! Per-frame render context.

use tilefx_surface_core::Surface;

use crate::descriptor::AnimationDesc;

/// Ephemeral bundle handed to the renderer once per cell per frame; never
/// stored.
#[derive(Debug)]
pub struct FrameContext<'a> {
    /// Wall-clock timestamp in milliseconds.
    pub now: f64,
    pub surface: &'a mut Surface,
    pub width: f32,
    pub height: f32,
    pub animation: &'a mut AnimationDesc,
}
