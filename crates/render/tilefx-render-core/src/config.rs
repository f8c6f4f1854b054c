//! Renderer configuration.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::renderer::PADDING;

/// Sizing for the texture caches. Fixed for the lifetime of the renderer;
/// a different tile size means constructing a new renderer.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct RenderConfig {
    /// Edge length of one cell texture in pixels, including the padding
    /// gutter on each side.
    pub texture_size: f32,
    /// Discrete frames in the looping shimmer animation.
    pub shimmer_frames: usize,
}

impl RenderConfig {
    pub fn new(texture_size: f32) -> Self {
        Self {
            texture_size,
            shimmer_frames: 300,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let min = 2.0 * PADDING;
        if !self.texture_size.is_finite() || self.texture_size <= min {
            return Err(ConfigError::TextureTooSmall {
                min,
                got: self.texture_size,
            });
        }
        if self.shimmer_frames == 0 {
            return Err(ConfigError::NoShimmerFrames);
        }
        Ok(())
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("texture size must be greater than {min} pixels, got {got}")]
    TextureTooSmall { min: f32, got: f32 },
    #[error("shimmer frame count must be non-zero")]
    NoShimmerFrames,
}
