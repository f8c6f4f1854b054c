//! Animation dispatcher and the per-kind render routines.
//!
//! The renderer owns the two process-lifetime texture caches and maps each
//! animation descriptor to its routine. Every routine records its compositing
//! operations in a fixed order inside a save/restore scope, so routines are
//! safely callable back-to-back on a shared surface.

use log::debug;
use tilefx_surface_core::{color, rounded_rectangle, CompositeMode, Surface, SurfaceError};

use crate::config::{ConfigError, RenderConfig};
use crate::context::FrameContext;
use crate::descriptor::{finite_progress, looping_frame, AnimationKind, Progress};
use crate::easing::{ease_in_out_cubic, ease_out_quad};
use crate::textures::cache::TextureCache;
use crate::textures::icons::static_texture_generator;
use crate::textures::shimmer::shimmer_texture_generator;
use crate::textures::{StaticTexture, CORNER_RADIUS_RATIO};

/// Gutter between the tile texture and the cell edge, in pixels.
pub const PADDING: f32 = 5.0;

/// Owns the texture caches and dispatches animation descriptors to their
/// render routines.
#[derive(Debug)]
pub struct TileRenderer {
    cfg: RenderConfig,
    shimmer: TextureCache,
    icons: TextureCache,
}

impl TileRenderer {
    /// Build both texture caches for the configured tile size. Constructing
    /// the renderer is the one-time cache initialization: render calls cannot
    /// observe an uninitialized cache, and a different tile size means
    /// constructing a new renderer.
    pub fn new(cfg: RenderConfig) -> Result<Self, ConfigError> {
        cfg.validate()?;
        let tile_size = cfg.texture_size - 2.0 * PADDING;
        let shimmer = TextureCache::new(
            shimmer_texture_generator(tile_size, cfg.shimmer_frames),
            tile_size,
            cfg.shimmer_frames,
        );
        let icons = TextureCache::new(
            static_texture_generator(tile_size),
            tile_size,
            StaticTexture::COUNT,
        );
        debug!(
            "tile renderer ready: {}px textures, {} shimmer frames",
            cfg.texture_size, cfg.shimmer_frames
        );
        Ok(Self {
            cfg,
            shimmer,
            icons,
        })
    }

    pub fn config(&self) -> &RenderConfig {
        &self.cfg
    }

    /// Render one frame of `ctx.animation` onto `ctx.surface`.
    pub fn render(&mut self, ctx: FrameContext<'_>) -> Result<(), SurfaceError> {
        match ctx.animation.kind {
            AnimationKind::Idle => self.idle(ctx),
            AnimationKind::Flagged => self.flagged(ctx),
            AnimationKind::NumberReveal {
                touching,
                surrounding_reveal,
            } => self.number(touching, surrounding_reveal, ctx),
            AnimationKind::FlashIn => self.flash_in(ctx),
            AnimationKind::FlashOut => self.flash_out(ctx),
        }
    }

    fn idle(&mut self, ctx: FrameContext<'_>) -> Result<(), SurfaceError> {
        let FrameContext {
            now,
            surface,
            animation,
            ..
        } = ctx;
        let timing = animation.kind.timing();
        let idx = looping_frame(now, animation.start, timing.duration, self.shimmer.slot_count());
        let shimmer = &mut self.shimmer;
        let icons = &mut self.icons;
        surface.scoped(|s| {
            s.translate(PADDING, PADDING);
            s.set_alpha(0.5);
            shimmer.draw(idx, s)?;
            s.set_alpha(1.0);
            icons.draw(StaticTexture::Outline.index(), s)
        })
    }

    fn flagged(&mut self, ctx: FrameContext<'_>) -> Result<(), SurfaceError> {
        let FrameContext {
            now,
            surface,
            width,
            height,
            animation,
        } = ctx;
        let timing = animation.kind.timing();
        let idx = looping_frame(now, animation.start, timing.duration, self.shimmer.slot_count());
        let shimmer = &mut self.shimmer;
        let icons = &mut self.icons;
        surface.scoped(|s| {
            s.translate(PADDING, PADDING);
            shimmer.draw(idx, s)?;
            icons.draw(StaticTexture::Outline.index(), s)?;
            s.set_composite(CompositeMode::SourceAtop);
            s.fill_rect(0.0, 0.0, width, height, color::ACCENT);
            Ok(())
        })
    }

    fn number(
        &mut self,
        touching: u8,
        surrounding_reveal: bool,
        ctx: FrameContext<'_>,
    ) -> Result<(), SurfaceError> {
        let FrameContext {
            now,
            surface,
            width,
            height,
            animation,
        } = ctx;
        let timing = animation.kind.timing();
        if finite_progress(now, animation.start, timing.duration) == Progress::NotStarted {
            return Ok(());
        }
        let icons = &mut self.icons;
        surface.scoped(|s| {
            s.translate(PADDING, PADDING);
            icons.draw(StaticTexture::for_touching(touching).index(), s)?;
            if surrounding_reveal {
                s.set_composite(CompositeMode::SourceAtop);
                s.fill_rect(0.0, 0.0, width, height, color::ACCENT);
            }
            Ok(())
        })
    }

    fn flash_in(&mut self, ctx: FrameContext<'_>) -> Result<(), SurfaceError> {
        let FrameContext {
            now,
            surface,
            width,
            height,
            animation,
        } = ctx;
        let timing = animation.kind.timing();
        let normalized = match finite_progress(now, animation.start, timing.duration) {
            Progress::NotStarted => return Ok(()),
            Progress::Running(t) => t,
            Progress::Finished => {
                animation.finish();
                1.0
            }
        };
        surface.scoped(|s| {
            clip_tile_silhouette(s, width);
            s.fill_rect(
                0.0,
                0.0,
                width,
                height,
                color::WHITE.with_alpha(ease_out_quad(normalized)),
            );
        });
        Ok(())
    }

    fn flash_out(&mut self, ctx: FrameContext<'_>) -> Result<(), SurfaceError> {
        let FrameContext {
            now,
            surface,
            width,
            height,
            animation,
        } = ctx;
        let timing = animation.kind.timing();
        let normalized = match finite_progress(now, animation.start, timing.duration) {
            Progress::NotStarted => return Ok(()),
            Progress::Running(t) => t,
            Progress::Finished => {
                animation.finish();
                1.0
            }
        };
        surface.scoped(|s| {
            clip_tile_silhouette(s, width);
            s.fill_rect(
                0.0,
                0.0,
                width,
                height,
                color::WHITE.with_alpha(1.0 - ease_in_out_cubic(normalized)),
            );
        });
        Ok(())
    }
}

/// Clip to the tile's rounded-square silhouette, leaving a small buffer on
/// each side for the border.
fn clip_tile_silhouette(surface: &mut Surface, width: f32) {
    let size = (width - 2.0 * PADDING) * 0.97;
    rounded_rectangle(
        surface,
        PADDING,
        PADDING,
        size,
        size,
        size * CORNER_RADIUS_RATIO,
    );
    surface.clip();
}
