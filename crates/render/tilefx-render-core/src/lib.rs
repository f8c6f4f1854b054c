#![allow(dead_code)]
//! Tilefx Render Core (host-agnostic)
//!
//! Maps a per-cell animation descriptor plus a wall-clock timestamp to draw
//! operations on a shared display-list surface. Procedurally generated tile
//! textures (shimmer frames, static icons) are memoized in slot caches so
//! each discrete index is generated at most once per process and replayed
//! bit-identically afterwards.

pub mod config;
pub mod context;
pub mod descriptor;
pub mod easing;
pub mod renderer;
pub mod textures;

// Re-exports for consumers (host adapters)
pub use config::{ConfigError, RenderConfig};
pub use context::FrameContext;
pub use descriptor::{
    finite_progress, looping_frame, AnimationDesc, AnimationKind, KindTiming, Progress,
};
pub use easing::{ease_in_out_cubic, ease_out_quad};
pub use renderer::{TileRenderer, PADDING};
pub use textures::{
    cache::TextureCache, icons::static_texture_generator, shimmer::shimmer_texture_generator,
    StaticTexture, TextureGenerator,
};
pub use tilefx_surface_core::{
    color, helpers, CompositeMode, DrawOp, Rgba, Surface, SurfaceError,
};
