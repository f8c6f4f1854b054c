//! tilefx-surface-core: display-list surface API (core, host-agnostic)
//!
//! The render core emits drawing operations as data; host adapters rasterize
//! them. This crate defines the operation set, the recording surface with its
//! save/restore discipline, the shared palette, and path helpers.

pub mod color;
pub mod helpers;
pub mod ops;
pub mod surface;

pub use color::Rgba;
pub use helpers::rounded_rectangle;
pub use ops::{CompositeMode, DrawOp};
pub use surface::{Surface, SurfaceError};
