//! Drawing operations recorded by a [`Surface`](crate::surface::Surface).
//!
//! The set is canvas-flavored and closed: state ops (save/restore, transform,
//! alpha, composite mode), a rounded-rect path + clip pair, and filled
//! primitives that carry their own color.

use serde::{Deserialize, Serialize};

use crate::color::Rgba;

/// Blend mode for subsequent fills.
#[derive(Copy, Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum CompositeMode {
    /// Normal alpha blending.
    #[default]
    SourceOver,
    /// Paint only where existing pixels are already present; used to tint
    /// icon/shimmer silhouettes without bleeding outside their shape.
    SourceAtop,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(tag = "op", content = "data")]
pub enum DrawOp {
    /// Push the current transform/clip/alpha/composite state.
    Save,
    /// Pop back to the most recent saved state.
    Restore,
    Translate {
        dx: f32,
        dy: f32,
    },
    /// Global alpha applied to subsequent fills.
    SetAlpha {
        alpha: f32,
    },
    SetComposite {
        mode: CompositeMode,
    },
    /// Trace a rounded-rectangle path for a following [`DrawOp::Clip`].
    PathRoundedRect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        radius: f32,
    },
    /// Intersect the clip region with the current path.
    Clip,
    FillRect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        color: Rgba,
    },
    FillRoundedRect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        radius: f32,
        color: Rgba,
    },
    StrokeRoundedRect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        radius: f32,
        line_width: f32,
        color: Rgba,
    },
    FillCircle {
        cx: f32,
        cy: f32,
        radius: f32,
        color: Rgba,
    },
    FillTriangle {
        a: [f32; 2],
        b: [f32; 2],
        c: [f32; 2],
        color: Rgba,
    },
    /// Single glyph centered on (x, y) at the given em size.
    FillGlyph {
        glyph: char,
        x: f32,
        y: f32,
        size: f32,
        color: Rgba,
    },
}
