//! Recording surface: an append-only display list with save/restore depth
//! tracking.
//!
//! Routines treat surface state as a stack: every Save they push must be
//! matched by a Restore before they return. [`Surface::scoped`] makes that
//! pairing structural; [`Surface::finish`] rejects recordings that leave a
//! scope open.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::color::Rgba;
use crate::ops::{CompositeMode, DrawOp};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SurfaceError {
    #[error("restore without a matching save")]
    UnbalancedRestore,
    #[error("{depth} save scope(s) left open at finish")]
    UnbalancedSave { depth: usize },
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Surface {
    ops: Vec<DrawOp>,
    depth: usize,
}

impl Surface {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn save(&mut self) {
        self.depth += 1;
        self.ops.push(DrawOp::Save);
    }

    #[inline]
    pub fn restore(&mut self) -> Result<(), SurfaceError> {
        if self.depth == 0 {
            return Err(SurfaceError::UnbalancedRestore);
        }
        self.depth -= 1;
        self.ops.push(DrawOp::Restore);
        Ok(())
    }

    /// Run `f` between a Save/Restore pair. State changes made inside the
    /// closure cannot leak to operations recorded after it.
    pub fn scoped<R>(&mut self, f: impl FnOnce(&mut Self) -> R) -> R {
        self.save();
        let out = f(self);
        self.ops.push(DrawOp::Restore);
        self.depth -= 1;
        out
    }

    #[inline]
    pub fn translate(&mut self, dx: f32, dy: f32) {
        self.ops.push(DrawOp::Translate { dx, dy });
    }

    #[inline]
    pub fn set_alpha(&mut self, alpha: f32) {
        self.ops.push(DrawOp::SetAlpha { alpha });
    }

    #[inline]
    pub fn set_composite(&mut self, mode: CompositeMode) {
        self.ops.push(DrawOp::SetComposite { mode });
    }

    pub(crate) fn path_rounded_rect(
        &mut self,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        radius: f32,
    ) {
        self.ops.push(DrawOp::PathRoundedRect {
            x,
            y,
            width,
            height,
            radius,
        });
    }

    /// Intersect the clip region with the most recently traced path.
    #[inline]
    pub fn clip(&mut self) {
        self.ops.push(DrawOp::Clip);
    }

    pub fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Rgba) {
        self.ops.push(DrawOp::FillRect {
            x,
            y,
            width,
            height,
            color,
        });
    }

    pub fn fill_rounded_rect(
        &mut self,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        radius: f32,
        color: Rgba,
    ) {
        self.ops.push(DrawOp::FillRoundedRect {
            x,
            y,
            width,
            height,
            radius,
            color,
        });
    }

    pub fn stroke_rounded_rect(
        &mut self,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        radius: f32,
        line_width: f32,
        color: Rgba,
    ) {
        self.ops.push(DrawOp::StrokeRoundedRect {
            x,
            y,
            width,
            height,
            radius,
            line_width,
            color,
        });
    }

    pub fn fill_circle(&mut self, cx: f32, cy: f32, radius: f32, color: Rgba) {
        self.ops.push(DrawOp::FillCircle {
            cx,
            cy,
            radius,
            color,
        });
    }

    pub fn fill_triangle(&mut self, a: [f32; 2], b: [f32; 2], c: [f32; 2], color: Rgba) {
        self.ops.push(DrawOp::FillTriangle { a, b, c, color });
    }

    pub fn fill_glyph(&mut self, glyph: char, x: f32, y: f32, size: f32, color: Rgba) {
        self.ops.push(DrawOp::FillGlyph {
            glyph,
            x,
            y,
            size,
            color,
        });
    }

    /// Append a previously recorded, balanced operation sequence verbatim.
    pub fn replay(&mut self, ops: &[DrawOp]) {
        self.ops.extend_from_slice(ops);
    }

    #[inline]
    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.ops.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Open save scopes.
    #[inline]
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Consume the recording, requiring every save scope to be closed.
    pub fn finish(self) -> Result<Vec<DrawOp>, SurfaceError> {
        if self.depth != 0 {
            return Err(SurfaceError::UnbalancedSave { depth: self.depth });
        }
        Ok(self.ops)
    }
}
