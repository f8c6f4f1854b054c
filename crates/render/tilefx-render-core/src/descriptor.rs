//! Animation descriptors, the per-kind timing table, and progress math.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Closed set of per-tile visual states, chosen by the caller per cell per
/// frame.
#[derive(Copy, Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum AnimationKind {
    Idle,
    FlashIn,
    FlashOut,
    NumberReveal {
        /// Adjacent mine count, 0..=8.
        touching: u8,
        /// Tint the glyph with the accent color when the surrounding reveal
        /// is available.
        surrounding_reveal: bool,
    },
    Flagged,
}

/// Duration and loop policy for one animation kind.
#[derive(Copy, Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct KindTiming {
    /// Total length in milliseconds.
    pub duration: f64,
    /// Looping kinds wrap modulo the duration instead of completing.
    pub loops: bool,
}

impl AnimationKind {
    /// Timing lookup. Adding a kind is a data addition here, not new control
    /// flow.
    pub fn timing(self) -> KindTiming {
        match self {
            AnimationKind::Idle | AnimationKind::Flagged => KindTiming {
                duration: 5000.0,
                loops: true,
            },
            AnimationKind::NumberReveal { .. } => KindTiming {
                duration: 2000.0,
                loops: false,
            },
            AnimationKind::FlashIn => KindTiming {
                duration: 100.0,
                loops: false,
            },
            AnimationKind::FlashOut => KindTiming {
                duration: 700.0,
                loops: false,
            },
        }
    }
}

/// Per-cell animation record: which animation is active, when it started,
/// and an optional one-shot completion hook.
///
/// `start` is fixed at creation. The hook is the only field the engine ever
/// mutates: it is taken (moved out) the first time the animation completes
/// and can never be invoked again.
pub struct AnimationDesc {
    pub kind: AnimationKind,
    /// Wall-clock start in milliseconds.
    pub start: f64,
    done: Option<Box<dyn FnOnce()>>,
}

impl AnimationDesc {
    pub fn new(kind: AnimationKind, start: f64) -> Self {
        Self {
            kind,
            start,
            done: None,
        }
    }

    pub fn with_done(kind: AnimationKind, start: f64, done: impl FnOnce() + 'static) -> Self {
        Self {
            kind,
            start,
            done: Some(Box::new(done)),
        }
    }

    /// Invoke and consume the completion hook. Safe to call on every frame
    /// past the end; only the first call observes a hook.
    pub fn finish(&mut self) {
        if let Some(done) = self.done.take() {
            done();
        }
    }

    pub fn has_done_hook(&self) -> bool {
        self.done.is_some()
    }
}

impl fmt::Debug for AnimationDesc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnimationDesc")
            .field("kind", &self.kind)
            .field("start", &self.start)
            .field("done", &self.done.is_some())
            .finish()
    }
}

/// Where a finite (non-looping) animation is at a given timestamp.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Progress {
    /// `now` precedes `start`; draw nothing this frame.
    NotStarted,
    /// Normalized progress in (0, 1).
    Running(f32),
    /// Progress reached 1; render the clamped end state.
    Finished,
}

impl Progress {
    /// Clamped progress value, or `None` before the start threshold.
    pub fn value(self) -> Option<f32> {
        match self {
            Progress::NotStarted => None,
            Progress::Running(t) => Some(t),
            Progress::Finished => Some(1.0),
        }
    }
}

/// Normalized progress of a finite animation, monotonic in `now`.
pub fn finite_progress(now: f64, start: f64, duration: f64) -> Progress {
    let normalized = (now - start) / duration;
    if normalized < 0.0 {
        Progress::NotStarted
    } else if normalized >= 1.0 {
        Progress::Finished
    } else {
        Progress::Running(normalized as f32)
    }
}

fn fmod(a: f64, b: f64) -> f64 {
    if b == 0.0 {
        return 0.0;
    }
    let m = a % b;
    if (m < 0.0 && b > 0.0) || (m > 0.0 && b < 0.0) {
        m + b
    } else {
        m
    }
}

/// Discrete frame index for a looping animation. Wraps modulo the duration;
/// negative elapsed time is normalized into range, so the index is always in
/// `0..frames`.
pub fn looping_frame(now: f64, start: f64, duration: f64, frames: usize) -> usize {
    debug_assert!(frames > 0, "looping animation needs at least one frame");
    let normalized = fmod((now - start) / duration, 1.0);
    ((normalized * frames as f64) as usize).min(frames - 1)
}
