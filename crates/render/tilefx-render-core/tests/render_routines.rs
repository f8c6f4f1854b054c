use std::cell::Cell;
use std::rc::Rc;

use tilefx_render_core::{
    color, ease_in_out_cubic, AnimationDesc, AnimationKind, CompositeMode, DrawOp, FrameContext,
    RenderConfig, Surface, TileRenderer, PADDING,
};

const WIDTH: f32 = 70.0;

fn approx(a: f32, b: f32, eps: f32) {
    assert!((a - b).abs() <= eps, "left={a} right={b} eps={eps}");
}

fn mk_renderer() -> TileRenderer {
    TileRenderer::new(RenderConfig::new(WIDTH)).expect("valid config")
}

fn render_once(renderer: &mut TileRenderer, animation: &mut AnimationDesc, now: f64) -> Surface {
    let mut surface = Surface::new();
    renderer
        .render(FrameContext {
            now,
            surface: &mut surface,
            width: WIDTH,
            height: WIDTH,
            animation,
        })
        .expect("render");
    surface
}

fn saves_and_restores(ops: &[DrawOp]) -> (usize, usize) {
    let saves = ops.iter().filter(|op| matches!(op, DrawOp::Save)).count();
    let restores = ops.iter().filter(|op| matches!(op, DrawOp::Restore)).count();
    (saves, restores)
}

fn position(ops: &[DrawOp], pred: impl Fn(&DrawOp) -> bool) -> usize {
    ops.iter()
        .position(pred)
        .unwrap_or_else(|| panic!("expected op not found in {ops:?}"))
}

/// it should compose the idle frame as translate, half-alpha shimmer, full-alpha outline
#[test]
fn idle_op_order() {
    let mut renderer = mk_renderer();
    let mut desc = AnimationDesc::new(AnimationKind::Idle, 0.0);
    let surface = render_once(&mut renderer, &mut desc, 2500.0);
    let ops = surface.ops();

    assert!(matches!(ops.first(), Some(DrawOp::Save)));
    assert!(matches!(ops.last(), Some(DrawOp::Restore)));
    let (saves, restores) = saves_and_restores(ops);
    assert_eq!(saves, restores);
    assert_eq!(surface.depth(), 0);

    let translate = position(ops, |op| {
        matches!(op, DrawOp::Translate { dx, dy } if *dx == PADDING && *dy == PADDING)
    });
    let half_alpha = position(ops, |op| matches!(op, DrawOp::SetAlpha { alpha } if *alpha == 0.5));
    let full_alpha = position(ops, |op| matches!(op, DrawOp::SetAlpha { alpha } if *alpha == 1.0));
    let outline = position(ops, |op| matches!(op, DrawOp::StrokeRoundedRect { .. }));
    assert!(translate < half_alpha);
    assert!(half_alpha < full_alpha);
    assert!(full_alpha < outline);
}

/// it should tint the flagged tile with a source-atop accent fill after the textures
#[test]
fn flagged_applies_source_atop_last() {
    let mut renderer = mk_renderer();
    let mut desc = AnimationDesc::new(AnimationKind::Flagged, 0.0);
    let surface = render_once(&mut renderer, &mut desc, 1234.0);
    let ops = surface.ops();

    let n = ops.len();
    assert!(matches!(ops[n - 1], DrawOp::Restore));
    match &ops[n - 2] {
        DrawOp::FillRect {
            x,
            y,
            width,
            height,
            color: fill,
        } => {
            assert_eq!((*x, *y), (0.0, 0.0));
            assert_eq!((*width, *height), (WIDTH, WIDTH));
            assert_eq!(*fill, color::ACCENT);
        }
        op => panic!("expected accent fill before restore, got {op:?}"),
    }
    assert!(matches!(
        ops[n - 3],
        DrawOp::SetComposite {
            mode: CompositeMode::SourceAtop
        }
    ));
    // the composite change stays inside the routine's save scope
    let save = position(ops, |op| matches!(op, DrawOp::Save));
    assert!(save < n - 3);
}

/// it should reuse the same shimmer frame for idle and flagged at the same timestamp
#[test]
fn idle_and_flagged_share_frame_selection() {
    let mut renderer = mk_renderer();
    let mut idle = AnimationDesc::new(AnimationKind::Idle, 0.0);
    let mut flagged = AnimationDesc::new(AnimationKind::Flagged, 0.0);

    let idle_ops = render_once(&mut renderer, &mut idle, 2500.0);
    let flagged_ops = render_once(&mut renderer, &mut flagged, 2500.0);

    // the shimmer replay (silhouette path up to its scope's restore) must be
    // identical in both
    let shimmer_of = |ops: &[DrawOp]| -> Vec<DrawOp> {
        let start = position(ops, |op| matches!(op, DrawOp::PathRoundedRect { .. }));
        let len = ops[start..]
            .iter()
            .position(|op| matches!(op, DrawOp::Restore))
            .expect("shimmer scope closes");
        ops[start..start + len].to_vec()
    };
    assert_eq!(shimmer_of(idle_ops.ops()), shimmer_of(flagged_ops.ops()));
}

/// it should draw the number glyph and only tint it when the surrounding reveal is on
#[test]
fn number_reveal_glyph_and_tint() {
    let mut renderer = mk_renderer();

    let mut plain = AnimationDesc::new(
        AnimationKind::NumberReveal {
            touching: 3,
            surrounding_reveal: false,
        },
        0.0,
    );
    let surface = render_once(&mut renderer, &mut plain, 600.0);
    let ops = surface.ops();
    let glyph = position(ops, |op| matches!(op, DrawOp::FillGlyph { glyph: '3', .. }));
    assert!(glyph > 0);
    assert!(!ops
        .iter()
        .any(|op| matches!(op, DrawOp::SetComposite { .. })));

    let mut tinted = AnimationDesc::new(
        AnimationKind::NumberReveal {
            touching: 3,
            surrounding_reveal: true,
        },
        0.0,
    );
    let surface = render_once(&mut renderer, &mut tinted, 600.0);
    let ops = surface.ops();
    let composite = position(ops, |op| {
        matches!(
            op,
            DrawOp::SetComposite {
                mode: CompositeMode::SourceAtop
            }
        )
    });
    let fill = position(ops, |op| {
        matches!(op, DrawOp::FillRect { color: fill, .. } if *fill == color::ACCENT)
    });
    assert!(composite < fill);
}

/// it should skip drawing entirely for frames before the animation start
#[test]
fn not_started_frames_draw_nothing() {
    let mut renderer = mk_renderer();
    for kind in [
        AnimationKind::NumberReveal {
            touching: 2,
            surrounding_reveal: false,
        },
        AnimationKind::FlashIn,
        AnimationKind::FlashOut,
    ] {
        let mut desc = AnimationDesc::new(kind, 1000.0);
        let surface = render_once(&mut renderer, &mut desc, 999.0);
        assert!(surface.is_empty(), "kind {kind:?} drew before start");
    }
}

/// it should render the flash-in midpoint scenario: t=0.5, alpha ~0.75, no callback
#[test]
fn flash_in_midpoint_scenario() {
    let fired = Rc::new(Cell::new(0u32));
    let counter = Rc::clone(&fired);
    let mut renderer = mk_renderer();
    let mut desc = AnimationDesc::with_done(AnimationKind::FlashIn, 1000.0, move || {
        counter.set(counter.get() + 1);
    });

    let surface = render_once(&mut renderer, &mut desc, 1050.0);
    let ops = surface.ops();
    assert_eq!(fired.get(), 0);
    assert!(desc.has_done_hook());

    let size = (WIDTH - 2.0 * PADDING) * 0.97;
    match &ops[1] {
        DrawOp::PathRoundedRect {
            x,
            y,
            width,
            height,
            radius,
        } => {
            assert_eq!((*x, *y), (PADDING, PADDING));
            approx(*width, size, 1e-4);
            approx(*height, size, 1e-4);
            approx(*radius, size * 76.0 / 650.0, 1e-4);
        }
        op => panic!("expected silhouette path, got {op:?}"),
    }
    assert!(matches!(ops[2], DrawOp::Clip));
    match &ops[3] {
        DrawOp::FillRect { color: fill, .. } => {
            assert_eq!((fill.r, fill.g, fill.b), (1.0, 1.0, 1.0));
            approx(fill.a, 0.75, 1e-5);
        }
        op => panic!("expected white wash, got {op:?}"),
    }
}

/// it should fire the completion callback once and clamp alpha at 1 past the end
#[test]
fn flash_in_completion_fires_once() {
    let fired = Rc::new(Cell::new(0u32));
    let counter = Rc::clone(&fired);
    let mut renderer = mk_renderer();
    let mut desc = AnimationDesc::with_done(AnimationKind::FlashIn, 1000.0, move || {
        counter.set(counter.get() + 1);
    });

    for now in [1101.0, 1200.0, 9999.0] {
        let surface = render_once(&mut renderer, &mut desc, now);
        let wash = surface
            .ops()
            .iter()
            .find_map(|op| match op {
                DrawOp::FillRect { color: fill, .. } => Some(*fill),
                _ => None,
            })
            .expect("end-state wash");
        approx(wash.a, 1.0, 1e-6);
    }
    assert_eq!(fired.get(), 1);
    assert!(!desc.has_done_hook());
}

/// it should fade the flash-out wash with the inverted cubic curve
#[test]
fn flash_out_alpha_curve() {
    let mut renderer = mk_renderer();
    let mut desc = AnimationDesc::new(AnimationKind::FlashOut, 1000.0);

    // 350ms into a 700ms fade: alpha = 1 - easeInOutCubic(0.5) = 0.5
    let surface = render_once(&mut renderer, &mut desc, 1350.0);
    let wash = surface
        .ops()
        .iter()
        .find_map(|op| match op {
            DrawOp::FillRect { color: fill, .. } => Some(*fill),
            _ => None,
        })
        .expect("wash fill");
    approx(wash.a, 1.0 - ease_in_out_cubic(0.5), 1e-6);
    approx(wash.a, 0.5, 1e-6);
}

/// it should leave the surface balanced when routines run back-to-back
#[test]
fn routines_compose_without_state_leaks() {
    let mut renderer = mk_renderer();
    let mut surface = Surface::new();

    let mut flash = AnimationDesc::new(AnimationKind::FlashOut, 0.0);
    let mut idle = AnimationDesc::new(AnimationKind::Idle, 0.0);
    let mut flagged = AnimationDesc::new(AnimationKind::Flagged, 0.0);

    for (animation, now) in [(&mut flash, 350.0), (&mut idle, 400.0), (&mut flagged, 450.0)] {
        renderer
            .render(FrameContext {
                now,
                surface: &mut surface,
                width: WIDTH,
                height: WIDTH,
                animation,
            })
            .expect("render");
    }

    assert_eq!(surface.depth(), 0);
    let (saves, restores) = saves_and_restores(surface.ops());
    assert_eq!(saves, restores);
    // each routine opened with its own save and closed it
    assert!(matches!(surface.ops().first(), Some(DrawOp::Save)));
    assert!(matches!(surface.ops().last(), Some(DrawOp::Restore)));
}
