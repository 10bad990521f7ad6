//! Property-based invariant tests for tooltip placement.
//!
//! 1. The panel stays inside the margined viewport whenever it can fit.
//! 2. Bottom flips to top when bottom clips and top has room.
//! 3. Resolving the same input twice gives the same answer.
//! 4. Degenerate input never panics and never yields NaN or infinity.

use anomeme_ui::placement::{resolve, PlacementConfig, Rect, Side, Viewport};
use proptest::prelude::*;

const TOLERANCE: f64 = 1e-6;

// ── Helpers ─────────────────────────────────────────────────────────────

fn side_strategy() -> impl Strategy<Value = Side> {
    prop_oneof![
        Just(Side::Top),
        Just(Side::Bottom),
        Just(Side::Left),
        Just(Side::Right),
    ]
}

/// Viewports at least as large as the margined default panel
fn roomy_viewport_strategy() -> impl Strategy<Value = Viewport> {
    (340.0f64..=2560.0, 160.0f64..=1600.0).prop_map(|(w, h)| Viewport::new(w, h))
}

/// A trigger somewhere inside `viewport`
fn trigger_in(viewport: Viewport) -> impl Strategy<Value = Rect> {
    (0.0f64..=1.0, 0.0f64..=1.0, 0.0f64..=200.0, 0.0f64..=80.0).prop_map(
        move |(fx, fy, w, h)| {
            let w = w.min(viewport.width);
            let h = h.min(viewport.height);
            let left = fx * (viewport.width - w);
            let top = fy * (viewport.height - h);
            Rect::new(left, top, w, h)
        },
    )
}

fn viewport_and_trigger() -> impl Strategy<Value = (Viewport, Rect)> {
    roomy_viewport_strategy().prop_flat_map(|vp| (Just(vp), trigger_in(vp)))
}

// ═════════════════════════════════════════════════════════════════════════
// 1. Containment
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn panel_stays_inside_viewport((viewport, rect) in viewport_and_trigger(), side in side_strategy()) {
        let config = PlacementConfig::default();
        let placement = resolve(&rect, viewport, side);
        let panel = placement.panel_rect(&config);
        prop_assert!(
            config.bounds(viewport).contains(&panel, TOLERANCE),
            "panel {:?} escapes {:?} (trigger {:?}, requested {:?}, got {:?})",
            panel, viewport, rect, side, placement.side
        );
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 2. Flip determinism
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn bottom_flips_to_top_when_only_top_has_room(
        width in 340.0f64..=2560.0,
        height in 400.0f64..=1600.0,
        fx in 0.0f64..=1.0,
        trigger_w in 0.0f64..=200.0,
        trigger_h in 0.0f64..=40.0,
    ) {
        let config = PlacementConfig::default();
        let viewport = Viewport::new(width, height);
        // Bottom edge within panel_height + offset + margin of the viewport bottom
        let lowest_clear = height - config.margin - config.offset - config.panel_height;
        let bottom = lowest_clear + 1.0;
        let top = bottom - trigger_h;
        prop_assume!(top - config.offset - config.panel_height >= config.margin);
        let left = fx * (width - trigger_w);
        let rect = Rect::from_edges(left, top, left + trigger_w, bottom);

        let placement = resolve(&rect, viewport, Side::Bottom);
        prop_assert_eq!(placement.side, Side::Top);
        prop_assert!((placement.anchor.y - (top - config.offset)).abs() < TOLERANCE);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3. Idempotence
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn resolve_is_deterministic((viewport, rect) in viewport_and_trigger(), side in side_strategy()) {
        prop_assert_eq!(resolve(&rect, viewport, side), resolve(&rect, viewport, side));
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4. Totality on degenerate input
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn degenerate_input_stays_finite(
        vw in -100.0f64..=400.0,
        vh in -100.0f64..=200.0,
        left in -5000.0f64..=5000.0,
        top in -5000.0f64..=5000.0,
        w in -50.0f64..=500.0,
        h in -50.0f64..=500.0,
        side in side_strategy(),
    ) {
        let placement = resolve(&Rect::new(left, top, w, h), Viewport::new(vw, vh), side);
        prop_assert!(placement.anchor.x.is_finite());
        prop_assert!(placement.anchor.y.is_finite());
    }
}
