//! Viewport-aware placement for floating panels (tooltips)
//!
//! Given the trigger's bounding box, the viewport size and a preferred side,
//! computes the anchor point for the panel's reference edge and the side the
//! panel actually ended up on.
//!
//! The decision is a pipeline of small stages, each usable on its own:
//!
//! 1. [`candidate`] - anchor for a side, `offset` away from the trigger
//! 2. [`flip`] - switch to the opposite side if the requested side clips
//! 3. [`clamp_cross_axis`] - slide along the trigger so the panel stays inside
//! 4. [`fallback`] - if the chosen side still clips, force the roomiest side
//!
//! Panel footprint relative to the anchor:
//!
//! | side   | horizontal         | vertical           |
//! |--------|--------------------|--------------------|
//! | bottom | `x - w/2 .. x + w/2` | `y .. y + h`       |
//! | top    | `x - w/2 .. x + w/2` | `y - h .. y`       |
//! | left   | `x - w .. x`       | `y - h/2 .. y + h/2` |
//! | right  | `x .. x + w`       | `y - h/2 .. y + h/2` |

use serde::Deserialize;
use tracing::debug;

/// Side of the trigger the panel is placed on
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    #[default]
    Top,
    Bottom,
    Left,
    Right,
}

impl Side {
    /// All sides, in fallback preference order
    pub const FALLBACK_ORDER: [Side; 4] = [Side::Bottom, Side::Top, Side::Right, Side::Left];

    pub fn opposite(self) -> Side {
        match self {
            Side::Top => Side::Bottom,
            Side::Bottom => Side::Top,
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    /// True for top/bottom, whose primary axis is vertical
    pub fn is_vertical(self) -> bool {
        matches!(self, Side::Top | Side::Bottom)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Side::Top => "top",
            Side::Bottom => "bottom",
            Side::Left => "left",
            Side::Right => "right",
        }
    }
}

/// A point in viewport coordinates
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned box in viewport coordinates (matches `DOMRect`)
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            right: left + width,
            bottom: top + height,
            width,
            height,
        }
    }

    pub fn from_edges(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
            width: right - left,
            height: bottom - top,
        }
    }

    pub fn center_x(&self) -> f64 {
        (self.left + self.right) / 2.0
    }

    pub fn center_y(&self) -> f64 {
        (self.top + self.bottom) / 2.0
    }

    /// Whether `other` lies inside this rect, allowing `tolerance` of float drift
    pub fn contains(&self, other: &Rect, tolerance: f64) -> bool {
        other.left >= self.left - tolerance
            && other.top >= self.top - tolerance
            && other.right <= self.right + tolerance
            && other.bottom <= self.bottom + tolerance
    }
}

/// Window dimensions at the time of the request
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Output of [`resolve`]: where the panel's reference edge goes, and on which side
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResolvedPlacement {
    pub anchor: Point,
    pub side: Side,
}

impl ResolvedPlacement {
    /// The panel footprint implied by this placement
    pub fn panel_rect(&self, config: &PlacementConfig) -> Rect {
        let w = config.panel_width;
        let h = config.panel_height;
        let Point { x, y } = self.anchor;
        match self.side {
            Side::Bottom => Rect::new(x - w / 2.0, y, w, h),
            Side::Top => Rect::new(x - w / 2.0, y - h, w, h),
            Side::Left => Rect::new(x - w, y - h / 2.0, w, h),
            Side::Right => Rect::new(x, y - h / 2.0, w, h),
        }
    }
}

/// Footprint estimates and spacing used for boundary math.
///
/// The panel size is an estimate of the rendered bubble, not its actual size.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct PlacementConfig {
    pub panel_width: f64,
    pub panel_height: f64,
    /// Minimum clearance between panel and viewport edge
    pub margin: f64,
    /// Gap between trigger and panel
    pub offset: f64,
}

impl Default for PlacementConfig {
    fn default() -> Self {
        Self {
            panel_width: 300.0,
            panel_height: 120.0,
            margin: 20.0,
            offset: 12.0,
        }
    }
}

impl PlacementConfig {
    /// Run the full candidate → flip → clamp → fallback pipeline
    pub fn resolve(&self, rect: &Rect, viewport: Viewport, requested: Side) -> ResolvedPlacement {
        let side = flip(self, rect, viewport, requested);
        let anchor = clamp_cross_axis(self, viewport, side, candidate(self, rect, side));
        let placement = fallback(self, rect, viewport, ResolvedPlacement { anchor, side });

        if placement.side != requested {
            debug!(
                "Tooltip placement moved from {} to {} (viewport {}x{})",
                requested.as_str(),
                placement.side.as_str(),
                viewport.width,
                viewport.height
            );
        }
        placement
    }

    /// The margined viewport the panel must stay inside
    pub fn bounds(&self, viewport: Viewport) -> Rect {
        Rect::from_edges(
            self.margin,
            self.margin,
            viewport.width - self.margin,
            viewport.height - self.margin,
        )
    }

    /// Whether the placement's footprint fits on its primary axis (both edges)
    pub fn fits_primary(&self, viewport: Viewport, placement: &ResolvedPlacement) -> bool {
        let panel = placement.panel_rect(self);
        let bounds = self.bounds(viewport);
        if placement.side.is_vertical() {
            panel.top >= bounds.top && panel.bottom <= bounds.bottom
        } else {
            panel.left >= bounds.left && panel.right <= bounds.right
        }
    }

    /// Space left over on `side` once the panel and offset are accounted for.
    /// Negative when the panel cannot fit there.
    fn slack(&self, rect: &Rect, viewport: Viewport, side: Side) -> f64 {
        let bounds = self.bounds(viewport);
        match side {
            Side::Bottom => bounds.bottom - (rect.bottom + self.offset) - self.panel_height,
            Side::Top => (rect.top - self.offset) - bounds.top - self.panel_height,
            Side::Right => bounds.right - (rect.right + self.offset) - self.panel_width,
            Side::Left => (rect.left - self.offset) - bounds.left - self.panel_width,
        }
    }
}

/// Resolve a placement with the default footprint, margin and offset
pub fn resolve(rect: &Rect, viewport: Viewport, requested: Side) -> ResolvedPlacement {
    PlacementConfig::default().resolve(rect, viewport, requested)
}

/// Anchor for `side`, `offset` away from the trigger and centered on it
pub fn candidate(config: &PlacementConfig, rect: &Rect, side: Side) -> Point {
    match side {
        Side::Bottom => Point::new(rect.center_x(), rect.bottom + config.offset),
        Side::Top => Point::new(rect.center_x(), rect.top - config.offset),
        Side::Left => Point::new(rect.left - config.offset, rect.center_y()),
        Side::Right => Point::new(rect.right + config.offset, rect.center_y()),
    }
}

/// Whether the panel at `anchor` runs past the far viewport edge on `side`
pub fn overflows(config: &PlacementConfig, viewport: Viewport, side: Side, anchor: Point) -> bool {
    match side {
        Side::Bottom => anchor.y + config.panel_height > viewport.height - config.margin,
        Side::Top => anchor.y - config.panel_height < config.margin,
        Side::Left => anchor.x - config.panel_width < config.margin,
        Side::Right => anchor.x + config.panel_width > viewport.width - config.margin,
    }
}

/// The requested side, or its opposite when the requested side clips
pub fn flip(config: &PlacementConfig, rect: &Rect, viewport: Viewport, requested: Side) -> Side {
    if overflows(config, viewport, requested, candidate(config, rect, requested)) {
        requested.opposite()
    } else {
        requested
    }
}

/// Keep the panel's half-extent on the cross axis inside the margined viewport
pub fn clamp_cross_axis(
    config: &PlacementConfig,
    viewport: Viewport,
    side: Side,
    anchor: Point,
) -> Point {
    let m = config.margin;
    if side.is_vertical() {
        let half = config.panel_width / 2.0;
        Point::new(
            clamp_span(anchor.x, m + half, viewport.width - m - half),
            anchor.y,
        )
    } else {
        let half = config.panel_height / 2.0;
        Point::new(
            anchor.x,
            clamp_span(anchor.y, m + half, viewport.height - m - half),
        )
    }
}

/// Keep the panel's extent on the primary axis inside the margined viewport.
///
/// Only used once a side is forced; the panel may then overlap the trigger.
pub fn clamp_primary_axis(
    config: &PlacementConfig,
    viewport: Viewport,
    side: Side,
    anchor: Point,
) -> Point {
    let m = config.margin;
    let w = config.panel_width;
    let h = config.panel_height;
    match side {
        Side::Bottom => Point::new(anchor.x, clamp_span(anchor.y, m, viewport.height - m - h)),
        Side::Top => Point::new(anchor.x, clamp_span(anchor.y, m + h, viewport.height - m)),
        Side::Right => Point::new(clamp_span(anchor.x, m, viewport.width - m - w), anchor.y),
        Side::Left => Point::new(clamp_span(anchor.x, m + w, viewport.width - m), anchor.y),
    }
}

/// Force the roomiest side when the chosen one still clips.
///
/// Ties go to the earlier side in [`Side::FALLBACK_ORDER`], so bottom wins
/// when nothing has more room.
pub fn fallback(
    config: &PlacementConfig,
    rect: &Rect,
    viewport: Viewport,
    placement: ResolvedPlacement,
) -> ResolvedPlacement {
    if config.fits_primary(viewport, &placement) {
        return placement;
    }

    let mut side = Side::FALLBACK_ORDER[0];
    let mut best = config.slack(rect, viewport, side);
    for candidate_side in &Side::FALLBACK_ORDER[1..] {
        let slack = config.slack(rect, viewport, *candidate_side);
        if slack > best {
            best = slack;
            side = *candidate_side;
        }
    }

    let anchor = candidate(config, rect, side);
    let anchor = clamp_cross_axis(config, viewport, side, anchor);
    let anchor = clamp_primary_axis(config, viewport, side, anchor);
    ResolvedPlacement { anchor, side }
}

/// `value` clamped into `[lo, hi]`; the midpoint when the range is empty.
///
/// `f64::clamp` panics on `lo > hi`, which happens for viewports smaller
/// than the panel.
fn clamp_span(value: f64, lo: f64, hi: f64) -> f64 {
    if lo > hi {
        (lo + hi) / 2.0
    } else {
        value.max(lo).min(hi)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DESKTOP: Viewport = Viewport {
        width: 1024.0,
        height: 768.0,
    };

    fn config() -> PlacementConfig {
        PlacementConfig::default()
    }

    fn assert_contained(placement: &ResolvedPlacement, viewport: Viewport) {
        let config = config();
        let panel = placement.panel_rect(&config);
        assert!(
            config.bounds(viewport).contains(&panel, 1e-9),
            "panel {panel:?} escapes viewport {viewport:?}"
        );
    }

    #[test]
    fn test_candidate_per_side() {
        let rect = Rect::from_edges(100.0, 200.0, 140.0, 220.0);
        let c = config();
        assert_eq!(candidate(&c, &rect, Side::Bottom), Point::new(120.0, 232.0));
        assert_eq!(candidate(&c, &rect, Side::Top), Point::new(120.0, 188.0));
        assert_eq!(candidate(&c, &rect, Side::Left), Point::new(88.0, 210.0));
        assert_eq!(candidate(&c, &rect, Side::Right), Point::new(152.0, 210.0));
    }

    #[test]
    fn test_rect_constructors_agree() {
        assert_eq!(
            Rect::new(10.0, 20.0, 30.0, 40.0),
            Rect::from_edges(10.0, 20.0, 40.0, 60.0)
        );
    }

    #[test]
    fn test_requested_side_kept_when_room() {
        let rect = Rect::from_edges(450.0, 400.0, 550.0, 420.0);
        let placement = resolve(&rect, DESKTOP, Side::Top);
        assert_eq!(placement.side, Side::Top);
        assert_eq!(placement.anchor, Point::new(500.0, 388.0));
    }

    #[test]
    fn test_bottom_near_viewport_bottom_flips_to_top() {
        let rect = Rect::from_edges(500.0, 750.0, 600.0, 760.0);
        let placement = resolve(&rect, DESKTOP, Side::Bottom);
        assert_eq!(placement.side, Side::Top);
        assert_eq!(placement.anchor, Point::new(550.0, 738.0));
        assert_contained(&placement, DESKTOP);
    }

    #[test]
    fn test_left_near_viewport_left_flips_to_right() {
        let rect = Rect::from_edges(10.0, 300.0, 60.0, 320.0);
        let placement = resolve(&rect, DESKTOP, Side::Left);
        assert_eq!(placement.side, Side::Right);
        assert_eq!(placement.anchor, Point::new(72.0, 310.0));
        assert_contained(&placement, DESKTOP);
    }

    #[test]
    fn test_top_near_viewport_top_flips_to_bottom() {
        let rect = Rect::from_edges(400.0, 30.0, 480.0, 50.0);
        let placement = resolve(&rect, DESKTOP, Side::Top);
        assert_eq!(placement.side, Side::Bottom);
        assert_eq!(placement.anchor.y, 62.0);
    }

    #[test]
    fn test_right_near_viewport_right_flips_to_left() {
        let rect = Rect::from_edges(900.0, 300.0, 980.0, 320.0);
        let placement = resolve(&rect, DESKTOP, Side::Right);
        assert_eq!(placement.side, Side::Left);
        assert_eq!(placement.anchor.x, 888.0);
    }

    #[test]
    fn test_cross_axis_clamped_near_left_edge() {
        // Brand title in the header corner
        let rect = Rect::from_edges(32.0, 24.0, 200.0, 56.0);
        let placement = resolve(&rect, DESKTOP, Side::Bottom);
        assert_eq!(placement.side, Side::Bottom);
        assert_eq!(placement.anchor.x, 170.0);
        assert_contained(&placement, DESKTOP);
    }

    #[test]
    fn test_cross_axis_clamped_near_bottom_edge() {
        let rect = Rect::from_edges(100.0, 730.0, 140.0, 750.0);
        let placement = resolve(&rect, DESKTOP, Side::Right);
        assert_eq!(placement.side, Side::Right);
        assert_eq!(placement.anchor.y, 688.0);
        assert_contained(&placement, DESKTOP);
    }

    #[test]
    fn test_fallback_moves_to_roomier_axis_when_vertical_is_tight() {
        let viewport = Viewport::new(1024.0, 200.0);
        let rect = Rect::from_edges(500.0, 90.0, 600.0, 110.0);
        let placement = resolve(&rect, viewport, Side::Top);
        assert_eq!(placement.side, Side::Left);
        assert_eq!(placement.anchor, Point::new(488.0, 100.0));
        assert_contained(&placement, viewport);
    }

    #[test]
    fn test_fallback_prefers_bottom_on_tie() {
        let viewport = Viewport::new(350.0, 200.0);
        let rect = Rect::from_edges(165.0, 90.0, 185.0, 110.0);
        let placement = resolve(&rect, viewport, Side::Top);
        assert_eq!(placement.side, Side::Bottom);
        assert_eq!(placement.anchor, Point::new(175.0, 60.0));
        assert_contained(&placement, viewport);
    }

    #[test]
    fn test_trigger_above_viewport_is_pulled_back_in() {
        let rect = Rect::from_edges(300.0, -200.0, 400.0, -180.0);
        let placement = resolve(&rect, DESKTOP, Side::Bottom);
        assert_eq!(placement.side, Side::Bottom);
        assert_contained(&placement, DESKTOP);
    }

    #[test]
    fn test_zero_viewport_does_not_panic() {
        let rect = Rect::from_edges(10.0, 10.0, 20.0, 20.0);
        for side in Side::FALLBACK_ORDER {
            let placement = resolve(&rect, Viewport::default(), side);
            assert!(placement.anchor.x.is_finite());
            assert!(placement.anchor.y.is_finite());
        }
    }

    #[test]
    fn test_resolve_is_idempotent() {
        let rect = Rect::from_edges(980.0, 740.0, 1010.0, 760.0);
        let first = resolve(&rect, DESKTOP, Side::Right);
        let second = resolve(&rect, DESKTOP, Side::Right);
        assert_eq!(first, second);
    }

    #[test]
    fn test_custom_config_changes_flip_threshold() {
        let small = PlacementConfig {
            panel_width: 100.0,
            panel_height: 40.0,
            margin: 8.0,
            offset: 4.0,
        };
        let rect = Rect::from_edges(500.0, 680.0, 600.0, 700.0);
        assert_eq!(small.resolve(&rect, DESKTOP, Side::Bottom).side, Side::Bottom);
        assert_eq!(resolve(&rect, DESKTOP, Side::Bottom).side, Side::Top);
    }

    #[test]
    fn test_clamp_span_empty_range_is_midpoint() {
        assert_eq!(clamp_span(5.0, 10.0, 0.0), 5.0);
        assert_eq!(clamp_span(-3.0, 0.0, 10.0), 0.0);
        assert_eq!(clamp_span(30.0, 0.0, 10.0), 10.0);
    }

    #[test]
    fn test_side_opposites() {
        for side in Side::FALLBACK_ORDER {
            assert_eq!(side.opposite().opposite(), side);
            assert_eq!(side.opposite().is_vertical(), side.is_vertical());
        }
    }

    #[test]
    fn test_config_deserializes_partial() {
        let config: PlacementConfig = serde_json::from_str(r#"{"margin": 8}"#).unwrap();
        assert_eq!(config.margin, 8.0);
        assert_eq!(config.panel_width, 300.0);
    }
}
