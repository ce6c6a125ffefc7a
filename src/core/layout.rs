//! Pure track geometry helpers.
//!
//! Nothing here holds state: the engine feeds current inputs in and stores the
//! returned geometry.

use serde::{Deserialize, Serialize};

use crate::core::types::SlideMovement;

/// Drag distance (absolute, in px) up to which a pointer session still counts
/// as a click.
pub const CLICK_DRAG_THRESHOLD_PX: f64 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TrackMargins {
    pub left_px: f64,
    pub right_px: f64,
}

impl TrackMargins {
    #[must_use]
    pub fn new(left_px: f64, right_px: f64) -> Self {
        Self { left_px, right_px }
    }
}

/// Numbers driving the visual position of the track.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TrackGeometry {
    pub track_width_px: f64,
    pub transform_px: f64,
    pub margin_left_px: f64,
    pub margin_right_px: f64,
    pub transition_enabled: bool,
}

/// CSS-ready string form of [`TrackGeometry`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackStyle {
    pub width: String,
    pub transition_duration: Option<String>,
    pub transform: String,
    pub margin_left: String,
    pub margin_right: String,
}

#[must_use]
pub fn track_width(observed_width_px: f64, slide_count: usize) -> f64 {
    observed_width_px * slide_count as f64
}

/// `true` when the session moved far enough to be styled as a drag.
#[must_use]
pub fn is_dragging(movement: &SlideMovement, threshold_px: f64) -> bool {
    movement.drag_offset.abs() > threshold_px
}

/// Per-item offset. The last item never receives one, so no whitespace trails
/// the final slide.
#[must_use]
pub fn item_offset(index: usize, slide_count: usize, offset_px: f64) -> f64 {
    if index + 1 >= slide_count {
        0.0
    } else {
        offset_px
    }
}

/// Explicit item width wins; otherwise the observed width is split across the
/// visible page.
#[must_use]
pub fn effective_item_width(
    explicit_px: Option<f64>,
    observed_width_px: f64,
    slides_per_page: u32,
) -> f64 {
    match explicit_px {
        Some(width) => width,
        None => observed_width_px / f64::from(slides_per_page.max(1)),
    }
}

/// Half-up rounding (`-0.5` rounds to `0`, `0.5` rounds to `1`).
#[must_use]
pub fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// Unclamped nearest slide: `active - round_half_up(drag / item_width)`.
///
/// Dragging left (negative offset) advances to later slides. A non-positive
/// item width keeps the active index.
#[must_use]
pub fn raw_nearest_slide_index(
    drag_offset_px: f64,
    item_width_px: f64,
    active_index: usize,
) -> i64 {
    let active = i64::try_from(active_index).unwrap_or(i64::MAX);
    if !item_width_px.is_finite() || item_width_px <= 0.0 || !drag_offset_px.is_finite() {
        return active;
    }
    let slide_delta = round_half_up(drag_offset_px / item_width_px) as i64;
    active.saturating_sub(slide_delta)
}

/// Clamps a raw index into `[0, slide_count - 1]`. `None` for empty collections.
#[must_use]
pub fn clamp_slide_index(raw: i64, slide_count: usize) -> Option<usize> {
    let last = slide_count.checked_sub(1)?;
    if raw <= 0 {
        return Some(0);
    }
    Some(usize::try_from(raw).map_or(last, |index| index.min(last)))
}

#[must_use]
pub fn nearest_slide_index(
    drag_offset_px: f64,
    item_width_px: f64,
    active_index: usize,
    slide_count: usize,
) -> Option<usize> {
    clamp_slide_index(
        raw_nearest_slide_index(drag_offset_px, item_width_px, active_index),
        slide_count,
    )
}

/// Track translation when the host does not supply one.
#[must_use]
pub fn default_transform_offset(
    active_index: usize,
    item_width_px: f64,
    offset_px: f64,
    drag_offset_px: f64,
) -> f64 {
    drag_offset_px - active_index as f64 * (item_width_px + offset_px)
}

#[must_use]
pub fn resolve_track_style(geometry: &TrackGeometry, animation_speed_ms: u32) -> TrackStyle {
    TrackStyle {
        width: css_px(geometry.track_width_px),
        transition_duration: geometry
            .transition_enabled
            .then(|| format!("{animation_speed_ms}ms, {animation_speed_ms}ms")),
        transform: format!("translateX({})", css_px(geometry.transform_px)),
        margin_left: css_px(geometry.margin_left_px),
        margin_right: css_px(geometry.margin_right_px),
    }
}

fn css_px(value: f64) -> String {
    // normalize -0.0 so styles stay stable across recomputes
    let value = if value == 0.0 { 0.0 } else { value };
    format!("{value}px")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_half_up_breaks_ties_towards_positive_infinity() {
        assert_eq!(round_half_up(0.5), 1.0);
        assert_eq!(round_half_up(-0.5), 0.0);
        assert_eq!(round_half_up(-1.5), -1.0);
        assert_eq!(round_half_up(1.49), 1.0);
    }

    #[test]
    fn clamp_handles_empty_and_out_of_range() {
        assert_eq!(clamp_slide_index(3, 0), None);
        assert_eq!(clamp_slide_index(-4, 3), Some(0));
        assert_eq!(clamp_slide_index(9, 3), Some(2));
        assert_eq!(clamp_slide_index(1, 3), Some(1));
    }

    #[test]
    fn css_px_never_emits_negative_zero() {
        assert_eq!(css_px(-0.0), "0px");
        assert_eq!(css_px(-12.5), "-12.5px");
        assert_eq!(css_px(1200.0), "1200px");
    }

    #[test]
    fn zero_item_width_keeps_active_index() {
        assert_eq!(raw_nearest_slide_index(-500.0, 0.0, 2), 2);
        assert_eq!(raw_nearest_slide_index(f64::NAN, 100.0, 1), 1);
    }
}
