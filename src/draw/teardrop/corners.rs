//! Teardrop outline computation
//!
//! Turns a track and the anchor it ends on into the four corners of a
//! teardrop polygon:
//!
//! ```text
//!            B
//!          /   \____
//!   D  (anchor)     ------ A   (tip, on the track)
//!          \   /----
//!            C
//! ```
//!
//! Corners are returned as `(A, B, D, C)`.

use crate::draw::geometry::{AnchorFeature, Point, TrackEnd, TrackSegment, Vec2};

use super::types::{TeardropError, TeardropParams};

/// Share of the anchor radius the back corner sits behind the anchor centre
const BACK_POINT_RADIUS_FACTOR: f64 = 0.5;

/// Compute the `(tip, shoulder B, back point, shoulder C)` corners
pub fn compute_teardrop_corners(
    track: &TrackSegment,
    anchor: &AnchorFeature,
    params: &TeardropParams,
) -> Result<[Point; 4], TeardropError> {
    params.validate()?;

    let (start, end) = oriented_ends(track, anchor);
    let vec = Vec2::unit_between(start, end).ok_or(TeardropError::DegenerateTrack(start))?;

    let angle = (params.vpercent / 100.0).asin();
    let vec_b = vec.rotated(angle);
    let vec_c = vec.rotated(-angle);

    let diameter = anchor.diameter as f64;
    let radius = diameter / 2.0;

    let tip = start.offset(vec, diameter * (1.0 + params.hpercent / 100.0));
    let shoulder_b = anchor.position.offset(vec_b, radius);
    let shoulder_c = anchor.position.offset(vec_c, radius);
    // Covers the anchor centre so the filled zone is not dropped
    let back = anchor.position.offset(-vec, radius * BACK_POINT_RADIUS_FACTOR);

    Ok([tip, shoulder_b, back, shoulder_c])
}

/// Track ends ordered so the first one is at the anchor
fn oriented_ends(track: &TrackSegment, anchor: &AnchorFeature) -> (Point, Point) {
    match track.end_near(anchor.position, anchor.radius()) {
        Some(TrackEnd::End) => (track.end, track.start),
        _ => (track.start, track.end),
    }
}
