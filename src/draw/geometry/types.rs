//! Core board primitives for teardrop generation
//!
//! Coordinates and lengths are integer board units (nanometres), matching the
//! host's integer grid. Direction math is done in `f64` and truncated back to
//! the grid only when a point is produced.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Neg, Sub};

/// Board length unit (nm)
pub type BoardUnit = i64;

/// A 2D point on the board grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: BoardUnit,
    pub y: BoardUnit,
}

impl Point {
    pub const fn new(x: BoardUnit, y: BoardUnit) -> Self {
        Self { x, y }
    }

    /// Euclidean length of the point seen as a vector
    pub fn norm(self) -> f64 {
        (self.x as f64).hypot(self.y as f64)
    }

    pub fn distance(self, other: Point) -> f64 {
        (other - self).norm()
    }

    /// Move along `dir` by `dist`, truncating each component toward zero
    pub fn offset(self, dir: Vec2, dist: f64) -> Point {
        self + dir.scaled(dist).truncate()
    }
}

impl Add for Point {
    type Output = Point;
    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;
    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Canonical text form used inside shape fingerprints: `(x, y)`
impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Floating-point direction vector
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Unit vector pointing from `from` to `to`, `None` when the points coincide
    pub fn unit_between(from: Point, to: Point) -> Option<Vec2> {
        let d = to - from;
        let norm = d.norm();
        if norm == 0.0 {
            return None;
        }
        Some(Vec2::new(d.x as f64 / norm, d.y as f64 / norm))
    }

    /// Rotate clockwise (in a y-up frame) by `angle` radians
    pub fn rotated(self, angle: f64) -> Vec2 {
        let (sin, cos) = angle.sin_cos();
        Vec2::new(
            self.x * cos + self.y * sin,
            -self.x * sin + self.y * cos,
        )
    }

    pub fn scaled(self, factor: f64) -> Vec2 {
        Vec2::new(self.x * factor, self.y * factor)
    }

    /// Drop to the integer grid, truncating toward zero
    pub fn truncate(self) -> Point {
        Point::new(self.x as BoardUnit, self.y as BoardUnit)
    }
}

impl Neg for Vec2 {
    type Output = Vec2;
    fn neg(self) -> Vec2 {
        Vec2::new(-self.x, -self.y)
    }
}

/// Which end of a track touches something
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackEnd {
    Start,
    End,
}

/// A straight copper trace (also used for arc tracks, by their chord)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackSegment {
    pub start: Point,
    pub end: Point,
    pub width: BoardUnit,
    pub layer: String,
    pub net_code: i32,
    #[serde(default)]
    pub clearance: BoardUnit,
    #[serde(default)]
    pub selected: bool,
}

impl TrackSegment {
    pub fn length(&self) -> f64 {
        self.start.distance(self.end)
    }

    /// Returns the end lying within `radius` of `point`, checking `start` first
    pub fn end_near(&self, point: Point, radius: f64) -> Option<TrackEnd> {
        if self.start.distance(point) <= radius {
            Some(TrackEnd::Start)
        } else if self.end.distance(point) <= radius {
            Some(TrackEnd::End)
        } else {
            None
        }
    }
}

/// A plated through hole
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Via {
    pub position: Point,
    pub width: BoardUnit,
    pub drill: BoardUnit,
    #[serde(default)]
    pub net_code: i32,
    #[serde(default)]
    pub selected: bool,
}

/// Pad attribute, as the host classifies pads
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PadAttribute {
    /// Plated through-hole
    Standard,
    Smd,
    Connector,
    NonPlated,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PadShape {
    Circle,
    Oval,
    Rect,
    RoundRect,
    Trapezoid,
}

/// Drill size of a pad (x may differ from y for slotted holes)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DrillSize {
    pub x: BoardUnit,
    pub y: BoardUnit,
}

/// A component pad
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pad {
    pub position: Point,
    pub shape: PadShape,
    pub attribute: PadAttribute,
    pub drill: DrillSize,
    #[serde(default)]
    pub net_code: i32,
    #[serde(default)]
    pub selected: bool,
}

/// Items returned by the host's track enumeration, classified once
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TrackItem {
    Segment(TrackSegment),
    Arc(TrackSegment),
    Via(Via),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorKind {
    Via { drill: BoardUnit },
    Pad,
}

/// A via or a round pad a teardrop can attach to
#[derive(Debug, Clone, PartialEq)]
pub struct AnchorFeature {
    pub position: Point,
    pub diameter: BoardUnit,
    pub selected: bool,
    pub kind: AnchorKind,
}

impl AnchorFeature {
    pub fn radius(&self) -> f64 {
        self.diameter as f64 / 2.0
    }
}

/// How a zone connects to pads of its own net
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PadConnection {
    None,
    ThermalRelief,
    #[default]
    Solid,
}

/// Host identity of a filled zone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ZoneId(pub u64);

/// A filled copper zone outline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Zone {
    pub layer: String,
    pub net_code: i32,
    pub clearance: BoardUnit,
    pub min_thickness: BoardUnit,
    #[serde(default)]
    pub pad_connection: PadConnection,
    #[serde(default)]
    pub filled: bool,
    pub corners: Vec<Point>,
}

/// The four corners of one teardrop plus the track properties it inherits
///
/// Corner order is tip, shoulder B, back point, shoulder C; it fixes the
/// polygon winding and must be kept when building the zone.
#[derive(Debug, Clone, PartialEq)]
pub struct TeardropShape {
    pub corners: [Point; 4],
    pub layer: String,
    pub net_code: i32,
    pub clearance: BoardUnit,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_display_is_stable() {
        assert_eq!(Point::new(-175, 178).to_string(), "(-175, 178)");
    }

    #[test]
    fn test_offset_truncates_toward_zero() {
        let p = Point::new(10, 10).offset(Vec2::new(-0.5, 0.5), 3.0);
        // -1.5 -> -1, 1.5 -> 1
        assert_eq!(p, Point::new(9, 11));
    }

    #[test]
    fn test_unit_between_coincident_points() {
        assert!(Vec2::unit_between(Point::new(5, 5), Point::new(5, 5)).is_none());
        let v = Vec2::unit_between(Point::new(0, 0), Point::new(0, 1000)).unwrap();
        assert_eq!(v, Vec2::new(0.0, 1.0));
    }

    #[test]
    fn test_end_near_prefers_start() {
        let track = TrackSegment {
            start: Point::new(0, 0),
            end: Point::new(100, 0),
            width: 10,
            layer: "F.Cu".to_string(),
            net_code: 1,
            clearance: 0,
            selected: false,
        };
        assert_eq!(track.end_near(Point::new(0, 0), 10.0), Some(TrackEnd::Start));
        assert_eq!(track.end_near(Point::new(95, 0), 5.0), Some(TrackEnd::End));
        assert_eq!(track.end_near(Point::new(50, 0), 5.0), None);
        assert_eq!(track.length(), 100.0);
    }
}
