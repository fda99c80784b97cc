//! Geometry module for teardrop generation
//!
//! # Submodules
//! - `types` - Board primitives (Point, TrackSegment, Via, Pad, Zone, etc.)
//! - `spatial` - Spatial indexing of anchors for endpoint lookups

mod types;
mod spatial;

pub use types::{
    BoardUnit,
    Point,
    Vec2,
    TrackEnd,
    TrackSegment,
    Via,
    PadAttribute,
    PadShape,
    DrillSize,
    Pad,
    TrackItem,
    AnchorKind,
    AnchorFeature,
    PadConnection,
    ZoneId,
    Zone,
    TeardropShape,
};

pub use spatial::{
    AnchorEntry,
    build_anchor_index,
    anchors_around,
};
