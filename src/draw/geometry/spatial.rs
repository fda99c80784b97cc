//! Spatial index over teardrop anchors
//!
//! Each anchor is stored by its bounding square so a track endpoint can find
//! the few anchors it may touch without scanning the whole board.

use rstar::{RTree, RTreeObject, AABB};

use super::types::{AnchorFeature, Point};

/// Anchor wrapper for R-tree spatial indexing
#[derive(Clone, Debug)]
pub struct AnchorEntry {
    /// Position of the anchor in the slice the index was built from
    pub index: usize,
    pub bounds: AABB<[f64; 2]>,
}

impl AnchorEntry {
    pub fn new(index: usize, anchor: &AnchorFeature) -> Self {
        let r = anchor.radius();
        let (x, y) = (anchor.position.x as f64, anchor.position.y as f64);
        let bounds = AABB::from_corners([x - r, y - r], [x + r, y + r]);
        Self { index, bounds }
    }
}

impl RTreeObject for AnchorEntry {
    type Envelope = AABB<[f64; 2]>;
    fn envelope(&self) -> Self::Envelope {
        self.bounds
    }
}

/// Build an index over `anchors`, skipping anchors without a usable diameter
///
/// Entry indices count every anchor yielded, skipped ones included.
pub fn build_anchor_index<'a, I>(anchors: I) -> RTree<AnchorEntry>
where
    I: IntoIterator<Item = &'a AnchorFeature>,
{
    let entries: Vec<AnchorEntry> = anchors
        .into_iter()
        .enumerate()
        .filter(|(_, a)| a.diameter > 0)
        .map(|(i, a)| AnchorEntry::new(i, a))
        .collect();
    RTree::bulk_load(entries)
}

/// Indices of anchors whose bounding square contains `point`
pub fn anchors_around(index: &RTree<AnchorEntry>, point: Point) -> Vec<usize> {
    let probe = AABB::from_point([point.x as f64, point.y as f64]);
    index
        .locate_in_envelope_intersecting(&probe)
        .map(|entry| entry.index)
        .collect()
}
