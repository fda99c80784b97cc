//! Candidate matching of tracks against vias and pads

use std::collections::BTreeSet;

use crate::draw::geometry::{anchors_around, build_anchor_index, AnchorFeature, TrackItem, TrackSegment};

/// A track ending on an anchor, eligible for a teardrop
#[derive(Clone, Copy, Debug)]
pub struct Candidate<'a> {
    pub track: &'a TrackSegment,
    pub anchor: &'a AnchorFeature,
}

/// Straight segments from the host's track enumeration
pub fn straight_segments(items: &[TrackItem]) -> Vec<&TrackSegment> {
    items
        .iter()
        .filter_map(|item| match item {
            TrackItem::Segment(segment) => Some(segment),
            TrackItem::Arc(_) | TrackItem::Via(_) => None,
        })
        .collect()
}

/// True if any anchor is selected
pub fn has_selection(anchors: &[AnchorFeature]) -> bool {
    anchors.iter().any(|a| a.selected)
}

/// Selected anchors when there are any, otherwise every anchor
pub fn restrict_to_selection(anchors: &[AnchorFeature]) -> Vec<&AnchorFeature> {
    if has_selection(anchors) {
        anchors.iter().filter(|a| a.selected).collect()
    } else {
        anchors.iter().collect()
    }
}

/// True if a teardrop can join `track` to `anchor`
///
/// The track must end within the anchor and be at least as long as the
/// anchor is wide.
pub fn is_eligible(track: &TrackSegment, anchor: &AnchorFeature) -> bool {
    anchor.diameter > 0
        && track.end_near(anchor.position, anchor.radius()).is_some()
        && track.length() >= anchor.diameter as f64
}

/// Every eligible (track, anchor) pair
///
/// When some anchor is selected only selected anchors take part. Pairs come
/// out ordered by track, then by anchor position in `anchors`.
pub fn find_eligible_pairs<'a>(
    tracks: &[&'a TrackSegment],
    anchors: &'a [AnchorFeature],
) -> Vec<Candidate<'a>> {
    let active: Vec<&AnchorFeature> = restrict_to_selection(anchors)
        .into_iter()
        .filter(|a| a.diameter > 0)
        .collect();
    let index = build_anchor_index(active.iter().copied());

    let mut pairs = Vec::new();
    for &track in tracks {
        let near: BTreeSet<usize> = anchors_around(&index, track.start)
            .into_iter()
            .chain(anchors_around(&index, track.end))
            .collect();

        for i in near {
            let anchor = active[i];
            if is_eligible(track, anchor) {
                pairs.push(Candidate { track, anchor });
            }
        }
    }
    pairs
}
