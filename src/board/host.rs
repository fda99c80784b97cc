//! Host board capability
//!
//! Everything the teardrop passes need from the board they edit. The
//! teardrop runners only ever see a `BoardHost`, never a concrete board.

use std::path::{Path, PathBuf};

use crate::draw::geometry::{Pad, PadAttribute, TrackItem, Zone, ZoneId};

pub trait BoardHost {
    /// Tracks, arcs and vias, already classified
    fn tracks(&self) -> Vec<TrackItem>;

    /// Pads whose attribute is one of `attributes`
    fn pads(&self, attributes: &[PadAttribute]) -> Vec<Pad>;

    /// Existing filled zones with their identity
    fn zones(&self) -> Vec<(ZoneId, Zone)>;

    fn add_zone(&mut self, zone: Zone) -> ZoneId;

    /// Returns `false` when no zone has this id
    fn remove_zone(&mut self, id: ZoneId) -> bool;

    fn file_name(&self) -> Option<&Path>;

    fn set_file_name(&mut self, path: PathBuf);
}
