//! In-memory board persisted as JSON
//!
//! The JSON file lists tracks, pads and zones. Zones get their `ZoneId` when
//! the board is loaded; ids are never reused while the board is open.

use anyhow::Context;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::draw::geometry::{Pad, PadAttribute, Point, TrackItem, Zone, ZoneId};

use super::host::BoardHost;

/// On-disk layout of a board
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct BoardFile {
    #[serde(default)]
    pub tracks: Vec<TrackItem>,
    #[serde(default)]
    pub pads: Vec<Pad>,
    #[serde(default)]
    pub zones: Vec<Zone>,
}

#[derive(Debug, Default)]
pub struct Board {
    file_name: Option<PathBuf>,
    pub tracks: Vec<TrackItem>,
    pub pads: Vec<Pad>,
    zones: IndexMap<ZoneId, Zone>,
    next_zone_id: u64,
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_file_data(data: BoardFile) -> Self {
        let mut board = Board {
            tracks: data.tracks,
            pads: data.pads,
            ..Board::default()
        };
        for zone in data.zones {
            board.add_zone(zone);
        }
        board
    }

    pub fn to_file_data(&self) -> BoardFile {
        BoardFile {
            tracks: self.tracks.clone(),
            pads: self.pads.clone(),
            zones: self.zones.values().cloned().collect(),
        }
    }

    /// Load a board JSON file; the board remembers `path` as its file name
    pub fn load_json<P: AsRef<Path>>(path: P) -> anyhow::Result<Board> {
        let path = path.as_ref();
        let file = File::open(path)
            .with_context(|| format!("Failed to open board file {}", path.display()))?;
        let data: BoardFile = serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("Failed to parse board file {}", path.display()))?;

        let mut board = Board::from_file_data(data);
        board.file_name = Some(path.to_path_buf());
        Ok(board)
    }

    pub fn save_json<P: AsRef<Path>>(&self, path: P) -> anyhow::Result<()> {
        let path = path.as_ref();
        let file = File::create(path)
            .with_context(|| format!("Failed to create board file {}", path.display()))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, &self.to_file_data())?;
        writer.flush()?;
        Ok(())
    }

    pub fn zone_count(&self) -> usize {
        self.zones.len()
    }

    /// Select every via and pad sitting exactly on one of `points`
    ///
    /// Returns the number of newly selected items.
    pub fn select_at(&mut self, points: &[Point]) -> usize {
        let mut count = 0;
        for item in &mut self.tracks {
            if let TrackItem::Via(via) = item {
                if !via.selected && points.contains(&via.position) {
                    via.selected = true;
                    count += 1;
                }
            }
        }
        for pad in &mut self.pads {
            if !pad.selected && points.contains(&pad.position) {
                pad.selected = true;
                count += 1;
            }
        }
        count
    }

    pub fn clear_selection(&mut self) {
        for item in &mut self.tracks {
            match item {
                TrackItem::Segment(t) | TrackItem::Arc(t) => t.selected = false,
                TrackItem::Via(v) => v.selected = false,
            }
        }
        for pad in &mut self.pads {
            pad.selected = false;
        }
    }
}

impl BoardHost for Board {
    fn tracks(&self) -> Vec<TrackItem> {
        self.tracks.clone()
    }

    fn pads(&self, attributes: &[PadAttribute]) -> Vec<Pad> {
        self.pads
            .iter()
            .filter(|p| attributes.contains(&p.attribute))
            .cloned()
            .collect()
    }

    fn zones(&self) -> Vec<(ZoneId, Zone)> {
        self.zones.iter().map(|(id, z)| (*id, z.clone())).collect()
    }

    fn add_zone(&mut self, zone: Zone) -> ZoneId {
        let id = ZoneId(self.next_zone_id);
        self.next_zone_id += 1;
        self.zones.insert(id, zone);
        id
    }

    fn remove_zone(&mut self, id: ZoneId) -> bool {
        self.zones.shift_remove(&id).is_some()
    }

    fn file_name(&self) -> Option<&Path> {
        self.file_name.as_deref()
    }

    fn set_file_name(&mut self, path: PathBuf) {
        self.file_name = Some(path);
    }
}
