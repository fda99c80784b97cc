//! Persisted record of inserted teardrops
//!
//! The ledger is a side-car text file next to the board, one fingerprint per
//! line. A missing file is the normal "no teardrops" state: loading it yields
//! an empty ledger and saving an empty ledger deletes the file.

use indexmap::IndexSet;
use std::ffi::OsString;
use std::fs;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use super::fingerprint::ShapeFingerprint;
use super::types::TeardropError;

/// Suffix appended to the board file name to locate its ledger
pub const LEDGER_SUFFIX: &str = "_td";

/// Ledger file belonging to `board_file`
pub fn ledger_path(board_file: &Path) -> PathBuf {
    let mut name = OsString::from(board_file.as_os_str());
    name.push(LEDGER_SUFFIX);
    PathBuf::from(name)
}

/// Ordered set of fingerprints, in insertion order
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Ledger {
    entries: IndexSet<ShapeFingerprint>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a ledger file; unreadable or missing files give an empty ledger
    pub fn load(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(text) => text.lines().filter_map(ShapeFingerprint::from_line).collect(),
            Err(e) => {
                tracing::debug!("No teardrop ledger at {}: {}", path.display(), e);
                Self::new()
            }
        }
    }

    pub fn contains(&self, fp: &ShapeFingerprint) -> bool {
        self.entries.contains(fp)
    }

    /// Record `fp`; returns `false` if it was already present
    pub fn add(&mut self, fp: ShapeFingerprint) -> bool {
        self.entries.insert(fp)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ShapeFingerprint> {
        self.entries.iter()
    }

    /// Rewrite the file with every entry, or delete it when empty
    pub fn save(&self, path: &Path) -> Result<(), TeardropError> {
        if self.is_empty() {
            remove_ledger_file(path);
            return Ok(());
        }

        let io_err = |source| TeardropError::Io { path: path.to_path_buf(), source };
        let file = fs::File::create(path).map_err(io_err)?;
        let mut writer = BufWriter::new(file);
        for fp in &self.entries {
            writeln!(writer, "{}", fp).map_err(io_err)?;
        }
        writer.flush().map_err(io_err)?;
        Ok(())
    }
}

impl FromIterator<ShapeFingerprint> for Ledger {
    fn from_iter<I: IntoIterator<Item = ShapeFingerprint>>(iter: I) -> Self {
        Self { entries: iter.into_iter().collect() }
    }
}

/// Make the ledger of `to_board` match the one of `from_board`
///
/// Used when a board is saved under a new name so the teardrops already on it
/// stay recorded. An empty source ledger removes any stale file at the target.
pub fn copy_ledger(from_board: &Path, to_board: &Path) -> Result<(), TeardropError> {
    let from = ledger_path(from_board);
    let to = ledger_path(to_board);
    if from == to {
        return Ok(());
    }
    let ledger = Ledger::load(&from);
    tracing::debug!("Copying {} ledger entries to {}", ledger.len(), to.display());
    ledger.save(&to)
}

/// Best-effort delete; a ledger that is already gone is the goal either way
pub fn remove_ledger_file(path: &Path) {
    if let Err(e) = fs::remove_file(path) {
        if e.kind() != std::io::ErrorKind::NotFound {
            tracing::warn!("Could not delete teardrop ledger {}: {}", path.display(), e);
        }
    }
}
