//! Teardrop reinforcement for printed-circuit boards
//!
//! Inserts four-corner filled zones where a track meets a via or a round
//! through-hole pad, and removes them again using a side-car ledger of shape
//! fingerprints kept next to the board file.
//!
//! # Example
//! ```ignore
//! let mut board = Board::load_json("boards/demo.json")?;
//! let report = set_teardrops(&mut board, &TeardropConfig::default())?;
//! println!("{} teardrops inserted", report.inserted);
//! board.save_json("boards/demo.json")?;
//! ```

pub mod board;
pub mod draw;
pub mod rpc;
pub mod zone_fix;

pub use board::{Board, BoardFile, BoardHost};
pub use draw::geometry::{AnchorFeature, Point, TeardropShape, TrackSegment, Zone, ZoneId};
pub use draw::teardrop::{
    compute_teardrop_corners, find_eligible_pairs, rm_teardrops, set_teardrops,
    InsertReport, Ledger, RemoveReport, ShapeFingerprint, TeardropConfig, TeardropError,
    TeardropParams,
};
pub use zone_fix::{fix_zone_polygons, ZoneFix};

/// Install the stderr log subscriber used by the binaries
///
/// Honours `RUST_LOG`, defaulting to `info`. Stdout stays free for protocol
/// output.
pub fn init_logging() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
