//! Teardrop insertion and removal
//!
//! A teardrop is a four-corner filled zone joining a track to the via or
//! round pad it ends on. Inserted teardrops are recorded by fingerprint in a
//! ledger file next to the board so a later run can find and remove them.
//!
//! # Submodules
//! - `types` - Parameters, settings, reports and errors
//! - `corners` - Corner computation for a single teardrop
//! - `matcher` - Track/anchor pair eligibility
//! - `fingerprint` - Canonical shape identity
//! - `ledger` - Side-car record of inserted teardrops
//! - `runners` - Board-level insert and remove entry points

mod types;
mod corners;
mod matcher;
mod fingerprint;
mod ledger;
mod runners;

pub use types::{
    TeardropParams, ZoneSettings, AnchorSettings, TeardropConfig,
    TeardropError, InsertReport, RemoveReport,
};

pub use corners::compute_teardrop_corners;

pub use matcher::{
    Candidate,
    straight_segments,
    has_selection,
    restrict_to_selection,
    is_eligible,
    find_eligible_pairs,
};

pub use fingerprint::ShapeFingerprint;

pub use ledger::{Ledger, ledger_path, copy_ledger, remove_ledger_file, LEDGER_SUFFIX};

pub use runners::{
    collect_anchors,
    build_teardrop,
    teardrop_zone,
    shape_fingerprint,
    zone_fingerprint,
    set_teardrops,
    rm_teardrops,
};
