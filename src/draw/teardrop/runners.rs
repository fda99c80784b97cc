//! Teardrop runner functions
//!
//! Contains the entry points that edit a board:
//! - `set_teardrops` inserts teardrops on every eligible track/anchor pair
//! - `rm_teardrops` removes the teardrops recorded in the board's ledger

use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::board::BoardHost;
use crate::draw::geometry::{
    AnchorFeature, AnchorKind, PadAttribute, PadShape, TeardropShape, TrackItem, TrackSegment, Zone,
};

use super::corners::compute_teardrop_corners;
use super::fingerprint::ShapeFingerprint;
use super::ledger::{ledger_path, remove_ledger_file, Ledger};
use super::matcher::{find_eligible_pairs, has_selection, straight_segments};
use super::types::{
    AnchorSettings, InsertReport, RemoveReport, TeardropConfig, TeardropError, TeardropParams, ZoneSettings,
};

/// Vias and round through-hole pads of the board, as anchors
pub fn collect_anchors<H: BoardHost + ?Sized>(host: &H, settings: &AnchorSettings) -> Vec<AnchorFeature> {
    let vias = host.tracks().into_iter().filter_map(|item| match item {
        TrackItem::Via(via) => Some(AnchorFeature {
            position: via.position,
            diameter: via.width,
            selected: via.selected,
            kind: AnchorKind::Via { drill: via.drill },
        }),
        TrackItem::Segment(_) | TrackItem::Arc(_) => None,
    });

    let pads = host
        .pads(&[PadAttribute::Standard])
        .into_iter()
        .filter(|pad| matches!(pad.shape, PadShape::Circle | PadShape::Oval))
        .map(|pad| AnchorFeature {
            position: pad.position,
            diameter: pad.drill.x + 2 * settings.pad_ring_margin,
            selected: pad.selected,
            kind: AnchorKind::Pad,
        });

    vias.chain(pads).collect()
}

/// Teardrop joining `track` to `anchor`, inheriting the track's layer and net
pub fn build_teardrop(
    track: &TrackSegment,
    anchor: &AnchorFeature,
    params: &TeardropParams,
) -> Result<TeardropShape, TeardropError> {
    let corners = compute_teardrop_corners(track, anchor, params)?;
    Ok(TeardropShape {
        corners,
        layer: track.layer.clone(),
        net_code: track.net_code,
        clearance: track.clearance,
    })
}

/// Filled zone for `shape`, corners in teardrop order
pub fn teardrop_zone(shape: &TeardropShape, settings: &ZoneSettings) -> Zone {
    Zone {
        layer: shape.layer.clone(),
        net_code: shape.net_code,
        clearance: shape.clearance,
        min_thickness: settings.min_thickness,
        pad_connection: settings.pad_connection,
        filled: settings.filled,
        corners: shape.corners.to_vec(),
    }
}

pub fn shape_fingerprint(shape: &TeardropShape) -> ShapeFingerprint {
    ShapeFingerprint::new(&shape.layer, &shape.corners)
}

pub fn zone_fingerprint(zone: &Zone) -> ShapeFingerprint {
    ShapeFingerprint::new(&zone.layer, &zone.corners)
}

fn board_ledger_path<H: BoardHost + ?Sized>(host: &H) -> Result<PathBuf, TeardropError> {
    host.file_name()
        .map(ledger_path)
        .ok_or(TeardropError::NoBoardFile)
}

/// Insert teardrops on the board
///
/// With pads/vias selected only those get teardrops and existing ones are
/// kept. Without a selection every teardrop recorded in the ledger is removed
/// first and the whole board is done again from scratch.
pub fn set_teardrops<H: BoardHost + ?Sized>(
    host: &mut H,
    config: &TeardropConfig,
) -> Result<InsertReport, TeardropError> {
    let start = Instant::now();
    config.params.validate()?;
    let path = board_ledger_path(&*host)?;

    let anchors = collect_anchors(&*host, &config.anchors);
    let items = host.tracks();
    let tracks = straight_segments(&items);
    let mut ledger = Ledger::load(&path);
    let mut report = InsertReport::default();

    if has_selection(&anchors) {
        tracing::info!("Using selected pads/vias");
        report.used_selection = true;
    } else if !ledger.is_empty() {
        report.removed_first = remove_teardrops_in_ledger(host, &ledger, &path);
        ledger = Ledger::new();
    }

    let pairs = find_eligible_pairs(&tracks, &anchors);
    tracing::debug!(
        "{} tracks, {} anchors, {} eligible pairs",
        tracks.len(),
        anchors.len(),
        pairs.len()
    );

    for pair in pairs {
        let shape = build_teardrop(pair.track, pair.anchor, &config.params)?;
        if ledger.add(shape_fingerprint(&shape)) {
            host.add_zone(teardrop_zone(&shape, &config.zone));
            report.inserted += 1;
        }
    }

    ledger.save(&path)?;
    tracing::info!("{} teardrops inserted in {:.2?}", report.inserted, start.elapsed());
    Ok(report)
}

/// Remove every teardrop recorded in the board's ledger
///
/// Removing only the teardrops of selected pads/vias is not supported; with a
/// selection active this fails and leaves board and ledger untouched.
pub fn rm_teardrops<H: BoardHost + ?Sized>(
    host: &mut H,
    settings: &AnchorSettings,
) -> Result<RemoveReport, TeardropError> {
    let path = board_ledger_path(&*host)?;
    let ledger = Ledger::load(&path);

    if has_selection(&collect_anchors(&*host, settings)) {
        tracing::warn!("Teardrop removal for selected pads/vias is not supported");
        return Err(TeardropError::SelectedRemovalUnsupported);
    }

    let removed = remove_teardrops_in_ledger(host, &ledger, &path);
    tracing::info!("{} teardrops removed", removed);
    Ok(RemoveReport { removed })
}

/// Delete zones whose fingerprint is in `ledger`, then the ledger file
fn remove_teardrops_in_ledger<H: BoardHost + ?Sized>(host: &mut H, ledger: &Ledger, path: &Path) -> usize {
    let to_remove: Vec<_> = host
        .zones()
        .into_iter()
        .filter(|(_, zone)| ledger.contains(&zone_fingerprint(zone)))
        .map(|(id, _)| id)
        .collect();

    let removed = to_remove
        .into_iter()
        .filter(|id| host.remove_zone(*id))
        .count();

    remove_ledger_file(path);
    removed
}
