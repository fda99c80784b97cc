//! Query handlers: GetZones, GetLedger

use crate::board::BoardHost;
use crate::draw::teardrop::{ledger_path, zone_fingerprint, Ledger};
use crate::rpc::protocol::{Response, error_codes};
use crate::rpc::state::ServerState;

/// Handle GetZones request - lists zones with their fingerprints
pub fn handle_get_zones(state: &ServerState, id: Option<serde_json::Value>) -> Response {
    let Some(board) = state.board.as_ref() else {
        return Response::error(id, error_codes::NO_FILE_LOADED,
            "No file loaded. Call Load first.".to_string());
    };

    let zones: Vec<serde_json::Value> = board
        .zones()
        .into_iter()
        .map(|(zone_id, zone)| {
            serde_json::json!({
                "id": zone_id,
                "fingerprint": zone_fingerprint(&zone),
                "zone": zone
            })
        })
        .collect();

    Response::success(id, serde_json::json!({ "zones": zones }))
}

/// Handle GetLedger request - returns the teardrops recorded for the board
pub fn handle_get_ledger(state: &ServerState, id: Option<serde_json::Value>) -> Response {
    let Some(path) = state.board.as_ref().and_then(|b| b.file_name()).map(ledger_path) else {
        return Response::error(id, error_codes::NO_FILE_LOADED,
            "No file loaded. Call Load first.".to_string());
    };

    let ledger = Ledger::load(&path);
    let entries: Vec<&str> = ledger.iter().map(|fp| fp.as_str()).collect();
    Response::success(id, serde_json::json!({
        "ledger_path": path.to_string_lossy(),
        "exists": path.exists(),
        "entries": entries
    }))
}
