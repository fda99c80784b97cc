//! File operations: Load, Save, Close

use crate::board::{Board, BoardHost};
use crate::draw::teardrop::copy_ledger;
use crate::rpc::protocol::{Response, error_codes};
use crate::rpc::state::ServerState;
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Instant;

/// Handle Load request - reads a board JSON file
pub fn handle_load(
    state: &mut ServerState,
    id: Option<serde_json::Value>,
    params: Option<serde_json::Value>
) -> Response {
    #[derive(Deserialize)]
    struct LoadParams {
        file_path: String,
    }

    let params: LoadParams = match params.and_then(|p| serde_json::from_value(p).ok()) {
        Some(p) => p,
        None => {
            return Response::error(id, error_codes::INVALID_PARAMS,
                "Invalid params: expected {file_path: string}".to_string());
        }
    };

    tracing::info!("Loading board: {}", params.file_path);
    let start = Instant::now();

    let board = match Board::load_json(&params.file_path) {
        Ok(board) => board,
        Err(e) => {
            return Response::error(id, error_codes::PARSE_FAILED,
                format!("Failed to load board: {:#}", e));
        }
    };

    let track_count = board.tracks.len();
    let pad_count = board.pads.len();
    let zone_count = board.zone_count();
    tracing::info!("Board loaded in {:.2?}: {} track items, {} pads, {} zones",
        start.elapsed(), track_count, pad_count, zone_count);

    state.board = Some(board);

    Response::success(id, serde_json::json!({
        "status": "ok",
        "file_path": params.file_path,
        "tracks": track_count,
        "pads": pad_count,
        "zones": zone_count
    }))
}

/// Handle Save request - writes the board, optionally under a new name
///
/// Saving under a new name makes that the board's file name. The teardrop
/// ledger is copied next to the new file so later runs still find the
/// teardrops already on the board.
pub fn handle_save(
    state: &mut ServerState,
    id: Option<serde_json::Value>,
    params: Option<serde_json::Value>,
) -> Response {
    #[derive(Deserialize)]
    struct SaveParams {
        #[serde(default)]
        file_path: Option<String>,
    }

    let params: SaveParams = params
        .and_then(|p| serde_json::from_value(p).ok())
        .unwrap_or(SaveParams { file_path: None });

    let Some(board) = state.board.as_mut() else {
        return Response::error(id, error_codes::NO_FILE_LOADED,
            "No file loaded. Call Load first.".to_string());
    };

    let output_path = match params.file_path.map(PathBuf::from) {
        Some(path) => path,
        None => match board.file_name() {
            Some(path) => path.to_path_buf(),
            None => {
                return Response::error(id, error_codes::INVALID_PARAMS,
                    "Board has no file name; pass file_path".to_string());
            }
        },
    };

    tracing::info!("Saving board to: {}", output_path.display());
    if let Err(e) = board.save_json(&output_path) {
        return Response::error(id, error_codes::SAVE_FAILED,
            format!("Failed to save file: {:#}", e));
    }

    if let Some(current) = board.file_name() {
        if let Err(e) = copy_ledger(current, &output_path) {
            return Response::error(id, error_codes::SAVE_FAILED,
                format!("Board saved but teardrop ledger was not copied: {}", e));
        }
    }
    board.set_file_name(output_path.clone());

    Response::success(id, serde_json::json!({
        "status": "ok",
        "file_path": output_path.to_string_lossy(),
        "zones": board.zone_count()
    }))
}

/// Handle Close request - drops the loaded board
pub fn handle_close(state: &mut ServerState, id: Option<serde_json::Value>) -> Response {
    let was_loaded = state.board.take().is_some();
    tracing::info!("Close: board {}", if was_loaded { "released" } else { "was not loaded" });
    Response::success(id, serde_json::json!({ "status": "ok", "was_loaded": was_loaded }))
}
