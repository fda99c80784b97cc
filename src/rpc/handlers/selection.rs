//! Selection handlers: SetSelection, ClearSelection
//!
//! Selected vias and pads narrow SetTeardrops to those anchors.

use crate::draw::geometry::Point;
use crate::rpc::protocol::{Response, error_codes};
use crate::rpc::state::ServerState;
use serde::Deserialize;

/// Handle SetSelection request - selects the vias/pads at the given points
pub fn handle_set_selection(
    state: &mut ServerState,
    id: Option<serde_json::Value>,
    params: Option<serde_json::Value>,
) -> Response {
    #[derive(Deserialize)]
    struct SelectionParams {
        points: Vec<[i64; 2]>,
        #[serde(default)]
        append: bool,
    }

    let params: SelectionParams = match params.and_then(|p| serde_json::from_value(p).ok()) {
        Some(p) => p,
        None => {
            return Response::error(id, error_codes::INVALID_PARAMS,
                "Invalid params: expected {points: [[x, y], ...], append?: bool}".to_string());
        }
    };

    let Some(board) = state.board.as_mut() else {
        return Response::error(id, error_codes::NO_FILE_LOADED,
            "No file loaded. Call Load first.".to_string());
    };

    if !params.append {
        board.clear_selection();
    }
    let points: Vec<Point> = params.points.iter().map(|[x, y]| Point::new(*x, *y)).collect();
    let selected = board.select_at(&points);
    tracing::debug!("Selected {} pads/vias at {} points", selected, points.len());

    Response::success(id, serde_json::json!({ "status": "ok", "selected": selected }))
}

/// Handle ClearSelection request
pub fn handle_clear_selection(state: &mut ServerState, id: Option<serde_json::Value>) -> Response {
    match state.board.as_mut() {
        Some(board) => {
            board.clear_selection();
            Response::success(id, serde_json::json!({ "status": "ok" }))
        }
        None => Response::error(id, error_codes::NO_FILE_LOADED,
            "No file loaded. Call Load first.".to_string()),
    }
}
