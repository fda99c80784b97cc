//! Teardrop server - line-delimited JSON-RPC over stdin/stdout
//!
//! # Module Structure
//! - `protocol` - JSON-RPC request/response types
//! - `state` - Server state management
//! - `handlers` - Request handlers organized by functionality

pub mod handlers;
pub mod protocol;
pub mod state;

pub use protocol::{Request, Response, ErrorResponse, error_codes};
pub use state::ServerState;

/// Decode one input line and dispatch it
///
/// Malformed JSON gives `PARSE_ERROR`; well-formed JSON that is not a request
/// object gives `INVALID_REQUEST`.
pub fn handle_line(state: &mut ServerState, line: &str) -> Response {
    let value: serde_json::Value = match serde_json::from_str(line) {
        Ok(value) => value,
        Err(e) => {
            return Response::error(None, error_codes::PARSE_ERROR, format!("Parse error: {}", e));
        }
    };

    let id = value.get("id").cloned();
    match serde_json::from_value::<Request>(value) {
        Ok(request) => {
            tracing::debug!("Request: {}", request.method);
            dispatch(state, request)
        }
        Err(e) => Response::error(id, error_codes::INVALID_REQUEST, format!("Invalid request: {}", e)),
    }
}

/// Serialize a response to a single output line
///
/// A response that cannot be serialized is replaced by an `INTERNAL_ERROR`
/// response carrying the same id.
pub fn encode_response(response: &Response) -> String {
    match serde_json::to_string(response) {
        Ok(text) => text,
        Err(e) => {
            tracing::error!("Failed to serialize response: {}", e);
            serde_json::json!({
                "id": response.id,
                "error": {
                    "code": error_codes::INTERNAL_ERROR,
                    "message": format!("Internal error: {}", e)
                }
            })
            .to_string()
        }
    }
}

/// Route one request to its handler
pub fn dispatch(state: &mut ServerState, request: Request) -> Response {
    let Request { id, method, params } = request;
    match method.as_str() {
        "Load" => handlers::handle_load(state, id, params),
        "Save" => handlers::handle_save(state, id, params),
        "Close" => handlers::handle_close(state, id),
        "SetTeardrops" => handlers::handle_set_teardrops(state, id, params),
        "RmTeardrops" => handlers::handle_rm_teardrops(state, id),
        "SetSelection" => handlers::handle_set_selection(state, id, params),
        "ClearSelection" => handlers::handle_clear_selection(state, id),
        "GetZones" => handlers::handle_get_zones(state, id),
        "GetLedger" => handlers::handle_get_ledger(state, id),
        _ => Response::error(id, error_codes::METHOD_NOT_FOUND,
            format!("Unknown method: {}", method)),
    }
}
