// Drives the JSON-RPC dispatcher the way the teardrop server does
use serde_json::json;
use teardrops::rpc::{dispatch, encode_response, error_codes, handle_line, Request, Response, ServerState};

fn request(method: &str, params: serde_json::Value) -> Request {
    serde_json::from_value(json!({ "id": 1, "method": method, "params": params }))
        .expect("valid request")
}

fn call(state: &mut ServerState, method: &str, params: serde_json::Value) -> Response {
    dispatch(state, request(method, params))
}

fn result(response: Response) -> serde_json::Value {
    assert!(!response.is_error(), "unexpected error: {:?}", response.error);
    response.result.expect("result")
}

fn write_board(name: &str) -> std::path::PathBuf {
    let dir = std::env::temp_dir().join(format!("teardrops-rpc-{}-{}", name, std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("board.json");
    let board = json!({
        "tracks": [
            {"type": "via", "position": {"x": 0, "y": 0}, "width": 600000, "drill": 300000},
            {"type": "via", "position": {"x": 3000000, "y": 0}, "width": 600000, "drill": 300000},
            {"type": "segment", "start": {"x": 0, "y": 0}, "end": {"x": 3000000, "y": 0},
             "width": 250000, "layer": "F.Cu", "net_code": 2, "clearance": 200000}
        ],
        "pads": [],
        "zones": []
    });
    std::fs::write(&path, serde_json::to_string_pretty(&board).unwrap()).unwrap();
    path
}

#[test]
fn test_load_insert_save_remove() {
    let path = write_board("session");
    let mut state = ServerState::new();

    let loaded = result(call(&mut state, "Load", json!({ "file_path": path })));
    assert_eq!(loaded["tracks"], 3);

    let inserted = result(call(&mut state, "SetTeardrops", json!({ "hpercent": 50 })));
    assert_eq!(inserted["inserted"], 2);
    assert_eq!(state.config.params.hpercent, 50.0);

    let ledger = result(call(&mut state, "GetLedger", json!(null)));
    assert_eq!(ledger["exists"], true);
    assert_eq!(ledger["entries"].as_array().unwrap().len(), 2);

    let zones = result(call(&mut state, "GetZones", json!(null)));
    let zones = zones["zones"].as_array().unwrap();
    assert_eq!(zones.len(), 2);
    assert!(zones[0]["fingerprint"].as_str().unwrap().starts_with("F.Cu:("));

    result(call(&mut state, "Save", json!(null)));
    result(call(&mut state, "Close", json!(null)));
    assert!(!state.is_file_loaded());

    result(call(&mut state, "Load", json!({ "file_path": path })));
    let removed = result(call(&mut state, "RmTeardrops", json!(null)));
    assert_eq!(removed["removed"], 2);

    let ledger = result(call(&mut state, "GetLedger", json!(null)));
    assert_eq!(ledger["exists"], false);

    std::fs::remove_dir_all(path.parent().unwrap()).ok();
}

#[test]
fn test_selected_removal_returns_unsupported() {
    let path = write_board("selected");
    let mut state = ServerState::new();
    result(call(&mut state, "Load", json!({ "file_path": path })));
    result(call(&mut state, "SetTeardrops", json!(null)));

    let selected = result(call(&mut state, "SetSelection", json!({ "points": [[0, 0]] })));
    assert_eq!(selected["selected"], 1);

    let response = call(&mut state, "RmTeardrops", json!(null));
    assert_eq!(response.error.map(|e| e.code), Some(error_codes::UNSUPPORTED));

    result(call(&mut state, "ClearSelection", json!(null)));
    let removed = result(call(&mut state, "RmTeardrops", json!(null)));
    assert_eq!(removed["removed"], 2);

    std::fs::remove_dir_all(path.parent().unwrap()).ok();
}

#[test]
fn test_save_as_keeps_teardrops_recorded() {
    let path = write_board("save-as");
    let renamed = path.with_file_name("renamed.json");
    let mut state = ServerState::new();
    result(call(&mut state, "Load", json!({ "file_path": path })));

    let first = result(call(&mut state, "SetTeardrops", json!(null)));
    assert_eq!(first["inserted"], 2);

    let saved = result(call(&mut state, "Save", json!({ "file_path": renamed })));
    assert_eq!(saved["zones"], 2);

    let ledger = result(call(&mut state, "GetLedger", json!(null)));
    assert_eq!(ledger["exists"], true);
    assert_eq!(ledger["entries"].as_array().unwrap().len(), 2);

    // Re-running on the renamed board refreshes instead of doubling up
    let second = result(call(&mut state, "SetTeardrops", json!(null)));
    assert_eq!(second["removed_first"], 2);
    assert_eq!(second["inserted"], 2);
    let zones = result(call(&mut state, "GetZones", json!(null)));
    assert_eq!(zones["zones"].as_array().unwrap().len(), 2);

    std::fs::remove_dir_all(path.parent().unwrap()).ok();
    println!("✓ Save under a new name carries the ledger along");
}

#[test]
fn test_error_responses() {
    let mut state = ServerState::new();

    let response = call(&mut state, "RmTeardrops", json!(null));
    assert_eq!(response.error.map(|e| e.code), Some(error_codes::NO_FILE_LOADED));

    let response = call(&mut state, "Load", json!({ "file_path": "/definitely/not/here.json" }));
    assert_eq!(response.error.map(|e| e.code), Some(error_codes::PARSE_FAILED));

    let response = call(&mut state, "Frobnicate", json!(null));
    assert_eq!(response.error.map(|e| e.code), Some(error_codes::METHOD_NOT_FOUND));

    let path = write_board("bad-params");
    result(call(&mut state, "Load", json!({ "file_path": path })));
    let response = call(&mut state, "SetTeardrops", json!({ "vpercent": 400 }));
    assert_eq!(response.error.map(|e| e.code), Some(error_codes::INVALID_PARAMS));
    let response = call(&mut state, "SetTeardrops", json!({ "hpercnt": 10 }));
    assert_eq!(response.error.map(|e| e.code), Some(error_codes::INVALID_PARAMS));
    assert_eq!(result(call(&mut state, "GetZones", json!(null)))["zones"].as_array().unwrap().len(), 0);
    std::fs::remove_dir_all(path.parent().unwrap()).ok();
}

#[test]
fn test_line_decoding_errors() {
    let mut state = ServerState::new();

    let response = handle_line(&mut state, "{not json");
    assert_eq!(response.error.as_ref().map(|e| e.code), Some(error_codes::PARSE_ERROR));

    let response = handle_line(&mut state, r#"{"id": 7, "params": {}}"#);
    assert_eq!(response.error.as_ref().map(|e| e.code), Some(error_codes::INVALID_REQUEST));
    assert_eq!(response.id, Some(json!(7)));

    let response = handle_line(&mut state, r#"{"id": 8, "method": "Close"}"#);
    let line = encode_response(&response);
    let decoded: serde_json::Value = serde_json::from_str(&line).unwrap();
    assert_eq!(decoded["id"], 8);
    assert_eq!(decoded["result"]["was_loaded"], false);
    assert!(!line.contains('\n'));
}
