//! Teardrop handlers: SetTeardrops, RmTeardrops

use crate::draw::teardrop::{rm_teardrops, set_teardrops, TeardropConfig, TeardropError};
use crate::rpc::protocol::{Response, error_codes};
use crate::rpc::state::ServerState;

fn teardrop_error_response(id: Option<serde_json::Value>, err: TeardropError) -> Response {
    let code = match err {
        TeardropError::SelectedRemovalUnsupported => error_codes::UNSUPPORTED,
        TeardropError::InvalidParameter(_) => error_codes::INVALID_PARAMS,
        TeardropError::DegenerateTrack(_) => error_codes::INVALID_GEOMETRY,
        TeardropError::NoBoardFile => error_codes::NO_FILE_LOADED,
        TeardropError::Io { .. } => error_codes::SAVE_FAILED,
    };
    Response::error(id, code, err.to_string())
}

/// Handle SetTeardrops request - inserts teardrops
///
/// Params are optional and override the server's config field by field,
/// e.g. `{"hpercent": 40}` or `{"zone": {"min_thickness": 50800}}`.
pub fn handle_set_teardrops(
    state: &mut ServerState,
    id: Option<serde_json::Value>,
    params: Option<serde_json::Value>,
) -> Response {
    let config = match params {
        Some(serde_json::Value::Null) | None => state.config,
        Some(p) => match merge_config(&state.config, p) {
            Ok(config) => config,
            Err(e) => {
                return Response::error(id, error_codes::INVALID_PARAMS,
                    format!("Invalid params: {}", e));
            }
        },
    };

    let Some(board) = state.board.as_mut() else {
        return Response::error(id, error_codes::NO_FILE_LOADED,
            "No file loaded. Call Load first.".to_string());
    };

    match set_teardrops(board, &config) {
        Ok(report) => {
            state.config = config;
            Response::success(id, serde_json::json!({
                "status": "ok",
                "inserted": report.inserted,
                "removed_first": report.removed_first,
                "used_selection": report.used_selection
            }))
        }
        Err(e) => teardrop_error_response(id, e),
    }
}

/// Handle RmTeardrops request - removes every recorded teardrop
pub fn handle_rm_teardrops(state: &mut ServerState, id: Option<serde_json::Value>) -> Response {
    let anchors = state.config.anchors;
    let Some(board) = state.board.as_mut() else {
        return Response::error(id, error_codes::NO_FILE_LOADED,
            "No file loaded. Call Load first.".to_string());
    };

    match rm_teardrops(board, &anchors) {
        Ok(report) => Response::success(id, serde_json::json!({
            "status": "ok",
            "removed": report.removed
        })),
        Err(e) => teardrop_error_response(id, e),
    }
}

/// Overlay the keys present in `overrides` onto `base`
///
/// Every key must name a config field; a misspelled key is an error rather
/// than a silently ignored override.
fn merge_config(base: &TeardropConfig, overrides: serde_json::Value) -> anyhow::Result<TeardropConfig> {
    let mut merged = serde_json::to_value(base)?;
    merge_json(&mut merged, overrides, "")?;
    Ok(serde_json::from_value(merged)?)
}

fn merge_json(target: &mut serde_json::Value, overrides: serde_json::Value, prefix: &str) -> anyhow::Result<()> {
    match (target, overrides) {
        (serde_json::Value::Object(target), serde_json::Value::Object(overrides)) => {
            for (key, value) in overrides {
                let field = format!("{}{}", prefix, key);
                match target.get_mut(&key) {
                    Some(existing) => merge_json(existing, value, &format!("{}.", field))?,
                    None => anyhow::bail!("unknown config field `{}`", field),
                }
            }
        }
        (target, value) => *target = value,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_config_keeps_unset_fields() {
        let mut base = TeardropConfig::default();
        base.params.vpercent = 55.0;
        let merged = merge_config(&base, serde_json::json!({
            "hpercent": 10,
            "zone": {"filled": false}
        })).unwrap();
        assert_eq!(merged.params.hpercent, 10.0);
        assert_eq!(merged.params.vpercent, 55.0);
        assert!(!merged.zone.filled);
        assert_eq!(merged.zone.min_thickness, 25_400);
    }

    #[test]
    fn test_merge_config_rejects_unknown_fields() {
        let base = TeardropConfig::default();
        let err = merge_config(&base, serde_json::json!({ "hpercnt": 10 })).unwrap_err();
        assert!(err.to_string().contains("`hpercnt`"));
        let err = merge_config(&base, serde_json::json!({ "zone": { "fill": false } })).unwrap_err();
        assert!(err.to_string().contains("`zone.fill`"));
    }

    #[test]
    fn test_set_teardrops_without_board() {
        let mut state = ServerState::new();
        let response = handle_set_teardrops(&mut state, None, None);
        assert_eq!(response.error.map(|e| e.code), Some(error_codes::NO_FILE_LOADED));
    }
}
