//! Teardrop parameters, settings and error types

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::draw::geometry::{BoardUnit, PadConnection};

/// Shape percentages of a teardrop
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TeardropParams {
    /// Tip distance beyond one anchor diameter, in percent of the diameter
    pub hpercent: f64,
    /// Shoulder spread; the sine of the shoulder angle, in percent
    pub vpercent: f64,
}

impl Default for TeardropParams {
    fn default() -> Self {
        Self {
            hpercent: 30.0,
            vpercent: 70.0,
        }
    }
}

impl TeardropParams {
    /// Reject values the corner computation cannot use
    ///
    /// `vpercent` is a sine and must lie in [-100, 100]. `hpercent` has no
    /// natural range; it is bounded here so the tip lies ahead of the track's
    /// anchored end. At -100 or below the tip sits on or behind that end.
    pub fn validate(&self) -> Result<(), TeardropError> {
        if !self.hpercent.is_finite() || self.hpercent <= -100.0 {
            return Err(TeardropError::InvalidParameter(format!(
                "hpercent must be greater than -100, got {}",
                self.hpercent
            )));
        }
        if !self.vpercent.is_finite() || !(-100.0..=100.0).contains(&self.vpercent) {
            return Err(TeardropError::InvalidParameter(format!(
                "vpercent must lie in [-100, 100], got {}",
                self.vpercent
            )));
        }
        Ok(())
    }
}

/// Properties given to every inserted zone
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ZoneSettings {
    pub min_thickness: BoardUnit,
    pub pad_connection: PadConnection,
    pub filled: bool,
}

impl Default for ZoneSettings {
    fn default() -> Self {
        Self {
            min_thickness: 25_400, // 1 mil, the host minimum
            pad_connection: PadConnection::Solid,
            filled: true,
        }
    }
}

/// How pads are turned into anchors
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnchorSettings {
    /// Copper ring assumed around a pad drill, per side
    pub pad_ring_margin: BoardUnit,
}

impl Default for AnchorSettings {
    fn default() -> Self {
        Self {
            pad_ring_margin: 200_000, // 0.2 mm
        }
    }
}

/// Full configuration of an insertion run
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TeardropConfig {
    #[serde(flatten)]
    pub params: TeardropParams,
    pub zone: ZoneSettings,
    pub anchors: AnchorSettings,
}

#[derive(Debug, thiserror::Error)]
pub enum TeardropError {
    #[error("degenerate track: start and end coincide at {0}")]
    DegenerateTrack(crate::draw::geometry::Point),
    #[error("invalid teardrop parameter: {0}")]
    InvalidParameter(String),
    #[error("removing teardrops of selected pads/vias is not supported; clear the selection to remove all teardrops")]
    SelectedRemovalUnsupported,
    #[error("board has no file name, cannot locate the teardrop ledger")]
    NoBoardFile,
    #[error("ledger I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Outcome of an insertion run
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct InsertReport {
    pub inserted: usize,
    /// Teardrops removed by the full-board refresh before inserting
    pub removed_first: usize,
    pub used_selection: bool,
}

/// Outcome of a removal run
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct RemoveReport {
    pub removed: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_params_are_valid() {
        let params = TeardropParams::default();
        assert_eq!(params.hpercent, 30.0);
        assert_eq!(params.vpercent, 70.0);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_vpercent_out_of_range_rejected() {
        let params = TeardropParams { hpercent: 30.0, vpercent: 120.0 };
        assert!(matches!(params.validate(), Err(TeardropError::InvalidParameter(_))));
        let params = TeardropParams { hpercent: 30.0, vpercent: f64::NAN };
        assert!(params.validate().is_err());
        let params = TeardropParams { hpercent: 30.0, vpercent: -100.0 };
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_hpercent_must_keep_tip_ahead_of_anchor() {
        let params = TeardropParams { hpercent: -100.0, vpercent: 70.0 };
        assert!(matches!(params.validate(), Err(TeardropError::InvalidParameter(_))));
        let params = TeardropParams { hpercent: f64::INFINITY, vpercent: 70.0 };
        assert!(params.validate().is_err());
        let params = TeardropParams { hpercent: -99.5, vpercent: 70.0 };
        assert!(params.validate().is_ok());
        let params = TeardropParams { hpercent: 400.0, vpercent: 70.0 };
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_config_overrides_from_json() {
        let config: TeardropConfig = serde_json::from_str(r#"{"vpercent": 50}"#).unwrap();
        assert_eq!(config.params.hpercent, 30.0);
        assert_eq!(config.params.vpercent, 50.0);
        assert_eq!(config.zone.min_thickness, 25_400);
        assert_eq!(config.anchors.pad_ring_margin, 200_000);
    }
}
