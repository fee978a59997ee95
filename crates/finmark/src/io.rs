//! JSON batch configuration and report types.

use finmark_core::SpotPoint;
use finmark_fiducial::{FiducialSet, FlankSide};
use finmark_trace::{MarkType, TraceArrays};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

#[derive(thiserror::Error, Debug)]
pub enum FinmarkIoError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// One step applied to a trace job, in order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum TraceOp {
    KeepOnly { types: Vec<MarkType> },
    RemoveTypes { types: Vec<MarkType> },
    Reverse,
    /// Concatenate another trace after the current one.
    Append { trace: TraceArrays },
}

/// A digitized trace plus the transforms to run on it.
///
/// The trace stays in raw array form so a malformed record fails its own
/// job instead of the whole config.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TraceJob {
    pub id: String,
    pub trace: TraceArrays,
    #[serde(default)]
    pub ops: Vec<TraceOp>,
}

/// Spot centroids for one flank, optionally with operator reference spots.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FiducialJob {
    pub id: String,
    #[serde(default)]
    pub side: FlankSide,
    #[serde(default)]
    pub spots: Vec<SpotPoint>,
    #[serde(default)]
    pub reference: Option<[SpotPoint; 3]>,
}

/// Batch configuration for the `finmark` CLI.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FinmarkJobConfig {
    #[serde(default)]
    pub output_path: Option<String>,
    #[serde(default)]
    pub traces: Vec<TraceJob>,
    #[serde(default)]
    pub fiducials: Vec<FiducialJob>,
}

impl FinmarkJobConfig {
    /// Load a JSON config from disk.
    pub fn load_json(path: impl AsRef<Path>) -> Result<Self, FinmarkIoError> {
        let raw = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Write this config to disk as pretty JSON.
    pub fn write_json(&self, path: impl AsRef<Path>) -> Result<(), FinmarkIoError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Resolve the output report path.
    pub fn output_path(&self) -> PathBuf {
        self.output_path
            .as_ref()
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("finmark_report.json"))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TraceJobReport {
    pub id: String,
    pub input_len: usize,
    #[serde(default)]
    pub output: Option<TraceArrays>,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FiducialJobReport {
    pub id: String,
    pub side: FlankSide,
    pub num_spots: usize,
    #[serde(default)]
    pub fiducials: Option<FiducialSet>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Per-job results of one batch run. Failed jobs carry an error string.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinmarkReport {
    pub config_path: String,
    pub traces: Vec<TraceJobReport>,
    pub fiducials: Vec<FiducialJobReport>,
}

impl FinmarkReport {
    pub fn new(config_path: &Path) -> Self {
        Self {
            config_path: config_path.to_string_lossy().into_owned(),
            traces: Vec::new(),
            fiducials: Vec::new(),
        }
    }

    /// Number of jobs that ended with an error.
    pub fn failed(&self) -> usize {
        self.traces.iter().filter(|r| r.error.is_some()).count()
            + self.fiducials.iter().filter(|r| r.error.is_some()).count()
    }

    /// Load a report from JSON on disk.
    pub fn load_json(path: impl AsRef<Path>) -> Result<Self, FinmarkIoError> {
        let raw = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Write this report to disk as pretty JSON.
    pub fn write_json(&self, path: impl AsRef<Path>) -> Result<(), FinmarkIoError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_minimal_config() {
        let json = r#"{
            "traces": [{
                "id": "fluke-1",
                "trace": { "x": [0, 1], "y": [0, 0], "mark_types": [-1, 1] },
                "ops": [{ "op": "keep_only", "types": ["nick"] }, { "op": "reverse" }]
            }],
            "fiducials": [{ "id": "flank-1", "side": "right", "spots": [{ "x": 1, "y": 2 }] }]
        }"#;
        let cfg: FinmarkJobConfig = serde_json::from_str(json).expect("parse");
        assert_eq!(cfg.traces[0].ops.len(), 2);
        assert_eq!(
            cfg.traces[0].ops[0],
            TraceOp::KeepOnly {
                types: vec![MarkType::Nick]
            }
        );
        assert_eq!(cfg.fiducials[0].side, FlankSide::Right);
        assert!(cfg.fiducials[0].reference.is_none());
        assert_eq!(cfg.output_path(), PathBuf::from("finmark_report.json"));
    }

    #[test]
    fn config_round_trips_through_disk() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("cfg.json");
        let cfg = FinmarkJobConfig {
            output_path: Some("out.json".to_string()),
            fiducials: vec![FiducialJob {
                id: "a".to_string(),
                side: FlankSide::Left,
                spots: vec![SpotPoint::new(1.0, 2.0)],
                reference: None,
            }],
            ..FinmarkJobConfig::default()
        };
        cfg.write_json(&path).expect("write");
        let back = FinmarkJobConfig::load_json(&path).expect("load");
        assert_eq!(back.output_path(), PathBuf::from("out.json"));
        assert_eq!(back.fiducials[0].spots, cfg.fiducials[0].spots);
    }
}
