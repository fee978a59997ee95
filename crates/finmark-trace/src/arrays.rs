//! Parallel-array interchange form used by digitization tools and storage.

use serde::{Deserialize, Serialize};

use crate::{MarkTrace, MarkType, TraceError};

/// Four equal-length channels plus the two trace flags.
///
/// `mark_types` holds the numeric codes from [`MarkType::code`]. An empty
/// `positions` channel means "not supplied" and is zero-filled on import.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TraceArrays {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub mark_types: Vec<i32>,
    #[serde(default)]
    pub positions: Vec<f64>,
    #[serde(default)]
    pub notch_open: bool,
    #[serde(default)]
    pub curled: bool,
}

impl TraceArrays {
    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }
}

impl TryFrom<TraceArrays> for MarkTrace {
    type Error = TraceError;

    fn try_from(raw: TraceArrays) -> Result<Self, Self::Error> {
        let types = raw
            .mark_types
            .iter()
            .map(|&code| MarkType::from_code(code))
            .collect::<Result<Vec<_>, _>>()?;
        let trace = if raw.positions.is_empty() {
            MarkTrace::from_arrays(&raw.x, &raw.y, &types)?
        } else {
            MarkTrace::from_arrays_with_positions(&raw.x, &raw.y, &types, &raw.positions)?
        };
        Ok(trace.with_flags(raw.notch_open, raw.curled))
    }
}

impl From<MarkTrace> for TraceArrays {
    fn from(trace: MarkTrace) -> Self {
        trace.to_arrays()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_positions_are_zero_filled() {
        let raw = TraceArrays {
            x: vec![1.0, 2.0],
            y: vec![3.0, 4.0],
            mark_types: vec![-1, 1],
            ..TraceArrays::default()
        };
        let trace = MarkTrace::try_from(raw).expect("valid arrays");
        assert_eq!(trace.positions(), vec![0.0, 0.0]);
        assert_eq!(trace.types(), vec![MarkType::Tip, MarkType::Nick]);
    }

    #[test]
    fn unknown_code_is_rejected() {
        let raw = TraceArrays {
            x: vec![1.0],
            y: vec![1.0],
            mark_types: vec![42],
            ..TraceArrays::default()
        };
        assert_eq!(
            MarkTrace::try_from(raw),
            Err(TraceError::UnknownMarkType(42))
        );
    }

    #[test]
    fn short_channel_is_a_length_mismatch() {
        let raw = TraceArrays {
            x: vec![1.0, 2.0],
            y: vec![1.0, 2.0],
            mark_types: vec![-2, -2],
            positions: vec![0.5],
            ..TraceArrays::default()
        };
        assert!(matches!(
            MarkTrace::try_from(raw),
            Err(TraceError::LengthMismatch { positions: 1, .. })
        ));
    }

    #[test]
    fn export_keeps_flags_and_codes() {
        let trace = MarkTrace::from_arrays(&[0.0], &[0.0], &[MarkType::MissingEnd])
            .expect("valid")
            .with_flags(true, false);
        let raw = trace.to_arrays();
        assert_eq!(raw.mark_types, vec![9]);
        assert_eq!(raw.len(), 1);
        assert!(raw.notch_open);
        assert!(!raw.curled);
    }
}
