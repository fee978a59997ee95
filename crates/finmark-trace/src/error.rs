/// Errors returned by trace construction and element access.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum TraceError {
    #[error("index {index} out of range for trace of length {len}")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("channel lengths differ (x={x}, y={y}, types={types}, positions={positions})")]
    LengthMismatch {
        x: usize,
        y: usize,
        types: usize,
        positions: usize,
    },
    #[error("unknown mark type code {0}")]
    UnknownMarkType(i32),
    #[error("mark type code {0} is not an integer")]
    NonIntegralMarkType(f64),
}
