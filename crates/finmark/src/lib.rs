//! High-level facade crate for the `finmark-*` workspace.
//!
//! This crate provides:
//! - stable re-exports of the trace and fiducial crates
//! - a JSON batch format ([`FinmarkJobConfig`] in, [`FinmarkReport`] out)
//!   where each record succeeds or fails on its own
//! - the `finmark` command-line tool (feature `cli`)
//!
//! ## Quickstart
//!
//! ```
//! use finmark::core::SpotPoint;
//! use finmark::fiducial::{select_fiducials, FlankSide};
//! use finmark::trace::{MarkTrace, MarkType};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let trace = MarkTrace::from_arrays(
//!     &[0.0, 1.0, 2.0],
//!     &[0.0, 0.5, 0.0],
//!     &[MarkType::Tip, MarkType::Nick, MarkType::Notch],
//! )?;
//! let nicks = trace.keep_only_type(MarkType::Nick);
//! assert_eq!(nicks.len(), 1);
//!
//! let spots = [SpotPoint::new(0.0, 0.0), SpotPoint::new(8.0, 3.0)];
//! let basis = select_fiducials(FlankSide::Right, &spots, None)?;
//! assert_eq!(basis.points()[0], SpotPoint::new(8.0, 0.0));
//! # Ok(())
//! # }
//! ```
//!
//! ## API map
//! - `finmark::core`: spot points, extents, collinearity, logger setup.
//! - `finmark::trace`: mark types and ordered outline traces.
//! - `finmark::fiducial`: three-point affine basis selection.

pub use finmark_core as core;
pub use finmark_fiducial as fiducial;
pub use finmark_trace as trace;

pub use finmark_core::SpotPoint;
pub use finmark_fiducial::{FiducialError, FiducialSet, FlankSide};
pub use finmark_trace::{MarkTrace, MarkType, TraceError};

mod io;
mod job;

pub use io::{
    FiducialJob, FiducialJobReport, FinmarkIoError, FinmarkJobConfig, FinmarkReport, TraceJob,
    TraceJobReport, TraceOp,
};
pub use job::{run_config, run_fiducial_job, run_trace_job, JobError};
