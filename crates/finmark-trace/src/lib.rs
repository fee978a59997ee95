//! Typed fin/fluke outline traces.
//!
//! A [`MarkTrace`] is the ordered list of digitized outline points for one
//! photographed fin, each tagged with a [`MarkType`]. Singleton types (tip,
//! nick, scar, hole, ...) mark one point; extent types (gouge, scallop, wave,
//! missing, invisible) span every point from a start code up to its end code.
//!
//! ## Quickstart
//!
//! ```
//! use finmark_trace::{MarkTrace, MarkType};
//!
//! let trace = MarkTrace::from_arrays(
//!     &[0.0, 1.0, 2.0, 3.0, 4.0],
//!     &[0.0; 5],
//!     &[
//!         MarkType::Point,
//!         MarkType::Gouge,
//!         MarkType::Gouge,
//!         MarkType::GougeEnd,
//!         MarkType::Point,
//!     ],
//! )?;
//!
//! let gouge = trace.keep_only(&MarkType::Gouge.extent_types());
//! assert_eq!(gouge.xs(), vec![1.0, 2.0, 3.0]);
//!
//! // compare against a trace recorded in the opposite direction
//! let flipped = trace.reverse();
//! assert_eq!(flipped.reverse(), trace);
//! # Ok::<(), finmark_trace::TraceError>(())
//! ```

mod arrays;
mod error;
mod mark_type;
mod trace;

pub use arrays::TraceArrays;
pub use error::TraceError;
pub use mark_type::MarkType;
pub use trace::{MarkTrace, TracePoint};
