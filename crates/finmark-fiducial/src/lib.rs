//! Fiducial selection for spot-pattern registration.
//!
//! Reduces a cloud of detected spot centroids to the three non-collinear
//! points an affine estimator needs to align two photographs of the same
//! flank. Operator-chosen reference spots win; otherwise three bounding-box
//! corners are used.
//!
//! ```
//! use finmark_core::SpotPoint;
//! use finmark_fiducial::{select_fiducials, FlankSide};
//!
//! let spots = [
//!     SpotPoint::new(0.0, 0.0),
//!     SpotPoint::new(10.0, 5.0),
//!     SpotPoint::new(5.0, 2.0),
//! ];
//! let set = select_fiducials(FlankSide::Left, &spots, None)?;
//! assert_eq!(set.points()[0], SpotPoint::new(0.0, 0.0));
//! # Ok::<(), finmark_fiducial::FiducialError>(())
//! ```

mod error;
mod selector;
mod set;

pub use error::FiducialError;
pub use selector::{select_fiducials, FiducialSelector, FlankSide};
pub use set::{FiducialSet, FiducialSource};
