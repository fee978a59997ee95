//! Core types and utilities shared by the finmark crates.
//!
//! This crate is intentionally small and purely geometric. It does *not*
//! know about trace mark types or any image representation; spot centroids
//! arrive already detected.

mod extent;
mod logger;
mod point;

pub use extent::SpotExtent;
pub use point::{is_collinear, SpotPoint, COLLINEAR_EPS};

#[cfg(feature = "tracing")]
pub use logger::init_tracing;

pub use logger::{init_with_level, warning_count, LOG_ENV};
