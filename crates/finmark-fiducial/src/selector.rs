//! Bounding-box fiducial selection.
//!
//! When an operator has not designated three reference spots, the basis is
//! taken from three corners of the spot cloud's axis-aligned extent. Image
//! y grows downward, so "highest" is the smallest y. The corner order is
//! fixed per flank side and must stay stable for existing match databases:
//!
//! - left:  `(left, high)`, `(left, low)`, `(right, low)`
//! - right: `(right, high)`, `(right, low)`, `(left, low)`
//!
//! Spot sets whose extent is a single point or an axis-parallel line, or
//! that contain a non-finite coordinate, are rejected rather than perturbed.
//! Thin but non-zero extents are accepted as-is.

use finmark_core::{SpotExtent, SpotPoint};
use log::{debug, warn};
use serde::{Deserialize, Serialize};

#[cfg(feature = "tracing")]
use tracing::instrument;

use crate::{FiducialError, FiducialSet, FiducialSource};

/// Which flank (or fluke side) the spots were photographed on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlankSide {
    #[default]
    Left,
    Right,
}

/// Stateless selector bound to one flank side.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FiducialSelector {
    side: FlankSide,
}

impl FiducialSelector {
    pub fn new(side: FlankSide) -> Self {
        Self { side }
    }

    #[inline]
    pub fn side(&self) -> FlankSide {
        self.side
    }

    /// Select three fiducials from `spots`, preferring `explicit` when given.
    ///
    /// Explicit references are returned untouched, in caller order, whatever
    /// `spots` contains.
    #[cfg_attr(
        feature = "tracing",
        instrument(level = "debug", skip(self, spots, explicit), fields(side = ?self.side, spots = spots.len()))
    )]
    pub fn select(
        &self,
        spots: &[SpotPoint],
        explicit: Option<[SpotPoint; 3]>,
    ) -> Result<FiducialSet, FiducialError> {
        if let Some(points) = explicit {
            return Ok(FiducialSet::new(points, FiducialSource::Explicit));
        }

        debug!(
            "no reference spots for {:?} side, using bounding box of {} spots",
            self.side,
            spots.len()
        );
        let ext = SpotExtent::from_spots(spots).ok_or(FiducialError::EmptyInput)?;

        // NaN never reaches the extent (f64::min/max skip it), so check spots directly
        let all_finite = spots.iter().all(SpotPoint::is_finite);
        if !all_finite || ext.width() == 0.0 || ext.height() == 0.0 {
            warn!(
                "degenerate spot extent {} x {} ({} spots, all finite: {all_finite})",
                ext.width(),
                ext.height(),
                spots.len()
            );
            return Err(FiducialError::DegenerateGeometry {
                width: if all_finite { ext.width() } else { f64::NAN },
                height: if all_finite { ext.height() } else { f64::NAN },
            });
        }
        let points = corners(self.side, &ext);

        Ok(FiducialSet::new(points, FiducialSource::BoundingBox))
    }
}

fn corners(side: FlankSide, ext: &SpotExtent) -> [SpotPoint; 3] {
    let (left, right) = (ext.leftmost(), ext.rightmost());
    let (high, low) = (ext.highest(), ext.lowest());
    match side {
        FlankSide::Left => [
            SpotPoint::new(left, high),
            SpotPoint::new(left, low),
            SpotPoint::new(right, low),
        ],
        FlankSide::Right => [
            SpotPoint::new(right, high),
            SpotPoint::new(right, low),
            SpotPoint::new(left, low),
        ],
    }
}

/// Shorthand for `FiducialSelector::new(side).select(spots, explicit)`.
pub fn select_fiducials(
    side: FlankSide,
    spots: &[SpotPoint],
    explicit: Option<[SpotPoint; 3]>,
) -> Result<FiducialSet, FiducialError> {
    FiducialSelector::new(side).select(spots, explicit)
}
