use finmark_core::{is_collinear, SpotPoint};
use nalgebra::Point2;
use serde::{Deserialize, Serialize};

/// How a [`FiducialSet`] was obtained.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FiducialSource {
    /// Operator-designated reference spots, passed through unchanged.
    Explicit,
    /// Corners of the spot cloud's bounding box.
    BoundingBox,
}

/// Three reference points forming the basis of an affine transform.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct FiducialSet {
    points: [SpotPoint; 3],
    source: FiducialSource,
}

impl FiducialSet {
    pub(crate) fn new(points: [SpotPoint; 3], source: FiducialSource) -> Self {
        Self { points, source }
    }

    /// The three points in emission order.
    #[inline]
    pub fn points(&self) -> [SpotPoint; 3] {
        self.points
    }

    #[inline]
    pub fn source(&self) -> FiducialSource {
        self.source
    }

    /// Points as `nalgebra` values for an affine estimator.
    pub fn as_nalgebra(&self) -> [Point2<f64>; 3] {
        self.points.map(SpotPoint::to_point2)
    }

    /// Explicit sets are never checked; this lets callers test them.
    pub fn is_degenerate(&self) -> bool {
        let [a, b, c] = self.points;
        is_collinear(a, b, c)
    }
}

impl From<FiducialSet> for [SpotPoint; 3] {
    fn from(set: FiducialSet) -> Self {
        set.points
    }
}
