//! Ordered mark trace along a fin or fluke outline.

use finmark_core::SpotPoint;
use log::trace;
use serde::{Deserialize, Serialize};

#[cfg(feature = "tracing")]
use tracing::instrument;

use crate::{MarkType, TraceArrays, TraceError};

/// One digitized outline point.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TracePoint {
    pub x: f64,
    pub y: f64,
    pub mark_type: MarkType,
    /// Caller-assigned bookkeeping scalar (arclength, ordinal, ...). Never recomputed here.
    #[serde(default)]
    pub position: f64,
}

impl TracePoint {
    pub const fn new(x: f64, y: f64, mark_type: MarkType) -> Self {
        Self {
            x,
            y,
            mark_type,
            position: 0.0,
        }
    }

    pub const fn with_position(mut self, position: f64) -> Self {
        self.position = position;
        self
    }

    #[inline]
    pub fn location(&self) -> SpotPoint {
        SpotPoint::new(self.x, self.y)
    }
}

impl Default for TracePoint {
    fn default() -> Self {
        Self::new(0.0, 0.0, MarkType::Point)
    }
}

/// Ordered sequence of typed points, head-to-tail in recording direction.
///
/// Transforms (`keep_only`, `remove_types`, `append`, `reverse`) return a new
/// trace; only the index setters and [`MarkTrace::combine`] mutate in place.
/// Extent start/end codes are taken as recorded: an unmatched `Gouge` with
/// no later `GougeEnd` is kept as-is.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "TraceArrays", into = "TraceArrays")]
pub struct MarkTrace {
    points: Vec<TracePoint>,
    notch_open: bool,
    curled: bool,
}

impl MarkTrace {
    /// Empty trace with both flags cleared.
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-sized trace of `len` zeroed `Point`s, to be filled by the index setters.
    pub fn with_len(len: usize) -> Self {
        Self::from_points(vec![TracePoint::default(); len])
    }

    pub fn from_points(points: Vec<TracePoint>) -> Self {
        Self {
            points,
            notch_open: false,
            curled: false,
        }
    }

    /// Build from parallel channels; positions are zero-filled.
    pub fn from_arrays(x: &[f64], y: &[f64], types: &[MarkType]) -> Result<Self, TraceError> {
        let positions = vec![0.0; x.len()];
        Self::from_arrays_with_positions(x, y, types, &positions)
    }

    pub fn from_arrays_with_positions(
        x: &[f64],
        y: &[f64],
        types: &[MarkType],
        positions: &[f64],
    ) -> Result<Self, TraceError> {
        let n = x.len();
        if y.len() != n || types.len() != n || positions.len() != n {
            return Err(TraceError::LengthMismatch {
                x: n,
                y: y.len(),
                types: types.len(),
                positions: positions.len(),
            });
        }
        let points = (0..n)
            .map(|i| TracePoint::new(x[i], y[i], types[i]).with_position(positions[i]))
            .collect();
        Ok(Self::from_points(points))
    }

    /// Builder-style flag setup.
    pub fn with_flags(mut self, notch_open: bool, curled: bool) -> Self {
        self.notch_open = notch_open;
        self.curled = curled;
        self
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[inline]
    pub fn points(&self) -> &[TracePoint] {
        &self.points
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TracePoint> {
        self.points.iter()
    }

    pub fn into_points(self) -> Vec<TracePoint> {
        self.points
    }

    #[inline]
    pub fn notch_open(&self) -> bool {
        self.notch_open
    }

    pub fn set_notch_open(&mut self, notch_open: bool) {
        self.notch_open = notch_open;
    }

    #[inline]
    pub fn curled(&self) -> bool {
        self.curled
    }

    pub fn set_curled(&mut self, curled: bool) {
        self.curled = curled;
    }

    pub fn point(&self, index: usize) -> Result<&TracePoint, TraceError> {
        let len = self.len();
        self.points
            .get(index)
            .ok_or(TraceError::IndexOutOfRange { index, len })
    }

    fn point_mut(&mut self, index: usize) -> Result<&mut TracePoint, TraceError> {
        let len = self.points.len();
        self.points
            .get_mut(index)
            .ok_or(TraceError::IndexOutOfRange { index, len })
    }

    pub fn x(&self, index: usize) -> Result<f64, TraceError> {
        self.point(index).map(|p| p.x)
    }

    pub fn y(&self, index: usize) -> Result<f64, TraceError> {
        self.point(index).map(|p| p.y)
    }

    pub fn mark_type(&self, index: usize) -> Result<MarkType, TraceError> {
        self.point(index).map(|p| p.mark_type)
    }

    pub fn position(&self, index: usize) -> Result<f64, TraceError> {
        self.point(index).map(|p| p.position)
    }

    pub fn set_point(&mut self, index: usize, point: TracePoint) -> Result<(), TraceError> {
        *self.point_mut(index)? = point;
        Ok(())
    }

    pub fn set_x(&mut self, index: usize, x: f64) -> Result<(), TraceError> {
        self.point_mut(index)?.x = x;
        Ok(())
    }

    pub fn set_y(&mut self, index: usize, y: f64) -> Result<(), TraceError> {
        self.point_mut(index)?.y = y;
        Ok(())
    }

    pub fn set_mark_type(&mut self, index: usize, mark_type: MarkType) -> Result<(), TraceError> {
        self.point_mut(index)?.mark_type = mark_type;
        Ok(())
    }

    pub fn set_position(&mut self, index: usize, position: f64) -> Result<(), TraceError> {
        self.point_mut(index)?.position = position;
        Ok(())
    }

    pub fn xs(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.x).collect()
    }

    pub fn ys(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.y).collect()
    }

    pub fn types(&self) -> Vec<MarkType> {
        self.points.iter().map(|p| p.mark_type).collect()
    }

    pub fn positions(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.position).collect()
    }

    /// Points whose type is in `types`, in original order.
    #[cfg_attr(feature = "tracing", instrument(level = "debug", skip_all, fields(len = self.len())))]
    pub fn keep_only(&self, types: &[MarkType]) -> MarkTrace {
        self.filtered(|t| types.contains(&t))
    }

    /// Points whose type is *not* in `types`, in original order.
    #[cfg_attr(feature = "tracing", instrument(level = "debug", skip_all, fields(len = self.len())))]
    pub fn remove_types(&self, types: &[MarkType]) -> MarkTrace {
        self.filtered(|t| !types.contains(&t))
    }

    pub fn keep_only_type(&self, mark_type: MarkType) -> MarkTrace {
        self.keep_only(&[mark_type])
    }

    pub fn remove_type(&self, mark_type: MarkType) -> MarkTrace {
        self.remove_types(&[mark_type])
    }

    fn filtered(&self, keep: impl Fn(MarkType) -> bool) -> MarkTrace {
        let mask: Vec<bool> = self.points.iter().map(|p| keep(p.mark_type)).collect();
        let kept = mask.iter().filter(|&&k| k).count();

        let mut points = Vec::with_capacity(kept);
        points.extend(
            self.points
                .iter()
                .zip(&mask)
                .filter_map(|(p, &k)| k.then_some(*p)),
        );
        trace!("filter kept {kept} of {} trace points", self.len());

        MarkTrace {
            points,
            notch_open: self.notch_open,
            curled: self.curled,
        }
    }

    /// New trace with `other`'s points after this one's; flags come from `self`.
    pub fn append(&self, other: &MarkTrace) -> MarkTrace {
        let mut out = self.clone();
        out.combine(other);
        out
    }

    /// In-place [`MarkTrace::append`]: grows `self` and returns it for chaining.
    pub fn combine(&mut self, other: &MarkTrace) -> &mut Self {
        self.points.extend_from_slice(&other.points);
        self
    }

    /// New trace with the point order flipped end-to-start; flags are copied.
    pub fn reverse(&self) -> MarkTrace {
        MarkTrace {
            points: self.points.iter().rev().copied().collect(),
            notch_open: self.notch_open,
            curled: self.curled,
        }
    }

    /// Plain parallel-array form for persistence and display layers.
    pub fn to_arrays(&self) -> TraceArrays {
        TraceArrays {
            x: self.xs(),
            y: self.ys(),
            mark_types: self.points.iter().map(|p| p.mark_type.code()).collect(),
            positions: self.positions(),
            notch_open: self.notch_open,
            curled: self.curled,
        }
    }
}

impl<'a> IntoIterator for &'a MarkTrace {
    type Item = &'a TracePoint;
    type IntoIter = std::slice::Iter<'a, TracePoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

impl FromIterator<TracePoint> for MarkTrace {
    fn from_iter<I: IntoIterator<Item = TracePoint>>(iter: I) -> Self {
        Self::from_points(iter.into_iter().collect())
    }
}
