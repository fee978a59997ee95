use serde::{Deserialize, Serialize};

use crate::SpotPoint;

/// Axis-aligned extremes of a spot cloud in image coordinates.
///
/// Image y grows downward, so `min_y` is the *highest* spot on screen and
/// `max_y` the *lowest*.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SpotExtent {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl SpotExtent {
    /// Compute the extent of `spots`, or `None` when the slice is empty.
    pub fn from_spots(spots: &[SpotPoint]) -> Option<Self> {
        let (first, rest) = spots.split_first()?;
        let mut ext = Self {
            min_x: first.x,
            max_x: first.x,
            min_y: first.y,
            max_y: first.y,
        };
        for p in rest {
            ext.min_x = ext.min_x.min(p.x);
            ext.max_x = ext.max_x.max(p.x);
            ext.min_y = ext.min_y.min(p.y);
            ext.max_y = ext.max_y.max(p.y);
        }
        Some(ext)
    }

    #[inline]
    pub fn leftmost(&self) -> f64 {
        self.min_x
    }

    #[inline]
    pub fn rightmost(&self) -> f64 {
        self.max_x
    }

    /// Smallest y: top of the image.
    #[inline]
    pub fn highest(&self) -> f64 {
        self.min_y
    }

    /// Largest y: bottom of the image.
    #[inline]
    pub fn lowest(&self) -> f64 {
        self.max_y
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn empty_input_has_no_extent() {
        assert!(SpotExtent::from_spots(&[]).is_none());
    }

    #[test]
    fn extremes_use_image_y_convention() {
        let spots = [
            SpotPoint::new(0.0, 0.0),
            SpotPoint::new(10.0, 0.0),
            SpotPoint::new(10.0, 5.0),
            SpotPoint::new(5.0, 2.0),
        ];
        let ext = SpotExtent::from_spots(&spots).expect("extent");
        assert_relative_eq!(ext.leftmost(), 0.0);
        assert_relative_eq!(ext.rightmost(), 10.0);
        assert_relative_eq!(ext.highest(), 0.0);
        assert_relative_eq!(ext.lowest(), 5.0);
    }

    #[test]
    fn negative_coordinates_are_not_clamped_to_zero() {
        let spots = [SpotPoint::new(-4.0, -3.0), SpotPoint::new(-1.0, -8.0)];
        let ext = SpotExtent::from_spots(&spots).expect("extent");
        assert_relative_eq!(ext.rightmost(), -1.0);
        assert_relative_eq!(ext.lowest(), -3.0);
        assert_relative_eq!(ext.width(), 3.0);
        assert_relative_eq!(ext.height(), 5.0);
    }
}
