//! Landmark point representation

use crate::error::{GestureError, Result};

/// A single tracked hand point.
///
/// Trackers report normalized image coordinates in `x`/`y` and a relative
/// depth in `z`. Only the planar part takes part in feature extraction.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Landmark {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Landmark {
    /// Origin point (0, 0, 0)
    pub const ORIGIN: Self = Self {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    /// Create a new landmark
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Create a landmark with no depth component
    pub fn planar(x: f32, y: f32) -> Self {
        Self { x, y, z: 0.0 }
    }

    /// Build a landmark from a coordinate row.
    ///
    /// Rows shorter than two coordinates are rejected; anything past the
    /// third coordinate is ignored.
    pub fn from_coords(index: usize, coords: &[f32]) -> Result<Self> {
        match coords {
            [x, y] => Ok(Self::planar(*x, *y)),
            [x, y, z, ..] => Ok(Self::new(*x, *y, *z)),
            _ => Err(GestureError::MissingCoordinates {
                index,
                actual: coords.len(),
            }),
        }
    }

    /// Euclidean distance over (x, y); depth is ignored.
    ///
    /// Infinite when the points are too far apart for an `f32`.
    pub fn planar_distance(&self, other: &Landmark) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx.hypot(dy)
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_origin() {
        let p = Landmark::ORIGIN;
        assert_eq!(p.x, 0.0);
        assert_eq!(p.y, 0.0);
        assert_eq!(p.z, 0.0);
    }

    #[test]
    fn test_planar_distance_ignores_depth() {
        let a = Landmark::new(0.0, 0.0, 10.0);
        let b = Landmark::new(3.0, 4.0, -7.0);
        assert!((a.planar_distance(&b) - 5.0).abs() < 0.0001);
    }

    #[test]
    fn test_from_coords() {
        assert_eq!(
            Landmark::from_coords(0, &[1.0, 2.0]).unwrap(),
            Landmark::planar(1.0, 2.0)
        );
        assert_eq!(
            Landmark::from_coords(0, &[1.0, 2.0, 3.0, 4.0]).unwrap(),
            Landmark::new(1.0, 2.0, 3.0)
        );

        let err = Landmark::from_coords(7, &[1.0]).unwrap_err();
        assert!(matches!(
            err,
            GestureError::MissingCoordinates { index: 7, actual: 1 }
        ));
    }

    #[test]
    fn test_planar_distance_large_but_representable() {
        let a = Landmark::planar(0.0, 0.0);
        let b = Landmark::planar(3e20, 4e20);
        let d = a.planar_distance(&b);
        assert!(d.is_finite());
        assert!((d / 5e20 - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_planar_distance_overflow() {
        let a = Landmark::planar(-3e38, 0.0);
        let b = Landmark::planar(3e38, 0.0);
        assert!(a.planar_distance(&b).is_infinite());
    }

    #[test]
    fn test_is_finite() {
        assert!(Landmark::new(0.5, 0.5, 0.0).is_finite());
        assert!(!Landmark::new(f32::NAN, 0.5, 0.0).is_finite());
        assert!(!Landmark::new(0.5, 0.5, f32::INFINITY).is_finite());
    }
}
