//! Hand landmark sets in the standard 21-point hand-pose layout

use std::ops::Index;

use serde::Deserialize;

use crate::error::{GestureError, Result};
use crate::spatial::Landmark;

// ============================================================================
// HAND LANDMARK INDICES
// ============================================================================

pub const WRIST: usize = 0;
pub const THUMB_TIP: usize = 4;
pub const INDEX_TIP: usize = 8;
pub const MIDDLE_TIP: usize = 12;
pub const RING_TIP: usize = 16;
pub const PINKY_TIP: usize = 20;

/// Reference origin for fingertip distances
pub const PALM_CENTER: usize = WRIST;

/// Fingertips in thumb → pinky order
pub const FINGERTIPS: [usize; 5] = [THUMB_TIP, INDEX_TIP, MIDDLE_TIP, RING_TIP, PINKY_TIP];

/// Minimum number of points in a usable hand
pub const HAND_LANDMARK_COUNT: usize = 21;

// ============================================================================
// LANDMARK SET
// ============================================================================

/// An ordered set of hand landmarks.
///
/// Holds at least [`HAND_LANDMARK_COUNT`] finite points, and every
/// fingertip-to-palm distance is finite. Extra trailing points are kept but
/// never read by feature extraction.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "Vec<Vec<f32>>")]
pub struct LandmarkSet {
    points: Vec<Landmark>,
}

impl LandmarkSet {
    pub fn new(points: Vec<Landmark>) -> Result<Self> {
        if points.len() < HAND_LANDMARK_COUNT {
            return Err(GestureError::insufficient(points.len()));
        }
        if let Some(index) = points.iter().position(|p| !p.is_finite()) {
            return Err(GestureError::NonFiniteCoordinate { index });
        }
        let palm = points[PALM_CENTER];
        if let Some(index) = FINGERTIPS
            .into_iter()
            .find(|&i| !points[i].planar_distance(&palm).is_finite())
        {
            return Err(GestureError::NonFiniteFeature { index });
        }
        Ok(Self { points })
    }

    /// Parse a flat coordinate buffer, as trackers hand them over
    /// (`[x0, y0, z0, x1, y1, z1, ...]` for stride 3).
    pub fn from_flat(data: &[f32], stride: usize) -> Result<Self> {
        if !(2..=3).contains(&stride) {
            return Err(GestureError::InvalidInput(format!(
                "stride must be 2 or 3, got {}",
                stride
            )));
        }
        if data.len() % stride != 0 {
            return Err(GestureError::InvalidInput(format!(
                "buffer of {} values is not a multiple of stride {}",
                data.len(),
                stride
            )));
        }

        let points = data
            .chunks_exact(stride)
            .enumerate()
            .map(|(i, chunk)| Landmark::from_coords(i, chunk))
            .collect::<Result<Vec<_>>>()?;
        Self::new(points)
    }

    /// Parse nested coordinate rows (`[[x, y], [x, y, z], ...]`)
    pub fn from_rows<R: AsRef<[f32]>>(rows: &[R]) -> Result<Self> {
        let points = rows
            .iter()
            .enumerate()
            .map(|(i, row)| Landmark::from_coords(i, row.as_ref()))
            .collect::<Result<Vec<_>>>()?;
        Self::new(points)
    }

    pub fn palm_center(&self) -> Landmark {
        self.points[PALM_CENTER]
    }

    pub fn fingertips(&self) -> [Landmark; 5] {
        FINGERTIPS.map(|i| self.points[i])
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn as_slice(&self) -> &[Landmark] {
        &self.points
    }
}

impl TryFrom<Vec<Landmark>> for LandmarkSet {
    type Error = GestureError;

    fn try_from(points: Vec<Landmark>) -> Result<Self> {
        Self::new(points)
    }
}

impl TryFrom<Vec<Vec<f32>>> for LandmarkSet {
    type Error = GestureError;

    fn try_from(rows: Vec<Vec<f32>>) -> Result<Self> {
        Self::from_rows(rows.as_slice())
    }
}

impl Index<usize> for LandmarkSet {
    type Output = Landmark;

    fn index(&self, index: usize) -> &Self::Output {
        &self.points[index]
    }
}
