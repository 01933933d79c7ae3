//! Feature extraction for gesture classification
//!
//! One feature per fingertip: the planar distance from that fingertip to the
//! palm center, in thumb → pinky order.

use std::ops::Index;

use serde::{Deserialize, Serialize};

use crate::landmarks::LandmarkSet;

pub const FEATURE_COUNT: usize = 5;

/// Fixed-length feature vector, serialized as a plain list
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeatureVector([f32; FEATURE_COUNT]);

impl FeatureVector {
    pub const fn new(values: [f32; FEATURE_COUNT]) -> Self {
        Self(values)
    }

    pub fn as_array(&self) -> &[f32; FEATURE_COUNT] {
        &self.0
    }

    /// Euclidean distance across all components
    pub fn distance(&self, other: &FeatureVector) -> f32 {
        self.0
            .iter()
            .zip(other.0.iter())
            .map(|(a, b)| (a - b) * (a - b))
            .sum::<f32>()
            .sqrt()
    }

    pub fn is_finite(&self) -> bool {
        self.0.iter().all(|v| v.is_finite())
    }
}

impl From<[f32; FEATURE_COUNT]> for FeatureVector {
    fn from(values: [f32; FEATURE_COUNT]) -> Self {
        Self(values)
    }
}

impl Index<usize> for FeatureVector {
    type Output = f32;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

/// Extract fingertip-to-palm distances from a hand
pub fn extract_features(landmarks: &LandmarkSet) -> FeatureVector {
    let palm = landmarks.palm_center();
    let features = landmarks.fingertips().map(|tip| tip.planar_distance(&palm));
    tracing::trace!(?features, "extracted fingertip features");
    FeatureVector(features)
}
