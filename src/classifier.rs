//! Nearest-signature gesture classifier.
//!
//! Features are compared against every entry of a [`SignatureTable`] by
//! Euclidean distance. The closest entry is reported when its confidence,
//! `1 / (1 + distance)`, reaches the threshold; otherwise the result is
//! `"unknown"` with zero confidence.

use serde::{Deserialize, Serialize};

use crate::config::ClassifierConfig;
use crate::error::{GestureError, Result};
use crate::features::{self, FeatureVector};
use crate::landmarks::LandmarkSet;
use crate::signature::SignatureTable;
use crate::spatial::Landmark;

/// Label reported when no signature is close enough
pub const UNKNOWN_GESTURE: &str = "unknown";

pub const DEFAULT_CONFIDENCE_THRESHOLD: f32 = 0.75;

/// Outcome of a single prediction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub gesture: String,
    pub confidence: f32,
    /// Absent only when no landmarks were supplied
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub features: Option<FeatureVector>,
}

impl ClassificationResult {
    /// Result for a frame with no detected hand
    pub fn no_hand() -> Self {
        Self {
            gesture: UNKNOWN_GESTURE.to_string(),
            confidence: 0.0,
            features: None,
        }
    }

    pub fn is_unknown(&self) -> bool {
        self.gesture == UNKNOWN_GESTURE
    }
}

/// Map a signature distance to a heuristic score in (0, 1]
pub fn confidence_for_distance(distance: f32) -> f32 {
    1.0 / (1.0 + distance)
}

#[derive(Debug, Clone)]
pub struct GestureClassifier {
    signatures: SignatureTable,
    confidence_threshold: f32,
}

impl GestureClassifier {
    /// Built-in signatures with the default threshold
    pub fn new() -> Self {
        Self {
            signatures: SignatureTable::builtin(),
            confidence_threshold: DEFAULT_CONFIDENCE_THRESHOLD,
        }
    }

    pub fn with_threshold(confidence_threshold: f32) -> Result<Self> {
        Self::with_signatures(SignatureTable::builtin(), confidence_threshold)
    }

    pub fn with_signatures(signatures: SignatureTable, confidence_threshold: f32) -> Result<Self> {
        if !(0.0..=1.0).contains(&confidence_threshold) {
            return Err(GestureError::InvalidThreshold(confidence_threshold));
        }
        Ok(Self {
            signatures,
            confidence_threshold,
        })
    }

    pub fn from_config(config: &ClassifierConfig) -> Result<Self> {
        Self::with_signatures(config.signature_table()?, config.confidence_threshold)
    }

    pub fn signatures(&self) -> &SignatureTable {
        &self.signatures
    }

    pub fn confidence_threshold(&self) -> f32 {
        self.confidence_threshold
    }

    pub fn extract_features(&self, landmarks: &LandmarkSet) -> FeatureVector {
        features::extract_features(landmarks)
    }

    /// Match features against the signature table.
    ///
    /// Returns the best gesture and its confidence, or `("unknown", 0.0)`
    /// when the confidence falls below the threshold.
    pub fn classify_gesture(&self, features: &FeatureVector) -> (String, f32) {
        let Some((best, distance)) = self.signatures.nearest(features) else {
            return (UNKNOWN_GESTURE.to_string(), 0.0);
        };
        let confidence = confidence_for_distance(distance);

        tracing::debug!(
            gesture = %best.name,
            distance,
            confidence,
            threshold = self.confidence_threshold,
            "nearest signature"
        );

        if confidence >= self.confidence_threshold {
            (best.name.clone(), confidence)
        } else {
            (UNKNOWN_GESTURE.to_string(), 0.0)
        }
    }

    /// Full pipeline: features, then classification.
    ///
    /// `None` means no hand was detected and yields [`ClassificationResult::no_hand`].
    pub fn predict(&self, landmarks: Option<&LandmarkSet>) -> ClassificationResult {
        let Some(landmarks) = landmarks else {
            return ClassificationResult::no_hand();
        };

        let features = self.extract_features(landmarks);
        let (gesture, confidence) = self.classify_gesture(&features);

        ClassificationResult {
            gesture,
            confidence,
            features: Some(features),
        }
    }

    /// Validate raw points, then predict
    pub fn predict_points(&self, points: Option<&[Landmark]>) -> Result<ClassificationResult> {
        self.predict_validated(points.map(|p| LandmarkSet::new(p.to_vec())))
    }

    /// Validate coordinate rows (`[x, y]` or `[x, y, z]`), then predict
    pub fn predict_rows<R: AsRef<[f32]>>(
        &self,
        rows: Option<&[R]>,
    ) -> Result<ClassificationResult> {
        self.predict_validated(rows.map(LandmarkSet::from_rows))
    }

    fn predict_validated(&self, set: Option<Result<LandmarkSet>>) -> Result<ClassificationResult> {
        let set = set.transpose().map_err(|e| {
            tracing::warn!("Rejected landmarks: {}", e);
            e
        })?;
        Ok(self.predict(set.as_ref()))
    }
}

impl Default for GestureClassifier {
    fn default() -> Self {
        Self::new()
    }
}
