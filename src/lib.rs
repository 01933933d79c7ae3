//! gesture-ml: nearest-signature hand gesture classification
//!
//! Turns a tracked hand (21 landmarks, palm center at index 0) into five
//! fingertip-to-palm distances and matches them against a small table of
//! reference signatures.
//!
//! ```
//! use gesture_ml::{GestureClassifier, Landmark, LandmarkSet};
//!
//! let hand = LandmarkSet::new(vec![Landmark::ORIGIN; 21]).unwrap();
//! let result = GestureClassifier::new().predict(Some(&hand));
//! assert_eq!(result.gesture, "fist");
//! assert_eq!(result.confidence, 1.0);
//! ```

pub mod classifier;
pub mod cli;
pub mod config;
pub mod error;
pub mod features;
pub mod landmarks;
pub mod signature;
pub mod spatial;

// Re-export commonly used types
pub use classifier::{
    ClassificationResult, GestureClassifier, DEFAULT_CONFIDENCE_THRESHOLD, UNKNOWN_GESTURE,
};
pub use config::{ClassifierConfig, SignatureConfig};
pub use error::{GestureError, Result};
pub use features::{extract_features, FeatureVector, FEATURE_COUNT};
pub use landmarks::{LandmarkSet, FINGERTIPS, HAND_LANDMARK_COUNT, PALM_CENTER};
pub use signature::{Signature, SignatureTable};
pub use spatial::Landmark;
