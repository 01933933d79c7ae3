//! Reference gesture signatures.
//!
//! Each signature is an idealized feature vector where 1 marks an extended
//! finger and 0 a curled one. The table is ordered; iteration order decides
//! which signature wins when two are equally close.

use serde::Serialize;

use crate::classifier::UNKNOWN_GESTURE;
use crate::error::{GestureError, Result};
use crate::features::FeatureVector;

/// A named reference feature vector
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Signature {
    pub name: String,
    pub vector: FeatureVector,
}

impl Signature {
    pub fn new(name: impl Into<String>, vector: impl Into<FeatureVector>) -> Self {
        Self {
            name: name.into(),
            vector: vector.into(),
        }
    }
}

/// Built-in vocabulary, in matching order
const BUILTIN_SIGNATURES: [(&str, [f32; 5]); 5] = [
    ("thumb_up", [1.0, 0.0, 0.0, 0.0, 0.0]),
    ("peace", [0.0, 1.0, 1.0, 0.0, 0.0]),
    ("rock", [0.0, 1.0, 0.0, 0.0, 1.0]),
    ("open_hand", [1.0, 1.0, 1.0, 1.0, 1.0]),
    ("fist", [0.0, 0.0, 0.0, 0.0, 0.0]),
];

/// Immutable, ordered signature table
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct SignatureTable {
    signatures: Vec<Signature>,
}

impl SignatureTable {
    pub fn new(signatures: Vec<Signature>) -> Result<Self> {
        if signatures.is_empty() {
            return Err(GestureError::InvalidSignature(
                "signature table is empty".to_string(),
            ));
        }

        for (i, sig) in signatures.iter().enumerate() {
            if sig.name.trim().is_empty() {
                return Err(GestureError::InvalidSignature(format!(
                    "signature {} has an empty name",
                    i
                )));
            }
            if sig.name == UNKNOWN_GESTURE {
                return Err(GestureError::InvalidSignature(format!(
                    "'{}' is reserved",
                    UNKNOWN_GESTURE
                )));
            }
            if !sig.vector.is_finite() {
                return Err(GestureError::InvalidSignature(format!(
                    "signature '{}' has a non-finite component",
                    sig.name
                )));
            }
            if signatures[..i].iter().any(|s| s.name == sig.name) {
                return Err(GestureError::InvalidSignature(format!(
                    "duplicate signature '{}'",
                    sig.name
                )));
            }
        }

        Ok(Self { signatures })
    }

    /// thumb_up, peace, rock, open_hand, fist
    pub fn builtin() -> Self {
        Self {
            signatures: BUILTIN_SIGNATURES
                .iter()
                .map(|(name, vector)| Signature::new(*name, *vector))
                .collect(),
        }
    }

    pub fn get(&self, name: &str) -> Option<&Signature> {
        self.signatures.iter().find(|s| s.name == name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.signatures.iter().map(|s| s.name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Signature> {
        self.signatures.iter()
    }

    pub fn len(&self) -> usize {
        self.signatures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.signatures.is_empty()
    }

    /// Closest signature and its distance. The first minimum wins.
    pub fn nearest(&self, features: &FeatureVector) -> Option<(&Signature, f32)> {
        let mut best: Option<(&Signature, f32)> = None;
        for sig in &self.signatures {
            let distance = features.distance(&sig.vector);
            if best.map_or(true, |(_, min)| distance < min) {
                best = Some((sig, distance));
            }
        }
        best
    }
}

impl Default for SignatureTable {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_order() {
        let table = SignatureTable::builtin();
        let names: Vec<&str> = table.names().collect();
        assert_eq!(names, vec!["thumb_up", "peace", "rock", "open_hand", "fist"]);
        assert_eq!(
            table.get("rock").unwrap().vector,
            FeatureVector::new([0.0, 1.0, 0.0, 0.0, 1.0])
        );
    }

    #[test]
    fn test_nearest_exact() {
        let table = SignatureTable::builtin();
        let (sig, distance) = table
            .nearest(&FeatureVector::new([0.0, 1.0, 1.0, 0.0, 0.0]))
            .unwrap();
        assert_eq!(sig.name, "peace");
        assert_eq!(distance, 0.0);
    }

    #[test]
    fn test_nearest_tie_first_wins() {
        // [0.5, 0, 0, 0, 0] sits halfway between thumb_up and fist
        let table = SignatureTable::builtin();
        let (sig, distance) = table
            .nearest(&FeatureVector::new([0.5, 0.0, 0.0, 0.0, 0.0]))
            .unwrap();
        assert_eq!(sig.name, "thumb_up");
        assert!((distance - 0.5).abs() < 1e-6);

        let reversed = SignatureTable::new(vec![
            Signature::new("fist", [0.0; 5]),
            Signature::new("thumb_up", [1.0, 0.0, 0.0, 0.0, 0.0]),
        ])
        .unwrap();
        let (sig, _) = reversed
            .nearest(&FeatureVector::new([0.5, 0.0, 0.0, 0.0, 0.0]))
            .unwrap();
        assert_eq!(sig.name, "fist");
    }

    #[test]
    fn test_rejects_invalid_tables() {
        assert!(SignatureTable::new(vec![]).is_err());
        assert!(SignatureTable::new(vec![Signature::new("", [0.0; 5])]).is_err());
        assert!(SignatureTable::new(vec![Signature::new("unknown", [0.0; 5])]).is_err());
        assert!(SignatureTable::new(vec![Signature::new("a", [f32::NAN; 5])]).is_err());
        assert!(SignatureTable::new(vec![
            Signature::new("a", [0.0; 5]),
            Signature::new("a", [1.0; 5]),
        ])
        .is_err());
    }
}
