//! Classifier configuration loaded from TOML.
//!
//! ```toml
//! confidence_threshold = 0.8
//!
//! [[signatures]]
//! name = "point"
//! vector = [0.0, 1.0, 0.0, 0.0, 0.0]
//! ```
//!
//! An empty `signatures` list keeps the built-in vocabulary.

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::classifier::DEFAULT_CONFIDENCE_THRESHOLD;
use crate::error::{GestureError, Result};
use crate::features::FEATURE_COUNT;
use crate::signature::{Signature, SignatureTable};

const CONFIG_FILE_NAME: &str = "config.toml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    pub confidence_threshold: f32,
    pub signatures: Vec<SignatureConfig>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignatureConfig {
    pub name: String,
    pub vector: [f32; FEATURE_COUNT],
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            confidence_threshold: DEFAULT_CONFIDENCE_THRESHOLD,
            signatures: Vec::new(),
        }
    }
}

impl ClassifierConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            GestureError::Config(format!("failed to read {}: {}", path.display(), e))
        })?;
        Self::from_toml_str(&content)
    }

    /// Load an explicit path, else the default path when it exists, else defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            return Self::load(path);
        }
        match Self::default_path() {
            Some(path) if path.is_file() => Self::load(&path),
            _ => Ok(Self::default()),
        }
    }

    /// `<platform config dir>/gesture-ml/config.toml`
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "gesture-ml")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
    }

    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.confidence_threshold) {
            return Err(GestureError::InvalidThreshold(self.confidence_threshold));
        }
        self.signature_table().map(|_| ())
    }

    pub fn signature_table(&self) -> Result<SignatureTable> {
        if self.signatures.is_empty() {
            return Ok(SignatureTable::builtin());
        }
        SignatureTable::new(
            self.signatures
                .iter()
                .map(|s| Signature::new(s.name.clone(), s.vector))
                .collect(),
        )
    }
}
