//! Command-line interface

use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use crate::classifier::GestureClassifier;
use crate::config::ClassifierConfig;
use crate::features::FeatureVector;

/// Classify hand gestures from tracked landmarks
#[derive(Parser, Debug)]
#[command(name = "gesture-ml")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file path (defaults to the platform config directory)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: String,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Predict a gesture from a JSON landmark array (or `null`)
    Predict {
        /// Input file; reads stdin when omitted
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Override the configured confidence threshold
        #[arg(short, long)]
        threshold: Option<f32>,

        /// Pretty-print the JSON result
        #[arg(long)]
        pretty: bool,
    },

    /// Classify a raw five-value feature vector
    Classify {
        /// Fingertip distances, thumb to pinky
        #[arg(num_args = 5, required = true, allow_negative_numbers = true)]
        features: Vec<f32>,

        /// Override the configured confidence threshold
        #[arg(short, long)]
        threshold: Option<f32>,
    },

    /// List the active signature table
    Signatures,
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

/// Execute a parsed command, writing JSON to `out`
pub fn run(cli: &Cli, out: &mut impl Write) -> Result<()> {
    let mut config = ClassifierConfig::load_or_default(cli.config.as_deref())
        .context("Failed to load classifier config")?;
    tracing::info!(
        threshold = config.confidence_threshold,
        custom_signatures = config.signatures.len(),
        "Loaded classifier config"
    );

    match &cli.command {
        Commands::Predict {
            input,
            threshold,
            pretty,
        } => {
            if let Some(t) = threshold {
                config.confidence_threshold = *t;
            }
            let classifier = GestureClassifier::from_config(&config)?;
            let raw = read_input(input.as_deref())?;
            let rows: Option<Vec<Vec<f32>>> =
                serde_json::from_str(&raw).context("Failed to parse landmarks")?;

            let result = classifier
                .predict_rows(rows.as_deref())
                .context("Invalid landmarks")?;
            if *pretty {
                serde_json::to_writer_pretty(&mut *out, &result)?;
            } else {
                serde_json::to_writer(&mut *out, &result)?;
            }
            writeln!(out)?;
        }
        Commands::Classify {
            features,
            threshold,
        } => {
            if let Some(t) = threshold {
                config.confidence_threshold = *t;
            }
            let classifier = GestureClassifier::from_config(&config)?;
            let values: [f32; 5] = features
                .as_slice()
                .try_into()
                .context("Expected exactly five feature values")?;

            let (gesture, confidence) = classifier.classify_gesture(&FeatureVector::new(values));
            serde_json::to_writer(
                &mut *out,
                &serde_json::json!({ "gesture": gesture, "confidence": confidence }),
            )?;
            writeln!(out)?;
        }
        Commands::Signatures => {
            let table = config.signature_table()?;
            serde_json::to_writer_pretty(&mut *out, &table)?;
            writeln!(out)?;
        }
    }

    Ok(())
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read stdin")?;
            Ok(buf)
        }
    }
}
