//! Configuration management for `bleuper-core`.
//!
//! A `ScorerConfig` bundles everything needed to build a `BleuScorer` except
//! the references themselves: per-order weights, the minimum reference count,
//! the warning flag and an optional smoothing strategy. Configurations are
//! read from YAML, and a partial user file can be overlaid on the defaults.
//!
//! License: MIT

use anyhow::{Context, Result};
use log::{debug, info, warn};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::errors::BleuError;
use crate::scorer::DEFAULT_MIN_REFERENCES;
use crate::smoothing::SmoothingConfig;
use crate::weights::Weights;

/// Full scorer configuration. Missing YAML fields take their default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScorerConfig {
    /// Order (1..=4) to weight; must sum to 1.
    pub weights: BTreeMap<usize, f64>,
    /// Fewest references a scorer accepts. Values below 1 are treated as 1.
    pub min_references: usize,
    /// Silences the zero-overlap warning.
    pub suppress_warnings: bool,
    /// Strategy applied when some order has no overlap.
    pub smoothing: Option<SmoothingConfig>,
}

impl Default for ScorerConfig {
    fn default() -> Self {
        Self {
            weights: Weights::default().as_map().clone(),
            min_references: DEFAULT_MIN_REFERENCES,
            suppress_warnings: false,
            smoothing: None,
        }
    }
}

/// A partial configuration: only the fields present override the defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScorerOverrides {
    pub weights: Option<BTreeMap<usize, f64>>,
    pub min_references: Option<usize>,
    pub suppress_warnings: Option<bool>,
    pub smoothing: Option<SmoothingConfig>,
}

fn read_yaml<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;
    serde_yml::from_str(&text).with_context(|| format!("Failed to parse config file {}", path.display()))
}

impl ScorerConfig {
    /// Loads and validates a full configuration from a YAML file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading scorer configuration from: {}", path.display());
        let config: ScorerConfig = read_yaml(path)?;
        config
            .validate()
            .with_context(|| format!("Invalid scorer configuration in {}", path.display()))?;
        Ok(config)
    }

    /// Loads the embedded default configuration.
    pub fn load_default() -> Result<Self> {
        debug!("Loading default scorer configuration from embedded string...");
        let default_yaml = include_str!("../config/default.yaml");
        let config: ScorerConfig =
            serde_yml::from_str(default_yaml).context("Failed to parse default scorer configuration")?;
        Ok(config)
    }

    /// Validated weights.
    pub fn weights(&self) -> std::result::Result<Weights, BleuError> {
        Weights::from_map(&self.weights)
    }

    /// Checks weights and smoothing parameters without building a scorer.
    pub fn validate(&self) -> std::result::Result<(), BleuError> {
        self.weights()?;
        if let Some(smoothing) = &self.smoothing {
            smoothing.build()?;
        }
        if self.min_references == 0 {
            warn!("min_references is 0; at least one reference is still required.");
        }
        Ok(())
    }
}

impl ScorerOverrides {
    /// Loads a partial configuration from a YAML file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading scorer overrides from: {}", path.display());
        read_yaml(path)
    }
}

/// Overlays user-provided settings on a default configuration.
pub fn merge_config(default_config: ScorerConfig, user_config: Option<ScorerOverrides>) -> ScorerConfig {
    let mut merged = default_config;

    if let Some(user) = user_config {
        if let Some(weights) = user.weights {
            debug!("Overriding weights with user value: {:?}", weights);
            merged.weights = weights;
        }
        if let Some(min_references) = user.min_references {
            debug!("Overriding min_references with user value: {}", min_references);
            merged.min_references = min_references;
        }
        if let Some(suppress) = user.suppress_warnings {
            merged.suppress_warnings = suppress;
        }
        if let Some(smoothing) = user.smoothing {
            debug!("Overriding smoothing with user value: {:?}", smoothing);
            merged.smoothing = Some(smoothing);
        }
    }

    merged
}
