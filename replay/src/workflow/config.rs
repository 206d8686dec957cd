use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use styluscore::prelude::SmoothingConfig;

/// Driver-facing filter settings, loadable from YAML.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct ReplayConfig {
    pub min_pressure: f32,
    pub max_pressure: f32,
    pub min_weight: f32,
    pub max_weight: f32,
    pub base_smoothing: bool,
    pub reverse_smoothing: bool,
}

impl Default for ReplayConfig {
    fn default() -> Self {
        Self {
            min_pressure: 1.0,
            max_pressure: 8191.0,
            min_weight: 1.0,
            max_weight: 0.5,
            base_smoothing: false,
            reverse_smoothing: false,
        }
    }
}

impl ReplayConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path_ref = path.as_ref();
        let contents = fs::read_to_string(path_ref)
            .with_context(|| format!("reading replay config {}", path_ref.display()))?;
        let config: ReplayConfig = serde_yaml::from_str(&contents)
            .with_context(|| format!("parsing replay config {}", path_ref.display()))?;
        Ok(config)
    }

    pub fn from_args(
        min_pressure: f32,
        max_pressure: f32,
        min_weight: f32,
        max_weight: f32,
        base_smoothing: bool,
        reverse_smoothing: bool,
    ) -> Self {
        Self {
            min_pressure,
            max_pressure,
            min_weight,
            max_weight,
            base_smoothing,
            reverse_smoothing,
        }
    }

    pub fn to_smoothing_config(&self) -> SmoothingConfig {
        SmoothingConfig {
            min_pressure: self.min_pressure,
            max_pressure: self.max_pressure,
            min_weight: self.min_weight,
            max_weight: self.max_weight,
            base_smoothing: self.base_smoothing,
            reverse_smoothing: self.reverse_smoothing,
        }
    }
}
