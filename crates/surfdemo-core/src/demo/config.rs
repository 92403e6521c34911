use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_MEAN_DISTANCE, DEFAULT_MEASUREMENT_ACCURACY, DEFAULT_SEED_RADIUS};
use crate::error::{Result, SurfDemoError};

use super::preset::{normal_presets, smart_presets, Preset};

/// Parameters shared by every detection call of a run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DetectionConfig {
    /// Measurement accuracy of the scanner.
    #[serde(default = "default_measurement_accuracy")]
    pub measurement_accuracy: f32,
    /// Mean distance between neighbouring points.
    #[serde(default = "default_mean_distance")]
    pub mean_distance: f32,
    /// Radius of the seed region around the seed point.
    #[serde(default = "default_seed_radius")]
    pub seed_radius: f32,
}

fn default_measurement_accuracy() -> f32 {
    DEFAULT_MEASUREMENT_ACCURACY
}
fn default_mean_distance() -> f32 {
    DEFAULT_MEAN_DISTANCE
}
fn default_seed_radius() -> f32 {
    DEFAULT_SEED_RADIUS
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            measurement_accuracy: DEFAULT_MEASUREMENT_ACCURACY,
            mean_distance: DEFAULT_MEAN_DISTANCE,
            seed_radius: DEFAULT_SEED_RADIUS,
        }
    }
}

impl DetectionConfig {
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("measurement_accuracy", self.measurement_accuracy),
            ("mean_distance", self.mean_distance),
            ("seed_radius", self.seed_radius),
        ];
        for (name, value) in fields {
            if !value.is_finite() || value <= 0.0 {
                return Err(SurfDemoError::InvalidConfig(format!(
                    "{name} must be a positive number, got {value}"
                )));
            }
        }
        Ok(())
    }
}

/// Full demo configuration: detection parameters and both preset lists.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DemoConfig {
    #[serde(default)]
    pub detection: DetectionConfig,
    #[serde(default = "normal_presets")]
    pub normal_presets: Vec<Preset>,
    #[serde(default = "smart_presets")]
    pub smart_presets: Vec<Preset>,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            detection: DetectionConfig::default(),
            normal_presets: normal_presets(),
            smart_presets: smart_presets(),
        }
    }
}

impl DemoConfig {
    pub fn validate(&self) -> Result<()> {
        self.detection.validate()
    }

    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(text).map_err(|e| SurfDemoError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| SurfDemoError::InvalidConfig(e.to_string()))
    }
}
