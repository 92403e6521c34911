use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::cloud::PointCloud;
use crate::consts::PARAM_COUNT;
use crate::error::{Result, SurfDemoError};

use super::detector::SurfaceDetector;
use super::types::{
    DetectRequest, DetectionResult, FeatureType, InlierFlags, SmartConversion,
};

/// What a scripted detector answers for a matching request.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ScriptedOutcome {
    /// Report a feature. `params` fills the flat parameter array from slot 0.
    Found {
        feature: FeatureType,
        params: Vec<f32>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        inliers: Option<Vec<usize>>,
    },
    NotFound,
    /// Fail the call with the given message.
    Failure { message: String },
}

/// One canned answer, keyed on the request.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScriptedResponse {
    pub request: FeatureType,
    pub seed_index: usize,
    /// Match only while smart conversion is on (`true`) or off (`false`).
    /// Matches both when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub smart: Option<bool>,
    pub outcome: ScriptedOutcome,
}

impl ScriptedResponse {
    fn matches(&self, request: &DetectRequest, smart_enabled: bool) -> bool {
        self.request == request.feature_type
            && self.seed_index == request.seed_index
            && self.smart.map_or(true, |s| s == smart_enabled)
    }
}

/// A replay script for [`ScriptedDetector`], usually loaded from TOML.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DetectorScript {
    #[serde(default, rename = "response")]
    pub responses: Vec<ScriptedResponse>,
}

impl DetectorScript {
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let script: Self =
            toml::from_str(text).map_err(|e| SurfDemoError::Script(e.to_string()))?;
        script.validate()?;
        Ok(script)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    pub fn validate(&self) -> Result<()> {
        for (i, response) in self.responses.iter().enumerate() {
            if let ScriptedOutcome::Found { params, .. } = &response.outcome {
                if params.len() > PARAM_COUNT {
                    return Err(SurfDemoError::Script(format!(
                        "response {i}: {} parameters given, at most {PARAM_COUNT} allowed",
                        params.len()
                    )));
                }
            }
        }
        Ok(())
    }
}

/// Detector that replays canned outcomes instead of fitting surfaces.
///
/// It enforces the same preconditions a native engine does: a point
/// cloud must be set and non-empty, the seed index must be in range and
/// the measurement parameters must be positive. Requests with no matching
/// response are reported as not found.
#[derive(Clone, Debug, Default)]
pub struct ScriptedDetector {
    script: DetectorScript,
    point_count: Option<usize>,
    accuracy: f32,
    mean_distance: f32,
    smart_conversion: SmartConversion,
}

impl ScriptedDetector {
    pub fn new(script: DetectorScript) -> Self {
        Self {
            script,
            ..Self::default()
        }
    }

    pub fn measurement(&self) -> (f32, f32) {
        (self.accuracy, self.mean_distance)
    }

    pub fn smart_conversion(&self) -> &SmartConversion {
        &self.smart_conversion
    }

    fn check_preconditions(&self, request: &DetectRequest) -> Result<usize> {
        let total = self.point_count.ok_or(SurfDemoError::PointCloudNotSet)?;
        if total == 0 {
            return Err(SurfDemoError::EmptyPointCloud);
        }
        if request.seed_index >= total {
            return Err(SurfDemoError::SeedIndexOutOfRange {
                index: request.seed_index,
                total,
            });
        }
        if !(self.accuracy > 0.0 && self.mean_distance > 0.0) {
            return Err(SurfDemoError::Detection(
                "measurement accuracy and mean distance must be positive".into(),
            ));
        }
        if !(request.seed_radius > 0.0) {
            return Err(SurfDemoError::Detection(format!(
                "seed radius must be positive, got {}",
                request.seed_radius
            )));
        }
        Ok(total)
    }
}

impl SurfaceDetector for ScriptedDetector {
    fn name(&self) -> &str {
        "scripted"
    }

    fn set_point_cloud(&mut self, cloud: &PointCloud) {
        self.point_count = Some(cloud.len());
    }

    fn set_measurement(&mut self, accuracy: f32, mean_distance: f32) {
        self.accuracy = accuracy;
        self.mean_distance = mean_distance;
    }

    fn set_smart_conversion(&mut self, conversion: SmartConversion) {
        self.smart_conversion = conversion;
    }

    fn detect(&self, request: &DetectRequest) -> Result<Option<DetectionResult>> {
        let total = self.check_preconditions(request)?;
        let smart_enabled = !self.smart_conversion.is_empty();

        let Some(response) = self
            .script
            .responses
            .iter()
            .find(|r| r.matches(request, smart_enabled))
        else {
            debug!(
                feature = %request.feature_type,
                seed = request.seed_index,
                "No scripted response"
            );
            return Ok(None);
        };

        match &response.outcome {
            ScriptedOutcome::Found {
                feature,
                params,
                inliers,
            } => {
                let result = DetectionResult::from_params(*feature, params).ok_or_else(|| {
                    SurfDemoError::Script(format!(
                        "{} parameters given, at most {PARAM_COUNT} allowed",
                        params.len()
                    ))
                })?;
                Ok(Some(match inliers {
                    Some(indices) => {
                        result.with_inlier_flags(InlierFlags::from_indices(total, indices))
                    }
                    None => result,
                }))
            }
            ScriptedOutcome::NotFound => Ok(None),
            ScriptedOutcome::Failure { message } => {
                Err(SurfDemoError::Detection(message.clone()))
            }
        }
    }
}
