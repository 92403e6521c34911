use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::consts::PARAM_COUNT;

use super::offsets::RMS_ERROR;

/// Geometric primitive a detection request asks for, or a result reports.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum FeatureType {
    /// Let the detector pick the best-fitting primitive. Only meaningful
    /// in a request.
    Any,
    Plane,
    Sphere,
    Cylinder,
    Cone,
    Torus,
}

impl fmt::Display for FeatureType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Any => write!(f, "Any"),
            Self::Plane => write!(f, "Plane"),
            Self::Sphere => write!(f, "Sphere"),
            Self::Cylinder => write!(f, "Cylinder"),
            Self::Cone => write!(f, "Cone"),
            Self::Torus => write!(f, "Torus"),
        }
    }
}

/// A shape conversion the detector may apply when the fitted primitive
/// degenerates into a simpler one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ConversionRule {
    ConeToCylinder,
    TorusToSphere,
    TorusToCylinder,
}

impl fmt::Display for ConversionRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ConeToCylinder => write!(f, "cone -> cylinder"),
            Self::TorusToSphere => write!(f, "torus -> sphere"),
            Self::TorusToCylinder => write!(f, "torus -> cylinder"),
        }
    }
}

/// Set of enabled smart conversion rules.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SmartConversion(BTreeSet<ConversionRule>);

impl SmartConversion {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn all() -> Self {
        [
            ConversionRule::ConeToCylinder,
            ConversionRule::TorusToSphere,
            ConversionRule::TorusToCylinder,
        ]
        .into_iter()
        .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, rule: ConversionRule) -> bool {
        self.0.contains(&rule)
    }

    pub fn rules(&self) -> impl Iterator<Item = ConversionRule> + '_ {
        self.0.iter().copied()
    }
}

impl FromIterator<ConversionRule> for SmartConversion {
    fn from_iter<I: IntoIterator<Item = ConversionRule>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl fmt::Display for SmartConversion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "off");
        }
        let rules: Vec<String> = self.rules().map(|r| r.to_string()).collect();
        write!(f, "{}", rules.join(", "))
    }
}

/// One seeded detection call.
#[derive(Clone, Debug, PartialEq)]
pub struct DetectRequest {
    pub feature_type: FeatureType,
    pub seed_index: usize,
    pub seed_radius: f32,
    /// Ask the detector to report intermediate fitting stages.
    pub report_intermediate: bool,
}

/// Per-point inlier membership of a detection result.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InlierFlags(Vec<bool>);

impl InlierFlags {
    pub fn new(flags: Vec<bool>) -> Self {
        Self(flags)
    }

    /// Flags for `total` points with only `indices` marked as inliers.
    /// Indices past `total` are ignored.
    pub fn from_indices(total: usize, indices: &[usize]) -> Self {
        let mut flags = vec![false; total];
        for &i in indices {
            if let Some(flag) = flags.get_mut(i) {
                *flag = true;
            }
        }
        Self::new(flags)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn is_inlier(&self, index: usize) -> bool {
        self.0.get(index).copied().unwrap_or(false)
    }

    pub fn inlier_count(&self) -> usize {
        self.0.iter().filter(|&&f| f).count()
    }
}

/// Raw detection output as handed over by the detector: a type tag and a
/// flat parameter array addressed through [`super::offsets`].
#[derive(Clone, Debug, PartialEq)]
pub struct DetectionResult {
    pub feature_type: FeatureType,
    pub params: [f32; PARAM_COUNT],
    pub inlier_flags: Option<InlierFlags>,
}

impl DetectionResult {
    /// Build from a parameter prefix; remaining slots are zero.
    /// Returns `None` if `params` is longer than [`PARAM_COUNT`].
    pub fn from_params(feature_type: FeatureType, params: &[f32]) -> Option<Self> {
        if params.len() > PARAM_COUNT {
            return None;
        }
        let mut buf = [0.0f32; PARAM_COUNT];
        buf[..params.len()].copy_from_slice(params);
        Some(Self {
            feature_type,
            params: buf,
            inlier_flags: None,
        })
    }

    pub fn with_inlier_flags(mut self, flags: InlierFlags) -> Self {
        self.inlier_flags = Some(flags);
        self
    }

    pub fn rms_error(&self) -> f32 {
        self.params[RMS_ERROR]
    }
}
