use serde::{Deserialize, Serialize};

use crate::consts::{CONE_SEED_INDEX, CYLINDER_SEED_INDEX, SPHERE_SEED_INDEX, TORUS_SEED_INDEX};
use crate::detect::FeatureType;

/// A feature to search for and the seed point to grow it from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preset {
    pub feature_type: FeatureType,
    pub seed_index: usize,
}

impl Preset {
    pub const fn new(feature_type: FeatureType, seed_index: usize) -> Self {
        Self {
            feature_type,
            seed_index,
        }
    }
}

/// Each primitive searched from a seed lying on it.
pub fn normal_presets() -> Vec<Preset> {
    vec![
        Preset::new(FeatureType::Sphere, SPHERE_SEED_INDEX),
        Preset::new(FeatureType::Cylinder, CYLINDER_SEED_INDEX),
        Preset::new(FeatureType::Cone, CONE_SEED_INDEX),
        Preset::new(FeatureType::Torus, TORUS_SEED_INDEX),
    ]
}

/// Requests for a more general primitive than the one under the seed,
/// which smart conversion should reduce to the simpler shape.
pub fn smart_presets() -> Vec<Preset> {
    vec![
        Preset::new(FeatureType::Cone, CYLINDER_SEED_INDEX),
        Preset::new(FeatureType::Torus, SPHERE_SEED_INDEX),
        Preset::new(FeatureType::Torus, CYLINDER_SEED_INDEX),
    ]
}
