use thiserror::Error;

use crate::detect::FeatureType;

#[derive(Error, Debug)]
pub enum SurfDemoError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Invalid detector script: {0}")]
    Script(String),

    #[error("Point cloud has not been set")]
    PointCloudNotSet,

    #[error("Point cloud is empty")]
    EmptyPointCloud,

    #[error("Seed index {index} out of range (total points: {total})")]
    SeedIndexOutOfRange { index: usize, total: usize },

    #[error("Detection failed: {0}")]
    Detection(String),

    #[error("Detector returned a result of unexpected feature type {0}")]
    UnexpectedFeatureType(FeatureType),
}

pub type Result<T> = std::result::Result<T, SurfDemoError>;
