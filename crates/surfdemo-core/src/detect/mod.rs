pub mod detector;
pub mod offsets;
pub mod scripted;
pub mod types;

pub use detector::SurfaceDetector;
pub use scripted::{DetectorScript, ScriptedDetector, ScriptedOutcome, ScriptedResponse};
pub use types::{
    ConversionRule, DetectRequest, DetectionResult, FeatureType, InlierFlags, SmartConversion,
};
