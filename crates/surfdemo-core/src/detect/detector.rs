use crate::cloud::PointCloud;
use crate::error::Result;

use super::types::{DetectRequest, DetectionResult, SmartConversion};

/// A primitive surface detection engine.
///
/// The engine is stateful: it holds the point cloud and the global
/// measurement parameters between calls, the way native detection
/// libraries do.
pub trait SurfaceDetector {
    /// Human-readable engine name, used in logs.
    fn name(&self) -> &str;

    /// Hand the point cloud to the engine. Subsequent requests index into it.
    fn set_point_cloud(&mut self, cloud: &PointCloud);

    /// Set the scanner accuracy and mean point spacing.
    fn set_measurement(&mut self, accuracy: f32, mean_distance: f32);

    /// Replace the set of enabled smart conversion rules.
    fn set_smart_conversion(&mut self, conversion: SmartConversion);

    /// Run one seeded detection.
    ///
    /// `Ok(None)` means the call completed without finding a matching
    /// feature. `Err` means the call could not run (bad seed, missing or
    /// degenerate data).
    fn detect(&self, request: &DetectRequest) -> Result<Option<DetectionResult>>;
}
