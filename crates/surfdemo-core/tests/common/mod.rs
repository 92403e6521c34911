use std::cell::RefCell;

use surfdemo_core::cloud::{Float3, PointCloud};
use surfdemo_core::detect::{
    DetectRequest, DetectionResult, FeatureType, SmartConversion, SurfaceDetector,
};
use surfdemo_core::error::{Result, SurfDemoError};

/// One observed `detect` call together with the detector state at that time.
#[derive(Clone, Debug)]
pub struct RecordedCall {
    pub request: DetectRequest,
    pub smart_conversion: SmartConversion,
    pub measurement: (f32, f32),
}

/// What the fake answers for a request.
#[derive(Clone, Debug)]
pub enum FakeOutcome {
    Found(DetectionResult),
    NotFound,
    Fail(String),
}

/// Test double that records every call and every configuration write.
pub struct RecordingDetector {
    pub calls: RefCell<Vec<RecordedCall>>,
    pub measurement_writes: usize,
    pub cloud_writes: usize,
    pub smart_writes: Vec<SmartConversion>,
    measurement: (f32, f32),
    smart_conversion: SmartConversion,
    answer: Box<dyn Fn(&DetectRequest) -> FakeOutcome>,
}

impl RecordingDetector {
    pub fn new(answer: impl Fn(&DetectRequest) -> FakeOutcome + 'static) -> Self {
        Self {
            calls: RefCell::new(Vec::new()),
            measurement_writes: 0,
            cloud_writes: 0,
            smart_writes: Vec::new(),
            measurement: (0.0, 0.0),
            smart_conversion: SmartConversion::none(),
            answer: Box::new(answer),
        }
    }

    /// Echo the requested kind back as a unit-radius sphere-like result.
    pub fn echoing() -> Self {
        Self::new(|req| match req.feature_type {
            FeatureType::Any => FakeOutcome::NotFound,
            kind => FakeOutcome::Found(
                DetectionResult::from_params(kind, &[0.001, 0.0, 0.0, 0.0, 1.0]).unwrap(),
            ),
        })
    }
}

impl SurfaceDetector for RecordingDetector {
    fn name(&self) -> &str {
        "recording"
    }

    fn set_point_cloud(&mut self, _cloud: &PointCloud) {
        self.cloud_writes += 1;
    }

    fn set_measurement(&mut self, accuracy: f32, mean_distance: f32) {
        self.measurement_writes += 1;
        self.measurement = (accuracy, mean_distance);
    }

    fn set_smart_conversion(&mut self, conversion: SmartConversion) {
        self.smart_writes.push(conversion.clone());
        self.smart_conversion = conversion;
    }

    fn detect(&self, request: &DetectRequest) -> Result<Option<DetectionResult>> {
        self.calls.borrow_mut().push(RecordedCall {
            request: request.clone(),
            smart_conversion: self.smart_conversion.clone(),
            measurement: self.measurement,
        });
        match (self.answer)(request) {
            FakeOutcome::Found(result) => Ok(Some(result)),
            FakeOutcome::NotFound => Ok(None),
            FakeOutcome::Fail(msg) => Err(SurfDemoError::Detection(msg)),
        }
    }
}

/// A cloud with `n` points along the x axis.
pub fn line_cloud(n: usize) -> PointCloud {
    let points: Vec<Float3> = (0..n).map(|i| Float3::new(i as f32, 0.0, 0.0)).collect();
    PointCloud::from_points(&points)
}
