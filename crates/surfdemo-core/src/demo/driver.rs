use std::fmt;

use tracing::{info, warn};

use crate::cloud::PointCloud;
use crate::detect::{DetectRequest, FeatureType, SmartConversion, SurfaceDetector};
use crate::error::Result;
use crate::surface::unwrap_result;

use super::config::DemoConfig;
use super::preset::Preset;
use super::reporter::Reporter;

/// Which half of the demo a trial belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Smart conversion disabled.
    Normal,
    /// Smart conversion enabled for every rule.
    Smart,
}

impl Phase {
    /// Conversion rules to switch on when entering the phase. The normal
    /// phase runs on the detector's initial, empty rule set.
    fn smart_conversion(self) -> Option<SmartConversion> {
        match self {
            Self::Normal => None,
            Self::Smart => Some(SmartConversion::all()),
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Normal => write!(f, "Normal cases"),
            Self::Smart => write!(f, "Smart cases"),
        }
    }
}

/// How a single trial ended.
#[derive(Clone, Debug, PartialEq)]
pub enum TrialStatus {
    Found(FeatureType),
    NotFound,
    Failed(String),
}

#[derive(Clone, Debug, PartialEq)]
pub struct TrialRecord {
    pub phase: Phase,
    /// 1-based, restarting at each phase.
    pub trial: usize,
    pub preset: Preset,
    pub status: TrialStatus,
}

/// Outcome summary of a whole run.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DemoReport {
    pub trials: Vec<TrialRecord>,
}

impl DemoReport {
    pub fn phase(&self, phase: Phase) -> impl Iterator<Item = &TrialRecord> + '_ {
        self.trials.iter().filter(move |t| t.phase == phase)
    }

    pub fn found_count(&self) -> usize {
        self.count(|s| matches!(s, TrialStatus::Found(_)))
    }

    pub fn not_found_count(&self) -> usize {
        self.count(|s| matches!(s, TrialStatus::NotFound))
    }

    pub fn failed_count(&self) -> usize {
        self.count(|s| matches!(s, TrialStatus::Failed(_)))
    }

    fn count(&self, pred: impl Fn(&TrialStatus) -> bool) -> usize {
        self.trials.iter().filter(|t| pred(&t.status)).count()
    }
}

/// Run both demo phases against `detector`.
///
/// The cloud and measurement parameters are handed over once. Phase one
/// runs `config.normal_presets` on the detector's initial rule set, which
/// must be empty; phase two switches every conversion rule on and runs
/// `config.smart_presets`. A failing call is
/// reported and the run moves on; only a result of an unexpected feature
/// type aborts the run.
pub fn run_demo<D, R>(
    detector: &mut D,
    cloud: &PointCloud,
    config: &DemoConfig,
    reporter: &mut R,
) -> Result<DemoReport>
where
    D: SurfaceDetector + ?Sized,
    R: Reporter + ?Sized,
{
    config.validate()?;

    let detection = &config.detection;
    detector.set_point_cloud(cloud);
    detector.set_measurement(detection.measurement_accuracy, detection.mean_distance);
    info!(
        detector = detector.name(),
        points = cloud.len(),
        accuracy = detection.measurement_accuracy,
        mean_distance = detection.mean_distance,
        "Detector configured"
    );

    let mut report = DemoReport::default();
    let phases = [
        (Phase::Normal, &config.normal_presets),
        (Phase::Smart, &config.smart_presets),
    ];
    for (phase, presets) in phases {
        info!(phase = %phase, trials = presets.len(), "Starting phase");
        if let Some(conversion) = phase.smart_conversion() {
            info!(smart_conversion = %conversion, "Smart conversion enabled");
            detector.set_smart_conversion(conversion);
        }
        reporter.message(&format!("{phase}: "));

        for (i, preset) in presets.iter().enumerate() {
            let trial = i + 1;
            let status = run_trial(detector, reporter, trial, preset, config)?;
            report.trials.push(TrialRecord {
                phase,
                trial,
                preset: *preset,
                status,
            });
        }
    }

    Ok(report)
}

fn run_trial<D, R>(
    detector: &D,
    reporter: &mut R,
    trial: usize,
    preset: &Preset,
    config: &DemoConfig,
) -> Result<TrialStatus>
where
    D: SurfaceDetector + ?Sized,
    R: Reporter + ?Sized,
{
    reporter.message(&format!("{trial}. Searched for a {}", preset.feature_type));
    reporter.message(&format!(
        "around the point of which index is {}.",
        preset.seed_index
    ));

    let request = DetectRequest {
        feature_type: preset.feature_type,
        seed_index: preset.seed_index,
        seed_radius: config.detection.seed_radius,
        report_intermediate: false,
    };

    let status = match detector.detect(&request) {
        Ok(Some(result)) => {
            let params = unwrap_result(&result)?;
            reporter.message(&format!("Found a {} as a result:", params.feature_type()));
            reporter.message(&params.to_string());
            TrialStatus::Found(params.feature_type())
        }
        Ok(None) => {
            reporter.message("Not found.");
            TrialStatus::NotFound
        }
        Err(e) => {
            warn!(trial, seed = preset.seed_index, error = %e, "Detection failed");
            reporter.message(&format!(
                "Couldn't run detection due to the following error: \n{e}"
            ));
            TrialStatus::Failed(e.to_string())
        }
    };
    reporter.message(" ");

    Ok(status)
}
