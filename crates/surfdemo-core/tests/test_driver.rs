#[allow(dead_code)]
mod common;

use common::{line_cloud, FakeOutcome, RecordingDetector};

use surfdemo_core::cloud::PointCloud;
use surfdemo_core::consts::{DEFAULT_SEED_RADIUS, SPHERE_SEED_INDEX};
use surfdemo_core::demo::{run_demo, DemoConfig, Phase, Preset, TrialStatus};
use surfdemo_core::detect::{
    ConversionRule, DetectRequest, DetectionResult, DetectorScript, FeatureType, ScriptedDetector,
    SmartConversion,
};
use surfdemo_core::error::SurfDemoError;

// ---------------------------------------------------------------------------
// Configuration writes
// ---------------------------------------------------------------------------

#[test]
fn test_measurement_set_once_before_any_call() {
    let mut detector = RecordingDetector::echoing();
    let mut out = Vec::new();
    run_demo(&mut detector, &line_cloud(10_000), &DemoConfig::default(), &mut out).unwrap();

    assert_eq!(detector.measurement_writes, 1);
    assert_eq!(detector.cloud_writes, 1);
    for call in detector.calls.borrow().iter() {
        assert_eq!(call.measurement, (0.01, 0.01));
        assert_eq!(call.request.seed_radius, DEFAULT_SEED_RADIUS);
        assert!(!call.request.report_intermediate);
    }
}

#[test]
fn test_smart_conversion_per_phase() {
    let mut detector = RecordingDetector::echoing();
    let config = DemoConfig::default();
    let mut out = Vec::new();
    run_demo(&mut detector, &line_cloud(10_000), &config, &mut out).unwrap();

    let calls = detector.calls.borrow();
    let normal = config.normal_presets.len();
    assert_eq!(calls.len(), normal + config.smart_presets.len());

    for call in &calls[..normal] {
        assert!(call.smart_conversion.is_empty());
    }
    let expected: SmartConversion = [
        ConversionRule::ConeToCylinder,
        ConversionRule::TorusToSphere,
        ConversionRule::TorusToCylinder,
    ]
    .into_iter()
    .collect();
    for call in &calls[normal..] {
        assert_eq!(call.smart_conversion, expected);
    }
    assert_eq!(detector.smart_writes, vec![expected]);
}

#[test]
fn test_configuration_written_once_per_setting() {
    let mut detector = RecordingDetector::echoing();
    let mut out = Vec::new();
    run_demo(&mut detector, &line_cloud(10_000), &DemoConfig::default(), &mut out).unwrap();

    assert_eq!(detector.measurement_writes, 1);
    assert_eq!(detector.smart_writes.len(), 1);
}

#[test]
fn test_intermediate_reporting_always_off() {
    let config =
        DemoConfig::from_toml_str("[detection]\nreport_intermediate = true\nseed_radius = 0.03\n")
            .unwrap();
    let mut detector = RecordingDetector::echoing();
    let mut out = Vec::new();
    run_demo(&mut detector, &line_cloud(10_000), &config, &mut out).unwrap();

    let calls = detector.calls.borrow();
    assert_eq!(calls.len(), 7);
    for call in calls.iter() {
        assert!(!call.request.report_intermediate);
        assert_eq!(call.request.seed_radius, 0.03);
    }
}

#[test]
fn test_presets_requested_in_order() {
    let mut detector = RecordingDetector::echoing();
    let config = DemoConfig::default();
    let mut out = Vec::new();
    run_demo(&mut detector, &line_cloud(10_000), &config, &mut out).unwrap();

    let requested: Vec<Preset> = detector
        .calls
        .borrow()
        .iter()
        .map(|c| Preset::new(c.request.feature_type, c.request.seed_index))
        .collect();
    let expected: Vec<Preset> = config
        .normal_presets
        .iter()
        .chain(config.smart_presets.iter())
        .copied()
        .collect();
    assert_eq!(requested, expected);
}

// ---------------------------------------------------------------------------
// Trial numbering and transcript
// ---------------------------------------------------------------------------

#[test]
fn test_trial_numbering_restarts_per_phase() {
    let mut detector = RecordingDetector::echoing();
    let mut out = Vec::new();
    let report =
        run_demo(&mut detector, &line_cloud(10_000), &DemoConfig::default(), &mut out).unwrap();

    let normal: Vec<usize> = report.phase(Phase::Normal).map(|t| t.trial).collect();
    let smart: Vec<usize> = report.phase(Phase::Smart).map(|t| t.trial).collect();
    assert_eq!(normal, vec![1, 2, 3, 4]);
    assert_eq!(smart, vec![1, 2, 3]);
}

#[test]
fn test_transcript_for_found_result() {
    let mut detector = RecordingDetector::new(|_| {
        FakeOutcome::Found(
            DetectionResult::from_params(FeatureType::Sphere, &[0.02, 1.0, 2.0, 3.0, 5.0])
                .unwrap(),
        )
    });
    let config = DemoConfig {
        normal_presets: vec![Preset::new(FeatureType::Sphere, 3)],
        smart_presets: vec![],
        ..DemoConfig::default()
    };
    let mut out: Vec<String> = Vec::new();
    run_demo(&mut detector, &line_cloud(8), &config, &mut out).unwrap();

    assert_eq!(
        out,
        vec![
            "Normal cases: ",
            "1. Searched for a Sphere",
            "around the point of which index is 3.",
            "Found a Sphere as a result:",
            "Sphere (rms error: 0.02)",
            "    Center: (1, 2, 3)",
            "    Radius: 5",
            " ",
            "Smart cases: ",
        ]
    );
}

#[test]
fn test_transcript_for_not_found() {
    let mut detector = RecordingDetector::new(|_| FakeOutcome::NotFound);
    let config = DemoConfig {
        normal_presets: vec![],
        smart_presets: vec![Preset::new(FeatureType::Torus, 0)],
        ..DemoConfig::default()
    };
    let mut out: Vec<String> = Vec::new();
    let report = run_demo(&mut detector, &line_cloud(1), &config, &mut out).unwrap();

    assert!(out.contains(&"Not found.".to_string()));
    assert_eq!(report.not_found_count(), 1);
    assert_eq!(report.trials[0].phase, Phase::Smart);
}

// ---------------------------------------------------------------------------
// Failure handling
// ---------------------------------------------------------------------------

#[test]
fn test_failure_does_not_stop_later_trials() {
    let mut detector = RecordingDetector::new(|req: &DetectRequest| {
        if req.feature_type == FeatureType::Cylinder {
            FakeOutcome::Fail("degenerate seed region".into())
        } else {
            FakeOutcome::Found(DetectionResult::from_params(req.feature_type, &[0.0]).unwrap())
        }
    });
    let config = DemoConfig::default();
    let mut out: Vec<String> = Vec::new();
    let report = run_demo(&mut detector, &line_cloud(10_000), &config, &mut out).unwrap();

    assert_eq!(
        report.trials.len(),
        config.normal_presets.len() + config.smart_presets.len()
    );
    assert_eq!(report.failed_count(), 1);
    assert!(matches!(report.trials[1].status, TrialStatus::Failed(ref m) if m.contains("degenerate")));
    assert_eq!(report.trials[2].status, TrialStatus::Found(FeatureType::Cone));
    assert!(out.iter().any(|l| l == "Detection failed: degenerate seed region"));
}

#[test]
fn test_empty_cloud_failures_are_caught() {
    let mut detector = ScriptedDetector::new(DetectorScript::default());
    let config = DemoConfig::default();
    let mut out: Vec<String> = Vec::new();
    let report = run_demo(&mut detector, &PointCloud::empty(), &config, &mut out).unwrap();

    let first = &report.trials[0];
    assert_eq!(first.preset, Preset::new(FeatureType::Sphere, SPHERE_SEED_INDEX));
    assert!(matches!(first.status, TrialStatus::Failed(_)));
    assert_eq!(report.phase(Phase::Normal).count(), config.normal_presets.len());
    assert_eq!(report.failed_count(), report.trials.len());
}

#[test]
fn test_unexpected_feature_type_aborts_run() {
    let mut detector = RecordingDetector::new(|_| {
        FakeOutcome::Found(DetectionResult::from_params(FeatureType::Any, &[0.0]).unwrap())
    });
    let mut out: Vec<String> = Vec::new();
    let err = run_demo(&mut detector, &line_cloud(10_000), &DemoConfig::default(), &mut out)
        .unwrap_err();

    assert!(matches!(err, SurfDemoError::UnexpectedFeatureType(FeatureType::Any)));
    assert_eq!(detector.calls.borrow().len(), 1);
}

#[test]
fn test_invalid_config_rejected_before_detection() {
    let mut detector = RecordingDetector::echoing();
    let mut config = DemoConfig::default();
    config.detection.seed_radius = 0.0;
    let mut out: Vec<String> = Vec::new();

    let err = run_demo(&mut detector, &line_cloud(10), &config, &mut out).unwrap_err();
    assert!(matches!(err, SurfDemoError::InvalidConfig(_)));
    assert!(detector.calls.borrow().is_empty());
    assert_eq!(detector.measurement_writes, 0);
}
