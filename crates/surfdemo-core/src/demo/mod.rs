pub mod config;
pub mod driver;
pub mod preset;
pub mod reporter;

pub use config::{DemoConfig, DetectionConfig};
pub use driver::{run_demo, DemoReport, Phase, TrialRecord, TrialStatus};
pub use preset::{normal_presets, smart_presets, Preset};
pub use reporter::{LogReporter, Reporter};
