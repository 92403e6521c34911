use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use surfdemo_core::demo::{run_demo, DemoConfig, LogReporter, Reporter};
use surfdemo_core::detect::{DetectorScript, ScriptedDetector};
use surfdemo_core::io::load_point_cloud;
use tracing::info;

use crate::summary::{print_report_summary, print_run_header};

#[derive(Args)]
pub struct RunArgs {
    /// Input XYZ point cloud
    pub file: PathBuf,

    /// Detector response script (TOML)
    #[arg(long)]
    pub script: PathBuf,

    /// Demo config file (TOML)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Send the transcript to the debug log instead of stdout
    #[arg(long)]
    pub log: bool,
}

/// Prints transcript lines to stdout.
struct ConsoleReporter;

impl Reporter for ConsoleReporter {
    fn line(&mut self, line: &str) {
        println!("{line}");
    }
}

pub fn run(args: &RunArgs) -> Result<()> {
    let config = match args.config {
        Some(ref path) => DemoConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => DemoConfig::default(),
    };
    let script = DetectorScript::load(&args.script)
        .with_context(|| format!("Failed to load detector script {}", args.script.display()))?;
    let cloud = load_point_cloud(&args.file)
        .with_context(|| format!("Failed to read point cloud {}", args.file.display()))?;
    info!(responses = script.responses.len(), "Detector script loaded");

    let mut detector = ScriptedDetector::new(script);

    print_run_header(&args.file, cloud.len(), &config);

    let report = if args.log {
        run_demo(&mut detector, &cloud, &config, &mut LogReporter)?
    } else {
        run_demo(&mut detector, &cloud, &config, &mut ConsoleReporter)?
    };

    print_report_summary(&report);

    Ok(())
}
