use std::path::Path;

use console::Style;
use surfdemo_core::demo::{DemoConfig, DemoReport, Phase, TrialStatus};

struct Styles {
    title: Style,
    header: Style,
    label: Style,
    value: Style,
    found: Style,
    missing: Style,
    failed: Style,
    path: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            header: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            found: Style::new().green(),
            missing: Style::new().dim().yellow(),
            failed: Style::new().red(),
            path: Style::new().underlined(),
        }
    }
}

pub fn print_run_header(input: &Path, points: usize, config: &DemoConfig) {
    let s = Styles::new();
    let detection = &config.detection;

    println!();
    println!("  {}", s.title.apply_to("Surface Detection Demo"));
    println!("  {}", s.title.apply_to("\u{2550}".repeat(22)));
    println!();
    println!(
        "  {:<14}{}",
        s.label.apply_to("Input"),
        s.path.apply_to(input.display())
    );
    println!("  {:<14}{}", s.label.apply_to("Points"), s.value.apply_to(points));
    println!(
        "  {:<14}{}",
        s.label.apply_to("Accuracy"),
        s.value.apply_to(detection.measurement_accuracy)
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Mean dist."),
        s.value.apply_to(detection.mean_distance)
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Seed radius"),
        s.value.apply_to(detection.seed_radius)
    );
    println!();
}

pub fn print_report_summary(report: &DemoReport) {
    let s = Styles::new();

    println!("  {}", s.header.apply_to("Summary"));
    for phase in [Phase::Normal, Phase::Smart] {
        println!("    {}", s.label.apply_to(phase));
        for record in report.phase(phase) {
            let status = match &record.status {
                TrialStatus::Found(kind) => s.found.apply_to(format!("found {kind}")),
                TrialStatus::NotFound => s.missing.apply_to("not found".to_string()),
                TrialStatus::Failed(msg) => s.failed.apply_to(format!("failed: {msg}")),
            };
            println!(
                "      {:>2}. {:<9}@ {:<8}{}",
                record.trial,
                record.preset.feature_type.to_string(),
                record.preset.seed_index,
                status
            );
        }
    }
    println!();
    println!(
        "  {:<14}{}",
        s.label.apply_to("Found"),
        s.value.apply_to(report.found_count())
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Not found"),
        s.value.apply_to(report.not_found_count())
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Failed"),
        s.value.apply_to(report.failed_count())
    );
    println!();
}
