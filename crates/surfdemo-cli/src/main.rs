mod commands;
mod summary;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "surfdemo", about = "Primitive surface detection demo")]
#[command(
    long_about = "Searches a point cloud for planes, spheres, cylinders, cones and tori \
                  from preset seed points and prints the parameters of every shape found."
)]
#[command(version)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the normal and smart detection presets over a point cloud
    Run(commands::run::RunArgs),
    /// Show point cloud statistics
    Info(commands::info::InfoArgs),
    /// Print or save the default demo config as TOML
    Config(commands::config::ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_transcript = matches!(&cli.command, Commands::Run(args) if args.log);
    let filter = if cli.verbose || log_transcript {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match &cli.command {
        Commands::Run(args) => commands::run::run(args),
        Commands::Info(args) => commands::info::run(args),
        Commands::Config(args) => commands::config::run(args),
    }
}
