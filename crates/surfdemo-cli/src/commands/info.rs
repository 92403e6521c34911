use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use surfdemo_core::io::load_point_cloud;

#[derive(Args)]
pub struct InfoArgs {
    /// Input XYZ point cloud
    pub file: PathBuf,
}

pub fn run(args: &InfoArgs) -> Result<()> {
    let cloud = load_point_cloud(&args.file)
        .with_context(|| format!("Failed to read point cloud {}", args.file.display()))?;

    println!("File:        {}", args.file.display());
    println!("Points:      {}", cloud.len());

    if let Some((min, max)) = cloud.bounds() {
        println!("Min corner:  {}", min);
        println!("Max corner:  {}", max);
    }
    if let Some(centroid) = cloud.centroid() {
        println!("Centroid:    {}", centroid);
    }

    Ok(())
}
