use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::info;

use crate::cloud::PointCloud;
use crate::error::Result;

/// Parse one `x y z` line. Returns `None` unless the line holds exactly
/// three whitespace-separated finite floats.
fn parse_line(line: &str) -> Option<[f32; 3]> {
    let mut tokens = line.split_whitespace();
    let mut xyz = [0.0f32; 3];
    for slot in xyz.iter_mut() {
        let value: f32 = tokens.next()?.parse().ok()?;
        if !value.is_finite() {
            return None;
        }
        *slot = value;
    }
    if tokens.next().is_some() {
        return None;
    }
    Some(xyz)
}

/// Parse an in-memory XYZ text. Malformed lines are skipped.
pub fn parse_points_str(text: &str) -> PointCloud {
    let coords: Vec<f32> = text.lines().filter_map(parse_line).flatten().collect();
    PointCloud::from_flat(coords)
}

/// Parse XYZ text from a reader, one point per line.
///
/// Lines that are not exactly three finite floats are skipped silently.
/// Only read failures are reported.
pub fn parse_points<R: BufRead>(reader: R) -> Result<PointCloud> {
    let mut coords = Vec::new();
    for line in reader.lines() {
        if let Some(xyz) = parse_line(&line?) {
            coords.extend_from_slice(&xyz);
        }
    }
    Ok(PointCloud::from_flat(coords))
}

/// Load an XYZ point cloud file.
pub fn load_point_cloud(path: &Path) -> Result<PointCloud> {
    let file = File::open(path)?;
    let cloud = parse_points(BufReader::new(file))?;
    info!(path = %path.display(), points = cloud.len(), "Loaded point cloud");
    Ok(cloud)
}
