/// Default measurement accuracy of the scanner, in cloud units.
pub const DEFAULT_MEASUREMENT_ACCURACY: f32 = 0.01;

/// Default mean distance between neighbouring points, in cloud units.
pub const DEFAULT_MEAN_DISTANCE: f32 = 0.01;

/// Default radius of the seed region grown around the seed point.
pub const DEFAULT_SEED_RADIUS: f32 = 0.025;

/// Number of floats in a raw detection result parameter array.
/// Sized for the largest kind (plane: rms + four corners).
pub const PARAM_COUNT: usize = 13;

/// Seed point lying on the sphere of the reference sample scan.
pub const SPHERE_SEED_INDEX: usize = 7811;

/// Seed point lying on the cylinder of the reference sample scan.
pub const CYLINDER_SEED_INDEX: usize = 3437;

/// Seed point lying on the cone of the reference sample scan.
pub const CONE_SEED_INDEX: usize = 6637;

/// Seed point lying on the torus of the reference sample scan.
pub const TORUS_SEED_INDEX: usize = 7384;

/// `tracing` target used for demo message lines.
pub const LOG_TARGET: &str = "surfdemo::demo";
