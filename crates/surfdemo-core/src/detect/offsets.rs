//! Named slots of [`super::DetectionResult::params`].
//!
//! Slot 0 always holds the RMS fitting error; the geometry of each kind
//! follows from slot 1.

pub const RMS_ERROR: usize = 0;

pub const PLANE_LOWER_LEFT_X: usize = 1;
pub const PLANE_LOWER_LEFT_Y: usize = 2;
pub const PLANE_LOWER_LEFT_Z: usize = 3;
pub const PLANE_LOWER_RIGHT_X: usize = 4;
pub const PLANE_LOWER_RIGHT_Y: usize = 5;
pub const PLANE_LOWER_RIGHT_Z: usize = 6;
pub const PLANE_UPPER_RIGHT_X: usize = 7;
pub const PLANE_UPPER_RIGHT_Y: usize = 8;
pub const PLANE_UPPER_RIGHT_Z: usize = 9;
pub const PLANE_UPPER_LEFT_X: usize = 10;
pub const PLANE_UPPER_LEFT_Y: usize = 11;
pub const PLANE_UPPER_LEFT_Z: usize = 12;

pub const SPHERE_CENTER_X: usize = 1;
pub const SPHERE_CENTER_Y: usize = 2;
pub const SPHERE_CENTER_Z: usize = 3;
pub const SPHERE_RADIUS: usize = 4;

pub const CYLINDER_BOTTOM_X: usize = 1;
pub const CYLINDER_BOTTOM_Y: usize = 2;
pub const CYLINDER_BOTTOM_Z: usize = 3;
pub const CYLINDER_TOP_X: usize = 4;
pub const CYLINDER_TOP_Y: usize = 5;
pub const CYLINDER_TOP_Z: usize = 6;
pub const CYLINDER_RADIUS: usize = 7;

pub const CONE_BOTTOM_X: usize = 1;
pub const CONE_BOTTOM_Y: usize = 2;
pub const CONE_BOTTOM_Z: usize = 3;
pub const CONE_TOP_X: usize = 4;
pub const CONE_TOP_Y: usize = 5;
pub const CONE_TOP_Z: usize = 6;
pub const CONE_BOTTOM_RADIUS: usize = 7;
pub const CONE_TOP_RADIUS: usize = 8;

pub const TORUS_CENTER_X: usize = 1;
pub const TORUS_CENTER_Y: usize = 2;
pub const TORUS_CENTER_Z: usize = 3;
pub const TORUS_NORMAL_X: usize = 4;
pub const TORUS_NORMAL_Y: usize = 5;
pub const TORUS_NORMAL_Z: usize = 6;
pub const TORUS_MEAN_RADIUS: usize = 7;
pub const TORUS_TUBE_RADIUS: usize = 8;
