pub mod xyz;

pub use xyz::{load_point_cloud, parse_points, parse_points_str};
