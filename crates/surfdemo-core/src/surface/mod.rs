pub mod params;

pub use params::{unwrap_result, Shape, SurfaceParams};
