use std::fmt;

use ndarray::{Array2, Axis};

/// A 3D coordinate triple.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Float3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Float3 {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

impl fmt::Display for Float3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

/// An ordered, immutable set of 3D points.
///
/// Stored as an `n x 3` matrix so that `as_flat` hands out the
/// `x0 y0 z0 x1 y1 z1 ...` layout detection libraries expect.
#[derive(Clone, Debug, PartialEq)]
pub struct PointCloud {
    data: Array2<f32>,
}

impl PointCloud {
    pub fn empty() -> Self {
        Self {
            data: Array2::zeros((0, 3)),
        }
    }

    /// Build from a flat coordinate buffer. Trailing floats that do not
    /// complete a triple are dropped.
    pub fn from_flat(mut coords: Vec<f32>) -> Self {
        let n = coords.len() / 3;
        coords.truncate(n * 3);
        let data = Array2::from_shape_vec((n, 3), coords)
            .unwrap_or_else(|_| Array2::zeros((0, 3)));
        Self { data }
    }

    pub fn from_points(points: &[Float3]) -> Self {
        let coords = points.iter().flat_map(|p| [p.x, p.y, p.z]).collect();
        Self::from_flat(coords)
    }

    pub fn len(&self) -> usize {
        self.data.nrows()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn point(&self, index: usize) -> Option<Float3> {
        if index >= self.len() {
            return None;
        }
        let row = self.data.row(index);
        Some(Float3::new(row[0], row[1], row[2]))
    }

    pub fn points(&self) -> impl Iterator<Item = Float3> + '_ {
        self.data
            .rows()
            .into_iter()
            .map(|row| Float3::new(row[0], row[1], row[2]))
    }

    /// Coordinates in row-major `xyz` order.
    pub fn as_flat(&self) -> &[f32] {
        self.data.as_slice().unwrap_or(&[])
    }

    /// Axis-aligned bounding box as `(min, max)` corners.
    pub fn bounds(&self) -> Option<(Float3, Float3)> {
        if self.is_empty() {
            return None;
        }
        let mut min = [f32::INFINITY; 3];
        let mut max = [f32::NEG_INFINITY; 3];
        for row in self.data.rows() {
            for axis in 0..3 {
                min[axis] = min[axis].min(row[axis]);
                max[axis] = max[axis].max(row[axis]);
            }
        }
        Some((
            Float3::new(min[0], min[1], min[2]),
            Float3::new(max[0], max[1], max[2]),
        ))
    }

    pub fn centroid(&self) -> Option<Float3> {
        let mean = self.data.mean_axis(Axis(0))?;
        Some(Float3::new(mean[0], mean[1], mean[2]))
    }
}

impl Default for PointCloud {
    fn default() -> Self {
        Self::empty()
    }
}
