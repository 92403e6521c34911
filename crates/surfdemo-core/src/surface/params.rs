use std::fmt;

use crate::cloud::Float3;
use crate::detect::offsets::*;
use crate::detect::{DetectionResult, FeatureType, InlierFlags};
use crate::error::{Result, SurfDemoError};

/// Geometry of a detected primitive.
#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    /// Rectangle spanned by four corners.
    Plane {
        lower_left: Float3,
        lower_right: Float3,
        upper_right: Float3,
        upper_left: Float3,
    },
    Sphere {
        center: Float3,
        radius: f32,
    },
    /// Finite cylinder given by its axis end points.
    Cylinder {
        bottom_center: Float3,
        top_center: Float3,
        radius: f32,
    },
    /// Truncated cone given by its axis end points and the radius at each end.
    Cone {
        bottom_center: Float3,
        top_center: Float3,
        bottom_radius: f32,
        top_radius: f32,
    },
    Torus {
        center: Float3,
        axis: Float3,
        mean_radius: f32,
        tube_radius: f32,
    },
}

impl Shape {
    pub fn feature_type(&self) -> FeatureType {
        match self {
            Self::Plane { .. } => FeatureType::Plane,
            Self::Sphere { .. } => FeatureType::Sphere,
            Self::Cylinder { .. } => FeatureType::Cylinder,
            Self::Cone { .. } => FeatureType::Cone,
            Self::Torus { .. } => FeatureType::Torus,
        }
    }
}

/// A detection result with named fields.
#[derive(Clone, Debug, PartialEq)]
pub struct SurfaceParams {
    pub rms_error: f32,
    pub inlier_flags: Option<InlierFlags>,
    pub shape: Shape,
}

impl SurfaceParams {
    pub fn feature_type(&self) -> FeatureType {
        self.shape.feature_type()
    }
}

fn float3(params: &[f32], x: usize, y: usize, z: usize) -> Float3 {
    Float3::new(params[x], params[y], params[z])
}

/// Project a raw detection result onto its typed shape.
///
/// A result tagged [`FeatureType::Any`] breaks the detector contract and
/// yields [`SurfDemoError::UnexpectedFeatureType`]; callers should let it
/// propagate rather than treat it as a failed detection.
pub fn unwrap_result(result: &DetectionResult) -> Result<SurfaceParams> {
    let p = &result.params;
    let shape = match result.feature_type {
        FeatureType::Plane => Shape::Plane {
            lower_left: float3(p, PLANE_LOWER_LEFT_X, PLANE_LOWER_LEFT_Y, PLANE_LOWER_LEFT_Z),
            lower_right: float3(p, PLANE_LOWER_RIGHT_X, PLANE_LOWER_RIGHT_Y, PLANE_LOWER_RIGHT_Z),
            upper_right: float3(p, PLANE_UPPER_RIGHT_X, PLANE_UPPER_RIGHT_Y, PLANE_UPPER_RIGHT_Z),
            upper_left: float3(p, PLANE_UPPER_LEFT_X, PLANE_UPPER_LEFT_Y, PLANE_UPPER_LEFT_Z),
        },
        FeatureType::Sphere => Shape::Sphere {
            center: float3(p, SPHERE_CENTER_X, SPHERE_CENTER_Y, SPHERE_CENTER_Z),
            radius: p[SPHERE_RADIUS],
        },
        FeatureType::Cylinder => Shape::Cylinder {
            bottom_center: float3(p, CYLINDER_BOTTOM_X, CYLINDER_BOTTOM_Y, CYLINDER_BOTTOM_Z),
            top_center: float3(p, CYLINDER_TOP_X, CYLINDER_TOP_Y, CYLINDER_TOP_Z),
            radius: p[CYLINDER_RADIUS],
        },
        FeatureType::Cone => Shape::Cone {
            bottom_center: float3(p, CONE_BOTTOM_X, CONE_BOTTOM_Y, CONE_BOTTOM_Z),
            top_center: float3(p, CONE_TOP_X, CONE_TOP_Y, CONE_TOP_Z),
            bottom_radius: p[CONE_BOTTOM_RADIUS],
            top_radius: p[CONE_TOP_RADIUS],
        },
        FeatureType::Torus => Shape::Torus {
            center: float3(p, TORUS_CENTER_X, TORUS_CENTER_Y, TORUS_CENTER_Z),
            axis: float3(p, TORUS_NORMAL_X, TORUS_NORMAL_Y, TORUS_NORMAL_Z),
            mean_radius: p[TORUS_MEAN_RADIUS],
            tube_radius: p[TORUS_TUBE_RADIUS],
        },
        FeatureType::Any => {
            return Err(SurfDemoError::UnexpectedFeatureType(result.feature_type));
        }
    };

    Ok(SurfaceParams {
        rms_error: result.rms_error(),
        inlier_flags: result.inlier_flags.clone(),
        shape,
    })
}

impl fmt::Display for SurfaceParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} (rms error: {})", self.feature_type(), self.rms_error)?;
        match &self.shape {
            Shape::Plane {
                lower_left,
                lower_right,
                upper_right,
                upper_left,
            } => {
                writeln!(f, "    Lower Left: {lower_left}")?;
                writeln!(f, "    Lower Right: {lower_right}")?;
                writeln!(f, "    Upper Right: {upper_right}")?;
                write!(f, "    Upper Left: {upper_left}")
            }
            Shape::Sphere { center, radius } => {
                writeln!(f, "    Center: {center}")?;
                write!(f, "    Radius: {radius}")
            }
            Shape::Cylinder {
                bottom_center,
                top_center,
                radius,
            } => {
                writeln!(f, "    Bottom Center: {bottom_center}")?;
                writeln!(f, "    Top Center: {top_center}")?;
                write!(f, "    Radius: {radius}")
            }
            Shape::Cone {
                bottom_center,
                top_center,
                bottom_radius,
                top_radius,
            } => {
                writeln!(f, "    Bottom Center: {bottom_center}")?;
                writeln!(f, "    Top Center: {top_center}")?;
                writeln!(f, "    Bottom Radius: {bottom_radius}")?;
                write!(f, "    Top Radius: {top_radius}")
            }
            Shape::Torus {
                center,
                axis,
                mean_radius,
                tube_radius,
            } => {
                writeln!(f, "    Center: {center}")?;
                writeln!(f, "    Axis: {axis}")?;
                writeln!(f, "    Mean Radius: {mean_radius}")?;
                write!(f, "    Tube Radius: {tube_radius}")
            }
        }
    }
}
