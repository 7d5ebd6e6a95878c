//! Parametric primitive shapes.
//!
//! Every constructor tessellates on the CPU and returns a [`Geometry`] that
//! remembers the [`Shape`] it was generated from. Segment counts are clamped to
//! the smallest values that still produce a closed surface.
//!
//! [`Geometry`]: crate::resources::geometry::Geometry

pub mod box_shape;
pub mod capsule;
pub mod cylinder;
pub mod sphere;
pub mod torus;

pub use box_shape::create_box;
pub use capsule::{CapsuleOptions, create_capsule};
pub use cylinder::{CylinderOptions, create_cone, create_cylinder};
pub use sphere::{SphereOptions, create_sphere};
pub use torus::{TorusOptions, create_torus};

/// Discriminant of [`Shape`], handy for reporting and filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Box,
    Sphere,
    Cylinder,
    Cone,
    Capsule,
    Torus,
}

impl ShapeKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Box => "box",
            Self::Sphere => "sphere",
            Self::Cylinder => "cylinder",
            Self::Cone => "cone",
            Self::Capsule => "capsule",
            Self::Torus => "torus",
        }
    }
}

impl std::fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Shape descriptor with the dimensions and tessellation a geometry was built from.
///
/// Segment counts are stored after clamping.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Box {
        width: f32,
        height: f32,
        depth: f32,
    },
    Sphere {
        radius: f32,
        width_segments: u32,
        height_segments: u32,
    },
    Cylinder {
        radius_top: f32,
        radius_bottom: f32,
        height: f32,
        radial_segments: u32,
    },
    Cone {
        radius: f32,
        height: f32,
        radial_segments: u32,
    },
    /// `length` is the straight section between the two hemispherical caps.
    Capsule {
        radius: f32,
        length: f32,
        cap_segments: u32,
        radial_segments: u32,
    },
    Torus {
        radius: f32,
        tube: f32,
        radial_segments: u32,
        tubular_segments: u32,
        arc: f32,
    },
}

impl Shape {
    #[must_use]
    pub fn kind(&self) -> ShapeKind {
        match self {
            Self::Box { .. } => ShapeKind::Box,
            Self::Sphere { .. } => ShapeKind::Sphere,
            Self::Cylinder { .. } => ShapeKind::Cylinder,
            Self::Cone { .. } => ShapeKind::Cone,
            Self::Capsule { .. } => ShapeKind::Capsule,
            Self::Torus { .. } => ShapeKind::Torus,
        }
    }
}
