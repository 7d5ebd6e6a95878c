use std::f32::consts::{PI, TAU};

use glam::Vec3;

use crate::resources::geometry::Geometry;
use crate::resources::primitives::Shape;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TorusOptions {
    /// Distance from the torus centre to the tube centre.
    pub radius: f32,
    /// Tube radius.
    pub tube: f32,
    pub radial_segments: u32,
    pub tubular_segments: u32,
    /// Sweep of the ring in radians; `TAU` closes it.
    pub arc: f32,
}

impl Default for TorusOptions {
    fn default() -> Self {
        Self {
            radius: 1.0,
            tube: 0.4,
            radial_segments: 12,
            tubular_segments: 48,
            arc: TAU,
        }
    }
}

/// Torus lying in the XY plane, the hole facing +Z.
#[must_use]
pub fn create_torus(options: TorusOptions) -> Geometry {
    let radius = options.radius;
    let tube = options.tube;
    let radial_segments = options.radial_segments.max(2);
    let tubular_segments = options.tubular_segments.max(3);
    let arc = options.arc.clamp(0.0, TAU);

    let stride = tubular_segments + 1;

    let mut positions = Vec::new();
    let mut normals = Vec::new();
    let mut uvs = Vec::new();
    let mut indices = Vec::new();

    for j in 0..=radial_segments {
        let v = j as f32 / radial_segments as f32 * 2.0 * PI;
        let (v_sin, v_cos) = v.sin_cos();

        for i in 0..=tubular_segments {
            let u = i as f32 / tubular_segments as f32 * arc;
            let (u_sin, u_cos) = u.sin_cos();

            let ring = radius + tube * v_cos;
            let position = Vec3::new(ring * u_cos, ring * u_sin, tube * v_sin);
            let tube_center = Vec3::new(radius * u_cos, radius * u_sin, 0.0);

            positions.push(position.to_array());
            normals.push((position - tube_center).normalize_or_zero().to_array());
            uvs.push([
                i as f32 / tubular_segments as f32,
                j as f32 / radial_segments as f32,
            ]);
        }
    }

    for j in 1..=radial_segments {
        for i in 1..=tubular_segments {
            let a = stride * j + i - 1;
            let b = stride * (j - 1) + i - 1;
            let c = stride * (j - 1) + i;
            let d = stride * j + i;
            indices.extend_from_slice(&[a, b, d, b, c, d]);
        }
    }

    Geometry::from_buffers(
        Shape::Torus {
            radius,
            tube,
            radial_segments,
            tubular_segments,
            arc,
        },
        positions,
        normals,
        uvs,
        indices,
    )
}
