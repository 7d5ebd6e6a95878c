use std::f32::consts::{FRAC_PI_2, PI};

use crate::resources::geometry::Geometry;
use crate::resources::primitives::Shape;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CapsuleOptions {
    pub radius: f32,
    /// Length of the straight middle section; total height is `length + 2 * radius`.
    pub length: f32,
    pub cap_segments: u32,
    pub radial_segments: u32,
}

impl Default for CapsuleOptions {
    fn default() -> Self {
        Self {
            radius: 1.0,
            length: 1.0,
            cap_segments: 4,
            radial_segments: 8,
        }
    }
}

/// Capsule along the Y axis: two hemispheres joined by a cylinder band.
///
/// Built as a lathe of rings from the north pole down to the south pole. The
/// last ring of the upper cap and the first ring of the lower cap both sit on
/// the equator radius, and the band between them forms the straight section.
#[must_use]
pub fn create_capsule(options: CapsuleOptions) -> Geometry {
    let radius = options.radius;
    let length = options.length.max(0.0);
    let cap_segments = options.cap_segments.max(1);
    let radial_segments = options.radial_segments.max(3);

    let half_length = length / 2.0;
    let total_height = length + 2.0 * radius;
    let stride = radial_segments + 1;

    // (polar angle, centre offset of the hemisphere it belongs to)
    let rings: Vec<(f32, f32)> = (0..=cap_segments)
        .map(|k| (k as f32 / cap_segments as f32 * FRAC_PI_2, half_length))
        .chain((0..=cap_segments).map(|k| (FRAC_PI_2 + k as f32 / cap_segments as f32 * FRAC_PI_2, -half_length)))
        .collect();

    let mut positions = Vec::with_capacity(rings.len() * stride as usize);
    let mut normals = Vec::with_capacity(rings.len() * stride as usize);
    let mut uvs = Vec::with_capacity(rings.len() * stride as usize);
    let mut indices = Vec::new();

    for &(phi, center_y) in &rings {
        let (ring_sin, ring_cos) = phi.sin_cos();
        let y = center_y + radius * ring_cos;
        let v = if total_height > 0.0 {
            (y + total_height / 2.0) / total_height
        } else {
            0.0
        };

        for x in 0..=radial_segments {
            let u = x as f32 / radial_segments as f32;
            let theta = u * 2.0 * PI;
            let (sin, cos) = theta.sin_cos();

            let normal = [ring_sin * sin, ring_cos, ring_sin * cos];
            positions.push([radius * normal[0], y, radius * normal[2]]);
            normals.push(normal);
            uvs.push([u, v]);
        }
    }

    let ring_count = rings.len() as u32;
    for row in 0..ring_count - 1 {
        for x in 0..radial_segments {
            let a = row * stride + x;
            let b = (row + 1) * stride + x;
            let c = b + 1;
            let d = a + 1;
            indices.extend_from_slice(&[a, b, d, b, c, d]);
        }
    }

    Geometry::from_buffers(
        Shape::Capsule {
            radius,
            length,
            cap_segments,
            radial_segments,
        },
        positions,
        normals,
        uvs,
        indices,
    )
}
