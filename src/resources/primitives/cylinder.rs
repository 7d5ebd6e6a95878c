use std::f32::consts::PI;

use glam::Vec3;

use crate::resources::geometry::Geometry;
use crate::resources::primitives::Shape;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CylinderOptions {
    pub radius_top: f32,
    pub radius_bottom: f32,
    pub height: f32,
    pub radial_segments: u32,
}

impl Default for CylinderOptions {
    fn default() -> Self {
        Self {
            radius_top: 1.0,
            radius_bottom: 1.0,
            height: 1.0,
            radial_segments: 32,
        }
    }
}

/// Closed (optionally tapered) cylinder along the Y axis, centred on the origin.
#[must_use]
pub fn create_cylinder(options: CylinderOptions) -> Geometry {
    let radial_segments = options.radial_segments.max(3);
    let shape = Shape::Cylinder {
        radius_top: options.radius_top,
        radius_bottom: options.radius_bottom,
        height: options.height,
        radial_segments,
    };
    tessellate(shape, options.radius_top, options.radius_bottom, options.height, radial_segments)
}

/// A cone is a cylinder whose top radius is zero.
#[must_use]
pub fn create_cone(radius: f32, height: f32, radial_segments: u32) -> Geometry {
    let radial_segments = radial_segments.max(3);
    let shape = Shape::Cone {
        radius,
        height,
        radial_segments,
    };
    tessellate(shape, 0.0, radius, height, radial_segments)
}

fn tessellate(shape: Shape, radius_top: f32, radius_bottom: f32, height: f32, radial_segments: u32) -> Geometry {
    let half_height = height / 2.0;
    let stride = radial_segments + 1;

    let mut positions = Vec::new();
    let mut normals = Vec::new();
    let mut uvs = Vec::new();
    let mut indices = Vec::new();

    // Side wall: a top ring and a bottom ring
    let slope = if height.abs() > f32::EPSILON {
        (radius_bottom - radius_top) / height
    } else {
        0.0
    };

    for row in 0..=1u32 {
        let v = row as f32;
        let radius = v * (radius_bottom - radius_top) + radius_top;
        let y = half_height - v * height;

        for x in 0..=radial_segments {
            let u = x as f32 / radial_segments as f32;
            let theta = u * 2.0 * PI;
            let (sin, cos) = theta.sin_cos();

            positions.push([radius * sin, y, radius * cos]);
            normals.push(Vec3::new(sin, slope, cos).normalize().to_array());
            uvs.push([u, 1.0 - v]);
        }
    }

    for x in 0..radial_segments {
        let a = x;
        let b = stride + x;
        let c = stride + x + 1;
        let d = x + 1;
        indices.extend_from_slice(&[a, b, d, b, c, d]);
    }

    if radius_top > 0.0 {
        push_cap(&mut positions, &mut normals, &mut uvs, &mut indices, radius_top, half_height, radial_segments, true);
    }
    if radius_bottom > 0.0 {
        push_cap(&mut positions, &mut normals, &mut uvs, &mut indices, radius_bottom, -half_height, radial_segments, false);
    }

    Geometry::from_buffers(shape, positions, normals, uvs, indices)
}

fn push_cap(
    positions: &mut Vec<[f32; 3]>,
    normals: &mut Vec<[f32; 3]>,
    uvs: &mut Vec<[f32; 2]>,
    indices: &mut Vec<u32>,
    radius: f32,
    y: f32,
    radial_segments: u32,
    top: bool,
) {
    let sign = if top { 1.0 } else { -1.0 };
    let center = positions.len() as u32;

    positions.push([0.0, y, 0.0]);
    normals.push([0.0, sign, 0.0]);
    uvs.push([0.5, 0.5]);

    let ring_start = positions.len() as u32;
    for x in 0..=radial_segments {
        let theta = x as f32 / radial_segments as f32 * 2.0 * PI;
        let (sin, cos) = theta.sin_cos();

        positions.push([radius * sin, y, radius * cos]);
        normals.push([0.0, sign, 0.0]);
        uvs.push([cos * 0.5 + 0.5, sin * 0.5 * sign + 0.5]);
    }

    for x in 0..radial_segments {
        let i = ring_start + x;
        if top {
            indices.extend_from_slice(&[center, i, i + 1]);
        } else {
            indices.extend_from_slice(&[center, i + 1, i]);
        }
    }
}
