use bytemuck::{Pod, Zeroable};
use glam::{Affine3A, Mat3, Vec3};
use uuid::Uuid;

use crate::resources::primitives::{self, Shape};

/// Interleaved vertex as uploaded by a GPU host.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub uv: [f32; 2],
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min: Vec3,
    pub max: Vec3,
}

impl Default for BoundingBox {
    fn default() -> Self {
        Self::empty()
    }
}

impl BoundingBox {
    /// An inverted box that any `union` or `expand` replaces.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            min: Vec3::splat(f32::INFINITY),
            max: Vec3::splat(f32::NEG_INFINITY),
        }
    }

    #[must_use]
    pub fn from_points<I: IntoIterator<Item = Vec3>>(points: I) -> Self {
        let mut bb = Self::empty();
        for p in points {
            bb.expand(p);
        }
        bb
    }

    pub fn expand(&mut self, point: Vec3) {
        self.min = self.min.min(point);
        self.max = self.max.max(point);
    }

    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.min.is_finite() && self.max.is_finite()
    }

    #[must_use]
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    #[must_use]
    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    #[must_use]
    pub fn union(&self, other: &BoundingBox) -> BoundingBox {
        BoundingBox {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    /// Transforms the eight corners and returns their axis-aligned bounds.
    #[must_use]
    pub fn transform(&self, matrix: &Affine3A) -> Self {
        if !self.is_finite() {
            return *self;
        }
        let (lo, hi) = (self.min, self.max);
        Self::from_points(
            [
                Vec3::new(lo.x, lo.y, lo.z),
                Vec3::new(lo.x, lo.y, hi.z),
                Vec3::new(lo.x, hi.y, lo.z),
                Vec3::new(lo.x, hi.y, hi.z),
                Vec3::new(hi.x, lo.y, lo.z),
                Vec3::new(hi.x, lo.y, hi.z),
                Vec3::new(hi.x, hi.y, lo.z),
                Vec3::new(hi.x, hi.y, hi.z),
            ]
            .into_iter()
            .map(|p| matrix.transform_point3(p)),
        )
    }
}

/// CPU-side triangle mesh produced by one of the primitive constructors.
///
/// The parametric [`Shape`] that generated the data is kept alongside the
/// vertices so hosts (and tests) can reason about dimensions without
/// re-deriving them from positions. Transforms baked in with [`Geometry::scale`]
/// or [`Geometry::rotate_z`] modify the vertex data and accumulate in
/// [`Geometry::baked`]; the shape itself is never rewritten.
#[derive(Debug)]
pub struct Geometry {
    pub uuid: Uuid,
    shape: Shape,
    baked: Affine3A,

    positions: Vec<[f32; 3]>,
    normals: Vec<[f32; 3]>,
    uvs: Vec<[f32; 2]>,
    indices: Vec<u32>,

    bounding_box: BoundingBox,
}

// A cloned geometry is a new resource, so it gets its own uuid.
impl Clone for Geometry {
    fn clone(&self) -> Self {
        Self {
            uuid: Uuid::new_v4(),
            shape: self.shape,
            baked: self.baked,
            positions: self.positions.clone(),
            normals: self.normals.clone(),
            uvs: self.uvs.clone(),
            indices: self.indices.clone(),
            bounding_box: self.bounding_box,
        }
    }
}

impl Geometry {
    /// Assembles a geometry from planar attribute buffers.
    ///
    /// `positions`, `normals` and `uvs` must have equal lengths and every index
    /// must address one of those vertices.
    #[must_use]
    pub fn from_buffers(
        shape: Shape,
        positions: Vec<[f32; 3]>,
        normals: Vec<[f32; 3]>,
        uvs: Vec<[f32; 2]>,
        indices: Vec<u32>,
    ) -> Self {
        debug_assert_eq!(positions.len(), normals.len());
        debug_assert_eq!(positions.len(), uvs.len());
        debug_assert!(indices.iter().all(|&i| (i as usize) < positions.len()));

        log::trace!(
            "Tessellated {}: {} vertices, {} triangles",
            shape.kind(),
            positions.len(),
            indices.len() / 3
        );

        let mut geo = Self {
            uuid: Uuid::new_v4(),
            shape,
            baked: Affine3A::IDENTITY,
            positions,
            normals,
            uvs,
            indices,
            bounding_box: BoundingBox::empty(),
        };
        geo.compute_bounding_volume();
        geo
    }

    // ========================================================================
    // Constructors
    // ========================================================================

    #[must_use]
    pub fn new_box(width: f32, height: f32, depth: f32) -> Self {
        primitives::create_box(width, height, depth)
    }

    #[must_use]
    pub fn new_sphere(radius: f32, width_segments: u32, height_segments: u32) -> Self {
        primitives::create_sphere(primitives::SphereOptions {
            radius,
            width_segments,
            height_segments,
        })
    }

    #[must_use]
    pub fn new_cylinder(radius_top: f32, radius_bottom: f32, height: f32, radial_segments: u32) -> Self {
        primitives::create_cylinder(primitives::CylinderOptions {
            radius_top,
            radius_bottom,
            height,
            radial_segments,
        })
    }

    #[must_use]
    pub fn new_cone(radius: f32, height: f32, radial_segments: u32) -> Self {
        primitives::create_cone(radius, height, radial_segments)
    }

    #[must_use]
    pub fn new_capsule(radius: f32, length: f32, cap_segments: u32, radial_segments: u32) -> Self {
        primitives::create_capsule(primitives::CapsuleOptions {
            radius,
            length,
            cap_segments,
            radial_segments,
        })
    }

    #[must_use]
    pub fn new_torus(radius: f32, tube: f32, radial_segments: u32, tubular_segments: u32) -> Self {
        primitives::create_torus(primitives::TorusOptions {
            radius,
            tube,
            radial_segments,
            tubular_segments,
            ..Default::default()
        })
    }

    // ========================================================================
    // Baking
    // ========================================================================

    /// Scales the vertex data in place (non-uniform).
    #[must_use]
    pub fn scale(mut self, factor: Vec3) -> Self {
        self.apply_affine(Affine3A::from_scale(factor));
        self
    }

    /// Rotates the vertex data around the Z axis by `angle` radians.
    #[must_use]
    pub fn rotate_z(mut self, angle: f32) -> Self {
        self.apply_affine(Affine3A::from_rotation_z(angle));
        self
    }

    /// Bakes an arbitrary affine transform into positions and normals.
    pub fn apply_affine(&mut self, matrix: Affine3A) {
        // Normals go through the inverse-transpose so non-uniform scale keeps them perpendicular.
        let normal_matrix = Mat3::from(matrix.matrix3).inverse().transpose();

        for p in &mut self.positions {
            *p = matrix.transform_point3(Vec3::from_array(*p)).to_array();
        }
        for n in &mut self.normals {
            *n = (normal_matrix * Vec3::from_array(*n))
                .normalize_or_zero()
                .to_array();
        }

        self.baked = matrix * self.baked;
        self.compute_bounding_volume();
    }

    pub fn compute_bounding_volume(&mut self) {
        self.bounding_box = BoundingBox::from_points(self.positions.iter().copied().map(Vec3::from_array));
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    #[inline]
    #[must_use]
    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    /// Accumulated transform baked into the vertex data since construction.
    #[inline]
    #[must_use]
    pub fn baked(&self) -> Affine3A {
        self.baked
    }

    #[inline]
    #[must_use]
    pub fn bounding_box(&self) -> BoundingBox {
        self.bounding_box
    }

    #[must_use]
    pub fn positions(&self) -> &[[f32; 3]] {
        &self.positions
    }

    #[must_use]
    pub fn normals(&self) -> &[[f32; 3]] {
        &self.normals
    }

    #[must_use]
    pub fn uvs(&self) -> &[[f32; 2]] {
        &self.uvs
    }

    #[must_use]
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Interleaves the planar buffers into upload-ready vertices.
    #[must_use]
    pub fn vertices(&self) -> Vec<Vertex> {
        self.positions
            .iter()
            .zip(&self.normals)
            .zip(&self.uvs)
            .map(|((&position, &normal), &uv)| Vertex { position, normal, uv })
            .collect()
    }

    /// Raw bytes of [`Geometry::vertices`].
    #[must_use]
    pub fn vertex_bytes(&self) -> Vec<u8> {
        bytemuck::cast_slice(&self.vertices()).to_vec()
    }

    #[must_use]
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clone_gets_fresh_uuid() {
        let a = Geometry::new_box(1.0, 1.0, 1.0);
        let b = a.clone();
        assert_ne!(a.uuid, b.uuid);
        assert_eq!(a.positions(), b.positions());
    }

    #[test]
    fn scale_keeps_normals_unit_length() {
        let geo = Geometry::new_sphere(1.0, 8, 6).scale(Vec3::new(1.0, 3.0, 0.5));
        for n in geo.normals() {
            let len = Vec3::from_array(*n).length();
            assert!(len == 0.0 || (len - 1.0).abs() < 1e-4);
        }
    }

    #[test]
    fn vertex_bytes_match_layout() {
        let geo = Geometry::new_box(1.0, 1.0, 1.0);
        assert_eq!(geo.vertex_bytes().len(), geo.vertex_count() * std::mem::size_of::<Vertex>());
        assert_eq!(geo.index_bytes().len(), geo.indices().len() * 4);
    }
}
