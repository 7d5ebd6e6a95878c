//! Recipe helpers shared by every model definition.
//!
//! A recipe describes each part as a [`Part`] (geometry, material, local
//! transform) and hands it to a [`ModelBuilder`], which attaches it to the
//! root group and records it as a surface in creation order. The result is a
//! [`BuiltModel`]: an owned scene graph, its root, and the flat list of
//! surfaces that hosts iterate for bulk material changes.

use std::borrow::Cow;
use std::sync::Arc;

use glam::{EulerRot, Quat, Vec3};

use crate::resources::geometry::{BoundingBox, Geometry};
use crate::resources::material::MeshStandardMaterial;
use crate::resources::mesh::Mesh;
use crate::scene::{Node, NodeHandle, SceneGraph};

// ============================================================================
// Part
// ============================================================================

/// One primitive surface of a recipe, before it is attached.
///
/// Position defaults to the origin, rotation to identity and scale to one.
/// Parts cast shadows unless told otherwise.
#[derive(Debug, Clone)]
pub struct Part {
    name: Cow<'static, str>,
    geometry: Arc<Geometry>,
    material: MeshStandardMaterial,
    position: Vec3,
    rotation: Vec3,
    scale: Vec3,
    cast_shadow: bool,
}

impl Part {
    #[must_use]
    pub fn new(
        name: impl Into<Cow<'static, str>>,
        geometry: impl Into<Arc<Geometry>>,
        material: MeshStandardMaterial,
    ) -> Self {
        Self {
            name: name.into(),
            geometry: geometry.into(),
            material,
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            scale: Vec3::ONE,
            cast_shadow: true,
        }
    }

    #[must_use]
    pub fn at(mut self, x: f32, y: f32, z: f32) -> Self {
        self.position = Vec3::new(x, y, z);
        self
    }

    /// Euler rotation in radians, XYZ order.
    #[must_use]
    pub fn rotated(mut self, x: f32, y: f32, z: f32) -> Self {
        self.rotation = Vec3::new(x, y, z);
        self
    }

    #[must_use]
    pub fn rotated_x(mut self, angle: f32) -> Self {
        self.rotation.x = angle;
        self
    }

    #[must_use]
    pub fn rotated_y(mut self, angle: f32) -> Self {
        self.rotation.y = angle;
        self
    }

    #[must_use]
    pub fn rotated_z(mut self, angle: f32) -> Self {
        self.rotation.z = angle;
        self
    }

    #[must_use]
    pub fn scaled(mut self, x: f32, y: f32, z: f32) -> Self {
        self.scale = Vec3::new(x, y, z);
        self
    }

    #[must_use]
    pub fn cast_shadow(mut self, cast: bool) -> Self {
        self.cast_shadow = cast;
        self
    }

    fn into_node(self) -> Node {
        let mut mesh = Mesh::new(self.geometry, self.material).with_name(self.name);
        mesh.cast_shadow = self.cast_shadow;

        let mut node = Node::with_mesh(mesh);
        node.transform.position = self.position;
        node.transform.rotation = Quat::from_euler(EulerRot::XYZ, self.rotation.x, self.rotation.y, self.rotation.z);
        node.transform.scale = self.scale;
        node
    }
}

// ============================================================================
// ModelBuilder
// ============================================================================

/// Assembles parts under one root group.
#[derive(Debug)]
pub struct ModelBuilder {
    graph: SceneGraph,
    root: NodeHandle,
    surfaces: Vec<NodeHandle>,
}

impl ModelBuilder {
    /// Starts a composite model rooted at an empty group.
    #[must_use]
    pub fn group(name: impl Into<Cow<'static, str>>) -> Self {
        let mut graph = SceneGraph::new();
        let root = graph.add_node(Node::group(name));
        Self {
            graph,
            root,
            surfaces: Vec::new(),
        }
    }

    /// Builds a model whose root is the single surface itself, with no wrapping group.
    #[must_use]
    pub fn single(part: Part) -> BuiltModel {
        let mut graph = SceneGraph::new();
        let root = graph.add_node(part.into_node());
        BuiltModel {
            graph,
            root,
            surfaces: vec![root],
        }
    }

    /// Attaches `part` directly to the root and records it as the next surface.
    pub fn add(&mut self, part: Part) -> NodeHandle {
        let root = self.root;
        self.add_to(root, part)
    }

    /// Attaches `part` under an intermediate node created with [`add_group`](Self::add_group).
    pub fn add_to(&mut self, parent: NodeHandle, part: Part) -> NodeHandle {
        let handle = self.graph.add_to_parent(part.into_node(), parent);
        self.surfaces.push(handle);
        handle
    }

    /// Adds an empty transform node under the root, for parts that share a sub-transform.
    pub fn add_group(&mut self, name: impl Into<Cow<'static, str>>, position: Vec3) -> NodeHandle {
        let mut node = Node::group(name);
        node.transform.position = position;
        self.graph.add_to_parent(node, self.root)
    }

    /// Number of surfaces added so far.
    #[must_use]
    pub fn part_count(&self) -> usize {
        self.surfaces.len()
    }

    /// Lifts the whole model by `offset_y` and returns it.
    #[must_use]
    pub fn finish(mut self, offset_y: f32) -> BuiltModel {
        if let Some(root) = self.graph.get_mut(self.root) {
            root.transform.position.y = offset_y;
        }
        BuiltModel {
            graph: self.graph,
            root: self.root,
            surfaces: self.surfaces,
        }
    }
}

// ============================================================================
// BuiltModel
// ============================================================================

/// A freshly constructed model owned by the caller.
///
/// `surfaces` lists every mesh node in the order the recipe created them. For
/// primitive models the root is that single surface; for composite models the
/// root is a group whose descendant meshes are exactly `surfaces`.
#[derive(Debug, Clone)]
pub struct BuiltModel {
    graph: SceneGraph,
    root: NodeHandle,
    surfaces: Vec<NodeHandle>,
}

impl BuiltModel {
    #[inline]
    #[must_use]
    pub fn root(&self) -> NodeHandle {
        self.root
    }

    #[must_use]
    pub fn root_node(&self) -> Option<&Node> {
        self.graph.get(self.root)
    }

    #[must_use]
    pub fn graph(&self) -> &SceneGraph {
        &self.graph
    }

    pub fn graph_mut(&mut self) -> &mut SceneGraph {
        &mut self.graph
    }

    #[must_use]
    pub fn surfaces(&self) -> &[NodeHandle] {
        &self.surfaces
    }

    #[must_use]
    pub fn part_count(&self) -> usize {
        self.surfaces.len()
    }

    /// True when the root is a grouping node rather than a surface.
    #[must_use]
    pub fn is_group(&self) -> bool {
        self.graph.get(self.root).is_some_and(Node::is_group)
    }

    #[must_use]
    pub fn surface(&self, index: usize) -> Option<&Mesh> {
        self.surfaces.get(index).and_then(|&h| self.graph.mesh(h))
    }

    pub fn surface_mut(&mut self, index: usize) -> Option<&mut Mesh> {
        let handle = *self.surfaces.get(index)?;
        self.graph.mesh_mut(handle)
    }

    #[must_use]
    pub fn surface_node(&self, index: usize) -> Option<&Node> {
        self.surfaces.get(index).and_then(|&h| self.graph.get(h))
    }

    /// Meshes in creation order.
    pub fn meshes(&self) -> impl Iterator<Item = &Mesh> + '_ {
        self.surfaces.iter().filter_map(|&h| self.graph.mesh(h))
    }

    /// Applies `f` to every surface's mesh in creation order.
    pub fn for_each_mesh_mut(&mut self, mut f: impl FnMut(&mut Mesh)) {
        for &handle in &self.surfaces {
            if let Some(mesh) = self.graph.mesh_mut(handle) {
                f(mesh);
            }
        }
    }

    /// Flips every surface between wireframe and filled rendering.
    pub fn set_wireframe(&mut self, wireframe: bool) {
        self.for_each_mesh_mut(|mesh| mesh.material.set_wireframe(wireframe));
    }

    /// Refreshes cached world matrices of the whole model.
    pub fn update_world_matrices(&mut self) {
        self.graph.update_world_matrices();
    }

    /// Bounds of the assembled model in world space, root offset included.
    #[must_use]
    pub fn world_bounding_box(&self) -> BoundingBox {
        self.graph.world_bounding_box(self.root)
    }

    #[must_use]
    pub fn into_parts(self) -> (SceneGraph, NodeHandle, Vec<NodeHandle>) {
        (self.graph, self.root, self.surfaces)
    }
}
