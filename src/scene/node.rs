use std::borrow::Cow;

use glam::Affine3A;

use crate::resources::mesh::Mesh;
use crate::scene::NodeHandle;
use crate::scene::transform::Transform;

/// A scene node: hierarchy links, a transform and an optional surface.
///
/// A node without a mesh is a pure grouping/transform node. A node with a
/// mesh is a leaf surface in every model this crate builds.
#[derive(Debug, Clone)]
pub struct Node {
    pub name: Cow<'static, str>,

    // === Core Hierarchy ===
    pub(crate) parent: Option<NodeHandle>,
    pub(crate) children: Vec<NodeHandle>,

    // === Core Spatial Data ===
    pub transform: Transform,

    // === Components ===
    pub mesh: Option<Mesh>,

    pub visible: bool,
}

impl Node {
    #[must_use]
    pub fn new() -> Self {
        Self {
            name: Cow::Borrowed("Node"),
            parent: None,
            children: Vec::new(),
            transform: Transform::new(),
            mesh: None,
            visible: true,
        }
    }

    /// A group node with the given name.
    #[must_use]
    pub fn group(name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            name: name.into(),
            ..Self::new()
        }
    }

    /// A leaf node carrying `mesh`, named after it.
    #[must_use]
    pub fn with_mesh(mesh: Mesh) -> Self {
        Self {
            name: mesh.name.clone(),
            mesh: Some(mesh),
            ..Self::new()
        }
    }

    #[inline]
    #[must_use]
    pub fn parent(&self) -> Option<NodeHandle> {
        self.parent
    }

    #[inline]
    #[must_use]
    pub fn children(&self) -> &[NodeHandle] {
        &self.children
    }

    #[inline]
    #[must_use]
    pub fn is_group(&self) -> bool {
        self.mesh.is_none()
    }

    #[inline]
    #[must_use]
    pub fn world_matrix(&self) -> &Affine3A {
        self.transform.world_matrix()
    }
}

impl Default for Node {
    fn default() -> Self {
        Self::new()
    }
}
