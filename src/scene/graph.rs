use glam::Affine3A;
use slotmap::SlotMap;

use crate::resources::geometry::BoundingBox;
use crate::resources::mesh::Mesh;
use crate::scene::NodeHandle;
use crate::scene::node::Node;

/// Arena-backed node hierarchy.
///
/// Nodes live in a `SlotMap` and refer to each other by [`NodeHandle`], so a
/// graph can be moved or handed to a host as a single owned value.
#[derive(Debug, Clone, Default)]
pub struct SceneGraph {
    nodes: SlotMap<NodeHandle, Node>,
    root_nodes: Vec<NodeHandle>,
}

impl SceneGraph {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an empty top-level node and returns its handle.
    pub fn create_node(&mut self) -> NodeHandle {
        self.add_node(Node::new())
    }

    /// Adds a node at the top level.
    pub fn add_node(&mut self, node: Node) -> NodeHandle {
        let handle = self.nodes.insert(node);
        self.root_nodes.push(handle);
        handle
    }

    /// Adds a node directly under `parent`.
    ///
    /// Falls back to the top level if `parent` is not in this graph.
    pub fn add_to_parent(&mut self, mut child: Node, parent: NodeHandle) -> NodeHandle {
        if !self.nodes.contains_key(parent) {
            log::warn!("add_to_parent: unknown parent {parent:?}, adding '{}' as a root", child.name);
            return self.add_node(child);
        }

        child.parent = Some(parent);
        let handle = self.nodes.insert(child);
        if let Some(p) = self.nodes.get_mut(parent) {
            p.children.push(handle);
        }
        handle
    }

    /// Re-parents `child` under `parent`, detaching it from wherever it was.
    pub fn attach(&mut self, child: NodeHandle, parent: NodeHandle) {
        if child == parent || !self.nodes.contains_key(child) || !self.nodes.contains_key(parent) {
            return;
        }
        // Refuse to create a cycle.
        if self.ancestors(parent).any(|h| h == child) {
            log::warn!("attach: {child:?} is an ancestor of {parent:?}, ignoring");
            return;
        }

        self.detach(child);

        if let Some(p) = self.nodes.get_mut(parent) {
            p.children.push(child);
        }
        if let Some(c) = self.nodes.get_mut(child) {
            c.parent = Some(parent);
        }
    }

    /// Moves `handle` to the top level.
    pub fn detach(&mut self, handle: NodeHandle) {
        let Some(parent) = self.nodes.get(handle).map(|n| n.parent) else {
            return;
        };

        match parent {
            Some(parent) => {
                if let Some(p) = self.nodes.get_mut(parent)
                    && let Some(pos) = p.children.iter().position(|&x| x == handle)
                {
                    p.children.remove(pos);
                }
            }
            None => {
                if let Some(pos) = self.root_nodes.iter().position(|&x| x == handle) {
                    self.root_nodes.remove(pos);
                }
            }
        }

        if let Some(node) = self.nodes.get_mut(handle) {
            node.parent = None;
        }
        self.root_nodes.push(handle);
    }

    // ========================================================================
    // Queries
    // ========================================================================

    #[inline]
    #[must_use]
    pub fn get(&self, handle: NodeHandle) -> Option<&Node> {
        self.nodes.get(handle)
    }

    #[inline]
    pub fn get_mut(&mut self, handle: NodeHandle) -> Option<&mut Node> {
        self.nodes.get_mut(handle)
    }

    #[must_use]
    pub fn mesh(&self, handle: NodeHandle) -> Option<&Mesh> {
        self.nodes.get(handle).and_then(|n| n.mesh.as_ref())
    }

    pub fn mesh_mut(&mut self, handle: NodeHandle) -> Option<&mut Mesh> {
        self.nodes.get_mut(handle).and_then(|n| n.mesh.as_mut())
    }

    /// Children of `handle` in insertion order; empty for unknown handles.
    #[must_use]
    pub fn children(&self, handle: NodeHandle) -> &[NodeHandle] {
        self.nodes.get(handle).map_or(&[], |n| n.children.as_slice())
    }

    #[must_use]
    pub fn root_nodes(&self) -> &[NodeHandle] {
        &self.root_nodes
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn ancestors(&self, handle: NodeHandle) -> impl Iterator<Item = NodeHandle> + '_ {
        std::iter::successors(self.nodes.get(handle).and_then(Node::parent), |&h| {
            self.nodes.get(h).and_then(Node::parent)
        })
    }

    /// `root` and everything below it, depth-first, children in insertion order.
    #[must_use]
    pub fn subtree(&self, root: NodeHandle) -> Vec<NodeHandle> {
        let mut out = Vec::new();
        let mut stack = vec![root];
        while let Some(handle) = stack.pop() {
            let Some(node) = self.nodes.get(handle) else {
                continue;
            };
            out.push(handle);
            stack.extend(node.children.iter().rev());
        }
        out
    }

    /// Nodes in the subtree of `root` that carry a mesh, in depth-first order.
    #[must_use]
    pub fn descendant_meshes(&self, root: NodeHandle) -> Vec<NodeHandle> {
        self.subtree(root)
            .into_iter()
            .filter(|&h| self.nodes.get(h).is_some_and(|n| n.mesh.is_some()))
            .collect()
    }

    // ========================================================================
    // Transforms
    // ========================================================================

    /// Refreshes local and world matrices of every node, parents first.
    pub fn update_world_matrices(&mut self) {
        let roots = self.root_nodes.clone();
        for root in roots {
            self.update_recursive(root, Affine3A::IDENTITY);
        }
    }

    fn update_recursive(&mut self, handle: NodeHandle, parent_world: Affine3A) {
        let (world, children) = {
            let Some(node) = self.nodes.get_mut(handle) else {
                return;
            };
            node.transform.update_local_matrix();
            let world = parent_world * *node.transform.local_matrix();
            node.transform.set_world_matrix(world);
            (world, node.children.clone())
        };

        for child in children {
            self.update_recursive(child, world);
        }
    }

    /// World-space bounds of every mesh under `root`.
    ///
    /// Matrices are derived from the current TRS values rather than the cached
    /// ones, so the result does not depend on a prior
    /// [`update_world_matrices`](Self::update_world_matrices).
    #[must_use]
    pub fn world_bounding_box(&self, root: NodeHandle) -> BoundingBox {
        let parent_world = self
            .ancestors(root)
            .collect::<Vec<_>>()
            .into_iter()
            .rev()
            .filter_map(|h| self.nodes.get(h))
            .fold(Affine3A::IDENTITY, |acc, n| acc * local_of(n));

        let mut bounds = BoundingBox::empty();
        let mut stack = vec![(root, parent_world)];
        while let Some((handle, parent)) = stack.pop() {
            let Some(node) = self.nodes.get(handle) else {
                continue;
            };
            let world = parent * local_of(node);
            if let Some(mesh) = &node.mesh {
                bounds = bounds.union(&mesh.geometry.bounding_box().transform(&world));
            }
            stack.extend(node.children.iter().map(|&c| (c, world)));
        }
        bounds
    }
}

fn local_of(node: &Node) -> Affine3A {
    let t = &node.transform;
    Affine3A::from_scale_rotation_translation(t.scale, t.rotation, t.position)
}
