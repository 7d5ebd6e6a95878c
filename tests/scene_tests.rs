//! Scene Graph and Transform Tests
//!
//! Tests for:
//! - Node creation, parenting, attach/detach and cycle rejection
//! - Subtree traversal order and descendant mesh collection
//! - Transform dirty checking and Euler (XYZ) round-trips
//! - World matrix propagation and world-space bounds
//! - ModelBuilder: group vs single roots, intermediate transform nodes

use std::f32::consts::{FRAC_PI_2, FRAC_PI_4};
use std::sync::Arc;

use glam::{Affine3A, EulerRot, Quat, Vec3};

use kitbash::models::{ModelBuilder, Part};
use kitbash::resources::geometry::Geometry;
use kitbash::resources::material::MeshStandardMaterial;
use kitbash::resources::mesh::Mesh;
use kitbash::scene::{Node, SceneGraph, Transform};

const EPSILON: f32 = 1e-5;

fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

fn vec3_approx(a: Vec3, b: Vec3) -> bool {
    approx_eq(a.x, b.x) && approx_eq(a.y, b.y) && approx_eq(a.z, b.z)
}

fn unit_box_mesh() -> Mesh {
    Mesh::new(Geometry::new_box(1.0, 1.0, 1.0), MeshStandardMaterial::default())
}

// ============================================================================
// Hierarchy
// ============================================================================

#[test]
fn create_node_is_top_level() {
    let mut graph = SceneGraph::new();
    let a = graph.create_node();
    assert_eq!(graph.root_nodes(), &[a]);
    assert_eq!(graph.len(), 1);
    assert!(graph.get(a).unwrap().is_group());
}

#[test]
fn add_to_parent_links_both_ways() {
    let mut graph = SceneGraph::new();
    let parent = graph.add_node(Node::group("parent"));
    let child = graph.add_to_parent(Node::group("child"), parent);

    assert_eq!(graph.children(parent), &[child]);
    assert_eq!(graph.get(child).unwrap().parent(), Some(parent));
    assert_eq!(graph.root_nodes(), &[parent]);
}

#[test]
fn attach_moves_between_parents() {
    let mut graph = SceneGraph::new();
    let a = graph.create_node();
    let b = graph.create_node();
    let child = graph.add_to_parent(Node::new(), a);

    graph.attach(child, b);

    assert!(graph.children(a).is_empty());
    assert_eq!(graph.children(b), &[child]);
    assert_eq!(graph.get(child).unwrap().parent(), Some(b));
}

#[test]
fn attach_to_self_is_noop() {
    let mut graph = SceneGraph::new();
    let a = graph.create_node();
    graph.attach(a, a);
    assert_eq!(graph.get(a).unwrap().parent(), None);
    assert!(graph.children(a).is_empty());
}

#[test]
fn attach_rejects_cycles() {
    let mut graph = SceneGraph::new();
    let a = graph.create_node();
    let b = graph.add_to_parent(Node::new(), a);
    let c = graph.add_to_parent(Node::new(), b);

    graph.attach(a, c);

    assert_eq!(graph.get(a).unwrap().parent(), None);
    assert_eq!(graph.ancestors(c).collect::<Vec<_>>(), [b, a]);
}

#[test]
fn detach_returns_node_to_top_level() {
    let mut graph = SceneGraph::new();
    let a = graph.create_node();
    let b = graph.add_to_parent(Node::new(), a);

    graph.detach(b);

    assert_eq!(graph.get(b).unwrap().parent(), None);
    assert!(graph.children(a).is_empty());
    assert_eq!(graph.root_nodes(), &[a, b]);
}

#[test]
fn subtree_is_depth_first_in_insertion_order() {
    let mut graph = SceneGraph::new();
    let root = graph.create_node();
    let a = graph.add_to_parent(Node::new(), root);
    let a1 = graph.add_to_parent(Node::new(), a);
    let b = graph.add_to_parent(Node::with_mesh(unit_box_mesh()), root);
    let a2 = graph.add_to_parent(Node::with_mesh(unit_box_mesh()), a);

    assert_eq!(graph.subtree(root), [root, a, a1, a2, b]);
    assert_eq!(graph.descendant_meshes(root), [a2, b]);
}

// ============================================================================
// Transform
// ============================================================================

#[test]
fn transform_default_is_identity() {
    let t = Transform::new();
    assert_eq!(t.position, Vec3::ZERO);
    assert_eq!(t.rotation, Quat::IDENTITY);
    assert_eq!(t.scale, Vec3::ONE);
    assert_eq!(*t.local_matrix(), Affine3A::IDENTITY);
}

#[test]
fn transform_dirty_checking() {
    let mut t = Transform::new();
    assert!(t.update_local_matrix());
    assert!(!t.update_local_matrix());

    t.position = Vec3::new(1.0, 2.0, 3.0);
    assert!(t.update_local_matrix());
    assert!(vec3_approx(t.local_matrix().translation.into(), Vec3::new(1.0, 2.0, 3.0)));

    t.mark_dirty();
    assert!(t.update_local_matrix());
}

#[test]
fn euler_round_trip_xyz() {
    let mut t = Transform::new();
    t.set_rotation_euler(-0.2, 0.3, 0.5);
    assert!(vec3_approx(t.rotation_euler(), Vec3::new(-0.2, 0.3, 0.5)));
    assert!(t.rotation.abs_diff_eq(Quat::from_euler(EulerRot::XYZ, -0.2, 0.3, 0.5), EPSILON));
}

#[test]
fn euler_order_is_x_then_y_then_z() {
    let mut t = Transform::new();
    t.set_rotation_euler(FRAC_PI_2, 0.0, FRAC_PI_2);
    // Intrinsic XYZ: the matrix is Rx * Ry * Rz.
    let expected = Quat::from_rotation_x(FRAC_PI_2) * Quat::from_rotation_z(FRAC_PI_2);
    assert!(t.rotation.abs_diff_eq(expected, EPSILON));
}

// ============================================================================
// World matrices & bounds
// ============================================================================

#[test]
fn world_matrix_propagates() {
    let mut graph = SceneGraph::new();

    let mut parent = Node::new();
    parent.transform.position = Vec3::new(0.0, 1.0, 0.0);
    parent.transform.rotation = Quat::from_rotation_y(FRAC_PI_2);
    let parent = graph.add_node(parent);

    let mut child = Node::new();
    child.transform.position = Vec3::new(0.0, 0.0, 2.0);
    let child = graph.add_to_parent(child, parent);

    graph.update_world_matrices();

    // +Z rotated a quarter turn about Y lands on +X.
    let world: Vec3 = graph.get(child).unwrap().world_matrix().translation.into();
    assert!(vec3_approx(world, Vec3::new(2.0, 1.0, 0.0)));
}

#[test]
fn world_bounding_box_without_update() {
    let mut graph = SceneGraph::new();

    let mut root = Node::group("root");
    root.transform.position = Vec3::new(0.0, 1.0, 0.0);
    let root = graph.add_node(root);

    let mut leaf = Node::with_mesh(unit_box_mesh());
    leaf.transform.position = Vec3::new(2.0, 0.0, 0.0);
    leaf.transform.scale = Vec3::new(2.0, 1.0, 1.0);
    graph.add_to_parent(leaf, root);

    let bb = graph.world_bounding_box(root);
    assert!(vec3_approx(bb.min, Vec3::new(1.0, 0.5, -0.5)));
    assert!(vec3_approx(bb.max, Vec3::new(3.0, 1.5, 0.5)));
}

#[test]
fn world_bounding_box_of_subtree_includes_ancestors() {
    let mut graph = SceneGraph::new();
    let mut root = Node::new();
    root.transform.position = Vec3::new(0.0, 0.0, 5.0);
    let root = graph.add_node(root);
    let leaf = graph.add_to_parent(Node::with_mesh(unit_box_mesh()), root);

    assert!(vec3_approx(graph.world_bounding_box(leaf).center(), Vec3::new(0.0, 0.0, 5.0)));
}

// ============================================================================
// ModelBuilder
// ============================================================================

#[test]
fn builder_group_collects_surfaces_in_order() {
    let geometry = Arc::new(Geometry::new_box(1.0, 1.0, 1.0));
    let mut builder = ModelBuilder::group("pair");
    let left = builder.add(Part::new("left", Arc::clone(&geometry), MeshStandardMaterial::default()).at(-1.0, 0.0, 0.0));
    let right = builder.add(Part::new("right", geometry, MeshStandardMaterial::default()).at(1.0, 0.0, 0.0));
    assert_eq!(builder.part_count(), 2);

    let model = builder.finish(0.25);
    assert!(model.is_group());
    assert_eq!(model.surfaces(), &[left, right]);
    assert!(approx_eq(model.root_node().unwrap().transform.position.y, 0.25));
    assert_eq!(model.surface(1).unwrap().name, "right");
}

#[test]
fn builder_intermediate_transform_node() {
    let mut builder = ModelBuilder::group("rig");
    let pivot = builder.add_group("pivot", Vec3::new(0.0, 2.0, 0.0));
    let arm = builder.add_to(
        pivot,
        Part::new("arm", Geometry::new_box(1.0, 1.0, 1.0), MeshStandardMaterial::default()).rotated_z(FRAC_PI_4),
    );
    let model = builder.finish(0.0);

    assert_eq!(model.surfaces(), &[arm]);
    assert_eq!(model.graph().get(arm).unwrap().parent(), Some(pivot));
    assert_eq!(model.graph().descendant_meshes(model.root()), [arm]);
    assert!(approx_eq(model.world_bounding_box().center().y, 2.0));
}

#[test]
fn builder_single_root_is_surface() {
    let model = ModelBuilder::single(
        Part::new("solo", Geometry::new_sphere(1.0, 8, 6), MeshStandardMaterial::default()).cast_shadow(false),
    );
    assert!(!model.is_group());
    assert_eq!(model.surfaces(), &[model.root()]);
    assert!(!model.surface(0).unwrap().cast_shadow);
}

#[test]
fn update_world_matrices_on_built_model() {
    let mut model = ModelBuilder::group("lifted");
    let part = model.add(Part::new("p", Geometry::new_box(1.0, 1.0, 1.0), MeshStandardMaterial::default()).at(1.0, 0.0, 0.0));
    let mut model = model.finish(3.0);

    model.update_world_matrices();

    let world: Vec3 = model.graph().get(part).unwrap().world_matrix().translation.into();
    assert!(vec3_approx(world, Vec3::new(1.0, 3.0, 0.0)));
}
