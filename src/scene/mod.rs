//! Scene graph
//!
//! - Node: hierarchy links, transform and an optional mesh
//! - Transform: position / rotation / scale with cached matrices
//! - SceneGraph: slot-map arena owning a tree of nodes

pub mod graph;
pub mod node;
pub mod transform;

pub use graph::SceneGraph;
pub use node::Node;
pub use transform::Transform;

use slotmap::new_key_type;

new_key_type! {
    pub struct NodeHandle;
}
