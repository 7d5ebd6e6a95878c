//! Core resource definitions
//!
//! CPU-side data the models are assembled from, independent of any GPU backend:
//! - Geometry: tessellated vertex data and bounds
//! - Primitives: parametric shape constructors
//! - Material: metallic-roughness surface description
//! - Mesh: one geometry + material pair

pub mod geometry;
pub mod material;
pub mod material_builder;
pub mod mesh;
pub mod primitives;

pub use geometry::{BoundingBox, Geometry, Vertex};
pub use material::{Color, MaterialSettings, MeshStandardMaterial, Side};
pub use material_builder::MeshStandardMaterialBuilder;
pub use mesh::Mesh;
pub use primitives::{Shape, ShapeKind};
