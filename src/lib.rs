#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::too_many_arguments)]

//! Procedural model catalog
//!
//! A fixed catalog of models assembled from primitive shapes (boxes,
//! spheres, cylinders, cones, capsules, tori), plus a headless viewer
//! session that a rendering host can drive.
//!
//! ```rust,ignore
//! use kitbash::ModelRegistry;
//!
//! let registry = ModelRegistry::global();
//! let mut robot = registry.construct("robot").unwrap();
//! assert_eq!(robot.part_count(), 10);
//! robot.set_wireframe(true);
//! ```

pub mod errors;
pub mod models;
pub mod registry;
pub mod resources;
pub mod scene;
pub mod utils;
pub mod viewer;

pub use errors::{KitbashError, Result};
pub use models::{BuiltModel, Category, ModelBuilder, ModelDefinition, ModelDescriptor, Part};
pub use registry::ModelRegistry;
pub use resources::primitives::*;
pub use resources::{Color, Geometry, Mesh, MeshStandardMaterial, Side};
pub use scene::{Node, NodeHandle, SceneGraph, Transform};
pub use utils::orbit_control::OrbitControls;
pub use viewer::{ModelInfo, Viewer, ViewerSettings};
