use std::borrow::Cow;
use std::sync::Arc;

use crate::resources::geometry::Geometry;
use crate::resources::material::MeshStandardMaterial;

/// A single renderable surface: shared immutable geometry plus an owned material.
///
/// Geometry sits behind an `Arc` so a symmetric pair of parts can reuse one
/// tessellation. The material is never shared; mutating it affects this
/// surface only.
#[derive(Debug, Clone)]
pub struct Mesh {
    pub name: Cow<'static, str>,

    pub geometry: Arc<Geometry>,
    pub material: MeshStandardMaterial,

    // === Instance render settings ===
    pub cast_shadow: bool,
    pub receive_shadow: bool,
    pub visible: bool,
}

impl Mesh {
    #[must_use]
    pub fn new(geometry: impl Into<Arc<Geometry>>, material: MeshStandardMaterial) -> Self {
        Self {
            name: Cow::Borrowed("Mesh"),
            geometry: geometry.into(),
            material,
            cast_shadow: false,
            receive_shadow: false,
            visible: true,
        }
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<Cow<'static, str>>) -> Self {
        self.name = name.into();
        self
    }
}
