use std::borrow::Cow;

use crate::resources::material::{Color, MaterialSettings, MeshStandardMaterial, Side};

/// Builder for [`MeshStandardMaterial`].
///
/// Defaults mirror a fresh material: white, roughness 1, metalness 0, filled, front faces.
#[derive(Debug, Clone)]
pub struct MeshStandardMaterialBuilder {
    // Specific
    color: Color,
    roughness: f32,
    metalness: f32,

    // Common
    name: Option<Cow<'static, str>>,
    wireframe: bool,
    side: Side,
}

impl Default for MeshStandardMaterialBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl MeshStandardMaterialBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self {
            color: Color::WHITE,
            roughness: 1.0,
            metalness: 0.0,
            name: None,
            wireframe: false,
            side: Side::Front,
        }
    }

    // --- Specific Setters ---
    #[must_use]
    pub fn color(mut self, color: impl Into<Color>) -> Self { self.color = color.into(); self }
    #[must_use]
    pub fn roughness(mut self, roughness: f32) -> Self { self.roughness = roughness; self }
    #[must_use]
    pub fn metalness(mut self, metalness: f32) -> Self { self.metalness = metalness; self }

    // --- Common Setters ---
    #[must_use]
    pub fn name(mut self, name: impl Into<Cow<'static, str>>) -> Self { self.name = Some(name.into()); self }
    #[must_use]
    pub fn wireframe(mut self, wireframe: bool) -> Self { self.wireframe = wireframe; self }
    #[must_use]
    pub fn side(mut self, side: Side) -> Self { self.side = side; self }

    /// Builds a fresh material instance. The builder can be reused; every call
    /// yields a distinct material.
    #[must_use]
    pub fn build(&self) -> MeshStandardMaterial {
        let mut mat = MeshStandardMaterial::new(self.color);
        mat.name.clone_from(&self.name);
        mat.roughness = self.roughness.clamp(0.0, 1.0);
        mat.metalness = self.metalness.clamp(0.0, 1.0);
        mat.settings = MaterialSettings {
            wireframe: self.wireframe,
            side: self.side,
        };
        mat
    }
}
