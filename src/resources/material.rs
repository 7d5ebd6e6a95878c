use std::borrow::Cow;

use glam::{Vec3, Vec4};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// Color
// ============================================================================

/// 24-bit sRGB color as authored in hex (`0xRRGGBB`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Color(u32);

impl Color {
    pub const WHITE: Color = Color(0xff_ff_ff);
    pub const BLACK: Color = Color(0x00_00_00);

    /// Bits above the low 24 are discarded.
    #[must_use]
    pub const fn from_hex(hex: u32) -> Self {
        Self(hex & 0x00ff_ffff)
    }

    #[must_use]
    pub const fn hex(self) -> u32 {
        self.0
    }

    #[must_use]
    pub const fn r(self) -> u8 {
        (self.0 >> 16) as u8
    }

    #[must_use]
    pub const fn g(self) -> u8 {
        (self.0 >> 8) as u8
    }

    #[must_use]
    pub const fn b(self) -> u8 {
        self.0 as u8
    }

    /// Normalized sRGB components with alpha = 1.
    #[must_use]
    pub fn to_srgb_vec4(self) -> Vec4 {
        Vec4::new(
            f32::from(self.r()) / 255.0,
            f32::from(self.g()) / 255.0,
            f32::from(self.b()) / 255.0,
            1.0,
        )
    }

    /// Linear-space components with alpha = 1, ready for shading.
    #[must_use]
    pub fn to_linear_vec4(self) -> Vec4 {
        let srgb = self.to_srgb_vec4();
        let linear = Vec3::new(srgb_to_linear(srgb.x), srgb_to_linear(srgb.y), srgb_to_linear(srgb.z));
        linear.extend(1.0)
    }
}

impl From<u32> for Color {
    fn from(hex: u32) -> Self {
        Self::from_hex(hex)
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:06x}", self.0)
    }
}

fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.040_45 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

// ============================================================================
// Render settings
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Side {
    #[default]
    Front,
    Back,
    Double,
}

/// Pipeline-affecting state. Changing any of it bumps the material version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MaterialSettings {
    pub wireframe: bool,
    pub side: Side,
}

// ============================================================================
// MeshStandardMaterial
// ============================================================================

/// Metallic-roughness material for one primitive surface.
///
/// Each surface owns its material outright; hosts flip shading state such as
/// wireframe in place through the setters. `version` increases on every
/// effective change so a renderer can detect stale pipelines cheaply.
#[derive(Debug)]
pub struct MeshStandardMaterial {
    pub uuid: Uuid,
    pub name: Option<Cow<'static, str>>,

    pub(crate) color: Color,
    pub(crate) roughness: f32,
    pub(crate) metalness: f32,

    pub(crate) settings: MaterialSettings,
    pub(crate) version: u64,
}

impl MeshStandardMaterial {
    #[must_use]
    pub fn new(color: Color) -> Self {
        Self {
            uuid: Uuid::new_v4(),
            name: None,
            color,
            roughness: 1.0,
            metalness: 0.0,
            settings: MaterialSettings::default(),
            version: 0,
        }
    }

    #[must_use]
    pub fn builder() -> crate::resources::material_builder::MeshStandardMaterialBuilder {
        crate::resources::material_builder::MeshStandardMaterialBuilder::new()
    }

    // --- Uniform Accessors ---

    #[must_use]
    pub fn color(&self) -> Color {
        self.color
    }

    pub fn set_color(&mut self, color: Color) {
        if self.color != color {
            self.color = color;
            self.version += 1;
        }
    }

    #[must_use]
    pub fn roughness(&self) -> f32 {
        self.roughness
    }

    /// Clamped to `[0, 1]`.
    pub fn set_roughness(&mut self, roughness: f32) {
        let roughness = roughness.clamp(0.0, 1.0);
        if self.roughness != roughness {
            self.roughness = roughness;
            self.version += 1;
        }
    }

    #[must_use]
    pub fn metalness(&self) -> f32 {
        self.metalness
    }

    /// Clamped to `[0, 1]`.
    pub fn set_metalness(&mut self, metalness: f32) {
        let metalness = metalness.clamp(0.0, 1.0);
        if self.metalness != metalness {
            self.metalness = metalness;
            self.version += 1;
        }
    }

    // --- Settings API ---

    #[must_use]
    pub fn wireframe(&self) -> bool {
        self.settings.wireframe
    }

    /// Switches between filled and edge-only rendering.
    pub fn set_wireframe(&mut self, wireframe: bool) {
        if self.settings.wireframe != wireframe {
            self.settings.wireframe = wireframe;
            self.version += 1;
        }
    }

    #[must_use]
    pub fn side(&self) -> Side {
        self.settings.side
    }

    pub fn set_side(&mut self, side: Side) {
        if self.settings.side != side {
            self.settings.side = side;
            self.version += 1;
        }
    }

    #[must_use]
    pub fn settings(&self) -> &MaterialSettings {
        &self.settings
    }

    #[inline]
    #[must_use]
    pub fn version(&self) -> u64 {
        self.version
    }
}

// A cloned material is an independent instance, never an alias.
impl Clone for MeshStandardMaterial {
    fn clone(&self) -> Self {
        Self {
            uuid: Uuid::new_v4(),
            name: self.name.clone(),
            color: self.color,
            roughness: self.roughness,
            metalness: self.metalness,
            settings: self.settings,
            version: 0,
        }
    }
}

impl Default for MeshStandardMaterial {
    fn default() -> Self {
        Self::new(Color::WHITE)
    }
}
