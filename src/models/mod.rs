//! Model catalog entries
//!
//! Every catalog entry is a variant of [`ModelDefinition`]. Each variant pairs
//! a static [`ModelDescriptor`] with a recipe module that assembles the model
//! from primitive parts through [`ModelBuilder`].
//!
//! - Composite models (dog, robot, tank, gun) return a group root that owns
//!   every part.
//! - Primitive models (cube, sphere, pyramid, torus) return their single
//!   surface as the root.

pub mod builder;

mod cube;
mod dog;
mod gun;
mod pyramid;
mod robot;
mod sphere;
mod tank;
mod torus;

pub use builder::{BuiltModel, ModelBuilder, Part};

use serde::Serialize;

/// Descriptive classification shown next to a model. Not used for dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Category {
    Character,
    Vehicle,
    Primitive,
    Weapon,
}

impl Category {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Character => "Character",
            Self::Vehicle => "Vehicle",
            Self::Primitive => "Primitive",
            Self::Weapon => "Weapon",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Static metadata of one catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelDescriptor {
    pub id: &'static str,
    pub name: &'static str,
    pub icon: &'static str,
    pub category: Category,
    pub description: &'static str,
    /// Number of surfaces [`ModelDefinition::build`] produces.
    pub part_count: usize,
}

/// The closed set of models this crate knows how to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModelDefinition {
    Dog,
    Robot,
    Tank,
    Gun,
    Cube,
    Sphere,
    Pyramid,
    Torus,
}

impl ModelDefinition {
    /// Every definition in catalog order.
    pub const ALL: [ModelDefinition; 8] = [
        Self::Dog,
        Self::Robot,
        Self::Tank,
        Self::Gun,
        Self::Cube,
        Self::Sphere,
        Self::Pyramid,
        Self::Torus,
    ];

    #[must_use]
    pub fn descriptor(self) -> &'static ModelDescriptor {
        match self {
            Self::Dog => &dog::DESCRIPTOR,
            Self::Robot => &robot::DESCRIPTOR,
            Self::Tank => &tank::DESCRIPTOR,
            Self::Gun => &gun::DESCRIPTOR,
            Self::Cube => &cube::DESCRIPTOR,
            Self::Sphere => &sphere::DESCRIPTOR,
            Self::Pyramid => &pyramid::DESCRIPTOR,
            Self::Torus => &torus::DESCRIPTOR,
        }
    }

    #[inline]
    #[must_use]
    pub fn id(self) -> &'static str {
        self.descriptor().id
    }

    #[inline]
    #[must_use]
    pub fn name(self) -> &'static str {
        self.descriptor().name
    }

    #[inline]
    #[must_use]
    pub fn category(self) -> Category {
        self.descriptor().category
    }

    #[inline]
    #[must_use]
    pub fn part_count(self) -> usize {
        self.descriptor().part_count
    }

    /// Builds a fresh, fully independent instance of the model.
    ///
    /// Two calls never share a material; geometry is shared only between the
    /// symmetric parts of one instance.
    #[must_use]
    pub fn build(self) -> BuiltModel {
        let model = match self {
            Self::Dog => dog::build(),
            Self::Robot => robot::build(),
            Self::Tank => tank::build(),
            Self::Gun => gun::build(),
            Self::Cube => cube::build(),
            Self::Sphere => sphere::build(),
            Self::Pyramid => pyramid::build(),
            Self::Torus => torus::build(),
        };
        log::debug!("Built model '{}' with {} parts", self.id(), model.part_count());
        model
    }
}

impl std::fmt::Display for ModelDefinition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}
