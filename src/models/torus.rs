use std::f32::consts::FRAC_PI_4;

use super::{BuiltModel, Category, ModelBuilder, ModelDescriptor, Part};
use crate::resources::geometry::Geometry;
use crate::resources::material::{Color, MeshStandardMaterial};

pub(super) const DESCRIPTOR: ModelDescriptor = ModelDescriptor {
    id: "torus",
    name: "Torus",
    icon: "⭕",
    category: Category::Primitive,
    description: "Donut-shaped geometry",
    part_count: 1,
};

pub(super) fn build() -> BuiltModel {
    let material = MeshStandardMaterial::builder()
        .color(Color::from_hex(0x9b59b6))
        .roughness(0.2)
        .metalness(0.6)
        .build();

    ModelBuilder::single(Part::new("torus", Geometry::new_torus(1.0, 0.4, 32, 100), material).rotated_x(FRAC_PI_4))
}
