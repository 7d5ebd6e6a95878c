use std::f32::consts::FRAC_PI_4;

use super::{BuiltModel, Category, ModelBuilder, ModelDescriptor, Part};
use crate::resources::geometry::Geometry;
use crate::resources::material::{Color, MeshStandardMaterial};

pub(super) const DESCRIPTOR: ModelDescriptor = ModelDescriptor {
    id: "pyramid",
    name: "Pyramid",
    icon: "🔺",
    category: Category::Primitive,
    description: "Four-sided pyramid",
    part_count: 1,
};

/// A four-segment cone, turned so a face rather than an edge looks at +Z.
pub(super) fn build() -> BuiltModel {
    let material = MeshStandardMaterial::builder()
        .color(Color::from_hex(0xf1c40f))
        .roughness(0.3)
        .metalness(0.3)
        .build();

    ModelBuilder::single(Part::new("pyramid", Geometry::new_cone(1.5, 2.5, 4), material).rotated_y(FRAC_PI_4))
}
