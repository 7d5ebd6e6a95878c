use super::{BuiltModel, Category, ModelBuilder, ModelDescriptor, Part};
use crate::resources::geometry::Geometry;
use crate::resources::material::{Color, MeshStandardMaterial};

pub(super) const DESCRIPTOR: ModelDescriptor = ModelDescriptor {
    id: "cube",
    name: "Cube",
    icon: "🧊",
    category: Category::Primitive,
    description: "Simple cube geometry",
    part_count: 1,
};

pub(super) fn build() -> BuiltModel {
    let material = MeshStandardMaterial::builder()
        .color(Color::from_hex(0xe67e22))
        .roughness(0.4)
        .metalness(0.2)
        .build();

    ModelBuilder::single(Part::new("cube", Geometry::new_box(2.0, 2.0, 2.0), material))
}
