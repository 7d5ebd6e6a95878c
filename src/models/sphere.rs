use super::{BuiltModel, Category, ModelBuilder, ModelDescriptor, Part};
use crate::resources::geometry::Geometry;
use crate::resources::material::{Color, MeshStandardMaterial};

pub(super) const DESCRIPTOR: ModelDescriptor = ModelDescriptor {
    id: "sphere",
    name: "Sphere",
    icon: "🔮",
    category: Category::Primitive,
    description: "Smooth sphere geometry",
    part_count: 1,
};

pub(super) fn build() -> BuiltModel {
    let material = MeshStandardMaterial::builder()
        .color(Color::from_hex(0x3498db))
        .roughness(0.2)
        .metalness(0.5)
        .build();

    ModelBuilder::single(Part::new("sphere", Geometry::new_sphere(1.2, 64, 64), material))
}
