use std::f32::consts::FRAC_PI_2;
use std::sync::Arc;

use super::{BuiltModel, Category, ModelBuilder, ModelDescriptor, Part};
use crate::resources::geometry::Geometry;
use crate::resources::material::{Color, MeshStandardMaterial};

pub(super) const DESCRIPTOR: ModelDescriptor = ModelDescriptor {
    id: "tank",
    name: "Tank",
    icon: "🛡️",
    category: Category::Vehicle,
    description: "Military battle tank",
    part_count: 11,
};

const BODY: Color = Color::from_hex(0x4abe4a);
const TURRET: Color = Color::from_hex(0x3da63d);
const BARREL: Color = Color::from_hex(0x3da63d);
const WHEEL: Color = Color::from_hex(0x2a2a2a);

const OFFSET_Y: f32 = 0.3;

/// (x, z) of each wheel hub; all wheels sit at y = -0.3.
const WHEEL_POSITIONS: [(f32, f32); 4] = [(-1.2, 1.1), (1.2, 1.1), (-1.2, -1.1), (1.2, -1.1)];

fn paint(color: Color) -> MeshStandardMaterial {
    MeshStandardMaterial::builder().color(color).roughness(0.6).metalness(0.3).build()
}

fn rubber() -> MeshStandardMaterial {
    MeshStandardMaterial::builder().color(WHEEL).roughness(0.8).metalness(0.2).build()
}

pub(super) fn build() -> BuiltModel {
    let mut tank = ModelBuilder::group("tank");

    tank.add(Part::new("hull", Geometry::new_box(3.5, 1.4, 2.2), paint(BODY)).at(0.0, 0.5, 0.0));
    tank.add(Part::new("turret_base", Geometry::new_box(1.6, 0.8, 1.4), paint(TURRET)).at(0.2, 1.6, 0.0));
    tank.add(Part::new("turret_top", Geometry::new_box(0.8, 0.4, 0.6), paint(TURRET)).at(0.2, 2.2, 0.0));
    tank.add(Part::new("barrel", Geometry::new_box(3.0, 0.25, 0.25), paint(BARREL)).at(-1.8, 1.6, 0.0));

    tank.add(Part::new("mg_mount", Geometry::new_box(0.15, 0.5, 0.15), paint(TURRET)).at(0.2, 2.65, 0.0));

    let wheel = Arc::new(Geometry::new_cylinder(0.4, 0.4, 0.3, 16));
    for (i, &(x, z)) in WHEEL_POSITIONS.iter().enumerate() {
        tank.add(
            Part::new(format!("wheel_{i}"), Arc::clone(&wheel), rubber())
                .at(x, -0.3, z)
                .rotated_x(FRAC_PI_2),
        );
    }

    let fender = Arc::new(Geometry::new_box(3.8, 0.15, 0.1));
    tank.add(Part::new("left_fender", Arc::clone(&fender), paint(BODY)).at(0.0, 0.1, 1.2));
    tank.add(Part::new("right_fender", fender, paint(BODY)).at(0.0, 0.1, -1.2));

    tank.finish(OFFSET_Y)
}
