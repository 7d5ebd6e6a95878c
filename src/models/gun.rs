use std::f32::consts::{FRAC_PI_2, PI};

use super::{BuiltModel, Category, ModelBuilder, ModelDescriptor, Part};
use crate::resources::geometry::Geometry;
use crate::resources::material::{Color, MeshStandardMaterial};
use crate::resources::primitives::{TorusOptions, create_torus};

pub(super) const DESCRIPTOR: ModelDescriptor = ModelDescriptor {
    id: "gun",
    name: "AK-47",
    icon: "🔫",
    category: Category::Weapon,
    description: "A black plastic toy AK-47 style rifle",
    part_count: 12,
};

const BLACK: Color = Color::from_hex(0x2a2a2a);
const DARK: Color = Color::from_hex(0x1a1a1a);
const METAL: Color = Color::from_hex(0x3a3a3a);

const OFFSET_Y: f32 = 1.0;

fn paint(color: Color) -> MeshStandardMaterial {
    MeshStandardMaterial::builder().color(color).roughness(0.5).metalness(0.1).build()
}

/// Laid out along X: the muzzle points to -X, the stock to +X.
pub(super) fn build() -> BuiltModel {
    let mut gun = ModelBuilder::group("gun");

    // Cylinders are authored along Y; turn them onto the X axis.
    let barrel = Geometry::new_cylinder(0.06, 0.07, 1.5, 16).rotate_z(FRAC_PI_2);
    gun.add(Part::new("barrel", barrel, paint(METAL)).at(-1.5, 0.0, 0.0));

    gun.add(Part::new("handguard", Geometry::new_box(0.7, 0.22, 0.22), paint(BLACK)).at(-0.9, 0.0, 0.0));
    gun.add(Part::new("receiver", Geometry::new_box(1.0, 0.3, 0.24), paint(BLACK)).at(-0.1, 0.0, 0.0));
    gun.add(Part::new("dust_cover", Geometry::new_box(0.8, 0.08, 0.2), paint(DARK)).at(-0.1, 0.19, 0.0));
    gun.add(
        Part::new("magazine", Geometry::new_box(0.25, 0.6, 0.12), paint(DARK))
            .at(-0.15, -0.45, 0.0)
            .rotated_z(0.15),
    );
    gun.add(
        Part::new("grip", Geometry::new_box(0.18, 0.45, 0.18), paint(BLACK))
            .at(0.25, -0.4, 0.0)
            .rotated_z(-0.2),
    );

    let trigger_guard = create_torus(TorusOptions {
        radius: 0.1,
        tube: 0.02,
        radial_segments: 8,
        tubular_segments: 12,
        arc: PI,
    });
    gun.add(
        Part::new("trigger_guard", trigger_guard, paint(DARK))
            .at(0.05, -0.2, 0.0)
            .rotated_z(PI),
    );

    gun.add(Part::new("stock", Geometry::new_box(0.8, 0.2, 0.18), paint(BLACK)).at(0.8, 0.0, 0.0));
    gun.add(Part::new("buttpad", Geometry::new_box(0.08, 0.25, 0.2), paint(DARK)).at(1.24, 0.0, 0.0));
    gun.add(Part::new("front_sight", Geometry::new_box(0.08, 0.12, 0.06), paint(METAL)).at(-2.1, 0.1, 0.0));
    gun.add(Part::new("rear_sight", Geometry::new_box(0.1, 0.08, 0.08), paint(METAL)).at(0.2, 0.23, 0.0));

    let muzzle = Geometry::new_cylinder(0.08, 0.06, 0.15, 12).rotate_z(FRAC_PI_2);
    gun.add(Part::new("muzzle", muzzle, paint(METAL)).at(-2.3, 0.0, 0.0));

    gun.finish(OFFSET_Y)
}
