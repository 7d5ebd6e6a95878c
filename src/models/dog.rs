use std::sync::Arc;

use glam::Vec3;

use super::{BuiltModel, Category, ModelBuilder, ModelDescriptor, Part};
use crate::resources::geometry::Geometry;
use crate::resources::material::{Color, MeshStandardMaterial};

pub(super) const DESCRIPTOR: ModelDescriptor = ModelDescriptor {
    id: "dog",
    name: "White Dog",
    icon: "🐕",
    category: Category::Character,
    description: "A cute fluffy white dog with orange patches",
    part_count: 22,
};

const BODY: Color = Color::from_hex(0xf5f0e8);
const BODY_LIGHT: Color = Color::from_hex(0xfaf8f5);
const NOSE: Color = Color::from_hex(0x1a1a1a);
const PATCH: Color = Color::from_hex(0xc97a45);
const PATCH_DARK: Color = Color::from_hex(0xa86232);
const TONGUE: Color = Color::from_hex(0xe8a0a0);
const EYE_SPOT: Color = Color::from_hex(0xc97a45);

const OFFSET_Y: f32 = 1.0;

/// Matte, non-metallic: plush fabric.
fn plush(color: Color) -> MeshStandardMaterial {
    MeshStandardMaterial::builder().color(color).roughness(0.85).metalness(0.0).build()
}

/// Sphere squashed along each axis, baked into the vertex data.
fn blob(radius: f32, segments: u32, squash: [f32; 3]) -> Geometry {
    Geometry::new_sphere(radius, segments, segments).scale(Vec3::from_array(squash))
}

pub(super) fn build() -> BuiltModel {
    let mut dog = ModelBuilder::group("dog");

    // Body
    dog.add(Part::new("body", blob(1.2, 32, [1.0, 1.1, 0.9]), plush(BODY)));
    dog.add(Part::new("belly", blob(0.9, 32, [0.85, 0.95, 0.5]), plush(BODY_LIGHT)).at(0.0, -0.1, 0.5));
    dog.add(Part::new("back_patch", blob(0.7, 32, [1.1, 0.9, 0.4]), plush(PATCH)).at(0.0, 0.1, -0.75));

    // Head
    dog.add(Part::new("head", blob(0.85, 32, [1.0, 0.95, 0.9]), plush(BODY)).at(0.0, 1.6, 0.2));
    dog.add(Part::new("snout", blob(0.4, 32, [0.9, 0.7, 0.8]), plush(BODY_LIGHT)).at(0.0, 1.4, 0.75));
    dog.add(Part::new("nose", blob(0.15, 16, [1.2, 0.9, 0.8]), plush(NOSE)).at(0.0, 1.5, 1.0));
    dog.add(
        Part::new("eye_patch", blob(0.18, 16, [1.2, 1.5, 0.5]), plush(EYE_SPOT))
            .at(-0.35, 1.75, 0.65)
            .rotated_z(0.3),
    );

    let eye = Arc::new(Geometry::new_sphere(0.08, 16, 16));
    dog.add(Part::new("left_eye", Arc::clone(&eye), plush(NOSE)).at(-0.3, 1.7, 0.75));
    dog.add(Part::new("right_eye", eye, plush(NOSE)).at(0.3, 1.7, 0.75));

    dog.add(Part::new("tongue", blob(0.08, 16, [0.8, 0.5, 1.0]), plush(TONGUE)).at(0.0, 1.28, 0.85));

    // Ears
    let ear = Arc::new(blob(0.3, 16, [0.7, 1.2, 0.5]));
    dog.add(
        Part::new("left_ear", Arc::clone(&ear), plush(BODY))
            .at(-0.55, 2.2, 0.1)
            .rotated_z(0.4),
    );
    dog.add(Part::new("right_ear", ear, plush(BODY)).at(0.55, 2.2, 0.1).rotated_z(-0.4));

    // Arms
    let arm = Arc::new(Geometry::new_capsule(0.22, 0.5, 8, 16));
    dog.add(
        Part::new("left_arm", Arc::clone(&arm), plush(BODY))
            .at(-0.95, 0.1, 0.3)
            .rotated(-0.2, 0.0, 0.5),
    );
    dog.add(
        Part::new("right_arm", arm, plush(BODY))
            .at(0.95, 0.1, 0.3)
            .rotated(-0.2, 0.0, -0.5),
    );

    // Legs
    let leg = Arc::new(Geometry::new_capsule(0.28, 0.6, 8, 16));
    dog.add(
        Part::new("left_leg", Arc::clone(&leg), plush(BODY))
            .at(-0.5, -1.0, 0.1)
            .rotated_x(0.1),
    );
    dog.add(Part::new("right_leg", leg, plush(BODY)).at(0.5, -1.0, 0.1).rotated_x(0.1));

    // Feet, each followed by its paw pad
    let foot = Arc::new(blob(0.25, 16, [1.1, 0.6, 1.3]));
    let paw_pad = Arc::new(blob(0.12, 16, [1.0, 0.5, 1.2]));
    dog.add(Part::new("left_foot", Arc::clone(&foot), plush(BODY)).at(-0.5, -1.55, 0.2));
    dog.add(Part::new("left_paw_pad", Arc::clone(&paw_pad), plush(PATCH)).at(-0.5, -1.6, 0.35));
    dog.add(Part::new("right_foot", foot, plush(BODY)).at(0.5, -1.55, 0.2));
    dog.add(Part::new("right_paw_pad", paw_pad, plush(PATCH)).at(0.5, -1.6, 0.35));

    // Tail
    dog.add(
        Part::new("tail", Geometry::new_capsule(0.18, 0.5, 8, 16), plush(PATCH_DARK))
            .at(0.0, -0.3, -1.0)
            .rotated(-0.8, 0.0, 0.15),
    );
    dog.add(Part::new("tail_tip", Geometry::new_sphere(0.15, 16, 16), plush(PATCH_DARK)).at(0.05, -0.1, -1.35));

    dog.finish(OFFSET_Y)
}
