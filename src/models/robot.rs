use std::sync::Arc;

use super::{BuiltModel, Category, ModelBuilder, ModelDescriptor, Part};
use crate::resources::geometry::Geometry;
use crate::resources::material::{Color, MeshStandardMaterial};

pub(super) const DESCRIPTOR: ModelDescriptor = ModelDescriptor {
    id: "robot",
    name: "Robot",
    icon: "🤖",
    category: Category::Character,
    description: "A friendly geometric robot",
    part_count: 10,
};

const HEAD: Color = Color::from_hex(0xf5c6a5);
const BODY: Color = Color::from_hex(0xe08850);
const ARM: Color = Color::from_hex(0xfad5b5);
const HAND: Color = Color::from_hex(0xfce5cc);
const LEG: Color = Color::from_hex(0xf5a060);
const FOOT: Color = Color::from_hex(0x3d5a7a);

const OFFSET_Y: f32 = 0.5;

fn paint(color: Color) -> MeshStandardMaterial {
    MeshStandardMaterial::builder().color(color).roughness(0.5).metalness(0.1).build()
}

pub(super) fn build() -> BuiltModel {
    let mut robot = ModelBuilder::group("robot");

    robot.add(Part::new("head", Geometry::new_box(1.4, 1.2, 1.0), paint(HEAD)).at(0.0, 2.8, 0.0));
    robot.add(Part::new("body", Geometry::new_box(2.4, 2.2, 1.2), paint(BODY)).at(0.0, 0.7, 0.0));

    let arm = Arc::new(Geometry::new_box(0.8, 0.6, 0.5));
    robot.add(Part::new("left_arm", Arc::clone(&arm), paint(ARM)).at(-1.8, 1.0, 0.0));
    robot.add(Part::new("right_arm", arm, paint(ARM)).at(1.8, 1.0, 0.0));

    let hand = Arc::new(Geometry::new_box(0.5, 0.5, 0.4));
    robot.add(Part::new("left_hand", Arc::clone(&hand), paint(HAND)).at(-2.45, 1.0, 0.0));
    robot.add(Part::new("right_hand", hand, paint(HAND)).at(2.45, 1.0, 0.0));

    let leg = Arc::new(Geometry::new_box(0.9, 1.8, 0.7));
    robot.add(Part::new("left_leg", Arc::clone(&leg), paint(LEG)).at(-0.55, -1.2, 0.0));
    robot.add(Part::new("right_leg", leg, paint(LEG)).at(0.55, -1.2, 0.0));

    let foot = Arc::new(Geometry::new_box(1.0, 0.4, 0.8));
    robot.add(Part::new("left_foot", Arc::clone(&foot), paint(FOOT)).at(-0.55, -2.3, 0.0));
    robot.add(Part::new("right_foot", foot, paint(FOOT)).at(0.55, -2.3, 0.0));

    robot.finish(OFFSET_Y)
}
