use super::rig::CharacterPose;
use super::scene::{NodeId, Primitive, SceneGraph, Transform};
use glam::Vec3;
use std::f32::consts::PI;

#[inline]
const fn rgb(hex: u32) -> [f32; 3] {
    [
        ((hex >> 16) & 0xff) as f32 / 255.0,
        ((hex >> 8) & 0xff) as f32 / 255.0,
        (hex & 0xff) as f32 / 255.0,
    ]
}

// Palette
const SKIN: [f32; 3] = rgb(0xd4a574);
const SKIN_SHADOW: [f32; 3] = rgb(0xb8896a);
const HAIR: [f32; 3] = rgb(0x0a0a0f);
const HAIR_HIGHLIGHT: [f32; 3] = rgb(0x1a1a25);
const EYE_WHITE: [f32; 3] = rgb(0xf5f5f5);
const IRIS: [f32; 3] = rgb(0x2d4a3d);
const PUPIL: [f32; 3] = rgb(0x050505);
const REFLECTION: [f32; 3] = rgb(0xffffff);
const HOODIE: [f32; 3] = rgb(0x1a1a1a);
const HOODIE_ACCENT: [f32; 3] = rgb(0x2a2a2a);
const LIPS: [f32; 3] = rgb(0xc4847a);

#[inline]
fn v(x: f32, y: f32, z: f32) -> Vec3 {
    Vec3::new(x, y, z)
}

#[inline]
fn sphere(radius: f32) -> Primitive {
    Primitive::Sphere { radius }
}

#[inline]
fn cuboid(x: f32, y: f32, z: f32) -> Primitive {
    Primitive::Cuboid { size: v(x, y, z) }
}

/// The procedurally built hooded developer plus handles to the nodes the
/// rig drives.
#[derive(Clone, Debug)]
pub struct DeveloperModel {
    pub graph: SceneGraph,
    pub root: NodeId,
    pub head: NodeId,
    pub left_pupil: NodeId,
    pub right_pupil: NodeId,
}

impl DeveloperModel {
    /// Write one frame's pose into the node transforms.
    pub fn apply(&mut self, pose: &CharacterPose) {
        let root = self.graph.local_mut(self.root);
        root.translation = pose.body.offset;
        root.scale = Vec3::splat(pose.body.scale);

        let head = self.graph.local_mut(self.head);
        head.rotation.x = pose.head.rotation.x;
        head.rotation.y = pose.head.rotation.y;

        for pupil in [self.left_pupil, self.right_pupil] {
            self.graph.local_mut(pupil).translation = pose.pupils.offset;
        }
    }
}

fn build_eye(g: &mut SceneGraph, head: NodeId, side: f32) -> NodeId {
    let (eye_name, pupil_name) = if side < 0.0 {
        ("left_eye", "left_pupil")
    } else {
        ("right_eye", "right_pupil")
    };
    let eye = g.add_group(eye_name, Some(head), Transform::at(v(0.14 * side, 0.18, 0.42)));
    g.add_shape("", eye, Transform::default(), sphere(0.072), EYE_WHITE);
    let pupil = g.add_group(pupil_name, Some(eye), Transform::default());
    g.add_shape("", pupil, Transform::at(v(0.0, 0.0, 0.045)), sphere(0.045), IRIS);
    g.add_shape("", pupil, Transform::at(v(0.0, 0.0, 0.06)), sphere(0.025), PUPIL);
    g.add_shape("", pupil, Transform::at(v(0.015, 0.02, 0.068)), sphere(0.008), REFLECTION);
    g.add_shape("", pupil, Transform::at(v(-0.008, 0.01, 0.065)), sphere(0.004), REFLECTION);
    pupil
}

/// Build the character. The root sits at the origin with unit scale; the
/// host measures its bounds to place it.
pub fn build_developer() -> DeveloperModel {
    let mut g = SceneGraph::new();
    let root = g.add_group("root", None, Transform::default());
    let head = g.add_group("head", Some(root), Transform::default());

    // Face
    g.add_shape("skull", head, Transform::at(v(0.0, 0.15, 0.0)), sphere(0.48), SKIN);
    g.add_shape(
        "jaw",
        head,
        Transform::at(v(0.0, 0.02, 0.35)).with_rotation(v(-0.1, 0.0, 0.0)),
        cuboid(0.32, 0.22, 0.25),
        SKIN,
    );
    g.add_shape(
        "chin",
        head,
        Transform::at(v(0.0, -0.08, 0.38)).with_rotation(v(0.2, 0.0, 0.0)),
        cuboid(0.28, 0.12, 0.18),
        SKIN,
    );
    for side in [-1.0, 1.0] {
        g.add_shape("", head, Transform::at(v(0.22 * side, 0.08, 0.28)), sphere(0.12), SKIN_SHADOW);
        g.add_shape("", head, Transform::at(v(0.38 * side, 0.1, 0.15)), sphere(0.08), SKIN);
    }

    // Hair
    g.add_shape("hair", head, Transform::at(v(0.0, 0.55, -0.05)), sphere(0.46), HAIR);
    g.add_shape(
        "fringe",
        head,
        Transform::at(v(0.0, 0.48, 0.25)).with_rotation(v(0.4, 0.0, 0.0)),
        cuboid(0.65, 0.18, 0.35),
        HAIR,
    );
    let bangs = g.add_group("bangs", Some(head), Transform::at(v(0.0, 0.55, 0.35)));
    let strands: [(Vec3, Vec3, Vec3, [f32; 3]); 4] = [
        (v(-0.15, 0.0, 0.0), v(0.3, 0.2, -0.1), v(0.12, 0.25, 0.08), HAIR),
        (v(0.05, 0.02, 0.0), v(0.35, -0.1, 0.05), v(0.14, 0.28, 0.07), HAIR_HIGHLIGHT),
        (v(0.2, -0.02, 0.0), v(0.25, -0.2, 0.1), v(0.11, 0.22, 0.08), HAIR),
        (v(-0.05, 0.05, 0.02), v(0.4, 0.1, 0.0), v(0.08, 0.3, 0.05), HAIR_HIGHLIGHT),
    ];
    for (pos, rot, size, color) in strands {
        g.add_shape(
            "",
            bangs,
            Transform::at(pos).with_rotation(rot),
            Primitive::Cuboid { size },
            color,
        );
    }
    for side in [-1.0, 1.0] {
        g.add_shape("", head, Transform::at(v(0.35 * side, 0.25, 0.1)), sphere(0.2), HAIR);
        g.add_shape("", head, Transform::at(v(0.42 * side, 0.15, 0.02)), sphere(0.15), HAIR);
    }
    g.add_shape("", head, Transform::at(v(0.0, 0.35, -0.35)), sphere(0.38), HAIR);
    g.add_shape("", head, Transform::at(v(0.0, 0.2, -0.4)), sphere(0.28), HAIR);

    // Eyes and brows
    let left_pupil = build_eye(&mut g, head, -1.0);
    let right_pupil = build_eye(&mut g, head, 1.0);
    for side in [-1.0, 1.0] {
        g.add_shape(
            "",
            head,
            Transform::at(v(0.14 * side, 0.30, 0.38)).with_rotation(v(0.0, 0.0, -0.08 * side)),
            cuboid(0.12, 0.018, 0.015),
            HAIR,
        );
        g.add_shape(
            "",
            head,
            Transform::at(v(0.19 * side, 0.29, 0.37)).with_rotation(v(0.0, 0.0, -0.3 * side)),
            cuboid(0.04, 0.02, 0.012),
            HAIR,
        );
    }

    // Nose, mouth, neck
    g.add_shape(
        "nose",
        head,
        Transform::at(v(0.0, 0.05, 0.45)).with_rotation(v(0.15, 0.0, 0.0)),
        cuboid(0.06, 0.11, 0.08),
        SKIN,
    );
    g.add_shape("", head, Transform::at(v(0.0, 0.01, 0.49)), sphere(0.032), SKIN_SHADOW);
    g.add_shape(
        "upper_lip",
        head,
        Transform::at(v(0.0, -0.08, 0.43)).with_rotation(v(0.05, 0.0, PI * 0.5)),
        Primitive::Capsule {
            radius: 0.012,
            length: 0.06,
        },
        LIPS,
    );
    g.add_shape(
        "lower_lip",
        head,
        Transform::at(v(0.0, -0.095, 0.42)).with_rotation(v(0.1, 0.0, PI * 0.5)),
        Primitive::Capsule {
            radius: 0.008,
            length: 0.04,
        },
        SKIN_SHADOW,
    );
    g.add_shape(
        "neck",
        head,
        Transform::at(v(0.0, -0.28, 0.08)),
        Primitive::Cylinder {
            radius_top: 0.14,
            radius_bottom: 0.16,
            height: 0.12,
        },
        SKIN,
    );

    // Hoodie
    g.add_shape(
        "torso",
        root,
        Transform::at(v(0.0, -0.52, 0.0)),
        Primitive::Cylinder {
            radius_top: 0.28,
            radius_bottom: 0.42,
            height: 0.5,
        },
        HOODIE,
    );
    g.add_shape("chest", root, Transform::at(v(0.0, -0.45, 0.15)), sphere(0.22), HOODIE);
    g.add_shape(
        "collar",
        root,
        Transform::at(v(0.0, -0.32, 0.12)).with_rotation(v(-0.3, 0.0, 0.0)),
        cuboid(0.18, 0.08, 0.02),
        HOODIE_ACCENT,
    );
    for side in [-1.0, 1.0] {
        g.add_shape("", root, Transform::at(v(0.22 * side, -0.42, 0.08)), cuboid(0.08, 0.16, 0.02), HOODIE);
    }
    g.add_shape(
        "hood_ring",
        root,
        Transform::at(v(0.0, -0.38, 0.22)).with_rotation(v(-0.5, 0.0, 0.0)),
        Primitive::Torus {
            radius: 0.08,
            tube: 0.012,
            arc: PI,
        },
        HOODIE_ACCENT,
    );

    DeveloperModel {
        graph: g,
        root,
        head,
        left_pupil,
        right_pupil,
    }
}
