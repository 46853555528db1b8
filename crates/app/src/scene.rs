//! Scene assembly for the beer demo.
//!
//! The tree mirrors the classic setup: a terrain plane, a stream pouring
//! onto the first path point, bottles riding the closed Hermite loop, and
//! two aircraft (one orbiting, one rotating in place). Every mesh node sits
//! under a static transform node that places and scales it.

use std::sync::Arc;

use glam::{Quat, Vec3};

use brew_resources::{Mesh, MeshRegistry, PathConfig};
use brew_scene::{AnimationRule, Node, Transform};

/// Ellipse semi-axis along X for the orbiting aircraft
const ORBIT_RADIUS_A: f32 = 25.0;
/// Ellipse semi-axis along Z for the orbiting aircraft
const ORBIT_RADIUS_B: f32 = 15.0;

/// Build the whole scene tree.
pub fn build_scene(path: &Arc<PathConfig>, registry: &mut MeshRegistry) -> Node {
    let mut root = Node::new("root");
    root.add_child(terrain(registry));
    root.add_child(stream(path, registry));
    // offsets of i * F / bottles spread the bottles evenly around the loop
    for i in 0..path.bottles() {
        let offset = i as f32 * path.fragments() as f32 / path.bottles() as f32;
        root.add_child(bottle(i, offset, path, registry));
    }
    root.add_child(orbiter(registry));
    root.add_child(rotor(registry));
    root
}

fn terrain(registry: &mut MeshRegistry) -> Node {
    let mesh = registry.get_or_insert_with("terrain", || Mesh::plane(1.0, 16));
    Node::new("terrain_transform")
        .with_local(
            Transform::new()
                .with_position(Vec3::new(0.0, -17.0, 0.0))
                .with_scale(Vec3::new(80.0, 0.01, 80.0))
                .matrix(),
        )
        .with_child(Node::new("terrain").with_mesh(mesh))
}

fn stream(path: &Arc<PathConfig>, registry: &mut MeshRegistry) -> Node {
    let mesh = registry.get_or_insert_with("stream", || Mesh::cylinder(1.0, 1.0, 24));
    // the stream pours down onto the first control point of the path
    Node::new("stream_transform")
        .with_local(
            Transform::new()
                .with_position(Vec3::new(0.0, 70.0, 0.0) + path.points()[0])
                .with_scale(Vec3::new(0.5, 100.0, 0.5))
                .matrix(),
        )
        .with_child(Node::new("stream").with_mesh(mesh))
}

fn bottle(index: usize, offset: f32, path: &Arc<PathConfig>, registry: &mut MeshRegistry) -> Node {
    let mesh = registry.get_or_insert_with("bottle", || Mesh::cylinder(0.35, 1.0, 16));
    Node::new(format!("bottle_anim_{index}"))
        .with_rule(AnimationRule::PathSpline {
            offset,
            path: path.clone(),
        })
        .with_child(
            Node::new(format!("bottle_transform_{index}"))
                .with_local(
                    Transform::new()
                        .with_position(Vec3::new(0.0, -12.5, 0.0))
                        .with_scale(Vec3::splat(4.0))
                        .matrix(),
                )
                .with_child(Node::new(format!("bottle_{index}")).with_mesh(mesh)),
        )
}

fn orbiter(registry: &mut MeshRegistry) -> Node {
    let mesh = aircraft_mesh(registry);
    Node::new("orbiter")
        .with_rule(AnimationRule::EllipticalOrbit {
            a: ORBIT_RADIUS_A,
            b: ORBIT_RADIUS_B,
            speed: 1.0,
            major_axis: Vec3::X,
            minor_axis: Vec3::Z,
        })
        .with_child(
            Node::new("orbiter_transform")
                .with_local(
                    Transform::new()
                        .with_rotation(Quat::from_rotation_x(std::f32::consts::FRAC_PI_2))
                        .with_scale(Vec3::splat(8.0))
                        .matrix(),
                )
                .with_child(Node::new("orbiter_mesh").with_mesh(mesh)),
        )
}

fn rotor(registry: &mut MeshRegistry) -> Node {
    let mesh = aircraft_mesh(registry);
    Node::new("rotor")
        .with_rule(AnimationRule::AxisRotation {
            axis: Vec3::Y,
            speed: 1.0,
        })
        .with_child(
            Node::new("rotor_transform")
                .with_local(
                    Transform::new()
                        .with_position(Vec3::new(-1.0, 0.0, 0.0))
                        .matrix(),
                )
                .with_child(Node::new("rotor_mesh").with_mesh(mesh)),
        )
}

fn aircraft_mesh(registry: &mut MeshRegistry) -> Arc<Mesh> {
    registry.get_or_insert_with("aircraft", || Mesh::cuboid(Vec3::new(1.0, 0.1, 0.6)))
}
