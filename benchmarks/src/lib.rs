//! Shared setup helpers for corner-hooked benchmarks.
//!
//! ## Running
//!
//!   cargo bench --manifest-path benchmarks/Cargo.toml --bench physics
//!
//! Filter by group:
//!   cargo bench --manifest-path benchmarks/Cargo.toml --bench physics -- broadphase

use corner_hooked::physics::callback::CollisionCategory;
use corner_hooked::physics::collider::{Collider, ColliderShape};
use corner_hooked::physics::contact::{ContactInfo, ContactManifold, ContactPoint};
use corner_hooked::physics::rigid_body::{RestInfo, RigidBody, Transform};
use corner_hooked::playfield::{GameType, Playfield, TableConfig};
use corner_hooked::Plane;
use glam::Vec3;

// ---------------------------------------------------------------------------
// Body stores
// ---------------------------------------------------------------------------

fn spawn_ball(world: &mut hecs::World, position: Vec3, radius: f32) -> hecs::Entity {
    world.spawn((
        Transform::from_position(position),
        RigidBody::new_sphere(radius, 1.0),
        Collider::solid(ColliderShape::Sphere { radius }),
        RestInfo::default(),
    ))
}

/// `n` balls on a grid, spaced so neighbours overlap, inside six walls.
pub fn setup_ball_store(n: usize) -> hecs::World {
    let mut world = hecs::World::new();
    for plane in corner_hooked::playfield::wall_planes(Vec3::splat(1000.0)) {
        world.spawn((
            Transform::default(),
            RigidBody::new_fixed(),
            Collider::solid(ColliderShape::Plane(plane)),
            RestInfo::default(),
        ));
    }

    let cols = (n as f32).sqrt().ceil() as usize;
    for i in 0..n {
        let x = (i % cols) as f32 * 0.09;
        let z = (i / cols) as f32 * 0.09;
        spawn_ball(&mut world, Vec3::new(x, 0.0, z), 0.05);
    }
    world
}

/// Sphere pairs in head-on contact with pre-built manifolds.
pub fn setup_contacts(n: usize) -> (hecs::World, Vec<ContactManifold>) {
    let mut world = hecs::World::new();
    let mut manifolds = Vec::with_capacity(n);

    for i in 0..n {
        let origin = Vec3::new(0.0, 0.0, i as f32 * 2.0);
        let a = spawn_ball(&mut world, origin, 0.5);
        let b = spawn_ball(&mut world, origin + Vec3::new(0.99, 0.0, 0.0), 0.5);
        if let Ok(mut rb) = world.get::<&mut RigidBody>(a) {
            rb.linear_velocity = Vec3::X;
        }

        let info = ContactInfo {
            normal: Vec3::X,
            penetration: 0.01,
            point: origin + Vec3::new(0.495, 0.0, 0.0),
        };
        manifolds.push(ContactManifold {
            entity_a: a,
            entity_b: b,
            category: CollisionCategory::SphereSphere,
            normal: Vec3::X,
            closing_speed: 0.0,
            is_sensor: false,
            contacts: vec![ContactPoint::new(&info)],
        });
    }
    (world, manifolds)
}

// ---------------------------------------------------------------------------
// Tables
// ---------------------------------------------------------------------------

/// A racked table with the cue ball already struck toward the rack.
pub fn setup_break(game: GameType) -> anyhow::Result<Playfield> {
    let mut playfield = Playfield::new(TableConfig::default());
    playfield.add_playfield_to_simulation()?;
    playfield.load_balls(game)?;
    playfield.rack_balls(game)?;
    playfield.shoot(Vec3::X, 4.0)?;
    Ok(playfield)
}

/// Floor plane used by the narrowphase benchmarks.
pub fn floor() -> Plane {
    Plane::new(Vec3::Y, 0.0)
}
