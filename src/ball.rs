use crate::{collision::GravityToggle, parameters::GRAVITY_ON};
use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

#[derive(Component, Default)]
pub struct Ball;

#[derive(Bundle)]
pub struct BallBundle {
    pub ball: Ball,
    pub pbr: PbrBundle,
    pub body: RigidBody,
    pub collider: Collider,
    pub ccd: Ccd,
    pub events: ActiveEvents,
    pub mass: ColliderMassProperties,
    pub velocity: Velocity,
    pub gravity: GravityScale,
    pub gravity_toggle: GravityToggle,
    pub restitution: Restitution,
    pub friction: Friction,
}

impl BallBundle {
    pub fn new(ball_assets: &BallAssets, position: Vec3) -> Self {
        Self {
            ball: Ball,
            pbr: PbrBundle {
                mesh: ball_assets.mesh.clone(),
                material: ball_assets.material.clone(),
                transform: Transform::from_translation(position),
                ..default()
            },
            body: RigidBody::Dynamic,
            collider: Collider::ball(ball_assets.radius),
            // Spikes are fast enough to tunnel through the net.
            ccd: Ccd::enabled(),
            events: ActiveEvents::COLLISION_EVENTS,
            mass: ColliderMassProperties::Density(0.5),
            velocity: Velocity::zero(),
            gravity: GravityScale(GRAVITY_ON),
            gravity_toggle: GravityToggle,
            restitution: Restitution {
                coefficient: 0.6,
                ..default()
            },
            friction: Friction {
                coefficient: 0.7,
                ..default()
            },
        }
    }
}

#[derive(Resource)]
pub struct BallAssets {
    pub radius: f32,
    pub mesh: Handle<Mesh>,
    pub material: Handle<StandardMaterial>,
}

impl BallAssets {
    pub fn new(meshes: &mut Assets<Mesh>, materials: &mut Assets<StandardMaterial>) -> Self {
        let radius = 0.3;
        Self {
            radius,
            mesh: meshes.add(
                shape::Icosphere {
                    radius,
                    subdivisions: 5,
                }
                .try_into()
                .unwrap(),
            ),
            material: materials.add(Color::rgb_u8(250, 220, 90).into()),
        }
    }
}
