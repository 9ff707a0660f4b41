mod attachment;
mod strike;

pub use self::attachment::Attachment;
pub use self::strike::BallStruck;

use crate::{
    action::{Action, ActionInput},
    parameters::{INTERACTION_RADIUS, SPIKE_SPEED},
};
use bevy::prelude::*;
use bevy_rapier3d::prelude::{Collider, LockedAxes, RigidBody};

#[derive(Component, Debug)]
pub struct Player {
    pub interaction_radius: f32,
    pub spike_speed: f32,
    /// The action chosen on the last tick, whether or not it reached the ball.
    active: Action,
    /// Sets are aimed relative to wherever the last bump was sent.
    last_bump_target: Vec3,
    ball: Entity,
    attachment: Attachment,
}

impl Player {
    pub fn new(ball: Entity) -> Self {
        Self {
            interaction_radius: INTERACTION_RADIUS,
            spike_speed: SPIKE_SPEED,
            active: Action::None,
            last_bump_target: Vec3::ZERO,
            ball,
            attachment: Attachment::Pending,
        }
    }

    pub fn ball(&self) -> Entity {
        self.ball
    }

    pub fn active(&self) -> Action {
        self.active
    }

    pub fn last_bump_target(&self) -> Vec3 {
        self.last_bump_target
    }

    pub fn attachment(&self) -> &Attachment {
        &self.attachment
    }

    pub fn in_range(&self, player_pos: Vec3, ball_pos: Vec3) -> bool {
        player_pos.distance(ball_pos) <= self.interaction_radius
    }
}

#[derive(Bundle)]
pub struct PlayerBundle {
    pub player: Player,
    pub input: ActionInput,
    pub body: RigidBody,
    pub collider: Collider,
    pub locked_axes: LockedAxes,
    pub pbr: PbrBundle,
}

impl PlayerBundle {
    pub fn new(assets: &PlayerAssets, ball: Entity, position: Vec3) -> Self {
        Self {
            player: Player::new(ball),
            input: default(),
            body: RigidBody::KinematicPositionBased,
            collider: Collider::capsule_y(0.5 * assets.capsule_length, assets.capsule_radius),
            locked_axes: LockedAxes::ROTATION_LOCKED,
            pbr: PbrBundle {
                mesh: assets.mesh.clone(),
                material: assets.material.clone(),
                transform: Transform::from_translation(position),
                ..default()
            },
        }
    }
}

#[derive(Resource)]
pub struct PlayerAssets {
    pub capsule_radius: f32,
    pub capsule_length: f32,
    pub mesh: Handle<Mesh>,
    pub material: Handle<StandardMaterial>,
}

impl PlayerAssets {
    pub fn new(
        color: Color,
        meshes: &mut Assets<Mesh>,
        materials: &mut Assets<StandardMaterial>,
    ) -> Self {
        let capsule_radius = 0.4;
        let capsule_length = 1.0;
        Self {
            capsule_radius,
            capsule_length,
            mesh: meshes.add(
                shape::Capsule {
                    radius: capsule_radius,
                    depth: capsule_length,
                    ..default()
                }
                .into(),
            ),
            material: materials.add(color.into()),
        }
    }
}
