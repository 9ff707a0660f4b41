use super::Player;
use crate::{
    action::{Action, ActionInput, ActionPlan},
    ball::Ball,
    error::ConfigError,
    trajectory::{self, Launch},
};
use bevy::prelude::*;
use bevy_rapier3d::prelude::{GravityScale, RapierConfiguration, Velocity};

/// Sent whenever a player sends the ball somewhere.
#[derive(Clone, Copy, Debug, Event)]
pub struct BallStruck {
    pub player: Entity,
    pub ball: Entity,
    pub plan: ActionPlan,
    pub launch: Launch,
}

impl Player {
    #[allow(clippy::complexity)]
    pub fn strike_ball(
        physics: Option<Res<RapierConfiguration>>,
        mut struck_events: EventWriter<BallStruck>,
        mut players: Query<(Entity, &GlobalTransform, &ActionInput, &mut Player)>,
        mut balls: Query<(&GlobalTransform, &mut Velocity, &mut GravityScale), With<Ball>>,
    ) {
        for (player_entity, player_tfm, input, mut player) in &mut players {
            if !player.is_attached() {
                continue;
            }

            player.active = input.held_action();
            if player.active == Action::None {
                continue;
            }

            let ball_entity = player.ball;
            let Ok((ball_tfm, mut ball_velocity, mut ball_gravity)) = balls.get_mut(ball_entity)
            else {
                // The ball lost its body, e.g. while being reset.
                trace!("Ball {ball_entity:?} has no physical body");
                continue;
            };

            let player_pos = player_tfm.translation();
            let ball_pos = ball_tfm.translation();
            if !player.in_range(player_pos, ball_pos) {
                continue;
            }

            let Some(plan) = ActionPlan::new(
                player.active,
                ball_pos,
                input.direction,
                player.last_bump_target,
            ) else {
                continue;
            };

            let Some(physics) = physics.as_ref() else {
                player.fault(player_entity, ConfigError::MissingGravity);
                continue;
            };
            let launch = match trajectory::solve_in(
                plan.regime,
                ball_pos,
                plan.target,
                plan.peak_height,
                player.spike_speed,
                physics.gravity.y.abs(),
            ) {
                Ok(launch) => launch,
                Err(e) => {
                    player.fault(player_entity, e.into());
                    continue;
                }
            };

            launch.apply(&mut ball_velocity, &mut ball_gravity);
            if plan.action == Action::Bump {
                player.last_bump_target = plan.target;
            }

            debug!(
                "{:?} from {ball_pos} towards {} with velocity {}",
                plan.action, plan.target, launch.velocity
            );
            struck_events.send(BallStruck {
                player: player_entity,
                ball: ball_entity,
                plan,
                launch,
            });
        }
    }
}
