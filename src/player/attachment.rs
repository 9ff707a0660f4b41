use super::Player;
use crate::{action::ActionInput, ball::Ball, error::ConfigError, trajectory};
use bevy::{app::AppExit, prelude::*};
use bevy_rapier3d::prelude::RapierConfiguration;

#[derive(Clone, Debug, Default, PartialEq)]
pub enum Attachment {
    #[default]
    Pending,
    Attached,
    /// Permanently inert. The fault is reported once, when it is detected.
    Faulted(ConfigError),
    Detached,
}

impl Player {
    pub fn is_attached(&self) -> bool {
        self.attachment == Attachment::Attached
    }

    pub fn attach(
        &mut self,
        ball_exists: bool,
        gravity: Option<Vec3>,
        has_input: bool,
    ) -> Result<(), ConfigError> {
        let result = self.validate(ball_exists, gravity, has_input);
        self.attachment = match &result {
            Ok(()) => Attachment::Attached,
            Err(e) => Attachment::Faulted(e.clone()),
        };
        result
    }

    fn validate(
        &self,
        ball_exists: bool,
        gravity: Option<Vec3>,
        has_input: bool,
    ) -> Result<(), ConfigError> {
        if !ball_exists {
            return Err(ConfigError::MissingBall(self.ball));
        }
        let gravity = gravity.ok_or(ConfigError::MissingGravity)?;
        trajectory::validate_gravity(gravity.y.abs())?;
        if self.interaction_radius.is_nan() || self.interaction_radius < 0.0 {
            return Err(ConfigError::InvalidRadius(self.interaction_radius));
        }
        if !has_input {
            return Err(ConfigError::MissingInput);
        }
        Ok(())
    }

    /// Makes the player inert after a fault found mid-game.
    pub fn fault(&mut self, entity: Entity, error: ConfigError) {
        error!("Player {entity:?} can no longer strike the ball: {error}");
        self.attachment = Attachment::Faulted(error);
    }

    pub fn detach(&mut self) {
        self.attachment = Attachment::Detached;
    }

    pub fn attach_pending(
        physics: Option<Res<RapierConfiguration>>,
        mut players: Query<(Entity, &mut Player, Option<&ActionInput>)>,
        balls: Query<(), With<Ball>>,
    ) {
        let gravity = physics.map(|config| config.gravity);
        for (entity, mut player, input) in &mut players {
            if player.attachment != Attachment::Pending {
                continue;
            }
            let ball_exists = balls.contains(player.ball);
            match player.attach(ball_exists, gravity, input.is_some()) {
                Ok(()) => info!("Player {entity:?} attached to ball {:?}", player.ball),
                Err(e) => error!("Player {entity:?} is misconfigured: {e}"),
            }
        }
    }

    /// Must run in `Last` schedule.
    pub fn detach_on_app_exit(
        mut commands: Commands,
        mut exit: EventReader<AppExit>,
        mut players: Query<(Entity, &mut Player)>,
    ) {
        if exit.read().last().is_none() {
            return;
        }
        for (entity, mut player) in &mut players {
            player.detach();
            commands.entity(entity).remove::<ActionInput>();
            info!("Detached player {entity:?}");
        }
    }
}
