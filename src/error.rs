use crate::trajectory::TrajectoryError;
use bevy::prelude::Entity;
use thiserror::Error;

/// A player that can never strike the ball because the scene is set up wrong.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("ball {0:?} does not exist or is not a ball")]
    MissingBall(Entity),
    #[error("no physics configuration to read gravity from")]
    MissingGravity,
    #[error(transparent)]
    InvalidGravity(#[from] TrajectoryError),
    #[error("interaction radius must be non-negative, got {0}")]
    InvalidRadius(f32),
    #[error("player has no action input bound")]
    MissingInput,
}
