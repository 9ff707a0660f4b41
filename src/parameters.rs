/// How close a player must be to the ball to strike it.
pub const INTERACTION_RADIUS: f32 = 5.0;
/// Speed of a flat (gravity-free) shot, e.g. a spike.
pub const SPIKE_SPEED: f32 = 10.0;
/// Directional input must exceed this (strictly) before it aims a set or
/// spike.
pub const DIRECTION_DEADZONE: f32 = 0.64;
/// How far a directional set or spike moves the target along the depth axis.
pub const DEPTH_OFFSET: f32 = 4.0;

/// Distance from the net of the bump target, along the court's primary axis.
pub const BUMP_TARGET_X: f32 = 1.0;
/// Distance from the net of the spike target, along the court's primary axis.
pub const SPIKE_TARGET_X: f32 = 8.0;

pub const BUMP_PEAK_HEIGHT: f32 = 5.0;
pub const SET_PEAK_HEIGHT: f32 = 6.0;
/// Below any reachable ball height, so a spike always takes the flat regime.
pub const SPIKE_PEAK_SENTINEL: f32 = -1.0;

/// The arc solver assumes every toss descends as if dropped from this height,
/// whatever the real peak or target height is.
pub const DESCENT_DROP_HEIGHT: f32 = 5.0;

/// `GravityScale` values for a ball with gravity on and off.
pub const GRAVITY_ON: f32 = 1.0;
pub const GRAVITY_OFF: f32 = 0.0;
