use crate::parameters::{DESCENT_DROP_HEIGHT, GRAVITY_OFF, GRAVITY_ON};
use bevy::prelude::*;
use bevy_rapier3d::prelude::{GravityScale, Velocity};
use thiserror::Error;

#[derive(Clone, Copy, Debug, Error, PartialEq)]
pub enum TrajectoryError {
    #[error("gravity magnitude must be positive, got {0}")]
    InvalidGravity(f32),
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Regime {
    Arc,
    Flat,
}

impl Regime {
    pub fn select(current_height: f32, peak_height: f32) -> Self {
        if peak_height > current_height {
            Self::Arc
        } else {
            Self::Flat
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Launch {
    pub velocity: Vec3,
    pub use_gravity: bool,
}

impl Launch {
    pub fn apply(&self, velocity: &mut Velocity, gravity: &mut GravityScale) {
        velocity.linvel = self.velocity;
        gravity.0 = if self.use_gravity {
            GRAVITY_ON
        } else {
            GRAVITY_OFF
        };
    }
}

/// Finds the velocity that sends a ball at `current` towards `target`.
///
/// If `peak_height` is above the ball, the ball is tossed up to exactly that
/// height and lands after a flight time that assumes a fixed descent from
/// [`DESCENT_DROP_HEIGHT`]. This is an approximation: the descent only matches
/// reality when the peak sits that far above the target.
///
/// Otherwise the ball is shot in a straight line at `flat_speed` with gravity
/// disabled. A ball already sitting on the target gets zero velocity.
pub fn solve(
    current: Vec3,
    target: Vec3,
    peak_height: f32,
    flat_speed: f32,
    gravity_magnitude: f32,
) -> Result<Launch, TrajectoryError> {
    let regime = Regime::select(current.y, peak_height);
    solve_in(regime, current, target, peak_height, flat_speed, gravity_magnitude)
}

/// Like [`solve`], for a regime the caller has already selected.
pub fn solve_in(
    regime: Regime,
    current: Vec3,
    target: Vec3,
    peak_height: f32,
    flat_speed: f32,
    gravity_magnitude: f32,
) -> Result<Launch, TrajectoryError> {
    match regime {
        Regime::Arc => {
            let g = validate_gravity(gravity_magnitude)?;

            let vy_init = (2.0 * g * (peak_height - current.y)).sqrt();
            let vy_final = (2.0 * g * DESCENT_DROP_HEIGHT).sqrt();
            let t = vy_init / g + vy_final / g;

            let vx = (target.x - current.x) / t;
            let vz = (target.z - current.z) / t;

            Ok(Launch {
                velocity: Vec3::new(vx, vy_init, vz),
                use_gravity: true,
            })
        }
        Regime::Flat => Ok(Launch {
            velocity: (target - current).normalize_or_zero() * flat_speed,
            use_gravity: false,
        }),
    }
}

pub fn validate_gravity(gravity_magnitude: f32) -> Result<f32, TrajectoryError> {
    // Also rejects NaN.
    if gravity_magnitude > 0.0 && gravity_magnitude.is_finite() {
        Ok(gravity_magnitude)
    } else {
        Err(TrajectoryError::InvalidGravity(gravity_magnitude))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const G: f32 = 9.8;
    const EPSILON: f32 = 1e-4;

    #[test]
    fn arc_reaches_peak_height() {
        let launch = solve(Vec3::ZERO, Vec3::new(-1.0, 0.0, 0.0), 5.0, 10.0, G).unwrap();
        assert!((launch.velocity.y - (2.0 * G * 5.0).sqrt()).abs() < EPSILON);
        assert!((launch.velocity.y - 9.899).abs() < 1e-3);
        assert!(launch.use_gravity);
    }

    #[test]
    fn arc_horizontal_speed_covers_distance_in_flight_time() {
        let current = Vec3::new(3.0, 1.0, 2.0);
        let target = Vec3::new(-1.0, 0.0, -2.0);
        let launch = solve(current, target, 6.0, 10.0, G).unwrap();

        let vy_final = (10.0 * G).sqrt();
        let t = launch.velocity.y / G + vy_final / G;
        assert!((launch.velocity.x * t - (target.x - current.x)).abs() < EPSILON);
        assert!((launch.velocity.z * t - (target.z - current.z)).abs() < EPSILON);
    }

    #[test]
    fn peak_at_or_below_ball_selects_flat() {
        assert_eq!(Regime::select(2.0, 2.0), Regime::Flat);
        assert_eq!(Regime::select(2.0, 1.0), Regime::Flat);
        assert_eq!(Regime::select(0.0, -1.0), Regime::Flat);
        assert_eq!(Regime::select(0.0, 0.5), Regime::Arc);
    }

    #[test]
    fn flat_shot_has_exact_speed_and_direction() {
        let current = Vec3::new(2.0, 3.0, 0.0);
        let target = Vec3::new(-8.0, 0.0, 4.0);
        let launch = solve(current, target, -1.0, 10.0, G).unwrap();

        assert!(!launch.use_gravity);
        assert!((launch.velocity.length() - 10.0).abs() < EPSILON);
        let expected = (target - current).normalize();
        assert!(launch.velocity.normalize().abs_diff_eq(expected, EPSILON));
    }

    #[test]
    fn flat_shot_onto_itself_is_zero_not_nan() {
        let p = Vec3::new(1.0, 2.0, 3.0);
        let launch = solve(p, p, -1.0, 10.0, G).unwrap();
        assert_eq!(launch.velocity, Vec3::ZERO);
        assert!(!launch.use_gravity);
    }

    #[test]
    fn flat_shot_ignores_gravity() {
        assert!(solve(Vec3::Y, Vec3::ZERO, -1.0, 10.0, 0.0).is_ok());
    }

    #[test]
    fn arc_rejects_non_positive_gravity() {
        for g in [0.0, -9.8, f32::NAN] {
            let result = solve(Vec3::ZERO, Vec3::X, 5.0, 10.0, g);
            assert!(matches!(result, Err(TrajectoryError::InvalidGravity(_))));
        }
    }

    #[test]
    fn launch_follows_the_given_regime() {
        let current = Vec3::new(1.0, 1.0, 0.0);
        let flat = solve_in(Regime::Flat, current, Vec3::ZERO, 5.0, 10.0, G).unwrap();
        assert!(!flat.use_gravity);
        let arc = solve_in(Regime::Arc, current, Vec3::ZERO, 5.0, 10.0, G).unwrap();
        assert!(arc.use_gravity);
        assert_eq!(arc, solve(current, Vec3::ZERO, 5.0, 10.0, G).unwrap());
    }

    #[test]
    fn apply_writes_velocity_and_gravity_scale() {
        let mut velocity = Velocity::zero();
        let mut gravity = GravityScale(GRAVITY_ON);

        let flat = Launch {
            velocity: Vec3::new(1.0, 2.0, 3.0),
            use_gravity: false,
        };
        flat.apply(&mut velocity, &mut gravity);
        assert_eq!(velocity.linvel, Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(gravity.0, GRAVITY_OFF);

        let arc = Launch {
            velocity: Vec3::Y,
            use_gravity: true,
        };
        arc.apply(&mut velocity, &mut gravity);
        assert_eq!(velocity.linvel, Vec3::Y);
        assert_eq!(gravity.0, GRAVITY_ON);
    }
}
