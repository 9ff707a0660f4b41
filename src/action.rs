use crate::{
    parameters::{
        BUMP_PEAK_HEIGHT, BUMP_TARGET_X, DEPTH_OFFSET, DIRECTION_DEADZONE, SET_PEAK_HEIGHT,
        SPIKE_PEAK_SENTINEL, SPIKE_TARGET_X,
    },
    trajectory::Regime,
};
use bevy::prelude::*;

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Action {
    #[default]
    None,
    Bump,
    Set,
    Spike,
}

#[derive(Clone, Copy, Component, Debug, Default)]
pub struct ActionInput {
    pub bump: bool,
    pub set: bool,
    pub spike: bool,
    /// In `[-1, 1]²`. Only `y` (towards/away from the camera) aims a shot.
    pub direction: Vec2,
}

impl ActionInput {
    /// At most one action is active, with priority Bump > Set > Spike.
    pub fn held_action(&self) -> Action {
        if self.bump {
            Action::Bump
        } else if self.set {
            Action::Set
        } else if self.spike {
            Action::Spike
        } else {
            Action::None
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ActionPlan {
    pub action: Action,
    pub target: Vec3,
    /// Negative for shots that must stay flat.
    pub peak_height: f32,
    pub regime: Regime,
}

impl ActionPlan {
    pub fn new(
        action: Action,
        ball_pos: Vec3,
        direction: Vec2,
        last_bump_target: Vec3,
    ) -> Option<Self> {
        let (target, peak_height) = match action {
            Action::None => return None,
            Action::Bump => (bump_target(ball_pos), BUMP_PEAK_HEIGHT),
            Action::Set => (
                last_bump_target + depth_offset(direction) * Vec3::Z,
                SET_PEAK_HEIGHT,
            ),
            Action::Spike => (
                spike_target(ball_pos) + depth_offset(direction) * Vec3::Z,
                SPIKE_PEAK_SENTINEL,
            ),
        };
        Some(Self {
            action,
            target,
            peak_height,
            regime: Regime::select(ball_pos.y, peak_height),
        })
    }

    pub fn uses_arc(&self) -> bool {
        self.regime == Regime::Arc
    }
}

pub fn bump_target(ball_pos: Vec3) -> Vec3 {
    let x = if ball_pos.x < 0.0 {
        BUMP_TARGET_X
    } else {
        -BUMP_TARGET_X
    };
    Vec3::new(x, 0.0, 0.0)
}

pub fn spike_target(ball_pos: Vec3) -> Vec3 {
    let x = if ball_pos.x > 0.0 {
        -SPIKE_TARGET_X
    } else {
        SPIKE_TARGET_X
    };
    Vec3::new(x, 0.0, 0.0)
}

/// Inputs exactly on the deadzone don't count.
pub fn depth_offset(direction: Vec2) -> f32 {
    if direction.y < -DIRECTION_DEADZONE {
        -DEPTH_OFFSET
    } else if direction.y > DIRECTION_DEADZONE {
        DEPTH_OFFSET
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn priority_is_bump_then_set_then_spike() {
        let all = ActionInput {
            bump: true,
            set: true,
            spike: true,
            ..default()
        };
        assert_eq!(all.held_action(), Action::Bump);

        let set_spike = ActionInput {
            set: true,
            spike: true,
            ..default()
        };
        assert_eq!(set_spike.held_action(), Action::Set);

        let spike = ActionInput {
            spike: true,
            ..default()
        };
        assert_eq!(spike.held_action(), Action::Spike);

        assert_eq!(ActionInput::default().held_action(), Action::None);
    }

    #[test]
    fn bump_goes_to_the_other_side() {
        assert_eq!(bump_target(Vec3::new(3.0, 1.0, 2.0)).x, -1.0);
        assert_eq!(bump_target(Vec3::new(-3.0, 1.0, 2.0)).x, 1.0);
    }

    #[test]
    fn alternating_bumps_alternate_sides() {
        let mut ball_x: f32 = 3.0;
        for _ in 0..6 {
            let target = bump_target(Vec3::new(ball_x, 0.5, 0.0));
            assert!(target.x.signum() != ball_x.signum());
            // The ball lands where it was sent.
            ball_x = target.x;
        }
    }

    #[test]
    fn spike_goes_deep_on_the_other_side() {
        assert_eq!(spike_target(Vec3::new(2.0, 3.0, 0.0)), Vec3::new(-8.0, 0.0, 0.0));
        assert_eq!(spike_target(Vec3::new(-2.0, 3.0, 0.0)), Vec3::new(8.0, 0.0, 0.0));
    }

    #[test]
    fn depth_offset_respects_deadzone() {
        assert_eq!(depth_offset(Vec2::new(0.0, 0.0)), 0.0);
        assert_eq!(depth_offset(Vec2::new(1.0, 0.64)), 0.0);
        assert_eq!(depth_offset(Vec2::new(0.0, -0.64)), 0.0);
        assert_eq!(depth_offset(Vec2::new(0.0, 0.65)), 4.0);
        assert_eq!(depth_offset(Vec2::new(0.0, -0.65)), -4.0);
        assert_eq!(depth_offset(Vec2::new(0.0, 1.0)), 4.0);
        assert_eq!(depth_offset(Vec2::new(0.0, -1.0)), -4.0);
    }

    #[test]
    fn set_aims_from_last_bump_target() {
        let last_bump = Vec3::new(-1.0, 0.0, 0.0);
        let plan = ActionPlan::new(Action::Set, Vec3::new(-1.0, 1.0, 0.0), Vec2::Y, last_bump)
            .unwrap();
        assert_eq!(plan.target, Vec3::new(-1.0, 0.0, 4.0));
        assert_eq!(plan.peak_height, SET_PEAK_HEIGHT);
        assert!(plan.uses_arc());

        let plan = ActionPlan::new(Action::Set, Vec3::ZERO, Vec2::ZERO, last_bump).unwrap();
        assert_eq!(plan.target, last_bump);
    }

    #[test]
    fn spike_is_always_flat() {
        let plan = ActionPlan::new(
            Action::Spike,
            Vec3::new(1.0, 0.0, 0.0),
            Vec2::new(0.0, -0.9),
            Vec3::ZERO,
        )
        .unwrap();
        assert_eq!(plan.target, Vec3::new(-8.0, 0.0, -4.0));
        assert_eq!(plan.peak_height, SPIKE_PEAK_SENTINEL);
        assert!(!plan.uses_arc());
    }

    #[test]
    fn bump_above_peak_height_is_flat() {
        let plan = ActionPlan::new(Action::Bump, Vec3::new(1.0, 7.0, 0.0), Vec2::ZERO, Vec3::ZERO)
            .unwrap();
        assert!(!plan.uses_arc());
    }

    #[test]
    fn no_action_has_no_plan() {
        assert!(ActionPlan::new(Action::None, Vec3::ZERO, Vec2::Y, Vec3::ZERO).is_none());
    }
}
