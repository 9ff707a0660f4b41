use crate::{action::ActionInput, boundaries::Boundaries, player::Player};
use bevy::prelude::*;

pub const WALK_SPEED: f32 = 4.0;

#[derive(Resource)]
pub struct ActionBindings {
    pub bump: KeyCode,
    pub set: KeyCode,
    pub spike: KeyCode,
    pub aim_up: KeyCode,
    pub aim_down: KeyCode,
    pub forward: KeyCode,
    pub back: KeyCode,
    pub left: KeyCode,
    pub right: KeyCode,
}

impl Default for ActionBindings {
    fn default() -> Self {
        Self {
            bump: KeyCode::J,
            set: KeyCode::K,
            spike: KeyCode::L,
            aim_up: KeyCode::Up,
            aim_down: KeyCode::Down,
            forward: KeyCode::W,
            back: KeyCode::S,
            left: KeyCode::A,
            right: KeyCode::D,
        }
    }
}

impl ActionBindings {
    fn axis(keys: &Input<KeyCode>, negative: KeyCode, positive: KeyCode) -> f32 {
        let mut value = 0.0;
        if keys.pressed(negative) {
            value -= 1.0;
        }
        if keys.pressed(positive) {
            value += 1.0;
        }
        value
    }

    pub fn snapshot(&self, keys: &Input<KeyCode>) -> ActionInput {
        ActionInput {
            bump: keys.pressed(self.bump),
            set: keys.pressed(self.set),
            spike: keys.pressed(self.spike),
            direction: Vec2::new(0.0, Self::axis(keys, self.aim_down, self.aim_up)),
        }
    }

    /// Samples held keys once per tick, so every system sees the same input.
    pub fn sample_keyboard(
        bindings: Res<Self>,
        keys: Res<Input<KeyCode>>,
        mut inputs: Query<&mut ActionInput, With<Player>>,
    ) {
        let snapshot = bindings.snapshot(&keys);
        for mut input in &mut inputs {
            *input = snapshot;
        }
    }

    pub fn move_players(
        time: Res<Time>,
        bindings: Res<Self>,
        keys: Res<Input<KeyCode>>,
        bounds: Res<Boundaries>,
        mut players: Query<&mut Transform, (With<Player>, With<ActionInput>)>,
    ) {
        let walk = Vec3::new(
            Self::axis(&keys, bindings.left, bindings.right),
            0.0,
            Self::axis(&keys, bindings.forward, bindings.back),
        );
        if walk == Vec3::ZERO {
            return;
        }
        let delta = WALK_SPEED * time.delta_seconds() * walk.normalize();
        for mut tfm in &mut players {
            let position = tfm.translation + delta;
            tfm.translation = position.clamp(bounds.min, bounds.max);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_reads_held_keys() {
        let bindings = ActionBindings::default();
        let mut keys = Input::<KeyCode>::default();
        keys.press(KeyCode::K);
        keys.press(KeyCode::L);
        keys.press(KeyCode::Down);

        let input = bindings.snapshot(&keys);
        assert!(!input.bump);
        assert!(input.set);
        assert!(input.spike);
        assert_eq!(input.direction, Vec2::new(0.0, -1.0));
    }

    #[test]
    fn opposite_aim_keys_cancel() {
        let bindings = ActionBindings::default();
        let mut keys = Input::<KeyCode>::default();
        keys.press(KeyCode::Up);
        keys.press(KeyCode::Down);
        assert_eq!(bindings.snapshot(&keys).direction, Vec2::ZERO);
    }

    #[test]
    fn sampling_writes_every_player() {
        let mut app = App::new();
        app.init_resource::<ActionBindings>()
            .init_resource::<Input<KeyCode>>()
            .add_systems(Update, ActionBindings::sample_keyboard);
        let player = app
            .world
            .spawn((Player::new(Entity::PLACEHOLDER), ActionInput::default()))
            .id();

        app.world.resource_mut::<Input<KeyCode>>().press(KeyCode::J);
        app.update();
        assert!(app.world.get::<ActionInput>(player).unwrap().bump);

        app.world.resource_mut::<Input<KeyCode>>().release(KeyCode::J);
        app.update();
        assert!(!app.world.get::<ActionInput>(player).unwrap().bump);
    }
}
