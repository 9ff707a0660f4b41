use crate::parameters::{GRAVITY_OFF, GRAVITY_ON};
use bevy::prelude::*;
use bevy_rapier3d::prelude::{CollisionEvent, GravityScale};

/// Turns gravity back on the first time a flat shot hits something.
#[derive(Clone, Copy, Component, Default)]
pub struct GravityToggle;

impl GravityToggle {
    pub fn restore_on_collision(
        mut events: EventReader<CollisionEvent>,
        mut bodies: Query<&mut GravityScale, With<GravityToggle>>,
    ) {
        for event in events.read() {
            let &CollisionEvent::Started(e1, e2, _flags) = event else {
                continue;
            };
            for entity in [e1, e2] {
                let Ok(mut gravity) = bodies.get_mut(entity) else {
                    continue;
                };
                if gravity.0 == GRAVITY_OFF {
                    debug!("Restoring gravity on {entity:?}");
                    gravity.0 = GRAVITY_ON;
                }
            }
        }
    }
}
