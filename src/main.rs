use bevy::prelude::*;
use bump_set_spike::GamePlugin;

fn main() {
    App::new()
        .add_plugins((
            DefaultPlugins.set(WindowPlugin {
                primary_window: Some(Window {
                    title: "Bump Set Spike".into(),
                    fit_canvas_to_parent: true,
                    ..default()
                }),
                ..default()
            }),
            GamePlugin,
        ))
        .run();
}
