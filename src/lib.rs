pub mod action;
mod ball;
mod boundaries;
mod collision;
mod controls;
mod court;
pub mod error;
mod game_ui;
pub mod parameters;
pub mod player;
mod restart_game;
mod settings;
pub mod trajectory;

pub use ball::{Ball, BallAssets, BallBundle};
pub use collision::GravityToggle;
pub use controls::ActionBindings;

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts, EguiPlugin};
use bevy_pkv::PkvStore;
use bevy_rapier3d::prelude::*;
use game_ui::GameUi;
use player::{BallStruck, Player};
use restart_game::start_game;
use settings::{GameSettings, SaveSettings};
use smooth_bevy_cameras::controllers::orbit::OrbitCameraPlugin;
use smooth_bevy_cameras::LookTransformPlugin;

/// Bumping, setting and spiking, without any rendering or input devices.
///
/// Expects a physics backend to provide `RapierConfiguration` and
/// `CollisionEvent`s, and something to fill in each player's `ActionInput`.
pub struct StrikePlugin;

impl Plugin for StrikePlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<BallStruck>()
            .add_event::<CollisionEvent>()
            .add_systems(
                Update,
                // Contacts from the last physics step end the previous
                // flight, so they must be handled before this tick's strike.
                (
                    Player::attach_pending,
                    GravityToggle::restore_on_collision,
                    Player::strike_ball,
                )
                    .chain(),
            )
            .add_systems(Last, Player::detach_on_app_exit);
    }
}

/// The playable demo: a court, a ball and one keyboard-driven player.
pub struct GamePlugin;

impl Plugin for GamePlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins((
            EguiPlugin,
            RapierPhysicsPlugin::<NoUserData>::default(),
            // RapierDebugRenderPlugin::default(),
            LookTransformPlugin,
            OrbitCameraPlugin::default(),
            StrikePlugin,
        ))
        .add_event::<SaveSettings>()
        .insert_resource(PkvStore::new("bonsairobo", "BumpSetSpike"))
        .insert_resource(ClearColor(Color::rgb_u8(52, 75, 99)))
        .init_resource::<ActionBindings>()
        .init_resource::<GameSettings>()
        .init_resource::<GameUi>()
        .add_systems(
            Startup,
            (
                GameSettings::load,
                start_game.after(GameSettings::load),
                configure_egui_visuals,
            ),
        )
        .add_systems(
            Update,
            (
                ActionBindings::sample_keyboard,
                ActionBindings::move_players,
                GameSettings::apply_to_players,
            )
                .before(Player::attach_pending),
        )
        .add_systems(
            Update,
            (
                GameUi::toggle,
                GameUi::update,
                GameUi::record_strikes.after(Player::strike_ball),
            ),
        )
        .add_systems(Last, GameSettings::save_on_exit_or_request);
    }
}

fn configure_egui_visuals(mut contexts: EguiContexts) {
    contexts.ctx_mut().set_visuals(egui::Visuals {
        window_rounding: 0.0.into(),
        ..Default::default()
    });
}
