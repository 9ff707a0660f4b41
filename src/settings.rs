use crate::{
    parameters::{INTERACTION_RADIUS, SPIKE_SPEED},
    player::Player,
};
use bevy::{app::AppExit, prelude::*};
use bevy_pkv::PkvStore;
use serde::{Deserialize, Serialize};
use smooth_bevy_cameras::controllers::orbit::OrbitCameraController;

#[derive(Event)]
pub struct SaveSettings;

#[derive(Deserialize, Resource, Serialize)]
#[serde(default)]
pub struct GameSettings {
    pub hide_menu_when_game_starts: bool,
    pub interaction_radius: f32,
    pub spike_speed: f32,
    pub translate_sensitivity: f32,
    pub rotate_sensitivity: f32,
    pub zoom_sensitivity: f32,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            hide_menu_when_game_starts: false,
            interaction_radius: INTERACTION_RADIUS,
            spike_speed: SPIKE_SPEED,
            translate_sensitivity: 1.0,
            rotate_sensitivity: 0.1,
            zoom_sensitivity: 0.1,
        }
    }
}

impl GameSettings {
    const KEY: &'static str = "settings";

    pub fn load(pkv: Res<PkvStore>, mut settings: ResMut<Self>) {
        match pkv.get::<Self>(Self::KEY) {
            Ok(loaded) => {
                info!("Loaded settings");
                *settings = loaded;
            }
            Err(e) => info!("Using default settings: {e}"),
        }
    }

    /// Must run in `Last` schedule.
    pub fn save_on_exit_or_request(
        mut exit: EventReader<AppExit>,
        mut requests: EventReader<SaveSettings>,
        settings: Res<Self>,
        mut pkv: ResMut<PkvStore>,
    ) {
        let exiting = exit.read().last().is_some();
        let requested = requests.read().last().is_some();
        if !(exiting || requested) {
            return;
        }
        info!("Saving settings");
        if let Err(e) = pkv.set(Self::KEY, &*settings) {
            warn!("Failed to save settings: {e}");
        }
    }

    pub fn apply_to_players(settings: Res<Self>, mut players: Query<&mut Player>) {
        if !settings.is_changed() {
            return;
        }
        for mut player in &mut players {
            player.interaction_radius = settings.interaction_radius;
            player.spike_speed = settings.spike_speed;
        }
    }

    pub fn make_camera(&self) -> OrbitCameraController {
        let mut controller = OrbitCameraController::default();
        self.apply_to_camera(&mut controller);
        controller
    }

    pub fn apply_to_camera(&self, controller: &mut OrbitCameraController) {
        controller.mouse_rotate_sensitivity = Vec2::splat(self.rotate_sensitivity);
        controller.mouse_translate_sensitivity = Vec2::splat(self.translate_sensitivity);
        controller.mouse_wheel_zoom_sensitivity = self.zoom_sensitivity;
    }
}
