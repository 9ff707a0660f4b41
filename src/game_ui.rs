use crate::{
    player::{Attachment, BallStruck, Player},
    restart_game::RestartGame,
    settings::{GameSettings, SaveSettings},
};
use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};
use smooth_bevy_cameras::controllers::orbit::OrbitCameraController;

#[derive(Resource)]
pub struct GameUi {
    pub show: bool,
    pub last_strike: Option<BallStruck>,
}

impl Default for GameUi {
    fn default() -> Self {
        Self {
            show: true,
            last_strike: None,
        }
    }
}

impl GameUi {
    pub fn toggle(mut game_ui: ResMut<Self>, key: Res<Input<KeyCode>>) {
        if key.just_pressed(KeyCode::G) {
            game_ui.show ^= true;
        }
    }

    pub fn record_strikes(mut game_ui: ResMut<Self>, mut strikes: EventReader<BallStruck>) {
        if let Some(strike) = strikes.read().last() {
            game_ui.last_strike = Some(*strike);
        }
    }

    #[allow(clippy::too_many_arguments)]
    pub fn update(
        mut commands: Commands,
        mut save_events: EventWriter<SaveSettings>,
        mut game_ui: ResMut<Self>,
        mut settings: ResMut<GameSettings>,
        mut contexts: EguiContexts,
        mut cameras: Query<&mut OrbitCameraController>,
        players: Query<&Player>,
    ) {
        if !game_ui.show {
            return;
        }

        let mut cam_changed = false;
        egui::Window::new("Bump Set Spike")
            .anchor(egui::Align2::LEFT_TOP, egui::vec2(8.0, 8.0))
            .resizable(false)
            .movable(false)
            .collapsible(false)
            .show(contexts.ctx_mut(), |ui| {
                ui.vertical_centered(|ui| {
                    if ui.button("Restart Game").clicked() {
                        game_ui.show = !settings.hide_menu_when_game_starts;
                        game_ui.last_strike = None;
                        commands.add(RestartGame);
                    }
                    if ui.button("Save Settings").clicked() {
                        save_events.send(SaveSettings);
                    }
                    ui.checkbox(
                        &mut settings.hide_menu_when_game_starts,
                        "Hide this menu when game starts",
                    );
                });
                ui.separator();

                ui.vertical_centered(|ui| {
                    ui.heading("Player Settings");
                });
                ui.separator();
                ui.add(
                    egui::Slider::new(&mut settings.interaction_radius, 0.0..=10.0)
                        .text("Interaction Radius"),
                );
                ui.add(egui::Slider::new(&mut settings.spike_speed, 1.0..=30.0).text("Spike Speed"));
                ui.separator();

                for player in &players {
                    let status = match player.attachment() {
                        Attachment::Pending => "waiting".to_string(),
                        Attachment::Attached => format!("{:?}", player.active()),
                        Attachment::Faulted(e) => format!("broken: {e}"),
                        Attachment::Detached => "detached".to_string(),
                    };
                    ui.label(format!("Player: {status}"));
                }
                match &game_ui.last_strike {
                    Some(strike) => {
                        let regime = if strike.launch.use_gravity {
                            "arc"
                        } else {
                            "flat"
                        };
                        ui.label(format!(
                            "Last strike: {:?} ({regime}) to ({:.1}, {:.1}, {:.1})",
                            strike.plan.action,
                            strike.plan.target.x,
                            strike.plan.target.y,
                            strike.plan.target.z,
                        ));
                    }
                    None => {
                        ui.label("Last strike: none");
                    }
                }
                ui.separator();

                ui.collapsing("Controls", |ui| {
                    egui::Grid::new("controls")
                        .striped(true)
                        .min_col_width(100.0)
                        .show(ui, |ui| {
                            for (key, action) in [
                                ("G", "toggle this window"),
                                ("W A S D", "move"),
                                ("J", "bump"),
                                ("K", "set"),
                                ("L", "spike"),
                                ("Up / Down", "aim a set or spike"),
                                ("Ctrl + Mouse", "rotate camera"),
                                ("Right Click Drag", "translate camera"),
                                ("Mouse Wheel", "zoom"),
                            ] {
                                ui.label(key);
                                ui.label(action);
                                ui.end_row();
                            }
                        });
                });
                ui.separator();

                ui.collapsing("Camera Settings", |ui| {
                    cam_changed |= ui
                        .add(
                            egui::Slider::new(&mut settings.rotate_sensitivity, 0.01..=0.5)
                                .text("Rotate Sensitivity"),
                        )
                        .changed();
                    cam_changed |= ui
                        .add(
                            egui::Slider::new(&mut settings.translate_sensitivity, 0.01..=5.0)
                                .text("Translate Sensitivity"),
                        )
                        .changed();
                    cam_changed |= ui
                        .add(
                            egui::Slider::new(&mut settings.zoom_sensitivity, 0.01..=1.0)
                                .text("Zoom Sensitivity"),
                        )
                        .changed();
                });
            });

        if cam_changed {
            if let Ok(mut cam) = cameras.get_single_mut() {
                settings.apply_to_camera(&mut cam);
            };
        }
    }
}
