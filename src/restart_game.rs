use crate::{
    ball::{BallAssets, BallBundle},
    boundaries::Boundaries,
    court::{Court, CourtAssets, CourtParams},
    player::{PlayerAssets, PlayerBundle},
    settings::GameSettings,
};
use bevy::{
    ecs::system::{Command, RunSystemOnce},
    prelude::*,
};
use smooth_bevy_cameras::controllers::orbit::OrbitCameraBundle;

const SERVE_POSITION: Vec3 = Vec3::new(4.0, 3.0, 0.0);
const PLAYER_START: Vec3 = Vec3::new(5.0, 0.0, 0.0);

pub struct RestartGame;

impl Command for RestartGame {
    fn apply(self, world: &mut World) {
        world.run_system_once(destroy_scene);
        world.run_system_once(start_game);
    }
}

fn destroy_scene(mut commands: Commands, all_scene: Query<Entity, With<GlobalTransform>>) {
    for entity in &all_scene {
        commands.entity(entity).despawn();
    }
}

pub fn start_game(
    mut commands: Commands,
    settings: Res<GameSettings>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let court_params = CourtParams::default();
    let he = court_params.half_extents();
    let court_assets = CourtAssets::new(court_params, &mut meshes, &mut materials);
    Court::spawn(&mut commands, &court_assets);

    commands.spawn(Camera3dBundle::default()).insert(OrbitCameraBundle::new(
        settings.make_camera(),
        Vec3::new(0.0, 10.0, 16.0),
        Vec3::ZERO,
        Vec3::Y,
    ));

    let light_positions = [Vec3::new(-he.x / 2.0, 8.0, 0.0), Vec3::new(he.x / 2.0, 8.0, 0.0)];
    for light_position in light_positions {
        commands.spawn(PointLightBundle {
            point_light: PointLight {
                intensity: 3000.0,
                range: 40.0,
                shadows_enabled: true,
                ..default()
            },
            transform: Transform::from_translation(light_position),
            ..default()
        });
    }

    let ball_assets = BallAssets::new(&mut meshes, &mut materials);
    let ball = commands
        .spawn(BallBundle::new(&ball_assets, SERVE_POSITION))
        .id();

    // Stand on the floor.
    let player_assets = PlayerAssets::new(Color::rgb_u8(52, 120, 220), &mut meshes, &mut materials);
    let stand_height = 0.5 * player_assets.capsule_length + player_assets.capsule_radius;
    let mut player = PlayerBundle::new(
        &player_assets,
        ball,
        PLAYER_START + stand_height * Vec3::Y,
    );
    player.player.interaction_radius = settings.interaction_radius;
    player.player.spike_speed = settings.spike_speed;
    commands.spawn(player);

    commands.insert_resource(Boundaries {
        min: Vec3::new(-he.x, stand_height, -he.z),
        max: Vec3::new(he.x, stand_height, he.z),
    });
    commands.insert_resource(ball_assets);
    commands.insert_resource(player_assets);
}
