use bevy::prelude::*;
use bevy_rapier3d::prelude::{Collider, RigidBody};

/// The playing area. The net runs along Z at X = 0, so X is the court's
/// primary axis and Z its depth.
#[derive(Component)]
pub struct Court;

impl Court {
    pub fn spawn(commands: &mut Commands, assets: &CourtAssets) {
        let params = &assets.params;
        let he = params.half_extents();
        let ht = params.half_thickness();

        // To keep the top of the floor at Y=0.0.
        let y_offset = -ht;

        // floor
        commands.spawn((
            Court,
            PbrBundle {
                mesh: assets.floor_mesh.clone(),
                material: assets.floor_material.clone(),
                transform: Transform::from_translation(Vec3::new(0.0, y_offset, 0.0)),
                ..default()
            },
            RigidBody::Fixed,
            Collider::cuboid(he.x, ht, he.z),
        ));

        // net
        let net_half_height = 0.5 * params.net_height;
        commands.spawn((
            Court,
            PbrBundle {
                mesh: assets.net_mesh.clone(),
                material: assets.net_material.clone(),
                transform: Transform::from_translation(Vec3::new(0.0, net_half_height, 0.0)),
                ..default()
            },
            RigidBody::Fixed,
            Collider::cuboid(params.net_half_thickness(), net_half_height, he.z),
        ));

        // Transparent walls keep the ball in play.
        let wall_y = he.y - ht;
        let x_walls = [Vec3::new(-he.x, wall_y, 0.0), Vec3::new(he.x, wall_y, 0.0)];
        for position in x_walls {
            commands.spawn((
                Court,
                PbrBundle {
                    mesh: assets.x_wall_mesh.clone(),
                    material: assets.wall_material.clone(),
                    transform: Transform::from_translation(position),
                    ..default()
                },
                RigidBody::Fixed,
                Collider::cuboid(ht, he.y, he.z),
            ));
        }
        let z_walls = [Vec3::new(0.0, wall_y, -he.z), Vec3::new(0.0, wall_y, he.z)];
        for position in z_walls {
            commands.spawn((
                Court,
                PbrBundle {
                    mesh: assets.z_wall_mesh.clone(),
                    material: assets.wall_material.clone(),
                    transform: Transform::from_translation(position),
                    ..default()
                },
                RigidBody::Fixed,
                Collider::cuboid(he.x, he.y, ht),
            ));
        }
    }
}

#[derive(Clone, Copy)]
pub struct CourtParams {
    /// Including the free zone around the lines.
    pub size: Vec3,
    pub thickness: f32,
    pub net_height: f32,
    pub net_thickness: f32,
    pub wall_alpha: f32,
}

impl Default for CourtParams {
    fn default() -> Self {
        Self {
            size: Vec3::new(24.0, 12.0, 15.0),
            thickness: 0.5,
            net_height: 2.43,
            net_thickness: 0.05,
            wall_alpha: 0.05,
        }
    }
}

impl CourtParams {
    pub fn half_extents(&self) -> Vec3 {
        0.5 * self.size
    }

    pub fn half_thickness(&self) -> f32 {
        0.5 * self.thickness
    }

    pub fn net_half_thickness(&self) -> f32 {
        0.5 * self.net_thickness
    }
}

pub struct CourtAssets {
    pub params: CourtParams,
    pub floor_mesh: Handle<Mesh>,
    pub net_mesh: Handle<Mesh>,
    pub x_wall_mesh: Handle<Mesh>,
    pub z_wall_mesh: Handle<Mesh>,
    pub floor_material: Handle<StandardMaterial>,
    pub net_material: Handle<StandardMaterial>,
    pub wall_material: Handle<StandardMaterial>,
}

impl CourtAssets {
    pub fn new(
        params: CourtParams,
        meshes: &mut Assets<Mesh>,
        materials: &mut Assets<StandardMaterial>,
    ) -> Self {
        let he = params.half_extents();
        let ht = params.half_thickness();
        let nh = 0.5 * params.net_height;
        let nt = params.net_half_thickness();
        Self {
            params,
            floor_mesh: meshes.add(shape::Box::new(2.0 * he.x, 2.0 * ht, 2.0 * he.z).into()),
            net_mesh: meshes.add(shape::Box::new(2.0 * nt, 2.0 * nh, 2.0 * he.z).into()),
            x_wall_mesh: meshes.add(shape::Box::new(2.0 * ht, 2.0 * he.y, 2.0 * he.z).into()),
            z_wall_mesh: meshes.add(shape::Box::new(2.0 * he.x, 2.0 * he.y, 2.0 * ht).into()),
            floor_material: materials.add(Color::rgb_u8(214, 150, 90).into()),
            net_material: materials.add(Color::WHITE.with_a(0.6).into()),
            wall_material: materials.add(Color::WHITE.with_a(params.wall_alpha).into()),
        }
    }
}
