use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use leafwing_input_manager::prelude::*;

use crate::components::camera::{RigPose, ThirdPersonCamera};
use crate::components::player::PlayerBall;
use crate::features::rig::{CameraRig, UnobstructedProbe};
use crate::plugins::camera_rig::RigSet;
use crate::plugins::input::{get_camera_input_map, get_player_input_map};
use crate::resources::{RigConfig, ShakePresetTable};
use crate::systems::player::{apply_cursor_capture, player_ball_movement, toggle_mouse_mode};

const BALL_RADIUS: f32 = 0.5;
const GROUND_SIZE: f32 = 40.0;

/// Player-ball scene: a ground plane, a light, a ball and the rig camera following it.
pub struct DemoPlugin;

impl Plugin for DemoPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, (spawn_scene, spawn_player_and_camera))
            .add_systems(Update, toggle_mouse_mode)
            .add_systems(FixedUpdate, player_ball_movement.before(RigSet::Tick));
    }
}

fn spawn_scene(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    commands.spawn((
        Mesh3d(meshes.add(Plane3d::default().mesh().size(GROUND_SIZE, GROUND_SIZE))),
        MeshMaterial3d(materials.add(Color::srgb(0.3, 0.5, 0.3))),
    ));

    commands.spawn((
        DirectionalLight {
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(4.0, 8.0, 4.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));
}

fn spawn_player_and_camera(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    config: Res<RigConfig>,
    presets: Res<ShakePresetTable>,
    mut windows: Query<&mut Window, With<PrimaryWindow>>,
) {
    let ball = commands
        .spawn((
            Mesh3d(meshes.add(Sphere::new(BALL_RADIUS))),
            MeshMaterial3d(materials.add(Color::srgb(0.8, 0.2, 0.2))),
            Transform::from_xyz(0.0, BALL_RADIUS, 0.0),
            PlayerBall::default(),
            InputManagerBundle::with_map(get_player_input_map()),
        ))
        .id();

    let rig = match CameraRig::new(config.clone(), presets.clone()) {
        Ok(rig) => rig.with_probe(UnobstructedProbe).with_default_shaker(),
        Err(e) => {
            error!("Could not build camera rig: {}", e);
            return;
        }
    };

    if rig.mouse_follow() {
        if let Ok(mut window) = windows.get_single_mut() {
            apply_cursor_capture(&mut window, true);
        }
    }

    let start = Transform::from_xyz(0.0, config.spring_length, config.spring_length)
        .looking_at(Vec3::ZERO, Vec3::Y);
    let mut projection = Projection::Perspective(PerspectiveProjection::default());
    config.apply_projection(&mut projection);

    commands.spawn((
        Camera3d::default(),
        projection,
        start,
        RigPose::from_transform(&start),
        ThirdPersonCamera::new(rig, ball),
        InputManagerBundle::with_map(get_camera_input_map()),
    ));

    info!("Demo scene ready, ball {:?}", ball);
}
