use bevy::color::palettes::css;
use bevy::prelude::*;
use bowling_ar::ArCamera;

/// The device camera of an AR session: a little above the detected plane, looking down the lane.
pub fn setup_camera_and_lights(mut commands: Commands) {
    commands.spawn((
        Name::new("Camera"),
        Camera3d::default(),
        ArCamera,
        Transform::from_xyz(0.0, 1.2, 2.5).looking_at(Vec3::new(0.0, 0.0, -1.5), Vec3::Y),
    ));

    commands.spawn((PointLight::default(), Transform::from_xyz(2.0, 3.0, 2.0)));

    commands.spawn((
        DirectionalLight {
            illuminance: 4000.0,
            shadows_enabled: true,
            ..Default::default()
        },
        Transform::default().looking_at(-Vec3::Y, Vec3::Z),
    ));
}

/// A floor without physics, standing in for the camera feed behind the scene.
pub fn spawn_backdrop(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    commands.spawn((
        Name::new("Backdrop"),
        Mesh3d(meshes.add(Plane3d::default().mesh().size(20.0, 20.0))),
        MeshMaterial3d(materials.add(Color::from(css::DARK_SLATE_GRAY))),
        Transform::from_xyz(0.0, -0.005, 0.0),
    ));
}
