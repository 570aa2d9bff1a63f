use avian3d::prelude::*;
use bevy::diagnostic::{FrameTimeDiagnosticsPlugin, LogDiagnosticsPlugin};
use bevy::prelude::*;
use bowling_ar::prelude::*;
use bowling_ar::AnchorPlaneConfig;

use bowling_ar_demos::app_setup_options::AppSetupConfiguration;
use bowling_ar_demos::scene_setup::{setup_camera_and_lights, spawn_backdrop};
use bowling_ar_demos::simulated_host::SimulatedPlaneDetectionPlugin;

fn main() {
    let app_setup_configuration = AppSetupConfiguration::from_environment();

    let mut app = App::new();
    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Bowling AR".to_owned(),
            ..Default::default()
        }),
        ..Default::default()
    }));
    app.insert_resource(app_setup_configuration.clone());

    app.add_plugins(PhysicsPlugins::default());
    if app_setup_configuration.debug_physics {
        app.add_plugins(PhysicsDebugPlugin::default());
    }
    if app_setup_configuration.show_statistics {
        app.add_plugins((
            FrameTimeDiagnosticsPlugin::default(),
            LogDiagnosticsPlugin::default(),
        ));
    }

    // The plugin picks these up instead of its defaults.
    app.insert_resource(InteractionConfig {
        pin_limit: app_setup_configuration.pin_limit,
        ..Default::default()
    });
    app.insert_resource(AnchorPlaneConfig {
        visible: app_setup_configuration.show_planes,
        ..Default::default()
    });
    app.insert_resource(app_setup_configuration.scene_asset_source());
    app.add_plugins(BowlingArPlugin::default());

    app.add_plugins(SimulatedPlaneDetectionPlugin {
        delay: app_setup_configuration.anchor_delay,
        anchor: app_setup_configuration.anchor_height * Vec3::Y,
    });
    app.add_systems(Startup, (setup_camera_and_lights, spawn_backdrop));
    app.run();
}
