use bevy::prelude::*;
use bowling_ar::{ArSession, PlaneAnchorAdded};

/// Stands in for an AR runtime: reports a single horizontal plane some time after startup.
pub struct SimulatedPlaneDetectionPlugin {
    pub delay: f32,
    pub anchor: Vec3,
}

impl Plugin for SimulatedPlaneDetectionPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(SimulatedPlaneDetection {
            timer: Timer::from_seconds(self.delay, TimerMode::Once),
            anchor: self.anchor,
        });
        app.add_systems(Update, detect_simulated_plane);
    }
}

#[derive(Resource)]
struct SimulatedPlaneDetection {
    timer: Timer,
    anchor: Vec3,
}

fn detect_simulated_plane(
    time: Res<Time>,
    session: Res<ArSession>,
    mut detection: ResMut<SimulatedPlaneDetection>,
    mut writer: EventWriter<PlaneAnchorAdded>,
) {
    if !session.is_running() {
        return;
    }
    if detection.timer.tick(time.delta()).just_finished() {
        info!("Simulated host detected a plane");
        writer.write(PlaneAnchorAdded::from(detection.anchor));
    }
}
