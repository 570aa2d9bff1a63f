use bevy::prelude::*;
use bevy::window::{PrimaryWindow, WindowFocused};

/// Which planes the host is asked to detect.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum PlaneDetection {
    #[default]
    Horizontal,
}

/// State of the tracking session.
///
/// The session runs while the app is in front of the user and pauses when the primary window loses
/// focus. While paused, plane anchors are ignored and virtual time (and with it the physics
/// simulation) is stopped.
#[derive(Resource, Debug, Clone, PartialEq, Eq)]
pub enum ArSession {
    Running { plane_detection: PlaneDetection },
    Paused { plane_detection: PlaneDetection },
}

impl Default for ArSession {
    fn default() -> Self {
        Self::Running {
            plane_detection: PlaneDetection::Horizontal,
        }
    }
}

impl ArSession {
    pub fn is_running(&self) -> bool {
        matches!(self, Self::Running { .. })
    }

    pub fn plane_detection(&self) -> PlaneDetection {
        match self {
            Self::Running { plane_detection } | Self::Paused { plane_detection } => {
                *plane_detection
            }
        }
    }

    pub fn pause(&mut self) {
        *self = Self::Paused {
            plane_detection: self.plane_detection(),
        };
    }

    pub fn resume(&mut self) {
        *self = Self::Running {
            plane_detection: self.plane_detection(),
        };
    }
}

pub(crate) fn pause_session_on_focus_change(
    mut reader: EventReader<WindowFocused>,
    primary_window: Query<(), With<PrimaryWindow>>,
    mut session: ResMut<ArSession>,
    mut time: ResMut<Time<Virtual>>,
) {
    let Some(focused) = reader
        .read()
        .filter(|event| primary_window.contains(event.window))
        .last()
        .map(|event| event.focused)
    else {
        return;
    };
    match (focused, session.is_running()) {
        (true, false) => {
            info!("Window focused - resuming session");
            session.resume();
            time.unpause();
        }
        (false, true) => {
            info!("Window lost focus - pausing session");
            session.pause();
            time.pause();
        }
        _ => {}
    }
}
