use std::time::Duration;

use bevy::input::touch::Touches;
use bevy::platform::collections::HashMap;
use bevy::prelude::*;
use bevy::window::PrimaryWindow;

/// A recognized gesture, in window coordinates (origin at the top-left, Y growing downward).
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct Gesture {
    pub kind: GestureKind,
    /// Where the gesture happened. For swipes, this is where the swipe started.
    pub position: Vec2,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureKind {
    Tap,
    SwipeUp,
}

#[derive(Resource, Debug, Clone)]
pub struct GestureConfig {
    /// A press that moves more than this (in logical pixels) is not a tap.
    pub tap_max_movement: f32,
    pub tap_max_duration: Duration,
    /// Minimal upward travel (in logical pixels) for a swipe.
    pub swipe_min_distance: f32,
    pub swipe_max_duration: Duration,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            tap_max_movement: 10.0,
            tap_max_duration: Duration::from_millis(500),
            swipe_min_distance: 50.0,
            swipe_max_duration: Duration::from_millis(750),
        }
    }
}

/// Decide which gesture, if any, a press-move-release sequence is.
pub fn classify_gesture(
    start: Vec2,
    end: Vec2,
    elapsed: Duration,
    config: &GestureConfig,
) -> Option<Gesture> {
    let delta = end - start;
    if delta.length() <= config.tap_max_movement {
        return (elapsed <= config.tap_max_duration).then_some(Gesture {
            kind: GestureKind::Tap,
            position: end,
        });
    }
    // Window coordinates grow downward, so moving up means a negative Y delta.
    let upward = -delta.y;
    if config.swipe_min_distance <= upward
        && delta.x.abs() < upward
        && elapsed <= config.swipe_max_duration
    {
        return Some(Gesture {
            kind: GestureKind::SwipeUp,
            position: start,
        });
    }
    None
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum PointerId {
    Mouse,
    Touch(u64),
}

#[derive(Debug, Clone, Copy)]
struct Press {
    position: Vec2,
    at: Duration,
}

/// Presses that have not been released yet.
#[derive(Resource, Default, Debug)]
pub(crate) struct GestureTracker {
    presses: HashMap<PointerId, Press>,
}

impl GestureTracker {
    pub(crate) fn press(&mut self, pointer: PointerId, position: Vec2, now: Duration) {
        self.presses.insert(pointer, Press { position, at: now });
    }

    pub(crate) fn cancel(&mut self, pointer: PointerId) {
        self.presses.remove(&pointer);
    }

    pub(crate) fn release(
        &mut self,
        pointer: PointerId,
        position: Vec2,
        now: Duration,
        config: &GestureConfig,
    ) -> Option<Gesture> {
        let press = self.presses.remove(&pointer)?;
        classify_gesture(
            press.position,
            position,
            now.saturating_sub(press.at),
            config,
        )
    }
}

pub(crate) fn track_mouse_gestures(
    buttons: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    time: Res<Time<Real>>,
    config: Res<GestureConfig>,
    mut tracker: ResMut<GestureTracker>,
    mut writer: EventWriter<Gesture>,
) {
    let Ok(window) = windows.single() else {
        return;
    };
    let Some(cursor_position) = window.cursor_position() else {
        if buttons.just_released(MouseButton::Left) {
            tracker.cancel(PointerId::Mouse);
        }
        return;
    };
    let now = time.elapsed();
    if buttons.just_pressed(MouseButton::Left) {
        tracker.press(PointerId::Mouse, cursor_position, now);
    }
    if buttons.just_released(MouseButton::Left) {
        if let Some(gesture) = tracker.release(PointerId::Mouse, cursor_position, now, &config) {
            debug!("Recognized {:?} at {}", gesture.kind, gesture.position);
            writer.write(gesture);
        }
    }
}

pub(crate) fn track_touch_gestures(
    touches: Res<Touches>,
    time: Res<Time<Real>>,
    config: Res<GestureConfig>,
    mut tracker: ResMut<GestureTracker>,
    mut writer: EventWriter<Gesture>,
) {
    let now = time.elapsed();
    for touch in touches.iter_just_pressed() {
        tracker.press(PointerId::Touch(touch.id()), touch.start_position(), now);
    }
    for touch in touches.iter_just_canceled() {
        tracker.cancel(PointerId::Touch(touch.id()));
    }
    for touch in touches.iter_just_released() {
        if let Some(gesture) =
            tracker.release(PointerId::Touch(touch.id()), touch.position(), now, &config)
        {
            debug!("Recognized {:?} at {}", gesture.kind, gesture.position);
            writer.write(gesture);
        }
    }
}
