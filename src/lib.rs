//! # Bowling AR
//!
//! Tap on a detected plane to set up bowling pins, tap once more to drop the ball, and swipe up on
//! the ball to send it down the lane.
//!
//! The crate does not detect planes, render, or simulate anything by itself. Plane detection is
//! done by whatever host drives the app (an AR runtime, or a simulated one on desktop), which
//! reports each discovered plane by sending a [`PlaneAnchorAdded`] event. Rendering and assets are
//! Bevy's, and the physics (rigid bodies, collision layers, ray casting, impulses) is
//! [avian3d](https://docs.rs/avian3d)'s.
//!
//! ## Quick instructions
//!
//! 1. Add `avian3d`'s `PhysicsPlugins` and [`BowlingArPlugin`]:
//!    ```no_run
//!    # use bevy::prelude::*;
//!    # use avian3d::prelude::*;
//!    # use bowling_ar::prelude::*;
//!    # let mut app = App::new();
//!    app.add_plugins((
//!        DefaultPlugins,
//!        PhysicsPlugins::default(),
//!        BowlingArPlugin::default(),
//!    ));
//!    ```
//! 2. Tag the camera the scene is rendered through with [`ArCamera`]. Gestures are hit-tested
//!    through it.
//! 3. Send [`PlaneAnchorAdded`] whenever the host discovers a horizontal plane.
//! 4. Optionally insert [`SceneAssetSource::Gltf`] pointing at a scene with nodes named `"pin"`
//!    and `"ball"`. Without it, a procedural set of primitive meshes is used.
//!
//! The interaction itself is a one-way state machine kept in [`InteractionController`]: the
//! first five successful taps place pins, and every tap after that places a ball.
mod anchors;
mod controller;
mod gestures;
mod layers;
mod placement;
mod scene_asset;
mod session;
mod status_overlay;

pub mod prelude;

pub use anchors::{AnchorPlane, AnchorPlaneConfig, PlaneAnchorAdded};
pub use controller::{InteractionConfig, InteractionController, PlacedObject, PlannedPlacement};
pub use gestures::{classify_gesture, Gesture, GestureConfig, GestureKind};
pub use hit_test::{ArCamera, NodeHit, SceneHitTest};
pub use layers::{ball_layers, lane_layers, pin_layers, CollisionCategory};
pub use placement::{PlacementCounter, PlacementKind, PlacementPhase};
pub use scene_asset::{
    ObjectTemplate, ProceduralBowlingSet, SceneAsset, SceneAssetError, SceneAssetLookup,
    SceneAssetSource, TemplateCollider, TemplatePart,
};
pub use session::{ArSession, PlaneDetection};
pub use status_overlay::{StatusOverlay, StatusOverlayRequest, DETECTING_PLANE_LABEL};

use bevy::ecs::schedule::{InternedScheduleLabel, ScheduleLabel};
use bevy::prelude::*;

/// Ordering of the systems added by [`BowlingArPlugin`].
///
/// All the sets run in the schedule passed to [`BowlingArPlugin::new`], in the order they are
/// declared here.
#[derive(SystemSet, Clone, PartialEq, Eq, Debug, Hash)]
pub enum BowlingArSystems {
    /// Track whether the session runs or is paused.
    Session,
    /// Turn raw pointer input into [`Gesture`] events.
    Gestures,
    /// React to plane anchors and gestures.
    Interactions,
    /// Apply [`StatusOverlayRequest`]s to the overlay.
    Overlay,
}

/// The main plugin of the crate.
///
/// Note that this plugin does not add avian3d's `PhysicsPlugins` - the host decides how physics is
/// scheduled.
pub struct BowlingArPlugin {
    schedule: InternedScheduleLabel,
}

impl BowlingArPlugin {
    /// Creates the plugin to run its systems in the given schedule.
    ///
    /// Gestures are read from input state that Bevy refreshes once per frame, so the schedule
    /// should run once per frame too (e.g. `Update`, not `FixedUpdate`).
    pub fn new(schedule: impl ScheduleLabel) -> Self {
        Self {
            schedule: schedule.intern(),
        }
    }
}

impl Default for BowlingArPlugin {
    fn default() -> Self {
        Self::new(Update)
    }
}

impl Plugin for BowlingArPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<PlaneAnchorAdded>();
        app.add_event::<Gesture>();
        app.add_event::<StatusOverlayRequest>();

        app.init_resource::<InteractionConfig>();
        app.init_resource::<GestureConfig>();
        app.init_resource::<AnchorPlaneConfig>();
        app.init_resource::<ArSession>();
        app.init_resource::<gestures::GestureTracker>();
        app.init_resource::<InteractionController>();

        app.configure_sets(
            self.schedule,
            (
                BowlingArSystems::Session,
                BowlingArSystems::Gestures,
                BowlingArSystems::Interactions,
                BowlingArSystems::Overlay,
            )
                .chain(),
        );

        app.add_systems(
            Startup,
            (
                status_overlay::spawn_status_overlay,
                scene_asset::ensure_scene_asset,
            ),
        );
        app.add_systems(
            self.schedule,
            session::pause_session_on_focus_change.in_set(BowlingArSystems::Session),
        );
        app.add_systems(
            self.schedule,
            (
                gestures::track_mouse_gestures,
                gestures::track_touch_gestures,
            )
                .in_set(BowlingArSystems::Gestures),
        );
        app.add_systems(
            self.schedule,
            (
                anchors::spawn_anchor_planes,
                controller::handle_taps,
                controller::handle_swipes,
            )
                .chain()
                .in_set(BowlingArSystems::Interactions),
        );
        app.add_systems(
            self.schedule,
            (
                status_overlay::apply_status_overlay_requests,
                status_overlay::hide_status_overlay_when_due,
            )
                .chain()
                .in_set(BowlingArSystems::Overlay),
        );
    }
}
