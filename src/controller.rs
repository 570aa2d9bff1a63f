use std::fmt::Display;

use avian3d::prelude::*;
use bevy::prelude::*;

use crate::gestures::{Gesture, GestureKind};
use crate::hit_test::SceneHitTest;
use crate::layers::{ball_layers, pin_layers};
use crate::placement::{PlacementCounter, PlacementKind, PlacementPhase};
use crate::scene_asset::{ObjectTemplate, SceneAssetLookup};

#[derive(Resource, Debug, Clone)]
pub struct InteractionConfig {
    /// How many pins are placed before taps start placing balls.
    pub pin_limit: usize,
    /// Pins are dropped this high above the tapped point.
    pub pin_drop_height: f32,
    /// Balls are dropped this high above the tapped point.
    pub ball_drop_height: f32,
    /// The impulse applied to a ball that gets swiped. Points away from the viewer.
    pub swipe_impulse: Vec3,
}

impl Default for InteractionConfig {
    fn default() -> Self {
        Self {
            pin_limit: PlacementCounter::DEFAULT_LIMIT,
            pin_drop_height: 0.2,
            ball_drop_height: 0.4,
            swipe_impulse: Vec3::new(0.0, 0.0, -5.0),
        }
    }
}

/// Marks an object placed by a tap.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacedObject(pub PlacementKind);

/// The state of the interaction - what was placed so far.
#[derive(Resource, Debug, Default)]
pub struct InteractionController {
    counter: PlacementCounter,
}

/// What a tap should spawn.
#[derive(Debug, Clone)]
pub struct PlannedPlacement {
    pub kind: PlacementKind,
    pub template: ObjectTemplate,
    pub translation: Vec3,
}

impl InteractionController {
    pub fn counter(&self) -> &PlacementCounter {
        &self.counter
    }

    pub fn phase(&self, config: &InteractionConfig) -> PlacementPhase {
        self.counter.phase(config.pin_limit)
    }

    /// Decide what a tap places, and record it.
    ///
    /// `plane_hit` is the result of hit-testing the tap against the detected planes. Nothing is
    /// placed (and the counter stays the same) if the tap missed the planes, or if `lookup` fails
    /// to provide the sub-node for the object that should be placed.
    pub fn plan_tap<E: Display>(
        &mut self,
        plane_hit: Option<Vec3>,
        config: &InteractionConfig,
        lookup: impl FnOnce(&str) -> Result<ObjectTemplate, E>,
    ) -> Option<PlannedPlacement> {
        let Some(hit_point) = plane_hit else {
            debug!("Tap did not hit a plane");
            return None;
        };
        let kind = self.counter.next_kind(config.pin_limit);
        let template = match lookup(kind.node_name()) {
            Ok(template) => template,
            Err(err) => {
                debug!("Cannot place {kind:?}: {err}");
                return None;
            }
        };
        let drop_height = match kind {
            PlacementKind::Pin => config.pin_drop_height,
            PlacementKind::Ball => config.ball_drop_height,
        };
        self.counter.record(kind);
        Some(PlannedPlacement {
            kind,
            template,
            translation: hit_point + drop_height * Vec3::Y,
        })
    }

    /// The impulse to apply to a swiped node, if it is the ball.
    pub fn impulse_for_swipe(node_name: Option<&str>, config: &InteractionConfig) -> Option<Vec3> {
        (node_name == Some(PlacementKind::Ball.node_name())).then_some(config.swipe_impulse)
    }
}

pub(crate) fn handle_taps(
    mut reader: EventReader<Gesture>,
    hit_test: SceneHitTest,
    lookup: SceneAssetLookup,
    config: Res<InteractionConfig>,
    mut controller: ResMut<InteractionController>,
    mut commands: Commands,
) {
    for gesture in reader.read() {
        if gesture.kind != GestureKind::Tap {
            continue;
        }
        place_object(
            hit_test.planes(gesture.position),
            &lookup,
            &config,
            &mut controller,
            &mut commands,
        );
    }
}

/// Spawn the next object above `plane_hit`. Returns the new rigid body, if anything was placed.
pub(crate) fn place_object(
    plane_hit: Option<Vec3>,
    lookup: &SceneAssetLookup,
    config: &InteractionConfig,
    controller: &mut InteractionController,
    commands: &mut Commands,
) -> Option<Entity> {
    let PlannedPlacement {
        kind,
        template,
        translation,
    } = controller.plan_tap(plane_hit, config, |name| lookup.child_node_named(name))?;

    let mut cmd = commands.spawn((
        PlacedObject(kind),
        template.transform.with_translation(translation),
        RigidBody::Dynamic,
    ));
    template.build_into(
        &mut cmd,
        match kind {
            PlacementKind::Pin => pin_layers(),
            PlacementKind::Ball => ball_layers(),
        },
    );
    info!(
        "Placed {kind:?} at {translation} (count is now {})",
        controller.counter().count()
    );
    Some(cmd.id())
}

pub(crate) fn handle_swipes(
    mut reader: EventReader<Gesture>,
    hit_test: SceneHitTest,
    names_query: Query<&Name>,
    config: Res<InteractionConfig>,
    mut commands: Commands,
) {
    for gesture in reader.read() {
        if gesture.kind != GestureKind::SwipeUp {
            continue;
        }
        let Some(hit) = hit_test.nodes(gesture.position) else {
            continue;
        };
        push_swiped_node(
            hit.entity,
            names_query.get(hit.entity).ok(),
            &config,
            &mut commands,
        );
    }
}

/// Apply the swipe impulse to `entity` if it is the ball. Returns whether it was pushed.
pub(crate) fn push_swiped_node(
    entity: Entity,
    name: Option<&Name>,
    config: &InteractionConfig,
    commands: &mut Commands,
) -> bool {
    let name = name.map(Name::as_str);
    let Some(impulse) = InteractionController::impulse_for_swipe(name, config) else {
        debug!("Swiped {name:?}, which is not the ball");
        return false;
    };
    info!("Pushing the ball with {impulse}");
    commands
        .entity(entity)
        .insert(ExternalImpulse::new(impulse));
    true
}
