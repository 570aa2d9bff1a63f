use avian3d::prelude::*;
use bevy::prelude::*;
use bowling_ar::{
    InteractionConfig, InteractionController, ObjectTemplate, PlacementKind, PlacementPhase,
    SceneAssetError, TemplateCollider,
};

fn template(name: &str) -> Result<ObjectTemplate, SceneAssetError> {
    Ok(ObjectTemplate {
        name: name.to_owned(),
        transform: Transform::IDENTITY,
        parts: Vec::new(),
        collider: TemplateCollider::Exact(Collider::sphere(0.1)),
    })
}

#[test]
fn first_five_taps_place_pins_then_balls() {
    let config = InteractionConfig::default();
    let mut controller = InteractionController::default();

    let placed = (0..7)
        .map(|_| {
            controller
                .plan_tap(Some(Vec3::ZERO), &config, template)
                .expect("tap on a plane should place something")
        })
        .collect::<Vec<_>>();

    for planned in placed.iter().take(5) {
        assert_eq!(planned.kind, PlacementKind::Pin);
        assert_eq!(planned.template.name, "pin");
    }
    for planned in placed.iter().skip(5) {
        assert_eq!(planned.kind, PlacementKind::Ball);
        assert_eq!(planned.template.name, "ball");
    }
    assert_eq!(controller.phase(&config), PlacementPhase::PlacingBall);
    assert_eq!(controller.counter().count(), 6);
}

#[test]
fn objects_are_dropped_above_the_hit_point() {
    let config = InteractionConfig {
        pin_limit: 1,
        ..Default::default()
    };
    let mut controller = InteractionController::default();
    let hit = Vec3::new(1.0, -0.5, -2.0);

    let pin = controller.plan_tap(Some(hit), &config, template).unwrap();
    assert_eq!(pin.kind, PlacementKind::Pin);
    assert!((pin.translation - Vec3::new(1.0, -0.3, -2.0)).length() < 1e-5);

    let ball = controller.plan_tap(Some(hit), &config, template).unwrap();
    assert_eq!(ball.kind, PlacementKind::Ball);
    assert!((ball.translation - Vec3::new(1.0, -0.1, -2.0)).length() < 1e-5);
}

#[test]
fn tap_that_misses_the_planes_changes_nothing() {
    let config = InteractionConfig::default();
    let mut controller = InteractionController::default();

    let mut lookup_called = false;
    let planned = controller.plan_tap(None, &config, |name| {
        lookup_called = true;
        template(name)
    });

    assert!(planned.is_none());
    assert!(!lookup_called);
    assert_eq!(controller.counter().count(), 1);
    assert!(!controller.counter().pins_placed());
}

#[test]
fn missing_sub_node_aborts_silently() {
    let config = InteractionConfig::default();
    let mut controller = InteractionController::default();

    let planned = controller.plan_tap(Some(Vec3::ZERO), &config, |name| {
        Err::<ObjectTemplate, _>(SceneAssetError::MissingNode(name.to_owned()))
    });

    assert!(planned.is_none());
    assert_eq!(controller.counter().count(), 1);
    assert_eq!(
        controller.counter().next_kind(config.pin_limit),
        PlacementKind::Pin
    );
}

#[test]
fn only_the_ball_reacts_to_swipes() {
    let config = InteractionConfig::default();

    assert_eq!(
        InteractionController::impulse_for_swipe(Some("ball"), &config),
        Some(Vec3::new(0.0, 0.0, -5.0))
    );
    for name in [Some("pin"), Some("Lane"), Some("Ball"), None] {
        assert_eq!(InteractionController::impulse_for_swipe(name, &config), None);
    }
}
