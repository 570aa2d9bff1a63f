use avian3d::prelude::{CollisionLayers, LayerMask, PhysicsLayer};

/// Collision categories of the physics bodies in the bowling scene.
///
/// The bits are assigned by declaration order: `Pin` is `1`, `Ball` is `2` and `Lane` is `4`.
#[derive(PhysicsLayer, Default, Clone, Copy, Debug, PartialEq, Eq)]
pub enum CollisionCategory {
    #[default]
    Pin,
    Ball,
    Lane,
}

/// Layers for the invisible plane spawned for every detected plane anchor.
///
/// The lane only collides with the objects placed on it.
pub fn lane_layers() -> CollisionLayers {
    CollisionLayers::new(
        CollisionCategory::Lane,
        [CollisionCategory::Ball, CollisionCategory::Pin],
    )
}

/// Layers for a placed pin. Pins collide with everything.
pub fn pin_layers() -> CollisionLayers {
    CollisionLayers::new(CollisionCategory::Pin, LayerMask::ALL)
}

/// Layers for a placed ball. Balls collide with everything.
pub fn ball_layers() -> CollisionLayers {
    CollisionLayers::new(CollisionCategory::Ball, LayerMask::ALL)
}
