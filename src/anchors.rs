use std::time::Duration;

use avian3d::prelude::*;
use bevy::color::palettes::css;
use bevy::prelude::*;

use crate::layers::lane_layers;
use crate::session::ArSession;
use crate::status_overlay::StatusOverlayRequest;

/// Sent by the host whenever it discovers a plane.
#[derive(Event, Debug, Clone)]
pub struct PlaneAnchorAdded {
    /// The world transform of the anchor. Only its translation is used - the spawned plane is
    /// always horizontal.
    pub transform: Transform,
}

impl From<Vec3> for PlaneAnchorAdded {
    fn from(translation: Vec3) -> Self {
        Self {
            transform: Transform::from_translation(translation),
        }
    }
}

/// The invisible static surface spawned for a detected plane. Placed objects rest on it.
#[derive(Component, Debug)]
pub struct AnchorPlane;

#[derive(Resource, Debug, Clone)]
pub struct AnchorPlaneConfig {
    /// Width and depth of the plane.
    pub size: f32,
    /// Thickness of the collider. Its top face is at the height of the anchor.
    pub thickness: f32,
    /// Render a translucent quad for each plane. Planes are invisible by default.
    pub visible: bool,
    /// Label shown on the status overlay once a plane is found.
    pub found_label: String,
    /// How long the "found" label stays before the overlay is hidden.
    pub hide_status_after: Duration,
}

impl Default for AnchorPlaneConfig {
    fn default() -> Self {
        Self {
            size: 5.0,
            thickness: 0.02,
            visible: false,
            found_label: "Plane Found".to_owned(),
            hide_status_after: Duration::from_secs(1),
        }
    }
}

impl AnchorPlaneConfig {
    pub(crate) fn collider(&self) -> Collider {
        Collider::compound(vec![(
            Vec3::new(0.0, -0.5 * self.thickness, 0.0),
            Quat::IDENTITY,
            Collider::cuboid(self.size, self.thickness, self.size),
        )])
    }
}

pub(crate) fn spawn_anchor_planes(
    mut reader: EventReader<PlaneAnchorAdded>,
    session: Res<ArSession>,
    config: Res<AnchorPlaneConfig>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut overlay_writer: EventWriter<StatusOverlayRequest>,
    mut commands: Commands,
) {
    for anchor in reader.read() {
        if !session.is_running() {
            debug!("Ignoring plane anchor while the session is paused");
            continue;
        }
        let translation = anchor.transform.translation;
        let mut cmd = commands.spawn((
            AnchorPlane,
            Name::new("Lane"),
            Transform::from_translation(translation),
            RigidBody::Static,
            config.collider(),
            lane_layers(),
        ));
        if config.visible {
            cmd.insert((
                Mesh3d(meshes.add(Plane3d::default().mesh().size(config.size, config.size))),
                MeshMaterial3d(materials.add(StandardMaterial {
                    base_color: css::LIGHT_SKY_BLUE.with_alpha(0.3).into(),
                    alpha_mode: AlphaMode::Blend,
                    double_sided: true,
                    cull_mode: None,
                    unlit: true,
                    ..Default::default()
                })),
            ));
        }
        info!("Plane anchor added at {translation}");

        overlay_writer.write(StatusOverlayRequest::SetLabel(config.found_label.clone()));
        overlay_writer.write(StatusOverlayRequest::HideAfter(config.hide_status_after));
    }
}

#[cfg(test)]
mod tests {
    use bevy::ecs::system::RunSystemOnce;

    use super::*;
    use crate::layers::CollisionCategory;

    fn setup_app() -> App {
        let mut app = App::new();
        app.add_event::<PlaneAnchorAdded>();
        app.add_event::<StatusOverlayRequest>();
        app.init_resource::<ArSession>();
        app.init_resource::<AnchorPlaneConfig>();
        app.init_resource::<Assets<Mesh>>();
        app.init_resource::<Assets<StandardMaterial>>();
        app.add_systems(Update, spawn_anchor_planes);
        app
    }

    fn send_anchor(app: &mut App, translation: Vec3) {
        app.world_mut()
            .run_system_once(move |mut writer: EventWriter<PlaneAnchorAdded>| {
                writer.write(PlaneAnchorAdded::from(translation));
            })
            .unwrap();
    }

    fn anchor_planes(app: &mut App) -> Vec<(Transform, CollisionLayers, RigidBody)> {
        app.world_mut()
            .query_filtered::<(&Transform, &CollisionLayers, &RigidBody), With<AnchorPlane>>()
            .iter(app.world())
            .map(|(transform, layers, rigid_body)| (*transform, *layers, *rigid_body))
            .collect()
    }

    #[test]
    fn anchor_spawns_static_lane_plane() {
        let mut app = setup_app();
        send_anchor(&mut app, Vec3::new(0.5, -1.2, -3.0));
        app.update();

        let planes = anchor_planes(&mut app);
        assert_eq!(planes.len(), 1);
        let (transform, layers, rigid_body) = planes[0];
        assert_eq!(transform.translation, Vec3::new(0.5, -1.2, -3.0));
        assert_eq!(transform.rotation, Quat::IDENTITY);
        assert_eq!(rigid_body, RigidBody::Static);
        assert_eq!(layers.memberships, LayerMask::from(CollisionCategory::Lane));
        assert_eq!(
            layers.filters,
            LayerMask::from([CollisionCategory::Ball, CollisionCategory::Pin])
        );

        let requests = app
            .world()
            .resource::<Events<StatusOverlayRequest>>()
            .iter_current_update_events()
            .cloned()
            .collect::<Vec<_>>();
        assert_eq!(
            requests,
            [
                StatusOverlayRequest::SetLabel("Plane Found".to_owned()),
                StatusOverlayRequest::HideAfter(Duration::from_secs(1)),
            ]
        );
    }

    #[test]
    fn every_anchor_gets_its_own_plane() {
        let mut app = setup_app();
        send_anchor(&mut app, Vec3::ZERO);
        send_anchor(&mut app, Vec3::X);
        app.update();
        assert_eq!(anchor_planes(&mut app).len(), 2);
    }

    #[test]
    fn anchors_are_ignored_while_paused() {
        let mut app = setup_app();
        app.world_mut().resource_mut::<ArSession>().pause();
        send_anchor(&mut app, Vec3::ZERO);
        app.update();
        assert!(anchor_planes(&mut app).is_empty());
    }
}
