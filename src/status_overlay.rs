use std::time::Duration;

use bevy::prelude::*;

pub const DETECTING_PLANE_LABEL: &str = "Detecting Plane...";

/// Marks the root UI node of the progress overlay shown while waiting for a plane.
#[derive(Component)]
pub struct StatusOverlay;

#[derive(Component)]
pub(crate) struct StatusOverlayLabel;

#[derive(Component)]
pub(crate) struct HideAfter(Timer);

/// Requests for the status overlay.
#[derive(Event, Debug, Clone, PartialEq)]
pub enum StatusOverlayRequest {
    /// Replace the text of the overlay. This does not affect its visibility.
    SetLabel(String),
    /// Hide the overlay once the duration passes. A new request restarts the countdown.
    HideAfter(Duration),
}

pub(crate) fn spawn_status_overlay(mut commands: Commands) {
    commands
        .spawn((
            StatusOverlay,
            Name::new("Status Overlay"),
            Node {
                position_type: PositionType::Absolute,
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                ..Default::default()
            },
        ))
        .with_children(|parent| {
            parent
                .spawn((
                    Node {
                        padding: UiRect::all(Val::Px(16.0)),
                        ..Default::default()
                    },
                    BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.7)),
                    BorderRadius::all(Val::Px(8.0)),
                ))
                .with_children(|parent| {
                    parent.spawn((
                        StatusOverlayLabel,
                        Text::new(DETECTING_PLANE_LABEL),
                        TextColor(Color::WHITE),
                    ));
                });
        });
}

pub(crate) fn apply_status_overlay_requests(
    mut reader: EventReader<StatusOverlayRequest>,
    overlay_query: Query<Entity, With<StatusOverlay>>,
    mut label_query: Query<&mut Text, With<StatusOverlayLabel>>,
    mut commands: Commands,
) {
    for request in reader.read() {
        match request {
            StatusOverlayRequest::SetLabel(label) => {
                for mut text in label_query.iter_mut() {
                    text.0.clone_from(label);
                }
            }
            StatusOverlayRequest::HideAfter(delay) => {
                for entity in overlay_query.iter() {
                    commands
                        .entity(entity)
                        .insert(HideAfter(Timer::new(*delay, TimerMode::Once)));
                }
            }
        }
    }
}

pub(crate) fn hide_status_overlay_when_due(
    time: Res<Time>,
    mut query: Query<(Entity, &mut HideAfter, &mut Visibility), With<StatusOverlay>>,
    mut commands: Commands,
) {
    for (entity, mut hide_after, mut visibility) in query.iter_mut() {
        if hide_after.0.tick(time.delta()).finished() {
            *visibility = Visibility::Hidden;
            commands.entity(entity).remove::<HideAfter>();
        }
    }
}

#[cfg(test)]
mod tests {
    use bevy::ecs::system::RunSystemOnce;
    use bevy::time::TimeUpdateStrategy;

    use super::*;

    fn setup_app() -> App {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_millis(
            200,
        )));
        app.add_event::<StatusOverlayRequest>();
        app.add_systems(Startup, spawn_status_overlay);
        app.add_systems(
            Update,
            (apply_status_overlay_requests, hide_status_overlay_when_due).chain(),
        );
        app.update();
        app
    }

    fn request(app: &mut App, request: StatusOverlayRequest) {
        app.world_mut()
            .run_system_once(move |mut writer: EventWriter<StatusOverlayRequest>| {
                writer.write(request.clone());
            })
            .unwrap();
    }

    fn label(app: &mut App) -> String {
        app.world_mut()
            .query_filtered::<&Text, With<StatusOverlayLabel>>()
            .single(app.world())
            .unwrap()
            .0
            .clone()
    }

    fn visibility(app: &mut App) -> Visibility {
        *app.world_mut()
            .query_filtered::<&Visibility, With<StatusOverlay>>()
            .single(app.world())
            .unwrap()
    }

    #[test]
    fn starts_visible_while_detecting() {
        let mut app = setup_app();
        assert_eq!(label(&mut app), DETECTING_PLANE_LABEL);
        assert_ne!(visibility(&mut app), Visibility::Hidden);

        // Without a plane nothing ever dismisses the overlay.
        for _ in 0..20 {
            app.update();
        }
        assert_ne!(visibility(&mut app), Visibility::Hidden);
    }

    #[test]
    fn hides_after_the_requested_delay() {
        let mut app = setup_app();
        request(&mut app, StatusOverlayRequest::SetLabel("Plane Found".to_owned()));
        request(&mut app, StatusOverlayRequest::HideAfter(Duration::from_secs(1)));

        app.update();
        assert_eq!(label(&mut app), "Plane Found");
        app.update();
        app.update();
        assert_ne!(visibility(&mut app), Visibility::Hidden);

        for _ in 0..5 {
            app.update();
        }
        assert_eq!(visibility(&mut app), Visibility::Hidden);
        assert_eq!(label(&mut app), "Plane Found");
    }
}
