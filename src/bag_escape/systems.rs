use crate::bag_escape::components::{
    surface_to_world, Bag, GoButton, GoLabel, Particle, StatusLabel,
};
use crate::bag_escape::events::ToggleRun;
use crate::bag_escape::resources::StepTimer;
use bevy::color::palettes::basic::BLACK;
use bevy::prelude::*;
use bevy::window::PrimaryWindow;

const PARTICLE_SIZE: f32 = 4.;

pub fn spawn_surface(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    window_query: Query<&Window, With<PrimaryWindow>>,
) {
    let window = window_query.single();
    let surface = Vec2::new(window.width(), window.height());
    let bag = Bag::from_surface(surface);
    let bag_center = surface_to_world(surface, bag.center());

    commands.spawn((
        Mesh2d(meshes.add(Rectangle::new(bag.width, bag.height))),
        MeshMaterial2d(materials.add(Color::srgb_u8(224, 176, 68))),
        Transform::from_xyz(bag_center.x, bag_center.y, -1.),
        Visibility::default(),
    ));

    commands
        .spawn((
            Button,
            GoButton,
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(12.),
                top: Val::Px(12.),
                width: Val::Px(80.),
                height: Val::Px(32.),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                ..default()
            },
            BackgroundColor(Color::srgb(0.85, 0.85, 0.85)),
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new("Start"),
                TextFont {
                    font_size: 18.,
                    ..default()
                },
                TextColor(Color::BLACK),
                GoLabel,
            ));
        });

    commands.spawn((
        Text::new(""),
        TextFont {
            font_size: 18.,
            ..default()
        },
        TextColor(Color::BLACK),
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(12.),
            top: Val::Px(52.),
            ..default()
        },
        StatusLabel,
    ));
}

pub fn handle_go_button(
    interaction_query: Query<&Interaction, (Changed<Interaction>, With<GoButton>)>,
    mut toggle_events: EventWriter<ToggleRun>,
) {
    for interaction in &interaction_query {
        if *interaction == Interaction::Pressed {
            toggle_events.send(ToggleRun);
        }
    }
}

pub fn toggle_run(
    mut commands: Commands,
    mut toggle_events: EventReader<ToggleRun>,
    timer: Option<Res<StepTimer>>,
    window_query: Query<&Window, With<PrimaryWindow>>,
    particle_query: Query<Entity, With<Particle>>,
    mut go_label_query: Query<&mut Text, (With<GoLabel>, Without<StatusLabel>)>,
    mut status_query: Query<&mut Text, (With<StatusLabel>, Without<GoLabel>)>,
) {
    if toggle_events.is_empty() {
        return;
    }

    toggle_events.clear();

    if timer.is_none() {
        let window = window_query.single();

        // The particle belongs to the run, so a restart replaces it
        for entity in &particle_query {
            commands.entity(entity).despawn();
        }

        commands.spawn(Particle::centered_in(Vec2::new(
            window.width(),
            window.height(),
        )));
        commands.insert_resource(StepTimer::new());
        go_label_query.single_mut().0 = "Stop".into();
        info!("run started");
    } else {
        commands.remove_resource::<StepTimer>();
        go_label_query.single_mut().0 = "Start".into();
        status_query.single_mut().0 = "Success".into();
        info!("run stopped");
    }
}

pub fn advance_particles(
    time: Res<Time>,
    timer: Option<ResMut<StepTimer>>,
    window_query: Query<&Window, With<PrimaryWindow>>,
    mut particle_query: Query<&mut Particle>,
    mut toggle_events: EventWriter<ToggleRun>,
) {
    let Some(mut timer) = timer else {
        return;
    };

    if !timer.0.tick(time.delta()).just_finished() {
        return;
    }

    let window = window_query.single();
    let bag = Bag::from_surface(Vec2::new(window.width(), window.height()));
    let mut rng = rand::thread_rng();

    for mut particle in &mut particle_query {
        particle.step(&mut rng);

        if !bag.contains(particle.position) {
            info!("particle escaped the bag at {:?}", particle.position);
            toggle_events.send(ToggleRun);
        }
    }
}

pub fn draw_particles(
    particle_query: Query<&Particle>,
    window_query: Query<&Window, With<PrimaryWindow>>,
    mut gizmos: Gizmos,
) {
    let window = window_query.single();
    let surface = Vec2::new(window.width(), window.height());

    for particle in &particle_query {
        // The particle position is the top left corner of the square
        let center = particle.position + Vec2::splat(PARTICLE_SIZE / 2.);

        gizmos.rect_2d(
            Isometry2d::from_translation(surface_to_world(surface, center)),
            Vec2::splat(PARTICLE_SIZE),
            BLACK,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::ecs::event::Events;
    use bevy::ecs::system::RunSystemOnce;
    use std::time::Duration;

    fn test_world() -> World {
        let mut world = World::new();
        world.init_resource::<Events<ToggleRun>>();
        world.spawn((
            Window {
                resolution: (600., 450.).into(),
                ..Default::default()
            },
            PrimaryWindow,
        ));
        world.spawn((Text::new("Start"), GoLabel));
        world.spawn((Text::new(""), StatusLabel));
        world
    }

    fn go_label(world: &mut World) -> String {
        world
            .query_filtered::<&Text, With<GoLabel>>()
            .single(world)
            .0
            .clone()
    }

    fn status(world: &mut World) -> String {
        world
            .query_filtered::<&Text, With<StatusLabel>>()
            .single(world)
            .0
            .clone()
    }

    #[test]
    fn toggle_starts_and_stops_a_run() {
        let mut world = test_world();

        world.send_event(ToggleRun);
        world.run_system_once(toggle_run).unwrap();

        assert!(world.contains_resource::<StepTimer>());
        assert_eq!(go_label(&mut world), "Stop");

        let particle = world.query::<&Particle>().single(&world);
        assert_eq!(particle.position, Vec2::new(300., 225.));

        world.send_event(ToggleRun);
        world.run_system_once(toggle_run).unwrap();

        assert!(!world.contains_resource::<StepTimer>());
        assert_eq!(go_label(&mut world), "Start");
        assert_eq!(status(&mut world), "Success");
    }

    #[test]
    fn restart_replaces_the_previous_particle() {
        let mut world = test_world();
        world.spawn(Particle {
            position: Vec2::new(10., 10.),
        });

        world.send_event(ToggleRun);
        world.run_system_once(toggle_run).unwrap();

        let particle = world.query::<&Particle>().single(&world);
        assert_eq!(particle.position, Vec2::new(300., 225.));
    }

    #[test]
    fn tick_waits_out_the_step_period() {
        let mut world = test_world();
        world.insert_resource(Time::<()>::default());
        world.insert_resource(StepTimer::new());
        world.spawn(Particle::centered_in(Vec2::new(600., 450.)));

        world
            .resource_mut::<Time>()
            .advance_by(Duration::from_millis(50));
        world.run_system_once(advance_particles).unwrap();

        let position = world.query::<&Particle>().single(&world).position;
        assert_eq!(position, Vec2::new(300., 225.));

        world
            .resource_mut::<Time>()
            .advance_by(Duration::from_millis(50));
        world.run_system_once(advance_particles).unwrap();

        let moved = world.query::<&Particle>().single(&world).position;
        assert_ne!(moved, Vec2::new(300., 225.));
        assert!((moved.x - 300.).abs() < 25.);
        assert!((moved.y - 225.).abs() < 25.);
        assert!(world.resource::<Events<ToggleRun>>().is_empty());
    }

    #[test]
    fn escaped_particle_ends_the_run() {
        let mut world = test_world();
        world.insert_resource(Time::<()>::default());
        world.insert_resource(StepTimer::new());
        world.spawn(Particle {
            position: Vec2::new(10., 10.),
        });

        world
            .resource_mut::<Time>()
            .advance_by(Duration::from_millis(100));
        world.run_system_once(advance_particles).unwrap();

        assert!(!world.resource::<Events<ToggleRun>>().is_empty());

        world.run_system_once(toggle_run).unwrap();

        assert!(!world.contains_resource::<StepTimer>());
        assert_eq!(go_label(&mut world), "Start");
        assert_eq!(status(&mut world), "Success");
    }
}
