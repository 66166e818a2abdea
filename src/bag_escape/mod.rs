mod components;
mod events;
mod resources;
mod systems;

use crate::bag_escape::events::ToggleRun;
use crate::bag_escape::systems::{
    advance_particles, draw_particles, handle_go_button, spawn_surface, toggle_run,
};
use bevy::prelude::*;

pub struct BagEscapePlugin;

impl Plugin for BagEscapePlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(ClearColor(Color::WHITE));
        app.add_event::<ToggleRun>();
        app.add_systems(Startup, spawn_surface);
        app.add_systems(
            Update,
            (handle_go_button, advance_particles, toggle_run).chain(),
        );
        app.add_systems(Update, draw_particles);
    }
}
