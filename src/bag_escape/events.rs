use bevy::prelude::*;

// Sent by the go button and by a tick that sees the particle outside the bag.
#[derive(Event)]
pub struct ToggleRun;
