use bevy::prelude::*;

pub const STEP_PERIOD_SECS: f32 = 0.1;

#[derive(Resource)]
pub struct StepTimer(pub Timer);

impl StepTimer {
    pub fn new() -> Self {
        Self(Timer::from_seconds(STEP_PERIOD_SECS, TimerMode::Repeating))
    }
}
