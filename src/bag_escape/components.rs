use bevy::prelude::*;
use rand::Rng;

const STEP_SCALE: f32 = 50.;

#[derive(Component)]
pub struct GoButton;

#[derive(Component)]
pub struct GoLabel;

#[derive(Component)]
pub struct StatusLabel;

#[derive(Component, Debug)]
pub struct Particle {
    pub position: Vec2,
}

impl Particle {
    pub fn centered_in(surface: Vec2) -> Self {
        Self {
            position: surface / 2.,
        }
    }

    pub fn step(&mut self, rng: &mut impl Rng) {
        self.position.x += STEP_SCALE * (rng.gen::<f32>() - 0.5);
        self.position.y += STEP_SCALE * (rng.gen::<f32>() - 0.5);
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bag {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl Bag {
    pub fn from_surface(surface: Vec2) -> Self {
        Self {
            left: surface.x / 3.,
            top: surface.y / 3.,
            width: surface.x / 3.,
            height: surface.y / 3.,
        }
    }

    pub fn right(&self) -> f32 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.left + self.width / 2., self.top + self.height / 2.)
    }

    // Boundary contact counts as outside
    pub fn contains(&self, point: Vec2) -> bool {
        point.x > self.left
            && point.x < self.right()
            && point.y > self.top
            && point.y < self.bottom()
    }
}

// Surface space has its origin in the top left corner with y pointing down,
// world space has its origin in the window center with y pointing up.
pub fn surface_to_world(surface: Vec2, point: Vec2) -> Vec2 {
    Vec2::new(point.x - surface.x / 2., surface.y / 2. - point.y)
}
