use glam::Vec2;
use std::f32::consts::TAU;

/// Wrap an angle into `[0, 2π)`.
pub fn normalize_angle(angle: f32) -> f32 {
    let wrapped = angle.rem_euclid(TAU);
    // rem_euclid rounds tiny negative inputs up to exactly TAU
    if wrapped >= TAU {
        0.
    } else {
        wrapped
    }
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct PlayerState {
    pos: Vec2,
    facing: f32,
    speed: f32,
    velocity: Vec2,
}

impl PlayerState {
    pub fn new(pos: Vec2, facing: f32, speed: f32) -> Self {
        let mut this = Self {
            pos,
            facing: 0.,
            speed,
            velocity: Vec2::ZERO,
        };
        this.set_facing(facing);
        this
    }

    pub fn pos(&self) -> Vec2 {
        self.pos
    }

    pub fn facing(&self) -> f32 {
        self.facing
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    /// Per-tick displacement when moving forward.
    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    pub fn set_pos(&mut self, pos: Vec2) {
        self.pos = pos;
    }

    /// Set the facing angle and recompute velocity.
    pub fn set_facing(&mut self, angle: f32) {
        self.facing = normalize_angle(angle);
        self.velocity = Vec2::from_angle(self.facing) * self.speed;
    }

    pub fn turn(&mut self, delta: f32) {
        self.set_facing(self.facing + delta);
    }
}

impl Default for PlayerState {
    fn default() -> Self {
        Self::new(Vec2::new(300., 300.), 0., 3.)
    }
}
