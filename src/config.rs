use std::ops::RangeInclusive;

pub const FOV_RANGE: RangeInclusive<f32> = 1.0..=180.0;
pub const RAY_COUNT_RANGE: RangeInclusive<usize> = 1..=600;

/// Snapshot of the live render settings, re-read once per frame.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct RenderConfig {
    fov_degrees: f32,
    ray_count: usize,
}

impl RenderConfig {
    pub fn new(fov_degrees: f32, ray_count: usize) -> Self {
        Self {
            fov_degrees: fov_degrees.clamp(*FOV_RANGE.start(), *FOV_RANGE.end()),
            ray_count: ray_count.clamp(*RAY_COUNT_RANGE.start(), *RAY_COUNT_RANGE.end()),
        }
    }

    pub fn fov_degrees(&self) -> f32 {
        self.fov_degrees
    }

    pub fn fov(&self) -> f32 {
        self.fov_degrees.to_radians()
    }

    pub fn ray_count(&self) -> usize {
        self.ray_count
    }

    /// Angle between neighbouring rays, in radians.
    pub fn ray_step(&self) -> f32 {
        self.fov() / self.ray_count as f32
    }

    pub fn with_fov(self, fov_degrees: f32) -> Self {
        Self::new(fov_degrees, self.ray_count)
    }

    pub fn with_ray_count(self, ray_count: usize) -> Self {
        Self::new(self.fov_degrees, ray_count)
    }

    pub fn adjust_fov(self, delta: f32) -> Self {
        self.with_fov(self.fov_degrees + delta)
    }

    pub fn adjust_ray_count(self, delta: isize) -> Self {
        self.with_ray_count(self.ray_count.saturating_add_signed(delta))
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self::new(60., 300)
    }
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct MovementConfig {
    /// World units per tick.
    pub speed: f32,
    /// Radians per tick.
    pub turn_increment: f32,
}

impl Default for MovementConfig {
    fn default() -> Self {
        Self {
            speed: 3.,
            turn_increment: 0.05,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Viewport {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    /// The first-person view in the right half of a `width` x `height` window.
    pub fn right_half(width: f32, height: f32) -> Self {
        Self {
            x: width / 2.,
            y: 0.,
            width: width / 2.,
            height,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_is_clamped() {
        let config = RenderConfig::new(400., 0);
        assert_eq!(config.fov_degrees(), 180.);
        assert_eq!(config.ray_count(), 1);

        let config = config.adjust_fov(-500.).adjust_ray_count(10_000);
        assert_eq!(config.fov_degrees(), 1.);
        assert_eq!(config.ray_count(), 600);
    }

    #[test]
    fn ray_count_does_not_underflow() {
        let config = RenderConfig::new(60., 5).adjust_ray_count(-10);
        assert_eq!(config.ray_count(), 1);
    }

    #[test]
    fn right_half_viewport() {
        let view = Viewport::right_half(1024., 512.);
        assert_eq!(view.x, 512.);
        assert_eq!(view.width, 512.);
        assert_eq!(view.height, 512.);
    }
}
