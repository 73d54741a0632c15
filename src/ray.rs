use glam::Vec2;

/// Distance carried by a ray that found no wall within the depth cap.
pub const NO_HIT_DISTANCE: f32 = 100_000.;

/// Which family of grid lines produced the hit.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Orientation {
    /// A horizontal grid line, i.e. a north or south face.
    Horizontal,
    /// A vertical grid line, i.e. an east or west face.
    Vertical,
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Ray {
    pub angle: f32,
    pub hit: Vec2,
    pub distance: f32,
    pub orientation: Orientation,
}

impl Ray {
    pub fn is_hit(&self) -> bool {
        self.distance < NO_HIT_DISTANCE
    }
}
