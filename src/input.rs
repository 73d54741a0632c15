use glam::Vec2;

/// Directional intents sampled once per tick.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub struct Intents {
    pub turn_left: bool,
    pub turn_right: bool,
    pub forward: bool,
    pub backward: bool,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Button {
    Left,
    Right,
}

/// A released mouse button at a screen position.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Click {
    pub pos: Vec2,
    pub button: Button,
}
