//! Grid ray caster: a first-person projection of a 2D tile map, plus the
//! collision-resolved movement that drives it.
//!
//! Each frame the caller samples [`input::Intents`], advances the
//! [`sim::Simulation`], and paints the [`projector::Frame`] it returns.

pub mod caster;
pub mod config;
pub mod draw;
pub mod input;
pub mod map;
pub mod movement;
pub mod player;
pub mod projector;
pub mod ray;
pub mod sim;

pub use config::{MovementConfig, RenderConfig, Viewport};
pub use input::{Button, Click, Intents};
pub use map::{Cell, GridMap};
pub use player::PlayerState;
pub use ray::{Orientation, Ray};
pub use sim::Simulation;
