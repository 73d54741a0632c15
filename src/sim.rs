use crate::caster::cast_rays;
use crate::config::{MovementConfig, RenderConfig, Viewport};
use crate::input::{Button, Click, Intents};
use crate::map::{Cell, GridMap};
use crate::movement::{advance, MoveOutcome};
use crate::player::PlayerState;
use crate::projector::{compose, Frame};
use crate::ray::Ray;
use glam::Vec2;

/// Owns the whole simulation state. The top-down map is drawn at world scale
/// from the window origin, so screen and world coordinates coincide there.
#[derive(Clone, Debug)]
pub struct Simulation {
    pub map: GridMap,
    pub player: PlayerState,
    render: RenderConfig,
    movement: MovementConfig,
}

/// Where the player starts on every map.
pub const SPAWN: Vec2 = Vec2::new(300., 300.);

impl Simulation {
    /// The player is built from `movement.speed`, facing `facing` at `spawn`.
    pub fn new(
        map: GridMap,
        spawn: Vec2,
        facing: f32,
        render: RenderConfig,
        movement: MovementConfig,
    ) -> Self {
        Self {
            map,
            player: PlayerState::new(spawn, facing, movement.speed),
            render,
            movement,
        }
    }

    /// Start on a loaded map. The spawn cell must be open and the map must
    /// fit in the overlay area left of `viewport`.
    pub fn with_map(map: GridMap, viewport: &Viewport) -> anyhow::Result<Self> {
        match map.cell_at(SPAWN) {
            Some(Cell::Empty) => {}
            Some(Cell::Wall) => anyhow::bail!("spawn point {SPAWN} is inside a wall"),
            None => anyhow::bail!(
                "spawn point {SPAWN} is outside the {}x{} map",
                map.width(),
                map.height()
            ),
        }

        let extent = Vec2::new(map.width() as f32, map.height() as f32) * map.cell_size();
        if extent.x > viewport.x || extent.y > viewport.y + viewport.height {
            anyhow::bail!(
                "{}x{} map spans {extent} world units, more than the {}x{} overlay area",
                map.width(),
                map.height(),
                viewport.x,
                viewport.y + viewport.height
            );
        }

        Ok(Self::new(
            map,
            SPAWN,
            0.,
            RenderConfig::default(),
            MovementConfig::default(),
        ))
    }

    pub fn render_config(&self) -> RenderConfig {
        self.render
    }

    pub fn set_render_config(&mut self, config: RenderConfig) {
        if config != self.render {
            log::debug!(
                "render config: fov {}° rays {}",
                config.fov_degrees(),
                config.ray_count()
            );
        }
        self.render = config;
    }

    /// Advance one frame of movement.
    pub fn tick(&mut self, intents: &Intents) -> MoveOutcome {
        advance(&mut self.player, &self.map, intents, &self.movement)
    }

    /// Map cell under a screen position, if the position is over the overlay.
    pub fn cell_under(&self, screen: Vec2) -> Option<usize> {
        self.map.index_of(screen)
    }

    /// Left click walls a cell, right click clears it.
    pub fn apply_click(&mut self, click: &Click) -> Option<Cell> {
        let idx = self.cell_under(click.pos)?;
        let cell = match click.button {
            Button::Left => Cell::Wall,
            Button::Right => Cell::Empty,
        };
        self.map.set_cell(idx, cell)
    }

    pub fn cast(&self) -> Vec<Ray> {
        cast_rays(&self.map, &self.player, &self.render)
    }

    pub fn frame(&self, viewport: &Viewport, pointer: Option<Vec2>) -> Frame {
        let rays = self.cast();
        let hovered = pointer.and_then(|p| self.cell_under(p));
        compose(&self.map, &self.player, &rays, viewport, hovered)
    }
}

impl Default for Simulation {
    fn default() -> Self {
        Self::new(
            GridMap::default(),
            SPAWN,
            0.,
            RenderConfig::default(),
            MovementConfig::default(),
        )
    }
}
