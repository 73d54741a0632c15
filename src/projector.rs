use crate::config::Viewport;
use crate::draw::{Color, DrawCommand, Rect};
use crate::map::{Cell, GridMap};
use crate::player::PlayerState;
use crate::ray::{Orientation, Ray};
use glam::Vec2;

/// hsl(207.67, 100%, 40%), used for north and south faces.
pub const WALL_LIGHT: Color = Color::rgb(0, 110, 204);
/// hsl(207.67, 100%, 35%), used for east and west faces.
pub const WALL_DARK: Color = Color::rgb(0, 96, 179);

const PLAYER_SIZE: f32 = 8.;
const HEADING_SCALE: f32 = 10.;

/// A projected wall column.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Slab {
    pub rect: Rect,
    pub color: Color,
}

/// Everything drawn in one frame, in painting order.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct Frame {
    pub commands: Vec<DrawCommand>,
}

pub fn shade(orientation: Orientation) -> Color {
    match orientation {
        Orientation::Horizontal => WALL_LIGHT,
        Orientation::Vertical => WALL_DARK,
    }
}

/// Distance along the view direction, removing the fisheye bulge.
pub fn corrected_distance(ray: &Ray, facing: f32) -> f32 {
    ray.distance * (ray.angle - facing).cos()
}

/// On-screen height of a wall at `distance`, never taller than the viewport.
pub fn slab_height(distance: f32, cell_size: f32, viewport_height: f32) -> f32 {
    if distance <= 0. {
        return viewport_height;
    }
    let height = (cell_size * viewport_height) / distance;
    if !height.is_finite() || height > viewport_height {
        viewport_height
    } else {
        height
    }
}

pub fn project(rays: &[Ray], facing: f32, cell_size: f32, viewport: &Viewport) -> Vec<Slab> {
    if rays.is_empty() {
        return vec![];
    }

    let column_width = viewport.width / rays.len() as f32;
    rays.iter()
        .enumerate()
        .map(|(i, ray)| {
            let height = slab_height(corrected_distance(ray, facing), cell_size, viewport.height);
            Slab {
                rect: Rect::new(
                    viewport.x + i as f32 * column_width,
                    viewport.y + viewport.height / 2. - height / 2.,
                    column_width,
                    height,
                ),
                color: shade(ray.orientation),
            }
        })
        .collect()
}

/// Top-down map cells, each inset by one pixel so the grid shows through.
pub fn map_overlay(map: &GridMap, hovered: Option<usize>) -> Vec<DrawCommand> {
    let size = map.cell_size();
    let cell_rect = |idx: usize| {
        let origin = map.cell_origin(idx);
        Rect::new(origin.x + 1., origin.y + 1., size - 1., size - 1.)
    };

    let mut commands = map
        .cells()
        .iter()
        .enumerate()
        .map(|(idx, cell)| DrawCommand::FillRect {
            rect: cell_rect(idx),
            color: match cell {
                Cell::Wall => Color::WHITE,
                Cell::Empty => Color::BLACK,
            },
        })
        .collect::<Vec<_>>();

    if let Some(idx) = hovered.filter(|idx| *idx < map.cells().len()) {
        commands.push(DrawCommand::FillRect {
            rect: cell_rect(idx),
            color: Color::GRAY,
        });
    }

    commands
}

/// One line per ray that found a wall.
pub fn ray_overlay(rays: &[Ray], origin: Vec2) -> impl Iterator<Item = DrawCommand> + '_ {
    rays.iter().filter(|ray| ray.is_hit()).map(move |ray| DrawCommand::Line {
        from: origin,
        to: ray.hit,
        color: shade(ray.orientation),
        width: 1.,
    })
}

pub fn player_marker(player: &PlayerState) -> [DrawCommand; 2] {
    let pos = player.pos();
    [
        DrawCommand::FillRect {
            rect: Rect::new(
                pos.x - PLAYER_SIZE / 2.,
                pos.y - PLAYER_SIZE / 2.,
                PLAYER_SIZE,
                PLAYER_SIZE,
            ),
            color: Color::YELLOW,
        },
        DrawCommand::Line {
            from: pos,
            to: pos + player.velocity() * HEADING_SCALE,
            color: Color::YELLOW,
            width: 3.,
        },
    ]
}

/// Assemble a frame: map, rays, wall slabs, then the player on top.
pub fn compose(
    map: &GridMap,
    player: &PlayerState,
    rays: &[Ray],
    viewport: &Viewport,
    hovered: Option<usize>,
) -> Frame {
    let mut commands = map_overlay(map, hovered);
    commands.extend(ray_overlay(rays, player.pos()));
    commands.extend(
        project(rays, player.facing(), map.cell_size(), viewport)
            .into_iter()
            .map(|slab| DrawCommand::FillRect {
                rect: slab.rect,
                color: slab.color,
            }),
    );
    commands.extend(player_marker(player));

    Frame { commands }
}

#[cfg(test)]
#[path = "projector_test.rs"]
mod tests;
