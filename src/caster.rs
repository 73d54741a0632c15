use crate::config::RenderConfig;
use crate::map::GridMap;
use crate::player::{normalize_angle, PlayerState};
use crate::ray::{Orientation, Ray, NO_HIT_DISTANCE};
use glam::Vec2;

/// Maximum number of grid lines probed per traversal.
pub const MAX_DEPTH: usize = 8;

/// Direction components smaller than this are treated as parallel to the
/// grid lines of that axis.
pub const PARALLEL_EPSILON: f32 = 1e-6;

#[derive(Clone, Copy, PartialEq, Debug)]
pub(crate) struct Hit {
    pub point: Vec2,
    pub distance: f32,
}

/// Angles of every ray for this frame, left edge of the view first.
pub fn ray_angles(facing: f32, config: &RenderConfig) -> impl Iterator<Item = f32> {
    let start = facing - config.fov() / 2.;
    let step = config.ray_step();
    (0..config.ray_count()).map(move |i| normalize_angle(start + i as f32 * step))
}

pub fn cast_rays(map: &GridMap, player: &PlayerState, config: &RenderConfig) -> Vec<Ray> {
    ray_angles(player.facing(), config)
        .map(|angle| cast_ray(map, player.pos(), angle))
        .collect()
}

/// Cast one ray from `origin` and return the nearest wall it meets.
pub fn cast_ray(map: &GridMap, origin: Vec2, angle: f32) -> Ray {
    let angle = normalize_angle(angle);
    let dir = Vec2::from_angle(angle);

    let vertical = vertical_hit(map, origin, dir);
    let horizontal = horizontal_hit(map, origin, dir);

    resolve(origin, angle, horizontal, vertical)
}

/// Pick the nearer of the two traversals. Ties go to the horizontal one.
pub(crate) fn resolve(
    origin: Vec2,
    angle: f32,
    horizontal: Option<Hit>,
    vertical: Option<Hit>,
) -> Ray {
    let (hit, orientation) = match (horizontal, vertical) {
        (Some(h), Some(v)) if v.distance < h.distance => (Some(v), Orientation::Vertical),
        (Some(h), _) => (Some(h), Orientation::Horizontal),
        (None, Some(v)) => (Some(v), Orientation::Vertical),
        (None, None) => (None, Orientation::Horizontal),
    };

    match hit {
        Some(Hit { point, distance }) => Ray {
            angle,
            hit: point,
            distance,
            orientation,
        },
        None => Ray {
            angle,
            hit: origin,
            distance: NO_HIT_DISTANCE,
            orientation,
        },
    }
}

/// Walk the vertical grid lines (constant x) crossed by the ray.
fn vertical_hit(map: &GridMap, origin: Vec2, dir: Vec2) -> Option<Hit> {
    // LOOKING STRAIGHT UP/DOWN (parallel - will never cross a vertical line)
    if dir.x.abs() < PARALLEL_EPSILON {
        return None;
    }

    let size = map.cell_size();
    let column = (origin.x / size).floor() * size;
    let (line_x, dx, side) = if dir.x < 0. {
        // LOOKING LEFT: the wall lies in the cell left of each line
        (column, -size, -1)
    } else {
        // LOOKING RIGHT
        (column + size, size, 0)
    };

    let slope = dir.y / dir.x;
    let start = Vec2::new(line_x, origin.y + (line_x - origin.x) * slope);
    let step = Vec2::new(dx, dx * slope);

    march(map, origin, start, step, |point| {
        (
            (point.x / size).round() as i64 + side,
            (point.y / size).floor() as i64,
        )
    })
}

/// Walk the horizontal grid lines (constant y) crossed by the ray.
fn horizontal_hit(map: &GridMap, origin: Vec2, dir: Vec2) -> Option<Hit> {
    // LOOKING STRAIGHT LEFT/RIGHT (parallel - will never cross a horizontal line)
    if dir.y.abs() < PARALLEL_EPSILON {
        return None;
    }

    let size = map.cell_size();
    let row = (origin.y / size).floor() * size;
    let (line_y, dy, side) = if dir.y < 0. {
        // LOOKING UP: the wall lies in the cell above each line
        (row, -size, -1)
    } else {
        // LOOKING DOWN
        (row + size, size, 0)
    };

    let inv_slope = dir.x / dir.y;
    let start = Vec2::new(origin.x + (line_y - origin.y) * inv_slope, line_y);
    let step = Vec2::new(dy * inv_slope, dy);

    march(map, origin, start, step, |point| {
        (
            (point.x / size).floor() as i64,
            (point.y / size).round() as i64 + side,
        )
    })
}

fn march(
    map: &GridMap,
    origin: Vec2,
    mut ray: Vec2,
    step: Vec2,
    cell_of: impl Fn(Vec2) -> (i64, i64),
) -> Option<Hit> {
    for _ in 0..MAX_DEPTH {
        let (x, y) = cell_of(ray);
        if map.is_wall_cell(x, y) {
            return Some(Hit {
                point: ray,
                distance: ray.distance(origin),
            });
        }
        ray += step;
    }

    None
}

#[cfg(test)]
#[path = "caster_test.rs"]
mod tests;
