use super::*;
use crate::map::Cell;
use std::f32::consts::{FRAC_PI_2, PI};

/// 8x8 map with a solid border and one interior wall at (2, 2).
fn scenario_map() -> GridMap {
    let mut cells = vec![Cell::Empty; 64];
    for i in 0..8 {
        cells[i] = Cell::Wall;
        cells[56 + i] = Cell::Wall;
        cells[i * 8] = Cell::Wall;
        cells[i * 8 + 7] = Cell::Wall;
    }
    cells[2 * 8 + 2] = Cell::Wall;
    GridMap::new(8, 8, 64., cells).unwrap()
}

fn assert_close(actual: f32, expected: f32) {
    assert!(
        (actual - expected).abs() < 1e-2,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn straight_ahead_hits_east_border() {
    let map = scenario_map();
    let ray = cast_ray(&map, Vec2::new(300., 300.), 0.);

    assert!(ray.is_hit());
    assert_eq!(ray.orientation, Orientation::Vertical);
    assert_close(ray.hit.x, 448.);
    assert_close(ray.hit.y, 300.);
    assert_close(ray.distance, 148.);
}

#[test]
fn edited_cell_shortens_the_ray() {
    let mut map = scenario_map();
    map.set_cell(4 * 8 + 5, Cell::Wall);
    let ray = cast_ray(&map, Vec2::new(300., 300.), 0.);

    assert_eq!(ray.orientation, Orientation::Vertical);
    assert_close(ray.hit.x, 320.);
    assert_close(ray.distance, 20.);
}

#[test]
fn ray_at_wall_centre_reports_distance_to_near_face() {
    let mut map = scenario_map();
    map.set_cell(4 * 8 + 5, Cell::Wall);
    let origin = Vec2::new(100., 300.);
    let target = Vec2::new(352., 288.);
    let to_target = target - origin;
    let angle = to_target.y.atan2(to_target.x);

    let ray = cast_ray(&map, origin, angle);

    // near face of cell (5, 4) is the line x = 320
    let expected = (320. - origin.x) / angle.cos();
    assert_eq!(ray.orientation, Orientation::Vertical);
    assert_close(ray.hit.x, 320.);
    assert_close(ray.distance, expected);
}

#[test]
fn looking_down_uses_horizontal_lines() {
    let map = scenario_map();
    let ray = cast_ray(&map, Vec2::new(300., 300.), FRAC_PI_2);

    assert_eq!(ray.orientation, Orientation::Horizontal);
    assert_close(ray.hit.y, 448.);
    assert_close(ray.distance, 148.);
}

#[test]
fn looking_left_and_up_probe_the_far_side_of_each_line() {
    let map = scenario_map();

    let left = cast_ray(&map, Vec2::new(300., 300.), PI);
    assert_eq!(left.orientation, Orientation::Vertical);
    assert_close(left.hit.x, 64.);
    assert_close(left.distance, 236.);

    let up = cast_ray(&map, Vec2::new(160., 300.), 3. * FRAC_PI_2);
    assert_eq!(up.orientation, Orientation::Horizontal);
    // interior wall (2, 2) has its south face at y = 192
    assert_close(up.hit.y, 192.);
    assert_close(up.distance, 108.);
}

#[test]
fn player_on_grid_line_looking_left() {
    let map = scenario_map();
    let ray = cast_ray(&map, Vec2::new(256., 300.), PI);
    assert_close(ray.hit.x, 64.);
    assert_close(ray.distance, 192.);
}

#[test]
fn parallel_traversal_does_not_hit() {
    let map = scenario_map();
    let origin = Vec2::new(300., 300.);
    assert_eq!(horizontal_hit(&map, origin, Vec2::from_angle(0.)), None);
    assert_eq!(vertical_hit(&map, origin, Vec2::from_angle(FRAC_PI_2)), None);
    assert!(vertical_hit(&map, origin, Vec2::from_angle(0.)).is_some());
}

#[test]
fn equal_distances_favour_horizontal() {
    let origin = Vec2::new(96., 96.);
    let hit = Hit {
        point: Vec2::new(128., 128.),
        distance: 32. * 2f32.sqrt(),
    };
    let ray = resolve(origin, PI / 4., Some(hit), Some(hit));
    assert_eq!(ray.orientation, Orientation::Horizontal);

    let nearer = Hit {
        distance: hit.distance - 1.,
        ..hit
    };
    assert_eq!(
        resolve(origin, PI / 4., Some(hit), Some(nearer)).orientation,
        Orientation::Vertical
    );
    assert_eq!(
        resolve(origin, PI / 4., Some(nearer), Some(hit)).orientation,
        Orientation::Horizontal
    );
}

#[test]
fn ray_through_a_wall_corner_resolves_to_horizontal() {
    // only (2, 2) is solid; the diagonal from (96, 96) meets its corner at (128, 128)
    let mut cells = vec![Cell::Empty; 64];
    cells[2 * 8 + 2] = Cell::Wall;
    let map = GridMap::new(8, 8, 64., cells).unwrap();
    let origin = Vec2::new(96., 96.);
    let dir = Vec2::from_angle(PI / 4.);

    let horizontal = horizontal_hit(&map, origin, dir).unwrap();
    let vertical = vertical_hit(&map, origin, dir).unwrap();
    assert_eq!(horizontal.distance, vertical.distance);

    let ray = cast_ray(&map, origin, PI / 4.);
    assert_eq!(ray.orientation, Orientation::Horizontal);
    assert_close(ray.hit.x, 128.);
    assert_close(ray.hit.y, 128.);
    assert_close(ray.distance, 32. * 2f32.sqrt());
}

#[test]
fn open_map_yields_no_hit() {
    let map = GridMap::new(8, 8, 64., vec![Cell::Empty; 64]).unwrap();
    let origin = Vec2::new(300., 300.);
    let ray = cast_ray(&map, origin, 0.7);

    assert!(!ray.is_hit());
    assert_eq!(ray.distance, NO_HIT_DISTANCE);
    assert_eq!(ray.hit, origin);
}

#[test]
fn traversal_stops_at_depth_cap() {
    // 12 cells wide, wall only at the far east end
    let mut cells = vec![Cell::Empty; 12];
    cells[11] = Cell::Wall;
    let map = GridMap::new(12, 1, 64., cells).unwrap();

    let ray = cast_ray(&map, Vec2::new(32., 32.), 0.);
    assert!(!ray.is_hit());
}

#[test]
fn casting_is_idempotent() {
    let map = GridMap::default();
    let player = PlayerState::default();
    let config = RenderConfig::default();

    let first = cast_rays(&map, &player, &config);
    let second = cast_rays(&map, &player, &config);
    assert_eq!(first.len(), 300);
    assert_eq!(first, second);
}

#[test]
fn ray_angles_span_the_field_of_view() {
    let config = RenderConfig::new(60., 4);
    let angles = ray_angles(0., &config).collect::<Vec<_>>();

    assert_eq!(angles.len(), 4);
    assert_close(angles[0], 2. * PI - 30f32.to_radians());
    assert_close(angles[2], 0.);
    assert_close(angles[3], 15f32.to_radians());
    assert!(angles.iter().all(|a| (0. ..2. * PI).contains(a)));
}
