use anyhow::Context;
use glam::Vec2;
use std::fs::read_to_string;
use std::path::Path;
use std::str::FromStr;

pub const DEFAULT_CELL_SIZE: f32 = 64.;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Cell {
    Empty,
    Wall,
}

#[rustfmt::skip]
const DEFAULT_LAYOUT: [u8; 64] = [
    1, 1, 1, 1, 1, 1, 1, 1,
    1, 0, 1, 0, 0, 0, 0, 1,
    1, 0, 0, 0, 0, 1, 0, 1,
    1, 0, 1, 0, 0, 0, 0, 1,
    1, 0, 0, 0, 0, 0, 0, 1,
    1, 0, 0, 0, 0, 1, 0, 1,
    1, 0, 0, 0, 0, 0, 0, 1,
    1, 1, 1, 1, 1, 1, 1, 1,
];

/// Fixed-size occupancy grid of axis-aligned square cells.
///
/// Cell `i` lives at grid coordinate `(i % width, i / width)`. World
/// coordinates map onto the grid by floor division with `cell_size`.
#[derive(Clone, PartialEq, Debug)]
pub struct GridMap {
    width: usize,
    height: usize,
    cell_size: f32,
    cells: Vec<Cell>,
}

impl GridMap {
    pub fn new(
        width: usize,
        height: usize,
        cell_size: f32,
        cells: Vec<Cell>,
    ) -> anyhow::Result<Self> {
        if width == 0 || height == 0 {
            anyhow::bail!("map dimensions must be non-zero, got {width}x{height}");
        }
        if !(cell_size.is_finite() && cell_size > 0.) {
            anyhow::bail!("cell size must be positive, got {cell_size}");
        }
        if cells.len() != width * height {
            anyhow::bail!(
                "expected {} cells for a {width}x{height} map, got {}",
                width * height,
                cells.len()
            );
        }

        Ok(Self {
            width,
            height,
            cell_size,
            cells,
        })
    }

    /// Parse a text map: one row per line, `#` is a wall, `.` or space is empty.
    /// Empty lines and lines starting with `;` are skipped.
    pub fn parse(text: &str, cell_size: f32) -> anyhow::Result<Self> {
        let mut width = None;
        let mut height = 0;
        let mut cells = vec![];

        for (line_no, line) in text.lines().enumerate() {
            if line.is_empty() || line.starts_with(';') {
                continue;
            }

            let row = line
                .chars()
                .map(|tile| match tile {
                    '#' => Ok(Cell::Wall),
                    '.' | ' ' => Ok(Cell::Empty),
                    other => Err(anyhow::anyhow!("invalid tile in map: {other:?}")),
                })
                .collect::<anyhow::Result<Vec<_>>>()
                .with_context(|| format!("on line {}", line_no + 1))?;

            match width {
                None => width = Some(row.len()),
                Some(w) if w != row.len() => anyhow::bail!(
                    "row on line {} has {} cells, expected {w}",
                    line_no + 1,
                    row.len()
                ),
                Some(_) => {}
            }

            height += 1;
            cells.extend(row);
        }

        let width = width.context("map has no rows")?;
        Self::new(width, height, cell_size, cells)
    }

    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        log::info!("loading map at {}", path.display());
        let text = read_to_string(path)
            .with_context(|| format!("could not read {}", path.display()))?;
        let map = Self::parse(&text, DEFAULT_CELL_SIZE)
            .with_context(|| format!("could not parse {}", path.display()))?;
        log::info!("loaded {}x{} map", map.width, map.height);

        Ok(map)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn cell_size(&self) -> f32 {
        self.cell_size
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Cell at signed grid coordinates, `None` outside the grid.
    pub fn cell(&self, x: i64, y: i64) -> Option<Cell> {
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            return None;
        }
        self.cells.get(y as usize * self.width + x as usize).copied()
    }

    pub fn cell_at(&self, point: Vec2) -> Option<Cell> {
        let idx = self.index_of(point)?;
        self.cells.get(idx).copied()
    }

    /// Out-of-bounds points are not walls.
    pub fn is_wall(&self, point: Vec2) -> bool {
        self.cell_at(point) == Some(Cell::Wall)
    }

    pub fn is_wall_cell(&self, x: i64, y: i64) -> bool {
        self.cell(x, y) == Some(Cell::Wall)
    }

    pub fn index_of(&self, point: Vec2) -> Option<usize> {
        if !point.is_finite() {
            return None;
        }
        let x = (point.x / self.cell_size).floor();
        let y = (point.y / self.cell_size).floor();
        if x < 0. || y < 0. || x >= self.width as f32 || y >= self.height as f32 {
            return None;
        }

        Some(y as usize * self.width + x as usize)
    }

    /// World coordinate of the top-left corner of cell `idx`.
    pub fn cell_origin(&self, idx: usize) -> Vec2 {
        let x = idx % self.width;
        let y = idx / self.width;
        Vec2::new(x as f32 * self.cell_size, y as f32 * self.cell_size)
    }

    /// Replace one cell, returning what was there. Out-of-range indices are ignored.
    pub fn set_cell(&mut self, idx: usize, cell: Cell) -> Option<Cell> {
        let slot = self.cells.get_mut(idx)?;
        let prev = std::mem::replace(slot, cell);
        log::debug!(
            "cell {idx} ({}, {}) {prev:?} -> {cell:?}",
            idx % self.width,
            idx / self.width
        );

        Some(prev)
    }
}

impl Default for GridMap {
    fn default() -> Self {
        Self {
            width: 8,
            height: 8,
            cell_size: DEFAULT_CELL_SIZE,
            cells: DEFAULT_LAYOUT
                .iter()
                .map(|&c| if c == 1 { Cell::Wall } else { Cell::Empty })
                .collect(),
        }
    }
}

impl FromStr for GridMap {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        Self::parse(s, DEFAULT_CELL_SIZE)
    }
}

#[cfg(test)]
#[path = "map_test.rs"]
mod tests;
