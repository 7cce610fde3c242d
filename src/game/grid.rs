use macroquad::prelude::vec2;
use macroquad::rand::gen_range;

use crate::game::geometry::Rect;

/// One cell of the playfield lattice.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Fixed cols x rows lattice mapped onto the drawing surface.
#[derive(Clone, Copy, Debug)]
pub struct Grid {
    pub cols: i32,
    pub rows: i32,
    cell_w: f32,
    cell_h: f32,
}

impl Grid {
    /// Columns follow the surface aspect ratio so cells stay near-square.
    pub fn new(rows: i32, surface_w: f32, surface_h: f32) -> Self {
        let cols = (((rows as f32) * surface_w / surface_h).floor() as i32).max(1);
        Self {
            cols,
            rows,
            cell_w: surface_w / cols as f32,
            cell_h: surface_h / rows as f32,
        }
    }

    pub fn contains(self, cell: Cell) -> bool {
        cell.x >= 0 && cell.x < self.cols && cell.y >= 0 && cell.y < self.rows
    }

    pub fn cell_rect(self, cell: Cell) -> Rect {
        let start = vec2(self.cell_w * cell.x as f32, self.cell_h * cell.y as f32);
        Rect::new(start, start + vec2(self.cell_w, self.cell_h))
    }

    pub fn random_cell(self) -> Cell {
        Cell::new(gen_range(0, self.cols), gen_range(0, self.rows))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cols_follow_aspect() {
        let grid = Grid::new(40, 800.0, 400.0);
        assert_eq!(grid.cols, 80);
        assert_eq!(grid.rows, 40);

        let grid = Grid::new(40, 400.0, 400.0);
        assert_eq!(grid.cols, 40);
    }

    #[test]
    fn contains_bounds() {
        let grid = Grid::new(4, 40.0, 40.0);
        assert!(grid.contains(Cell::new(0, 0)));
        assert!(grid.contains(Cell::new(3, 3)));
        assert!(!grid.contains(Cell::new(4, 0)));
        assert!(!grid.contains(Cell::new(0, 4)));
        assert!(!grid.contains(Cell::new(-1, 0)));
        assert!(!grid.contains(Cell::new(0, -1)));
    }

    #[test]
    fn cell_rect_tiles_surface() {
        let grid = Grid::new(4, 80.0, 40.0);
        let rect = grid.cell_rect(Cell::new(2, 1));
        assert_eq!(rect.start, vec2(20.0, 10.0));
        assert_eq!(rect.end, vec2(30.0, 20.0));
    }

    #[test]
    fn random_cell_stays_on_grid() {
        let grid = Grid::new(10, 100.0, 100.0);
        for _ in 0..200 {
            assert!(grid.contains(grid.random_cell()));
        }
    }
}
