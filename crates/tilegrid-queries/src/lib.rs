//! Stateless geometry queries over tile grids.
//!
//! Every function here answers "which tiles lie within shape S of point P?"
//! for some shape, over a read-only grid snapshot:
//!
//! - **Rectangles**: [`rectangle_fill`], [`rectangle_fill_walkable`],
//!   [`rectangle_outline`]
//! - **Circles**: [`radius_fill`], [`radius_fill_walkable`],
//!   [`radius_outline`], [`radius_outline_walkable`]
//! - **Lines**: [`line_trace`], [`line_trace_walkable`],
//!   [`line_of_sight`], [`line_of_sight_check`]
//!
//! All queries are pure: they retain no state and never mutate the grid.
//! Results identify tiles by position, in the grid's own coordinates.
//! Anchor arguments (`center`, `start`, `stop`) must reference existing
//! in-grid tiles; anything else reports [`GridError::OutOfBounds`].

mod lines;
mod shapes;

pub use lines::{line_of_sight, line_of_sight_check, line_trace, line_trace_walkable};
pub use shapes::{
    radius_fill, radius_fill_walkable, radius_outline, radius_outline_walkable, rectangle_fill,
    rectangle_fill_walkable, rectangle_outline,
};

use tilegrid_core::{GridError, Point, TileGrid};

/// Validate that `p` references an existing in-grid tile.
pub(crate) fn anchor<G: TileGrid>(grid: &G, p: Point) -> Result<(), GridError> {
    if grid.tile(p).is_none() {
        return Err(GridError::OutOfBounds(p));
    }
    Ok(())
}

#[cfg(test)]
pub(crate) mod testgrid {
    use tilegrid_core::{DenseGrid, Point, Tile};

    #[derive(Debug, Clone)]
    pub(crate) struct TestTile {
        pub(crate) pos: Point,
        pub(crate) walkable: bool,
        pub(crate) weight: f32,
    }

    impl Tile for TestTile {
        fn x(&self) -> i32 {
            self.pos.x
        }
        fn y(&self) -> i32 {
            self.pos.y
        }
        fn is_walkable(&self) -> bool {
            self.walkable
        }
        fn weight(&self) -> f32 {
            self.weight
        }
    }

    /// Build a grid from a string map: `.` floor, `#` wall, `1`-`9` floor
    /// with that weight, space for an empty cell.
    pub(crate) fn grid(map: &str) -> DenseGrid<TestTile> {
        let lines: Vec<&str> = map.lines().collect();
        let height = lines.len() as i32;
        let width = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0) as i32;
        let mut grid = DenseGrid::new(width, height);
        for (y, line) in lines.iter().enumerate() {
            for (x, ch) in line.chars().enumerate() {
                let pos = Point::new(x as i32, y as i32);
                let tile = match ch {
                    '.' => TestTile {
                        pos,
                        walkable: true,
                        weight: 1.0,
                    },
                    '#' => TestTile {
                        pos,
                        walkable: false,
                        weight: 1.0,
                    },
                    d @ '1'..='9' => TestTile {
                        pos,
                        walkable: true,
                        weight: d.to_digit(10).unwrap() as f32,
                    },
                    _ => continue,
                };
                grid.place(tile).unwrap();
            }
        }
        grid
    }
}
