//! Target-rooted path maps for tile grids.
//!
//! [`build_path_map`] runs one reverse weighted shortest-path search
//! (Dijkstra) rooted at a target tile and returns a [`PathMap`]: an
//! immutable shortest-path tree answering, for every reachable tile,
//!
//! - the next tile and compass direction toward the target,
//! - the cumulative movement cost to the target,
//! - the full path to (or from) the target,
//! - and which tiles fall within a movement budget
//!   ([`PathMap::accessible_tiles_from_target`]).
//!
//! Walkability and weights are snapshotted at build time. The map never
//! observes later grid edits; after any walkability or weight change the
//! caller discards it and rebuilds.

mod builder;
mod node;
mod pathmap;

pub use builder::build_path_map;
pub use pathmap::{PathMap, PathNode};

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
