//! [`DenseGrid`] — a reference [`TileGrid`] container.
//!
//! Hosts usually have their own tile storage and implement [`TileGrid`]
//! directly; `DenseGrid` exists as a canonical row-major container for
//! tests, tools, and hosts without one.

use crate::error::GridError;
use crate::geom::{Point, Range};
use crate::tile::{Tile, TileGrid};

/// A fixed-size rectangular grid of optional tiles in row-major storage.
#[derive(Debug, Clone)]
pub struct DenseGrid<T> {
    tiles: Vec<Option<T>>,
    bounds: Range,
    width: usize,
}

impl<T: Tile> DenseGrid<T> {
    /// Create an empty grid of the given dimensions.
    pub fn new(width: i32, height: i32) -> Self {
        let w = width.max(0);
        let h = height.max(0);
        Self {
            tiles: (0..(w as usize * h as usize)).map(|_| None).collect(),
            bounds: Range::new(0, 0, w, h),
            width: w as usize,
        }
    }

    /// Build a grid sized `width × height` from an iterator of tiles, each
    /// placed at its own coordinates.
    pub fn from_tiles<I>(width: i32, height: i32, tiles: I) -> Result<Self, GridError>
    where
        I: IntoIterator<Item = T>,
    {
        let mut grid = Self::new(width, height);
        for t in tiles {
            grid.place(t)?;
        }
        Ok(grid)
    }

    #[inline]
    fn index(&self, p: Point) -> Option<usize> {
        if !self.bounds.contains(p) {
            return None;
        }
        Some((p.y as usize) * self.width + (p.x as usize))
    }

    /// Insert `tile` at its own coordinates, returning any tile it
    /// replaced. Fails if the coordinates fall outside the grid.
    pub fn place(&mut self, tile: T) -> Result<Option<T>, GridError> {
        let p = tile.pos();
        let i = self.index(p).ok_or(GridError::OutOfBounds(p))?;
        Ok(self.tiles[i].replace(tile))
    }

    /// Remove and return the tile at `p`, leaving the cell empty.
    pub fn remove(&mut self, p: Point) -> Option<T> {
        let i = self.index(p)?;
        self.tiles[i].take()
    }

    /// Mutable access to the tile at `p`.
    pub fn tile_mut(&mut self, p: Point) -> Option<&mut T> {
        let i = self.index(p)?;
        self.tiles[i].as_mut()
    }

    /// Row-major iterator over `(Point, Option<&T>)` for every cell.
    pub fn cells(&self) -> impl Iterator<Item = (Point, Option<&T>)> {
        self.bounds.iter().map(|p| (p, self.tile(p)))
    }
}

impl<T: Tile> TileGrid for DenseGrid<T> {
    type Tile = T;

    #[inline]
    fn bounds(&self) -> Range {
        self.bounds
    }

    #[inline]
    fn tile(&self, p: Point) -> Option<&T> {
        let i = self.index(p)?;
        self.tiles[i].as_ref()
    }
}
