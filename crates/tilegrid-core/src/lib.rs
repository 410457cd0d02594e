//! **tilegrid-core** — Geometry primitives and the tile capability traits.
//!
//! This crate provides the foundational types used across the *tilegrid*
//! ecosystem: integer points and rectangles, distance helpers, the
//! [`Tile`]/[`TileGrid`] traits through which the query and pathfinding
//! engines observe a host-owned grid, the shared [`GridError`] type, and a
//! reference [`DenseGrid`] container.

pub mod distance;
pub mod error;
pub mod geom;
pub mod grid;
pub mod tile;

pub use distance::{chebyshev, euclidean, euclidean_sq, manhattan};
pub use error::GridError;
pub use geom::{Point, Range};
pub use grid::DenseGrid;
pub use tile::{Tile, TileGrid};
