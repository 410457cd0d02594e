//! The shared error type for grid queries and path-map operations.

use std::fmt;

use crate::geom::Point;

/// Errors reported by geometry queries and path maps.
///
/// All failures are synchronous and immediate: there is no retry, no
/// partial result, and no silent recovery.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GridError {
    /// A coordinate argument resolves outside the grid, or to a cell that
    /// holds no tile.
    OutOfBounds(Point),
    /// A path-map build was requested for a non-walkable target tile.
    InvalidTarget(Point),
    /// A path-map query named a tile that is not walkable or was not
    /// reached by the search.
    InvalidTile(Point),
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds(p) => write!(f, "no tile at {p}"),
            Self::InvalidTarget(p) => write!(f, "target tile {p} is not walkable"),
            Self::InvalidTile(p) => write!(f, "tile {p} has no path data"),
        }
    }
}

impl std::error::Error for GridError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_offending_point() {
        let e = GridError::OutOfBounds(Point::new(9, -1));
        assert_eq!(e.to_string(), "no tile at (9, -1)");
        let e = GridError::InvalidTarget(Point::new(0, 0));
        assert!(e.to_string().contains("not walkable"));
    }
}
