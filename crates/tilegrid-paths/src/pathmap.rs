//! The queryable result of a path-map build.

use tilegrid_core::{GridError, Point, Range};

use crate::node::{NextHop, Node, NodeGraph};

/// A position with its cumulative cost to the target.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathNode {
    pub pos: Point,
    pub cost: f32,
}

/// A precomputed shortest-path tree rooted at one target tile.
///
/// Immutable once built: all queries take `&self`, so a finished map can
/// be shared freely across readers. It answers from its build-time
/// snapshot of the grid; after any walkability or weight change, discard
/// it and rebuild.
///
/// Queries taking a tile position require a walkable tile that the search
/// reached; anything else fails with [`GridError::InvalidTile`]
/// ([`GridError::OutOfBounds`] for coordinates outside the grid).
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathMap {
    graph: NodeGraph,
    target: Point,
}

impl PathMap {
    pub(crate) fn new(graph: NodeGraph, target: Point) -> Self {
        Self { graph, target }
    }

    /// The target tile this map was built for.
    #[inline]
    pub fn target(&self) -> Point {
        self.target
    }

    /// The grid rectangle the map covers.
    #[inline]
    pub fn bounds(&self) -> Range {
        self.graph.bounds
    }

    fn node(&self, tile: Point) -> Result<&Node, GridError> {
        let i = self
            .graph
            .idx(tile)
            .ok_or(GridError::OutOfBounds(tile))?;
        let n = &self.graph.nodes[i];
        if !n.walkable || n.next == NextHop::None {
            return Err(GridError::InvalidTile(tile));
        }
        Ok(n)
    }

    /// Whether `tile` was reached by the search.
    #[inline]
    pub fn is_reachable(&self, tile: Point) -> bool {
        self.node(tile).is_ok()
    }

    /// The neighboring tile one step closer to the target. The target
    /// maps to itself.
    pub fn next_tile_toward_target(&self, tile: Point) -> Result<Point, GridError> {
        match self.node(tile)?.next {
            NextHop::Target => Ok(self.target),
            NextHop::Node(i) => Ok(self.graph.point(i)),
            NextHop::None => unreachable!("node() rejects unreached tiles"),
        }
    }

    /// The compass-octant sign vector toward the next hop; zero for the
    /// target.
    pub fn next_direction_toward_target(&self, tile: Point) -> Result<Point, GridError> {
        Ok(self.node(tile)?.direction)
    }

    /// The cumulative weighted cost from `tile` to the target; 0 for the
    /// target itself.
    pub fn cost_to_target(&self, tile: Point) -> Result<f32, GridError> {
        Ok(self.node(tile)?.cost)
    }

    /// All tiles the target can be reached from, in row-major order.
    ///
    /// With `max_cost > 0` only tiles whose cost stays within that budget
    /// are returned. The target itself (cost 0) is excluded by
    /// construction.
    pub fn accessible_tiles_from_target(&self, max_cost: f32) -> Vec<Point> {
        self.graph
            .nodes
            .iter()
            .enumerate()
            .filter(|(_, n)| {
                n.next != NextHop::None && n.cost > 0.0 && (max_cost <= 0.0 || n.cost <= max_cost)
            })
            .map(|(i, _)| self.graph.point(i))
            .collect()
    }

    /// Like [`accessible_tiles_from_target`](Self::accessible_tiles_from_target),
    /// but paired with each tile's cost.
    pub fn accessible_nodes_from_target(&self, max_cost: f32) -> Vec<PathNode> {
        self.graph
            .nodes
            .iter()
            .enumerate()
            .filter(|(_, n)| {
                n.next != NextHop::None && n.cost > 0.0 && (max_cost <= 0.0 || n.cost <= max_cost)
            })
            .map(|(i, n)| PathNode {
                pos: self.graph.point(i),
                cost: n.cost,
            })
            .collect()
    }

    /// The tile sequence from `tile` to the target, both inclusive.
    pub fn path_to_target(&self, tile: Point) -> Result<Vec<Point>, GridError> {
        self.node(tile)?;
        let mut path = Vec::new();
        let mut i = self.graph.idx(tile).ok_or(GridError::OutOfBounds(tile))?;
        loop {
            path.push(self.graph.point(i));
            match self.graph.nodes[i].next {
                NextHop::Target => break,
                NextHop::Node(j) => i = j,
                NextHop::None => unreachable!("reached nodes only link to reached nodes"),
            }
        }
        Ok(path)
    }

    /// The tile sequence from the target out to `tile`, both inclusive.
    pub fn path_from_target(&self, tile: Point) -> Result<Vec<Point>, GridError> {
        let mut path = self.path_to_target(tile)?;
        path.reverse();
        Ok(path)
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;
    use crate::build_path_map;
    use crate::testgrid::grid;

    #[test]
    fn path_map_round_trip() {
        let g = grid("....\n.#..\n....");
        let map = build_path_map(&g, Point::new(3, 2), true, 1.5).unwrap();
        let json = serde_json::to_string(&map).unwrap();
        let back: PathMap = serde_json::from_str(&json).unwrap();
        assert_eq!(back.target(), map.target());
        assert_eq!(back.bounds(), map.bounds());
        for p in map.bounds().iter() {
            assert_eq!(back.is_reachable(p), map.is_reachable(p));
            if map.is_reachable(p) {
                assert_eq!(
                    back.cost_to_target(p).unwrap(),
                    map.cost_to_target(p).unwrap()
                );
                assert_eq!(
                    back.path_to_target(p).unwrap(),
                    map.path_to_target(p).unwrap()
                );
            }
        }
    }

    #[test]
    fn path_node_round_trip() {
        let n = PathNode {
            pos: Point::new(3, 7),
            cost: 4.5,
        };
        let json = serde_json::to_string(&n).unwrap();
        let back: PathNode = serde_json::from_str(&json).unwrap();
        assert_eq!(n, back);
    }
}
