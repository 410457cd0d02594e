//! Per-cell search state and the flat node graph.

use tilegrid_core::{Point, Range, Tile, TileGrid};

/// Where a node's shortest path continues.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub(crate) enum NextHop {
    /// Not reached by the search; the node carries no valid path data.
    None,
    /// This node is the target itself.
    Target,
    /// Flat index of the neighboring node one step closer to the target.
    Node(usize),
}

/// One grid cell: walkability/weight snapshot plus path state.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub(crate) struct Node {
    pub(crate) walkable: bool,
    pub(crate) weight: f32,
    pub(crate) next: NextHop,
    /// Octant sign vector toward the next hop; zero for the target.
    pub(crate) direction: Point,
    /// Cumulative cost to the target. Valid only once reached.
    pub(crate) cost: f32,
    /// Still queued for expansion (lazy heap invalidation).
    pub(crate) open: bool,
}

impl Node {
    fn empty() -> Self {
        Self {
            walkable: false,
            weight: 1.0,
            next: NextHop::None,
            direction: Point::ZERO,
            cost: 0.0,
            open: false,
        }
    }
}

/// Flat row-major node array over a grid's bounds.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub(crate) struct NodeGraph {
    pub(crate) nodes: Vec<Node>,
    pub(crate) bounds: Range,
    pub(crate) width: usize,
}

impl NodeGraph {
    /// Snapshot a grid: one node per cell, walkability and weight copied
    /// out of the tiles. Empty cells become permanently non-walkable
    /// nodes. Weights below 1 are brought up to 1.
    pub(crate) fn snapshot<G: TileGrid>(grid: &G) -> Self {
        let bounds = grid.bounds();
        let width = bounds.width().max(0) as usize;
        let nodes = bounds
            .iter()
            .map(|p| match grid.tile(p) {
                Some(t) => Node {
                    walkable: t.is_walkable(),
                    weight: t.weight().max(1.0),
                    ..Node::empty()
                },
                None => Node::empty(),
            })
            .collect();
        Self {
            nodes,
            bounds,
            width,
        }
    }

    /// Convert a `Point` to a flat index. Returns `None` if out of bounds.
    #[inline]
    pub(crate) fn idx(&self, p: Point) -> Option<usize> {
        if !self.bounds.contains(p) {
            return None;
        }
        let x = (p.x - self.bounds.min.x) as usize;
        let y = (p.y - self.bounds.min.y) as usize;
        Some(y * self.width + x)
    }

    /// Convert a flat index back to a `Point`.
    #[inline]
    pub(crate) fn point(&self, idx: usize) -> Point {
        let x = (idx % self.width) as i32 + self.bounds.min.x;
        let y = (idx / self.width) as i32 + self.bounds.min.y;
        Point::new(x, y)
    }

    /// Snapshot walkability at `p` (false out of bounds).
    #[inline]
    pub(crate) fn walkable(&self, p: Point) -> bool {
        self.idx(p).is_some_and(|i| self.nodes[i].walkable)
    }
}

/// Heap entry ordered by cost, reversed so `BinaryHeap` (a max-heap) pops
/// the cheapest first. Equal costs pop in ascending flat-index order,
/// making builds deterministic.
#[derive(Clone, Copy)]
pub(crate) struct QueueRef {
    pub(crate) idx: usize,
    pub(crate) cost: f32,
}

impl PartialEq for QueueRef {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == std::cmp::Ordering::Equal
    }
}

impl Eq for QueueRef {}

impl Ord for QueueRef {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        other
            .cost
            .total_cmp(&self.cost)
            .then_with(|| other.idx.cmp(&self.idx))
    }
}

impl PartialOrd for QueueRef {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testgrid::grid;
    use std::collections::BinaryHeap;

    #[test]
    fn snapshot_copies_walkability_and_weight() {
        let g = grid(".#\n3 ");
        let graph = NodeGraph::snapshot(&g);
        assert_eq!(graph.nodes.len(), 4);
        assert!(graph.walkable(Point::new(0, 0)));
        assert!(!graph.walkable(Point::new(1, 0)));
        assert!(!graph.walkable(Point::new(1, 1))); // empty cell
        let i = graph.idx(Point::new(0, 1)).unwrap();
        assert_eq!(graph.nodes[i].weight, 3.0);
    }

    #[test]
    fn idx_point_round_trip() {
        let g = grid("...\n...\n...\n...");
        let graph = NodeGraph::snapshot(&g);
        for p in graph.bounds.iter() {
            let i = graph.idx(p).unwrap();
            assert_eq!(graph.point(i), p);
        }
        assert_eq!(graph.idx(Point::new(3, 0)), None);
        assert_eq!(graph.idx(Point::new(0, -1)), None);
    }

    #[test]
    fn heap_pops_cheapest_then_lowest_index() {
        let mut heap = BinaryHeap::new();
        heap.push(QueueRef { idx: 3, cost: 2.0 });
        heap.push(QueueRef { idx: 7, cost: 1.5 });
        heap.push(QueueRef { idx: 1, cost: 2.0 });
        assert_eq!(heap.pop().unwrap().idx, 7);
        assert_eq!(heap.pop().unwrap().idx, 1);
        assert_eq!(heap.pop().unwrap().idx, 3);
    }
}
