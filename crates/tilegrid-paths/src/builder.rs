//! The reverse single-target Dijkstra search.

use std::collections::BinaryHeap;

use log::{debug, trace};
use tilegrid_core::{GridError, Point, Tile, TileGrid};

use crate::node::{NextHop, NodeGraph, QueueRef};
use crate::pathmap::PathMap;

const ORTHOGONAL: [Point; 4] = [
    Point::new(0, -1),
    Point::new(1, 0),
    Point::new(0, 1),
    Point::new(-1, 0),
];

const DIAGONAL: [Point; 4] = [
    Point::new(1, -1),
    Point::new(1, 1),
    Point::new(-1, 1),
    Point::new(-1, -1),
];

/// Build a [`PathMap`] rooted at `target`.
///
/// Runs a reverse weighted shortest-path search from the target over a
/// snapshot of the grid, recording for every reached cell its cumulative
/// cost, next hop, and compass direction toward the target. Entering a
/// tile costs its weight, multiplied by `diagonal_ratio` on diagonal steps
/// (the ratio is raised to 1 if below; weights are ≥ 1 by contract).
///
/// With `allow_diagonals`, a diagonal step qualifies only when both
/// orthogonal cells adjacent to it are walkable, so paths never cut a
/// blocked corner.
///
/// Fails with [`GridError::OutOfBounds`] if `target` lies outside the grid
/// and with [`GridError::InvalidTarget`] if its cell is empty or not
/// walkable.
pub fn build_path_map<G: TileGrid>(
    grid: &G,
    target: Point,
    allow_diagonals: bool,
    diagonal_ratio: f32,
) -> Result<PathMap, GridError> {
    if !grid.contains(target) {
        return Err(GridError::OutOfBounds(target));
    }
    if !grid.tile(target).is_some_and(Tile::is_walkable) {
        return Err(GridError::InvalidTarget(target));
    }
    let ratio = diagonal_ratio.max(1.0);
    debug!(
        "building path map: target={target}, bounds={}, diagonals={allow_diagonals}, ratio={ratio}",
        grid.bounds()
    );

    let mut graph = NodeGraph::snapshot(grid);
    let ti = graph
        .idx(target)
        .ok_or(GridError::OutOfBounds(target))?;
    {
        let t = &mut graph.nodes[ti];
        t.cost = 0.0;
        t.next = NextHop::Target;
        t.direction = Point::ZERO;
        t.open = true;
    }

    let mut open: BinaryHeap<QueueRef> = BinaryHeap::new();
    open.push(QueueRef { idx: ti, cost: 0.0 });

    let mut reached = 1usize;

    while let Some(current) = open.pop() {
        let ci = current.idx;
        if !graph.nodes[ci].open {
            // Stale entry for an already-finalized node.
            continue;
        }
        graph.nodes[ci].open = false;
        let current_cost = graph.nodes[ci].cost;
        let cp = graph.point(ci);

        for d in ORTHOGONAL {
            relax(&mut graph, &mut open, ci, cp, current_cost, d, 1.0, &mut reached);
        }
        if allow_diagonals {
            for d in DIAGONAL {
                // Both orthogonal cells flanking the diagonal must be
                // walkable, or the step would cut through a blocked corner.
                if !graph.walkable(cp.shift(d.x, 0)) || !graph.walkable(cp.shift(0, d.y)) {
                    continue;
                }
                relax(&mut graph, &mut open, ci, cp, current_cost, d, ratio, &mut reached);
            }
        }
    }

    trace!("path map done: {reached}/{} nodes reached", graph.nodes.len());
    Ok(PathMap::new(graph, target))
}

#[allow(clippy::too_many_arguments)]
fn relax(
    graph: &mut NodeGraph,
    open: &mut BinaryHeap<QueueRef>,
    ci: usize,
    cp: Point,
    current_cost: f32,
    d: Point,
    ratio: f32,
    reached: &mut usize,
) {
    let np = cp + d;
    let Some(ni) = graph.idx(np) else {
        return;
    };
    let n = &mut graph.nodes[ni];
    if !n.walkable {
        return;
    }
    // Weight charges for entering the neighbor.
    let candidate = current_cost + n.weight * ratio;
    match n.next {
        NextHop::None => *reached += 1,
        _ if candidate >= n.cost => return,
        _ => {}
    }
    n.cost = candidate;
    n.next = NextHop::Node(ci);
    // Octant from the neighbor toward the node it flows through.
    n.direction = (cp - np).sign();
    n.open = true;
    open.push(QueueRef {
        idx: ni,
        cost: candidate,
    });
}
