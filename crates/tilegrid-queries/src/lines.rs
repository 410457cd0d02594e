//! Supercover line tracing and line of sight.
//!
//! The walk touches every cell the ideal segment between two tile centers
//! passes through (a *supercover* line, denser than Bresenham).

use tilegrid_core::{GridError, Point, TileGrid, euclidean};

use crate::anchor;

/// Supercover walk from `start` to `stop`, yielding `start` first.
///
/// Keeps per-axis step counters ix/iy against nx = |Δx|, ny = |Δy| and
/// moves along whichever axis has covered the smaller fraction of its
/// span: horizontally when (0.5+ix)/nx < (0.5+iy)/ny, else vertically.
struct SupercoverWalk {
    cur: Point,
    sx: i32,
    sy: i32,
    nx: f64,
    ny: f64,
    ix: f64,
    iy: f64,
    started: bool,
    done: bool,
}

impl SupercoverWalk {
    fn new(start: Point, stop: Point) -> Self {
        let d = stop - start;
        Self {
            cur: start,
            sx: d.x.signum(),
            sy: d.y.signum(),
            nx: d.x.abs() as f64,
            ny: d.y.abs() as f64,
            ix: 0.0,
            iy: 0.0,
            started: false,
            done: false,
        }
    }
}

impl Iterator for SupercoverWalk {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        if self.done {
            return None;
        }
        if !self.started {
            self.started = true;
            return Some(self.cur);
        }
        if self.ix >= self.nx && self.iy >= self.ny {
            self.done = true;
            return None;
        }
        // A zero span makes the fraction +inf, forcing the other axis.
        if (0.5 + self.ix) / self.nx < (0.5 + self.iy) / self.ny {
            self.ix += 1.0;
            self.cur.x += self.sx;
        } else {
            self.iy += 1.0;
            self.cur.y += self.sy;
        }
        Some(self.cur)
    }
}

#[inline]
fn within_budget(start: Point, p: Point, max_distance: f64) -> bool {
    max_distance <= 0.0 || euclidean(start, p) <= max_distance
}

/// Every cell on the supercover line from `start` to `stop`, including
/// both endpoints.
///
/// `max_distance` (0 → unlimited) truncates the line: cells farther than
/// that Euclidean distance from `start` are dropped. `start` is always
/// included.
pub fn line_trace<G: TileGrid>(
    grid: &G,
    start: Point,
    stop: Point,
    max_distance: f64,
) -> Result<Vec<Point>, GridError> {
    anchor(grid, start)?;
    anchor(grid, stop)?;
    let mut out = Vec::new();
    for p in SupercoverWalk::new(start, stop) {
        if p != start && !within_budget(start, p, max_distance) {
            break;
        }
        out.push(p);
    }
    Ok(out)
}

/// [`line_trace`] keeping only walkable cells.
///
/// Empty and non-walkable cells (including `start` itself) are omitted
/// from the result, but the walk continues past them — unlike
/// [`line_of_sight`], which stops there.
pub fn line_trace_walkable<G: TileGrid>(
    grid: &G,
    start: Point,
    stop: Point,
    max_distance: f64,
) -> Result<Vec<Point>, GridError> {
    anchor(grid, start)?;
    anchor(grid, stop)?;
    let mut out = Vec::new();
    for p in SupercoverWalk::new(start, stop) {
        if p != start && !within_budget(start, p, max_distance) {
            break;
        }
        if grid.is_walkable(p) {
            out.push(p);
        }
    }
    Ok(out)
}

/// The walkable prefix of the supercover line from `start` to `stop`.
///
/// The sequence ends just before the first empty or non-walkable cell, or
/// once `max_distance` (0 → unlimited) is exceeded. It spans all the way
/// to `stop` only when the line is unobstructed.
pub fn line_of_sight<G: TileGrid>(
    grid: &G,
    start: Point,
    stop: Point,
    max_distance: f64,
) -> Result<Vec<Point>, GridError> {
    anchor(grid, start)?;
    anchor(grid, stop)?;
    let mut out = Vec::new();
    for p in SupercoverWalk::new(start, stop) {
        if !within_budget(start, p, max_distance) || !grid.is_walkable(p) {
            break;
        }
        out.push(p);
    }
    Ok(out)
}

/// Whether `stop` is visible from `start`: true iff the supercover line
/// reaches `stop` without crossing an empty or non-walkable cell and
/// within `max_distance` (0 → unlimited).
pub fn line_of_sight_check<G: TileGrid>(
    grid: &G,
    start: Point,
    stop: Point,
    max_distance: f64,
) -> Result<bool, GridError> {
    Ok(line_of_sight(grid, start, stop, max_distance)?.last() == Some(&stop))
}
