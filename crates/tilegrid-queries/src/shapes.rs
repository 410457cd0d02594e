//! Rectangle and radius fills and outlines.

use tilegrid_core::{GridError, Point, Range, Tile, TileGrid, euclidean_sq};

use crate::anchor;

/// All existing tiles with x ∈ \[center.x − half_x, center.x + half_x\] and
/// y ∈ \[center.y − half_y, center.y + half_y\], clipped to the grid bounds,
/// in row-major order.
pub fn rectangle_fill<G: TileGrid>(
    grid: &G,
    center: Point,
    half_x: i32,
    half_y: i32,
) -> Result<Vec<Point>, GridError> {
    anchor(grid, center)?;
    let rect = unclamped_rect(center, half_x, half_y).intersect(grid.bounds());
    Ok(rect.iter().filter(|&p| grid.tile(p).is_some()).collect())
}

/// [`rectangle_fill`] restricted to walkable tiles.
pub fn rectangle_fill_walkable<G: TileGrid>(
    grid: &G,
    center: Point,
    half_x: i32,
    half_y: i32,
) -> Result<Vec<Point>, GridError> {
    anchor(grid, center)?;
    let rect = unclamped_rect(center, half_x, half_y).intersect(grid.bounds());
    Ok(rect.iter().filter(|&p| grid.is_walkable(p)).collect())
}

/// The existing tiles on the border of the *unclamped* rectangle around
/// `center` (top and bottom rows, left and right columns).
///
/// Border membership is decided before clipping: a rectangle extending off
/// the grid yields a partial ring, not one clamped to the visible box.
/// Callers wanting a complete ring must keep the rectangle in bounds.
pub fn rectangle_outline<G: TileGrid>(
    grid: &G,
    center: Point,
    half_x: i32,
    half_y: i32,
) -> Result<Vec<Point>, GridError> {
    anchor(grid, center)?;
    let half_x = half_x.max(0);
    let half_y = half_y.max(0);
    let (x0, x1) = (center.x - half_x, center.x + half_x);
    let (y0, y1) = (center.y - half_y, center.y + half_y);

    let mut out = Vec::new();
    let mut push = |p: Point| {
        if grid.tile(p).is_some() {
            out.push(p);
        }
    };
    for x in x0..=x1 {
        push(Point::new(x, y0));
    }
    for y in (y0 + 1)..y1 {
        push(Point::new(x0, y));
        if x1 != x0 {
            push(Point::new(x1, y));
        }
    }
    if y1 != y0 {
        for x in x0..=x1 {
            push(Point::new(x, y1));
        }
    }
    Ok(out)
}

/// All existing tiles within Euclidean radius `r` of `center`, clipped to
/// the grid bounds, in row-major order.
///
/// Inclusion is per row: for row offset dy the columns span
/// \[⌈center.x − dx⌉, ⌊center.x + dx⌋\] with dx = √(r² − dy²). Near the
/// boundary this can differ by one tile from the squared-distance test used
/// by [`radius_fill_walkable`]; the two definitions are deliberately kept
/// distinct.
pub fn radius_fill<G: TileGrid>(grid: &G, center: Point, r: f64) -> Result<Vec<Point>, GridError> {
    anchor(grid, center)?;
    let r = r.max(0.0);
    let bounds = grid.bounds();
    let mut out = Vec::new();
    let y0 = ((center.y as f64 - r).ceil() as i32).max(bounds.min.y);
    let y1 = ((center.y as f64 + r).floor() as i32).min(bounds.max.y - 1);
    for y in y0..=y1 {
        let dy = (y - center.y) as f64;
        let dx = (r * r - dy * dy).sqrt();
        let x0 = ((center.x as f64 - dx).ceil() as i32).max(bounds.min.x);
        let x1 = ((center.x as f64 + dx).floor() as i32).min(bounds.max.x - 1);
        for x in x0..=x1 {
            let p = Point::new(x, y);
            if grid.tile(p).is_some() {
                out.push(p);
            }
        }
    }
    Ok(out)
}

/// All walkable tiles whose squared Euclidean distance to `center` is at
/// most r², clipped to the grid bounds, in row-major order.
///
/// See [`radius_fill`] for why this test is kept separate from the row-span
/// test.
pub fn radius_fill_walkable<G: TileGrid>(
    grid: &G,
    center: Point,
    r: f64,
) -> Result<Vec<Point>, GridError> {
    anchor(grid, center)?;
    let r = r.max(0.0);
    let reach = r.floor() as i32;
    let rect = unclamped_rect(center, reach, reach).intersect(grid.bounds());
    Ok(rect
        .iter()
        .filter(|&p| (euclidean_sq(p, center) as f64) <= r * r && grid.is_walkable(p))
        .collect())
}

/// The existing tiles on the circle of radius `r` around `center`.
///
/// Midpoint-style rasterization: for each r′ up to ⌊r·√0.5⌋ the eight
/// symmetric points at offset (±d, ±r′) and (±r′, ±d) with d = ⌊√(r²−r′²)⌋
/// are emitted, de-duplicated and clipped to the grid.
pub fn radius_outline<G: TileGrid>(
    grid: &G,
    center: Point,
    r: f64,
) -> Result<Vec<Point>, GridError> {
    outline_points(grid, center, r, |_| true)
}

/// [`radius_outline`] restricted to walkable tiles.
pub fn radius_outline_walkable<G: TileGrid>(
    grid: &G,
    center: Point,
    r: f64,
) -> Result<Vec<Point>, GridError> {
    outline_points(grid, center, r, |t| t.is_walkable())
}

fn outline_points<G: TileGrid>(
    grid: &G,
    center: Point,
    r: f64,
    keep: impl Fn(&G::Tile) -> bool,
) -> Result<Vec<Point>, GridError> {
    anchor(grid, center)?;
    let r = r.max(0.0);
    let mut out: Vec<Point> = Vec::new();
    let rp_max = (r * std::f64::consts::FRAC_1_SQRT_2).floor() as i32;
    for rp in 0..=rp_max {
        let d = (r * r - (rp * rp) as f64).sqrt().floor() as i32;
        let offsets = [
            (d, rp),
            (-d, rp),
            (d, -rp),
            (-d, -rp),
            (rp, d),
            (-rp, d),
            (rp, -d),
            (-rp, -d),
        ];
        for (ox, oy) in offsets {
            let p = center.shift(ox, oy);
            if out.contains(&p) {
                continue;
            }
            if grid.tile(p).is_some_and(&keep) {
                out.push(p);
            }
        }
    }
    Ok(out)
}

fn unclamped_rect(center: Point, half_x: i32, half_y: i32) -> Range {
    let half_x = half_x.max(0);
    let half_y = half_y.max(0);
    Range {
        min: Point::new(center.x - half_x, center.y - half_y),
        max: Point::new(center.x + half_x + 1, center.y + half_y + 1),
    }
}
