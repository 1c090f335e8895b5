use std::collections::{HashSet, VecDeque};

use crate::raster::{Color, PixelEdit, Point, Raster};

/// 4-connected neighborhood.
const AROUND: [(i32, i32); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Flood fill: collect the 4-connected region of pixels matching the color
/// under `pos` and recolor it with `fill`.
///
/// Visited coordinates are tracked in an explicit set rather than by
/// recoloring, since the batch never touches the raster while the
/// traversal runs. Filling with the region's own color is a no-op and
/// returns `None`, as does a start position outside the raster.
pub fn flood_fill(pos: Point, raster: &Raster, fill: Color) -> Option<Vec<PixelEdit>> {
    let target = raster.pixel(pos.x, pos.y).ok()?;
    if target == fill {
        return None;
    }

    let mut visited = HashSet::from([(pos.x, pos.y)]);
    let mut queue = VecDeque::from([pos]);
    let mut drawn = Vec::new();

    while let Some(p) = queue.pop_front() {
        drawn.push(PixelEdit::new(p.x, p.y, fill));
        for (dx, dy) in AROUND {
            let (x, y) = (p.x + dx, p.y + dy);
            if raster.in_bounds(x, y)
                && raster.pixel(x, y) == Ok(target)
                && visited.insert((x, y))
            {
                queue.push_back(Point::new(x, y));
            }
        }
    }

    Some(drawn)
}
