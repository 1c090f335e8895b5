use crate::raster::{Color, PixelEdit, Point, Raster};

/// Every pixel of the axis-aligned rectangle spanned by `a` and `b`,
/// inclusive on both axes.
pub fn rectangle(a: Point, b: Point, color: Color) -> Vec<PixelEdit> {
    let (x_start, x_end) = (a.x.min(b.x), a.x.max(b.x));
    let (y_start, y_end) = (a.y.min(b.y), a.y.max(b.y));

    let mut drawn = Vec::new();
    for y in y_start..=y_end {
        for x in x_start..=x_end {
            drawn.push(PixelEdit::new(x, y, color));
        }
    }
    drawn
}

/// A filled disk centered at `center` with radius equal to the Euclidean
/// distance to `edge`, clipped to the raster bounds. Scans the ceiling of
/// the radius bounding box and keeps points whose distance from the center
/// is at most the radius.
pub fn disk(center: Point, edge: Point, raster: &Raster, color: Color) -> Vec<PixelEdit> {
    let radius = f64::from(edge.x - center.x).hypot(f64::from(edge.y - center.y));
    let reach = radius.ceil() as i32;

    let mut drawn = Vec::new();
    for dy in -reach..=reach {
        for dx in -reach..=reach {
            let dist = f64::from(dx).hypot(f64::from(dy));
            if dist > radius {
                continue;
            }
            let (x, y) = (center.x + dx, center.y + dy);
            if raster.in_bounds(x, y) {
                drawn.push(PixelEdit::new(x, y, color));
            }
        }
    }
    drawn
}
