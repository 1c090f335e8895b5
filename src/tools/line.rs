use crate::raster::{Color, PixelEdit, Point};

/// Rasterize a straight segment between two points.
///
/// Steps along the axis with the greater absolute delta, endpoints swapped
/// so stepping increases, and rounds the other coordinate once per step.
/// Numerically stable for all slopes, and the point set is the same in
/// either endpoint order.
pub fn trace_line(from: Point, to: Point, color: Color) -> Vec<PixelEdit> {
    let (mut from, mut to) = (from, to);
    let mut points = Vec::new();

    if (from.x - to.x).abs() > (from.y - to.y).abs() {
        if from.x > to.x {
            std::mem::swap(&mut from, &mut to);
        }
        let slope = f64::from(to.y - from.y) / f64::from(to.x - from.x);
        let mut y = f64::from(from.y);
        for x in from.x..=to.x {
            points.push(PixelEdit::new(x, round_half_up(y), color));
            y += slope;
        }
    } else {
        if from.y > to.y {
            std::mem::swap(&mut from, &mut to);
        }
        let dy = to.y - from.y;
        let slope = if dy == 0 {
            0.0 // single point, nothing to step
        } else {
            f64::from(to.x - from.x) / f64::from(dy)
        };
        let mut x = f64::from(from.x);
        for y in from.y..=to.y {
            points.push(PixelEdit::new(round_half_up(x), y, color));
            x += slope;
        }
    }

    points
}

/// Round with halves toward positive infinity, so both line directions
/// pick the same pixel on exact midpoints.
fn round_half_up(v: f64) -> i32 {
    (v + 0.5).floor() as i32
}
