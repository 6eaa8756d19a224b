use geo::Coord;

/// Douglas-Peucker simplification of a ring or polyline.
///
/// Keeps the first and last point, then repeatedly keeps the interior point
/// farthest from the chord of the current span while that distance exceeds
/// `tolerance`. Only points of the input are ever returned, in input order.
/// Sequences of two points or fewer are returned unchanged.
///
/// Spans are processed from an explicit stack, so rings with many thousands
/// of vertices do not grow the call stack.
pub fn simplify(points: &[Coord<f64>], tolerance: f64) -> Vec<Coord<f64>> {
    if points.len() <= 2 { return points.to_vec() }

    let last = points.len() - 1;
    let mut keep = vec![false; points.len()];
    keep[0] = true;
    keep[last] = true;

    let mut spans = vec![(0, last)];
    while let Some((start, end)) = spans.pop() {
        let Some((index, distance)) = farthest(points, start, end) else { continue };
        if distance > tolerance {
            keep[index] = true;
            spans.push((index, end));
            spans.push((start, index));
        }
    }

    points.iter().zip(&keep)
        .filter_map(|(point, &kept)| kept.then_some(*point))
        .collect()
}

/// Interior point of `points[start..=end]` with the largest distance to the chord.
/// Ties go to the lowest index. None when the span has no interior points.
fn farthest(points: &[Coord<f64>], start: usize, end: usize) -> Option<(usize, f64)> {
    let (a, b) = (points[start], points[end]);
    let mut best: Option<(usize, f64)> = None;
    for index in start + 1..end {
        let distance = perpendicular_distance(&points[index], &a, &b);
        if best.is_none_or(|(_, max)| distance > max) {
            best = Some((index, distance));
        }
    }
    best
}

/// Distance from `p` to the line through `a` and `b`; plain distance to `a` when `a == b`.
fn perpendicular_distance(p: &Coord<f64>, a: &Coord<f64>, b: &Coord<f64>) -> f64 {
    let (dx, dy) = (b.x - a.x, b.y - a.y);
    let length = dx.hypot(dy);
    if length == 0.0 { return (p.x - a.x).hypot(p.y - a.y) }
    ((p.x - a.x) * dy - (p.y - a.y) * dx).abs() / length
}
