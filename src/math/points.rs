use super::Point2;

/// Returns `true` if both coordinates are exactly equal.
#[must_use]
pub fn points_equal(a: &Point2, b: &Point2) -> bool {
    a.x == b.x && a.y == b.y
}

/// Euclidean distance between two points.
#[must_use]
pub fn distance(a: &Point2, b: &Point2) -> f64 {
    nalgebra::distance(a, b)
}

/// Sorts `points` by increasing distance from `reference`.
///
/// The sort is stable: points at equal distance keep their relative order.
pub fn sort_by_distance(points: &mut [Point2], reference: &Point2) {
    points.sort_by(|a, b| distance(reference, a).total_cmp(&distance(reference, b)));
}

/// Returns the ring of points at Chebyshev distance `offset` around `center`,
/// stepping one unit at a time.
///
/// The walk starts just below the top-right corner `(x + offset, y + offset)`
/// and visits the right, top, left and bottom sides in that order, ending on
/// the starting corner. The ring holds `8 * offset` points.
#[must_use]
pub fn points_around(center: &Point2, offset: u32) -> Vec<Point2> {
    let per_side = offset * 2;
    let mut x = center.x + f64::from(offset);
    let mut y = center.y + f64::from(offset);
    let mut ring = Vec::with_capacity(per_side as usize * 4);

    for _ in 0..per_side {
        y -= 1.0;
        ring.push(Point2::new(x, y));
    }
    for _ in 0..per_side {
        x -= 1.0;
        ring.push(Point2::new(x, y));
    }
    for _ in 0..per_side {
        y += 1.0;
        ring.push(Point2::new(x, y));
    }
    for _ in 0..per_side {
        x += 1.0;
        ring.push(Point2::new(x, y));
    }
    ring
}
