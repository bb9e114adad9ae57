use crate::math::{distance, points_equal, Point2};

/// Orientation of a segment relative to the coordinate axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
    /// Neither coordinate is shared by the end points.
    Oblique,
}

/// A straight segment between two ordered end points.
///
/// Segments in this crate are expected to be axis-aligned, but the type does
/// not enforce it. Zero-length segments are representable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub start: Point2,
    pub end: Point2,
}

impl Segment {
    /// Creates a segment from `start` to `end`.
    #[must_use]
    pub fn new(start: Point2, end: Point2) -> Self {
        Self { start, end }
    }

    /// Returns the axis orientation of the segment.
    ///
    /// A zero-length segment shares both coordinates and is reported as
    /// [`Orientation::Horizontal`].
    #[must_use]
    pub fn orientation(&self) -> Orientation {
        if self.is_horizontal() {
            Orientation::Horizontal
        } else if self.is_vertical() {
            Orientation::Vertical
        } else {
            Orientation::Oblique
        }
    }

    #[must_use]
    pub fn is_horizontal(&self) -> bool {
        self.start.y == self.end.y
    }

    #[must_use]
    pub fn is_vertical(&self) -> bool {
        self.start.x == self.end.x
    }

    /// Returns `true` if both end points coincide.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        points_equal(&self.start, &self.end)
    }

    #[must_use]
    pub fn length(&self) -> f64 {
        distance(&self.start, &self.end)
    }

    #[must_use]
    pub fn midpoint(&self) -> Point2 {
        nalgebra::center(&self.start, &self.end)
    }

    /// Returns the same segment traversed in the opposite direction.
    #[must_use]
    pub fn reversed(&self) -> Self {
        Self::new(self.end, self.start)
    }

    /// Returns `true` if `other` covers the same span, in either direction.
    #[must_use]
    pub fn same_span(&self, other: &Segment) -> bool {
        segments_equal(self, other)
    }
}

/// Unordered segment equality: `a` equals `b` or `b` reversed.
///
/// A boundary shared by two rectangles can be traversed in either
/// direction, so direction is ignored.
#[must_use]
pub fn segments_equal(a: &Segment, b: &Segment) -> bool {
    (points_equal(&a.start, &b.start) && points_equal(&a.end, &b.end))
        || (points_equal(&a.start, &b.end) && points_equal(&a.end, &b.start))
}

/// Joins consecutive points into segments.
///
/// Returns `None` when fewer than two points are given.
#[must_use]
pub fn polyline_segments(points: &[Point2]) -> Option<Vec<Segment>> {
    if points.len() < 2 {
        return None;
    }
    Some(
        points
            .windows(2)
            .map(|pair| Segment::new(pair[0], pair[1]))
            .collect(),
    )
}
