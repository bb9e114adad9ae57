use crate::error::{GeometryError, Result};
use crate::math::{is_between, Bounds, Point2};

use super::Segment;

/// An axis-aligned rectangle given by its top-left corner and size.
///
/// The y axis points down, so the top edge sits at `y` and the bottom edge
/// at `y + height`. Width and height are finite and non-negative; zero is
/// allowed and yields degenerate edges.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rectangle {
    x: f64,
    y: f64,
    width: f64,
    height: f64,
}

impl Rectangle {
    /// Creates a new rectangle.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::NonFiniteCoordinate` if `x` or `y` is not
    /// finite, or `GeometryError::InvalidDimension` if `width` or `height`
    /// is negative or not finite.
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Result<Self> {
        for value in [x, y] {
            if !value.is_finite() {
                return Err(GeometryError::NonFiniteCoordinate { value }.into());
            }
        }
        for (dimension, value) in [("width", width), ("height", height)] {
            if !value.is_finite() || value < 0.0 {
                return Err(GeometryError::InvalidDimension { dimension, value }.into());
            }
        }
        Ok(Self {
            x,
            y,
            width,
            height,
        })
    }

    #[must_use]
    pub fn x(&self) -> f64 {
        self.x
    }

    #[must_use]
    pub fn y(&self) -> f64 {
        self.y
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.height
    }

    #[must_use]
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Horizontal extent as `(left, right)`.
    #[must_use]
    pub fn x_span(&self) -> (f64, f64) {
        (self.x, self.right())
    }

    /// Vertical extent as `(top, bottom)`.
    #[must_use]
    pub fn y_span(&self) -> (f64, f64) {
        (self.y, self.bottom())
    }

    /// Returns the corners in winding order: top-left, top-right,
    /// bottom-right, bottom-left.
    #[must_use]
    pub fn corners(&self) -> [Point2; 4] {
        [
            Point2::new(self.x, self.y),
            Point2::new(self.right(), self.y),
            Point2::new(self.right(), self.bottom()),
            Point2::new(self.x, self.bottom()),
        ]
    }

    /// Returns the boundary edges in winding order: top, right, bottom, left.
    ///
    /// Each edge starts where the previous one ends. The order is fixed so
    /// that edges can be addressed by position.
    #[must_use]
    pub fn segments(&self) -> [Segment; 4] {
        let [a, b, c, d] = self.corners();
        [
            Segment::new(a, b),
            Segment::new(b, c),
            Segment::new(c, d),
            Segment::new(d, a),
        ]
    }

    /// Returns `true` if `point` lies within the rectangle.
    ///
    /// With [`Bounds::Closed`] points on the edges count as inside; with
    /// [`Bounds::Open`] only strictly interior points do.
    #[must_use]
    pub fn contains_point(&self, point: &Point2, bounds: Bounds) -> bool {
        is_between(point.x, self.x, self.right(), bounds)
            && is_between(point.y, self.y, self.bottom(), bounds)
    }

    /// Returns `true` if both end points of `segment` lie within the
    /// rectangle under `bounds`.
    ///
    /// With [`Bounds::Closed`] a segment lying on an edge is inside.
    #[must_use]
    pub fn contains_segment(&self, segment: &Segment, bounds: Bounds) -> bool {
        self.contains_point(&segment.start, bounds) && self.contains_point(&segment.end, bounds)
    }

    /// Returns a copy grown by `offset` on every side. A negative offset
    /// shrinks it.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::InvalidDimension` if shrinking would leave a
    /// negative width or height.
    pub fn expanded(&self, offset: f64) -> Result<Self> {
        Self::new(
            self.x - offset,
            self.y - offset,
            self.width + offset * 2.0,
            self.height + offset * 2.0,
        )
    }

    /// Returns the smallest rectangle containing every rectangle in `rects`,
    /// or `None` if there are none.
    #[must_use]
    pub fn bounding_box<'a, I>(rects: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a Rectangle>,
    {
        let mut iter = rects.into_iter();
        let first = iter.next()?;
        let (left, top, right, bottom) = iter.fold(
            (first.x, first.y, first.right(), first.bottom()),
            |(left, top, right, bottom), r| {
                (
                    left.min(r.x),
                    top.min(r.y),
                    right.max(r.right()),
                    bottom.max(r.bottom()),
                )
            },
        );
        Some(Self {
            x: left,
            y: top,
            width: right - left,
            height: bottom - top,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn rect(x: f64, y: f64, w: f64, h: f64) -> Rectangle {
        Rectangle::new(x, y, w, h).unwrap()
    }

    #[test]
    fn rejects_negative_size() {
        assert!(Rectangle::new(0.0, 0.0, -1.0, 5.0).is_err());
        assert!(Rectangle::new(0.0, 0.0, 5.0, -0.5).is_err());
    }

    #[test]
    fn rejects_non_finite_values() {
        assert!(Rectangle::new(f64::NAN, 0.0, 1.0, 1.0).is_err());
        assert!(Rectangle::new(0.0, f64::INFINITY, 1.0, 1.0).is_err());
        assert!(Rectangle::new(0.0, 0.0, f64::NAN, 1.0).is_err());
    }

    #[test]
    fn accepts_zero_size() {
        let r = rect(3.0, 4.0, 0.0, 0.0);
        assert!(r.segments().iter().all(Segment::is_degenerate));
    }

    #[test]
    fn edges_follow_winding_order() {
        let r = rect(0.0, 0.0, 10.0, 5.0);
        let [top, right, bottom, left] = r.segments();
        assert_eq!(top, Segment::new(Point2::new(0.0, 0.0), Point2::new(10.0, 0.0)));
        assert_eq!(right, Segment::new(Point2::new(10.0, 0.0), Point2::new(10.0, 5.0)));
        assert_eq!(bottom, Segment::new(Point2::new(10.0, 5.0), Point2::new(0.0, 5.0)));
        assert_eq!(left, Segment::new(Point2::new(0.0, 5.0), Point2::new(0.0, 0.0)));
        assert!(top.is_horizontal() && bottom.is_horizontal());
        assert!(right.is_vertical() && left.is_vertical());
    }

    #[test]
    fn point_on_edge_depends_on_bounds() {
        let r = rect(0.0, 0.0, 10.0, 10.0);
        let on_edge = Point2::new(10.0, 5.0);
        assert!(r.contains_point(&on_edge, Bounds::Closed));
        assert!(!r.contains_point(&on_edge, Bounds::Open));
        assert!(r.contains_point(&Point2::new(5.0, 5.0), Bounds::Open));
        assert!(!r.contains_point(&Point2::new(11.0, 5.0), Bounds::Closed));
    }

    #[test]
    fn segment_on_edge_is_inside_when_closed() {
        let r = rect(0.0, 0.0, 10.0, 10.0);
        let edge = Segment::new(Point2::new(0.0, 0.0), Point2::new(10.0, 0.0));
        assert!(r.contains_segment(&edge, Bounds::Closed));
        assert!(!r.contains_segment(&edge, Bounds::Open));
        let crossing = Segment::new(Point2::new(5.0, 5.0), Point2::new(15.0, 5.0));
        assert!(!r.contains_segment(&crossing, Bounds::Closed));
    }

    #[test]
    fn expanded_pads_every_side() {
        let r = rect(5.0, 5.0, 10.0, 4.0).expanded(2.0).unwrap();
        assert_eq!(r, rect(3.0, 3.0, 14.0, 8.0));
    }

    #[test]
    fn shrinking_past_zero_fails() {
        assert!(rect(0.0, 0.0, 2.0, 2.0).expanded(-1.5).is_err());
    }

    #[test]
    fn bounding_box_of_many() {
        let rects = [rect(0.0, 0.0, 2.0, 2.0), rect(5.0, -1.0, 1.0, 1.0)];
        let bbox = Rectangle::bounding_box(&rects).unwrap();
        assert_eq!(bbox, rect(0.0, -1.0, 6.0, 3.0));
    }

    #[test]
    fn bounding_box_of_none() {
        assert!(Rectangle::bounding_box(&Vec::<Rectangle>::new()).is_none());
    }
}
