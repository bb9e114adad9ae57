use crate::error::{GeometryError, Result};
use crate::geometry::{Orientation, Segment};
use crate::math::{is_between, Bounds, Point2};

/// Relationship between two axis-aligned segments.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OrthoRelationship {
    /// The segments share no point, or the pairing is not classified.
    Nothing,
    /// A horizontal and a vertical segment cross or touch at a point.
    Intersect(Point2),
    /// Two collinear segments share a sub-segment, possibly a single point.
    Overlap(Segment),
}

/// Classifies two axis-aligned segments.
///
/// Both segments must be horizontal or vertical. This is not checked: an
/// oblique segment falls into the unclassified pairing and yields
/// [`OrthoRelationship::Nothing`], which says nothing about the actual
/// geometry. Use [`OrthoSegmentRelation`] when the input is not known to be
/// axis-aligned.
///
/// A shared overlap is returned from the smaller of the two upper limits to
/// the larger of the two lower limits, i.e. running towards decreasing
/// coordinates.
#[must_use]
pub fn ortho_relationship(a: &Segment, b: &Segment) -> OrthoRelationship {
    match (a.orientation(), b.orientation()) {
        (Orientation::Horizontal, Orientation::Vertical) => crossing(a, b),
        (Orientation::Vertical, Orientation::Horizontal) => crossing(b, a),
        (Orientation::Horizontal, Orientation::Horizontal) => {
            if a.start.y != b.start.y {
                return OrthoRelationship::Nothing;
            }
            let y = a.start.y;
            shared_range((a.start.x, a.end.x), (b.start.x, b.end.x)).map_or(
                OrthoRelationship::Nothing,
                |(from, to)| {
                    OrthoRelationship::Overlap(Segment::new(Point2::new(from, y), Point2::new(to, y)))
                },
            )
        }
        (Orientation::Vertical, Orientation::Vertical) => {
            if a.start.x != b.start.x {
                return OrthoRelationship::Nothing;
            }
            let x = a.start.x;
            shared_range((a.start.y, a.end.y), (b.start.y, b.end.y)).map_or(
                OrthoRelationship::Nothing,
                |(from, to)| {
                    OrthoRelationship::Overlap(Segment::new(Point2::new(x, from), Point2::new(x, to)))
                },
            )
        }
        _ => OrthoRelationship::Nothing,
    }
}

fn crossing(horizontal: &Segment, vertical: &Segment) -> OrthoRelationship {
    let y = horizontal.start.y;
    let x = vertical.start.x;
    if is_between(y, vertical.start.y, vertical.end.y, Bounds::Closed)
        && is_between(x, horizontal.start.x, horizontal.end.x, Bounds::Closed)
    {
        OrthoRelationship::Intersect(Point2::new(x, y))
    } else {
        OrthoRelationship::Nothing
    }
}

/// Common part of two 1D ranges as `(upper, lower)`, or `None` if disjoint.
fn shared_range(a: (f64, f64), b: (f64, f64)) -> Option<(f64, f64)> {
    let upper = a.0.max(a.1).min(b.0.max(b.1));
    let lower = a.0.min(a.1).max(b.0.min(b.1));
    (upper >= lower).then_some((upper, lower))
}

/// Checked segment classification.
///
/// Unlike [`ortho_relationship`], oblique input is reported as an error
/// instead of being folded into [`OrthoRelationship::Nothing`].
#[derive(Debug, Clone, Copy)]
pub struct OrthoSegmentRelation {
    a: Segment,
    b: Segment,
}

impl OrthoSegmentRelation {
    /// Creates a new classification query.
    #[must_use]
    pub fn new(a: Segment, b: Segment) -> Self {
        Self { a, b }
    }

    /// Executes the classification.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::NotAxisAligned` if either segment is neither
    /// horizontal nor vertical.
    pub fn execute(&self) -> Result<OrthoRelationship> {
        for segment in [&self.a, &self.b] {
            if segment.orientation() == Orientation::Oblique {
                return Err(GeometryError::NotAxisAligned {
                    x0: segment.start.x,
                    y0: segment.start.y,
                    x1: segment.end.x,
                    y1: segment.end.y,
                }
                .into());
            }
        }
        Ok(ortho_relationship(&self.a, &self.b))
    }
}
