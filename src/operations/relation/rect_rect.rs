use crate::geometry::Rectangle;
use crate::math::Bounds;

/// Relationship between two rectangles `a` and `b`, in that order.
///
/// The classification is order-sensitive: swapping the arguments swaps
/// [`AInsideB`](Self::AInsideB) and [`BInsideA`](Self::BInsideA) and leaves
/// every other outcome unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RectRelationship {
    /// No shared point.
    Disjoint,
    /// Identical origin and size.
    Match,
    /// Every corner of `a` lies within `b`, edges included.
    AInsideB,
    /// Every corner of `b` lies within `a`, edges included.
    BInsideA,
    /// The interiors overlap without either rectangle containing the other.
    Intersect,
    /// The rectangles touch along an edge or at a corner only.
    Tangent,
}

impl RectRelationship {
    /// Returns the relationship seen with the arguments swapped.
    #[must_use]
    pub fn swapped(self) -> Self {
        match self {
            Self::AInsideB => Self::BInsideA,
            Self::BInsideA => Self::AInsideB,
            other => other,
        }
    }
}

/// Classifies rectangle `a` against rectangle `b`.
///
/// The first matching rule wins: match, `a` inside `b`, `b` inside `a`,
/// intersect, tangent, disjoint. Two rectangles intersect when a corner of
/// one lies strictly inside the other, or when they cross without any
/// corner inside: one spans the other completely along one axis while
/// their extents along the other axis overlap with positive length.
#[must_use]
pub fn rect_relationship(a: &Rectangle, b: &Rectangle) -> RectRelationship {
    if a == b {
        RectRelationship::Match
    } else if all_corners_within(a, b) {
        RectRelationship::AInsideB
    } else if all_corners_within(b, a) {
        RectRelationship::BInsideA
    } else if any_corner_within(a, b, Bounds::Open)
        || any_corner_within(b, a, Bounds::Open)
        || crosses(a, b)
    {
        RectRelationship::Intersect
    } else if any_corner_within(a, b, Bounds::Closed) || any_corner_within(b, a, Bounds::Closed) {
        RectRelationship::Tangent
    } else {
        RectRelationship::Disjoint
    }
}

fn all_corners_within(inner: &Rectangle, outer: &Rectangle) -> bool {
    inner
        .corners()
        .iter()
        .all(|corner| outer.contains_point(corner, Bounds::Closed))
}

fn any_corner_within(inner: &Rectangle, outer: &Rectangle, bounds: Bounds) -> bool {
    inner
        .corners()
        .iter()
        .any(|corner| outer.contains_point(corner, bounds))
}

/// Plus-shaped overlap: no corner of either rectangle is inside the other.
fn crosses(a: &Rectangle, b: &Rectangle) -> bool {
    let (ax, ay) = (a.x_span(), a.y_span());
    let (bx, by) = (b.x_span(), b.y_span());
    ((covers(ax, bx) || covers(bx, ax)) && overlaps(ay, by))
        || ((covers(ay, by) || covers(by, ay)) && overlaps(ax, bx))
}

fn covers(outer: (f64, f64), inner: (f64, f64)) -> bool {
    outer.0 <= inner.0 && outer.1 >= inner.1
}

/// Positive-length overlap of two `(lo, hi)` ranges.
fn overlaps(a: (f64, f64), b: (f64, f64)) -> bool {
    a.0.max(b.0) < a.1.min(b.1)
}
