use std::iter;

use crate::geometry::{polyline_segments, Rectangle, Segment};
use crate::math::{sort_by_distance, Bounds, Point2};
use crate::operations::relation::{ortho_relationship, OrthoRelationship};

/// Result of clipping a working set of segments against one rectangle.
#[derive(Debug, Default)]
pub(super) struct Clipped {
    /// Pieces that do not dive into the rectangle.
    pub survivors: Vec<Segment>,
    /// Positive-length sub-segments shared with the rectangle's edges.
    pub overlaps: Vec<Segment>,
}

/// Clips `working` against `other`.
///
/// A segment lying within `other` under `bounds` is absorbed whole. Any
/// other segment is tested against the four edges of `other`: it is split
/// at every crossing point and the pieces whose midpoint lies within
/// `other` are discarded. Collinear overlaps with the edges are reported
/// separately.
pub(super) fn clip_against(working: Vec<Segment>, other: &Rectangle, bounds: Bounds) -> Clipped {
    let edges = other.segments();
    let mut clipped = Clipped::default();

    for segment in working {
        if other.contains_segment(&segment, bounds) {
            continue;
        }

        let mut crossings = Vec::new();
        for edge in &edges {
            match ortho_relationship(&segment, edge) {
                OrthoRelationship::Intersect(point) => crossings.push(point),
                OrthoRelationship::Overlap(shared) if !shared.is_degenerate() => {
                    clipped.overlaps.push(shared);
                }
                OrthoRelationship::Overlap(_) | OrthoRelationship::Nothing => {}
            }
        }

        if crossings.is_empty() {
            clipped.survivors.push(segment);
            continue;
        }

        clipped.survivors.extend(
            split_at(&segment, crossings)
                .into_iter()
                .filter(|piece| !other.contains_point(&piece.midpoint(), bounds)),
        );
    }

    clipped
}

/// Splits `segment` at `points`, which must lie on it.
///
/// Points are ordered by distance from the segment's start. Zero-length
/// pieces from coincident points are dropped.
fn split_at(segment: &Segment, mut points: Vec<Point2>) -> Vec<Segment> {
    sort_by_distance(&mut points, &segment.start);
    let chain: Vec<Point2> = iter::once(segment.start)
        .chain(points)
        .chain(iter::once(segment.end))
        .collect();
    polyline_segments(&chain)
        .unwrap_or_default()
        .into_iter()
        .filter(|piece| !piece.is_degenerate())
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn seg(x0: f64, y0: f64, x1: f64, y1: f64) -> Segment {
        Segment::new(Point2::new(x0, y0), Point2::new(x1, y1))
    }

    fn rect(x: f64, y: f64, w: f64, h: f64) -> Rectangle {
        Rectangle::new(x, y, w, h).unwrap()
    }

    #[test]
    fn split_orders_points_from_start() {
        let pieces = split_at(
            &seg(10.0, 0.0, 0.0, 0.0),
            vec![Point2::new(2.0, 0.0), Point2::new(7.0, 0.0)],
        );
        assert_eq!(
            pieces,
            vec![
                seg(10.0, 0.0, 7.0, 0.0),
                seg(7.0, 0.0, 2.0, 0.0),
                seg(2.0, 0.0, 0.0, 0.0),
            ]
        );
    }

    #[test]
    fn split_drops_zero_length_pieces() {
        let pieces = split_at(
            &seg(0.0, 0.0, 10.0, 0.0),
            vec![Point2::new(10.0, 0.0), Point2::new(0.0, 0.0)],
        );
        assert_eq!(pieces, vec![seg(0.0, 0.0, 10.0, 0.0)]);
    }

    #[test]
    fn segment_crossing_into_rectangle_is_cut() {
        let clipped = clip_against(
            vec![seg(0.0, 0.0, 10.0, 0.0)],
            &rect(5.0, 0.0, 10.0, 10.0),
            Bounds::Closed,
        );
        assert_eq!(clipped.survivors, vec![seg(0.0, 0.0, 5.0, 0.0)]);
        assert_eq!(clipped.overlaps, vec![seg(10.0, 0.0, 5.0, 0.0)]);
    }

    #[test]
    fn segment_inside_is_absorbed_when_closed() {
        let inside = seg(10.0, 0.0, 10.0, 10.0);
        let other = rect(5.0, 0.0, 10.0, 10.0);
        let closed = clip_against(vec![inside], &other, Bounds::Closed);
        assert!(closed.survivors.is_empty());
        assert!(closed.overlaps.is_empty());
    }

    #[test]
    fn segment_on_edge_survives_when_open() {
        let on_edge = seg(10.0, 0.0, 10.0, 10.0);
        let neighbour = rect(10.0, 0.0, 10.0, 10.0);
        let clipped = clip_against(vec![on_edge], &neighbour, Bounds::Open);
        assert_eq!(clipped.survivors, vec![on_edge]);
    }

    #[test]
    fn segment_far_away_is_untouched() {
        let far = seg(0.0, 50.0, 10.0, 50.0);
        let clipped = clip_against(vec![far], &rect(0.0, 0.0, 10.0, 10.0), Bounds::Closed);
        assert_eq!(clipped.survivors, vec![far]);
    }

    #[test]
    fn segment_through_rectangle_keeps_both_ends() {
        let through = seg(0.0, 5.0, 20.0, 5.0);
        let clipped = clip_against(vec![through], &rect(5.0, 0.0, 10.0, 10.0), Bounds::Closed);
        assert_eq!(
            clipped.survivors,
            vec![seg(0.0, 5.0, 5.0, 5.0), seg(15.0, 5.0, 20.0, 5.0)]
        );
    }
}
