use crate::geometry::{segments_equal, Segment};

/// Set of shared boundary segments collected during extraction.
///
/// Membership uses unordered segment equality, so a boundary found once in
/// each direction is stored once. Insertion order is kept to make the
/// output deterministic.
#[derive(Debug, Clone, Default)]
pub struct SharedBoundaryPool {
    segments: Vec<Segment>,
}

impl SharedBoundaryPool {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `segment` unless an equal segment is already present.
    ///
    /// Returns `true` if the segment was added.
    pub fn insert(&mut self, segment: Segment) -> bool {
        if self.contains(&segment) {
            return false;
        }
        self.segments.push(segment);
        true
    }

    #[must_use]
    pub fn contains(&self, segment: &Segment) -> bool {
        self.segments.iter().any(|s| segments_equal(s, segment))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Segment> {
        self.segments.iter()
    }

    /// Set union with `other`. The resulting membership does not depend on
    /// which pool is the receiver.
    #[must_use]
    pub fn merge(mut self, other: Self) -> Self {
        for segment in other.segments {
            self.insert(segment);
        }
        self
    }

    #[must_use]
    pub fn into_segments(self) -> Vec<Segment> {
        self.segments
    }
}

impl Extend<Segment> for SharedBoundaryPool {
    fn extend<T: IntoIterator<Item = Segment>>(&mut self, iter: T) {
        for segment in iter {
            self.insert(segment);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Point2;

    fn seg(x0: f64, y0: f64, x1: f64, y1: f64) -> Segment {
        Segment::new(Point2::new(x0, y0), Point2::new(x1, y1))
    }

    #[test]
    fn reversed_duplicate_is_rejected() {
        let mut pool = SharedBoundaryPool::new();
        assert!(pool.insert(seg(10.0, 0.0, 5.0, 0.0)));
        assert!(!pool.insert(seg(5.0, 0.0, 10.0, 0.0)));
        assert_eq!(pool.len(), 1);
    }

    #[test]
    fn keeps_insertion_order() {
        let mut pool = SharedBoundaryPool::new();
        pool.extend([seg(0.0, 0.0, 1.0, 0.0), seg(0.0, 1.0, 1.0, 1.0)]);
        assert_eq!(
            pool.into_segments(),
            vec![seg(0.0, 0.0, 1.0, 0.0), seg(0.0, 1.0, 1.0, 1.0)]
        );
    }

    #[test]
    fn merge_is_a_set_union() {
        let mut left = SharedBoundaryPool::new();
        left.extend([seg(0.0, 0.0, 1.0, 0.0), seg(2.0, 0.0, 2.0, 3.0)]);
        let mut right = SharedBoundaryPool::new();
        right.extend([seg(2.0, 3.0, 2.0, 0.0), seg(5.0, 5.0, 6.0, 5.0)]);

        let a = left.clone().merge(right.clone());
        let b = right.merge(left);
        assert_eq!(a.len(), 3);
        assert_eq!(b.len(), 3);
        assert!(a.iter().all(|s| b.contains(s)));
    }

    #[test]
    fn empty_pool() {
        let pool = SharedBoundaryPool::new();
        assert!(pool.is_empty());
        assert!(pool.into_segments().is_empty());
    }
}
