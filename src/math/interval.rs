/// Whether the end points of an interval (or the edges of a rectangle)
/// count as part of it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Bounds {
    /// Boundary values are included.
    #[default]
    Closed,
    /// Only strictly interior values are included.
    Open,
}

/// Returns `true` if `value` lies between `limit1` and `limit2`.
///
/// The limits may be given in either order.
#[must_use]
pub fn is_between(value: f64, limit1: f64, limit2: f64, bounds: Bounds) -> bool {
    let lo = limit1.min(limit2);
    let hi = limit1.max(limit2);
    match bounds {
        Bounds::Closed => value >= lo && value <= hi,
        Bounds::Open => value > lo && value < hi,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closed_includes_limits() {
        assert!(is_between(0.0, 0.0, 10.0, Bounds::Closed));
        assert!(is_between(10.0, 0.0, 10.0, Bounds::Closed));
        assert!(is_between(4.5, 0.0, 10.0, Bounds::Closed));
        assert!(!is_between(10.5, 0.0, 10.0, Bounds::Closed));
    }

    #[test]
    fn open_excludes_limits() {
        assert!(!is_between(0.0, 0.0, 10.0, Bounds::Open));
        assert!(!is_between(10.0, 0.0, 10.0, Bounds::Open));
        assert!(is_between(4.5, 0.0, 10.0, Bounds::Open));
    }

    #[test]
    fn limits_in_any_order() {
        assert!(is_between(3.0, 10.0, 0.0, Bounds::Closed));
        assert!(is_between(3.0, 10.0, 0.0, Bounds::Open));
        assert!(!is_between(-1.0, 10.0, 0.0, Bounds::Closed));
    }

    #[test]
    fn empty_open_interval() {
        assert!(is_between(2.0, 2.0, 2.0, Bounds::Closed));
        assert!(!is_between(2.0, 2.0, 2.0, Bounds::Open));
    }
}
