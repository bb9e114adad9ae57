mod clip;
mod pool;

pub use pool::SharedBoundaryPool;

use std::ops::ControlFlow;

use tracing::{debug, trace};

use crate::geometry::{Rectangle, Segment};
use crate::math::Bounds;
use crate::operations::relation::{rect_relationship, RectRelationship};

use clip::clip_against;

/// Extracts the outline of a set of possibly overlapping rectangles.
///
/// Every rectangle's edges are clipped in turn against every other
/// rectangle. What survives is the part of the boundary that does not run
/// through another rectangle, plus one copy of each collinear boundary that
/// two overlapping rectangles share.
///
/// Input order matters in two places: a rectangle equal to an earlier one is
/// dropped as a duplicate, and the output lists surviving edges rectangle by
/// rectangle in input order, followed by the shared boundaries in discovery
/// order. The result is meant to be stroked, not filled; it carries no
/// winding.
#[derive(Debug, Clone)]
pub struct Silhouette2D {
    rects: Vec<Rectangle>,
}

impl Silhouette2D {
    /// Creates a new silhouette extraction over `rects`.
    #[must_use]
    pub fn new(rects: Vec<Rectangle>) -> Self {
        Self { rects }
    }

    #[must_use]
    pub fn rects(&self) -> &[Rectangle] {
        &self.rects
    }

    /// Executes the extraction, returning the outline segments.
    ///
    /// An empty input yields an empty outline; a single rectangle yields its
    /// four edges unchanged.
    #[must_use]
    pub fn execute(&self) -> Vec<Segment> {
        let (mut outline, pool) = self.execute_with_pool(SharedBoundaryPool::new());
        debug!(
            rects = self.rects.len(),
            edges = outline.len(),
            shared = pool.len(),
            "silhouette extracted"
        );
        outline.extend(pool.into_segments());
        outline
    }

    /// Executes the extraction, threading `pool` through it.
    ///
    /// Returns the surviving edges of every rectangle together with the pool,
    /// extended with the shared boundaries found here. The pool's contents
    /// are not part of the returned edges.
    #[must_use]
    pub fn execute_with_pool(&self, pool: SharedBoundaryPool) -> (Vec<Segment>, SharedBoundaryPool) {
        (0..self.rects.len()).fold((Vec::new(), pool), |(mut outline, pool), index| {
            let (survivors, pool) = self.trace_rectangle(index, pool);
            outline.extend(survivors);
            (outline, pool)
        })
    }

    /// Clips the edges of rectangle `index` against every other rectangle.
    fn trace_rectangle(
        &self,
        index: usize,
        pool: SharedBoundaryPool,
    ) -> (Vec<Segment>, SharedBoundaryPool) {
        let current = &self.rects[index];

        let flow = self
            .rects
            .iter()
            .enumerate()
            .filter(|&(other_index, _)| other_index != index)
            .try_fold(
                (current.segments().to_vec(), pool),
                |(working, mut pool), (other_index, other)| match rect_relationship(other, current) {
                    RectRelationship::BInsideA => {
                        trace!(index, other_index, "rectangle covered by another");
                        ControlFlow::Break(pool)
                    }
                    RectRelationship::Match if other_index < index => {
                        trace!(index, other_index, "duplicate rectangle");
                        ControlFlow::Break(pool)
                    }
                    RectRelationship::Intersect => {
                        let clipped = clip_against(working, other, Bounds::Closed);
                        pool.extend(clipped.overlaps);
                        ControlFlow::Continue((clipped.survivors, pool))
                    }
                    RectRelationship::Tangent => {
                        // Tangent rectangles share no interior: only edges strictly
                        // inside `other` could be cut, and there are none.
                        let clipped = clip_against(working, other, Bounds::Open);
                        ControlFlow::Continue((clipped.survivors, pool))
                    }
                    RectRelationship::Match
                    | RectRelationship::AInsideB
                    | RectRelationship::Disjoint => ControlFlow::Continue((working, pool)),
                },
            );

        match flow {
            ControlFlow::Continue((survivors, pool)) => {
                trace!(index, survivors = survivors.len(), "rectangle traced");
                (survivors, pool)
            }
            ControlFlow::Break(pool) => (Vec::new(), pool),
        }
    }
}
