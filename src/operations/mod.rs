pub mod relation;
pub mod silhouette;

pub use relation::{
    ortho_relationship, rect_relationship, OrthoRelationship, OrthoSegmentRelation,
    RectRelationship,
};
pub use silhouette::{SharedBoundaryPool, Silhouette2D};
