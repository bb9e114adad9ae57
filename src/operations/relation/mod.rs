mod ortho_segment;
mod rect_rect;

pub use ortho_segment::{ortho_relationship, OrthoRelationship, OrthoSegmentRelation};
pub use rect_rect::{rect_relationship, RectRelationship};
