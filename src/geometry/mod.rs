mod rectangle;
mod segment;

pub use rectangle::Rectangle;
pub use segment::{polyline_segments, segments_equal, Orientation, Segment};
