mod path_style;
mod svg_path;

pub use path_style::PathStyle;
pub use svg_path::{PathCommand, SvgPath};
