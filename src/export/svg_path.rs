use crate::geometry::Segment;
use crate::math::Point2;

use super::PathStyle;

/// A single drawing command.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    MoveTo(Point2),
    LineTo(Point2),
}

/// Serializes segments as SVG path data.
///
/// Each segment becomes a move to its start followed by an implicit line to
/// its end, `M{x0},{y0} {x1},{y1}`. Commands are concatenated without a
/// separator, so consumers split on `M`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SvgPath {
    style: PathStyle,
}

impl SvgPath {
    /// Creates a serializer with the given style.
    #[must_use]
    pub fn new(style: PathStyle) -> Self {
        Self { style }
    }

    /// Returns one move and one line command per segment.
    #[must_use]
    pub fn commands(segments: &[Segment]) -> Vec<PathCommand> {
        segments
            .iter()
            .flat_map(|s| [PathCommand::MoveTo(s.start), PathCommand::LineTo(s.end)])
            .collect()
    }

    /// Renders `segments` as path data.
    #[must_use]
    pub fn execute(&self, segments: &[Segment]) -> String {
        Self::commands(segments)
            .iter()
            .map(|command| match command {
                PathCommand::MoveTo(p) => format!("M{}", self.format_point(p)),
                PathCommand::LineTo(p) => format!(" {}", self.format_point(p)),
            })
            .collect()
    }

    fn format_point(&self, p: &Point2) -> String {
        format!("{},{}", self.format_coord(p.x), self.format_coord(p.y))
    }

    fn format_coord(&self, value: f64) -> String {
        // -0.0 prints as "-0"; map it to plain zero.
        let value = if value == 0.0 { 0.0 } else { value };
        format!("{value:.prec$}", prec = self.style.precision())
    }
}
