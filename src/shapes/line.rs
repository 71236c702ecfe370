//! Straight-line shapes: a single segment, a batch of independent segments,
//! and an arrow.
//!
//! # Examples
//!
//! ```
//! use trazo::{Arrow, Line, Lines, Point, Shape};
//!
//! let diagonal = Line::new(Point::new(0.0, 0.0), Point::new(100.0, 100.0));
//! assert_eq!(diagonal.number_of_points(), 2);
//!
//! let mut grid = Lines::new();
//! grid.add(Point::new(0.0, 0.0), Point::new(0.0, 100.0));
//! grid.add(Point::new(50.0, 0.0), Point::new(50.0, 100.0));
//!
//! let pointer = Arrow::new(Point::new(0.0, 0.0), Point::new(80.0, 20.0));
//! ```

use crate::canvas::Painter;
use crate::geometry::{arrowhead, Point};
use crate::shape::{Shape, ShapeBase};

/// How far behind the tip the arrowhead barbs sit, in pixels.
const ARROWHEAD_BACK: f32 = 20.0;
/// How far to each side of the line the barbs sit, in pixels.
const ARROWHEAD_SPREAD: f32 = 10.0;

/// A line segment between two points.
#[derive(Debug, Clone)]
pub struct Line {
    base: ShapeBase,
}

impl Line {
    /// Constructs a line from two points.
    pub fn new(p1: Point, p2: Point) -> Self {
        Self {
            base: ShapeBase::with_points(vec![p1, p2]),
        }
    }
}

impl Shape for Line {
    fn base(&self) -> &ShapeBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ShapeBase {
        &mut self.base
    }

    fn draw_lines(&self, painter: &mut Painter) {
        painter.stroke_polyline(self.base.points(), false, self.base.stroke());
    }
}

/// A set of independent line segments, added in pairs.
///
/// Unlike a polyline, consecutive pairs are not connected: points 0-1 form
/// one segment, points 2-3 the next, and so on.
#[derive(Debug, Clone, Default)]
pub struct Lines {
    base: ShapeBase,
}

impl Lines {
    pub fn new() -> Self {
        Self {
            base: ShapeBase::new(),
        }
    }

    /// Builds the set from an iterator of segment endpoints.
    pub fn with_segments(segments: impl IntoIterator<Item = (Point, Point)>) -> Self {
        let mut lines = Self::new();
        for (p1, p2) in segments {
            lines.add(p1, p2);
        }
        lines
    }

    /// Adds a segment from `p1` to `p2`.
    pub fn add(&mut self, p1: Point, p2: Point) {
        self.base.add(p1);
        self.base.add(p2);
    }
}

impl Shape for Lines {
    fn base(&self) -> &ShapeBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ShapeBase {
        &mut self.base
    }

    fn draw_lines(&self, painter: &mut Painter) {
        let segments: Vec<(Point, Point)> = self
            .base
            .points()
            .chunks_exact(2)
            .map(|pair| (pair[0], pair[1]))
            .collect();
        painter.stroke_segments(&segments, self.base.stroke());
    }
}

/// A line with a filled triangular head at its second point.
///
/// The head is filled with the fill color when one is set, otherwise with the
/// line color, so a plain `Arrow` is visible out of the box.
#[derive(Debug, Clone)]
pub struct Arrow {
    base: ShapeBase,
}

impl Arrow {
    /// Constructs an arrow pointing from `from` to `to`.
    pub fn new(from: Point, to: Point) -> Self {
        Self {
            base: ShapeBase::with_points(vec![from, to]),
        }
    }
}

impl Shape for Arrow {
    fn base(&self) -> &ShapeBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ShapeBase {
        &mut self.base
    }

    fn draw_lines(&self, painter: &mut Painter) {
        painter.stroke_polyline(self.base.points(), false, self.base.stroke());

        let head_color = if self.base.fill().is_visible() {
            self.base.fill()
        } else {
            self.base.stroke().color
        };
        if let Some(head) = arrowhead(
            self.point(0),
            self.point(1),
            ARROWHEAD_BACK,
            ARROWHEAD_SPREAD,
        ) {
            painter.fill_polygon(&head, head_color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::DrawCommand;
    use crate::Color;

    #[test]
    fn lines_pair_points_without_connecting_pairs() {
        let mut lines = Lines::new();
        lines.add(Point::new(0.0, 0.0), Point::new(10.0, 0.0));
        lines.add(Point::new(0.0, 5.0), Point::new(10.0, 5.0));
        assert_eq!(lines.number_of_points(), 4);

        let mut painter = Painter::new((100.0, 100.0));
        lines.draw(&mut painter);
        // Two disjoint segments tessellate to at least two quads.
        assert!(painter.frame().vertex_count() >= 8);
    }

    #[test]
    fn arrow_draws_line_and_filled_head() {
        let arrow = Arrow::new(Point::new(0.0, 0.0), Point::new(100.0, 0.0));
        let mut painter = Painter::new((200.0, 100.0));
        arrow.draw(&mut painter);

        // Line quad plus head triangle, merged into a single mesh command.
        assert!(painter.frame().vertex_count() >= 7);
        assert_eq!(painter.frame().commands().len(), 1);
        assert!(matches!(
            painter.frame().commands()[0],
            DrawCommand::Mesh { .. }
        ));
    }

    #[test]
    fn degenerate_arrow_has_no_head() {
        let p = Point::new(5.0, 5.0);
        let arrow = Arrow::new(p, p);
        let mut painter = Painter::new((100.0, 100.0));
        arrow.draw(&mut painter);
        // Neither a filled head nor line geometry appears.
        assert!(painter.frame().commands().is_empty());
    }

    #[test]
    fn head_uses_fill_color_when_set() {
        let mut arrow = Arrow::new(Point::new(0.0, 0.0), Point::new(50.0, 0.0));
        arrow.set_fill_color(Color::RED);
        assert_eq!(arrow.fill_color(), Color::RED);
    }
}
