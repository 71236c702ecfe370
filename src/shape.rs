//! The polymorphic shape interface.
//!
//! Every shape owns a [`ShapeBase`]: an ordered list of points plus the line
//! stroke and fill color. The [`Shape`] trait adds a draw operation on top;
//! windows store shapes as `Box<dyn Shape>` and draw them in attach order.
//!
//! # Examples
//!
//! Shared attributes work through the trait, whatever the concrete shape is:
//!
//! ```
//! use trazo::{Color, Line, LineStyle, Point, Shape};
//!
//! let mut line = Line::new(Point::new(0.0, 0.0), Point::new(100.0, 50.0));
//! line.set_color(Color::BLUE);
//! line.set_style(LineStyle::Dash);
//! line.move_by(10.0, 0.0);
//!
//! assert_eq!(line.point(0), Point::new(10.0, 0.0));
//! assert_eq!(line.number_of_points(), 2);
//! ```

use crate::canvas::Painter;
use crate::geometry::Point;
use crate::stroke::{LineStyle, Stroke};
use crate::Color;

/// The state every shape carries: an ordered point list, the outline stroke
/// and a fill color (invisible by default).
#[derive(Debug, Clone, Default)]
pub struct ShapeBase {
    points: Vec<Point>,
    stroke: Stroke,
    fill: Color,
}

impl ShapeBase {
    pub fn new() -> Self {
        Self {
            points: Vec::new(),
            stroke: Stroke::default(),
            fill: Color::INVISIBLE,
        }
    }

    pub fn with_points(points: Vec<Point>) -> Self {
        Self {
            points,
            ..Self::new()
        }
    }

    /// Appends a point to the shape.
    pub fn add(&mut self, p: Point) {
        self.points.push(p);
    }

    /// Replaces the `i`-th point.
    ///
    /// # Panics
    ///
    /// Panics if `i` is out of bounds.
    pub fn set_point(&mut self, i: usize, p: Point) {
        self.points[i] = p;
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Moves every point by (`dx`, `dy`).
    pub fn translate(&mut self, dx: f32, dy: f32) {
        for p in &mut self.points {
            p.x += dx;
            p.y += dy;
        }
    }

    pub fn stroke(&self) -> Stroke {
        self.stroke
    }

    pub fn stroke_mut(&mut self) -> &mut Stroke {
        &mut self.stroke
    }

    pub fn fill(&self) -> Color {
        self.fill
    }

    pub fn set_fill(&mut self, color: Color) {
        self.fill = color;
    }
}

/// A drawable shape: a point list with color and line-style attributes,
/// polymorphic over [`draw_lines`](Shape::draw_lines).
///
/// Implementors provide access to their [`ShapeBase`] and the draw operation;
/// the attribute accessors and `move_by` come for free and can be overridden
/// by composite shapes that have to cascade to sub-shapes.
pub trait Shape {
    fn base(&self) -> &ShapeBase;

    fn base_mut(&mut self) -> &mut ShapeBase;

    /// Emits this shape's geometry onto the painter.
    ///
    /// Implementations are expected to honor the invisibility rules: nothing
    /// is drawn with an invisible line color, and fills only happen when the
    /// fill color is visible. The painter enforces this too, so forgetting a
    /// check cannot paint a transparent color.
    fn draw_lines(&self, painter: &mut Painter);

    /// Draws the shape. Equivalent to `draw_lines` for every shape in this
    /// crate; the indirection mirrors how windows treat shapes uniformly.
    fn draw(&self, painter: &mut Painter) {
        self.draw_lines(painter);
    }

    /// Moves the shape by (`dx`, `dy`).
    fn move_by(&mut self, dx: f32, dy: f32) {
        self.base_mut().translate(dx, dy);
    }

    /// The line (outline) color.
    fn color(&self) -> Color {
        self.base().stroke().color
    }

    fn set_color(&mut self, color: Color) {
        self.base_mut().stroke_mut().color = color;
    }

    fn fill_color(&self) -> Color {
        self.base().fill()
    }

    fn set_fill_color(&mut self, color: Color) {
        self.base_mut().set_fill(color);
    }

    fn style(&self) -> LineStyle {
        self.base().stroke().style
    }

    fn set_style(&mut self, style: LineStyle) {
        self.base_mut().stroke_mut().style = style;
    }

    /// The full outline stroke (width, color, style).
    fn stroke(&self) -> Stroke {
        self.base().stroke()
    }

    fn set_stroke(&mut self, stroke: Stroke) {
        *self.base_mut().stroke_mut() = stroke;
    }

    /// The `i`-th point of the shape.
    ///
    /// # Panics
    ///
    /// Panics if `i` is out of bounds.
    fn point(&self, i: usize) -> Point {
        self.base().points()[i]
    }

    fn number_of_points(&self) -> usize {
        self.base().points().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Dot {
        base: ShapeBase,
    }

    impl Shape for Dot {
        fn base(&self) -> &ShapeBase {
            &self.base
        }
        fn base_mut(&mut self) -> &mut ShapeBase {
            &mut self.base
        }
        fn draw_lines(&self, _painter: &mut Painter) {}
    }

    #[test]
    fn provided_accessors_reach_the_base() {
        let mut dot = Dot {
            base: ShapeBase::with_points(vec![Point::new(1.0, 2.0)]),
        };
        dot.set_color(Color::RED);
        dot.set_fill_color(Color::YELLOW);
        dot.set_style(LineStyle::Dot);
        dot.move_by(4.0, -2.0);

        assert_eq!(dot.color(), Color::RED);
        assert_eq!(dot.fill_color(), Color::YELLOW);
        assert_eq!(dot.style(), LineStyle::Dot);
        assert_eq!(dot.point(0), Point::new(5.0, 0.0));
    }
}
