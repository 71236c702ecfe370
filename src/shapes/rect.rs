//! Rectangles, with and without rounded corners.

use crate::canvas::Painter;
use crate::geometry::{rounded_rect_outline, Point};
use crate::shape::{Shape, ShapeBase};

/// An axis-aligned rectangle anchored at its top-left corner.
///
/// A visible fill paints the interior first; the outline is drawn on top.
/// Rectangles with a non-positive side draw nothing.
///
/// # Examples
///
/// ```
/// use trazo::{Color, Point, Rectangle, Shape};
///
/// let mut tile = Rectangle::new(Point::new(20.0, 20.0), 60.0, 40.0);
/// tile.set_fill_color(Color::DARK_CYAN);
/// tile.set_color(Color::INVISIBLE); // fill only, no border
/// ```
#[derive(Debug, Clone)]
pub struct Rectangle {
    base: ShapeBase,
    width: f32,
    height: f32,
}

impl Rectangle {
    pub fn new(top_left: Point, width: f32, height: f32) -> Self {
        Self {
            base: ShapeBase::with_points(vec![top_left]),
            width,
            height,
        }
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn set_width(&mut self, width: f32) {
        self.width = width;
    }

    pub fn set_height(&mut self, height: f32) {
        self.height = height;
    }
}

impl Shape for Rectangle {
    fn base(&self) -> &ShapeBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ShapeBase {
        &mut self.base
    }

    fn draw_lines(&self, painter: &mut Painter) {
        if self.width <= 0.0 || self.height <= 0.0 {
            tracing::warn!(
                "rectangle with a non-positive side ({} x {}) is not drawn",
                self.width,
                self.height
            );
            return;
        }
        let top_left = self.point(0);
        painter.fill_rect(top_left, self.width, self.height, self.base.fill());
        painter.stroke_rect(top_left, self.width, self.height, self.base.stroke());
    }
}

/// A rectangle with rounded corners.
///
/// The corner radius is a quarter of the shorter side and is recomputed when
/// either side changes.
#[derive(Debug, Clone)]
pub struct RoundedRectangle {
    base: ShapeBase,
    width: f32,
    height: f32,
    radius: f32,
}

impl RoundedRectangle {
    pub fn new(top_left: Point, width: f32, height: f32) -> Self {
        Self {
            base: ShapeBase::with_points(vec![top_left]),
            width,
            height,
            radius: Self::corner_radius(width, height),
        }
    }

    fn corner_radius(width: f32, height: f32) -> f32 {
        (width.min(height) / 4.0).max(0.0)
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn set_width(&mut self, width: f32) {
        self.width = width;
        self.radius = Self::corner_radius(self.width, self.height);
    }

    pub fn set_height(&mut self, height: f32) {
        self.height = height;
        self.radius = Self::corner_radius(self.width, self.height);
    }
}

impl Shape for RoundedRectangle {
    fn base(&self) -> &ShapeBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ShapeBase {
        &mut self.base
    }

    fn draw_lines(&self, painter: &mut Painter) {
        if self.width <= 0.0 || self.height <= 0.0 {
            tracing::warn!(
                "rounded rectangle with a non-positive side ({} x {}) is not drawn",
                self.width,
                self.height
            );
            return;
        }
        let outline = rounded_rect_outline(self.point(0), self.width, self.height, self.radius);
        painter.fill_polygon(&outline, self.base.fill());
        painter.stroke_polyline(&outline, true, self.base.stroke());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Color;

    #[test]
    fn fill_only_rectangle_is_one_quad() {
        let mut tile = Rectangle::new(Point::new(0.0, 0.0), 20.0, 20.0);
        tile.set_fill_color(Color::GREEN);
        tile.set_color(Color::INVISIBLE);

        let mut painter = Painter::new((100.0, 100.0));
        tile.draw(&mut painter);
        assert_eq!(painter.frame().index_count(), 6);
    }

    #[test]
    fn degenerate_rectangle_draws_nothing() {
        let flat = Rectangle::new(Point::new(0.0, 0.0), 20.0, 0.0);
        let mut painter = Painter::new((100.0, 100.0));
        flat.draw(&mut painter);
        assert!(painter.frame().is_empty());
    }

    #[test]
    fn radius_follows_the_shorter_side() {
        let mut r = RoundedRectangle::new(Point::new(0.0, 0.0), 100.0, 40.0);
        assert_eq!(r.radius(), 10.0);
        r.set_height(200.0);
        assert_eq!(r.radius(), 25.0);
    }

    #[test]
    fn moving_keeps_the_sides() {
        let mut r = Rectangle::new(Point::new(5.0, 5.0), 30.0, 10.0);
        r.move_by(10.0, 20.0);
        assert_eq!(r.point(0), Point::new(15.0, 25.0));
        assert_eq!(r.width(), 30.0);
    }
}
