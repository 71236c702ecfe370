//! Circles, ellipses and ellipse arcs.
//!
//! These shapes store the top-left corner of their bounding box in the point
//! list, so the uniform `move_by` works on them like on everything else; the
//! center is derived.

use crate::canvas::Painter;
use crate::geometry::{sample_ellipse_arc, Point};
use crate::shape::{Shape, ShapeBase};

fn draw_ellipse(base: &ShapeBase, center: Point, rx: f32, ry: f32, painter: &mut Painter) {
    if base.fill().is_visible() {
        painter.fill_pie(center, rx, ry, 0.0, 360.0, base.fill());
    }
    let outline = sample_ellipse_arc(center, rx, ry, 0.0, 360.0);
    painter.stroke_polyline(&outline, true, base.stroke());
}

/// A circle given by center and radius.
///
/// # Examples
///
/// ```
/// use trazo::{Circle, Point, Shape};
///
/// let mut c = Circle::new(Point::new(100.0, 100.0), 40.0);
/// assert_eq!(c.center(), Point::new(100.0, 100.0));
///
/// c.move_by(10.0, 0.0);
/// assert_eq!(c.center(), Point::new(110.0, 100.0));
/// ```
#[derive(Debug, Clone)]
pub struct Circle {
    base: ShapeBase,
    radius: f32,
}

impl Circle {
    pub fn new(center: Point, radius: f32) -> Self {
        Self {
            base: ShapeBase::with_points(vec![Point::new(center.x - radius, center.y - radius)]),
            radius,
        }
    }

    pub fn center(&self) -> Point {
        let top_left = self.base.points()[0];
        Point::new(top_left.x + self.radius, top_left.y + self.radius)
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Changes the radius, keeping the center in place.
    pub fn set_radius(&mut self, radius: f32) {
        let center = self.center();
        self.radius = radius;
        self.base
            .set_point(0, Point::new(center.x - radius, center.y - radius));
    }
}

impl Shape for Circle {
    fn base(&self) -> &ShapeBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ShapeBase {
        &mut self.base
    }

    fn draw_lines(&self, painter: &mut Painter) {
        draw_ellipse(&self.base, self.center(), self.radius, self.radius, painter);
    }
}

/// An axis-aligned ellipse given by center and the two semi-axes.
#[derive(Debug, Clone)]
pub struct Ellipse {
    base: ShapeBase,
    rx: f32,
    ry: f32,
}

impl Ellipse {
    pub fn new(center: Point, rx: f32, ry: f32) -> Self {
        Self {
            base: ShapeBase::with_points(vec![Point::new(center.x - rx, center.y - ry)]),
            rx,
            ry,
        }
    }

    pub fn center(&self) -> Point {
        let top_left = self.base.points()[0];
        Point::new(top_left.x + self.rx, top_left.y + self.ry)
    }

    /// The semi-axis along x.
    pub fn major(&self) -> f32 {
        self.rx
    }

    /// The semi-axis along y.
    pub fn minor(&self) -> f32 {
        self.ry
    }

    pub fn set_major(&mut self, rx: f32) {
        let center = self.center();
        self.rx = rx;
        self.base
            .set_point(0, Point::new(center.x - self.rx, center.y - self.ry));
    }

    pub fn set_minor(&mut self, ry: f32) {
        let center = self.center();
        self.ry = ry;
        self.base
            .set_point(0, Point::new(center.x - self.rx, center.y - self.ry));
    }
}

impl Shape for Ellipse {
    fn base(&self) -> &ShapeBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ShapeBase {
        &mut self.base
    }

    fn draw_lines(&self, painter: &mut Painter) {
        draw_ellipse(&self.base, self.center(), self.rx, self.ry, painter);
    }
}

/// An arc of an axis-aligned ellipse between two angles, in degrees
/// (0 = along +x, counter-clockwise, so 90 points up).
///
/// A visible fill color paints the pie wedge between the angles; the arc
/// itself is stroked on top.
#[derive(Debug, Clone)]
pub struct Arc {
    base: ShapeBase,
    rx: f32,
    ry: f32,
    a1: f32,
    a2: f32,
}

impl Arc {
    pub fn new(center: Point, rx: f32, ry: f32, a1: f32, a2: f32) -> Self {
        Self {
            base: ShapeBase::with_points(vec![Point::new(center.x - rx, center.y - ry)]),
            rx,
            ry,
            a1,
            a2,
        }
    }

    pub fn center(&self) -> Point {
        let top_left = self.base.points()[0];
        Point::new(top_left.x + self.rx, top_left.y + self.ry)
    }

    pub fn angles(&self) -> (f32, f32) {
        (self.a1, self.a2)
    }

    pub fn set_angles(&mut self, a1: f32, a2: f32) {
        self.a1 = a1;
        self.a2 = a2;
    }
}

impl Shape for Arc {
    fn base(&self) -> &ShapeBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ShapeBase {
        &mut self.base
    }

    fn draw_lines(&self, painter: &mut Painter) {
        let center = self.center();
        if self.base.fill().is_visible() {
            painter.fill_pie(center, self.rx, self.ry, self.a1, self.a2, self.base.fill());
        }
        painter.stroke_arc(center, self.rx, self.ry, self.a1, self.a2, self.base.stroke());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Color;

    #[test]
    fn circle_center_survives_resizing() {
        let mut c = Circle::new(Point::new(50.0, 60.0), 10.0);
        c.set_radius(25.0);
        assert_eq!(c.center(), Point::new(50.0, 60.0));
        assert_eq!(c.point(0), Point::new(25.0, 35.0));
    }

    #[test]
    fn ellipse_axes_update_independently() {
        let mut e = Ellipse::new(Point::new(0.0, 0.0), 30.0, 20.0);
        e.set_major(40.0);
        assert_eq!(e.center(), Point::new(0.0, 0.0));
        assert_eq!(e.major(), 40.0);
        assert_eq!(e.minor(), 20.0);
    }

    #[test]
    fn outlined_circle_draws_a_closed_ring() {
        let c = Circle::new(Point::new(100.0, 100.0), 50.0);
        let mut painter = Painter::new((200.0, 200.0));
        c.draw(&mut painter);
        assert!(painter.frame().index_count() > 0);
    }

    #[test]
    fn filled_arc_adds_the_pie_wedge() {
        let mut open = Arc::new(Point::new(100.0, 100.0), 50.0, 30.0, 0.0, 90.0);
        let mut painter_open = Painter::new((200.0, 200.0));
        open.draw(&mut painter_open);

        open.set_fill_color(Color::YELLOW);
        let mut painter_filled = Painter::new((200.0, 200.0));
        open.draw(&mut painter_filled);

        assert!(
            painter_filled.frame().index_count() > painter_open.frame().index_count(),
            "the wedge fill should add geometry"
        );
    }
}
