//! Polyline-family shapes: open and closed polylines, marked variants and
//! validated polygons.

use crate::canvas::Painter;
use crate::error::Error;
use crate::geometry::{line_intersect, segment_intersect, Point};
use crate::shape::{Shape, ShapeBase};
use crate::Color;

fn draw_polyline(base: &ShapeBase, closed: bool, painter: &mut Painter) {
    // A visible fill paints the enclosed region first; the outline goes on
    // top, matching how filled shapes keep a crisp border.
    painter.fill_polygon(base.points(), base.fill());
    painter.stroke_polyline(base.points(), closed, base.stroke());
}

fn draw_marks(points: &[Point], marks: &str, color: Color, painter: &mut Painter) {
    if marks.is_empty() {
        return;
    }
    let cycle: Vec<char> = marks.chars().collect();
    for (i, p) in points.iter().enumerate() {
        painter.mark(*p, cycle[i % cycle.len()], color);
    }
}

/// A polyline connecting its points in order.
///
/// With a visible fill color the enclosed region is filled as well, closing
/// the outline implicitly for the fill only.
#[derive(Debug, Clone, Default)]
pub struct OpenPolyline {
    base: ShapeBase,
}

impl OpenPolyline {
    pub fn new() -> Self {
        Self {
            base: ShapeBase::new(),
        }
    }

    pub fn with_points(points: impl IntoIterator<Item = Point>) -> Self {
        Self {
            base: ShapeBase::with_points(points.into_iter().collect()),
        }
    }

    pub fn add(&mut self, p: Point) {
        self.base.add(p);
    }
}

impl Shape for OpenPolyline {
    fn base(&self) -> &ShapeBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ShapeBase {
        &mut self.base
    }

    fn draw_lines(&self, painter: &mut Painter) {
        draw_polyline(&self.base, false, painter);
    }
}

/// A polyline with an extra segment from the last point back to the first.
#[derive(Debug, Clone, Default)]
pub struct ClosedPolyline {
    base: ShapeBase,
}

impl ClosedPolyline {
    pub fn new() -> Self {
        Self {
            base: ShapeBase::new(),
        }
    }

    pub fn with_points(points: impl IntoIterator<Item = Point>) -> Self {
        Self {
            base: ShapeBase::with_points(points.into_iter().collect()),
        }
    }

    pub fn add(&mut self, p: Point) {
        self.base.add(p);
    }
}

impl Shape for ClosedPolyline {
    fn base(&self) -> &ShapeBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ShapeBase {
        &mut self.base
    }

    fn draw_lines(&self, painter: &mut Painter) {
        draw_polyline(&self.base, true, painter);
    }
}

/// An open polyline with a one-character mark at every vertex, cycling
/// through the mark string.
#[derive(Debug, Clone)]
pub struct MarkedPolyline {
    base: ShapeBase,
    marks: String,
}

impl MarkedPolyline {
    /// An empty mark string draws a plain polyline.
    pub fn new(marks: &str) -> Self {
        Self {
            base: ShapeBase::new(),
            marks: marks.to_owned(),
        }
    }

    pub fn add(&mut self, p: Point) {
        self.base.add(p);
    }

    pub fn marks(&self) -> &str {
        &self.marks
    }
}

impl Shape for MarkedPolyline {
    fn base(&self) -> &ShapeBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ShapeBase {
        &mut self.base
    }

    fn draw_lines(&self, painter: &mut Painter) {
        draw_polyline(&self.base, false, painter);
        draw_marks(
            self.base.points(),
            &self.marks,
            self.base.stroke().color,
            painter,
        );
    }
}

/// Marks without connecting lines.
#[derive(Debug, Clone)]
pub struct Marks {
    base: ShapeBase,
    marks: String,
}

impl Marks {
    pub fn new(marks: &str) -> Self {
        Self {
            base: ShapeBase::new(),
            marks: marks.to_owned(),
        }
    }

    pub fn add(&mut self, p: Point) {
        self.base.add(p);
    }
}

impl Shape for Marks {
    fn base(&self) -> &ShapeBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ShapeBase {
        &mut self.base
    }

    fn draw_lines(&self, painter: &mut Painter) {
        draw_marks(
            self.base.points(),
            &self.marks,
            self.base.stroke().color,
            painter,
        );
    }
}

/// A single marked point.
#[derive(Debug, Clone)]
pub struct Mark {
    base: ShapeBase,
    mark: char,
}

impl Mark {
    pub fn new(at: Point, mark: char) -> Self {
        Self {
            base: ShapeBase::with_points(vec![at]),
            mark,
        }
    }
}

impl Shape for Mark {
    fn base(&self) -> &ShapeBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ShapeBase {
        &mut self.base
    }

    fn draw_lines(&self, painter: &mut Painter) {
        if let Some(p) = self.base.points().first() {
            painter.mark(*p, self.mark, self.base.stroke().color);
        }
    }
}

/// A closed polyline that is guaranteed to be a simple polygon.
///
/// [`Polygon::add`] validates each new point: it must differ from the
/// previous point, must not be collinear with the previous edge, and the new
/// edge must not cross any earlier edge.
///
/// # Examples
///
/// ```
/// use trazo::{Point, Polygon};
///
/// let mut triangle = Polygon::new();
/// triangle.add(Point::new(0.0, 0.0))?;
/// triangle.add(Point::new(100.0, 0.0))?;
/// triangle.add(Point::new(50.0, 80.0))?;
///
/// // A point on the line through the previous edge is rejected.
/// assert!(triangle.add(Point::new(25.0, 40.0)).is_err());
/// # Ok::<(), trazo::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Polygon {
    base: ShapeBase,
}

impl Polygon {
    pub fn new() -> Self {
        Self {
            base: ShapeBase::new(),
        }
    }

    /// Appends a corner, validating that the polygon stays simple.
    pub fn add(&mut self, p: Point) -> Result<(), Error> {
        let points = self.base.points();
        let np = points.len();

        if np > 1 {
            let last = points[np - 1];
            if p == last {
                return Err(Error::PolygonDuplicatePoint(p));
            }
            // The new edge must turn away from the previous one.
            if line_intersect(last, p, points[np - 2], last).is_none() {
                return Err(Error::PolygonCollinearPoint(p));
            }
        }

        // The new edge may share the previous corner but nothing else.
        for i in 1..np.saturating_sub(1) {
            if segment_intersect(points[np - 1], p, points[i - 1], points[i]).is_some() {
                return Err(Error::PolygonEdgesIntersect(p));
            }
        }

        self.base.add(p);
        Ok(())
    }

    /// Builds a polygon from a corner list, validating every step.
    pub fn with_points(points: impl IntoIterator<Item = Point>) -> Result<Self, Error> {
        let mut polygon = Self::new();
        for p in points {
            polygon.add(p)?;
        }
        Ok(polygon)
    }
}

impl Shape for Polygon {
    fn base(&self) -> &ShapeBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ShapeBase {
        &mut self.base
    }

    fn draw_lines(&self, painter: &mut Painter) {
        if self.base.points().len() < 3 {
            tracing::warn!("polygon with fewer than 3 points is not drawn");
            return;
        }
        draw_polyline(&self.base, true, painter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Color, Error};

    #[test]
    fn polygon_accepts_a_square() {
        let square = Polygon::with_points([
            Point::new(0.0, 0.0),
            Point::new(100.0, 0.0),
            Point::new(100.0, 100.0),
            Point::new(0.0, 100.0),
        ]);
        assert!(square.is_ok());
    }

    #[test]
    fn polygon_rejects_a_repeated_point() {
        let mut polygon = Polygon::new();
        polygon.add(Point::new(0.0, 0.0)).unwrap();
        polygon.add(Point::new(10.0, 0.0)).unwrap();
        assert!(matches!(
            polygon.add(Point::new(10.0, 0.0)),
            Err(Error::PolygonDuplicatePoint(_))
        ));
    }

    #[test]
    fn polygon_rejects_collinear_corners() {
        let mut polygon = Polygon::new();
        polygon.add(Point::new(0.0, 0.0)).unwrap();
        polygon.add(Point::new(10.0, 0.0)).unwrap();
        assert!(matches!(
            polygon.add(Point::new(20.0, 0.0)),
            Err(Error::PolygonCollinearPoint(_))
        ));
    }

    #[test]
    fn polygon_rejects_crossing_edges() {
        let mut polygon = Polygon::new();
        polygon.add(Point::new(0.0, 0.0)).unwrap();
        polygon.add(Point::new(100.0, 0.0)).unwrap();
        polygon.add(Point::new(100.0, 100.0)).unwrap();
        // An edge back across the first edge makes a bow tie.
        assert!(matches!(
            polygon.add(Point::new(50.0, -50.0)),
            Err(Error::PolygonEdgesIntersect(_))
        ));
    }

    #[test]
    fn too_small_polygons_draw_nothing() {
        let mut polygon = Polygon::new();
        polygon.add(Point::new(0.0, 0.0)).unwrap();
        polygon.add(Point::new(10.0, 10.0)).unwrap();
        let mut painter = Painter::new((100.0, 100.0));
        polygon.draw(&mut painter);
        assert!(painter.frame().is_empty());
    }

    #[test]
    fn marked_polyline_cycles_its_marks() {
        let mut curve = MarkedPolyline::new("xo");
        for i in 0..5 {
            curve.add(Point::new(i as f32 * 10.0, 0.0));
        }
        let mut painter = Painter::new((100.0, 100.0));
        curve.draw(&mut painter);
        let marks: String = painter
            .frame()
            .texts()
            .iter()
            .map(|t| t.content.as_str())
            .collect::<Vec<_>>()
            .join("");
        assert_eq!(marks, "xoxox");
    }

    #[test]
    fn filled_closed_polyline_fills_then_outlines() {
        let mut shape = ClosedPolyline::with_points([
            Point::new(0.0, 0.0),
            Point::new(100.0, 0.0),
            Point::new(50.0, 80.0),
        ]);
        shape.set_fill_color(Color::YELLOW);
        let mut painter = Painter::new((200.0, 200.0));
        shape.draw(&mut painter);
        // Fill and outline land in one merged mesh; both contributed indices.
        assert!(painter.frame().index_count() > 3);
    }
}
