//! Coordinate axes: an axis line with evenly spaced notches and a label.

use crate::canvas::Painter;
use crate::error::Error;
use crate::geometry::Point;
use crate::shape::{Shape, ShapeBase};
use crate::shapes::line::Lines;
use crate::shapes::text::Text;
use crate::Color;

/// Length of an axis notch, in pixels.
const NOTCH_LENGTH: f32 = 5.0;

/// Which way an axis runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// From the origin to the right.
    Horizontal,
    /// From the origin upward.
    Vertical,
}

/// An axis line with notches and a label.
///
/// Notches and label are sub-shapes; `set_color` and `move_by` cascade to
/// them, while the fill color (meaningless for an axis) is ignored. The
/// notches keep their own color, so they can be styled separately through
/// [`Axis::notches_mut`].
///
/// # Examples
///
/// ```
/// use trazo::{Axis, Orientation, Point, Shape};
///
/// let x = Axis::new(
///     Orientation::Horizontal,
///     Point::new(20.0, 300.0),
///     280.0,
///     10,
///     "x",
/// )?;
/// assert_eq!(x.number_of_points(), 2);
/// # Ok::<(), trazo::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct Axis {
    base: ShapeBase,
    notches: Lines,
    label: Text,
}

impl Axis {
    /// Builds an axis starting at `origin`. Horizontal axes run right,
    /// vertical axes run up. `notch_count > 1` adds that many evenly spaced
    /// notches; the label is placed alongside the line.
    pub fn new(
        orientation: Orientation,
        origin: Point,
        length: f32,
        notch_count: usize,
        label: &str,
    ) -> Result<Self, Error> {
        if length < 0.0 || length.is_nan() {
            return Err(Error::BadAxisLength(length));
        }

        let mut base = ShapeBase::new();
        let mut notches = Lines::new();
        let label_position;

        match orientation {
            Orientation::Horizontal => {
                base.add(origin);
                base.add(Point::new(origin.x + length, origin.y));

                if notch_count > 1 {
                    let dist = length / notch_count as f32;
                    for i in 1..=notch_count {
                        let x = origin.x + dist * i as f32;
                        notches.add(
                            Point::new(x, origin.y),
                            Point::new(x, origin.y - NOTCH_LENGTH),
                        );
                    }
                }
                // Under the line, a third of the way along.
                label_position = Point::new(origin.x + length / 3.0, origin.y + 20.0);
            }
            Orientation::Vertical => {
                base.add(origin);
                base.add(Point::new(origin.x, origin.y - length));

                if notch_count > 1 {
                    let dist = length / notch_count as f32;
                    for i in 1..=notch_count {
                        let y = origin.y - dist * i as f32;
                        notches.add(
                            Point::new(origin.x, y),
                            Point::new(origin.x + NOTCH_LENGTH, y),
                        );
                    }
                }
                // Just above the top end.
                label_position = Point::new(origin.x - 10.0, origin.y - length - 10.0);
            }
        }

        Ok(Self {
            base,
            notches,
            label: Text::new(label_position, label),
        })
    }

    pub fn notches(&self) -> &Lines {
        &self.notches
    }

    pub fn notches_mut(&mut self) -> &mut Lines {
        &mut self.notches
    }

    pub fn label(&self) -> &Text {
        &self.label
    }

    pub fn label_mut(&mut self) -> &mut Text {
        &mut self.label
    }
}

impl Shape for Axis {
    fn base(&self) -> &ShapeBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ShapeBase {
        &mut self.base
    }

    fn draw_lines(&self, painter: &mut Painter) {
        painter.stroke_polyline(self.base.points(), false, self.base.stroke());
        // Sub-shapes may carry their own colors.
        self.notches.draw(painter);
        self.label.draw(painter);
    }

    fn set_color(&mut self, color: Color) {
        self.base.stroke_mut().color = color;
        self.notches.set_color(color);
        self.label.set_color(color);
    }

    fn move_by(&mut self, dx: f32, dy: f32) {
        self.base.translate(dx, dy);
        self.notches.move_by(dx, dy);
        self.label.move_by(dx, dy);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn x_axis() -> Axis {
        Axis::new(
            Orientation::Horizontal,
            Point::new(20.0, 300.0),
            200.0,
            10,
            "x",
        )
        .unwrap()
    }

    #[test]
    fn negative_length_is_rejected() {
        let err = Axis::new(Orientation::Vertical, Point::new(0.0, 0.0), -5.0, 0, "y");
        assert!(matches!(err, Err(Error::BadAxisLength(_))));
    }

    #[test]
    fn notch_count_and_spacing() {
        let axis = x_axis();
        // 10 notches, two points each.
        assert_eq!(axis.notches().number_of_points(), 20);
        assert_eq!(axis.notches().point(0), Point::new(40.0, 300.0));
        assert_eq!(axis.notches().point(1), Point::new(40.0, 295.0));
    }

    #[test]
    fn a_single_notch_is_not_drawn() {
        let axis = Axis::new(
            Orientation::Horizontal,
            Point::new(0.0, 0.0),
            100.0,
            1,
            "x",
        )
        .unwrap();
        assert_eq!(axis.notches().number_of_points(), 0);
    }

    #[test]
    fn vertical_axis_runs_up() {
        let axis = Axis::new(Orientation::Vertical, Point::new(50.0, 300.0), 200.0, 0, "y").unwrap();
        assert_eq!(axis.point(1), Point::new(50.0, 100.0));
        assert_eq!(axis.label().point(0), Point::new(40.0, 90.0));
    }

    #[test]
    fn color_and_moves_cascade() {
        let mut axis = x_axis();
        axis.set_color(Color::DARK_GREEN);
        assert_eq!(axis.notches().color(), Color::DARK_GREEN);
        assert_eq!(axis.label().color(), Color::DARK_GREEN);

        let before_label = axis.label().point(0);
        axis.move_by(5.0, -5.0);
        assert_eq!(axis.point(0), Point::new(25.0, 295.0));
        assert_eq!(
            axis.label().point(0),
            Point::new(before_label.x + 5.0, before_label.y - 5.0)
        );
    }

    #[test]
    fn axis_draws_line_notches_and_label() {
        let axis = x_axis();
        let mut painter = Painter::new((400.0, 400.0));
        axis.draw(&mut painter);
        assert!(painter.frame().index_count() > 0);
        assert_eq!(painter.frame().texts().len(), 1);
        assert_eq!(painter.frame().texts()[0].content, "x");
    }
}
