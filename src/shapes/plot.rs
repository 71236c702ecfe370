//! Function plots: a function of one variable sampled into a polyline.

use crate::canvas::Painter;
use crate::error::Error;
use crate::geometry::Point;
use crate::shape::{Shape, ShapeBase};

/// The graph of a function over a half-open parameter range.
///
/// The function is sampled at `count` evenly spaced parameters in
/// `[range_start, range_end)` and the samples are mapped to screen space
/// around `origin`: x grows right by `xscale` per unit, y grows *up* by
/// `yscale` per unit, as on paper.
///
/// # Examples
///
/// ```
/// use trazo::{FunctionPlot, Point, Shape};
///
/// let sine = FunctionPlot::new(
///     f64::sin,
///     -3.14,
///     3.14,
///     Point::new(300.0, 300.0),
///     100,
///     40.0,
///     40.0,
/// )?;
/// assert_eq!(sine.number_of_points(), 100);
/// # Ok::<(), trazo::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct FunctionPlot {
    base: ShapeBase,
}

impl FunctionPlot {
    pub fn new(
        f: impl Fn(f64) -> f64,
        range_start: f64,
        range_end: f64,
        origin: Point,
        count: usize,
        xscale: f64,
        yscale: f64,
    ) -> Result<Self, Error> {
        if range_end - range_start <= 0.0 {
            return Err(Error::BadPlotRange(range_start, range_end));
        }
        if count == 0 {
            return Err(Error::BadPlotCount);
        }

        let dist = (range_end - range_start) / count as f64;
        let mut base = ShapeBase::new();
        let mut r = range_start;
        for _ in 0..count {
            base.add(Point::new(
                origin.x + (r * xscale) as f32,
                origin.y - (f(r) * yscale) as f32,
            ));
            r += dist;
        }
        Ok(Self { base })
    }
}

impl Shape for FunctionPlot {
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_range_is_rejected() {
        let plot = FunctionPlot::new(|x| x, 1.0, 1.0, Point::new(0.0, 0.0), 10, 1.0, 1.0);
        assert!(matches!(plot, Err(Error::BadPlotRange(..))));
    }

    #[test]
    fn zero_samples_are_rejected() {
        let plot = FunctionPlot::new(|x| x, 0.0, 1.0, Point::new(0.0, 0.0), 0, 1.0, 1.0);
        assert!(matches!(plot, Err(Error::BadPlotCount)));
    }

    #[test]
    fn samples_are_scaled_around_the_origin() {
        // f(x) = x over [0, 4), 4 samples, one unit = 10 px.
        let plot = FunctionPlot::new(
            |x| x,
            0.0,
            4.0,
            Point::new(100.0, 200.0),
            4,
            10.0,
            10.0,
        )
        .unwrap();
        assert_eq!(plot.number_of_points(), 4);
        assert_eq!(plot.point(0), Point::new(100.0, 200.0));
        // Positive function values go up on screen.
        assert_eq!(plot.point(3), Point::new(130.0, 170.0));
    }

    #[test]
    fn the_range_end_is_excluded() {
        let plot = FunctionPlot::new(
            |_| 0.0,
            0.0,
            10.0,
            Point::new(0.0, 0.0),
            5,
            1.0,
            1.0,
        )
        .unwrap();
        // Samples at 0, 2, 4, 6, 8 — never at 10.
        assert_eq!(plot.point(4), Point::new(8.0, 0.0));
    }
}
