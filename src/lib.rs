//! A small shape-drawing library for learning 2D graphics.
//!
//! Shapes — lines, polygons, circles, rectangles, text labels, coordinate
//! axes, function plots, images — are plain objects holding an ordered point
//! list plus color and line-style attributes. Attach them to a [`Window`] and
//! [`run`] it; the library turns each shape into immediate-mode canvas calls
//! and renders them on the GPU. Windowing comes from `winit`, rendering from
//! `wgpu` and `lyon`, text from `glyphon`, image decoding from the `image`
//! crate.
//!
//! # Examples
//!
//! ```no_run
//! use trazo::{Axis, Color, FunctionPlot, Orientation, Point, Shape, Window};
//!
//! let mut window = Window::new(Point::new(100.0, 100.0), 600, 400, "sine");
//!
//! let x_axis = Axis::new(Orientation::Horizontal, Point::new(20.0, 300.0), 280.0, 10, "x")?;
//! window.attach(x_axis);
//!
//! let mut sine = FunctionPlot::new(f64::sin, -3.14, 3.14, Point::new(300.0, 200.0), 200, 40.0, 40.0)?;
//! sine.set_color(Color::BLUE);
//! window.attach(sine);
//!
//! trazo::run(window)?;
//! # Ok::<(), trazo::Error>(())
//! ```

mod app;
mod canvas;
mod color;
mod error;
mod geometry;
mod pipeline;
mod renderer;
mod shape;
mod shapes;
mod stroke;
mod util;
mod vertex;
mod window;

pub use app::run;
pub use canvas::{Bitmap, Crop, DrawCommand, Frame, ImageCommand, Painter, TextSpec};
pub use color::Color;
pub use error::Error;
pub use geometry::{arrowhead, distance, line_intersect, sample_ellipse_arc, segment_intersect, Point};
pub use shape::{Shape, ShapeBase};
pub use shapes::{
    Arc, Arrow, Axis, Circle, ClosedPolyline, Ellipse, FunctionPlot, Image, Line, Lines, Mark,
    MarkedPolyline, Marks, OpenPolyline, Orientation, Polygon, Rectangle, RoundedRectangle, Text,
};
pub use stroke::{LineStyle, Stroke};
pub use window::{ShapeId, Window};
