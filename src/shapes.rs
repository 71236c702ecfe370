//! The concrete shape types: lines, polylines and polygons, rectangles,
//! ellipse-family shapes, text labels, coordinate axes, function plots and
//! images.
//!
//! All of them implement [`Shape`](crate::Shape) and are attached to a
//! [`Window`](crate::Window) for drawing.

mod axis;
mod ellipse;
mod image;
mod line;
mod plot;
mod polyline;
mod rect;
mod text;

pub use axis::{Axis, Orientation};
pub use ellipse::{Arc, Circle, Ellipse};
pub use image::Image;
pub use line::{Arrow, Line, Lines};
pub use plot::FunctionPlot;
pub use polyline::{ClosedPolyline, Mark, MarkedPolyline, Marks, OpenPolyline, Polygon};
pub use rect::{Rectangle, RoundedRectangle};
pub use text::Text;
