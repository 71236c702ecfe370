//! The shape container a scene is described in.
//!
//! A [`Window`] is built up before the event loop starts: create it with a
//! position, size and title, attach shapes, then hand it to
//! [`run`](crate::run). Shapes draw in attach order; [`Window::put_on_top`]
//! reorders and [`Window::detach`] removes.
//!
//! # Examples
//!
//! ```
//! use trazo::{Circle, Color, Line, Point, Shape, Window};
//!
//! let mut window = Window::new(Point::new(100.0, 100.0), 800, 600, "scene");
//! window.set_background(Color::WHITE);
//!
//! let line = window.attach(Line::new(Point::new(0.0, 0.0), Point::new(100.0, 100.0)));
//! let circle = window.attach(Circle::new(Point::new(400.0, 300.0), 50.0));
//!
//! window.shape_mut(line).unwrap().set_color(Color::RED);
//! window.put_on_top(line);
//! let _circle = window.detach(circle).unwrap();
//! assert_eq!(window.shape_count(), 1);
//! ```

use crate::canvas::Painter;
use crate::geometry::Point;
use crate::shape::Shape;
use crate::Color;

/// Handle to a shape attached to a [`Window`].
///
/// Ids stay valid across `put_on_top` and across detaching other shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShapeId(u64);

/// A native window description plus the shapes attached to it.
pub struct Window {
    origin: Point,
    width: u32,
    height: u32,
    label: String,
    background: Color,
    shapes: Vec<(ShapeId, Box<dyn Shape>)>,
    next_id: u64,
}

impl Window {
    /// Creates a window description with its top-left corner at `origin` and
    /// the given inner size in logical pixels.
    pub fn new(origin: Point, width: u32, height: u32, label: impl Into<String>) -> Self {
        Self {
            origin,
            width,
            height,
            label: label.into(),
            background: Color::WHITE,
            shapes: Vec::new(),
            next_id: 0,
        }
    }

    pub fn origin(&self) -> Point {
        self.origin
    }

    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = label.into();
    }

    pub fn background(&self) -> Color {
        self.background
    }

    pub fn set_background(&mut self, color: Color) {
        self.background = color;
    }

    /// Attaches a shape; it will draw after (on top of) everything attached
    /// before it.
    pub fn attach(&mut self, shape: impl Shape + 'static) -> ShapeId {
        let id = ShapeId(self.next_id);
        self.next_id += 1;
        self.shapes.push((id, Box::new(shape)));
        id
    }

    /// Removes a shape, returning it if it was attached.
    pub fn detach(&mut self, id: ShapeId) -> Option<Box<dyn Shape>> {
        let index = self.shapes.iter().position(|(sid, _)| *sid == id)?;
        Some(self.shapes.remove(index).1)
    }

    /// Moves a shape to the end of the draw order so it renders above the
    /// others. Returns false for an unknown id.
    pub fn put_on_top(&mut self, id: ShapeId) -> bool {
        let Some(index) = self.shapes.iter().position(|(sid, _)| *sid == id) else {
            return false;
        };
        let entry = self.shapes.remove(index);
        self.shapes.push(entry);
        true
    }

    pub fn shape(&self, id: ShapeId) -> Option<&dyn Shape> {
        self.shapes
            .iter()
            .find(|(sid, _)| *sid == id)
            .map(|(_, s)| s.as_ref())
    }

    /// Mutable access to an attached shape's shared attributes (color, fill,
    /// style, position).
    pub fn shape_mut(&mut self, id: ShapeId) -> Option<&mut (dyn Shape + 'static)> {
        self.shapes
            .iter_mut()
            .find(|(sid, _)| *sid == id)
            .map(|(_, s)| s.as_mut())
    }

    pub fn shape_count(&self) -> usize {
        self.shapes.len()
    }

    /// Draws every attached shape in order.
    pub fn draw_shapes(&self, painter: &mut Painter) {
        for (_, shape) in &self.shapes {
            shape.draw(painter);
        }
    }
}

impl std::fmt::Debug for Window {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Window")
            .field("label", &self.label)
            .field("size", &(self.width, self.height))
            .field("shapes", &self.shapes.len())
            .finish()
    }
}
