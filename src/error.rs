use crate::geometry::Point;

/// Errors reported by shape constructors and the event loop.
///
/// Shape validation happens eagerly, when points are added, so a shape that
/// was built successfully always draws without surprises.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// A polygon point repeated the previous point.
    #[error("polygon point {0:?} equals the previous point")]
    PolygonDuplicatePoint(Point),
    /// A polygon point lies on the straight line through the previous edge.
    #[error("polygon point {0:?} lies in a straight line with the previous edge")]
    PolygonCollinearPoint(Point),
    /// Adding the point would make two polygon edges cross.
    #[error("polygon edge to {0:?} intersects an earlier edge")]
    PolygonEdgesIntersect(Point),
    /// An axis cannot have a negative length.
    #[error("bad axis length {0}")]
    BadAxisLength(f32),
    /// A function plot needs a non-empty range.
    #[error("bad graphing range [{0}, {1})")]
    BadPlotRange(f64, f64),
    /// A function plot needs at least one sample.
    #[error("non-positive graphing count")]
    BadPlotCount,
    #[error("event loop: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),
    #[error("window creation: {0}")]
    WindowCreation(#[from] winit::error::OsError),
    /// The GPU surface, adapter or device could not be set up.
    #[error("graphics initialization: {0}")]
    GraphicsInit(String),
}
