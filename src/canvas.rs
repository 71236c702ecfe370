//! The immediate-mode canvas shapes draw into.
//!
//! A [`Painter`] records one frame worth of drawing: stroked and filled
//! geometry is tessellated on the spot into a single aggregated mesh, images
//! become textured-quad commands, and text is collected for the glyph
//! renderer. The recorded [`Frame`] is plain CPU data — the GPU renderer
//! consumes it, and tests can inspect it without any window or adapter.
//!
//! # Examples
//!
//! ```
//! use trazo::{Color, Painter, Point, Stroke};
//!
//! let mut painter = Painter::new((800.0, 600.0));
//! painter.stroke_polyline(
//!     &[Point::new(0.0, 0.0), Point::new(100.0, 100.0)],
//!     false,
//!     Stroke::new(2.0, Color::BLACK),
//! );
//! let frame = painter.into_frame();
//! assert_eq!(frame.commands().len(), 1);
//! assert!(frame.index_count() > 0);
//! ```

use std::ops::Range;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use lyon::path::Path;
use lyon::tessellation::{
    BuffersBuilder, FillOptions, FillTessellator, FillVertex, FillVertexConstructor,
    StrokeOptions, StrokeTessellator, StrokeVertex, StrokeVertexConstructor, VertexBuffers,
};

use crate::geometry::{dash_segments, sample_ellipse_arc, Point};
use crate::stroke::Stroke;
use crate::util::rgba_to_linear;
use crate::vertex::ColorVertex;
use crate::Color;

/// Font size used for polyline marks.
const MARK_FONT_SIZE: f32 = 12.0;

static NEXT_BITMAP_ID: AtomicU64 = AtomicU64::new(1);

/// Decoded RGBA pixel data, ready for upload.
///
/// Bitmaps are cheap to clone; the pixel data is shared. Each bitmap has a
/// unique id the renderer uses to upload the texture only once.
#[derive(Debug, Clone)]
pub struct Bitmap {
    id: u64,
    pixels: Arc<Vec<u8>>,
    width: u32,
    height: u32,
}

impl Bitmap {
    /// Wraps tightly packed RGBA8 data.
    ///
    /// # Panics
    ///
    /// Panics if `pixels` is not exactly `width * height * 4` bytes.
    pub fn from_rgba(pixels: Vec<u8>, width: u32, height: u32) -> Self {
        assert_eq!(pixels.len(), width as usize * height as usize * 4);
        Self {
            id: NEXT_BITMAP_ID.fetch_add(1, Ordering::Relaxed),
            pixels: Arc::new(pixels),
            width,
            height,
        }
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub(crate) fn id(&self) -> u64 {
        self.id
    }

    pub(crate) fn pixels(&self) -> &Arc<Vec<u8>> {
        &self.pixels
    }
}

/// A sub-rectangle of a bitmap, in image pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Crop {
    pub width: u32,
    pub height: u32,
    pub offset_x: u32,
    pub offset_y: u32,
}

/// One recorded draw command. Commands execute in recording order.
#[derive(Debug)]
pub enum DrawCommand {
    /// A range of the frame's aggregated index buffer.
    Mesh { indices: Range<u32> },
    /// A textured quad.
    Image(ImageCommand),
}

#[derive(Debug)]
pub struct ImageCommand {
    pub(crate) id: u64,
    pub(crate) pixels: Arc<Vec<u8>>,
    pub(crate) dimensions: (u32, u32),
    /// Destination rectangle in logical pixels, `[top_left, bottom_right]`.
    pub rect: [Point; 2],
    /// Texture coordinates, `[uv_min, uv_max]`.
    pub(crate) uv: [[f32; 2]; 2],
}

impl ImageCommand {
    pub fn bitmap_id(&self) -> u64 {
        self.id
    }
}

/// A single run of text to draw on top of the shapes.
#[derive(Debug, Clone, PartialEq)]
pub struct TextSpec {
    /// Top-left corner of the text box in logical pixels.
    pub position: Point,
    pub content: String,
    pub font_size: f32,
    pub color: Color,
}

/// Everything one frame draws: the aggregated color mesh, the ordered command
/// list and the collected text runs.
///
/// Text is drawn after the other commands, so labels sit on top of shapes.
#[derive(Debug)]
pub struct Frame {
    pub(crate) geometry: VertexBuffers<ColorVertex, u32>,
    pub(crate) commands: Vec<DrawCommand>,
    pub(crate) texts: Vec<TextSpec>,
}

impl Default for Frame {
    fn default() -> Self {
        Self {
            geometry: VertexBuffers::new(),
            commands: Vec::new(),
            texts: Vec::new(),
        }
    }
}

impl Frame {
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn texts(&self) -> &[TextSpec] {
        &self.texts
    }

    pub fn vertex_count(&self) -> usize {
        self.geometry.vertices.len()
    }

    pub fn index_count(&self) -> usize {
        self.geometry.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty() && self.texts.is_empty()
    }
}

struct VertexCtor {
    color: [f32; 4],
}

impl FillVertexConstructor<ColorVertex> for VertexCtor {
    fn new_vertex(&mut self, vertex: FillVertex) -> ColorVertex {
        ColorVertex {
            position: vertex.position().to_array(),
            color: self.color,
        }
    }
}

impl StrokeVertexConstructor<ColorVertex> for VertexCtor {
    fn new_vertex(&mut self, vertex: StrokeVertex) -> ColorVertex {
        ColorVertex {
            position: vertex.position().to_array(),
            color: self.color,
        }
    }
}

/// Records draw calls for one frame.
///
/// All primitives take explicit paint arguments and silently reject invisible
/// colors, empty strokes and degenerate inputs, mirroring how a shape with an
/// invisible attribute simply does not appear.
pub struct Painter {
    logical_size: (f32, f32),
    frame: Frame,
    fill_tessellator: FillTessellator,
    stroke_tessellator: StrokeTessellator,
}

impl Painter {
    pub fn new(logical_size: (f32, f32)) -> Self {
        Self {
            logical_size,
            frame: Frame::default(),
            fill_tessellator: FillTessellator::new(),
            stroke_tessellator: StrokeTessellator::new(),
        }
    }

    /// The drawable area in logical pixels.
    pub fn logical_size(&self) -> (f32, f32) {
        self.logical_size
    }

    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    pub fn into_frame(self) -> Frame {
        self.frame
    }

    /// Strokes the polyline through `points`, optionally closing it back to
    /// the first point. Dashed styles chop the line first, carrying the dash
    /// phase around corners.
    pub fn stroke_polyline(&mut self, points: &[Point], closed: bool, stroke: Stroke) {
        if stroke.is_empty() || points.len() < 2 {
            return;
        }

        let path = match stroke.style.dash_pattern(stroke.width) {
            Some(pattern) => {
                let mut line = points.to_vec();
                if closed {
                    line.push(points[0]);
                }
                segments_path(&dash_segments(&line, &pattern))
            }
            None => polyline_path(points, closed),
        };
        self.stroke_path(&path, stroke);
    }

    /// Strokes independent segments. The dash phase restarts on every
    /// segment, so paired-line shapes dash uniformly.
    pub fn stroke_segments(&mut self, segments: &[(Point, Point)], stroke: Stroke) {
        if stroke.is_empty() || segments.is_empty() {
            return;
        }

        let path = match stroke.style.dash_pattern(stroke.width) {
            Some(pattern) => {
                let mut dashes = Vec::new();
                for &(a, b) in segments {
                    dashes.extend(dash_segments(&[a, b], &pattern));
                }
                segments_path(&dashes)
            }
            None => segments_path(segments),
        };
        self.stroke_path(&path, stroke);
    }

    /// Fills the region enclosed by `points` (closed implicitly, even-odd
    /// fill rule).
    pub fn fill_polygon(&mut self, points: &[Point], color: Color) {
        if !color.is_visible() || points.len() < 3 {
            return;
        }
        self.fill_path(&polyline_path(points, true), color);
    }

    pub fn fill_rect(&mut self, top_left: Point, width: f32, height: f32, color: Color) {
        self.fill_polygon(&rect_corners(top_left, width, height), color);
    }

    pub fn stroke_rect(&mut self, top_left: Point, width: f32, height: f32, stroke: Stroke) {
        if width <= 0.0 || height <= 0.0 {
            return;
        }
        self.stroke_polyline(&rect_corners(top_left, width, height), true, stroke);
    }

    /// Strokes an axis-aligned ellipse arc between two angles in degrees
    /// (0 = along +x, counter-clockwise).
    pub fn stroke_arc(&mut self, center: Point, rx: f32, ry: f32, a1: f32, a2: f32, stroke: Stroke) {
        let points = sample_ellipse_arc(center, rx, ry, a1, a2);
        self.stroke_polyline(&points, false, stroke);
    }

    /// Fills the pie wedge between two angles of an axis-aligned ellipse.
    pub fn fill_pie(&mut self, center: Point, rx: f32, ry: f32, a1: f32, a2: f32, color: Color) {
        let arc = sample_ellipse_arc(center, rx, ry, a1, a2);
        if arc.is_empty() {
            return;
        }
        let mut wedge = Vec::with_capacity(arc.len() + 1);
        wedge.push(center);
        wedge.extend(arc);
        self.fill_polygon(&wedge, color);
    }

    /// Records a run of text with its top-left corner at `position`.
    pub fn text(&mut self, position: Point, content: &str, font_size: f32, color: Color) {
        if content.is_empty() || !color.is_visible() || font_size <= 0.0 {
            return;
        }
        self.frame.texts.push(TextSpec {
            position,
            content: content.to_owned(),
            font_size,
            color,
        });
    }

    /// Draws a one-character mark centered near `at`.
    pub fn mark(&mut self, at: Point, mark: char, color: Color) {
        let position = Point::new(at.x - 4.0, at.y + 4.0 - MARK_FONT_SIZE);
        self.text(position, &mark.to_string(), MARK_FONT_SIZE, color);
    }

    /// Draws `bitmap` into the destination rectangle, optionally showing only
    /// a cropped sub-rectangle of the source image.
    pub fn image(&mut self, bitmap: &Bitmap, rect: [Point; 2], crop: Option<Crop>) {
        let (w, h) = bitmap.dimensions();
        if w == 0 || h == 0 {
            return;
        }
        let uv = match crop {
            Some(c) => {
                let u0 = (c.offset_x as f32 / w as f32).min(1.0);
                let v0 = (c.offset_y as f32 / h as f32).min(1.0);
                let u1 = ((c.offset_x + c.width) as f32 / w as f32).min(1.0);
                let v1 = ((c.offset_y + c.height) as f32 / h as f32).min(1.0);
                [[u0, v0], [u1, v1]]
            }
            None => [[0.0, 0.0], [1.0, 1.0]],
        };
        self.frame.commands.push(DrawCommand::Image(ImageCommand {
            id: bitmap.id(),
            pixels: bitmap.pixels().clone(),
            dimensions: (w, h),
            rect,
            uv,
        }));
    }

    fn stroke_path(&mut self, path: &Path, stroke: Stroke) {
        let start_vertices = self.frame.geometry.vertices.len();
        let start = self.frame.geometry.indices.len() as u32;
        let ctor = VertexCtor {
            color: rgba_to_linear(stroke.color.normalize()),
        };
        let options = StrokeOptions::default().with_line_width(stroke.width);
        if let Err(e) = self.stroke_tessellator.tessellate_path(
            path,
            &options,
            &mut BuffersBuilder::new(&mut self.frame.geometry, ctor),
        ) {
            tracing::warn!("stroke tessellation failed: {e:?}");
            self.frame.geometry.vertices.truncate(start_vertices);
            self.frame.geometry.indices.truncate(start as usize);
            return;
        }
        self.push_mesh(start);
    }

    fn fill_path(&mut self, path: &Path, color: Color) {
        let start_vertices = self.frame.geometry.vertices.len();
        let start = self.frame.geometry.indices.len() as u32;
        let ctor = VertexCtor {
            color: rgba_to_linear(color.normalize()),
        };
        if let Err(e) = self.fill_tessellator.tessellate_path(
            path,
            &FillOptions::default(),
            &mut BuffersBuilder::new(&mut self.frame.geometry, ctor),
        ) {
            tracing::warn!("fill tessellation failed: {e:?}");
            self.frame.geometry.vertices.truncate(start_vertices);
            self.frame.geometry.indices.truncate(start as usize);
            return;
        }
        self.push_mesh(start);
    }

    /// Appends a mesh command for the indices added since `start`, merging
    /// with the previous command when nothing else came in between.
    fn push_mesh(&mut self, start: u32) {
        let end = self.frame.geometry.indices.len() as u32;
        if end == start {
            return;
        }
        if let Some(DrawCommand::Mesh { indices }) = self.frame.commands.last_mut() {
            if indices.end == start {
                indices.end = end;
                return;
            }
        }
        self.frame.commands.push(DrawCommand::Mesh {
            indices: start..end,
        });
    }
}

fn rect_corners(top_left: Point, width: f32, height: f32) -> [Point; 4] {
    [
        top_left,
        Point::new(top_left.x + width, top_left.y),
        Point::new(top_left.x + width, top_left.y + height),
        Point::new(top_left.x, top_left.y + height),
    ]
}

fn polyline_path(points: &[Point], closed: bool) -> Path {
    let mut builder = Path::builder();
    builder.begin(points[0].into());
    for p in &points[1..] {
        builder.line_to((*p).into());
    }
    if closed {
        builder.close();
    } else {
        builder.end(false);
    }
    builder.build()
}

fn segments_path(segments: &[(Point, Point)]) -> Path {
    let mut builder = Path::builder();
    for &(a, b) in segments {
        builder.begin(a.into());
        builder.line_to(b.into());
        builder.end(false);
    }
    builder.build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LineStyle;

    fn painter() -> Painter {
        Painter::new((800.0, 600.0))
    }

    #[test]
    fn invisible_paint_records_nothing() {
        let mut p = painter();
        p.stroke_polyline(
            &[Point::new(0.0, 0.0), Point::new(10.0, 0.0)],
            false,
            Stroke::new(1.0, Color::INVISIBLE),
        );
        p.fill_polygon(
            &[
                Point::new(0.0, 0.0),
                Point::new(10.0, 0.0),
                Point::new(0.0, 10.0),
            ],
            Color::INVISIBLE,
        );
        p.text(Point::new(0.0, 0.0), "hidden", 14.0, Color::INVISIBLE);
        assert!(p.frame().is_empty());
    }

    #[test]
    fn adjacent_strokes_merge_into_one_mesh_command() {
        let mut p = painter();
        let pen = Stroke::new(1.0, Color::BLACK);
        p.stroke_polyline(&[Point::new(0.0, 0.0), Point::new(10.0, 0.0)], false, pen);
        p.stroke_polyline(&[Point::new(0.0, 5.0), Point::new(10.0, 5.0)], false, pen);
        assert_eq!(p.frame().commands().len(), 1);
        let DrawCommand::Mesh { indices } = &p.frame().commands()[0] else {
            panic!("expected a mesh command");
        };
        assert_eq!(indices.start, 0);
        assert_eq!(indices.end as usize, p.frame().index_count());
    }

    #[test]
    fn images_split_the_mesh_but_keep_order() {
        let mut p = painter();
        let pen = Stroke::new(1.0, Color::BLACK);
        let bitmap = Bitmap::from_rgba(vec![255; 16], 2, 2);
        p.stroke_polyline(&[Point::new(0.0, 0.0), Point::new(10.0, 0.0)], false, pen);
        p.image(&bitmap, [Point::new(0.0, 0.0), Point::new(2.0, 2.0)], None);
        p.stroke_polyline(&[Point::new(0.0, 5.0), Point::new(10.0, 5.0)], false, pen);

        let kinds: Vec<_> = p
            .frame()
            .commands()
            .iter()
            .map(|c| match c {
                DrawCommand::Mesh { .. } => "mesh",
                DrawCommand::Image(_) => "image",
            })
            .collect();
        assert_eq!(kinds, ["mesh", "image", "mesh"]);
    }

    #[test]
    fn filled_triangle_produces_triangles() {
        let mut p = painter();
        p.fill_polygon(
            &[
                Point::new(0.0, 0.0),
                Point::new(100.0, 0.0),
                Point::new(0.0, 100.0),
            ],
            Color::RED,
        );
        assert!(p.frame().index_count() >= 3);
        assert_eq!(p.frame().index_count() % 3, 0);
    }

    #[test]
    fn dashed_stroke_tessellates_more_subpaths_than_solid() {
        let line = [Point::new(0.0, 0.0), Point::new(200.0, 0.0)];
        let mut solid = painter();
        solid.stroke_polyline(&line, false, Stroke::new(1.0, Color::BLACK));
        let mut dashed = painter();
        dashed.stroke_polyline(
            &line,
            false,
            Stroke::new(1.0, Color::BLACK).with_style(LineStyle::Dash),
        );
        assert!(dashed.frame().vertex_count() > solid.frame().vertex_count());
    }

    #[test]
    fn crop_maps_to_texture_coordinates() {
        let mut p = painter();
        let bitmap = Bitmap::from_rgba(vec![0; 100 * 50 * 4], 100, 50);
        p.image(
            &bitmap,
            [Point::new(0.0, 0.0), Point::new(50.0, 25.0)],
            Some(Crop {
                width: 50,
                height: 25,
                offset_x: 25,
                offset_y: 0,
            }),
        );
        let DrawCommand::Image(cmd) = &p.frame().commands()[0] else {
            panic!("expected an image command");
        };
        assert_eq!(cmd.uv, [[0.25, 0.0], [0.75, 0.5]]);
    }

    #[test]
    fn marks_are_single_character_text_runs() {
        let mut p = painter();
        p.mark(Point::new(20.0, 20.0), '*', Color::BLACK);
        assert_eq!(p.frame().texts().len(), 1);
        assert_eq!(p.frame().texts()[0].content, "*");
    }
}
