//! Bitmap images loaded from disk.

use std::path::Path as FsPath;

use crate::canvas::{Bitmap, Crop, Painter};
use crate::geometry::Point;
use crate::shape::{Shape, ShapeBase};
use crate::stroke::Stroke;
use crate::Color;

/// Size of the placeholder box drawn for images that failed to load.
const PLACEHOLDER_SIZE: (f32, f32) = (30.0, 20.0);
const ERROR_FONT_SIZE: f32 = 12.0;

/// Image encodings recognized by file suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Encoding {
    Jpeg,
    Gif,
    Png,
}

impl Encoding {
    fn from_path(path: &FsPath) -> Option<Self> {
        let suffix = path.extension()?.to_str()?.to_ascii_lowercase();
        match suffix.as_str() {
            "jpg" | "jpeg" => Some(Self::Jpeg),
            "gif" => Some(Self::Gif),
            "png" => Some(Self::Png),
            _ => None,
        }
    }
}

impl From<Encoding> for image::ImageFormat {
    fn from(e: Encoding) -> Self {
        match e {
            Encoding::Jpeg => image::ImageFormat::Jpeg,
            Encoding::Gif => image::ImageFormat::Gif,
            Encoding::Png => image::ImageFormat::Png,
        }
    }
}

/// A bitmap image anchored at its top-left corner.
///
/// Loading never fails: a file that cannot be opened or decoded turns the
/// shape into a small crossed-out placeholder box with an explanatory label,
/// so a typo in an image path is visible on screen instead of aborting the
/// program.
///
/// # Examples
///
/// ```no_run
/// use trazo::{Image, Point};
///
/// let photo = Image::open(Point::new(50.0, 50.0), "photo.jpg");
/// assert!(!photo.is_placeholder() || photo.error().is_some());
/// ```
#[derive(Debug, Clone)]
pub struct Image {
    base: ShapeBase,
    bitmap: Option<Bitmap>,
    error: Option<String>,
    crop: Option<Crop>,
}

impl Image {
    /// Loads the image at `path`. The encoding is taken from the file suffix
    /// (`.jpg`/`.jpeg`, `.gif`, `.png`); anything else falls back to content
    /// sniffing.
    pub fn open(top_left: Point, path: impl AsRef<FsPath>) -> Self {
        let path = path.as_ref();
        let base = ShapeBase::with_points(vec![top_left]);

        let bytes = match std::fs::read(path) {
            Ok(bytes) => bytes,
            Err(_) => {
                return Self {
                    base,
                    bitmap: None,
                    error: Some(format!("cannot open \"{}\"", path.display())),
                    crop: None,
                };
            }
        };

        let decoded = match Encoding::from_path(path) {
            Some(encoding) => image::load_from_memory_with_format(&bytes, encoding.into()),
            None => image::load_from_memory(&bytes),
        };

        match decoded {
            Ok(dynamic) => {
                let rgba = dynamic.to_rgba8();
                let (width, height) = rgba.dimensions();
                Self {
                    base,
                    bitmap: Some(Bitmap::from_rgba(rgba.into_raw(), width, height)),
                    error: None,
                    crop: None,
                }
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), "image decode failed: {e}");
                Self {
                    base,
                    bitmap: None,
                    error: Some(format!("bad image file \"{}\"", path.display())),
                    crop: None,
                }
            }
        }
    }

    /// Wraps already decoded RGBA pixels instead of reading a file.
    pub fn from_bitmap(top_left: Point, bitmap: Bitmap) -> Self {
        Self {
            base: ShapeBase::with_points(vec![top_left]),
            bitmap: Some(bitmap),
            error: None,
            crop: None,
        }
    }

    /// True when loading failed and the placeholder box will be drawn.
    pub fn is_placeholder(&self) -> bool {
        self.bitmap.is_none()
    }

    /// The load error message, if any.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// The decoded image size in pixels.
    pub fn dimensions(&self) -> Option<(u32, u32)> {
        self.bitmap.as_ref().map(|b| b.dimensions())
    }

    /// Shows only a `width` x `height` sub-rectangle of the image, offset by
    /// (`offset_x`, `offset_y`) from its top-left corner.
    pub fn set_crop(&mut self, width: u32, height: u32, offset_x: u32, offset_y: u32) {
        self.crop = Some(Crop {
            width,
            height,
            offset_x,
            offset_y,
        });
    }

    fn draw_placeholder(&self, painter: &mut Painter) {
        let top_left = self.point(0);
        let (w, h) = PLACEHOLDER_SIZE;
        let pen = Stroke::new(1.0, Color::RED);
        painter.stroke_rect(top_left, w, h, pen);
        painter.stroke_segments(
            &[
                (top_left, Point::new(top_left.x + w, top_left.y + h)),
                (
                    Point::new(top_left.x + w, top_left.y),
                    Point::new(top_left.x, top_left.y + h),
                ),
            ],
            pen,
        );
        if let Some(error) = &self.error {
            painter.text(
                Point::new(top_left.x, top_left.y + h + 4.0),
                error,
                ERROR_FONT_SIZE,
                Color::RED,
            );
        }
    }
}

impl Shape for Image {
    fn base(&self) -> &ShapeBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ShapeBase {
        &mut self.base
    }

    fn draw_lines(&self, painter: &mut Painter) {
        let Some(bitmap) = &self.bitmap else {
            self.draw_placeholder(painter);
            return;
        };

        let top_left = self.point(0);
        let (w, h) = match self.crop {
            Some(c) => (c.width as f32, c.height as f32),
            None => {
                let (w, h) = bitmap.dimensions();
                (w as f32, h as f32)
            }
        };
        painter.image(
            bitmap,
            [top_left, Point::new(top_left.x + w, top_left.y + h)],
            self.crop,
        );
    }
}
