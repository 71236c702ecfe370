//! Text labels.

use crate::canvas::Painter;
use crate::geometry::Point;
use crate::shape::{Shape, ShapeBase};

pub(crate) const DEFAULT_FONT_SIZE: f32 = 14.0;

/// A single-line text label.
///
/// The anchor point is where the baseline of the first character starts, so a
/// label placed at a shape corner reads just above it. The text uses the line
/// color.
///
/// # Examples
///
/// ```
/// use trazo::{Color, Point, Shape, Text};
///
/// let mut caption = Text::new(Point::new(10.0, 590.0), "y = sin(x)");
/// caption.set_color(Color::DARK_BLUE);
/// caption.set_font_size(18.0);
/// assert_eq!(caption.label(), "y = sin(x)");
/// ```
#[derive(Debug, Clone)]
pub struct Text {
    base: ShapeBase,
    label: String,
    font_size: f32,
}

impl Text {
    pub fn new(baseline_left: Point, label: impl Into<String>) -> Self {
        Self {
            base: ShapeBase::with_points(vec![baseline_left]),
            label: label.into(),
            font_size: DEFAULT_FONT_SIZE,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = label.into();
    }

    pub fn font_size(&self) -> f32 {
        self.font_size
    }

    pub fn set_font_size(&mut self, font_size: f32) {
        self.font_size = font_size;
    }
}

impl Shape for Text {
    fn base(&self) -> &ShapeBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ShapeBase {
        &mut self.base
    }

    fn draw_lines(&self, painter: &mut Painter) {
        let anchor = self.point(0);
        // The glyph renderer wants the top of the text box; approximate the
        // ascent with the font size.
        let top_left = Point::new(anchor.x, anchor.y - self.font_size);
        painter.text(top_left, &self.label, self.font_size, self.base.stroke().color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Color;

    #[test]
    fn label_is_recorded_with_its_color() {
        let mut t = Text::new(Point::new(10.0, 20.0), "hi");
        t.set_color(Color::RED);
        let mut painter = Painter::new((100.0, 100.0));
        t.draw(&mut painter);

        let texts = painter.frame().texts();
        assert_eq!(texts.len(), 1);
        assert_eq!(texts[0].content, "hi");
        assert_eq!(texts[0].color, Color::RED);
        assert_eq!(texts[0].position, Point::new(10.0, 20.0 - DEFAULT_FONT_SIZE));
    }

    #[test]
    fn empty_labels_are_skipped() {
        let t = Text::new(Point::new(0.0, 0.0), "");
        let mut painter = Painter::new((100.0, 100.0));
        t.draw(&mut painter);
        assert!(painter.frame().texts().is_empty());
    }
}
