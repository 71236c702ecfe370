//! Line styles and strokes.
//!
//! A [`Stroke`] bundles everything the canvas needs to draw an outline: the
//! line width, the line color and the [`LineStyle`]. Dashed styles are
//! realized by chopping the polyline into dash segments before tessellation,
//! with run lengths scaled by the line width.
//!
//! # Examples
//!
//! ```
//! use trazo::{Color, LineStyle, Stroke};
//!
//! let pen = Stroke::new(2.0, Color::BLACK).with_style(LineStyle::Dash);
//! assert!(!pen.is_empty());
//! assert!(LineStyle::Solid.dash_pattern(2.0).is_none());
//! ```

use crate::Color;
use smallvec::SmallVec;

/// The repeating pattern a line is drawn with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineStyle {
    #[default]
    Solid,
    Dash,
    Dot,
    DashDot,
    DashDotDot,
}

impl LineStyle {
    /// On/off run lengths in pixels for this style, scaled by the line width
    /// so heavier lines get proportionally longer dashes. `None` for solid
    /// lines.
    pub fn dash_pattern(&self, width: f32) -> Option<SmallVec<[f32; 6]>> {
        let unit = width.max(1.0);
        let scaled = |runs: &[f32]| runs.iter().map(|r| r * unit).collect();
        match self {
            LineStyle::Solid => None,
            LineStyle::Dash => Some(scaled(&[6.0, 4.0])),
            LineStyle::Dot => Some(scaled(&[2.0, 3.0])),
            LineStyle::DashDot => Some(scaled(&[6.0, 3.0, 2.0, 3.0])),
            LineStyle::DashDotDot => Some(scaled(&[6.0, 3.0, 2.0, 3.0, 2.0, 3.0])),
        }
    }
}

/// Width, color and style of an outline.
#[derive(Clone, Debug, Copy, PartialEq)]
pub struct Stroke {
    pub width: f32,
    pub color: Color,
    pub style: LineStyle,
}

impl Default for Stroke {
    fn default() -> Self {
        Self::new(1.0, Color::BLACK)
    }
}

impl Stroke {
    #[inline]
    pub fn new(width: impl Into<f32>, color: impl Into<Color>) -> Self {
        Self {
            width: width.into(),
            color: color.into(),
            style: LineStyle::Solid,
        }
    }

    pub fn with_style(mut self, style: LineStyle) -> Self {
        self.style = style;
        self
    }

    /// True if width is zero or the color is invisible.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || !self.color.is_visible()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn patterns_scale_with_width() {
        let thin = LineStyle::Dash.dash_pattern(1.0).unwrap();
        let thick = LineStyle::Dash.dash_pattern(3.0).unwrap();
        assert_eq!(thin.as_slice(), &[6.0, 4.0]);
        assert_eq!(thick.as_slice(), &[18.0, 12.0]);
    }

    #[test]
    fn hairline_widths_still_dash() {
        // Width 0.5 rounds up to the 1-pixel unit rather than shrinking runs.
        let p = LineStyle::Dot.dash_pattern(0.5).unwrap();
        assert_eq!(p.as_slice(), &[2.0, 3.0]);
    }

    #[test]
    fn empty_strokes() {
        assert!(Stroke::new(0.0, Color::BLACK).is_empty());
        assert!(Stroke::new(1.0, Color::INVISIBLE).is_empty());
        assert!(!Stroke::default().is_empty());
    }
}
