//! Font measurement.
//!
//! Layout only needs per-character advances and the vertical line metrics,
//! so anything that can answer those can stand in for a real font.

/// Vertical metrics at one font size. `descent` is negative (below baseline).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineMetrics {
    pub ascent: f32,
    pub descent: f32,
    pub line_height: f32,
}

pub trait FontMetrics {
    /// Horizontal advance of `ch` at `size` pixels.
    fn advance(&self, ch: char, size: f32) -> f32;

    fn line_metrics(&self, size: f32) -> LineMetrics;
}

impl FontMetrics for fontdue::Font {
    fn advance(&self, ch: char, size: f32) -> f32 {
        self.metrics(ch, size).advance_width
    }

    fn line_metrics(&self, size: f32) -> LineMetrics {
        match self.horizontal_line_metrics(size) {
            Some(lm) => LineMetrics {
                ascent: lm.ascent,
                descent: lm.descent,
                line_height: lm.new_line_size,
            },
            None => LineMetrics {
                ascent: size * 0.8,
                descent: -size * 0.2,
                line_height: size,
            },
        }
    }
}

impl<F: FontMetrics + ?Sized> FontMetrics for Box<F> {
    fn advance(&self, ch: char, size: f32) -> f32 {
        (**self).advance(ch, size)
    }

    fn line_metrics(&self, size: f32) -> LineMetrics {
        (**self).line_metrics(size)
    }
}

/// Monospaced metrics: every character advances by the same amount.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedAdvance {
    pub advance: f32,
    pub ascent: f32,
    pub descent: f32,
    pub line_height: f32,
}

impl FixedAdvance {
    /// `advance` pixels per character at any size.
    pub fn new(advance: f32) -> Self {
        FixedAdvance { advance, ascent: 10.0, descent: -3.0, line_height: 15.0 }
    }
}

impl FontMetrics for FixedAdvance {
    fn advance(&self, _ch: char, _size: f32) -> f32 {
        self.advance
    }

    fn line_metrics(&self, _size: f32) -> LineMetrics {
        LineMetrics { ascent: self.ascent, descent: self.descent, line_height: self.line_height }
    }
}
