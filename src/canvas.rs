//! The drawing surface widgets render into.
//!
//! [`Canvas`] is the whole rasterizer capability the widget code needs:
//! fill and stroke vector paths, blit image rectangles, draw glyph runs and
//! clip to rectangles. [`DisplayList`] records the calls instead of painting
//! them, which is what the tests assert against; [`PixmapCanvas`] paints into
//! a `tiny_skia` pixmap.
//!
//! [`PixmapCanvas`]: crate::raster::PixmapCanvas

use crate::color::Color;
use crate::geometry::{Point, Rect};
use crate::path::VectorPath;

/// Handle of an image registered with a canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ImageId(pub usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FillRule {
    #[default]
    NonZero,
    EvenOdd,
}

/// Rounded-rectangle gradient: `inner` inside the shape, fading to `outer`
/// across a band `feather` wide centered on the outline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxGradient {
    pub rect: Rect,
    pub radius: f32,
    pub feather: f32,
    pub inner: Color,
    pub outer: Color,
}

impl BoxGradient {
    /// Interpolation factor at `p`: 0 well inside, 1 well outside.
    pub fn factor_at(&self, p: Point) -> f32 {
        let hw = self.rect.w * 0.5;
        let hh = self.rect.h * 0.5;
        let r = self.radius.min(hw).min(hh).max(0.0);
        let cx = self.rect.x + hw;
        let cy = self.rect.y + hh;
        let dx = (p.x - cx).abs() - (hw - r);
        let dy = (p.y - cy).abs() - (hh - r);
        let outside = (dx.max(0.0).powi(2) + dy.max(0.0).powi(2)).sqrt();
        let dist = dx.max(dy).min(0.0) + outside - r;
        let feather = self.feather.max(1.0);
        ((dist + feather * 0.5) / feather).clamp(0.0, 1.0)
    }

    pub fn color_at(&self, p: Point) -> Color {
        let t = self.factor_at(p);
        let mix = |a: f32, b: f32| a + (b - a) * t;
        Color {
            r: mix(self.inner.r, self.outer.r),
            g: mix(self.inner.g, self.outer.g),
            b: mix(self.inner.b, self.outer.b),
            a: mix(self.inner.a, self.outer.a),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Paint {
    Solid(Color),
    /// Linear gradient from `from` at `start` to `to` at `end`, padded beyond.
    Linear { start: Point, end: Point, from: Color, to: Color },
    Box(BoxGradient),
}

impl Paint {
    pub fn linear(sx: f32, sy: f32, ex: f32, ey: f32, from: Color, to: Color) -> Self {
        Paint::Linear { start: Point::new(sx, sy), end: Point::new(ex, ey), from, to }
    }
}

/// A single line of glyphs. `origin` is the left end of the baseline.
#[derive(Debug, Clone, PartialEq)]
pub struct TextRun {
    pub origin: Point,
    pub text: String,
    pub size: f32,
    pub color: Color,
    /// Blur radius in pixels, 0 for crisp text.
    pub blur: f32,
}

pub trait Canvas {
    fn fill_path(&mut self, path: &VectorPath, paint: &Paint, rule: FillRule);

    fn stroke_path(&mut self, path: &VectorPath, paint: &Paint, width: f32);

    /// Copy `src` (image pixels) of a registered image into `dst`.
    fn draw_image(&mut self, image: ImageId, src: Rect, dst: Rect);

    fn fill_text(&mut self, run: &TextRun);

    /// Intersect the clip with `rect` until the matching [`Canvas::pop_clip`].
    fn push_clip(&mut self, rect: Rect);

    fn pop_clip(&mut self);
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    FillPath { path: VectorPath, paint: Paint, rule: FillRule },
    StrokePath { path: VectorPath, paint: Paint, width: f32 },
    Image { image: ImageId, src: Rect, dst: Rect },
    Text(TextRun),
    PushClip(Rect),
    PopClip,
}

/// Canvas that records every call.
#[derive(Debug, Clone, Default)]
pub struct DisplayList {
    commands: Vec<DrawCommand>,
}

impl DisplayList {
    pub fn new() -> Self {
        DisplayList::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn texts(&self) -> impl Iterator<Item = &TextRun> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text(run) => Some(run),
            _ => None,
        })
    }

    pub fn fills(&self) -> impl Iterator<Item = (&VectorPath, &Paint, FillRule)> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::FillPath { path, paint, rule } => Some((path, paint, *rule)),
            _ => None,
        })
    }

    pub fn strokes(&self) -> impl Iterator<Item = (&VectorPath, &Paint, f32)> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::StrokePath { path, paint, width } => Some((path, paint, *width)),
            _ => None,
        })
    }

    /// Replay the recording onto another canvas.
    pub fn replay(&self, target: &mut dyn Canvas) {
        for command in &self.commands {
            match command {
                DrawCommand::FillPath { path, paint, rule } => target.fill_path(path, paint, *rule),
                DrawCommand::StrokePath { path, paint, width } => target.stroke_path(path, paint, *width),
                DrawCommand::Image { image, src, dst } => target.draw_image(*image, *src, *dst),
                DrawCommand::Text(run) => target.fill_text(run),
                DrawCommand::PushClip(rect) => target.push_clip(*rect),
                DrawCommand::PopClip => target.pop_clip(),
            }
        }
    }
}

impl Canvas for DisplayList {
    fn fill_path(&mut self, path: &VectorPath, paint: &Paint, rule: FillRule) {
        self.commands.push(DrawCommand::FillPath { path: path.clone(), paint: *paint, rule });
    }

    fn stroke_path(&mut self, path: &VectorPath, paint: &Paint, width: f32) {
        self.commands.push(DrawCommand::StrokePath { path: path.clone(), paint: *paint, width });
    }

    fn draw_image(&mut self, image: ImageId, src: Rect, dst: Rect) {
        self.commands.push(DrawCommand::Image { image, src, dst });
    }

    fn fill_text(&mut self, run: &TextRun) {
        self.commands.push(DrawCommand::Text(run.clone()));
    }

    fn push_clip(&mut self, rect: Rect) {
        self.commands.push(DrawCommand::PushClip(rect));
    }

    fn pop_clip(&mut self) {
        self.commands.push(DrawCommand::PopClip);
    }
}
