//! `tiny_skia` implementation of [`Canvas`].
//!
//! Paths are converted verb by verb (arcs become cubics), gradients map to
//! `tiny_skia` shaders, and box gradients are baked into a small pattern
//! pixmap covering the path bounds. Text is rasterized glyph by glyph with
//! `fontdue` and blended straight into the pixel buffer.

use log::trace;
use tiny_skia::{
    FillRule as SkiaFillRule, FilterQuality, GradientStop, LinearGradient, Mask, Paint as SkiaPaint, Path,
    PathBuilder, Pattern, Pixmap, Shader, SpreadMode, Stroke, Transform,
};

use crate::canvas::{BoxGradient, Canvas, FillRule, ImageId, Paint, TextRun};
use crate::color::Color;
use crate::geometry::{Point, Rect};
use crate::path::{PathVerb, VectorPath};

pub struct PixmapCanvas {
    pixmap: Pixmap,
    /// Effective clip of every pushed level, innermost last.
    clips: Vec<Option<Rect>>,
    clip_mask: Option<Mask>,
    images: Vec<Pixmap>,
    font: Option<fontdue::Font>,
}

impl PixmapCanvas {
    /// Transparent canvas; `None` for a zero-sized pixmap.
    pub fn new(width: u32, height: u32) -> Option<Self> {
        Pixmap::new(width, height).map(Self::from_pixmap)
    }

    pub fn from_pixmap(pixmap: Pixmap) -> Self {
        PixmapCanvas { pixmap, clips: Vec::new(), clip_mask: None, images: Vec::new(), font: None }
    }

    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    pub fn pixmap(&self) -> &Pixmap {
        &self.pixmap
    }

    pub fn into_pixmap(self) -> Pixmap {
        self.pixmap
    }

    pub fn clear(&mut self, color: Color) {
        self.pixmap.fill(color.to_tiny_skia());
    }

    /// Font used to rasterize text runs.
    pub fn set_font(&mut self, font: fontdue::Font) {
        self.font = Some(font);
    }

    pub fn register_image(&mut self, image: Pixmap) -> ImageId {
        self.images.push(image);
        ImageId(self.images.len() - 1)
    }

    /// Premultiplied RGBA at `(x, y)`, transparent when out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        self.pixmap
            .pixel(x, y)
            .map_or([0; 4], |p| [p.red(), p.green(), p.blue(), p.alpha()])
    }

    /// Straight-alpha RGBA bytes, row major.
    pub fn to_rgba8(&self) -> Vec<u8> {
        self.pixmap
            .pixels()
            .iter()
            .flat_map(|p| {
                let c = p.demultiply();
                [c.red(), c.green(), c.blue(), c.alpha()]
            })
            .collect()
    }

    /// Premultiplied `0xAARRGGBB` words, row major.
    pub fn to_argb(&self) -> Vec<u32> {
        self.pixmap
            .data()
            .chunks_exact(4)
            .map(|c| (c[3] as u32) << 24 | (c[0] as u32) << 16 | (c[1] as u32) << 8 | c[2] as u32)
            .collect()
    }

    fn current_clip(&self) -> Option<Rect> {
        self.clips.last().copied().flatten()
    }

    fn rebuild_clip_mask(&mut self) {
        self.clip_mask = match self.clips.last() {
            None => None,
            Some(clip) => {
                let mut mask = Mask::new(self.pixmap.width(), self.pixmap.height());
                if let (Some(mask), Some(rect)) = (mask.as_mut(), clip) {
                    if let Some(r) = tiny_skia::Rect::from_xywh(rect.x, rect.y, rect.w, rect.h) {
                        mask.fill_path(&PathBuilder::from_rect(r), SkiaFillRule::Winding, true, Transform::identity());
                    }
                }
                mask
            }
        };
    }

    /// Fill or stroke `path` with `paint`. Box gradients are baked into a
    /// pattern covering the visible part of the painted bounds.
    fn paint_path(&mut self, path: &Path, paint: &Paint, op: PathOp) {
        let grow = match op {
            PathOp::Fill(_) => 0.0,
            PathOp::Stroke(ref stroke) => stroke.width,
        };
        let b = path.bounds();
        let Some(bounds) = tiny_skia::Rect::from_ltrb(
            (b.left() - grow).max(0.0),
            (b.top() - grow).max(0.0),
            (b.right() + grow).min(self.pixmap.width() as f32),
            (b.bottom() + grow).min(self.pixmap.height() as f32),
        ) else {
            return;
        };
        let layer;
        let shader = match *paint {
            Paint::Solid(c) => Shader::SolidColor(c.to_tiny_skia()),
            Paint::Linear { start, end, from, to } => {
                let stops = vec![GradientStop::new(0.0, from.to_tiny_skia()), GradientStop::new(1.0, to.to_tiny_skia())];
                let gradient = LinearGradient::new(
                    tiny_skia::Point::from_xy(start.x, start.y),
                    tiny_skia::Point::from_xy(end.x, end.y),
                    stops,
                    SpreadMode::Pad,
                    Transform::identity(),
                );
                match gradient {
                    Some(shader) => shader,
                    None => return,
                }
            }
            Paint::Box(g) => {
                let (x0, y0) = (bounds.left().floor(), bounds.top().floor());
                layer = match bake_box_gradient(&g, bounds) {
                    Some(layer) => layer,
                    None => return,
                };
                Pattern::new(layer.as_ref(), SpreadMode::Pad, FilterQuality::Nearest, 1.0, Transform::from_translate(x0, y0))
            }
        };
        let skia_paint = SkiaPaint { shader, anti_alias: true, ..SkiaPaint::default() };
        let mask = self.clip_mask.as_ref();
        match op {
            PathOp::Fill(rule) => self.pixmap.fill_path(path, &skia_paint, rule, Transform::identity(), mask),
            PathOp::Stroke(stroke) => self.pixmap.stroke_path(path, &skia_paint, &stroke, Transform::identity(), mask),
        }
    }

    fn blend(&mut self, x: i32, y: i32, coverage: u8, color: [u8; 4]) {
        let (w, h) = (self.pixmap.width() as i32, self.pixmap.height() as i32);
        if x < 0 || y < 0 || x >= w || y >= h || coverage == 0 {
            return;
        }
        if let Some(clip) = self.current_clip() {
            let (fx, fy) = (x as f32 + 0.5, y as f32 + 0.5);
            if !clip.contains(Point::new(fx, fy)) {
                return;
            }
        } else if self.clips.last().is_some() {
            return;
        }
        let alpha = (coverage as u32 * color[3] as u32) / 255;
        let inv = 255 - alpha;
        let idx = ((y * w + x) * 4) as usize;
        let data = self.pixmap.data_mut();
        data[idx] = ((color[0] as u32 * alpha + data[idx] as u32 * inv) / 255) as u8;
        data[idx + 1] = ((color[1] as u32 * alpha + data[idx + 1] as u32 * inv) / 255) as u8;
        data[idx + 2] = ((color[2] as u32 * alpha + data[idx + 2] as u32 * inv) / 255) as u8;
        data[idx + 3] = (alpha + data[idx + 3] as u32 * inv / 255).min(255) as u8;
    }
}

enum PathOp {
    Fill(SkiaFillRule),
    Stroke(Stroke),
}

/// Pattern pixmap holding `g` sampled at pixel centers over `bounds`.
fn bake_box_gradient(g: &BoxGradient, bounds: tiny_skia::Rect) -> Option<Pixmap> {
    let x0 = bounds.left().floor();
    let y0 = bounds.top().floor();
    let w = (bounds.right().ceil() - x0).max(1.0) as u32;
    let h = (bounds.bottom().ceil() - y0).max(1.0) as u32;
    let mut layer = Pixmap::new(w, h)?;
    let pixels = layer.pixels_mut();
    for row in 0..h {
        for col in 0..w {
            let p = Point::new(x0 + col as f32 + 0.5, y0 + row as f32 + 0.5);
            let [r, gr, b, a] = g.color_at(p).to_rgba8();
            let c = tiny_skia::ColorU8::from_rgba(r, gr, b, a).premultiply();
            pixels[(row * w + col) as usize] = c;
        }
    }
    Some(layer)
}

/// Convert a [`VectorPath`] to a `tiny_skia` path. Arcs become cubic
/// segments of at most a quarter turn.
pub fn to_skia_path(path: &VectorPath) -> Option<Path> {
    let mut pb = PathBuilder::new();
    let mut has_point = false;
    for verb in path.verbs() {
        match *verb {
            PathVerb::MoveTo(p) => {
                pb.move_to(p.x, p.y);
                has_point = true;
            }
            PathVerb::LineTo(p) => {
                if has_point {
                    pb.line_to(p.x, p.y);
                } else {
                    pb.move_to(p.x, p.y);
                    has_point = true;
                }
            }
            PathVerb::CubicTo { c1, c2, to } => {
                if !has_point {
                    pb.move_to(c1.x, c1.y);
                    has_point = true;
                }
                pb.cubic_to(c1.x, c1.y, c2.x, c2.y, to.x, to.y);
            }
            PathVerb::Arc { center, radius, start, end } => {
                let sx = center.x + radius * start.cos();
                let sy = center.y + radius * start.sin();
                if has_point {
                    pb.line_to(sx, sy);
                } else {
                    pb.move_to(sx, sy);
                    has_point = true;
                }
                append_arc(&mut pb, center, radius, start, end);
            }
            PathVerb::Close => {
                pb.close();
                has_point = false;
            }
        }
    }
    pb.finish()
}

fn append_arc(pb: &mut PathBuilder, center: Point, radius: f32, start: f32, end: f32) {
    let sweep = end - start;
    let segments = (sweep.abs() / std::f32::consts::FRAC_PI_2).ceil().max(1.0) as usize;
    let step = sweep / segments as f32;
    let k = 4.0 / 3.0 * (step / 4.0).tan();
    let mut a0 = start;
    for _ in 0..segments {
        let a1 = a0 + step;
        let (s0, c0) = a0.sin_cos();
        let (s1, c1) = a1.sin_cos();
        pb.cubic_to(
            center.x + radius * (c0 - k * s0),
            center.y + radius * (s0 + k * c0),
            center.x + radius * (c1 + k * s1),
            center.y + radius * (s1 - k * c1),
            center.x + radius * c1,
            center.y + radius * s1,
        );
        a0 = a1;
    }
}

impl Canvas for PixmapCanvas {
    fn fill_path(&mut self, path: &VectorPath, paint: &Paint, rule: FillRule) {
        let Some(p) = to_skia_path(path) else { return };
        let rule = match rule {
            FillRule::NonZero => SkiaFillRule::Winding,
            FillRule::EvenOdd => SkiaFillRule::EvenOdd,
        };
        self.paint_path(&p, paint, PathOp::Fill(rule));
    }

    fn stroke_path(&mut self, path: &VectorPath, paint: &Paint, width: f32) {
        let Some(p) = to_skia_path(path) else { return };
        let stroke = Stroke { width, ..Stroke::default() };
        self.paint_path(&p, paint, PathOp::Stroke(stroke));
    }

    fn draw_image(&mut self, image: ImageId, src: Rect, dst: Rect) {
        let Some(pixmap) = self.images.get(image.0) else {
            trace!("unknown image {image:?}, skipping blit");
            return;
        };
        if src.w <= 0.0 || src.h <= 0.0 {
            return;
        }
        let Some(rect) = tiny_skia::Rect::from_xywh(dst.x, dst.y, dst.w, dst.h) else { return };
        let sx = dst.w / src.w;
        let sy = dst.h / src.h;
        let quality = if sx == 1.0 && sy == 1.0 { FilterQuality::Nearest } else { FilterQuality::Bilinear };
        let shader = Pattern::new(
            pixmap.as_ref(),
            SpreadMode::Pad,
            quality,
            1.0,
            Transform::from_row(sx, 0.0, 0.0, sy, dst.x - src.x * sx, dst.y - src.y * sy),
        );
        let paint = SkiaPaint { shader, anti_alias: false, ..SkiaPaint::default() };
        self.pixmap.fill_rect(rect, &paint, Transform::identity(), self.clip_mask.as_ref());
    }

    fn fill_text(&mut self, run: &TextRun) {
        let Some(font) = self.font.take() else {
            trace!("no font set on canvas, skipping text {:?}", run.text);
            return;
        };
        let color = run.color.to_rgba8();
        if color[3] != 0 {
            let blur = run.blur.max(0.0).ceil() as usize;
            let mut cursor_x = run.origin.x;
            for ch in run.text.chars() {
                let (metrics, bitmap) = font.rasterize(ch, run.size);
                let (bitmap, width, height, pad) = if blur > 0 {
                    let (b, w, h) = box_blur(&bitmap, metrics.width, metrics.height, blur);
                    (b, w, h, blur as i32)
                } else {
                    (bitmap, metrics.width, metrics.height, 0)
                };
                let gx = cursor_x as i32 + metrics.xmin - pad;
                let gy = run.origin.y as i32 - metrics.ymin - metrics.height as i32 - pad;
                for row in 0..height {
                    for col in 0..width {
                        self.blend(gx + col as i32, gy + row as i32, bitmap[row * width + col], color);
                    }
                }
                cursor_x += metrics.advance_width;
            }
        }
        self.font = Some(font);
    }

    fn push_clip(&mut self, rect: Rect) {
        let clip = match self.clips.last() {
            None => Some(rect),
            Some(outer) => outer.and_then(|o| o.intersect(&rect)),
        };
        self.clips.push(clip);
        self.rebuild_clip_mask();
    }

    fn pop_clip(&mut self) {
        self.clips.pop();
        self.rebuild_clip_mask();
    }
}

/// Separable box blur of a coverage bitmap, padded by `radius` on each side.
fn box_blur(src: &[u8], w: usize, h: usize, radius: usize) -> (Vec<u8>, usize, usize) {
    let (pw, ph) = (w + radius * 2, h + radius * 2);
    let mut padded = vec![0u32; pw * ph];
    for row in 0..h {
        for col in 0..w {
            padded[(row + radius) * pw + col + radius] = src[row * w + col] as u32;
        }
    }
    let taps = (radius * 2 + 1) as u32;
    let mut horiz = vec![0u32; pw * ph];
    for row in 0..ph {
        for col in 0..pw {
            let lo = col.saturating_sub(radius);
            let hi = (col + radius).min(pw - 1);
            horiz[row * pw + col] = (lo..=hi).map(|c| padded[row * pw + c]).sum::<u32>() / taps;
        }
    }
    let mut out = vec![0u8; pw * ph];
    for row in 0..ph {
        for col in 0..pw {
            let lo = row.saturating_sub(radius);
            let hi = (row + radius).min(ph - 1);
            out[row * pw + col] = ((lo..=hi).map(|r| horiz[r * pw + col]).sum::<u32>() / taps) as u8;
        }
    }
    (out, pw, ph)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::rounded_box;

    #[test]
    fn solid_fill_covers_interior_only() {
        let mut canvas = PixmapCanvas::new(40, 40).unwrap();
        let path = rounded_box(10.0, 10.0, 20.0, 20.0, [4.0; 4]);
        canvas.fill_path(&path, &Paint::Solid(Color::rgb(1.0, 0.0, 0.0)), FillRule::NonZero);
        assert_eq!(canvas.pixel(20, 20), [255, 0, 0, 255]);
        assert_eq!(canvas.pixel(5, 5), [0, 0, 0, 0]);
        // corner rounded away
        assert_eq!(canvas.pixel(10, 10)[3], 0);
    }

    #[test]
    fn even_odd_cuts_a_hole() {
        let mut canvas = PixmapCanvas::new(40, 40).unwrap();
        let mut path = VectorPath::rect(Rect::new(0.0, 0.0, 40.0, 40.0));
        path.extend(&VectorPath::rect(Rect::new(10.0, 10.0, 20.0, 20.0)));
        canvas.fill_path(&path, &Paint::Solid(Color::WHITE), FillRule::EvenOdd);
        assert_eq!(canvas.pixel(2, 2)[3], 255);
        assert_eq!(canvas.pixel(20, 20)[3], 0);
    }

    #[test]
    fn linear_gradient_runs_from_start_to_end() {
        let mut canvas = PixmapCanvas::new(10, 40).unwrap();
        let paint = Paint::linear(0.0, 0.0, 0.0, 40.0, Color::WHITE, Color::BLACK);
        canvas.fill_path(&VectorPath::rect(Rect::new(0.0, 0.0, 10.0, 40.0)), &paint, FillRule::NonZero);
        assert!(canvas.pixel(5, 2)[0] > canvas.pixel(5, 38)[0]);
    }

    #[test]
    fn clip_limits_drawing_and_pops() {
        let mut canvas = PixmapCanvas::new(20, 20).unwrap();
        let full = VectorPath::rect(Rect::new(0.0, 0.0, 20.0, 20.0));
        canvas.push_clip(Rect::new(0.0, 0.0, 10.0, 20.0));
        canvas.push_clip(Rect::new(5.0, 0.0, 15.0, 20.0));
        canvas.fill_path(&full, &Paint::Solid(Color::WHITE), FillRule::NonZero);
        assert_eq!(canvas.pixel(2, 5)[3], 0);
        assert_eq!(canvas.pixel(7, 5)[3], 255);
        assert_eq!(canvas.pixel(15, 5)[3], 0);
        canvas.pop_clip();
        canvas.pop_clip();
        canvas.fill_path(&full, &Paint::Solid(Color::BLACK), FillRule::NonZero);
        assert_eq!(canvas.pixel(15, 5), [0, 0, 0, 255]);
    }

    #[test]
    fn image_blit_copies_source_tile() {
        let mut canvas = PixmapCanvas::new(16, 16).unwrap();
        let mut sheet = Pixmap::new(8, 8).unwrap();
        sheet.fill_rect(
            tiny_skia::Rect::from_xywh(4.0, 4.0, 4.0, 4.0).unwrap(),
            &SkiaPaint { shader: Shader::SolidColor(tiny_skia::Color::from_rgba8(0, 255, 0, 255)), ..SkiaPaint::default() },
            Transform::identity(),
            None,
        );
        let id = canvas.register_image(sheet);
        canvas.draw_image(id, Rect::new(4.0, 4.0, 4.0, 4.0), Rect::new(2.0, 2.0, 4.0, 4.0));
        assert_eq!(canvas.pixel(3, 3), [0, 255, 0, 255]);
        assert_eq!(canvas.pixel(8, 8)[3], 0);
        canvas.draw_image(ImageId(9), Rect::new(0.0, 0.0, 1.0, 1.0), Rect::new(10.0, 10.0, 1.0, 1.0));
        assert_eq!(canvas.pixel(10, 10)[3], 0);
    }

    #[test]
    fn text_without_font_is_skipped() {
        let mut canvas = PixmapCanvas::new(20, 20).unwrap();
        canvas.fill_text(&TextRun {
            origin: Point::new(2.0, 15.0),
            text: "hi".into(),
            size: 13.0,
            color: Color::BLACK,
            blur: 0.0,
        });
        assert!(canvas.to_argb().iter().all(|&p| p == 0));
    }

    #[test]
    fn argb_packs_premultiplied_channels() {
        let mut canvas = PixmapCanvas::new(1, 1).unwrap();
        canvas.clear(Color::rgb(1.0, 0.0, 0.0));
        assert_eq!(canvas.to_argb(), vec![0xffff0000]);
        assert_eq!(canvas.to_rgba8(), vec![255, 0, 0, 255]);
    }

    #[test]
    fn blur_spreads_coverage() {
        let (out, w, h) = box_blur(&[255], 1, 1, 1);
        assert_eq!((w, h), (3, 3));
        // a lone pixel spreads evenly over the 3x3 window
        assert!(out.iter().all(|&c| c == 28));
        let total: u32 = out.iter().map(|&c| c as u32).sum();
        assert!((252..=255).contains(&total));

        let (out, w, h) = box_blur(&[255; 9], 3, 3, 1);
        assert_eq!((w, h), (5, 5));
        assert_eq!(out[2 * w + 2], 255);
        assert_eq!(out[0], 28);
    }

    #[test]
    fn arcs_become_quarter_cubics() {
        let path = rounded_box(0.0, 0.0, 20.0, 20.0, [5.0; 4]);
        let skia = to_skia_path(&path).unwrap();
        let b = skia.bounds();
        assert!((b.left() - 0.0).abs() < 1e-3 && (b.right() - 20.0).abs() < 1e-3);
        assert!((b.top() - 0.0).abs() < 1e-3 && (b.bottom() - 20.0).abs() < 1e-3);
    }
}
