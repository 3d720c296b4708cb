//! Widget box primitives: fills, outlines, bevels, shadows and icons.

use log::trace;

use crate::canvas::{BoxGradient, Canvas, FillRule, Paint};
use crate::color::Color;
use crate::geometry::Rect;
use crate::icons::{icon_source_rect, IconId, ICON_SHEET_RES};
use crate::path::{bottom_arcs, rounded_box, VectorPath};
use crate::shading::{offset_color, transparent, BEVEL_SHADE, INSET_BEVEL_SHADE};
use crate::skin::Skin;

impl Skin {
    /// Fill `rect` with the theme background.
    pub fn background(&self, canvas: &mut dyn Canvas, rect: Rect) {
        let paint = Paint::Solid(self.theme().background_color);
        canvas.fill_path(&VectorPath::rect(rect), &paint, FillRule::NonZero);
    }

    /// Raised edge: light along the top and left, dark along the bottom and right.
    pub fn bevel(&self, canvas: &mut dyn Canvas, rect: Rect) {
        let bg = self.theme().background_color;
        let (x, y, w, h) = (rect.x + 0.5, rect.y + 0.5, rect.w - 1.0, rect.h - 1.0);

        let dark = VectorPath::polyline(&[(x, y + h), (x + w, y + h), (x + w, y)]);
        canvas.stroke_path(&dark, &Paint::Solid(transparent(offset_color(bg, -BEVEL_SHADE))), 1.0);

        let light = VectorPath::polyline(&[(x, y + h), (x, y), (x + w, y)]);
        canvas.stroke_path(&light, &Paint::Solid(transparent(offset_color(bg, BEVEL_SHADE))), 1.0);
    }

    /// Pressed-in highlight under the bottom edge of a box whose lower
    /// corners have radii `r2` (right) and `r3` (left).
    pub fn bevel_inset(&self, canvas: &mut dyn Canvas, rect: Rect, r2: f32, r3: f32) {
        let (x, y, w, h) = (rect.x, rect.y - 0.5, rect.w, rect.h);
        let d = w.min(h) * 0.5;
        let (r2, r3) = (r2.min(d), r3.min(d));
        let path = bottom_arcs(x, y, w, h, r2, r3);

        let bevel = offset_color(self.theme().background_color, INSET_BEVEL_SHADE);
        let paint = Paint::linear(x, y + h - r2.max(r3) - 1.0, x, y + h - 1.0, bevel.with_alpha(0.0), bevel);
        canvas.stroke_path(&path, &paint, 1.0);
    }

    /// Gradient fill of a widget body, inset 1px from its outline.
    ///
    /// The gradient runs top to bottom unless the box is taller than wide.
    pub fn inner_box(&self, canvas: &mut dyn Canvas, rect: Rect, radii: [f32; 4], top: Color, down: Color) {
        let (x, y, w, h) = (rect.x, rect.y, rect.w, rect.h);
        let path = rounded_box(x + 1.0, y + 1.0, w - 2.0, h - 3.0, radii.map(|r| (r - 1.0).max(0.0)));
        let paint = if h > w {
            Paint::linear(x, y, x + w, y, top, down)
        } else {
            Paint::linear(x, y, x, y + h, top, down)
        };
        canvas.fill_path(&path, &paint, FillRule::NonZero);
    }

    /// 1px outline of a widget body.
    pub fn outline_box(&self, canvas: &mut dyn Canvas, rect: Rect, radii: [f32; 4], color: Color) {
        let path = rounded_box(rect.x + 0.5, rect.y + 0.5, rect.w - 1.0, rect.h - 2.0, radii);
        canvas.stroke_path(&path, &Paint::Solid(color), 1.0);
    }

    /// Soft shadow around a rounded box, `feather` pixels wide.
    ///
    /// The box interior is cut out of the fill, so the shadow never darkens
    /// what is drawn on top of it.
    pub fn drop_shadow(&self, canvas: &mut dyn Canvas, rect: Rect, radius: f32, feather: f32, alpha: f32) {
        let mut path = VectorPath::rect(rect.inflate(feather));
        path.extend(&rounded_box(rect.x, rect.y, rect.w, rect.h, [radius; 4]));
        let paint = Paint::Box(BoxGradient {
            rect: rect.inflate(feather * 0.5),
            radius: radius + feather * 0.5,
            feather,
            inner: Color::gray_alpha(0.0, alpha * alpha),
            outer: Color::TRANSPARENT,
        });
        canvas.fill_path(&path, &paint, FillRule::EvenOdd);
    }

    /// Blit one icon tile with its top-left corner at `(x, y)`.
    pub fn icon(&self, canvas: &mut dyn Canvas, x: f32, y: f32, icon: IconId) {
        let Some(sheet) = self.icon_image() else {
            trace!("no icon sheet registered, skipping icon {:?}", icon.unpack());
            return;
        };
        let dst = Rect::new(x, y, ICON_SHEET_RES, ICON_SHEET_RES);
        canvas.draw_image(sheet, icon_source_rect(icon), dst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::{DisplayList, DrawCommand, ImageId};
    use crate::geometry::Point;
    use crate::icon_ids;
    use crate::path::PathVerb;
    use crate::raster::PixmapCanvas;
    use crate::theme::Theme;

    fn skin() -> Skin {
        Skin::new(Theme::default())
    }

    #[test]
    fn background_fills_rect_with_theme_color() {
        let skin = skin();
        let mut list = DisplayList::new();
        skin.background(&mut list, Rect::new(0.0, 0.0, 10.0, 10.0));
        let (_, paint, _) = list.fills().next().unwrap();
        assert_eq!(*paint, Paint::Solid(skin.theme().background_color));
    }

    #[test]
    fn bevel_strokes_dark_then_light() {
        let skin = skin();
        let mut list = DisplayList::new();
        skin.bevel(&mut list, Rect::new(0.0, 0.0, 20.0, 10.0));
        let strokes: Vec<_> = list.strokes().collect();
        assert_eq!(strokes.len(), 2);
        let color = |p: &Paint| match p {
            Paint::Solid(c) => *c,
            _ => panic!("expected solid paint"),
        };
        let dark = color(strokes[0].1);
        let light = color(strokes[1].1);
        assert!(dark.r < light.r);
        assert!(dark.a < 1.0);
        assert_eq!(strokes[0].0.verbs()[0], PathVerb::MoveTo(Point::new(0.5, 9.5)));
    }

    #[test]
    fn inset_bevel_follows_box_bottom_arcs() {
        let skin = skin();
        let mut list = DisplayList::new();
        let rect = Rect::new(0.0, 0.0, 40.0, 21.0);
        skin.bevel_inset(&mut list, rect, 4.0, 4.0);
        let (path, paint, width) = list.strokes().next().unwrap();
        assert_eq!(width, 1.0);
        let expected = bottom_arcs(0.0, -0.5, 40.0, 21.0, 4.0, 4.0);
        assert_eq!(path, &expected);
        match paint {
            Paint::Linear { from, to, .. } => {
                assert_eq!(from.a, 0.0);
                assert_eq!(to.a, 1.0);
            }
            other => panic!("unexpected paint {other:?}"),
        }
    }

    #[test]
    fn inner_box_gradient_orientation() {
        let skin = skin();
        let mut list = DisplayList::new();
        skin.inner_box(&mut list, Rect::new(0.0, 0.0, 100.0, 21.0), [4.0; 4], Color::WHITE, Color::BLACK);
        skin.inner_box(&mut list, Rect::new(0.0, 0.0, 14.0, 80.0), [4.0; 4], Color::WHITE, Color::BLACK);
        let paints: Vec<_> = list.fills().map(|(_, p, _)| *p).collect();
        match paints[0] {
            Paint::Linear { start, end, .. } => assert!(start.x == end.x && end.y > start.y),
            ref other => panic!("unexpected paint {other:?}"),
        }
        match paints[1] {
            Paint::Linear { start, end, .. } => assert!(start.y == end.y && end.x > start.x),
            ref other => panic!("unexpected paint {other:?}"),
        }
    }

    #[test]
    fn inner_box_insets_and_shrinks_radii() {
        let skin = skin();
        let mut list = DisplayList::new();
        skin.inner_box(&mut list, Rect::new(10.0, 10.0, 50.0, 21.0), [4.0, 0.0, 4.0, 0.5], Color::WHITE, Color::BLACK);
        let (path, _, _) = list.fills().next().unwrap();
        assert_eq!(path, &rounded_box(11.0, 11.0, 48.0, 18.0, [3.0, 0.0, 3.0, 0.0]));
    }

    #[test]
    fn drop_shadow_is_even_odd_ring() {
        let skin = skin();
        let mut list = DisplayList::new();
        skin.drop_shadow(&mut list, Rect::new(20.0, 20.0, 50.0, 50.0), 8.0, 10.0, 0.5);
        let (path, paint, rule) = list.fills().next().unwrap();
        assert_eq!(rule, FillRule::EvenOdd);
        let subpaths = path.verbs().iter().filter(|v| matches!(v, PathVerb::MoveTo(_))).count();
        assert_eq!(subpaths, 2);
        match paint {
            Paint::Box(g) => {
                assert_eq!(g.inner.a, 0.25);
                assert_eq!(g.rect, Rect::new(15.0, 15.0, 60.0, 60.0));
            }
            other => panic!("unexpected paint {other:?}"),
        }
    }

    #[test]
    fn drop_shadow_never_paints_inside_and_fades_outward() {
        let skin = skin();
        let mut canvas = PixmapCanvas::new(90, 90).unwrap();
        let rect = Rect::new(20.0, 20.0, 50.0, 50.0);
        skin.drop_shadow(&mut canvas, rect, 8.0, 10.0, 1.0);

        for y in 22..68 {
            for x in 22..68 {
                let inside_corner_cut = {
                    let cx = (x as f32 + 0.5).clamp(28.0, 62.0);
                    let cy = (y as f32 + 0.5).clamp(28.0, 62.0);
                    let dx = x as f32 + 0.5 - cx;
                    let dy = y as f32 + 0.5 - cy;
                    dx * dx + dy * dy <= 36.0
                };
                if inside_corner_cut {
                    assert_eq!(canvas.pixel(x, y)[3], 0, "pixel {x},{y} inside the box");
                }
            }
        }

        let mut prev = u8::MAX;
        for x in 71..80 {
            let a = canvas.pixel(x, 45)[3];
            assert!(a <= prev, "alpha rose at x={x}");
            prev = a;
        }
        assert!(canvas.pixel(71, 45)[3] > 0);
        assert_eq!(canvas.pixel(85, 45)[3], 0);
    }

    #[test]
    fn icons_need_a_registered_sheet() {
        let mut skin = skin();
        let mut list = DisplayList::new();
        skin.icon(&mut list, 0.0, 0.0, icon_ids::PLUS);
        assert!(list.is_empty());

        skin.set_icon_image(ImageId(3));
        skin.icon(&mut list, 4.0, 2.0, icon_ids::PLUS);
        assert_eq!(
            list.commands(),
            &[DrawCommand::Image {
                image: ImageId(3),
                src: icon_source_rect(icon_ids::PLUS),
                dst: Rect::new(4.0, 2.0, 16.0, 16.0),
            }]
        );
    }
}
