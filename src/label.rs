//! Icon, label and caret layout.
//!
//! [`TextLayout`] places the rows of an editable label inside a widget box.
//! Caret drawing and [`Skin::icon_label_text_position`] both go through it,
//! so a caret drawn at offset `k` hit-tests back to `k`.

use log::trace;

use crate::canvas::{Canvas, FillRule, Paint, TextRun};
use crate::color::Color;
use crate::font::{FontMetrics, LineMetrics};
use crate::geometry::{Point, Rect};
use crate::icons::{IconId, ICON_SHEET_RES};
use crate::path::VectorPath;
use crate::skin::Skin;
use crate::text::{break_lines, text_width, TextRow, MAX_GLYPHS};

pub const WIDGET_HEIGHT: f32 = 21.0;
pub const PAD_LEFT: f32 = 8.0;
pub const PAD_RIGHT: f32 = 8.0;
/// Distance from the bottom of a widget to the text baseline.
pub const TEXT_PAD_DOWN: f32 = 7.0;
/// Left inset of editable text, and its radius in text fields.
pub const TEXT_RADIUS: f32 = 4.0;
pub const LABEL_SEPARATOR: &str = ": ";
pub const LABEL_FONT_SIZE: f32 = 13.0;
pub const NODE_TITLE_FEATHER: f32 = 1.0;
pub const INSERTION_CARET_COLOR: Color = Color::rgb(0.337, 0.502, 0.761);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAlignment {
    #[default]
    Left,
    Center,
}

/// Caret or selection as byte offsets into a label. `end < begin` means
/// nothing is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaretSpan {
    pub begin: usize,
    pub end: usize,
}

impl CaretSpan {
    pub const NONE: CaretSpan = CaretSpan { begin: 1, end: 0 };

    pub const fn caret(at: usize) -> Self {
        CaretSpan { begin: at, end: at }
    }

    pub const fn selection(begin: usize, end: usize) -> Self {
        CaretSpan { begin, end }
    }

    pub fn is_none(&self) -> bool {
        self.end < self.begin
    }
}

/// Where a caret offset lands inside a [`TextLayout`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CaretPosition {
    pub row: usize,
    pub x: f32,
    /// Top of the caret's row.
    pub y: f32,
}

/// Rows of a label placed inside a widget box.
#[derive(Debug, Clone, PartialEq)]
pub struct TextLayout {
    /// Left end of the first row's baseline.
    pub origin: Point,
    /// Wrap width.
    pub width: f32,
    pub size: f32,
    pub metrics: LineMetrics,
    pub rows: Vec<TextRow>,
}

impl TextLayout {
    /// Layout of an editable label in `rect`, after an optional icon.
    pub fn new(font: &dyn FontMetrics, size: f32, rect: Rect, has_icon: bool, text: &str) -> Self {
        let pleft = if has_icon { TEXT_RADIUS + ICON_SHEET_RES } else { TEXT_RADIUS };
        let width = rect.w - (TEXT_RADIUS + pleft);
        TextLayout {
            origin: Point::new(rect.x + pleft, rect.y + WIDGET_HEIGHT - TEXT_PAD_DOWN),
            width,
            size,
            metrics: font.line_metrics(size),
            rows: break_lines(font, size, text, width),
        }
    }

    pub fn baseline(&self, row: usize) -> f32 {
        self.origin.y + row as f32 * self.metrics.line_height
    }

    pub fn row_top(&self, row: usize) -> f32 {
        self.baseline(row) - self.metrics.line_height - self.metrics.descent
    }

    /// Character boundaries of `row` as `(byte, x)`, ending with the
    /// boundary after the row's last drawn character.
    pub fn boundaries(&self, font: &dyn FontMetrics, text: &str, row: usize) -> Vec<(usize, f32)> {
        let Some(r) = self.rows.get(row) else {
            return vec![(0, self.origin.x)];
        };
        let mut pen = self.origin.x;
        let mut out = Vec::with_capacity(r.end - r.start + 1);
        for (i, ch) in text[r.start..r.end].char_indices() {
            out.push((r.start + i, pen));
            pen += font.advance(ch, self.size);
        }
        out.push((r.end, pen));
        out
    }

    pub fn caret_position(&self, font: &dyn FontMetrics, text: &str, offset: usize) -> CaretPosition {
        let c = offset.min(text.len());
        let Some(last) = self.rows.len().checked_sub(1) else {
            return CaretPosition { row: 0, x: self.origin.x, y: self.row_top(0) };
        };
        let row = self
            .rows
            .iter()
            .position(|r| c <= r.end || c < r.next)
            .unwrap_or(last);
        let bounds = self.boundaries(font, text, row);
        let x = bounds
            .iter()
            .rev()
            .find(|(byte, _)| *byte <= c)
            .or(bounds.first())
            .map_or(self.origin.x, |&(_, x)| x);
        CaretPosition { row, x, y: self.row_top(row) }
    }

    /// Offset of the character boundary nearest to `(px, py)`.
    ///
    /// The row is picked from `py`, clamped to the laid-out rows. Within the
    /// row the boundary closest to `px` wins, ties going to the earlier one.
    pub fn hit_test(&self, font: &dyn FontMetrics, text: &str, px: f32, py: f32) -> usize {
        if self.rows.is_empty() {
            return 0;
        }
        let lh = self.metrics.line_height;
        let row = if lh > 0.0 {
            ((py - self.row_top(0)) / lh).floor().clamp(0.0, (self.rows.len() - 1) as f32) as usize
        } else {
            0
        };
        let bounds = self.boundaries(font, text, row);
        let col = bounds.iter().take_while(|(_, x)| *x < px).count();
        if col == 0 {
            return bounds[0].0;
        }
        if col == bounds.len() {
            return bounds[col - 1].0;
        }
        let (next, next_x) = bounds[col];
        let (prev, prev_x) = bounds[col - 1];
        if next_x - px < px - prev_x {
            next
        } else {
            prev
        }
    }
}

impl Skin {
    /// Label in the regular widget text color, left aligned.
    pub fn label(&self, canvas: &mut dyn Canvas, rect: Rect, icon: Option<IconId>, label: Option<&str>) {
        let color = self.theme().regular.text_color;
        self.icon_label_value(canvas, rect, icon, color, TextAlignment::Left, label, None);
    }

    /// Icon followed by `label`, or by `label: value` when a value is given.
    ///
    /// Without a label only the icon is drawn. A label without a value is
    /// wrapped into rows.
    #[allow(clippy::too_many_arguments)]
    pub fn icon_label_value(
        &self,
        canvas: &mut dyn Canvas,
        rect: Rect,
        icon: Option<IconId>,
        color: Color,
        align: TextAlignment,
        label: Option<&str>,
        value: Option<&str>,
    ) {
        let Some(label) = label else {
            if let Some(icon) = icon {
                self.icon(canvas, rect.x + 2.0, rect.y + 2.0, icon);
            }
            return;
        };

        let mut pleft = PAD_LEFT;
        if let Some(icon) = icon {
            self.icon(canvas, rect.x + 4.0, rect.y + 2.0, icon);
            pleft += ICON_SHEET_RES;
        }
        let Some(font) = self.font() else {
            trace!("no font registered, skipping label {label:?}");
            return;
        };
        let size = self.font_size();
        let baseline = rect.y + WIDGET_HEIGHT - TEXT_PAD_DOWN;
        let box_width = rect.w - PAD_RIGHT - pleft;

        if let Some(value) = value {
            let mut text = format!("{label}{LABEL_SEPARATOR}{value}");
            if let Some((cut, _)) = text.char_indices().nth(MAX_GLYPHS) {
                text.truncate(cut);
            }
            let mut x = rect.x + pleft;
            if align == TextAlignment::Center {
                x += (box_width - text_width(font, size, &text)) * 0.5;
            }
            canvas.fill_text(&TextRun { origin: Point::new(x, baseline), text, size, color, blur: 0.0 });
            return;
        }

        let lh = font.line_metrics(size).line_height;
        for (i, row) in break_lines(font, size, label, box_width).iter().enumerate() {
            let mut x = rect.x + pleft;
            if align == TextAlignment::Center {
                x += (box_width - row.width) * 0.5;
            }
            canvas.fill_text(&TextRun {
                origin: Point::new(x, baseline + i as f32 * lh),
                text: label[row.start..row.end].to_string(),
                size,
                color,
                blur: 0.0,
            });
        }
    }

    /// Layout used for editable text in `rect`; `None` without a font.
    pub fn text_layout(&self, rect: Rect, icon: Option<IconId>, label: &str) -> Option<TextLayout> {
        let font = self.font()?;
        Some(TextLayout::new(font, self.font_size(), rect, icon.is_some(), label))
    }

    /// Editable label with a caret or selection underneath.
    ///
    /// Offsets in `span` index `label` and are clamped to its length.
    #[allow(clippy::too_many_arguments)]
    pub fn icon_label_caret(
        &self,
        canvas: &mut dyn Canvas,
        rect: Rect,
        icon: Option<IconId>,
        color: Color,
        label: &str,
        caret_color: Color,
        span: CaretSpan,
    ) {
        if let Some(icon) = icon {
            self.icon(canvas, rect.x + 4.0, rect.y + 2.0, icon);
        }
        let Some(font) = self.font() else {
            trace!("no font registered, skipping editable label");
            return;
        };
        let layout = TextLayout::new(font, self.font_size(), rect, icon.is_some(), label);
        let lh = layout.metrics.line_height;

        if !span.is_none() {
            let c0 = layout.caret_position(font, label, span.begin);
            let c1 = layout.caret_position(font, label, span.end);
            let mut path = VectorPath::new();
            let paint = if span.begin.min(label.len()) == span.end.min(label.len()) {
                path.extend(&VectorPath::rect(Rect::new(c0.x - 0.5, c0.y, 1.0, lh + 1.0)));
                INSERTION_CARET_COLOR
            } else {
                let left = layout.origin.x;
                if c0.row == c1.row {
                    path.extend(&VectorPath::rect(Rect::new(c0.x - 1.0, c0.y, c1.x - c0.x + 1.0, lh + 1.0)));
                } else {
                    let right = left + layout.width;
                    path.extend(&VectorPath::rect(Rect::new(c0.x - 1.0, c0.y, right - c0.x + 1.0, lh + 1.0)));
                    path.extend(&VectorPath::rect(Rect::new(left, c1.y, c1.x - left + 1.0, lh + 1.0)));
                    let between = c1.row - c0.row - 1;
                    if between > 0 {
                        path.extend(&VectorPath::rect(Rect::new(
                            left,
                            c0.y + lh,
                            layout.width,
                            between as f32 * lh + 1.0,
                        )));
                    }
                }
                caret_color
            };
            canvas.fill_path(&path, &Paint::Solid(paint), FillRule::NonZero);
        }

        for (i, row) in layout.rows.iter().enumerate() {
            canvas.fill_text(&TextRun {
                origin: Point::new(layout.origin.x, layout.baseline(i)),
                text: label[row.start..row.end].to_string(),
                size: layout.size,
                color,
                blur: 0.0,
            });
        }
    }

    /// Byte offset in `label` nearest to the point `(px, py)`.
    ///
    /// `None` when no font is registered.
    pub fn icon_label_text_position(&self, rect: Rect, icon: Option<IconId>, label: &str, px: f32, py: f32) -> Option<usize> {
        let font = self.font()?;
        let layout = TextLayout::new(font, self.font_size(), rect, icon.is_some(), label);
        Some(layout.hit_test(font, label, px, py))
    }

    /// Preferred width of a label widget, rounded up so the label drawn
    /// in a box this wide stays on one row.
    pub fn label_width(&self, icon: Option<IconId>, label: Option<&str>) -> f32 {
        let mut w = PAD_LEFT + PAD_RIGHT;
        if icon.is_some() {
            w += ICON_SHEET_RES;
        }
        if let (Some(label), Some(font)) = (label, self.font()) {
            w += text_width(font, self.font_size(), label);
        }
        w.ceil()
    }

    /// Preferred height of a label wrapped to `width`.
    pub fn label_height(&self, icon: Option<IconId>, label: Option<&str>, width: f32) -> f32 {
        let mut h = WIDGET_HEIGHT;
        let mut width = width - TEXT_RADIUS * 2.0;
        if icon.is_some() {
            width -= ICON_SHEET_RES;
        }
        if let (Some(label), Some(font)) = (label, self.font()) {
            let size = self.font_size();
            let rows = break_lines(font, size, label, width).len();
            let text_h = (rows as f32 * font.line_metrics(size).line_height).floor() + TEXT_PAD_DOWN;
            h = h.max(text_h);
        }
        h
    }

    /// Node title: a blurred shadow pass, the label, and an icon at the
    /// right edge.
    #[allow(clippy::too_many_arguments)]
    pub fn node_icon_label(
        &self,
        canvas: &mut dyn Canvas,
        rect: Rect,
        icon: Option<IconId>,
        color: Color,
        shadow_color: Color,
        label: Option<&str>,
    ) {
        if let (Some(label), Some(font)) = (label, self.font()) {
            let size = self.font_size();
            let lh = font.line_metrics(size).line_height;
            let rows = break_lines(font, size, label, rect.w);
            let passes = [
                (rect.x + 1.0, rect.y + rect.h + 3.0 - TEXT_PAD_DOWN, shadow_color, NODE_TITLE_FEATHER),
                (rect.x, rect.y + rect.h + 2.0 - TEXT_PAD_DOWN, color, 0.0),
            ];
            for (x, baseline, color, blur) in passes {
                for (i, row) in rows.iter().enumerate() {
                    canvas.fill_text(&TextRun {
                        origin: Point::new(x, baseline + i as f32 * lh),
                        text: label[row.start..row.end].to_string(),
                        size,
                        color,
                        blur,
                    });
                }
            }
        }
        if let Some(icon) = icon {
            self.icon(canvas, rect.x + rect.w - ICON_SHEET_RES, rect.y + 3.0, icon);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::{DisplayList, DrawCommand};
    use crate::font::FixedAdvance;
    use crate::icon_ids;
    use crate::theme::Theme;

    fn skin() -> Skin {
        let mut skin = Skin::new(Theme::default());
        skin.set_font(Box::new(FixedAdvance::new(7.0)));
        skin
    }

    fn field() -> Rect {
        Rect::new(10.0, 30.0, 100.0, 21.0)
    }

    #[test]
    fn scenario_plain_left_label() {
        let skin = skin();
        let mut list = DisplayList::new();
        skin.icon_label_value(&mut list, field(), None, Color::BLACK, TextAlignment::Left, Some("Hello"), None);
        let runs: Vec<_> = list.texts().collect();
        assert_eq!(runs.len(), 1);
        assert_eq!(runs[0].text, "Hello");
        assert_eq!(runs[0].origin, Point::new(10.0 + PAD_LEFT, 30.0 + WIDGET_HEIGHT - TEXT_PAD_DOWN));
    }

    #[test]
    fn scenario_label_with_value() {
        let skin = skin();
        let mut list = DisplayList::new();
        skin.icon_label_value(&mut list, field(), None, Color::BLACK, TextAlignment::Left, Some("Speed"), Some("42"));
        let runs: Vec<_> = list.texts().collect();
        assert_eq!(runs.len(), 1);
        assert_eq!(runs[0].text, "Speed: 42");

        // caret offsets index the label alone
        let layout = skin.text_layout(field(), None, "Speed").unwrap();
        let font = skin.font().unwrap();
        let end = layout.caret_position(font, "Speed", 5);
        assert_eq!(end.x, layout.origin.x + 35.0);
        assert_eq!(layout.hit_test(font, "Speed", 500.0, end.y + 1.0), 5);
    }

    #[test]
    fn centered_value_label_is_offset_by_half_the_slack() {
        let skin = skin();
        let mut list = DisplayList::new();
        skin.icon_label_value(&mut list, field(), None, Color::BLACK, TextAlignment::Center, Some("ab"), Some("c"));
        let run = list.texts().next().unwrap();
        let text_w = 5.0 * 7.0;
        let expected = 10.0 + PAD_LEFT + ((100.0 - PAD_RIGHT - PAD_LEFT) - text_w) * 0.5;
        assert_eq!(run.origin.x, expected);
    }

    #[test]
    fn icon_shifts_text_right() {
        let skin = skin();
        let mut list = DisplayList::new();
        skin.icon_label_value(&mut list, field(), Some(icon_ids::PLUS), Color::BLACK, TextAlignment::Left, Some("Add"), None);
        let run = list.texts().next().unwrap();
        assert_eq!(run.origin.x, 10.0 + PAD_LEFT + ICON_SHEET_RES);
    }

    #[test]
    fn missing_label_and_font_draw_nothing() {
        let skin = skin();
        let mut list = DisplayList::new();
        skin.icon_label_value(&mut list, field(), None, Color::BLACK, TextAlignment::Left, None, Some("x"));
        assert!(list.is_empty());

        let bare = Skin::new(Theme::default());
        bare.icon_label_value(&mut list, field(), None, Color::BLACK, TextAlignment::Left, Some("x"), None);
        bare.icon_label_caret(&mut list, field(), None, Color::BLACK, "x", Color::WHITE, CaretSpan::caret(0));
        assert!(list.is_empty());
        assert_eq!(bare.icon_label_text_position(field(), None, "x", 0.0, 0.0), None);
    }

    #[test]
    fn caret_round_trips_through_hit_test() {
        let skin = skin();
        let font = skin.font().unwrap();
        let label = "the quick brown fox jumps";
        let rect = Rect::new(0.0, 0.0, 80.0, 21.0);
        let layout = skin.text_layout(rect, None, label).unwrap();
        assert!(layout.rows.len() > 1);
        for (k, _) in label.char_indices().chain(std::iter::once((label.len(), ' '))) {
            let pos = layout.caret_position(font, label, k);
            let hit = layout.hit_test(font, label, pos.x, pos.y + layout.metrics.line_height * 0.5);
            let on_wrap = layout.rows.iter().any(|r| (r.end < k && k < r.next) || (k == r.end && r.end != r.next));
            if on_wrap {
                let row = &layout.rows[pos.row];
                assert!(hit == k || hit == row.end, "offset {k} hit {hit}");
            } else {
                assert_eq!(hit, k, "offset {k}");
            }
        }
    }

    #[test]
    fn hit_test_extremes() {
        let skin = skin();
        let label = "Hello";
        let rect = field();
        let y = rect.y + 10.0;
        assert_eq!(skin.icon_label_text_position(rect, None, label, -1000.0, y), Some(0));
        assert_eq!(skin.icon_label_text_position(rect, None, label, 1000.0, y), Some(label.len()));
        assert_eq!(skin.icon_label_text_position(rect, None, "", 50.0, y), Some(0));
    }

    #[test]
    fn hit_test_ties_go_to_the_earlier_boundary() {
        let skin = skin();
        let font = skin.font().unwrap();
        let layout = skin.text_layout(field(), None, "ab").unwrap();
        let mid = layout.origin.x + 3.5;
        assert_eq!(layout.hit_test(font, "ab", mid, 35.0), 0);
        assert_eq!(layout.hit_test(font, "ab", mid + 0.1, 35.0), 1);
    }

    #[test]
    fn insertion_caret_is_one_pixel_wide() {
        let skin = skin();
        let mut list = DisplayList::new();
        skin.icon_label_caret(&mut list, field(), None, Color::BLACK, "Hello", Color::WHITE, CaretSpan::caret(2));
        let (path, paint, _) = list.fills().next().unwrap();
        assert_eq!(*paint, Paint::Solid(INSERTION_CARET_COLOR));
        let layout = skin.text_layout(field(), None, "Hello").unwrap();
        let x = layout.origin.x + 14.0;
        assert_eq!(path.verbs()[0], crate::path::PathVerb::MoveTo(Point::new(x - 0.5, layout.row_top(0))));
        assert_eq!(path.verbs()[1], crate::path::PathVerb::LineTo(Point::new(x + 0.5, layout.row_top(0))));
        assert!(matches!(list.commands().last(), Some(DrawCommand::Text(run)) if run.text == "Hello"));
    }

    #[test]
    fn selection_uses_caret_color_and_none_draws_no_band() {
        let skin = skin();
        let mut list = DisplayList::new();
        skin.icon_label_caret(&mut list, field(), None, Color::BLACK, "Hello", Color::WHITE, CaretSpan::selection(1, 4));
        let (path, paint, _) = list.fills().next().unwrap();
        assert_eq!(*paint, Paint::Solid(Color::WHITE));
        assert_eq!(path.line_count(), 3);

        list.clear();
        skin.icon_label_caret(&mut list, field(), None, Color::BLACK, "Hello", Color::WHITE, CaretSpan::NONE);
        assert_eq!(list.fills().count(), 0);
        assert_eq!(list.texts().count(), 1);
    }

    #[test]
    fn multi_row_selection_draws_three_bands() {
        let skin = skin();
        let label = "aaaa bbbb cccc dddd";
        let rect = Rect::new(0.0, 0.0, 50.0, 21.0);
        let layout = skin.text_layout(rect, None, label).unwrap();
        assert!(layout.rows.len() >= 3);
        let mut list = DisplayList::new();
        skin.icon_label_caret(&mut list, rect, None, Color::BLACK, label, Color::WHITE, CaretSpan::selection(1, label.len()));
        let (path, _, _) = list.fills().next().unwrap();
        let subpaths = path.verbs().iter().filter(|v| matches!(v, crate::path::PathVerb::MoveTo(_))).count();
        assert_eq!(subpaths, 3);
    }

    #[test]
    fn empty_label_caret_sits_at_origin() {
        let skin = skin();
        let mut list = DisplayList::new();
        skin.icon_label_caret(&mut list, field(), None, Color::BLACK, "", Color::WHITE, CaretSpan::caret(3));
        let (path, _, _) = list.fills().next().unwrap();
        let layout = skin.text_layout(field(), None, "").unwrap();
        assert_eq!(path.verbs()[0], crate::path::PathVerb::MoveTo(Point::new(layout.origin.x - 0.5, layout.row_top(0))));
    }

    #[test]
    fn estimators() {
        let skin = skin();
        assert_eq!(skin.label_width(None, Some("abcd")), PAD_LEFT + PAD_RIGHT + 28.0);
        assert_eq!(skin.label_width(Some(icon_ids::PLUS), None), PAD_LEFT + PAD_RIGHT + ICON_SHEET_RES);
        assert_eq!(skin.label_height(None, None, 200.0), WIDGET_HEIGHT);
        // one 15px row plus padding
        assert_eq!(skin.label_height(None, Some("abc"), 200.0), 22.0);
        // 6 rows of 15px at width 8 + 7 pad
        let tall = skin.label_height(None, Some("ab cd ef gh ij kl"), 22.0);
        assert_eq!(tall, 6.0 * 15.0 + TEXT_PAD_DOWN);
    }

    #[test]
    fn label_fits_its_own_preferred_width() {
        let mut skin = Skin::new(Theme::default());
        skin.set_font(Box::new(FixedAdvance::new(7.3)));
        let w = skin.label_width(None, Some("ab cd"));
        assert_eq!(w, 53.0);
        let mut list = DisplayList::new();
        skin.label(&mut list, Rect::new(0.0, 0.0, w, WIDGET_HEIGHT), None, Some("ab cd"));
        let runs: Vec<_> = list.texts().collect();
        assert_eq!(runs.len(), 1);
        assert_eq!(runs[0].text, "ab cd");
    }

    #[test]
    fn value_label_is_capped_like_measurement() {
        let skin = skin();
        let mut list = DisplayList::new();
        let long = "x".repeat(1100);
        skin.icon_label_value(&mut list, field(), None, Color::BLACK, TextAlignment::Left, Some(&long), Some("1"));
        let runs: Vec<_> = list.texts().collect();
        assert_eq!(runs.len(), 1);
        assert_eq!(runs[0].text.chars().count(), MAX_GLYPHS);
    }

    #[test]
    fn hit_test_clamps_to_first_and_last_row() {
        let skin = skin();
        let font = skin.font().unwrap();
        let label = "aaaa bbbb cccc dddd";
        let layout = skin.text_layout(Rect::new(0.0, 0.0, 50.0, 21.0), None, label).unwrap();
        assert!(layout.rows.len() >= 3);
        let last = layout.rows.last().unwrap();
        assert_eq!(layout.hit_test(font, label, -1000.0, 1000.0), last.start);
        assert_eq!(layout.hit_test(font, label, 1000.0, 1000.0), last.end);
        assert_eq!(layout.hit_test(font, label, -1000.0, -1000.0), 0);
    }

    #[test]
    fn node_label_draws_shadow_then_text_then_icon() {
        let skin = skin();
        let mut list = DisplayList::new();
        let rect = Rect::new(0.0, 0.0, 100.0, 20.0);
        skin.node_icon_label(&mut list, rect, None, Color::WHITE, Color::BLACK, Some("Node"));
        let runs: Vec<_> = list.texts().collect();
        assert_eq!(runs.len(), 2);
        assert_eq!(runs[0].blur, NODE_TITLE_FEATHER);
        assert_eq!(runs[0].origin, Point::new(1.0, 16.0));
        assert_eq!(runs[1].origin, Point::new(0.0, 15.0));
    }
}
