//! One drawing routine per widget kind.
//!
//! Each composer picks a theme record, derives colors through the shading
//! functions and stacks box primitives and labels. None of them keep state.

use crate::canvas::{Canvas, FillRule, Paint};
use crate::color::Color;
use crate::corners::{select_corners, CornerFlags};
use crate::geometry::{Point, Rect};
use crate::icons::IconId;
use crate::label::{CaretSpan, TextAlignment};
use crate::path::VectorPath;
use crate::shading::{
    inner_colors, node_wire_color, offset_color, text_color, transparent, WidgetState, BEVEL_SHADE, HOVER_SHADE,
    SPLITTER_SHADE,
};
use crate::skin::Skin;

pub const TOOL_WIDTH: f32 = 20.0;
pub const NODE_PORT_RADIUS: f32 = 5.0;
pub const NODE_MARGIN_TOP: f32 = 25.0;
pub const NODE_MARGIN_DOWN: f32 = 5.0;
pub const NODE_MARGIN_SIDE: f32 = 10.0;
pub const NODE_TITLE_HEIGHT: f32 = 20.0;
pub const NODE_ARROW_AREA_WIDTH: f32 = 20.0;
pub const SPLITTER_AREA_SIZE: f32 = 12.0;
pub const SCROLLBAR_WIDTH: f32 = 13.0;
pub const SCROLLBAR_HEIGHT: f32 = 14.0;
pub const VSPACING: f32 = 1.0;
pub const VSPACING_GROUP: f32 = 8.0;
pub const HSPACING: f32 = 8.0;

pub const TOOL_RADIUS: f32 = 4.0;
pub const OPTION_RADIUS: f32 = 4.0;
pub const OPTION_WIDTH: f32 = 14.0;
pub const OPTION_HEIGHT: f32 = 15.0;
pub const TEXT_RADIUS: f32 = crate::label::TEXT_RADIUS;
pub const NUMBER_RADIUS: f32 = 10.0;
pub const MENU_RADIUS: f32 = 3.0;
pub const SHADOW_FEATHER: f32 = 12.0;
pub const SHADOW_ALPHA: f32 = 0.5;
pub const SCROLLBAR_RADIUS: f32 = 7.0;
pub const SCROLLBAR_ACTIVE_SHADE: i32 = 15;
pub const NUMBER_ARROW_SIZE: f32 = 4.0;
pub const NODE_WIRE_OUTLINE_WIDTH: f32 = 4.0;
pub const NODE_WIRE_WIDTH: f32 = 2.0;
pub const NODE_RADIUS: f32 = 8.0;
pub const NODE_ARROW_SIZE: f32 = 9.0;

/// Handle of a scroll bar track `rect`. `offset` and `size` are fractions
/// of the track, clamped to `[0, 1]`.
pub fn scroll_handle_rect(rect: Rect, offset: f32, size: f32) -> Rect {
    let size = size.clamp(0.0, 1.0);
    let offset = offset.clamp(0.0, 1.0);
    let Rect { x, y, w, h } = rect;
    if h > w {
        let hs = (size * h).max(w + 1.0);
        Rect::new(x, y + (h - hs) * offset, w, hs)
    } else {
        let ws = (size * w).max(h - 1.0);
        Rect::new(x + (w - ws) * offset, y, ws, h)
    }
}

/// Check mark inside an option box at `(ox, oy)`.
pub fn check(canvas: &mut dyn Canvas, ox: f32, oy: f32, color: Color) {
    let path = VectorPath::polyline(&[(ox + 4.0, oy + 5.0), (ox + 7.0, oy + 8.0), (ox + 14.0, oy + 1.0)]);
    canvas.stroke_path(&path, &Paint::Solid(color), 2.0);
}

/// Triangle pointing right (`s > 0`) or left (`s < 0`) with its tip at `(x, y)`.
pub fn arrow(canvas: &mut dyn Canvas, x: f32, y: f32, s: f32, color: Color) {
    let path = VectorPath::polygon(&[(x, y), (x - s, y + s), (x - s, y - s)]);
    canvas.fill_path(&path, &Paint::Solid(color), FillRule::NonZero);
}

/// Stacked up and down triangles, as on choice buttons.
pub fn up_down_arrow(canvas: &mut dyn Canvas, x: f32, y: f32, s: f32, color: Color) {
    let w = 1.1 * s;
    let mut path = VectorPath::polygon(&[(x, y - 1.0), (x + 0.5 * w, y - s - 1.0), (x + w, y - 1.0)]);
    path.extend(&VectorPath::polygon(&[(x, y + 1.0), (x + 0.5 * w, y + s + 1.0), (x + w, y + 1.0)]));
    canvas.fill_path(&path, &Paint::Solid(color), FillRule::NonZero);
}

/// Downward triangle with its tip at `(x, y)`.
pub fn node_arrow_down(canvas: &mut dyn Canvas, x: f32, y: f32, s: f32, color: Color) {
    let path = VectorPath::polygon(&[(x, y), (x + 0.5 * s, y - s), (x - 0.5 * s, y - s)]);
    canvas.fill_path(&path, &Paint::Solid(color), FillRule::NonZero);
}

fn segments(lines: &[(f32, f32, f32, f32)]) -> VectorPath {
    let mut path = VectorPath::new();
    for &(x0, y0, x1, y1) in lines {
        path.move_to(x0, y0);
        path.line_to(x1, y1);
    }
    path
}

impl Skin {
    /// Bevel, gradient body and outline shared by most button-like widgets.
    fn widget_box(&self, canvas: &mut dyn Canvas, rect: Rect, radii: [f32; 4], top: Color, down: Color, outline: Color) {
        self.bevel_inset(canvas, rect, radii[2], radii[3]);
        self.inner_box(canvas, rect, radii, top, down);
        self.outline_box(canvas, rect, radii, transparent(outline));
    }

    pub fn tool_button(
        &self,
        canvas: &mut dyn Canvas,
        rect: Rect,
        flags: CornerFlags,
        state: WidgetState,
        icon: Option<IconId>,
        label: Option<&str>,
    ) {
        let t = self.theme().tool;
        let (top, down) = inner_colors(&t, state, true);
        self.widget_box(canvas, rect, select_corners(TOOL_RADIUS, flags), top, down, t.outline_color);
        self.icon_label_value(canvas, rect, icon, text_color(&t, state), TextAlignment::Center, label, None);
    }

    pub fn radio_button(
        &self,
        canvas: &mut dyn Canvas,
        rect: Rect,
        flags: CornerFlags,
        state: WidgetState,
        icon: Option<IconId>,
        label: Option<&str>,
    ) {
        let t = self.theme().radio;
        let (top, down) = inner_colors(&t, state, true);
        self.widget_box(canvas, rect, select_corners(TOOL_RADIUS, flags), top, down, t.outline_color);
        self.icon_label_value(canvas, rect, icon, text_color(&t, state), TextAlignment::Center, label, None);
    }

    /// Editable text box. The caret or selection only shows while `Active`.
    #[allow(clippy::too_many_arguments)]
    pub fn text_field(
        &self,
        canvas: &mut dyn Canvas,
        rect: Rect,
        flags: CornerFlags,
        state: WidgetState,
        icon: Option<IconId>,
        text: &str,
        span: CaretSpan,
    ) {
        let t = self.theme().text_field;
        let (top, down) = inner_colors(&t, state, false);
        self.widget_box(canvas, rect, select_corners(TEXT_RADIUS, flags), top, down, t.outline_color);
        let span = if state == WidgetState::Active { span } else { CaretSpan::NONE };
        self.icon_label_caret(canvas, rect, icon, text_color(&t, state), text, t.item_color, span);
    }

    /// Byte offset in a text field's `text` under `(px, py)`.
    pub fn text_field_text_position(&self, rect: Rect, icon: Option<IconId>, text: &str, px: f32, py: f32) -> Option<usize> {
        self.icon_label_text_position(rect, icon, text, px, py)
    }

    /// Checkbox with a label to its right.
    pub fn option_button(&self, canvas: &mut dyn Canvas, rect: Rect, state: WidgetState, label: Option<&str>) {
        let t = self.theme().option;
        let ox = rect.x;
        let oy = rect.y + rect.h - OPTION_HEIGHT - 3.0;
        let (top, down) = inner_colors(&t, state, true);
        let option_box = Rect::new(ox, oy, OPTION_WIDTH, OPTION_HEIGHT);
        self.widget_box(canvas, option_box, [OPTION_RADIUS; 4], top, down, t.outline_color);
        if state == WidgetState::Active {
            check(canvas, ox, oy, transparent(t.item_color));
        }
        let label_rect = Rect::new(rect.x + 12.0, rect.y, rect.w - 12.0, rect.h);
        self.icon_label_value(canvas, label_rect, None, text_color(&t, state), TextAlignment::Left, label, None);
    }

    /// Drop-down selector with an up/down arrow at the right edge.
    pub fn choice_button(
        &self,
        canvas: &mut dyn Canvas,
        rect: Rect,
        flags: CornerFlags,
        state: WidgetState,
        icon: Option<IconId>,
        label: Option<&str>,
    ) {
        let t = self.theme().choice;
        let (top, down) = inner_colors(&t, state, true);
        self.widget_box(canvas, rect, select_corners(OPTION_RADIUS, flags), top, down, t.outline_color);
        self.icon_label_value(canvas, rect, icon, text_color(&t, state), TextAlignment::Left, label, None);
        up_down_arrow(canvas, rect.x + rect.w - 10.0, rect.y + 10.0, 5.0, transparent(t.item_color));
    }

    /// Flat swatch of `color`.
    pub fn color_button(&self, canvas: &mut dyn Canvas, rect: Rect, flags: CornerFlags, color: Color) {
        let outline = self.theme().tool.outline_color;
        self.widget_box(canvas, rect, select_corners(TOOL_RADIUS, flags), color, color, outline);
    }

    /// Numeric field showing `label: value` with step arrows on both sides.
    #[allow(clippy::too_many_arguments)]
    pub fn number_field(
        &self,
        canvas: &mut dyn Canvas,
        rect: Rect,
        flags: CornerFlags,
        state: WidgetState,
        label: Option<&str>,
        value: Option<&str>,
    ) {
        let t = self.theme().number_field;
        let (top, down) = inner_colors(&t, state, false);
        self.widget_box(canvas, rect, select_corners(NUMBER_RADIUS, flags), top, down, t.outline_color);
        self.icon_label_value(canvas, rect, None, text_color(&t, state), TextAlignment::Center, label, value);
        let arrow_color = transparent(t.item_color);
        arrow(canvas, rect.x + 8.0, rect.y + 10.0, -NUMBER_ARROW_SIZE, arrow_color);
        arrow(canvas, rect.x + rect.w - 8.0, rect.y + 10.0, NUMBER_ARROW_SIZE, arrow_color);
    }

    /// Number field whose body is filled up to `progress` (0..1).
    #[allow(clippy::too_many_arguments)]
    pub fn slider(
        &self,
        canvas: &mut dyn Canvas,
        rect: Rect,
        flags: CornerFlags,
        state: WidgetState,
        progress: f32,
        label: Option<&str>,
        value: Option<&str>,
    ) {
        let t = self.theme().slider;
        let radii = select_corners(NUMBER_RADIUS, flags);
        self.bevel_inset(canvas, rect, radii[2], radii[3]);
        let (top, down) = inner_colors(&t, state, false);
        self.inner_box(canvas, rect, radii, top, down);

        let (top, down) = if state == WidgetState::Active {
            (offset_color(t.item_color, t.shade_top), offset_color(t.item_color, t.shade_down))
        } else {
            (offset_color(t.item_color, t.shade_down), offset_color(t.item_color, t.shade_top))
        };
        let filled = 8.0 + (rect.w - 8.0) * progress.clamp(0.0, 1.0);
        canvas.push_clip(Rect::new(rect.x, rect.y, filled, rect.h));
        self.inner_box(canvas, rect, radii, top, down);
        canvas.pop_clip();

        self.outline_box(canvas, rect, radii, transparent(t.outline_color));
        self.icon_label_value(canvas, rect, None, text_color(&t, state), TextAlignment::Center, label, value);
    }

    /// Scroll bar track with a handle at `offset` covering `size` of it.
    pub fn scroll_bar(&self, canvas: &mut dyn Canvas, rect: Rect, state: WidgetState, offset: f32, size: f32) {
        let t = self.theme().scroll_bar;
        let radii = [SCROLLBAR_RADIUS; 4];
        self.bevel_inset(canvas, rect, SCROLLBAR_RADIUS, SCROLLBAR_RADIUS);
        self.inner_box(
            canvas,
            rect,
            radii,
            offset_color(t.inner_color, 3 * t.shade_down),
            offset_color(t.inner_color, 3 * t.shade_top),
        );
        self.outline_box(canvas, rect, radii, transparent(t.outline_color));

        let shade = if state == WidgetState::Active { SCROLLBAR_ACTIVE_SHADE } else { 0 };
        let item = offset_color(t.item_color, shade);
        let handle = scroll_handle_rect(rect, offset, size);
        self.inner_box(
            canvas,
            handle,
            radii,
            offset_color(item, 3 * t.shade_top),
            offset_color(item, 3 * t.shade_down),
        );
        self.outline_box(canvas, handle, radii, transparent(t.outline_color));
    }

    pub fn menu_background(&self, canvas: &mut dyn Canvas, rect: Rect, flags: CornerFlags) {
        let t = self.theme().menu;
        self.floating_background(canvas, rect, select_corners(MENU_RADIUS, flags), &t);
    }

    pub fn tooltip_background(&self, canvas: &mut dyn Canvas, rect: Rect) {
        let t = self.theme().tooltip;
        self.floating_background(canvas, rect, [MENU_RADIUS; 4], &t);
    }

    fn floating_background(&self, canvas: &mut dyn Canvas, rect: Rect, radii: [f32; 4], t: &crate::theme::WidgetTheme) {
        let (top, down) = inner_colors(t, WidgetState::Default, false);
        let body = Rect::new(rect.x, rect.y, rect.w, rect.h + 1.0);
        self.inner_box(canvas, body, radii, top, down);
        self.outline_box(canvas, body, radii, transparent(t.outline_color));
        self.drop_shadow(canvas, rect, MENU_RADIUS, SHADOW_FEATHER, SHADOW_ALPHA);
    }

    /// Non-interactive menu heading.
    pub fn menu_label(&self, canvas: &mut dyn Canvas, rect: Rect, icon: Option<IconId>, label: Option<&str>) {
        let color = self.theme().menu.text_color;
        self.icon_label_value(canvas, rect, icon, color, TextAlignment::Left, label, None);
    }

    /// Menu entry. Hovered and active entries get the selection fill.
    pub fn menu_item(
        &self,
        canvas: &mut dyn Canvas,
        rect: Rect,
        state: WidgetState,
        icon: Option<IconId>,
        label: Option<&str>,
    ) {
        let t = self.theme().menu_item;
        let mut state = state;
        if state != WidgetState::Default {
            self.inner_box(
                canvas,
                rect,
                [0.0; 4],
                offset_color(t.inner_selected_color, t.shade_top),
                offset_color(t.inner_selected_color, t.shade_down),
            );
            state = WidgetState::Active;
        }
        self.icon_label_value(canvas, rect, icon, text_color(&t, state), TextAlignment::Left, label, None);
    }

    /// Connector circle centered on `(x, y)`.
    pub fn node_port(&self, canvas: &mut dyn Canvas, x: f32, y: f32, state: WidgetState, color: Color) {
        let path = VectorPath::circle(x, y, NODE_PORT_RADIUS);
        canvas.stroke_path(&path, &Paint::Solid(self.theme().node.wires_color), 1.0);
        let fill = if state == WidgetState::Default { color } else { offset_color(color, HOVER_SHADE) };
        canvas.fill_path(&path, &Paint::Solid(fill), FillRule::NonZero);
    }

    /// Wire between two ports, colored by each end's state.
    pub fn node_wire(&self, canvas: &mut dyn Canvas, from: Point, to: Point, state0: WidgetState, state1: WidgetState) {
        let node = &self.theme().node;
        self.colored_node_wire(canvas, from, to, node_wire_color(node, state0), node_wire_color(node, state1));
    }

    /// Wire whose color fades from `color0` at `from` to `color1` at `to`.
    pub fn colored_node_wire(&self, canvas: &mut dyn Canvas, from: Point, to: Point, color0: Color, color1: Color) {
        let node = &self.theme().node;
        let length = (to.x - from.x).abs().max((to.y - from.y).abs());
        let delta = length * node.noodle_curving as f32 / 10.0;

        let mut path = VectorPath::new();
        path.move_to(from.x, from.y);
        path.cubic_to(from.x + delta, from.y, to.x - delta, to.y, to.x, to.y);

        let outline = node.wires_color.with_alpha(color0.a.min(color1.a));
        canvas.stroke_path(&path, &Paint::Solid(outline), NODE_WIRE_OUTLINE_WIDTH);
        let gradient = Paint::linear(from.x, from.y, to.x, to.y, color0, color1);
        canvas.stroke_path(&path, &gradient, NODE_WIRE_WIDTH);
    }

    /// Node body with a title bar tinted `title_color`.
    #[allow(clippy::too_many_arguments)]
    pub fn node_background(
        &self,
        canvas: &mut dyn Canvas,
        rect: Rect,
        state: WidgetState,
        icon: Option<IconId>,
        label: Option<&str>,
        title_color: Color,
    ) {
        let theme = self.theme();
        let node = &theme.node;
        let Rect { x, y, w, h } = rect;

        self.inner_box(
            canvas,
            Rect::new(x, y, w, NODE_TITLE_HEIGHT + 2.0),
            [NODE_RADIUS, NODE_RADIUS, 0.0, 0.0],
            transparent(offset_color(title_color, BEVEL_SHADE)),
            transparent(title_color),
        );
        let backdrop = transparent(node.node_backdrop_color);
        self.inner_box(
            canvas,
            Rect::new(x, y + NODE_TITLE_HEIGHT - 1.0, w, h + 2.0 - NODE_TITLE_HEIGHT),
            [0.0, 0.0, NODE_RADIUS, NODE_RADIUS],
            backdrop,
            backdrop,
        );
        self.node_icon_label(
            canvas,
            Rect::new(x + NODE_ARROW_AREA_WIDTH, y, w - NODE_ARROW_AREA_WIDTH - NODE_MARGIN_SIDE, NODE_TITLE_HEIGHT),
            icon,
            theme.regular.text_color,
            offset_color(title_color, BEVEL_SHADE),
            label,
        );

        let (border, arrow_color) = match state {
            WidgetState::Default => (Color::BLACK, offset_color(title_color, -BEVEL_SHADE)),
            WidgetState::Hover => (node.node_selected_color, node.node_selected_color),
            WidgetState::Active => (node.active_node_color, node.node_selected_color),
        };
        self.outline_box(canvas, Rect::new(x, y, w, h + 1.0), [NODE_RADIUS; 4], transparent(border));
        node_arrow_down(canvas, x + NODE_MARGIN_SIDE, y + NODE_TITLE_HEIGHT - 4.0, NODE_ARROW_SIZE, arrow_color);
        self.drop_shadow(canvas, rect, NODE_RADIUS, SHADOW_FEATHER, SHADOW_ALPHA);
    }

    /// Diagonal grip lines in the top-right and bottom-left corners of an area.
    pub fn splitter_widgets(&self, canvas: &mut dyn Canvas, rect: Rect) {
        let bg = self.theme().background_color;
        let light = transparent(offset_color(bg, SPLITTER_SHADE));
        let dark = transparent(offset_color(bg, -SPLITTER_SHADE));
        let plain = transparent(bg);
        let (x, y) = (rect.x, rect.y);
        let (x2, y2) = (rect.right(), rect.bottom());

        let grip = |down: [f32; 3], up: [f32; 3]| {
            let mut lines = Vec::with_capacity(6);
            for d in down {
                lines.push((x, y2 - d, x + d, y2));
            }
            for d in up {
                lines.push((x2 - d, y, x2, y + d));
            }
            segments(&lines)
        };

        canvas.stroke_path(&grip([13.0, 9.0, 5.0], [11.0, 7.0, 3.0]), &Paint::Solid(dark), 1.0);
        canvas.stroke_path(&grip([11.0, 7.0, 3.0], [13.0, 9.0, 5.0]), &Paint::Solid(light), 1.0);
        canvas.stroke_path(&grip([12.0, 8.0, 4.0], [12.0, 8.0, 4.0]), &Paint::Solid(plain), 1.0);
    }

    /// Arrow overlay shown while joining two areas. `vertical` swaps the
    /// axes, `mirror` points the arrow the other way.
    pub fn join_area_overlay(&self, canvas: &mut dyn Canvas, rect: Rect, vertical: bool, mirror: bool) {
        let (w, h) = if vertical { (rect.h, rect.w) } else { (rect.w, rect.h) };
        let mut s = w.min(h);
        let (x0, y0, x1, y1) = if mirror {
            s = -s;
            (w, h, 0.0, 0.0)
        } else {
            (0.0, 0.0, w, h)
        };
        let yc = (y0 + y1) * 0.5;
        let (s2, s4, s8) = (s / 2.0, s / 4.0, s / 8.0);
        let x4 = x0 + s4;
        let points = [
            (x0, y0),
            (x1, y0),
            (x1, y1),
            (x0, y1),
            (x0, yc + s8),
            (x4, yc + s8),
            (x4, yc + s4),
            (x0 + s2, yc),
            (x4, yc - s4),
            (x4, yc - s8),
            (x0, yc - s8),
        ];
        let placed: Vec<(f32, f32)> = points
            .iter()
            .map(|&(px, py)| if vertical { (rect.x + py, rect.y + px) } else { (rect.x + px, rect.y + py) })
            .collect();
        let path = VectorPath::polygon(&placed);
        canvas.fill_path(&path, &Paint::Solid(Color::gray_alpha(0.0, 0.3)), FillRule::NonZero);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::{DisplayList, DrawCommand};
    use crate::font::FixedAdvance;
    use crate::path::PathVerb;
    use crate::theme::Theme;

    fn skin() -> Skin {
        let mut skin = Skin::new(Theme::default());
        skin.set_font(Box::new(FixedAdvance::new(7.0)));
        skin
    }

    fn button() -> Rect {
        Rect::new(0.0, 0.0, 100.0, 21.0)
    }

    #[test]
    fn handle_rect_for_wide_and_tall_tracks() {
        let wide = scroll_handle_rect(Rect::new(0.0, 0.0, 100.0, 14.0), 0.5, 0.2);
        assert_eq!(wide, Rect::new(40.0, 0.0, 20.0, 14.0));
        let tall = scroll_handle_rect(Rect::new(0.0, 0.0, 13.0, 200.0), 1.0, 0.0);
        assert_eq!(tall, Rect::new(0.0, 186.0, 13.0, 14.0));
        let clamped = scroll_handle_rect(Rect::new(0.0, 0.0, 100.0, 14.0), 2.0, 3.0);
        assert_eq!(clamped, Rect::new(0.0, 0.0, 100.0, 14.0));
    }

    #[test]
    fn tool_button_draws_bevel_body_outline_and_centered_label() {
        let skin = skin();
        let mut list = DisplayList::new();
        skin.tool_button(&mut list, button(), CornerFlags::NONE, WidgetState::Default, None, Some("OK"));
        let kinds: Vec<&str> = list
            .commands()
            .iter()
            .map(|c| match c {
                DrawCommand::StrokePath { .. } => "stroke",
                DrawCommand::FillPath { .. } => "fill",
                DrawCommand::Text(_) => "text",
                _ => "other",
            })
            .collect();
        assert_eq!(kinds, ["stroke", "fill", "stroke", "text"]);
        let run = list.texts().next().unwrap();
        assert_eq!(run.origin.x, 8.0 + (84.0 - 14.0) * 0.5);
    }

    #[test]
    fn pressed_tool_button_flips_gradient() {
        let skin = skin();
        let theme = skin.theme().tool;
        let mut list = DisplayList::new();
        skin.tool_button(&mut list, button(), CornerFlags::ALL, WidgetState::Active, None, None);
        let (path, paint, _) = list.fills().next().unwrap();
        let (top, down) = inner_colors(&theme, WidgetState::Active, false);
        match paint {
            Paint::Linear { from, to, .. } => assert_eq!((*from, *to), (down, top)),
            other => panic!("unexpected paint {other:?}"),
        }
        assert_eq!(path.arc_count(), 0);
    }

    #[test]
    fn text_field_hides_caret_unless_active() {
        let skin = skin();
        let mut list = DisplayList::new();
        skin.text_field(&mut list, button(), CornerFlags::NONE, WidgetState::Hover, None, "abc", CaretSpan::caret(1));
        assert_eq!(list.fills().count(), 1);

        list.clear();
        skin.text_field(&mut list, button(), CornerFlags::NONE, WidgetState::Active, None, "abc", CaretSpan::selection(0, 2));
        let fills: Vec<_> = list.fills().collect();
        assert_eq!(fills.len(), 2);
        assert_eq!(*fills[1].1, Paint::Solid(skin.theme().text_field.item_color));
    }

    #[test]
    fn text_field_position_matches_label_hit_test() {
        let skin = skin();
        let at = skin.text_field_text_position(button(), None, "abc", 4.0 + 7.0 + 0.5, 10.0);
        assert_eq!(at, Some(1));
    }

    #[test]
    fn option_button_checks_only_when_active() {
        let skin = skin();
        let mut list = DisplayList::new();
        skin.option_button(&mut list, button(), WidgetState::Default, Some("Opt"));
        assert_eq!(list.strokes().count(), 2);
        list.clear();
        skin.option_button(&mut list, button(), WidgetState::Active, Some("Opt"));
        let strokes: Vec<_> = list.strokes().collect();
        assert_eq!(strokes.len(), 3);
        assert_eq!(strokes[2].2, 2.0);
        assert_eq!(strokes[2].0.verbs()[0], PathVerb::MoveTo(Point::new(4.0, 8.0)));
        let run = list.texts().next().unwrap();
        assert_eq!(run.origin.x, 12.0 + 8.0);
    }

    #[test]
    fn number_field_draws_value_and_two_arrows() {
        let skin = skin();
        let mut list = DisplayList::new();
        skin.number_field(&mut list, button(), CornerFlags::NONE, WidgetState::Default, Some("W"), Some("3"));
        assert_eq!(list.texts().next().unwrap().text, "W: 3");
        let arrows: Vec<_> = list.fills().skip(1).collect();
        assert_eq!(arrows.len(), 2);
        assert_eq!(arrows[0].0.verbs()[0], PathVerb::MoveTo(Point::new(8.0, 10.0)));
        assert_eq!(arrows[0].0.verbs()[1], PathVerb::LineTo(Point::new(12.0, 6.0)));
        assert_eq!(arrows[1].0.verbs()[0], PathVerb::MoveTo(Point::new(92.0, 10.0)));
        assert_eq!(arrows[1].0.verbs()[1], PathVerb::LineTo(Point::new(88.0, 14.0)));
    }

    #[test]
    fn slider_clips_progress_fill() {
        let skin = skin();
        let mut list = DisplayList::new();
        skin.slider(&mut list, button(), CornerFlags::NONE, WidgetState::Default, 0.5, Some("S"), Some("1"));
        let clip = list.commands().iter().find_map(|c| match c {
            DrawCommand::PushClip(r) => Some(*r),
            _ => None,
        });
        assert_eq!(clip, Some(Rect::new(0.0, 0.0, 8.0 + 92.0 * 0.5, 21.0)));
        assert!(list.commands().iter().any(|c| *c == DrawCommand::PopClip));
    }

    #[test]
    fn scroll_bar_handle_is_lighter_when_active() {
        let skin = skin();
        let handle_top = |state| {
            let mut list = DisplayList::new();
            skin.scroll_bar(&mut list, Rect::new(0.0, 0.0, 13.0, 100.0), state, 0.0, 0.5);
            let top = match list.fills().nth(1).map(|(_, p, _)| *p) {
                Some(Paint::Linear { from, .. }) => from,
                other => panic!("unexpected paint {other:?}"),
            };
            top
        };
        assert!(handle_top(WidgetState::Active).r > handle_top(WidgetState::Default).r);
    }

    #[test]
    fn menu_background_has_shadow_last() {
        let skin = skin();
        let mut list = DisplayList::new();
        skin.menu_background(&mut list, Rect::new(0.0, 0.0, 80.0, 60.0), CornerFlags::TOP);
        match list.commands().last() {
            Some(DrawCommand::FillPath { rule, .. }) => assert_eq!(*rule, FillRule::EvenOdd),
            other => panic!("unexpected command {other:?}"),
        }
        skin.tooltip_background(&mut list, Rect::new(0.0, 0.0, 80.0, 60.0));
        assert_eq!(list.fills().filter(|(_, _, r)| *r == FillRule::EvenOdd).count(), 2);
    }

    #[test]
    fn menu_item_highlight_and_text_color() {
        let skin = skin();
        let t = skin.theme().menu_item;
        let mut list = DisplayList::new();
        skin.menu_item(&mut list, button(), WidgetState::Default, None, Some("Open"));
        assert_eq!(list.fills().count(), 0);
        assert_eq!(list.texts().next().unwrap().color, t.text_color);

        list.clear();
        skin.menu_item(&mut list, button(), WidgetState::Hover, None, Some("Open"));
        assert_eq!(list.fills().count(), 1);
        assert_eq!(list.texts().next().unwrap().color, t.text_selected_color);
    }

    #[test]
    fn node_wire_tangent_follows_curving() {
        let skin = skin();
        let mut list = DisplayList::new();
        skin.node_wire(&mut list, Point::new(0.0, 0.0), Point::new(100.0, 40.0), WidgetState::Default, WidgetState::Hover);
        let strokes: Vec<_> = list.strokes().collect();
        assert_eq!(strokes.len(), 2);
        assert_eq!(strokes[0].2, NODE_WIRE_OUTLINE_WIDTH);
        assert_eq!(strokes[1].2, NODE_WIRE_WIDTH);
        match strokes[0].0.verbs()[1] {
            PathVerb::CubicTo { c1, c2, .. } => {
                assert_eq!(c1, Point::new(50.0, 0.0));
                assert_eq!(c2, Point::new(50.0, 40.0));
            }
            other => panic!("unexpected verb {other:?}"),
        }
        let node = skin.theme().node;
        match strokes[1].1 {
            Paint::Linear { from, to, .. } => assert_eq!((*from, *to), (node.wires_color, node.wire_select_color)),
            other => panic!("unexpected paint {other:?}"),
        }
    }

    #[test]
    fn node_port_lightens_when_not_default() {
        let skin = skin();
        let color = Color::rgb(0.5, 0.5, 0.5);
        let mut list = DisplayList::new();
        skin.node_port(&mut list, 10.0, 10.0, WidgetState::Hover, color);
        let (_, paint, _) = list.fills().next().unwrap();
        assert_eq!(*paint, Paint::Solid(offset_color(color, HOVER_SHADE)));
    }

    #[test]
    fn node_background_border_depends_on_state() {
        let skin = skin();
        let node = skin.theme().node;
        let border = |state| {
            let mut list = DisplayList::new();
            skin.node_background(&mut list, Rect::new(0.0, 0.0, 120.0, 80.0), state, None, Some("Mix"), Color::gray(0.4));
            let (_, paint, _) = list.strokes().next().unwrap();
            *paint
        };
        assert_eq!(border(WidgetState::Default), Paint::Solid(transparent(Color::BLACK)));
        assert_eq!(border(WidgetState::Hover), Paint::Solid(transparent(node.node_selected_color)));
        assert_eq!(border(WidgetState::Active), Paint::Solid(transparent(node.active_node_color)));
    }

    #[test]
    fn splitter_draws_three_sets_of_six_lines() {
        let skin = skin();
        let mut list = DisplayList::new();
        skin.splitter_widgets(&mut list, Rect::new(0.0, 0.0, 200.0, 100.0));
        let strokes: Vec<_> = list.strokes().collect();
        assert_eq!(strokes.len(), 3);
        for (path, _, _) in strokes {
            assert_eq!(path.line_count(), 6);
        }
    }

    #[test]
    fn join_overlay_is_eleven_point_polygon() {
        let skin = skin();
        let mut list = DisplayList::new();
        skin.join_area_overlay(&mut list, Rect::new(10.0, 20.0, 100.0, 40.0), false, false);
        skin.join_area_overlay(&mut list, Rect::new(10.0, 20.0, 100.0, 40.0), true, true);
        for (path, paint, _) in list.fills() {
            assert_eq!(path.line_count(), 10);
            assert_eq!(*paint, Paint::Solid(Color::gray_alpha(0.0, 0.3)));
        }
        let (first, _, _) = list.fills().next().unwrap();
        assert_eq!(first.verbs()[0], PathVerb::MoveTo(Point::new(10.0, 20.0)));
    }

    #[test]
    fn glyph_shapes() {
        let mut list = DisplayList::new();
        up_down_arrow(&mut list, 0.0, 10.0, 5.0, Color::WHITE);
        node_arrow_down(&mut list, 5.0, 10.0, 9.0, Color::WHITE);
        let fills: Vec<_> = list.fills().collect();
        assert_eq!(fills[0].0.line_count(), 4);
        assert_eq!(fills[1].0.verbs()[1], PathVerb::LineTo(Point::new(9.5, 1.0)));
    }
}
