//! Interaction state to color mapping.
//!
//! Every widget composer derives its fill gradient and text color from
//! here, so a theme record plus a [`WidgetState`] fully determine a widget's
//! colors.

use crate::color::Color;
use crate::theme::{NodeTheme, WidgetTheme};

/// Alpha multiplier applied by [`transparent`].
pub const TRANSPARENT_ALPHA: f32 = 0.9;
/// Shade delta for the light and dark halves of the bevel.
pub const BEVEL_SHADE: i32 = 30;
/// Shade delta for the inset bevel highlight.
pub const INSET_BEVEL_SHADE: i32 = 30;
/// Extra lightening applied to the inner color of hovered widgets.
pub const HOVER_SHADE: i32 = 15;
/// Shade delta for splitter widget lines.
pub const SPLITTER_SHADE: i32 = 100;
/// Alpha multiplier for disabled widgets.
pub const DISABLED_ALPHA: f32 = 0.5;

/// Interaction intensity, ordered `Default < Hover < Active`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum WidgetState {
    #[default]
    Default,
    Hover,
    Active,
}

impl WidgetState {
    pub const ALL: [WidgetState; 3] = [WidgetState::Default, WidgetState::Hover, WidgetState::Active];
}

/// Scale the RGB channels by `1 + delta / 255`, clamped to `[0, 1]`.
///
/// `delta` saturates at ±100. Alpha is left alone.
pub fn offset_color(color: Color, delta: i32) -> Color {
    if delta == 0 {
        return color;
    }
    let f = 1.0 + delta.clamp(-100, 100) as f32 / 255.0;
    Color {
        r: (color.r * f).clamp(0.0, 1.0),
        g: (color.g * f).clamp(0.0, 1.0),
        b: (color.b * f).clamp(0.0, 1.0),
        a: color.a,
    }
}

pub fn transparent(color: Color) -> Color {
    color.with_alpha(color.a * TRANSPARENT_ALPHA)
}

/// Top and bottom stops of a widget's inner gradient.
pub fn inner_colors(theme: &WidgetTheme, state: WidgetState, flip_active: bool) -> (Color, Color) {
    match state {
        WidgetState::Default => (
            offset_color(theme.inner_color, theme.shade_top),
            offset_color(theme.inner_color, theme.shade_down),
        ),
        WidgetState::Hover => {
            let inner = offset_color(theme.inner_color, HOVER_SHADE);
            (offset_color(inner, theme.shade_top), offset_color(inner, theme.shade_down))
        }
        WidgetState::Active => {
            let top = offset_color(theme.inner_selected_color, theme.shade_top);
            let down = offset_color(theme.inner_selected_color, theme.shade_down);
            if flip_active {
                (down, top)
            } else {
                (top, down)
            }
        }
    }
}

pub fn text_color(theme: &WidgetTheme, state: WidgetState) -> Color {
    if state == WidgetState::Active {
        theme.text_selected_color
    } else {
        theme.text_color
    }
}

pub fn node_wire_color(theme: &NodeTheme, state: WidgetState) -> Color {
    match state {
        WidgetState::Default => theme.wires_color,
        WidgetState::Hover => theme.wire_select_color,
        WidgetState::Active => theme.active_node_color,
    }
}
