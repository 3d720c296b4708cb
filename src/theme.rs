//! Theme records and loader.
//!
//! A [`Theme`] holds one [`WidgetTheme`] per widget class plus the node
//! editor colors. Themes are plain values: load one from TOML, hand it to a
//! [`Skin`](crate::skin::Skin), replace it wholesale when it changes.

use std::path::Path;

use log::info;
use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::error::SkinError;

/// Colors and gradient shades for one widget class.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WidgetTheme {
    pub outline_color: Color,
    /// Check marks, slider progress, selection highlights.
    pub item_color: Color,
    pub inner_color: Color,
    pub inner_selected_color: Color,
    pub text_color: Color,
    pub text_selected_color: Color,
    /// Gradient delta at the top edge, -100..100.
    pub shade_top: i32,
    /// Gradient delta at the bottom edge, -100..100.
    pub shade_down: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NodeTheme {
    pub node_selected_color: Color,
    pub wires_color: Color,
    pub text_selected_color: Color,
    pub active_node_color: Color,
    pub wire_select_color: Color,
    pub node_backdrop_color: Color,
    /// Wire tangent length in tenths of the endpoint distance, 0..10.
    pub noodle_curving: i32,
}

/// Widget classes with their own [`WidgetTheme`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WidgetClass {
    Regular,
    Tool,
    Radio,
    TextField,
    Option,
    Choice,
    NumberField,
    Slider,
    ScrollBar,
    Tooltip,
    Menu,
    MenuItem,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    pub background_color: Color,
    pub regular: WidgetTheme,
    pub tool: WidgetTheme,
    pub radio: WidgetTheme,
    pub text_field: WidgetTheme,
    pub option: WidgetTheme,
    pub choice: WidgetTheme,
    pub number_field: WidgetTheme,
    pub slider: WidgetTheme,
    pub scroll_bar: WidgetTheme,
    pub tooltip: WidgetTheme,
    pub menu: WidgetTheme,
    pub menu_item: WidgetTheme,
    pub node: NodeTheme,
}

const SELECTED_BLUE: Color = Color::rgb(0.337, 0.502, 0.761);

impl Default for Theme {
    /// The Blender 2.6 look.
    fn default() -> Self {
        let regular = WidgetTheme {
            outline_color: Color::gray(0.098),
            item_color: Color::gray(0.098),
            inner_color: Color::gray(0.6),
            inner_selected_color: Color::gray(0.392),
            text_color: Color::BLACK,
            text_selected_color: Color::WHITE,
            shade_top: 0,
            shade_down: 0,
        };
        let option = WidgetTheme {
            outline_color: Color::BLACK,
            item_color: Color::WHITE,
            inner_color: Color::gray(0.275),
            inner_selected_color: Color::gray(0.275),
            text_color: Color::BLACK,
            text_selected_color: Color::WHITE,
            shade_top: 15,
            shade_down: -15,
        };
        let number_field = WidgetTheme {
            outline_color: Color::gray(0.098),
            item_color: Color::gray(0.353),
            inner_color: Color::gray(0.706),
            inner_selected_color: Color::gray(0.6),
            text_color: Color::BLACK,
            text_selected_color: Color::WHITE,
            shade_top: -20,
            shade_down: 0,
        };
        let menu = WidgetTheme {
            outline_color: Color::BLACK,
            item_color: Color::gray(0.392),
            inner_color: Color::gray_alpha(0.098, 0.902),
            inner_selected_color: Color::gray_alpha(0.176, 0.902),
            text_color: Color::gray(0.627),
            text_selected_color: Color::WHITE,
            shade_top: 0,
            shade_down: 0,
        };

        Theme {
            background_color: Color::gray(0.447),
            regular,
            tool: WidgetTheme { shade_top: 15, shade_down: -15, ..regular },
            radio: WidgetTheme {
                outline_color: Color::BLACK,
                item_color: Color::WHITE,
                inner_color: Color::gray(0.275),
                inner_selected_color: SELECTED_BLUE,
                text_color: Color::WHITE,
                text_selected_color: Color::BLACK,
                shade_top: 15,
                shade_down: -15,
            },
            text_field: WidgetTheme {
                outline_color: Color::gray(0.098),
                item_color: Color::gray(0.353),
                inner_color: Color::gray(0.6),
                inner_selected_color: Color::gray(0.6),
                text_color: Color::BLACK,
                text_selected_color: Color::WHITE,
                shade_top: 0,
                shade_down: 25,
            },
            option,
            choice: WidgetTheme {
                text_color: Color::WHITE,
                text_selected_color: Color::gray(0.8),
                ..option
            },
            number_field,
            slider: WidgetTheme { item_color: Color::gray(0.502), ..number_field },
            scroll_bar: WidgetTheme {
                outline_color: Color::gray(0.196),
                item_color: Color::gray(0.502),
                inner_color: Color::gray_alpha(0.314, 0.706),
                inner_selected_color: Color::gray_alpha(0.392, 0.706),
                text_color: Color::BLACK,
                text_selected_color: Color::WHITE,
                shade_top: 5,
                shade_down: -5,
            },
            tooltip: menu,
            menu,
            menu_item: WidgetTheme {
                outline_color: Color::BLACK,
                item_color: Color::gray_alpha(0.675, 0.502),
                inner_color: Color::TRANSPARENT,
                inner_selected_color: SELECTED_BLUE,
                text_color: Color::WHITE,
                text_selected_color: Color::BLACK,
                shade_top: 38,
                shade_down: 0,
            },
            node: NodeTheme::default(),
        }
    }
}

impl Default for NodeTheme {
    fn default() -> Self {
        NodeTheme {
            node_selected_color: Color::rgb(0.945, 0.345, 0.0),
            wires_color: Color::BLACK,
            text_selected_color: Color::rgb(0.498, 0.439, 0.439),
            active_node_color: Color::rgb(1.0, 0.667, 0.251),
            wire_select_color: Color::WHITE,
            node_backdrop_color: Color::gray_alpha(0.608, 0.627),
            noodle_curving: 5,
        }
    }
}

impl Theme {
    pub fn widget(&self, class: WidgetClass) -> &WidgetTheme {
        match class {
            WidgetClass::Regular => &self.regular,
            WidgetClass::Tool => &self.tool,
            WidgetClass::Radio => &self.radio,
            WidgetClass::TextField => &self.text_field,
            WidgetClass::Option => &self.option,
            WidgetClass::Choice => &self.choice,
            WidgetClass::NumberField => &self.number_field,
            WidgetClass::Slider => &self.slider,
            WidgetClass::ScrollBar => &self.scroll_bar,
            WidgetClass::Tooltip => &self.tooltip,
            WidgetClass::Menu => &self.menu,
            WidgetClass::MenuItem => &self.menu_item,
        }
    }

    /// Parse a theme from TOML. Missing tables keep their default values.
    pub fn from_toml_str(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    pub fn load(path: &Path) -> Result<Self, SkinError> {
        let content = std::fs::read_to_string(path).map_err(|source| SkinError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let theme = Self::from_toml_str(&content).map_err(|source| SkinError::ThemeParse {
            path: path.to_path_buf(),
            source,
        })?;
        info!("Loaded theme from {}", path.display());
        Ok(theme)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_is_default_theme() {
        assert_eq!(Theme::from_toml_str("").unwrap(), Theme::default());
    }

    #[test]
    fn partial_override_keeps_other_classes() {
        let toml_str = r##"
background_color = "#202020"

[slider]
outline_color = "#000000"
item_color = "#ff0000"
inner_color = "#404040"
inner_selected_color = "#505050"
text_color = "#ffffff"
text_selected_color = "#000000"
shade_top = -10
shade_down = 10

[node]
node_selected_color = "#ff8800"
wires_color = "#000000"
text_selected_color = "#ffffff"
active_node_color = "#ffaa40"
wire_select_color = "#ffffff"
node_backdrop_color = "#9b9b9ba0"
noodle_curving = 3
"##;
        let theme = Theme::from_toml_str(toml_str).unwrap();
        let defaults = Theme::default();
        assert_eq!(theme.background_color.to_rgba8(), [0x20, 0x20, 0x20, 255]);
        assert_eq!(theme.slider.item_color.to_rgba8(), [255, 0, 0, 255]);
        assert_eq!(theme.slider.shade_top, -10);
        assert_eq!(theme.node.noodle_curving, 3);
        assert_eq!(theme.regular, defaults.regular);
        assert_eq!(theme.menu_item, defaults.menu_item);
    }

    #[test]
    fn incomplete_table_is_rejected() {
        let toml_str = r##"
[tool]
outline_color = "#000000"
"##;
        assert!(Theme::from_toml_str(toml_str).is_err());
    }

    #[test]
    fn bad_color_is_rejected() {
        assert!(Theme::from_toml_str("background_color = \"blue\"").is_err());
    }

    #[test]
    fn serialized_theme_parses_back() {
        let theme = Theme::default();
        let text = theme.to_toml_string().unwrap();
        let back = Theme::from_toml_str(&text).unwrap();
        assert_eq!(back.tool.shade_top, 15);
        assert_eq!(back.node.noodle_curving, 5);
        assert_eq!(back.menu.inner_color.to_rgba8(), theme.menu.inner_color.to_rgba8());
    }

    #[test]
    fn widget_lookup_by_class() {
        let theme = Theme::default();
        assert_eq!(theme.widget(WidgetClass::NumberField), &theme.number_field);
        assert_eq!(theme.widget(WidgetClass::Tooltip), &theme.tooltip);
    }
}
