//! The renderer context every draw call goes through.

use crate::canvas::ImageId;
use crate::font::FontMetrics;
use crate::label::LABEL_FONT_SIZE;
use crate::theme::Theme;

/// Active theme plus the registered icon sheet and UI font.
///
/// Widget drawing borrows the skin immutably; replacing the theme or the
/// resources needs `&mut`, so it cannot happen in the middle of a draw.
pub struct Skin {
    theme: Theme,
    icon_image: Option<ImageId>,
    font: Option<Box<dyn FontMetrics>>,
    font_size: f32,
}

impl Skin {
    pub fn new(theme: Theme) -> Self {
        Skin { theme, icon_image: None, font: None, font_size: LABEL_FONT_SIZE }
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Replace the whole theme.
    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    pub fn icon_image(&self) -> Option<ImageId> {
        self.icon_image
    }

    /// Register the icon sheet. Until then icons are skipped.
    pub fn set_icon_image(&mut self, image: ImageId) {
        self.icon_image = Some(image);
    }

    pub fn font(&self) -> Option<&dyn FontMetrics> {
        self.font.as_deref()
    }

    /// Register the font used to measure labels. Until then text is skipped.
    pub fn set_font(&mut self, font: Box<dyn FontMetrics>) {
        self.font = Some(font);
    }

    pub fn font_size(&self) -> f32 {
        self.font_size
    }

    pub fn set_font_size(&mut self, size: f32) {
        self.font_size = size;
    }
}

impl Default for Skin {
    fn default() -> Self {
        Skin::new(Theme::default())
    }
}

impl std::fmt::Debug for Skin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Skin")
            .field("icon_image", &self.icon_image)
            .field("font", &self.font.is_some())
            .field("font_size", &self.font_size)
            .finish_non_exhaustive()
    }
}
