//! Blender-style themed widget drawing.
//! Widgets draw through the [`Canvas`] trait; [`PixmapCanvas`] rasterizes
//! with tiny-skia, [`DisplayList`] records for inspection.

pub mod assets;
pub mod boxes;
pub mod canvas;
pub mod color;
pub mod config;
pub mod corners;
pub mod error;
pub mod font;
pub mod geometry;
pub mod icon_ids;
pub mod icons;
pub mod label;
pub mod path;
pub mod raster;
pub mod shading;
pub mod skin;
pub mod text;
pub mod theme;
pub mod watcher;
pub mod widgets;

pub use canvas::{Canvas, DisplayList, FillRule, ImageId, Paint};
pub use color::Color;
pub use config::SkinConfig;
pub use corners::CornerFlags;
pub use error::SkinError;
pub use geometry::{Point, Rect};
pub use icons::IconId;
pub use label::{CaretSpan, TextAlignment};
pub use raster::PixmapCanvas;
pub use shading::WidgetState;
pub use skin::Skin;
pub use theme::Theme;
