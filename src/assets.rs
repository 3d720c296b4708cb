//! Loading the UI font and the icon sheet from disk.

use std::path::Path;

use log::{info, warn};
use tiny_skia::{ColorU8, Pixmap, Transform};

use crate::config::SkinConfig;
use crate::error::SkinError;
use crate::raster::PixmapCanvas;
use crate::skin::Skin;
use crate::theme::Theme;

fn read(path: &Path) -> Result<Vec<u8>, SkinError> {
    std::fs::read(path).map_err(|source| SkinError::Io { path: path.to_path_buf(), source })
}

pub fn load_font(path: &Path) -> Result<fontdue::Font, SkinError> {
    let data = read(path)?;
    let font = fontdue::Font::from_bytes(data, fontdue::FontSettings::default())
        .map_err(|e| SkinError::Font { path: path.to_path_buf(), details: e.to_string() })?;
    info!("Loaded font from {}", path.display());
    Ok(font)
}

/// Load an image as a premultiplied pixmap. Files ending in `.svg` are
/// rasterized at their natural size; anything else is decoded as PNG.
pub fn load_image(path: &Path) -> Result<Pixmap, SkinError> {
    let data = read(path)?;
    let is_svg = path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("svg"));
    let pixmap = if is_svg { rasterize_svg(&data) } else { decode_png(&data) }
        .map_err(|details| SkinError::Image { path: path.to_path_buf(), details })?;
    info!("Loaded image {}x{} from {}", pixmap.width(), pixmap.height(), path.display());
    Ok(pixmap)
}

pub fn decode_png(data: &[u8]) -> Result<Pixmap, String> {
    let mut decoder = png::Decoder::new(std::io::Cursor::new(data));
    decoder.set_transformations(png::Transformations::EXPAND | png::Transformations::STRIP_16);
    let mut reader = decoder.read_info().map_err(|e| e.to_string())?;
    let mut buf = vec![0u8; reader.output_buffer_size()];
    let frame = reader.next_frame(&mut buf).map_err(|e| e.to_string())?;

    let channels = match frame.color_type {
        png::ColorType::Rgba => 4,
        png::ColorType::Rgb => 3,
        png::ColorType::GrayscaleAlpha => 2,
        png::ColorType::Grayscale => 1,
        other => return Err(format!("unsupported color type {other:?}")),
    };
    let mut pixmap =
        Pixmap::new(frame.width, frame.height).ok_or_else(|| format!("bad size {}x{}", frame.width, frame.height))?;

    let src = &buf[..frame.buffer_size()];
    let row_len = frame.line_size;
    for (y, row) in src.chunks_exact(row_len).enumerate() {
        for (x, px) in row.chunks_exact(channels).take(frame.width as usize).enumerate() {
            let (r, g, b, a) = match *px {
                [r, g, b, a] => (r, g, b, a),
                [r, g, b] => (r, g, b, 255),
                [v, a] => (v, v, v, a),
                [v] => (v, v, v, 255),
                _ => continue,
            };
            let i = y * frame.width as usize + x;
            pixmap.pixels_mut()[i] = ColorU8::from_rgba(r, g, b, a).premultiply();
        }
    }
    Ok(pixmap)
}

pub fn rasterize_svg(data: &[u8]) -> Result<Pixmap, String> {
    let opts = resvg::usvg::Options::default();
    let tree = resvg::usvg::Tree::from_data(data, &opts).map_err(|e| e.to_string())?;
    let size = tree.size().to_int_size();
    let mut pixmap =
        Pixmap::new(size.width(), size.height()).ok_or_else(|| format!("bad size {}x{}", size.width(), size.height()))?;
    resvg::render(&tree, Transform::identity(), &mut pixmap.as_mut());
    Ok(pixmap)
}

/// Apply the theme, font and icon sheet named by `config`.
///
/// Each resource is optional: a missing or broken file is logged and the
/// skin keeps what it had.
pub fn apply_config(config: &SkinConfig, skin: &mut Skin, canvas: &mut PixmapCanvas) {
    skin.set_font_size(config.font_size);

    if let Some(path) = &config.theme {
        match Theme::load(path) {
            Ok(theme) => skin.set_theme(theme),
            Err(e) => warn!("{e}, keeping current theme"),
        }
    }

    if let Some(path) = &config.font {
        match load_font(path) {
            Ok(font) => {
                canvas.set_font(font.clone());
                skin.set_font(Box::new(font));
            }
            Err(e) => warn!("{e}, labels will not be drawn"),
        }
    }

    if let Some(path) = &config.icon_sheet {
        match load_image(path) {
            Ok(sheet) => {
                let id = canvas.register_image(sheet);
                skin.set_icon_image(id);
            }
            Err(e) => warn!("{e}, icons will not be drawn"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode_png(w: u32, h: u32, color: png::ColorType, data: &[u8]) -> Vec<u8> {
        let mut buf = Vec::new();
        {
            let mut encoder = png::Encoder::new(&mut buf, w, h);
            encoder.set_color(color);
            encoder.set_depth(png::BitDepth::Eight);
            let mut writer = encoder.write_header().unwrap();
            writer.write_image_data(data).unwrap();
        }
        buf
    }

    #[test]
    fn png_pixels_are_premultiplied() {
        let data = encode_png(2, 1, png::ColorType::Rgba, &[255, 0, 0, 128, 0, 255, 0, 255]);
        let pixmap = decode_png(&data).unwrap();
        assert_eq!((pixmap.width(), pixmap.height()), (2, 1));
        let p = pixmap.pixels()[0];
        assert_eq!((p.red(), p.green(), p.alpha()), (128, 0, 128));
        let q = pixmap.pixels()[1];
        assert_eq!((q.red(), q.green(), q.alpha()), (0, 255, 255));
    }

    #[test]
    fn grayscale_png_expands_to_opaque_gray() {
        let data = encode_png(1, 2, png::ColorType::Grayscale, &[10, 200]);
        let pixmap = decode_png(&data).unwrap();
        let p = pixmap.pixels()[1];
        assert_eq!((p.red(), p.green(), p.blue(), p.alpha()), (200, 200, 200, 255));
    }

    #[test]
    fn garbage_is_an_error() {
        assert!(decode_png(b"not a png").is_err());
        assert!(rasterize_svg(b"<nope").is_err());
    }

    #[test]
    fn svg_renders_at_natural_size() {
        let svg = br##"<svg xmlns="http://www.w3.org/2000/svg" width="8" height="4">
            <rect x="0" y="0" width="4" height="4" fill="#ff0000"/>
        </svg>"##;
        let pixmap = rasterize_svg(svg).unwrap();
        assert_eq!((pixmap.width(), pixmap.height()), (8, 4));
        assert_eq!(pixmap.pixels()[0].red(), 255);
        assert_eq!(pixmap.pixels()[7].alpha(), 0);
    }

    #[test]
    fn missing_files_report_their_path() {
        let path = Path::new("/nonexistent/bevelkit/icons.png");
        match load_image(path) {
            Err(SkinError::Io { path: p, .. }) => assert_eq!(p, path),
            _ => panic!("expected an I/O error"),
        }
        assert!(matches!(load_font(path), Err(SkinError::Io { .. })));
    }

    #[test]
    fn apply_config_skips_missing_resources() {
        let config = SkinConfig {
            theme: Some("/nonexistent/theme.toml".into()),
            font: Some("/nonexistent/font.ttf".into()),
            icon_sheet: Some("/nonexistent/icons.png".into()),
            font_size: 11.0,
        };
        let mut skin = Skin::default();
        let mut canvas = PixmapCanvas::new(4, 4).unwrap();
        apply_config(&config, &mut skin, &mut canvas);
        assert_eq!(skin.font_size(), 11.0);
        assert!(skin.font().is_none());
        assert!(skin.icon_image().is_none());
        assert_eq!(skin.theme(), &Theme::default());
    }
}
