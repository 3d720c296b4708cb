//! Gallery renderer: draws every widget kind in each state to a PNG.
//!
//! Usage: cargo run --bin preview [-- --config PATH] [--watch]
//!
//! Outputs:
//!   preview-output/gallery.png   all widgets, one column per state
//!
//! With `--watch` the gallery is re-rendered whenever the configured theme
//! file changes.

use std::path::{Path, PathBuf};

use bevelkit::assets::apply_config;
use bevelkit::config::SkinConfig;
use bevelkit::icon_ids;
use bevelkit::label::CaretSpan;
use bevelkit::watcher::watch_theme;
use bevelkit::widgets::{NODE_TITLE_HEIGHT, SCROLLBAR_HEIGHT, SCROLLBAR_WIDTH};
use bevelkit::{Color, CornerFlags, PixmapCanvas, Point, Rect, Skin, WidgetState};

const GALLERY_W: u32 = 660;
const GALLERY_H: u32 = 600;
const COLUMN_W: f32 = 200.0;
const ROW_STEP: f32 = 25.0;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = std::env::args().collect();
    let watch = args.iter().any(|a| a == "--watch");
    let config = match args.iter().skip_while(|a| *a != "--config").nth(1) {
        Some(path) => SkinConfig::load(Path::new(path)).unwrap_or_else(|e| {
            log::warn!("{e}, using defaults");
            SkinConfig::default()
        }),
        None => SkinConfig::find_and_load(),
    };

    let mut skin = Skin::default();
    let mut canvas = PixmapCanvas::new(GALLERY_W, GALLERY_H).expect("gallery size");
    apply_config(&config, &mut skin, &mut canvas);
    if skin.font().is_none() {
        println!("no font configured, labels are skipped");
    }

    let out = PathBuf::from("preview-output");
    std::fs::create_dir_all(&out).expect("create preview-output");
    let target = out.join("gallery.png");

    render_gallery(&skin, &mut canvas);
    save_rgba_png(&target, GALLERY_W, GALLERY_H, &canvas.to_rgba8());
    println!("wrote {}", target.display());

    if !watch {
        return;
    }
    let Some(theme_path) = config.theme.clone() else {
        eprintln!("--watch needs a theme file in the config");
        std::process::exit(1);
    };

    let (tx, rx) = std::sync::mpsc::channel();
    std::thread::spawn(move || {
        if let Err(e) = watch_theme(&theme_path, tx) {
            log::error!("theme watcher stopped: {e}");
        }
    });
    for theme in rx {
        skin.set_theme(theme);
        render_gallery(&skin, &mut canvas);
        save_rgba_png(&target, GALLERY_W, GALLERY_H, &canvas.to_rgba8());
        println!("re-rendered {}", target.display());
    }
}

fn render_gallery(skin: &Skin, canvas: &mut PixmapCanvas) {
    canvas.clear(Color::TRANSPARENT);
    skin.background(canvas, Rect::new(0.0, 0.0, GALLERY_W as f32, GALLERY_H as f32));

    for (col, state) in WidgetState::ALL.into_iter().enumerate() {
        let x = 10.0 + col as f32 * (COLUMN_W + 10.0);
        draw_state_column(skin, canvas, x, 10.0, state);
    }
    draw_button_group(skin, canvas, 10.0, 300.0);
    draw_menus(skin, canvas, 10.0, 340.0);
    draw_nodes(skin, canvas, 300.0, 340.0);
}

fn draw_state_column(skin: &Skin, canvas: &mut PixmapCanvas, x: f32, y: f32, state: WidgetState) {
    let none = CornerFlags::NONE;
    let row = |i: usize| Rect::new(x, y + i as f32 * ROW_STEP, COLUMN_W, 21.0);
    let name = format!("{state:?}");

    skin.label(canvas, row(0), Some(icon_ids::FILE_TICK), Some(&name));
    skin.tool_button(canvas, row(1), none, state, Some(icon_ids::PLUS), Some("Tool"));
    skin.radio_button(canvas, row(2), none, state, None, Some("Radio"));
    skin.text_field(canvas, row(3), none, state, None, "Editable text", CaretSpan::selection(0, 8));
    skin.option_button(canvas, row(4), state, Some("Option"));
    skin.choice_button(canvas, row(5), none, state, None, Some("Choice"));
    skin.color_button(canvas, row(6), none, Color::rgb(0.8, 0.3, 0.2));
    skin.number_field(canvas, row(7), none, state, Some("Width"), Some("42"));
    skin.slider(canvas, row(8), none, state, 0.35, Some("Opacity"), Some("35%"));
    let track = row(9);
    skin.scroll_bar(canvas, Rect::new(track.x, track.y, track.w, SCROLLBAR_HEIGHT), state, 0.3, 0.25);
    skin.menu_item(canvas, row(10), state, Some(icon_ids::FILE_FOLDER), Some("Menu item"));
}

/// Buttons sharing edges: the joined corners are squared off.
fn draw_button_group(skin: &Skin, canvas: &mut PixmapCanvas, x: f32, y: f32) {
    let labels = ["Left", "Middle", "Right"];
    let flags = [CornerFlags::RIGHT, CornerFlags::LEFT | CornerFlags::RIGHT, CornerFlags::LEFT];
    for (i, (label, flags)) in labels.iter().zip(flags).enumerate() {
        let rect = Rect::new(x + i as f32 * 70.0, y, 71.0, 21.0);
        skin.radio_button(canvas, rect, flags, WidgetState::Default, None, Some(*label));
    }
}

fn draw_menus(skin: &Skin, canvas: &mut PixmapCanvas, x: f32, y: f32) {
    skin.menu_background(canvas, Rect::new(x, y, 160.0, 100.0), CornerFlags::NONE);
    skin.menu_label(canvas, Rect::new(x, y + 4.0, 160.0, 21.0), None, Some("File"));
    let items = [("New", WidgetState::Default), ("Open", WidgetState::Hover), ("Save", WidgetState::Default)];
    for (i, (label, state)) in items.into_iter().enumerate() {
        let rect = Rect::new(x, y + 25.0 + i as f32 * 21.0, 160.0, 21.0);
        skin.menu_item(canvas, rect, state, None, Some(label));
    }

    skin.tooltip_background(canvas, Rect::new(x, y + 130.0, 200.0, 44.0));
    skin.label(canvas, Rect::new(x, y + 130.0, 200.0, 44.0), None, Some("Tooltips wrap long text onto more rows"));

    skin.scroll_bar(canvas, Rect::new(x + 230.0, y, SCROLLBAR_WIDTH, 200.0), WidgetState::Active, 0.6, 0.3);
}

fn draw_nodes(skin: &Skin, canvas: &mut PixmapCanvas, x: f32, y: f32) {
    let title = Color::rgb(0.45, 0.32, 0.55);
    let a = Rect::new(x, y, 120.0, 80.0);
    let b = Rect::new(x + 200.0, y + 60.0, 120.0, 80.0);
    skin.node_background(canvas, a, WidgetState::Default, None, Some("Source"), title);
    skin.node_background(canvas, b, WidgetState::Active, None, Some("Mix"), title);

    let out_port = Point::new(a.right(), a.y + NODE_TITLE_HEIGHT + 20.0);
    let in_port = Point::new(b.x, b.y + NODE_TITLE_HEIGHT + 20.0);
    skin.node_wire(canvas, out_port, in_port, WidgetState::Default, WidgetState::Active);
    skin.node_port(canvas, out_port.x, out_port.y, WidgetState::Default, Color::rgb(0.78, 0.78, 0.16));
    skin.node_port(canvas, in_port.x, in_port.y, WidgetState::Hover, Color::rgb(0.78, 0.78, 0.16));

    let area = Rect::new(x, y + 160.0, 150.0, 80.0);
    skin.splitter_widgets(canvas, area);
    skin.join_area_overlay(canvas, Rect::new(x + 170.0, y + 160.0, 150.0, 80.0), false, false);
}

fn save_rgba_png(path: &Path, w: u32, h: u32, rgba: &[u8]) {
    let file = std::fs::File::create(path).expect("create png");
    let buf = std::io::BufWriter::new(file);
    let mut encoder = png::Encoder::new(buf, w, h);
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);
    let mut writer = encoder.write_header().expect("png header");
    writer.write_image_data(rgba).expect("png data");
}
