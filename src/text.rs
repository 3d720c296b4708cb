//! Glyph position tables and greedy row breaking.
//!
//! Both the forward layout (drawing text and carets) and the inverse
//! hit-test read x positions from the tables built here, so the two always
//! agree on where each character boundary is.

use crate::font::FontMetrics;

/// Characters measured per string. Anything past this is not laid out.
pub const MAX_GLYPHS: usize = 1024;
/// Rows produced by [`break_lines`]. Text past the last row is dropped.
pub const MAX_ROWS: usize = 32;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlyphPosition {
    /// Byte offset of the character in the measured string.
    pub byte: usize,
    /// Pen position before the character.
    pub x: f32,
    pub min_x: f32,
    pub max_x: f32,
}

/// Positions of the first [`MAX_GLYPHS`] characters of `text`, with the pen
/// starting at `x`.
pub fn glyph_positions(font: &dyn FontMetrics, size: f32, text: &str, x: f32) -> Vec<GlyphPosition> {
    let mut pen = x;
    text.char_indices()
        .take(MAX_GLYPHS)
        .map(|(byte, ch)| {
            let advance = font.advance(ch, size);
            let glyph = GlyphPosition { byte, x: pen, min_x: pen, max_x: pen + advance };
            pen += advance;
            glyph
        })
        .collect()
}

/// Total advance of `text`, bounded by [`MAX_GLYPHS`].
pub fn text_width(font: &dyn FontMetrics, size: f32, text: &str) -> f32 {
    text.chars().take(MAX_GLYPHS).map(|ch| font.advance(ch, size)).sum()
}

/// One laid-out row: `text[start..end]` is drawn, `next` is where the
/// following row begins. Whitespace swallowed by a soft wrap lies in
/// `end..next`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextRow {
    pub start: usize,
    pub end: usize,
    pub next: usize,
    pub width: f32,
}

/// Greedy word wrap of `text` into rows no wider than `max_width`.
///
/// `'\n'` always ends a row. A row breaks before the word that would
/// overflow it; a single word wider than `max_width` is split between
/// characters. At most [`MAX_ROWS`] rows are returned.
pub fn break_lines(font: &dyn FontMetrics, size: f32, text: &str, max_width: f32) -> Vec<TextRow> {
    let mut rows = Vec::new();

    let mut start = 0usize;
    let mut start_x = 0.0f32;
    // (byte, pen x) where the current word began / the last word ended
    let mut word_start: Option<(usize, f32)> = None;
    let mut word_end: Option<(usize, f32)> = None;
    let mut in_space = true;
    let mut pen = 0.0f32;
    let mut consumed = 0usize;
    let mut ended_on_newline = false;

    for (i, ch) in text.char_indices().take(MAX_GLYPHS) {
        let advance = font.advance(ch, size);
        consumed = i + ch.len_utf8();
        ended_on_newline = ch == '\n';

        if ch == '\n' {
            rows.push(TextRow { start, end: i, next: i + 1, width: pen - start_x });
            if rows.len() == MAX_ROWS {
                return rows;
            }
            pen += advance;
            start = i + 1;
            start_x = pen;
            word_start = None;
            word_end = None;
            in_space = true;
            continue;
        }

        if ch.is_whitespace() {
            if !in_space {
                word_end = Some((i, pen));
            }
            in_space = true;
            pen += advance;
            continue;
        }

        if in_space {
            word_start = Some((i, pen));
            in_space = false;
        }

        if pen + advance - start_x > max_width && i > start {
            match (word_start, word_end) {
                (Some((ws, ws_x)), Some((we, we_x))) if ws > start && we <= ws => {
                    rows.push(TextRow { start, end: we, next: ws, width: we_x - start_x });
                    start = ws;
                    start_x = ws_x;
                }
                _ => {
                    rows.push(TextRow { start, end: i, next: i, width: pen - start_x });
                    start = i;
                    start_x = pen;
                    word_start = Some((i, pen));
                }
            }
            word_end = None;
            if rows.len() == MAX_ROWS {
                return rows;
            }
        }

        pen += advance;
    }

    if start < consumed {
        rows.push(TextRow { start, end: consumed, next: consumed, width: pen - start_x });
    } else if ended_on_newline {
        rows.push(TextRow { start, end: start, next: start, width: 0.0 });
    }
    rows
}
