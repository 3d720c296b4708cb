//! Icon sheet addressing.
//!
//! The sheet is a fixed grid of 16×16 tiles spaced 21px apart. Ids name a
//! grid cell, with row 0 at the bottom of the image.

use crate::geometry::Rect;

pub const ICON_SHEET_WIDTH: u32 = 602;
pub const ICON_SHEET_HEIGHT: u32 = 640;
pub const ICON_SHEET_GRID: f32 = 21.0;
pub const ICON_SHEET_OFFSET_X: f32 = 5.0;
pub const ICON_SHEET_OFFSET_Y: f32 = 10.0;
pub const ICON_SHEET_RES: f32 = 16.0;
pub const ICON_SHEET_ROWS: u8 = 30;
pub const ICON_SHEET_COLUMNS: u8 = 28;

/// A `(column, row)` cell packed as `column | row << 8`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct IconId(u16);

impl IconId {
    pub const fn new(column: u8, row: u8) -> Self {
        IconId(column as u16 | (row as u16) << 8)
    }

    pub const fn from_packed(packed: u16) -> Self {
        IconId(packed)
    }

    pub const fn packed(self) -> u16 {
        self.0
    }

    pub const fn column(self) -> u8 {
        (self.0 & 0xff) as u8
    }

    pub const fn row(self) -> u8 {
        (self.0 >> 8) as u8
    }

    pub const fn unpack(self) -> (u8, u8) {
        (self.column(), self.row())
    }
}

/// Source tile of `icon` in sheet pixel coordinates.
pub fn icon_source_rect(icon: IconId) -> Rect {
    let (col, row) = icon.unpack();
    let flipped = (ICON_SHEET_ROWS as i32 - 1 - row as i32) as f32;
    Rect::new(
        ICON_SHEET_OFFSET_X + col as f32 * ICON_SHEET_GRID,
        ICON_SHEET_OFFSET_Y + flipped * ICON_SHEET_GRID,
        ICON_SHEET_RES,
        ICON_SHEET_RES,
    )
}
