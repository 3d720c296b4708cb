//! Corner sharpness flags.

use bitflags::bitflags;

bitflags! {
    /// Corners drawn sharp instead of rounded.
    ///
    /// The flags form a closed 4-bit set: `!flags` and `flags ^ other` never
    /// produce bits outside [`CornerFlags::ALL`].
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct CornerFlags: u8 {
        const TOP_LEFT = 1;
        const TOP_RIGHT = 2;
        const DOWN_RIGHT = 4;
        const DOWN_LEFT = 8;

        const ALL = Self::TOP_LEFT.bits() | Self::TOP_RIGHT.bits() | Self::DOWN_RIGHT.bits() | Self::DOWN_LEFT.bits();
        const TOP = Self::TOP_LEFT.bits() | Self::TOP_RIGHT.bits();
        const DOWN = Self::DOWN_LEFT.bits() | Self::DOWN_RIGHT.bits();
        const LEFT = Self::TOP_LEFT.bits() | Self::DOWN_LEFT.bits();
        const RIGHT = Self::TOP_RIGHT.bits() | Self::DOWN_RIGHT.bits();
    }
}

impl CornerFlags {
    /// Flags in corner order: top-left, top-right, down-right, down-left.
    pub const ORDER: [CornerFlags; 4] = [
        CornerFlags::TOP_LEFT,
        CornerFlags::TOP_RIGHT,
        CornerFlags::DOWN_RIGHT,
        CornerFlags::DOWN_LEFT,
    ];

    pub const NONE: CornerFlags = CornerFlags::empty();
}

/// Per-corner radii: `0` for each sharp corner, `r` for the rest.
pub fn select_corners(r: f32, flags: CornerFlags) -> [f32; 4] {
    CornerFlags::ORDER.map(|corner| if flags.contains(corner) { 0.0 } else { r })
}
