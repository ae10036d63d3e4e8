#![forbid(unsafe_code)]

//! Colors and tile styles.
//!
//! The palette follows the original web manual: a near-black page, gray
//! tiles, a dark-blue active tile with a bright blue border, and one accent
//! color per section icon.

use academy_render::cell::PackedRgba;
use academy_widgets::{BorderType, Style};

pub mod bg {
    use super::PackedRgba;

    pub const PAGE: PackedRgba = PackedRgba::rgb(17, 24, 39);
    pub const PANEL: PackedRgba = PackedRgba::rgb(31, 41, 55);
    pub const HOVER: PackedRgba = PackedRgba::rgb(55, 65, 81);
    pub const ACTIVE: PackedRgba = PackedRgba::rgb(30, 58, 138);
}

pub mod fg {
    use super::PackedRgba;

    pub const PRIMARY: PackedRgba = PackedRgba::rgb(243, 244, 246);
    pub const BODY: PackedRgba = PackedRgba::rgb(209, 213, 219);
    pub const MUTED: PackedRgba = PackedRgba::rgb(156, 163, 175);
    pub const FAINT: PackedRgba = PackedRgba::rgb(107, 114, 128);
    pub const HEADING: PackedRgba = PackedRgba::rgb(96, 165, 250);
}

pub mod border {
    use super::PackedRgba;

    pub const IDLE: PackedRgba = PackedRgba::rgb(75, 85, 99);
    pub const FOCUS: PackedRgba = PackedRgba::rgb(209, 213, 219);
    pub const ACTIVE: PackedRgba = PackedRgba::rgb(59, 130, 246);
}

pub mod accent {
    use super::PackedRgba;

    pub const BLUE: PackedRgba = PackedRgba::rgb(59, 130, 246);
    pub const PURPLE: PackedRgba = PackedRgba::rgb(168, 85, 247);
    pub const GREEN: PackedRgba = PackedRgba::rgb(34, 197, 94);
    pub const YELLOW: PackedRgba = PackedRgba::rgb(234, 179, 8);
    pub const ORANGE: PackedRgba = PackedRgba::rgb(249, 115, 22);
    pub const AMBER: PackedRgba = PackedRgba::rgb(245, 158, 11);
}

/// Glyph set for icons and borders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Glyphs {
    #[default]
    Unicode,
    Ascii,
}

/// Interaction state of one tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TileState {
    pub active: bool,
    pub hovered: bool,
    pub focused: bool,
}

/// Fill style, border style, and border glyphs for a tile.
pub fn tile_chrome(state: TileState, glyphs: Glyphs) -> (Style, Style, BorderType) {
    let fill = if state.active {
        bg::ACTIVE
    } else if state.hovered {
        bg::HOVER
    } else {
        bg::PANEL
    };
    let border_color = if state.active {
        border::ACTIVE
    } else if state.focused {
        border::FOCUS
    } else {
        border::IDLE
    };
    let border_type = match (glyphs, state.active) {
        (Glyphs::Unicode, true) => BorderType::Heavy,
        (Glyphs::Unicode, false) => BorderType::Rounded,
        (Glyphs::Ascii, true) => BorderType::AsciiHeavy,
        (Glyphs::Ascii, false) => BorderType::Ascii,
    };
    (
        Style::new().bg(fill),
        Style::new().fg(border_color).bg(fill),
        border_type,
    )
}
