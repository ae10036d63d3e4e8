#![forbid(unsafe_code)]

//! Cell types.
//!
//! A [`Cell`] is one terminal column of one row. Wide characters (emoji
//! icons, CJK) occupy their head cell plus one [`CellContent::Continuation`]
//! cell, which the presenter skips when writing.

use bitflags::bitflags;
use unicode_width::UnicodeWidthChar;

/// Packed RGBA color (`0xRRGGBBAA`).
///
/// Alpha 0 means "unset": the presenter leaves the terminal's default color
/// in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PackedRgba(pub u32);

impl PackedRgba {
    /// Fully transparent (terminal default).
    pub const TRANSPARENT: Self = Self(0);
    /// Opaque black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    /// Opaque white.
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// Create an opaque RGB color.
    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 255)
    }

    /// Create an RGBA color with explicit alpha.
    #[inline]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self(((r as u32) << 24) | ((g as u32) << 16) | ((b as u32) << 8) | (a as u32))
    }

    #[inline]
    pub const fn r(self) -> u8 {
        (self.0 >> 24) as u8
    }

    #[inline]
    pub const fn g(self) -> u8 {
        (self.0 >> 16) as u8
    }

    #[inline]
    pub const fn b(self) -> u8 {
        (self.0 >> 8) as u8
    }

    #[inline]
    pub const fn a(self) -> u8 {
        self.0 as u8
    }

    /// Whether the color is fully transparent.
    #[inline]
    pub const fn is_transparent(self) -> bool {
        self.a() == 0
    }
}

bitflags! {
    /// Text style attributes.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct StyleFlags: u8 {
        const BOLD = 0b0000_0001;
        const DIM = 0b0000_0010;
        const ITALIC = 0b0000_0100;
        const UNDERLINE = 0b0000_1000;
        const REVERSE = 0b0001_0000;
    }
}

/// What a cell displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CellContent {
    /// Nothing drawn; presented as a space.
    #[default]
    Empty,
    /// A single character.
    Char(char),
    /// Trailing half of a wide character in the cell to the left.
    Continuation,
}

impl CellContent {
    #[inline]
    pub const fn from_char(c: char) -> Self {
        Self::Char(c)
    }

    /// Display width of the content (0 for continuation cells).
    pub fn width(self) -> usize {
        match self {
            Self::Empty => 1,
            Self::Char(c) => UnicodeWidthChar::width(c).unwrap_or(0),
            Self::Continuation => 0,
        }
    }

    /// The character, if any.
    pub const fn as_char(self) -> Option<char> {
        match self {
            Self::Char(c) => Some(c),
            _ => None,
        }
    }

    #[inline]
    pub const fn is_continuation(self) -> bool {
        matches!(self, Self::Continuation)
    }
}

/// One grid cell: content plus colors and style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Cell {
    /// Character or continuation marker.
    pub content: CellContent,
    /// Foreground color.
    pub fg: PackedRgba,
    /// Background color.
    pub bg: PackedRgba,
    /// Style flags.
    pub attrs: StyleFlags,
}

impl Cell {
    /// A cell containing `c` with default colors.
    #[inline]
    pub const fn from_char(c: char) -> Self {
        Self {
            content: CellContent::Char(c),
            fg: PackedRgba::TRANSPARENT,
            bg: PackedRgba::TRANSPARENT,
            attrs: StyleFlags::empty(),
        }
    }

    #[must_use]
    pub const fn with_fg(mut self, fg: PackedRgba) -> Self {
        self.fg = fg;
        self
    }

    #[must_use]
    pub const fn with_bg(mut self, bg: PackedRgba) -> Self {
        self.bg = bg;
        self
    }

    #[must_use]
    pub const fn with_attrs(mut self, attrs: StyleFlags) -> Self {
        self.attrs = attrs;
        self
    }

    #[must_use]
    pub const fn with_content(mut self, content: CellContent) -> Self {
        self.content = content;
        self
    }

    /// Same colors and style, but blank content.
    #[must_use]
    pub const fn blank(self) -> Self {
        self.with_content(CellContent::Empty)
    }
}
