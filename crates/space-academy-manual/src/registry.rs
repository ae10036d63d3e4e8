#![forbid(unsafe_code)]

//! Content registry.
//!
//! The registry is an ordered, immutable collection of [`SectionEntry`]
//! values. Insertion order is render order. It is built once per process
//! (see [`ContentRegistry::global`]) and never mutated afterwards.

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use academy_render::cell::PackedRgba;

use crate::content;
use crate::theme;

/// Identifier of a manual section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SectionId {
    Intro,
    Brain,
    Memory,
    Rewards,
    Training,
    Achievements,
}

impl SectionId {
    /// Every section id, in registry order.
    pub const ALL: [SectionId; 6] = [
        SectionId::Intro,
        SectionId::Brain,
        SectionId::Memory,
        SectionId::Rewards,
        SectionId::Training,
        SectionId::Achievements,
    ];

    /// Stable textual key (used on the command line and in logs).
    pub const fn key(self) -> &'static str {
        match self {
            Self::Intro => "intro",
            Self::Brain => "brain",
            Self::Memory => "memory",
            Self::Rewards => "rewards",
            Self::Training => "training",
            Self::Achievements => "achievements",
        }
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Error returned when parsing an unknown section key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseSectionIdError {
    input: String,
}

impl fmt::Display for ParseSectionIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let valid: Vec<&str> = SectionId::ALL.iter().map(|id| id.key()).collect();
        write!(
            f,
            "unknown section '{}' (expected one of: {})",
            self.input,
            valid.join(", ")
        )
    }
}

impl std::error::Error for ParseSectionIdError {}

impl FromStr for SectionId {
    type Err = ParseSectionIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        SectionId::ALL
            .into_iter()
            .find(|id| id.key().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ParseSectionIdError {
                input: s.to_string(),
            })
    }
}

/// Presentational glyph shown next to a section title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Icon {
    Rocket,
    Brain,
    Database,
    Star,
    Zap,
    Trophy,
}

impl Icon {
    /// Emoji rendering (two columns wide).
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Rocket => "🚀",
            Self::Brain => "🧠",
            Self::Database => "💾",
            Self::Star => "⭐",
            Self::Zap => "⚡",
            Self::Trophy => "🏆",
        }
    }

    /// Fallback for terminals without emoji fonts.
    pub const fn ascii(self) -> &'static str {
        match self {
            Self::Rocket => "^",
            Self::Brain => "@",
            Self::Database => "#",
            Self::Star => "*",
            Self::Zap => "~",
            Self::Trophy => "$",
        }
    }

    /// Accent color of the icon.
    pub const fn color(self) -> PackedRgba {
        match self {
            Self::Rocket => theme::accent::BLUE,
            Self::Brain => theme::accent::PURPLE,
            Self::Database => theme::accent::GREEN,
            Self::Star => theme::accent::YELLOW,
            Self::Zap => theme::accent::ORANGE,
            Self::Trophy => theme::accent::AMBER,
        }
    }
}

/// One section of the manual.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionEntry {
    pub id: SectionId,
    pub title: &'static str,
    pub icon: Icon,
    /// Body text; `\n` separates paragraphs and bullet lines.
    pub body: &'static str,
}

/// Ordered, read-only collection of manual sections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentRegistry {
    entries: Vec<SectionEntry>,
}

impl ContentRegistry {
    /// The authored Space Academy manual.
    pub fn standard() -> Self {
        Self {
            entries: content::sections(),
        }
    }

    /// Process-wide registry, built on first use.
    pub fn global() -> &'static ContentRegistry {
        static REGISTRY: OnceLock<ContentRegistry> = OnceLock::new();
        REGISTRY.get_or_init(|| {
            let registry = Self::standard();
            tracing::debug!(sections = registry.len(), "content registry initialized");
            registry
        })
    }

    /// The section selected before any interaction.
    pub const fn default_section(&self) -> SectionId {
        SectionId::Intro
    }

    /// Entries in render order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &SectionEntry> + DoubleEndedIterator {
        self.entries.iter()
    }

    /// Ids in render order.
    pub fn ids(&self) -> impl ExactSizeIterator<Item = SectionId> + '_ {
        self.entries.iter().map(|e| e.id)
    }

    pub fn get(&self, id: SectionId) -> Option<&SectionEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Zero-based render position of `id`.
    pub fn position(&self, id: SectionId) -> Option<usize> {
        self.entries.iter().position(|e| e.id == id)
    }

    /// The entry at render position `index`.
    pub fn at(&self, index: usize) -> Option<&SectionEntry> {
        self.entries.get(index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
