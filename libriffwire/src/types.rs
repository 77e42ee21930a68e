//! Core types for Riffwire

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;
use crate::theme::ColorName;

/// A single news article
///
/// Records are constructed once at data-source load and never mutated.
/// `category` is a free-text display label, intentionally not a key into
/// the category catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Article {
    pub id: String,
    pub title: String,
    pub summary: String,
    pub content: String,
    pub image_url: String,
    pub category: String,
    pub author: String,
    /// Opaque display string, never parsed or sorted on
    pub published_at: String,
    /// Estimated read time in minutes, display-only
    pub read_time: u32,
    /// Display order matters; duplicates are permitted
    pub tags: Vec<String>,
    pub source: String,
}

/// A topical grouping with display metadata
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub icon: IconName,
    pub color: ColorName,
    /// Static placeholder count, not derived from actual article counts
    pub news_count: u32,
}

/// Closed set of icons the renderer knows how to draw
///
/// External data that refers to icons by name goes through [`FromStr`],
/// so an unknown name fails at construction time instead of rendering
/// blank. Names accept an optional `-outline` suffix, matching the naming
/// used by common mobile icon sets.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum IconName {
    Flash,
    Disc,
    MusicalNotes,
    Mic,
    PlayCircle,
    People,
    Newspaper,
    Star,
    Grid,
    Search,
    ArrowBack,
    Share,
    Close,
    Time,
    Person,
    Calendar,
}

impl IconName {
    /// Resolve an icon by its external name, tolerating `-outline` variants
    pub fn from_name(s: &str) -> Option<Self> {
        let base = s.strip_suffix("-outline").unwrap_or(s);
        match base {
            "flash" => Some(Self::Flash),
            "disc" => Some(Self::Disc),
            "musical-notes" => Some(Self::MusicalNotes),
            "mic" => Some(Self::Mic),
            "play-circle" => Some(Self::PlayCircle),
            "people" => Some(Self::People),
            "newspaper" => Some(Self::Newspaper),
            "star" => Some(Self::Star),
            "grid" => Some(Self::Grid),
            "search" => Some(Self::Search),
            "arrow-back" => Some(Self::ArrowBack),
            "share" => Some(Self::Share),
            "close" => Some(Self::Close),
            "time" => Some(Self::Time),
            "person" => Some(Self::Person),
            "calendar" => Some(Self::Calendar),
            _ => None,
        }
    }

    /// The canonical external name
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Flash => "flash",
            Self::Disc => "disc",
            Self::MusicalNotes => "musical-notes",
            Self::Mic => "mic",
            Self::PlayCircle => "play-circle",
            Self::People => "people",
            Self::Newspaper => "newspaper",
            Self::Star => "star",
            Self::Grid => "grid",
            Self::Search => "search",
            Self::ArrowBack => "arrow-back",
            Self::Share => "share",
            Self::Close => "close",
            Self::Time => "time",
            Self::Person => "person",
            Self::Calendar => "calendar",
        }
    }

    /// Unicode glyph for terminals that can render it
    pub fn glyph(&self) -> &'static str {
        match self {
            Self::Flash => "⚡",
            Self::Disc => "◉",
            Self::MusicalNotes => "♫",
            Self::Mic => "⊙",
            Self::PlayCircle => "▶",
            Self::People => "☻",
            Self::Newspaper => "▤",
            Self::Star => "★",
            Self::Grid => "☰",
            Self::Search => "⌕",
            Self::ArrowBack => "←",
            Self::Share => "↗",
            Self::Close => "✕",
            Self::Time => "◷",
            Self::Person => "☺",
            Self::Calendar => "▦",
        }
    }

    /// Plain ASCII fallback
    pub fn ascii(&self) -> &'static str {
        match self {
            Self::Flash => "!",
            Self::Disc => "@",
            Self::MusicalNotes => "~",
            Self::Mic => "o",
            Self::PlayCircle => ">",
            Self::People => "&",
            Self::Newspaper => "=",
            Self::Star => "*",
            Self::Grid => "#",
            Self::Search => "?",
            Self::ArrowBack => "<",
            Self::Share => "^",
            Self::Close => "x",
            Self::Time => "t",
            Self::Person => "a",
            Self::Calendar => "d",
        }
    }
}

impl FromStr for IconName {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| CatalogError::UnknownIcon(s.to_string()))
    }
}

impl std::fmt::Display for IconName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
