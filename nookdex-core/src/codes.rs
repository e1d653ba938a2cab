//! Closed code tables for item classification.
//!
//! Each table has a stable numeric code, the string used in the source
//! datasets (`"Wall-mounted"`, `"1.5x1.5"`, `"2.0.4"`), and an English
//! display name. Parsing is lenient: case, spacing and punctuation are
//! ignored, and the numeric code is accepted too.

use serde::{Deserialize, Serialize};

/// Error returned when a string cannot be parsed into one of the code tables.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind}: '{value}'")]
pub struct CodeParseError {
    pub kind: &'static str,
    pub value: String,
}

impl CodeParseError {
    fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}

/// Lowercase and drop everything that is not alphanumeric.
///
/// `"Wall-mounted"`, `"wall mounted"` and `"WallMounted"` all squash to
/// `"wallmounted"`.
fn squash(s: &str) -> String {
    s.chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Match `s` against a table by source string, variant name, or numeric code.
fn parse_loose<T: Copy + std::fmt::Debug>(
    s: &str,
    all: &[T],
    code: impl Fn(T) -> u8,
    source: impl Fn(T) -> &'static str,
) -> Option<T> {
    let trimmed = s.trim();
    if !trimmed.is_empty() && trimmed.chars().all(|c| c.is_ascii_digit()) {
        let n: u8 = trimmed.parse().ok()?;
        return all.iter().copied().find(|&v| code(v) == n);
    }
    let key = squash(trimmed);
    if key.is_empty() {
        return None;
    }
    all.iter()
        .copied()
        .find(|&v| squash(source(v)) == key || squash(&format!("{v:?}")) == key)
}

// ── Category ────────────────────────────────────────────────────────────────

/// Item category, taken from the `sourceSheet` of a raw record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Housewares,
    Miscellaneous,
    WallMounted,
    CeilingDecor,
    Tops,
    Bottoms,
    DressUp,
    Headwear,
    Accessories,
    Socks,
    Shoes,
    Bags,
    Umbrellas,
    ClothingOther,
    ToolsGoods,
    Fencing,
    Wallpaper,
    Floors,
    Rugs,
    Fossils,
    Gyroids,
    Artwork,
    Music,
    Photos,
    Posters,
    MessageCards,
    /// Bucket for records with a missing or unrecognized sheet.
    Other,
}

const ALL_CATEGORIES: &[Category] = &[
    Category::Housewares,
    Category::Miscellaneous,
    Category::WallMounted,
    Category::CeilingDecor,
    Category::Tops,
    Category::Bottoms,
    Category::DressUp,
    Category::Headwear,
    Category::Accessories,
    Category::Socks,
    Category::Shoes,
    Category::Bags,
    Category::Umbrellas,
    Category::ClothingOther,
    Category::ToolsGoods,
    Category::Fencing,
    Category::Wallpaper,
    Category::Floors,
    Category::Rugs,
    Category::Fossils,
    Category::Gyroids,
    Category::Artwork,
    Category::Music,
    Category::Photos,
    Category::Posters,
    Category::MessageCards,
    Category::Other,
];

impl Category {
    /// Stable numeric code (1-based, in table order).
    pub fn code(&self) -> u8 {
        match self {
            Self::Housewares => 1,
            Self::Miscellaneous => 2,
            Self::WallMounted => 3,
            Self::CeilingDecor => 4,
            Self::Tops => 5,
            Self::Bottoms => 6,
            Self::DressUp => 7,
            Self::Headwear => 8,
            Self::Accessories => 9,
            Self::Socks => 10,
            Self::Shoes => 11,
            Self::Bags => 12,
            Self::Umbrellas => 13,
            Self::ClothingOther => 14,
            Self::ToolsGoods => 15,
            Self::Fencing => 16,
            Self::Wallpaper => 17,
            Self::Floors => 18,
            Self::Rugs => 19,
            Self::Fossils => 20,
            Self::Gyroids => 21,
            Self::Artwork => 22,
            Self::Music => 23,
            Self::Photos => 24,
            Self::Posters => 25,
            Self::MessageCards => 26,
            Self::Other => 27,
        }
    }

    /// The sheet name as it appears in the item dataset.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Housewares => "Housewares",
            Self::Miscellaneous => "Miscellaneous",
            Self::WallMounted => "Wall-mounted",
            Self::CeilingDecor => "Ceiling Decor",
            Self::Tops => "Tops",
            Self::Bottoms => "Bottoms",
            Self::DressUp => "Dress-Up",
            Self::Headwear => "Headwear",
            Self::Accessories => "Accessories",
            Self::Socks => "Socks",
            Self::Shoes => "Shoes",
            Self::Bags => "Bags",
            Self::Umbrellas => "Umbrellas",
            Self::ClothingOther => "Clothing Other",
            Self::ToolsGoods => "Tools/Goods",
            Self::Fencing => "Fencing",
            Self::Wallpaper => "Wallpaper",
            Self::Floors => "Floors",
            Self::Rugs => "Rugs",
            Self::Fossils => "Fossils",
            Self::Gyroids => "Gyroids",
            Self::Artwork => "Artwork",
            Self::Music => "Music",
            Self::Photos => "Photos",
            Self::Posters => "Posters",
            Self::MessageCards => "Message Cards",
            Self::Other => "Other",
        }
    }

    /// Parse a sheet name, variant name or numeric code.
    pub fn from_str_loose(s: &str) -> Option<Self> {
        parse_loose(s, ALL_CATEGORIES, |c| c.code(), |c| c.as_str())
    }

    /// Resolve a possibly-missing sheet name, falling back to [`Category::Other`].
    pub fn from_sheet(sheet: Option<&str>) -> Self {
        sheet.and_then(Self::from_str_loose).unwrap_or(Self::Other)
    }

    /// All 27 categories in table order.
    pub fn all() -> &'static [Category] {
        ALL_CATEGORIES
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Category {
    type Err = CodeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str_loose(s).ok_or_else(|| CodeParseError::new("category", s))
    }
}

// ── Version ─────────────────────────────────────────────────────────────────

/// Game update in which an item was added.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Version {
    V100,
    V110,
    V120,
    V130,
    V140,
    V150,
    V160,
    V170,
    V180,
    V190,
    V1100,
    V1110,
    V200,
    V204,
}

const ALL_VERSIONS: &[Version] = &[
    Version::V100,
    Version::V110,
    Version::V120,
    Version::V130,
    Version::V140,
    Version::V150,
    Version::V160,
    Version::V170,
    Version::V180,
    Version::V190,
    Version::V1100,
    Version::V1110,
    Version::V200,
    Version::V204,
];

impl Version {
    pub fn code(&self) -> u8 {
        match self {
            Self::V100 => 1,
            Self::V110 => 2,
            Self::V120 => 3,
            Self::V130 => 4,
            Self::V140 => 5,
            Self::V150 => 6,
            Self::V160 => 7,
            Self::V170 => 8,
            Self::V180 => 9,
            Self::V190 => 10,
            Self::V1100 => 11,
            Self::V1110 => 12,
            Self::V200 => 13,
            Self::V204 => 14,
        }
    }

    /// Version string as written in `versionAdded`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::V100 => "1.0.0",
            Self::V110 => "1.1.0",
            Self::V120 => "1.2.0",
            Self::V130 => "1.3.0",
            Self::V140 => "1.4.0",
            Self::V150 => "1.5.0",
            Self::V160 => "1.6.0",
            Self::V170 => "1.7.0",
            Self::V180 => "1.8.0",
            Self::V190 => "1.9.0",
            Self::V1100 => "1.10.0",
            Self::V1110 => "1.11.0",
            Self::V200 => "2.0.0",
            Self::V204 => "2.0.4",
        }
    }

    pub fn from_str_loose(s: &str) -> Option<Self> {
        parse_loose(s, ALL_VERSIONS, |v| v.code(), |v| v.as_str())
    }

    pub fn all() -> &'static [Version] {
        ALL_VERSIONS
    }
}

impl std::fmt::Display for Version {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Version {
    type Err = CodeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str_loose(s).ok_or_else(|| CodeParseError::new("version", s))
    }
}

// ── Size ────────────────────────────────────────────────────────────────────

/// Footprint of a placeable item, in grid tiles (width x depth).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemSize {
    S05x1,
    S1x05,
    S1x1,
    S1x15,
    S1x2,
    S15x15,
    S2x05,
    S2x1,
    S2x15,
    S2x2,
    S3x1,
    S3x2,
    S3x3,
    S4x3,
    S4x4,
    S5x5,
}

const ALL_SIZES: &[ItemSize] = &[
    ItemSize::S05x1,
    ItemSize::S1x05,
    ItemSize::S1x1,
    ItemSize::S1x15,
    ItemSize::S1x2,
    ItemSize::S15x15,
    ItemSize::S2x05,
    ItemSize::S2x1,
    ItemSize::S2x15,
    ItemSize::S2x2,
    ItemSize::S3x1,
    ItemSize::S3x2,
    ItemSize::S3x3,
    ItemSize::S4x3,
    ItemSize::S4x4,
    ItemSize::S5x5,
];

impl ItemSize {
    pub fn code(&self) -> u8 {
        match self {
            Self::S05x1 => 1,
            Self::S1x05 => 2,
            Self::S1x1 => 3,
            Self::S1x15 => 4,
            Self::S1x2 => 5,
            Self::S15x15 => 6,
            Self::S2x05 => 7,
            Self::S2x1 => 8,
            Self::S2x15 => 9,
            Self::S2x2 => 10,
            Self::S3x1 => 11,
            Self::S3x2 => 12,
            Self::S3x3 => 13,
            Self::S4x3 => 14,
            Self::S4x4 => 15,
            Self::S5x5 => 16,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::S05x1 => "0.5x1",
            Self::S1x05 => "1x0.5",
            Self::S1x1 => "1x1",
            Self::S1x15 => "1x1.5",
            Self::S1x2 => "1x2",
            Self::S15x15 => "1.5x1.5",
            Self::S2x05 => "2x0.5",
            Self::S2x1 => "2x1",
            Self::S2x15 => "2x1.5",
            Self::S2x2 => "2x2",
            Self::S3x1 => "3x1",
            Self::S3x2 => "3x2",
            Self::S3x3 => "3x3",
            Self::S4x3 => "4x3",
            Self::S4x4 => "4x4",
            Self::S5x5 => "5x5",
        }
    }

    pub fn from_str_loose(s: &str) -> Option<Self> {
        parse_loose(s, ALL_SIZES, |v| v.code(), |v| v.as_str())
    }

    pub fn all() -> &'static [ItemSize] {
        ALL_SIZES
    }
}

impl std::fmt::Display for ItemSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ItemSize {
    type Err = CodeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str_loose(s).ok_or_else(|| CodeParseError::new("size", s))
    }
}

// ── Color ───────────────────────────────────────────────────────────────────

/// Color tag attached to items and patterns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Red,
    Orange,
    Yellow,
    Green,
    Blue,
    Aqua,
    Purple,
    Pink,
    White,
    Black,
    Gray,
    Brown,
    Beige,
    Colorful,
}

const ALL_COLORS: &[Color] = &[
    Color::Red,
    Color::Orange,
    Color::Yellow,
    Color::Green,
    Color::Blue,
    Color::Aqua,
    Color::Purple,
    Color::Pink,
    Color::White,
    Color::Black,
    Color::Gray,
    Color::Brown,
    Color::Beige,
    Color::Colorful,
];

impl Color {
    pub fn code(&self) -> u8 {
        match self {
            Self::Red => 1,
            Self::Orange => 2,
            Self::Yellow => 3,
            Self::Green => 4,
            Self::Blue => 5,
            Self::Aqua => 6,
            Self::Purple => 7,
            Self::Pink => 8,
            Self::White => 9,
            Self::Black => 10,
            Self::Gray => 11,
            Self::Brown => 12,
            Self::Beige => 13,
            Self::Colorful => 14,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Red => "Red",
            Self::Orange => "Orange",
            Self::Yellow => "Yellow",
            Self::Green => "Green",
            Self::Blue => "Blue",
            Self::Aqua => "Aqua",
            Self::Purple => "Purple",
            Self::Pink => "Pink",
            Self::White => "White",
            Self::Black => "Black",
            Self::Gray => "Gray",
            Self::Brown => "Brown",
            Self::Beige => "Beige",
            Self::Colorful => "Colorful",
        }
    }

    /// Swatch color used when rendering a color chip. `Colorful` has none.
    pub fn swatch_hex(&self) -> Option<&'static str> {
        match self {
            Self::Red => Some("#e74c3c"),
            Self::Orange => Some("#e67e22"),
            Self::Yellow => Some("#f1c40f"),
            Self::Green => Some("#27ae60"),
            Self::Blue => Some("#3498db"),
            Self::Aqua => Some("#1abc9c"),
            Self::Purple => Some("#9b59b6"),
            Self::Pink => Some("#ff69b4"),
            Self::White => Some("#ecf0f1"),
            Self::Black => Some("#2c3e50"),
            Self::Gray => Some("#95a5a6"),
            Self::Brown => Some("#8b6f47"),
            Self::Beige => Some("#d4c5b9"),
            Self::Colorful => None,
        }
    }

    pub fn from_str_loose(s: &str) -> Option<Self> {
        // "Grey" shows up in some community exports
        if squash(s) == "grey" {
            return Some(Self::Gray);
        }
        parse_loose(s, ALL_COLORS, |v| v.code(), |v| v.as_str())
    }

    pub fn all() -> &'static [Color] {
        ALL_COLORS
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Color {
    type Err = CodeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str_loose(s).ok_or_else(|| CodeParseError::new("color", s))
    }
}

#[cfg(test)]
#[path = "tests/codes_tests.rs"]
mod tests;
