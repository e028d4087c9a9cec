//! The color palette: identifiers and their hex resolution.
//!
//! Styles never carry raw hex strings. They carry a [`ColorId`], and the
//! renderer resolves it at draw time through [`ColorId::fill_hex`] or
//! [`ColorId::stroke_hex`] depending on where the color is used. Shades
//! resolve to the same hex in both roles; hues resolve to a soft tint as a
//! fill and a saturated tone as a stroke.

#[cfg(test)]
#[path = "palette_test.rs"]
mod palette_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error returned when a color name does not match any palette entry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown color name: {0}")]
pub struct ParseColorError(String);

/// Identifier for one palette color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ColorId {
    // Shades, light to dark.
    /// No paint at all.
    Transparent,
    /// Paper white.
    White,
    /// Light warm gray.
    LightGray,
    /// Mid warm gray.
    Gray,
    /// Dark warm gray.
    DarkGray,
    /// Near-black ink.
    Black,
    // Hues, in spectrum order.
    /// Red.
    Red,
    /// Orange.
    Orange,
    /// Yellow.
    Yellow,
    /// Green.
    Green,
    /// Cyan.
    Cyan,
    /// Blue.
    Blue,
    /// Indigo.
    Indigo,
    /// Violet.
    Violet,
}

impl ColorId {
    /// The neutral shades, offered by both the fill and stroke pickers.
    pub const SHADES: [Self; 6] = [
        Self::Transparent,
        Self::White,
        Self::LightGray,
        Self::Gray,
        Self::DarkGray,
        Self::Black,
    ];

    /// The chromatic hues, offered by both pickers with role-specific hex.
    pub const HUES: [Self; 8] = [
        Self::Red,
        Self::Orange,
        Self::Yellow,
        Self::Green,
        Self::Cyan,
        Self::Blue,
        Self::Indigo,
        Self::Violet,
    ];

    /// Every palette color: shades first, then hues.
    pub const ALL: [Self; 14] = [
        Self::Transparent,
        Self::White,
        Self::LightGray,
        Self::Gray,
        Self::DarkGray,
        Self::Black,
        Self::Red,
        Self::Orange,
        Self::Yellow,
        Self::Green,
        Self::Cyan,
        Self::Blue,
        Self::Indigo,
        Self::Violet,
    ];

    /// True for the neutral shades that resolve identically in either role.
    #[must_use]
    pub fn is_shade(self) -> bool {
        matches!(
            self,
            Self::Transparent
                | Self::White
                | Self::LightGray
                | Self::Gray
                | Self::DarkGray
                | Self::Black
        )
    }

    /// CSS color when the id is used as a fill. Hues resolve to soft tints
    /// so filled shapes stay readable under ink strokes.
    #[must_use]
    pub fn fill_hex(self) -> &'static str {
        match self {
            Self::Transparent => "transparent",
            Self::White => "#F5F0E8",
            Self::LightGray => "#D9D2C7",
            Self::Gray => "#A39B8F",
            Self::DarkGray => "#5C544C",
            Self::Black => "#1F1A17",
            Self::Red => "#F0B6B0",
            Self::Orange => "#F3CFA9",
            Self::Yellow => "#F2E3AE",
            Self::Green => "#BFD8B8",
            Self::Cyan => "#B4D8DC",
            Self::Blue => "#B3C6E6",
            Self::Indigo => "#BDB8DE",
            Self::Violet => "#D9B6D4",
        }
    }

    /// CSS color when the id is used as a stroke. Hues resolve to saturated
    /// tones; shades resolve exactly as they do for fills.
    #[must_use]
    pub fn stroke_hex(self) -> &'static str {
        match self {
            Self::Red => "#D94B4B",
            Self::Orange => "#DE8A3B",
            Self::Yellow => "#D4AF3B",
            Self::Green => "#5F9E5C",
            Self::Cyan => "#4C9AA8",
            Self::Blue => "#4A73B8",
            Self::Indigo => "#6158A8",
            Self::Violet => "#9C4F96",
            shade => shade.fill_hex(),
        }
    }

    /// Canonical camelCase name, identical to the serialized form.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Transparent => "transparent",
            Self::White => "white",
            Self::LightGray => "lightGray",
            Self::Gray => "gray",
            Self::DarkGray => "darkGray",
            Self::Black => "black",
            Self::Red => "red",
            Self::Orange => "orange",
            Self::Yellow => "yellow",
            Self::Green => "green",
            Self::Cyan => "cyan",
            Self::Blue => "blue",
            Self::Indigo => "indigo",
            Self::Violet => "violet",
        }
    }
}

impl fmt::Display for ColorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ColorId {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "transparent" => Ok(Self::Transparent),
            "white" => Ok(Self::White),
            "lightGray" => Ok(Self::LightGray),
            "gray" => Ok(Self::Gray),
            "darkGray" => Ok(Self::DarkGray),
            "black" => Ok(Self::Black),
            "red" => Ok(Self::Red),
            "orange" => Ok(Self::Orange),
            "yellow" => Ok(Self::Yellow),
            "green" => Ok(Self::Green),
            "cyan" => Ok(Self::Cyan),
            "blue" => Ok(Self::Blue),
            "indigo" => Ok(Self::Indigo),
            "violet" => Ok(Self::Violet),
            other => Err(ParseColorError(other.to_owned())),
        }
    }
}
