use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One of the six sticker colors a scan can report.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum Color {
    Red,
    Green,
    Blue,
    Yellow,
    Orange,
    White,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown sticker color `{0}`, expected one of Red, Green, Blue, Yellow, Orange, White")]
pub struct UnknownColor(pub String);

impl Color {
    pub const ALL: [Self; 6] = [
        Color::Red,
        Color::Green,
        Color::Blue,
        Color::Yellow,
        Color::Orange,
        Color::White,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Color::Red => "Red",
            Color::Green => "Green",
            Color::Blue => "Blue",
            Color::Yellow => "Yellow",
            Color::Orange => "Orange",
            Color::White => "White",
        }
    }

    /// The 24-bit color used to paint a sticker of this color.
    pub fn rgb(self) -> (u8, u8, u8) {
        match self {
            Color::Red => (255, 0, 0),
            Color::Green => (0, 128, 0),
            Color::Blue => (0, 0, 255),
            Color::Yellow => (255, 255, 0),
            Color::Orange => (255, 165, 0),
            Color::White => (255, 255, 255),
        }
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Color {
    type Err = UnknownColor;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Color::ALL
            .into_iter()
            .find(|color| color.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownColor(s.to_owned()))
    }
}

impl TryFrom<String> for Color {
    type Error = UnknownColor;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Color> for &'static str {
    fn from(value: Color) -> Self {
        value.name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_names_case_insensitively() {
        assert_eq!("red".parse::<Color>(), Ok(Color::Red));
        assert_eq!("WHITE".parse::<Color>(), Ok(Color::White));
        assert_eq!(" Orange ".parse::<Color>(), Ok(Color::Orange));
        assert_eq!(
            "Purple".parse::<Color>(),
            Err(UnknownColor("Purple".to_owned()))
        );
    }

    #[test]
    fn names_round_trip_through_display() {
        for color in Color::ALL {
            assert_eq!(color.to_string().parse::<Color>(), Ok(color));
        }
    }
}
