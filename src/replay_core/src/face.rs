use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A face of the cube in solver notation. The discriminants follow the
/// solver's face order, which is also the order of the facelet string.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Face {
    U,
    R,
    F,
    D,
    L,
    B,
}

impl Face {
    pub const ALL: [Self; 6] = {
        use Face::*;
        let v = [U, R, F, D, L, B];

        let mut i = 0;
        while i < v.len() {
            assert!(i == v[i] as usize);
            i += 1;
        }

        v
    };

    pub fn letter(self) -> char {
        match self {
            Face::U => 'U',
            Face::R => 'R',
            Face::F => 'F',
            Face::D => 'D',
            Face::L => 'L',
            Face::B => 'B',
        }
    }

    pub fn from_letter(letter: char) -> Option<Face> {
        match letter {
            'U' => Some(Face::U),
            'R' => Some(Face::R),
            'F' => Some(Face::F),
            'D' => Some(Face::D),
            'L' => Some(Face::L),
            'B' => Some(Face::B),
            _ => None,
        }
    }

    /// The upper-case name used when describing a turn of this face.
    pub fn long_name(self) -> &'static str {
        match self {
            Face::U => "TOP",
            Face::R => "RIGHT",
            Face::F => "FRONT",
            Face::D => "BOTTOM",
            Face::L => "LEFT",
            Face::B => "BACK",
        }
    }

    /// The index of the first sticker of this face in a facelet string.
    pub fn offset(self) -> usize {
        self as usize * 9
    }
}

impl Display for Face {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.letter())
    }
}

impl FromStr for Face {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(letter), None) => Face::from_letter(letter).ok_or(()),
            _ => Err(()),
        }
    }
}

/// The name a face was scanned under.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum ScanLabel {
    Top,
    Right,
    Front,
    Bottom,
    Left,
    Back,
}

impl ScanLabel {
    pub const ALL: [Self; 6] = [
        ScanLabel::Top,
        ScanLabel::Right,
        ScanLabel::Front,
        ScanLabel::Bottom,
        ScanLabel::Left,
        ScanLabel::Back,
    ];

    /// The solver face this scan label stands for.
    pub fn face(self) -> Face {
        match self {
            ScanLabel::Top => Face::U,
            ScanLabel::Right => Face::R,
            ScanLabel::Front => Face::F,
            ScanLabel::Bottom => Face::D,
            ScanLabel::Left => Face::L,
            ScanLabel::Back => Face::B,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ScanLabel::Top => "Top",
            ScanLabel::Right => "Right",
            ScanLabel::Front => "Front",
            ScanLabel::Bottom => "Bottom",
            ScanLabel::Left => "Left",
            ScanLabel::Back => "Back",
        }
    }

    pub fn from_face(face: Face) -> ScanLabel {
        match face {
            Face::U => ScanLabel::Top,
            Face::R => ScanLabel::Right,
            Face::F => ScanLabel::Front,
            Face::D => ScanLabel::Bottom,
            Face::L => ScanLabel::Left,
            Face::B => ScanLabel::Back,
        }
    }
}

impl Display for ScanLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown face `{0}`, expected one of Top, Right, Front, Bottom, Left, Back")]
pub struct UnknownScanLabel(pub String);

impl FromStr for ScanLabel {
    type Err = UnknownScanLabel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ScanLabel::ALL
            .into_iter()
            .find(|label| label.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownScanLabel(s.to_owned()))
    }
}

impl TryFrom<String> for ScanLabel {
    type Error = UnknownScanLabel;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ScanLabel> for &'static str {
    fn from(value: ScanLabel) -> Self {
        value.name()
    }
}
