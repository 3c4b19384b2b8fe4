//! Translation of a scan into the solver's facelet notation.
//!
//! The solver does not know about colors. It identifies every sticker by the
//! face whose center shares its color, so the six center stickers of a scan
//! define the whole translation.

use std::{collections::HashMap, fmt::Display, str::FromStr};

use itertools::Itertools;
use log::debug;
use thiserror::Error;

use crate::{
    color::Color,
    face::{Face, ScanLabel},
    scan::{ScanError, ScanResult, center},
};

pub const FACELET_COUNT: usize = 54;

/// A bijection between the six sticker colors and the six face letters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorNotationMap {
    faces_by_color: HashMap<Color, Face>,
    colors_by_face: [Color; 6],
}

impl ColorNotationMap {
    /// Build the map from the center sticker of every scanned face.
    pub fn resolve(scan: &ScanResult) -> Result<ColorNotationMap, ScanError> {
        let mut faces_by_color = HashMap::new();
        let mut colors_by_face = [Color::White; 6];

        for label in ScanLabel::ALL {
            let color = center(scan.require(label)?);

            if let Some(face) = faces_by_color.insert(color, label.face()) {
                return Err(ScanError::Ambiguous {
                    color,
                    first: ScanLabel::from_face(face),
                    second: label,
                });
            }

            colors_by_face[label.face() as usize] = color;
        }

        debug!(
            target: "notation",
            "Resolved centers: {}",
            Face::ALL
                .iter()
                .map(|face| format!("{face}={}", colors_by_face[*face as usize]))
                .join(" ")
        );

        Ok(ColorNotationMap {
            faces_by_color,
            colors_by_face,
        })
    }

    /// The map of a cube whose centers are the given colors, in `U R F D L B`
    /// order. Returns `None` if a color repeats.
    pub fn from_centers(colors_by_face: [Color; 6]) -> Option<ColorNotationMap> {
        let faces_by_color = Face::ALL
            .into_iter()
            .map(|face| (colors_by_face[face as usize], face))
            .collect::<HashMap<_, _>>();

        (faces_by_color.len() == 6).then_some(ColorNotationMap {
            faces_by_color,
            colors_by_face,
        })
    }

    pub fn face_for(&self, color: Color) -> Option<Face> {
        self.faces_by_color.get(&color).copied()
    }

    pub fn color_for(&self, face: Face) -> Color {
        self.colors_by_face[face as usize]
    }

    pub fn iter(&self) -> impl Iterator<Item = (Face, Color)> + '_ {
        Face::ALL
            .into_iter()
            .map(|face| (face, self.color_for(face)))
    }
}

/// The 54-character description of a cube that the solver consumes.
///
/// Faces are laid out in `U R F D L B` order and each face is read row-major,
/// so `facelets[face.offset() + row * 3 + column]` is a single sticker.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FaceletString([Face; FACELET_COUNT]);

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FaceletStringError {
    #[error("A facelet string must be {FACELET_COUNT} characters long, got {0}")]
    WrongLength(usize),
    #[error("Invalid facelet `{character}` at position {position}, expected one of U R F D L B")]
    InvalidFacelet { character: char, position: usize },
}

impl FaceletString {
    /// Translate every sticker of the scan through the color map.
    pub fn encode(
        scan: &ScanResult,
        map: &ColorNotationMap,
    ) -> Result<FaceletString, ScanError> {
        let mut facelets = [Face::U; FACELET_COUNT];

        for face in Face::ALL {
            let label = ScanLabel::from_face(face);
            let grid = scan.require(label)?;

            for (row, cells) in grid.iter().enumerate() {
                for (column, &color) in cells.iter().enumerate() {
                    facelets[face.offset() + row * 3 + column] =
                        map.face_for(color).ok_or(ScanError::UnmappedColor {
                            label,
                            row,
                            column,
                            color,
                        })?;
                }
            }
        }

        Ok(FaceletString(facelets))
    }

    pub fn from_facelets(facelets: [Face; FACELET_COUNT]) -> FaceletString {
        FaceletString(facelets)
    }

    pub fn facelets(&self) -> &[Face; FACELET_COUNT] {
        &self.0
    }

    /// The nine stickers of one face, row-major.
    pub fn face(&self, face: Face) -> [Face; 9] {
        std::array::from_fn(|i| self.0[face.offset() + i])
    }

    /// The string of a solved cube
    pub fn solved() -> FaceletString {
        FaceletString(std::array::from_fn(|i| Face::ALL[i / 9]))
    }

    /// Count the positions where two facelet strings disagree.
    pub fn mismatches(&self, other: &FaceletString) -> usize {
        self.0
            .iter()
            .zip(other.0.iter())
            .filter(|(a, b)| a != b)
            .count()
    }
}

impl Display for FaceletString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for face in self.0 {
            write!(f, "{face}")?;
        }

        Ok(())
    }
}

impl FromStr for FaceletString {
    type Err = FaceletStringError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let len = s.chars().count();
        if len != FACELET_COUNT {
            return Err(FaceletStringError::WrongLength(len));
        }

        let mut facelets = [Face::U; FACELET_COUNT];
        for (position, character) in s.chars().enumerate() {
            facelets[position] = Face::from_letter(character).ok_or(
                FaceletStringError::InvalidFacelet {
                    character,
                    position,
                },
            )?;
        }

        Ok(FaceletString(facelets))
    }
}
