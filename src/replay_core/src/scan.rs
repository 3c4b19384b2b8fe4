use std::collections::BTreeMap;

use itertools::Itertools;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{color::Color, face::ScanLabel};

/// A scanned face, row-major, rows top to bottom and columns left to right
/// as the face was photographed.
pub type FaceGrid = [[Color; 3]; 3];

/// The center sticker of a face grid
pub fn center(grid: &FaceGrid) -> Color {
    grid[1][1]
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScanError {
    #[error("The scan is incomplete, missing the {} face(s)", .missing.iter().join(", "))]
    Incomplete { missing: Vec<ScanLabel> },
    #[error("The {first} and {second} faces both have a {color} center")]
    Ambiguous {
        color: Color,
        first: ScanLabel,
        second: ScanLabel,
    },
    #[error(
        "The {color} sticker at row {row}, column {column} of the {label} face does not match any center"
    )]
    UnmappedColor {
        label: ScanLabel,
        row: usize,
        column: usize,
        color: Color,
    },
}

/// The six scanned faces. Faces may be added in any order; the scan is only
/// usable once every label is present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScanResult {
    faces: BTreeMap<ScanLabel, FaceGrid>,
}

impl ScanResult {
    pub fn new() -> ScanResult {
        ScanResult::default()
    }

    /// Record the grid for a face, returning the grid it replaced if that
    /// face had already been scanned.
    pub fn insert(&mut self, label: ScanLabel, grid: FaceGrid) -> Option<FaceGrid> {
        self.faces.insert(label, grid)
    }

    pub fn with_face(mut self, label: ScanLabel, grid: FaceGrid) -> ScanResult {
        self.insert(label, grid);
        self
    }

    pub fn get(&self, label: ScanLabel) -> Option<&FaceGrid> {
        self.faces.get(&label)
    }

    pub fn faces(&self) -> impl Iterator<Item = (ScanLabel, &FaceGrid)> {
        self.faces.iter().map(|(label, grid)| (*label, grid))
    }

    pub fn missing(&self) -> Vec<ScanLabel> {
        ScanLabel::ALL
            .into_iter()
            .filter(|label| !self.faces.contains_key(label))
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.faces.len() == ScanLabel::ALL.len()
    }

    /// Get the grid for a face, failing if any face is still missing.
    pub(crate) fn require(&self, label: ScanLabel) -> Result<&FaceGrid, ScanError> {
        if !self.is_complete() {
            return Err(ScanError::Incomplete {
                missing: self.missing(),
            });
        }

        self.faces.get(&label).ok_or_else(|| ScanError::Incomplete {
            missing: vec![label],
        })
    }

    /// A scan of a solved cube where every face is uniformly the given color.
    pub fn uniform(colors: impl IntoIterator<Item = (ScanLabel, Color)>) -> ScanResult {
        colors
            .into_iter()
            .fold(ScanResult::new(), |scan, (label, color)| {
                scan.with_face(label, [[color; 3]; 3])
            })
    }
}
