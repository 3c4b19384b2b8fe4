use crate::{
    color::Color,
    cube::LogicalCube,
    face::Face,
    notation::{ColorNotationMap, FaceletString},
};

/// Anything that can tell which face letter sits at each of the nine
/// positions of a face.
pub trait FaceletSource {
    /// The nine stickers of `face`, row-major
    fn face_letters(&self, face: Face) -> [Face; 9];
}

impl FaceletSource for LogicalCube {
    fn face_letters(&self, face: Face) -> [Face; 9] {
        self.face(face)
    }
}

impl FaceletSource for FaceletString {
    fn face_letters(&self, face: Face) -> [Face; 9] {
        self.face(face)
    }
}

/// Width of the unfolded net, in stickers
pub const NET_WIDTH: usize = 12;
/// Height of the unfolded net, in stickers
pub const NET_HEIGHT: usize = 9;

/// Top-left cell of every face in the unfolded net, as `(column, row)`.
///
/// ```text
///        U
///     L  F  R  B
///        D
/// ```
pub const NET_LAYOUT: [(Face, usize, usize); 6] = [
    (Face::U, 3, 0),
    (Face::L, 0, 3),
    (Face::F, 3, 3),
    (Face::R, 6, 3),
    (Face::B, 9, 3),
    (Face::D, 3, 6),
];

/// A sticker placed in the unfolded net
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Cell {
    pub column: usize,
    pub row: usize,
    pub color: Color,
}

/// The colors a renderer should paint, derived from a cube's contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisualCube {
    faces: [[Color; 9]; 6],
}

impl VisualCube {
    pub fn project(source: &impl FaceletSource, map: &ColorNotationMap) -> VisualCube {
        VisualCube {
            faces: Face::ALL.map(|face| source.face_letters(face).map(|v| map.color_for(v))),
        }
    }

    pub fn face(&self, face: Face) -> &[Color; 9] {
        &self.faces[face as usize]
    }

    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        NET_LAYOUT.into_iter().flat_map(move |(face, column, row)| {
            self.face(face)
                .iter()
                .enumerate()
                .map(move |(i, &color)| Cell {
                    column: column + i % 3,
                    row: row + i / 3,
                    color,
                })
        })
    }

    /// The unfolded net as rows of cells, `None` where no face is drawn.
    pub fn net(&self) -> [[Option<Color>; NET_WIDTH]; NET_HEIGHT] {
        let mut net = [[None; NET_WIDTH]; NET_HEIGHT];
        for cell in self.cells() {
            net[cell.row][cell.column] = Some(cell.color);
        }
        net
    }
}
