//! A sticker-level model of the cube.
//!
//! Each of the 54 positions holds the face letter of the sticker currently
//! sitting there. The only way to change the model is to apply a face turn,
//! which moves stickers according to a fixed permutation table, so the model
//! always contains exactly nine stickers of every letter.

use log::{debug, warn};

use crate::{
    face::Face,
    moves::{MoveSequence, Turn, TurnKind},
    notation::{FACELET_COUNT, FaceletString},
};

type Table = [u8; FACELET_COUNT];

/// Clockwise quarter turn of every face in `U R F D L B` order, as sticker
/// cycles. The sticker at `cycle[k]` moves to `cycle[k + 1]`. The first two
/// cycles of each face move the face's own corners and edges; the remaining
/// three move the adjacent rows of the four neighbouring faces.
const CLOCKWISE_CYCLES: [[[u8; 4]; 5]; 6] = [
    [
        [0, 2, 8, 6],
        [1, 5, 7, 3],
        [9, 18, 36, 45],
        [10, 19, 37, 46],
        [11, 20, 38, 47],
    ],
    [
        [9, 11, 17, 15],
        [10, 14, 16, 12],
        [2, 51, 29, 20],
        [5, 48, 32, 23],
        [8, 45, 35, 26],
    ],
    [
        [18, 20, 26, 24],
        [19, 23, 25, 21],
        [6, 9, 29, 44],
        [7, 12, 28, 41],
        [8, 15, 27, 38],
    ],
    [
        [27, 29, 35, 33],
        [28, 32, 34, 30],
        [15, 51, 42, 24],
        [16, 52, 43, 25],
        [17, 53, 44, 26],
    ],
    [
        [36, 38, 44, 42],
        [37, 41, 43, 39],
        [0, 18, 27, 53],
        [3, 21, 30, 50],
        [6, 24, 33, 47],
    ],
    [
        [45, 47, 53, 51],
        [46, 50, 52, 48],
        [0, 42, 35, 11],
        [1, 39, 34, 14],
        [2, 36, 33, 17],
    ],
];

#[allow(clippy::cast_possible_truncation)]
const fn identity() -> Table {
    let mut table = [0; FACELET_COUNT];
    let mut i = 0;
    while i < FACELET_COUNT {
        table[i] = i as u8;
        i += 1;
    }
    table
}

const fn from_cycles(cycles: &[[u8; 4]; 5]) -> Table {
    let mut table = identity();
    let mut c = 0;
    while c < cycles.len() {
        let cycle = cycles[c];
        let mut k = 0;
        while k < 4 {
            table[cycle[k] as usize] = cycle[(k + 1) % 4];
            k += 1;
        }
        c += 1;
    }
    table
}

/// `a` followed by `b`
const fn compose(a: &Table, b: &Table) -> Table {
    let mut table = [0; FACELET_COUNT];
    let mut i = 0;
    while i < FACELET_COUNT {
        table[i] = b[a[i] as usize];
        i += 1;
    }
    table
}

#[allow(clippy::cast_possible_truncation)]
const fn invert(a: &Table) -> Table {
    let mut table = [0; FACELET_COUNT];
    let mut i = 0;
    while i < FACELET_COUNT {
        table[a[i] as usize] = i as u8;
        i += 1;
    }
    table
}

/// One table per face and turn kind, indexed by `Face` and then by the
/// position of the kind in `TurnKind::ALL`.
static TABLES: [[Table; 3]; 6] = {
    let mut tables = [[[0; FACELET_COUNT]; 3]; 6];
    let mut face = 0;
    while face < 6 {
        let clockwise = from_cycles(&CLOCKWISE_CYCLES[face]);
        tables[face][0] = clockwise;
        tables[face][1] = invert(&clockwise);
        tables[face][2] = compose(&clockwise, &clockwise);
        face += 1;
    }
    tables
};

fn table(turn: Turn) -> &'static Table {
    let kind = match turn.kind {
        TurnKind::Clockwise => 0,
        TurnKind::CounterClockwise => 1,
        TurnKind::Double => 2,
    };

    &TABLES[turn.face as usize][kind]
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogicalCube {
    facelets: [Face; FACELET_COUNT],
}

impl LogicalCube {
    pub fn solved() -> LogicalCube {
        LogicalCube {
            facelets: *FaceletString::solved().facelets(),
        }
    }

    /// Rebuild the scrambled cube a solution was computed for by undoing the
    /// solution on a solved cube.
    ///
    /// Moves that cannot be interpreted are skipped, exactly as playback
    /// skips them, so replaying the solution still ends on a solved cube.
    pub fn from_solution(solution: &MoveSequence) -> LogicalCube {
        let mut cube = LogicalCube::solved();

        for token in solution.iter().rev() {
            match token.turns() {
                Ok(turns) => {
                    for turn in turns.into_iter().rev() {
                        cube.apply(turn.inverse());
                    }
                }
                Err(e) => warn!(target: "cube", "Not undoing {token}: {e}"),
            }
        }

        debug!(target: "cube", "Reconstructed scramble: {}", cube.facelet_string());

        cube
    }

    pub fn apply(&mut self, turn: Turn) {
        let table = table(turn);
        let before = self.facelets;

        for (from, &to) in table.iter().enumerate() {
            self.facelets[to as usize] = before[from];
        }
    }

    pub fn apply_all(&mut self, turns: impl IntoIterator<Item = Turn>) {
        for turn in turns {
            self.apply(turn);
        }
    }

    pub fn facelets(&self) -> &[Face; FACELET_COUNT] {
        &self.facelets
    }

    /// The nine stickers of one face, row-major.
    pub fn face(&self, face: Face) -> [Face; 9] {
        std::array::from_fn(|i| self.facelets[face.offset() + i])
    }

    pub fn facelet_string(&self) -> FaceletString {
        FaceletString::from_facelets(self.facelets)
    }

    pub fn is_solved(&self) -> bool {
        Face::ALL
            .into_iter()
            .all(|face| self.face(face).iter().all(|v| *v == face))
    }

    /// How many stickers of each letter the model holds, in `U R F D L B`
    /// order. Every entry is nine for any reachable state.
    pub fn counts(&self) -> [usize; 6] {
        let mut counts = [0; 6];
        for face in self.facelets {
            counts[face as usize] += 1;
        }
        counts
    }
}

impl Default for LogicalCube {
    fn default() -> Self {
        LogicalCube::solved()
    }
}

impl From<FaceletString> for LogicalCube {
    fn from(value: FaceletString) -> Self {
        LogicalCube {
            facelets: *value.facelets(),
        }
    }
}
