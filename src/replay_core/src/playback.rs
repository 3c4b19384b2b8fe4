//! Forward-only replay of a solution.
//!
//! The controller owns the cube model and its projection. Every call to
//! [`Playback::advance`] consumes exactly one solver move until the solution
//! is exhausted; nothing ever moves the cursor backwards.

use std::fmt::Display;

use log::{debug, info, warn};

use crate::{
    cube::LogicalCube,
    moves::{MoveSequence, MoveToken, Turn, UnknownMoveToken},
    notation::ColorNotationMap,
    projection::VisualCube,
};

/// What a single advance did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// The move at `index` was performed as the given turns
    Applied {
        index: usize,
        token: MoveToken,
        turns: Vec<Turn>,
    },
    /// The move at `index` could not be interpreted and was passed over
    Skipped {
        index: usize,
        token: MoveToken,
        error: UnknownMoveToken,
    },
    /// Every move has already been performed
    Finished,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status<'a> {
    /// `number` is one-based
    Pending {
        number: usize,
        total: usize,
        token: &'a MoveToken,
    },
    Solved,
}

impl Display for Status<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Status::Pending {
                number,
                total,
                token,
            } => write!(f, "Move {number} of {total}: {token}"),
            Status::Solved => write!(f, "Solved!"),
        }
    }
}

pub struct Playback {
    map: ColorNotationMap,
    solution: MoveSequence,
    cursor: usize,
    cube: LogicalCube,
    visual: VisualCube,
}

impl Playback {
    /// Start a replay of `solution` from the scrambled cube it solves.
    pub fn new(map: ColorNotationMap, solution: MoveSequence) -> Playback {
        let cube = LogicalCube::from_solution(&solution);
        let visual = VisualCube::project(&cube, &map);

        info!(target: "playback", "Replaying {} moves", solution.len());

        Playback {
            map,
            solution,
            cursor: 0,
            cube,
            visual,
        }
    }

    /// Perform the next move of the solution, if there is one.
    pub fn advance(&mut self) -> Step {
        let Some(token) = self.solution.get(self.cursor).cloned() else {
            return Step::Finished;
        };

        let index = self.cursor;
        self.cursor += 1;

        match token.turns() {
            Ok(turns) => {
                debug!(
                    target: "playback",
                    "Move {} of {}: {token} as {turns:?}",
                    index + 1,
                    self.solution.len()
                );

                self.cube.apply_all(turns.iter().copied());
                self.visual = VisualCube::project(&self.cube, &self.map);

                if self.is_finished() {
                    info!(target: "playback", "Replay finished, solved={}", self.cube.is_solved());
                }

                Step::Applied {
                    index,
                    token,
                    turns,
                }
            }
            Err(error) => {
                warn!(target: "playback", "Skipping move {} ({token}): {error}", index + 1);

                Step::Skipped {
                    index,
                    token,
                    error,
                }
            }
        }
    }

    /// Index of the next move to perform
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.solution.len()
    }

    pub fn is_empty(&self) -> bool {
        self.solution.is_empty()
    }

    pub fn is_finished(&self) -> bool {
        self.cursor == self.solution.len()
    }

    pub fn status(&self) -> Status<'_> {
        match self.solution.get(self.cursor) {
            Some(token) => Status::Pending {
                number: self.cursor + 1,
                total: self.solution.len(),
                token,
            },
            None => Status::Solved,
        }
    }

    /// A description of the next move, when it is a plain face turn.
    pub fn description(&self) -> Option<String> {
        let token = self.solution.get(self.cursor)?;
        Turn::parse(token.as_str()).map(Turn::description)
    }

    pub fn solution(&self) -> &MoveSequence {
        &self.solution
    }

    pub fn cube(&self) -> &LogicalCube {
        &self.cube
    }

    pub fn visual(&self) -> &VisualCube {
        &self.visual
    }

    pub fn map(&self) -> &ColorNotationMap {
        &self.map
    }
}
