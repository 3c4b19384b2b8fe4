use log::info;
use thiserror::Error;

use crate::{moves::MoveSequence, notation::FaceletString};

#[derive(Error, Debug)]
pub enum SolveFailed {
    #[error("The solver rejected the cube: {0}")]
    Rejected(String),
    #[error("Could not communicate with the solver: {0}")]
    Io(#[from] std::io::Error),
}

/// An external solver that turns a facelet string into move text.
pub trait SolvingOracle {
    /// Return the whitespace separated solution for the cube, or why there is
    /// none.
    fn solve_text(&mut self, facelets: &FaceletString) -> Result<String, SolveFailed>;
}

impl<F> SolvingOracle for F
where
    F: FnMut(&FaceletString) -> Result<String, SolveFailed>,
{
    fn solve_text(&mut self, facelets: &FaceletString) -> Result<String, SolveFailed> {
        self(facelets)
    }
}

/// Ask the oracle for a solution. Failures are passed through as they are.
pub fn solve(
    oracle: &mut impl SolvingOracle,
    facelets: &FaceletString,
) -> Result<MoveSequence, SolveFailed> {
    info!(target: "oracle", "Solving {facelets}");

    let solution = MoveSequence::parse(&oracle.solve_text(facelets)?);

    info!(target: "oracle", "Solution has {} moves: {solution}", solution.len());

    Ok(solution)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_oracle_text() {
        let mut oracle = |_: &FaceletString| -> Result<String, SolveFailed> {
            Ok("R U' F2 \n".to_owned())
        };

        let solution = solve(&mut oracle, &FaceletString::solved()).unwrap();
        assert_eq!(solution.to_string(), "R U' F2");
    }

    #[test]
    fn passes_failures_through() {
        let mut oracle = |_: &FaceletString| -> Result<String, SolveFailed> {
            Err(SolveFailed::Rejected(
                "Error 2: not all edges exist".to_owned(),
            ))
        };

        let err = solve(&mut oracle, &FaceletString::solved()).unwrap_err();
        assert!(matches!(err, SolveFailed::Rejected(ref v) if v == "Error 2: not all edges exist"));
    }
}
