//! Move notation.
//!
//! A solver speaks in tokens like `R`, `U'` or `F2`, which the cube model can
//! execute directly, and occasionally in whole-cube rotations (`X`, `Y`, `Z`)
//! or slice moves (`M`, `E`, `S`), which it cannot. The latter are replaced by
//! a pair of outer-layer turns from a fixed table. The pair turns the same two
//! outer layers a real rotation would, but leaves the middle layer and the
//! centers behind, so the replacement is not an exact rotation of the cube.

use std::{convert::Infallible, fmt::Display, str::FromStr};

use internment::ArcIntern;
use itertools::Itertools;
use phf::phf_map;
use thiserror::Error;

use crate::face::Face;

/// How far a face is turned
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum TurnKind {
    Clockwise,
    CounterClockwise,
    Double,
}

impl TurnKind {
    pub const ALL: [Self; 3] = [
        TurnKind::Clockwise,
        TurnKind::CounterClockwise,
        TurnKind::Double,
    ];

    pub fn inverse(self) -> TurnKind {
        match self {
            TurnKind::Clockwise => TurnKind::CounterClockwise,
            TurnKind::CounterClockwise => TurnKind::Clockwise,
            TurnKind::Double => TurnKind::Double,
        }
    }

    /// The number of clockwise quarter turns this turn is equivalent to.
    pub fn quarter_turns(self) -> usize {
        match self {
            TurnKind::Clockwise => 1,
            TurnKind::Double => 2,
            TurnKind::CounterClockwise => 3,
        }
    }

    pub fn suffix(self) -> &'static str {
        match self {
            TurnKind::Clockwise => "",
            TurnKind::CounterClockwise => "'",
            TurnKind::Double => "2",
        }
    }
}

/// A turn of a single outer face; the only kind of move the cube model
/// executes.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Turn {
    pub face: Face,
    pub kind: TurnKind,
}

impl Turn {
    pub fn new(face: Face, kind: TurnKind) -> Turn {
        Turn { face, kind }
    }

    /// Parse a primitive move. `R'` and `Ri` both mean a counter-clockwise
    /// turn, `R2` and `R2'` both mean a half turn.
    pub fn parse(mut token: &str) -> Option<Turn> {
        let kind = if let Some(rest) = token.strip_suffix("2'") {
            token = rest;
            TurnKind::Double
        } else if let Some(rest) = token.strip_suffix('\'') {
            token = rest;
            TurnKind::CounterClockwise
        } else if let Some(rest) = token.strip_suffix('i') {
            token = rest;
            TurnKind::CounterClockwise
        } else if let Some(rest) = token.strip_suffix('2') {
            token = rest;
            TurnKind::Double
        } else {
            TurnKind::Clockwise
        };

        let face = token.parse::<Face>().ok()?;
        Some(Turn { face, kind })
    }

    pub fn inverse(self) -> Turn {
        Turn {
            face: self.face,
            kind: self.kind.inverse(),
        }
    }

    /// A sentence describing the turn for someone holding the cube.
    pub fn description(self) -> String {
        let how = match self.kind {
            TurnKind::Clockwise => "clockwise",
            TurnKind::CounterClockwise => "counterclockwise",
            TurnKind::Double => "180°",
        };

        format!("Rotate {} face {how}", self.face.long_name())
    }
}

impl Display for Turn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.face, self.kind.suffix())
    }
}

static EXTENDED: phf::Map<&'static str, [&'static str; 2]> = phf_map! {
    // Whole-cube rotations
    "X" => ["R", "L'"],
    "X'" => ["R'", "L"],
    "Xi" => ["R'", "L"],
    "Y" => ["U", "D'"],
    "Y'" => ["U'", "D"],
    "Yi" => ["U'", "D"],
    "Z" => ["F", "B'"],
    "Z'" => ["F'", "B"],
    "Zi" => ["F'", "B"],

    // Slice moves
    "M" => ["L", "R'"],
    "M'" => ["L'", "R"],
    "Mi" => ["L'", "R"],
    "E" => ["D'", "U"],
    "E'" => ["D", "U'"],
    "Ei" => ["D", "U'"],
    "S" => ["F", "B'"],
    "S'" => ["F'", "B"],
    "Si" => ["F'", "B"],
};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown move `{0}`")]
pub struct UnknownMoveToken(pub MoveToken);

/// A single move as written by the solver.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MoveToken(ArcIntern<str>);

impl MoveToken {
    pub fn new(token: &str) -> MoveToken {
        MoveToken(ArcIntern::from(token))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this is a rotation or slice move that has to be expanded
    pub fn is_extended(&self) -> bool {
        EXTENDED.contains_key(self.as_str())
    }

    /// Replace rotations and slice moves by their outer-layer substitutes.
    /// Every other token, known or not, is returned unchanged.
    pub fn expand(&self) -> Vec<MoveToken> {
        match EXTENDED.get(self.as_str()) {
            Some(pair) => pair.iter().map(|v| MoveToken::new(v)).collect(),
            None => vec![self.clone()],
        }
    }

    /// Expand the token and interpret every part of the expansion as a turn.
    /// Fails without a partial result if any part is not a turn.
    pub fn turns(&self) -> Result<Vec<Turn>, UnknownMoveToken> {
        self.expand()
            .into_iter()
            .map(|token| Turn::parse(token.as_str()).ok_or(UnknownMoveToken(token)))
            .collect()
    }
}

impl Display for MoveToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<Turn> for MoveToken {
    fn from(value: Turn) -> Self {
        MoveToken::new(&value.to_string())
    }
}

/// The solver's answer, in the order the moves are to be performed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoveSequence(Vec<MoveToken>);

impl MoveSequence {
    pub fn new(tokens: Vec<MoveToken>) -> MoveSequence {
        MoveSequence(tokens)
    }

    /// Split whitespace-separated move text into tokens
    pub fn parse(text: &str) -> MoveSequence {
        MoveSequence(text.split_whitespace().map(MoveToken::new).collect())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&MoveToken> {
        self.0.get(index)
    }

    pub fn tokens(&self) -> &[MoveToken] {
        &self.0
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &MoveToken> {
        self.0.iter()
    }
}

impl FromStr for MoveSequence {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(MoveSequence::parse(s))
    }
}

impl Display for MoveSequence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.iter().join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_primitive_turns() {
        assert_eq!(Turn::parse("R"), Some(Turn::new(Face::R, TurnKind::Clockwise)));
        assert_eq!(
            Turn::parse("U'"),
            Some(Turn::new(Face::U, TurnKind::CounterClockwise))
        );
        assert_eq!(
            Turn::parse("Fi"),
            Some(Turn::new(Face::F, TurnKind::CounterClockwise))
        );
        assert_eq!(Turn::parse("D2"), Some(Turn::new(Face::D, TurnKind::Double)));
        assert_eq!(Turn::parse("B2'"), Some(Turn::new(Face::B, TurnKind::Double)));

        for bad in ["", "'", "2", "X", "R3", "RR", "r", "R''"] {
            assert_eq!(Turn::parse(bad), None, "{bad}");
        }
    }

    #[test]
    fn turns_print_as_they_parse() {
        for face in Face::ALL {
            for kind in TurnKind::ALL {
                let turn = Turn::new(face, kind);
                assert_eq!(Turn::parse(&turn.to_string()), Some(turn));
                assert_eq!(turn.inverse().inverse(), turn);
            }
        }
    }

    #[test]
    fn extended_tokens_expand_to_two_primitives() {
        for (token, _) in EXTENDED.entries() {
            let token = MoveToken::new(token);
            assert!(token.is_extended());

            let expansion = token.expand();
            assert_eq!(expansion.len(), 2, "{token}");
            assert!(expansion.iter().all(|v| Turn::parse(v.as_str()).is_some()));
        }

        assert_eq!(
            MoveToken::new("X").expand(),
            vec![MoveToken::new("R"), MoveToken::new("L'")]
        );
        assert_eq!(
            MoveToken::new("M").expand(),
            vec![MoveToken::new("L"), MoveToken::new("R'")]
        );
    }

    #[test]
    fn primitive_and_unknown_tokens_pass_through() {
        for face in Face::ALL {
            for kind in TurnKind::ALL {
                let token = MoveToken::from(Turn::new(face, kind));
                assert!(!token.is_extended());
                assert_eq!(token.expand(), vec![token.clone()]);
            }
        }

        let unknown = MoveToken::new("Rw");
        assert_eq!(unknown.expand(), vec![unknown.clone()]);
        assert_eq!(unknown.turns(), Err(UnknownMoveToken(unknown)));
    }

    #[test]
    fn describes_turns() {
        assert_eq!(
            Turn::parse("R").unwrap().description(),
            "Rotate RIGHT face clockwise"
        );
        assert_eq!(
            Turn::parse("U'").unwrap().description(),
            "Rotate TOP face counterclockwise"
        );
        assert_eq!(
            Turn::parse("B2").unwrap().description(),
            "Rotate BACK face 180°"
        );
    }

    #[test]
    fn parses_solver_output() {
        let seq = MoveSequence::parse("  R U'\tF2\nX  ");
        assert_eq!(seq.len(), 4);
        assert_eq!(seq.to_string(), "R U' F2 X");
        assert!(MoveSequence::parse("   ").is_empty());
    }
}
