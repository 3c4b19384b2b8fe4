//! Turn a scanned cube into a solver's facelet notation and replay the
//! solver's answer one move at a time on a sticker-level model.
//!
//! The pipeline is
//!
//! 1. [`ColorNotationMap::resolve`] reads the six centers of a [`ScanResult`],
//! 2. [`FaceletString::encode`] writes the scan in solver notation,
//! 3. [`oracle::solve`] hands it to a [`SolvingOracle`] and parses the moves,
//! 4. [`Playback`] rebuilds the scrambled cube from the solution and steps
//!    through it, keeping a [`VisualCube`] in sync for rendering.

pub mod color;
pub mod cube;
pub mod face;
pub mod moves;
pub mod notation;
pub mod oracle;
pub mod playback;
pub mod projection;
pub mod scan;

pub use color::Color;
pub use cube::LogicalCube;
pub use face::{Face, ScanLabel};
pub use moves::{MoveSequence, MoveToken, Turn, TurnKind, UnknownMoveToken};
pub use notation::{ColorNotationMap, FaceletString};
pub use oracle::{SolveFailed, SolvingOracle};
pub use playback::{Playback, Status, Step};
pub use projection::{FaceletSource, VisualCube};
pub use scan::{FaceGrid, ScanError, ScanResult};
