// fretboard-core/src/lib.rs

//! The core logic for the fretboard diagram.
//! This crate names the notes under fretted positions, either as absolute
//! note names or as scale degrees relative to a root, and parses the
//! positions text. It is completely headless and contains no GUI code.

pub mod config;
pub mod error;
pub mod fretboard;
pub mod pitch;
pub mod positions;
pub mod tuning;

pub use error::{FretboardError, Result};
pub use fretboard::{Diagram, FretRange, RejectedPosition};
pub use pitch::{DisplayMode, Notation, PitchClass, label_for, resolve_pitch_class};
pub use positions::{Position, parse_positions, toggle_position};
pub use tuning::{Tuning, TuningPreset};

/// Parses `positions_text` and labels it on a fresh diagram.
///
/// Malformed positions text fails the whole update. Positions the engine
/// cannot label are reported on the returned diagram instead.
pub fn render(
    tuning: &Tuning,
    range: FretRange,
    mode: DisplayMode,
    positions_text: &str,
) -> Result<Diagram> {
    let positions = parse_positions(positions_text)?;
    Ok(Diagram::build(tuning, range, mode, &positions))
}
