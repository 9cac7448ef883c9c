//! # Fretboard Diagram Module
//!
//! The grid model behind the fretboard view. A [`Diagram`] has one row per
//! string and one column per fret in a [`FretRange`]. Each parsed position is
//! resolved through the pitch engine and its label stored in the matching cell.
//!
//! Positions that fail to resolve do not abort the build. They are collected in
//! [`Diagram::rejected`] so the view can show them next to the rest of the board.

use std::collections::BTreeMap;
use std::ops::RangeInclusive;

use crate::error::{FretboardError, Result};
use crate::pitch::{self, DisplayMode};
use crate::positions::Position;
use crate::tuning::Tuning;

/// Inclusive range of frets shown on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FretRange {
    start: i32,
    end: i32,
}

impl FretRange {
    pub fn new(start: i32, end: i32) -> Result<Self> {
        if start > end {
            return Err(FretboardError::InvalidFretRange { start, end });
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> i32 {
        self.start
    }

    pub fn end(&self) -> i32 {
        self.end
    }

    pub fn frets(&self) -> RangeInclusive<i32> {
        self.start..=self.end
    }

    /// Number of fret columns. Never zero.
    pub fn len(&self) -> usize {
        (self.end as i64 - self.start as i64 + 1) as usize
    }

    pub fn contains(&self, fret: i32) -> bool {
        self.frets().contains(&fret)
    }

    /// Column index of `fret`, counting from the start of the range.
    pub fn column_of(&self, fret: i32) -> Option<usize> {
        self.contains(fret)
            .then(|| (fret as i64 - self.start as i64) as usize)
    }
}

impl Default for FretRange {
    fn default() -> Self {
        Self { start: 0, end: 12 }
    }
}

/// A position the engine could not label, with the reason.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedPosition {
    pub position: Position,
    pub error: FretboardError,
}

/// A labelled fretboard grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagram {
    strings: usize,
    range: FretRange,
    marks: BTreeMap<(usize, i32), &'static str>,
    rejected: Vec<RejectedPosition>,
    off_grid: Vec<Position>,
}

impl Diagram {
    /// An empty grid for `strings` strings over `range`.
    pub fn empty(strings: usize, range: FretRange) -> Self {
        Self {
            strings,
            range,
            marks: BTreeMap::new(),
            rejected: Vec::new(),
            off_grid: Vec::new(),
        }
    }

    /// Labels every position that lands on the grid.
    ///
    /// Positions are applied in order, so a later duplicate replaces the
    /// label of an earlier one. Frets outside the range have no column to
    /// draw in and are listed in [`Diagram::off_grid`]. Strings the tuning
    /// does not have are engine errors and end up in [`Diagram::rejected`].
    pub fn build(
        tuning: &Tuning,
        range: FretRange,
        mode: DisplayMode,
        positions: &[Position],
    ) -> Self {
        let mut diagram = Self::empty(tuning.string_count(), range);

        for &position in positions {
            if !range.contains(position.fret) {
                diagram.off_grid.push(position);
                continue;
            }
            match pitch::resolve_pitch_class(tuning, position.string, position.fret) {
                Ok(pitch_class) => {
                    let label = pitch::label_for(pitch_class, mode);
                    diagram.marks.insert((position.string, position.fret), label);
                }
                Err(error) => diagram.rejected.push(RejectedPosition { position, error }),
            }
        }

        diagram
    }

    /// True when the grid has a cell for `position`.
    pub fn has_cell(&self, position: Position) -> bool {
        (1..=self.strings).contains(&position.string) && self.range.contains(position.fret)
    }

    pub fn strings(&self) -> usize {
        self.strings
    }

    pub fn range(&self) -> FretRange {
        self.range
    }

    pub fn label_at(&self, string: usize, fret: i32) -> Option<&'static str> {
        self.marks.get(&(string, fret)).copied()
    }

    /// Labelled cells as `((string, fret), label)`, ordered by string then fret.
    pub fn marks(&self) -> impl Iterator<Item = ((usize, i32), &'static str)> + '_ {
        self.marks.iter().map(|(&cell, &label)| (cell, label))
    }

    pub fn mark_count(&self) -> usize {
        self.marks.len()
    }

    pub fn rejected(&self) -> &[RejectedPosition] {
        &self.rejected
    }

    pub fn off_grid(&self) -> &[Position] {
        &self.off_grid
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pitch::PitchClass;
    use crate::tuning::TuningPreset;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_fret_range() {
        let range = FretRange::new(3, 7).unwrap();
        assert_eq!(range.len(), 5);
        assert!(range.contains(3) && range.contains(7));
        assert!(!range.contains(8));
        assert_eq!(range.column_of(5), Some(2));
        assert_eq!(range.column_of(2), None);
        assert_eq!(FretRange::new(4, 4).unwrap().len(), 1);
    }

    #[test]
    fn test_fret_range_rejects_inverted() {
        assert_eq!(
            FretRange::new(5, 2),
            Err(FretboardError::InvalidFretRange { start: 5, end: 2 })
        );
    }

    #[test]
    fn test_negative_start_fret() {
        let range = FretRange::new(-2, 2).unwrap();
        assert_eq!(range.len(), 5);
        assert_eq!(range.column_of(-2), Some(0));
    }

    #[test]
    fn test_build_labels_positions() {
        let tuning = TuningPreset::Standard.tuning();
        let positions = [Position::new(6, 0), Position::new(2, 3)];
        let diagram = Diagram::build(
            &tuning,
            FretRange::default(),
            DisplayMode::Absolute,
            &positions,
        );

        assert_eq!(diagram.strings(), 6);
        assert_eq!(diagram.label_at(6, 0), Some("E"));
        assert_eq!(diagram.label_at(2, 3), Some("C"));
        assert_eq!(diagram.label_at(1, 1), None);
        assert!(diagram.rejected().is_empty());
        assert!(diagram.off_grid().is_empty());
    }

    #[test]
    fn test_build_last_duplicate_wins() {
        let tuning = Tuning::from_names(["E", "A"]);
        let range = FretRange::new(0, 5).unwrap();
        let positions = [Position::new(1, 1), Position::new(1, 1)];
        let diagram = Diagram::build(
            &tuning,
            range,
            DisplayMode::RelativeToRoot(PitchClass::E),
            &positions,
        );
        assert_eq!(diagram.mark_count(), 1);
        assert_eq!(diagram.label_at(1, 1), Some("b2"));
    }

    #[test]
    fn test_build_collects_off_grid_frets() {
        let tuning = TuningPreset::Bass.tuning();
        let range = FretRange::new(0, 5).unwrap();
        let positions = [Position::new(1, 7), Position::new(2, -1), Position::new(4, 5)];
        let diagram = Diagram::build(&tuning, range, DisplayMode::Absolute, &positions);
        assert_eq!(diagram.off_grid(), &[Position::new(1, 7), Position::new(2, -1)]);
        assert!(diagram.rejected().is_empty());
        assert_eq!(diagram.label_at(4, 5), Some("C"));
    }

    #[test]
    fn test_build_rejects_missing_strings() {
        let tuning = TuningPreset::Bass.tuning();
        let range = FretRange::new(0, 5).unwrap();
        let positions = [Position::new(5, 0), Position::new(0, 0), Position::new(1, 0)];
        let diagram = Diagram::build(&tuning, range, DisplayMode::Absolute, &positions);
        assert_eq!(
            diagram.rejected(),
            &[
                RejectedPosition {
                    position: Position::new(5, 0),
                    error: FretboardError::InvalidStringIndex {
                        string: 5,
                        string_count: 4
                    },
                },
                RejectedPosition {
                    position: Position::new(0, 0),
                    error: FretboardError::InvalidStringIndex {
                        string: 0,
                        string_count: 4
                    },
                },
            ]
        );
        assert!(diagram.off_grid().is_empty());
        assert_eq!(diagram.label_at(1, 0), Some("E"));
    }

    #[test]
    fn test_build_at_top_of_fret_range() {
        let tuning = Tuning::from_names(["E"]);
        let range = FretRange::new(i32::MAX - 1, i32::MAX).unwrap();
        let positions = [Position::new(1, i32::MAX)];
        let diagram = Diagram::build(&tuning, range, DisplayMode::Absolute, &positions);
        assert_eq!(range.len(), 2);
        assert_eq!(diagram.label_at(1, i32::MAX), Some("B"));
    }

    #[test]
    fn test_build_rejects_unknown_tuning_notes() {
        let tuning = Tuning::from_names(["E", "H"]);
        let positions = [Position::new(2, 0), Position::new(1, 0)];
        let diagram = Diagram::build(
            &tuning,
            FretRange::default(),
            DisplayMode::Absolute,
            &positions,
        );
        assert_eq!(
            diagram.rejected(),
            &[RejectedPosition {
                position: Position::new(2, 0),
                error: FretboardError::UnknownNote {
                    note: "H".to_string()
                },
            }]
        );
        assert_eq!(diagram.label_at(1, 0), Some("E"));
    }

    #[test]
    fn test_marks_are_ordered() {
        let tuning = TuningPreset::Standard.tuning();
        let positions = [Position::new(3, 2), Position::new(1, 5), Position::new(1, 0)];
        let diagram = Diagram::build(
            &tuning,
            FretRange::default(),
            DisplayMode::Absolute,
            &positions,
        );
        let cells: Vec<(usize, i32)> = diagram.marks().map(|(cell, _)| cell).collect();
        assert_eq!(cells, vec![(1, 0), (1, 5), (3, 2)]);
    }
}
