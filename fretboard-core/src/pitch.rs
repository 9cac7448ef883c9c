//! # Pitch Engine
//!
//! This module maps fretted positions to pitch classes and pitch classes to
//! display labels. Everything here is pure and works on immutable static tables.
//!
//! ## Features
//! - Case-insensitive note name normalization and lookup
//! - Floor-mod pitch arithmetic, so negative frets wrap correctly
//! - Absolute (sharp) and root-relative (scale degree) labels

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::error::{FretboardError, Result};
use crate::tuning::Tuning;

/// Number of pitch classes in an octave.
pub const SEMITONES: i32 = 12;

/// Note names using flat spelling, indexed by pitch class.
///
/// Only contributes spellings to [`note_to_pitch_class`]; absolute labels are
/// always drawn from [`NOTES_SHARP`].
pub const NOTES_FLAT: [&str; 12] = [
    "C", "Db", "D", "Eb", "E", "F", "Gb", "G", "Ab", "A", "Bb", "B",
];

/// Note names using sharp spelling, indexed by pitch class.
pub const NOTES_SHARP: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

/// Scale-degree labels, indexed by semitone distance from the root.
pub const INTERVALS: [&str; 12] = [
    "1", "b2", "2", "b3", "3", "4", "b5", "5", "b6", "6", "b7", "7",
];

/// Canonical note name to pitch class value.
///
/// Built once from the sharp and flat tables, so both spellings of every
/// accidental resolve (17 entries in total).
static NOTE_TO_VAL: Lazy<BTreeMap<&'static str, u8>> = Lazy::new(|| {
    NOTES_SHARP
        .iter()
        .zip(NOTES_FLAT.iter())
        .enumerate()
        .flat_map(|(value, (&sharp, &flat))| [(sharp, value as u8), (flat, value as u8)])
        .collect()
});

/// One of the twelve pitch classes, 0 (C) through 11 (B).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PitchClass(u8);

impl PitchClass {
    pub const C: PitchClass = PitchClass(0);
    pub const E: PitchClass = PitchClass(4);

    /// Returns the pitch class for `value`, or `None` when it is outside 0..=11.
    pub fn new(value: u8) -> Option<Self> {
        (value < SEMITONES as u8).then_some(PitchClass(value))
    }

    /// Reduces any semitone count to its pitch class.
    ///
    /// Uses a floor-mod, so `-1` maps to 11 (B) rather than a negative index.
    pub fn from_semitones(semitones: i32) -> Self {
        PitchClass(semitones.rem_euclid(SEMITONES) as u8)
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// Moves this pitch class by `semitones`, wrapping around the octave.
    pub fn transpose(self, semitones: i32) -> Self {
        // Reduce first so frets near i32::MAX cannot overflow
        Self::from_semitones(self.0 as i32 + semitones.rem_euclid(SEMITONES))
    }

    /// Semitone distance from `root` up to this pitch class, in 0..=11.
    pub fn interval_from(self, root: PitchClass) -> usize {
        (self.0 as i32 - root.0 as i32).rem_euclid(SEMITONES) as usize
    }

    /// Iterates all twelve pitch classes in ascending order.
    pub fn all() -> impl Iterator<Item = PitchClass> {
        (0..SEMITONES as u8).map(PitchClass)
    }

    /// The sharp spelling of this pitch class.
    pub fn sharp_name(self) -> &'static str {
        NOTES_SHARP[self.0 as usize]
    }
}

impl fmt::Display for PitchClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.sharp_name())
    }
}

/// Notation flag as picked by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Notation {
    #[default]
    Absolute,
    Relative,
}

impl Notation {
    pub const ALL: [Notation; 2] = [Notation::Absolute, Notation::Relative];
}

impl fmt::Display for Notation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notation::Absolute => f.write_str("Absolute"),
            Notation::Relative => f.write_str("Relative"),
        }
    }
}

/// How a pitch class is turned into a label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayMode {
    /// Sharp-spelled note name.
    Absolute,
    /// Scale degree relative to the given root.
    RelativeToRoot(PitchClass),
}

impl DisplayMode {
    /// Combines a root selection and a notation flag into a display mode.
    ///
    /// Without a root there is nothing to be relative to, so the result is
    /// absolute whatever the notation flag says.
    pub fn from_selection(root: Option<PitchClass>, notation: Notation) -> Self {
        match (root, notation) {
            (None, _) | (_, Notation::Absolute) => DisplayMode::Absolute,
            (Some(root), Notation::Relative) => DisplayMode::RelativeToRoot(root),
        }
    }
}

/// Root index meaning "no root selected".
pub const NO_ROOT: i32 = -1;

/// Maps a raw root index from a selector to a root.
///
/// `-1` is the "no root" sentinel; any value outside 0..=11 is treated the same way.
pub fn root_from_index(index: i32) -> Option<PitchClass> {
    u8::try_from(index).ok().and_then(PitchClass::new)
}

/// Canonicalizes user input for table lookup.
///
/// Trims whitespace, uppercases the letter and folds a `b`/`B` accidental to `b`.
/// Anything else is passed through untouched and will fail the lookup.
pub fn normalize_note_name(name: &str) -> String {
    let mut chars = name.trim().chars();
    let Some(letter) = chars.next() else {
        return String::new();
    };

    let mut normalized = String::with_capacity(name.len());
    normalized.extend(letter.to_uppercase());
    for c in chars {
        match c {
            'b' | 'B' => normalized.push('b'),
            other => normalized.push(other),
        }
    }
    normalized
}

/// Looks up the pitch class of a note name such as `"E"`, `"c#"` or `"Bb"`.
pub fn note_to_pitch_class(name: &str) -> Result<PitchClass> {
    let normalized = normalize_note_name(name);
    NOTE_TO_VAL
        .get(normalized.as_str())
        .map(|&value| PitchClass(value))
        .ok_or_else(|| FretboardError::UnknownNote {
            note: name.trim().to_string(),
        })
}

/// Resolves the pitch class sounded at `fret` on the 1-based `string`.
///
/// The fret is not range-checked; negative values wrap downwards.
///
/// # Errors
/// * `InvalidStringIndex` - `string` is outside `1..=tuning.string_count()`
/// * `UnknownNote` - the open note of that string is not a recognized name
pub fn resolve_pitch_class(tuning: &Tuning, string: usize, fret: i32) -> Result<PitchClass> {
    let open = tuning.open_pitch_class(string)?;
    Ok(open.transpose(fret))
}

/// Returns the label for `pitch` under `mode`.
pub fn label_for(pitch: PitchClass, mode: DisplayMode) -> &'static str {
    match mode {
        DisplayMode::Absolute => pitch.sharp_name(),
        DisplayMode::RelativeToRoot(root) => INTERVALS[pitch.interval_from(root)],
    }
}
