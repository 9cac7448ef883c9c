//! # Tuning Module
//!
//! An instrument tuning is the ordered list of open notes, one per string.
//! String 1 is the first entry. Entries are kept exactly as entered so that an
//! unknown name is reported at the position that uses it.

use std::fmt;

use crate::error::{FretboardError, Result};
use crate::pitch::{self, PitchClass};

/// Ordered open-string note names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tuning {
    notes: Vec<String>,
}

impl Tuning {
    pub fn new(notes: Vec<String>) -> Self {
        Self { notes }
    }

    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(names.into_iter().map(Into::into).collect())
    }

    pub fn string_count(&self) -> usize {
        self.notes.len()
    }

    pub fn notes(&self) -> &[String] {
        &self.notes
    }

    /// Open note name of the 1-based `string`, as entered.
    pub fn open_note(&self, string: usize) -> Result<&str> {
        string
            .checked_sub(1)
            .and_then(|index| self.notes.get(index))
            .map(String::as_str)
            .ok_or(FretboardError::InvalidStringIndex {
                string,
                string_count: self.notes.len(),
            })
    }

    /// Pitch class of the 1-based `string` played open.
    pub fn open_pitch_class(&self, string: usize) -> Result<PitchClass> {
        pitch::note_to_pitch_class(self.open_note(string)?)
    }

    /// Checks that every string resolves to a known note.
    ///
    /// Returns the first failure, scanning from string 1.
    pub fn validate(&self) -> Result<()> {
        for note in &self.notes {
            pitch::note_to_pitch_class(note)?;
        }
        Ok(())
    }
}

impl Default for Tuning {
    fn default() -> Self {
        TuningPreset::Standard.tuning()
    }
}

impl fmt::Display for Tuning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.notes.join(" "))
    }
}

/// Commonly used tunings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TuningPreset {
    Standard,
    DropD,
    Dadgad,
    OpenG,
    Bass,
    SevenString,
}

impl TuningPreset {
    pub const ALL: [TuningPreset; 6] = [
        TuningPreset::Standard,
        TuningPreset::DropD,
        TuningPreset::Dadgad,
        TuningPreset::OpenG,
        TuningPreset::Bass,
        TuningPreset::SevenString,
    ];

    /// Open notes in string order (string 1 first).
    pub fn notes(self) -> &'static [&'static str] {
        match self {
            TuningPreset::Standard => &["E", "A", "D", "G", "B", "E"],
            TuningPreset::DropD => &["D", "A", "D", "G", "B", "E"],
            TuningPreset::Dadgad => &["D", "A", "D", "G", "A", "D"],
            TuningPreset::OpenG => &["D", "G", "D", "G", "B", "D"],
            TuningPreset::Bass => &["E", "A", "D", "G"],
            TuningPreset::SevenString => &["B", "E", "A", "D", "G", "B", "E"],
        }
    }

    pub fn tuning(self) -> Tuning {
        Tuning::from_names(self.notes().iter().copied())
    }

    /// Finds the preset whose notes match `tuning`, ignoring case.
    pub fn matching(tuning: &Tuning) -> Option<TuningPreset> {
        Self::ALL.into_iter().find(|preset| {
            let notes = preset.notes();
            notes.len() == tuning.string_count()
                && notes.iter().zip(tuning.notes()).all(|(preset_note, note)| {
                    pitch::normalize_note_name(note) == *preset_note
                })
        })
    }
}

impl fmt::Display for TuningPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TuningPreset::Standard => "Standard",
            TuningPreset::DropD => "Drop D",
            TuningPreset::Dadgad => "DADGAD",
            TuningPreset::OpenG => "Open G",
            TuningPreset::Bass => "Bass (4 strings)",
            TuningPreset::SevenString => "Seven-string",
        };
        f.write_str(name)
    }
}
