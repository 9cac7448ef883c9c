//! # Configuration Module
//!
//! Startup settings for the fretboard view, read from an optional JSON file.
//! The file is only ever read. Every field is optional and falls back to its
//! default.

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::fretboard::FretRange;
use crate::pitch::{self, DisplayMode, Notation, PitchClass};
use crate::tuning::TuningPreset;

/// Environment variable holding the path of the configuration file.
pub const CONFIG_ENV_VAR: &str = "FRETBOARD_CONFIG";

/// Initial state of the fretboard view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FretboardConfig {
    /// Open notes, string 1 first.
    pub tuning: Vec<String>,
    pub start_fret: i32,
    pub end_fret: i32,
    /// Root pitch class index (0 = C). `-1` means no root is selected.
    pub root: i32,
    pub notation: Notation,
    /// Positions text, one `string,fret` per line.
    pub positions: String,
}

impl Default for FretboardConfig {
    fn default() -> Self {
        let range = FretRange::default();
        Self {
            tuning: TuningPreset::Standard
                .notes()
                .iter()
                .map(|note| note.to_string())
                .collect(),
            start_fret: range.start(),
            end_fret: range.end(),
            root: pitch::NO_ROOT,
            notation: Notation::default(),
            positions: String::new(),
        }
    }
}

impl FretboardConfig {
    pub fn from_json_str(json: &str) -> anyhow::Result<Self> {
        serde_json::from_str(json).context("Failed to parse fretboard configuration")
    }

    /// Reads the configuration from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let data = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config = Self::from_json_str(&data)
            .with_context(|| format!("Invalid config file {}", path.display()))?;
        log::info!("[CONFIG] Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Loads the file named by `FRETBOARD_CONFIG`, or returns the defaults.
    ///
    /// A file that cannot be loaded is logged and replaced by the defaults so
    /// the view still starts.
    pub fn from_env() -> Self {
        let Some(path) = std::env::var_os(CONFIG_ENV_VAR) else {
            log::debug!("[CONFIG] {CONFIG_ENV_VAR} not set, using defaults");
            return Self::default();
        };
        match Self::load(&path) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("[CONFIG] {e:#}; using defaults");
                Self::default()
            }
        }
    }

    pub fn fret_range(&self) -> Result<FretRange> {
        FretRange::new(self.start_fret, self.end_fret)
    }

    /// Root as a pitch class. Any index outside 0..=11 counts as no root.
    pub fn root(&self) -> Option<PitchClass> {
        pitch::root_from_index(self.root)
    }

    pub fn display_mode(&self) -> DisplayMode {
        DisplayMode::from_selection(self.root(), self.notation)
    }

    /// Canonical spelling of each tuning entry, leaving unknown names untouched.
    pub fn normalized_tuning(&self) -> Vec<String> {
        self.tuning
            .iter()
            .map(|note| match pitch::note_to_pitch_class(note) {
                Ok(_) => pitch::normalize_note_name(note),
                Err(_) => note.clone(),
            })
            .collect()
    }
}
