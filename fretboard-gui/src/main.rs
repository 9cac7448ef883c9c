//! # Fretboard - Interactive Fretboard Diagram
//!
//! This module contains the GUI application for the fretboard diagram. The user
//! picks a tuning, a fret range, a root and a notation, types positions as
//! `string,fret` lines (or clicks cells), and the board labels each position with
//! its note name or its scale degree.
//!
//! ## Architecture
//! - **Core**: `fretboard-core` does all note naming and parsing
//! - **View**: Iced application with dark theme, redrawn on every message
//! - **Configuration**: initial state read from `FRETBOARD_CONFIG` when set

mod ui;
mod widgets;

use anyhow::{Context, anyhow, bail};
use fretboard_core::{
    Diagram, DisplayMode, FretRange, Notation, PitchClass, Position, Tuning, TuningPreset,
    config::FretboardConfig,
};
use iced::widget::text_editor;
use iced::{Element, Theme};
use std::fmt;
use ui::main_display::create_main_view;

/// Widest fret range the board will draw.
const MAX_FRET_COLUMNS: usize = 48;

/// Main entry point for the Fretboard application.
pub fn main() -> anyhow::Result<()> {
    env_logger::init();
    log::info!("[MAIN] Starting Fretboard application...");
    iced::application("Fretboard", FretboardApp::update, FretboardApp::view)
        .theme(FretboardApp::theme)
        .run()
        .map_err(|e| anyhow!("GUI event loop failed: {e}"))?;
    log::info!("[MAIN] Application finished");
    Ok(())
}

/// Application message types for the Iced GUI framework.
#[derive(Debug, Clone)]
pub enum Message {
    // Fret range inputs
    StartFretChanged(String),
    EndFretChanged(String),

    // Tuning
    TuningNoteChanged(usize, String), // (0-based string slot, note text)
    PresetSelected(TuningPreset),

    // Display mode
    RootSelected(RootChoice),
    NotationSelected(Notation),

    // Positions
    PositionsEdited(text_editor::Action),
    CellClicked(Position), // Click on a board cell toggles that position
    Update,                // Re-render the labels from the positions text
}

/// Entry in the root selector. `NoRoot` is the "no root selected" choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RootChoice {
    NoRoot,
    Note(PitchClass),
}

impl RootChoice {
    /// "None" followed by the twelve pitch classes.
    pub fn all() -> Vec<RootChoice> {
        std::iter::once(RootChoice::NoRoot)
            .chain(PitchClass::all().map(RootChoice::Note))
            .collect()
    }

    pub fn pitch_class(self) -> Option<PitchClass> {
        match self {
            RootChoice::NoRoot => None,
            RootChoice::Note(pitch) => Some(pitch),
        }
    }
}

impl From<Option<PitchClass>> for RootChoice {
    fn from(root: Option<PitchClass>) -> Self {
        root.map_or(RootChoice::NoRoot, RootChoice::Note)
    }
}

impl fmt::Display for RootChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RootChoice::NoRoot => f.write_str("None"),
            RootChoice::Note(pitch) => write!(f, "{pitch}"),
        }
    }
}

/// UI-specific data needed for rendering the interface.
#[derive(Debug, Clone)]
pub struct AppDisplayData {
    // Raw text of the fret range inputs
    pub start_fret: String,
    pub end_fret: String,

    // One note name per string, string 1 first
    pub tuning: Vec<String>,

    pub root: RootChoice,
    pub notation: Notation,

    // Last rendered board and the problems found while rendering it
    pub diagram: Diagram,
    pub problems: Vec<String>,
}

impl AppDisplayData {
    pub fn preset(&self) -> Option<TuningPreset> {
        TuningPreset::matching(&Tuning::new(self.tuning.clone()))
    }
}

/// Main application state.
struct FretboardApp {
    display_data: AppDisplayData,
    positions: text_editor::Content,
}

impl Default for FretboardApp {
    /// Creates the application from the startup configuration and renders it once.
    fn default() -> Self {
        log::info!("[MAIN] Creating FretboardApp...");
        let config = FretboardConfig::from_env();
        let tuning = config.normalized_tuning();
        let range = config.fret_range().unwrap_or_default();

        let mut app = Self {
            display_data: AppDisplayData {
                start_fret: config.start_fret.to_string(),
                end_fret: config.end_fret.to_string(),
                diagram: Diagram::empty(tuning.len(), range),
                tuning,
                root: config.root().into(),
                notation: config.notation,
                problems: Vec::new(),
            },
            positions: text_editor::Content::with_text(&config.positions),
        };
        app.update_display();
        app
    }
}

impl FretboardApp {
    /// Handles application state updates based on incoming messages.
    ///
    /// Editing the fret range redraws an empty board; the labels come back on
    /// the next `Update`. Selector and tuning changes also wait for `Update`.
    fn update(&mut self, message: Message) {
        log::debug!("[UPDATE] Received message: {:?}", message);

        match message {
            Message::StartFretChanged(value) => {
                self.display_data.start_fret = value;
                self.generate_fretboard();
            }
            Message::EndFretChanged(value) => {
                self.display_data.end_fret = value;
                self.generate_fretboard();
            }
            Message::TuningNoteChanged(slot, note) => {
                if let Some(entry) = self.display_data.tuning.get_mut(slot) {
                    *entry = note;
                }
            }
            Message::PresetSelected(preset) => {
                log::info!("[MAIN] Tuning preset selected: {preset}");
                self.display_data.tuning = preset.notes().iter().map(|n| n.to_string()).collect();
                self.generate_fretboard();
            }
            Message::RootSelected(root) => {
                self.display_data.root = root;
            }
            Message::NotationSelected(notation) => {
                self.display_data.notation = notation;
            }
            Message::PositionsEdited(action) => {
                self.positions.perform(action);
            }
            Message::CellClicked(position) => {
                let text = fretboard_core::toggle_position(&self.positions.text(), position);
                self.positions = text_editor::Content::with_text(&text);
                self.update_display();
            }
            Message::Update => {
                self.update_display();
            }
        }
    }

    fn display_mode(&self) -> DisplayMode {
        DisplayMode::from_selection(
            self.display_data.root.pitch_class(),
            self.display_data.notation,
        )
    }

    fn fret_range(&self) -> anyhow::Result<FretRange> {
        parse_fret_range(&self.display_data.start_fret, &self.display_data.end_fret)
    }

    /// Replaces the board with an empty grid for the current tuning and range.
    ///
    /// Keeps the previous board when the range inputs are not valid yet.
    fn generate_fretboard(&mut self) {
        self.display_data.problems.clear();
        match self.fret_range() {
            Ok(range) => {
                self.display_data.diagram = Diagram::empty(self.display_data.tuning.len(), range);
            }
            Err(e) => self.display_data.problems.push(format!("{e:#}")),
        }
    }

    /// Rebuilds the board and labels every position in the positions text.
    fn update_display(&mut self) {
        self.generate_fretboard();
        if !self.display_data.problems.is_empty() {
            return;
        }

        let tuning = Tuning::new(self.display_data.tuning.clone());
        let range = self.display_data.diagram.range();
        let text = self.positions.text();
        log::debug!(
            "[MAIN] Rendering frets {}..={} with tuning {tuning}",
            range.start(),
            range.end()
        );

        if let Err(e) = tuning.validate() {
            log::warn!("[MAIN] Tuning is not valid: {e}");
            self.display_data.problems.push(format!("Tuning: {e}"));
        }

        match fretboard_core::render(&tuning, range, self.display_mode(), &text) {
            Ok(diagram) => {
                for problem in describe_problems(&diagram) {
                    if !self.display_data.problems.contains(&problem) {
                        self.display_data.problems.push(problem);
                    }
                }
                log::info!(
                    "[MAIN] Rendered {} labels ({} rejected, {} off the board)",
                    diagram.mark_count(),
                    diagram.rejected().len(),
                    diagram.off_grid().len()
                );
                self.display_data.diagram = diagram;
            }
            Err(e) => {
                log::warn!("[MAIN] Positions rejected: {e}");
                self.display_data.problems.push(e.to_string());
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        create_main_view(&self.display_data, &self.positions)
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

/// Parses the fret range inputs into a range the board can draw.
fn parse_fret_range(start: &str, end: &str) -> anyhow::Result<FretRange> {
    let start: i32 = start
        .trim()
        .parse()
        .context("Start fret must be a whole number")?;
    let end: i32 = end
        .trim()
        .parse()
        .context("End fret must be a whole number")?;
    let range = FretRange::new(start, end)?;
    if range.len() > MAX_FRET_COLUMNS {
        bail!("Fret range is too wide (at most {MAX_FRET_COLUMNS} frets)");
    }
    Ok(range)
}

/// Turns the rejected and off-board positions of a diagram into user-facing lines.
///
/// Tuning errors repeat for every position on the same string, so each one is
/// reported once.
fn describe_problems(diagram: &Diagram) -> Vec<String> {
    let mut problems: Vec<String> = Vec::new();

    for rejected in diagram.rejected() {
        let message = if rejected.error.is_tuning_error() {
            format!("Tuning: {}", rejected.error)
        } else {
            format!("Position {}: {}", rejected.position, rejected.error)
        };
        if !problems.contains(&message) {
            problems.push(message);
        }
    }

    if !diagram.off_grid().is_empty() {
        let skipped: Vec<String> = diagram.off_grid().iter().map(|p| p.to_string()).collect();
        problems.push(format!("Not on the board: {}", skipped.join("  ")));
    }

    problems
}
