//! Custom canvas widgets.

pub mod fretboard_grid;
