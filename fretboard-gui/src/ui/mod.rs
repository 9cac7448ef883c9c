//! # UI Module
//!
//! This module contains the layout of the fretboard application.

pub mod main_display;
