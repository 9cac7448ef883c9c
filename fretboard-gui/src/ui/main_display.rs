//! # Main Display Module
//!
//! This module contains the main layout of the fretboard application: the
//! board panel on the left and the settings sidebar on the right.

use iced::widget::{
    Column, Row, Space, button, column, container, pick_list, row, text, text_editor, text_input,
};
use iced::{Alignment, Color, Element, Length};

use fretboard_core::{Notation, TuningPreset};

use crate::widgets::fretboard_grid::FretboardGrid;
use crate::{AppDisplayData, Message, RootChoice};

/// Color used for problems reported under the board.
const PROBLEM_COLOR: Color = Color::from_rgb(0.95, 0.45, 0.4);

/// Creates the complete main application view
pub fn create_main_view<'a>(
    data: &'a AppDisplayData,
    positions: &'a text_editor::Content,
) -> Element<'a, Message> {
    let title = text("Fretboard").size(28);

    let main_content = row![
        column![
            title,
            Space::with_height(20),
            create_board_panel(data),
        ]
        .width(Length::Fill)
        .spacing(10),
        Space::with_width(10),
        create_sidebar(data, positions),
    ]
    .align_y(Alignment::Start)
    .padding(20);

    container(main_content)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

/// Creates the board panel: the grid canvas followed by any problems.
fn create_board_panel(data: &AppDisplayData) -> Element<'_, Message> {
    let board = FretboardGrid::new(data.diagram.clone(), data.tuning.clone()).view();

    let problems = data.problems.iter().fold(column![].spacing(4), |col, problem| {
        col.push(text(problem.as_str()).size(14).color(PROBLEM_COLOR))
    });

    container(
        column![
            text("Board").size(18),
            Space::with_height(10),
            board,
            Space::with_height(10),
            problems,
        ]
        .spacing(5)
        .padding(15),
    )
    .width(Length::Fill)
    .into()
}

/// Creates the settings sidebar with every input of the view.
fn create_sidebar<'a>(
    data: &'a AppDisplayData,
    positions: &'a text_editor::Content,
) -> Element<'a, Message> {
    let fret_range = row![
        text("Frets").size(14),
        horizontal_gap(),
        text_input("0", &data.start_fret)
            .on_input(Message::StartFretChanged)
            .width(Length::Fixed(56.0)),
        text("to").size(14),
        text_input("12", &data.end_fret)
            .on_input(Message::EndFretChanged)
            .width(Length::Fixed(56.0)),
    ]
    .spacing(6)
    .align_y(Alignment::Center);

    let tuning_inputs = Row::with_children(data.tuning.iter().enumerate().map(|(slot, note)| {
        column![
            text(format!("{}", slot + 1)).size(12),
            text_input("", note)
                .on_input(move |value| Message::TuningNoteChanged(slot, value))
                .width(Length::Fixed(40.0)),
        ]
        .spacing(2)
        .align_x(Alignment::Center)
        .into()
    }))
    .spacing(4);

    let tuning_section = column![
        section_title("Tuning"),
        pick_list(&TuningPreset::ALL[..], data.preset(), Message::PresetSelected)
            .placeholder("Custom")
            .width(Length::Fill),
        tuning_inputs,
    ]
    .spacing(8);

    let display_section = column![
        section_title("Display"),
        row![
            text("Root").size(14),
            horizontal_gap(),
            pick_list(RootChoice::all(), Some(data.root), Message::RootSelected),
        ]
        .align_y(Alignment::Center),
        row![
            text("Notation").size(14),
            horizontal_gap(),
            pick_list(&Notation::ALL[..], Some(data.notation), Message::NotationSelected),
        ]
        .align_y(Alignment::Center),
    ]
    .spacing(8);

    let positions_section = column![
        section_title("Positions (string,fret)"),
        text_editor(positions)
            .on_action(Message::PositionsEdited)
            .height(Length::Fixed(200.0)),
        button(text("Update").size(16))
            .on_press(Message::Update)
            .width(Length::Fill),
    ]
    .spacing(8);

    let sections: Column<'a, Message> = column![
        fret_range,
        tuning_section,
        display_section,
        positions_section,
    ]
    .spacing(18);

    container(sections)
        .padding(15)
        .width(Length::Fixed(300.0))
        .into()
}

fn section_title(label: &str) -> Element<'_, Message> {
    text(label).size(16).into()
}

fn horizontal_gap() -> Space {
    Space::with_width(Length::Fill)
}
