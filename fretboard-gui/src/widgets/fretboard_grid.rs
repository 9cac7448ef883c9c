//! # Fretboard Grid Widget
//!
//! Draws a [`Diagram`] as a fretboard: a header row of fret numbers, one
//! horizontal line per string (string 1 on top) and a dot with its label on
//! every marked cell. Clicking a cell toggles that position.

use iced::alignment;
use iced::widget::canvas::{self, Event, Geometry, Path, Stroke, Text, event};
use iced::widget::container;
use iced::{Color, Element, Pixels, Point, Rectangle, Renderer, Size, Theme, mouse};

use fretboard_core::{Diagram, Position};

use crate::Message;

/// Height of the fret number header.
const HEADER_HEIGHT: f32 = 24.0;
/// Width of the column holding the open note names.
const NUT_WIDTH: f32 = 36.0;
/// Height of one string row.
const ROW_HEIGHT: f32 = 34.0;

const STRING_COLOR: Color = Color::from_rgb(0.75, 0.75, 0.75);
const FRET_COLOR: Color = Color::from_rgb(0.45, 0.45, 0.5);
const DOT_COLOR: Color = Color::from_rgb(0.2, 0.6, 0.86);

/// Interactive fretboard canvas.
#[derive(Debug, Clone)]
pub struct FretboardGrid {
    diagram: Diagram,
    /// Open note names shown left of the nut, string 1 first.
    open_notes: Vec<String>,
}

impl FretboardGrid {
    pub fn new(diagram: Diagram, open_notes: Vec<String>) -> Self {
        Self {
            diagram,
            open_notes,
        }
    }

    pub fn view(self) -> Element<'static, Message> {
        let height = HEADER_HEIGHT + ROW_HEIGHT * self.diagram.strings().max(1) as f32;
        container(
            canvas::Canvas::new(self)
                .width(iced::Length::Fill)
                .height(iced::Length::Fixed(height)),
        )
        .into()
    }

    fn cell_width(&self, bounds: Size) -> f32 {
        (bounds.width - NUT_WIDTH).max(0.0) / self.diagram.range().len() as f32
    }

    /// Center of the cell at `row` (0-based string) and `column` (0-based fret column).
    fn cell_center(&self, bounds: Size, row: usize, column: usize) -> Point {
        let cell_width = self.cell_width(bounds);
        Point::new(
            NUT_WIDTH + cell_width * (column as f32 + 0.5),
            HEADER_HEIGHT + ROW_HEIGHT * (row as f32 + 0.5),
        )
    }

    fn position_at(&self, bounds: Size, pos: Point) -> Option<Position> {
        if pos.x < NUT_WIDTH || pos.y < HEADER_HEIGHT {
            return None;
        }
        let cell_width = self.cell_width(bounds);
        if cell_width <= 0.0 {
            return None;
        }

        let column = ((pos.x - NUT_WIDTH) / cell_width).floor() as usize;
        let row = ((pos.y - HEADER_HEIGHT) / ROW_HEIGHT).floor() as usize;
        let fret = self.diagram.range().frets().nth(column)?;
        let position = Position::new(row + 1, fret);
        self.diagram.has_cell(position).then_some(position)
    }
}

fn label(content: String, position: Point, color: Color, size: f32) -> Text {
    Text {
        content,
        position,
        color,
        size: Pixels(size),
        horizontal_alignment: alignment::Horizontal::Center,
        vertical_alignment: alignment::Vertical::Center,
        ..Text::default()
    }
}

impl canvas::Program<Message> for FretboardGrid {
    type State = ();

    fn update(
        &self,
        _state: &mut Self::State,
        event: Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> (event::Status, Option<Message>) {
        if let Some(cursor_position) = cursor.position_in(bounds) {
            if let Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) = event {
                if let Some(position) = self.position_at(bounds.size(), cursor_position) {
                    return (event::Status::Captured, Some(Message::CellClicked(position)));
                }
            }
        }
        (event::Status::Ignored, None)
    }

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = canvas::Frame::new(renderer, bounds.size());
        let size = bounds.size();
        let text_color = theme.palette().text;
        let cell_width = self.cell_width(size);
        let range = self.diagram.range();
        let strings = self.diagram.strings();
        let board_bottom = HEADER_HEIGHT + ROW_HEIGHT * strings as f32;

        // Fret numbers and the line closing each fret column
        for (column, fret) in range.frets().enumerate() {
            let center = self.cell_center(size, 0, column);
            frame.fill_text(label(
                fret.to_string(),
                Point::new(center.x, HEADER_HEIGHT / 2.0),
                text_color,
                13.0,
            ));

            let x = NUT_WIDTH + cell_width * (column as f32 + 1.0);
            frame.stroke(
                &Path::line(Point::new(x, HEADER_HEIGHT), Point::new(x, board_bottom)),
                Stroke::default().with_color(FRET_COLOR).with_width(1.5),
            );
        }

        // Nut, drawn heavier when the board starts at the open strings
        let nut_width = if range.start() <= 0 { 4.0 } else { 1.5 };
        frame.stroke(
            &Path::line(
                Point::new(NUT_WIDTH, HEADER_HEIGHT),
                Point::new(NUT_WIDTH, board_bottom),
            ),
            Stroke::default().with_color(STRING_COLOR).with_width(nut_width),
        );

        // Strings with their open note names
        for row in 0..strings {
            let y = HEADER_HEIGHT + ROW_HEIGHT * (row as f32 + 0.5);
            let open_note = self.open_notes.get(row).cloned().unwrap_or_default();
            frame.fill_text(label(
                open_note,
                Point::new(NUT_WIDTH / 2.0, y),
                text_color,
                14.0,
            ));
            frame.stroke(
                &Path::line(Point::new(NUT_WIDTH, y), Point::new(size.width, y)),
                Stroke::default().with_color(STRING_COLOR).with_width(1.0),
            );
        }

        // Marked positions
        let radius = (ROW_HEIGHT * 0.4).min(cell_width * 0.45);
        for ((string, fret), text) in self.diagram.marks() {
            let Some(column) = range.column_of(fret) else {
                continue;
            };
            let center = self.cell_center(size, string - 1, column);
            frame.fill(&Path::circle(center, radius), DOT_COLOR);
            frame.fill_text(label(text.to_string(), center, Color::WHITE, 13.0));
        }

        vec![frame.into_geometry()]
    }
}
