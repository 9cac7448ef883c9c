use fretboard_core::{
    DisplayMode, FretRange, FretboardError, Notation, PitchClass, Position, Tuning, TuningPreset,
    label_for, parse_positions, pitch::root_from_index, render, resolve_pitch_class,
};
use pretty_assertions::assert_eq;

fn standard() -> Tuning {
    Tuning::from_names(["E", "A", "D", "G", "B", "E"])
}

fn label(tuning: &Tuning, string: usize, fret: i32, mode: DisplayMode) -> &'static str {
    label_for(resolve_pitch_class(tuning, string, fret).unwrap(), mode)
}

#[test]
fn low_e_open_string() {
    let tuning = standard();
    assert_eq!(label(&tuning, 6, 0, DisplayMode::Absolute), "E");
    assert_eq!(
        label(&tuning, 6, 0, DisplayMode::RelativeToRoot(PitchClass::E)),
        "1"
    );
}

#[test]
fn high_e_open_string_relative_to_e() {
    let mode = DisplayMode::from_selection(root_from_index(4), Notation::Relative);
    assert_eq!(label(&standard(), 1, 0, mode), "1");
}

#[test]
fn a_string_third_fret_is_c() {
    let tuning = standard();
    assert_eq!(label(&tuning, 2, 3, DisplayMode::Absolute), "C");
    let mode = DisplayMode::from_selection(root_from_index(0), Notation::Relative);
    assert_eq!(label(&tuning, 2, 3, mode), "1");
}

#[test]
fn no_root_forces_absolute_labels() {
    let mode = DisplayMode::from_selection(root_from_index(-1), Notation::Relative);
    assert_eq!(label(&standard(), 2, 3, mode), "C");
}

#[test]
fn unknown_tuning_token_is_an_error() {
    let tuning = Tuning::from_names(["H", "A"]);
    assert_eq!(
        resolve_pitch_class(&tuning, 1, 0),
        Err(FretboardError::UnknownNote {
            note: "H".to_string()
        })
    );
}

#[test]
fn parse_then_render_major_scale_shape() {
    // G major scale across the E, A and D strings (strings 1 to 3), relative to G
    let text = "1,3\n1,5\n2,2\n2,3\n2,5\n3,2\n3,4\n3,5";
    let positions = parse_positions(text).unwrap();
    assert_eq!(positions.len(), 8);
    assert_eq!(positions[0], Position::new(1, 3));

    let tuning = TuningPreset::Standard.tuning();
    let diagram = render(
        &tuning,
        FretRange::new(0, 5).unwrap(),
        DisplayMode::RelativeToRoot(PitchClass::from_semitones(7)),
        text,
    )
    .unwrap();

    let labels: Vec<&str> = positions
        .iter()
        .map(|p| diagram.label_at(p.string, p.fret).unwrap())
        .collect();
    assert_eq!(labels, vec!["1", "2", "3", "4", "5", "6", "7", "1"]);
}

#[test]
fn render_fails_fast_on_malformed_text() {
    let err = render(
        &standard(),
        FretRange::default(),
        DisplayMode::Absolute,
        "6,0\n6;1",
    )
    .unwrap_err();
    assert_eq!(
        err,
        FretboardError::MalformedPositionLine {
            line_number: 2,
            line: "6;1".to_string()
        }
    );
}

#[test]
fn render_reports_missing_strings_and_frets() {
    let diagram = render(
        &TuningPreset::Bass.tuning(),
        FretRange::new(0, 4).unwrap(),
        DisplayMode::Absolute,
        "6,0\n1,9\n1,4",
    )
    .unwrap();
    assert_eq!(diagram.off_grid(), &[Position::new(1, 9)]);
    assert_eq!(diagram.rejected().len(), 1);
    assert_eq!(diagram.rejected()[0].position, Position::new(6, 0));
    assert_eq!(
        diagram.rejected()[0].error,
        FretboardError::InvalidStringIndex {
            string: 6,
            string_count: 4
        }
    );
    assert_eq!(diagram.label_at(1, 4), Some("G#"));
}

#[test]
fn render_labels_the_highest_fret() {
    let diagram = render(
        &Tuning::from_names(["E"]),
        FretRange::new(i32::MAX - 1, i32::MAX).unwrap(),
        DisplayMode::Absolute,
        "1,2147483647",
    )
    .unwrap();
    assert_eq!(diagram.label_at(1, i32::MAX), Some("B"));
}

#[test]
fn empty_positions_render_an_empty_board() {
    let diagram = render(
        &standard(),
        FretRange::new(0, 24).unwrap(),
        DisplayMode::Absolute,
        "   \n",
    )
    .unwrap();
    assert_eq!(diagram.mark_count(), 0);
    assert_eq!(diagram.range().len(), 25);
    assert_eq!(diagram.strings(), 6);
}
