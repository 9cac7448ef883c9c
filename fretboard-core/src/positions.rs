//! Parsing of the free-form positions text.
//!
//! One position per line, written as `string,fret`. Blank lines are ignored.
//! Parsing is fail-fast: the first bad line rejects the whole batch and is
//! returned in the error.

use std::fmt;

use crate::error::{FretboardError, Result};

/// A fretted position on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    /// 1-based string number.
    pub string: usize,
    pub fret: i32,
}

impl Position {
    pub fn new(string: usize, fret: i32) -> Self {
        Self { string, fret }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.string, self.fret)
    }
}

/// Parses `text` into positions, keeping line order and duplicates.
pub fn parse_positions(text: &str) -> Result<Vec<Position>> {
    text.lines()
        .enumerate()
        .map(|(index, line)| (index + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty())
        .map(|(line_number, line)| parse_line(line_number, line))
        .collect()
}

fn parse_line(line_number: usize, line: &str) -> Result<Position> {
    let malformed = || FretboardError::MalformedPositionLine {
        line_number,
        line: line.to_string(),
    };

    let (string, fret) = line.split_once(',').ok_or_else(malformed)?;
    let string = string.trim().parse::<usize>().map_err(|_| malformed())?;
    let fret = fret.trim().parse::<i32>().map_err(|_| malformed())?;
    Ok(Position { string, fret })
}

/// Adds `position` to the positions text, or removes it if already present.
///
/// Removal drops every line that parses to `position`. Lines that do not parse
/// are left as they are.
pub fn toggle_position(text: &str, position: Position) -> String {
    let mut removed = false;
    let mut lines: Vec<&str> = Vec::new();
    for (index, line) in text.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        if parse_line(index + 1, trimmed).is_ok_and(|parsed| parsed == position) {
            removed = true;
        } else {
            lines.push(trimmed);
        }
    }

    let mut result = lines.join("\n");
    if !removed {
        if !result.is_empty() {
            result.push('\n');
        }
        result.push_str(&position.to_string());
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_input() {
        assert!(parse_positions("").unwrap().is_empty());
        assert!(parse_positions("  \n  ").unwrap().is_empty());
    }

    #[test]
    fn test_preserves_order() {
        assert_eq!(
            parse_positions("2,3\n1,0").unwrap(),
            vec![Position::new(2, 3), Position::new(1, 0)]
        );
    }

    #[test]
    fn test_whitespace_and_blank_lines() {
        let text = "\n  6 , 5 \r\n\n\t5,7\n";
        assert_eq!(
            parse_positions(text).unwrap(),
            vec![Position::new(6, 5), Position::new(5, 7)]
        );
    }

    #[test]
    fn test_keeps_duplicates() {
        assert_eq!(
            parse_positions("1,1\n1,1").unwrap(),
            vec![Position::new(1, 1), Position::new(1, 1)]
        );
    }

    #[test]
    fn test_negative_fret() {
        assert_eq!(parse_positions("3,-2").unwrap(), vec![Position::new(3, -2)]);
    }

    #[test]
    fn test_malformed_token() {
        assert_eq!(
            parse_positions("a,3"),
            Err(FretboardError::MalformedPositionLine {
                line_number: 1,
                line: "a,3".to_string()
            })
        );
    }

    #[test]
    fn test_missing_comma() {
        assert!(matches!(
            parse_positions("1,2\n 3 4 "),
            Err(FretboardError::MalformedPositionLine { line_number: 2, ref line }) if line == "3 4"
        ));
    }

    #[test]
    fn test_extra_comma_is_rejected() {
        assert!(matches!(
            parse_positions("1,2,3"),
            Err(FretboardError::MalformedPositionLine { .. })
        ));
    }

    #[test]
    fn test_empty_token_is_rejected() {
        assert!(parse_positions("1,").is_err());
        assert!(parse_positions(",1").is_err());
        assert!(parse_positions("-1,0").is_err());
    }

    #[test]
    fn test_fail_fast_reports_first_bad_line() {
        let err = parse_positions("1,0\nx,1\ny,2").unwrap_err();
        assert_eq!(
            err,
            FretboardError::MalformedPositionLine {
                line_number: 2,
                line: "x,1".to_string()
            }
        );
    }

    #[test]
    fn test_toggle_adds_missing_position() {
        assert_eq!(toggle_position("", Position::new(2, 3)), "2,3");
        assert_eq!(toggle_position("1,0\n", Position::new(2, 3)), "1,0\n2,3");
    }

    #[test]
    fn test_toggle_removes_existing_position() {
        assert_eq!(toggle_position("1,0\n 2 , 3\n2,3\n4,4", Position::new(2, 3)), "1,0\n4,4");
        assert_eq!(toggle_position("2,3", Position::new(2, 3)), "");
    }

    #[test]
    fn test_toggle_keeps_unparsed_lines() {
        assert_eq!(toggle_position("oops\n1,1", Position::new(1, 1)), "oops");
    }
}
