use thiserror::Error;

use crate::view::snapshot::{Cell, EntityPath};

pub const COORD_DELIMITER: char = 'x';
pub const CELL_SEPARATOR: char = ',';
pub const PREV_TAIL_SEPARATOR: char = '+';

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CodecError {
    #[error("malformed coordinate token `{token}`")]
    MalformedCoordinate { token: String },
}

pub fn encode_cell(cell: Cell) -> String {
    format!("{}{}{}", cell.x, COORD_DELIMITER, cell.y)
}

pub fn decode_cell(token: &str) -> Result<Cell, CodecError> {
    let malformed = || CodecError::MalformedCoordinate {
        token: token.to_owned(),
    };
    let (x, y) = token.split_once(COORD_DELIMITER).ok_or_else(malformed)?;
    let x = x.parse::<u16>().map_err(|_| malformed())?;
    let y = y.parse::<u16>().map_err(|_| malformed())?;
    Ok(Cell { x, y })
}

/// Splits a serialized player path into its body cells and the cell the
/// player vacated last step, if the engine reported one.
pub fn parse_path(serialized: &str) -> Result<EntityPath, CodecError> {
    let (body_part, tail_part) = match serialized.split_once(PREV_TAIL_SEPARATOR) {
        Some((body, tail)) => (body, Some(tail)),
        None => (serialized, None),
    };

    let mut body = Vec::new();
    if !body_part.is_empty() {
        for token in body_part.split(CELL_SEPARATOR) {
            body.push(decode_cell(token)?);
        }
    }

    let vacated_tail = match tail_part {
        Some(tail) if !tail.is_empty() => Some(decode_cell(tail)?),
        _ => None,
    };

    Ok(EntityPath { body, vacated_tail })
}

/// The engine sends an empty `ap` token before the first apple spawns.
pub fn parse_apple(token: &str) -> Result<Option<Cell>, CodecError> {
    if token.is_empty() {
        return Ok(None);
    }
    decode_cell(token).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_tokens_round_trip() {
        for cell in [Cell::new(0, 0), Cell::new(3, 12), Cell::new(120, 7)] {
            assert_eq!(decode_cell(&encode_cell(cell)), Ok(cell));
        }
    }

    #[test]
    fn rejects_malformed_cell_tokens() {
        for token in ["", "abc", "3", "3x", "x3", "3x4x5", "-1x2", "3.5x2"] {
            assert!(decode_cell(token).is_err(), "token `{token}` should fail");
        }
    }

    #[test]
    fn parses_body_without_tail() {
        let path = parse_path("0x0,0x1").unwrap();
        assert_eq!(path.body, vec![Cell::new(0, 0), Cell::new(0, 1)]);
        assert_eq!(path.vacated_tail, None);
    }

    #[test]
    fn parses_body_with_vacated_tail() {
        let path = parse_path("1x1,1x2+1x0").unwrap();
        assert_eq!(path.body, vec![Cell::new(1, 1), Cell::new(1, 2)]);
        assert_eq!(path.vacated_tail, Some(Cell::new(1, 0)));
    }

    #[test]
    fn empty_tail_counts_as_absent() {
        let path = parse_path("1x1+").unwrap();
        assert_eq!(path.vacated_tail, None);
    }

    #[test]
    fn malformed_body_cell_fails_the_whole_path() {
        assert!(parse_path("1x1,nope+1x0").is_err());
        assert!(parse_path("1x1+nope").is_err());
    }

    #[test]
    fn empty_apple_token_is_no_apple() {
        assert_eq!(parse_apple(""), Ok(None));
        assert_eq!(parse_apple("2x2"), Ok(Some(Cell::new(2, 2))));
        assert!(parse_apple("2x").is_err());
    }
}
