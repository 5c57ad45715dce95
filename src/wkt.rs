//! Textual point literal grammar: `POINT(<x> <y>)`

use crate::error::{Error, Result};

/// Parse the textual literal MySQL produces for a point column.
///
/// The grammar is strict: upper-case `POINT(` prefix, two unsigned decimal
/// integer groups separated by exactly one space, closing `)`, nothing
/// before or after.
pub(crate) fn parse_point(text: &str) -> Result<(u64, u64)> {
    let body = text
        .strip_prefix("POINT(")
        .and_then(|rest| rest.strip_suffix(')'))
        .ok_or_else(|| Error::Decode(format!("expected `POINT(<x> <y>)`, got {:?}", text)))?;
    let (x, y) = body
        .split_once(' ')
        .ok_or_else(|| Error::Decode(format!("expected two coordinates, got {:?}", text)))?;
    Ok((parse_coordinate(x)?, parse_coordinate(y)?))
}

/// Write the textual literal for a coordinate pair. Exact inverse of
/// [`parse_point`] for every representable pair.
pub(crate) fn write_point(x: u64, y: u64) -> String {
    format!("POINT({} {})", x, y)
}

fn parse_coordinate(group: &str) -> Result<u64> {
    if group.is_empty() || !group.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Error::Decode(format!(
            "coordinate {:?} is not an unsigned decimal integer",
            group
        )));
    }
    // An all-digit group can still overflow; a corrupt literal must surface
    // as an error, never decode to a zero coordinate.
    group
        .parse()
        .map_err(|_| Error::Decode(format!("coordinate {:?} out of range", group)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_valid_literals() {
        assert_eq!(parse_point("POINT(33 44)").unwrap(), (33, 44));
        assert_eq!(parse_point("POINT(0 0)").unwrap(), (0, 0));
        // No leading-zeros restriction
        assert_eq!(parse_point("POINT(007 01)").unwrap(), (7, 1));
        assert_eq!(
            parse_point("POINT(18446744073709551615 1)").unwrap(),
            (u64::MAX, 1)
        );
    }

    #[test]
    fn test_rejects_bad_literals() {
        let rejected = [
            "",
            "POINT(1,2)",
            "POINT(1 2",
            "point(1 2)",
            "POINT(-1 2)",
            "POINT(1  2)",
            "POINT(1 2 3)",
            "POINT(12)",
            "POINT()",
            "POINT( 1 2)",
            "POINT(1 2) ",
            "xPOINT(1 2)",
            "POINT(1.5 2)",
            "POINT(a b)",
        ];
        for input in rejected {
            let err = parse_point(input).unwrap_err();
            assert!(
                matches!(err, Error::Decode(_)),
                "expected decode error for {:?}",
                input
            );
        }
    }

    #[test]
    fn test_rejects_overflowing_coordinate() {
        // One past u64::MAX: matches the grammar but cannot be represented.
        let err = parse_point("POINT(18446744073709551616 1)").unwrap_err();
        assert!(matches!(err, Error::Decode(_)));
    }

    #[test]
    fn test_write_is_parse_inverse() {
        for (x, y) in [(0, 0), (33, 44), (u64::MAX, u64::MAX)] {
            assert_eq!(parse_point(&write_point(x, y)).unwrap(), (x, y));
        }
    }
}
