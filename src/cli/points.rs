use std::io::BufRead;

use log::debug;

use crate::error::{KMeansError, Result};
use crate::ml::classic::k_means::Point;

/// Parses one comma-separated line into a point.
///
/// Fields are trimmed before parsing. An empty field, a field that is not a
/// float literal, or a field count other than `expected_dim` (when given) is a
/// generic error.
pub fn parse_line(line: &str, expected_dim: Option<usize>) -> Result<Point> {
    let point = line
        .split(',')
        .map(|field| {
            let field = field.trim();
            if field.is_empty() {
                return Err(KMeansError::generic("empty field"));
            }
            field
                .parse::<f64>()
                .map_err(|_| KMeansError::generic(format!("not a number: {field:?}")))
        })
        .collect::<Result<Point>>()?;

    match expected_dim {
        Some(dim) if dim != point.len() => Err(KMeansError::generic(format!(
            "expected {} fields, found {}",
            dim,
            point.len()
        ))),
        _ => Ok(point),
    }
}

/// Reads one point per non-blank line. The first point fixes the dimension.
///
/// LF and CRLF endings are both accepted. No points at all is an error.
pub fn read_points<R: BufRead>(reader: R) -> Result<Vec<Point>> {
    let mut points: Vec<Point> = Vec::new();

    for (line_no, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let expected_dim = points.first().map(Vec::len);
        let point = parse_line(line, expected_dim).map_err(|err| {
            KMeansError::generic(format!("line {}: {}", line_no + 1, err.detail()))
        })?;
        points.push(point);
    }

    if points.is_empty() {
        return Err(KMeansError::generic("no points in input"));
    }
    debug!(
        "read {} points of dimension {}",
        points.len(),
        points[0].len()
    );
    Ok(points)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn read(input: &str) -> Result<Vec<Point>> {
        read_points(Cursor::new(input))
    }

    #[test]
    fn test_basic_input() {
        let points = read("1.0,2.0\n3.5,-4\n").unwrap();
        assert_eq!(points, vec![vec![1.0, 2.0], vec![3.5, -4.0]]);
    }

    #[test]
    fn test_whitespace_blank_lines_and_crlf() {
        let points = read("\r\n  1.0 , 2.0  \r\n\n\t3.0,4.0\r\n   \n").unwrap();
        assert_eq!(points, vec![vec![1.0, 2.0], vec![3.0, 4.0]]);
    }

    #[test]
    fn test_no_trailing_newline() {
        let points = read("1e1,0.5").unwrap();
        assert_eq!(points, vec![vec![10.0, 0.5]]);
    }

    #[test]
    fn test_dimension_mismatch() {
        let err = read("1.0,2.0,3.0\n1.0,2.0\n4.0,5.0,6.0").unwrap_err();
        assert!(matches!(err, KMeansError::Generic(_)));
        assert!(err.detail().starts_with("line 2"));
    }

    #[test]
    fn test_bad_fields() {
        for input in ["1.0,,2.0\n", "1.0,abc\n", "1.0,2.0,\n", ",1.0\n", "1.0;2.0\n"] {
            assert!(
                matches!(read(input), Err(KMeansError::Generic(_))),
                "input {input:?}"
            );
        }
    }

    #[test]
    fn test_empty_input() {
        assert!(matches!(read(""), Err(KMeansError::Generic(_))));
        assert!(matches!(read("\n\n  \n"), Err(KMeansError::Generic(_))));
    }

    #[test]
    fn test_parse_line_expected_dim() {
        assert_eq!(parse_line("1,2,3", Some(3)).unwrap(), vec![1.0, 2.0, 3.0]);
        assert!(parse_line("1,2", Some(3)).is_err());
        assert_eq!(parse_line("7", None).unwrap(), vec![7.0]);
    }

    #[test]
    fn test_invalid_utf8_is_generic() {
        let err = read_points(Cursor::new(vec![0x31, 0x2c, 0xff, 0x0a])).unwrap_err();
        assert!(matches!(err, KMeansError::Generic(_)));
    }
}
