use std::io::Write;

use crate::error::Result;
use crate::ml::classic::k_means::Point;

/// Coordinates joined by `,`, each with four decimal places.
///
/// Non-finite values are spelled the way C's `printf("%.4f")` spells them.
pub fn format_centroid(centroid: &[f64]) -> String {
    centroid
        .iter()
        .map(|&x| {
            if x.is_nan() {
                "nan".to_string()
            } else {
                format!("{x:.4}")
            }
        })
        .collect::<Vec<_>>()
        .join(",")
}

/// Writes one line per centroid.
pub fn write_centroids<W: Write>(out: &mut W, centroids: &[Point]) -> Result<()> {
    for centroid in centroids {
        writeln!(out, "{}", format_centroid(centroid))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_four_decimals() {
        assert_eq!(format_centroid(&[1.5, 0.0]), "1.5000,0.0000");
        assert_eq!(format_centroid(&[-2.0, 3.14159]), "-2.0000,3.1416");
        assert_eq!(format_centroid(&[10.0 / 3.0]), "3.3333");
    }

    #[test]
    fn test_non_finite() {
        assert_eq!(
            format_centroid(&[f64::NAN, f64::INFINITY, f64::NEG_INFINITY]),
            "nan,inf,-inf"
        );
    }

    #[test]
    fn test_write_centroids() {
        let mut out = Vec::new();
        write_centroids(&mut out, &[vec![1.5, 0.0], vec![10.5, 0.0]]).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "1.5000,0.0000\n10.5000,0.0000\n");
    }
}
