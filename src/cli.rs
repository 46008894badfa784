pub mod args;
pub mod format;
pub mod points;

use std::ffi::OsString;
use std::io::{BufRead, Write};

use log::debug;

pub use args::{parse_strict_int, Args};
pub use format::{format_centroid, write_centroids};
pub use points::{parse_line, read_points};

use crate::error::Result;
use crate::ml::classic::k_means::{kmeans, KMeansConfig};

/// Runs the whole command: parse `argv`, read points from `input`, cluster,
/// and write the centroids to `out`.
///
/// Checks happen in this order: argument count, `k` syntax, `max_iter`
/// syntax, input, `k` range, `max_iter` range. Nothing is written to `out`
/// unless every check passes.
pub fn run<I, T, R, W>(argv: I, input: R, out: &mut W) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
    R: BufRead,
    W: Write,
{
    let args = Args::try_from_args(argv)?;
    let k = args.cluster_count()?;
    let max_iterations = args.max_iterations()?;
    let points = read_points(input)?;

    let config = KMeansConfig::new(k).with_max_iterations(max_iterations);
    let result = kmeans(&points, &config)?;
    debug!(
        "{} centroids after {} iterations",
        result.centroids.len(),
        result.iterations
    );

    write_centroids(out, &result.centroids)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::KMeansError;
    use std::io::Cursor;

    fn run_with(args: &[&str], input: &str) -> (Result<()>, String) {
        let mut out = Vec::new();
        let argv = std::iter::once("kmeans").chain(args.iter().copied());
        let result = run(argv, Cursor::new(input), &mut out);
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_run_line_example() {
        let (result, out) = run_with(&["2"], "1.0,0.0\n2.0,0.0\n10.0,0.0\n11.0,0.0\n");
        assert!(result.is_ok());
        assert_eq!(out, "1.5000,0.0000\n10.5000,0.0000\n");
    }

    #[test]
    fn test_k_syntax_checked_before_input() {
        let (result, out) = run_with(&["2x"], "not,a,point\n");
        assert!(matches!(result, Err(KMeansError::InvalidClusterCount(_))));
        assert!(out.is_empty());
    }

    #[test]
    fn test_input_checked_before_ranges() {
        let (result, out) = run_with(&["1", "900"], "1.0,2.0\n1.0\n");
        assert!(matches!(result, Err(KMeansError::Generic(_))));
        assert!(out.is_empty());
    }

    #[test]
    fn test_k_range_checked_before_iteration_range() {
        let (result, _) = run_with(&["4", "800"], "1\n2\n3\n4\n");
        assert!(matches!(result, Err(KMeansError::InvalidClusterCount(_))));
        let (result, _) = run_with(&["3", "800"], "1\n2\n3\n4\n");
        assert!(matches!(result, Err(KMeansError::InvalidIterationCount(_))));
    }

    #[test]
    fn test_iteration_bounds() {
        let input = "1\n2\n3\n4\n";
        for ok in ["2", "799"] {
            assert!(run_with(&["2", ok], input).0.is_ok());
        }
        for bad in ["1", "800"] {
            assert!(matches!(
                run_with(&["2", bad], input).0,
                Err(KMeansError::InvalidIterationCount(_))
            ));
        }
    }
}
