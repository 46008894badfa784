use std::ffi::OsString;
use std::num::IntErrorKind;

use clap::Parser;

use crate::error::{KMeansError, Result};
use crate::ml::classic::k_means::DEFAULT_MAX_ITERATIONS;

/// Positional command line arguments, kept as raw tokens so the strict
/// integer grammar decides what is valid.
#[derive(Debug, Clone, PartialEq, Eq, Parser)]
#[command(name = "kmeans", disable_help_flag = true, disable_version_flag = true)]
pub struct Args {
    /// Number of clusters.
    #[arg(allow_hyphen_values = true)]
    pub k: String,
    /// Maximum number of iterations (default 400).
    #[arg(allow_hyphen_values = true)]
    pub max_iter: Option<String>,
}

impl Args {
    /// Parses `argv` (program name first). Any argument count other than one or
    /// two user arguments is a generic error.
    ///
    /// clap reads a bare `--` as its end-of-options marker, which would shift
    /// the positions. When one is present the tokens are taken verbatim
    /// instead, so `--` reaches the integer grammar like any other token.
    pub fn try_from_args<I, T>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let argv: Vec<OsString> = args.into_iter().map(Into::into).collect();
        let user = argv.get(1..).unwrap_or_default();
        if !(1..=2).contains(&user.len()) {
            return Err(KMeansError::generic(format!(
                "arguments: expected 1 or 2, found {}",
                user.len()
            )));
        }

        if user.iter().any(|token| token.as_os_str() == "--") {
            let mut tokens = user.iter().map(|token| {
                token
                    .to_str()
                    .map(str::to_owned)
                    .ok_or_else(|| KMeansError::generic("arguments: invalid UTF-8"))
            });
            let k = tokens.next().transpose()?.unwrap_or_default();
            let max_iter = tokens.next().transpose()?;
            return Ok(Self { k, max_iter });
        }

        Self::try_parse_from(argv)
            .map_err(|err| KMeansError::generic(format!("arguments: {:?}", err.kind())))
    }

    /// `k` as a count. Only the syntax is checked here; range checks need the
    /// number of points. Negative values map to 0 so they fail the range check.
    pub fn cluster_count(&self) -> Result<usize> {
        parse_strict_int(&self.k)
            .map(to_count)
            .ok_or_else(|| KMeansError::InvalidClusterCount(format!("k = {:?}", self.k)))
    }

    pub fn max_iterations(&self) -> Result<usize> {
        match &self.max_iter {
            None => Ok(DEFAULT_MAX_ITERATIONS),
            Some(token) => parse_strict_int(token).map(to_count).ok_or_else(|| {
                KMeansError::InvalidIterationCount(format!("max_iter = {token:?}"))
            }),
        }
    }
}

fn to_count(value: i64) -> usize {
    usize::try_from(value).unwrap_or(0)
}

/// Parses a base-10 integer written in canonical form: an optional `-`, then
/// digits with no leading zeros. `"+2"`, `"02"`, `"-0"`, `" 2"`, `"2.5"` and
/// `"2x"` are rejected. Values beyond `i64` saturate instead of failing, since
/// the token is still a well-formed integer.
pub fn parse_strict_int(token: &str) -> Option<i64> {
    let (negative, digits) = match token.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, token),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if (digits.len() > 1 && digits.starts_with('0')) || (negative && digits == "0") {
        return None;
    }
    match token.parse::<i64>() {
        Ok(value) => Some(value),
        Err(err) => match err.kind() {
            IntErrorKind::PosOverflow => Some(i64::MAX),
            IntErrorKind::NegOverflow => Some(i64::MIN),
            _ => None,
        },
    }
}
