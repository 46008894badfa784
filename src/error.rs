use thiserror::Error;

/// Errors surfaced by argument parsing, input reading and clustering.
///
/// The `Display` form of every variant is the fixed line printed to the user.
/// The payload carries the diagnostic detail, which only ever reaches the log.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KMeansError {
    /// Malformed input, wrong argument count, I/O failure or any internal fault.
    #[error("An Error Has Occurred")]
    Generic(String),
    /// `k` is not a strict integer or violates `1 < k < N`.
    #[error("Incorrect number of clusters!")]
    InvalidClusterCount(String),
    /// `max_iter` is not a strict integer or violates `1 < max_iter < 800`.
    #[error("Incorrect maximum iteration!")]
    InvalidIterationCount(String),
}

impl KMeansError {
    pub fn generic(reason: impl Into<String>) -> Self {
        Self::Generic(reason.into())
    }

    /// The diagnostic detail behind the fixed message.
    pub fn detail(&self) -> &str {
        match self {
            Self::Generic(detail)
            | Self::InvalidClusterCount(detail)
            | Self::InvalidIterationCount(detail) => detail,
        }
    }

    /// Process exit status for this error. Every failure exits with 1.
    pub fn exit_code(&self) -> u8 {
        1
    }
}

impl From<std::io::Error> for KMeansError {
    fn from(err: std::io::Error) -> Self {
        Self::Generic(format!("i/o: {err}"))
    }
}

pub type Result<T> = std::result::Result<T, KMeansError>;
