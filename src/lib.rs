pub mod cli;
pub mod error;
pub mod ml;

pub use error::{KMeansError, Result};
pub use ml::classic::k_means::{kmeans, KMeansConfig, KMeansResult, Point, Termination};
