use log::{debug, trace};

use crate::error::{KMeansError, Result};

/// A point (or centroid): an ordered list of coordinates.
pub type Point = Vec<f64>;

/// Default cap on assignment/update rounds.
pub const DEFAULT_MAX_ITERATIONS: usize = 400;
/// Exclusive upper bound accepted for `max_iterations`.
pub const MAX_ITERATIONS_LIMIT: usize = 800;
/// A centroid that moves less than this is considered unmoved.
pub const EPSILON: f64 = 0.001;

/// Configuration options for k-means clustering.
#[derive(Debug, Clone, PartialEq)]
pub struct KMeansConfig {
    /// Number of clusters to find.
    pub k: usize,
    /// Maximum number of iterations.
    pub max_iterations: usize,
    /// Convergence threshold. The run stops once every centroid moved less than this.
    pub epsilon: f64,
}

impl KMeansConfig {
    /// Create a new config with default values for max_iterations (400) and epsilon (0.001).
    pub fn new(k: usize) -> Self {
        Self {
            k,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            epsilon: EPSILON,
        }
    }

    /// Customize the maximum number of iterations.
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Customize the convergence threshold.
    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    /// Checks `1 < k < n_points`, then `1 < max_iterations < 800`.
    pub fn validate(&self, n_points: usize) -> Result<()> {
        if self.k <= 1 || self.k >= n_points {
            return Err(KMeansError::InvalidClusterCount(format!(
                "k = {} for {} points",
                self.k, n_points
            )));
        }
        if self.max_iterations <= 1 || self.max_iterations >= MAX_ITERATIONS_LIMIT {
            return Err(KMeansError::InvalidIterationCount(format!(
                "max_iter = {}",
                self.max_iterations
            )));
        }
        Ok(())
    }
}

/// How the driver loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// Every centroid moved less than epsilon in the last round.
    Converged,
    /// The iteration cap was hit first.
    MaxIterationsReached,
}

/// Outcome of a k-means run.
#[derive(Debug, Clone, PartialEq)]
pub struct KMeansResult {
    /// Final centroids, indexed like the seeds they grew from.
    pub centroids: Vec<Point>,
    /// Cluster index of each input point from the last assignment step.
    pub assignments: Vec<usize>,
    /// Number of assignment/update rounds performed.
    pub iterations: usize,
    /// Terminal state of the driver loop.
    pub termination: Termination,
}

impl KMeansResult {
    /// True if the run stopped on convergence rather than the iteration cap.
    pub fn converged(&self) -> bool {
        self.termination == Termination::Converged
    }

    /// Drops everything but the final centroids.
    pub fn into_centroids(self) -> Vec<Point> {
        self.centroids
    }
}

/// Euclidean distance between two points of the same dimension.
pub fn euclidean_distance(a: &[f64], b: &[f64]) -> f64 {
    a.iter()
        .zip(b.iter())
        .fold(0.0, |acc, (&x, &y)| {
            let diff = x - y;
            acc + diff * diff
        })
        .sqrt()
}

/// Index of the nearest centroid for every point.
///
/// Only a strictly smaller distance replaces the current best, so ties go to
/// the lowest centroid index.
pub fn assign_labels(data: &[Point], centroids: &[Point]) -> Vec<usize> {
    data.iter()
        .map(|point| {
            let mut best_cluster = 0;
            let mut best_dist = f64::INFINITY;
            for (cluster_idx, centroid) in centroids.iter().enumerate() {
                let dist = euclidean_distance(point, centroid);
                if dist < best_dist {
                    best_dist = dist;
                    best_cluster = cluster_idx;
                }
            }
            best_cluster
        })
        .collect()
}

/// Partitions `data` into one group per centroid, keeping input order inside
/// each group. A group may come back empty.
pub fn assign_clusters<'a>(data: &'a [Point], centroids: &[Point]) -> Vec<Vec<&'a [f64]>> {
    group_by_label(data, &assign_labels(data, centroids), centroids.len())
}

fn group_by_label<'a>(data: &'a [Point], labels: &[usize], k: usize) -> Vec<Vec<&'a [f64]>> {
    let mut clusters = vec![Vec::new(); k];
    for (point, &label) in data.iter().zip(labels) {
        clusters[label].push(point.as_slice());
    }
    clusters
}

/// Coordinate-wise mean of every group. An empty group yields the zero vector.
pub fn update_centroids(clusters: &[Vec<&[f64]>], dim: usize) -> Vec<Point> {
    clusters
        .iter()
        .map(|cluster| {
            let mut centroid = vec![0.0; dim];
            if cluster.is_empty() {
                return centroid;
            }
            for point in cluster {
                for (sum, &x) in centroid.iter_mut().zip(point.iter()) {
                    *sum += x;
                }
            }
            let count = cluster.len() as f64;
            for sum in centroid.iter_mut() {
                *sum /= count;
            }
            centroid
        })
        .collect()
}

/// False as soon as some `new[i]` lies `epsilon` or more away from `old[i]`.
///
/// A NaN shift is never `>= epsilon`, so it does not block convergence.
pub fn has_converged(old: &[Point], new: &[Point], epsilon: f64) -> bool {
    !old.iter()
        .zip(new.iter())
        .any(|(a, b)| euclidean_distance(a, b) >= epsilon)
}

/// Runs Lloyd's k-means on `data`, seeding the centroids with the first `k` points.
///
/// Each round assigns every point to its nearest centroid, recomputes the
/// centroids as group means and stops once no centroid moved by `epsilon` or
/// more. The freshly computed centroids are kept in both terminal states.
///
/// # Errors
///
/// - `Generic` if `data` is empty, a point has no coordinates, or dimensions differ.
/// - `InvalidClusterCount` / `InvalidIterationCount` if the config fails
///   [`KMeansConfig::validate`].
///
/// # Example
///
/// ```
/// use kmeans_lloyd::ml::classic::k_means::{kmeans, KMeansConfig};
///
/// let data = vec![
///     vec![1.0, 0.0],
///     vec![2.0, 0.0],
///     vec![10.0, 0.0],
///     vec![11.0, 0.0],
/// ];
///
/// let result = kmeans(&data, &KMeansConfig::new(2)).unwrap();
/// assert_eq!(result.centroids, vec![vec![1.5, 0.0], vec![10.5, 0.0]]);
/// ```
pub fn kmeans(data: &[Point], config: &KMeansConfig) -> Result<KMeansResult> {
    let first = data
        .first()
        .ok_or_else(|| KMeansError::generic("empty dataset"))?;
    let dim = first.len();
    if dim == 0 {
        return Err(KMeansError::generic("points must have at least one coordinate"));
    }
    if let Some(i) = data.iter().position(|p| p.len() != dim) {
        return Err(KMeansError::generic(format!(
            "point {} has {} coordinates, expected {}",
            i,
            data[i].len(),
            dim
        )));
    }
    config.validate(data.len())?;

    let mut centroids: Vec<Point> = data[..config.k].to_vec();
    let mut assignments = Vec::new();
    let mut termination = Termination::MaxIterationsReached;
    let mut iterations = 0;

    while iterations < config.max_iterations {
        iterations += 1;

        assignments = assign_labels(data, &centroids);
        let clusters = group_by_label(data, &assignments, config.k);
        let next = update_centroids(&clusters, dim);

        let converged = has_converged(&centroids, &next, config.epsilon);
        trace!(
            "iteration {}: max centroid shift {:.6}",
            iterations,
            centroids
                .iter()
                .zip(&next)
                .map(|(a, b)| euclidean_distance(a, b))
                .fold(0.0, f64::max)
        );
        centroids = next;

        if converged {
            termination = Termination::Converged;
            break;
        }
    }

    debug!(
        "k-means finished after {} iterations ({:?}), k = {}, n = {}, dim = {}",
        iterations,
        termination,
        config.k,
        data.len(),
        dim
    );

    Ok(KMeansResult {
        centroids,
        assignments,
        iterations,
        termination,
    })
}
