pub mod k_means;

// Re-export public types and functions
pub use k_means::{
    assign_clusters, assign_labels, euclidean_distance, has_converged, kmeans, update_centroids,
    KMeansConfig, KMeansResult, Point, Termination, DEFAULT_MAX_ITERATIONS, EPSILON,
    MAX_ITERATIONS_LIMIT,
};
