//! # K-means Clustering with Automatic Cluster Count Selection
//!
//! This crate provides a k-means solver for dense numerical data and an
//! auto-solver that searches over cluster counts and random restarts.
//!
//! ## Features
//!
//! - **KMeans**: iterative assign/update refinement over a fixed `k`, with a
//!   full per-iteration log
//! - **KMeansAutoSolver**: exhaustive grid search over `k` and random restarts,
//!   keeping the lowest-error solution
//! - Error metric regularized by `k` so the search does not over-fit
//! - Seedable initialization (uniform in the bounding box, or sampled points)
//! - Explicit policies for empty clusters and legacy assignment behaviour
//! - Parallel trials via Rayon
//!
//! ## Example
//!
//! ```rust
//! use kmeans_solver::{AutoSolverOptions, KMeansAutoSolver};
//! use ndarray::array;
//!
//! let data = array![
//!     [1.0, 1.0], [1.0, 2.0], [2.0, 1.0],
//!     [9.0, 9.0], [9.0, 8.0], [8.0, 9.0],
//! ];
//!
//! let options = AutoSolverOptions::default()
//!     .k_range(1, 4)
//!     .max_trials(5)
//!     .random_state(42);
//!
//! let mut solver = KMeansAutoSolver::with_options(data, options).unwrap();
//! let best = solver.solve(1000).unwrap();
//! println!("best k = {}, error = {:.3}", best.k, best.error());
//! assert_eq!(solver.log().len(), 3 * 5);
//! ```

#![deny(missing_docs)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod auto;
pub mod distance;
pub mod error;
pub mod initialization;
pub mod kmeans;
pub mod utils;

pub use auto::{AutoSolverOptions, KMeansAutoSolver, Solution};
pub use distance::{mean, EuclideanDistance, PointDistance, SquaredEuclideanDistance};
pub use error::{Error, Result};
pub use initialization::{DimensionRange, InitMethod};
pub use kmeans::{
    AssignmentPolicy, EmptyClusterPolicy, IterationLog, KMeans, SolverOptions, SolverStatus,
    DEFAULT_MAX_ITERATIONS,
};
pub use utils::points_to_array;

/// Re-export commonly used types from ndarray
pub use ndarray::{Array1, Array2, ArrayView1, ArrayView2};
