//! K-means solver for a fixed dataset and cluster count

use crate::distance::{compute_means, EuclideanDistance};
use crate::error::{Error, Result};
use crate::initialization::{dimension_ranges, initialize_centroids, random_point, DimensionRange, InitMethod};
use crate::utils::{calculate_error, cluster_sizes, find_closest_centroid, get_cluster_indices, validate_data, validate_parameters};
use ndarray::{Array1, Array2, ArrayView1, Axis};
use rand::prelude::*;
use tracing::{debug, info, warn};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Iteration cap used by [`KMeans::solve_default`] and the auto-solver
pub const DEFAULT_MAX_ITERATIONS: usize = 1000;

/// How a freshly computed nearest centroid is written into the assignment table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum AssignmentPolicy {
    /// Always record the nearest centroid
    #[default]
    Nearest,
    /// Never record centroid 0 as a point's assignment.
    ///
    /// Reproduces a legacy solver where index 0 was treated as "no result":
    /// a point whose nearest centroid is 0 keeps its previous assignment (or
    /// stays unassigned) but is still reported as changed. Only useful for
    /// parity runs against that solver; error computation fails with
    /// [`Error::UnassignedPoint`] as soon as any point is left unassigned.
    SkipFirstCentroid,
}

/// What happens to a centroid that ends an assignment pass with no points
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum EmptyClusterPolicy {
    /// Leave the centroid where it is
    #[default]
    KeepPrevious,
    /// Redraw the centroid uniformly inside the data's bounding box
    Reinitialize,
    /// Abort with [`Error::EmptyCluster`]
    Fail,
}

/// Where a solver is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SolverStatus {
    /// Centroids are initialized, nothing has been assigned yet
    Initialized,
    /// At least one assignment pass ran without reaching a terminal state
    Iterating,
    /// The last pass changed no assignment
    Converged,
    /// `solve` stopped at its iteration cap
    MaxIterationsReached,
}

/// Solver configuration
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SolverOptions {
    /// Initialization method
    pub init_method: InitMethod,
    /// Assignment write policy
    pub assignment_policy: AssignmentPolicy,
    /// Empty cluster handling
    pub empty_cluster_policy: EmptyClusterPolicy,
    /// Random seed for reproducibility
    pub random_state: Option<u64>,
    /// Emit info-level progress events
    pub verbose: bool,
}

impl SolverOptions {
    /// Set the initialization method
    pub fn init_method(mut self, method: InitMethod) -> Self {
        self.init_method = method;
        self
    }

    /// Set the assignment policy
    pub fn assignment_policy(mut self, policy: AssignmentPolicy) -> Self {
        self.assignment_policy = policy;
        self
    }

    /// Set the empty cluster policy
    pub fn empty_cluster_policy(mut self, policy: EmptyClusterPolicy) -> Self {
        self.empty_cluster_policy = policy;
        self
    }

    /// Set the random seed for reproducibility
    pub fn random_state(mut self, seed: u64) -> Self {
        self.random_state = Some(seed);
        self
    }

    /// Enable verbose output
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }
}

/// Snapshot of the solver state at the end of one iteration
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct IterationLog {
    /// Centroid positions after the update step
    pub centroids: Array2<f64>,
    /// Zero-based iteration index
    pub iteration: usize,
    /// Regularized RMS error, see [`crate::utils::calculate_error`]
    pub error: f64,
    /// No point changed its assignment during this iteration
    pub did_reach_steady_state: bool,
}

/// K-means solver bound to one dataset and one `k`.
///
/// ```rust
/// use kmeans_solver::{KMeans, SolverOptions};
/// use ndarray::array;
///
/// let data = array![[1.0, 1.0], [1.0, 2.0], [9.0, 9.0], [9.0, 8.0]];
/// let mut solver = KMeans::with_options(2, data, SolverOptions::default().random_state(7)).unwrap();
///
/// let result = solver.solve(100).unwrap();
/// assert_eq!(result.centroids.nrows(), 2);
/// assert_eq!(solver.iteration_logs().last(), Some(&result));
/// ```
#[derive(Debug, Clone)]
pub struct KMeans {
    k: usize,
    data: Array2<f64>,
    options: SolverOptions,
    ranges: Vec<DimensionRange>,
    rng: StdRng,
    metric: EuclideanDistance,
    centroids: Array2<f64>,
    assignments: Vec<Option<usize>>,
    error: f64,
    iterations: usize,
    iteration_logs: Vec<IterationLog>,
    status: SolverStatus,
}

impl KMeans {
    /// Create a solver with default options and an entropy-seeded generator
    pub fn new(k: usize, data: Array2<f64>) -> Result<Self> {
        Self::with_options(k, data, SolverOptions::default())
    }

    /// Create a solver and initialize its centroids with `options.init_method`
    pub fn with_options(k: usize, data: Array2<f64>, options: SolverOptions) -> Result<Self> {
        let mut solver = Self::unseeded(k, data, options)?;
        solver.centroids = initialize_centroids(solver.data.view(), k, solver.options.init_method, &mut solver.rng)?;
        Ok(solver)
    }

    /// Create a solver starting from the given centroids; `k` is their row count.
    ///
    /// Later calls to [`reset`](Self::reset) fall back to `options.init_method`.
    pub fn with_centroids(data: Array2<f64>, centroids: Array2<f64>, options: SolverOptions) -> Result<Self> {
        let k = centroids.nrows();
        let mut solver = Self::unseeded(k, data, options)?;

        if centroids.ncols() != solver.dimensionality() {
            return Err(Error::invalid_data(format!(
                "Centroids have {} dimensions, data has {}",
                centroids.ncols(),
                solver.dimensionality()
            )));
        }
        if centroids.iter().any(|v| !v.is_finite()) {
            return Err(Error::invalid_data("Centroids must be finite"));
        }

        solver.centroids = centroids;
        Ok(solver)
    }

    fn unseeded(k: usize, data: Array2<f64>, options: SolverOptions) -> Result<Self> {
        if k == 0 {
            return Err(Error::invalid_parameter("k must be > 0"));
        }
        validate_data(data.view())?;

        let ranges = dimension_ranges(data.view())?;
        let rng = match options.random_state {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let n_points = data.nrows();

        Ok(Self {
            k,
            centroids: Array2::zeros((k, data.ncols())),
            data,
            options,
            ranges,
            rng,
            metric: EuclideanDistance,
            assignments: vec![None; n_points],
            error: 0.0,
            iterations: 0,
            iteration_logs: Vec::new(),
            status: SolverStatus::Initialized,
        })
    }

    /// Clear all progress and draw fresh initial centroids.
    ///
    /// The generator keeps advancing, so repeated resets give different starts.
    pub fn reset(&mut self) -> Result<()> {
        self.error = 0.0;
        self.iterations = 0;
        self.iteration_logs.clear();
        self.assignments.iter_mut().for_each(|a| *a = None);
        self.centroids = initialize_centroids(self.data.view(), self.k, self.options.init_method, &mut self.rng)?;
        self.status = SolverStatus::Initialized;
        Ok(())
    }

    /// Number of clusters
    pub fn k(&self) -> usize {
        self.k
    }

    /// The dataset this solver runs over
    pub fn data(&self) -> &Array2<f64> {
        &self.data
    }

    /// Solver configuration
    pub fn options(&self) -> &SolverOptions {
        &self.options
    }

    /// Number of dimensions of every point
    pub fn dimensionality(&self) -> usize {
        self.data.ncols()
    }

    /// Observed min and max of dimension `n`
    pub fn dimension_range(&self, n: usize) -> Result<DimensionRange> {
        self.ranges
            .get(n)
            .copied()
            .ok_or_else(|| Error::invalid_parameter(format!("Dimension {} out of bounds", n)))
    }

    /// Observed ranges of every dimension
    pub fn dimension_ranges(&self) -> &[DimensionRange] {
        &self.ranges
    }

    /// Current centroid positions, one row per centroid
    pub fn centroids(&self) -> &Array2<f64> {
        &self.centroids
    }

    /// Current assignment of each point, `None` until it is first assigned
    pub fn assignments(&self) -> &[Option<usize>] {
        &self.assignments
    }

    /// Error computed by the last [`calculate_error`](Self::calculate_error)
    pub fn error(&self) -> f64 {
        self.error
    }

    /// Iteration counter; persists across `solve` calls until `reset`
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// Every iteration recorded since the last reset
    pub fn iteration_logs(&self) -> &[IterationLog] {
        &self.iteration_logs
    }

    /// Lifecycle state
    pub fn status(&self) -> SolverStatus {
        self.status
    }

    /// Assignments as cluster labels; fails if any point is unassigned
    pub fn labels(&self) -> Result<Array1<usize>> {
        self.assignments
            .iter()
            .enumerate()
            .map(|(index, a)| a.ok_or(Error::UnassignedPoint { index }))
            .collect()
    }

    /// Index of the centroid nearest to `point`
    pub fn predict(&self, point: ArrayView1<f64>) -> Result<usize> {
        find_closest_centroid(point, self.centroids.view(), &self.metric)
    }

    /// Assign the point at `index` to its nearest centroid.
    ///
    /// Returns whether the newly computed nearest centroid differs from the
    /// previous assignment.
    pub fn assign_point_to_centroid(&mut self, index: usize) -> Result<bool> {
        if index >= self.data.nrows() {
            return Err(Error::invalid_parameter(format!("Point index {} out of bounds", index)));
        }

        let previous = self.assignments[index];
        let nearest = find_closest_centroid(self.data.row(index), self.centroids.view(), &self.metric)?;

        match self.options.assignment_policy {
            AssignmentPolicy::Nearest => self.assignments[index] = Some(nearest),
            AssignmentPolicy::SkipFirstCentroid => {
                if nearest != 0 {
                    self.assignments[index] = Some(nearest);
                }
            }
        }
        if self.status == SolverStatus::Initialized {
            self.status = SolverStatus::Iterating;
        }

        Ok(previous != Some(nearest))
    }

    /// Assign every point; returns true if any assignment changed
    pub fn assign_points_to_centroids(&mut self) -> Result<bool> {
        Ok(self.reassign_all()? > 0)
    }

    fn reassign_all(&mut self) -> Result<usize> {
        let mut changed = 0;
        for i in 0..self.data.nrows() {
            if self.assign_point_to_centroid(i)? {
                changed += 1;
            }
        }
        Ok(changed)
    }

    /// Indices of the points currently assigned to `centroid_index`
    pub fn points_for_centroid(&self, centroid_index: usize) -> Vec<usize> {
        self.assignments
            .iter()
            .enumerate()
            .filter(|(_, a)| **a == Some(centroid_index))
            .map(|(i, _)| i)
            .collect()
    }

    /// Points currently assigned to `centroid_index`, one per row
    pub fn centroid_members(&self, centroid_index: usize) -> Array2<f64> {
        self.data.select(Axis(0), &self.points_for_centroid(centroid_index))
    }

    /// Move centroid `centroid_index` to the mean of its points.
    ///
    /// An empty cluster is handled according to the solver's
    /// [`EmptyClusterPolicy`].
    pub fn update_centroid_location(&mut self, centroid_index: usize) -> Result<Array1<f64>> {
        if centroid_index >= self.k {
            return Err(Error::invalid_parameter(format!(
                "Centroid index {} out of bounds for k = {}",
                centroid_index, self.k
            )));
        }

        let members = self.points_for_centroid(centroid_index);
        self.move_centroid(centroid_index, &members)?;
        Ok(self.centroids.row(centroid_index).to_owned())
    }

    /// Move every centroid to the mean of its points
    pub fn update_centroid_locations(&mut self) -> Result<()> {
        let clusters = get_cluster_indices(&self.assignments, self.k);
        for (centroid_index, members) in clusters.iter().enumerate() {
            self.move_centroid(centroid_index, members)?;
        }
        Ok(())
    }

    fn move_centroid(&mut self, centroid_index: usize, members: &[usize]) -> Result<()> {
        if !members.is_empty() {
            let means = compute_means(self.data.view(), members)?;
            self.centroids.row_mut(centroid_index).assign(&Array1::from(means));
            return Ok(());
        }

        match self.options.empty_cluster_policy {
            EmptyClusterPolicy::KeepPrevious => {}
            EmptyClusterPolicy::Reinitialize => {
                warn!(k = self.k, centroid = centroid_index, "Re-initializing empty cluster");
                let point = random_point(&self.ranges, &mut self.rng);
                self.centroids.row_mut(centroid_index).assign(&point);
            }
            EmptyClusterPolicy::Fail => {
                return Err(Error::EmptyCluster { centroid: centroid_index });
            }
        }
        Ok(())
    }

    /// Compute and store the regularized RMS error of the current state
    pub fn calculate_error(&mut self) -> Result<f64> {
        self.error = calculate_error(self.data.view(), self.centroids.view(), &self.assignments, &self.metric)?;
        Ok(self.error)
    }

    /// [`solve`](Self::solve) with [`DEFAULT_MAX_ITERATIONS`]
    pub fn solve_default(&mut self) -> Result<IterationLog> {
        self.solve(DEFAULT_MAX_ITERATIONS)
    }

    /// Iterate assign → update → error until no assignment changes or the
    /// iteration counter reaches `max_iterations`. Returns the last record.
    pub fn solve(&mut self, max_iterations: usize) -> Result<IterationLog> {
        validate_parameters(self.k, max_iterations)?;

        while self.iterations < max_iterations {
            self.status = SolverStatus::Iterating;

            let changed = self.reassign_all()?;
            self.update_centroid_locations()?;
            let error = self.calculate_error()?;

            debug!(k = self.k, iteration = self.iterations, error, changed, "K-means iteration");

            // A record's position in the log always equals its iteration index
            self.iteration_logs.truncate(self.iterations);
            self.iteration_logs.push(IterationLog {
                centroids: self.centroids.clone(),
                iteration: self.iterations,
                error,
                did_reach_steady_state: changed == 0,
            });

            if changed == 0 {
                self.status = SolverStatus::Converged;
                if self.options.verbose {
                    info!(
                        k = self.k,
                        iterations = self.iterations + 1,
                        error,
                        cluster_sizes = ?cluster_sizes(&self.assignments, self.k),
                        "K-means converged"
                    );
                }
                break;
            }

            self.iterations += 1;
        }

        if self.status != SolverStatus::Converged {
            self.status = SolverStatus::MaxIterationsReached;
            warn!(k = self.k, max_iterations, error = self.error, "K-means stopped at iteration cap");
        }

        self.iteration_logs
            .last()
            .cloned()
            .ok_or_else(|| Error::convergence_failure("Solver recorded no iterations"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    fn two_blobs() -> Array2<f64> {
        array![[1.0, 1.0], [1.0, 2.0], [9.0, 9.0], [9.0, 8.0]]
    }

    fn seeded(seed: u64) -> SolverOptions {
        SolverOptions::default().random_state(seed)
    }

    #[test]
    fn test_solver_creation() {
        let solver = KMeans::with_options(3, two_blobs(), seeded(1)).unwrap();
        assert_eq!(solver.k(), 3);
        assert_eq!(solver.dimensionality(), 2);
        assert_eq!(solver.centroids().dim(), (3, 2));
        assert_eq!(solver.assignments().len(), 4);
        assert!(solver.assignments().iter().all(Option::is_none));
        assert_eq!(solver.status(), SolverStatus::Initialized);
        assert!(solver.iteration_logs().is_empty());
    }

    #[test]
    fn test_options_builder_pattern() {
        let options = SolverOptions::default()
            .init_method(InitMethod::Sample)
            .assignment_policy(AssignmentPolicy::SkipFirstCentroid)
            .empty_cluster_policy(EmptyClusterPolicy::Fail)
            .random_state(42)
            .verbose(true);

        assert_eq!(options.init_method, InitMethod::Sample);
        assert_eq!(options.assignment_policy, AssignmentPolicy::SkipFirstCentroid);
        assert_eq!(options.empty_cluster_policy, EmptyClusterPolicy::Fail);
        assert_eq!(options.random_state, Some(42));
        assert!(options.verbose);
    }

    #[test]
    fn test_invalid_parameters() {
        assert!(matches!(KMeans::new(0, two_blobs()), Err(Error::InvalidParameter { .. })));
        assert!(matches!(
            KMeans::new(1, Array2::zeros((0, 2))),
            Err(Error::InvalidData { .. })
        ));

        let mut solver = KMeans::with_options(2, two_blobs(), seeded(3)).unwrap();
        assert!(matches!(solver.solve(0), Err(Error::InvalidParameter { .. })));
        assert!(solver.assign_point_to_centroid(4).is_err());
        assert!(solver.update_centroid_location(2).is_err());
    }

    #[test]
    fn test_with_centroids_validates_shape() {
        let bad = KMeans::with_centroids(two_blobs(), array![[0.0, 0.0, 0.0]], SolverOptions::default());
        assert!(matches!(bad, Err(Error::InvalidData { .. })));

        let empty = KMeans::with_centroids(two_blobs(), Array2::zeros((0, 2)), SolverOptions::default());
        assert!(matches!(empty, Err(Error::InvalidParameter { .. })));
    }

    #[test]
    fn test_k_larger_than_data_with_uniform_init() {
        let mut solver = KMeans::with_options(6, two_blobs(), seeded(9)).unwrap();
        let result = solver.solve(50).unwrap();
        assert_eq!(result.centroids.nrows(), 6);
        assert!(result.error >= 6.0);
    }

    #[test]
    fn test_sample_init_rejects_k_larger_than_data() {
        let options = seeded(9).init_method(InitMethod::Sample);
        assert!(matches!(
            KMeans::with_options(5, two_blobs(), options),
            Err(Error::InvalidParameter { .. })
        ));
    }

    #[test]
    fn test_assign_point_reports_change() {
        let mut solver =
            KMeans::with_centroids(two_blobs(), array![[0.0, 0.0], [10.0, 10.0]], SolverOptions::default()).unwrap();

        assert!(solver.assign_point_to_centroid(2).unwrap());
        assert_eq!(solver.assignments()[2], Some(1));
        assert_eq!(solver.status(), SolverStatus::Iterating);

        // Same centroids, same answer
        assert!(!solver.assign_point_to_centroid(2).unwrap());
    }

    #[test]
    fn test_points_and_centroid_update() {
        let mut solver =
            KMeans::with_centroids(two_blobs(), array![[0.0, 0.0], [10.0, 10.0]], SolverOptions::default()).unwrap();

        assert!(solver.assign_points_to_centroids().unwrap());
        assert_eq!(solver.points_for_centroid(0), vec![0, 1]);
        assert_eq!(solver.points_for_centroid(1), vec![2, 3]);
        assert_eq!(solver.centroid_members(1), array![[9.0, 9.0], [9.0, 8.0]]);

        let updated = solver.update_centroid_location(0).unwrap();
        assert_eq!(updated, array![1.0, 1.5]);
        assert_eq!(solver.centroids().row(0), array![1.0, 1.5]);
    }

    #[test]
    fn test_solve_two_blobs() {
        let mut solver =
            KMeans::with_centroids(two_blobs(), array![[0.0, 0.0], [10.0, 10.0]], SolverOptions::default()).unwrap();

        let result = solver.solve(100).unwrap();

        assert!(result.did_reach_steady_state);
        assert_eq!(result.iteration, 1);
        assert_eq!(result.centroids, array![[1.0, 1.5], [9.0, 8.5]]);
        // every point is 0.5 from its centroid, plus k = 2
        assert!((result.error - 2.5).abs() < 1e-10);
        assert_eq!(solver.labels().unwrap(), array![0usize, 0, 1, 1]);
        assert_eq!(solver.status(), SolverStatus::Converged);
        assert_eq!(solver.iteration_logs().len(), 2);
        assert!(!solver.iteration_logs()[0].did_reach_steady_state);
    }

    #[test]
    fn test_solve_hits_iteration_cap() {
        let mut solver =
            KMeans::with_centroids(two_blobs(), array![[0.0, 0.0], [10.0, 10.0]], SolverOptions::default()).unwrap();

        let result = solver.solve(1).unwrap();
        assert!(!result.did_reach_steady_state);
        assert_eq!(result.iteration, 0);
        assert_eq!(solver.iterations(), 1);
        assert_eq!(solver.status(), SolverStatus::MaxIterationsReached);

        // The counter persists, so a larger cap picks up where it stopped
        let result = solver.solve(10).unwrap();
        assert!(result.did_reach_steady_state);
        assert_eq!(result.iteration, 1);
        assert_eq!(solver.iteration_logs().len(), 2);

        // Solving a converged solver again re-checks the same iteration
        let again = solver.solve(10).unwrap();
        assert_eq!(again, result);
        assert_eq!(solver.iteration_logs().len(), 2);
    }

    #[test]
    fn test_reset_clears_state() {
        let mut solver = KMeans::with_options(2, two_blobs(), seeded(11)).unwrap();
        solver.solve(100).unwrap();
        let first = solver.centroids().clone();

        solver.reset().unwrap();
        assert!(solver.iteration_logs().is_empty());
        assert_eq!(solver.iterations(), 0);
        assert_eq!(solver.error(), 0.0);
        assert!(solver.assignments().iter().all(Option::is_none));
        assert_eq!(solver.status(), SolverStatus::Initialized);
        assert_ne!(solver.centroids(), &first);
    }

    #[test]
    fn test_seeded_solvers_are_reproducible() {
        let mut a = KMeans::with_options(3, two_blobs(), seeded(5)).unwrap();
        let mut b = KMeans::with_options(3, two_blobs(), seeded(5)).unwrap();
        assert_eq!(a.solve(100).unwrap(), b.solve(100).unwrap());
    }

    #[test]
    fn test_empty_cluster_keep_previous() {
        let data = array![[0.0], [1.0]];
        let mut solver = KMeans::with_centroids(data, array![[0.5], [100.0]], SolverOptions::default()).unwrap();

        let result = solver.solve(10).unwrap();
        assert!(result.did_reach_steady_state);
        assert_eq!(result.centroids, array![[0.5], [100.0]]);
    }

    #[test]
    fn test_empty_cluster_reinitialize() {
        let data = array![[0.0], [1.0]];
        let options = seeded(2).empty_cluster_policy(EmptyClusterPolicy::Reinitialize);
        let mut solver = KMeans::with_centroids(data, array![[0.5], [100.0]], options).unwrap();

        solver.assign_points_to_centroids().unwrap();
        solver.update_centroid_locations().unwrap();
        let moved = solver.centroids()[[1, 0]];
        assert!((0.0..=1.0).contains(&moved));
    }

    #[test]
    fn test_empty_cluster_fail() {
        let data = array![[0.0], [1.0]];
        let options = SolverOptions::default().empty_cluster_policy(EmptyClusterPolicy::Fail);
        let mut solver = KMeans::with_centroids(data, array![[0.5], [100.0]], options).unwrap();

        assert_eq!(solver.solve(10).unwrap_err(), Error::EmptyCluster { centroid: 1 });
    }

    #[test]
    fn test_skip_first_centroid_policy() {
        let data = array![[0.0], [10.0]];
        let options = SolverOptions::default().assignment_policy(AssignmentPolicy::SkipFirstCentroid);
        let mut solver = KMeans::with_centroids(data, array![[0.0], [10.0]], options).unwrap();

        // Nearest is centroid 0: reported as changed but never written
        assert!(solver.assign_point_to_centroid(0).unwrap());
        assert_eq!(solver.assignments()[0], None);
        assert!(solver.assign_point_to_centroid(1).unwrap());
        assert_eq!(solver.assignments()[1], Some(1));
        assert!(solver.assign_point_to_centroid(0).unwrap());

        assert_eq!(solver.calculate_error().unwrap_err(), Error::UnassignedPoint { index: 0 });
        assert!(matches!(solver.labels(), Err(Error::UnassignedPoint { index: 0 })));
    }

    #[test]
    fn test_skip_first_centroid_keeps_previous_assignment() {
        let data = array![[2.0], [10.0]];
        let options = SolverOptions::default().assignment_policy(AssignmentPolicy::SkipFirstCentroid);
        let mut solver = KMeans::with_centroids(data, array![[0.0], [1.5]], options).unwrap();

        assert!(solver.assign_points_to_centroids().unwrap());
        assert_eq!(solver.assignments().to_vec(), vec![Some(1), Some(1)]);

        // Centroid 1 moves to 6.0, so centroid 0 is now nearest to point 0
        solver.update_centroid_locations().unwrap();
        assert_eq!(*solver.centroids(), array![[0.0], [6.0]]);

        assert!(solver.assign_point_to_centroid(0).unwrap());
        assert_eq!(solver.assignments()[0], Some(1));
        assert!(!solver.assign_point_to_centroid(1).unwrap());
    }

    #[test]
    fn test_skip_first_centroid_solve_fails() {
        let data = array![[0.0], [10.0]];
        let options = SolverOptions::default().assignment_policy(AssignmentPolicy::SkipFirstCentroid);
        let mut solver = KMeans::with_centroids(data, array![[0.0], [10.0]], options).unwrap();

        assert_eq!(solver.solve(10).unwrap_err(), Error::UnassignedPoint { index: 0 });
    }

    #[test]
    fn test_predict() {
        let mut solver =
            KMeans::with_centroids(two_blobs(), array![[0.0, 0.0], [10.0, 10.0]], SolverOptions::default()).unwrap();
        solver.solve(100).unwrap();

        assert_eq!(solver.predict(array![2.0, 2.0].view()).unwrap(), 0);
        assert_eq!(solver.predict(array![7.0, 9.0].view()).unwrap(), 1);
        assert!(solver.predict(array![7.0].view()).is_err());
    }

    #[test]
    fn test_dimension_range_accessors() {
        let solver = KMeans::with_options(1, two_blobs(), seeded(0)).unwrap();
        assert_eq!(solver.dimension_range(1).unwrap(), DimensionRange { min: 1.0, max: 9.0 });
        assert_eq!(solver.dimension_ranges().len(), 2);
        assert!(solver.dimension_range(2).is_err());
    }
}
