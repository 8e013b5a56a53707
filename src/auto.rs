//! Grid search over cluster counts and random restarts

use crate::error::{Error, Result};
use crate::kmeans::{IterationLog, KMeans, SolverOptions};
use crate::utils::{validate_data, validate_parameters};
use ndarray::Array2;
use rand::prelude::*;
use rayon::prelude::*;
use tracing::{debug, info};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Auto-solver configuration
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AutoSolverOptions {
    /// Smallest cluster count tried (inclusive)
    pub k_min: usize,
    /// Upper bound on the cluster count (exclusive)
    pub k_max: usize,
    /// Random restarts per cluster count
    pub max_trials: usize,
    /// Base seed; trial `i` of the grid is seeded with `base + i`
    pub random_state: Option<u64>,
    /// Number of parallel jobs; `Some(1)` runs trials sequentially
    pub n_jobs: Option<usize>,
    /// Options handed to every per-trial solver (its seed is overridden)
    pub solver_options: SolverOptions,
    /// Enable verbose output
    pub verbose: bool,
}

impl Default for AutoSolverOptions {
    fn default() -> Self {
        Self {
            k_min: 1,
            k_max: 5,
            max_trials: 5,
            random_state: None,
            n_jobs: None,
            solver_options: SolverOptions::default(),
            verbose: false,
        }
    }
}

impl AutoSolverOptions {
    /// Search cluster counts in `k_min..k_max`
    pub fn k_range(mut self, k_min: usize, k_max: usize) -> Self {
        self.k_min = k_min;
        self.k_max = k_max;
        self
    }

    /// Set the number of random restarts per cluster count
    pub fn max_trials(mut self, max_trials: usize) -> Self {
        self.max_trials = max_trials;
        self
    }

    /// Set the random seed for reproducibility
    pub fn random_state(mut self, seed: u64) -> Self {
        self.random_state = Some(seed);
        self
    }

    /// Set the number of parallel jobs
    pub fn n_jobs(mut self, n_jobs: usize) -> Self {
        self.n_jobs = Some(n_jobs);
        self
    }

    /// Set the options used by every per-trial solver
    pub fn solver_options(mut self, options: SolverOptions) -> Self {
        self.solver_options = options;
        self
    }

    /// Enable verbose output
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    fn validate(&self) -> Result<()> {
        if self.k_min == 0 {
            return Err(Error::invalid_parameter("k_min must be > 0"));
        }
        if self.k_max <= self.k_min {
            return Err(Error::invalid_parameter("k_max must be > k_min"));
        }
        if self.max_trials == 0 {
            return Err(Error::invalid_parameter("max_trials must be > 0"));
        }
        Ok(())
    }
}

/// Terminal iteration of one trial, tagged with the `k` and trial that produced it
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Solution {
    /// Cluster count of the trial
    pub k: usize,
    /// Zero-based trial number within this `k`
    pub trial: usize,
    /// Last iteration record of the trial's solver
    pub record: IterationLog,
}

impl Solution {
    /// Error of the terminal iteration
    pub fn error(&self) -> f64 {
        self.record.error
    }

    /// Final centroid positions
    pub fn centroids(&self) -> &Array2<f64> {
        &self.record.centroids
    }
}

/// Runs a fresh [`KMeans`] for every `(k, trial)` pair and keeps the one
/// with the lowest error.
///
/// Because the error includes a `+ k` term, larger cluster counts only win
/// when they fit the data substantially better.
#[derive(Debug, Clone)]
pub struct KMeansAutoSolver {
    data: Array2<f64>,
    options: AutoSolverOptions,
    best: Option<Solution>,
    log: Vec<Solution>,
}

impl KMeansAutoSolver {
    /// Create an auto-solver searching `k` in `1..5` with 5 trials each
    pub fn new(data: Array2<f64>) -> Result<Self> {
        Self::with_options(data, AutoSolverOptions::default())
    }

    /// Create an auto-solver with explicit options
    pub fn with_options(data: Array2<f64>, options: AutoSolverOptions) -> Result<Self> {
        options.validate()?;
        validate_data(data.view())?;

        Ok(Self {
            data,
            options,
            best: None,
            log: Vec::new(),
        })
    }

    /// Forget the best solution and the trial log
    pub fn reset(&mut self) {
        self.best = None;
        self.log.clear();
    }

    /// Smallest cluster count searched
    pub fn k_min(&self) -> usize {
        self.options.k_min
    }

    /// Exclusive upper bound of the cluster counts searched
    pub fn k_max(&self) -> usize {
        self.options.k_max
    }

    /// Random restarts per cluster count
    pub fn max_trials(&self) -> usize {
        self.options.max_trials
    }

    /// Search configuration
    pub fn options(&self) -> &AutoSolverOptions {
        &self.options
    }

    /// Lowest-error solution seen since the last reset
    pub fn best(&self) -> Option<&Solution> {
        self.best.as_ref()
    }

    /// Every trial's solution, in grid order (`k` ascending, then trial)
    pub fn log(&self) -> &[Solution] {
        &self.log
    }

    /// Run every trial of the grid and return the best solution seen so far
    pub fn solve(&mut self, max_iterations: usize) -> Result<Solution> {
        validate_parameters(self.options.k_min, max_iterations)?;

        let base_seed = self.options.random_state.unwrap_or_else(|| thread_rng().gen());
        let grid: Vec<(usize, usize)> = (self.options.k_min..self.options.k_max)
            .flat_map(|k| (0..self.options.max_trials).map(move |trial| (k, trial)))
            .collect();

        let results: Vec<Result<Solution>> = if self.should_use_parallel(grid.len()) {
            grid.par_iter()
                .enumerate()
                .map(|(i, &(k, trial))| self.run_trial(k, trial, base_seed.wrapping_add(i as u64), max_iterations))
                .collect()
        } else {
            grid.iter()
                .enumerate()
                .map(|(i, &(k, trial))| self.run_trial(k, trial, base_seed.wrapping_add(i as u64), max_iterations))
                .collect()
        };

        // A failed trial leaves the log and the best solution untouched
        let solutions = results.into_iter().collect::<Result<Vec<_>>>()?;

        for solution in solutions {
            debug!(
                k = solution.k,
                trial = solution.trial,
                error = solution.error(),
                steady = solution.record.did_reach_steady_state,
                "Auto-solver trial finished"
            );
            self.log.push(solution.clone());

            let improves = self
                .best
                .as_ref()
                .map_or(true, |best| solution.error() < best.error());
            if improves {
                if self.options.verbose {
                    info!(k = solution.k, trial = solution.trial, error = solution.error(), "New best solution");
                }
                self.best = Some(solution);
            }
        }

        self.best
            .clone()
            .ok_or_else(|| Error::convergence_failure("No successful runs"))
    }

    /// Single trial: a fresh solver for `k`, seeded with `seed`
    fn run_trial(&self, k: usize, trial: usize, seed: u64, max_iterations: usize) -> Result<Solution> {
        let options = self.options.solver_options.clone().random_state(seed);
        let mut solver = KMeans::with_options(k, self.data.clone(), options)?;
        let record = solver.solve(max_iterations)?;

        Ok(Solution { k, trial, record })
    }

    /// Determine if parallel processing should be used
    fn should_use_parallel(&self, n_trials: usize) -> bool {
        match self.options.n_jobs {
            Some(1) => false,
            Some(_) => true,
            None => n_trials > 1,
        }
    }
}
