//! K-means auto-solver example
//!
//! This example clusters a small 2D dataset with a fixed `k`, re-runs it from
//! fresh random starts, and then lets the auto-solver pick `k` on its own.

use kmeans_solver::{points_to_array, AutoSolverOptions, KMeans, KMeansAutoSolver, SolverOptions};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    // Three loose groups of points
    let points = vec![
        vec![1.0, 2.0], vec![2.0, 1.5], vec![1.5, 1.0], vec![2.5, 2.5],
        vec![8.0, 8.0], vec![9.0, 8.5], vec![8.5, 9.5], vec![7.5, 9.0],
        vec![1.0, 9.0], vec![2.0, 8.0], vec![1.5, 9.5], vec![0.5, 8.5],
    ];
    let data = points_to_array(&points)?;

    println!("Sample data shape: {:?}", data.dim());
    println!();

    // Example 1: a single solve with k = 3
    println!("=== Example 1: K-means with k = 3 ===");
    let mut solver = KMeans::with_options(3, data.clone(), SolverOptions::default().random_state(42).verbose(true))?;
    let result = solver.solve(1000)?;

    println!("Converged: {}", result.did_reach_steady_state);
    println!("Iterations: {}", result.iteration + 1);
    println!("Final error: {:.4}", result.error);
    println!("Centroids:");
    for (i, centroid) in result.centroids.rows().into_iter().enumerate() {
        println!("  Cluster {}: {:?}", i, centroid.to_vec());
    }
    println!("Iteration log:");
    for log in solver.iteration_logs() {
        println!("  #{:<3} error={:.4} steady={}", log.iteration, log.error, log.did_reach_steady_state);
    }
    println!();

    // Example 2: same solver, different random starts
    println!("=== Example 2: Five random restarts ===");
    for run in 0..5 {
        solver.reset()?;
        let result = solver.solve(1000)?;
        println!("run {}: error={:.4}, iterations={}", run, result.error, result.iteration + 1);
    }
    println!();

    // Example 3: let the auto-solver choose k
    println!("=== Example 3: Auto-solver over k in 1..6 ===");
    let options = AutoSolverOptions::default()
        .k_range(1, 6)
        .max_trials(5)
        .random_state(7)
        .verbose(true);
    let mut auto = KMeansAutoSolver::with_options(data, options)?;
    let best = auto.solve(1000)?;

    println!("Best k: {} (trial {})", best.k, best.trial);
    println!("Best error: {:.4}", best.error());
    for k in auto.k_min()..auto.k_max() {
        let lowest = auto
            .log()
            .iter()
            .filter(|s| s.k == k)
            .map(|s| s.error())
            .fold(f64::INFINITY, f64::min);
        println!("  k={}: lowest error {:.4}", k, lowest);
    }

    Ok(())
}
