//! Utility functions shared by the k-means solvers

use crate::distance::PointDistance;
use crate::error::{Error, Result};
use ndarray::{Array2, ArrayView1, ArrayView2};

/// Find the closest centroid for a given data point.
///
/// Ties go to the lowest centroid index.
pub fn find_closest_centroid<D>(
    point: ArrayView1<f64>,
    centroids: ArrayView2<f64>,
    metric: &D,
) -> Result<usize>
where
    D: PointDistance + ?Sized,
{
    if centroids.nrows() == 0 {
        return Err(Error::invalid_data("No centroids provided"));
    }

    if centroids.ncols() != point.len() {
        return Err(Error::invalid_data("Point and centroids dimension mismatch"));
    }

    let mut min_distance = f64::INFINITY;
    let mut closest_centroid = 0;

    for (i, distance) in metric.distances_to_centroids(point, centroids)?.into_iter().enumerate() {
        if distance < min_distance {
            min_distance = distance;
            closest_centroid = i;
        }
    }

    Ok(closest_centroid)
}

/// Get indices of points assigned to each cluster; unassigned points are skipped
pub fn get_cluster_indices(assignments: &[Option<usize>], n_clusters: usize) -> Vec<Vec<usize>> {
    let mut cluster_indices = vec![Vec::new(); n_clusters];

    for (point_idx, cluster_id) in assignments.iter().enumerate() {
        if let Some(cluster_id) = *cluster_id {
            if cluster_id < n_clusters {
                cluster_indices[cluster_id].push(point_idx);
            }
        }
    }

    cluster_indices
}

/// Calculate cluster sizes
pub fn cluster_sizes(assignments: &[Option<usize>], n_clusters: usize) -> Vec<usize> {
    let mut sizes = vec![0; n_clusters];

    for cluster_id in assignments.iter().flatten() {
        if *cluster_id < n_clusters {
            sizes[*cluster_id] += 1;
        }
    }

    sizes
}

/// Root-mean-square of `distance(point, centroid) + k` over all points.
///
/// The `+ k` term penalises larger cluster counts so that the auto-solver
/// does not simply prefer the largest `k` it tries.
pub fn calculate_error<D>(
    data: ArrayView2<f64>,
    centroids: ArrayView2<f64>,
    assignments: &[Option<usize>],
    metric: &D,
) -> Result<f64>
where
    D: PointDistance + ?Sized,
{
    if assignments.len() != data.nrows() {
        return Err(Error::invalid_data("Assignments must cover every data point"));
    }

    let k = centroids.nrows() as f64;
    let mut sum_distance_squared = 0.0;

    for (index, point) in data.rows().into_iter().enumerate() {
        let cluster_id = assignments[index].ok_or(Error::UnassignedPoint { index })?;
        if cluster_id >= centroids.nrows() {
            return Err(Error::invalid_data("Invalid cluster assignment"));
        }

        let distance = metric.distance(point, centroids.row(cluster_id))? + k;
        sum_distance_squared += distance * distance;
    }

    let error = (sum_distance_squared / data.nrows() as f64).sqrt();
    if !error.is_finite() {
        return Err(Error::computation_error("Error metric is not finite"));
    }

    Ok(error)
}

/// Validate solver parameters
pub fn validate_parameters(k: usize, max_iterations: usize) -> Result<()> {
    if k == 0 {
        return Err(Error::invalid_parameter("k must be > 0"));
    }

    if max_iterations == 0 {
        return Err(Error::invalid_parameter("max_iterations must be > 0"));
    }

    Ok(())
}

/// Validate input data: at least one point, one feature, and only finite values
pub fn validate_data(data: ArrayView2<f64>) -> Result<()> {
    if data.nrows() == 0 {
        return Err(Error::invalid_data("Data cannot be empty"));
    }

    if data.ncols() == 0 {
        return Err(Error::invalid_data("Data must have at least one feature"));
    }

    if let Some(((row, col), _)) = data.indexed_iter().find(|(_, v)| !v.is_finite()) {
        return Err(Error::invalid_data(format!(
            "Non-finite value at point {}, dimension {}",
            row, col
        )));
    }

    Ok(())
}

/// Build a dataset from row vectors, rejecting rows of differing dimensionality
pub fn points_to_array<P>(points: &[P]) -> Result<Array2<f64>>
where
    P: AsRef<[f64]>,
{
    let first = points
        .first()
        .ok_or_else(|| Error::invalid_data("Data cannot be empty"))?;
    let dimensionality = first.as_ref().len();

    let mut flat = Vec::with_capacity(points.len() * dimensionality);
    for (i, point) in points.iter().enumerate() {
        let point = point.as_ref();
        if point.len() != dimensionality {
            return Err(Error::invalid_data(format!(
                "Point {} has {} dimensions, expected {}",
                i,
                point.len(),
                dimensionality
            )));
        }
        flat.extend_from_slice(point);
    }

    Array2::from_shape_vec((points.len(), dimensionality), flat)
        .map_err(|e| Error::invalid_data(e.to_string()))
}
