//! Distance metrics and the per-dimension mean used for centroid updates

use crate::error::{Error, Result};
use ndarray::{ArrayView1, ArrayView2};

/// Trait for computing distances between numeric data points
pub trait PointDistance {
    /// Compute distance between two data points
    fn distance(&self, a: ArrayView1<f64>, b: ArrayView1<f64>) -> Result<f64>;

    /// Compute distances between a single point and multiple centroids
    fn distances_to_centroids(&self, point: ArrayView1<f64>, centroids: ArrayView2<f64>) -> Result<Vec<f64>> {
        if centroids.ncols() != point.len() {
            return Err(Error::invalid_data("Point and centroids must have same number of features"));
        }

        let mut distances = Vec::with_capacity(centroids.nrows());
        for centroid_row in centroids.rows() {
            distances.push(self.distance(point, centroid_row)?);
        }
        Ok(distances)
    }
}

/// Euclidean distance: square root of the summed squared differences
#[derive(Debug, Clone, Copy, Default)]
pub struct EuclideanDistance;

impl PointDistance for EuclideanDistance {
    fn distance(&self, a: ArrayView1<f64>, b: ArrayView1<f64>) -> Result<f64> {
        Ok(SquaredEuclideanDistance.distance(a, b)?.sqrt())
    }
}

/// Squared Euclidean distance; orders points like [`EuclideanDistance`] without the root
#[derive(Debug, Clone, Copy, Default)]
pub struct SquaredEuclideanDistance;

impl PointDistance for SquaredEuclideanDistance {
    fn distance(&self, a: ArrayView1<f64>, b: ArrayView1<f64>) -> Result<f64> {
        if a.len() != b.len() {
            return Err(Error::invalid_data("Vectors must have the same length"));
        }

        let sum_sq_diff = a.iter()
            .zip(b.iter())
            .map(|(x, y)| (y - x).powi(2))
            .sum::<f64>();

        Ok(sum_sq_diff)
    }
}

/// Arithmetic mean of a sequence of values, `None` when it is empty
pub fn mean<I>(values: I) -> Option<f64>
where
    I: IntoIterator,
    I::Item: std::borrow::Borrow<f64>,
{
    use std::borrow::Borrow;

    let (sum, count) = values
        .into_iter()
        .fold((0.0, 0usize), |(sum, count), v| (sum + *v.borrow(), count + 1));

    if count == 0 {
        None
    } else {
        Some(sum / count as f64)
    }
}

/// Compute the per-feature mean across the rows selected by `indices`
pub fn compute_means(data: ArrayView2<f64>, indices: &[usize]) -> Result<Vec<f64>> {
    if indices.is_empty() {
        return Err(Error::invalid_data("Cannot compute mean of empty cluster"));
    }

    let mut means = Vec::with_capacity(data.ncols());

    for col_idx in 0..data.ncols() {
        let column_mean = mean(indices.iter().map(|&row_idx| data[[row_idx, col_idx]]))
            .ok_or_else(|| Error::computation_error("Unable to compute mean for cluster"))?;

        means.push(column_mean);
    }

    Ok(means)
}
