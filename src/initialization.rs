//! Initialization methods for k-means centroids

use crate::error::{Error, Result};
use ndarray::{Array1, Array2, ArrayView2};
use rand::prelude::*;
use std::collections::HashSet;

/// Initialization methods for the k-means solver
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InitMethod {
    /// Draw every coordinate uniformly between the observed min and max of its dimension.
    /// Centroids land inside the data's bounding box, not necessarily on a data point.
    #[default]
    Uniform,
    /// Randomly select `k` distinct data points as initial centroids
    Sample,
}

/// Observed bounds of a single dimension
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DimensionRange {
    /// Smallest value seen in this dimension
    pub min: f64,
    /// Largest value seen in this dimension
    pub max: f64,
}

impl DimensionRange {
    /// Draw a value in `[min, max)`, or exactly `min` when the range is degenerate
    pub fn sample<R: Rng>(&self, rng: &mut R) -> f64 {
        self.min + rng.gen::<f64>() * (self.max - self.min)
    }

    /// Whether `value` lies within the range, allowing `eps` of rounding slack
    pub fn contains(&self, value: f64, eps: f64) -> bool {
        value >= self.min - eps && value <= self.max + eps
    }
}

/// Min and max of column `dimension`
pub fn dimension_range(data: ArrayView2<f64>, dimension: usize) -> Result<DimensionRange> {
    if dimension >= data.ncols() {
        return Err(Error::invalid_parameter(format!(
            "Dimension {} out of bounds for {}-dimensional data",
            dimension,
            data.ncols()
        )));
    }
    if data.nrows() == 0 {
        return Err(Error::invalid_data("Data cannot be empty"));
    }

    let column = data.column(dimension);
    let (min, max) = column
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| (lo.min(v), hi.max(v)));

    Ok(DimensionRange { min, max })
}

/// Ranges for all dimensions, indexed by dimension
pub fn dimension_ranges(data: ArrayView2<f64>) -> Result<Vec<DimensionRange>> {
    (0..data.ncols()).map(|d| dimension_range(data, d)).collect()
}

/// Initialize `k` centroids for the given data
pub fn initialize_centroids<R>(
    data: ArrayView2<f64>,
    k: usize,
    method: InitMethod,
    rng: &mut R,
) -> Result<Array2<f64>>
where
    R: Rng,
{
    if k == 0 {
        return Err(Error::invalid_parameter("k must be > 0"));
    }

    match method {
        InitMethod::Uniform => {
            let ranges = dimension_ranges(data)?;
            if ranges.is_empty() {
                return Err(Error::initialization_failure("Data has no dimensions to sample from"));
            }
            Ok(uniform_init(&ranges, k, rng))
        }
        InitMethod::Sample => sample_init(data, k, rng),
    }
}

/// Draw one centroid uniformly inside the given bounding box
pub fn random_point<R>(ranges: &[DimensionRange], rng: &mut R) -> Array1<f64>
where
    R: Rng,
{
    ranges.iter().map(|range| range.sample(rng)).collect()
}

fn uniform_init<R>(ranges: &[DimensionRange], k: usize, rng: &mut R) -> Array2<f64>
where
    R: Rng,
{
    let mut centroids = Array2::zeros((k, ranges.len()));
    for mut row in centroids.rows_mut() {
        row.assign(&random_point(ranges, rng));
    }
    centroids
}

/// Random initialization: randomly select k data points as initial centroids
fn sample_init<R>(data: ArrayView2<f64>, k: usize, rng: &mut R) -> Result<Array2<f64>>
where
    R: Rng,
{
    let n_points = data.nrows();
    if k > n_points {
        return Err(Error::invalid_parameter(
            "Sample initialization needs k <= number of data points",
        ));
    }

    let mut selected = HashSet::with_capacity(k);
    let mut indices = Vec::with_capacity(k);

    // Randomly select unique indices, keeping draw order
    while indices.len() < k {
        let idx = rng.gen_range(0..n_points);
        if selected.insert(idx) {
            indices.push(idx);
        }
    }

    let mut centroids = Array2::zeros((k, data.ncols()));
    for (i, &data_idx) in indices.iter().enumerate() {
        centroids.row_mut(i).assign(&data.row(data_idx));
    }

    Ok(centroids)
}
