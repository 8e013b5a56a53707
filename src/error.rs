//! Error types for the k-means solvers

use thiserror::Error;

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while building or running a solver
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Invalid solver or search configuration
    #[error("Invalid parameter: {message}")]
    InvalidParameter {
        /// Error message
        message: String,
    },

    /// Empty, ragged or non-finite data
    #[error("Invalid data: {message}")]
    InvalidData {
        /// Error message
        message: String,
    },

    /// A centroid lost all of its points under `EmptyClusterPolicy::Fail`
    #[error("Centroid {centroid} has no assigned points")]
    EmptyCluster {
        /// Index of the empty centroid
        centroid: usize,
    },

    /// A point has no centroid assignment when one is required
    #[error("Point {index} has no centroid assignment")]
    UnassignedPoint {
        /// Index of the unassigned point
        index: usize,
    },

    /// No run produced a result
    #[error("Convergence failure: {message}")]
    ConvergenceFailure {
        /// Error message
        message: String,
    },

    /// Initialization failure
    #[error("Initialization failure: {message}")]
    InitializationFailure {
        /// Error message
        message: String,
    },

    /// Mathematical computation error
    #[error("Computation error: {message}")]
    ComputationError {
        /// Error message
        message: String,
    },
}

impl Error {
    /// Create a new InvalidParameter error
    pub fn invalid_parameter(message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            message: message.into(),
        }
    }

    /// Create a new InvalidData error
    pub fn invalid_data(message: impl Into<String>) -> Self {
        Self::InvalidData {
            message: message.into(),
        }
    }

    /// Create a new ConvergenceFailure error
    pub fn convergence_failure(message: impl Into<String>) -> Self {
        Self::ConvergenceFailure {
            message: message.into(),
        }
    }

    /// Create a new InitializationFailure error
    pub fn initialization_failure(message: impl Into<String>) -> Self {
        Self::InitializationFailure {
            message: message.into(),
        }
    }

    /// Create a new ComputationError
    pub fn computation_error(message: impl Into<String>) -> Self {
        Self::ComputationError {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            Error::invalid_parameter("k must be > 0").to_string(),
            "Invalid parameter: k must be > 0"
        );
        assert_eq!(
            Error::EmptyCluster { centroid: 2 }.to_string(),
            "Centroid 2 has no assigned points"
        );
        assert_eq!(
            Error::UnassignedPoint { index: 7 }.to_string(),
            "Point 7 has no centroid assignment"
        );
    }
}
