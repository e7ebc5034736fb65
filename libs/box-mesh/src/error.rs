//! # Mesh Errors
//!
//! Error types for box mesh generation.
//!
//! ## Error Policy
//!
//! - Input validation happens before any generator state is touched
//! - Allocation failures leave the previous mesh and buffers in place
//! - Topology inconsistencies are ordering bugs, never user errors

use thiserror::Error;

/// Errors that can occur during box mesh generation.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum MeshError {
    /// A size component is zero, negative or not finite.
    #[error("Invalid size: {axis} = {value} (must be finite and > 0)")]
    InvalidSize {
        /// Axis name (`x`, `y` or `z`).
        axis: char,
        /// Offending value.
        value: f64,
    },

    /// A subdivision component is negative.
    #[error("Invalid subdivision: {axis} = {value} (must be >= 0)")]
    InvalidSubdivision {
        /// Axis name (`x`, `y` or `z`).
        axis: char,
        /// Offending value.
        value: i64,
    },

    /// Face buffers or output arrays could not be grown.
    #[error("Allocation failed: {message}")]
    Allocation {
        /// What could not be allocated.
        message: String,
    },

    /// A face buffer cell was read before it was written.
    #[error("Topology inconsistency: {message}")]
    TopologyInconsistency {
        /// Which cell or edge was inconsistent.
        message: String,
    },

    /// A reposition was requested before any topology was built.
    #[error("No topology has been built yet")]
    NotBuilt,
}

impl MeshError {
    /// Creates an allocation error.
    pub fn allocation(message: impl Into<String>) -> Self {
        Self::Allocation {
            message: message.into(),
        }
    }

    /// Creates a topology inconsistency error.
    pub fn inconsistent(message: impl Into<String>) -> Self {
        Self::TopologyInconsistency {
            message: message.into(),
        }
    }

    /// Returns true for errors caused by caller input rather than by the
    /// generator itself.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::InvalidSize { .. } | Self::InvalidSubdivision { .. }
        )
    }
}

/// Result type alias for mesh generation.
pub type MeshResult<T> = Result<T, MeshError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = MeshError::InvalidSize {
            axis: 'y',
            value: -1.0,
        };
        assert!(err.to_string().contains("y = -1"));

        let err = MeshError::allocation("face buffer of 1024x1024");
        assert!(err.to_string().contains("1024x1024"));
    }

    #[test]
    fn test_validation_classification() {
        assert!(MeshError::InvalidSubdivision { axis: 'x', value: -2 }.is_validation());
        assert!(!MeshError::allocation("x").is_validation());
        assert!(!MeshError::inconsistent("x").is_validation());
        assert!(!MeshError::NotBuilt.is_validation());
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<MeshError>();
    }
}
