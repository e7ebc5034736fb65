//! Centralized configuration values shared by the box mesh generator.
//!
//! Each public item in this module documents its purpose and provides a minimal
//! usage example so that downstream crates can remain declarative and avoid
//! scattering literals.

use std::fmt;

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Epsilon for floating-point comparisons.
///
/// # Examples
/// ```
/// use config::constants::EPSILON;
/// assert!(EPSILON < 1.0e-6);
/// ```
pub const EPSILON: f64 = 1.0e-9;

// =============================================================================
// BUFFER CONSTANTS
// =============================================================================

/// Smallest per-axis capacity of a face index buffer.
///
/// Buffers start at this size and double whenever a subdivision needs more
/// rows or columns than they currently address.
///
/// # Examples
/// ```
/// use config::constants::MIN_BUFFER_CAPACITY;
/// assert!(MIN_BUFFER_CAPACITY.is_power_of_two());
/// ```
pub const MIN_BUFFER_CAPACITY: usize = 64;

/// Maximum number of cells a single face index buffer may hold.
///
/// Growing past this limit is reported as an allocation failure instead of
/// attempting the allocation. 2^26 cells is 256 MiB of `u32` per face.
///
/// # Examples
/// ```
/// use config::constants::{MAX_BUFFER_CELLS, MIN_BUFFER_CAPACITY};
/// assert!(MAX_BUFFER_CELLS >= MIN_BUFFER_CAPACITY * MIN_BUFFER_CAPACITY);
/// ```
pub const MAX_BUFFER_CELLS: usize = 1 << 26;

/// Number of vertices in every generated polygon.
///
/// # Examples
/// ```
/// use config::constants::QUAD_VERTEX_COUNT;
/// assert_eq!(QUAD_VERTEX_COUNT, 4);
/// ```
pub const QUAD_VERTEX_COUNT: u32 = 4;

// =============================================================================
// INPUT DEFAULTS
// =============================================================================

/// Default box size along x, y and z.
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_SIZE;
/// assert!(DEFAULT_SIZE.iter().all(|s| *s > 0.0));
/// ```
pub const DEFAULT_SIZE: [f64; 3] = [1.0, 1.0, 1.0];

/// Default subdivision count along x, y and z.
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_SUBDIVISION;
/// assert_eq!(DEFAULT_SUBDIVISION, [0, 0, 0]);
/// ```
pub const DEFAULT_SUBDIVISION: [u32; 3] = [0, 0, 0];

/// Immutable snapshot of global configuration settings that can be shared
/// between crates.
///
/// # Examples
/// ```
/// use config::constants::GlobalConfig;
/// let config = GlobalConfig::default();
/// assert!(config.initial_buffer_capacity > 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlobalConfig {
    /// Per-axis capacity face buffers are created with.
    pub initial_buffer_capacity: usize,
    /// Upper bound on the number of cells in one face buffer.
    pub max_buffer_cells: usize,
}

impl GlobalConfig {
    /// Builds a configuration enforcing strict validation of the supplied
    /// buffer limits.
    ///
    /// # Examples
    /// ```
    /// use config::constants::GlobalConfig;
    /// let cfg = GlobalConfig::new(16, 1 << 20).expect("valid config");
    /// assert_eq!(cfg.initial_buffer_capacity, 16);
    /// ```
    pub fn new(initial_buffer_capacity: usize, max_buffer_cells: usize) -> Result<Self, ConfigError> {
        if initial_buffer_capacity < 2 {
            return Err(ConfigError::InvalidCapacity(initial_buffer_capacity));
        }
        let initial_cells = initial_buffer_capacity
            .checked_mul(initial_buffer_capacity)
            .ok_or(ConfigError::InvalidCapacity(initial_buffer_capacity))?;
        if max_buffer_cells < initial_cells {
            return Err(ConfigError::InvalidCellLimit {
                limit: max_buffer_cells,
                required: initial_cells,
            });
        }
        Ok(Self {
            initial_buffer_capacity,
            max_buffer_cells,
        })
    }
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            initial_buffer_capacity: MIN_BUFFER_CAPACITY,
            max_buffer_cells: MAX_BUFFER_CELLS,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// Raised when the initial capacity cannot hold a single undivided face.
    InvalidCapacity(usize),
    /// Raised when the cell limit is below what the initial capacity needs.
    InvalidCellLimit {
        /// Requested cell limit.
        limit: usize,
        /// Cells needed by the initial capacity.
        required: usize,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidCapacity(value) => {
                write!(f, "initial_buffer_capacity must be >= 2: {value}")
            }
            ConfigError::InvalidCellLimit { limit, required } => {
                write!(f, "max_buffer_cells {limit} is below the initial {required} cells")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Checks if two f64 values are approximately equal within EPSILON.
///
/// # Example
///
/// ```rust
/// use config::constants::approx_equal;
///
/// assert!(approx_equal(1.0, 1.0 + 1e-11));
/// assert!(!approx_equal(1.0, 1.1));
/// ```
#[inline]
pub fn approx_equal(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

#[cfg(test)]
mod tests;
