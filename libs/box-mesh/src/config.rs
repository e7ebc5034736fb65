//! Generator-level configuration building on the shared `config` crate.

use config::constants::{ConfigError, GlobalConfig, MAX_BUFFER_CELLS, MIN_BUFFER_CAPACITY};

/// Buffer sizing configuration for a [`BoxMeshGenerator`](crate::BoxMeshGenerator).
///
/// # Examples
/// ```
/// use box_mesh::config::GeneratorConfig;
/// let cfg = GeneratorConfig::default();
/// assert!(cfg.initial_buffer_capacity() >= 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratorConfig {
    initial_buffer_capacity: usize,
    max_buffer_cells: usize,
}

impl GeneratorConfig {
    /// Creates a new configuration from explicit values.
    ///
    /// # Examples
    /// ```
    /// use box_mesh::config::GeneratorConfig;
    /// let cfg = GeneratorConfig::new(8, 4096).unwrap();
    /// assert_eq!(cfg.max_buffer_cells(), 4096);
    /// ```
    pub fn new(
        initial_buffer_capacity: usize,
        max_buffer_cells: usize,
    ) -> Result<Self, GeneratorConfigError> {
        GlobalConfig::new(initial_buffer_capacity, max_buffer_cells)
            .map(Self::from)
            .map_err(GeneratorConfigError)
    }

    /// Per-axis capacity the face buffers start with.
    #[inline]
    pub fn initial_buffer_capacity(&self) -> usize {
        self.initial_buffer_capacity
    }

    /// Largest number of cells one face buffer may grow to.
    #[inline]
    pub fn max_buffer_cells(&self) -> usize {
        self.max_buffer_cells
    }
}

impl From<GlobalConfig> for GeneratorConfig {
    fn from(cfg: GlobalConfig) -> Self {
        Self {
            initial_buffer_capacity: cfg.initial_buffer_capacity,
            max_buffer_cells: cfg.max_buffer_cells,
        }
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            initial_buffer_capacity: MIN_BUFFER_CAPACITY,
            max_buffer_cells: MAX_BUFFER_CELLS,
        }
    }
}

/// Error wrapper for invalid generator configuration.
#[derive(Debug, PartialEq, thiserror::Error)]
#[error(transparent)]
pub struct GeneratorConfigError(ConfigError);

impl GeneratorConfigError {
    /// The rejected setting.
    pub fn kind(&self) -> &ConfigError {
        &self.0
    }
}
