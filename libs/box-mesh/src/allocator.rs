//! # Buffer Allocator
//!
//! Owns the six face index grids. Capacity only grows: a rebuild with fewer
//! subdivisions keeps the larger buffers and reuses their leading window.

use log::{trace, warn};

use crate::config::GeneratorConfig;
use crate::error::{MeshError, MeshResult};
use crate::face::Face;
use crate::grid::FaceGrid;

/// Six growable face grids sharing one per-axis capacity.
#[derive(Debug, Clone)]
pub struct BufferAllocator {
    grids: [FaceGrid; 6],
    capacity: usize,
    initial_capacity: usize,
    max_cells: usize,
}

impl BufferAllocator {
    /// Creates an allocator with no buffers yet. The first call to
    /// [`ensure_capacity`](Self::ensure_capacity) allocates at least the
    /// configured initial capacity.
    pub fn new(config: GeneratorConfig) -> Self {
        Self {
            grids: Default::default(),
            capacity: 0,
            initial_capacity: config.initial_buffer_capacity(),
            max_cells: config.max_buffer_cells(),
        }
    }

    /// Current per-axis capacity of every face grid.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Guarantees every grid can address `[0, required)` on both axes.
    ///
    /// Grows to the smallest power-of-two multiple of the initial capacity
    /// that fits. All six grids are allocated before any of them is
    /// replaced, so on error the previous buffers are left intact.
    ///
    /// # Example
    ///
    /// ```rust
    /// use box_mesh::allocator::BufferAllocator;
    /// use box_mesh::config::GeneratorConfig;
    ///
    /// let mut buffers = BufferAllocator::new(GeneratorConfig::new(4, 1 << 16).unwrap());
    /// buffers.ensure_capacity(3).unwrap();
    /// assert_eq!(buffers.capacity(), 4);
    /// buffers.ensure_capacity(9).unwrap();
    /// assert_eq!(buffers.capacity(), 16);
    /// buffers.ensure_capacity(2).unwrap();
    /// assert_eq!(buffers.capacity(), 16);
    /// ```
    pub fn ensure_capacity(&mut self, required: usize) -> MeshResult<()> {
        if self.capacity != 0 && required <= self.capacity {
            return Ok(());
        }

        let capacity = self.grown_capacity(required).map_err(|err| {
            warn!("face buffers cannot grow to {required}: {err}");
            err
        })?;

        let mut grids: [FaceGrid; 6] = Default::default();
        for grid in &mut grids {
            *grid = FaceGrid::try_with_capacity(capacity).map_err(|err| {
                warn!("face buffer allocation failed: {err}");
                err
            })?;
        }

        trace!("face buffers grown from {} to {capacity}", self.capacity);
        self.grids = grids;
        self.capacity = capacity;
        Ok(())
    }

    fn grown_capacity(&self, required: usize) -> MeshResult<usize> {
        let mut capacity = self.capacity.max(self.initial_capacity);
        while capacity < required {
            capacity = capacity
                .checked_mul(2)
                .ok_or_else(|| MeshError::allocation(format!("capacity for {required} overflows")))?;
        }
        capacity
            .checked_mul(capacity)
            .filter(|cells| *cells <= self.max_cells)
            .map(|_| capacity)
            .ok_or_else(|| {
                MeshError::allocation(format!(
                    "{capacity}x{capacity} cells exceed the limit of {}",
                    self.max_cells
                ))
            })
    }

    /// Grid of one face.
    #[inline]
    pub fn grid(&self, face: Face) -> &FaceGrid {
        &self.grids[face.index()]
    }

    #[inline]
    pub(crate) fn grid_mut(&mut self, face: Face) -> &mut FaceGrid {
        &mut self.grids[face.index()]
    }
}
