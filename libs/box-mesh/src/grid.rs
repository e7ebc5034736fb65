//! # Face Index Grid
//!
//! Contiguous 2-D storage of vertex indices for one face. The backing buffer
//! is `capacity x capacity` cells; only the leading `rows x cols` window is
//! in use for the current subdivision.

use crate::error::{MeshError, MeshResult};

/// Marker for a cell that has not been written in the current fill pass.
pub(crate) const UNSET: u32 = u32::MAX;

/// Row-major grid of vertex indices addressed by `(row, col)`.
#[derive(Debug, Clone, Default)]
pub struct FaceGrid {
    cells: Vec<u32>,
    capacity: usize,
    rows: usize,
    cols: usize,
}

impl FaceGrid {
    /// Allocates a `capacity x capacity` grid, reporting allocation failure
    /// instead of aborting.
    pub(crate) fn try_with_capacity(capacity: usize) -> MeshResult<Self> {
        let len = capacity
            .checked_mul(capacity)
            .ok_or_else(|| MeshError::allocation(format!("{capacity}x{capacity} cells overflow")))?;
        let mut cells = Vec::new();
        cells.try_reserve_exact(len).map_err(|err| {
            MeshError::allocation(format!("face buffer of {capacity}x{capacity} cells: {err}"))
        })?;
        cells.resize(len, UNSET);
        Ok(Self {
            cells,
            capacity,
            rows: 0,
            cols: 0,
        })
    }

    /// Per-axis capacity of the backing buffer.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Rows in use.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Columns in use.
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Selects the active window and marks all of its cells unset.
    ///
    /// The caller guarantees the window fits in the capacity.
    pub(crate) fn reset(&mut self, rows: usize, cols: usize) {
        debug_assert!(rows <= self.capacity && cols <= self.capacity);
        self.rows = rows;
        self.cols = cols;
        for row in 0..rows {
            let start = row * self.capacity;
            self.cells[start..start + cols].fill(UNSET);
        }
    }

    /// Writes the vertex index of cell `[row][col]`.
    #[inline]
    pub(crate) fn set(&mut self, row: usize, col: usize, index: u32) {
        debug_assert!(row < self.rows && col < self.cols);
        self.cells[row * self.capacity + col] = index;
    }

    /// Reads the vertex index of cell `[row][col]`.
    ///
    /// Fails if the cell lies outside the active window or was never written.
    pub fn get(&self, row: usize, col: usize) -> MeshResult<u32> {
        if row >= self.rows || col >= self.cols {
            return Err(MeshError::inconsistent(format!(
                "cell [{row}][{col}] outside {}x{} grid",
                self.rows, self.cols
            )));
        }
        match self.cells[row * self.capacity + col] {
            UNSET => Err(MeshError::inconsistent(format!(
                "cell [{row}][{col}] read before it was filled"
            ))),
            index => Ok(index),
        }
    }

    /// Iterates `(row, col, index)` over the active window in row-major order,
    /// unset cells included as [`UNSET`].
    pub(crate) fn iter(&self) -> impl Iterator<Item = (usize, usize, u32)> + '_ {
        (0..self.rows).flat_map(move |row| {
            let start = row * self.capacity;
            self.cells[start..start + self.cols]
                .iter()
                .enumerate()
                .map(move |(col, &index)| (row, col, index))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_grid_is_unset() {
        let mut grid = FaceGrid::try_with_capacity(4).unwrap();
        assert_eq!(grid.capacity(), 4);
        grid.reset(2, 3);
        assert!(grid.iter().all(|(_, _, index)| index == UNSET));
        assert_eq!(grid.iter().count(), 6);
    }

    #[test]
    fn test_set_get() {
        let mut grid = FaceGrid::try_with_capacity(4).unwrap();
        grid.reset(3, 3);
        grid.set(2, 1, 7);
        assert_eq!(grid.get(2, 1).unwrap(), 7);
    }

    #[test]
    fn test_get_unset_is_inconsistent() {
        let mut grid = FaceGrid::try_with_capacity(4).unwrap();
        grid.reset(2, 2);
        let err = grid.get(1, 1).unwrap_err();
        assert!(matches!(err, MeshError::TopologyInconsistency { .. }));
    }

    #[test]
    fn test_get_outside_window_is_inconsistent() {
        let mut grid = FaceGrid::try_with_capacity(4).unwrap();
        grid.reset(2, 2);
        assert!(grid.get(2, 0).is_err());
        assert!(grid.get(0, 3).is_err());
    }

    #[test]
    fn test_reset_clears_stale_cells() {
        let mut grid = FaceGrid::try_with_capacity(4).unwrap();
        grid.reset(4, 4);
        grid.set(0, 0, 1);
        grid.set(3, 3, 2);
        grid.reset(2, 2);
        assert!(grid.get(0, 0).is_err());
        grid.reset(4, 4);
        assert!(grid.get(3, 3).is_err());
    }

    #[test]
    fn test_iter_is_row_major() {
        let mut grid = FaceGrid::try_with_capacity(3).unwrap();
        grid.reset(2, 2);
        let mut next = 0;
        for row in 0..2 {
            for col in 0..2 {
                grid.set(row, col, next);
                next += 1;
            }
        }
        let indices: Vec<u32> = grid.iter().map(|(_, _, i)| i).collect();
        assert_eq!(indices, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_overflowing_capacity_fails() {
        let err = FaceGrid::try_with_capacity(usize::MAX).unwrap_err();
        assert!(matches!(err, MeshError::Allocation { .. }));
    }
}
