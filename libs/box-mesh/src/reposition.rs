//! # Reposition Pass
//!
//! Rewrites vertex positions for a new size, reusing the vertex identities
//! recorded in the face grids. Connectivity is untouched.

use glam::DVec3;
use log::trace;

use crate::allocator::BufferAllocator;
use crate::error::{MeshError, MeshResult};
use crate::face::Face;
use crate::grid::UNSET;
use crate::positions::Lattice;

/// Recomputes `positions` in place from the face grids of a previous fill.
///
/// Every cell of every grid is visited. Corner and edge vertices are
/// reached from several faces and receive the same position each time.
/// The grids are checked against `lattice` and `positions` before anything
/// is written. Returns the number of cells visited.
pub fn reposition(
    lattice: &Lattice,
    buffers: &BufferAllocator,
    positions: &mut [DVec3],
) -> MeshResult<usize> {
    check_grids(lattice, buffers, positions.len())?;

    let subdivision = lattice.subdivision();
    let mut visited = 0;
    for face in Face::ALL {
        for (row, col, index) in buffers.grid(face).iter() {
            positions[index as usize] =
                lattice.position(face.lattice_point(subdivision, row as u32, col as u32));
            visited += 1;
        }
    }

    trace!("repositioned {} vertices from {visited} cells", positions.len());
    Ok(visited)
}

fn check_grids(lattice: &Lattice, buffers: &BufferAllocator, vertex_count: usize) -> MeshResult<()> {
    let subdivision = lattice.subdivision();
    for face in Face::ALL {
        let grid = buffers.grid(face);
        if (grid.rows(), grid.cols()) != face.grid_dims(subdivision) {
            return Err(MeshError::inconsistent(format!(
                "{face:?} grid is {}x{}, subdivision {:?} needs {:?}",
                grid.rows(),
                grid.cols(),
                subdivision.0,
                face.grid_dims(subdivision)
            )));
        }
        if let Some((row, col, index)) = grid
            .iter()
            .find(|(_, _, index)| *index == UNSET || *index as usize >= vertex_count)
        {
            return Err(MeshError::inconsistent(format!(
                "{face:?} [{row}][{col}] holds index {index} of {vertex_count} vertices"
            )));
        }
    }
    Ok(())
}
