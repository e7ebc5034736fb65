//! # Vertex Positions
//!
//! Fills the shared vertex array and writes every vertex index into each
//! face grid that touches the vertex.
//!
//! ## Fill Order
//!
//! 1. Interior points of each face, face by face, row-major
//! 2. The 8 corners, each written into its 3 faces
//! 3. Interior points of the 12 box edges, each written into its 2 faces
//!
//! Every physical point is appended exactly once.

use glam::DVec3;
use log::trace;

use crate::allocator::BufferAllocator;
use crate::error::{MeshError, MeshResult};
use crate::face::Face;
use crate::spec::{BoxSpec, Subdivision};

/// Maps integer lattice points of the subdivided box to positions.
///
/// Axis step `k` of an axis of size `S` cut into `n + 1` segments sits at
/// `-S/2 + k * S/(n+1)`.
///
/// # Example
///
/// ```rust
/// use box_mesh::positions::Lattice;
/// use box_mesh::Subdivision;
/// use glam::DVec3;
///
/// let lattice = Lattice::new(DVec3::new(2.0, 4.0, 2.0), Subdivision::new(0, 1, 0));
/// assert_eq!(lattice.position([0, 1, 1]), DVec3::new(-1.0, 0.0, 1.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lattice {
    origin: DVec3,
    step: DVec3,
    subdivision: Subdivision,
}

impl Lattice {
    /// Creates the lattice of a box centered at the origin.
    pub fn new(size: DVec3, subdivision: Subdivision) -> Self {
        let segments = DVec3::from_array(subdivision.0.map(|n| f64::from(n) + 1.0));
        Self {
            origin: -size / 2.0,
            step: size / segments,
            subdivision,
        }
    }

    /// Lattice of a validated spec.
    pub fn of(spec: &BoxSpec) -> Self {
        Self::new(spec.size, spec.subdivision)
    }

    /// Cuts the lattice was built for.
    #[inline]
    pub fn subdivision(&self) -> Subdivision {
        self.subdivision
    }

    /// Position of lattice point `[i, j, k]`.
    #[inline]
    pub fn position(&self, point: [u32; 3]) -> DVec3 {
        let steps = DVec3::from_array(point.map(f64::from));
        self.origin + steps * self.step
    }
}

/// Appends every vertex of the box to `positions` and records its index in
/// the face grids.
///
/// The grids must already be at least `max(nx, ny, nz) + 2` wide; their
/// active windows are reset before filling. `positions` is cleared first and
/// is expected to have been reserved by the caller.
pub fn fill_positions(
    lattice: &Lattice,
    buffers: &mut BufferAllocator,
    positions: &mut Vec<DVec3>,
) -> MeshResult<()> {
    let subdivision = lattice.subdivision();
    let required = subdivision.max() as usize + 2;
    if buffers.capacity() < required {
        return Err(MeshError::inconsistent(format!(
            "face buffers of {} cannot hold {required} cells per axis",
            buffers.capacity()
        )));
    }

    positions.clear();
    for face in Face::ALL {
        let (rows, cols) = face.grid_dims(subdivision);
        buffers.grid_mut(face).reset(rows, cols);
    }

    fill_face_interiors(lattice, buffers, positions)?;
    let interior = positions.len();
    fill_corners(lattice, buffers, positions)?;
    fill_edges(lattice, buffers, positions)?;

    trace!(
        "filled {} vertices ({interior} face interior, {} corner/edge)",
        positions.len(),
        positions.len() - interior
    );
    Ok(())
}

fn push_vertex(positions: &mut Vec<DVec3>, position: DVec3) -> MeshResult<u32> {
    let index = u32::try_from(positions.len())
        .ok()
        .filter(|index| *index != u32::MAX)
        .ok_or_else(|| MeshError::allocation("vertex index exceeds u32 range"))?;
    positions.push(position);
    Ok(index)
}

fn fill_face_interiors(
    lattice: &Lattice,
    buffers: &mut BufferAllocator,
    positions: &mut Vec<DVec3>,
) -> MeshResult<()> {
    let subdivision = lattice.subdivision();
    for face in Face::ALL {
        let (rows, cols) = face.grid_dims(subdivision);
        for row in 1..rows - 1 {
            for col in 1..cols - 1 {
                let point = face.lattice_point(subdivision, row as u32, col as u32);
                let index = push_vertex(positions, lattice.position(point))?;
                buffers.grid_mut(face).set(row, col, index);
            }
        }
    }
    Ok(())
}

fn fill_corners(
    lattice: &Lattice,
    buffers: &mut BufferAllocator,
    positions: &mut Vec<DVec3>,
) -> MeshResult<()> {
    let far = lattice.subdivision().0.map(|n| n + 1);
    for corner in 0..8u32 {
        let point = [0, 1, 2].map(|axis| if (corner >> axis) & 1 == 0 { 0 } else { far[axis] });
        let index = push_vertex(positions, lattice.position(point))?;
        share(lattice, buffers, point, index, 3)?;
    }
    Ok(())
}

fn fill_edges(
    lattice: &Lattice,
    buffers: &mut BufferAllocator,
    positions: &mut Vec<DVec3>,
) -> MeshResult<()> {
    let subdivision = lattice.subdivision();
    let far = subdivision.0.map(|n| n + 1);
    for axis in 0..3 {
        let (a, b) = ((axis + 1) % 3, (axis + 2) % 3);
        for side in 0..4u32 {
            let mut point = [0; 3];
            point[a] = if side & 1 == 0 { 0 } else { far[a] };
            point[b] = if side & 2 == 0 { 0 } else { far[b] };
            for step in 1..=subdivision.axis(axis) {
                point[axis] = step;
                let index = push_vertex(positions, lattice.position(point))?;
                share(lattice, buffers, point, index, 2)?;
            }
        }
    }
    Ok(())
}

/// Writes `index` into every face grid containing `point`.
fn share(
    lattice: &Lattice,
    buffers: &mut BufferAllocator,
    point: [u32; 3],
    index: u32,
    expected: usize,
) -> MeshResult<()> {
    let subdivision = lattice.subdivision();
    let mut written = 0;
    for face in Face::ALL {
        if let Some((row, col)) = face.cell_of(subdivision, point) {
            buffers.grid_mut(face).set(row, col, index);
            written += 1;
        }
    }
    if written != expected {
        return Err(MeshError::inconsistent(format!(
            "point {point:?} lies on {written} faces, expected {expected}"
        )));
    }
    Ok(())
}
