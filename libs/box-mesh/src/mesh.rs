//! # Mesh Snapshot
//!
//! Output of the generator: vertex positions plus quad connectivity in the
//! `(counts, connects)` layout polygon mesh consumers expect.

use std::collections::HashMap;

use config::constants::QUAD_VERTEX_COUNT;
use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::error::{MeshError, MeshResult};

/// A closed quad mesh.
///
/// All geometry is f64 internally. Export to f32 only happens in
/// [`positions_f32`](Self::positions_f32).
///
/// # Example
///
/// ```rust
/// use box_mesh::{BoxMeshGenerator, BoxSpec};
///
/// let mut generator = BoxMeshGenerator::new();
/// let mesh = generator.build(BoxSpec::default()).unwrap();
/// assert_eq!(mesh.vertex_count(), 8);
/// assert_eq!(mesh.polygon_count(), 6);
/// assert!(mesh.poly_counts().iter().all(|c| *c == 4));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MeshSnapshot {
    positions: Vec<DVec3>,
    poly_counts: Vec<u32>,
    poly_connects: Vec<u32>,
}

impl MeshSnapshot {
    /// Creates an empty snapshot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty snapshot with exact capacity, reporting allocation
    /// failure instead of aborting.
    pub fn try_with_capacity(vertex_count: usize, polygon_count: usize) -> MeshResult<Self> {
        let connect_count = polygon_count
            .checked_mul(QUAD_VERTEX_COUNT as usize)
            .ok_or_else(|| MeshError::allocation(format!("{polygon_count} quads overflow")))?;

        let mut mesh = Self::new();
        mesh.positions
            .try_reserve_exact(vertex_count)
            .map_err(|err| MeshError::allocation(format!("{vertex_count} vertices: {err}")))?;
        mesh.poly_counts
            .try_reserve_exact(polygon_count)
            .map_err(|err| MeshError::allocation(format!("{polygon_count} polygons: {err}")))?;
        mesh.poly_connects
            .try_reserve_exact(connect_count)
            .map_err(|err| MeshError::allocation(format!("{connect_count} indices: {err}")))?;
        Ok(mesh)
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Returns the number of polygons.
    #[inline]
    pub fn polygon_count(&self) -> usize {
        self.poly_counts.len()
    }

    /// Returns true if the snapshot holds no geometry.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Vertex positions.
    #[inline]
    pub fn positions(&self) -> &[DVec3] {
        &self.positions
    }

    /// Vertex count of each polygon (always 4).
    #[inline]
    pub fn poly_counts(&self) -> &[u32] {
        &self.poly_counts
    }

    /// Flattened polygon vertex indices, grouped per polygon.
    #[inline]
    pub fn poly_connects(&self) -> &[u32] {
        &self.poly_connects
    }

    /// Iterates the quads as index quadruples.
    pub fn quads(&self) -> impl Iterator<Item = [u32; 4]> + '_ {
        self.poly_connects
            .chunks_exact(4)
            .map(|quad| [quad[0], quad[1], quad[2], quad[3]])
    }

    pub(crate) fn positions_mut(&mut self) -> &mut Vec<DVec3> {
        &mut self.positions
    }

    pub(crate) fn topology_mut(&mut self) -> (&mut Vec<u32>, &mut Vec<u32>) {
        (&mut self.poly_counts, &mut self.poly_connects)
    }

    /// Computes the axis-aligned bounding box.
    ///
    /// Returns (min, max) corners of the bounding box.
    pub fn bounding_box(&self) -> (DVec3, DVec3) {
        let Some(first) = self.positions.first() else {
            return (DVec3::ZERO, DVec3::ZERO);
        };

        self.positions[1..]
            .iter()
            .fold((*first, *first), |(min, max), v| (min.min(*v), max.max(*v)))
    }

    /// Splits every quad along its first diagonal into two triangles with
    /// the quad's winding.
    ///
    /// Returns flattened [i0, i1, i2, i0, i1, i2, ...] array.
    pub fn triangulate(&self) -> Vec<u32> {
        let mut result = Vec::with_capacity(self.polygon_count() * 6);
        for [a, b, c, d] in self.quads() {
            result.extend_from_slice(&[a, b, c, a, c, d]);
        }
        result
    }

    /// Exports positions as f32 array for GPU.
    ///
    /// Returns flattened [x, y, z, x, y, z, ...] array.
    pub fn positions_f32(&self) -> Vec<f32> {
        let mut result = Vec::with_capacity(self.positions.len() * 3);
        for v in &self.positions {
            result.push(v.x as f32);
            result.push(v.y as f32);
            result.push(v.z as f32);
        }
        result
    }

    /// Validates the mesh for correctness.
    ///
    /// Checks:
    /// - Every polygon is a quad and the connect array matches the counts
    /// - All indices are valid and no quad repeats a vertex
    /// - Every directed edge appears once and its reverse appears once
    ///   (closed, consistently oriented surface)
    pub fn validate(&self) -> MeshResult<()> {
        if let Some(count) = self.poly_counts.iter().find(|c| **c != QUAD_VERTEX_COUNT) {
            return Err(MeshError::inconsistent(format!("polygon with {count} vertices")));
        }
        if self.poly_connects.len() != self.poly_counts.len() * QUAD_VERTEX_COUNT as usize {
            return Err(MeshError::inconsistent(format!(
                "{} indices for {} quads",
                self.poly_connects.len(),
                self.poly_counts.len()
            )));
        }

        let vertex_count = self.positions.len();
        let mut edges: HashMap<(u32, u32), usize> = HashMap::with_capacity(self.poly_connects.len());
        for (polygon, quad) in self.quads().enumerate() {
            if let Some(index) = quad.iter().find(|i| **i as usize >= vertex_count) {
                return Err(MeshError::inconsistent(format!(
                    "quad {polygon} references vertex {index} of {vertex_count}"
                )));
            }
            for i in 0..4 {
                if quad[(i + 1)..].contains(&quad[i]) {
                    return Err(MeshError::inconsistent(format!(
                        "quad {polygon} repeats vertex {}",
                        quad[i]
                    )));
                }
                *edges.entry((quad[i], quad[(i + 1) % 4])).or_default() += 1;
            }
        }

        for (&(from, to), &count) in &edges {
            if count != 1 {
                return Err(MeshError::inconsistent(format!(
                    "edge {from}->{to} used {count} times"
                )));
            }
            if !edges.contains_key(&(to, from)) {
                return Err(MeshError::inconsistent(format!("edge {from}->{to} is open")));
            }
        }
        Ok(())
    }
}
