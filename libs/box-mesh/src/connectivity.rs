//! # Connectivity
//!
//! Emits one quad per 2x2 cell neighborhood of every face grid, wound per
//! [`Face::winding`] so all normals point outward.

use config::constants::QUAD_VERTEX_COUNT;
use log::trace;

use crate::allocator::BufferAllocator;
use crate::error::MeshResult;
use crate::face::{Face, Winding};
use crate::grid::FaceGrid;

/// Appends polygon counts and flattened quad indices for all six faces.
///
/// Both vectors are cleared first. Fails with
/// [`MeshError::TopologyInconsistency`](crate::MeshError::TopologyInconsistency)
/// if any grid cell was never filled.
pub fn build_connectivity(
    buffers: &BufferAllocator,
    poly_counts: &mut Vec<u32>,
    poly_connects: &mut Vec<u32>,
) -> MeshResult<()> {
    poly_counts.clear();
    poly_connects.clear();

    for face in Face::ALL {
        let before = poly_counts.len();
        emit_face(buffers.grid(face), face.winding(), poly_counts, poly_connects)?;
        trace!("{face:?}: {} quads", poly_counts.len() - before);
    }
    Ok(())
}

fn emit_face(
    grid: &FaceGrid,
    winding: Winding,
    poly_counts: &mut Vec<u32>,
    poly_connects: &mut Vec<u32>,
) -> MeshResult<()> {
    for row in 0..grid.rows().saturating_sub(1) {
        for col in 0..grid.cols().saturating_sub(1) {
            let a = grid.get(row, col)?;
            let b = grid.get(row, col + 1)?;
            let c = grid.get(row + 1, col + 1)?;
            let d = grid.get(row + 1, col)?;
            let quad = match winding {
                Winding::Forward => [a, b, c, d],
                Winding::Mirrored => [a, d, c, b],
            };
            poly_counts.push(QUAD_VERTEX_COUNT);
            poly_connects.extend_from_slice(&quad);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use glam::DVec3;

    use super::*;
    use crate::config::GeneratorConfig;
    use crate::positions::{fill_positions, Lattice};
    use crate::spec::Subdivision;
    use crate::MeshError;

    fn buffers_for(subdivision: Subdivision) -> BufferAllocator {
        let mut buffers = BufferAllocator::new(GeneratorConfig::default());
        buffers
            .ensure_capacity(subdivision.max() as usize + 2)
            .unwrap();
        let mut positions = Vec::new();
        let lattice = Lattice::new(DVec3::splat(2.0), subdivision);
        fill_positions(&lattice, &mut buffers, &mut positions).unwrap();
        buffers
    }

    #[test]
    fn test_unit_cube_has_six_quads() {
        let buffers = buffers_for(Subdivision::default());
        let (mut counts, mut connects) = (Vec::new(), Vec::new());
        build_connectivity(&buffers, &mut counts, &mut connects).unwrap();
        assert_eq!(counts, vec![4; 6]);
        assert_eq!(connects.len(), 24);
    }

    #[test]
    fn test_polygon_count_matches_formula() {
        let sub = Subdivision::new(2, 1, 3);
        let buffers = buffers_for(sub);
        let (mut counts, mut connects) = (Vec::new(), Vec::new());
        build_connectivity(&buffers, &mut counts, &mut connects).unwrap();
        assert_eq!(Some(counts.len()), sub.polygon_count());
        assert_eq!(connects.len(), counts.len() * 4);
    }

    #[test]
    fn test_opposite_faces_use_mirrored_order() {
        let buffers = buffers_for(Subdivision::default());
        let (mut counts, mut connects) = (Vec::new(), Vec::new());
        build_connectivity(&buffers, &mut counts, &mut connects).unwrap();

        let bottom = buffers.grid(Face::Bottom);
        let expected = [
            bottom.get(0, 0).unwrap(),
            bottom.get(0, 1).unwrap(),
            bottom.get(1, 1).unwrap(),
            bottom.get(1, 0).unwrap(),
        ];
        assert_eq!(connects[0..4], expected);

        let top = buffers.grid(Face::Top);
        let expected = [
            top.get(0, 0).unwrap(),
            top.get(1, 0).unwrap(),
            top.get(1, 1).unwrap(),
            top.get(0, 1).unwrap(),
        ];
        assert_eq!(connects[4..8], expected);
    }

    #[test]
    fn test_clears_previous_output() {
        let buffers = buffers_for(Subdivision::default());
        let mut counts = vec![9, 9];
        let mut connects = vec![1, 2, 3];
        build_connectivity(&buffers, &mut counts, &mut connects).unwrap();
        assert_eq!(counts.len(), 6);
    }

    #[test]
    fn test_unfilled_grid_is_inconsistent() {
        let mut buffers = BufferAllocator::new(GeneratorConfig::default());
        buffers.ensure_capacity(2).unwrap();
        for face in Face::ALL {
            buffers.grid_mut(face).reset(2, 2);
        }
        let (mut counts, mut connects) = (Vec::new(), Vec::new());
        let err = build_connectivity(&buffers, &mut counts, &mut connects).unwrap_err();
        assert!(matches!(err, MeshError::TopologyInconsistency { .. }));
    }
}
