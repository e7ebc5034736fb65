//! # Box Mesh Generator
//!
//! Owns the face buffers, the build state and the last good mesh, and runs
//! either the full pipeline or the reposition pass per request.
//!
//! ## Pipeline
//!
//! ```text
//! BoxSpec ─▶ RebuildPolicy ─┬─ FullRebuild ─▶ BufferAllocator ─▶ fill_positions ─▶ build_connectivity
//!                           └─ Reposition  ─▶ reposition
//! ```
//!
//! A failed request leaves the previous snapshot and build state as they
//! were.

use glam::DVec3;
use log::{debug, error, warn};

use crate::allocator::BufferAllocator;
use crate::config::GeneratorConfig;
use crate::connectivity::build_connectivity;
use crate::error::{MeshError, MeshResult};
use crate::mesh::MeshSnapshot;
use crate::policy::{BuildState, RebuildAction, RebuildPolicy};
use crate::positions::{fill_positions, Lattice};
use crate::reposition::reposition;
use crate::spec::{validate_size, BoxSpec};

/// Incremental generator of subdivided box meshes.
///
/// # Example
///
/// ```rust
/// use box_mesh::{BoxMeshGenerator, BoxSpec, RebuildAction};
///
/// let mut generator = BoxMeshGenerator::new();
/// let spec = BoxSpec::new([2.0, 2.0, 2.0], [1, 1, 1]).unwrap();
/// assert_eq!(generator.build(spec).unwrap().vertex_count(), 26);
///
/// let wider = BoxSpec::new([4.0, 2.0, 2.0], [1, 1, 1]).unwrap();
/// generator.build(wider).unwrap();
/// assert_eq!(generator.last_action(), Some(RebuildAction::Reposition));
/// ```
#[derive(Debug, Clone)]
pub struct BoxMeshGenerator {
    buffers: BufferAllocator,
    state: BuildState,
    mesh: MeshSnapshot,
    last_action: Option<RebuildAction>,
    #[cfg(test)]
    fill_fault: Option<MeshError>,
}

impl Default for BoxMeshGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl BoxMeshGenerator {
    /// Creates a generator with the default buffer configuration.
    pub fn new() -> Self {
        Self::with_config(GeneratorConfig::default())
    }

    /// Creates a generator with explicit buffer limits.
    pub fn with_config(config: GeneratorConfig) -> Self {
        Self {
            buffers: BufferAllocator::new(config),
            state: BuildState::default(),
            mesh: MeshSnapshot::new(),
            last_action: None,
            #[cfg(test)]
            fill_fault: None,
        }
    }

    /// Cached inputs and topology state.
    #[inline]
    pub fn build_state(&self) -> &BuildState {
        &self.state
    }

    /// Action taken by the most recent successful request.
    #[inline]
    pub fn last_action(&self) -> Option<RebuildAction> {
        self.last_action
    }

    /// Last successfully built mesh, if any.
    pub fn snapshot(&self) -> Option<&MeshSnapshot> {
        self.state.subdivision.map(|_| &self.mesh)
    }

    /// Forces the next [`build`](Self::build) to be a full rebuild.
    pub fn invalidate(&mut self) {
        RebuildPolicy::invalidate(&mut self.state);
    }

    /// Produces the mesh for `spec`, rebuilding topology only when the
    /// subdivision changed since the last build.
    pub fn build(&mut self, spec: BoxSpec) -> MeshResult<&MeshSnapshot> {
        if let Err(err) = spec.validate() {
            warn!("rejected box spec: {err}");
            return Err(err);
        }

        // Decide on a copy; the state only changes once the work succeeds.
        let mut pending = self.state;
        let action = RebuildPolicy::decide(&mut pending, &spec);
        match action {
            RebuildAction::FullRebuild => self.rebuild(&spec)?,
            RebuildAction::Reposition => self.reposition_in_place(spec.size)?,
        }
        self.last_action = Some(action);
        Ok(&self.mesh)
    }

    /// Moves the vertices of the current topology to a new size.
    ///
    /// Fails with [`MeshError::NotBuilt`] when no valid topology exists.
    pub fn reposition(&mut self, size: DVec3) -> MeshResult<&MeshSnapshot> {
        if let Err(err) = validate_size(size) {
            warn!("rejected box size: {err}");
            return Err(err);
        }
        if !self.state.is_valid() {
            return Err(MeshError::NotBuilt);
        }

        self.reposition_in_place(size)?;
        self.last_action = Some(RebuildAction::Reposition);
        Ok(&self.mesh)
    }

    fn rebuild(&mut self, spec: &BoxSpec) -> MeshResult<()> {
        let subdivision = spec.subdivision;
        let counts = subdivision.vertex_count().zip(subdivision.polygon_count());
        let Some((vertex_count, polygon_count)) = counts else {
            warn!("subdivision {:?} overflows mesh counts", subdivision.0);
            return Err(MeshError::allocation(format!(
                "subdivision {:?} is too large",
                subdivision.0
            )));
        };
        if u32::try_from(vertex_count).map_or(true, |n| n == u32::MAX) {
            warn!("{vertex_count} vertices exceed the u32 index range");
            return Err(MeshError::allocation(format!(
                "{vertex_count} vertices exceed the u32 index range"
            )));
        }

        // Output arrays and buffers are reserved before any grid is written.
        let mut mesh = MeshSnapshot::try_with_capacity(vertex_count, polygon_count).map_err(|err| {
            warn!("mesh arrays could not be reserved: {err}");
            err
        })?;
        self.buffers.ensure_capacity(subdivision.max() as usize + 2)?;

        let lattice = Lattice::of(spec);
        let filled = fill_positions(&lattice, &mut self.buffers, mesh.positions_mut())
            .and_then(|()| self.take_fill_fault())
            .and_then(|()| {
                let (poly_counts, poly_connects) = mesh.topology_mut();
                build_connectivity(&self.buffers, poly_counts, poly_connects)
            });
        if let Err(err) = filled {
            error!("topology rebuild for {:?} failed: {err}", subdivision.0);
            // The grids no longer describe the kept snapshot.
            RebuildPolicy::invalidate(&mut self.state);
            return Err(err);
        }

        debug_assert_eq!(mesh.vertex_count(), vertex_count);
        debug_assert_eq!(mesh.polygon_count(), polygon_count);
        debug!(
            "rebuilt box {:?}: {} vertices, {} quads, buffer capacity {}",
            subdivision.0,
            mesh.vertex_count(),
            mesh.polygon_count(),
            self.buffers.capacity()
        );

        self.mesh = mesh;
        RebuildPolicy::commit_rebuild(&mut self.state, spec, self.buffers.capacity());
        Ok(())
    }

    #[cfg(test)]
    fn take_fill_fault(&mut self) -> MeshResult<()> {
        self.fill_fault.take().map_or(Ok(()), Err)
    }

    #[cfg(not(test))]
    #[inline]
    fn take_fill_fault(&mut self) -> MeshResult<()> {
        Ok(())
    }

    fn reposition_in_place(&mut self, size: DVec3) -> MeshResult<()> {
        let Some(subdivision) = self.state.subdivision else {
            return Err(MeshError::NotBuilt);
        };
        let lattice = Lattice::new(size, subdivision);
        let visited = reposition(&lattice, &self.buffers, self.mesh.positions_mut()).map_err(|err| {
            error!("reposition failed: {err}");
            err
        })?;

        debug!(
            "repositioned box to {size}: {} vertices from {visited} cells",
            self.mesh.vertex_count()
        );
        RebuildPolicy::commit_reposition(&mut self.state, size);
        Ok(())
    }
}
