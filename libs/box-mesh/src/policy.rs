//! # Rebuild Policy
//!
//! Two-state machine deciding how much work a build request needs.
//!
//! ```text
//!            subdivision changed / invalidate()
//!   Valid ─────────────────────────────────────▶ Dirty
//!     ▲                                            │
//!     └──────────── full rebuild succeeds ─────────┘
//! ```
//!
//! A size-only change never leaves `Valid`; it is served by the reposition
//! pass.

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::spec::{BoxSpec, Subdivision};

/// Whether the cached face grids and connectivity match the last build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TopologyState {
    /// Grids and connectivity are current for the cached subdivision.
    Valid,
    /// No usable topology; the next build must rebuild everything.
    #[default]
    Dirty,
}

/// Work selected for one build request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RebuildAction {
    /// Reallocate if needed, refill positions and grids, re-emit quads.
    FullRebuild,
    /// Recompute positions in place; indices and quads are reused.
    Reposition,
}

/// Cached inputs and topology state of one generator.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BuildState {
    /// Subdivision of the last successful build.
    pub subdivision: Option<Subdivision>,
    /// Size of the last successful build or reposition.
    pub size: Option<DVec3>,
    /// Per-axis capacity of the face buffers.
    pub capacity: usize,
    /// Current topology state.
    pub topology: TopologyState,
}

impl BuildState {
    /// True once a topology has been built and not invalidated since.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.topology == TopologyState::Valid
    }
}

/// Transition rules of the topology state machine.
///
/// # Example
///
/// ```rust
/// use box_mesh::policy::{BuildState, RebuildAction, RebuildPolicy};
/// use box_mesh::BoxSpec;
///
/// let mut state = BuildState::default();
/// let spec = BoxSpec::default();
/// assert_eq!(RebuildPolicy::decide(&mut state, &spec), RebuildAction::FullRebuild);
///
/// RebuildPolicy::commit_rebuild(&mut state, &spec, 64);
/// let resized = BoxSpec::new([3.0, 1.0, 1.0], [0, 0, 0]).unwrap();
/// assert_eq!(RebuildPolicy::decide(&mut state, &resized), RebuildAction::Reposition);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RebuildPolicy;

impl RebuildPolicy {
    /// Applies the `Valid -> Dirty` transition for `spec` and returns the
    /// action the current state calls for.
    pub fn decide(state: &mut BuildState, spec: &BoxSpec) -> RebuildAction {
        if state.subdivision != Some(spec.subdivision) {
            state.topology = TopologyState::Dirty;
        }
        match state.topology {
            TopologyState::Dirty => RebuildAction::FullRebuild,
            TopologyState::Valid => RebuildAction::Reposition,
        }
    }

    /// Records a successful full rebuild, returning the state to `Valid`.
    pub fn commit_rebuild(state: &mut BuildState, spec: &BoxSpec, capacity: usize) {
        state.subdivision = Some(spec.subdivision);
        state.size = Some(spec.size);
        state.capacity = capacity;
        state.topology = TopologyState::Valid;
    }

    /// Records a successful reposition.
    pub fn commit_reposition(state: &mut BuildState, size: DVec3) {
        state.size = Some(size);
    }

    /// Forces the next build to rebuild everything.
    pub fn invalidate(state: &mut BuildState) {
        state.topology = TopologyState::Dirty;
    }
}
