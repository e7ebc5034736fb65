//! # Box Mesh
//!
//! Parametric generator of closed, subdivided box meshes made of quads.
//! Given a size and per-axis subdivision counts it produces vertex positions
//! plus `(poly_counts, poly_connects)` connectivity, and re-evaluates only the
//! positions when just the size changes.
//!
//! ## Architecture
//!
//! ```text
//! BoxSpec → RebuildPolicy → BufferAllocator → positions → connectivity → MeshSnapshot
//!                         ↘ reposition ↗
//! ```
//!
//! - **allocator**: six growable face index grids
//! - **positions**: shared vertex array, corner and edge vertices deduplicated
//! - **connectivity**: outward-wound quads per face
//! - **policy**: full rebuild vs reposition state machine
//! - **reposition**: in-place position update for size-only changes
//!
//! ## Usage
//!
//! ```rust
//! use box_mesh::{BoxMeshGenerator, BoxSpec};
//!
//! let mut generator = BoxMeshGenerator::new();
//! let mesh = generator.build(BoxSpec::new([2.0, 2.0, 2.0], [1, 0, 0])?)?;
//! assert_eq!(mesh.polygon_count(), 10);
//! assert!(mesh.validate().is_ok());
//! # Ok::<(), box_mesh::MeshError>(())
//! ```

pub mod allocator;
pub mod config;
pub mod connectivity;
pub mod error;
pub mod face;
pub mod generator;
pub mod grid;
pub mod mesh;
pub mod policy;
pub mod positions;
pub mod reposition;
pub mod spec;

pub use error::{MeshError, MeshResult};
pub use face::Face;
pub use generator::BoxMeshGenerator;
pub use mesh::MeshSnapshot;
pub use policy::{BuildState, RebuildAction, TopologyState};
pub use spec::{BoxSpec, Subdivision};
