//! # Config Crate
//!
//! Centralized configuration constants for the box mesh generator.
//! Buffer sizing limits, input defaults and float tolerances are defined
//! here so the generator crate never scatters literals.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{MIN_BUFFER_CAPACITY, DEFAULT_SIZE, DEFAULT_SUBDIVISION};
//!
//! // Face buffers never start smaller than the minimum capacity
//! let required = 3;
//! let capacity = required.max(MIN_BUFFER_CAPACITY);
//! assert_eq!(capacity, MIN_BUFFER_CAPACITY);
//!
//! // A freshly created box is a unit cube without subdivisions
//! assert_eq!(DEFAULT_SIZE, [1.0, 1.0, 1.0]);
//! assert_eq!(DEFAULT_SUBDIVISION, [0, 0, 0]);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Dependency Free**: Pure constants and a validated snapshot type
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;
