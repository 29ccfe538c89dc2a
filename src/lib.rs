//! # KiranaCast
//!
//! Voxel-grid ray traversal primitives for occupancy mapping.
//!
//! Given a continuous 3D line segment and a voxel edge length, the crate
//! computes the ordered set of integer voxel indices the segment passes
//! through. Occupancy-style mappers call this once per sensor ray to find
//! the cells between the sensor origin and the hit point; what a visited
//! cell does with that information (log-odds updates, cell types, grid
//! storage) belongs to the caller.
//!
//! ## Algorithms
//!
//! Three interchangeable implementations of one contract, selectable per
//! call:
//!
//! - [`ParametricTraversal`] - boundary-crossing walk; visits every crossed
//!   cell but steps one axis at a time, and runs under an iteration budget
//!   because its negative-direction handling can fail to converge. Use it
//!   as a cross-check, not in production.
//! - [`BresenhamTraversal`] - integer-error rasterization; exact bounded
//!   iteration count.
//! - [`DdaTraversal`] - shared-threshold integer stepping; the fastest and
//!   the production default.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use kirana_cast::{Point3, voxels_along_ray};
//!
//! let origin = Point3::new(0.0, 0.0, 0.3);
//! let hit = Point3::new(2.4, -1.1, 0.3);
//!
//! // Every 5cm voxel the ray crosses, in visit order.
//! for voxel in voxels_along_ray(origin, hit, 0.05)? {
//!     println!("{} {} {}", voxel.x, voxel.y, voxel.z);
//! }
//! ```
//!
//! All operations are pure and reentrant; each call returns a freshly
//! owned path, so rays may be traversed from independent threads without
//! synchronization.

#![warn(missing_docs)]

// Core types
pub mod core;

// Traversal algorithms
pub mod traversal;

// Re-export commonly used types
pub use crate::core::{Point3, VoxelIndex};

pub use crate::traversal::{
    BresenhamTraversal, DdaTraversal, ParametricTraversal, Result, TraversalError, TraversalPath,
    TraversalStrategy, VoxelTraversal, voxels_along_ray, voxels_along_ray_excluding_end,
    voxels_toward,
};
