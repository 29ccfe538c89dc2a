//! Traits for voxel traversal algorithms.
//!
//! This module provides a unified interface for the traversal
//! implementations so callers depend on the contract, not on a specific
//! algorithm, and so the same property checks can run against every
//! implementation uniformly.

use crate::core::Point3;

use super::TraversalPath;
use super::error::Result;

/// Trait for voxel-grid ray traversal algorithms.
///
/// All implementations share the same contract: given a continuous line
/// segment and a voxel edge length, return the ordered voxels the segment
/// passes through, first element the start voxel and last element the end
/// voxel, with no consecutive duplicates. A zero-length ray yields exactly
/// one voxel.
///
/// Implementations are pure functions over their arguments: no shared
/// state, nothing to cancel, safe to call concurrently from independent
/// threads.
///
/// # Example
///
/// ```ignore
/// use kirana_cast::{DdaTraversal, Point3, VoxelTraversal};
///
/// fn free_cells<T: VoxelTraversal>(
///     traversal: &T,
///     origin: Point3,
///     hit: Point3,
/// ) -> kirana_cast::TraversalPath {
///     traversal.traverse(origin, hit, 0.05).expect("traversal defect")
/// }
/// ```
pub trait VoxelTraversal: Send + Sync {
    /// Compute the ordered voxels a ray passes through.
    ///
    /// # Arguments
    /// * `ray_start` - Segment start point in world coordinates
    /// * `ray_end` - Segment end point in world coordinates
    /// * `step_size` - Voxel edge length (must be > 0)
    ///
    /// # Returns
    /// The visited voxels in physical order, or a [`TraversalError`]
    /// (see the error type for which variants are recoverable).
    ///
    /// [`TraversalError`]: super::TraversalError
    fn traverse(
        &self,
        ray_start: Point3,
        ray_end: Point3,
        step_size: f32,
    ) -> Result<TraversalPath>;

    /// Get the name of this algorithm for logging/diagnostics
    fn name(&self) -> &str;
}
