//! Error types for voxel traversal.

use crate::core::VoxelIndex;

/// Result type alias
pub type Result<T> = std::result::Result<T, TraversalError>;

/// Traversal failure modes.
///
/// [`InvalidStepSize`](TraversalError::InvalidStepSize) is a caller error
/// and is rejected before any computation. The other two variants signal an
/// arithmetic defect in the traversal itself rather than bad input: callers
/// must treat them as unrecoverable and never retry, since the algorithms
/// are deterministic and a retry reproduces the identical failure.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum TraversalError {
    /// Voxel edge length must be a positive finite number
    #[error("invalid step size {step_size} (must be > 0)")]
    InvalidStepSize {
        /// The rejected edge length
        step_size: f32,
    },

    /// The boundary-crossing walk failed to converge within its budget
    #[error("ray walk exhausted its {cap}-iteration budget without reaching the end voxel")]
    IterationCapExceeded {
        /// Iteration budget that was exhausted
        cap: usize,
    },

    /// An integer traversal finished on the wrong voxel
    #[error("traversal ended at {reached:?}, expected {expected:?}")]
    EndpointMismatch {
        /// Voxel the walk actually reached
        reached: VoxelIndex,
        /// Voxel containing the ray end point
        expected: VoxelIndex,
    },
}
