//! Integer-error ray traversal (3D line rasterization).
//!
//! Generalizes the 2D integer-accumulator line algorithm to three axes:
//! one error accumulator per axis, all seeded with half the dominant-axis
//! delta, each decremented by its own delta every iteration and refilled
//! with the dominant delta when it underflows, stepping that axis's index.
//!
//! The walk runs exactly `dominant` iterations and emits exactly
//! `dominant + 1` voxels, so iteration count is bounded and known up front.
//! Axes step one cell at a time; two axes step within the same emitted
//! voxel only when their deltas coincide.

use log::error;

use crate::core::{Point3, VoxelIndex};

use super::TraversalPath;
use super::error::{Result, TraversalError};
use super::traits::VoxelTraversal;

/// Integer-error traversal.
///
/// Bounded, integer-only, and deterministic. Emits `chebyshev + 1` voxels
/// for a ray spanning `chebyshev` cells on its dominant axis.
#[derive(Clone, Copy, Debug, Default)]
pub struct BresenhamTraversal;

impl BresenhamTraversal {
    /// Create a new integer-error traversal.
    pub fn new() -> Self {
        Self
    }

    /// Compute the ordered voxels a ray passes through.
    ///
    /// See [`VoxelTraversal::traverse`] for the contract. NaN endpoint
    /// coordinates yield an empty path.
    pub fn traverse(
        &self,
        ray_start: Point3,
        ray_end: Point3,
        step_size: f32,
    ) -> Result<TraversalPath> {
        if !(step_size > 0.0) {
            return Err(TraversalError::InvalidStepSize { step_size });
        }
        if ray_start.has_nan() || ray_end.has_nan() {
            return Ok(Vec::new());
        }

        let start_voxel = VoxelIndex::from_world(ray_start, step_size);
        let end_voxel = VoxelIndex::from_world(ray_end, step_size);

        let dx = (end_voxel.x as i64 - start_voxel.x as i64).abs();
        let dy = (end_voxel.y as i64 - start_voxel.y as i64).abs();
        let dz = (end_voxel.z as i64 - start_voxel.z as i64).abs();
        let sx: i32 = if start_voxel.x < end_voxel.x { 1 } else { -1 };
        let sy: i32 = if start_voxel.y < end_voxel.y { 1 } else { -1 };
        let sz: i32 = if start_voxel.z < end_voxel.z { 1 } else { -1 };
        let dominant = dx.max(dy).max(dz);

        // Error offset: half the dominant delta in every accumulator.
        let mut err_x = dominant / 2;
        let mut err_y = dominant / 2;
        let mut err_z = dominant / 2;

        let mut current = start_voxel;
        let mut path: TraversalPath = Vec::with_capacity(dominant as usize + 1);
        let mut remaining = dominant;

        loop {
            path.push(current);
            if remaining == 0 {
                break;
            }
            remaining -= 1;

            err_x -= dx;
            if err_x < 0 {
                err_x += dominant;
                current.x += sx;
            }
            err_y -= dy;
            if err_y < 0 {
                err_y += dominant;
                current.y += sy;
            }
            err_z -= dz;
            if err_z < 0 {
                err_z += dominant;
                current.z += sz;
            }
        }

        if current != end_voxel {
            error!(
                "integer-error walk ended at {:?}, expected {:?}",
                current, end_voxel
            );
            return Err(TraversalError::EndpointMismatch {
                reached: current,
                expected: end_voxel,
            });
        }
        Ok(path)
    }
}

impl VoxelTraversal for BresenhamTraversal {
    fn traverse(
        &self,
        ray_start: Point3,
        ray_end: Point3,
        step_size: f32,
    ) -> Result<TraversalPath> {
        BresenhamTraversal::traverse(self, ray_start, ray_end, step_size)
    }

    fn name(&self) -> &str {
        "bresenham"
    }
}
