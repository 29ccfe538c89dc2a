//! Boundary-crossing ray traversal (parametric grid walk).
//!
//! Tracks, per axis, the ray parameter at which the walk crosses the next
//! voxel boundary and always advances the axis with the smallest crossing
//! value, following "A Fast Voxel Traversal Algorithm for Ray Tracing"
//! (Amanatides & Woo, 1987).
//!
//! The boundary convention for axes traveling in the negative direction is
//! aligned by shifting those indices back one cell before the walk starts.
//! For rare ray geometries this correction interacts badly with the step
//! order and the walk orbits the end voxel instead of landing on it, so the
//! walk runs under a hard iteration budget and reports
//! [`IterationCapExceeded`](super::TraversalError::IterationCapExceeded)
//! instead of hanging. Keep this variant as a cross-check against the
//! integer algorithms; prefer [`DdaTraversal`](super::DdaTraversal) for
//! production rays.

use log::error;
use serde::{Deserialize, Serialize};

use crate::core::{Point3, VoxelIndex};

use super::TraversalPath;
use super::error::{Result, TraversalError};
use super::traits::VoxelTraversal;

/// Boundary-crossing traversal with a bounded walk.
///
/// # Example
///
/// ```ignore
/// use kirana_cast::{ParametricTraversal, Point3, VoxelTraversal};
///
/// let traversal = ParametricTraversal::default();
/// let path = traversal.traverse(Point3::ZERO, Point3::new(3.0, 0.0, 0.0), 1.0)?;
/// assert_eq!(path.len(), 4);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct ParametricTraversal {
    /// Iteration budget multiplier on the voxel-space Manhattan distance.
    cap_factor: usize,
}

impl Default for ParametricTraversal {
    fn default() -> Self {
        Self { cap_factor: 4 }
    }
}

impl ParametricTraversal {
    /// Create a traversal with a custom iteration budget multiplier.
    ///
    /// The walk aborts after `cap_factor * (manhattan_distance + 1)`
    /// iterations. The default factor of 4 leaves ample room for the extra
    /// steps a well-behaved walk takes around the negative-direction
    /// correction.
    pub fn new(cap_factor: usize) -> Self {
        Self { cap_factor }
    }

    /// Compute the ordered voxels a ray passes through.
    ///
    /// See [`VoxelTraversal::traverse`] for the contract. Unlike the
    /// integer variants, NaN endpoints are not screened here; the iteration
    /// budget is this walk's only termination backstop.
    pub fn traverse(
        &self,
        ray_start: Point3,
        ray_end: Point3,
        step_size: f32,
    ) -> Result<TraversalPath> {
        if !(step_size > 0.0) {
            return Err(TraversalError::InvalidStepSize { step_size });
        }

        let ray = ray_end - ray_start;
        let start_voxel = VoxelIndex::from_world(ray_start, step_size);
        let end_voxel = VoxelIndex::from_world(ray_end, step_size);
        let mut current = start_voxel;

        if start_voxel == end_voxel {
            return Ok(vec![start_voxel]);
        }

        // Unit step per axis, from the sign of the continuous delta.
        let step_x: i32 = if ray.x >= 0.0 { 1 } else { -1 };
        let step_y: i32 = if ray.y >= 0.0 { 1 } else { -1 };
        let step_z: i32 = if ray.z >= 0.0 { 1 } else { -1 };

        // Ray parameter at the first boundary crossing, per axis. Axes whose
        // start and end indices already agree never step; they get a sentinel
        // that keeps them out of the min comparison. A zero continuous delta
        // implies equal indices on that axis, so the divisions below cannot
        // see a zero denominator.
        let boundary_x = (current.x + step_x) as f32 * step_size;
        let boundary_y = (current.y + step_y) as f32 * step_size;
        let boundary_z = (current.z + step_z) as f32 * step_size;

        let mut t_max_x = if start_voxel.x != end_voxel.x {
            (boundary_x - ray_start.x) / ray.x
        } else {
            f32::MAX
        };
        let mut t_max_y = if start_voxel.y != end_voxel.y {
            (boundary_y - ray_start.y) / ray.y
        } else {
            f32::MAX
        };
        let mut t_max_z = if start_voxel.z != end_voxel.z {
            (boundary_z - ray_start.z) / ray.z
        } else {
            f32::MAX
        };

        // Ray parameter needed to cross one full voxel, per axis.
        let t_delta_x = if start_voxel.x != end_voxel.x {
            step_size / ray.x * step_x as f32
        } else {
            f32::MAX
        };
        let t_delta_y = if start_voxel.y != end_voxel.y {
            step_size / ray.y * step_y as f32
        } else {
            f32::MAX
        };
        let t_delta_z = if start_voxel.z != end_voxel.z {
            step_size / ray.z * step_z as f32
        } else {
            f32::MAX
        };

        let mut path: TraversalPath = Vec::new();
        path.push(current);

        // Align the boundary convention for axes traveling in the negative
        // direction before the walk starts.
        let mut diff = VoxelIndex::ZERO;
        let mut neg_ray = false;
        if current.x != end_voxel.x && ray.x < 0.0 {
            diff.x -= 1;
            neg_ray = true;
        }
        if current.y != end_voxel.y && ray.y < 0.0 {
            diff.y -= 1;
            neg_ray = true;
        }
        if current.z != end_voxel.z && ray.z < 0.0 {
            diff.z -= 1;
            neg_ray = true;
        }
        if neg_ray {
            current = current + diff;
            path.push(current);
        }

        let manhattan = start_voxel.manhattan_distance(&end_voxel) as usize;
        let cap = self.cap_factor * (manhattan + 1);
        let mut steps = 0usize;

        while current != end_voxel {
            if steps >= cap {
                error!(
                    "boundary walk from {:?} did not reach {:?} within {} iterations",
                    start_voxel, end_voxel, cap
                );
                return Err(TraversalError::IterationCapExceeded { cap });
            }
            steps += 1;

            // Step the axis with the nearest boundary crossing.
            if t_max_x < t_max_y {
                if t_max_x < t_max_z {
                    current.x += step_x;
                    t_max_x += t_delta_x;
                } else {
                    current.z += step_z;
                    t_max_z += t_delta_z;
                }
            } else if t_max_y < t_max_z {
                current.y += step_y;
                t_max_y += t_delta_y;
            } else {
                current.z += step_z;
                t_max_z += t_delta_z;
            }
            path.push(current);
        }

        Ok(path)
    }
}

impl VoxelTraversal for ParametricTraversal {
    fn traverse(
        &self,
        ray_start: Point3,
        ray_end: Point3,
        step_size: f32,
    ) -> Result<TraversalPath> {
        ParametricTraversal::traverse(self, ray_start, ray_end, step_size)
    }

    fn name(&self) -> &str {
        "parametric"
    }
}
