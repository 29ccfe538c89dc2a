//! Point and voxel coordinate types.

use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul, Sub};

/// Voxel coordinates (integer cell indices)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct VoxelIndex {
    /// X index
    pub x: i32,
    /// Y index
    pub y: i32,
    /// Z index
    pub z: i32,
}

impl VoxelIndex {
    /// Create a new voxel index
    #[inline]
    pub fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Origin voxel
    pub const ZERO: VoxelIndex = VoxelIndex { x: 0, y: 0, z: 0 };

    /// Voxel containing a world point, by per-axis floor division.
    ///
    /// Floor (round down) rather than truncation, so negative coordinates
    /// land in the correct cell.
    #[inline]
    pub fn from_world(point: Point3, step_size: f32) -> Self {
        Self {
            x: (point.x / step_size).floor() as i32,
            y: (point.y / step_size).floor() as i32,
            z: (point.z / step_size).floor() as i32,
        }
    }

    /// Manhattan distance to another voxel (sum of per-axis deltas).
    ///
    /// Computed in i64 so extreme index pairs cannot overflow.
    #[inline]
    pub fn manhattan_distance(&self, other: &VoxelIndex) -> i64 {
        (self.x as i64 - other.x as i64).abs()
            + (self.y as i64 - other.y as i64).abs()
            + (self.z as i64 - other.z as i64).abs()
    }

    /// Chebyshev distance to another voxel (largest per-axis delta).
    ///
    /// This is the dominant-axis delta that bounds the iteration count of
    /// the integer traversal algorithms.
    #[inline]
    pub fn chebyshev_distance(&self, other: &VoxelIndex) -> i64 {
        (self.x as i64 - other.x as i64)
            .abs()
            .max((self.y as i64 - other.y as i64).abs())
            .max((self.z as i64 - other.z as i64).abs())
    }
}

impl Add for VoxelIndex {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        VoxelIndex::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }
}

impl Sub for VoxelIndex {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        VoxelIndex::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }
}

/// World coordinates (meters, f32)
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct Point3 {
    /// X coordinate in meters
    pub x: f32,
    /// Y coordinate in meters
    pub y: f32,
    /// Z coordinate in meters
    pub z: f32,
}

impl Point3 {
    /// Create a new world point
    #[inline]
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Zero point (origin)
    pub const ZERO: Point3 = Point3 {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    /// True if any component is NaN
    #[inline]
    pub fn has_nan(&self) -> bool {
        self.x.is_nan() || self.y.is_nan() || self.z.is_nan()
    }

    /// Euclidean distance to another point
    #[inline]
    pub fn distance(&self, other: &Point3) -> f32 {
        (*self - *other).length()
    }

    /// Length (magnitude) of this point as a vector from origin
    #[inline]
    pub fn length(&self) -> f32 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// Normalize to unit length
    #[inline]
    pub fn normalize(&self) -> Point3 {
        let len = self.length();
        if len > 0.0 {
            Point3::new(self.x / len, self.y / len, self.z / len)
        } else {
            *self
        }
    }
}

impl Add for Point3 {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Point3::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }
}

impl Sub for Point3 {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Point3::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }
}

impl Mul<f32> for Point3 {
    type Output = Self;

    #[inline]
    fn mul(self, scalar: f32) -> Self {
        Point3::new(self.x * scalar, self.y * scalar, self.z * scalar)
    }
}
