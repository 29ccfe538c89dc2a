//! Core types for the KiranaCast library.
//!
//! This module provides the fundamental coordinate types used by the
//! traversal algorithms:
//!
//! - [`Point3`]: Floating-point world coordinates in meters
//! - [`VoxelIndex`]: Integer cell indices into a uniform voxel grid
//!
//! A world point maps to a voxel by per-axis floor division with the voxel
//! edge length; see [`VoxelIndex::from_world`].

mod point;

pub use point::{Point3, VoxelIndex};
