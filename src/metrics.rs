// Scalar quantities derived from a finished trajectory.

use crate::trajectory::Trajectory;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

/// Speed of light in vacuum in µm/fs, rounded for simulation purposes.
pub const SPEED_OF_LIGHT_UM_PER_FS: f64 = 300.0;

/// Sum of Euclidean distances between consecutive positions (µm).
///
/// A trajectory that never moved has length 0.
pub fn total_path_length(trajectory: &Trajectory) -> f64 {
    trajectory
        .segments()
        .map(|(a, b)| (Vector3::from(*b) - Vector3::from(*a)).norm())
        .sum()
}

/// Optical time spent travelling the trajectory: `L * n / c`.
pub fn residence_time(trajectory: &Trajectory, refractive_index: f64) -> f64 {
    total_path_length(trajectory) * refractive_index / SPEED_OF_LIGHT_UM_PER_FS
}

/// Number of recorded positions, the starting point included.
pub fn reflection_count(trajectory: &Trajectory) -> usize {
    trajectory.len()
}

/// All metrics of one trajectory at a given refractive index.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PathMetrics {
    pub total_path_length: f64,
    pub residence_time: f64,
    pub reflection_count: usize,
}

impl PathMetrics {
    pub fn from_trajectory(trajectory: &Trajectory, refractive_index: f64) -> Self {
        let total_path_length = total_path_length(trajectory);
        Self {
            total_path_length,
            residence_time: total_path_length * refractive_index / SPEED_OF_LIGHT_UM_PER_FS,
            reflection_count: reflection_count(trajectory),
        }
    }
}
