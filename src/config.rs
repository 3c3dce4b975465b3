// Run configuration for a mean-free-path sweep.

use crate::error::{Result, WalkError};
use crate::step::DualPath;
use crate::trajectory::Position;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use std::fs;
use std::path::Path;

/// Evenly spaced values from `start` to `end`, both included.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearSweep {
    pub start: f64,
    pub end: f64,
    pub points: usize,
}

impl LinearSweep {
    pub fn new(start: f64, end: f64, points: usize) -> Self {
        Self { start, end, points }
    }

    pub fn values(&self) -> Vec<f64> {
        match self.points {
            0 => Vec::new(),
            1 => vec![self.start],
            n => {
                let step = (self.end - self.start) / (n - 1) as f64;
                let mut values: Vec<f64> =
                    (0..n).map(|i| self.start + i as f64 * step).collect();
                values[n - 1] = self.end;
                values
            }
        }
    }

    /// Spacing between consecutive values; 0 for fewer than two points.
    pub fn step(&self) -> f64 {
        if self.points < 2 {
            0.0
        } else {
            (self.end - self.start) / (self.points - 1) as f64
        }
    }
}

/// Parameters of a random laser emission experiment.
///
/// Lengths are micrometres. Missing JSON fields take the defaults below.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SweepConfig {
    /// Incident photons per swept value.
    pub photons: usize,
    /// Step cap for each photon walk.
    pub max_iterations: usize,
    /// `L1`, mean free path between particles.
    pub exterior_mean_free_path: f64,
    /// Values of `L2` to simulate.
    pub interior_mean_free_path: LinearSweep,
    /// Probability of selecting `L2` on a step.
    pub interior_probability: f64,
    /// Per-step probability that an inside photon is absorbed and re-emitted.
    pub concentration: f64,
    /// Height of the sample surface; photons above it have left the medium.
    pub surface_z: f64,
    pub start_position: Position,
    /// Polar angle of the launch step. The azimuth is the swept `L2` value.
    pub launch_theta: f64,
    pub launch_mean_free_path: f64,
    pub refractive_index: f64,
    pub seed: u64,
}

impl Default for SweepConfig {
    fn default() -> Self {
        // Centre of a +/-1000 um box, measured as the half-width.
        let half_width = (1000.0 - -1000.0) / 2.0;
        Self {
            photons: 50,
            max_iterations: 100_000,
            exterior_mean_free_path: 10.0,
            interior_mean_free_path: LinearSweep::new(0.0, 10.0, 20),
            interior_probability: 0.99,
            concentration: 0.01,
            surface_z: 0.0,
            start_position: [half_width, half_width, 0.0],
            launch_theta: -PI,
            launch_mean_free_path: 0.0,
            refractive_index: 2.0,
            seed: 42,
        }
    }
}

impl SweepConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Step parameters for one swept interior mean free path.
    pub fn dual_path(&self, interior_mean_free_path: f64) -> DualPath {
        DualPath::new(
            self.exterior_mean_free_path,
            interior_mean_free_path,
            self.interior_probability,
        )
    }

    pub fn validate(&self) -> Result<()> {
        if self.photons == 0 {
            return Err(WalkError::config("photons must be at least 1"));
        }
        if self.max_iterations == 0 {
            return Err(WalkError::config("max_iterations must be at least 1"));
        }
        if self.interior_mean_free_path.points == 0 {
            return Err(WalkError::config(
                "interior_mean_free_path sweep needs at least one point",
            ));
        }
        check_probability("interior_probability", self.interior_probability)?;
        check_probability("concentration", self.concentration)?;

        let paths = [
            ("exterior_mean_free_path", self.exterior_mean_free_path),
            ("interior_mean_free_path.start", self.interior_mean_free_path.start),
            ("interior_mean_free_path.end", self.interior_mean_free_path.end),
            ("launch_mean_free_path", self.launch_mean_free_path),
        ];
        for (name, value) in paths {
            if !value.is_finite() || value < 0.0 {
                return Err(WalkError::config(format!(
                    "{} must be a non-negative finite length, got {}",
                    name, value
                )));
            }
        }
        if !(self.refractive_index.is_finite() && self.refractive_index > 0.0) {
            return Err(WalkError::config(format!(
                "refractive_index must be positive, got {}",
                self.refractive_index
            )));
        }
        Ok(())
    }
}

fn check_probability(name: &str, value: f64) -> Result<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(WalkError::config(format!(
            "{} must lie in [0, 1], got {}",
            name, value
        )))
    }
}
