// File output for a finished sweep.

use crate::config::SweepConfig;
use crate::error::Result;
use crate::sweep::SweepPoint;
use crate::trajectory::Trajectory;
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

#[derive(Debug, Serialize)]
struct ResultRow {
    interior_mean_free_path: f64,
    emission_ratio: Option<f64>,
    mean_residence_time: Option<f64>,
    std_residence_time: Option<f64>,
    secondaries: usize,
    emitted: usize,
}

impl From<&SweepPoint> for ResultRow {
    fn from(point: &SweepPoint) -> Self {
        Self {
            interior_mean_free_path: point.interior_mean_free_path,
            emission_ratio: point.emission_ratio,
            mean_residence_time: point.mean_residence_time,
            std_residence_time: point.std_residence_time,
            secondaries: point.secondaries,
            emitted: point.emitted,
        }
    }
}

/// One row per swept value. Undefined ratios and times are left empty.
pub fn write_results_csv(path: impl AsRef<Path>, points: &[SweepPoint]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    for point in points {
        writer.serialize(ResultRow::from(point))?;
    }
    writer.flush()?;
    Ok(())
}

/// `x,y,z` per position, in walk order.
pub fn write_trajectory_csv(path: impl AsRef<Path>, trajectory: &Trajectory) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(["x", "y", "z"])?;
    for p in trajectory {
        writer.serialize(p)?;
    }
    writer.flush()?;
    Ok(())
}

/// Human readable summary of the run conditions.
pub fn write_parameters(path: impl AsRef<Path>, config: &SweepConfig) -> Result<()> {
    let mut out = BufWriter::new(File::create(path)?);
    let sweep = &config.interior_mean_free_path;
    writeln!(out, "Simulation conditions:")?;
    writeln!(out, "incident photons: {}", config.photons)?;
    writeln!(out, "maximum reflections: {}", config.max_iterations)?;
    writeln!(out, "mean free path 1 (um): {:.6}", config.exterior_mean_free_path)?;
    writeln!(out, "mean free path 2 first (um): {:.6}", sweep.start)?;
    writeln!(out, "mean free path 2 last (um): {:.6}", sweep.end)?;
    writeln!(out, "mean free path 2 step (um): {:.6}", sweep.step())?;
    writeln!(
        out,
        "probability of mean free path 2: {:.6}",
        config.interior_probability
    )?;
    writeln!(out, "emitter concentration: {:.6}", config.concentration)?;
    writeln!(out, "refractive index: {:.6}", config.refractive_index)?;
    writeln!(out, "seed: {}", config.seed)?;
    out.flush()?;
    Ok(())
}
