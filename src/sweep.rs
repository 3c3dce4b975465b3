// Emission experiment driven over a range of interior mean free paths.
//
// For every swept value a batch of primary photons is launched from the
// surface into the bulk. A primary that is inside a particle may be
// absorbed and re-emitted as a secondary photon; a secondary that walks
// back through the surface counts as emitted. Termination rules live here,
// not in the photon.

use crate::config::SweepConfig;
use crate::error::Result;
use crate::photon::Photon;
use crate::rng::{stream_rng, RandomSource};
use crate::step::DualPath;
use crate::trajectory::{Position, Trajectory};
use rayon::prelude::*;
use serde::Serialize;
use std::sync::atomic::{AtomicUsize, Ordering};

/// How a primary photon's walk ended.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PrimaryFate {
    /// Absorbed while inside a particle; a secondary starts here.
    Absorbed(Position),
    /// Walked back above the surface.
    Escaped,
    /// Hit the iteration cap.
    Exhausted,
}

/// Outcome of a secondary photon's walk.
#[derive(Debug, Clone)]
pub enum SecondaryFate {
    /// Crossed the surface; carries the finished photon.
    Emitted(Photon),
    Exhausted,
}

/// Aggregated outcome for one swept interior mean free path.
#[derive(Debug, Clone, Serialize)]
pub struct SweepPoint {
    pub interior_mean_free_path: f64,
    pub primaries: usize,
    pub secondaries: usize,
    pub emitted: usize,
    /// `emitted / secondaries`; `None` when no secondary was generated.
    pub emission_ratio: Option<f64>,
    pub mean_residence_time: Option<f64>,
    /// Population standard deviation of the residence times.
    pub std_residence_time: Option<f64>,
    pub residence_times: Vec<f64>,
    /// Path of the last emitted photon, kept for plotting.
    #[serde(skip)]
    pub last_emitted: Option<Trajectory>,
}

/// Walk a primary photon until it is absorbed, escapes, or runs out of steps.
pub fn run_primary<R: RandomSource + ?Sized>(
    photon: &mut Photon,
    config: &SweepConfig,
    path: &DualPath,
    rng: &mut R,
) -> PrimaryFate {
    photon.step_directed(
        path.interior,
        config.launch_theta,
        config.launch_mean_free_path,
        rng,
    );
    for _ in 0..config.max_iterations {
        photon.step_dual(path, rng);
        let r = rng.uniform(0.0, 1.0);
        if r < config.concentration && photon.is_inside() {
            return PrimaryFate::Absorbed(photon.position());
        }
        if photon.z() > config.surface_z {
            return PrimaryFate::Escaped;
        }
    }
    PrimaryFate::Exhausted
}

/// Walk a secondary photon from `origin` until it leaves through the surface.
pub fn run_secondary<R: RandomSource + ?Sized>(
    origin: Position,
    config: &SweepConfig,
    path: &DualPath,
    rng: &mut R,
) -> SecondaryFate {
    let mut photon = Photon::new(origin);
    for _ in 0..config.max_iterations {
        photon.step_dual(path, rng);
        if photon.z() > config.surface_z {
            return SecondaryFate::Emitted(photon);
        }
    }
    SecondaryFate::Exhausted
}

/// Simulate one swept value with the given random source.
pub fn run_point<R: RandomSource + ?Sized>(
    config: &SweepConfig,
    interior_mean_free_path: f64,
    rng: &mut R,
) -> SweepPoint {
    let path = config.dual_path(interior_mean_free_path);

    let mut origins = Vec::new();
    let mut escaped = 0usize;
    for _ in 0..config.photons {
        let mut primary = Photon::new(config.start_position);
        let fate = run_primary(&mut primary, config, &path, rng);
        log::debug!(
            "primary: {:?} after {} steps",
            fate,
            primary.trajectory().len() - 1
        );
        match fate {
            PrimaryFate::Absorbed(at) => origins.push(at),
            PrimaryFate::Escaped => escaped += 1,
            PrimaryFate::Exhausted => {}
        }
    }

    let mut residence_times = Vec::new();
    let mut last_emitted = None;
    for origin in &origins {
        match run_secondary(*origin, config, &path, rng) {
            SecondaryFate::Emitted(photon) => {
                let time = photon.residence_time(config.refractive_index);
                log::debug!(
                    "secondary emitted after {} steps, residence time {:.4} fs",
                    photon.trajectory().len() - 1,
                    time
                );
                residence_times.push(time);
                last_emitted = Some(photon.into_trajectory());
            }
            SecondaryFate::Exhausted => {
                log::debug!("secondary exhausted {} steps", config.max_iterations);
            }
        }
    }

    let secondaries = origins.len();
    let emitted = residence_times.len();
    log::debug!(
        "L2 = {:.4} um: {} escaped, {} secondaries, {} emitted",
        interior_mean_free_path,
        escaped,
        secondaries,
        emitted
    );

    let (mean, std_dev) = match mean_std(&residence_times) {
        Some((m, s)) => (Some(m), Some(s)),
        None => (None, None),
    };
    SweepPoint {
        interior_mean_free_path,
        primaries: config.photons,
        secondaries,
        emitted,
        emission_ratio: (secondaries > 0).then(|| emitted as f64 / secondaries as f64),
        mean_residence_time: mean,
        std_residence_time: std_dev,
        residence_times,
        last_emitted,
    }
}

/// Run every swept value in parallel.
///
/// Sweep index `i` draws from stream `i` of the configured seed, so the
/// results do not depend on thread count or scheduling.
pub fn run_sweep(config: &SweepConfig) -> Result<Vec<SweepPoint>> {
    config.validate()?;
    let values = config.interior_mean_free_path.values();
    let total = values.len();
    let finished = AtomicUsize::new(0);

    log::info!(
        "Sweeping {} interior mean free paths with {} photons each",
        total,
        config.photons
    );

    let points = values
        .par_iter()
        .enumerate()
        .map(|(index, &value)| {
            let mut rng = stream_rng(config.seed, index as u64);
            let point = run_point(config, value, &mut rng);
            let done = finished.fetch_add(1, Ordering::Relaxed) + 1;
            log::info!(
                "{:.1}% done (L2 = {:.4} um, emission ratio {})",
                100.0 * done as f64 / total as f64,
                value,
                point
                    .emission_ratio
                    .map(|r| format!("{:.4}", r))
                    .unwrap_or_else(|| "n/a".to_string())
            );
            point
        })
        .collect();
    Ok(points)
}

fn mean_std(values: &[f64]) -> Option<(f64, f64)> {
    if values.is_empty() {
        return None;
    }
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let variance = values.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / n;
    Some((mean, variance.sqrt()))
}
