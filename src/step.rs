// Step sampling for the photon random walk.
//
// Directions use two angles drawn independently from [0, 2pi):
//     dx = sin(phi) cos(theta), dy = sin(phi) sin(theta), dz = cos(phi)
// phi covers the full circle rather than [0, pi], which weights the
// directions differently from a uniform sphere. This parametrisation
// defines the effective scattering anisotropy of the medium and is kept
// as is.
//
// Step lengths are drawn from Normal(L, L). Non-positive lengths are
// valid draws and move the photon against the sampled direction.

use crate::regime::{PathChoice, Regime};
use crate::rng::RandomSource;
use crate::trajectory::Position;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Parameters of a regime-switching step.
///
/// Mean free paths are in micrometres and expected to be non-negative;
/// `interior_probability` is expected in `[0, 1]`. Neither is checked here.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DualPath {
    /// `L1`, mean free path between particles.
    pub exterior: f64,
    /// `L2`, mean free path inside a particle.
    pub interior: f64,
    /// Probability `p` of selecting `L2` on any given step.
    pub interior_probability: f64,
}

impl DualPath {
    pub fn new(exterior: f64, interior: f64, interior_probability: f64) -> Self {
        Self {
            exterior,
            interior,
            interior_probability,
        }
    }
}

/// Result of a regime-switching step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DualStep {
    pub position: Position,
    pub regime: Regime,
    pub choice: PathChoice,
    /// The sampled length actually travelled.
    pub length: f64,
}

/// Unit-free direction for the given angles.
#[inline]
pub fn direction(phi: f64, theta: f64) -> [f64; 3] {
    let (sin_phi, cos_phi) = phi.sin_cos();
    let (sin_theta, cos_theta) = theta.sin_cos();
    [sin_phi * cos_theta, sin_phi * sin_theta, cos_phi]
}

/// Move `position` by `length` along the direction given by `(phi, theta)`.
#[inline]
pub fn displace(position: Position, phi: f64, theta: f64, length: f64) -> Position {
    let d = direction(phi, theta);
    [
        position[0] + d[0] * length,
        position[1] + d[1] * length,
        position[2] + d[2] * length,
    ]
}

/// Draw an actual step length for a nominal mean free path.
#[inline]
pub fn sample_length<R: RandomSource + ?Sized>(mean_free_path: f64, rng: &mut R) -> f64 {
    rng.normal(mean_free_path, mean_free_path)
}

/// Draw `(phi, theta)`, each uniform in `[0, 2pi)`.
#[inline]
pub fn sample_angles<R: RandomSource + ?Sized>(rng: &mut R) -> (f64, f64) {
    let phi = rng.uniform(0.0, 2.0 * PI);
    let theta = rng.uniform(0.0, 2.0 * PI);
    (phi, theta)
}

/// Single mean-free-path step: length, then phi, then theta.
pub fn single_step<R: RandomSource + ?Sized>(
    position: Position,
    mean_free_path: f64,
    rng: &mut R,
) -> Position {
    let length = sample_length(mean_free_path, rng);
    let (phi, theta) = sample_angles(rng);
    displace(position, phi, theta, length)
}

/// Step along fixed angles; only the length is random.
pub fn directed_step<R: RandomSource + ?Sized>(
    position: Position,
    phi: f64,
    theta: f64,
    mean_free_path: f64,
    rng: &mut R,
) -> Position {
    let length = sample_length(mean_free_path, rng);
    displace(position, phi, theta, length)
}

/// Regime-switching step.
///
/// Draw order is fixed: `l1`, `l2`, `phi`, `theta`, then the selection
/// variate. Both lengths are drawn even though only one is travelled.
pub fn dual_step<R: RandomSource + ?Sized>(
    position: Position,
    regime: Regime,
    path: &DualPath,
    rng: &mut R,
) -> DualStep {
    let exterior_length = sample_length(path.exterior, rng);
    let interior_length = sample_length(path.interior, rng);
    let (phi, theta) = sample_angles(rng);

    let choice = if rng.uniform(0.0, 1.0) < path.interior_probability {
        PathChoice::Interior
    } else {
        PathChoice::Exterior
    };
    let length = match choice {
        PathChoice::Interior => interior_length,
        PathChoice::Exterior => exterior_length,
    };

    DualStep {
        position: displace(position, phi, theta, length),
        regime: regime.transition(choice),
        choice,
        length,
    }
}
