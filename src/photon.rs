use crate::error::Result;
use crate::metrics::{self, PathMetrics};
use crate::regime::{PathChoice, Regime};
use crate::rng::RandomSource;
use crate::step::{self, DualPath};
use crate::trajectory::{Position, Trajectory};

/// A single photon performing a random walk through the medium.
///
/// The photon owns its position, its regime and the full history of
/// positions it visited. It performs no boundary checks; the driver
/// inspects `position()` after each step and decides when to stop.
#[derive(Debug, Clone)]
pub struct Photon {
    position: Position,
    regime: Regime,
    trajectory: Trajectory,
}

impl Photon {
    pub fn new(position: Position) -> Self {
        Self {
            position,
            regime: Regime::Outside,
            trajectory: Trajectory::new(position),
        }
    }

    pub fn at(x: f64, y: f64, z: f64) -> Self {
        Self::new([x, y, z])
    }

    /// Random step with a single mean free path (µm).
    pub fn step_single<R: RandomSource + ?Sized>(&mut self, mean_free_path: f64, rng: &mut R) {
        let next = step::single_step(self.position, mean_free_path, rng);
        self.advance_to(next);
    }

    /// Regime-switching step; returns which path was selected.
    pub fn step_dual<R: RandomSource + ?Sized>(
        &mut self,
        path: &DualPath,
        rng: &mut R,
    ) -> PathChoice {
        let outcome = step::dual_step(self.position, self.regime, path, rng);
        self.regime = outcome.regime;
        self.advance_to(outcome.position);
        outcome.choice
    }

    /// Step along fixed angles with a randomly drawn length.
    pub fn step_directed<R: RandomSource + ?Sized>(
        &mut self,
        phi: f64,
        theta: f64,
        mean_free_path: f64,
        rng: &mut R,
    ) {
        let next = step::directed_step(self.position, phi, theta, mean_free_path, rng);
        self.advance_to(next);
    }

    /// Discard the most recent step.
    ///
    /// The position returns to the previous trajectory entry. The regime is
    /// left as the discarded step set it. Fails when no step has been taken.
    pub fn undo_last_step(&mut self) -> Result<Position> {
        let removed = self.trajectory.pop_last()?;
        self.position = self.trajectory.last();
        Ok(removed)
    }

    fn advance_to(&mut self, next: Position) {
        self.position = next;
        self.trajectory.push(next);
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn x(&self) -> f64 {
        self.position[0]
    }

    pub fn y(&self) -> f64 {
        self.position[1]
    }

    pub fn z(&self) -> f64 {
        self.position[2]
    }

    pub fn regime(&self) -> Regime {
        self.regime
    }

    pub fn is_inside(&self) -> bool {
        self.regime.is_inside()
    }

    pub fn trajectory(&self) -> &Trajectory {
        &self.trajectory
    }

    pub fn into_trajectory(self) -> Trajectory {
        self.trajectory
    }

    pub fn total_path_length(&self) -> f64 {
        metrics::total_path_length(&self.trajectory)
    }

    pub fn residence_time(&self, refractive_index: f64) -> f64 {
        metrics::residence_time(&self.trajectory, refractive_index)
    }

    pub fn reflection_count(&self) -> usize {
        metrics::reflection_count(&self.trajectory)
    }

    pub fn metrics(&self, refractive_index: f64) -> PathMetrics {
        PathMetrics::from_trajectory(&self.trajectory, refractive_index)
    }
}
