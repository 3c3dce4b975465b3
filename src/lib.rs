//! Monte Carlo photon random walks through 3D random laser media.
//!
//! The core is [`Photon`]: it takes single-path, regime-switching and
//! directed steps, keeps its trajectory and reports path length,
//! residence time and reflection count. [`sweep`] drives the emission
//! experiment over a range of interior mean free paths and [`report`]
//! writes its results.

pub mod config;
pub mod error;
pub mod metrics;
pub mod photon;
pub mod regime;
pub mod report;
pub mod rng;
pub mod step;
pub mod sweep;
pub mod trajectory;

pub use config::{LinearSweep, SweepConfig};
pub use error::{Result, WalkError};
pub use metrics::{PathMetrics, SPEED_OF_LIGHT_UM_PER_FS};
pub use photon::Photon;
pub use regime::{PathChoice, Regime};
pub use rng::{stream_rng, RandomSource};
pub use step::DualPath;
pub use sweep::{run_sweep, SweepPoint};
pub use trajectory::{Position, Trajectory};
