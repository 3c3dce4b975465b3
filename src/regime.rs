use serde::{Deserialize, Serialize};
use std::fmt;

/// Which mean free path a dual-path step selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PathChoice {
    /// The long path between particles (`L1`).
    Exterior,
    /// The short path inside a scattering particle (`L2`).
    Interior,
}

/// Whether a photon is modelled as travelling inside a scattering particle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Regime {
    #[default]
    Outside,
    Inside,
}

impl Regime {
    /// Regime after a step that selected `choice`.
    ///
    /// | state   | selected | next    |
    /// |---------|----------|---------|
    /// | Outside | Interior | Inside  |
    /// | Inside  | Exterior | Outside |
    /// | any     | other    | same    |
    pub fn transition(self, choice: PathChoice) -> Regime {
        match (self, choice) {
            (Regime::Outside, PathChoice::Interior) => Regime::Inside,
            (Regime::Inside, PathChoice::Exterior) => Regime::Outside,
            (state, _) => state,
        }
    }

    pub fn is_inside(self) -> bool {
        self == Regime::Inside
    }
}

impl fmt::Display for Regime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Regime::Outside => write!(f, "outside"),
            Regime::Inside => write!(f, "inside"),
        }
    }
}
