//! Impulsive deflection utilities: tangential ΔV burns and kinetic-impactor sizing.

pub mod deflection;
pub mod impactor;
pub mod scenario;

use deflect_orbits::OrbitError;
use thiserror::Error;

pub use deflection::{ImpactSummary, deflect, deflect_about, impact_summary, impact_summary_about};
pub use impactor::{KineticImpactor, kinetic_impactor_delta_v};
pub use scenario::{DeflectionOutcome, DeflectionScenario, DeltaVSource};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum DeflectionError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("degenerate state: {0}")]
    DegenerateState(String),
}

impl From<OrbitError> for DeflectionError {
    fn from(err: OrbitError) -> Self {
        match err {
            OrbitError::InvalidInput(msg) => DeflectionError::InvalidInput(msg),
        }
    }
}
