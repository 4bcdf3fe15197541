//! Heliocentric propagation and kinetic deflection of small bodies.
//!
//! The workspace crates are re-exported here so front-ends (the CLI, tests)
//! depend on a single library. `scenario` turns configuration records into
//! the runtime types the deflection model consumes.

pub mod scenario;

pub use deflect_config as config;
pub use deflect_core as common;
pub use deflect_export as export;
pub use deflect_impulsive as impulsive;
pub use deflect_orbits as orbits;

/// Returns the version of the library.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
