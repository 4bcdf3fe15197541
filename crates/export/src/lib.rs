//! Export helpers: unit conversion of states to AU / km/s and JSON writers.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use serde::Serialize;

/// Create a writer for the target path, handling stdout (`-`) by convention.
pub fn writer_for_path(path: &Path) -> io::Result<Box<dyn Write>> {
    if path == Path::new("-") {
        return Ok(Box::new(BufWriter::new(io::stdout())));
    }
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let file = File::create(path)?;
    Ok(Box::new(BufWriter::new(file)))
}

/// Pretty-print `value` as JSON followed by a newline.
pub fn write_json<T: Serialize>(writer: &mut dyn Write, value: &T) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *writer, value)?;
    writeln!(writer)?;
    writer.flush()
}

pub mod state {
    use deflect_core::units::{ms_to_kms, m_to_au};
    use deflect_orbits::OrbitalState;
    use serde::Serialize;

    #[derive(Debug, Clone, Copy, PartialEq, Serialize)]
    pub struct Components {
        pub x: f64,
        pub y: f64,
        pub z: f64,
    }

    #[derive(Debug, Clone, Copy, PartialEq, Serialize)]
    pub struct PositionAu {
        pub au: Components,
    }

    #[derive(Debug, Clone, Copy, PartialEq, Serialize)]
    pub struct VelocityKmS {
        pub km_s: Components,
    }

    /// One propagated state in display units (AU, km/s).
    #[derive(Debug, Clone, Copy, PartialEq, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct StateRecord {
        pub julian_date: f64,
        pub position: PositionAu,
        pub velocity: VelocityKmS,
    }

    impl From<&OrbitalState> for StateRecord {
        fn from(state: &OrbitalState) -> Self {
            let r = state.position_m;
            let v = state.velocity_m_s;
            StateRecord {
                julian_date: state.julian_date,
                position: PositionAu {
                    au: Components {
                        x: m_to_au(r.x),
                        y: m_to_au(r.y),
                        z: m_to_au(r.z),
                    },
                },
                velocity: VelocityKmS {
                    km_s: Components {
                        x: ms_to_kms(v.x),
                        y: ms_to_kms(v.y),
                        z: ms_to_kms(v.z),
                    },
                },
            }
        }
    }
}

pub mod summary {
    use deflect_impulsive::ImpactSummary;
    use serde::Serialize;

    #[derive(Debug, Clone, Copy, PartialEq, Serialize)]
    pub struct SummaryRecord {
        #[serde(rename = "deltaV_m_s")]
        pub delta_v_m_s: f64,
        #[serde(rename = "deltaPeriod_days")]
        pub delta_period_days: f64,
    }

    impl From<&ImpactSummary> for SummaryRecord {
        fn from(summary: &ImpactSummary) -> Self {
            SummaryRecord {
                delta_v_m_s: summary.delta_v_m_s,
                delta_period_days: summary.delta_period_days,
            }
        }
    }
}

pub mod elements {
    use deflect_orbits::OrbitalElements;
    use serde::Serialize;

    #[derive(Debug, Clone, Copy, PartialEq, Serialize)]
    pub struct ElementsRecord {
        pub baseline: OrbitalElements,
        pub deflected: OrbitalElements,
    }
}

pub mod track {
    use deflect_orbits::OrbitalState;
    use serde::Serialize;

    use crate::state::StateRecord;

    /// Baseline and deflected samples over a common window.
    #[derive(Debug, Clone, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct TrackRecord {
        pub scenario: String,
        pub impact_julian_date: f64,
        pub baseline: Vec<StateRecord>,
        pub deflected: Vec<StateRecord>,
    }

    impl TrackRecord {
        pub fn new(
            scenario: &str,
            impact_julian_date: f64,
            baseline: &[OrbitalState],
            deflected: &[OrbitalState],
        ) -> Self {
            TrackRecord {
                scenario: scenario.to_string(),
                impact_julian_date,
                baseline: baseline.iter().map(StateRecord::from).collect(),
                deflected: deflected.iter().map(StateRecord::from).collect(),
            }
        }
    }
}
