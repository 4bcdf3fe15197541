//! Configuration models and loaders for deflection scenarios.

use std::fs::File;
use std::path::{Path, PathBuf};

use deflect_core::constants::{AU_M, GM_SUN_M3_S2};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Target body: heliocentric elements plus physical properties.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct AsteroidConfig {
    pub name: String,
    pub semi_major_axis_au: f64,
    pub eccentricity: f64,
    pub inclination_deg: f64,
    pub ascending_node_deg: f64,
    pub argument_perihelion_deg: f64,
    pub mean_anomaly_deg: f64,
    pub epoch_jd: f64,
    pub mass_kg: f64,
    #[serde(default)]
    pub rotation_period_hours: Option<f64>,
}

/// Kinetic-impactor campaign parameters.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct MissionConfig {
    pub probe_count: u32,
    pub probe_mass_kg: f64,
    pub impact_speed_m_s: f64,
    pub beta: f64,
    /// Overrides the ΔV derived from the probes when set.
    #[serde(default)]
    pub delta_v_m_s: Option<f64>,
    pub years_to_impact: f64,
    pub deflection_window_years: f64,
}

/// Central body constants; defaults to the Sun.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq)]
pub struct CentralBodyConfig {
    pub mu_m3_s2: f64,
    pub au_m: f64,
}

impl Default for CentralBodyConfig {
    fn default() -> Self {
        Self {
            mu_m3_s2: GM_SUN_M3_S2,
            au_m: AU_M,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ScenarioConfig {
    pub name: String,
    #[serde(default)]
    pub central_body: CentralBodyConfig,
    pub asteroid: AsteroidConfig,
    pub mission: MissionConfig,
}

impl ScenarioConfig {
    /// Built-in scenario: 1981 Midas (JPL elements, epoch 2017-Sep-04) and a
    /// 50-probe kinetic impactor campaign 11 years after epoch.
    pub fn midas() -> Self {
        Self {
            name: "midas".to_string(),
            central_body: CentralBodyConfig::default(),
            asteroid: AsteroidConfig {
                name: "1981 Midas".to_string(),
                semi_major_axis_au: 1.7759,
                eccentricity: 0.6502,
                inclination_deg: 39.833,
                ascending_node_deg: 356.90,
                argument_perihelion_deg: 267.80,
                mean_anomaly_deg: 256.48,
                epoch_jd: 2_458_000.5,
                mass_kg: 1.0e13,
                rotation_period_hours: Some(5.2),
            },
            mission: MissionConfig {
                probe_count: 50,
                probe_mass_kg: 10_000.0,
                impact_speed_m_s: 10_000.0,
                beta: 2.5,
                delta_v_m_s: Some(0.00125),
                years_to_impact: 11.0,
                deflection_window_years: 15.0,
            },
        }
    }
}

/// Errors that can occur while loading configuration files.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse YAML: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("no scenario found in {0}")]
    Empty(PathBuf),
    #[error("scenario '{0}' not found")]
    NotFound(String),
}

/// Load every scenario from a YAML list, a single TOML file, or a directory of TOML files.
pub fn load_scenarios<P: AsRef<Path>>(path: P) -> Result<Vec<ScenarioConfig>, ConfigError> {
    load_records(path)
}

/// Load one scenario, picking `name` (case-insensitive) or else the first entry.
pub fn load_scenario<P: AsRef<Path>>(
    path: P,
    name: Option<&str>,
) -> Result<ScenarioConfig, ConfigError> {
    let path = path.as_ref();
    let scenarios = load_scenarios(path)?;
    match name {
        Some(name) => scenarios
            .into_iter()
            .find(|s| s.name.eq_ignore_ascii_case(name))
            .ok_or_else(|| ConfigError::NotFound(name.to_string())),
        None => scenarios
            .into_iter()
            .next()
            .ok_or_else(|| ConfigError::Empty(path.to_path_buf())),
    }
}

fn load_records<T, P>(path: P) -> Result<Vec<T>, ConfigError>
where
    T: for<'de> Deserialize<'de>,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    if path.is_dir() {
        read_dir_records(path)
    } else if path.extension().map(|ext| ext == "toml").unwrap_or(false) {
        let contents = std::fs::read_to_string(path)?;
        let record: T = toml::from_str(&contents)?;
        Ok(vec![record])
    } else {
        let reader = File::open(path)?;
        Ok(serde_yaml::from_reader(reader)?)
    }
}

fn read_dir_records<T>(dir: &Path) -> Result<Vec<T>, ConfigError>
where
    T: for<'de> Deserialize<'de>,
{
    let mut records = Vec::new();
    let mut entries: Vec<PathBuf> = std::fs::read_dir(dir)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.extension().map(|ext| ext == "toml").unwrap_or(false))
        .collect();
    entries.sort();
    for path in entries {
        let contents = std::fs::read_to_string(&path)?;
        let record: T = toml::from_str(&contents)?;
        records.push(record);
    }
    Ok(records)
}
