use std::path::PathBuf;

use anyhow::Context;
use asteroid_deflection::common::time::jd_after_years;
use asteroid_deflection::export::elements::ElementsRecord;
use asteroid_deflection::export::state::StateRecord;
use asteroid_deflection::export::summary::SummaryRecord;
use asteroid_deflection::export::track::TrackRecord;
use asteroid_deflection::export::{write_json, writer_for_path};
use asteroid_deflection::impulsive::DeflectionScenario;
use asteroid_deflection::orbits::{OrbitalState, propagate_about, sample_trajectory};
use asteroid_deflection::scenario;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Keplerian propagation and kinetic deflection of small bodies"
)]
struct Cli {
    /// Scenario file (TOML, YAML list, or directory of TOML files); defaults to 1981 Midas
    #[arg(long, global = true)]
    scenario: Option<PathBuf>,

    /// Scenario name to pick from a multi-scenario file (case-insensitive)
    #[arg(long, global = true)]
    name: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Heliocentric state (AU, km/s) a number of years after the element epoch
    Orbit {
        /// Julian years since the element epoch (may be negative)
        #[arg(long, allow_hyphen_values = true)]
        years: f64,

        /// Propagate the post-impact elements instead of the baseline
        #[arg(long, default_value_t = false)]
        deflected: bool,
    },
    /// ΔV delivered and resulting change in orbital period
    Summary,
    /// Baseline and deflected element sets
    Elements,
    /// Baseline and deflected trajectories sampled over a window
    Track {
        /// Window start in years since epoch
        #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
        start_years: f64,

        /// Window end in years since epoch (defaults to the scenario's deflection window)
        #[arg(long, allow_hyphen_values = true)]
        end_years: Option<f64>,

        /// Sample spacing in days
        #[arg(long, default_value_t = 5.0)]
        step_days: f64,

        /// Output path (`-` for stdout)
        #[arg(long, default_value = "-")]
        output: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let scenario = scenario::load(cli.scenario.as_deref(), cli.name.as_deref())
        .context("failed to load scenario")?;
    tracing::debug!(scenario = %scenario.name, "loaded scenario");

    let mut stdout = writer_for_path(&PathBuf::from("-"))?;
    match cli.command {
        Command::Orbit { years, deflected } => {
            let elements = if deflected {
                scenario.deflected_elements()?
            } else {
                scenario.elements
            };
            let jd = jd_after_years(elements.epoch_jd, years);
            let state = propagate_about(&elements, &scenario.body, jd)?;
            write_json(stdout.as_mut(), &StateRecord::from(&state))?;
        }
        Command::Summary => {
            let outcome = scenario.evaluate()?;
            write_json(stdout.as_mut(), &SummaryRecord::from(&outcome.summary))?;
        }
        Command::Elements => {
            let outcome = scenario.evaluate()?;
            write_json(
                stdout.as_mut(),
                &ElementsRecord {
                    baseline: outcome.baseline,
                    deflected: outcome.deflected,
                },
            )?;
        }
        Command::Track {
            start_years,
            end_years,
            step_days,
            output,
        } => {
            let end_years = end_years.unwrap_or(scenario.window_years);
            let track = build_track(&scenario, start_years, end_years, step_days)?;
            let mut writer = writer_for_path(&output)
                .with_context(|| format!("failed to open {}", output.display()))?;
            write_json(writer.as_mut(), &track)?;
            tracing::info!(
                samples = track.baseline.len(),
                output = %output.display(),
                "wrote trajectory track"
            );
        }
    }

    Ok(())
}

/// Sample both trajectories; before the impact epoch the deflected track follows the baseline.
fn build_track(
    scenario: &DeflectionScenario,
    start_years: f64,
    end_years: f64,
    step_days: f64,
) -> anyhow::Result<TrackRecord> {
    let epoch = scenario.elements.epoch_jd;
    let start_jd = jd_after_years(epoch, start_years);
    let end_jd = jd_after_years(epoch, end_years);
    let impact_jd = jd_after_years(epoch, scenario.years_to_impact);

    let baseline = sample_trajectory(
        &scenario.elements,
        &scenario.body,
        start_jd,
        end_jd,
        step_days,
    )?;
    let deflected_elements = scenario.deflected_elements()?;
    let deflected = baseline
        .iter()
        .map(|state| {
            if state.julian_date < impact_jd {
                Ok(*state)
            } else {
                propagate_about(&deflected_elements, &scenario.body, state.julian_date)
            }
        })
        .collect::<Result<Vec<OrbitalState>, _>>()?;

    Ok(TrackRecord::new(
        &scenario.name,
        impact_jd,
        &baseline,
        &deflected,
    ))
}
