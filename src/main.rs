//! sandrisk - Sand Production Risk Assessment CLI
//!
//! Evaluates sand production risk for a well from measurements supplied on
//! the command line and prints the assessment as text or JSON.
//!
//! # Usage
//!
//! ```bash
//! # Basic threshold assessment
//! sandrisk basic --formation-strength 2999 --well-depth 8001 --flow-rate 501
//!
//! # Pressure-based assessment
//! sandrisk advanced --formation-strength 1000 --flow-rate 20 \
//!     --reservoir-pressure 1000 --bottomhole-pressure 700
//!
//! # Weighted-score assessment (blank fields take the documented defaults)
//! sandrisk score --flow-rate 900
//!
//! # Machine-readable output
//! sandrisk --json score --flow-rate 2500 --sand-concentration 500
//! ```
//!
//! # Environment Variables
//!
//! - `SANDRISK_CONFIG`: Path to a TOML threshold config (default: `./sandrisk.toml`)
//! - `RUST_LOG`: Logging level (default: info)

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::debug;

use sandrisk::classifier;
use sandrisk::config::RiskConfig;
use sandrisk::input;
use sandrisk::types::{RiskAssessment, WellInputs};

// ============================================================================
// CLI Arguments
// ============================================================================

#[derive(Parser, Debug)]
#[command(name = "sandrisk")]
#[command(about = "Sand production risk assessment for oil and gas wells")]
#[command(version)]
struct CliArgs {
    /// Path to a TOML threshold config.
    /// Falls back to $SANDRISK_CONFIG, then ./sandrisk.toml, then built-in defaults.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Emit the assessment as JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand, Debug)]
enum Command {
    /// Classify from formation strength, well depth, and flow rate
    Basic {
        /// Formation strength (psi)
        #[arg(long, value_name = "PSI")]
        formation_strength: String,

        /// Well depth (ft)
        #[arg(long, value_name = "FT")]
        well_depth: String,

        /// Flow rate (bbl/day)
        #[arg(long, value_name = "BBL_DAY")]
        flow_rate: String,
    },

    /// Classify from the pressure differential and a Mohr-Coulomb shear check
    Advanced {
        /// Formation strength (psi)
        #[arg(long, value_name = "PSI")]
        formation_strength: String,

        /// Flow rate (bbl/day)
        #[arg(long, value_name = "BBL_DAY")]
        flow_rate: String,

        /// Reservoir pressure (psi)
        #[arg(long, value_name = "PSI")]
        reservoir_pressure: String,

        /// Flowing bottomhole pressure (psi)
        #[arg(long, value_name = "PSI")]
        bottomhole_pressure: String,
    },

    /// Classify from the weighted linear risk score
    Score {
        /// Flow rate (bbl/day); the configured default applies when omitted
        #[arg(long, value_name = "BBL_DAY")]
        flow_rate: Option<String>,

        /// Sand concentration (ppm); the configured default applies when omitted
        #[arg(long, value_name = "PPM")]
        sand_concentration: Option<String>,
    },
}

// ============================================================================
// Entry Point
// ============================================================================

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = CliArgs::parse();

    let config = match &args.config {
        Some(path) => RiskConfig::load_from_file(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => RiskConfig::load(),
    };

    let inputs = build_inputs(&args.command, &config)?;
    debug!(?inputs, "Evaluating assessment request");

    let assessment = classifier::assess(&inputs, &config)
        .context("risk classification failed")?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&assessment)?);
    } else {
        render_text(&assessment);
    }

    Ok(())
}

/// Build the mode-tagged input record from the raw command-line fields.
///
/// All numeric validation goes through the input-parsing collaborator so
/// the CLI rejects bad values the same way any other front-end would.
fn build_inputs(command: &Command, config: &RiskConfig) -> Result<WellInputs> {
    let inputs = match command {
        Command::Basic {
            formation_strength,
            well_depth,
            flow_rate,
        } => input::well_inputs_from_form(formation_strength, well_depth, flow_rate, "", "")?,

        Command::Advanced {
            formation_strength,
            flow_rate,
            reservoir_pressure,
            bottomhole_pressure,
        } => input::well_inputs_from_form(
            formation_strength,
            "",
            flow_rate,
            reservoir_pressure,
            bottomhole_pressure,
        )?,

        Command::Score {
            flow_rate,
            sand_concentration,
        } => WellInputs::Score(input::score_inputs_from_form(
            flow_rate.as_deref().unwrap_or(""),
            sand_concentration.as_deref().unwrap_or(""),
            &config.defaults,
        )?),
    };
    Ok(inputs)
}

/// Render the assessment the way the form UI displayed it.
fn render_text(assessment: &RiskAssessment) {
    println!("Sand Production Risk Level: {}", assessment.label());
    println!("{}", assessment.explanation);
    if let Some(recommendation) = &assessment.recommendation {
        println!("{recommendation}");
    }
    if let Some(score) = assessment.risk_score {
        println!("Risk score: {score:.1}");
    }
    println!("Plot point: ({:.2}, {:.2})", assessment.plot.x, assessment.plot.y);
}
