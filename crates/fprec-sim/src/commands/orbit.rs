use std::error::Error;

use clap::Args;
use fprec_core::PrecisionClass;
use fprec_lab::{run_orbit_configured, OrbitConfig};

use super::emit;

#[derive(Args, Debug)]
pub struct OrbitArgs {
    /// Length of the integration interval.
    #[arg(long)]
    pub time_limit: Option<f64>,
    /// Number of steps.
    #[arg(long, short = 'n')]
    pub steps: Option<u64>,
    /// Sample every N steps (0 keeps only the final state).
    #[arg(long)]
    pub sample_every: Option<u64>,
    /// Working precision.
    #[arg(long)]
    pub precision: Option<PrecisionClass>,
}

pub fn run(args: &OrbitArgs, mut config: OrbitConfig) -> Result<(), Box<dyn Error>> {
    if let Some(time_limit) = args.time_limit {
        config.time_limit = time_limit;
    }
    if let Some(steps) = args.steps {
        config.steps = steps;
    }
    if let Some(every) = args.sample_every {
        config.sample_every = every;
    }
    if let Some(precision) = args.precision {
        config.precision = precision;
    }
    config.validate()?;
    emit("orbit", &config, run_orbit_configured(&config))
}
