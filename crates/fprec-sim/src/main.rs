use std::error::Error;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{
    absorb::{self, AbsorbArgs},
    bits::{self, BitsArgs},
    cancel::{self, CancelArgs},
    config::{self, ConfigArgs},
    integrate::{self, DecayArgs, OscillateArgs},
    orbit::{self, OrbitArgs},
    order::{self, OrderArgs},
    recur::{self, RecurArgs},
    sum::{self, SumArgs},
    version::{self, VersionArgs},
};

mod commands;

#[derive(Parser, Debug)]
#[command(name = "fprec-sim", about = "Floating-point precision experiments")]
struct Cli {
    /// YAML configuration overriding the built-in experiment parameters.
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Log checkpoint traces and other debug events to stderr.
    #[arg(long, short, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Decompose and render a single value.
    Bits(BitsArgs),
    /// Compare naive and compensated repeated addition.
    Sum(SumArgs),
    /// Find where `+1` is absorbed by a power of ten.
    Absorb(AbsorbArgs),
    /// Solve an ill-conditioned 2x2 system in single precision.
    Cancel(CancelArgs),
    /// Compare direct powers with an unstable recurrence.
    Recur(RecurArgs),
    /// Integrate exponential decay with explicit Euler.
    Decay(DecayArgs),
    /// Integrate a harmonic oscillator with semi-implicit Euler.
    Oscillate(OscillateArgs),
    /// Step a two-body orbit.
    Orbit(OrbitArgs),
    /// Sum one multiset in two orders.
    Order(OrderArgs),
    /// Print the effective configuration as YAML.
    Config(ConfigArgs),
    /// Print version information.
    Version(VersionArgs),
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_env("FPREC_LOG")
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_env_filter(filter)
        .init();
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let lab = commands::load_lab_config(cli.config.as_deref())?;
    match cli.command {
        Command::Bits(args) => bits::run(&args),
        Command::Sum(args) => sum::run(&args, lab.summation),
        Command::Absorb(args) => absorb::run(&args, lab.absorption),
        Command::Cancel(args) => cancel::run(&args, lab.cancellation),
        Command::Recur(args) => recur::run(&args, lab.recurrence),
        Command::Decay(args) => integrate::run_decay(&args, lab.decay),
        Command::Oscillate(args) => integrate::run_oscillate(&args, lab.oscillator),
        Command::Orbit(args) => orbit::run(&args, lab.orbit),
        Command::Order(args) => order::run(&args, lab.order),
        Command::Config(args) => config::run(&args, &lab),
        Command::Version(args) => version::run(&args),
    }
}
