use std::error::Error;

use clap::Args;
use fprec_lab::{run_summation, SummationConfig};

use super::emit;

#[derive(Args, Debug)]
pub struct SumArgs {
    /// Term added at every step.
    #[arg(long, allow_hyphen_values = true)]
    pub value: Option<f64>,
    /// Number of additions.
    #[arg(long, short = 'n')]
    pub count: Option<u64>,
    /// Record a BitView trace every N additions (0 disables).
    #[arg(long)]
    pub trace_every: Option<u64>,
    /// Print the checkpoint traces as text lines before the JSON report.
    #[arg(long)]
    pub text: bool,
}

pub fn run(args: &SumArgs, mut config: SummationConfig) -> Result<(), Box<dyn Error>> {
    if let Some(value) = args.value {
        config.value = value;
    }
    if let Some(count) = args.count {
        config.count = count;
    }
    if let Some(every) = args.trace_every {
        config.trace_every = every;
    }
    config.validate()?;
    let report = run_summation(&config);
    if args.text {
        for record in &report.traces {
            for line in record.lines() {
                println!("{line}");
            }
        }
    }
    emit("summation", &config, report)
}
