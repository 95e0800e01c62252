use std::error::Error;

use clap::Args;
use fprec_lab::{run_recurrence, RecurrenceConfig};

use super::emit;

#[derive(Args, Debug)]
pub struct RecurArgs {
    /// Number of terms, including the two seeds.
    #[arg(long)]
    pub terms: Option<usize>,
}

pub fn run(args: &RecurArgs, mut config: RecurrenceConfig) -> Result<(), Box<dyn Error>> {
    if let Some(terms) = args.terms {
        config.terms = terms;
    }
    config.validate()?;
    emit("recurrence", &config, run_recurrence(&config))
}
