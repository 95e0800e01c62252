use std::error::Error;

use clap::Args;
use fprec_lab::{run_order, OrderConfig};

use super::emit;

#[derive(Args, Debug)]
pub struct OrderArgs {
    /// Number of terms.
    #[arg(long)]
    pub terms: Option<usize>,
    /// Shuffle seed.
    #[arg(long)]
    pub seed: Option<u64>,
}

pub fn run(args: &OrderArgs, mut config: OrderConfig) -> Result<(), Box<dyn Error>> {
    if let Some(terms) = args.terms {
        config.terms = terms;
    }
    if let Some(seed) = args.seed {
        config.seed = seed;
    }
    config.validate()?;
    emit("order", &config, run_order(&config))
}
