use std::error::Error;

use clap::Args;
use fprec_lab::{run_cancellation, CancellationConfig};

use super::emit;

#[derive(Args, Debug)]
pub struct CancelArgs {
    /// Coefficients `a b c d e f` of `a x + b y = e`, `c x + d y = f`.
    #[arg(long, num_args = 6, allow_hyphen_values = true)]
    pub coefficients: Option<Vec<f32>>,
}

pub fn run(args: &CancelArgs, mut config: CancellationConfig) -> Result<(), Box<dyn Error>> {
    if let Some(values) = &args.coefficients {
        if let [a, b, c, d, e, f] = values[..] {
            config = CancellationConfig { a, b, c, d, e, f };
        }
    }
    config.validate()?;
    emit("cancellation", &config, run_cancellation(&config))
}
