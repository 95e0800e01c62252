use std::error::Error;

use clap::Args;
use fprec_lab::{run_absorption_all, AbsorptionConfig, ExponentRange};

use super::emit;

#[derive(Args, Debug)]
pub struct AbsorbArgs {
    /// Single precision range as `BEGIN:END`.
    #[arg(long, value_parser = parse_range, allow_hyphen_values = true)]
    pub single: Option<ExponentRange>,
    /// Double precision range as `BEGIN:END`.
    #[arg(long, value_parser = parse_range, allow_hyphen_values = true)]
    pub double: Option<ExponentRange>,
}

fn parse_range(text: &str) -> Result<ExponentRange, String> {
    let (begin, end) = text
        .split_once(':')
        .ok_or_else(|| format!("expected BEGIN:END, got `{text}`"))?;
    let begin = begin.trim().parse().map_err(|err| format!("begin: {err}"))?;
    let end = end.trim().parse().map_err(|err| format!("end: {err}"))?;
    Ok(ExponentRange { begin, end })
}

pub fn run(args: &AbsorbArgs, mut config: AbsorptionConfig) -> Result<(), Box<dyn Error>> {
    if let Some(range) = args.single {
        config.single = range;
    }
    if let Some(range) = args.double {
        config.double = range;
    }
    config.validate()?;
    emit("absorption", &config, run_absorption_all(&config))
}
