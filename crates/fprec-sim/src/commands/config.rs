use std::error::Error;

use clap::Args;
use fprec_lab::serde::to_yaml_string;
use fprec_lab::LabConfig;

#[derive(Args, Debug)]
pub struct ConfigArgs {
    /// Print the built-in defaults even when `--config` is given.
    #[arg(long)]
    pub defaults: bool,
}

pub fn run(args: &ConfigArgs, effective: &LabConfig) -> Result<(), Box<dyn Error>> {
    let yaml = if args.defaults {
        to_yaml_string(&LabConfig::default())?
    } else {
        to_yaml_string(effective)?
    };
    print!("{yaml}");
    Ok(())
}
