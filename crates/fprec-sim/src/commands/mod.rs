pub mod absorb;
pub mod bits;
pub mod cancel;
pub mod config;
pub mod integrate;
pub mod orbit;
pub mod order;
pub mod recur;
pub mod sum;
pub mod version;

use std::error::Error;
use std::path::Path;

use fprec_lab::serde::to_canonical_json_bytes;
use fprec_lab::{envelope, load_config, LabConfig};
use serde::Serialize;
use tracing::info;

pub fn load_lab_config(path: Option<&Path>) -> Result<LabConfig, Box<dyn Error>> {
    match path {
        Some(path) => {
            info!(path = %path.display(), "loading lab configuration");
            Ok(load_config(path)?)
        }
        None => Ok(LabConfig::default()),
    }
}

/// Prints `report` wrapped in its provenance envelope as canonical JSON.
pub fn emit<C: Serialize, T: Serialize>(
    experiment: &str,
    config: &C,
    report: T,
) -> Result<(), Box<dyn Error>> {
    let wrapped = envelope(experiment, config, report)?;
    let json = to_canonical_json_bytes(&wrapped)?;
    println!("{}", String::from_utf8(json)?);
    Ok(())
}
