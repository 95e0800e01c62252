//! Provenance envelopes wrapped around every experiment report.

use fprec_core::errors::FprecError;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::serde::to_canonical_json_bytes;

/// Computes a stable SHA256 hash for the provided serializable value.
pub fn stable_hash_string<T: Serialize>(value: &T) -> Result<String, FprecError> {
    let bytes = to_canonical_json_bytes(value)?;
    let digest = Sha256::digest(&bytes);
    Ok(format!("{:x}", digest))
}

/// Identifies the experiment, tool version and parameters behind a report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Provenance {
    /// Experiment name (`summation`, `orbit`, ...).
    pub experiment: String,
    /// Version of the lab crate that produced the report.
    pub tool_version: String,
    /// Canonical hash of the effective configuration section.
    pub config_hash: String,
}

/// Report payload paired with its provenance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    /// Where the report came from.
    pub provenance: Provenance,
    /// Experiment output.
    pub report: T,
}

/// Wraps `report` with the provenance of `config`.
pub fn envelope<C: Serialize, T>(
    experiment: &str,
    config: &C,
    report: T,
) -> Result<Envelope<T>, FprecError> {
    Ok(Envelope {
        provenance: Provenance {
            experiment: experiment.to_string(),
            tool_version: env!("CARGO_PKG_VERSION").to_string(),
            config_hash: stable_hash_string(config)?,
        },
        report,
    })
}
