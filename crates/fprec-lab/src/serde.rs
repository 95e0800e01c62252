//! Encoding of reports (sorted-key JSON for hashing) and lab configs (YAML).

use std::collections::BTreeMap;
use std::iter::FromIterator;

use fprec_core::errors::{ErrorInfo, FprecError};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::{Map, Value};

fn serde_error(code: &str, err: impl ToString) -> FprecError {
    FprecError::Serde(ErrorInfo::new(code, err.to_string()))
}

fn canonicalize(value: Value) -> Value {
    match value {
        Value::Object(map) => {
            let ordered = map
                .into_iter()
                .map(|(key, value)| (key, canonicalize(value)))
                .collect::<BTreeMap<_, _>>();
            Value::Object(Map::from_iter(ordered))
        }
        Value::Array(values) => Value::Array(values.into_iter().map(canonicalize).collect()),
        other => other,
    }
}

/// Serializes a value into canonical JSON bytes with sorted object keys.
pub fn to_canonical_json_bytes<T: Serialize>(value: &T) -> Result<Vec<u8>, FprecError> {
    let value = serde_json::to_value(value).map_err(|err| serde_error("json_serialize", err))?;
    let canonical = canonicalize(value);
    let mut bytes = Vec::new();
    serde_json::to_writer(&mut bytes, &canonical).map_err(|err| serde_error("json_write", err))?;
    Ok(bytes)
}

/// Serializes a value into YAML.
pub fn to_yaml_string<T: Serialize>(value: &T) -> Result<String, FprecError> {
    serde_yaml::to_string(value).map_err(|err| serde_error("yaml_serialize", err))
}

/// Deserializes a YAML payload; schema failures are reported as config errors.
pub fn from_yaml_slice<T: DeserializeOwned>(data: &[u8]) -> Result<T, FprecError> {
    serde_yaml::from_slice(data).map_err(|err| {
        FprecError::Config(
            ErrorInfo::new("yaml_deserialize", err.to_string())
                .with_hint("see `fprec-sim config` for the expected layout"),
        )
    })
}
