//! Canonical hashing of noise specs.
//!
//! ```text
//! spec_hash = hex(BLAKE3(canonical_json(spec)))
//! ```
//!
//! The canonical form is compact JSON with object keys in sorted order, so
//! two specs that differ only in key order or whitespace hash identically.

use crate::error::SpecError;
use crate::noise::NoiseSpec;

/// Computes the canonical BLAKE3 hash of a noise spec.
///
/// # Returns
/// * A 64-character lowercase hexadecimal string
pub fn canonical_spec_hash(spec: &NoiseSpec) -> Result<String, SpecError> {
    let value = spec.to_value()?;
    canonical_value_hash(&value)
}

/// Computes the canonical BLAKE3 hash of a JSON value.
pub fn canonical_value_hash(value: &serde_json::Value) -> Result<String, SpecError> {
    let canonical = canonicalize_json(value)?;
    let hash = blake3::hash(canonical.as_bytes());
    Ok(hash.to_hex().to_string())
}

/// Renders a JSON value with sorted object keys and no whitespace.
pub fn canonicalize_json(value: &serde_json::Value) -> Result<String, SpecError> {
    match value {
        serde_json::Value::Object(map) => {
            let mut keys: Vec<&String> = map.keys().collect();
            keys.sort();

            let mut out = String::from("{");
            for (i, key) in keys.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                out.push_str(&serde_json::to_string(key)?);
                out.push(':');
                out.push_str(&canonicalize_json(&map[key.as_str()])?);
            }
            out.push('}');
            Ok(out)
        }
        serde_json::Value::Array(items) => {
            let parts = items
                .iter()
                .map(canonicalize_json)
                .collect::<Result<Vec<_>, _>>()?;
            Ok(format!("[{}]", parts.join(",")))
        }
        other => Ok(serde_json::to_string(other)?),
    }
}
