//! Canonical YAML normalization.
//!
//! YAML produced by different emitters differs in indentation, line wrapping,
//! quoting and key order even when the documents are equal. [`normalize`]
//! removes those differences by bridging the document through the JSON data
//! model and emitting it again with `serde_yaml`, the same round trip the
//! Kubernetes tooling performs.
//!
//! The canonical form has:
//! - two-space indentation, block style for non-empty collections
//! - mapping keys sorted lexicographically by byte value
//! - strings quoted only where a plain scalar would read as another type
//!
//! A document that canonicalizes to an empty mapping (`{}`) yields no bytes
//! at all, so callers never write placeholder files.

mod bridge;

#[cfg(test)]
mod tests;

use crate::error::{Error, Result};
use serde::Deserialize;
use tracing::trace;

/// Encoding of an empty mapping, collapsed to zero bytes.
const EMPTY_MAPPING: &[u8] = b"{}\n";

/// Normalize YAML bytes to their canonical serialization.
///
/// Only the first document of a multi-document stream is considered. Input
/// without any document (empty, whitespace, comments) is the null document.
///
/// # Errors
///
/// Returns [`Error::Parse`] if `input` is not valid UTF-8 YAML, or if the
/// document has no JSON equivalent (non-finite floats, collection keys).
pub fn normalize(input: &[u8]) -> Result<Vec<u8>> {
    let mut value = match serde_yaml::Deserializer::from_slice(input).next() {
        Some(document) => serde_yaml::Value::deserialize(document)?,
        None => serde_yaml::Value::Null,
    };
    value.apply_merge()?;

    let json = bridge::to_json(value)?;
    let encoded = serde_yaml::to_string(&json)?.into_bytes();

    trace!(
        input_len = input.len(),
        output_len = encoded.len(),
        "normalized yaml"
    );

    if encoded == EMPTY_MAPPING {
        return Ok(Vec::new());
    }
    Ok(encoded)
}

/// [`normalize`] for string input.
pub fn normalize_str(input: &str) -> Result<String> {
    let bytes = normalize(input.as_bytes())?;
    String::from_utf8(bytes).map_err(|e| Error::Parse(format!("non UTF-8 output: {}", e)))
}
