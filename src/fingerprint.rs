//! Request Fingerprinting Module
//!
//! Turns serializable request descriptors into stable, fixed-length cache
//! keys. A descriptor is rendered to canonical JSON (object keys sorted at
//! every nesting level) and the rendering is hashed with SHA-256, so two
//! descriptors share a key exactly when their canonical forms are
//! byte-identical.

use serde::Serialize;
use serde_json::{Map, Value};
use sha2::{Digest, Sha256};

use crate::error::Result;

// == Constants ==

/// Length in characters of every fingerprint (hex-encoded SHA-256 digest).
pub const FINGERPRINT_LEN: usize = 64;

// == Fingerprinting ==

/// Computes the cache key for a serializable request descriptor.
///
/// The same descriptor always produces the same key, regardless of map
/// insertion order or struct field declaration order. Fails only when the
/// descriptor cannot be serialized to JSON, for example a map whose keys do
/// not serialize to strings or a `Serialize` impl that errors.
///
/// # Arguments
/// * `value` - The request descriptor to fingerprint
///
/// # Returns
/// A lowercase hex string of [`FINGERPRINT_LEN`] characters.
pub fn fingerprint<T>(value: &T) -> Result<String>
where
    T: Serialize + ?Sized,
{
    let canonical = canonical_json(value)?;
    Ok(digest_hex(canonical.as_bytes()))
}

/// Computes the cache key for a pre-rendered request string.
///
/// Hashes the raw bytes of `text`, not its JSON encoding, so this is not
/// interchangeable with `fingerprint(&text)`. Useful when the caller already
/// has a canonical textual form of the request.
pub fn fingerprint_str(text: &str) -> String {
    digest_hex(text.as_bytes())
}

// == Canonical Serialization ==

/// Renders a value as canonical JSON.
fn canonical_json<T>(value: &T) -> Result<String>
where
    T: Serialize + ?Sized,
{
    let value = serde_json::to_value(value)?;
    Ok(serde_json::to_string(&sort_keys(value))?)
}

/// Rewrites a JSON value with object keys in lexicographic order, recursively.
///
/// The ordering is applied explicitly rather than trusting the map backing,
/// so fingerprints stay stable even if the value ever passes through an
/// insertion-order-preserving map.
fn sort_keys(value: Value) -> Value {
    match value {
        Value::Object(object) => {
            let mut fields: Vec<(String, Value)> = object.into_iter().collect();
            fields.sort_by(|a, b| a.0.cmp(&b.0));

            let mut sorted = Map::new();
            for (key, field) in fields {
                sorted.insert(key, sort_keys(field));
            }
            Value::Object(sorted)
        }
        Value::Array(items) => Value::Array(items.into_iter().map(sort_keys).collect()),
        other => other,
    }
}

// == Hashing ==

/// Hex-encoded SHA-256 digest of the given bytes.
fn digest_hex(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    format!("{:x}", hasher.finalize())
}
