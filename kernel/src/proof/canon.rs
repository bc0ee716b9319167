//! Canonical JSON bytes for search reports.
//!
//! Every digest in the workspace is computed over bytes produced here, so
//! two reports that are logically equal always hash equal.
//!
//! # Rules
//!
//! 1. Object keys sorted by byte order; arrays keep their order.
//! 2. Compact form, no whitespace.
//! 3. Strings escaped per RFC 8259 §7, control characters as `\u00XX`.
//! 4. Numbers must be integers. Floating-point quantities (values,
//!    potentials, alpha) are carried as strings from [`f64_token`] instead,
//!    which is exact and identical on every platform.

use std::io::Write;

use thiserror::Error;

/// Failure to canonicalize a JSON value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CanonError {
    /// A JSON number that is not an `i64`/`u64`.
    #[error("non-integer number in canonical JSON: {raw}")]
    NonIntegerNumber { raw: String },
}

/// Canonical bytes of `value`.
///
/// # Errors
///
/// Returns [`CanonError::NonIntegerNumber`] if `value` contains a float.
pub fn canonical_json_bytes(value: &serde_json::Value) -> Result<Vec<u8>, CanonError> {
    let mut out = Vec::new();
    emit(&mut out, value)?;
    Ok(out)
}

/// Exact, platform-independent token for an `f64`: `"f64:"` followed by
/// the 16 hex digits of its IEEE-754 bit pattern.
#[must_use]
pub fn f64_token(v: f64) -> String {
    format!("f64:{:016x}", v.to_bits())
}

/// Inverse of [`f64_token`]. `None` for anything it did not produce.
#[must_use]
pub fn parse_f64_token(token: &str) -> Option<f64> {
    let hex = token.strip_prefix("f64:")?;
    if hex.len() != 16 {
        return None;
    }
    u64::from_str_radix(hex, 16).ok().map(f64::from_bits)
}

fn emit(out: &mut Vec<u8>, value: &serde_json::Value) -> Result<(), CanonError> {
    use serde_json::Value;
    match value {
        Value::Null => out.extend_from_slice(b"null"),
        Value::Bool(true) => out.extend_from_slice(b"true"),
        Value::Bool(false) => out.extend_from_slice(b"false"),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                let _ = write!(out, "{i}");
            } else if let Some(u) = n.as_u64() {
                let _ = write!(out, "{u}");
            } else {
                return Err(CanonError::NonIntegerNumber { raw: n.to_string() });
            }
        }
        Value::String(s) => emit_str(out, s),
        Value::Array(items) => {
            out.push(b'[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push(b',');
                }
                emit(out, item)?;
            }
            out.push(b']');
        }
        Value::Object(map) => {
            let mut entries: Vec<(&String, &Value)> = map.iter().collect();
            entries.sort_by(|a, b| a.0.as_bytes().cmp(b.0.as_bytes()));
            out.push(b'{');
            for (i, (key, item)) in entries.into_iter().enumerate() {
                if i > 0 {
                    out.push(b',');
                }
                emit_str(out, key);
                out.push(b':');
                emit(out, item)?;
            }
            out.push(b'}');
        }
    }
    Ok(())
}

fn emit_str(out: &mut Vec<u8>, s: &str) {
    out.push(b'"');
    for ch in s.chars() {
        match ch {
            '"' => out.extend_from_slice(b"\\\""),
            '\\' => out.extend_from_slice(b"\\\\"),
            '\n' => out.extend_from_slice(b"\\n"),
            '\r' => out.extend_from_slice(b"\\r"),
            '\t' => out.extend_from_slice(b"\\t"),
            c if c < '\u{0020}' => {
                let _ = write!(out, "\\u{:04x}", u32::from(c));
            }
            c => {
                let mut buf = [0u8; 4];
                out.extend_from_slice(c.encode_utf8(&mut buf).as_bytes());
            }
        }
    }
    out.push(b'"');
}
