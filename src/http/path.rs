//! Request target decoding and path safety checks.
//!
//! A target that survives [`resolve_path`] is relative to the document root,
//! never absolute, and never names a parent directory.

use percent_encoding::{percent_decode, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::http::response::StatusCode;

/// File served when the decoded target is empty.
pub const DEFAULT_DOCUMENT: &str = "index.html";

/// Bytes left alone in a `Location` value: the unreserved set plus `/`.
const LOCATION_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~')
    .remove(b'/');

#[derive(Debug, PartialEq, Eq)]
pub enum PathError {
    /// The decoded bytes are not valid UTF-8
    Undecodable,
    /// `..` in any spelling
    Traversal,
    /// Absolute, UNC or drive-qualified paths
    Absolute,
    /// Colons and NUL bytes
    IllegalCharacter,
}

impl PathError {
    pub fn status(&self) -> StatusCode {
        StatusCode::Forbidden
    }
}

/// Decodes `%XX` escapes and `+` into bytes.
///
/// Malformed escapes such as `%zz` or a trailing `%4` are kept as written.
///
/// ```
/// # use fileserve::http::path::decode_target;
/// assert_eq!(decode_target("my+file%21.txt"), b"my file!.txt");
/// assert_eq!(decode_target("100%zz"), b"100%zz");
/// ```
pub fn decode_target(target: &str) -> Vec<u8> {
    let spaced: Vec<u8> = target
        .bytes()
        .map(|b| if b == b'+' { b' ' } else { b })
        .collect();

    percent_decode(&spaced).collect()
}

/// Turns a raw request target into a safe path relative to the document root.
pub fn resolve_path(target: &str) -> Result<String, PathError> {
    let stripped = target.strip_prefix('/').unwrap_or(target);

    let decoded = String::from_utf8(decode_target(stripped))
        .map_err(|_| PathError::Undecodable)?;

    check_path(&decoded)?;

    if decoded.is_empty() {
        return Ok(DEFAULT_DOCUMENT.to_string());
    }

    Ok(decoded)
}

fn check_path(path: &str) -> Result<(), PathError> {
    let lowered = path.to_ascii_lowercase();
    if path.contains("..") || lowered.contains("%2e%2e") {
        return Err(PathError::Traversal);
    }

    if path.starts_with(['/', '\\']) {
        return Err(PathError::Absolute);
    }

    let bytes = path.as_bytes();
    if bytes.len() >= 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':' {
        return Err(PathError::Absolute);
    }

    if path.contains([':', '\0']) {
        return Err(PathError::IllegalCharacter);
    }

    Ok(())
}

/// Builds the `Location` value for a resolved path.
///
/// ```
/// # use fileserve::http::path::encode_location;
/// assert_eq!(encode_location("dir/my file.txt"), "/dir/my%20file.txt");
/// ```
pub fn encode_location(path: &str) -> String {
    format!("/{}", utf8_percent_encode(path, LOCATION_ENCODE_SET))
}
