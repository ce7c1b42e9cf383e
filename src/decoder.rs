//! Base64 decoding of secret values.

use base64::{Engine, engine::general_purpose};

use crate::errors::ViewSecretError;

/// Decode standard, padded base64 text into raw bytes.
pub fn decode(value: &str) -> Result<Vec<u8>, base64::DecodeError> {
    general_purpose::STANDARD.decode(value)
}

/// Decode an entry's value into display text.
///
/// Invalid UTF-8 is replaced lossily and trailing line endings are dropped,
/// so a value stored as `"secret\n"` renders as `secret`.
pub fn decode_entry(key: &str, value: &str) -> Result<String, ViewSecretError> {
    let bytes = decode(value).map_err(|reason| ViewSecretError::Decode {
        key: key.to_string(),
        reason,
    })?;
    let text = String::from_utf8_lossy(&bytes);
    Ok(text.trim_end_matches(['\n', '\r']).to_string())
}

/// Render one revealed entry as a shell-sourceable `KEY='value'` line.
///
/// Values are not escaped; a value containing `'` produces a line the shell
/// will not parse.
pub fn format_entry(key: &str, value: &str) -> String {
    format!("{}='{}'", key, value)
}
