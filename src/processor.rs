//! Secret processing: decides which entries to reveal and writes them out.

use std::io::{BufRead, Write};

use tracing::debug;

use crate::decoder;
use crate::errors::ViewSecretError;
use crate::secret::Secret;
use crate::selector::{self, Selection};

/// Reveal the entries of `secret`.
///
/// Decoded entries go to `out` as `KEY='value'` lines. Per-entry decode
/// failures, the key menu, and the single-key notice go to `err`, keeping
/// `out` safe to source from a shell. `input` is read at most once, and only
/// when neither `explicit_key` nor `decode_all` is given and the secret holds
/// more than one key.
///
/// # Errors
///
/// Returns an error if:
/// - The secret has no entries
/// - `explicit_key` is not a key of the secret
/// - The interactive selection is not recognized
/// - The sole requested entry fails to decode
/// - Any entry fails to decode in decode-all mode (after all others are written)
pub fn process_secret<W: Write, E: Write, R: BufRead>(
    out: &mut W,
    err: &mut E,
    input: &mut R,
    secret: &Secret,
    explicit_key: &str,
    decode_all: bool,
) -> Result<(), ViewSecretError> {
    let data = &secret.data;

    if data.is_empty() {
        return Err(ViewSecretError::SecretEmpty);
    }

    if !explicit_key.is_empty() {
        return reveal_key(out, err, secret, explicit_key);
    }

    if decode_all {
        return reveal_all(out, err, secret);
    }

    let names: Vec<&str> = data.keys().collect();
    match selector::select_interactively(err, input, &names)? {
        Selection::AllEntries => reveal_all(out, err, secret),
        Selection::NamedEntry(name) => reveal_key(out, err, secret, &name),
        Selection::QuitNoAction => {
            debug!("selection quit, nothing decoded");
            Ok(())
        }
    }
}

fn reveal_key<W: Write, E: Write>(
    out: &mut W,
    err: &mut E,
    secret: &Secret,
    key: &str,
) -> Result<(), ViewSecretError> {
    let value = secret
        .data
        .get(key)
        .ok_or_else(|| ViewSecretError::SecretKeyNotFound(key.to_string()))?;

    debug!(key, "decoding single key");
    match decoder::decode_entry(key, value) {
        Ok(text) => {
            writeln!(out, "{}", decoder::format_entry(key, &text))?;
            Ok(())
        }
        Err(e) => {
            writeln!(err, "error: {}", e)?;
            Err(e)
        }
    }
}

fn reveal_all<W: Write, E: Write>(
    out: &mut W,
    err: &mut E,
    secret: &Secret,
) -> Result<(), ViewSecretError> {
    let mut failed = Vec::new();

    debug!(count = secret.data.len(), "decoding all keys");
    for (key, value) in secret.data.iter() {
        match decoder::decode_entry(key, value) {
            Ok(text) => writeln!(out, "{}", decoder::format_entry(key, &text))?,
            Err(e) => {
                writeln!(err, "error: {}", e)?;
                failed.push(key.to_string());
            }
        }
    }

    if failed.is_empty() {
        Ok(())
    } else {
        Err(ViewSecretError::PartialDecode {
            failed,
            total: secret.data.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::secret::SecretData;
    use std::io::Cursor;

    fn secret(entries: &[(&str, &str)]) -> Secret {
        Secret::from_data(entries.iter().copied().collect::<SecretData>())
    }

    fn run(
        secret: &Secret,
        key: &str,
        all: bool,
        feed: &str,
    ) -> (Result<(), ViewSecretError>, String, String) {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let mut input = Cursor::new(feed.as_bytes().to_vec());
        let res = process_secret(&mut out, &mut err, &mut input, secret, key, all);
        (
            res,
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    #[test]
    fn test_explicit_key_wins_over_decode_all() {
        let s = secret(&[("A", "YQ=="), ("B", "Yg==")]);
        let (res, out, err) = run(&s, "B", true, "");
        assert!(res.is_ok());
        assert_eq!(out, "B='b'\n");
        assert!(err.is_empty());
    }

    #[test]
    fn test_explicit_key_decode_failure() {
        let s = secret(&[("A", "YQ=="), ("BAD", "***")]);
        let (res, out, err) = run(&s, "BAD", false, "");
        assert!(matches!(res, Err(ViewSecretError::Decode { ref key, .. }) if key == "BAD"));
        assert!(out.is_empty());
        assert!(err.contains("BAD"));
    }

    #[test]
    fn test_decode_all_continues_past_failures() {
        let s = secret(&[("A", "YQ=="), ("BAD", "***"), ("C", "Yw==")]);
        let (res, out, err) = run(&s, "", true, "");
        assert_eq!(out, "A='a'\nC='c'\n");
        assert_eq!(err.lines().count(), 1);
        match res {
            Err(ViewSecretError::PartialDecode { failed, total }) => {
                assert_eq!(failed, vec!["BAD".to_string()]);
                assert_eq!(total, 3);
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_quit_writes_nothing_to_out() {
        let s = secret(&[("A", "YQ=="), ("B", "Yg==")]);
        let (res, out, _) = run(&s, "", false, "q\n");
        assert!(res.is_ok());
        assert!(out.is_empty());
    }
}
