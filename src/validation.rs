//! Input validation utilities.
//!
//! This module validates positional arguments, secret names, namespaces, and
//! secret keys against Kubernetes naming rules before kubectl is invoked.

use regex::Regex;

use crate::constants;
use crate::errors::ValidationError;

/// Validate the positional argument count (`<secret> [key]`).
///
/// # Errors
///
/// Returns [`ValidationError::TooManyArgs`] with the fixed message
/// `accepts 2 arg(s), received N` when more than two arguments are given, and
/// [`ValidationError::MissingArgs`] when none are.
pub fn validate_args(args: &[String]) -> Result<(), ValidationError> {
    if args.len() > constants::validation::MAX_ARGS {
        return Err(ValidationError::TooManyArgs {
            received: args.len(),
        });
    }

    if args.is_empty() {
        return Err(ValidationError::MissingArgs);
    }

    Ok(())
}

fn check(
    value: &str,
    what: &str,
    max_len: usize,
    pattern: &str,
    rule: &str,
) -> Result<(), String> {
    if value.is_empty() {
        return Err(format!("{} cannot be empty", what));
    }

    if value.len() > max_len {
        return Err(format!(
            "{} cannot exceed {} characters (got {})",
            what,
            max_len,
            value.len()
        ));
    }

    let re = Regex::new(pattern).map_err(|e| format!("Failed to compile validation regex: {}", e))?;
    if !re.is_match(value) {
        return Err(format!("{} {}. Got: '{}'", what, rule, value));
    }

    Ok(())
}

/// Validate a secret name (lowercase RFC 1123 subdomain).
pub fn validate_secret_name(name: &str) -> Result<(), ValidationError> {
    check(
        name,
        "Secret name",
        constants::validation::MAX_SECRET_NAME_LENGTH,
        constants::validation::VALID_SECRET_NAME_PATTERN,
        "must consist of lowercase letters, numbers, '-' and '.'",
    )
    .map_err(ValidationError::SecretName)
}

/// Validate a namespace (lowercase RFC 1123 label).
pub fn validate_namespace(namespace: &str) -> Result<(), ValidationError> {
    check(
        namespace,
        "Namespace",
        constants::validation::MAX_NAMESPACE_LENGTH,
        constants::validation::VALID_NAMESPACE_PATTERN,
        "must consist of lowercase letters, numbers and '-'",
    )
    .map_err(ValidationError::Namespace)
}

/// Validate a secret data key.
///
/// Lookup stays exact and case-sensitive; this only rejects names Kubernetes
/// could never store.
pub fn validate_secret_key(key: &str) -> Result<(), ValidationError> {
    check(
        key,
        "Secret key",
        constants::validation::MAX_SECRET_KEY_LENGTH,
        constants::validation::VALID_SECRET_KEY_PATTERN,
        "can only contain letters, numbers, '-', '_' and '.'",
    )
    .map_err(ValidationError::SecretKey)
}
