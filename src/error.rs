//! Reporting of application errors on the terminal.

use anyhow::Error;

use crate::errors::ViewSecretError;

/// Exit code for a failed run.
pub const EXIT_FAILURE: i32 = 1;

/// Exit code when decode-all printed some keys but not all of them.
pub const EXIT_PARTIAL: i32 = 2;

fn partial_failure(error: &Error) -> bool {
    error
        .downcast_ref::<ViewSecretError>()
        .is_some_and(ViewSecretError::is_partial)
}

/// One-line description of `error` and its causes, outermost first.
///
/// A partial decode-all failure also says that the decodable keys were
/// already printed, so the operator does not discard that output.
///
/// ```
/// use anyhow::anyhow;
/// use view_secret::error::describe_error;
///
/// let err = anyhow!("secrets \"db\" not found").context("Failed to fetch secret 'db'");
/// assert_eq!(describe_error(&err), "Failed to fetch secret 'db': secrets \"db\" not found");
/// ```
pub fn describe_error(error: &Error) -> String {
    let message = format!("{:#}", error);
    if partial_failure(error) {
        format!("{} (remaining keys were printed)", message)
    } else {
        message
    }
}

/// Process exit code for `error`.
pub fn exit_code(error: &Error) -> i32 {
    if partial_failure(error) {
        EXIT_PARTIAL
    } else {
        EXIT_FAILURE
    }
}
