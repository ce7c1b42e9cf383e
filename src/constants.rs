//! Application constants for kubectl invocation, validation rules, and prompts.
//!
//! This module contains all constant values used throughout the application,
//! including the kubectl command line, Kubernetes naming constraints, and the
//! fixed strings of the interactive selection protocol.

/// kubectl invocation constants.
pub mod kubectl {
    /// Default kubectl binary, resolved through `PATH`.
    pub const DEFAULT_BINARY: &str = "kubectl";

    /// Output format requested from `kubectl get secret`.
    pub const OUTPUT_FORMAT: &str = "json";
}

/// Kubernetes name validation constants.
pub mod validation {
    /// Maximum number of positional arguments (`<secret> [key]`).
    pub const MAX_ARGS: usize = 2;

    /// Maximum length for a secret name (DNS subdomain).
    pub const MAX_SECRET_NAME_LENGTH: usize = 253;

    /// Maximum length for a namespace (DNS label).
    pub const MAX_NAMESPACE_LENGTH: usize = 63;

    /// Maximum length for a secret data key.
    pub const MAX_SECRET_KEY_LENGTH: usize = 253;

    /// Secret names are lowercase RFC 1123 subdomains.
    pub const VALID_SECRET_NAME_PATTERN: &str =
        r"^[a-z0-9]([-a-z0-9]*[a-z0-9])?(\.[a-z0-9]([-a-z0-9]*[a-z0-9])?)*$";

    /// Namespaces are lowercase RFC 1123 labels.
    pub const VALID_NAMESPACE_PATTERN: &str = r"^[a-z0-9]([-a-z0-9]*[a-z0-9])?$";

    /// Secret data keys: alphanumerics, `-`, `_` and `.`.
    pub const VALID_SECRET_KEY_PATTERN: &str = r"^[-._a-zA-Z0-9]+$";
}

/// Interactive selection constants.
pub mod prompt {
    /// Notice printed, followed by the key name, when the secret holds a single key.
    pub const SINGLE_KEY_DESCRIPTION: &str = "Viewing only available key:";

    /// Header line of the key menu.
    pub const MENU_HEADER: &str = "Multiple keys found in secret, select one to decode:";

    /// Prompt printed after the menu, before reading a line.
    pub const SELECTION_PROMPT: &str = "Selection [all]: ";

    /// Inputs that select every key.
    pub const ALL_TOKENS: &[&str] = &["a", "all", "*"];

    /// Inputs that exit without decoding anything.
    pub const QUIT_TOKENS: &[&str] = &["q", "quit", "exit"];
}

/// Configuration file constants.
pub mod config {
    /// Directory name under the XDG config home.
    pub const APP_DIR: &str = "view-secret";

    /// Config file name inside [`APP_DIR`].
    pub const FILE_NAME: &str = "config.toml";

    /// Config file name looked up in the current directory.
    pub const LOCAL_FILE_NAME: &str = "view-secret.toml";

    /// Environment variable naming an explicit config file.
    pub const PATH_ENV: &str = "VIEW_SECRET_CONFIG";
}
