//! # kubectl view-secret
//!
//! A kubectl plugin that decodes the base64 entries of a Kubernetes secret
//! and prints them as shell-sourceable `KEY='value'` lines.
//!
//! This library provides functionality to:
//! - Decide which entries of a secret to reveal (explicit key, all, or interactive)
//! - Decode entries and report per-entry failures
//! - Fetch secrets through kubectl or from a JSON file
//! - Load optional configuration defaults
//!
//! ## Modules
//!
//! - [`processor`] - Decision tree that reveals a secret's entries
//! - [`selector`] - Interactive key selection
//! - [`decoder`] - Base64 decoding and entry rendering
//! - [`secret`] - Secret data model
//! - [`kube`] - kubectl invocation and secret JSON parsing
//! - [`app_deps`] - Fetcher abstraction used by [`app`]
//! - [`config`] - Configuration file parsing
//! - [`paths`] - XDG-compliant path resolution
//! - [`validation`] - Argument and name validation
//! - [`error`] - Error formatting utilities
//! - [`errors`] - Structured error types
//! - [`constants`] - Application constants

pub mod app;
pub mod app_deps;
pub mod cli;
pub mod config;
pub mod constants;
pub mod decoder;
pub mod error;
pub mod errors;
pub mod kube;
pub mod paths;
pub mod processor;
pub mod secret;
pub mod selector;
pub mod validation;
