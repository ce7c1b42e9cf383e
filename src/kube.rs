use anyhow::{Context, Result};
use std::path::Path;
use tokio::process::Command;

use crate::constants;
use crate::errors::FetchError;
use crate::secret::Secret;

/// Runs `kubectl get secret` and parses its JSON output.
#[derive(Debug, Clone)]
pub struct KubectlClient {
    program: String,
    context: Option<String>,
    kubeconfig: Option<String>,
}

impl KubectlClient {
    pub fn new(program: String, context: Option<String>, kubeconfig: Option<String>) -> Self {
        Self {
            program,
            context,
            kubeconfig,
        }
    }

    /// Command-line arguments for fetching `name`, in the order kubectl
    /// receives them.
    pub fn get_secret_args(&self, name: &str, namespace: Option<&str>) -> Vec<String> {
        let mut args = vec![
            "get".to_string(),
            "secret".to_string(),
            name.to_string(),
            "-o".to_string(),
            constants::kubectl::OUTPUT_FORMAT.to_string(),
        ];
        if let Some(ns) = namespace {
            args.push("--namespace".to_string());
            args.push(ns.to_string());
        }
        if let Some(context) = &self.context {
            args.push("--context".to_string());
            args.push(context.clone());
        }
        if let Some(kubeconfig) = &self.kubeconfig {
            args.push("--kubeconfig".to_string());
            args.push(kubeconfig.clone());
        }
        args
    }

    pub async fn get_secret(&self, name: &str, namespace: Option<&str>) -> Result<Secret> {
        let args = self.get_secret_args(name, namespace);
        tracing::debug!(program = %self.program, ?args, "running kubectl");

        let output = Command::new(&self.program)
            .args(&args)
            .kill_on_drop(true)
            .output()
            .await
            .map_err(|e| FetchError::Spawn {
                program: self.program.clone(),
                message: e.to_string(),
            })?;

        if !output.status.success() {
            return Err(FetchError::Command {
                program: self.program.clone(),
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            })
            .with_context(|| format!("Failed to get secret '{}'", name));
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        parse_secret(&stdout).with_context(|| format!("Failed to get secret '{}'", name))
    }
}

/// Parse a Kubernetes Secret JSON document.
pub fn parse_secret(json: &str) -> Result<Secret> {
    let secret: Secret =
        serde_json::from_str(json).map_err(|e| FetchError::Parse(e.to_string()))?;
    Ok(secret)
}

/// Read a Kubernetes Secret JSON document from disk.
pub async fn read_secret_file(path: &Path) -> Result<Secret> {
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| FetchError::Read(format!("{}: {}", path.display(), e)))?;
    parse_secret(&content).with_context(|| format!("Invalid secret file: {}", path.display()))
}
