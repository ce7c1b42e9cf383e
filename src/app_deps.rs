use anyhow::Result;
use async_trait::async_trait;
use std::path::PathBuf;

use crate::{config, kube, secret};

/// Source of the secret under inspection.
#[async_trait]
pub trait SecretFetcher: Send + Sync {
    async fn fetch_secret(&self, name: &str, namespace: Option<&str>) -> Result<secret::Secret>;
}

pub struct KubectlFetcher {
    inner: kube::KubectlClient,
}

impl KubectlFetcher {
    pub fn new(inner: kube::KubectlClient) -> Self {
        Self { inner }
    }

    /// Build a fetcher from config defaults overridden by CLI values.
    pub fn from_config(
        config: &config::Config,
        context: Option<String>,
        kubeconfig: Option<String>,
    ) -> Self {
        Self::new(kube::KubectlClient::new(
            config.kubectl_binary().to_string(),
            context.or_else(|| config.context.clone()),
            kubeconfig.or_else(|| config.kubeconfig.clone()),
        ))
    }
}

#[async_trait]
impl SecretFetcher for KubectlFetcher {
    async fn fetch_secret(&self, name: &str, namespace: Option<&str>) -> Result<secret::Secret> {
        self.inner.get_secret(name, namespace).await
    }
}

/// Reads the secret from a JSON file instead of a cluster.
pub struct FileFetcher {
    path: PathBuf,
}

impl FileFetcher {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

#[async_trait]
impl SecretFetcher for FileFetcher {
    async fn fetch_secret(&self, name: &str, _namespace: Option<&str>) -> Result<secret::Secret> {
        let secret = kube::read_secret_file(&self.path).await?;
        if !secret.name.is_empty() && secret.name != name {
            tracing::warn!(
                requested = name,
                found = %secret.name,
                "secret file holds a differently named secret"
            );
        }
        Ok(secret)
    }
}
