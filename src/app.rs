//! Application wiring: configuration, fetching, and processing.

use anyhow::{Context, Result};
use std::io::{self, BufRead, Write};

use crate::app_deps::{FileFetcher, KubectlFetcher, SecretFetcher};
use crate::cli::Cli;
use crate::config::Config;
use crate::{paths, processor, validation};

pub struct App;

impl App {
    /// Run the tool against the real terminal streams.
    pub async fn run(cli: Cli) -> Result<()> {
        paths::load_env_file();
        let config = Config::load().context("Failed to load configuration")?;

        let fetcher: Box<dyn SecretFetcher> = match &cli.from_file {
            Some(path) => Box::new(FileFetcher::new(path.clone())),
            None => Box::new(KubectlFetcher::from_config(
                &config,
                cli.context.clone(),
                cli.kubeconfig.clone(),
            )),
        };

        let stdout = io::stdout();
        let stderr = io::stderr();
        let stdin = io::stdin();

        Self::run_with_deps(
            fetcher.as_ref(),
            &config,
            &cli,
            &mut stdout.lock(),
            &mut stderr.lock(),
            &mut stdin.lock(),
        )
        .await
    }

    /// Run with injected dependencies (for testing).
    pub async fn run_with_deps<W: Write, E: Write, R: BufRead>(
        fetcher: &dyn SecretFetcher,
        config: &Config,
        cli: &Cli,
        out: &mut W,
        err: &mut E,
        input: &mut R,
    ) -> Result<()> {
        validation::validate_args(&cli.args)?;

        let name = cli.secret_name().unwrap_or_default();
        validation::validate_secret_name(name)?;

        let namespace = cli.namespace.as_deref().or(config.namespace.as_deref());
        if let Some(ns) = namespace {
            validation::validate_namespace(ns)?;
        }

        let key = cli.secret_key();
        if !key.is_empty()
            && let Err(e) = validation::validate_secret_key(key)
        {
            tracing::warn!("{}", e);
        }

        let secret = fetcher
            .fetch_secret(name, namespace)
            .await
            .with_context(|| format!("Failed to fetch secret '{}'", name))?;
        tracing::debug!(
            secret = %secret.display_name(),
            keys = secret.data.len(),
            "fetched secret"
        );

        processor::process_secret(out, err, input, &secret, key, cli.decode_all)?;
        out.flush()?;
        Ok(())
    }
}
