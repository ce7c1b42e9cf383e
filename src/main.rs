use clap::Parser;
use colored::*;
use tracing_subscriber::EnvFilter;

use view_secret::{app, cli, error};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = cli::Cli::parse();

    if let Err(e) = app::App::run(cli).await {
        eprintln!("{} {}", "Error:".red().bold(), error::describe_error(&e));
        std::process::exit(error::exit_code(&e));
    }
}
