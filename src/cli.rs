use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "kubectl-view_secret")]
#[command(about = "Decode and view Kubernetes secrets")]
#[command(version)]
#[command(after_help = r#"EXAMPLES:
    kubectl view-secret db-credentials              pick a key interactively
    kubectl view-secret db-credentials PASSWORD     decode one key
    kubectl view-secret db-credentials -a           decode every key
    kubectl view-secret db-credentials -f db.json   read the secret from a file

Output lines are KEY='value' so they can be sourced by a shell."#)]
pub struct Cli {
    /// <secret> [key]
    #[arg(value_name = "ARGS")]
    pub args: Vec<String>,

    /// Decode all keys without prompting
    #[arg(short = 'a', long = "all")]
    pub decode_all: bool,

    /// Namespace of the secret
    #[arg(short = 'n', long)]
    pub namespace: Option<String>,

    /// kubeconfig context to use
    #[arg(long)]
    pub context: Option<String>,

    /// Path to the kubeconfig file
    #[arg(long)]
    pub kubeconfig: Option<String>,

    /// Read the secret JSON from a file instead of calling kubectl
    #[arg(short = 'f', long = "from-file", value_name = "PATH")]
    pub from_file: Option<PathBuf>,
}

impl Cli {
    /// The secret name, when given.
    pub fn secret_name(&self) -> Option<&str> {
        self.args.first().map(String::as_str)
    }

    /// The explicit key, or an empty string when none was given.
    pub fn secret_key(&self) -> &str {
        self.args.get(1).map(String::as_str).unwrap_or("")
    }
}
