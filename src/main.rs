//! esboot - bootstrap launcher for OpenSearch-backed applications.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use esboot::cli::output;
use esboot::cli::{execute, Cli};
use esboot::error::{BootstrapError, Error, ProcError};

fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber with env-filter support
    let filter = EnvFilter::try_from_env("ESBOOT_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("esboot=debug")
        } else {
            EnvFilter::new("esboot=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).without_time())
        .init();

    if let Err(e) = execute(cli.command) {
        // Format error with suggestion if available
        let suggestion = match &e {
            Error::Bootstrap(BootstrapError::PythonNotFound) => {
                Some("install python3 and make sure it is on PATH")
            }
            Error::Proc(ProcError::NotFound(tool)) if tool == "kubectl" => {
                Some("install kubectl and configure access to the cluster")
            }
            Error::Proc(ProcError::NotFound(tool)) if tool == "curl" => {
                Some("install curl to talk to the cluster")
            }
            Error::Secret(_) => Some("inspect the endpoint secret: kubectl get secret -o json"),
            _ => None,
        };

        output::error(&e.to_string());
        if let Some(hint) = suggestion {
            output::hint(hint);
        }
        std::process::exit(1);
    }
}
