//! Command-line interface.

pub mod completions;
pub mod endpoint;
pub mod output;
pub mod run;
pub mod setup;
pub mod templates;

use clap::{Parser, Subcommand};

/// esboot - bootstrap launcher for OpenSearch-backed applications.
#[derive(Parser)]
#[command(
    name = "esboot",
    about = "Bootstrap launcher that wires a Kubernetes-stored OpenSearch endpoint into application environments",
    version
)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Command {
    /// Provision the Python environment and install dependencies
    Setup,

    /// Resolve the cluster endpoint from the Kubernetes secret and print it
    Endpoint,

    /// Bootstrap, export ELASTICSEARCH_URL, and launch the application
    Run {
        /// Skip environment provisioning
        #[arg(long)]
        skip_setup: bool,
        /// Command and arguments to run (defaults to the configured [app] command)
        #[arg(trailing_var_arg = true)]
        command: Vec<String>,
    },

    /// Manage index templates on the cluster
    Templates {
        #[command(subcommand)]
        action: TemplatesAction,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Supported shells for completions.
#[derive(clap::ValueEnum, Clone, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

/// Template subcommands.
#[derive(Subcommand)]
pub enum TemplatesAction {
    /// List templates with shard and replica settings
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Update templates to new shard/replica counts and verify them
    Reshard {
        /// Templates to update (all templates when omitted)
        names: Vec<String>,
        /// Target primary shard count
        #[arg(long, default_value_t = 1)]
        shards: u32,
        /// Target replica count
        #[arg(long, default_value_t = 1)]
        replicas: u32,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
        /// Skip smoke-test verification of updated templates
        #[arg(long)]
        no_verify: bool,
    },

    /// Copy a template's settings to a new template
    Copy {
        /// Source template name
        source: String,
        /// Target template name
        target: String,
    },
}

/// Execute a command.
pub fn execute(command: Command) -> crate::error::Result<()> {
    use Command::*;

    match command {
        Setup => setup::execute(),
        Endpoint => endpoint::execute(),
        Run {
            skip_setup,
            command,
        } => run::execute(skip_setup, &command),
        Templates { action } => match action {
            TemplatesAction::List { json } => templates::list(json),
            TemplatesAction::Reshard {
                names,
                shards,
                replicas,
                yes,
                no_verify,
            } => templates::reshard(&names, shards, replicas, yes, no_verify),
            TemplatesAction::Copy { source, target } => templates::copy(&source, &target),
        },
        Completions { shell } => completions::execute(shell),
    }
}
