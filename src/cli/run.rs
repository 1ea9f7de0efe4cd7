//! Run command.
//!
//! The full bootstrap pipeline: provision the environment, resolve the
//! endpoint, export ELASTICSEARCH_URL, and launch the application.

use tracing::debug;

use crate::core::config::Config;
use crate::core::constants;
use crate::core::{launch, python, secret};
use crate::error::{Error, Result};

/// Bootstrap and launch, exiting with the child's exit code.
pub fn execute(skip_setup: bool, command: &[String]) -> Result<()> {
    let config = Config::load()?;

    let mut vars: Vec<(String, String)> = Vec::new();

    if skip_setup {
        debug!("environment provisioning skipped");
    } else {
        let env = python::provision(&config.python)?;
        vars.extend(env.activation_vars());
    }

    let endpoint = secret::fetch_endpoint(&config.cluster)?;
    vars.push((constants::ENDPOINT_VAR.to_string(), endpoint));

    let command = if command.is_empty() {
        config.app.command.clone()
    } else {
        command.to_vec()
    };

    if command.is_empty() {
        return Err(Error::Other(
            "no command specified and no [app] command configured".to_string(),
        ));
    }

    let exit_code = launch::run_with_env(&command, vars)?;
    std::process::exit(exit_code);
}
