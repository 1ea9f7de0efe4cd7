//! Setup command.
//!
//! Provisions the Python virtualenv and installs the dependency manifest.

use crate::cli::output;
use crate::core::config::Config;
use crate::core::python;
use crate::error::Result;

/// Provision the Python environment.
pub fn execute() -> Result<()> {
    let config = Config::load()?;

    python::provision(&config.python)?;

    output::success(&format!(
        "environment ready at {}",
        config.python.venv.display()
    ));
    Ok(())
}
