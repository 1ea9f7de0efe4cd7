//! Endpoint command.
//!
//! Resolves the cluster endpoint from the Kubernetes secret and prints it.

use crate::core::config::Config;
use crate::core::secret;
use crate::error::Result;

/// Print the resolved endpoint to stdout.
pub fn execute() -> Result<()> {
    let config = Config::load()?;
    let endpoint = secret::fetch_endpoint(&config.cluster)?;

    // Plain stdout so the value can be piped or captured.
    println!("{}", endpoint);
    Ok(())
}
