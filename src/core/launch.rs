//! Process launch with an injected environment.

use std::process::Command;
use zeroize::Zeroizing;

use crate::error::{Error, Result};

/// Spawn `command` with `vars` added to its environment and wait for it.
///
/// Values are held in zeroizing storage while injected; the endpoint can
/// carry credentials. Returns the child's exit code, or 1 when it is
/// unavailable (signal death).
pub fn run_with_env(command: &[String], vars: Vec<(String, String)>) -> Result<i32> {
    if command.is_empty() {
        return Err(Error::Other("no command specified".to_string()));
    }

    let mut cmd = Command::new(&command[0]);
    cmd.args(&command[1..]);

    for (key, value) in vars {
        let value = Zeroizing::new(value);
        cmd.env(key, value.as_str());
    }

    let status = cmd.status()?;
    Ok(status.code().unwrap_or(1))
}
