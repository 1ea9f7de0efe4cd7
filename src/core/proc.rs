//! External command invocation.
//!
//! The secret and cluster channels both drive existing CLIs. This module
//! is the one place that spawns them: locate the binary, capture stdout,
//! check the exit status, and surface the child's stderr verbatim on
//! failure.

use std::ffi::OsStr;
use std::process::{Command, Stdio};
use tracing::trace;

use crate::error::{Error, ProcError, Result};

/// Ensure `program` exists on PATH.
pub fn require(program: &str) -> Result<()> {
    which::which(program)
        .map(|_| ())
        .map_err(|_| ProcError::NotFound(program.to_string()).into())
}

/// Run a command and capture its stdout as UTF-8.
///
/// A non-zero exit becomes an error carrying the child's stderr.
pub fn capture(program: &str, args: &[&str]) -> Result<String> {
    trace!(program, ?args, "spawning");

    let output = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .output()
        .map_err(|e| spawn_error(program, e))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        return Err(ProcError::Failed {
            program: program.to_string(),
            code: output.status.code().unwrap_or(-1),
            stderr,
        }
        .into());
    }

    String::from_utf8(output.stdout).map_err(|_| {
        ProcError::InvalidUtf8 {
            program: program.to_string(),
        }
        .into()
    })
}

/// Run a command with inherited stdio, reporting whether it succeeded.
///
/// Used for installer-style tools whose progress output should reach the
/// terminal directly.
pub fn status<S: AsRef<OsStr>>(program: S, args: &[&str]) -> Result<bool> {
    let name = program.as_ref().to_string_lossy().to_string();
    trace!(program = %name, ?args, "spawning");

    let status = Command::new(program.as_ref())
        .args(args)
        .status()
        .map_err(|e| spawn_error(&name, e))?;

    Ok(status.success())
}

fn spawn_error(program: &str, e: std::io::Error) -> Error {
    match e.kind() {
        std::io::ErrorKind::NotFound => ProcError::NotFound(program.to_string()).into(),
        _ => e.into(),
    }
}
