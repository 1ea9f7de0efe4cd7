//! Python environment provisioning.
//!
//! Creates the virtualenv and installs the dependency manifest. Installer
//! stdio is inherited so failures read exactly as the underlying tool
//! reports them; there are no retries.

use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::core::config::PythonConfig;
use crate::core::proc;
use crate::error::{BootstrapError, Result};

/// A provisioned virtualenv.
pub struct PythonEnv {
    root: PathBuf,
}

impl PythonEnv {
    /// Directory holding the virtualenv's executables.
    fn bin_dir(&self) -> PathBuf {
        if cfg!(windows) {
            self.root.join("Scripts")
        } else {
            self.root.join("bin")
        }
    }

    /// Path to a tool inside the virtualenv.
    pub fn tool(&self, name: &str) -> PathBuf {
        if cfg!(windows) {
            self.bin_dir().join(format!("{}.exe", name))
        } else {
            self.bin_dir().join(name)
        }
    }

    /// Environment entries that put the virtualenv first for a child
    /// process: `VIRTUAL_ENV` plus a `PATH` with the venv bin dir
    /// prepended.
    pub fn activation_vars(&self) -> Vec<(String, String)> {
        let root = std::fs::canonicalize(&self.root).unwrap_or_else(|_| self.root.clone());
        let bin = if cfg!(windows) {
            root.join("Scripts")
        } else {
            root.join("bin")
        };

        let mut vars = vec![("VIRTUAL_ENV".to_string(), root.display().to_string())];

        let path = match std::env::var_os("PATH") {
            Some(existing) => {
                let mut entries = vec![bin.clone()];
                entries.extend(std::env::split_paths(&existing));
                std::env::join_paths(entries)
                    .ok()
                    .map(|joined| joined.to_string_lossy().into_owned())
            }
            None => Some(bin.display().to_string()),
        };
        if let Some(path) = path {
            vars.push(("PATH".to_string(), path));
        }

        vars
    }
}

/// Locate a Python interpreter on PATH.
pub fn interpreter() -> Result<PathBuf> {
    which::which("python3")
        .or_else(|_| which::which("python"))
        .map_err(|_| BootstrapError::PythonNotFound.into())
}

/// Create the virtualenv (if absent) and install the dependency manifest.
pub fn provision(python: &PythonConfig) -> Result<PythonEnv> {
    let env = ensure_venv(python)?;
    install_requirements(&env, &python.requirements)?;
    Ok(env)
}

fn ensure_venv(python: &PythonConfig) -> Result<PythonEnv> {
    let root = python.venv.clone();
    if root.exists() {
        debug!(venv = %root.display(), "reusing existing virtualenv");
        return Ok(PythonEnv { root });
    }

    let interpreter = interpreter()?;
    info!(venv = %root.display(), "creating virtualenv");

    let venv_arg = root.to_string_lossy();
    if !proc::status(&interpreter, &["-m", "venv", venv_arg.as_ref()])? {
        return Err(BootstrapError::VenvCreate(root).into());
    }

    Ok(PythonEnv { root })
}

fn install_requirements(env: &PythonEnv, manifest: &Path) -> Result<()> {
    if !manifest.exists() {
        return Err(BootstrapError::ManifestMissing(manifest.to_path_buf()).into());
    }

    let pip = env.tool("pip");
    info!(manifest = %manifest.display(), "installing dependencies");

    let manifest_arg = manifest.to_string_lossy();
    if !proc::status(&pip, &["install", "-r", manifest_arg.as_ref()])? {
        return Err(BootstrapError::InstallFailed(manifest.to_path_buf()).into());
    }

    Ok(())
}
