//! Error types for esboot operations.
//!
//! A top-level [`Error`] aggregates per-domain enums so the binary can
//! match on specific failures when choosing hints, while library code
//! propagates everything through one [`Result`] alias.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level error type.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Bootstrap(#[from] BootstrapError),

    #[error(transparent)]
    Secret(#[from] SecretError),

    #[error(transparent)]
    Cluster(#[from] ClusterError),

    #[error(transparent)]
    Proc(#[from] ProcError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

/// Configuration file failures.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("could not read {}: {}", .path.display(), .source)]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("could not parse {}: {}", .path.display(), .source)]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Python environment provisioning failures.
#[derive(Error, Debug)]
pub enum BootstrapError {
    #[error("no python interpreter found (tried python3, python)")]
    PythonNotFound,

    #[error("failed to create virtualenv at {}", .0.display())]
    VenvCreate(PathBuf),

    #[error("dependency manifest not found: {}", .0.display())]
    ManifestMissing(PathBuf),

    #[error("dependency install failed for {}", .0.display())]
    InstallFailed(PathBuf),
}

/// Endpoint secret failures.
///
/// The empty-endpoint causes get distinct variants so the diagnostic
/// names what actually went wrong; they all exit with status 1 at the
/// top level.
#[derive(Error, Debug)]
pub enum SecretError {
    #[error("secret {name} in namespace {namespace} is not valid JSON: {source}")]
    MalformedSecret {
        namespace: String,
        name: String,
        source: serde_json::Error,
    },

    #[error("secret {name} has no data entry matching '{pattern}'")]
    PropertiesNotFound { name: String, pattern: String },

    #[error("could not decode '{key}' from secret {name}: {reason}")]
    DecodeFailed {
        name: String,
        key: String,
        reason: String,
    },

    #[error("property '{0}' not found in decoded properties")]
    PropertyMissing(String),

    #[error("property '{0}' is present but blank")]
    PropertyEmpty(String),
}

/// Cluster API failures.
#[derive(Error, Debug)]
pub enum ClusterError {
    #[error("unexpected response from {endpoint}: {reason}")]
    UnexpectedResponse { endpoint: String, reason: String },

    #[error("template not found: {0}")]
    TemplateNotFound(String),

    #[error("cluster did not acknowledge {0}")]
    NotAcknowledged(String),
}

/// External command failures.
#[derive(Error, Debug)]
pub enum ProcError {
    #[error("{0} not found on PATH")]
    NotFound(String),

    #[error("{program} exited with status {code}: {stderr}")]
    Failed {
        program: String,
        code: i32,
        stderr: String,
    },

    #[error("{program} produced non-UTF-8 output")]
    InvalidUtf8 { program: String },
}

pub type Result<T> = std::result::Result<T, Error>;
