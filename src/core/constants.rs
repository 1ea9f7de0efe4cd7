//! Constants used throughout esboot.
//!
//! Centralizes magic strings and configuration defaults.

/// Configuration file name (esboot.toml).
pub const CONFIG_FILE: &str = "esboot.toml";

/// Environment variable exported to the launched application.
pub const ENDPOINT_VAR: &str = "ELASTICSEARCH_URL";

/// Default namespace the endpoint secret lives in.
pub const DEFAULT_NAMESPACE: &str = "default";

/// Default endpoint secret name.
pub const DEFAULT_SECRET: &str = "elasticsearch-params";

/// Default pattern matched against the secret's data keys.
pub const DEFAULT_PROPERTIES_KEY: &str = "elasticsearch.properties";

/// Default property holding the cluster endpoint.
pub const DEFAULT_HOST_PROPERTY: &str = "es.host";

/// Default virtualenv directory.
pub const DEFAULT_VENV_DIR: &str = ".venv";

/// Default dependency manifest.
pub const DEFAULT_REQUIREMENTS: &str = "requirements.txt";

/// Seconds to wait for index creation before verifying settings.
pub const INDEX_SETTLE_SECS: u64 = 2;
