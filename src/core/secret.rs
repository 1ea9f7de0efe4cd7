//! Kubernetes secret fetch and endpoint extraction.
//!
//! The endpoint secret is read with `kubectl get secret -o json`; the
//! properties blob lives base64-encoded under a data key matching the
//! configured pattern.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use serde_json::Value;
use tracing::debug;

use crate::core::config::ClusterConfig;
use crate::core::{proc, properties};
use crate::error::{Result, SecretError};

/// Fetch the secret and extract the configured endpoint property.
pub fn fetch_endpoint(cluster: &ClusterConfig) -> Result<String> {
    let blob = fetch_properties(cluster)?;

    match properties::extract(&blob, &cluster.host_property) {
        None => Err(SecretError::PropertyMissing(cluster.host_property.clone()).into()),
        Some(value) if value.is_empty() => {
            Err(SecretError::PropertyEmpty(cluster.host_property.clone()).into())
        }
        Some(value) => {
            debug!(property = %cluster.host_property, "endpoint resolved");
            Ok(value)
        }
    }
}

/// Fetch and decode the properties blob from the cluster secret.
fn fetch_properties(cluster: &ClusterConfig) -> Result<String> {
    proc::require("kubectl")?;

    debug!(
        namespace = %cluster.namespace,
        secret = %cluster.secret,
        "fetching endpoint secret"
    );

    let raw = proc::capture(
        "kubectl",
        &[
            "get",
            "secret",
            &cluster.secret,
            "-n",
            &cluster.namespace,
            "-o",
            "json",
        ],
    )?;

    let doc: Value = serde_json::from_str(&raw).map_err(|e| SecretError::MalformedSecret {
        namespace: cluster.namespace.clone(),
        name: cluster.secret.clone(),
        source: e,
    })?;

    let encoded =
        properties_entry(&doc, &cluster.properties_key).ok_or_else(|| SecretError::PropertiesNotFound {
            name: cluster.secret.clone(),
            pattern: cluster.properties_key.clone(),
        })?;

    let bytes = BASE64
        .decode(encoded.trim())
        .map_err(|e| SecretError::DecodeFailed {
            name: cluster.secret.clone(),
            key: cluster.properties_key.clone(),
            reason: e.to_string(),
        })?;

    let text = String::from_utf8(bytes).map_err(|_| SecretError::DecodeFailed {
        name: cluster.secret.clone(),
        key: cluster.properties_key.clone(),
        reason: "not valid UTF-8".to_string(),
    })?;

    Ok(text)
}

/// Find the first `data` entry whose key matches `pattern`.
fn properties_entry<'a>(doc: &'a Value, pattern: &str) -> Option<&'a str> {
    doc.get("data")
        .and_then(Value::as_object)
        .and_then(|data| {
            data.iter()
                .find(|(key, _)| key.contains(pattern))
                .and_then(|(_, value)| value.as_str())
        })
}
