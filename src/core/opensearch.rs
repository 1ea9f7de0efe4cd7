//! curl-driven cluster channel.
//!
//! The application talks to the cluster the same way the secret channel
//! talks to the cluster API: by driving an existing CLI. Requests go
//! through `curl -s`, responses are decoded from captured stdout.

use serde_json::{Map, Value};
use tracing::{debug, trace};

use crate::core::proc;
use crate::error::{ClusterError, Result};

/// Handle to a cluster reachable at a base URL.
pub struct Cluster {
    base_url: String,
}

impl Cluster {
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Issue a request and decode the JSON response.
    fn request(&self, method: &str, endpoint: &str, body: Option<&Value>) -> Result<Value> {
        proc::require("curl")?;

        let url = format!("{}/{}", self.base_url, endpoint);
        debug!(method, %url, "cluster request");

        let payload;
        let mut args = vec![
            "-s",
            "-X",
            method,
            url.as_str(),
            "-H",
            "Content-Type: application/json",
        ];
        if let Some(body) = body {
            payload = body.to_string();
            args.push("-d");
            args.push(&payload);
        }

        let raw = proc::capture("curl", &args)?;
        trace!(bytes = raw.len(), "cluster response");

        serde_json::from_str(&raw).map_err(|_| {
            ClusterError::UnexpectedResponse {
                endpoint: endpoint.to_string(),
                reason: snippet(&raw),
            }
            .into()
        })
    }

    /// All index templates (`GET _template`).
    pub fn templates(&self) -> Result<Map<String, Value>> {
        match self.request("GET", "_template", None)? {
            Value::Object(map) => Ok(map),
            other => Err(ClusterError::UnexpectedResponse {
                endpoint: "_template".to_string(),
                reason: snippet(&other.to_string()),
            }
            .into()),
        }
    }

    /// One template body, or `None` when the cluster does not know it.
    pub fn template(&self, name: &str) -> Result<Option<Value>> {
        let endpoint = format!("_template/{}", name);
        let mut response = self.request("GET", &endpoint, None)?;
        Ok(response.get_mut(name).map(Value::take))
    }

    /// Store a template body (`PUT _template/<name>`).
    pub fn put_template(&self, name: &str, body: &Value) -> Result<()> {
        let endpoint = format!("_template/{}", name);
        let response = self.request("PUT", &endpoint, Some(body))?;
        if acknowledged(&response) {
            Ok(())
        } else {
            Err(ClusterError::NotAcknowledged(format!("template update for {}", name)).into())
        }
    }

    /// Index a document, reporting whether the cluster accepted it.
    pub fn create_doc(&self, index: &str, doc: &Value) -> Result<bool> {
        let endpoint = format!("{}/_doc", index);
        let response = self.request("POST", &endpoint, Some(doc))?;
        let result = response.get("result").and_then(Value::as_str);
        Ok(matches!(result, Some("created") | Some("updated")))
    }

    /// Shard and replica counts for an index, when it exists.
    pub fn index_settings(&self, index: &str) -> Result<Option<(i64, i64)>> {
        let endpoint = format!("{}/_settings", index);
        let response = self.request("GET", &endpoint, None)?;

        let settings = response
            .get(index)
            .and_then(|v| v.get("settings"))
            .and_then(|v| v.get("index"));

        let Some(settings) = settings else {
            return Ok(None);
        };

        Ok(Some((
            count(settings, "number_of_shards"),
            count(settings, "number_of_replicas"),
        )))
    }

    /// Delete an index.
    pub fn delete_index(&self, index: &str) -> Result<()> {
        let response = self.request("DELETE", index, None)?;
        if acknowledged(&response) {
            Ok(())
        } else {
            Err(ClusterError::NotAcknowledged(format!("deletion of index {}", index)).into())
        }
    }
}

/// Read an `acknowledged` flag from a cluster response.
fn acknowledged(response: &Value) -> bool {
    response
        .get("acknowledged")
        .and_then(Value::as_bool)
        .unwrap_or(false)
}

/// Settings counts arrive as strings; absent or unparsable counts read
/// as -1 so they never satisfy a verification.
fn count(settings: &Value, key: &str) -> i64 {
    settings
        .get(key)
        .and_then(Value::as_str)
        .and_then(|s| s.parse().ok())
        .unwrap_or(-1)
}

/// First line of a response, bounded, for error messages.
fn snippet(raw: &str) -> String {
    raw.lines().next().unwrap_or("").chars().take(120).collect()
}
