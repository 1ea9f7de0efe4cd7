//! Index template management.
//!
//! Details extraction and body rewriting are pure JSON shaping; the
//! workflow pieces drive the cluster channel.

use chrono::Utc;
use serde::Serialize;
use serde_json::{json, Map, Value};
use tracing::{info, warn};

use crate::core::constants;
use crate::core::opensearch::Cluster;
use crate::error::{ClusterError, Result};

/// Shard and replica settings of one template, plus the index name used
/// to smoke-test it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateDetails {
    pub name: String,
    pub shards: String,
    pub replicas: String,
    pub test_index: String,
}

/// Extract per-template details from a `GET _template` response.
///
/// Counts read as the literal `default` when the template does not pin
/// them. The test index is the first index pattern with `*` replaced by
/// `_test`, or `<name>_test` for templates without patterns.
pub fn template_details(templates: &Map<String, Value>) -> Vec<TemplateDetails> {
    templates
        .iter()
        .map(|(name, body)| {
            let settings = body.get("settings").and_then(|v| v.get("index"));

            let test_index = body
                .get("index_patterns")
                .and_then(Value::as_array)
                .and_then(|patterns| patterns.first())
                .and_then(Value::as_str)
                .map(|pattern| pattern.replace('*', "_test"))
                .unwrap_or_else(|| format!("{}_test", name));

            TemplateDetails {
                name: name.clone(),
                shards: setting_or_default(settings, "number_of_shards"),
                replicas: setting_or_default(settings, "number_of_replicas"),
                test_index,
            }
        })
        .collect()
}

fn setting_or_default(settings: Option<&Value>, key: &str) -> String {
    settings
        .and_then(|s| s.get(key))
        .and_then(Value::as_str)
        .map(str::to_string)
        .unwrap_or_else(|| "default".to_string())
}

/// Get `value[key]` as an object, inserting or replacing as needed.
fn ensure_slot<'a>(value: &'a mut Value, key: &str) -> Option<&'a mut Value> {
    let obj = value.as_object_mut()?;
    let slot = obj.entry(key.to_string()).or_insert_with(|| json!({}));
    if !slot.is_object() {
        *slot = json!({});
    }
    Some(slot)
}

/// Write explicit shard and replica counts into a template body.
///
/// Counts are written as strings under `settings.index`; everything else
/// in the body is left untouched. Returns false when the body is not an
/// object.
pub fn with_shard_counts(body: &mut Value, shards: u32, replicas: u32) -> bool {
    let Some(settings) = ensure_slot(body, "settings") else {
        return false;
    };
    let Some(index) = ensure_slot(settings, "index") else {
        return false;
    };
    if let Some(index) = index.as_object_mut() {
        index.insert("number_of_shards".to_string(), json!(shards.to_string()));
        index.insert("number_of_replicas".to_string(), json!(replicas.to_string()));
        return true;
    }
    false
}

/// Rewrite a template body as a fresh copy scoped to `target`: order 0,
/// version 1, index patterns `<target>*`.
pub fn retarget(body: &mut Value, target: &str) {
    if let Some(obj) = body.as_object_mut() {
        obj.insert("order".to_string(), json!(0));
        obj.insert("version".to_string(), json!(1));
        obj.insert(
            "index_patterns".to_string(),
            json!([format!("{}*", target)]),
        );
    }
}

/// Update one template to the given shard and replica counts.
pub fn update_template(cluster: &Cluster, name: &str, shards: u32, replicas: u32) -> Result<()> {
    info!(template = name, shards, replicas, "updating template");

    let mut body = cluster
        .template(name)?
        .ok_or_else(|| ClusterError::TemplateNotFound(name.to_string()))?;

    if !with_shard_counts(&mut body, shards, replicas) {
        return Err(ClusterError::UnexpectedResponse {
            endpoint: format!("_template/{}", name),
            reason: "template body is not an object".to_string(),
        }
        .into());
    }

    cluster.put_template(name, &body)
}

/// Copy a template's settings to a new template name.
pub fn copy_template(cluster: &Cluster, source: &str, target: &str) -> Result<()> {
    info!(source, target, "copying template");

    let mut body = cluster
        .template(source)?
        .ok_or_else(|| ClusterError::TemplateNotFound(source.to_string()))?;

    retarget(&mut body, target);
    cluster.put_template(target, &body)
}

/// Outcome of smoke-testing one updated template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SmokeTest {
    Verified,
    SettingsMismatch,
    DocRejected,
}

/// Exercise an updated template: index a throwaway document so the test
/// index is created from the template, verify the index inherited the
/// expected counts, then delete the index again.
pub fn smoke_test(
    cluster: &Cluster,
    details: &TemplateDetails,
    shards: u32,
    replicas: u32,
) -> Result<SmokeTest> {
    let doc = json!({
        "test_field": "test_value",
        "timestamp": Utc::now().timestamp(),
        "description": "Probe document for template verification",
    });

    if !cluster.create_doc(&details.test_index, &doc)? {
        return Ok(SmokeTest::DocRejected);
    }

    // Index creation from the template is not immediate.
    std::thread::sleep(std::time::Duration::from_secs(constants::INDEX_SETTLE_SECS));

    let verified = matches!(
        cluster.index_settings(&details.test_index)?,
        Some((s, r)) if s == i64::from(shards) && r == i64::from(replicas)
    );

    if let Err(e) = cluster.delete_index(&details.test_index) {
        warn!(index = %details.test_index, error = %e, "failed to clean up test index");
    }

    Ok(if verified {
        SmokeTest::Verified
    } else {
        SmokeTest::SettingsMismatch
    })
}
