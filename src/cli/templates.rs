//! Template management commands.
//!
//! Lists, reshards, and copies index templates, talking to the cluster
//! named by ELASTICSEARCH_URL (or resolved from the endpoint secret).

use dialoguer::Confirm;
use tracing::debug;

use crate::cli::output;
use crate::core::config::Config;
use crate::core::constants;
use crate::core::opensearch::Cluster;
use crate::core::secret;
use crate::core::templates::{self, SmokeTest, TemplateDetails};
use crate::error::{Error, Result};

/// Resolve the cluster to talk to.
///
/// ELASTICSEARCH_URL wins when set; otherwise the endpoint secret is
/// consulted, exactly as `run` resolves it for the application.
fn cluster(config: &Config) -> Result<Cluster> {
    match std::env::var(constants::ENDPOINT_VAR) {
        Ok(url) if !url.trim().is_empty() => {
            debug!("using endpoint from {}", constants::ENDPOINT_VAR);
            Ok(Cluster::new(url.trim()))
        }
        _ => {
            let url = secret::fetch_endpoint(&config.cluster)?;
            Ok(Cluster::new(url))
        }
    }
}

/// List templates with their shard and replica settings.
pub fn list(json: bool) -> Result<()> {
    let config = Config::load()?;
    let cluster = cluster(&config)?;

    let templates = cluster.templates()?;
    let details = templates::template_details(&templates);

    if json {
        println!("{}", serde_json::to_string_pretty(&details)?);
        return Ok(());
    }

    output::header("Index Templates");
    if details.is_empty() {
        output::list_item("none");
        return Ok(());
    }
    for d in &details {
        output::kv(
            &d.name,
            format!(
                "shards {}, replicas {}, test index {}",
                d.shards, d.replicas, d.test_index
            ),
        );
    }
    Ok(())
}

/// Update templates to new shard/replica counts, then smoke-test them.
pub fn reshard(
    names: &[String],
    shards: u32,
    replicas: u32,
    yes: bool,
    no_verify: bool,
) -> Result<()> {
    let config = Config::load()?;
    let cluster = cluster(&config)?;

    let all = cluster.templates()?;
    let mut details = templates::template_details(&all);
    if !names.is_empty() {
        details.retain(|d| names.iter().any(|n| n == &d.name));
    }

    if details.is_empty() {
        output::warn("no matching templates on the cluster");
        return Ok(());
    }

    output::header("Templates to update");
    for d in &details {
        output::kv(
            &d.name,
            format!(
                "shards {} → {}, replicas {} → {}",
                d.shards, shards, d.replicas, replicas
            ),
        );
    }
    output::blank();

    if !yes {
        let proceed = Confirm::new()
            .with_prompt(format!(
                "Update {} template(s) to {} shard(s) and {} replica(s)?",
                details.len(),
                shards,
                replicas
            ))
            .default(false)
            .interact()
            .map_err(|e| Error::Other(format!("confirmation prompt failed: {}", e)))?;
        if !proceed {
            output::warn("operation canceled");
            return Ok(());
        }
    }

    let mut updated: Vec<TemplateDetails> = Vec::new();
    let mut failed: Vec<String> = Vec::new();

    for d in &details {
        match templates::update_template(&cluster, &d.name, shards, replicas) {
            Ok(()) => {
                output::success(&format!("updated {}", d.name));
                updated.push(d.clone());
            }
            Err(e) => {
                output::error(&format!("failed to update {}: {}", d.name, e));
                failed.push(d.name.clone());
            }
        }
    }

    if !no_verify && !updated.is_empty() {
        output::blank();
        output::header("Verifying");
        for d in &updated {
            match templates::smoke_test(&cluster, d, shards, replicas) {
                Ok(SmokeTest::Verified) => {
                    output::success(&format!("{} verified via {}", d.name, d.test_index));
                }
                Ok(SmokeTest::SettingsMismatch) => {
                    output::warn(&format!(
                        "{} updated but {} kept different settings",
                        d.name, d.test_index
                    ));
                }
                Ok(SmokeTest::DocRejected) => {
                    output::warn(&format!(
                        "could not create a probe document in {}",
                        d.test_index
                    ));
                }
                Err(e) => {
                    output::warn(&format!("verification of {} failed: {}", d.name, e));
                }
            }
        }
    }

    output::blank();
    output::rule();
    output::kv("updated", format!("{}/{}", updated.len(), details.len()));
    if !failed.is_empty() {
        output::header("Failed templates");
        for name in &failed {
            output::list_item(name);
        }
    }

    Ok(())
}

/// Copy a template's settings to a new template.
pub fn copy(source: &str, target: &str) -> Result<()> {
    let config = Config::load()?;
    let cluster = cluster(&config)?;

    templates::copy_template(&cluster, source, target)?;
    output::success(&format!("copied {} to {}", source, target));
    Ok(())
}
