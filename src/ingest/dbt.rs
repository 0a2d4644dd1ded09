//! Snapshots from dbt artifacts.
//!
//! `manifest.json` provides models, descriptions and `meta` ownership fields;
//! `catalog.json`, when present, provides warehouse columns with comments and
//! nullability. Only model nodes are ingested.

use crate::error::{ReadinessError, Result};
use crate::signals::{self, columns::nullable_from_type};
use crate::types::config::ScoringPolicy;
use crate::types::snapshot::{tri_state, ColumnMeta, MetadataSnapshot};
use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;
use std::path::Path;
use tracing::{debug, info};

#[derive(Debug, Clone)]
pub struct DbtModel {
    pub unique_id: String,
    pub full_name: String,
    pub snapshot: MetadataSnapshot,
}

#[derive(Debug, Deserialize)]
struct ManifestNode {
    #[serde(default)]
    name: String,
    #[serde(default)]
    schema: Option<String>,
    #[serde(default)]
    database: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    meta: ModelMeta,
    #[serde(default)]
    columns: BTreeMap<String, ManifestColumn>,
    #[serde(default)]
    config: NodeConfig,
}

#[derive(Debug, Default, Deserialize)]
struct ModelMeta {
    owner: Option<String>,
    owner_contact: Option<String>,
    intended_use: Option<String>,
    limitations: Option<String>,
    #[serde(default, deserialize_with = "tri_state")]
    has_sla: Option<bool>,
    #[serde(default, deserialize_with = "tri_state")]
    freshness_check: Option<bool>,
    #[serde(default, deserialize_with = "tri_state")]
    volume_check: Option<bool>,
    tests: Option<Vec<Value>>,
    breaking_changes_30d: Option<u64>,
    unresolved_failures_30d: Option<u64>,
    #[serde(default, deserialize_with = "tri_state")]
    has_release_notes: Option<bool>,
    #[serde(default, deserialize_with = "tri_state")]
    has_versioning: Option<bool>,
    #[serde(default, deserialize_with = "tri_state")]
    backward_compatible: Option<bool>,
}

#[derive(Debug, Default, Deserialize)]
struct NodeConfig {
    tests: Option<Vec<Value>>,
}

#[derive(Debug, Deserialize)]
struct ManifestColumn {
    name: Option<String>,
    description: Option<String>,
    data_type: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CatalogNode {
    #[serde(default)]
    metadata: CatalogMetadata,
    #[serde(default)]
    columns: BTreeMap<String, CatalogColumn>,
}

#[derive(Debug, Default, Deserialize)]
struct CatalogMetadata {
    #[serde(rename = "type")]
    kind: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CatalogColumn {
    name: Option<String>,
    #[serde(rename = "type")]
    data_type: Option<String>,
    index: Option<u32>,
    comment: Option<String>,
    description: Option<String>,
}

pub fn load_models(
    manifest_path: &Path,
    catalog_path: Option<&Path>,
    policy: &ScoringPolicy,
) -> Result<Vec<DbtModel>> {
    let manifest = read_artifact(manifest_path)?;
    let catalog = catalog_path.map(read_artifact).transpose()?;
    parse_models(&manifest, catalog.as_deref(), policy)
}

fn read_artifact(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(ReadinessError::PathNotFound(path.display().to_string()));
    }
    Ok(std::fs::read_to_string(path)?)
}

pub fn parse_models(
    manifest: &str,
    catalog: Option<&str>,
    policy: &ScoringPolicy,
) -> Result<Vec<DbtModel>> {
    let nodes = artifact_nodes(manifest, "manifest")?;
    let catalog_columns = match catalog {
        Some(catalog) => parse_catalog(catalog)?,
        None => BTreeMap::new(),
    };

    let mut models = Vec::new();
    for (unique_id, node) in nodes {
        if node.get("resource_type").and_then(Value::as_str) != Some("model") {
            continue;
        }
        let node: ManifestNode = serde_json::from_value(node).map_err(|e| {
            ReadinessError::DbtParse(format!("manifest node {unique_id}: {e}"))
        })?;

        let columns = match catalog_columns.get(&unique_id) {
            Some(columns) if !columns.is_empty() => columns.clone(),
            _ => manifest_columns(&node),
        };
        let snapshot = signals::derive_schema_signals(&model_snapshot(&node, columns), policy)?;

        let full_name = full_name(&node);
        debug!(model = %full_name, columns = snapshot.columns.len(), "ingested dbt model");
        models.push(DbtModel {
            full_name,
            unique_id,
            snapshot,
        });
    }

    models.sort_by(|a, b| a.full_name.cmp(&b.full_name));
    info!(models = models.len(), "parsed dbt manifest");
    Ok(models)
}

fn artifact_nodes(content: &str, artifact: &str) -> Result<serde_json::Map<String, Value>> {
    let value: Value = serde_json::from_str(content)
        .map_err(|e| ReadinessError::DbtParse(format!("{artifact} is not valid JSON: {e}")))?;
    let Value::Object(mut root) = value else {
        return Err(ReadinessError::DbtParse(format!(
            "{artifact} must be a JSON object"
        )));
    };
    match root.remove("nodes") {
        Some(Value::Object(nodes)) => Ok(nodes),
        Some(_) => Err(ReadinessError::DbtParse(format!(
            "{artifact} 'nodes' must be an object"
        ))),
        None => Err(ReadinessError::DbtParse(format!(
            "{artifact} missing 'nodes' key"
        ))),
    }
}

fn parse_catalog(content: &str) -> Result<BTreeMap<String, Vec<ColumnMeta>>> {
    let mut tables = BTreeMap::new();
    for (unique_id, node) in artifact_nodes(content, "catalog")? {
        let node: CatalogNode = serde_json::from_value(node)
            .map_err(|e| ReadinessError::DbtParse(format!("catalog node {unique_id}: {e}")))?;
        let is_table = node
            .metadata
            .kind
            .as_deref()
            .is_some_and(|kind| kind.to_lowercase().contains("table"));
        if !is_table {
            continue;
        }

        let mut columns = node.columns.into_iter().collect::<Vec<_>>();
        columns.sort_by(|(a_name, a), (b_name, b)| {
            a.index
                .unwrap_or(u32::MAX)
                .cmp(&b.index.unwrap_or(u32::MAX))
                .then_with(|| a_name.cmp(b_name))
        });
        let columns = columns
            .into_iter()
            .map(|(key, column)| ColumnMeta {
                name: column.name.unwrap_or(key),
                description: column.comment.or(column.description),
                nullable: column.data_type.as_deref().and_then(nullable_from_type),
                data_type: column.data_type,
            })
            .collect::<Vec<_>>();
        if !columns.is_empty() {
            tables.insert(unique_id, columns);
        }
    }
    Ok(tables)
}

fn manifest_columns(node: &ManifestNode) -> Vec<ColumnMeta> {
    node.columns
        .iter()
        .map(|(key, column)| ColumnMeta {
            name: column.name.clone().unwrap_or_else(|| key.clone()),
            description: column.description.clone(),
            data_type: column.data_type.clone(),
            nullable: None,
        })
        .collect()
}

fn model_snapshot(node: &ManifestNode, columns: Vec<ColumnMeta>) -> MetadataSnapshot {
    let meta = &node.meta;
    MetadataSnapshot {
        owner_name: meta.owner.clone(),
        owner_contact: meta.owner_contact.clone(),
        description: node.description.clone(),
        columns,
        intended_use: meta.intended_use.clone(),
        limitations: meta.limitations.clone(),
        has_freshness_checks: any_observed([
            meta.freshness_check,
            meta.volume_check,
            meta.tests.as_ref().map(|tests| !tests.is_empty()),
            node.config.tests.as_ref().map(|tests| !tests.is_empty()),
        ]),
        has_sla: meta.has_sla,
        has_unresolved_failures: meta.unresolved_failures_30d.map(|count| count > 0),
        had_breaking_change_recently: meta.breaking_changes_30d.map(|count| count > 0),
        changes_documented: any_observed([meta.has_release_notes, meta.has_versioning]),
        maintains_backward_compatibility: meta.backward_compatible,
        ..MetadataSnapshot::default()
    }
}

/// `None` when no signal was observed, otherwise whether any of them holds.
fn any_observed<const N: usize>(signals: [Option<bool>; N]) -> Option<bool> {
    signals
        .into_iter()
        .flatten()
        .fold(None, |acc, signal| Some(acc.unwrap_or(false) || signal))
}

fn full_name(node: &ManifestNode) -> String {
    let schema = node.schema.as_deref().unwrap_or_default();
    match node.database.as_deref().filter(|db| !db.is_empty()) {
        Some(database) => format!("{database}.{schema}.{}", node.name),
        None => format!("{schema}.{}", node.name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MANIFEST: &str = r##"{
        "metadata": {"dbt_version": "1.7.0"},
        "nodes": {
            "model.shop.orders": {
                "resource_type": "model",
                "name": "orders",
                "schema": "marts",
                "database": "analytics",
                "description": "One row per order",
                "meta": {
                    "owner": "Commerce Data",
                    "owner_contact": "#commerce-data",
                    "intended_use": "Revenue reporting",
                    "has_sla": true,
                    "freshness_check": true,
                    "breaking_changes_30d": 0,
                    "has_release_notes": false,
                    "has_versioning": true
                },
                "columns": {
                    "order_id": {"name": "order_id", "description": "Primary key"}
                },
                "config": {"materialized": "table"}
            },
            "model.shop.stg_events": {
                "resource_type": "model",
                "name": "stg_events",
                "schema": "staging",
                "database": "",
                "alias": "events",
                "columns": {
                    "EventID": {"name": "EventID"},
                    "payload_old": {"name": "payload_old", "description": "Legacy payload"}
                }
            },
            "test.shop.not_null_orders_order_id": {
                "resource_type": "test",
                "name": "not_null_orders_order_id",
                "config": {"tests": "not-an-array"}
            }
        }
    }"##;

    const CATALOG: &str = r#"{
        "nodes": {
            "model.shop.orders": {
                "metadata": {"type": "BASE TABLE"},
                "columns": {
                    "ordered_at": {"type": "TIMESTAMP NULL", "index": 2, "comment": "Order time"},
                    "order_id": {"type": "BIGINT NOT NULL", "index": 1, "comment": "Primary key"}
                }
            }
        }
    }"#;

    #[test]
    fn parses_models_sorted_by_full_name() {
        let models =
            parse_models(MANIFEST, None, &ScoringPolicy::default()).expect("manifest should parse");
        let names = models
            .iter()
            .map(|model| model.full_name.as_str())
            .collect::<Vec<_>>();
        assert_eq!(names, vec!["analytics.marts.orders", "staging.stg_events"]);
        assert_eq!(models[1].unique_id, "model.shop.stg_events");
    }

    #[test]
    fn maps_meta_onto_snapshot_signals() {
        let models =
            parse_models(MANIFEST, None, &ScoringPolicy::default()).expect("manifest should parse");
        let orders = &models[0].snapshot;
        assert_eq!(orders.owner_name.as_deref(), Some("Commerce Data"));
        assert_eq!(orders.owner_contact.as_deref(), Some("#commerce-data"));
        assert_eq!(orders.has_freshness_checks, Some(true));
        assert_eq!(orders.has_sla, Some(true));
        assert_eq!(orders.had_breaking_change_recently, Some(false));
        assert_eq!(orders.changes_documented, Some(true));
        assert_eq!(orders.maintains_backward_compatibility, None);
        assert_eq!(orders.has_unresolved_failures, None);

        let events = &models[1].snapshot;
        assert_eq!(events.has_freshness_checks, None);
        assert_eq!(events.changes_documented, None);
        assert_eq!(events.naming_convention_compliant, Some(false));
        assert_eq!(events.has_legacy_columns, Some(true));
    }

    #[test]
    fn catalog_columns_take_precedence() {
        let models = parse_models(MANIFEST, Some(CATALOG), &ScoringPolicy::default())
            .expect("artifacts should parse");
        let orders = &models[0].snapshot;
        let names = orders
            .columns
            .iter()
            .map(|column| column.name.as_str())
            .collect::<Vec<_>>();
        assert_eq!(names, vec!["order_id", "ordered_at"]);
        assert_eq!(orders.columns[0].nullable, Some(false));
        assert_eq!(orders.nullable_column_ratio, Some(0.5));
        assert_eq!(orders.naming_convention_compliant, Some(true));
    }

    #[test]
    fn rejects_manifest_without_nodes() {
        let err = parse_models(r#"{"metadata": {}}"#, None, &ScoringPolicy::default())
            .expect_err("manifest without nodes should fail");
        assert!(err.to_string().contains("missing 'nodes' key"));

        let err = parse_models("[]", None, &ScoringPolicy::default())
            .expect_err("array manifest should fail");
        assert!(err.to_string().contains("must be a JSON object"));
    }

    #[test]
    fn any_observed_distinguishes_absent_from_false() {
        assert_eq!(any_observed::<2>([None, None]), None);
        assert_eq!(any_observed([Some(false), None]), Some(false));
        assert_eq!(any_observed([Some(false), Some(true)]), Some(true));
    }
}
