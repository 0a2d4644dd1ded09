use crate::error::ReadinessError;
use regex::Regex;
use serde::Deserialize;
use std::collections::HashSet;

pub const SCORING_VERSION: &str = "v1";

pub const DEFAULT_NULLABLE_RATIO_THRESHOLD: f64 = 0.5;
pub const DEFAULT_COLUMN_DOC_COVERAGE_TARGET: f64 = 0.8;
pub const DEFAULT_NAMING_PATTERN: &str = r"^[a-z][a-z0-9_]*$";
pub const DEFAULT_LEGACY_SUFFIXES: [&str; 5] = ["_tmp", "_old", "_deprecated", "_backup", "_archive"];

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReadinessConfig {
    pub policy: Option<PolicyConfig>,
    pub scoring: Option<ScoringConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PolicyConfig {
    pub nullable_ratio_threshold: Option<f64>,
    pub column_doc_coverage_target: Option<f64>,
    pub naming_pattern: Option<String>,
    pub legacy_suffixes: Option<Vec<String>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScoringConfig {
    pub version: Option<String>,
}

/// Tunable constants consulted by the evaluators and by signal derivation.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoringPolicy {
    /// Nullable ratios at or above this fail the schema hygiene check.
    pub nullable_ratio_threshold: f64,
    /// Minimum share of documented columns for the coverage credit.
    pub column_doc_coverage_target: f64,
    pub naming_pattern: String,
    pub legacy_suffixes: Vec<String>,
}

impl Default for ScoringPolicy {
    fn default() -> Self {
        Self {
            nullable_ratio_threshold: DEFAULT_NULLABLE_RATIO_THRESHOLD,
            column_doc_coverage_target: DEFAULT_COLUMN_DOC_COVERAGE_TARGET,
            naming_pattern: DEFAULT_NAMING_PATTERN.to_string(),
            legacy_suffixes: DEFAULT_LEGACY_SUFFIXES
                .iter()
                .map(ToString::to_string)
                .collect(),
        }
    }
}

impl ScoringPolicy {
    pub fn naming_regex(&self) -> Result<Regex, ReadinessError> {
        Regex::new(&self.naming_pattern).map_err(|e| {
            ReadinessError::ConfigParse(format!(
                "policy.naming_pattern is not a valid regex: {e}"
            ))
        })
    }
}

impl ReadinessConfig {
    pub fn policy(&self) -> ScoringPolicy {
        let defaults = ScoringPolicy::default();
        match &self.policy {
            Some(policy) => ScoringPolicy {
                nullable_ratio_threshold: policy
                    .nullable_ratio_threshold
                    .unwrap_or(defaults.nullable_ratio_threshold),
                column_doc_coverage_target: policy
                    .column_doc_coverage_target
                    .unwrap_or(defaults.column_doc_coverage_target),
                naming_pattern: policy
                    .naming_pattern
                    .clone()
                    .unwrap_or(defaults.naming_pattern),
                legacy_suffixes: policy
                    .legacy_suffixes
                    .clone()
                    .unwrap_or(defaults.legacy_suffixes),
            },
            None => defaults,
        }
    }

    pub fn scoring_version(&self) -> String {
        self.scoring
            .as_ref()
            .and_then(|scoring| scoring.version.clone())
            .unwrap_or_else(|| SCORING_VERSION.to_string())
    }

    pub fn validate(&self) -> Result<(), ReadinessError> {
        if let Some(policy) = &self.policy {
            if let Some(threshold) = policy.nullable_ratio_threshold {
                if !(0.0..=1.0).contains(&threshold) {
                    return Err(ReadinessError::ConfigParse(
                        "policy.nullable_ratio_threshold must be between 0.0 and 1.0".to_string(),
                    ));
                }
            }
            if let Some(target) = policy.column_doc_coverage_target {
                if !(0.0..=1.0).contains(&target) {
                    return Err(ReadinessError::ConfigParse(
                        "policy.column_doc_coverage_target must be between 0.0 and 1.0"
                            .to_string(),
                    ));
                }
            }
            if let Some(suffixes) = &policy.legacy_suffixes {
                validate_legacy_suffixes(suffixes)?;
            }
        }

        self.policy().naming_regex()?;

        if let Some(version) = self
            .scoring
            .as_ref()
            .and_then(|scoring| scoring.version.as_ref())
        {
            if version.trim().is_empty() {
                return Err(ReadinessError::ConfigParse(
                    "scoring.version cannot be empty".to_string(),
                ));
            }
        }

        Ok(())
    }
}

fn validate_legacy_suffixes(suffixes: &[String]) -> Result<(), ReadinessError> {
    let mut seen = HashSet::new();
    for suffix in suffixes {
        let normalized = suffix.trim().to_lowercase();
        if normalized.is_empty() {
            return Err(ReadinessError::ConfigParse(
                "policy.legacy_suffixes entries must be non-empty".to_string(),
            ));
        }
        if !seen.insert(normalized.clone()) {
            return Err(ReadinessError::ConfigParse(format!(
                "policy.legacy_suffixes contains duplicate suffix: {normalized}"
            )));
        }
    }
    Ok(())
}
