use crate::error::{ReadinessError, Result};
use crate::types::scoring::{Points, ReadinessStatus, ScoreResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

/// One line of a dataset's score history. `scoring_version` lets old scores
/// be read under the rules that produced them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreHistoryEntry {
    pub dataset: String,
    pub total_score: Points,
    pub status: ReadinessStatus,
    pub recorded_at: DateTime<Utc>,
    pub scoring_version: String,
}

impl ScoreHistoryEntry {
    pub fn new(dataset: impl Into<String>, result: &ScoreResult, scoring_version: &str) -> Self {
        Self::at(dataset, result, scoring_version, Utc::now())
    }

    pub fn at(
        dataset: impl Into<String>,
        result: &ScoreResult,
        scoring_version: &str,
        recorded_at: DateTime<Utc>,
    ) -> Self {
        Self {
            dataset: dataset.into(),
            total_score: result.total_score,
            status: result.status,
            recorded_at,
            scoring_version: scoring_version.to_string(),
        }
    }
}

pub fn append_entry(path: &Path, entry: &ScoreHistoryEntry) -> Result<()> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(ReadinessError::Io)?;
    }
    let line = serde_json::to_string(entry)?;
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(ReadinessError::Io)?;
    writeln!(file, "{line}").map_err(ReadinessError::Io)?;
    Ok(())
}

pub fn read_entries(path: &Path) -> Result<Vec<ScoreHistoryEntry>> {
    if !path.exists() {
        return Ok(Vec::new());
    }
    fs::read_to_string(path)?
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| serde_json::from_str(line).map_err(ReadinessError::Json))
        .collect()
}
