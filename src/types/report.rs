use super::scoring::{DimensionKey, Points, ScoreResult};
use serde::{Deserialize, Serialize};

/// Why points were lost in a dimension.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reason {
    pub dimension_key: DimensionKey,
    pub reason_code: String,
    pub message: String,
    pub points_lost: Points,
}

/// Remediation for exactly one [`Reason`], worth the points that reason lost.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Action {
    pub action_key: String,
    pub dimension_key: DimensionKey,
    pub title: String,
    pub description: String,
    pub points_gain: Points,
}

/// A scored dataset as handed to the renderers.
#[derive(Debug, Clone, Serialize)]
pub struct DatasetReport {
    pub dataset: String,
    pub scoring_version: String,
    #[serde(flatten)]
    pub result: ScoreResult,
}

impl DatasetReport {
    pub fn new(
        dataset: impl Into<String>,
        scoring_version: impl Into<String>,
        result: ScoreResult,
    ) -> Self {
        Self {
            dataset: dataset.into(),
            scoring_version: scoring_version.into(),
            result,
        }
    }
}
