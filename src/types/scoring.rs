use super::report::{Action, Reason};
use serde::{Deserialize, Serialize};
use std::fmt;

pub type Points = u32;

pub const MAX_TOTAL_SCORE: Points = 100;

pub const INTERNAL_THRESHOLD: Points = 50;
pub const PRODUCTION_READY_THRESHOLD: Points = 70;
pub const GOLD_THRESHOLD: Points = 85;

/// The six readiness dimensions, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DimensionKey {
    Ownership,
    Documentation,
    SchemaHygiene,
    DataQuality,
    Stability,
    Operational,
}

impl DimensionKey {
    pub const ALL: [DimensionKey; 6] = [
        DimensionKey::Ownership,
        DimensionKey::Documentation,
        DimensionKey::SchemaHygiene,
        DimensionKey::DataQuality,
        DimensionKey::Stability,
        DimensionKey::Operational,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            DimensionKey::Ownership => "ownership",
            DimensionKey::Documentation => "documentation",
            DimensionKey::SchemaHygiene => "schema_hygiene",
            DimensionKey::DataQuality => "data_quality",
            DimensionKey::Stability => "stability",
            DimensionKey::Operational => "operational",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DimensionKey::Ownership => "Ownership & Accountability",
            DimensionKey::Documentation => "Documentation Quality",
            DimensionKey::SchemaHygiene => "Schema Hygiene",
            DimensionKey::DataQuality => "Data Quality Signals",
            DimensionKey::Stability => "Stability & Change Management",
            DimensionKey::Operational => "Operational Metadata",
        }
    }

    /// Points available when every signal of the dimension is measured.
    pub fn full_points(self) -> Points {
        match self {
            DimensionKey::Ownership => 15,
            DimensionKey::Documentation => 20,
            DimensionKey::SchemaHygiene => 15,
            DimensionKey::DataQuality => 20,
            DimensionKey::Stability => 20,
            DimensionKey::Operational => 10,
        }
    }
}

impl fmt::Display for DimensionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DimensionScore {
    pub dimension_key: DimensionKey,
    pub points_awarded: Points,
    pub max_points: Points,
    pub measured: bool,
    pub percentage: f64,
}

impl DimensionScore {
    pub fn new(dimension_key: DimensionKey, points_awarded: Points, max_points: Points) -> Self {
        let points_awarded = points_awarded.min(max_points);
        let percentage = if max_points == 0 {
            0.0
        } else {
            f64::from(points_awarded) / f64::from(max_points) * 100.0
        };
        Self {
            dimension_key,
            points_awarded,
            max_points,
            measured: max_points > 0,
            percentage,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReadinessStatus {
    Draft,
    Internal,
    ProductionReady,
    Gold,
}

impl ReadinessStatus {
    /// Tiers are closed-open on the lower bound: 50 is internal, 85 is gold.
    pub fn from_score(score: Points) -> Self {
        if score >= GOLD_THRESHOLD {
            ReadinessStatus::Gold
        } else if score >= PRODUCTION_READY_THRESHOLD {
            ReadinessStatus::ProductionReady
        } else if score >= INTERNAL_THRESHOLD {
            ReadinessStatus::Internal
        } else {
            ReadinessStatus::Draft
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ReadinessStatus::Draft => "draft",
            ReadinessStatus::Internal => "internal",
            ReadinessStatus::ProductionReady => "production_ready",
            ReadinessStatus::Gold => "gold",
        }
    }
}

impl fmt::Display for ReadinessStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub total_score: Points,
    pub status: ReadinessStatus,
    pub dimension_scores: Vec<DimensionScore>,
    pub reasons: Vec<Reason>,
    pub actions: Vec<Action>,
}

impl ScoreResult {
    pub fn dimension(&self, key: DimensionKey) -> Option<&DimensionScore> {
        self.dimension_scores
            .iter()
            .find(|score| score.dimension_key == key)
    }

    /// Actions ordered by points gained, highest first; ties by action key.
    pub fn actions_by_gain(&self) -> Vec<&Action> {
        let mut actions = self.actions.iter().collect::<Vec<_>>();
        actions.sort_by(|a, b| {
            b.points_gain
                .cmp(&a.points_gain)
                .then_with(|| a.action_key.cmp(&b.action_key))
        });
        actions
    }

    pub fn points_available(&self) -> Points {
        self.actions.iter().map(|action| action.points_gain).sum()
    }
}
