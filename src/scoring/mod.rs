pub mod codes;
pub mod data_quality;
pub mod documentation;
pub mod operational;
pub mod ownership;
pub mod schema_hygiene;
pub mod stability;

use crate::types::config::ScoringPolicy;
use crate::types::report::{Action, Reason};
use crate::types::scoring::{
    DimensionKey, DimensionScore, Points, ReadinessStatus, ScoreResult, MAX_TOTAL_SCORE,
};
use crate::types::snapshot::MetadataSnapshot;
use tracing::{debug, warn};

/// Score a snapshot with the default policy.
pub fn score_dataset(snapshot: &MetadataSnapshot) -> ScoreResult {
    score_dataset_with_policy(snapshot, &ScoringPolicy::default())
}

/// Score a snapshot. Pure: no I/O, no shared state, same input same output.
pub fn score_dataset_with_policy(
    snapshot: &MetadataSnapshot,
    policy: &ScoringPolicy,
) -> ScoreResult {
    let outcomes = [
        ownership::evaluate(snapshot),
        documentation::evaluate(snapshot, policy),
        schema_hygiene::evaluate(snapshot, policy),
        data_quality::evaluate(snapshot),
        stability::evaluate(snapshot),
        operational::evaluate(snapshot),
    ];

    let mut dimension_scores = Vec::with_capacity(outcomes.len());
    let mut reasons = Vec::new();
    let mut actions = Vec::new();
    for outcome in outcomes {
        let (score, dimension_reasons, dimension_actions) = outcome.into_parts();
        debug!(
            dimension = %score.dimension_key,
            awarded = score.points_awarded,
            max = score.max_points,
            measured = score.measured,
            "dimension scored"
        );
        dimension_scores.push(score);
        reasons.extend(dimension_reasons);
        actions.extend(dimension_actions);
    }

    let raw_total: Points = dimension_scores
        .iter()
        .map(|score| score.points_awarded)
        .sum();
    if raw_total > MAX_TOTAL_SCORE {
        warn!(raw_total, "dimension points exceed maximum; clamping total");
    }
    let total_score = raw_total.min(MAX_TOTAL_SCORE);

    ScoreResult {
        total_score,
        status: ReadinessStatus::from_score(total_score),
        dimension_scores,
        reasons,
        actions,
    }
}

/// A failed check: the reason points were lost and the action that wins them back.
pub struct Remediation {
    pub reason_code: &'static str,
    pub message: String,
    pub action_key: &'static str,
    pub title: &'static str,
    pub description: String,
}

/// Accumulates one dimension's checks.
///
/// Only checks that were actually measured reach `award` or `deduct`, so
/// unmeasured signals never touch the dimension's maximum.
#[derive(Debug)]
pub struct DimensionOutcome {
    key: DimensionKey,
    awarded: Points,
    max: Points,
    reasons: Vec<Reason>,
    actions: Vec<Action>,
}

impl DimensionOutcome {
    pub fn new(key: DimensionKey) -> Self {
        Self {
            key,
            awarded: 0,
            max: 0,
            reasons: Vec::new(),
            actions: Vec::new(),
        }
    }

    pub fn award(&mut self, points: Points) {
        self.awarded += points;
        self.max += points;
    }

    pub fn deduct(&mut self, points: Points, remediation: Remediation) {
        self.max += points;
        self.reasons.push(Reason {
            dimension_key: self.key,
            reason_code: remediation.reason_code.to_string(),
            message: remediation.message,
            points_lost: points,
        });
        self.actions.push(Action {
            action_key: remediation.action_key.to_string(),
            dimension_key: self.key,
            title: remediation.title.to_string(),
            description: remediation.description,
            points_gain: points,
        });
    }

    /// Award `points` when `passed`, otherwise record the remediation.
    pub fn check(
        &mut self,
        passed: bool,
        points: Points,
        remediation: impl FnOnce() -> Remediation,
    ) {
        if passed {
            self.award(points);
        } else {
            self.deduct(points, remediation());
        }
    }

    pub fn into_parts(self) -> (DimensionScore, Vec<Reason>, Vec<Action>) {
        (
            DimensionScore::new(self.key, self.awarded, self.max),
            self.reasons,
            self.actions,
        )
    }
}
