use super::codes::{action_key, reason_code};
use super::{DimensionOutcome, Remediation};
use crate::types::config::ScoringPolicy;
use crate::types::scoring::DimensionKey;
use crate::types::snapshot::MetadataSnapshot;

const CHECK_POINTS: u32 = 5;

pub fn evaluate(snapshot: &MetadataSnapshot, policy: &ScoringPolicy) -> DimensionOutcome {
    let mut outcome = DimensionOutcome::new(DimensionKey::SchemaHygiene);

    if let Some(compliant) = snapshot.naming_convention_compliant {
        outcome.check(compliant, CHECK_POINTS, || Remediation {
            reason_code: reason_code::FIX_NAMING,
            message: "Column names violate the snake_case naming convention".to_string(),
            action_key: action_key::FIX_NAMING,
            title: "Fix column naming conventions",
            description: "Rename columns to follow the snake_case convention".to_string(),
        });
    }

    if let Some(ratio) = snapshot.nullable_ratio() {
        let threshold = policy.nullable_ratio_threshold;
        outcome.check(ratio < threshold, CHECK_POINTS, || Remediation {
            reason_code: reason_code::REDUCE_NULLABLE_COLUMNS,
            message: format!(
                "{:.0}% of columns are nullable (threshold: {:.0}%)",
                (ratio * 100.0).floor(),
                threshold * 100.0
            ),
            action_key: action_key::REDUCE_NULLABLE_COLUMNS,
            title: "Reduce nullable columns",
            description:
                "Review and make columns non-nullable where appropriate to improve data quality"
                    .to_string(),
        });
    }

    if let Some(has_legacy) = snapshot.has_legacy_columns {
        outcome.check(!has_legacy, CHECK_POINTS, || Remediation {
            reason_code: reason_code::REMOVE_LEGACY_COLUMNS,
            message: "Legacy or unused columns detected (ending in _tmp, _old, etc.)".to_string(),
            action_key: action_key::REMOVE_LEGACY_COLUMNS,
            title: "Remove legacy columns",
            description: "Remove or rename legacy columns to clean up the schema".to_string(),
        });
    }

    outcome
}
