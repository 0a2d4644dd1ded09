use super::codes::{action_key, reason_code};
use super::{DimensionOutcome, Remediation};
use crate::types::scoring::DimensionKey;
use crate::types::snapshot::MetadataSnapshot;

const QUALITY_CHECK_POINTS: u32 = 10;
const SLA_POINTS: u32 = 5;
const NO_FAILURES_POINTS: u32 = 5;

pub fn evaluate(snapshot: &MetadataSnapshot) -> DimensionOutcome {
    let mut outcome = DimensionOutcome::new(DimensionKey::DataQuality);

    if let Some(has_checks) = snapshot.has_freshness_checks {
        outcome.check(has_checks, QUALITY_CHECK_POINTS, || Remediation {
            reason_code: reason_code::ADD_QUALITY_CHECKS,
            message: "No freshness or volume checks configured".to_string(),
            action_key: action_key::ADD_QUALITY_CHECKS,
            title: "Add data quality checks",
            description:
                "Configure freshness and volume checks (e.g., dbt tests) to monitor data quality"
                    .to_string(),
        });
    }

    if let Some(has_sla) = snapshot.has_sla {
        outcome.check(has_sla, SLA_POINTS, || Remediation {
            reason_code: reason_code::DEFINE_SLA,
            message: "No SLA defined".to_string(),
            action_key: action_key::DEFINE_SLA,
            title: "Define data SLA",
            description: "Define a service level agreement for this dataset".to_string(),
        });
    }

    if let Some(has_failures) = snapshot.has_unresolved_failures {
        outcome.check(!has_failures, NO_FAILURES_POINTS, || Remediation {
            reason_code: reason_code::RESOLVE_FAILURES,
            message: "Unresolved data quality failures in the trailing window".to_string(),
            action_key: action_key::RESOLVE_FAILURES,
            title: "Resolve data quality failures",
            description: "Investigate and resolve outstanding data quality failures".to_string(),
        });
    }

    outcome
}
