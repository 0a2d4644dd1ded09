use super::codes::{action_key, reason_code};
use super::{DimensionOutcome, Remediation};
use crate::types::scoring::DimensionKey;
use crate::types::snapshot::MetadataSnapshot;

const NO_BREAKING_CHANGE_POINTS: u32 = 10;
const CHANGELOG_POINTS: u32 = 5;
const COMPATIBILITY_POINTS: u32 = 5;

pub fn evaluate(snapshot: &MetadataSnapshot) -> DimensionOutcome {
    let mut outcome = DimensionOutcome::new(DimensionKey::Stability);

    if let Some(had_breaking_change) = snapshot.had_breaking_change_recently {
        outcome.check(!had_breaking_change, NO_BREAKING_CHANGE_POINTS, || {
            Remediation {
                reason_code: reason_code::PREVENT_BREAKING_CHANGES,
                message: "Breaking changes in the trailing window".to_string(),
                action_key: action_key::PREVENT_BREAKING_CHANGES,
                title: "Prevent breaking changes",
                description: "Review change management process to avoid breaking changes that impact downstream consumers".to_string(),
            }
        });
    }

    if let Some(documented) = snapshot.changes_documented {
        outcome.check(documented, CHANGELOG_POINTS, || Remediation {
            reason_code: reason_code::ADD_CHANGELOG,
            message: "Changes are not documented or versioned".to_string(),
            action_key: action_key::ADD_CHANGELOG,
            title: "Document schema changes",
            description:
                "Maintain release notes or changelog to document schema changes and versions"
                    .to_string(),
        });
    }

    if let Some(compatible) = snapshot.maintains_backward_compatibility {
        outcome.check(compatible, COMPATIBILITY_POINTS, || Remediation {
            reason_code: reason_code::MAINTAIN_COMPATIBILITY,
            message: "Schema changes break backward compatibility".to_string(),
            action_key: action_key::MAINTAIN_COMPATIBILITY,
            title: "Maintain backward compatibility",
            description:
                "Ensure schema changes maintain backward compatibility for existing consumers"
                    .to_string(),
        });
    }

    outcome
}
