use super::codes::{action_key, reason_code};
use super::{DimensionOutcome, Remediation};
use crate::types::scoring::DimensionKey;
use crate::types::snapshot::MetadataSnapshot;

const OWNER_POINTS: u32 = 10;
const CONTACT_POINTS: u32 = 5;

pub fn evaluate(snapshot: &MetadataSnapshot) -> DimensionOutcome {
    let mut outcome = DimensionOutcome::new(DimensionKey::Ownership);

    outcome.check(snapshot.has_owner(), OWNER_POINTS, || Remediation {
        reason_code: reason_code::MISSING_OWNER,
        message: "No owner assigned".to_string(),
        action_key: action_key::ASSIGN_OWNER,
        title: "Assign dataset owner",
        description: "Assign a clear owner responsible for this dataset".to_string(),
    });

    outcome.check(snapshot.has_owner_contact(), CONTACT_POINTS, || Remediation {
        reason_code: reason_code::MISSING_OWNER_CONTACT,
        message: "Owner contact/escalation channel not defined".to_string(),
        action_key: action_key::ADD_OWNER_CONTACT,
        title: "Add owner contact information",
        description: "Add an escalation channel (Slack, email, etc.) for the owner".to_string(),
    });

    outcome
}
