use super::codes::{action_key, reason_code};
use super::{DimensionOutcome, Remediation};
use crate::types::scoring::DimensionKey;
use crate::types::snapshot::MetadataSnapshot;

const INTENDED_USE_POINTS: u32 = 5;
const LIMITATIONS_POINTS: u32 = 5;

pub fn evaluate(snapshot: &MetadataSnapshot) -> DimensionOutcome {
    let mut outcome = DimensionOutcome::new(DimensionKey::Operational);

    outcome.check(snapshot.has_intended_use(), INTENDED_USE_POINTS, || {
        Remediation {
            reason_code: reason_code::DEFINE_INTENDED_USE,
            message: "Intended use cases not defined".to_string(),
            action_key: action_key::DEFINE_INTENDED_USE,
            title: "Define intended use cases",
            description: "Document the intended use cases and consumers for this dataset"
                .to_string(),
        }
    });

    outcome.check(snapshot.has_limitations(), LIMITATIONS_POINTS, || {
        Remediation {
            reason_code: reason_code::DOCUMENT_LIMITATIONS,
            message: "Known limitations not documented".to_string(),
            action_key: action_key::DOCUMENT_LIMITATIONS,
            title: "Document known limitations",
            description:
                "Document any known limitations, caveats, or constraints for this dataset"
                    .to_string(),
        }
    });

    outcome
}
