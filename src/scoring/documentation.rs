use super::codes::{action_key, reason_code};
use super::{DimensionOutcome, Remediation};
use crate::types::config::ScoringPolicy;
use crate::types::scoring::DimensionKey;
use crate::types::snapshot::MetadataSnapshot;

const DESCRIPTION_POINTS: u32 = 5;
const COLUMN_COVERAGE_POINTS: u32 = 10;
/// Description freshness allocation. Snapshots carry no last-updated
/// timestamp, so every dataset is credited in full.
const DESCRIPTION_FRESHNESS_POINTS: u32 = 5;

pub fn evaluate(snapshot: &MetadataSnapshot, policy: &ScoringPolicy) -> DimensionOutcome {
    let mut outcome = DimensionOutcome::new(DimensionKey::Documentation);

    outcome.check(snapshot.has_description(), DESCRIPTION_POINTS, || {
        Remediation {
            reason_code: reason_code::MISSING_DESCRIPTION,
            message: "Dataset description is missing".to_string(),
            action_key: action_key::ADD_DESCRIPTION,
            title: "Add dataset description",
            description:
                "Write a clear description explaining what this dataset contains and its purpose"
                    .to_string(),
        }
    });

    outcome.award(DESCRIPTION_FRESHNESS_POINTS);

    let coverage = ColumnCoverage::of(snapshot);
    outcome.check(
        coverage.ratio() >= policy.column_doc_coverage_target,
        COLUMN_COVERAGE_POINTS,
        || Remediation {
            reason_code: reason_code::INSUFFICIENT_COLUMN_DOCS,
            message: format!(
                "Only {}% of columns documented ({} columns missing docs)",
                coverage.percent(),
                coverage.undocumented()
            ),
            action_key: action_key::DOCUMENT_COLUMNS,
            title: "Document missing columns",
            description: format!(
                "Add descriptions for {} undocumented columns (target: {:.0}% coverage)",
                coverage.undocumented(),
                policy.column_doc_coverage_target * 100.0
            ),
        },
    );

    outcome
}

#[derive(Debug, Clone, Copy)]
struct ColumnCoverage {
    documented: usize,
    total: usize,
}

impl ColumnCoverage {
    fn of(snapshot: &MetadataSnapshot) -> Self {
        Self {
            documented: snapshot.documented_column_count(),
            total: snapshot.columns.len(),
        }
    }

    /// A dataset without declared columns has nothing left undocumented.
    fn ratio(self) -> f64 {
        if self.total == 0 {
            1.0
        } else {
            self.documented as f64 / self.total as f64
        }
    }

    fn percent(self) -> usize {
        if self.total == 0 {
            100
        } else {
            self.documented * 100 / self.total
        }
    }

    fn undocumented(self) -> usize {
        self.total - self.documented
    }
}
