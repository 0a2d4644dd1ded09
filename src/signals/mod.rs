pub mod columns;
pub mod naming;

use crate::error::Result;
use crate::types::config::ScoringPolicy;
use crate::types::snapshot::MetadataSnapshot;
use tracing::debug;

/// Fill schema hygiene signals the snapshot leaves unset from its columns.
///
/// Explicit signals always win. A snapshot without columns comes back
/// unchanged. Scoring never derives on its own; callers opt in.
pub fn derive_schema_signals(
    snapshot: &MetadataSnapshot,
    policy: &ScoringPolicy,
) -> Result<MetadataSnapshot> {
    let mut derived = snapshot.clone();
    if derived.columns.is_empty() {
        return Ok(derived);
    }

    if derived.naming_convention_compliant.is_none() {
        let pattern = policy.naming_regex()?;
        let violations = naming::naming_violations(&derived.columns, &pattern);
        debug!(violations = violations.len(), "derived naming signal");
        derived.naming_convention_compliant = Some(violations.is_empty());
    }

    if derived.has_legacy_columns.is_none() {
        let legacy = columns::legacy_columns(&derived.columns, &policy.legacy_suffixes);
        debug!(legacy = legacy.len(), "derived legacy column signal");
        derived.has_legacy_columns = Some(!legacy.is_empty());
    }

    if derived.nullable_column_ratio.is_none() {
        derived.nullable_column_ratio = columns::nullable_ratio(&derived.columns);
    }

    Ok(derived)
}
