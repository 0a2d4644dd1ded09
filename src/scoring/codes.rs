//! Stable reason codes and action keys. Consumers persist these, so they
//! must not change within a scoring version.

pub mod reason_code {
    pub const MISSING_OWNER: &str = "missing_owner";
    pub const MISSING_OWNER_CONTACT: &str = "missing_owner_contact";

    pub const MISSING_DESCRIPTION: &str = "missing_description";
    pub const INSUFFICIENT_COLUMN_DOCS: &str = "insufficient_column_docs";

    pub const FIX_NAMING: &str = "fix_naming";
    pub const REDUCE_NULLABLE_COLUMNS: &str = "reduce_nullable_columns";
    pub const REMOVE_LEGACY_COLUMNS: &str = "remove_legacy_columns";

    pub const ADD_QUALITY_CHECKS: &str = "add_quality_checks";
    pub const DEFINE_SLA: &str = "define_sla";
    pub const RESOLVE_FAILURES: &str = "resolve_failures";

    pub const PREVENT_BREAKING_CHANGES: &str = "prevent_breaking_changes";
    pub const ADD_CHANGELOG: &str = "add_changelog";
    pub const MAINTAIN_COMPATIBILITY: &str = "maintain_compatibility";

    pub const DEFINE_INTENDED_USE: &str = "define_intended_use";
    pub const DOCUMENT_LIMITATIONS: &str = "document_limitations";
}

pub mod action_key {
    pub const ASSIGN_OWNER: &str = "assign_owner";
    pub const ADD_OWNER_CONTACT: &str = "add_owner_contact";

    pub const ADD_DESCRIPTION: &str = "add_description";
    pub const DOCUMENT_COLUMNS: &str = "document_columns";

    pub const FIX_NAMING: &str = "fix_naming";
    pub const REDUCE_NULLABLE_COLUMNS: &str = "reduce_nullable_columns";
    pub const REMOVE_LEGACY_COLUMNS: &str = "remove_legacy_columns";

    pub const ADD_QUALITY_CHECKS: &str = "add_quality_checks";
    pub const DEFINE_SLA: &str = "define_sla";
    pub const RESOLVE_FAILURES: &str = "resolve_failures";

    pub const PREVENT_BREAKING_CHANGES: &str = "prevent_breaking_changes";
    pub const ADD_CHANGELOG: &str = "add_changelog";
    pub const MAINTAIN_COMPATIBILITY: &str = "maintain_compatibility";

    pub const DEFINE_INTENDED_USE: &str = "define_intended_use";
    pub const DOCUMENT_LIMITATIONS: &str = "document_limitations";
}
