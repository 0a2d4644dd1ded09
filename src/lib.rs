//! Deterministic readiness scoring for data assets.
//!
//! [`score_dataset`] maps a [`MetadataSnapshot`] to a [`ScoreResult`]: a
//! 0-100 total, a status tier, six dimension scores, and for every point lost
//! a [`Reason`] paired with an [`Action`] worth the same points.

pub mod config;
pub mod error;
pub mod history;
pub mod ingest;
pub mod report;
pub mod scoring;
pub mod signals;
pub mod types;

pub use error::{ReadinessError, Result};
pub use scoring::{score_dataset, score_dataset_with_policy};
pub use types::config::{ReadinessConfig, ScoringPolicy, SCORING_VERSION};
pub use types::report::{Action, DatasetReport, Reason};
pub use types::scoring::{DimensionKey, DimensionScore, ReadinessStatus, ScoreResult};
pub use types::snapshot::{ColumnMeta, MetadataSnapshot};
