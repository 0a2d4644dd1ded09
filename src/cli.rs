use clap::{Args, Parser, Subcommand, ValueEnum};
use readiness::ReadinessStatus;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "readiness",
    version,
    about = "Deterministic readiness scoring for data assets"
)]
pub struct Cli {
    /// Increase log verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Directory holding readiness.toml (defaults to the current directory)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score a snapshot file, or every snapshot under a directory
    Score(ScoreCommand),
    /// Fail when a dataset is below a status tier
    Check(CheckCommand),
    /// List remediation actions, biggest gain first
    Actions(ActionsCommand),
    /// Score every model in dbt artifacts
    Ingest(IngestCommand),
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum MinStatus {
    Draft,
    Internal,
    ProductionReady,
    Gold,
}

impl From<MinStatus> for ReadinessStatus {
    fn from(status: MinStatus) -> Self {
        match status {
            MinStatus::Draft => ReadinessStatus::Draft,
            MinStatus::Internal => ReadinessStatus::Internal,
            MinStatus::ProductionReady => ReadinessStatus::ProductionReady,
            MinStatus::Gold => ReadinessStatus::Gold,
        }
    }
}

#[derive(Args)]
pub struct ScoreCommand {
    pub path: PathBuf,
    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,
    /// Derive naming, nullable and legacy signals from column metadata
    #[arg(long)]
    pub derive_schema: bool,
    /// Append a history entry per dataset to this JSON-lines file
    #[arg(long)]
    pub history: Option<PathBuf>,
}

#[derive(Args)]
pub struct CheckCommand {
    pub path: PathBuf,
    #[arg(long, value_enum, default_value = "production-ready")]
    pub min_status: MinStatus,
    #[arg(long)]
    pub derive_schema: bool,
}

#[derive(Args)]
pub struct ActionsCommand {
    pub path: PathBuf,
    #[arg(long)]
    pub derive_schema: bool,
}

#[derive(Args)]
pub struct IngestCommand {
    /// Path to dbt manifest.json
    pub manifest: PathBuf,
    /// Path to dbt catalog.json
    #[arg(long)]
    pub catalog: Option<PathBuf>,
    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,
    #[arg(long)]
    pub history: Option<PathBuf>,
}

#[derive(Clone, ValueEnum)]
pub enum ReportFormat {
    Json,
    Md,
}
