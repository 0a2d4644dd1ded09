mod cli;

use clap::Parser;
use readiness::history::{self, ScoreHistoryEntry};
use readiness::ingest::{dbt, file};
use readiness::report::{self, OutputFormat};
use readiness::{
    config, score_dataset_with_policy, signals, DatasetReport, ReadinessConfig, ReadinessError,
    ReadinessStatus, ScoringPolicy, SCORING_VERSION,
};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const WARNINGS: i32 = 1;
    pub const BELOW_TIER: i32 = 2;
    pub const RUNTIME_FAILURE: i32 = 3;
}

struct Settings {
    policy: ScoringPolicy,
    scoring_version: String,
}

fn init_tracing(verbose: u8, quiet: bool) {
    let level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(filter)
        .init();
}

fn load_settings(config_root: Option<&Path>) -> Result<Settings, ReadinessError> {
    let root = match config_root {
        Some(root) if !root.exists() => {
            return Err(ReadinessError::PathNotFound(root.display().to_string()))
        }
        Some(root) => root.to_path_buf(),
        None => PathBuf::from("."),
    };
    let loaded = config::load_config(&root)?;
    if loaded.is_none() {
        debug!(root = %root.display(), "no readiness config found, using defaults");
    }
    Ok(Settings {
        policy: loaded
            .as_ref()
            .map(ReadinessConfig::policy)
            .unwrap_or_default(),
        scoring_version: loaded
            .as_ref()
            .map(ReadinessConfig::scoring_version)
            .unwrap_or_else(|| SCORING_VERSION.to_string()),
    })
}

fn score_path(
    path: &Path,
    settings: &Settings,
    derive_schema: bool,
) -> Result<Vec<DatasetReport>, ReadinessError> {
    if !path.exists() {
        return Err(ReadinessError::PathNotFound(path.display().to_string()));
    }

    let mut reports = Vec::new();
    for snapshot_path in file::discover_snapshots(path) {
        let mut snapshot = file::load_snapshot(&snapshot_path)?;
        if derive_schema {
            snapshot = signals::derive_schema_signals(&snapshot, &settings.policy)?;
        }
        let result = score_dataset_with_policy(&snapshot, &settings.policy);
        let dataset = file::dataset_name(&snapshot_path);
        info!(
            dataset = %dataset,
            score = result.total_score,
            status = %result.status,
            "scored dataset"
        );
        reports.push(DatasetReport::new(
            dataset,
            settings.scoring_version.as_str(),
            result,
        ));
    }

    if reports.is_empty() {
        warn!(path = %path.display(), "no snapshot files found");
    }
    Ok(reports)
}

fn record_history(history_path: &Path, reports: &[DatasetReport]) -> Result<(), ReadinessError> {
    for report in reports {
        let entry = ScoreHistoryEntry::new(
            report.dataset.as_str(),
            &report.result,
            &report.scoring_version,
        );
        history::append_entry(history_path, &entry)?;
    }
    info!(
        path = %history_path.display(),
        entries = reports.len(),
        "recorded score history"
    );
    Ok(())
}

fn output_format(format: &cli::ReportFormat) -> OutputFormat {
    match format {
        cli::ReportFormat::Json => OutputFormat::Json,
        cli::ReportFormat::Md => OutputFormat::Md,
    }
}

fn run() -> Result<i32, ReadinessError> {
    let cli = cli::Cli::parse();
    init_tracing(cli.verbose, cli.quiet);
    let settings = load_settings(cli.config.as_deref())?;

    match cli.command {
        cli::Commands::Score(cmd) => {
            let reports = score_path(&cmd.path, &settings, cmd.derive_schema)?;
            if let Some(history_path) = &cmd.history {
                record_history(history_path, &reports)?;
            }
            let rendered = report::render(&reports, output_format(&cmd.format))?;
            println!("{rendered}");
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Check(cmd) => {
            let reports = score_path(&cmd.path, &settings, cmd.derive_schema)?;
            if reports.is_empty() {
                println!("check: no snapshots found");
                return Ok(exit_code::WARNINGS);
            }

            let required = ReadinessStatus::from(cmd.min_status);
            let mut below = 0;
            for report in &reports {
                let passed = report.result.status >= required;
                let level = if passed { "PASS" } else { "FAIL" };
                println!(
                    "[{}] {}: {}/100 ({})",
                    level, report.dataset, report.result.total_score, report.result.status
                );
                if !passed {
                    below += 1;
                }
            }

            if below > 0 {
                println!("check: {below} dataset(s) below {required}");
                Ok(exit_code::BELOW_TIER)
            } else {
                Ok(exit_code::SUCCESS)
            }
        }
        cli::Commands::Actions(cmd) => {
            let reports = score_path(&cmd.path, &settings, cmd.derive_schema)?;
            for report in &reports {
                let actions = report.result.actions_by_gain();
                if actions.is_empty() {
                    println!("{}: no actions", report.dataset);
                    continue;
                }

                println!(
                    "{}: {}/100, up to +{} available",
                    report.dataset,
                    report.result.total_score,
                    report.result.points_available()
                );
                for action in actions {
                    println!(
                        "- {} [+{} {}] {}",
                        action.action_key, action.points_gain, action.dimension_key, action.title
                    );
                }
            }
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Ingest(cmd) => {
            let models = dbt::load_models(&cmd.manifest, cmd.catalog.as_deref(), &settings.policy)?;
            let reports = models
                .into_iter()
                .map(|model| {
                    let result = score_dataset_with_policy(&model.snapshot, &settings.policy);
                    info!(
                        model = %model.unique_id,
                        score = result.total_score,
                        status = %result.status,
                        "scored dbt model"
                    );
                    DatasetReport::new(model.full_name, settings.scoring_version.as_str(), result)
                })
                .collect::<Vec<_>>();
            if let Some(history_path) = &cmd.history {
                record_history(history_path, &reports)?;
            }
            let rendered = report::render(&reports, output_format(&cmd.format))?;
            println!("{rendered}");
            Ok(exit_code::SUCCESS)
        }
    }
}

fn main() {
    match run() {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(exit_code::RUNTIME_FAILURE);
        }
    }
}
