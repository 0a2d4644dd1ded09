pub mod json;
pub mod md;

use crate::error::ReadinessError;
use crate::types::report::DatasetReport;

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Json,
    Md,
}

pub fn render(reports: &[DatasetReport], format: OutputFormat) -> Result<String, ReadinessError> {
    match format {
        OutputFormat::Json => json::to_json(reports).map_err(ReadinessError::Json),
        OutputFormat::Md => Ok(md::to_markdown(reports)),
    }
}
