use crate::types::report::DatasetReport;

/// A single report renders as an object, several as an array.
pub fn to_json(reports: &[DatasetReport]) -> Result<String, serde_json::Error> {
    match reports {
        [single] => serde_json::to_string_pretty(single),
        _ => serde_json::to_string_pretty(reports),
    }
}
