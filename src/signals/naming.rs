use crate::types::snapshot::ColumnMeta;
use regex::Regex;

/// Column names that do not match the naming pattern. Blank names are skipped.
pub fn naming_violations<'a>(columns: &'a [ColumnMeta], pattern: &Regex) -> Vec<&'a str> {
    columns
        .iter()
        .map(|column| column.name.as_str())
        .filter(|name| !name.is_empty() && !pattern.is_match(name))
        .collect()
}
