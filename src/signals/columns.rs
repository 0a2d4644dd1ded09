use crate::types::snapshot::ColumnMeta;

/// Columns whose lowercased name ends with one of the legacy suffixes.
pub fn legacy_columns<'a>(columns: &'a [ColumnMeta], suffixes: &[String]) -> Vec<&'a str> {
    let suffixes = suffixes
        .iter()
        .map(|suffix| suffix.trim().to_lowercase())
        .filter(|suffix| !suffix.is_empty())
        .collect::<Vec<_>>();
    columns
        .iter()
        .filter(|column| {
            let name = column.name.to_lowercase();
            suffixes.iter().any(|suffix| name.ends_with(suffix.as_str()))
        })
        .map(|column| column.name.as_str())
        .collect()
}

/// Share of columns flagged nullable, or `None` when no column carries the flag.
///
/// An explicit `nullable` wins over whatever the type string says.
pub fn nullable_ratio(columns: &[ColumnMeta]) -> Option<f64> {
    let flags = columns.iter().map(column_nullable).collect::<Vec<_>>();
    if flags.iter().all(Option::is_none) {
        return None;
    }
    let nullable = flags.iter().filter(|flag| **flag == Some(true)).count();
    Some(nullable as f64 / columns.len() as f64)
}

fn column_nullable(column: &ColumnMeta) -> Option<bool> {
    column
        .nullable
        .or_else(|| column.data_type.as_deref().and_then(nullable_from_type))
}

/// Nullability from a warehouse type string such as `VARCHAR(255) NOT NULL`.
pub fn nullable_from_type(data_type: &str) -> Option<bool> {
    let upper = data_type.to_uppercase();
    if upper.contains("NOT NULL") {
        Some(false)
    } else if upper.contains("NULL") {
        Some(true)
    } else {
        None
    }
}
