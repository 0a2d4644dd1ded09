use serde::{Deserialize, Deserializer, Serialize};
use tracing::warn;

/// Column metadata as supplied by the catalog.
///
/// `data_type` and `nullable` are only consulted when schema signals are
/// derived from columns; the evaluators look at `name` and `description`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ColumnMeta {
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(
        default,
        rename = "type",
        alias = "data_type",
        skip_serializing_if = "Option::is_none"
    )]
    pub data_type: Option<String>,
    #[serde(
        default,
        deserialize_with = "tri_state",
        skip_serializing_if = "Option::is_none"
    )]
    pub nullable: Option<bool>,
}

impl ColumnMeta {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn documented(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: Some(description.into()),
            ..Self::default()
        }
    }

    pub fn is_documented(&self) -> bool {
        is_present(self.description.as_deref())
    }
}

/// Everything the scoring engine knows about one dataset.
///
/// Every signal is optional. `None` means the signal was not measured and it
/// is left out of both the earned and the maximum points of its dimension.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MetadataSnapshot {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_contact: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub columns: Vec<ColumnMeta>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intended_use: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limitations: Option<String>,

    #[serde(
        default,
        deserialize_with = "tri_state",
        skip_serializing_if = "Option::is_none"
    )]
    pub has_freshness_checks: Option<bool>,
    #[serde(
        default,
        deserialize_with = "tri_state",
        skip_serializing_if = "Option::is_none"
    )]
    pub has_sla: Option<bool>,
    #[serde(
        default,
        deserialize_with = "tri_state",
        skip_serializing_if = "Option::is_none"
    )]
    pub has_unresolved_failures: Option<bool>,

    #[serde(
        default,
        deserialize_with = "tri_state",
        skip_serializing_if = "Option::is_none"
    )]
    pub had_breaking_change_recently: Option<bool>,
    #[serde(
        default,
        deserialize_with = "tri_state",
        skip_serializing_if = "Option::is_none"
    )]
    pub changes_documented: Option<bool>,
    #[serde(
        default,
        deserialize_with = "tri_state",
        skip_serializing_if = "Option::is_none"
    )]
    pub maintains_backward_compatibility: Option<bool>,

    #[serde(
        default,
        deserialize_with = "tri_state",
        skip_serializing_if = "Option::is_none"
    )]
    pub naming_convention_compliant: Option<bool>,
    #[serde(
        default,
        deserialize_with = "lenient_ratio",
        skip_serializing_if = "Option::is_none"
    )]
    pub nullable_column_ratio: Option<f64>,
    #[serde(
        default,
        deserialize_with = "tri_state",
        skip_serializing_if = "Option::is_none"
    )]
    pub has_legacy_columns: Option<bool>,
}

impl MetadataSnapshot {
    pub fn has_owner(&self) -> bool {
        is_present(self.owner_name.as_deref())
    }

    pub fn has_owner_contact(&self) -> bool {
        is_present(self.owner_contact.as_deref())
    }

    pub fn has_description(&self) -> bool {
        is_present(self.description.as_deref())
    }

    pub fn has_intended_use(&self) -> bool {
        is_present(self.intended_use.as_deref())
    }

    pub fn has_limitations(&self) -> bool {
        is_present(self.limitations.as_deref())
    }

    pub fn documented_column_count(&self) -> usize {
        self.columns
            .iter()
            .filter(|column| column.is_documented())
            .count()
    }

    /// Nullable ratio clamped to `[0, 1]`. NaN counts as not measured.
    pub fn nullable_ratio(&self) -> Option<f64> {
        let ratio = self.nullable_column_ratio?;
        if ratio.is_nan() {
            warn!("nullable_column_ratio is NaN; treating as not measured");
            return None;
        }
        if !(0.0..=1.0).contains(&ratio) {
            warn!(ratio, "nullable_column_ratio outside [0, 1]; clamping");
        }
        Some(ratio.clamp(0.0, 1.0))
    }
}

/// Empty and whitespace-only strings count as absent.
pub fn is_present(value: Option<&str>) -> bool {
    value.is_some_and(|text| !text.trim().is_empty())
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawSignal {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl RawSignal {
    fn into_signal(self) -> Option<bool> {
        match self {
            RawSignal::Bool(value) => Some(value),
            RawSignal::Int(0) => Some(false),
            RawSignal::Int(1) => Some(true),
            RawSignal::Int(other) => {
                warn!(value = other, "unrecognized signal value; treating as not measured");
                None
            }
            RawSignal::Float(other) => {
                warn!(value = other, "unrecognized signal value; treating as not measured");
                None
            }
            RawSignal::Text(text) => match text.trim().to_ascii_lowercase().as_str() {
                "true" | "yes" | "pass" => Some(true),
                "false" | "no" | "fail" => Some(false),
                other => {
                    if !other.is_empty() && other != "unknown" {
                        warn!(value = other, "unrecognized signal value; treating as not measured");
                    }
                    None
                }
            },
        }
    }
}

/// Tri-state signal: booleans and a few spellings of yes/no are accepted,
/// anything else is "not measured".
pub(crate) fn tri_state<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<RawSignal>::deserialize(deserializer)?;
    Ok(raw.and_then(RawSignal::into_signal))
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawRatio {
    Number(f64),
    Text(String),
}

pub(crate) fn lenient_ratio<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<RawRatio>::deserialize(deserializer)?;
    Ok(match raw {
        Some(RawRatio::Number(value)) => Some(value),
        Some(RawRatio::Text(text)) => text.trim().parse::<f64>().ok(),
        None => None,
    })
}
