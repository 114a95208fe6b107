//! Coercion of loosely shaped API fields into the fixed shapes used for
//! rendering.

use jiff::{Timestamp, civil, tz::TimeZone};
use rust_decimal::Decimal;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

pub const NOT_SPECIFIED: &str = "Not specified";
pub const DEFAULT_SALARY: &str = "Competitive salary based on experience";
pub const NO_DESCRIPTION: &str = "No description available";
pub const DEFAULT_JOB_TYPE: &str = "Full-Time";
pub const DEFAULT_PROJECT_TYPE: &str = "Infrastructure";
pub const PLACEHOLDER_PROJECT_IMAGE: &str = "/placeholder-project.jpg";

/// Path prefix of every API route. Stripped from the configured base URL to
/// obtain the origin that serves uploaded files.
pub const API_PREFIX: &str = "/api/v1";

/// A field documented as a list of strings.
///
/// The server has been seen sending each of these shapes for the same
/// field. The union is resolved by [`ListField::into_strings`] and never
/// leaves this crate's raw types.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ListField {
    #[default]
    Missing,
    Items(Vec<Value>),
    /// A string whose contents parsed as JSON.
    Encoded(Value),
    /// Free text, one entry per line.
    Text(String),
    Map(Map<String, Value>),
    Scalar(Value),
}

impl From<Value> for ListField {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => ListField::Missing,
            Value::Array(items) => ListField::Items(items),
            Value::Object(map) => ListField::Map(map),
            Value::String(text) if text.trim().is_empty() => {
                ListField::Missing
            }
            Value::String(text) => match serde_json::from_str(&text) {
                Ok(parsed) => ListField::Encoded(parsed),
                Err(_) => ListField::Text(text),
            },
            scalar => ListField::Scalar(scalar),
        }
    }
}

impl<'de> Deserialize<'de> for ListField {
    fn deserialize<D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Self, D::Error> {
        Ok(Value::deserialize(deserializer)?.into())
    }
}

impl ListField {
    /// Resolve to an ordered list of non-empty, trimmed strings.
    pub fn into_strings(self) -> Vec<String> {
        match self {
            ListField::Missing => Vec::new(),
            ListField::Items(items) => items_to_strings(items),
            ListField::Encoded(parsed) => match parsed {
                Value::Array(items) => items_to_strings(items),
                Value::Object(map) => items_to_strings(map.into_values()),
                // the text itself was the value, so it is kept as written
                Value::Null => vec![Value::Null.to_string()],
                other => item_text(&other).into_iter().collect(),
            },
            ListField::Text(text) => text
                .split(['\r', '\n'])
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(str::to_string)
                .collect(),
            ListField::Map(map) => items_to_strings(map.into_values()),
            ListField::Scalar(value) => item_text(&value).into_iter().collect(),
        }
    }
}

/// Normalize any JSON value into a list of strings.
pub fn string_list(value: Value) -> Vec<String> {
    ListField::from(value).into_strings()
}

fn items_to_strings(items: impl IntoIterator<Item = Value>) -> Vec<String> {
    items.into_iter().filter_map(|item| item_text(&item)).collect()
}

fn item_text(value: &Value) -> Option<String> {
    let text = match value {
        Value::Null => return None,
        Value::String(text) => text.trim().to_string(),
        other => other.to_string(),
    };
    (!text.is_empty()).then_some(text)
}

/// Milestone entries of a project, accepting a JSON-encoded string.
///
/// Anything that is not (or does not parse to) an array yields no entries.
pub fn milestone_entries(value: &Value) -> Vec<Value> {
    match value {
        Value::Array(items) => items.clone(),
        Value::String(text) => {
            match serde_json::from_str::<Value>(text) {
                Ok(Value::Array(items)) => items,
                Ok(_) => Vec::new(),
                Err(e) => {
                    tracing::warn!("unparseable milestones: {e}");
                    Vec::new()
                }
            }
        }
        _ => Vec::new(),
    }
}

/// Whether a milestone entry counts as done.
pub fn milestone_completed(entry: &Value) -> bool {
    entry.get("completed") == Some(&Value::Bool(true))
        || entry.get("status").and_then(Value::as_str) == Some("completed")
}

/// Percentage of completed milestones, rounded to the nearest integer.
pub fn progress(milestones: &[Value]) -> u8 {
    if milestones.is_empty() {
        return 0;
    }
    let completed =
        milestones.iter().filter(|m| milestone_completed(m)).count();
    let percent = (completed as f64 * 100.0 / milestones.len() as f64).round();
    percent as u8
}

/// Resolves stored image paths against the origin that serves uploads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetBase {
    origin: String,
}

impl AssetBase {
    /// `base_url` may be the API root (ending in `/api/v1`) or the bare
    /// origin.
    pub fn new(base_url: &str) -> Self {
        let trimmed = base_url.trim().trim_end_matches('/');
        let origin = trimmed.strip_suffix(API_PREFIX).unwrap_or(trimmed);
        Self {
            origin: origin.to_string(),
        }
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    pub fn resolve(&self, url: &str) -> String {
        let url = url.trim();
        if url.starts_with("http://") || url.starts_with("https://") {
            url.to_string()
        } else if url.starts_with('/') {
            format!("{}{url}", self.origin)
        } else {
            format!("{}/{url}", self.origin)
        }
    }

    /// Resolve an optional url, treating blank values as absent.
    pub fn resolve_opt(&self, url: Option<String>) -> Option<String> {
        url.filter(|u| !u.trim().is_empty())
            .map(|u| self.resolve(&u))
    }
}

/// Trimmed text, or the placeholder when absent or blank.
pub fn text_or(value: Option<String>, placeholder: &str) -> String {
    match value.as_deref().map(str::trim) {
        Some(text) if !text.is_empty() => text.to_string(),
        _ => placeholder.to_string(),
    }
}

/// Trimmed text, or an empty string.
pub fn text(value: Option<String>) -> String {
    text_or(value, "")
}

/// Render an API date as "May 15, 2025".
///
/// Accepts RFC 3339 timestamps, civil datetimes and plain dates. Missing
/// values become [`NOT_SPECIFIED`]; text that is not a date is passed
/// through unchanged.
pub fn display_date(value: Option<&str>) -> String {
    let Some(raw) = value.map(str::trim).filter(|v| !v.is_empty()) else {
        return NOT_SPECIFIED.to_string();
    };
    match parse_date(raw) {
        Some(date) => date.strftime("%B %-d, %Y").to_string(),
        None => raw.to_string(),
    }
}

fn parse_date(raw: &str) -> Option<civil::Date> {
    if let Ok(ts) = raw.parse::<Timestamp>() {
        return Some(ts.to_zoned(TimeZone::UTC).date());
    }
    if let Ok(dt) = raw.parse::<civil::DateTime>() {
        return Some(dt.date());
    }
    raw.parse::<civil::Date>().ok()
}

/// Parse a monetary amount sent either as a JSON number or a numeric
/// string.
pub fn decimal(value: &Value) -> Option<Decimal> {
    match value {
        Value::Number(n) => {
            let text = n.to_string();
            text.parse::<Decimal>()
                .or_else(|_| Decimal::from_scientific(&text))
                .ok()
        }
        Value::String(text) => text.trim().parse::<Decimal>().ok(),
        _ => None,
    }
}

/// Deserialize a list leniently: `null` or a non-array becomes empty and
/// entries that do not decode are dropped.
pub(crate) fn lenient_vec<'de, D, T>(
    deserializer: D,
) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    let Value::Array(items) = value else {
        return Ok(Vec::new());
    };
    Ok(items
        .into_iter()
        .filter_map(|item| match serde_json::from_value(item) {
            Ok(decoded) => Some(decoded),
            Err(e) => {
                tracing::warn!("dropping malformed list entry: {e}");
                None
            }
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn newline_text_drops_blank_lines() {
        assert_eq!(string_list(json!("A\nB\n\nC")), vec!["A", "B", "C"]);
        assert_eq!(string_list(json!("  one \r\n two ")), vec!["one", "two"]);
    }

    #[test]
    fn json_encoded_string_is_parsed() {
        assert_eq!(string_list(json!("[\"X\",\"Y\"]")), vec!["X", "Y"]);
        assert_eq!(string_list(json!("[\"X\", null, \"\"]")), vec!["X"]);
    }

    #[test]
    fn encoded_scalars_keep_their_text() {
        assert_eq!(string_list(json!("null")), vec!["null"]);
        assert_eq!(string_list(json!("42")), vec!["42"]);
        assert_eq!(string_list(json!("true")), vec!["true"]);
    }

    #[test]
    fn arrays_drop_null_and_empty_entries() {
        let value = json!([" first ", null, "", 3, true, "last"]);
        assert_eq!(string_list(value), vec!["first", "3", "true", "last"]);
    }

    #[test]
    fn missing_and_blank_values_are_empty() {
        assert!(string_list(Value::Null).is_empty());
        assert!(string_list(json!("   ")).is_empty());
        assert!(ListField::default().into_strings().is_empty());
    }

    #[test]
    fn objects_yield_their_values() {
        let value = json!({"a": "Degree", "b": "Five years", "c": null});
        assert_eq!(string_list(value), vec!["Degree", "Five years"]);
    }

    #[test]
    fn scalars_are_wrapped() {
        assert_eq!(string_list(json!(12)), vec!["12"]);
        assert_eq!(string_list(json!(false)), vec!["false"]);
    }

    #[test]
    fn normalizing_twice_changes_nothing() {
        let once = string_list(json!("A\n  B \n\nC"));
        let twice = string_list(json!(once.clone()));
        assert_eq!(once, twice);
    }

    #[test]
    fn progress_counts_completed_flag_or_status() {
        let milestones = milestone_entries(&json!([
            {"completed": true},
            {"completed": false},
            {"status": "completed"}
        ]));
        assert_eq!(progress(&milestones), 67);
    }

    #[test]
    fn progress_is_zero_without_milestones() {
        assert_eq!(progress(&milestone_entries(&json!([]))), 0);
        assert_eq!(progress(&milestone_entries(&Value::Null)), 0);
        assert_eq!(progress(&milestone_entries(&json!({"a": 1}))), 0);
        assert_eq!(progress(&milestone_entries(&json!("not json"))), 0);
    }

    #[test]
    fn progress_accepts_encoded_milestones() {
        let encoded = json!("[{\"completed\":true},{\"completed\":false}]");
        assert_eq!(progress(&milestone_entries(&encoded)), 50);
    }

    #[test]
    fn image_urls_resolve_against_origin() {
        let assets = AssetBase::new("http://10.0.0.5/api/v1/");
        assert_eq!(assets.origin(), "http://10.0.0.5");
        assert_eq!(
            assets.resolve("https://cdn.example.com/a.jpg"),
            "https://cdn.example.com/a.jpg"
        );
        assert_eq!(
            assets.resolve("/rails/active_storage/blobs/abc/road.jpg"),
            "http://10.0.0.5/rails/active_storage/blobs/abc/road.jpg"
        );
        assert_eq!(
            assets.resolve("uploads/bridge.png"),
            "http://10.0.0.5/uploads/bridge.png"
        );
        assert_eq!(assets.resolve_opt(Some(" ".into())), None);
    }

    #[test]
    fn placeholders_fill_blank_text() {
        assert_eq!(text_or(None, NOT_SPECIFIED), "Not specified");
        assert_eq!(text_or(Some("  ".into()), DEFAULT_SALARY), DEFAULT_SALARY);
        assert_eq!(text_or(Some(" Adama ".into()), NOT_SPECIFIED), "Adama");
    }

    #[test]
    fn dates_render_long_form() {
        assert_eq!(display_date(Some("2025-05-15")), "May 15, 2025");
        assert_eq!(
            display_date(Some("2025-03-01T08:30:00.000Z")),
            "March 1, 2025"
        );
        assert_eq!(display_date(None), NOT_SPECIFIED);
        assert_eq!(display_date(Some("soon")), "soon");
    }

    #[test]
    fn decimals_accept_numbers_and_strings() {
        assert_eq!(decimal(&json!(1500000)), Some(Decimal::from(1_500_000)));
        assert_eq!(
            decimal(&json!("2500.50")),
            Some(Decimal::new(250050, 2))
        );
        assert_eq!(decimal(&json!("$3M")), None);
    }
}
