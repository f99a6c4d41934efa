/*
[INPUT]:  Conduit envelope and response schemas
[OUTPUT]: Typed Rust response structs with serialization support
[POS]:    Data layer - response definitions for API communication
[UPDATE]: When the API schema changes or new types are added
*/

use serde::de::{Deserializer, Error as _};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The envelope every Conduit response arrives in
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ConduitEnvelope<T> {
    pub result: Option<T>,
    #[serde(default)]
    pub error_code: Option<String>,
    #[serde(default)]
    pub error_info: Option<String>,
}

/// One page of a paginated method's result
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SearchResult<T> {
    pub data: Vec<T>,
    #[serde(default)]
    pub cursor: Option<SearchCursor>,
}

/// Pagination cursor; `after` is absent on the final page
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SearchCursor {
    #[serde(default, deserialize_with = "cursor_token")]
    pub after: Option<String>,
}

/// Modern endpoints hand back an opaque string token, legacy offset
/// endpoints a number; both drive the next page request the same way.
fn cursor_token<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(None),
        Value::String(token) => Ok(Some(token)),
        Value::Number(offset) => Ok(Some(offset.to_string())),
        other => Err(D::Error::custom(format!(
            "cursor token must be a string or number, got {other}"
        ))),
    }
}

/// Status vocabulary from `maniphest.querystatuses`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryStatusesResult {
    #[serde(rename = "allStatuses", default)]
    pub all_statuses: Vec<String>,
    #[serde(rename = "openStatuses", default)]
    pub open_statuses: Vec<String>,
    #[serde(rename = "closedStatuses", default)]
    pub closed_statuses: Vec<String>,
}

/// Confirmation payload from `maniphest.edit`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditResult {
    pub object: EditedObject,
    #[serde(default)]
    pub transactions: Vec<AppliedTransaction>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditedObject {
    pub id: u64,
    pub phid: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppliedTransaction {
    pub phid: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_cursor_accepts_string_and_numeric_tokens() {
        let modern: SearchCursor =
            serde_json::from_value(serde_json::json!({ "after": "1234" })).expect("string token");
        assert_eq!(modern.after.as_deref(), Some("1234"));

        let legacy: SearchCursor =
            serde_json::from_value(serde_json::json!({ "after": 100 })).expect("numeric token");
        assert_eq!(legacy.after.as_deref(), Some("100"));
    }

    #[test]
    fn search_cursor_treats_null_as_terminal() {
        let terminal: SearchCursor =
            serde_json::from_value(serde_json::json!({ "after": null })).expect("null token");
        assert_eq!(terminal.after, None);
    }

    #[test]
    fn query_statuses_decodes_the_legacy_field_spellings() {
        let raw = serde_json::json!({
            "allStatuses": ["open", "resolved", "wontfix"],
            "openStatuses": ["open"],
            "closedStatuses": ["resolved", "wontfix"]
        });
        let statuses: QueryStatusesResult = serde_json::from_value(raw).expect("statuses decode");
        assert_eq!(statuses.open_statuses, vec!["open"]);
        assert_eq!(statuses.closed_statuses.len(), 2);
    }
}
