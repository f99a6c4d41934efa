/*
[INPUT]:  Raw transaction records from `maniphest.gettasktransactions`
[OUTPUT]: Typed transaction log entries with an interpreted kind view
[POS]:    Data layer - transaction schema and interpretation
[UPDATE]: When new transaction types become relevant to the bot
*/

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Prefix distinguishing project PHIDs from other id kinds in edge payloads
pub const PROJECT_PHID_PREFIX: &str = "PHID-PROJ-";

const TYPE_EDGE: &str = "core:edge";
const TYPE_COLUMNS: &str = "core:columns";

/// One entry of a task's transaction log, newest first as delivered.
///
/// `old_value`/`new_value` are kept raw; their shape depends entirely on
/// `transaction_type` and is interpreted through [`kind`](Self::kind).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskTransaction {
    #[serde(rename = "taskID", default)]
    pub task_id: Option<String>,
    #[serde(rename = "transactionType")]
    pub transaction_type: String,
    #[serde(rename = "oldValue", default)]
    pub old_value: Value,
    #[serde(rename = "newValue", default)]
    pub new_value: Value,
    /// Epoch seconds, emitted by the tracker as a decimal string
    #[serde(rename = "dateCreated", default)]
    pub date_created: Value,
}

/// The transaction shapes the reconstruction algorithm understands
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransactionKind {
    /// Project associations added to or removed from the task
    ProjectEdge {
        added: Vec<String>,
        removed: Vec<String>,
    },
    /// The task moved to a column on a specific board
    ColumnMove {
        board_phid: String,
        column_phid: String,
    },
    /// Any transaction type the bot does not act on
    Other,
}

impl TaskTransaction {
    /// Interpret the raw payload. Malformed payloads degrade to
    /// [`TransactionKind::Other`] rather than failing; the tracker's
    /// historical data is known to contain irregular records.
    pub fn kind(&self) -> TransactionKind {
        match self.transaction_type.as_str() {
            TYPE_EDGE => TransactionKind::ProjectEdge {
                added: project_phids(&self.new_value),
                removed: project_phids(&self.old_value),
            },
            TYPE_COLUMNS => match column_move(&self.new_value) {
                Some((board_phid, column_phid)) => TransactionKind::ColumnMove {
                    board_phid,
                    column_phid,
                },
                None => TransactionKind::Other,
            },
            _ => TransactionKind::Other,
        }
    }

    /// Creation time in epoch seconds, if the stamp is parseable
    pub fn created_epoch(&self) -> Option<i64> {
        match &self.date_created {
            Value::String(stamp) => stamp.parse().ok(),
            Value::Number(stamp) => stamp.as_i64(),
            _ => None,
        }
    }
}

/// Project PHIDs named by an edge payload. Older records carry a plain
/// list of PHIDs, newer ones an object keyed by PHID; both are accepted.
fn project_phids(value: &Value) -> Vec<String> {
    match value {
        Value::Array(entries) => entries
            .iter()
            .filter_map(Value::as_str)
            .filter(|phid| phid.starts_with(PROJECT_PHID_PREFIX))
            .map(str::to_string)
            .collect(),
        Value::Object(map) => map
            .keys()
            .filter(|phid| phid.starts_with(PROJECT_PHID_PREFIX))
            .cloned()
            .collect(),
        _ => Vec::new(),
    }
}

fn column_move(value: &Value) -> Option<(String, String)> {
    let first = value.as_array()?.first()?;
    let board = first.get("boardPHID")?.as_str()?;
    let column = first.get("columnPHID")?.as_str()?;
    Some((board.to_string(), column.to_string()))
}
