/*
[INPUT]:  Task queries, transaction-log fetches, and edit requests
[OUTPUT]: Task records, per-task transaction logs, edit confirmations
[POS]:    HTTP layer - task endpoints
[UPDATE]: When adding new task endpoints or changing call shapes
*/

use std::collections::HashMap;

use serde_json::{Value, json};

use crate::http::client::ConduitClient;
use crate::http::error::{ConduitError, Result};
use crate::types::{EditOp, EditResult, QueryStatusesResult, TaskRecord, TaskTransaction};

impl ConduitClient {
    /// Tasks matching the given search constraints
    ///
    /// POST /api/maniphest.search
    pub async fn maniphest_search(&self, constraints: Value) -> Result<Vec<TaskRecord>> {
        self.search_all("maniphest.search", constraints).await
    }

    /// The install's status vocabulary (open/closed status names)
    ///
    /// POST /api/maniphest.querystatuses
    pub async fn maniphest_querystatuses(&self) -> Result<QueryStatusesResult> {
        self.call("maniphest.querystatuses", json!({})).await
    }

    /// Full transaction logs for the given task ids, newest first per task
    ///
    /// POST /api/maniphest.gettasktransactions
    pub async fn maniphest_gettasktransactions(
        &self,
        ids: &[u64],
    ) -> Result<HashMap<String, Vec<TaskTransaction>>> {
        let raw: Value = self
            .call("maniphest.gettasktransactions", json!({ "ids": ids }))
            .await?;
        match raw {
            // An empty result map arrives as `[]` from the PHP side.
            Value::Array(entries) if entries.is_empty() => Ok(HashMap::new()),
            Value::Object(_) => Ok(serde_json::from_value(raw)?),
            other => Err(ConduitError::InvalidResponse(format!(
                "maniphest.gettasktransactions: unexpected payload shape: {other}"
            ))),
        }
    }

    /// Apply edit transactions to one task
    ///
    /// POST /api/maniphest.edit
    pub async fn maniphest_edit(
        &self,
        object_identifier: &str,
        transactions: &[EditOp],
    ) -> Result<EditResult> {
        self.call(
            "maniphest.edit",
            json!({
                "objectIdentifier": object_identifier,
                "transactions": transactions,
            }),
        )
        .await
    }
}
