/*
[INPUT]:  Project and workboard queries
[OUTPUT]: Project and column records across all pages
[POS]:    HTTP layer - project endpoints
[UPDATE]: When adding new project endpoints or changing constraints
*/

use serde_json::json;

use crate::http::client::ConduitClient;
use crate::http::error::Result;
use crate::types::{ColumnRecord, ProjectRecord};

impl ConduitClient {
    /// Every project visible to the token
    ///
    /// POST /api/project.search
    pub async fn project_search(&self) -> Result<Vec<ProjectRecord>> {
        self.search_all("project.search", json!({})).await
    }

    /// Every workboard column across all projects
    ///
    /// POST /api/project.column.search
    pub async fn project_column_search(&self) -> Result<Vec<ColumnRecord>> {
        self.search_all("project.column.search", json!({})).await
    }
}
