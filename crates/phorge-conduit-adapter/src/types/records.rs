/*
[INPUT]:  Search result schemas and serde requirements
[OUTPUT]: Typed records for projects, workboard columns, and tasks
[POS]:    Data layer - record definitions mirroring `*.search` payloads
[UPDATE]: When the tracker's search schema changes
*/

use serde::{Deserialize, Serialize};

/// One project from `project.search`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectRecord {
    pub id: u64,
    pub phid: String,
    pub fields: ProjectFields,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectFields {
    pub name: String,
}

/// One workboard column from `project.column.search`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnRecord {
    pub id: u64,
    pub phid: String,
    pub fields: ColumnFields,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnFields {
    pub name: String,
    /// Set when the column stands in for a sub-project on this board
    #[serde(rename = "proxyPHID", default)]
    pub proxy_phid: Option<String>,
    /// At most one column per board carries this flag
    #[serde(rename = "isDefaultColumn", default)]
    pub is_default_column: bool,
    pub project: ColumnProject,
}

/// The project owning a workboard column
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnProject {
    pub phid: String,
}

/// One task from `maniphest.search`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskRecord {
    pub id: u64,
    pub phid: String,
    pub fields: TaskFields,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskFields {
    pub name: String,
    pub status: TaskStatus,
    #[serde(rename = "ownerPHID", default)]
    pub owner_phid: Option<String>,
    /// Epoch seconds of the last modification
    #[serde(rename = "dateModified")]
    pub date_modified: i64,
    #[serde(rename = "custom.issue-type", default)]
    pub issue_type: Option<String>,
    #[serde(rename = "custom.difficulty-level", default)]
    pub difficulty_level: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskStatus {
    pub value: String,
    #[serde(default)]
    pub name: Option<String>,
}
