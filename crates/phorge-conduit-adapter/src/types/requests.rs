/*
[INPUT]:  Edit operations the bot applies to tasks
[OUTPUT]: Serializable transaction payloads for `maniphest.edit`
[POS]:    Data layer - request definitions for API communication
[UPDATE]: When new edit operations are needed
*/

use serde::{Deserialize, Serialize};

/// One transaction in a `maniphest.edit` call.
///
/// Serializes to the tracker's `{"type": ..., "value": ...}` shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum EditOp {
    /// Set the task's lifecycle status
    Status(String),
    /// Set or clear the task's owner
    Owner(Option<String>),
    /// Attach the task to additional projects
    #[serde(rename = "projects.add")]
    ProjectsAdd(Vec<String>),
}

impl EditOp {
    /// Mark the task resolved
    pub fn resolve() -> Self {
        EditOp::Status("resolved".to_string())
    }

    /// Remove the current owner
    pub fn clear_owner() -> Self {
        EditOp::Owner(None)
    }

    /// Tag the task with one project
    pub fn add_project(phid: impl Into<String>) -> Self {
        EditOp::ProjectsAdd(vec![phid.into()])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edit_ops_serialize_to_the_exact_wire_shapes() {
        assert_eq!(
            serde_json::to_value(EditOp::resolve()).unwrap(),
            serde_json::json!({ "type": "status", "value": "resolved" })
        );
        assert_eq!(
            serde_json::to_value(EditOp::clear_owner()).unwrap(),
            serde_json::json!({ "type": "owner", "value": null })
        );
        assert_eq!(
            serde_json::to_value(EditOp::add_project("PHID-PROJ-abcd")).unwrap(),
            serde_json::json!({ "type": "projects.add", "value": ["PHID-PROJ-abcd"] })
        );
    }
}
