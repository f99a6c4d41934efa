/*
[INPUT]:  Project and workboard column snapshots fetched at run start.
[OUTPUT]: O(1) lookups for column names, default columns, project names,
          and the sub-project hierarchy.
[POS]:    Index layer - immutable per-run lookup structures.
[UPDATE]: When new lookups over the board snapshot are needed.
*/

use std::collections::{HashMap, HashSet};

use tracing::warn;

use phorge_conduit_adapter::{ColumnRecord, ProjectRecord};

/// Precomputed lookups over one run's board snapshot.
///
/// Built once from the flattened `project.search` / `project.column.search`
/// results and read-only afterwards.
#[derive(Debug, Default)]
pub struct WorkboardIndex {
    /// column phid -> column display name
    column_names: HashMap<String, String>,
    /// project phid -> (default column phid, default column name)
    default_columns: HashMap<String, (String, String)>,
    /// project phid -> project display name
    project_names: HashMap<String, String>,
    /// parent project phid -> child (proxy) project phids
    hierarchy: HashMap<String, Vec<String>>,
    /// every project that appears as somebody's proxy child
    sub_projects: HashSet<String>,
}

impl WorkboardIndex {
    pub fn build(projects: &[ProjectRecord], columns: &[ColumnRecord]) -> Self {
        let mut index = Self {
            project_names: projects
                .iter()
                .map(|p| (p.phid.clone(), p.fields.name.clone()))
                .collect(),
            ..Self::default()
        };

        for column in columns {
            index
                .column_names
                .insert(column.phid.clone(), column.fields.name.clone());

            let owner = &column.fields.project.phid;
            if column.fields.is_default_column {
                let entry = (column.phid.clone(), column.fields.name.clone());
                if let Some((existing, _)) = index.default_columns.get(owner) {
                    warn!(
                        project = %owner,
                        kept = %existing,
                        ignored = %column.phid,
                        "project flags more than one default column"
                    );
                } else {
                    index.default_columns.insert(owner.clone(), entry);
                }
            }

            // A column carrying a proxyPHID folds that project under the
            // column's owning board: owner is the parent, the proxy the child.
            if let Some(proxy) = &column.fields.proxy_phid {
                index
                    .hierarchy
                    .entry(owner.clone())
                    .or_default()
                    .push(proxy.clone());
                index.sub_projects.insert(proxy.clone());
            }
        }

        index
    }

    /// Display name of a column; unknown phids resolve to `None`
    pub fn column_name(&self, column_phid: &str) -> Option<&str> {
        self.column_names.get(column_phid).map(String::as_str)
    }

    /// The column a task lands in when added to this project without an
    /// explicit move. `None` for projects without a board or without a
    /// flagged default; both occur in real data and are not errors.
    pub fn default_column(&self, project_phid: &str) -> Option<(&str, &str)> {
        self.default_columns
            .get(project_phid)
            .map(|(phid, name)| (phid.as_str(), name.as_str()))
    }

    /// Display name of a project; unknown phids resolve to `None`
    pub fn project_name(&self, project_phid: &str) -> Option<&str> {
        self.project_names.get(project_phid).map(String::as_str)
    }

    /// Parent project -> proxy children, as recorded on the parents' boards
    pub fn hierarchy(&self) -> &HashMap<String, Vec<String>> {
        &self.hierarchy
    }

    /// Whether this project is folded under some parent's board
    pub fn is_sub_project(&self, project_phid: &str) -> bool {
        self.sub_projects.contains(project_phid)
    }
}
