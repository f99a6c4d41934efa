/*
[INPUT]:  `ConduitClient` read endpoints (statuses, tasks, projects,
          columns, per-task transaction logs).
[OUTPUT]: One run's immutable snapshot: the workboard index plus every
          open task with reconstructed memberships.
[POS]:    Load layer - per-run data acquisition.
[UPDATE]: When the fetched data set or reconstruction inputs change.
*/

use anyhow::{Context, Result, ensure};
use serde_json::json;
use tracing::{debug, info};

use phorge_conduit_adapter::{ConduitClient, TaskRecord};

use crate::reconstruct::{Membership, reconstruct_memberships};
use crate::workboard::WorkboardIndex;

/// One open task with everything the rules need
#[derive(Debug, Clone)]
pub struct TaskSnapshot {
    pub id: u64,
    pub phid: String,
    pub name: String,
    pub status: String,
    pub owner_phid: Option<String>,
    /// Epoch seconds of the last modification
    pub date_modified: i64,
    pub issue_type: Option<String>,
    pub difficulty_level: Option<String>,
    pub memberships: Vec<Membership>,
}

impl TaskSnapshot {
    pub fn from_record(record: TaskRecord, memberships: Vec<Membership>) -> Self {
        Self {
            id: record.id,
            phid: record.phid,
            name: record.fields.name,
            status: record.fields.status.value,
            owner_phid: record.fields.owner_phid,
            date_modified: record.fields.date_modified,
            issue_type: record.fields.issue_type,
            difficulty_level: record.fields.difficulty_level,
            memberships,
        }
    }
}

/// Everything one batch run reads, fetched up front
#[derive(Debug)]
pub struct RunSnapshot {
    pub index: WorkboardIndex,
    pub tasks: Vec<TaskSnapshot>,
}

/// Fetch the full read-side state for one run.
///
/// Read failures propagate: a partially loaded snapshot would feed the
/// rules inconsistent data, so there is no per-call recovery here.
pub async fn load_snapshot(client: &ConduitClient) -> Result<RunSnapshot> {
    let statuses = client
        .maniphest_querystatuses()
        .await
        .context("query status vocabulary")?;
    ensure!(
        !statuses.open_statuses.is_empty(),
        "tracker reports no open statuses"
    );

    let tasks = client
        .maniphest_search(json!({ "statuses": statuses.open_statuses }))
        .await
        .context("search open tasks")?;

    let projects = client.project_search().await.context("load projects")?;
    let columns = client
        .project_column_search()
        .await
        .context("load workboard columns")?;
    let index = WorkboardIndex::build(&projects, &columns);
    info!(
        tasks = tasks.len(),
        projects = projects.len(),
        columns = columns.len(),
        "snapshot loaded"
    );

    let mut snapshots = Vec::with_capacity(tasks.len());
    for task in tasks {
        let mut logs = client
            .maniphest_gettasktransactions(&[task.id])
            .await
            .with_context(|| format!("load transactions for T{}", task.id))?;
        let log = logs.remove(&task.id.to_string()).unwrap_or_default();
        let memberships = reconstruct_memberships(task.id, &log, &index);
        debug!(
            task = task.id,
            transactions = log.len(),
            memberships = memberships.len(),
            "task reconstructed"
        );
        snapshots.push(TaskSnapshot::from_record(task, memberships));
    }

    Ok(RunSnapshot {
        index,
        tasks: snapshots,
    })
}
