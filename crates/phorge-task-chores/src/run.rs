/*
[INPUT]:  A configured `ConduitClient`, the chore policy, and the run mode.
[OUTPUT]: A `BatchReport` of every decided action and its outcome.
[POS]:    Orchestration layer - the sequential batch loop.
[UPDATE]: When the run sequence or reporting changes.
*/

use anyhow::Result;
use chrono::{DateTime, Utc};
use tracing::info;

use phorge_conduit_adapter::ConduitClient;

use crate::actions::{BatchReport, apply_action};
use crate::rules::{ChorePolicy, evaluate};
use crate::snapshot::load_snapshot;

/// One full hygiene run: fetch everything, then walk the tasks one at a
/// time deciding and applying actions. Reads abort the run on failure;
/// writes are contained per task inside [`apply_action`].
pub async fn run_chores(
    client: &ConduitClient,
    policy: &ChorePolicy,
    dry_run: bool,
    now: DateTime<Utc>,
) -> Result<BatchReport> {
    let snapshot = load_snapshot(client).await?;

    let mut report = BatchReport::default();
    for task in &snapshot.tasks {
        for action in evaluate(task, &snapshot.index, policy, now) {
            report.push(apply_action(client, task, action, dry_run).await);
        }
    }

    info!(
        decided = report.records.len(),
        applied = report.applied(),
        skipped = report.skipped(),
        failed = report.failed(),
        "chores run complete"
    );
    Ok(report)
}
