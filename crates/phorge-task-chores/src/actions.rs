/*
[INPUT]:  Decided chore actions and an edit executor (live client or mock).
[OUTPUT]: Per-task action records aggregated into a batch report.
[POS]:    Mutation boundary - the only writes the bot performs.
[UPDATE]: When new actions or outcome reporting change.
*/

use std::future::Future;
use std::pin::Pin;

use tracing::{error, info};

use phorge_conduit_adapter::{ConduitClient, EditOp, EditResult};

use crate::rules::ChoreAction;
use crate::snapshot::TaskSnapshot;

/// Seam over `maniphest.edit` so decision paths are testable without a
/// live tracker.
pub trait EditExecutor: Send + Sync {
    fn edit(
        &self,
        object: String,
        ops: Vec<EditOp>,
    ) -> Pin<Box<dyn Future<Output = phorge_conduit_adapter::Result<EditResult>> + Send + '_>>;
}

impl EditExecutor for ConduitClient {
    fn edit(
        &self,
        object: String,
        ops: Vec<EditOp>,
    ) -> Pin<Box<dyn Future<Output = phorge_conduit_adapter::Result<EditResult>> + Send + '_>>
    {
        Box::pin(async move { self.maniphest_edit(&object, &ops).await })
    }
}

/// What happened to one decided action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    Applied,
    SkippedDryRun,
    Failed { message: String },
}

/// One decided action and its outcome
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionRecord {
    pub task_id: u64,
    pub action: ChoreAction,
    pub outcome: ActionOutcome,
}

/// All action records of one run
#[derive(Debug, Default)]
pub struct BatchReport {
    pub records: Vec<ActionRecord>,
}

impl BatchReport {
    pub fn push(&mut self, record: ActionRecord) {
        self.records.push(record);
    }

    pub fn applied(&self) -> usize {
        self.count(|outcome| matches!(outcome, ActionOutcome::Applied))
    }

    pub fn skipped(&self) -> usize {
        self.count(|outcome| matches!(outcome, ActionOutcome::SkippedDryRun))
    }

    pub fn failed(&self) -> usize {
        self.count(|outcome| matches!(outcome, ActionOutcome::Failed { .. }))
    }

    fn count(&self, predicate: impl Fn(&ActionOutcome) -> bool) -> usize {
        self.records
            .iter()
            .filter(|record| predicate(&record.outcome))
            .count()
    }
}

/// Apply one decided action to one task.
///
/// The decision line is emitted first and is identical between dry and
/// live runs; only the write itself is suppressed under dry-run. A failed
/// write is captured in the record, never propagated, so one task cannot
/// abort the batch.
pub async fn apply_action(
    executor: &dyn EditExecutor,
    task: &TaskSnapshot,
    action: ChoreAction,
    dry_run: bool,
) -> ActionRecord {
    match &action {
        ChoreAction::Close => {
            info!("Closing task T{} (finished in all boards)", task.id);
        }
        ChoreAction::Unassign { idle_days } => {
            info!(
                "Unassigning task T{} after {} days of inactivity",
                task.id, idle_days
            );
        }
        ChoreAction::Tag { reason, .. } => {
            info!("Tagging task T{} as {}", task.id, reason.label());
        }
    }

    let outcome = if dry_run {
        ActionOutcome::SkippedDryRun
    } else {
        match executor.edit(task.phid.clone(), edit_ops(&action)).await {
            Ok(_) => ActionOutcome::Applied,
            Err(err) => {
                error!(task = task.id, error = %err, "maniphest.edit failed");
                ActionOutcome::Failed {
                    message: err.to_string(),
                }
            }
        }
    };

    ActionRecord {
        task_id: task.id,
        action,
        outcome,
    }
}

fn edit_ops(action: &ChoreAction) -> Vec<EditOp> {
    match action {
        ChoreAction::Close => vec![EditOp::resolve()],
        ChoreAction::Unassign { .. } => vec![EditOp::clear_owner()],
        ChoreAction::Tag { project_phid, .. } => vec![EditOp::add_project(project_phid.clone())],
    }
}
