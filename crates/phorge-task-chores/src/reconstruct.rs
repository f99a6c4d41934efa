/*
[INPUT]:  One task's transaction log (newest first, as the tracker emits it)
          and the run's `WorkboardIndex`.
[OUTPUT]: The task's current (project, column) memberships.
[POS]:    Core layer - task-to-board state reconstruction.
[UPDATE]: When transaction replay semantics change.
*/

use std::collections::HashMap;

use tracing::warn;

use phorge_conduit_adapter::{TaskTransaction, TransactionKind};

use crate::workboard::WorkboardIndex;

/// One reconstructed board membership of a task.
///
/// Names are resolved through the index where known; the tracker's
/// historical data contains ids with no surviving name, so both stay
/// optional.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Membership {
    pub project_phid: String,
    pub project_name: Option<String>,
    pub column_phid: String,
    pub column_name: Option<String>,
}

/// Replay one task's transaction log into its current memberships.
///
/// The log is the only authoritative source of "which project/column is
/// this task in right now"; the tracker does not store the mapping on the
/// task itself. Three phases:
///
/// 1. Edge transactions, replayed oldest to newest, rebuild the candidate
///    project set (removals delete, additions append, re-adds win).
/// 2. Column moves, scanned newest first, pin each still-candidate project
///    to its most recent column and consume the candidate. A move older
///    than the project's latest re-add is stale: leaving a project clears
///    its board position, so only moves after the re-add count.
/// 3. Whatever remains never left its board's default column; projects
///    without a board contribute nothing.
pub fn reconstruct_memberships(
    task_id: u64,
    log: &[TaskTransaction],
    index: &WorkboardIndex,
) -> Vec<Membership> {
    check_delivery_order(task_id, log);

    // Phase 1: candidate projects in add order, with the log position of
    // each project's most recent addition.
    let mut candidates: Vec<String> = Vec::new();
    let mut last_added_at: HashMap<String, usize> = HashMap::new();
    for (position, tx) in log.iter().enumerate().rev() {
        let TransactionKind::ProjectEdge { added, removed } = tx.kind() else {
            continue;
        };
        for phid in removed {
            match candidates.iter().position(|c| *c == phid) {
                Some(slot) => {
                    candidates.remove(slot);
                }
                // Inconsistent upstream history; skip rather than fail.
                None => warn!(
                    task = task_id,
                    project = %phid,
                    "edge removal for a project not in the candidate set"
                ),
            }
        }
        for phid in added {
            if let Some(slot) = candidates.iter().position(|c| *c == phid) {
                candidates.remove(slot);
            }
            last_added_at.insert(phid.clone(), position);
            candidates.push(phid);
        }
    }

    // Phase 2: newest move per still-candidate board wins. Smaller log
    // position = newer transaction.
    let mut memberships = Vec::new();
    for (position, tx) in log.iter().enumerate() {
        if candidates.is_empty() {
            break;
        }
        let TransactionKind::ColumnMove {
            board_phid,
            column_phid,
        } = tx.kind()
        else {
            continue;
        };
        let Some(slot) = candidates.iter().position(|c| *c == board_phid) else {
            continue;
        };
        let stale = last_added_at
            .get(&board_phid)
            .is_some_and(|added_at| position > *added_at);
        if stale {
            continue;
        }
        candidates.remove(slot);
        memberships.push(resolve(board_phid, column_phid, index));
    }

    // Phase 3: default-column fallback for projects never explicitly moved.
    for project_phid in candidates {
        if let Some((column_phid, _)) = index.default_column(&project_phid) {
            let column_phid = column_phid.to_string();
            memberships.push(resolve(project_phid, column_phid, index));
        }
    }

    memberships
}

fn resolve(project_phid: String, column_phid: String, index: &WorkboardIndex) -> Membership {
    Membership {
        project_name: index.project_name(&project_phid).map(str::to_string),
        column_name: index.column_name(&column_phid).map(str::to_string),
        project_phid,
        column_phid,
    }
}

/// The replay above assumes the tracker delivers logs newest first; that
/// is observed behaviour, not a documented contract. Cross-check against
/// the timestamps and make a violation visible instead of re-guessing.
fn check_delivery_order(task_id: u64, log: &[TaskTransaction]) {
    let out_of_order = log
        .windows(2)
        .filter_map(|pair| Some((pair[0].created_epoch()?, pair[1].created_epoch()?)))
        .any(|(newer, older)| newer < older);
    if out_of_order {
        warn!(
            task = task_id,
            "transaction log is not newest-first; reconstruction may be unreliable"
        );
    }
}
