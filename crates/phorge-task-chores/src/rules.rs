/*
[INPUT]:  One task's snapshot (fields + reconstructed memberships), the
          workboard index, and the chore policy.
[OUTPUT]: The chore actions the task qualifies for this run.
[POS]:    Decision layer - close, staleness, and classification rules.
[UPDATE]: When rule thresholds or classification vocabularies change.
*/

use chrono::{DateTime, Duration, Utc};

use crate::snapshot::TaskSnapshot;
use crate::workboard::WorkboardIndex;

/// Column name that marks a task as done on a board
const FINISHED_COLUMN: &str = "Finished";

/// Thresholds and tag targets the rules evaluate against
#[derive(Debug, Clone)]
pub struct ChorePolicy {
    /// Inactivity span after which an assigned task is unassigned
    pub unassign_after: Duration,
    pub bugs_project: String,
    pub uncategorized_project: String,
    pub beginner_project: String,
}

/// Why a tag action was decided; drives the decision line wording
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagReason {
    Bug,
    Uncategorized,
    Beginner,
}

impl TagReason {
    pub fn label(self) -> &'static str {
        match self {
            TagReason::Bug => "a bug",
            TagReason::Uncategorized => "uncategorized",
            TagReason::Beginner => "a beginner task",
        }
    }
}

/// One decided chore for one task
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChoreAction {
    /// Mark the task resolved; it is finished on every board it is on
    Close,
    /// Clear the owner of a long-inactive assigned task
    Unassign { idle_days: i64 },
    /// Attach a categorization project
    Tag {
        project_phid: String,
        reason: TagReason,
    },
}

/// Evaluate every rule for one task. Rules are independent; a task can
/// qualify for several actions in the same run, and every rule runs every
/// run (re-applying an action the tracker already reflects is a remote
/// no-op).
pub fn evaluate(
    task: &TaskSnapshot,
    index: &WorkboardIndex,
    policy: &ChorePolicy,
    now: DateTime<Utc>,
) -> Vec<ChoreAction> {
    let mut actions = Vec::new();

    if finished_everywhere(task, index) {
        actions.push(ChoreAction::Close);
    }

    if let Some(idle_days) = stale_assignment(task, policy, now) {
        actions.push(ChoreAction::Unassign { idle_days });
    }

    match task.issue_type.as_deref() {
        Some("bug") | Some("vulnerability") => actions.push(ChoreAction::Tag {
            project_phid: policy.bugs_project.clone(),
            reason: TagReason::Bug,
        }),
        Some("unspecified") => actions.push(ChoreAction::Tag {
            project_phid: policy.uncategorized_project.clone(),
            reason: TagReason::Uncategorized,
        }),
        _ => {}
    }
    if task.difficulty_level.as_deref() == Some("easy") {
        actions.push(ChoreAction::Tag {
            project_phid: policy.beginner_project.clone(),
            reason: TagReason::Beginner,
        });
    }

    actions
}

/// True when the task sits in the "Finished" column on every board that
/// counts. Sub-project boards are folded under their parents and do not
/// get a vote; a task with no countable board presence is never treated
/// as finished.
fn finished_everywhere(task: &TaskSnapshot, index: &WorkboardIndex) -> bool {
    let mut countable = 0usize;
    for membership in &task.memberships {
        if index.is_sub_project(&membership.project_phid) {
            continue;
        }
        if membership.column_name.as_deref() != Some(FINISHED_COLUMN) {
            return false;
        }
        countable += 1;
    }
    countable > 0
}

/// Days of inactivity if the task is assigned and idle strictly beyond
/// the policy threshold.
fn stale_assignment(
    task: &TaskSnapshot,
    policy: &ChorePolicy,
    now: DateTime<Utc>,
) -> Option<i64> {
    task.owner_phid.as_ref()?;
    let modified = DateTime::from_timestamp(task.date_modified, 0)?;
    let idle = now - modified;
    (idle > policy.unassign_after).then(|| idle.num_days())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reconstruct::Membership;
    use phorge_conduit_adapter::{ColumnFields, ColumnProject, ColumnRecord};

    fn policy() -> ChorePolicy {
        ChorePolicy {
            unassign_after: Duration::days(90),
            bugs_project: "PHID-PROJ-bugs".to_string(),
            uncategorized_project: "PHID-PROJ-uncat".to_string(),
            beginner_project: "PHID-PROJ-beginner".to_string(),
        }
    }

    fn membership(project: &str, column_name: Option<&str>) -> Membership {
        Membership {
            project_phid: project.to_string(),
            project_name: None,
            column_phid: "PHID-PCOL-x".to_string(),
            column_name: column_name.map(str::to_string),
        }
    }

    fn task(memberships: Vec<Membership>) -> TaskSnapshot {
        TaskSnapshot {
            id: 100,
            phid: "PHID-TASK-100".to_string(),
            name: "a task".to_string(),
            status: "open".to_string(),
            owner_phid: None,
            date_modified: 1_700_000_000,
            issue_type: None,
            difficulty_level: None,
            memberships,
        }
    }

    fn empty_index() -> WorkboardIndex {
        WorkboardIndex::build(&[], &[])
    }

    /// Index where PHID-PROJ-sub is a proxy child of PHID-PROJ-parent
    fn index_with_sub_project() -> WorkboardIndex {
        WorkboardIndex::build(
            &[],
            &[ColumnRecord {
                id: 1,
                phid: "PHID-PCOL-proxy".to_string(),
                fields: ColumnFields {
                    name: "Subproject".to_string(),
                    proxy_phid: Some("PHID-PROJ-sub".to_string()),
                    is_default_column: false,
                    project: ColumnProject {
                        phid: "PHID-PROJ-parent".to_string(),
                    },
                },
            }],
        )
    }

    fn now() -> DateTime<Utc> {
        DateTime::from_timestamp(1_750_000_000, 0).unwrap()
    }

    #[test]
    fn close_requires_every_board_to_be_finished() {
        let all_finished = task(vec![
            membership("PHID-PROJ-a", Some("Finished")),
            membership("PHID-PROJ-b", Some("Finished")),
        ]);
        assert!(
            evaluate(&all_finished, &empty_index(), &policy(), now())
                .contains(&ChoreAction::Close)
        );

        let one_in_progress = task(vec![
            membership("PHID-PROJ-a", Some("Finished")),
            membership("PHID-PROJ-b", Some("In Progress")),
        ]);
        assert!(
            !evaluate(&one_in_progress, &empty_index(), &policy(), now())
                .contains(&ChoreAction::Close)
        );
    }

    #[test]
    fn close_never_fires_without_memberships() {
        let no_boards = task(Vec::new());
        assert!(evaluate(&no_boards, &empty_index(), &policy(), now()).is_empty());
    }

    #[test]
    fn close_ignores_unnamed_columns() {
        let unnamed = task(vec![membership("PHID-PROJ-a", None)]);
        assert!(!evaluate(&unnamed, &empty_index(), &policy(), now()).contains(&ChoreAction::Close));
    }

    #[test]
    fn sub_project_boards_do_not_vote_on_closing() {
        let index = index_with_sub_project();

        // The unfinished board is a sub-project; the parent vote carries.
        let finished_on_parent = task(vec![
            membership("PHID-PROJ-parent", Some("Finished")),
            membership("PHID-PROJ-sub", Some("In Progress")),
        ]);
        assert!(evaluate(&finished_on_parent, &index, &policy(), now())
            .contains(&ChoreAction::Close));

        // Only sub-project presence left: no countable board, no close.
        let only_sub = task(vec![membership("PHID-PROJ-sub", Some("Finished"))]);
        assert!(!evaluate(&only_sub, &index, &policy(), now()).contains(&ChoreAction::Close));
    }

    #[test]
    fn staleness_is_strictly_beyond_the_threshold() {
        let now = now();
        let ninety_days = Duration::days(90);

        let mut exactly = task(Vec::new());
        exactly.owner_phid = Some("PHID-USER-o".to_string());
        exactly.date_modified = (now - ninety_days).timestamp();
        assert!(evaluate(&exactly, &empty_index(), &policy(), now).is_empty());

        let mut beyond = exactly.clone();
        beyond.date_modified -= 1;
        assert_eq!(
            evaluate(&beyond, &empty_index(), &policy(), now),
            vec![ChoreAction::Unassign { idle_days: 90 }]
        );
    }

    #[test]
    fn staleness_ignores_unassigned_tasks() {
        let mut idle = task(Vec::new());
        idle.date_modified = 0;
        assert!(evaluate(&idle, &empty_index(), &policy(), now()).is_empty());
    }

    #[test]
    fn issue_types_and_difficulty_map_to_tags() {
        let mut bug = task(Vec::new());
        bug.issue_type = Some("vulnerability".to_string());
        assert_eq!(
            evaluate(&bug, &empty_index(), &policy(), now()),
            vec![ChoreAction::Tag {
                project_phid: "PHID-PROJ-bugs".to_string(),
                reason: TagReason::Bug,
            }]
        );

        let mut unspecified = task(Vec::new());
        unspecified.issue_type = Some("unspecified".to_string());
        unspecified.difficulty_level = Some("easy".to_string());
        assert_eq!(
            evaluate(&unspecified, &empty_index(), &policy(), now()),
            vec![
                ChoreAction::Tag {
                    project_phid: "PHID-PROJ-uncat".to_string(),
                    reason: TagReason::Uncategorized,
                },
                ChoreAction::Tag {
                    project_phid: "PHID-PROJ-beginner".to_string(),
                    reason: TagReason::Beginner,
                },
            ]
        );

        let mut feature = task(Vec::new());
        feature.issue_type = Some("feature".to_string());
        assert!(evaluate(&feature, &empty_index(), &policy(), now()).is_empty());
    }

    #[test]
    fn rules_are_independent() {
        let mut all = task(vec![membership("PHID-PROJ-a", Some("Finished"))]);
        all.owner_phid = Some("PHID-USER-o".to_string());
        all.date_modified = (now() - Duration::days(120)).timestamp();
        all.issue_type = Some("bug".to_string());
        all.difficulty_level = Some("easy".to_string());

        let actions = evaluate(&all, &empty_index(), &policy(), now());
        assert_eq!(actions.len(), 4);
        assert!(actions.contains(&ChoreAction::Close));
        assert!(actions.contains(&ChoreAction::Unassign { idle_days: 120 }));
    }
}
