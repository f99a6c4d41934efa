/*
[INPUT]:  Public API exports for phorge-task-chores crate
[OUTPUT]: Module declarations and public re-exports
[POS]:    Crate root - library entry point
[UPDATE]: When adding new modules or public exports
*/

pub mod actions;
pub mod config;
pub mod reconstruct;
pub mod rules;
pub mod run;
pub mod snapshot;
pub mod workboard;

// Re-export main types for convenience
pub use actions::{ActionOutcome, ActionRecord, BatchReport, EditExecutor, apply_action};
pub use config::{ChoresConfig, TagProjects};
pub use reconstruct::{Membership, reconstruct_memberships};
pub use rules::{ChoreAction, ChorePolicy, TagReason, evaluate};
pub use run::run_chores;
pub use snapshot::{RunSnapshot, TaskSnapshot, load_snapshot};
pub use workboard::WorkboardIndex;
