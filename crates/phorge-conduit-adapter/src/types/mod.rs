/*
[INPUT]:  Wire schema definitions and serde requirements
[OUTPUT]: Typed Rust structs for Conduit payloads
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When the API schema changes or new types are added
*/

pub mod records;
pub mod requests;
pub mod responses;
pub mod transactions;

pub use records::{
    ColumnFields, ColumnProject, ColumnRecord, ProjectFields, ProjectRecord, TaskFields,
    TaskRecord, TaskStatus,
};
pub use requests::EditOp;
pub use responses::{
    AppliedTransaction, ConduitEnvelope, EditResult, EditedObject, QueryStatusesResult,
    SearchCursor, SearchResult,
};
pub use transactions::{PROJECT_PHID_PREFIX, TaskTransaction, TransactionKind};
