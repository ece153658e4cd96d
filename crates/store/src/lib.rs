//! `store` crate — in-memory workflow storage and legacy strategy
//! conversion.
//!
//! This is the engine's storage collaborator: it owns workflow lifecycle
//! (create/update/delete) and hands the engine an owned snapshot for the
//! duration of one execution. No business logic lives here.

pub mod error;
pub mod legacy;
pub mod memory;

pub use error::StoreError;
pub use memory::{WorkflowDraft, WorkflowStore};
