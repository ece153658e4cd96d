//! Typed error type for the store crate.

use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("workflow {0} not found")]
    NotFound(Uuid),
}
