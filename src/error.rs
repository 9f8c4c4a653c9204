use std::collections::TryReserveError;

use thiserror::Error;

/// Failures surfaced by tree construction, traversal and teardown.
#[derive(Debug, Error)]
pub enum AvlError {
    #[error("invalid input: key sequence is empty")]
    InvalidInput,

    #[error("allocation failed while reserving the descent path: {0}")]
    AllocationFailure(#[from] TryReserveError),

    #[error("invalid node: tree has no root")]
    InvalidNode,
}
