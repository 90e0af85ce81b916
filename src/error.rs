use std::collections::TryReserveError;
use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("node allocation failed: {0}")]
    AllocationFailure(#[from] TryReserveError),
    #[error("traversal revisited a node after {steps} steps; the chain has a cycle")]
    UnboundedTraversal { steps: usize },
    #[error("terminal back-link needs at least two nodes")]
    NoSecondToLast,
    #[error(transparent)]
    Io(#[from] io::Error),
}
