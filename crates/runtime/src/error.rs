//! Unified error type surfaced by the session API.
//!
//! Wraps failures from the core engine and oracle lookups so frontends can
//! bubble them up with consistent context. Gameplay illegality (a blocked
//! step, an unaffordable offer) is never an error; only registration bugs
//! and engine misuse land here.

use thiserror::Error;

use corridor_core::{ExecuteError, OracleError};

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error(transparent)]
    Execute(#[from] ExecuteError),

    #[error(transparent)]
    Oracle(#[from] OracleError),
}
