//! Error types for the optiq crate

use thiserror::Error;

use crate::identifiers::StateId;

/// Main error type for the optiq crate
///
/// Every variant is a programming-contract error: the core performs no I/O
/// and has no transient failure modes, so failures surface immediately to
/// the caller instead of being retried or degraded.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("state {state} is not registered in the Q-table")]
    UnknownState { state: StateId },

    #[error("state {state} has no registered actions")]
    NoActionsAvailable { state: StateId },

    #[error("option requires at least one primitive action")]
    EmptyActionSpace,

    #[error("invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("option used before reset() anchored it to a zone")]
    OptionNotReset,
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;
