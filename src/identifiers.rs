//! Domain identifier types for abstract states.
//!
//! The environment observes at two granularities: a coarse "blurred" zone
//! used for option termination tests, and a fine full state used as the
//! Q-table key. Both arrive as opaque hashes of the underlying observation,
//! so these newtypes keep the two granularities from being mixed up.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a coarse zone (blurred observation).
///
/// Zones partition the environment's state space and define where an option
/// starts and where it is meant to terminate. The payload is whatever stable
/// hash the environment derives from the downsampled observation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ZoneId(u64);

impl ZoneId {
    /// Create a new zone identifier.
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Get the inner value.
    pub const fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for ZoneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "zone#{}", self.0)
    }
}

/// Identifier of a fine-grained full state (high-resolution observation).
///
/// Used as the key of an option's private Q-table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct StateId(u64);

impl StateId {
    /// Create a new state identifier.
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Get the inner value.
    pub const fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for StateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "state#{}", self.0)
    }
}
