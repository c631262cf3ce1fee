//! Core value types shared by the option machinery.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::identifiers::{StateId, ZoneId};

/// Handle identifying an option by the zone it targets.
///
/// Two options aiming at the same terminal zone are the same action from the
/// outer agent's point of view, so the handle carries exactly that zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OptionId(ZoneId);

impl OptionId {
    /// Create a handle for an option targeting `terminal_zone`.
    pub const fn new(terminal_zone: ZoneId) -> Self {
        Self(terminal_zone)
    }

    /// The zone this option carries the agent toward.
    pub const fn terminal_zone(&self) -> ZoneId {
        self.0
    }
}

impl fmt::Display for OptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "option->{}", self.0)
    }
}

/// An action as seen by a Q-table: either a primitive environment move or a
/// handle to a temporally-extended option.
///
/// The two kinds share a single hashable identity so that an outer Q-table
/// can score options and primitive moves as peers in the same row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// A primitive environment action, `id` in `[0, number_actions)`.
    Primitive(usize),
    /// A reference to an option, keyed by its target zone.
    OptionRef(OptionId),
}

impl Action {
    /// Whether this is the environment's no-op.
    ///
    /// Primitive action 0 is the no-op by convention; the per-step action
    /// penalty is skipped for it.
    pub fn is_noop(&self) -> bool {
        matches!(self, Action::Primitive(0))
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Primitive(id) => write!(f, "a{id}"),
            Action::OptionRef(id) => write!(f, "{id}"),
        }
    }
}

/// The per-step state record delivered by the environment.
///
/// `zone` is the coarse blurred observation used for the termination test;
/// `state` is the fine observation used as the Q-table key. Reward, the
/// executed action and the remaining-lives counter arrive alongside it as
/// separate `update_option` arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Observation {
    pub zone: ZoneId,
    pub state: StateId,
}

impl Observation {
    pub const fn new(zone: ZoneId, state: StateId) -> Self {
        Self { zone, state }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    #[test]
    fn test_noop_detection() {
        assert!(Action::Primitive(0).is_noop());
        assert!(!Action::Primitive(1).is_noop());
        assert!(!Action::OptionRef(OptionId::new(ZoneId::new(0))).is_noop());
    }

    #[test]
    fn test_option_handles_share_identity_by_target_zone() {
        let a = Action::OptionRef(OptionId::new(ZoneId::new(3)));
        let b = Action::OptionRef(OptionId::new(ZoneId::new(3)));
        let c = Action::OptionRef(OptionId::new(ZoneId::new(4)));
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_mixed_actions_as_map_keys() {
        let mut values: HashMap<Action, f64> = HashMap::new();
        values.insert(Action::Primitive(2), 1.0);
        values.insert(Action::OptionRef(OptionId::new(ZoneId::new(2))), 2.0);
        // A primitive id and an option handle with the same number are
        // different keys.
        assert_eq!(values.len(), 2);
    }
}
