//! Lazily-populated Q-table keyed by dynamically discovered states.

use std::collections::HashMap;

use rand::{Rng, seq::IndexedRandom};
use serde::{Deserialize, Serialize};

use crate::{
    error::{Error, Result},
    identifiers::StateId,
    types::Action,
};

/// Q-table mapping an abstract state to per-action value estimates.
///
/// States and actions are registered lazily as the agent discovers them,
/// through an explicit two-phase API: [`QTable::add_state`] and
/// [`QTable::add_action_to_state`] first, queries after. Querying an
/// unregistered state is a contract violation surfaced as an error, never a
/// silent default.
///
/// Each row keeps its actions in first-seen order, which makes the
/// [`QTable::find_best_action`] tie-break deterministic and reproducible.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QTable {
    rows: HashMap<StateId, Vec<(Action, f64)>>,
}

impl QTable {
    /// Create an empty Q-table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Ensure a row exists for `state`. Idempotent: an existing row, empty
    /// or populated, is left untouched.
    pub fn add_state(&mut self, state: StateId) {
        self.rows.entry(state).or_default();
    }

    /// Ensure `state`'s row has an entry for `action`, defaulting its value
    /// to 0.0. Idempotent: re-adding never resets an existing value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownState`] if `state` was never registered.
    pub fn add_action_to_state(&mut self, state: StateId, action: Action) -> Result<()> {
        let row = self
            .rows
            .get_mut(&state)
            .ok_or(Error::UnknownState { state })?;
        if !row.iter().any(|(a, _)| *a == action) {
            row.push((action, 0.0));
        }
        Ok(())
    }

    /// Whether `state` has at least one registered action.
    ///
    /// Total: an unregistered state simply has no actions.
    pub fn is_actions(&self, state: StateId) -> bool {
        self.rows.get(&state).is_some_and(|row| !row.is_empty())
    }

    /// The `(value, action)` pair maximizing value over `state`'s registered
    /// actions. Ties resolve to the action registered first.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownState`] for an unregistered state and
    /// [`Error::NoActionsAvailable`] for a registered state with an empty
    /// row.
    pub fn find_best_action(&self, state: StateId) -> Result<(f64, Action)> {
        let row = self.rows.get(&state).ok_or(Error::UnknownState { state })?;
        let mut best: Option<(f64, Action)> = None;
        for &(action, value) in row {
            // Strict comparison keeps the first-seen action on ties.
            if best.is_none_or(|(best_value, _)| value > best_value) {
                best = Some((value, action));
            }
        }
        best.ok_or(Error::NoActionsAvailable { state })
    }

    /// A uniformly random action among `state`'s registered actions.
    ///
    /// # Errors
    ///
    /// Same conditions as [`QTable::find_best_action`].
    pub fn get_random_action<R: Rng>(&self, state: StateId, rng: &mut R) -> Result<Action> {
        let row = self.rows.get(&state).ok_or(Error::UnknownState { state })?;
        row.choose(rng)
            .map(|&(action, _)| action)
            .ok_or(Error::NoActionsAvailable { state })
    }

    /// Bootstrapped semi-MDP Q-learning step:
    ///
    /// `target = reward` if `terminal`, else `reward + max_a' Q(s', a')`;
    /// `Q(s,a) ← (1-α)·Q(s,a) + α·target`.
    ///
    /// `next_state` is auto-registered before the bootstrap max is taken
    /// (an empty row contributes 0.0), and `(state, action)` is
    /// auto-registered at 0.0 before the blend. At a terminal boundary the
    /// bootstrap collapses to the raw shaped reward.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownState`] if `state` itself was never
    /// registered.
    pub fn update_q_value(
        &mut self,
        state: StateId,
        action: Action,
        reward: f64,
        next_state: StateId,
        terminal: bool,
        learning_rate: f64,
    ) -> Result<()> {
        if !self.rows.contains_key(&state) {
            return Err(Error::UnknownState { state });
        }
        self.add_state(next_state);

        let max_next_q = if terminal {
            0.0
        } else {
            // Max over the registered actions; only an empty row falls back
            // to 0.0. An all-negative row must contribute its true maximum.
            self.rows[&next_state]
                .iter()
                .map(|&(_, value)| value)
                .reduce(f64::max)
                .unwrap_or(0.0)
        };
        let target = reward + max_next_q;

        let row = self
            .rows
            .get_mut(&state)
            .ok_or(Error::UnknownState { state })?;
        if let Some(entry) = row.iter_mut().find(|(a, _)| *a == action) {
            entry.1 = (1.0 - learning_rate) * entry.1 + learning_rate * target;
        } else {
            // Fresh action starts from the 0.0 default before the blend.
            row.push((action, learning_rate * target));
        }
        Ok(())
    }

    /// Current estimate for `(state, action)`, if both are registered.
    pub fn value(&self, state: StateId, action: Action) -> Option<f64> {
        self.rows
            .get(&state)?
            .iter()
            .find(|(a, _)| *a == action)
            .map(|&(_, value)| value)
    }

    /// Number of registered states.
    pub fn state_count(&self) -> usize {
        self.rows.len()
    }

    /// The registered actions of `state` in first-seen order, if any.
    pub fn actions(&self, state: StateId) -> Option<impl Iterator<Item = Action> + '_> {
        self.rows
            .get(&state)
            .map(|row| row.iter().map(|&(action, _)| action))
    }
}
