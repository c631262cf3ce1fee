//! Temporally-extended macro-actions ("options") over zone abstractions.
//!
//! An option carries the agent from the zone it was invoked in toward a
//! target zone, one primitive action at a time. The invoking agent drives
//! the loop: `act()` yields a primitive action, the environment executes it,
//! and `update_option()` folds the outcome back in and reports whether the
//! option has terminated (it terminates when the agent leaves its starting
//! zone, wherever it lands).
//!
//! Two variants exist: [`LearnedOption`] trains a private [`crate::QTable`]
//! scoped to its own subgoal, while [`ExploreOption`] plays uniformly at
//! random as a fallback for zones not yet covered by a learned option.
//!
//! Lifecycle shared by both: constructed once per subgoal, re-anchored by
//! [`OptionPolicy::reset`] for each invocation episode, then driven through
//! repeated `act`/`update_option` calls until the termination flag comes
//! back true. Termination is level-triggered per call; the next `reset`
//! starts the next invocation.

pub mod explore;
pub mod learned;

use rand::{SeedableRng, rngs::StdRng};

pub use explore::ExploreOption;
pub use learned::LearnedOption;

use crate::{
    error::Result,
    identifiers::{StateId, ZoneId},
    types::{Action, Observation},
};

/// Lifecycle contract every option variant implements.
///
/// The driving agent only ever talks to an option through this interface:
/// anchor it with `reset`, then alternate `act` and `update_option` until
/// the latter reports termination.
pub trait OptionPolicy {
    /// Re-anchor the option for a new invocation episode.
    ///
    /// `initial_zone` is where the invocation starts (and what the default
    /// termination test compares against), `current_state` the fine-grained
    /// state the option acts from, `terminal_zone` the subgoal it is
    /// credited for reaching. Clears the remaining-lives baseline.
    fn reset(
        &mut self,
        initial_zone: ZoneId,
        current_state: StateId,
        terminal_zone: ZoneId,
    ) -> Result<()>;

    /// The zone this option was anchored in, `None` before the first reset.
    fn initial_zone(&self) -> Option<ZoneId>;

    /// Whether observing `new_zone` ends the option.
    ///
    /// Default rule: the option ends as soon as the agent leaves its
    /// starting zone, no matter where it lands.
    fn check_end_option(&self, new_zone: ZoneId) -> bool {
        self.initial_zone().is_none_or(|zone| zone != new_zone)
    }

    /// Fold one environment step back into the option.
    ///
    /// `reward` and `action` describe the step just executed,
    /// `new_state` the observation it produced, and `remaining_lives` the
    /// environment's life counter (non-increasing within an episode).
    /// Returns whether the option has terminated.
    fn update_option(
        &mut self,
        reward: f64,
        new_state: Observation,
        action: Action,
        remaining_lives: u32,
    ) -> Result<bool>;

    /// Choose the next primitive action.
    fn act(&mut self) -> Result<Action>;
}

/// Build a seeded RNG, falling back to OS entropy without a seed.
pub(crate) fn build_rng(seed: Option<u64>) -> StdRng {
    if let Some(seed) = seed {
        StdRng::seed_from_u64(seed)
    } else {
        StdRng::from_rng(&mut rand::rng())
    }
}
