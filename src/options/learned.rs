//! The trainable option: tabular Q-learning toward a coarse subgoal.

use std::fmt;

use rand::{Rng, SeedableRng, rngs::StdRng};

use super::{OptionPolicy, build_rng};
use crate::{
    config::OptionConfig,
    error::{Error, Result},
    identifiers::{StateId, ZoneId},
    q_learning::QTable,
    types::{Action, Observation, OptionId},
};

/// A trainable option with a private Q-table scoped to its own subgoal.
///
/// The termination test is coarse (zone level) while the value table is
/// keyed by fine-grained full states, so the option learns detailed
/// behavior toward a coarsely specified subgoal. In train mode action
/// selection is epsilon-greedy and every step runs a reward-shaped,
/// bootstrapped Q update; in play mode the option only exploits and the
/// table is frozen.
///
/// The table treats every state as having the full primitive action set
/// `0..number_actions`, registered dense on first sight.
#[derive(Debug, Clone)]
pub struct LearnedOption {
    config: OptionConfig,
    number_actions: usize,
    play: bool,
    initial_zone: Option<ZoneId>,
    terminal_zone: Option<ZoneId>,
    current_state: Option<StateId>,
    /// Private value table, created lazily on the first reset.
    q: Option<QTable>,
    /// Remaining-lives baseline, snapshotted on the first update after a
    /// reset.
    lives: Option<u32>,
    rng: StdRng,
    rng_seed: Option<u64>,
}

impl LearnedOption {
    /// Create a new trainable option.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyActionSpace`] for a zero-sized action space
    /// and [`Error::InvalidConfiguration`] for rejected hyperparameters.
    pub fn new(number_actions: usize, play: bool, config: OptionConfig) -> Result<Self> {
        if number_actions == 0 {
            return Err(Error::EmptyActionSpace);
        }
        Ok(Self {
            config: config.validated()?,
            number_actions,
            play,
            initial_zone: None,
            terminal_zone: None,
            current_state: None,
            q: None,
            lives: None,
            rng: build_rng(None),
            rng_seed: None,
        })
    }

    /// Seed the option's RNG for reproducible training runs.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self.rng_seed = Some(seed);
        self
    }

    /// The RNG seed this option was built with, if any. Experiment drivers
    /// record it alongside reward curves to make runs reproducible.
    pub fn rng_seed(&self) -> Option<u64> {
        self.rng_seed
    }

    /// Switch between train mode (epsilon-greedy, learning) and play mode
    /// (exploit-only, table frozen).
    pub fn set_play(&mut self, play: bool) {
        self.play = play;
    }

    /// Whether the option is in play mode.
    pub fn is_play(&self) -> bool {
        self.play
    }

    /// Handle under which the outer agent scores this option as an action,
    /// `None` before the first reset anchors a target zone.
    pub fn id(&self) -> Option<OptionId> {
        self.terminal_zone.map(OptionId::new)
    }

    /// The fine-grained state the option currently acts from.
    pub fn current_state(&self) -> Option<StateId> {
        self.current_state
    }

    /// The option's private value table, `None` before the first reset.
    pub fn q_table(&self) -> Option<&QTable> {
        self.q.as_ref()
    }

    /// Register `state` with the dense primitive action set.
    fn register_state(q: &mut QTable, state: StateId, number_actions: usize) -> Result<()> {
        q.add_state(state);
        for id in 0..number_actions {
            q.add_action_to_state(state, Action::Primitive(id))?;
        }
        Ok(())
    }

    /// Reward shaping: task reward, per-action penalty, termination
    /// bonus/penalty, life-loss penalty. All terms are additive and
    /// unconditional whatever subset fires in the same step.
    fn compute_total_reward(
        &self,
        reward: f64,
        terminated: bool,
        new_zone: ZoneId,
        action: Action,
        remaining_lives: u32,
        lives_baseline: u32,
    ) -> f64 {
        let mut total = reward;
        if !action.is_noop() {
            total += self.config.action_penalty;
        }
        if terminated {
            total += if self.terminal_zone == Some(new_zone) {
                self.config.success_bonus
            } else {
                self.config.failure_penalty
            };
        }
        if remaining_lives < lives_baseline {
            total += self.config.life_loss_penalty;
        }
        total
    }
}

impl OptionPolicy for LearnedOption {
    fn reset(
        &mut self,
        initial_zone: ZoneId,
        current_state: StateId,
        terminal_zone: ZoneId,
    ) -> Result<()> {
        let q = self.q.get_or_insert_with(QTable::new);
        Self::register_state(q, current_state, self.number_actions)?;
        self.initial_zone = Some(initial_zone);
        self.terminal_zone = Some(terminal_zone);
        self.current_state = Some(current_state);
        self.lives = None;
        Ok(())
    }

    fn initial_zone(&self) -> Option<ZoneId> {
        self.initial_zone
    }

    fn update_option(
        &mut self,
        reward: f64,
        new_state: Observation,
        action: Action,
        remaining_lives: u32,
    ) -> Result<bool> {
        let current = self.current_state.ok_or(Error::OptionNotReset)?;
        let lives_baseline = *self.lives.get_or_insert(remaining_lives);

        let terminated = self.check_end_option(new_state.zone);
        if self.play {
            return Ok(terminated);
        }

        let total = self.compute_total_reward(
            reward,
            terminated,
            new_state.zone,
            action,
            remaining_lives,
            lives_baseline,
        );

        let q = self.q.as_mut().ok_or(Error::OptionNotReset)?;
        Self::register_state(q, new_state.state, self.number_actions)?;
        q.update_q_value(
            current,
            action,
            total,
            new_state.state,
            terminated,
            self.config.learning_rate,
        )?;

        self.lives = Some(remaining_lives);
        self.current_state = Some(new_state.state);
        Ok(terminated)
    }

    fn act(&mut self) -> Result<Action> {
        let state = self.current_state.ok_or(Error::OptionNotReset)?;
        let q = self.q.as_ref().ok_or(Error::OptionNotReset)?;
        if !self.play && self.rng.random::<f64>() < self.config.explore_probability {
            q.get_random_action(state, &mut self.rng)
        } else {
            q.find_best_action(state).map(|(_, action)| action)
        }
    }
}

impl fmt::Display for LearnedOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.initial_zone, self.terminal_zone) {
            (Some(from), Some(to)) => write!(f, "option from {from} to {to}"),
            _ => write!(f, "option (unanchored)"),
        }
    }
}
