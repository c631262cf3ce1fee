//! The non-learning exploration option.

use std::fmt;

use rand::{Rng, SeedableRng, rngs::StdRng};

use super::{OptionPolicy, build_rng};
use crate::{
    error::{Error, Result},
    identifiers::{StateId, ZoneId},
    types::{Action, Observation},
};

/// A non-learning option that plays uniformly at random until the agent
/// leaves its starting zone.
///
/// Serves as the fallback policy for zones not yet covered by a learned
/// option: it carries no Q-table and never updates anything beyond the
/// lives counter.
#[derive(Debug, Clone)]
pub struct ExploreOption {
    number_actions: usize,
    initial_zone: Option<ZoneId>,
    lives: Option<u32>,
    rng: StdRng,
    rng_seed: Option<u64>,
}

impl ExploreOption {
    /// Create a new exploration option.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyActionSpace`] for a zero-sized action space.
    pub fn new(number_actions: usize) -> Result<Self> {
        if number_actions == 0 {
            return Err(Error::EmptyActionSpace);
        }
        Ok(Self {
            number_actions,
            initial_zone: None,
            lives: None,
            rng: build_rng(None),
            rng_seed: None,
        })
    }

    /// Seed the option's RNG for reproducible runs.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self.rng_seed = Some(seed);
        self
    }

    /// The RNG seed this option was built with, if any.
    pub fn rng_seed(&self) -> Option<u64> {
        self.rng_seed
    }

    /// Last observed remaining-lives count, `None` right after a reset.
    pub fn lives(&self) -> Option<u32> {
        self.lives
    }
}

impl OptionPolicy for ExploreOption {
    fn reset(
        &mut self,
        initial_zone: ZoneId,
        _current_state: StateId,
        _terminal_zone: ZoneId,
    ) -> Result<()> {
        self.initial_zone = Some(initial_zone);
        self.lives = None;
        Ok(())
    }

    fn initial_zone(&self) -> Option<ZoneId> {
        self.initial_zone
    }

    fn update_option(
        &mut self,
        _reward: f64,
        new_state: Observation,
        _action: Action,
        remaining_lives: u32,
    ) -> Result<bool> {
        if self.initial_zone.is_none() {
            return Err(Error::OptionNotReset);
        }
        self.lives = Some(remaining_lives);
        Ok(self.check_end_option(new_state.zone))
    }

    fn act(&mut self) -> Result<Action> {
        Ok(Action::Primitive(self.rng.random_range(0..self.number_actions)))
    }
}

impl fmt::Display for ExploreOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.initial_zone {
            Some(zone) => write!(f, "explore option from {zone}"),
            None => write!(f, "explore option (unanchored)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn zone(id: u64) -> ZoneId {
        ZoneId::new(id)
    }

    fn obs(z: u64, s: u64) -> Observation {
        Observation::new(zone(z), StateId::new(s))
    }

    #[test]
    fn test_act_is_uniform_over_the_action_space() {
        let mut option = ExploreOption::new(4).unwrap().with_seed(17);
        let draws = 10_000;
        let mut counts = [0usize; 4];
        for _ in 0..draws {
            match option.act().unwrap() {
                Action::Primitive(id) => counts[id] += 1,
                other => panic!("explore option produced {other}"),
            }
        }
        // Each frequency should sit near 0.25; ±0.03 is far beyond the
        // ~0.0043 standard error of 10k draws.
        for count in counts {
            let frequency = count as f64 / draws as f64;
            assert!(
                (frequency - 0.25).abs() < 0.03,
                "skewed action frequencies: {counts:?}"
            );
        }
    }

    #[test]
    fn test_terminates_on_zone_departure_only() {
        let mut option = ExploreOption::new(4).unwrap();
        option.reset(zone(0), StateId::new(0), zone(1)).unwrap();
        assert!(
            !option
                .update_option(0.0, obs(0, 1), Action::Primitive(1), 3)
                .unwrap()
        );
        assert!(
            option
                .update_option(0.0, obs(2, 2), Action::Primitive(1), 3)
                .unwrap()
        );
    }

    #[test]
    fn test_tracks_lives_without_learning() {
        let mut option = ExploreOption::new(4).unwrap();
        option.reset(zone(0), StateId::new(0), zone(1)).unwrap();
        assert_eq!(option.lives(), None);
        option
            .update_option(1.0, obs(0, 1), Action::Primitive(1), 3)
            .unwrap();
        assert_eq!(option.lives(), Some(3));
        option
            .update_option(1.0, obs(0, 2), Action::Primitive(1), 2)
            .unwrap();
        assert_eq!(option.lives(), Some(2));
    }

    #[test]
    fn test_seed_is_recorded_for_reproducibility() {
        let option = ExploreOption::new(4).unwrap();
        assert_eq!(option.rng_seed(), None);
        let option = option.with_seed(17);
        assert_eq!(option.rng_seed(), Some(17));
    }

    #[test]
    fn test_update_before_reset_is_an_error() {
        let mut option = ExploreOption::new(4).unwrap();
        assert!(matches!(
            option.update_option(0.0, obs(1, 1), Action::Primitive(1), 3),
            Err(Error::OptionNotReset)
        ));
    }

    #[test]
    fn test_reset_clears_the_lives_baseline() {
        let mut option = ExploreOption::new(4).unwrap();
        option.reset(zone(0), StateId::new(0), zone(1)).unwrap();
        option
            .update_option(0.0, obs(0, 1), Action::Primitive(1), 3)
            .unwrap();
        option.reset(zone(5), StateId::new(9), zone(6)).unwrap();
        assert_eq!(option.lives(), None);
        assert_eq!(option.initial_zone(), Some(zone(5)));
    }
}
