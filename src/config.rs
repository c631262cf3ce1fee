//! Hyperparameter configuration for trainable options.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Learning and reward-shaping hyperparameters of a trainable option.
///
/// All shaping terms are *added* to the raw environment reward, so penalties
/// are negative by convention. Validation happens once, at construction
/// through [`OptionConfig::validated`]; a config obtained that way never
/// fails later.
///
/// # Examples
///
/// ```
/// use optiq::OptionConfig;
///
/// let config = OptionConfig::default()
///     .with_learning_rate(0.5)
///     .with_explore_probability(0.2)
///     .validated()
///     .unwrap();
/// assert_eq!(config.learning_rate, 0.5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OptionConfig {
    /// Step size α of the bootstrapped Q update, in (0, 1].
    pub learning_rate: f64,
    /// Probability of a uniform-random action in train mode, in [0, 1].
    pub explore_probability: f64,
    /// Added to the reward for every non-no-op primitive action (≤ 0).
    pub action_penalty: f64,
    /// Added when the option terminates in its intended terminal zone.
    pub success_bonus: f64,
    /// Added when the option terminates in any other zone (≤ 0).
    pub failure_penalty: f64,
    /// Added when a life is lost during the option's run (≤ 0).
    pub life_loss_penalty: f64,
}

impl Default for OptionConfig {
    fn default() -> Self {
        Self {
            learning_rate: 0.1,
            explore_probability: 0.1,
            action_penalty: -0.1,
            success_bonus: 10.0,
            failure_penalty: -10.0,
            life_loss_penalty: -50.0,
        }
    }
}

impl OptionConfig {
    /// Set the learning rate.
    pub fn with_learning_rate(mut self, learning_rate: f64) -> Self {
        self.learning_rate = learning_rate;
        self
    }

    /// Set the exploration probability.
    pub fn with_explore_probability(mut self, explore_probability: f64) -> Self {
        self.explore_probability = explore_probability;
        self
    }

    /// Set the per-action penalty.
    pub fn with_action_penalty(mut self, action_penalty: f64) -> Self {
        self.action_penalty = action_penalty;
        self
    }

    /// Set the correct-termination bonus.
    pub fn with_success_bonus(mut self, success_bonus: f64) -> Self {
        self.success_bonus = success_bonus;
        self
    }

    /// Set the wrong-termination penalty.
    pub fn with_failure_penalty(mut self, failure_penalty: f64) -> Self {
        self.failure_penalty = failure_penalty;
        self
    }

    /// Set the life-loss penalty.
    pub fn with_life_loss_penalty(mut self, life_loss_penalty: f64) -> Self {
        self.life_loss_penalty = life_loss_penalty;
        self
    }

    /// Validate the configuration, consuming and returning it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] if the learning rate is not
    /// in (0, 1], the exploration probability is not in [0, 1], or any
    /// shaping term is non-finite.
    pub fn validated(self) -> Result<Self> {
        if !(self.learning_rate > 0.0 && self.learning_rate <= 1.0) {
            return Err(Error::InvalidConfiguration {
                message: format!(
                    "learning_rate must be in (0, 1], got {}",
                    self.learning_rate
                ),
            });
        }
        if !(0.0..=1.0).contains(&self.explore_probability) {
            return Err(Error::InvalidConfiguration {
                message: format!(
                    "explore_probability must be in [0, 1], got {}",
                    self.explore_probability
                ),
            });
        }
        for (name, value) in [
            ("action_penalty", self.action_penalty),
            ("success_bonus", self.success_bonus),
            ("failure_penalty", self.failure_penalty),
            ("life_loss_penalty", self.life_loss_penalty),
        ] {
            if !value.is_finite() {
                return Err(Error::InvalidConfiguration {
                    message: format!("{name} must be finite, got {value}"),
                });
            }
        }
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(OptionConfig::default().validated().is_ok());
    }

    #[test]
    fn test_learning_rate_bounds() {
        assert!(
            OptionConfig::default()
                .with_learning_rate(0.0)
                .validated()
                .is_err()
        );
        assert!(
            OptionConfig::default()
                .with_learning_rate(1.0)
                .validated()
                .is_ok()
        );
        assert!(
            OptionConfig::default()
                .with_learning_rate(1.1)
                .validated()
                .is_err()
        );
        assert!(
            OptionConfig::default()
                .with_learning_rate(f64::NAN)
                .validated()
                .is_err()
        );
    }

    #[test]
    fn test_explore_probability_bounds() {
        assert!(
            OptionConfig::default()
                .with_explore_probability(0.0)
                .validated()
                .is_ok()
        );
        assert!(
            OptionConfig::default()
                .with_explore_probability(1.0)
                .validated()
                .is_ok()
        );
        assert!(
            OptionConfig::default()
                .with_explore_probability(-0.1)
                .validated()
                .is_err()
        );
    }

    #[test]
    fn test_shaping_terms_must_be_finite() {
        assert!(
            OptionConfig::default()
                .with_life_loss_penalty(f64::NEG_INFINITY)
                .validated()
                .is_err()
        );
    }
}
