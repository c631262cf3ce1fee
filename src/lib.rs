//! Tabular option learning over zone abstractions
//!
//! This crate provides the learning core of a hierarchical reinforcement
//! learning agent built on the options framework:
//! - A lazily-populated [`QTable`] over dynamically discovered states and a
//!   mixed action space (primitive moves and option handles as peers)
//! - The [`OptionPolicy`] lifecycle contract shared by every option variant
//! - [`LearnedOption`], a trainable option with a private Q-table scoped to
//!   its own subgoal and multi-term reward shaping
//! - [`ExploreOption`], a uniform-random fallback for uncovered zones
//!
//! The environment simulation, observation wrappers and the outer episode
//! driver are external collaborators; they feed each option a per-step
//! [`Observation`] (coarse zone plus fine state) together with the reward,
//! the executed action and the remaining-lives counter.
//!
//! # Example
//!
//! ```
//! use optiq::{
//!     Action, LearnedOption, Observation, OptionConfig, OptionPolicy, StateId, ZoneId,
//! };
//!
//! let config = OptionConfig::default().with_learning_rate(0.5);
//! let mut option = LearnedOption::new(4, false, config).unwrap().with_seed(42);
//!
//! // Anchor the option: invoked in zone 0, aiming at zone 1.
//! option
//!     .reset(ZoneId::new(0), StateId::new(100), ZoneId::new(1))
//!     .unwrap();
//!
//! // One step of the driving loop.
//! let action = option.act().unwrap();
//! let observed = Observation::new(ZoneId::new(1), StateId::new(101));
//! let terminated = option.update_option(1.0, observed, action, 3).unwrap();
//! assert!(terminated);
//! ```

pub mod config;
pub mod error;
pub mod identifiers;
pub mod options;
pub mod q_learning;
pub mod types;

pub use config::OptionConfig;
pub use error::{Error, Result};
pub use identifiers::{StateId, ZoneId};
pub use options::{ExploreOption, LearnedOption, OptionPolicy};
pub use q_learning::QTable;
pub use types::{Action, Observation, OptionId};
