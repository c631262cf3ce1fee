//! Tabular semi-MDP Q-learning support.
//!
//! The [`QTable`] here differs from a classic dense state×action array in
//! two ways that matter for option learning:
//!
//! - **Lazy registration**: states and actions are discovered at run time,
//!   so rows grow through an explicit two-phase API instead of silent
//!   default-on-access. "Unregistered state" is an observable error.
//! - **Mixed action space**: a row can score primitive environment moves and
//!   option handles side by side, which is what lets an outer agent treat
//!   "run this option" as just another action.
//!
//! The update rule is the one-step bootstrapped blend
//! `Q(s,a) ← (1-α)·Q(s,a) + α·target` with the target collapsing to the raw
//! shaped reward at a terminal boundary. The "next state" of an update may
//! lie many primitive steps away (the duration of an option), which is the
//! semi-Markov part.

pub mod q_table;

pub use q_table::QTable;
