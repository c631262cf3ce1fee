//! Common test fixtures for the optiq test suite.
//!
//! Provides a deterministic corridor gridworld: a 1-D strip of cells where
//! consecutive pairs of cells form one zone. It stands in for the external
//! environment collaborator, producing the coarse/fine observation record,
//! a task reward at the goal cell, and a remaining-lives counter.

use optiq::{Action, Observation, StateId, ZoneId};

/// Cells per zone in the corridor.
pub const ZONE_WIDTH: u64 = 2;

/// A deterministic 1-D corridor environment.
///
/// Primitive actions: 0 = no-op, 1 = left, 2 = right. Moves clamp at both
/// ends. Reaching the last cell pays reward 1.0. Stepping onto the optional
/// pit cell costs one life.
pub struct Corridor {
    length: u64,
    position: u64,
    lives: u32,
    pit: Option<u64>,
}

impl Corridor {
    /// Size of the corridor's primitive action space.
    pub const ACTIONS: usize = 3;

    /// Lives granted at every episode reset.
    pub const LIVES: u32 = 30;

    pub fn new(length: u64) -> Self {
        assert!(length >= ZONE_WIDTH, "corridor too short for a zone");
        Self {
            length,
            position: 0,
            lives: Self::LIVES,
            pit: None,
        }
    }

    /// Place a pit: entering this cell costs one life.
    pub fn with_pit(mut self, cell: u64) -> Self {
        self.pit = Some(cell);
        self
    }

    /// Restart an episode at `position` with a fresh life counter.
    pub fn reset(&mut self, position: u64) {
        assert!(position < self.length);
        self.position = position;
        self.lives = Self::LIVES;
    }

    pub fn lives(&self) -> u32 {
        self.lives
    }

    /// The coarse zone of the current cell.
    pub fn zone(&self) -> ZoneId {
        ZoneId::new(self.position / ZONE_WIDTH)
    }

    /// The current observation at both granularities.
    pub fn observe(&self) -> Observation {
        Observation::new(self.zone(), StateId::new(self.position))
    }

    /// Execute one primitive action; returns (reward, observation, lives).
    pub fn step(&mut self, action: Action) -> (f64, Observation, u32) {
        match action {
            Action::Primitive(1) => self.position = self.position.saturating_sub(1),
            Action::Primitive(2) => self.position = (self.position + 1).min(self.length - 1),
            _ => {}
        }
        if self.pit == Some(self.position) {
            self.lives = self.lives.saturating_sub(1);
        }
        let reward = if self.position == self.length - 1 {
            1.0
        } else {
            0.0
        };
        (reward, self.observe(), self.lives)
    }
}
