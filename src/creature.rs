//! Creature vitals.
//!
//! Handles health and strength for living entities. Both the player and
//! enemies embed a [`Vitals`]; "alive" is derived from current health rather
//! than stored, so it can never disagree with the hit points.

use std::cmp;

/// Health and strength for a living entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Vitals {
    max_health: u32,
    health: u32,
    pub strength: u32,
}

impl Vitals {
    /// Create vitals at full health.
    pub fn new_at_max(max_health: u32, strength: u32) -> Vitals {
        Vitals {
            max_health,
            health: max_health,
            strength,
        }
    }

    pub fn health(&self) -> u32 {
        self.health
    }

    pub fn max_health(&self) -> u32 {
        self.max_health
    }

    /// Alive is exactly `health > 0`.
    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    /// Do damage. Saturates at zero.
    pub fn damage(&mut self, amount: u32) {
        self.health = self.health.saturating_sub(amount);
    }

    /// Heal. Saturates at max health.
    pub fn heal(&mut self, amount: u32) {
        self.health = cmp::min(self.max_health, self.health.saturating_add(amount));
    }

    /// Raise the health ceiling and refill to it (level-up behavior).
    pub fn raise_max_and_refill(&mut self, amount: u32) {
        self.max_health = self.max_health.saturating_add(amount);
        self.health = self.max_health;
    }
}
