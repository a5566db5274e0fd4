//! Enemy creatures.

use crate::creature::Vitals;
use crate::item::Item;

/// A hostile creature occupying a room.
///
/// Rewards are fixed at creation and granted exactly once, when the enemy
/// dies. Dead enemies stay in their room's list; combat targeting filters
/// them by liveness rather than deleting them.
#[derive(Debug)]
pub struct Enemy {
    pub name: String,
    pub description: String,
    pub vitals: Vitals,
    pub loot: Vec<Item>,
    pub experience_value: u32,
    pub gold_value: u32,
}

impl Enemy {
    pub fn new(
        name: &str,
        description: &str,
        health: u32,
        strength: u32,
        loot: Vec<Item>,
        experience_value: u32,
        gold_value: u32,
    ) -> Enemy {
        Enemy {
            name: name.to_string(),
            description: description.to_string(),
            vitals: Vitals::new_at_max(health, strength),
            loot,
            experience_value,
            gold_value,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.vitals.is_alive()
    }

    /// Case-insensitive exact name comparison against player input.
    pub fn name_matches(&self, pattern: &str) -> bool {
        self.name.to_lowercase() == pattern.to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_alive_at_full_health() {
        let goblin = Enemy::new("Goblin", "Small and green.", 20, 5, Vec::new(), 15, 5);
        assert!(goblin.is_alive());
        assert_eq!(goblin.vitals.health(), 20);
        assert_eq!(goblin.vitals.max_health(), 20);
    }

    #[test]
    fn name_matching_is_exact_but_caseless() {
        let troll = Enemy::new("Cave Troll", "Large and gray.", 50, 8, Vec::new(), 30, 15);
        assert!(troll.name_matches("cave troll"));
        assert!(!troll.name_matches("troll"));
    }
}
