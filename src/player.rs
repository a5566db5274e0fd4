//! Player -- the adventurer's stats, inventory, and progression.

use log::info;
use thiserror::Error;

use crate::creature::Vitals;
use crate::item::{Item, PotionEffect};

/// Experience needed to advance past a given level.
const XP_PER_LEVEL: u32 = 100;

/// Inventory and equipment failures, mapped directly to player-facing text.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InventoryError {
    #[error("You don't have a weapon called {0}.")]
    NoSuchWeapon(String),
    #[error("You don't have an item called {0}.")]
    NotCarried(String),
    #[error("You can't use {0} like that.")]
    NotUsable(String),
}

/// Stat changes from a single level-up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelUp {
    pub level: u32,
    pub max_health: u32,
    pub strength: u32,
}

/// What a successfully drunk potion did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PotionUse {
    pub name: String,
    pub effect: PotionEffect,
    pub potency: u32,
}

/// The player character.
///
/// Inventory order is acquisition order. The equipped weapon is tracked by
/// name and must be present in the inventory; removing the equipped item
/// from the inventory clears the equipment slot.
#[derive(Debug)]
pub struct Player {
    pub name: String,
    pub description: String,
    pub vitals: Vitals,
    pub inventory: Vec<Item>,
    equipped_weapon: Option<String>,
    pub gold: u32,
    pub experience: u32,
    pub level: u32,
}

impl Player {
    /// Create a fresh level-1 adventurer.
    pub fn new(name: &str) -> Player {
        Player {
            name: name.to_string(),
            description: format!("The brave adventurer {name}"),
            vitals: Vitals::new_at_max(100, 10),
            inventory: Vec::new(),
            equipped_weapon: None,
            gold: 50,
            experience: 0,
            level: 1,
        }
    }

    pub fn add_to_inventory(&mut self, item: Item) {
        info!("{} acquired {}", self.name, item.name);
        self.inventory.push(item);
    }

    /// Find a carried item by case-insensitive exact name.
    pub fn find_item(&self, name: &str) -> Option<&Item> {
        self.inventory.iter().find(|item| item.name_matches(name))
    }

    /// Remove a carried item by name, clearing the equipment slot if the
    /// removed item was the equipped weapon.
    pub fn remove_item(&mut self, name: &str) -> Option<Item> {
        let idx = self.inventory.iter().position(|item| item.name_matches(name))?;
        let item = self.inventory.remove(idx);
        if self.equipped_weapon.as_deref().is_some_and(|equipped| item.name_matches(equipped)) {
            info!("{} unequipped {} (no longer carried)", self.name, item.name);
            self.equipped_weapon = None;
        }
        Some(item)
    }

    /// Equip a carried weapon by name. Replaces any previously equipped
    /// weapon; the old one stays in the inventory.
    pub fn equip(&mut self, name: &str) -> Result<String, InventoryError> {
        let weapon = self
            .inventory
            .iter()
            .find(|item| item.is_weapon() && item.name_matches(name))
            .ok_or_else(|| InventoryError::NoSuchWeapon(name.to_string()))?;
        let weapon_name = weapon.name.clone();
        info!("{} equipped {}", self.name, weapon_name);
        self.equipped_weapon = Some(weapon_name.clone());
        Ok(weapon_name)
    }

    /// The currently equipped weapon, if any.
    pub fn equipped_weapon(&self) -> Option<&Item> {
        let name = self.equipped_weapon.as_deref()?;
        self.inventory.iter().find(|item| item.name_matches(name))
    }

    /// True if the named carried item is the equipped weapon.
    pub fn is_equipped(&self, item: &Item) -> bool {
        self.equipped_weapon.as_deref().is_some_and(|equipped| item.name_matches(equipped))
    }

    /// Base attack damage: strength plus the equipped weapon's bonus.
    pub fn attack_power(&self) -> u32 {
        let weapon_bonus = self.equipped_weapon().and_then(Item::weapon_damage).unwrap_or(0);
        self.vitals.strength.saturating_add(weapon_bonus)
    }

    /// Drink a carried potion. Consumes it exactly once on success; on
    /// failure the inventory is untouched.
    pub fn use_potion(&mut self, name: &str) -> Result<PotionUse, InventoryError> {
        let item = self.find_item(name).ok_or_else(|| InventoryError::NotCarried(name.to_string()))?;
        let Some((effect, potency)) = item.potion_effect() else {
            return Err(InventoryError::NotUsable(item.name.clone()));
        };

        match effect {
            PotionEffect::Health => self.vitals.heal(potency),
            PotionEffect::Strength => self.vitals.strength = self.vitals.strength.saturating_add(potency),
        }

        let consumed = self.remove_item(name).expect("potion was found above");
        info!("{} drank {} ({} +{})", self.name, consumed.name, effect, potency);
        Ok(PotionUse {
            name: consumed.name,
            effect,
            potency,
        })
    }

    /// Add experience and check the level threshold once. The check is not
    /// looped: a single large grant advances at most one level.
    pub fn gain_experience(&mut self, amount: u32) -> Option<LevelUp> {
        self.experience = self.experience.saturating_add(amount);
        if self.experience >= XP_PER_LEVEL.saturating_mul(self.level) {
            Some(self.level_up())
        } else {
            None
        }
    }

    fn level_up(&mut self) -> LevelUp {
        self.level += 1;
        self.vitals.raise_max_and_refill(20);
        self.vitals.strength += 5;
        info!(
            "{} reached level {} (max health {}, strength {})",
            self.name,
            self.level,
            self.vitals.max_health(),
            self.vitals.strength
        );
        LevelUp {
            level: self.level,
            max_health: self.vitals.max_health(),
            strength: self.vitals.strength,
        }
    }
}
