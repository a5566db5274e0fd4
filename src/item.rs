//! Item types and related helpers.
//!
//! Items are the objects players pick up, carry, equip, and use. The kind of
//! an item is a tagged variant rather than a trait object, so combat and
//! potion logic can match on it directly.

use std::fmt::Display;

/// What an [`Item`] does beyond sitting in a pack.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ItemKind {
    /// Plain item with no mechanical effect (loot, curios).
    Trinket,
    /// Can be equipped; adds `damage` to the wielder's attacks.
    Weapon { damage: u32 },
    /// Single-use consumable.
    Potion { effect: PotionEffect, potency: u32 },
}

/// What a potion does when drunk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PotionEffect {
    /// Restores `potency` health, clamped at max health.
    Health,
    /// Permanently raises strength by `potency`.
    Strength,
}

impl Display for PotionEffect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PotionEffect::Health => write!(f, "Health"),
            PotionEffect::Strength => write!(f, "Strength"),
        }
    }
}

/// Anything that can occupy a room or an inventory slot.
///
/// Items are immutable after creation; they change hands by moving between
/// the owning `Vec`s, never by copying.
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub name: String,
    pub description: String,
    pub weight: f32,
    pub value: u32,
    pub kind: ItemKind,
}

impl Item {
    /// Create a plain item.
    pub fn trinket(name: &str, description: &str, weight: f32, value: u32) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            weight,
            value,
            kind: ItemKind::Trinket,
        }
    }

    /// Create a weapon with the given damage bonus.
    pub fn weapon(name: &str, description: &str, damage: u32, weight: f32, value: u32) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            weight,
            value,
            kind: ItemKind::Weapon { damage },
        }
    }

    /// Create a single-use potion.
    pub fn potion(name: &str, description: &str, effect: PotionEffect, potency: u32, weight: f32, value: u32) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            weight,
            value,
            kind: ItemKind::Potion { effect, potency },
        }
    }

    /// True if this item can be equipped.
    pub fn is_weapon(&self) -> bool {
        matches!(self.kind, ItemKind::Weapon { .. })
    }

    /// Damage bonus when wielded, or `None` for non-weapons.
    pub fn weapon_damage(&self) -> Option<u32> {
        match self.kind {
            ItemKind::Weapon { damage } => Some(damage),
            _ => None,
        }
    }

    /// Effect and potency if this is a potion.
    pub fn potion_effect(&self) -> Option<(PotionEffect, u32)> {
        match self.kind {
            ItemKind::Potion { effect, potency } => Some((effect, potency)),
            _ => None,
        }
    }

    /// Case-insensitive exact name comparison against player input.
    pub fn name_matches(&self, pattern: &str) -> bool {
        self.name.to_lowercase() == pattern.to_lowercase()
    }

    /// One-line summary used in room and inventory listings.
    pub fn summary(&self) -> String {
        match self.kind {
            ItemKind::Trinket => format!("{} ({} kg, {} gold)", self.name, self.weight, self.value),
            ItemKind::Weapon { damage } => {
                format!("{} - Damage: {} ({} kg, {} gold)", self.name, damage, self.weight, self.value)
            },
            ItemKind::Potion { effect, potency } => {
                format!("{} - {} +{} ({} kg, {} gold)", self.name, effect, potency, self.weight, self.value)
            },
        }
    }
}
