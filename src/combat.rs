//! Combat resolution.
//!
//! An attack command resolves one full exchange: the player strikes, and if
//! the target survives it strikes back. The resolver only mutates state and
//! pushes [`ViewItem`]s; rendering happens when the view is flushed, so the
//! whole exchange can be tested without capturing output.

use anyhow::Result;
use log::info;

use crate::view::{View, ViewItem};
use crate::world::CavernWorld;

/// How an attack command ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExchangeOutcome {
    /// No living enemy by that name here; nothing changed.
    NoTarget,
    /// The target died; rewards granted, no counterattack.
    EnemyDefeated,
    /// Both sides struck and both still stand.
    Exchanged,
    /// The counterattack dropped the player to zero; the session is over.
    PlayerDefeated,
}

/// Resolve a single `attack <name>` exchange against the current room.
///
/// # Errors
/// Returns an error only if the player's current room cannot be resolved.
pub fn resolve_exchange(world: &mut CavernWorld, view: &mut View, target: &str) -> Result<ExchangeOutcome> {
    let has_target = world
        .current_room_ref()?
        .living_enemies()
        .any(|enemy| enemy.name_matches(target));
    if !has_target {
        view.push(ViewItem::Error(format!("There is no living enemy called '{target}' here.")));
        info!("{} attacked '{target}' but found no living match", world.player.name);
        return Ok(ExchangeOutcome::NoTarget);
    }

    // player turn
    let weapon = world.player.equipped_weapon().map(|item| item.name.clone());
    let base = world.player.attack_power();
    let damage = world.damage_roll(base);

    let (enemy_name, died, counter_strength, gold_value, experience_value, loot, enemy_health, enemy_max) = {
        let room = world.current_room_mut()?;
        let Some(enemy) = room.find_living_enemy_mut(target) else {
            return Ok(ExchangeOutcome::NoTarget);
        };
        enemy.vitals.damage(damage);
        let died = !enemy.is_alive();
        let loot = if died { std::mem::take(&mut enemy.loot) } else { Vec::new() };
        (
            enemy.name.clone(),
            died,
            enemy.vitals.strength,
            enemy.gold_value,
            enemy.experience_value,
            loot,
            enemy.vitals.health(),
            enemy.vitals.max_health(),
        )
    };

    view.push(ViewItem::PlayerAttack {
        target: enemy_name.clone(),
        weapon,
        damage,
    });
    info!("{} hit {enemy_name} for {damage} (base {base})", world.player.name);

    if died {
        view.push(ViewItem::EnemyDefeated(enemy_name.clone()));
        info!("{} defeated {enemy_name}", world.player.name);

        world.player.gold = world.player.gold.saturating_add(gold_value);
        view.push(ViewItem::GoldFound(gold_value));

        view.push(ViewItem::ExperienceGained(experience_value));
        if let Some(level_up) = world.player.gain_experience(experience_value) {
            view.push(ViewItem::LevelUp {
                level: level_up.level,
                max_health: level_up.max_health,
                strength: level_up.strength,
            });
        }

        let room = world.current_room_mut()?;
        for item in loot {
            view.push(ViewItem::LootDropped {
                enemy: enemy_name.clone(),
                item: item.name.clone(),
            });
            room.add_item(item);
        }
        return Ok(ExchangeOutcome::EnemyDefeated);
    }

    // enemy turn
    let counter = world.damage_roll(counter_strength);
    world.player.vitals.damage(counter);
    view.push(ViewItem::EnemyAttack {
        attacker: enemy_name.clone(),
        damage: counter,
    });
    info!("{enemy_name} hit {} for {counter}", world.player.name);

    if !world.player.vitals.is_alive() {
        view.push(ViewItem::PlayerDefeated);
        info!("{} was defeated by {enemy_name}", world.player.name);
        return Ok(ExchangeOutcome::PlayerDefeated);
    }

    view.push(ViewItem::CombatStatus {
        player_health: world.player.vitals.health(),
        player_max: world.player.vitals.max_health(),
        enemy: enemy_name,
        enemy_health,
        enemy_max,
    });
    Ok(ExchangeOutcome::Exchanged)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enemy::Enemy;
    use crate::item::Item;
    use crate::player::Player;
    use crate::room::Room;
    use std::collections::HashMap;

    fn arena(enemy: Enemy, seed: u64) -> CavernWorld {
        let mut room = Room::new("arena", "Arena", "A test pit.");
        room.add_enemy(enemy);
        let mut rooms = HashMap::new();
        rooms.insert("arena".to_string(), room);
        CavernWorld::with_seed(Player::new("Tess"), rooms, "arena", seed)
    }

    fn tough_dummy() -> Enemy {
        Enemy::new("Dummy", "Takes hits.", 1000, 0, Vec::new(), 0, 0)
    }

    #[test]
    fn missing_target_changes_nothing() {
        let mut world = arena(tough_dummy(), 1);
        let mut view = View::new();

        let outcome = resolve_exchange(&mut world, &mut view, "goblin").unwrap();
        assert_eq!(outcome, ExchangeOutcome::NoTarget);
        assert_eq!(world.player.vitals.health(), 100);
        assert_eq!(world.rooms["arena"].enemies[0].vitals.health(), 1000);
        assert!(
            matches!(&view.items[0], ViewItem::Error(msg) if msg == "There is no living enemy called 'goblin' here.")
        );
    }

    #[test]
    fn missing_target_does_not_advance_the_rng() {
        let mut world_a = arena(tough_dummy(), 21);
        let mut world_b = arena(tough_dummy(), 21);
        let mut view = View::new();

        // a whiffed attack must not burn a damage roll
        resolve_exchange(&mut world_a, &mut view, "wraith").unwrap();
        resolve_exchange(&mut world_a, &mut view, "dummy").unwrap();
        resolve_exchange(&mut world_b, &mut view, "dummy").unwrap();

        assert_eq!(
            world_a.rooms["arena"].enemies[0].vitals.health(),
            world_b.rooms["arena"].enemies[0].vitals.health()
        );
    }

    #[test]
    fn unarmed_damage_lands_in_spread() {
        // strength 10, no weapon: each hit should take 8..=12 off the dummy
        for seed in 0..32 {
            let mut world = arena(tough_dummy(), seed);
            let mut view = View::new();
            resolve_exchange(&mut world, &mut view, "dummy").unwrap();
            let dealt = 1000 - world.rooms["arena"].enemies[0].vitals.health();
            assert!((8..=12).contains(&dealt), "dealt {dealt}");
        }
    }

    #[test]
    fn kill_grants_rewards_once_and_drops_loot() {
        let frail = Enemy::new(
            "Goblin",
            "Nearly done.",
            1,
            5,
            vec![Item::trinket("Goblin Ear", "A pointy ear.", 0.1, 2)],
            15,
            5,
        );
        let mut world = arena(frail, 7);
        let mut view = View::new();

        let outcome = resolve_exchange(&mut world, &mut view, "goblin").unwrap();
        assert_eq!(outcome, ExchangeOutcome::EnemyDefeated);
        assert_eq!(world.player.gold, 55);
        assert_eq!(world.player.experience, 15);
        // no counterattack from a dead enemy
        assert_eq!(world.player.vitals.health(), 100);
        // loot released into the room, corpse still listed
        assert_eq!(world.rooms["arena"].items.len(), 1);
        assert_eq!(world.rooms["arena"].enemies.len(), 1);
        assert!(world.rooms["arena"].enemies[0].loot.is_empty());

        // the corpse is no longer a target and rewards are not repeated
        let again = resolve_exchange(&mut world, &mut view, "goblin").unwrap();
        assert_eq!(again, ExchangeOutcome::NoTarget);
        assert_eq!(world.player.gold, 55);
        assert_eq!(world.player.experience, 15);
    }

    #[test]
    fn survivor_counterattacks() {
        let bruiser = Enemy::new("Troll", "Hits back.", 1000, 8, Vec::new(), 0, 0);
        let mut world = arena(bruiser, 3);
        let mut view = View::new();

        let outcome = resolve_exchange(&mut world, &mut view, "troll").unwrap();
        assert_eq!(outcome, ExchangeOutcome::Exchanged);
        let taken = 100 - world.player.vitals.health();
        // strength 8 scaled by [0.8, 1.2] and truncated
        assert!((6..=9).contains(&taken), "took {taken}");
        assert!(view.items.iter().any(|item| matches!(item, ViewItem::CombatStatus { .. })));
    }

    #[test]
    fn lethal_counterattack_ends_the_session() {
        let bruiser = Enemy::new("Troll", "Hits hard.", 1000, 200, Vec::new(), 0, 0);
        let mut world = arena(bruiser, 11);
        let mut view = View::new();

        let outcome = resolve_exchange(&mut world, &mut view, "troll").unwrap();
        assert_eq!(outcome, ExchangeOutcome::PlayerDefeated);
        assert!(!world.player.vitals.is_alive());
        assert_eq!(world.player.vitals.health(), 0);
        assert!(view.items.iter().any(|item| matches!(item, ViewItem::PlayerDefeated)));
    }

    #[test]
    fn kill_experience_can_level_up() {
        let frail = Enemy::new("Goblin", "Nearly done.", 1, 5, Vec::new(), 120, 0);
        let mut world = arena(frail, 5);
        world.player.vitals.damage(40);
        let mut view = View::new();

        resolve_exchange(&mut world, &mut view, "goblin").unwrap();
        assert_eq!(world.player.level, 2);
        assert_eq!(world.player.vitals.health(), 120);
        assert!(view.items.iter().any(|item| matches!(item, ViewItem::LevelUp { level: 2, .. })));
    }
}
