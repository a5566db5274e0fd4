//! `repl::inventory` module
//!
//! Contains repl loop handlers for commands that affect player inventory:
//! picking things up, equipping weapons, and drinking potions.

use anyhow::Result;
use log::info;

use crate::item::PotionEffect;
use crate::view::{View, ViewItem};
use crate::world::CavernWorld;

/// Removes an item from the current room and adds it to the inventory.
///
/// # Errors
/// Returns an error if the player's current room cannot be resolved.
pub fn take_handler(world: &mut CavernWorld, view: &mut View, thing: &str) -> Result<()> {
    let room = world.current_room_mut()?;
    if let Some(item) = room.remove_item(thing) {
        let name = item.name.clone();
        world.player.add_to_inventory(item);
        view.push(ViewItem::ActionSuccess(format!("Added {name} to your inventory.")));
    } else {
        view.push(ViewItem::Error(format!("There is no {thing} here.")));
        info!("{} tried to take '{thing}': not present", world.player.name);
    }
    Ok(())
}

/// Equips a carried weapon by name.
pub fn equip_handler(world: &mut CavernWorld, view: &mut View, weapon: &str) {
    match world.player.equip(weapon) {
        Ok(name) => view.push(ViewItem::ActionSuccess(format!("Equipped {name}."))),
        Err(err) => {
            view.push(ViewItem::Error(err.to_string()));
            info!("{} failed to equip '{weapon}': {err}", world.player.name);
        },
    }
}

/// Uses (drinks) a carried potion by name.
pub fn use_handler(world: &mut CavernWorld, view: &mut View, thing: &str) {
    match world.player.use_potion(thing) {
        Ok(used) => {
            let message = match used.effect {
                PotionEffect::Health => {
                    format!("You used {} and restored {} health.", used.name, used.potency)
                },
                PotionEffect::Strength => {
                    format!("You used {} and gained {} strength.", used.name, used.potency)
                },
            };
            view.push(ViewItem::ActionSuccess(message));
        },
        Err(err) => {
            view.push(ViewItem::Error(err.to_string()));
            info!("{} failed to use '{thing}': {err}", world.player.name);
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::worlddef::{START_ROOM, build_world_seeded};

    #[test]
    fn take_moves_item_from_room_to_pack() {
        let mut world = build_world_seeded("Tess", 0);
        let mut view = View::new();

        take_handler(&mut world, &mut view, "steel dagger").unwrap();
        assert!(world.rooms[START_ROOM].items.is_empty());
        assert!(world.player.find_item("steel dagger").is_some());
        assert!(matches!(&view.items[0], ViewItem::ActionSuccess(msg) if msg == "Added Steel Dagger to your inventory."));
    }

    #[test]
    fn take_missing_item_is_a_noop() {
        let mut world = build_world_seeded("Tess", 0);
        let mut view = View::new();

        take_handler(&mut world, &mut view, "chalice").unwrap();
        assert_eq!(world.player.inventory.len(), 2);
        assert!(matches!(&view.items[0], ViewItem::Error(msg) if msg == "There is no chalice here."));
    }

    #[test]
    fn equip_reports_missing_weapon() {
        let mut world = build_world_seeded("Tess", 0);
        let mut view = View::new();

        equip_handler(&mut world, &mut view, "troll club");
        assert!(matches!(&view.items[0], ViewItem::Error(msg) if msg == "You don't have a weapon called troll club."));
        assert_eq!(world.player.equipped_weapon().unwrap().name, "Rusty Sword");
    }

    #[test]
    fn use_reports_health_restored() {
        let mut world = build_world_seeded("Tess", 0);
        world.player.vitals.damage(50);
        let mut view = View::new();

        use_handler(&mut world, &mut view, "health potion");
        assert_eq!(world.player.vitals.health(), 80);
        assert!(matches!(&view.items[0], ViewItem::ActionSuccess(msg) if msg == "You used Health Potion and restored 30 health."));
    }

    #[test]
    fn use_rejects_non_potion_without_consuming() {
        let mut world = build_world_seeded("Tess", 0);
        let mut view = View::new();

        use_handler(&mut world, &mut view, "rusty sword");
        assert_eq!(world.player.inventory.len(), 2);
        assert!(matches!(&view.items[0], ViewItem::Error(msg) if msg == "You can't use Rusty Sword like that."));
    }
}
