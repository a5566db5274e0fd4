//! `repl::look` module
//!
//! Handlers for commands that observe state without mutating it: looking
//! around, checking inventory, and reviewing character stats.

use anyhow::Result;
use log::info;

use crate::view::{InventoryLine, PlayerStats, View, ViewItem};
use crate::world::CavernWorld;

/// Shows a description of the current room.
///
/// # Errors
/// Returns an error if the player's current room cannot be resolved.
pub fn look_handler(world: &CavernWorld, view: &mut View) -> Result<()> {
    let room = world.current_room_ref()?;
    room.show(world, view);
    info!("{} looked around {}", world.player.name, room.name);
    Ok(())
}

/// Shows the list of carried items, tagging the equipped weapon.
pub fn inv_handler(world: &CavernWorld, view: &mut View) {
    info!("{} checked inventory", world.player.name);
    view.push(ViewItem::Inventory(
        world
            .player
            .inventory
            .iter()
            .map(|item| InventoryLine {
                summary: item.summary(),
                equipped: world.player.is_equipped(item),
            })
            .collect(),
    ));
}

/// Shows the character sheet.
pub fn stats_handler(world: &CavernWorld, view: &mut View) {
    let player = &world.player;
    view.push(ViewItem::Stats(PlayerStats {
        name: player.name.clone(),
        health: player.vitals.health(),
        max_health: player.vitals.max_health(),
        strength: player.vitals.strength,
        level: player.level,
        experience: player.experience,
        gold: player.gold,
        weapon: player.equipped_weapon().map(crate::item::Item::summary),
    }));
}
