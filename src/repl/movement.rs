//! `repl::movement` module
//!
//! Contains repl loop handlers for commands that change player location.

use anyhow::Result;
use log::info;

use crate::view::{View, ViewItem};
use crate::world::CavernWorld;

/// Move the player through a named exit of the current room.
///
/// Directions match exactly (already lowercased by the REPL). A missing
/// exit leaves the player where they are.
///
/// # Errors
/// Returns an error if the player's current room cannot be resolved.
pub fn move_to_handler(world: &mut CavernWorld, view: &mut View, direction: &str) -> Result<()> {
    let destination = world.current_room_ref()?.exits.get(direction).cloned();

    if let Some(room_id) = destination {
        world.current_room = room_id;
        let room_name = world.current_room_ref()?.name.clone();
        info!("{} moved {direction} to {room_name}", world.player.name);
        view.push(ViewItem::ActionSuccess(format!("You go {direction}.")));
    } else {
        view.push(ViewItem::Error(format!("There is no exit in the {direction} direction.")));
        info!("{} tried to go {direction}: no exit", world.player.name);
    }
    Ok(())
}
