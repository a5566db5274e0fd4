//! World data for the fixed five-room cave.
//!
//! Built once at startup and never restructured afterward; only item and
//! enemy lists change during play. The topology is deliberately asymmetric:
//! the entrance links north into the hall, and once the player leaves the
//! entrance the only way back is the hall's south exit.

use std::collections::HashMap;

use log::info;

use crate::enemy::Enemy;
use crate::item::{Item, PotionEffect};
use crate::player::Player;
use crate::room::Room;
use crate::world::CavernWorld;

pub const START_ROOM: &str = "cave-entrance";

/// Build the cave, its contents, and a fresh player carrying the starting
/// kit (rusty sword equipped, one health potion).
pub fn build_world(player_name: &str) -> CavernWorld {
    let player = starting_player(player_name);
    let rooms = build_rooms();
    info!("world built: {} rooms, player '{}'", rooms.len(), player.name);
    CavernWorld::new(player, rooms, START_ROOM)
}

/// Same world, but with a seeded RNG for reproducible sessions.
pub fn build_world_seeded(player_name: &str, seed: u64) -> CavernWorld {
    let player = starting_player(player_name);
    let rooms = build_rooms();
    CavernWorld::with_seed(player, rooms, START_ROOM, seed)
}

fn starting_player(name: &str) -> Player {
    let mut player = Player::new(name);
    player.add_to_inventory(Item::weapon("Rusty Sword", "An old sword with some rust spots.", 5, 3.0, 10));
    player.add_to_inventory(health_potion());
    player.equip("Rusty Sword").expect("starting sword is in inventory");
    player
}

fn health_potion() -> Item {
    Item::potion(
        "Health Potion",
        "A red potion that restores health.",
        PotionEffect::Health,
        30,
        0.5,
        15,
    )
}

fn build_rooms() -> HashMap<String, Room> {
    let mut entrance = Room::new(
        START_ROOM,
        "Cave Entrance",
        "A dimly lit entrance to a mysterious cave. Water drips from the ceiling.",
    );
    let mut main_hall = Room::new(
        "main-hall",
        "Main Hall",
        "A large cavern with ancient pillars. Footprints can be seen in the dust.",
    );
    let mut treasure_room = Room::new(
        "treasure-chamber",
        "Treasure Chamber",
        "A small room filled with chests and valuable-looking items.",
    );
    let mut monster_den = Room::new(
        "monster-den",
        "Monster Den",
        "A foul-smelling chamber where creatures lurk in the shadows.",
    );
    let mut exit_tunnel = Room::new(
        "exit-tunnel",
        "Exit Tunnel",
        "A narrow passage that seems to lead outside.",
    );

    entrance.add_exit("north", "main-hall");

    main_hall.add_exit("south", START_ROOM);
    main_hall.add_exit("east", "treasure-chamber");
    main_hall.add_exit("west", "monster-den");
    main_hall.add_exit("north", "exit-tunnel");

    treasure_room.add_exit("west", "main-hall");
    monster_den.add_exit("east", "main-hall");
    exit_tunnel.add_exit("south", "main-hall");

    entrance.add_item(Item::weapon("Steel Dagger", "A small but sharp dagger.", 3, 1.0, 8));
    treasure_room.add_item(Item::potion(
        "Strength Elixir",
        "A glowing blue potion that increases strength.",
        PotionEffect::Strength,
        3,
        0.5,
        25,
    ));
    treasure_room.add_item(health_potion());

    monster_den.add_enemy(Enemy::new(
        "Goblin",
        "A small, green creature with sharp teeth.",
        20,
        5,
        vec![Item::trinket("Goblin Ear", "A pointy ear from a goblin.", 0.1, 2)],
        15,
        5,
    ));
    monster_den.add_enemy(Enemy::new(
        "Cave Troll",
        "A large, hulking creature with gray skin.",
        50,
        8,
        vec![Item::weapon("Troll Club", "A heavy wooden club.", 7, 5.0, 15)],
        30,
        15,
    ));

    [entrance, main_hall, treasure_room, monster_den, exit_tunnel]
        .into_iter()
        .map(|room| (room.id.clone(), room))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cave_has_five_rooms_and_starts_at_entrance() {
        let world = build_world_seeded("Tess", 0);
        assert_eq!(world.rooms.len(), 5);
        assert_eq!(world.current_room, START_ROOM);
    }

    #[test]
    fn entrance_is_one_way() {
        let world = build_world_seeded("Tess", 0);
        let entrance = &world.rooms[START_ROOM];
        assert_eq!(entrance.exits.len(), 1);
        assert_eq!(entrance.exits.get("north").map(String::as_str), Some("main-hall"));
    }

    #[test]
    fn hall_links_all_four_directions() {
        let world = build_world_seeded("Tess", 0);
        let hall = &world.rooms["main-hall"];
        assert_eq!(hall.exits.len(), 4);
        assert_eq!(hall.exits.get("west").map(String::as_str), Some("monster-den"));
    }

    #[test]
    fn player_starts_with_sword_equipped() {
        let world = build_world_seeded("Tess", 0);
        assert_eq!(world.player.inventory.len(), 2);
        assert_eq!(world.player.equipped_weapon().unwrap().name, "Rusty Sword");
        assert_eq!(world.player.attack_power(), 15);
    }

    #[test]
    fn den_holds_two_living_enemies() {
        let world = build_world_seeded("Tess", 0);
        let den = &world.rooms["monster-den"];
        assert_eq!(den.living_enemies().count(), 2);
    }
}
