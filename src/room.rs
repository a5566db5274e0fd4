//! Room definitions.
//!
//! Any location the player can occupy is a room. Rooms hold the items lying
//! around, the enemies lurking there (dead ones included), and one-way exits
//! keyed by direction. Nothing validates the topology; one-way links and
//! dead ends are allowed.

use std::collections::BTreeMap;

use crate::enemy::Enemy;
use crate::item::Item;
use crate::view::{EnemyLine, ExitLine, View, ViewItem};
use crate::world::CavernWorld;

/// A visitable location in the cave.
#[derive(Debug)]
pub struct Room {
    pub id: String,
    pub name: String,
    pub description: String,
    pub items: Vec<Item>,
    pub enemies: Vec<Enemy>,
    /// direction -> destination room id. Exits need not be symmetric.
    pub exits: BTreeMap<String, String>,
}

impl Room {
    pub fn new(id: &str, name: &str, description: &str) -> Room {
        Room {
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            items: Vec::new(),
            enemies: Vec::new(),
            exits: BTreeMap::new(),
        }
    }

    /// Register a one-way exit.
    pub fn add_exit(&mut self, direction: &str, room_id: &str) {
        self.exits.insert(direction.to_string(), room_id.to_string());
    }

    pub fn add_item(&mut self, item: Item) {
        self.items.push(item);
    }

    pub fn add_enemy(&mut self, enemy: Enemy) {
        self.enemies.push(enemy);
    }

    /// Enemies still standing. Dead ones stay in `enemies` but are filtered
    /// out of descriptions and combat targeting.
    pub fn living_enemies(&self) -> impl Iterator<Item = &Enemy> {
        self.enemies.iter().filter(|enemy| enemy.is_alive())
    }

    /// Find a living enemy by case-insensitive exact name.
    pub fn find_living_enemy_mut(&mut self, name: &str) -> Option<&mut Enemy> {
        self.enemies
            .iter_mut()
            .filter(|enemy| enemy.is_alive())
            .find(|enemy| enemy.name_matches(name))
    }

    /// Remove the first item matching the given name, transferring ownership
    /// to the caller. Returns `None` if nothing matches.
    pub fn remove_item(&mut self, name: &str) -> Option<Item> {
        let idx = self.items.iter().position(|item| item.name_matches(name))?;
        Some(self.items.remove(idx))
    }

    /// Push a full description of this room to the view: name, prose, items,
    /// living enemies, and exits.
    pub fn show(&self, world: &CavernWorld, view: &mut View) {
        view.push(ViewItem::RoomHeading(self.name.clone()));
        view.push(ViewItem::RoomDescription(self.description.clone()));

        if !self.items.is_empty() {
            view.push(ViewItem::RoomItems(self.items.iter().map(Item::summary).collect()));
        }

        let living: Vec<EnemyLine> = self
            .living_enemies()
            .map(|enemy| EnemyLine {
                name: enemy.name.clone(),
                health: enemy.vitals.health(),
                max_health: enemy.vitals.max_health(),
            })
            .collect();
        if !living.is_empty() {
            view.push(ViewItem::RoomEnemies(living));
        }

        if !self.exits.is_empty() {
            view.push(ViewItem::RoomExits(
                self.exits
                    .iter()
                    .map(|(direction, room_id)| ExitLine {
                        direction: direction.clone(),
                        destination: world.room_name(room_id).unwrap_or(room_id).to_string(),
                    })
                    .collect(),
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn den_with_goblin() -> Room {
        let mut den = Room::new("den", "Monster Den", "A foul-smelling chamber.");
        den.add_enemy(Enemy::new("Goblin", "Small and green.", 20, 5, Vec::new(), 15, 5));
        den
    }

    #[test]
    fn dead_enemies_are_filtered_not_deleted() {
        let mut den = den_with_goblin();
        den.enemies[0].vitals.damage(20);

        assert_eq!(den.enemies.len(), 1);
        assert_eq!(den.living_enemies().count(), 0);
        assert!(den.find_living_enemy_mut("goblin").is_none());
    }

    #[test]
    fn living_enemy_lookup_is_caseless_and_exact() {
        let mut den = den_with_goblin();
        assert!(den.find_living_enemy_mut("GOBLIN").is_some());
        assert!(den.find_living_enemy_mut("gob").is_none());
    }

    #[test]
    fn remove_item_takes_first_match_only() {
        let mut room = Room::new("r", "Room", "");
        room.add_item(Item::trinket("Coin", "A coin.", 0.1, 1));
        room.add_item(Item::trinket("Coin", "Another coin.", 0.1, 1));

        assert!(room.remove_item("coin").is_some());
        assert_eq!(room.items.len(), 1);
        assert!(room.remove_item("chalice").is_none());
    }

    #[test]
    fn exits_are_one_way() {
        let mut entrance = Room::new("entrance", "Cave Entrance", "");
        entrance.add_exit("north", "hall");
        assert_eq!(entrance.exits.get("north").map(String::as_str), Some("hall"));
        assert!(entrance.exits.get("south").is_none());
    }

    #[test]
    fn show_skips_empty_sections() {
        use crate::player::Player;
        use std::collections::HashMap;

        let mut rooms = HashMap::new();
        rooms.insert("r".to_string(), Room::new("r", "Bare Room", "Nothing here."));
        let world = CavernWorld::with_seed(Player::new("Tess"), rooms, "r", 0);

        let mut view = View::new();
        world.current_room_ref().unwrap().show(&world, &mut view);
        assert_eq!(view.items.len(), 2); // heading + description only
    }
}
