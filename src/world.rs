//! Game world and session state.
//!
//! [`CavernWorld`] is the explicit session context handed to every command
//! handler: the player, the room graph, where the player stands, and the
//! random source for damage rolls. The RNG is seedable so combat outcomes
//! are reproducible under test.

use std::collections::HashMap;

use anyhow::{Result, anyhow};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::player::Player;
use crate::room::Room;

/// Damage rolls scale the base by a uniform factor in this range, then
/// truncate to an integer.
const DAMAGE_SPREAD: std::ops::RangeInclusive<f64> = 0.8..=1.2;

/// The whole game session: player, rooms, position, and randomness.
#[derive(Debug)]
pub struct CavernWorld {
    pub player: Player,
    pub rooms: HashMap<String, Room>,
    pub current_room: String,
    rng: StdRng,
}

impl CavernWorld {
    /// Create a world with an OS-seeded RNG.
    pub fn new(player: Player, rooms: HashMap<String, Room>, start_room: &str) -> CavernWorld {
        CavernWorld {
            player,
            rooms,
            current_room: start_room.to_string(),
            rng: StdRng::from_os_rng(),
        }
    }

    /// Create a world with a fixed RNG seed, for reproducible combat.
    pub fn with_seed(player: Player, rooms: HashMap<String, Room>, start_room: &str, seed: u64) -> CavernWorld {
        CavernWorld {
            player,
            rooms,
            current_room: start_room.to_string(),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// The room the player currently occupies.
    ///
    /// # Errors
    /// Returns an error if `current_room` names a room that doesn't exist,
    /// which would mean the world data is broken.
    pub fn current_room_ref(&self) -> Result<&Room> {
        self.rooms
            .get(&self.current_room)
            .ok_or_else(|| anyhow!("current room '{}' not found in world", self.current_room))
    }

    /// Mutable access to the player's current room.
    ///
    /// # Errors
    /// Same conditions as [`Self::current_room_ref`].
    pub fn current_room_mut(&mut self) -> Result<&mut Room> {
        self.rooms
            .get_mut(&self.current_room)
            .ok_or_else(|| anyhow!("current room '{}' not found in world", self.current_room))
    }

    /// Display name for a room id, if it exists.
    pub fn room_name(&self, room_id: &str) -> Option<&str> {
        self.rooms.get(room_id).map(|room| room.name.as_str())
    }

    /// Roll damage: base scaled by a uniform factor in [0.8, 1.2], truncated.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn damage_roll(&mut self, base: u32) -> u32 {
        // truncation toward zero is the intended rounding
        (f64::from(base) * self.rng.random_range(DAMAGE_SPREAD)) as u32
    }
}
