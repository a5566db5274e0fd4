#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]

pub const CAVERN_VERSION: &str = env!("CARGO_PKG_VERSION");

// Core modules
pub mod combat;
pub mod command;
pub mod creature;
pub mod enemy;
pub mod item;
pub mod player;
pub mod repl;
pub mod room;
pub mod style;
pub mod view;
pub mod world;
pub mod worlddef;

// Re-exports for convenience
pub use combat::ExchangeOutcome;
pub use command::{Command, parse_command};
pub use creature::Vitals;
pub use enemy::Enemy;
pub use item::{Item, ItemKind, PotionEffect};
pub use player::Player;
pub use repl::run_repl;
pub use room::Room;
pub use view::{View, ViewItem};
pub use world::CavernWorld;
pub use worlddef::build_world;
