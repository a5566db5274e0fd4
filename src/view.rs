//! View module.
//!
//! Rather than printing from every handler, handlers push structured
//! [`ViewItem`]s describing what happened and the view renders them at the
//! end of the turn. This keeps state transitions (combat, inventory moves)
//! testable without capturing stdout.

use colored::Colorize;
use textwrap::{fill, termwidth};

use crate::style::GameStyle;

/// A living enemy as listed in a room description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnemyLine {
    pub name: String,
    pub health: u32,
    pub max_health: u32,
}

/// One exit as listed in a room description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExitLine {
    pub direction: String,
    pub destination: String,
}

/// One carried item as listed by the `inventory` command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryLine {
    pub summary: String,
    pub equipped: bool,
}

/// Snapshot of player stats for the `stats` command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerStats {
    pub name: String,
    pub health: u32,
    pub max_health: u32,
    pub strength: u32,
    pub level: u32,
    pub experience: u32,
    pub gold: u32,
    pub weapon: Option<String>,
}

/// Everything the game can say to the player in one turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewItem {
    RoomHeading(String),
    RoomDescription(String),
    RoomItems(Vec<String>),
    RoomEnemies(Vec<EnemyLine>),
    RoomExits(Vec<ExitLine>),
    Inventory(Vec<InventoryLine>),
    Stats(PlayerStats),
    Help,
    ActionSuccess(String),
    Error(String),
    EngineMessage(String),
    PlayerAttack {
        target: String,
        weapon: Option<String>,
        damage: u32,
    },
    EnemyAttack {
        attacker: String,
        damage: u32,
    },
    EnemyDefeated(String),
    GoldFound(u32),
    ExperienceGained(u32),
    LevelUp {
        level: u32,
        max_health: u32,
        strength: u32,
    },
    LootDropped {
        enemy: String,
        item: String,
    },
    CombatStatus {
        player_health: u32,
        player_max: u32,
        enemy: String,
        enemy_health: u32,
        enemy_max: u32,
    },
    PlayerDefeated,
    Farewell,
}

/// Ordered buffer of [`ViewItem`]s for the current turn.
#[derive(Debug, Clone, Default)]
pub struct View {
    pub items: Vec<ViewItem>,
}

impl View {
    /// Create a new empty view.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, item: ViewItem) {
        self.items.push(item);
    }

    /// Render everything pushed this turn, in order, then clear the buffer.
    pub fn flush(&mut self) {
        let width = termwidth();
        for item in self.items.drain(..) {
            render(&item, width);
        }
    }
}

fn render(item: &ViewItem, width: usize) {
    match item {
        ViewItem::RoomHeading(name) => println!("\n{}", name.room_titlebar_style()),
        ViewItem::RoomDescription(text) => println!("{}", fill(text, width).description_style()),
        ViewItem::RoomItems(items) => {
            println!("\n{}", "Items in this room:".subheading_style());
            for summary in items {
                println!("- {}", summary.item_style());
            }
        },
        ViewItem::RoomEnemies(enemies) => {
            println!("\n{}", "Enemies in this room:".subheading_style());
            for line in enemies {
                println!("- {}: {}/{} HP", line.name.enemy_style(), line.health, line.max_health);
            }
        },
        ViewItem::RoomExits(exits) => {
            println!("\n{}", "Exits:".subheading_style());
            for line in exits {
                println!("- {}: {}", line.direction.exit_style(), line.destination.room_style());
            }
        },
        ViewItem::Inventory(lines) => {
            if lines.is_empty() {
                println!("Your inventory is empty.");
            } else {
                println!("\n{}", "Inventory:".subheading_style());
                for line in lines {
                    if line.equipped {
                        println!("- {} {}", line.summary.item_style(), "(equipped)".dimmed());
                    } else {
                        println!("- {}", line.summary.item_style());
                    }
                }
            }
        },
        ViewItem::Stats(stats) => {
            println!(
                "\n{} - Health: {}/{}, Strength: {}, Level: {}, XP: {}, Gold: {}",
                stats.name.bold(),
                stats.health,
                stats.max_health,
                stats.strength,
                stats.level,
                stats.experience,
                stats.gold
            );
            if let Some(weapon) = &stats.weapon {
                println!("Equipped weapon: {}", weapon.item_style());
            }
        },
        ViewItem::Help => render_help(),
        ViewItem::ActionSuccess(msg) | ViewItem::EngineMessage(msg) => println!("{msg}"),
        ViewItem::Error(msg) => println!("{}", msg.error_style()),
        ViewItem::PlayerAttack { target, weapon, damage } => {
            let wielding = weapon.as_deref().unwrap_or("fists");
            println!("You attack the {} with your {}.", target.enemy_style(), wielding.item_style());
            println!("You deal {} damage to the {}.", damage.to_string().damage_style(), target.enemy_style());
        },
        ViewItem::EnemyAttack { attacker, damage } => {
            println!(
                "The {} attacks you and deals {} damage!",
                attacker.enemy_style(),
                damage.to_string().damage_style()
            );
        },
        ViewItem::EnemyDefeated(name) => {
            println!("You have defeated the {}!", name.enemy_style());
        },
        ViewItem::GoldFound(amount) => println!("You found {} gold.", amount.to_string().reward_style()),
        ViewItem::ExperienceGained(amount) => {
            println!("Gained {} experience points!", amount.to_string().reward_style());
        },
        ViewItem::LevelUp {
            level,
            max_health,
            strength,
        } => {
            println!("\n{}", "*** LEVEL UP! ***".reward_style().bold());
            println!("You are now level {level}!");
            println!("Max Health increased to {max_health}");
            println!("Strength increased to {strength}");
        },
        ViewItem::LootDropped { enemy, item } => {
            println!("The {} dropped: {}", enemy.enemy_style(), item.item_style());
        },
        ViewItem::CombatStatus {
            player_health,
            player_max,
            enemy,
            enemy_health,
            enemy_max,
        } => {
            println!("Your health: {player_health}/{player_max}");
            println!("{}'s health: {enemy_health}/{enemy_max}", enemy.enemy_style());
        },
        ViewItem::PlayerDefeated => {
            println!("\n{}", "You have been defeated! Game over.".error_style().bold());
        },
        ViewItem::Farewell => println!("Thanks for playing!"),
    }
}

fn render_help() {
    println!("\n{}", "Available Commands:".subheading_style());
    println!("  look - Look around the room");
    println!("  go [direction] - Move in a direction (north, south, east, west)");
    println!("  take [item] - Pick up an item");
    println!("  inventory - Check your inventory");
    println!("  equip [weapon] - Equip a weapon from your inventory");
    println!("  use [item] - Use an item from your inventory");
    println!("  attack [enemy] - Attack an enemy");
    println!("  stats - Display your character stats");
    println!("  help - Display this help message");
    println!("  quit - Exit the game");
}
