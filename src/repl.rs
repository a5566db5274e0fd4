//! REPL and command handling utilities.
//!
//! The game runs in a read-eval-print loop. This module and its submodules
//! implement the command handlers that manipulate the [`CavernWorld`].

pub mod input;
pub mod inventory;
pub mod look;
pub mod movement;
pub mod system;

pub use inventory::*;
pub use look::*;
pub use movement::*;
pub use system::*;

use anyhow::{Context, Result};
use log::info;

use crate::combat::{ExchangeOutcome, resolve_exchange};
use crate::command::{Command, parse_command};
use crate::style::GameStyle;
use crate::view::{View, ViewItem};
use crate::world::CavernWorld;

use input::{InputEvent, InputManager};

/// Control flow signal used by handlers to exit the REPL.
pub enum ReplControl {
    Continue,
    Quit,
}

/// Printed whenever an interrupt or EOF ends the session, on every input
/// path: the line editor, the plain stdin backend, and the signal handler.
pub const TERMINATION_NOTICE: &str = "\nGame terminated by user.";

/// Run the main read-eval-print loop until the player quits or falls.
///
/// Each iteration renders the current room, blocks for a line of input,
/// dispatches it to the matching handler, and flushes the view.
///
/// # Errors
/// Propagates failures from handlers (a missing current room) and
/// unrecoverable input failures.
pub fn run_repl(world: &mut CavernWorld, input_manager: &mut InputManager) -> Result<()> {
    let mut view = View::new();

    loop {
        look_handler(world, &mut view)?;
        view.flush();

        let prompt = "\nWhat do you want to do? ".prompt_style().to_string();
        let event = input_manager.read_line(&prompt).context("while reading player input")?;
        let input = match event {
            InputEvent::Line(line) => line.trim().to_lowercase(),
            InputEvent::Eof | InputEvent::Interrupted => {
                view.push(ViewItem::EngineMessage(TERMINATION_NOTICE.to_string()));
                view.flush();
                info!("session ended by interrupt/EOF");
                break;
            },
        };
        if input.is_empty() {
            continue;
        }

        match parse_command(&input) {
            Command::Look => look_handler(world, &mut view)?,
            Command::Go(direction) => move_to_handler(world, &mut view, &direction)?,
            Command::Take(thing) => take_handler(world, &mut view, &thing)?,
            Command::Inventory => inv_handler(world, &mut view),
            Command::Equip(weapon) => equip_handler(world, &mut view, &weapon),
            Command::Use(thing) => use_handler(world, &mut view, &thing),
            Command::Attack(enemy) => {
                if let ExchangeOutcome::PlayerDefeated = resolve_exchange(world, &mut view, &enemy)? {
                    view.flush();
                    break;
                }
            },
            Command::Stats => stats_handler(world, &mut view),
            Command::Help => help_handler(&mut view),
            Command::Quit => {
                if let ReplControl::Quit = quit_handler(world, &mut view, &mut *input_manager)? {
                    view.flush();
                    break;
                }
            },
            Command::Unknown => {
                view.push(ViewItem::Error(
                    "I don't understand that command. Type 'help' for a list of commands.".to_string(),
                ));
            },
        }
        view.flush();
    }
    Ok(())
}
