#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]
//! ** Cavern **
//! A small cave-crawl text adventure.

use std::process;

use anyhow::{Context, Result};
use cavern::repl::TERMINATION_NOTICE;
use cavern::repl::input::{InputEvent, InputManager};
use cavern::style::GameStyle;
use cavern::{build_world, run_repl};
use colored::Colorize;
use log::{info, warn};

fn main() {
    env_logger::init();
    install_interrupt_handler();

    // every ending is a clean exit: errors are reported, not propagated
    if let Err(err) = run() {
        println!("\nAn error occurred: {err}");
        println!("Game terminated unexpectedly.");
    }
}

/// Catch SIGINT on the paths the line editor doesn't own: the name prompt
/// and the plain stdin backend. Rustyline reads Ctrl-C itself in raw mode,
/// so inside the editor the REPL loop handles the interrupt instead.
fn install_interrupt_handler() {
    let installed = ctrlc::set_handler(|| {
        println!("{TERMINATION_NOTICE}");
        process::exit(0);
    });
    if let Err(err) = installed {
        warn!("could not install interrupt handler: {err}");
    }
}

fn run() -> Result<()> {
    let mut input = InputManager::new();

    let event = input
        .read_line("Enter your character's name: ")
        .context("while reading character name")?;
    let Some(name) = resolve_name(event) else {
        println!("{TERMINATION_NOTICE}");
        return Ok(());
    };
    info!("starting a new game for '{name}'");
    let mut world = build_world(&name);

    let bar = "=".repeat(60);
    println!("\n{bar}");
    println!("{:^60}", "WELCOME TO THE CAVE ADVENTURE!".bright_yellow().bold());
    println!("{bar}");
    println!(
        "You, {}, stand at the entrance of a mysterious cave.",
        world.player.name.bold().bright_blue()
    );
    println!("{}", "Rumors say there's treasure inside, but also dangerous creatures.".description_style());
    println!("Type 'help' for a list of commands.");
    println!("{bar}");

    run_repl(&mut world, &mut input)
}

/// Turn the name-prompt input into a character name. A blank line gets the
/// default name; an interrupt or EOF means the player never entered the cave.
fn resolve_name(event: InputEvent) -> Option<String> {
    match event {
        InputEvent::Line(line) => {
            let name = line.trim();
            if name.is_empty() {
                Some("Adventurer".to_string())
            } else {
                Some(name.to_string())
            }
        },
        InputEvent::Eof | InputEvent::Interrupted => None,
    }
}
