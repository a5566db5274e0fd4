//! `repl::system` module
//!
//! Contains repl loop handlers for commands that are system utilities:
//! help and quitting.

use anyhow::Result;
use log::info;

use crate::repl::ReplControl;
use crate::repl::input::{InputEvent, InputManager};
use crate::style::GameStyle;
use crate::view::{View, ViewItem};
use crate::world::CavernWorld;

/// Show available commands.
pub fn help_handler(view: &mut View) {
    view.push(ViewItem::Help);
}

/// Ask for confirmation before quitting. Only an exact `y` quits; any other
/// answer resumes play.
///
/// # Errors
/// Returns an error if the confirmation prompt cannot be read.
pub fn quit_handler(world: &CavernWorld, view: &mut View, input: &mut InputManager) -> Result<ReplControl> {
    let prompt = "Are you sure you want to quit? (y/n): ".prompt_style().to_string();
    let answer = match input.read_line(&prompt)? {
        InputEvent::Line(line) => line,
        InputEvent::Eof | InputEvent::Interrupted => String::new(),
    };

    if confirms_quit(&answer) {
        info!("{} quit with {} gold at level {}", world.player.name, world.player.gold, world.player.level);
        view.push(ViewItem::Farewell);
        Ok(ReplControl::Quit)
    } else {
        info!("{} canceled quitting", world.player.name);
        Ok(ReplControl::Continue)
    }
}

/// Decide whether a quit confirmation answer actually quits.
pub(crate) fn confirms_quit(answer: &str) -> bool {
    answer.trim().to_lowercase() == "y"
}
