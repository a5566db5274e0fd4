//! Command module
//!
//! Describes possible commands used during gameplay.
use variantly::Variantly;

/// Commands that can be executed by the player.
#[derive(Debug, Variantly)]
pub enum Command {
    Attack(String),
    Equip(String),
    Go(String),
    Help,
    Inventory,
    Look,
    Quit,
    Stats,
    Take(String),
    Unknown,
    // the derived accessor would otherwise be named `use`
    #[variantly(rename = "use_item")]
    Use(String),
}

/// Parses an input line (already trimmed and lowercased) and returns the
/// corresponding `Command` if recognized.
///
/// Entity-name arguments may span several words ("take steel dagger").
pub fn parse_command(input: &str) -> Command {
    let words: Vec<&str> = input.split_whitespace().collect();
    match words.as_slice() {
        ["look"] => Command::Look,
        ["go", direction @ ..] if !direction.is_empty() => Command::Go(direction.join(" ")),
        ["take", thing @ ..] if !thing.is_empty() => Command::Take(thing.join(" ")),
        ["inventory"] => Command::Inventory,
        ["equip", weapon @ ..] if !weapon.is_empty() => Command::Equip(weapon.join(" ")),
        ["use", thing @ ..] if !thing.is_empty() => Command::Use(thing.join(" ")),
        ["attack", enemy @ ..] if !enemy.is_empty() => Command::Attack(enemy.join(" ")),
        ["stats"] => Command::Stats,
        ["help"] => Command::Help,
        ["quit"] => Command::Quit,
        _ => Command::Unknown,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_verbs_parse() {
        assert!(matches!(parse_command("look"), Command::Look));
        assert!(matches!(parse_command("inventory"), Command::Inventory));
        assert!(matches!(parse_command("stats"), Command::Stats));
        assert!(matches!(parse_command("help"), Command::Help));
        assert!(matches!(parse_command("quit"), Command::Quit));
    }

    #[test]
    fn arguments_capture_multiple_words() {
        assert!(matches!(parse_command("take steel dagger"), Command::Take(name) if name == "steel dagger"));
        assert!(matches!(parse_command("attack cave troll"), Command::Attack(name) if name == "cave troll"));
        assert!(matches!(parse_command("go north"), Command::Go(dir) if dir == "north"));
    }

    #[test]
    fn verbs_without_required_argument_are_unknown() {
        assert!(matches!(parse_command("go"), Command::Unknown));
        assert!(matches!(parse_command("take"), Command::Unknown));
        assert!(matches!(parse_command("attack"), Command::Unknown));
    }

    #[test]
    fn variant_accessors_extract_their_argument() {
        assert_eq!(parse_command("use health potion").use_item(), Some("health potion".to_string()));
        assert_eq!(parse_command("equip rusty sword").equip(), Some("rusty sword".to_string()));
        assert_eq!(parse_command("look").use_item(), None);
    }

    #[test]
    fn gibberish_is_unknown() {
        assert!(matches!(parse_command("dance"), Command::Unknown));
        assert!(matches!(parse_command(""), Command::Unknown));
        assert!(matches!(parse_command("lookout below"), Command::Unknown));
    }
}
