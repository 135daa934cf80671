//! Parsing one line of player input.

/// What a line of input asks the game to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Guess(String),
    Skip,
    Reset,
    Help,
    Quit,
    Empty,
    Unknown(String),
}

/// Lines starting with `:` are commands; anything else is a guess.
/// Surrounding whitespace is dropped.
pub fn parse(line: &str) -> Command {
    let line = line.trim();
    if line.is_empty() {
        return Command::Empty;
    }

    match line.strip_prefix(':') {
        Some(cmd) => match cmd.to_ascii_lowercase().as_str() {
            "skip" | "s" => Command::Skip,
            "reset" | "r" => Command::Reset,
            "help" | "h" | "?" => Command::Help,
            "quit" | "q" => Command::Quit,
            _ => Command::Unknown(line.to_string()),
        },
        None => Command::Guess(line.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_guess_is_trimmed() {
        assert_eq!(parse("  cat \n"), Command::Guess("cat".into()));
    }

    #[test]
    fn test_parse_commands_and_aliases() {
        assert_eq!(parse(":skip"), Command::Skip);
        assert_eq!(parse(":S"), Command::Skip);
        assert_eq!(parse(":reset"), Command::Reset);
        assert_eq!(parse(":r"), Command::Reset);
        assert_eq!(parse(":?"), Command::Help);
        assert_eq!(parse(":Quit"), Command::Quit);
    }

    #[test]
    fn test_parse_blank_line() {
        assert_eq!(parse("   "), Command::Empty);
    }

    #[test]
    fn test_parse_unknown_command() {
        assert_eq!(parse(":dance"), Command::Unknown(":dance".into()));
    }
}
