//! Line tokenizer for player commands.

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Go(String),
    Attack(String),
    Quit,
    MissingDirection,
    MissingTarget,
    Unknown(String),
}

/// Parses one input line. Blank lines yield `None`.
///
/// Words are split on whitespace; everything after `attack` is rejoined with single
/// spaces so multi-word enemy names can be targeted.
pub fn parse(line: &str) -> Option<Command> {
    let mut words = line.split_whitespace();
    let verb = words.next()?;

    let command = match verb {
        "quit" | "exit" => Command::Quit,
        "go" => match words.next() {
            Some(direction) => Command::Go(direction.to_string()),
            None => Command::MissingDirection,
        },
        "attack" => {
            let target = words.collect::<Vec<_>>().join(" ");
            if target.is_empty() { Command::MissingTarget } else { Command::Attack(target) }
        }
        other => Command::Unknown(other.to_string()),
    };
    Some(command)
}
