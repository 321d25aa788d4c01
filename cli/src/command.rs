use core::str::FromStr;
use defuse_core::Coord2;
use thiserror::Error;

/// A single player input.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Reveal(Coord2),
    Mark(Coord2),
    ToggleView,
    Restart,
    Quit,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("empty command")]
    Empty,
    #[error("expected coordinates as `x,y` or `x y`, got `{0}`")]
    BadCoords(String),
    #[error("unknown command `{0}`")]
    Unknown(String),
}

fn parse_coords(input: &str) -> Result<Coord2, CommandError> {
    let bad = || CommandError::BadCoords(input.trim().to_string());
    let mut parts = input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|part| !part.is_empty());

    let x = parts.next().ok_or_else(bad)?.parse().map_err(|_| bad())?;
    let y = parts.next().ok_or_else(bad)?.parse().map_err(|_| bad())?;
    if parts.next().is_some() {
        return Err(bad());
    }
    Ok((x, y))
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let input = input.trim();
        let Some(first) = input.chars().next() else {
            return Err(CommandError::Empty);
        };

        match first {
            '0'..='9' => parse_coords(input).map(Command::Reveal),
            'm' | 'M' => parse_coords(&input[1..]).map(Command::Mark),
            _ => match input {
                "s" | "show" => Ok(Command::ToggleView),
                "r" | "restart" => Ok(Command::Restart),
                "q" | "quit" => Ok(Command::Quit),
                _ => Err(CommandError::Unknown(input.to_string())),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_reveals_in_both_spellings() {
        assert_eq!("3,4".parse(), Ok(Command::Reveal((3, 4))));
        assert_eq!(" 0 12 ".parse(), Ok(Command::Reveal((0, 12))));
    }

    #[test]
    fn parses_marks() {
        assert_eq!("m2,2".parse(), Ok(Command::Mark((2, 2))));
        assert_eq!("m 9 1".parse(), Ok(Command::Mark((9, 1))));
    }

    #[test]
    fn parses_keywords() {
        assert_eq!("q".parse(), Ok(Command::Quit));
        assert_eq!("restart".parse(), Ok(Command::Restart));
        assert_eq!("s".parse(), Ok(Command::ToggleView));
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!("".parse::<Command>(), Err(CommandError::Empty));
        assert_eq!(
            "1,2,3".parse::<Command>(),
            Err(CommandError::BadCoords("1,2,3".to_string()))
        );
        assert_eq!(
            "m".parse::<Command>(),
            Err(CommandError::BadCoords(String::new()))
        );
        assert_eq!(
            "300,1".parse::<Command>(),
            Err(CommandError::BadCoords("300,1".to_string()))
        );
        assert!(matches!(
            "hello".parse::<Command>(),
            Err(CommandError::Unknown(_))
        ));
    }
}
