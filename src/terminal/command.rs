//! Interpretation of one line of terminal input.

/// A user intent read from one input line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Submit the line as a guess. The text is passed to the core verbatim;
    /// validation happens there.
    Guess(String),
    Reset,
    History,
    Help,
    Quit,
}

impl Command {
    /// Classify a line. Anything that is not a keyword is a guess, including
    /// an empty line.
    pub fn parse(line: &str) -> Self {
        let line = line.trim_end_matches(['\r', '\n']);
        match line.trim().to_ascii_lowercase().as_str() {
            "new" | "reset" => Self::Reset,
            "history" => Self::History,
            "help" | "?" => Self::Help,
            "quit" | "exit" => Self::Quit,
            _ => Self::Guess(line.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keywords_are_case_insensitive() {
        assert_eq!(Command::parse("NEW\n"), Command::Reset);
        assert_eq!(Command::parse(" Reset "), Command::Reset);
        assert_eq!(Command::parse("History"), Command::History);
        assert_eq!(Command::parse("?"), Command::Help);
        assert_eq!(Command::parse("exit\r\n"), Command::Quit);
    }

    #[test]
    fn anything_else_is_a_guess() {
        assert_eq!(Command::parse("42\n"), Command::Guess("42".to_string()));
        assert_eq!(Command::parse("abc"), Command::Guess("abc".to_string()));
    }

    #[test]
    fn bare_enter_submits_empty_guess() {
        assert_eq!(Command::parse("\n"), Command::Guess(String::new()));
    }
}
