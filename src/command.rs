//! Command line parsing
//!
//! Turns the text typed after `:` into a [`Command`], and holds the bounded
//! buffer the text is typed into.

use std::path::{Path, PathBuf};

use crate::{error::AppError, util::COMMAND_CAPACITY};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Quit,
    /// Any `w...` other than `wq`; writing is not supported
    Write,
    ChangeDirectory(CdTarget),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CdTarget {
    /// `cd`, `cd ~`
    Home,
    /// `cd -`
    Previous,
    Path(String),
}

/// Parse a completed command line. Empty input yields `Ok(None)`.
pub fn parse_command(input: &str) -> Result<Option<Command>, AppError> {
    if input.is_empty() {
        return Ok(None);
    }

    let command = match input {
        "q" | "quit" | "q!" | "wq" => Command::Quit,
        _ if input.starts_with('w') => Command::Write,
        _ => match input.strip_prefix("cd ") {
            Some(rest) => Command::ChangeDirectory(parse_cd_target(rest.trim())),
            None => return Err(AppError::UnknownCommand(input.to_owned())),
        },
    };

    Ok(Some(command))
}

fn parse_cd_target(arg: &str) -> CdTarget {
    match arg {
        "" | "~" => CdTarget::Home,
        "-" => CdTarget::Previous,
        _ => CdTarget::Path(arg.to_owned()),
    }
}

/// Expand a leading `~/` against `home`; other paths pass through.
pub fn expand_home(arg: &str, home: Option<&Path>) -> PathBuf {
    match (arg.strip_prefix("~/"), home) {
        (Some(rest), Some(home)) => home.join(rest),
        _ => PathBuf::from(arg),
    }
}

// ============================================================================
// Command Buffer
// ============================================================================

/// Text typed in command mode, capped at [`COMMAND_CAPACITY`] characters.
///
/// Editing only happens at the end, so the edit position is the length.
#[derive(Debug, Default, Clone)]
pub struct CommandLine {
    text: String,
    position: usize,
}

impl CommandLine {
    /// Append `c`; returns false when the buffer is full.
    pub fn push(&mut self, c: char) -> bool {
        if self.position >= COMMAND_CAPACITY {
            return false;
        }
        self.text.push(c);
        self.position += 1;
        true
    }

    pub fn pop(&mut self) {
        if self.text.pop().is_some() {
            self.position -= 1;
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Edit position in characters
    pub fn position(&self) -> usize {
        self.position
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(input: &str) -> Command {
        parse_command(input).unwrap().unwrap()
    }

    #[test]
    fn test_quit_commands() {
        for input in ["q", "quit", "q!", "wq"] {
            assert_eq!(parse(input), Command::Quit, "{input}");
        }
    }

    #[test]
    fn test_write_prefix() {
        assert_eq!(parse("w"), Command::Write);
        assert_eq!(parse("write"), Command::Write);
        assert_eq!(parse("w foo.txt"), Command::Write);
    }

    #[test]
    fn test_cd_targets() {
        assert_eq!(
            parse("cd .."),
            Command::ChangeDirectory(CdTarget::Path("..".to_owned()))
        );
        assert_eq!(
            parse("cd   /tmp  "),
            Command::ChangeDirectory(CdTarget::Path("/tmp".to_owned()))
        );
        assert_eq!(parse("cd ~"), Command::ChangeDirectory(CdTarget::Home));
        assert_eq!(parse("cd "), Command::ChangeDirectory(CdTarget::Home));
        assert_eq!(parse("cd -"), Command::ChangeDirectory(CdTarget::Previous));
    }

    #[test]
    fn test_unknown_commands() {
        for input in ["zz", "cd", "qq", "quit!", " q"] {
            let err = parse_command(input).unwrap_err();
            assert!(matches!(err, AppError::UnknownCommand(ref c) if c == input));
        }
    }

    #[test]
    fn test_empty_input_is_noop() {
        assert!(parse_command("").unwrap().is_none());
    }

    #[test]
    fn test_expand_home() {
        let home = Path::new("/home/user");
        assert_eq!(expand_home("~/src", Some(home)), PathBuf::from("/home/user/src"));
        assert_eq!(expand_home("~/src", None), PathBuf::from("~/src"));
        assert_eq!(expand_home("docs", Some(home)), PathBuf::from("docs"));
    }

    #[test]
    fn test_command_line_push_pop() {
        let mut line = CommandLine::default();
        for c in "cd x".chars() {
            assert!(line.push(c));
        }
        assert_eq!(line.as_str(), "cd x");
        assert_eq!(line.position(), 4);

        line.pop();
        assert_eq!(line.as_str(), "cd ");
        assert_eq!(line.position(), 3);

        let mut empty = CommandLine::default();
        empty.pop();
        assert_eq!(empty.position(), 0);
    }

    #[test]
    fn test_command_line_capacity() {
        let mut line = CommandLine::default();
        for _ in 0..COMMAND_CAPACITY {
            assert!(line.push('a'));
        }
        assert!(!line.push('b'));
        assert_eq!(line.position(), COMMAND_CAPACITY);
        assert!(!line.as_str().contains('b'));
    }
}
