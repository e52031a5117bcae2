//! Keyboard handling for the browser
//!
//! Normal mode moves the cursor and changes directory; command mode edits
//! the `:` line and runs it on Enter.

use std::path::{Path, PathBuf};

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::{
    App, Mode,
    command::{CdTarget, Command, CommandLine, expand_home, parse_command},
};

/// What the main loop should do after a key.
#[derive(Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    /// Open the pager on this file
    View(PathBuf),
    Quit,
}

impl App {
    /// Main key handler - dispatches on the current mode
    pub fn handle_key(&mut self, key: KeyEvent) -> Flow {
        if key.kind != KeyEventKind::Press {
            return Flow::Continue;
        }

        // Clear the previous message on any key press
        self.status = None;

        match self.mode {
            Mode::Normal => self.handle_normal_mode(key),
            Mode::Command { .. } => self.handle_command_mode(key),
        }
    }

    fn handle_normal_mode(&mut self, key: KeyEvent) -> Flow {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('c') => Flow::Quit,
                _ => Flow::Continue,
            };
        }

        match key.code {
            KeyCode::Char('q') => return Flow::Quit,
            KeyCode::Char('h') | KeyCode::Left => self.change_directory(Path::new("..")),
            KeyCode::Char('j') | KeyCode::Down => self.pane.move_down(),
            KeyCode::Char('k') | KeyCode::Up => self.pane.move_up(),
            KeyCode::Char('l') | KeyCode::Right => {
                if let Some(entry) = self.pane.selected_entry().filter(|e| e.is_dir).cloned() {
                    self.change_directory(&entry.path);
                }
            }
            KeyCode::Enter => match self.pane.selected_entry().cloned() {
                Some(entry) if entry.is_dir => self.change_directory(&entry.path),
                Some(entry) => return Flow::View(entry.path),
                None => {}
            },
            KeyCode::Char(':') => {
                self.mode = Mode::Command {
                    input: CommandLine::default(),
                };
            }
            _ => {}
        }
        Flow::Continue
    }

    fn handle_command_mode(&mut self, key: KeyEvent) -> Flow {
        let Mode::Command { input } = &mut self.mode else {
            return Flow::Continue;
        };

        match key.code {
            KeyCode::Esc => self.mode = Mode::Normal,
            KeyCode::Enter => {
                let line = input.as_str().to_owned();
                self.mode = Mode::Normal;
                return self.execute_command(&line);
            }
            KeyCode::Backspace => input.pop(),
            // Ctrl/Alt chords arrive as plain letters with modifiers set
            KeyCode::Char(c)
                if !c.is_control()
                    && !key
                        .modifiers
                        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                input.push(c);
            }
            _ => {}
        }
        Flow::Continue
    }

    /// Run a completed `:` command line
    pub fn execute_command(&mut self, line: &str) -> Flow {
        let command = match parse_command(line) {
            Ok(Some(command)) => command,
            Ok(None) => return Flow::Continue,
            Err(e) => {
                self.report(e);
                return Flow::Continue;
            }
        };

        match command {
            Command::Quit => return Flow::Quit,
            Command::Write => self.inform("write not supported"),
            Command::ChangeDirectory(target) => {
                let home = std::env::var_os("HOME").map(PathBuf::from);
                let path = match target {
                    CdTarget::Home => home.ok_or("cd: HOME is not set"),
                    CdTarget::Previous => {
                        self.previous_path.clone().ok_or("cd: no previous directory")
                    }
                    CdTarget::Path(arg) => Ok(expand_home(&arg, home.as_deref())),
                };
                match path {
                    Ok(path) => self.change_directory(&path),
                    Err(msg) => self.inform(msg),
                }
            }
        }
        Flow::Continue
    }
}
