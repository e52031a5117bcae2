mod command;
mod error;
mod input;
mod pane;
mod render;
mod terminal;
#[cfg(test)]
mod test_support;
mod theme;
mod util;
mod viewer;

use std::{
    env,
    fs::File,
    io,
    path::{Path, PathBuf},
};

use clap::Parser;
use crossterm::event::{self, Event};
use ratatui::DefaultTerminal;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};

use command::CommandLine;
use error::AppError;
use input::Flow;
use pane::PaneState;
use terminal::TerminalSession;
use viewer::Pager;

#[derive(Parser)]
#[command(
    name = "rc",
    about = "Vim-style terminal file browser",
    disable_version_flag = true
)]
struct Args {
    /// Directory to start in (defaults to the current directory)
    path: Option<PathBuf>,

    /// Print version information and exit
    #[arg(short = 'v', long = "version")]
    version: bool,

    /// Write debug logs to this file
    #[arg(long, value_name = "FILE")]
    log_file: Option<PathBuf>,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    if args.version {
        println!("rc-{}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    if let Some(log_path) = &args.log_file {
        init_logging(log_path)?;
    }

    let start = match args.path {
        Some(path) => path,
        None => env::current_dir()?,
    };
    // Resolve the start directory before touching the terminal so a bad
    // path is reported on a normal screen
    let mut app = App::new(&start)?;
    log::info!("rc starting in {}", app.pane.path.display());

    let mut session = TerminalSession::enter()?;
    app.run(session.terminal())?;
    log::info!("rc exiting");
    Ok(())
}

fn init_logging(path: &Path) -> color_eyre::Result<()> {
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    WriteLogger::init(LevelFilter::Debug, log_config, File::create(path)?)?;
    Ok(())
}

// ============================================================================
// UI Mode
// ============================================================================

enum Mode {
    Normal,
    Command { input: CommandLine },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum StatusKind {
    Info,
    Error,
}

#[derive(Debug)]
struct StatusMessage {
    kind: StatusKind,
    text: String,
}

// ============================================================================
// App
// ============================================================================

struct App {
    pane: PaneState,
    mode: Mode,
    status: Option<StatusMessage>,
    previous_path: Option<PathBuf>, // For cd -
}

impl App {
    fn new(start: &Path) -> Result<Self, AppError> {
        Ok(Self {
            pane: PaneState::open(start)?,
            mode: Mode::Normal,
            status: None,
            previous_path: None,
        })
    }

    fn run(&mut self, terminal: &mut DefaultTerminal) -> io::Result<()> {
        terminal.clear()?;
        loop {
            terminal.draw(|frame| self.render(frame))?;

            // Resize and other events only trigger a redraw
            let Event::Key(key) = event::read()? else {
                continue;
            };

            match self.handle_key(key) {
                Flow::Continue => {}
                Flow::Quit => return Ok(()),
                Flow::View(path) => self.view_file(&path, terminal)?,
            }
        }
    }

    fn view_file(&mut self, path: &Path, terminal: &mut DefaultTerminal) -> io::Result<()> {
        match Pager::open(path) {
            Ok(pager) => pager.run(terminal),
            Err(e) => {
                self.report(e);
                Ok(())
            }
        }
    }

    /// Move to `target`, reporting failure on the status line.
    fn change_directory(&mut self, target: &Path) {
        let old_path = self.pane.path.clone();
        match self.pane.change_directory(target) {
            Ok(()) => {
                log::info!("changed directory to {}", self.pane.path.display());
                self.previous_path = Some(old_path);
            }
            Err(e) => self.report(e),
        }
    }

    fn report(&mut self, err: AppError) {
        log::warn!("{}", err);
        self.status = Some(StatusMessage {
            kind: StatusKind::Error,
            text: err.to_string(),
        });
    }

    fn inform(&mut self, text: impl Into<String>) {
        self.status = Some(StatusMessage {
            kind: StatusKind::Info,
            text: text.into(),
        });
    }
}
