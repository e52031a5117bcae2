//! Terminal mode and geometry
//!
//! The interactive session owns a [`TerminalSession`]; dropping it puts the
//! terminal back into cooked mode on the main screen.

use std::io;

use ratatui::DefaultTerminal;

/// Geometry used when the terminal cannot be queried
pub const FALLBACK_SIZE: TermSize = TermSize { rows: 24, cols: 80 };

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TermSize {
    pub rows: u16,
    pub cols: u16,
}

/// Current terminal size, or [`FALLBACK_SIZE`] if unavailable.
pub fn terminal_size() -> TermSize {
    size_or_fallback(crossterm::terminal::size())
}

fn size_or_fallback(queried: io::Result<(u16, u16)>) -> TermSize {
    match queried {
        Ok((cols, rows)) => TermSize {
            rows: if rows > 0 { rows } else { FALLBACK_SIZE.rows },
            cols: if cols > 0 { cols } else { FALLBACK_SIZE.cols },
        },
        Err(e) => {
            log::debug!("terminal size unavailable, using fallback: {}", e);
            FALLBACK_SIZE
        }
    }
}

/// Raw mode plus alternate screen, released on drop.
///
/// ratatui's init also installs a panic hook that restores the terminal
/// before the panic report is printed.
pub struct TerminalSession {
    terminal: DefaultTerminal,
}

impl TerminalSession {
    pub fn enter() -> io::Result<Self> {
        let terminal = ratatui::try_init()?;
        log::debug!("entered raw mode");
        Ok(Self { terminal })
    }

    pub fn terminal(&mut self) -> &mut DefaultTerminal {
        &mut self.terminal
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        if let Err(e) = ratatui::try_restore() {
            log::error!("failed to restore terminal: {}", e);
        } else {
            log::debug!("restored terminal mode");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_passes_through() {
        let size = size_or_fallback(Ok((120, 40)));
        assert_eq!(size, TermSize { rows: 40, cols: 120 });
    }

    #[test]
    fn test_size_falls_back_on_error() {
        let size = size_or_fallback(Err(io::Error::other("not a tty")));
        assert_eq!(size, FALLBACK_SIZE);
    }

    #[test]
    fn test_size_falls_back_on_zero_dimension() {
        assert_eq!(size_or_fallback(Ok((0, 0))), FALLBACK_SIZE);
        assert_eq!(
            size_or_fallback(Ok((100, 0))),
            TermSize { rows: 24, cols: 100 }
        );
    }
}
