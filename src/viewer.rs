//! File pager
//!
//! [`Pager::open`] stats and classifies a file, then [`Pager::run`] takes
//! over the terminal until the user quits. Binary files get a one-screen
//! summary; text files get a scrollable view.

use std::{
    collections::TryReserveError,
    fs::{self, File},
    io::{self, Read},
    path::{Path, PathBuf},
};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Constraint, Layout},
    style::Style,
    text::Line,
    widgets::Paragraph,
};

use crate::{
    error::AppError,
    terminal::terminal_size,
    theme::THEME,
    util::{
        BINARY_SAMPLE_LEN, MAX_LINE_LEN, PAGER_CHROME_ROWS, TAB_WIDTH, format_bytes,
        truncate_at_boundary,
    },
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FileKind {
    Text,
    Binary,
}

/// Classify a sample: binary if any byte is NUL or is neither printable
/// ASCII nor ASCII whitespace.
pub fn classify(sample: &[u8]) -> FileKind {
    // C-locale isprint/isspace: vertical tab and form feed count as whitespace
    let is_text_byte = |b: u8| {
        b.is_ascii_graphic() || matches!(b, b' ' | b'\t' | b'\n' | b'\r' | 0x0b | 0x0c)
    };

    if sample.iter().all(|&b| is_text_byte(b)) {
        FileKind::Text
    } else {
        FileKind::Binary
    }
}

/// A file opened for viewing.
pub struct Pager {
    pub path: PathBuf,
    pub size: u64,
    view: PagerView,
}

enum PagerView {
    Binary,
    Text(TextView),
}

impl Pager {
    pub fn open(path: &Path) -> Result<Self, AppError> {
        let access_error = |source| AppError::FileAccess {
            path: path.to_path_buf(),
            source,
        };

        let metadata = fs::metadata(path).map_err(access_error)?;
        // FIFOs and devices would block the read below with raw mode on
        if !metadata.is_file() {
            return Err(access_error(io::Error::new(
                io::ErrorKind::InvalidInput,
                "not a regular file",
            )));
        }
        let size = metadata.len();

        let mut sample = Vec::with_capacity(BINARY_SAMPLE_LEN);
        File::open(path)
            .and_then(|f| f.take(BINARY_SAMPLE_LEN as u64).read_to_end(&mut sample))
            .map_err(access_error)?;

        let kind = classify(&sample);
        log::info!("viewing {} ({:?}, {} bytes)", path.display(), kind, size);

        let view = match kind {
            FileKind::Binary => PagerView::Binary,
            FileKind::Text => {
                let lines = load_lines(path, size)?;
                let term = terminal_size();
                PagerView::Text(TextView::new(
                    lines,
                    term.rows.saturating_sub(PAGER_CHROME_ROWS) as usize,
                    term.cols as usize,
                ))
            }
        };

        Ok(Self {
            path: path.to_path_buf(),
            size,
            view,
        })
    }

    pub fn kind(&self) -> FileKind {
        match self.view {
            PagerView::Binary => FileKind::Binary,
            PagerView::Text(_) => FileKind::Text,
        }
    }

    #[cfg(test)]
    pub fn text(&self) -> Option<&TextView> {
        match &self.view {
            PagerView::Text(view) => Some(view),
            PagerView::Binary => None,
        }
    }

    /// Run the pager until it is dismissed.
    pub fn run(mut self, terminal: &mut DefaultTerminal) -> io::Result<()> {
        terminal.clear()?;
        loop {
            terminal.draw(|frame| self.render(frame))?;

            let Event::Key(key) = event::read()? else {
                continue;
            };
            if key.kind != KeyEventKind::Press {
                continue;
            }

            let keep_open = match &mut self.view {
                // Any key dismisses the binary summary
                PagerView::Binary => false,
                PagerView::Text(view) => view.handle_key(key),
            };
            if !keep_open {
                log::debug!("closed {:?} pager for {}", self.kind(), self.path.display());
                return terminal.clear();
            }
        }
    }

    pub fn render(&mut self, frame: &mut Frame) {
        match &mut self.view {
            PagerView::Binary => render_binary(frame, &self.path, self.size),
            PagerView::Text(view) => render_text(frame, &self.path, view),
        }
    }
}

// ============================================================================
// Text View
// ============================================================================

/// Scroll state for a text file: stored lines, top line and viewport.
pub struct TextView {
    lines: Vec<String>,
    top: usize,
    height: usize,
    width: usize,
}

impl TextView {
    pub fn new(lines: Vec<String>, height: usize, width: usize) -> Self {
        Self {
            lines,
            top: 0,
            height,
            width,
        }
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn top(&self) -> usize {
        self.top
    }

    pub fn height(&self) -> usize {
        self.height
    }

    fn max_top(&self) -> usize {
        self.lines.len().saturating_sub(self.height)
    }

    /// Update the cached viewport after a resize.
    pub fn set_viewport(&mut self, height: usize, width: usize) {
        self.height = height;
        self.width = width;
        self.top = self.top.min(self.max_top());
    }

    pub fn scroll_down(&mut self, n: usize) {
        self.top = (self.top + n).min(self.max_top());
    }

    pub fn scroll_up(&mut self, n: usize) {
        self.top = self.top.saturating_sub(n);
    }

    /// Handle a key; returns false when the pager should close.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        let page = self.height();
        let half = page / 2;

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('n') => self.scroll_down(1),
                KeyCode::Char('p') => self.scroll_up(1),
                KeyCode::Char('c') => return false,
                _ => {}
            }
            return true;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return false,
            KeyCode::Char('j') | KeyCode::Down => self.scroll_down(1),
            KeyCode::Char('k') | KeyCode::Up => self.scroll_up(1),
            KeyCode::Char('d') => self.scroll_down(half),
            KeyCode::Char('u') => self.scroll_up(half),
            KeyCode::Char('f') | KeyCode::Char(' ') | KeyCode::PageDown => self.scroll_down(page),
            KeyCode::Char('b') | KeyCode::PageUp => self.scroll_up(page),
            KeyCode::Char('g') | KeyCode::Home => self.top = 0,
            KeyCode::Char('v') | KeyCode::Char('G') | KeyCode::End => self.top = self.max_top(),
            _ => {}
        }
        true
    }

    /// Lines in the viewport, each cut to the viewport width.
    pub fn visible_lines(&self) -> Vec<String> {
        let end = (self.top + self.height).min(self.lines.len());
        self.lines[self.top..end]
            .iter()
            .map(|line| {
                line.replace('\t', &" ".repeat(TAB_WIDTH))
                    .chars()
                    .take(self.width)
                    .collect()
            })
            .collect()
    }

    /// "[first-last/total]" for the position line
    pub fn position_info(&self) -> String {
        let total = self.line_count();
        let shown = self.height.min(total - self.top());
        format!("[{}-{}/{}]", self.top() + 1, self.top() + shown, total)
    }
}

// ============================================================================
// Loading
// ============================================================================

/// Newline count plus one for the (possibly empty) last line
fn line_count(bytes: &[u8]) -> usize {
    bytes.iter().filter(|&&b| b == b'\n').count() + 1
}

/// Read `size` bytes of a text file into stored lines.
///
/// Every buffer that grows with the file is reserved fallibly, so an
/// oversized file aborts the pager instead of the process. Whatever was
/// built before a failure is dropped on return.
fn load_lines(path: &Path, size: u64) -> Result<Vec<String>, AppError> {
    let alloc_error = |source| AppError::Allocation {
        path: path.to_path_buf(),
        bytes: size,
        source,
    };

    let mut bytes = Vec::new();
    bytes
        .try_reserve_exact(usize::try_from(size).unwrap_or(usize::MAX))
        .map_err(alloc_error)?;
    File::open(path)
        .and_then(|f| f.take(size).read_to_end(&mut bytes))
        .map_err(|source| AppError::FileAccess {
            path: path.to_path_buf(),
            source,
        })?;

    split_lines(&bytes).map_err(alloc_error)
}

fn split_lines(bytes: &[u8]) -> Result<Vec<String>, TryReserveError> {
    let mut lines = Vec::new();
    lines.try_reserve_exact(line_count(bytes))?;

    for raw in bytes.split(|&b| b == b'\n') {
        let raw = raw.strip_suffix(b"\r").unwrap_or(raw);
        // Decode only what can survive truncation, plus room for one
        // multi-byte char straddling the cut
        let decoded = String::from_utf8_lossy(&raw[..raw.len().min(MAX_LINE_LEN + 3)]);
        let text = truncate_at_boundary(&decoded, MAX_LINE_LEN);

        let mut line = String::new();
        line.try_reserve_exact(text.len())?;
        line.push_str(text);
        lines.push(line);
    }
    Ok(lines)
}

// ============================================================================
// Rendering
// ============================================================================

fn render_binary(frame: &mut Frame, path: &Path, size: u64) {
    let text = vec![
        Line::raw(format!(
            "binary file: {} | size: {} bytes ({})",
            path.display(),
            size,
            format_bytes(size)
        )),
        Line::raw(""),
        Line::styled("press any key to continue", Style::default().fg(THEME.hint_fg)),
    ];
    let para = Paragraph::new(text).style(Style::default().fg(THEME.file_fg).bg(THEME.background));
    frame.render_widget(para, frame.area());
}

fn render_text(frame: &mut Frame, path: &Path, view: &mut TextView) {
    let layout = Layout::vertical([
        Constraint::Length(1), // Title
        Constraint::Length(1), // Spacer
        Constraint::Min(0),    // Content
        Constraint::Length(1), // Position
    ])
    .split(frame.area());

    let content_area = layout[2];
    view.set_viewport(content_area.height as usize, content_area.width as usize);

    let title = Paragraph::new(format!("---- {} (press q to quit) ----", path.display()))
        .style(Style::default().fg(THEME.title_fg).bg(THEME.background));
    frame.render_widget(title, layout[0]);

    let lines: Vec<Line> = view.visible_lines().into_iter().map(Line::raw).collect();
    let content = Paragraph::new(lines)
        .style(Style::default().fg(THEME.file_fg).bg(THEME.background));
    frame.render_widget(content, content_area);

    let position = Paragraph::new(view.position_info())
        .style(Style::default().fg(THEME.footer_fg).bg(THEME.footer_bg));
    frame.render_widget(position, layout[3]);
}
