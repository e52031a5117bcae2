//! Rendering for the browser
//!
//! Header with the working directory, the entry viewport, an optional
//! status line, and the footer (item count or the live command line).

use std::ops::Range;

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::Paragraph,
};

use crate::{App, Mode, StatusKind, theme::THEME};

/// Window of `count` entries that fits `height` rows, centred on `cursor`
/// and clamped so it never runs past either end.
pub fn visible_range(count: usize, cursor: usize, height: usize) -> Range<usize> {
    if count <= height {
        return 0..count;
    }
    let end = (cursor.saturating_sub(height / 2) + height).min(count);
    end - height..end
}

impl App {
    pub fn render(&self, frame: &mut Frame) {
        let has_status = self.status.is_some();

        let layout = Layout::vertical([
            Constraint::Length(1),                     // Header
            Constraint::Length(1),                     // Spacer
            Constraint::Min(0),                        // Entries
            Constraint::Length(u16::from(has_status)), // Status line
            Constraint::Length(1),                     // Footer
        ])
        .split(frame.area());

        self.render_header(frame, layout[0]);
        self.render_entries(frame, layout[2]);
        if has_status {
            self.render_status_line(frame, layout[3]);
        }
        self.render_footer(frame, layout[4]);
    }

    fn render_header(&self, frame: &mut Frame, area: Rect) {
        let header = Paragraph::new(format!("rc - {}", self.pane.path.display()))
            .style(Style::default().fg(THEME.title_fg).bg(THEME.background));
        frame.render_widget(header, area);
    }

    fn render_entries(&self, frame: &mut Frame, area: Rect) {
        let cursor = self.pane.cursor();
        let range = visible_range(self.pane.entries.len(), cursor, area.height as usize);

        let lines: Vec<Line> = range
            .map(|i| {
                let entry = &self.pane.entries[i];
                let marker = if i == cursor { "->" } else { "  " };
                let suffix = if entry.is_dir { "/" } else { "" };
                let text = format!("{} {}{}", marker, entry.name, suffix);

                let style = if i == cursor {
                    Style::default()
                        .fg(THEME.cursor_fg)
                        .bg(THEME.cursor_bg)
                        .add_modifier(Modifier::BOLD)
                } else if entry.is_dir {
                    Style::default()
                        .fg(THEME.directory_fg)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(THEME.file_fg)
                };
                Line::styled(text, style)
            })
            .collect();

        let list = Paragraph::new(lines).style(Style::default().bg(THEME.background));
        frame.render_widget(list, area);
    }

    fn render_status_line(&self, frame: &mut Frame, area: Rect) {
        let Some(status) = &self.status else {
            return;
        };

        let (content, style) = match status.kind {
            StatusKind::Error => (
                format!("[Error] {}", status.text),
                Style::default().fg(THEME.status_error_fg).bg(THEME.status_error_bg),
            ),
            StatusKind::Info => (
                status.text.clone(),
                Style::default().fg(THEME.status_info_fg).bg(THEME.status_info_bg),
            ),
        };
        frame.render_widget(Paragraph::new(content).style(style), area);
    }

    fn render_footer(&self, frame: &mut Frame, area: Rect) {
        match &self.mode {
            Mode::Normal => {
                let footer = Paragraph::new(format!("{} items", self.pane.entries.len()))
                    .style(Style::default().fg(THEME.footer_fg).bg(THEME.footer_bg));
                frame.render_widget(footer, area);
            }
            Mode::Command { input } => {
                let line = Paragraph::new(format!(":{}", input.as_str()))
                    .style(Style::default().fg(THEME.command_fg).bg(THEME.command_bg));
                frame.render_widget(line, area);

                let x = area.x.saturating_add(1 + input.position() as u16);
                frame.set_cursor_position((x.min(area.right().saturating_sub(1)), area.y));
            }
        }
    }
}
