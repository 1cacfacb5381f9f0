//! TUI rendering with ratatui

use super::app::{App, LogKind, TileView};
use crate::core::Verdict;
use crate::game::Outcome;
use crate::output::formatters::outcome_message;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Banner
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(50), // Board
            Constraint::Percentage(50), // Debug log
        ])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_debug_log(f, app, main_chunks[1]);
    render_banner(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🟩 WORDLE 🟨")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

/// Style for a tile: verdict color once evaluated, outlined while typing
fn tile_style(tile: &TileView) -> Style {
    let base = Style::default().add_modifier(Modifier::BOLD);
    match tile.verdict {
        Some(Verdict::Correct) => base.fg(Color::Black).bg(Color::Green),
        Some(Verdict::Present) => base.fg(Color::Black).bg(Color::Yellow),
        Some(Verdict::Absent) => base.fg(Color::White).bg(Color::DarkGray),
        None if tile.filled => base.fg(Color::White),
        None => Style::default().fg(Color::DarkGray),
    }
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let cursor = app.session.cursor();
    let mut lines = vec![Line::from("")];

    for (r, row) in app.board.rows.iter().enumerate() {
        let mut spans = vec![Span::raw("  ")];
        for tile in row {
            let text = format!(" {} ", tile.letter.unwrap_or('·'));
            spans.push(Span::styled(text, tile_style(tile)));
            spans.push(Span::raw(" "));
        }
        if r == cursor.row && !app.session.is_over() {
            spans.push(Span::styled("◀", Style::default().fg(Color::Cyan)));
        }
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_debug_log(f: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = app
        .debug_log
        .entries()
        .map(|entry| {
            let style = match entry.kind {
                LogKind::Info => Style::default().fg(Color::White),
                LogKind::Success => Style::default().fg(Color::Green),
                LogKind::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{} - ", entry.time),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(entry.text.clone(), style),
            ]))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .title(" Debug Output ")
            .borders(Borders::ALL),
    );
    f.render_widget(list, area);
}

fn render_banner(f: &mut Frame, app: &App, area: Rect) {
    let (text, color) = match app.board.announcement {
        Some((outcome, secret)) => {
            let color = match outcome {
                Outcome::Won { .. } => Color::Green,
                Outcome::Lost => Color::Red,
            };
            (
                format!("{}  The word was {secret}.", outcome_message(outcome)),
                color,
            )
        }
        None => (
            format!(
                "Guess {} of {} | current word: {}",
                app.session.cursor().row + 1,
                app.config.max_rows(),
                app.session.current_word()
            ),
            Color::Yellow,
        ),
    };

    let banner = Paragraph::new(text)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );
    f.render_widget(banner, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}%",
        app.stats.total_games,
        app.stats.win_rate()
    );
    f.render_widget(
        Paragraph::new(stats_text).alignment(Alignment::Center),
        chunks[0],
    );

    let help = Paragraph::new("Esc: Quit | Ctrl-N: New Game | Ctrl-L: Clear Log")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[1]);
}
