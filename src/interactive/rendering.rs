//! TUI rendering with ratatui
//!
//! Board, gallows and status panels for the hangman interface.

use super::app::{App, InputMode, MessageStyle};
use crate::core::RoundState;
use crate::output::art::stage_for;
use crate::output::formatters::{spaced_mask, used_letters_line};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(12),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(40), // Gallows
            Constraint::Percentage(60), // Board
        ])
        .split(chunks[1]);

    render_gallows(f, app, main_chunks[0]);
    render_board_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let title = match &app.config.player {
        Some(player) => format!("🪢 HANGMAN - {player}"),
        None => "🪢 HANGMAN".to_string(),
    };
    let header = Paragraph::new(title)
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

fn render_gallows(f: &mut Frame, app: &App, area: Rect) {
    let color = match app.round.state() {
        RoundState::InProgress => Color::White,
        RoundState::Won => Color::Green,
        RoundState::Lost => Color::Red,
    };

    let gallows = Paragraph::new(stage_for(&app.round).trim_start_matches('\n'))
        .style(Style::default().fg(color))
        .block(
            Block::default()
                .title(" Gallows ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(gallows, area);
}

fn render_board_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Word and used letters
            Constraint::Length(3), // Attempts gauge
            Constraint::Min(3),    // Messages
        ])
        .split(area);

    render_word(f, app, chunks[0]);
    render_attempts(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_word(f: &mut Frame, app: &App, area: Rect) {
    let content = vec![
        Line::from(vec![
            Span::raw("Word: "),
            Span::styled(
                spaced_mask(&app.round.display_mask()),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(""),
        Line::from(format!(
            "Used: {}",
            used_letters_line(&app.round.used_letters())
        )),
    ];

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn render_attempts(f: &mut Frame, app: &App, area: Rect) {
    let remaining = app.round.attempts_remaining();
    let budget = app.round.config().starting_attempts;
    let percent = attempts_percent(remaining, budget);

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Attempts ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(if remaining > 1 {
            Color::Cyan
        } else {
            Color::Red
        }))
        .percent(percent)
        .label(format!("{remaining}/{budget} remaining"));

    f.render_widget(gauge, area);
}

/// Share of the budget still available, in percent
fn attempts_percent(remaining: u32, budget: u32) -> u16 {
    if budget == 0 {
        return 0;
    }
    (u64::from(remaining) * 100 / u64::from(budget)).min(100) as u16
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, content, color) = match app.input_mode {
        InputMode::RoundOver => (
            " Round over | Press 'n' for a new round or 'q' to quit ",
            "",
            Color::Green,
        ),
        InputMode::Guessing => (
            " Enter a letter or the whole word | Enter to submit ",
            app.input_buffer.as_str(),
            Color::Yellow,
        ),
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let stats_text = format!(
        "Rounds: {} | Won: {} | Win Rate: {:.0}%",
        app.stats.played,
        app.stats.won,
        app.stats.win_rate()
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[0]);

    let help_text = match app.input_mode {
        InputMode::RoundOver => "q: Quit | n: New Round",
        InputMode::Guessing => "Esc: Quit | Enter: Submit",
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[1]);
}
