//! TUI rendering with ratatui
//!
//! Visualizations for the Bulls & Cows interface.

use super::app::{App, InputMode, MessageStyle, PlayMode};
use crate::output::formatters::{entropy_bar, feedback_pegs};
use crate::solver::{CODE_SPACE_SIZE, entropy::entropy};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60), // Left panel
            Constraint::Percentage(40), // Right panel
        ])
        .split(chunks[1]);

    render_main_panel(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let header = Paragraph::new(format!("🐂 BULLS & COWS 🐄 - {}", app.mode.label()))
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

fn render_main_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(35), // Current round
            Constraint::Percentage(25), // Candidates
            Constraint::Percentage(40), // History
        ])
        .split(area);

    render_current_round(f, app, chunks[0]);
    render_candidates(f, app, chunks[1]);
    render_history(f, app, chunks[2]);
}

fn render_current_round(f: &mut Frame, app: &App, area: Rect) {
    let bits = app.session.entropy();
    let mut content = Vec::new();

    match (app.mode, app.current_guess) {
        (PlayMode::Computer, Some(guess)) => {
            content.push(Line::from(vec![
                Span::raw("My guess:  "),
                Span::styled(
                    guess.to_string(),
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ),
            ]));
        }
        (PlayMode::Player, _) => {
            let secret = app
                .revealed
                .map_or_else(|| "????".to_string(), |code| code.to_string());
            content.push(Line::from(vec![
                Span::raw("Secret:    "),
                Span::styled(
                    secret,
                    Style::default()
                        .fg(Color::Magenta)
                        .add_modifier(Modifier::BOLD),
                ),
            ]));
        }
        (PlayMode::Computer, None) => content.push(Line::from("No guess available")),
    }

    content.push(Line::from(format!(
        "Entropy:   [{}] {bits:.3} bits",
        entropy_bar(bits, 18)
    )));
    content.push(Line::from(format!(
        "Remaining: {} of {CODE_SPACE_SIZE}",
        app.session.candidate_count()
    )));

    let paragraph = Paragraph::new(content)
        .block(
            Block::default()
                .title(" Current Round ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, area);
}

fn render_candidates(f: &mut Frame, app: &App, area: Rect) {
    let candidates = app.session.candidates();

    let content = if candidates.is_empty() {
        vec![Line::from(Span::styled(
            "No number matches the feedback!",
            Style::default().fg(Color::Red),
        ))]
    } else if candidates.len() <= 12 {
        let listed: Vec<String> = candidates.iter().map(ToString::to_string).collect();
        listed
            .chunks(4)
            .map(|row| Line::from(format!("  {}", row.join("  "))))
            .collect()
    } else {
        vec![
            Line::from(format!("{} candidates remaining", candidates.len())),
            Line::from(format!(
                "Information needed: {:.2} bits",
                entropy(candidates.len())
            )),
        ]
    };

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .title(" Candidates ")
            .borders(Borders::ALL)
            .style(Style::default().fg(Color::Green)),
    );

    f.render_widget(paragraph, area);
}

fn render_history(f: &mut Frame, app: &App, area: Rect) {
    let history = app.session.history();

    let history_items: Vec<ListItem> = history
        .iter()
        .enumerate()
        .rev()
        .take(8)
        .map(|(i, round)| {
            ListItem::new(format!(
                "{:2}: {} {} {} [{:.2} bits] → {}",
                i + 1,
                round.guess,
                feedback_pegs(round.feedback),
                round.feedback,
                round.entropy,
                round.candidate_count
            ))
        })
        .collect();

    let list =
        List::new(history_items).block(Block::default().title(" History ").borders(Borders::ALL));

    f.render_widget(list, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(30), // Search space gauge
            Constraint::Percentage(70), // Messages
        ])
        .split(area);

    render_search_progress(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn render_search_progress(f: &mut Frame, app: &App, area: Rect) {
    let total_bits = entropy(CODE_SPACE_SIZE);
    let bits_gained = (total_bits - app.session.entropy()).max(0.0);
    let progress_pct = ((bits_gained / total_bits * 100.0).min(100.0)) as u16;

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Information Gained ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(progress_pct)
        .label(format!("{bits_gained:.1}/{total_bits:.1} bits"));

    f.render_widget(gauge, area);
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
    let (title, color) = match (&app.input_mode, app.mode) {
        (InputMode::GameOver, _) => (
            " Game over | Press 'n' for new game, TAB to switch sides, 'q' to quit ",
            Color::Green,
        ),
        (InputMode::Entry, PlayMode::Computer) => (
            " Enter Bulls and Cows (e.g. 21 or 2 1) ",
            Color::Yellow,
        ),
        (InputMode::Entry, PlayMode::Player) => (
            " Enter Your Guess (4 distinct digits) ",
            Color::Cyan,
        ),
    };

    let input = Paragraph::new(app.input_buffer.as_str())
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
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(20),
            Constraint::Percentage(30),
        ])
        .split(area);

    let mode = Paragraph::new(format!("Mode: {}", app.mode.label())).alignment(Alignment::Center);
    f.render_widget(mode, chunks[0]);

    let average = if app.stats.games_won > 0 {
        app.stats.total_rounds as f64 / app.stats.games_won as f64
    } else {
        0.0
    };
    let stats = Paragraph::new(format!(
        "Games: {} | Avg: {average:.1}",
        app.stats.total_games
    ))
    .alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let rounds = Paragraph::new(format!("Round: {}", app.session.rounds() + 1))
        .alignment(Alignment::Center);
    f.render_widget(rounds, chunks[2]);

    let help_text = match app.mode {
        PlayMode::Computer => "q: Quit | n: New | TAB: Switch",
        PlayMode::Player => "q: Quit | n: New | r: Reveal | TAB: Switch",
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}
