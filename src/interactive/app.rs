//! TUI application state and logic

use crate::core::{Code, Feedback};
use crate::solver::{InferenceSession, SessionError, StrategyType};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::{Rng, SeedableRng};
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Which side the player takes
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum PlayMode {
    /// You think of a number, the computer guesses it
    Computer,
    /// The computer picks a number, you guess it
    Player,
}

impl PlayMode {
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Computer => Self::Player,
            Self::Player => Self::Computer,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Computer => "Computer guesses",
            Self::Player => "You guess",
        }
    }
}

/// Application state
pub struct App {
    pub mode: PlayMode,
    pub session: InferenceSession,
    pub current_guess: Option<Code>,
    pub revealed: Option<Code>,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    pub input_mode: InputMode,
    strategy: StrategyType,
    rng: StdRng,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    Entry,
    GameOver,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    pub total_rounds: usize,
}

impl App {
    #[must_use]
    pub fn new(mode: PlayMode, strategy: StrategyType, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let session = Self::start_session(mode, &strategy, &mut rng);

        let mut app = Self {
            mode,
            session,
            current_guess: None,
            revealed: None,
            input_buffer: String::new(),
            messages: Vec::new(),
            stats: Statistics::default(),
            should_quit: false,
            input_mode: InputMode::Entry,
            strategy,
            rng,
        };
        app.greet();
        app.compute_suggestion();
        app
    }

    fn start_session(mode: PlayMode, strategy: &StrategyType, rng: &mut StdRng) -> InferenceSession {
        match mode {
            // Every game draws its own seed, so random play differs between games
            PlayMode::Computer => {
                InferenceSession::computer_guessing_with(strategy.reseeded(rng.random()))
            }
            PlayMode::Player => InferenceSession::player_guessing(rng),
        }
    }

    fn greet(&mut self) {
        match self.mode {
            PlayMode::Computer => {
                self.add_message(
                    "Think of 4 distinct digits. I'll guess them!",
                    MessageStyle::Info,
                );
                self.add_message(
                    "Enter bulls and cows, e.g. '21' or '2 1'",
                    MessageStyle::Info,
                );
            }
            PlayMode::Player => {
                self.add_message(
                    "I've picked 4 distinct digits. Guess them!",
                    MessageStyle::Info,
                );
                self.add_message("Type a guess like '0597', 'r' reveals", MessageStyle::Info);
            }
        }
    }

    /// Ask the engine for its next guess (computer mode only)
    pub fn compute_suggestion(&mut self) {
        if self.mode != PlayMode::Computer {
            self.current_guess = None;
            return;
        }

        match self.session.propose_guess() {
            Ok(guess) => self.current_guess = Some(guess),
            Err(e) => {
                self.current_guess = None;
                self.add_message(&format!("{e}. Press 'n' to restart."), MessageStyle::Error);
                self.input_mode = InputMode::GameOver;
            }
        }
    }

    /// Submit whatever is in the input buffer
    pub fn submit_input(&mut self) {
        let input = std::mem::take(&mut self.input_buffer);

        match self.mode {
            PlayMode::Computer => self.handle_feedback(&input),
            PlayMode::Player => self.handle_guess(&input),
        }
    }

    pub fn handle_feedback(&mut self, input: &str) {
        let feedback = match Feedback::parse(input) {
            Ok(feedback) => feedback,
            Err(e) => {
                self.add_message(&e.to_string(), MessageStyle::Error);
                return;
            }
        };

        match self
            .session
            .submit_feedback(feedback.bulls(), feedback.cows())
        {
            Ok(result) if result.terminal => self.finish_game(),
            Ok(result) => {
                self.add_message(
                    &format!("{} numbers still possible", result.candidate_count),
                    MessageStyle::Info,
                );
                self.compute_suggestion();
            }
            Err(SessionError::Contradiction) => {
                self.current_guess = None;
                self.input_mode = InputMode::GameOver;
                self.stats.total_games += 1;
                self.add_message(
                    "No number matches the feedback given so far. Press 'n' to restart.",
                    MessageStyle::Error,
                );
            }
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    pub fn handle_guess(&mut self, input: &str) {
        match self.session.submit_guess(input) {
            Ok(result) if result.terminal => self.finish_game(),
            Ok(result) => self.add_message(
                &format!(
                    "{} {}B {}C, {} numbers still possible",
                    input.trim(),
                    result.bulls,
                    result.cows,
                    result.candidate_count
                ),
                MessageStyle::Info,
            ),
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    fn finish_game(&mut self) {
        let rounds = self.session.rounds();
        self.stats.total_games += 1;
        self.stats.games_won += 1;
        self.stats.total_rounds += rounds;
        self.current_guess = None;
        self.input_mode = InputMode::GameOver;

        let celebration = match (self.mode, rounds) {
            (_, 1) => "🎯 FIRST TRY! Extraordinary! 🌟".to_string(),
            (PlayMode::Computer, n) => format!("🐂 Got your number in {n} rounds!"),
            (PlayMode::Player, n) => format!("🎉 You cracked it in {n} rounds!"),
        };
        self.add_message(&celebration, MessageStyle::Success);
        self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
    }

    /// Reveal the secret (player mode only)
    pub fn reveal(&mut self) {
        match self.session.reveal_secret() {
            Ok(secret) => {
                self.revealed = Some(secret);
                self.add_message(&format!("The number is {secret}"), MessageStyle::Info);
            }
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    pub fn new_game(&mut self) {
        if self.input_mode == InputMode::Entry && self.session.rounds() > 0 {
            // Abandoned mid-game
            self.stats.total_games += 1;
        }

        self.session = Self::start_session(self.mode, &self.strategy, &mut self.rng);
        self.current_guess = None;
        self.revealed = None;
        self.input_buffer.clear();
        self.messages.clear();
        self.input_mode = InputMode::Entry;
        self.add_message("New game started!", MessageStyle::Info);
        self.greet();
        self.compute_suggestion();
    }

    pub fn switch_mode(&mut self) {
        self.mode = self.mode.toggled();
        self.new_game();
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            match key.code {
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    app.should_quit = true;
                }
                KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
                KeyCode::Char('n') => app.new_game(),
                KeyCode::Tab => app.switch_mode(),
                KeyCode::Char('r') if app.mode == PlayMode::Player => app.reveal(),
                KeyCode::Char(c)
                    if app.input_mode == InputMode::Entry
                        && (c.is_ascii_digit() || matches!(c, ' ' | ','))
                        && app.input_buffer.len() < 8 =>
                {
                    app.input_buffer.push(c);
                }
                KeyCode::Backspace if app.input_mode == InputMode::Entry => {
                    app.input_buffer.pop();
                }
                KeyCode::Enter if app.input_mode == InputMode::Entry => app.submit_input(),
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::SessionState;

    #[test]
    fn computer_mode_starts_with_suggestion() {
        let app = App::new(PlayMode::Computer, StrategyType::default(), 1);

        assert_eq!(app.current_guess, Some(Code::new("0123").unwrap()));
        assert_eq!(app.session.candidate_count(), 5040);
        assert_eq!(app.input_mode, InputMode::Entry);
    }

    #[test]
    fn computer_mode_feedback_advances() {
        let mut app = App::new(PlayMode::Computer, StrategyType::default(), 1);
        app.input_buffer = "0 0".to_string();
        app.submit_input();

        assert!(app.input_buffer.is_empty());
        assert_eq!(app.current_guess, Some(Code::new("4567").unwrap()));
        assert!(app.session.candidate_count() < 5040);
    }

    #[test]
    fn computer_mode_rejects_bad_feedback() {
        let mut app = App::new(PlayMode::Computer, StrategyType::default(), 1);
        app.handle_feedback("32");

        assert_eq!(app.session.candidate_count(), 5040);
        assert_eq!(app.messages.last().unwrap().style, MessageStyle::Error);
        assert_eq!(app.session.state(), SessionState::AwaitingFeedback);
    }

    #[test]
    fn computer_mode_win() {
        let mut app = App::new(PlayMode::Computer, StrategyType::default(), 1);
        app.handle_feedback("40");

        assert_eq!(app.input_mode, InputMode::GameOver);
        assert_eq!(app.stats.games_won, 1);
        assert_eq!(app.current_guess, None);
    }

    #[test]
    fn computer_mode_contradiction() {
        let mut app = App::new(PlayMode::Computer, StrategyType::default(), 1);
        app.handle_feedback("31");

        assert_eq!(app.input_mode, InputMode::GameOver);
        assert_eq!(app.stats.games_won, 0);

        app.new_game();
        assert_eq!(app.input_mode, InputMode::Entry);
        assert_eq!(app.session.candidate_count(), 5040);
    }

    #[test]
    fn player_mode_reveal_and_win() {
        let mut app = App::new(PlayMode::Player, StrategyType::default(), 5);
        assert_eq!(app.current_guess, None);

        app.reveal();
        let secret = app.revealed.unwrap();

        app.handle_guess(&secret.to_string());
        assert_eq!(app.input_mode, InputMode::GameOver);
        assert_eq!(app.stats.games_won, 1);
        assert_eq!(app.stats.total_rounds, 1);
    }

    #[test]
    fn player_mode_rejects_bad_guess() {
        let mut app = App::new(PlayMode::Player, StrategyType::default(), 5);
        app.handle_guess("1124");

        assert_eq!(app.messages.last().unwrap().style, MessageStyle::Error);
        assert_eq!(app.session.rounds(), 0);
    }

    #[test]
    fn switch_mode_starts_fresh_game() {
        let mut app = App::new(PlayMode::Computer, StrategyType::default(), 1);
        app.handle_feedback("00");
        app.switch_mode();

        assert_eq!(app.mode, PlayMode::Player);
        assert_eq!(app.session.rounds(), 0);
        assert!(app.session.reveal_secret().is_ok());
    }

    #[test]
    fn random_strategy_varies_between_games() {
        let mut app = App::new(PlayMode::Computer, StrategyType::from_name("random", 3), 3);
        let mut openers = vec![app.current_guess.unwrap()];

        for _ in 0..5 {
            app.new_game();
            openers.push(app.current_guess.unwrap());
        }

        assert!(openers.iter().any(|&guess| guess != openers[0]));
    }

    #[test]
    fn first_strategy_repeats_between_games() {
        let mut app = App::new(PlayMode::Computer, StrategyType::default(), 3);
        app.new_game();
        assert_eq!(app.current_guess, Some(Code::new("0123").unwrap()));
    }

    #[test]
    fn messages_are_capped() {
        let mut app = App::new(PlayMode::Computer, StrategyType::default(), 1);
        for i in 0..10 {
            app.add_message(&format!("message {i}"), MessageStyle::Info);
        }
        assert_eq!(app.messages.len(), 5);
        assert_eq!(app.messages.last().unwrap().text, "message 9");
    }
}
