use clap::{error::ErrorKind, CommandFactory, Parser, ValueEnum};
use crossterm::{
    event::{KeyCode, KeyEvent, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    tty::IsTty,
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Frame, Terminal,
};
use std::{
    error::Error,
    io::{self, stdin},
    time::Duration,
};

use lugat::{
    config::{Config, ConfigStore, FileConfigStore},
    games::{
        FlashcardSession, GameSummary, MatchingSession, MultipleChoiceSession, TypingSession,
    },
    runtime::{AppEvent, CrosstermEventSource, FixedTicker, Runner, TICK_RATE_MS},
    ui,
    vocabulary::{self, Unit},
};

/// vocabulary trainer tui with flashcards, matching, multiple choice and typing drills
#[derive(Parser, Debug, Clone)]
#[clap(
    version,
    about,
    long_about = "A terminal vocabulary trainer for English-Uzbek word practice. Pick a unit, then drill it with flashcards, a matching board, multiple choice questions, or typing."
)]
pub struct Cli {
    /// unit to practice (see --list-units)
    #[clap(short = 'u', long)]
    unit: Option<u32>,

    /// jump straight into a game instead of the menu
    #[clap(short = 'g', long, value_enum)]
    game: Option<GameMode>,

    /// number of questions per quiz round (multiple choice and typing)
    #[clap(short = 'w', long)]
    words: Option<usize>,

    /// number of pairs on the matching board (up to 9)
    #[clap(short = 'p', long)]
    pairs: Option<usize>,

    /// list the available units and exit
    #[clap(short = 'l', long)]
    list_units: bool,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum, strum_macros::Display)]
#[strum(serialize_all = "title_case")]
pub enum GameMode {
    Flashcards,
    Matching,
    MultipleChoice,
    Typing,
}

#[derive(Debug)]
pub enum ActiveGame {
    Flashcards(FlashcardSession),
    Matching(MatchingSession),
    MultipleChoice(MultipleChoiceSession),
    Typing(TypingSession),
}

#[derive(Debug, Clone, PartialEq)]
pub enum AppState {
    Menu,
    Playing,
    Results,
}

#[derive(Debug)]
pub struct App {
    pub unit: Unit,
    pub config: Config,
    pub state: AppState,
    pub mode: Option<GameMode>,
    pub game: Option<ActiveGame>,
    pub summary: Option<GameSummary>,
    pub attempts: Option<usize>,
}

impl App {
    pub fn new(unit: Unit, config: Config) -> Self {
        Self {
            unit,
            config,
            state: AppState::Menu,
            mode: None,
            game: None,
            summary: None,
            attempts: None,
        }
    }

    pub fn start_game(&mut self, mode: GameMode) {
        let rng = &mut rand::thread_rng();
        let words = &self.unit.words;
        let game = match mode {
            GameMode::Flashcards => ActiveGame::Flashcards(FlashcardSession::new(words)),
            GameMode::Matching => ActiveGame::Matching(MatchingSession::new(
                words,
                self.config.matching_count,
                rng,
            )),
            GameMode::MultipleChoice => ActiveGame::MultipleChoice(MultipleChoiceSession::new(
                words,
                self.config.multiple_choice_count,
                rng,
            )),
            GameMode::Typing => {
                ActiveGame::Typing(TypingSession::new(words, self.config.typing_count, rng))
            }
        };
        self.mode = Some(mode);
        self.game = Some(game);
        self.summary = None;
        self.attempts = None;
        self.state = AppState::Playing;
    }

    pub fn restart_game(&mut self) {
        let rng = &mut rand::thread_rng();
        match self.game.as_mut() {
            Some(ActiveGame::Flashcards(session)) => session.restart(),
            Some(ActiveGame::Matching(session)) => session.restart(rng),
            Some(ActiveGame::MultipleChoice(session)) => session.restart(rng),
            Some(ActiveGame::Typing(session)) => session.restart(rng),
            None => return,
        }
        self.summary = None;
        self.attempts = None;
        self.state = AppState::Playing;
    }

    pub fn back_to_menu(&mut self) {
        self.mode = None;
        self.game = None;
        self.summary = None;
        self.attempts = None;
        self.state = AppState::Menu;
    }

    fn finish(&mut self, summary: GameSummary, attempts: Option<usize>) {
        self.summary = Some(summary);
        self.attempts = attempts;
        self.state = AppState::Results;
    }

    /// Advances time-driven state; only the matching mode cares.
    pub fn on_tick(&mut self) {
        if self.state != AppState::Playing {
            return;
        }
        let mut finished = None;
        if let Some(ActiveGame::Matching(session)) = self.game.as_mut() {
            if let Some(summary) = session.on_tick() {
                finished = Some((summary, Some(session.attempts)));
            }
        }
        if let Some((summary, attempts)) = finished {
            self.finish(summary, attempts);
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    if cli.list_units {
        for unit in vocabulary::units() {
            println!("{:>3}  {} ({} words)", unit.id, unit.title, unit.words.len());
        }
        return Ok(());
    }

    let store = FileConfigStore::new();
    let mut config = store.load();
    if let Some(unit) = cli.unit {
        config.unit = unit;
    }
    if let Some(words) = cli.words {
        config.multiple_choice_count = words;
        config.typing_count = words;
    }
    if let Some(pairs) = cli.pairs {
        config.matching_count = pairs;
    }
    // The matching board is keyed 1-9 on the right column.
    config.matching_count = config.matching_count.min(9);

    let Some(unit) = vocabulary::get_unit_by_id(config.unit) else {
        let mut cmd = Cli::command();
        cmd.error(
            ErrorKind::InvalidValue,
            format!("unit {} not found (try --list-units)", config.unit),
        )
        .exit();
    };

    if !stdin().is_tty() {
        let mut cmd = Cli::command();
        cmd.error(ErrorKind::Io, "stdin must be a tty").exit();
    }

    let _ = store.save(&config);

    enable_raw_mode()?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(unit, config);
    if let Some(mode) = cli.game {
        app.start_game(mode);
    }
    let res = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<(), Box<dyn Error>> {
    let runner = Runner::new(
        CrosstermEventSource::new(),
        FixedTicker::new(Duration::from_millis(TICK_RATE_MS)),
    );

    loop {
        terminal.draw(|f| render(app, f))?;

        match runner.step() {
            AppEvent::Tick => app.on_tick(),
            AppEvent::Resize => {}
            AppEvent::Key(key) => {
                if handle_key(app, key) {
                    break;
                }
            }
        }
    }

    Ok(())
}

fn render(app: &App, f: &mut Frame) {
    match app.state {
        AppState::Menu => ui::menu::render(&app.unit, f),
        AppState::Playing => match app.game.as_ref() {
            Some(ActiveGame::Flashcards(session)) => ui::flashcard::render(session, f),
            Some(ActiveGame::Matching(session)) => ui::matching::render(session, f),
            Some(ActiveGame::MultipleChoice(session)) => ui::multiple_choice::render(session, f),
            Some(ActiveGame::Typing(session)) => ui::typing::render(session, f),
            None => ui::menu::render(&app.unit, f),
        },
        AppState::Results => {
            if let Some(summary) = &app.summary {
                let title = app.mode.map(|m| m.to_string()).unwrap_or_default();
                ui::results::render(&title, summary, app.attempts, f);
            }
        }
    }
}

/// Routes a key press to the current screen. Returns true to quit.
fn handle_key(app: &mut App, key: KeyEvent) -> bool {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return true;
    }

    match app.state {
        AppState::Menu => match key.code {
            KeyCode::Char('1') => app.start_game(GameMode::Flashcards),
            KeyCode::Char('2') => app.start_game(GameMode::Matching),
            KeyCode::Char('3') => app.start_game(GameMode::MultipleChoice),
            KeyCode::Char('4') => app.start_game(GameMode::Typing),
            KeyCode::Esc | KeyCode::Char('q') => return true,
            _ => {}
        },
        AppState::Playing => {
            if key.code == KeyCode::Esc {
                app.back_to_menu();
                return false;
            }

            let mut finished = None;
            match app.game.as_mut() {
                Some(ActiveGame::Flashcards(session)) => match key.code {
                    KeyCode::Char(' ') | KeyCode::Enter => session.flip(),
                    KeyCode::Left => session.prev(),
                    KeyCode::Right => session.next(),
                    _ => {}
                },
                Some(ActiveGame::Matching(session)) => match key.code {
                    KeyCode::Char(c) if c.is_ascii_digit() => {
                        if let Some(n) = c.to_digit(10).filter(|n| *n >= 1) {
                            session.select_uzbek(n as usize - 1);
                        }
                    }
                    KeyCode::Char(c) => {
                        if let Some(index) = ui::matching::ENGLISH_KEYS.find(c) {
                            session.select_english(index);
                        }
                    }
                    _ => {}
                },
                Some(ActiveGame::MultipleChoice(session)) => match key.code {
                    KeyCode::Char(c) if c.is_ascii_digit() => {
                        if let Some(n) = c.to_digit(10).filter(|n| *n >= 1) {
                            session.answer(n as usize - 1);
                        }
                    }
                    KeyCode::Enter => {
                        if let Some(summary) = session.advance() {
                            finished = Some((summary, None));
                        }
                    }
                    _ => {}
                },
                Some(ActiveGame::Typing(session)) => match key.code {
                    // Enter submits an answer and advances a revealed one,
                    // through the same guarded session methods.
                    KeyCode::Enter => {
                        if session.revealed {
                            if let Some(summary) = session.advance() {
                                finished = Some((summary, None));
                            }
                        } else {
                            session.submit();
                        }
                    }
                    KeyCode::Backspace => session.backspace(),
                    KeyCode::Char(c) => session.push_char(c),
                    _ => {}
                },
                None => {}
            }
            if let Some((summary, attempts)) = finished {
                app.finish(summary, attempts);
            }
        }
        AppState::Results => match key.code {
            KeyCode::Char('r') => app.restart_game(),
            KeyCode::Char('m') | KeyCode::Esc => app.back_to_menu(),
            KeyCode::Char('q') => return true,
            _ => {}
        },
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn test_app() -> App {
        let unit = vocabulary::get_unit_by_id(1).expect("unit 1 is embedded");
        App::new(unit, Config::default())
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_cli_default_values() {
        let cli = Cli::parse_from(["lugat"]);

        assert_eq!(cli.unit, None);
        assert_eq!(cli.game, None);
        assert_eq!(cli.words, None);
        assert_eq!(cli.pairs, None);
        assert!(!cli.list_units);
    }

    #[test]
    fn test_cli_unit_flag() {
        let cli = Cli::parse_from(["lugat", "-u", "2"]);
        assert_eq!(cli.unit, Some(2));

        let cli = Cli::parse_from(["lugat", "--unit", "3"]);
        assert_eq!(cli.unit, Some(3));
    }

    #[test]
    fn test_cli_game_flag() {
        let cli = Cli::parse_from(["lugat", "-g", "flashcards"]);
        assert_eq!(cli.game, Some(GameMode::Flashcards));

        let cli = Cli::parse_from(["lugat", "--game", "multiple-choice"]);
        assert_eq!(cli.game, Some(GameMode::MultipleChoice));

        let cli = Cli::parse_from(["lugat", "--game", "matching"]);
        assert_eq!(cli.game, Some(GameMode::Matching));

        let cli = Cli::parse_from(["lugat", "--game", "typing"]);
        assert_eq!(cli.game, Some(GameMode::Typing));
    }

    #[test]
    fn test_cli_count_flags() {
        let cli = Cli::parse_from(["lugat", "-w", "5", "-p", "6"]);
        assert_eq!(cli.words, Some(5));
        assert_eq!(cli.pairs, Some(6));
    }

    #[test]
    fn test_game_mode_display() {
        assert_eq!(GameMode::Flashcards.to_string(), "Flashcards");
        assert_eq!(GameMode::MultipleChoice.to_string(), "Multiple Choice");
    }

    #[test]
    fn test_app_starts_in_menu() {
        let app = test_app();

        assert_eq!(app.state, AppState::Menu);
        assert!(app.game.is_none());
        assert!(app.summary.is_none());
    }

    #[test]
    fn test_menu_keys_start_games() {
        let mut app = test_app();

        assert!(!handle_key(&mut app, key(KeyCode::Char('3'))));

        assert_eq!(app.state, AppState::Playing);
        assert_eq!(app.mode, Some(GameMode::MultipleChoice));
        assert!(matches!(app.game, Some(ActiveGame::MultipleChoice(_))));
    }

    #[test]
    fn test_menu_esc_quits() {
        let mut app = test_app();

        assert!(handle_key(&mut app, key(KeyCode::Esc)));
    }

    #[test]
    fn test_ctrl_c_quits_anywhere() {
        let mut app = test_app();
        app.start_game(GameMode::Typing);

        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(handle_key(&mut app, ctrl_c));
    }

    #[test]
    fn test_esc_in_game_returns_to_menu() {
        let mut app = test_app();
        app.start_game(GameMode::Flashcards);

        assert!(!handle_key(&mut app, key(KeyCode::Esc)));

        assert_eq!(app.state, AppState::Menu);
        assert!(app.game.is_none());
    }

    #[test]
    fn test_flashcard_keys() {
        let mut app = test_app();
        app.start_game(GameMode::Flashcards);

        handle_key(&mut app, key(KeyCode::Char(' ')));
        if let Some(ActiveGame::Flashcards(session)) = &app.game {
            assert!(session.is_flipped);
        } else {
            panic!("expected flashcard session");
        }

        handle_key(&mut app, key(KeyCode::Right));
        if let Some(ActiveGame::Flashcards(session)) = &app.game {
            assert_eq!(session.current_index, 1);
            assert!(!session.is_flipped);
        } else {
            panic!("expected flashcard session");
        }
    }

    #[test]
    fn test_multiple_choice_full_round_reaches_results() {
        let mut app = test_app();
        app.config.multiple_choice_count = 2;
        app.start_game(GameMode::MultipleChoice);

        for _ in 0..2 {
            let correct = match &app.game {
                Some(ActiveGame::MultipleChoice(session)) => {
                    session.current().unwrap().correct_index
                }
                _ => panic!("expected multiple choice session"),
            };
            let digit = char::from_digit(correct as u32 + 1, 10).unwrap();
            handle_key(&mut app, key(KeyCode::Char(digit)));
            handle_key(&mut app, key(KeyCode::Enter));
        }

        assert_eq!(app.state, AppState::Results);
        assert_eq!(app.summary, Some(GameSummary { score: 2, total: 2 }));
        assert_eq!(app.attempts, None);
    }

    #[test]
    fn test_typing_enter_submits_then_advances() {
        let mut app = test_app();
        app.config.typing_count = 1;
        app.start_game(GameMode::Typing);

        let answer = match &app.game {
            Some(ActiveGame::Typing(session)) => session.current().unwrap().english.clone(),
            _ => panic!("expected typing session"),
        };
        for c in answer.chars() {
            handle_key(&mut app, key(KeyCode::Char(c)));
        }

        handle_key(&mut app, key(KeyCode::Enter));
        if let Some(ActiveGame::Typing(session)) = &app.game {
            assert!(session.revealed);
            assert_eq!(session.last_correct, Some(true));
        } else {
            panic!("expected typing session");
        }

        handle_key(&mut app, key(KeyCode::Enter));
        assert_eq!(app.state, AppState::Results);
        assert_eq!(app.summary, Some(GameSummary { score: 1, total: 1 }));
    }

    #[test]
    fn test_matching_completion_arrives_via_tick() {
        let mut app = test_app();
        app.config.matching_count = 1;
        app.start_game(GameMode::Matching);

        handle_key(&mut app, key(KeyCode::Char('a')));
        handle_key(&mut app, key(KeyCode::Char('1')));
        assert_eq!(app.state, AppState::Playing);

        for _ in 0..lugat::games::matching::RESOLVE_DELAY_TICKS {
            app.on_tick();
        }

        assert_eq!(app.state, AppState::Results);
        assert_eq!(app.summary, Some(GameSummary { score: 1, total: 1 }));
        assert_eq!(app.attempts, Some(1));
    }

    #[test]
    fn test_results_restart_returns_to_playing_with_reset_score() {
        let mut app = test_app();
        app.config.typing_count = 1;
        app.start_game(GameMode::Typing);

        if let Some(ActiveGame::Typing(session)) = app.game.as_mut() {
            let answer = session.current().unwrap().english.clone();
            for c in answer.chars() {
                session.push_char(c);
            }
            session.submit();
            let summary = session.advance();
            assert!(summary.is_some());
        }
        app.finish(GameSummary { score: 1, total: 1 }, None);

        handle_key(&mut app, key(KeyCode::Char('r')));

        assert_eq!(app.state, AppState::Playing);
        assert!(app.summary.is_none());
        if let Some(ActiveGame::Typing(session)) = &app.game {
            assert_eq!(session.score, 0);
            assert!(!session.is_complete());
        } else {
            panic!("expected typing session");
        }
    }

    #[test]
    fn test_results_keys_menu_and_quit() {
        let mut app = test_app();
        app.start_game(GameMode::MultipleChoice);
        app.finish(GameSummary { score: 0, total: 2 }, None);

        assert!(!handle_key(&mut app, key(KeyCode::Char('m'))));
        assert_eq!(app.state, AppState::Menu);

        app.start_game(GameMode::MultipleChoice);
        app.finish(GameSummary { score: 0, total: 2 }, None);
        assert!(handle_key(&mut app, key(KeyCode::Char('q'))));
    }

    #[test]
    fn test_tick_is_noop_outside_matching() {
        let mut app = test_app();
        app.start_game(GameMode::Typing);

        app.on_tick();

        assert_eq!(app.state, AppState::Playing);
    }

    #[test]
    fn test_render_all_screens() {
        use ratatui::backend::TestBackend;

        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();

        let mut app = test_app();
        terminal.draw(|f| render(&app, f)).unwrap();

        for mode in [
            GameMode::Flashcards,
            GameMode::Matching,
            GameMode::MultipleChoice,
            GameMode::Typing,
        ] {
            app.start_game(mode);
            terminal.draw(|f| render(&app, f)).unwrap();
        }

        app.finish(GameSummary { score: 3, total: 8 }, Some(11));
        terminal.draw(|f| render(&app, f)).unwrap();

        let buffer = terminal.backend().buffer();
        let content: String = buffer.content.iter().map(|c| c.symbol()).collect();
        assert!(content.contains("38%"));
    }
}
