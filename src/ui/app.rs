use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{backend::Backend, Terminal};

use crate::config::AppConfig;
use crate::error::{AppError, BoardError, GameError};
use crate::game::{GameMode, GameSession, MoveResult, Player, Rejection};
use crate::opponent::{Opponent, RandomOpponent};
use crate::score::ScoreTally;

const POLL_INTERVAL: Duration = Duration::from_millis(100);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    MainMenu,
    Scoreboard,
    Game,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuItem {
    PlayVsPlayer,
    PlayVsComputer,
    Scoreboard,
    Exit,
}

pub const MENU_ITEMS: [MenuItem; 4] = [
    MenuItem::PlayVsPlayer,
    MenuItem::PlayVsComputer,
    MenuItem::Scoreboard,
    MenuItem::Exit,
];

impl MenuItem {
    pub fn label(self) -> &'static str {
        match self {
            MenuItem::PlayVsPlayer => "Play vs Player",
            MenuItem::PlayVsComputer => "Play vs Computer (Easy)",
            MenuItem::Scoreboard => "Scoreboard",
            MenuItem::Exit => "Exit",
        }
    }
}

pub struct App {
    config: AppConfig,
    screen: Screen,
    menu_index: usize,
    mode: GameMode,
    session: Option<GameSession>,
    tally: ScoreTally,
    selected_column: usize,
    computer_due: Option<Instant>,
    should_quit: bool,
    message: Option<String>,
}

impl App {
    pub fn new(config: AppConfig) -> Self {
        App {
            config,
            screen: Screen::MainMenu,
            menu_index: 0,
            mode: GameMode::PlayerVsPlayer,
            session: None,
            tally: ScoreTally::new(),
            selected_column: 0,
            computer_due: None,
            should_quit: false,
            message: None,
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn session(&self) -> Option<&GameSession> {
        self.session.as_ref()
    }

    pub fn tally(&self) -> &ScoreTally {
        &self.tally
    }

    pub fn selected_column(&self) -> usize {
        self.selected_column
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<(), AppError> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
            self.tick(Instant::now())?;
        }
        Ok(())
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> Result<(), AppError> {
        let timeout = match self.computer_due {
            Some(due) => due.saturating_duration_since(Instant::now()).min(POLL_INTERVAL),
            None => POLL_INTERVAL,
        };
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key)?;
                }
            }
        }
        Ok(())
    }

    /// Start a new game from the menu.
    pub fn start_game(&mut self, mode: GameMode) -> Result<(), BoardError> {
        let opponent: Box<dyn Opponent> = match self.config.computer.seed {
            Some(seed) => Box::new(RandomOpponent::seeded(seed)),
            None => Box::new(RandomOpponent::new()),
        };
        let session = GameSession::with_opponent(
            self.config.board.rows,
            self.config.board.cols,
            mode.seats(),
            opponent,
        )?;

        self.selected_column = session.board().cols() / 2;
        self.session = Some(session);
        self.mode = mode;
        self.screen = Screen::Game;
        self.computer_due = None;
        self.message = None;
        Ok(())
    }

    /// Play a pending computer move once its delay has elapsed.
    pub fn tick(&mut self, now: Instant) -> Result<(), GameError> {
        let delay = Duration::from_millis(self.config.computer.delay_ms);
        let Some(session) = self.session.as_mut() else {
            return Ok(());
        };
        if self.screen != Screen::Game || !session.awaiting_computer() {
            self.computer_due = None;
            return Ok(());
        }

        let due = *self.computer_due.get_or_insert(now + delay);
        if now < due {
            return Ok(());
        }
        self.computer_due = None;

        if let Some(result) = session.play_computer_turn()? {
            self.after_move(result);
        }
        Ok(())
    }

    /// Handle key press
    fn handle_key(&mut self, key: KeyEvent) -> Result<(), AppError> {
        match self.screen {
            Screen::MainMenu => self.handle_menu_key(key)?,
            Screen::Scoreboard => self.screen = Screen::MainMenu,
            Screen::Game => self.handle_game_key(key)?,
        }
        Ok(())
    }

    fn handle_menu_key(&mut self, key: KeyEvent) -> Result<(), BoardError> {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Up => {
                self.menu_index = self.menu_index.checked_sub(1).unwrap_or(MENU_ITEMS.len() - 1);
            }
            KeyCode::Down => {
                self.menu_index = (self.menu_index + 1) % MENU_ITEMS.len();
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.select_menu_item(MENU_ITEMS[self.menu_index])?,
            KeyCode::Char(c) => {
                let item = c
                    .to_digit(10)
                    .and_then(|d| (d as usize).checked_sub(1))
                    .and_then(|i| MENU_ITEMS.get(i));
                if let Some(&item) = item {
                    self.select_menu_item(item)?;
                }
            }
            _ => {}
        }
        Ok(())
    }

    fn select_menu_item(&mut self, item: MenuItem) -> Result<(), BoardError> {
        match item {
            MenuItem::PlayVsPlayer => self.start_game(GameMode::PlayerVsPlayer)?,
            MenuItem::PlayVsComputer => self.start_game(GameMode::PlayerVsComputer)?,
            MenuItem::Scoreboard => self.screen = Screen::Scoreboard,
            MenuItem::Exit => self.should_quit = true,
        }
        Ok(())
    }

    fn handle_game_key(&mut self, key: KeyEvent) -> Result<(), GameError> {
        // Clear message on any key press
        self.message = None;
        let cols = self.session.as_ref().map_or(0, |s| s.board().cols());

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Char('m') => {
                self.session = None;
                self.computer_due = None;
                self.screen = Screen::MainMenu;
            }
            KeyCode::Left => {
                if self.selected_column > 0 {
                    self.selected_column -= 1;
                }
            }
            KeyCode::Right => {
                if self.selected_column + 1 < cols {
                    self.selected_column += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.drop_piece()?;
            }
            KeyCode::Char('r') => {
                self.new_round();
            }
            KeyCode::Char(c) => {
                // Digits pick a column directly, counting from 1
                if let Some(col) = c.to_digit(10).and_then(|d| (d as usize).checked_sub(1)) {
                    self.selected_column = col.min(cols.saturating_sub(1));
                    self.submit(col)?;
                }
            }
            _ => {}
        }
        Ok(())
    }

    /// Drop piece in selected column, or start the rematch once the game is over.
    fn drop_piece(&mut self) -> Result<(), GameError> {
        if self.session.as_ref().is_some_and(GameSession::is_finished) {
            self.new_round();
            return Ok(());
        }
        self.submit(self.selected_column)
    }

    fn submit(&mut self, column: usize) -> Result<(), GameError> {
        let Some(session) = self.session.as_mut() else {
            return Ok(());
        };
        let result = session.submit_move(column)?;
        self.after_move(result);
        Ok(())
    }

    fn new_round(&mut self) {
        if let Some(session) = self.session.as_mut() {
            session.reset();
            self.selected_column = session.board().cols() / 2;
        }
        self.computer_due = None;
        self.message = Some("New game started!".to_string());
    }

    fn after_move(&mut self, result: MoveResult) {
        match result {
            MoveResult::Rejected(reason) => {
                self.message = Some(
                    match reason {
                        Rejection::ColumnFull => "Column is full!",
                        Rejection::OutOfRange => "Invalid column!",
                        Rejection::GameAlreadyFinished => "Game is over! Press Enter for a rematch.",
                        Rejection::NotYourTurn => "Wait for the computer to move.",
                    }
                    .to_string(),
                );
            }
            MoveResult::Placed { .. } => {}
            MoveResult::PlacedAndWon { player, .. } => {
                self.message = Some(format!(
                    "{} wins! Press Enter for a rematch.",
                    self.seat_label(player)
                ));
            }
            MoveResult::PlacedAndDraw { .. } => {
                self.message = Some("It's a draw! Press Enter for a rematch.".to_string());
            }
        }

        if let Some(outcome) = result.outcome() {
            self.tally.record(outcome);
            log::info!(
                "game over ({:?}), tally now {}-{}-{}",
                outcome,
                self.tally.player_a_wins,
                self.tally.player_b_wins,
                self.tally.draws
            );
        }
    }

    /// Display name for a seat: the computer is called out as such.
    pub fn seat_label(&self, player: Player) -> &'static str {
        self.session
            .as_ref()
            .map_or(player.name(), |s| s.seat_label(player))
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        match (self.screen, &self.session) {
            (Screen::Game, Some(session)) => super::game_view::render(
                frame,
                session,
                self.selected_column,
                &self.message,
                self.mode.label(),
            ),
            (Screen::Scoreboard, _) => super::menu_view::render_scoreboard(frame, &self.tally),
            _ => super::menu_view::render_menu(frame, self.menu_index),
        }
    }
}
