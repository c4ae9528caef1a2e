use crate::config::AppConfig;
use crate::error::MoveError;
use crate::game::{GameController, GameStatus};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{backend::Backend, Terminal};
use std::io;
use std::time::{Duration, Instant};

use super::celebration::Confetti;

const POLL_INTERVAL: Duration = Duration::from_millis(50);

pub struct App {
    game: GameController<Confetti>,
    selected_column: usize,
    should_quit: bool,
    message: Option<String>,
}

impl App {
    pub fn new(config: &AppConfig) -> Self {
        let confetti = match config.computer.seed {
            Some(seed) => Confetti::with_seed(seed),
            None => Confetti::new(),
        };
        let game = GameController::new(
            config.board.rows,
            config.board.cols,
            config.computer.delay(),
            config.computer.selector(),
            confetti,
        );
        App {
            selected_column: config.board.cols / 2, // Start in middle
            game,
            should_quit: false,
            message: None,
        }
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()>
    where
        B::Error: Into<io::Error>,
    {
        loop {
            terminal
                .draw(|f| self.render(f))
                .map_err(Into::<io::Error>::into)?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
            self.tick(Instant::now());
        }
        Ok(())
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(POLL_INTERVAL)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key, Instant::now());
                }
            }
        }
        Ok(())
    }

    /// Fire a due computer move and advance the confetti.
    fn tick(&mut self, now: Instant) {
        if let Some(status) = self.game.tick(now) {
            self.announce(&status);
        }
        self.game.celebration_mut().tick(now);
    }

    /// Handle key press
    fn handle_key(&mut self, key: KeyEvent, now: Instant) {
        // Clear message on any key press
        self.message = None;
        let cols = self.game.board().cols();

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                self.selected_column = self.selected_column.saturating_sub(1);
            }
            KeyCode::Right => {
                if self.selected_column + 1 < cols {
                    self.selected_column += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.drop_piece(self.selected_column, now);
            }
            KeyCode::Char(c @ '1'..='9') => {
                let column = c as usize - '1' as usize;
                if column < cols {
                    self.selected_column = column;
                    self.drop_piece(column, now);
                }
            }
            KeyCode::Char('r') | KeyCode::Char('R') => {
                self.game.reset();
                self.game.celebration_mut().clear();
                self.selected_column = cols / 2;
                self.message = Some("New game started!".to_string());
            }
            _ => {}
        }
    }

    /// Drop the human's piece in `column`
    fn drop_piece(&mut self, column: usize, now: Instant) {
        match self.game.play_human(column, now) {
            Ok(status) => self.announce(&status),
            Err(MoveError::ColumnFull { .. }) => {
                self.message = Some("Column is full!".to_string());
            }
            Err(MoveError::InvalidColumn { .. }) => {
                self.message = Some("Invalid column!".to_string());
            }
            Err(MoveError::GameAlreadyOver) => {
                self.message = Some("Game over! Press 'r' to restart.".to_string());
            }
            Err(MoveError::ComputerTurnPending) => {
                self.message = Some("Wait for the computer's move.".to_string());
            }
        }
    }

    fn announce(&mut self, status: &GameStatus) {
        if status.is_terminal() {
            self.message = Some("Press 'r' to play again.".to_string());
        }
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        super::game_view::render(
            frame,
            &self.game.snapshot(),
            self.selected_column,
            &self.message,
            self.game.celebration(),
        );
    }
}
