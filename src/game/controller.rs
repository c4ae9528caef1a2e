use std::time::{Duration, Instant};

use crate::ai::HeuristicAgent;
use crate::error::MoveError;

use super::schedule::{ScheduledMove, Scheduler, SessionId};
use super::win::{find_winning_line, WinningLine};
use super::{Board, Player};

/// Pause before the computer answers, so the human sees their piece land.
pub const DEFAULT_COMPUTER_DELAY: Duration = Duration::from_millis(800);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameStatus {
    AwaitingMove(Player),
    Won { winner: Player, line: WinningLine },
    Draw,
}

impl GameStatus {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameStatus::AwaitingMove(_))
    }

    /// Player to move, if the game is still running.
    pub fn current_player(&self) -> Option<Player> {
        match self {
            GameStatus::AwaitingMove(player) => Some(*player),
            _ => None,
        }
    }

    pub fn winning_line(&self) -> Option<&WinningLine> {
        match self {
            GameStatus::Won { line, .. } => Some(line),
            _ => None,
        }
    }
}

/// Hook fired once when a game is won.
pub trait Celebration {
    fn celebrate(&mut self, winner: Player, line: &WinningLine);
}

/// Celebration that does nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoCelebration;

impl Celebration for NoCelebration {
    fn celebrate(&mut self, _winner: Player, _line: &WinningLine) {}
}

/// Read-only view handed to renderers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub board: Board,
    pub status: GameStatus,
    pub legal_columns: Vec<usize>,
    pub computer_pending: bool,
}

/// Owns one game against the computer: board, status, the pending computer
/// move and the celebration hook.
///
/// Time is supplied by the caller. The host loop calls [`GameController::tick`]
/// regularly; a computer move fires once its delay has elapsed.
pub struct GameController<C = NoCelebration> {
    board: Board,
    status: GameStatus,
    session: SessionId,
    scheduler: Scheduler,
    selector: HeuristicAgent,
    celebration: C,
    moves_played: usize,
}

impl GameController<NoCelebration> {
    /// Fresh game with the default delay and a deterministic selector.
    pub fn new_game(rows: usize, cols: usize) -> Self {
        GameController::new(
            rows,
            cols,
            DEFAULT_COMPUTER_DELAY,
            HeuristicAgent::new(false),
            NoCelebration,
        )
    }
}

impl<C: Celebration> GameController<C> {
    pub fn new(
        rows: usize,
        cols: usize,
        computer_delay: Duration,
        selector: HeuristicAgent,
        celebration: C,
    ) -> Self {
        GameController {
            board: Board::new(rows, cols),
            status: GameStatus::AwaitingMove(Player::HUMAN),
            session: SessionId::default(),
            scheduler: Scheduler::new(computer_delay),
            selector,
            celebration,
            moves_played: 0,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn status(&self) -> &GameStatus {
        &self.status
    }

    pub fn session(&self) -> SessionId {
        self.session
    }

    pub fn moves_played(&self) -> usize {
        self.moves_played
    }

    pub fn pending_move(&self) -> Option<&ScheduledMove> {
        self.scheduler.pending()
    }

    pub fn celebration(&self) -> &C {
        &self.celebration
    }

    pub fn celebration_mut(&mut self) -> &mut C {
        &mut self.celebration
    }

    pub fn is_legal_move(&self, column: usize) -> bool {
        !self.status.is_terminal() && !self.board.is_column_full(column)
    }

    pub fn snapshot(&self) -> Snapshot {
        let legal_columns = if self.status.is_terminal() {
            Vec::new()
        } else {
            self.board.legal_columns()
        };
        Snapshot {
            board: self.board.clone(),
            status: self.status.clone(),
            legal_columns,
            computer_pending: self.scheduler.pending().is_some(),
        }
    }

    /// Play `column` for whoever is to move.
    pub fn apply_move(&mut self, column: usize) -> Result<GameStatus, MoveError> {
        self.apply_move_at(column, Instant::now())
    }

    /// Play `column` for whoever is to move; `now` anchors the computer's
    /// reply delay when the turn passes to it.
    pub fn apply_move_at(&mut self, column: usize, now: Instant) -> Result<GameStatus, MoveError> {
        let GameStatus::AwaitingMove(player) = self.status else {
            return Err(MoveError::GameAlreadyOver);
        };

        let row = self.board.drop_piece(column, player)?;
        self.scheduler.cancel();
        self.moves_played += 1;
        tracing::debug!(player = player.name(), row, column, "piece dropped");

        self.status = if let Some(line) = find_winning_line(&self.board, row, column) {
            tracing::info!(winner = player.name(), moves = self.moves_played, "game won");
            self.celebration.celebrate(player, &line);
            GameStatus::Won {
                winner: player,
                line,
            }
        } else if self.board.is_full() {
            tracing::info!(moves = self.moves_played, "game drawn");
            GameStatus::Draw
        } else {
            let next = player.other();
            if next.is_computer() {
                self.scheduler.schedule(self.session, now);
            }
            GameStatus::AwaitingMove(next)
        };

        Ok(self.status.clone())
    }

    /// Entry point for human input. Refused while the computer is to move.
    pub fn play_human(&mut self, column: usize, now: Instant) -> Result<GameStatus, MoveError> {
        match self.status {
            GameStatus::AwaitingMove(player) if player.is_computer() => {
                Err(MoveError::ComputerTurnPending)
            }
            _ => self.apply_move_at(column, now),
        }
    }

    /// Run the computer's move if its delay has elapsed. Returns the new
    /// status when a move was made.
    pub fn tick(&mut self, now: Instant) -> Option<GameStatus> {
        self.scheduler.take_due(self.session, now)?;

        let player = self.status.current_player().filter(|p| p.is_computer())?;
        let choice = self.selector.choose(&self.board, player);
        match self.apply_move_at(choice.column, now) {
            Ok(status) => Some(status),
            Err(err) => {
                tracing::error!(%err, column = choice.column, "computer move rejected");
                None
            }
        }
    }

    /// Start over. Any pending computer move is dropped with the old session.
    pub fn reset(&mut self) {
        if self.scheduler.cancel().is_some() {
            tracing::debug!("cancelled pending computer move");
        }
        self.board = Board::new(self.board.rows(), self.board.cols());
        self.status = GameStatus::AwaitingMove(Player::HUMAN);
        self.session = self.session.next();
        self.moves_played = 0;
        tracing::info!("new game");
    }
}
