//! Core Connect Four game logic: board, players, win detection, the turn
//! scheduler and the controller that ties them together.

mod board;
mod controller;
mod player;
mod schedule;
mod win;

pub use board::{Board, Cell, DEFAULT_COLS, DEFAULT_ROWS};
pub use controller::{
    Celebration, GameController, GameStatus, NoCelebration, Snapshot, DEFAULT_COMPUTER_DELAY,
};
pub use player::Player;
pub use schedule::{ScheduledMove, Scheduler, SessionId};
pub use win::{find_winning_line, Axis, WinningLine, CONNECT};
