use crate::game::{Board, Player};

/// Something that can pick a column for a player.
pub trait Agent {
    /// Select a column to play for `player` on `board`.
    ///
    /// The board must have at least one legal column. The board is left as
    /// it was found.
    fn select_action(&mut self, board: &Board, player: Player) -> usize;

    /// Return the agent's display name.
    fn name(&self) -> &str;
}
