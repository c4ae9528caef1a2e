use crate::game::{find_winning_line, Board, Player};

use super::agent::Agent;
use super::random::RandomAgent;

/// The selection rules, in the order they are tried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    /// Complete a four for ourselves.
    Win,
    /// Take the column the opponent would win with.
    Block,
    /// First legal column in center-out order.
    Center,
    /// Uniform pick among legal columns.
    Random,
}

impl Rule {
    pub const ORDER: [Rule; 4] = [Rule::Win, Rule::Block, Rule::Center, Rule::Random];

    pub fn name(self) -> &'static str {
        match self {
            Rule::Win => "win",
            Rule::Block => "block",
            Rule::Center => "center",
            Rule::Random => "random",
        }
    }
}

/// A selected column and the rule that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Choice {
    pub column: usize,
    pub rule: Rule,
}

/// Column preference from the middle outward, left before right.
/// For seven columns this is `[3, 2, 4, 1, 5, 0, 6]`.
pub fn center_order(cols: usize) -> Vec<usize> {
    let mut order: Vec<usize> = (0..cols).collect();
    order.sort_by_key(|&col| ((2 * col).abs_diff(cols - 1), col));
    order
}

/// Leftmost column where dropping `player`'s piece completes a four.
///
/// Each candidate is placed, checked and cleared again, so `board` is
/// unchanged on return.
pub fn winning_column(board: &mut Board, player: Player) -> Option<usize> {
    for col in 0..board.cols() {
        let Ok(Some(row)) = board.lowest_empty_row(col) else {
            continue;
        };
        board.place(row, col, player);
        let wins = find_winning_line(board, row, col).is_some();
        board.clear(row, col);
        if wins {
            return Some(col);
        }
    }
    None
}

/// Single-ply opponent: win, else block, else play toward the center.
pub struct HeuristicAgent {
    randomize_ties: bool,
    fallback: RandomAgent,
}

impl HeuristicAgent {
    /// With `randomize_ties` the center rule defers to a uniform pick among
    /// legal columns instead of taking the most central one.
    pub fn new(randomize_ties: bool) -> Self {
        HeuristicAgent {
            randomize_ties,
            fallback: RandomAgent::new(),
        }
    }

    pub fn with_seed(seed: u64, randomize_ties: bool) -> Self {
        HeuristicAgent {
            randomize_ties,
            fallback: RandomAgent::with_seed(seed),
        }
    }

    /// Run the rules in [`Rule::ORDER`] and return the first column produced.
    pub fn choose(&mut self, board: &Board, player: Player) -> Choice {
        assert!(
            !board.is_full(),
            "move selection requested on a full board"
        );

        let mut scratch = board.clone();
        for rule in Rule::ORDER {
            if let Some(column) = self.evaluate(rule, &mut scratch, player) {
                tracing::debug!(column, rule = rule.name(), player = player.name(), "rule fired");
                return Choice { column, rule };
            }
        }
        unreachable!("the random rule yields a column on any non-full board")
    }

    fn evaluate(&mut self, rule: Rule, board: &mut Board, player: Player) -> Option<usize> {
        match rule {
            Rule::Win => winning_column(board, player),
            Rule::Block => winning_column(board, player.other()),
            Rule::Center if self.randomize_ties => None,
            Rule::Center => center_order(board.cols())
                .into_iter()
                .find(|&col| !board.is_column_full(col)),
            Rule::Random => Some(self.fallback.select_action(board, player)),
        }
    }
}

impl Agent for HeuristicAgent {
    fn select_action(&mut self, board: &Board, player: Player) -> usize {
        self.choose(board, player).column
    }

    fn name(&self) -> &str {
        "Heuristic"
    }
}
