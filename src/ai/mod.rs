//! Computer opponents: the agent trait, the single-ply heuristic and a
//! uniform random player.

mod agent;
mod heuristic;
mod random;

pub use agent::Agent;
pub use heuristic::{center_order, winning_column, Choice, HeuristicAgent, Rule};
pub use random::RandomAgent;
