//! Terminal UI: the game view, keyboard handling and the win confetti.

mod app;
pub mod celebration;
mod game_view;

pub use app::App;
pub use celebration::Confetti;
