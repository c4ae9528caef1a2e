//! # Connect Four
//!
//! Connect Four in the terminal against a single-ply heuristic computer.
//! The engine is independent of the front-end: renderers read a
//! [`game::Snapshot`] and input is fed back through
//! [`game::GameController`].
//!
//! ## Modules
//!
//! - [`game`] — Board, win detection, turn scheduling and the game controller
//! - [`ai`] — Agent trait, heuristic move selector, random player
//! - [`ui`] — Terminal UI built with Ratatui, confetti on a win
//! - [`config`] — TOML configuration loading and validation
//! - [`logging`] — File-backed `tracing` subscriber setup
//! - [`error`] — Structured error types

pub mod ai;
pub mod config;
pub mod error;
pub mod game;
pub mod logging;
pub mod ui;
