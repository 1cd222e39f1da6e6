//! # Connect Four
//!
//! Two-player Connect Four in the terminal. The game core is plain data with
//! no I/O; the terminal UI built with Ratatui drives it.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, players, engine state machine
//! - [`ui`] — Terminal UI: menu, name entry, game view
//! - [`config`] — TOML configuration loading and validation
//! - [`telemetry`] — File-backed tracing setup
//! - [`error`] — Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod telemetry;
pub mod ui;
