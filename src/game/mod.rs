//! Core Connect Four game logic: board representation, players and symbol
//! assignment, and the engine that drives a game to a win or a draw.

mod board;
mod engine;
mod player;

pub use board::{Board, Cell, DropError, Snapshot, WinningLine, COLS, ROWS, WIN_LENGTH};
pub use engine::{GameEngine, GameState, MoveOutcome};
pub use player::{assign_symbols, Player, PlayerColor, Seat, FALLBACK_SYMBOL};
