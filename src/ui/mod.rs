//! Terminal UI: main menu, player name prompts, and the game view.

mod app;
pub mod board_widget;
mod game_view;
mod menu_view;

pub use app::{App, Screen, MENU_ITEMS};
