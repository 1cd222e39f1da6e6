use super::board::Cell;
use crate::error::GameError;

/// Symbol given to the second player when no character of their name is free.
pub const FALLBACK_SYMBOL: char = 'X';

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Seat {
    One,
    Two,
}

impl Seat {
    /// Get the other seat
    pub fn other(self) -> Seat {
        match self {
            Seat::One => Seat::Two,
            Seat::Two => Seat::One,
        }
    }

    /// Convert seat to cell type
    pub fn to_cell(self) -> Cell {
        match self {
            Seat::One => Cell::Player1,
            Seat::Two => Cell::Player2,
        }
    }

    /// 1-based seat number for display
    pub fn number(self) -> u8 {
        match self {
            Seat::One => 1,
            Seat::Two => 2,
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            Seat::One => 0,
            Seat::Two => 1,
        }
    }
}

/// Cosmetic color tag. The core never looks at it; the UI maps it to a
/// terminal color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlayerColor {
    Red,
    Blue,
    Yellow,
    Green,
    Magenta,
    Cyan,
    White,
}

impl PlayerColor {
    /// Default color for a seat
    pub fn default_for(seat: Seat) -> PlayerColor {
        match seat {
            Seat::One => PlayerColor::Red,
            Seat::Two => PlayerColor::Blue,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    seat: Seat,
    name: String,
    symbol: char,
    color: PlayerColor,
}

impl Player {
    pub fn new(seat: Seat, name: impl Into<String>, symbol: char, color: PlayerColor) -> Self {
        Player {
            seat,
            name: name.into(),
            symbol,
            color,
        }
    }

    pub fn seat(&self) -> Seat {
        self.seat
    }

    /// Get player name for display
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn symbol(&self) -> char {
        self.symbol
    }

    pub fn color(&self) -> PlayerColor {
        self.color
    }
}

/// Reject an empty player name. Any other text, whitespace included, is kept
/// as given.
pub(crate) fn validate_name(name: &str, seat: Seat) -> Result<&str, GameError> {
    if name.is_empty() {
        return Err(GameError::InvalidName { seat });
    }
    Ok(name)
}

/// Pick the symbols for both players from their names.
///
/// Player 1 takes the upper-cased first character of their name. Player 2
/// takes the first upper-cased character of their name that differs from
/// player 1's symbol, or [`FALLBACK_SYMBOL`] if every character collides.
/// The fallback itself is not checked against player 1's symbol.
pub fn assign_symbols(name1: &str, name2: &str) -> Result<(char, char), GameError> {
    let first = leading_symbol(name1).ok_or(GameError::InvalidName { seat: Seat::One })?;
    if name2.is_empty() {
        return Err(GameError::InvalidName { seat: Seat::Two });
    }

    let second = name2
        .chars()
        .map(upper)
        .find(|&c| c != first)
        .unwrap_or(FALLBACK_SYMBOL);

    Ok((first, second))
}

fn leading_symbol(name: &str) -> Option<char> {
    name.chars().next().map(upper)
}

/// Single-character upper-casing; multi-char expansions keep their first char.
fn upper(c: char) -> char {
    c.to_uppercase().next().unwrap_or(c)
}
