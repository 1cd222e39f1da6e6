use tracing::{debug, info};

use super::board::{Board, DropError, Snapshot, WinningLine, COLS};
use super::player::{assign_symbols, validate_name, Player, PlayerColor, Seat};
use crate::error::GameError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    InProgress,
    Won(Seat),
    Draw,
}

impl GameState {
    /// Check if game is over
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameState::InProgress)
    }
}

/// Result of a successfully applied move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Token placed, the other player is up.
    Continue,
    /// The mover completed four in a row.
    Win(Player),
    /// The board filled up without a winner.
    Draw,
}

/// Drives a single game between two named players.
///
/// The engine owns the board; callers only ever see it through
/// [`GameEngine::snapshot`].
#[derive(Debug, Clone)]
pub struct GameEngine {
    board: Board,
    players: [Player; 2],
    colors: [PlayerColor; 2],
    current: Seat,
    state: GameState,
    moves_played: usize,
    winning_line: Option<WinningLine>,
}

impl GameEngine {
    /// Start a game with the default colors.
    pub fn new(name1: &str, name2: &str) -> Result<Self, GameError> {
        Self::with_colors(
            name1,
            name2,
            [
                PlayerColor::default_for(Seat::One),
                PlayerColor::default_for(Seat::Two),
            ],
        )
    }

    pub fn with_colors(
        name1: &str,
        name2: &str,
        colors: [PlayerColor; 2],
    ) -> Result<Self, GameError> {
        let players = build_players(name1, name2, colors)?;
        info!(
            player1 = players[0].name(),
            player2 = players[1].name(),
            "new game"
        );
        Ok(GameEngine {
            board: Board::new(),
            players,
            colors,
            current: Seat::One,
            state: GameState::InProgress,
            moves_played: 0,
            winning_line: None,
        })
    }

    /// Replace both players and hand the turn to player 1.
    ///
    /// Returns the assigned symbols. On error nothing changes.
    pub fn initialize_players(
        &mut self,
        name1: &str,
        name2: &str,
    ) -> Result<(char, char), GameError> {
        self.players = build_players(name1, name2, self.colors)?;
        self.current = Seat::One;
        Ok((self.players[0].symbol(), self.players[1].symbol()))
    }

    /// Play a token for the current player in a 1-based column.
    pub fn submit_move(&mut self, column: usize) -> Result<MoveOutcome, GameError> {
        if self.state.is_terminal() {
            return Err(GameError::GameOver);
        }
        if !(1..=COLS).contains(&column) {
            return Err(GameError::InvalidInput(column.to_string()));
        }

        let mover = self.current;
        let row = self
            .board
            .drop_token(column - 1, mover)
            .map_err(|e| match e {
                DropError::ColumnFull(_) => GameError::ColumnFull(column),
                DropError::InvalidColumn(_) => GameError::InvalidInput(column.to_string()),
            })?;
        self.moves_played += 1;
        debug!(seat = mover.number(), column, row, "token dropped");

        if let Some(line) = self.board.find_four_in_a_row(mover) {
            self.state = GameState::Won(mover);
            self.winning_line = Some(line);
            let winner = self.players[mover.index()].clone();
            info!(
                winner = winner.name(),
                moves = self.moves_played,
                "game won"
            );
            return Ok(MoveOutcome::Win(winner));
        }

        if self.board.is_full() {
            self.state = GameState::Draw;
            info!(moves = self.moves_played, "game drawn");
            return Ok(MoveOutcome::Draw);
        }

        self.current = mover.other();
        Ok(MoveOutcome::Continue)
    }

    /// Parse raw text as a 1-based column and play it.
    pub fn submit_input(&mut self, input: &str) -> Result<MoveOutcome, GameError> {
        let column = input
            .trim()
            .parse::<usize>()
            .map_err(|_| GameError::InvalidInput(input.trim().to_string()))?;
        self.submit_move(column)
    }

    /// Clear the board and start over with freshly supplied names.
    ///
    /// Names are checked first, so a rejected restart leaves the current game
    /// as it was.
    pub fn restart(&mut self, name1: &str, name2: &str) -> Result<(), GameError> {
        let players = build_players(name1, name2, self.colors)?;
        self.board.reset();
        self.players = players;
        self.current = Seat::One;
        self.state = GameState::InProgress;
        self.moves_played = 0;
        self.winning_line = None;
        info!(
            player1 = self.players[0].name(),
            player2 = self.players[1].name(),
            "game restarted"
        );
        Ok(())
    }

    /// Read-only copy of the grid
    pub fn snapshot(&self) -> Snapshot {
        self.board.snapshot()
    }

    pub fn current_player(&self) -> &Player {
        &self.players[self.current.index()]
    }

    pub fn current_state(&self) -> GameState {
        self.state
    }

    pub fn player(&self, seat: Seat) -> &Player {
        &self.players[seat.index()]
    }

    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    pub fn moves_played(&self) -> usize {
        self.moves_played
    }

    /// Cells of the winning run once the game is won
    pub fn winning_line(&self) -> Option<WinningLine> {
        self.winning_line
    }

    /// Whether a 1-based column can still take a token
    pub fn is_column_open(&self, column: usize) -> bool {
        (1..=COLS).contains(&column) && !self.board.is_column_full(column - 1)
    }
}

fn build_players(
    name1: &str,
    name2: &str,
    colors: [PlayerColor; 2],
) -> Result<[Player; 2], GameError> {
    let name1 = validate_name(name1, Seat::One)?;
    let name2 = validate_name(name2, Seat::Two)?;
    let (symbol1, symbol2) = assign_symbols(name1, name2)?;
    Ok([
        Player::new(Seat::One, name1, symbol1, colors[0]),
        Player::new(Seat::Two, name2, symbol2, colors[1]),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Cell, ROWS};

    /// Fills the board column pair by column pair without ever lining up four.
    const DRAW_SEQUENCE: [usize; 42] = [
        1, 2, 1, 2, 1, 2, 2, 1, 2, 1, 2, 1, //
        3, 4, 3, 4, 3, 4, 4, 3, 4, 3, 4, 3, //
        5, 6, 5, 6, 5, 6, 6, 5, 6, 5, 6, 5, //
        7, 7, 7, 7, 7, 7,
    ];

    fn engine() -> GameEngine {
        GameEngine::new("Alice", "Bob").unwrap()
    }

    #[test]
    fn test_initial_state() {
        let engine = engine();
        assert_eq!(engine.current_player().seat(), Seat::One);
        assert_eq!(engine.current_player().symbol(), 'A');
        assert_eq!(engine.player(Seat::Two).symbol(), 'B');
        assert_eq!(engine.current_state(), GameState::InProgress);
        assert_eq!(engine.moves_played(), 0);
    }

    #[test]
    fn test_rejects_empty_names() {
        assert_eq!(
            GameEngine::new("", "Bob").unwrap_err(),
            GameError::InvalidName { seat: Seat::One }
        );
        assert_eq!(
            GameEngine::new("Alice", "").unwrap_err(),
            GameError::InvalidName { seat: Seat::Two }
        );
    }

    #[test]
    fn test_names_are_taken_verbatim() {
        let mut engine = engine();
        assert_eq!(engine.initialize_players(" bob", "Carl"), Ok((' ', 'C')));
        assert_eq!(engine.player(Seat::One).name(), " bob");
        assert_eq!(engine.initialize_players("   ", "Carl"), Ok((' ', 'C')));
    }

    #[test]
    fn test_initialize_players_assigns_symbols() {
        let mut engine = engine();
        assert_eq!(engine.initialize_players("Alice", "Aaron"), Ok(('A', 'R')));
        assert_eq!(engine.initialize_players("Xavier", "Xi"), Ok(('X', 'I')));
        assert_eq!(engine.current_player().name(), "Xavier");
    }

    #[test]
    fn test_initialize_players_hands_turn_to_player_one() {
        let mut engine = engine();
        assert_eq!(engine.submit_move(1), Ok(MoveOutcome::Continue));
        assert_eq!(engine.current_player().seat(), Seat::Two);

        engine.initialize_players("Carol", "Dave").unwrap();
        assert_eq!(engine.current_player().seat(), Seat::One);
        assert_eq!(engine.current_player().name(), "Carol");
    }

    #[test]
    fn test_initialize_players_failure_keeps_players() {
        let mut engine = engine();
        assert!(engine.initialize_players("Carol", "").is_err());
        assert_eq!(engine.player(Seat::One).name(), "Alice");
        assert_eq!(engine.player(Seat::Two).name(), "Bob");
    }

    #[test]
    fn test_apply_move() {
        let mut engine = engine();
        assert_eq!(engine.submit_move(4), Ok(MoveOutcome::Continue));
        assert_eq!(engine.current_player().seat(), Seat::Two);
        assert_eq!(engine.snapshot().get(ROWS - 1, 3), Cell::Player1);
        assert_eq!(engine.moves_played(), 1);
    }

    #[test]
    fn test_out_of_range_columns_are_invalid() {
        let mut engine = engine();
        let before = engine.snapshot();

        assert_eq!(engine.submit_move(8), Err(GameError::InvalidInput("8".into())));
        assert_eq!(engine.submit_move(0), Err(GameError::InvalidInput("0".into())));

        assert_eq!(engine.snapshot(), before);
        assert_eq!(engine.current_player().seat(), Seat::One);
    }

    #[test]
    fn test_unparseable_input_is_invalid() {
        let mut engine = engine();
        assert_eq!(
            engine.submit_input("three"),
            Err(GameError::InvalidInput("three".into()))
        );
        assert!(engine.submit_input("-1").is_err());
        assert_eq!(engine.submit_input(" 3 "), Ok(MoveOutcome::Continue));
    }

    #[test]
    fn test_full_column_keeps_turn() {
        let mut engine = engine();
        for _ in 0..ROWS {
            engine.submit_move(1).unwrap();
        }
        let mover = engine.current_player().seat();
        let before = engine.snapshot();

        assert_eq!(engine.submit_move(1), Err(GameError::ColumnFull(1)));
        assert_eq!(engine.current_player().seat(), mover);
        assert_eq!(engine.snapshot(), before);
        assert!(!engine.is_column_open(1));
    }

    #[test]
    fn test_turns_alternate_on_continue() {
        let mut engine = engine();
        for column in [1, 2, 3, 5, 6, 7] {
            let before = engine.current_player().seat();
            assert_eq!(engine.submit_move(column), Ok(MoveOutcome::Continue));
            assert_ne!(engine.current_player().seat(), before);
        }
    }

    #[test]
    fn test_vertical_win_in_column_three() {
        let mut engine = engine();
        for _ in 0..3 {
            assert_eq!(engine.submit_move(3), Ok(MoveOutcome::Continue));
            assert_eq!(engine.submit_move(5), Ok(MoveOutcome::Continue));
        }

        let outcome = engine.submit_move(3).unwrap();
        let alice = engine.player(Seat::One).clone();
        assert_eq!(outcome, MoveOutcome::Win(alice));
        assert_eq!(engine.current_state(), GameState::Won(Seat::One));
        assert_eq!(
            engine.winning_line(),
            Some([(2, 2), (3, 2), (4, 2), (5, 2)])
        );
    }

    #[test]
    fn test_win_keeps_turn_and_locks_board() {
        let mut engine = engine();
        // Player 1 completes the bottom row
        for column in 1..=3 {
            engine.submit_move(column).unwrap();
            engine.submit_move(column).unwrap();
        }
        assert!(matches!(engine.submit_move(4), Ok(MoveOutcome::Win(_))));

        let before = engine.snapshot();
        assert_eq!(engine.current_player().seat(), Seat::One);
        assert_eq!(engine.submit_move(5), Err(GameError::GameOver));
        assert_eq!(engine.submit_move(9), Err(GameError::GameOver));
        assert_eq!(engine.snapshot(), before);
    }

    #[test]
    fn test_draw() {
        let mut engine = engine();
        let (last, rest) = DRAW_SEQUENCE.split_last().unwrap();
        for &column in rest {
            assert_eq!(engine.submit_move(column), Ok(MoveOutcome::Continue));
        }

        let mover = engine.current_player().seat();
        assert_eq!(engine.submit_move(*last), Ok(MoveOutcome::Draw));
        assert_eq!(engine.current_state(), GameState::Draw);
        assert_eq!(engine.current_player().seat(), mover);
        assert_eq!(engine.submit_move(1), Err(GameError::GameOver));
        assert_eq!(engine.winning_line(), None);
    }

    #[test]
    fn test_restart_resets_everything() {
        let mut engine = engine();
        for column in 1..=3 {
            engine.submit_move(column).unwrap();
            engine.submit_move(column).unwrap();
        }
        engine.submit_move(4).unwrap();
        assert!(engine.current_state().is_terminal());

        engine.restart("Xavier", "Xi").unwrap();
        assert_eq!(engine.current_state(), GameState::InProgress);
        assert_eq!(engine.snapshot(), Board::new().snapshot());
        assert_eq!(engine.current_player().symbol(), 'X');
        assert_eq!(engine.player(Seat::Two).symbol(), 'I');
        assert_eq!(engine.moves_played(), 0);
        assert_eq!(engine.winning_line(), None);
        assert_eq!(engine.submit_move(1), Ok(MoveOutcome::Continue));
    }

    #[test]
    fn test_rejected_restart_keeps_game() {
        let mut engine = engine();
        engine.submit_move(2).unwrap();
        let before = engine.snapshot();

        assert!(engine.restart("", "Bob").is_err());
        assert_eq!(engine.snapshot(), before);
        assert_eq!(engine.moves_played(), 1);
    }

    #[test]
    fn test_custom_colors() {
        let engine =
            GameEngine::with_colors("Ann", "Ben", [PlayerColor::Green, PlayerColor::Yellow])
                .unwrap();
        assert_eq!(engine.player(Seat::One).color(), PlayerColor::Green);
        assert_eq!(engine.player(Seat::Two).color(), PlayerColor::Yellow);
    }

    #[test]
    fn test_engines_are_independent() {
        let mut first = engine();
        let second = engine();
        first.submit_move(1).unwrap();
        assert_eq!(second.moves_played(), 0);
        assert_ne!(first.snapshot(), second.snapshot());
    }
}
