use crate::config::AppConfig;
use crate::error::GameError;
use crate::game::{GameEngine, MoveOutcome, PlayerColor, Seat, COLS};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use tracing::{debug, warn};

/// Entries of the main menu, in display order.
pub const MENU_ITEMS: [&str; 2] = ["Start the game", "Quit the application"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    Menu { selected: usize },
    NameEntry { seat: Seat, input: String },
    Playing,
}

pub struct App {
    screen: Screen,
    engine: Option<GameEngine>,
    default_names: [Option<String>; 2],
    colors: [PlayerColor; 2],
    empty_glyph: char,
    first_name: Option<String>,
    selected_column: usize,
    should_quit: bool,
    message: Option<String>,
}

impl App {
    pub fn new(config: &AppConfig) -> Self {
        App {
            screen: Screen::Menu { selected: 0 },
            engine: None,
            default_names: [
                config.players.player1_name.clone(),
                config.players.player2_name.clone(),
            ],
            colors: config.players.colors(),
            empty_glyph: config.display.empty_glyph,
            first_name: None,
            selected_column: COLS / 2, // Start in middle
            should_quit: false,
            message: None,
        }
    }

    /// Skip the menu and name prompts and go straight to a game.
    pub fn with_players(config: &AppConfig, name1: &str, name2: &str) -> Result<Self, GameError> {
        let mut app = App::new(config);
        app.start_game(name1, name2)?;
        Ok(app)
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn engine(&self) -> Option<&GameEngine> {
        self.engine.as_ref()
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn selected_column(&self) -> usize {
        self.selected_column
    }

    pub fn empty_glyph(&self) -> char {
        self.empty_glyph
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Main application loop
    pub fn run(&mut self, terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key);
                }
            }
        }
        Ok(())
    }

    /// Handle key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Clear message on any key press
        self.message = None;

        match self.screen {
            Screen::Menu { selected } => self.handle_menu_key(key, selected),
            Screen::NameEntry { .. } => self.handle_name_key(key),
            Screen::Playing => self.handle_game_key(key),
        }
    }

    fn handle_menu_key(&mut self, key: KeyEvent, selected: usize) {
        match key.code {
            KeyCode::Char('1') => self.begin_name_entry(),
            KeyCode::Char('2') | KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Up | KeyCode::Down => {
                self.screen = Screen::Menu {
                    selected: (selected + 1) % MENU_ITEMS.len(),
                };
            }
            KeyCode::Enter => {
                if selected == 0 {
                    self.begin_name_entry();
                } else {
                    self.should_quit = true;
                }
            }
            _ => {
                self.message = Some("Invalid option, press 1 or 2.".to_string());
            }
        }
    }

    fn handle_name_key(&mut self, key: KeyEvent) {
        let Screen::NameEntry { seat, input } = &mut self.screen else {
            return;
        };

        match key.code {
            KeyCode::Char(c) => input.push(c),
            KeyCode::Backspace => {
                input.pop();
            }
            KeyCode::Esc => {
                self.first_name = None;
                self.screen = Screen::Menu { selected: 0 };
            }
            KeyCode::Enter => {
                let name = input.trim().to_string();
                let seat = *seat;
                if name.is_empty() {
                    self.message = Some(GameError::InvalidName { seat }.to_string());
                    return;
                }
                match seat {
                    Seat::One => {
                        self.first_name = Some(name);
                        self.screen = Screen::NameEntry {
                            seat: Seat::Two,
                            input: self.default_name(Seat::Two),
                        };
                    }
                    Seat::Two => {
                        let first = self.first_name.take().unwrap_or_default();
                        if let Err(e) = self.start_game(&first, &name) {
                            warn!(error = %e, "could not start game");
                            self.message = Some(e.to_string());
                            self.screen = Screen::NameEntry {
                                seat: Seat::One,
                                input: first,
                            };
                        }
                    }
                }
            }
            _ => {}
        }
    }

    fn handle_game_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                if self.selected_column > 0 {
                    self.selected_column -= 1;
                }
            }
            KeyCode::Right => {
                if self.selected_column < COLS - 1 {
                    self.selected_column += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.submit(&(self.selected_column + 1).to_string());
            }
            KeyCode::Char('0') | KeyCode::Char('r') => {
                self.message = Some("Restarting game...".to_string());
                self.begin_name_entry();
            }
            KeyCode::Char(c) => {
                self.submit(&c.to_string());
            }
            _ => {}
        }
    }

    fn begin_name_entry(&mut self) {
        self.first_name = None;
        self.screen = Screen::NameEntry {
            seat: Seat::One,
            input: self.default_name(Seat::One),
        };
    }

    fn default_name(&self, seat: Seat) -> String {
        self.default_names[seat.index()].clone().unwrap_or_default()
    }

    /// Start a fresh game, reusing the engine when one already exists.
    fn start_game(&mut self, name1: &str, name2: &str) -> Result<(), GameError> {
        match self.engine.as_mut() {
            Some(engine) => engine.restart(name1, name2)?,
            None => self.engine = Some(GameEngine::with_colors(name1, name2, self.colors)?),
        }
        self.screen = Screen::Playing;
        self.selected_column = COLS / 2;

        if let Some(engine) = &self.engine {
            let [one, two] = engine.players();
            self.message = Some(format!(
                "{} plays {}, {} plays {}",
                one.name(),
                one.symbol(),
                two.name(),
                two.symbol()
            ));
        }
        Ok(())
    }

    /// Send raw column input to the engine and report the result
    fn submit(&mut self, input: &str) {
        let Some(engine) = self.engine.as_mut() else {
            return;
        };

        match engine.submit_input(input) {
            Ok(MoveOutcome::Continue) => {}
            Ok(MoveOutcome::Win(player)) => {
                self.message = Some(format!(
                    "{} ({}) wins! Press 0 to restart or q to quit.",
                    player.name(),
                    player.symbol()
                ));
            }
            Ok(MoveOutcome::Draw) => {
                self.message =
                    Some("The game is a draw! Press 0 to restart or q to quit.".to_string());
            }
            Err(GameError::ColumnFull(_)) => {
                self.message = Some("Invalid move. Column is full. Try again.".to_string());
            }
            Err(GameError::InvalidInput(_)) => {
                self.message = Some(format!(
                    "Invalid input. Please enter a number between 1 and {COLS}."
                ));
            }
            Err(GameError::GameOver) => {
                self.message = Some("Game over! Press 0 to restart.".to_string());
            }
            Err(e) => {
                debug!(error = %e, "move rejected");
                self.message = Some(e.to_string());
            }
        }
    }

    /// Render the UI
    pub(crate) fn render(&self, frame: &mut ratatui::Frame) {
        match &self.screen {
            Screen::Menu { selected } => super::menu_view::render_menu(frame, *selected, &self.message),
            Screen::NameEntry { seat, input } => {
                super::menu_view::render_name_entry(frame, *seat, input, &self.message)
            }
            Screen::Playing => {
                if let Some(engine) = &self.engine {
                    super::game_view::render(frame, self, engine);
                }
            }
        }
    }
}
