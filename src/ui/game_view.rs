use crate::game::{GameEngine, GameState, COLS};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::app::App;
use super::board_widget::{self, palette};
use super::menu_view::{render_controls, render_message};

pub fn render(frame: &mut Frame, app: &App, engine: &GameEngine) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(11),   // Board
            Constraint::Length(3), // Message
            Constraint::Length(3), // Controls
        ])
        .split(frame.area());

    render_header(frame, engine, chunks[0]);
    render_board(frame, app, engine, chunks[1]);
    render_message(frame, &app.message().map(str::to_string), chunks[2]);
    render_controls(
        frame,
        "1-7: Drop  |  ←/→ + Enter: Drop  |  0: Restart  |  Q: Quit",
        chunks[3],
    );
}

fn render_header(frame: &mut Frame, engine: &GameEngine, area: Rect) {
    let [one, two] = engine.players();
    let current = engine.current_player();

    let status = match engine.current_state() {
        GameState::InProgress => format!(
            "{}'s turn ({})  |  Move {}",
            current.name(),
            current.symbol(),
            engine.moves_played() + 1
        ),
        GameState::Won(seat) => {
            let winner = engine.player(seat);
            format!("Game Over  |  {} ({}) wins", winner.name(), winner.symbol())
        }
        GameState::Draw => "Game Over  |  Draw".to_string(),
    };

    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            format!("{} [{}]", one.name(), one.symbol()),
            Style::default().fg(palette(one.color())),
        ),
        Span::raw("  vs  "),
        Span::styled(
            format!("{} [{}]", two.name(), two.symbol()),
            Style::default().fg(palette(two.color())),
        ),
        Span::raw("  |  "),
        Span::styled(
            status,
            Style::default()
                .fg(palette(current.color()))
                .add_modifier(Modifier::BOLD),
        ),
    ]))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title("Connect Four"),
    );

    frame.render_widget(header, area);
}

fn render_board(frame: &mut Frame, app: &App, engine: &GameEngine, area: Rect) {
    let selected_column = app.selected_column();
    let mut lines = Vec::new();

    // Column numbers with selection indicator
    let mut col_line = vec![Span::raw("   ")]; // Padding (3 chars to match "  ║")
    for col in 0..COLS {
        if col == selected_column {
            col_line.push(Span::styled(
                format!(" {} ", col + 1),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            ));
        } else {
            col_line.push(Span::raw(format!(" {} ", col + 1)));
        }
    }
    col_line.push(Span::raw("  ")); // Suffix padding to match " ║"
    lines.push(Line::from(col_line));

    lines.extend(board_widget::board_lines(
        &engine.snapshot(),
        engine.players(),
        app.empty_glyph(),
        engine.winning_line(),
    ));

    // Selection indicator
    let mut indicator_line = vec![Span::raw("   ")]; // Align with board (3 chars to match "  ║")
    for col in 0..COLS {
        if col == selected_column && !engine.current_state().is_terminal() {
            let color = if engine.is_column_open(col + 1) {
                Color::Cyan
            } else {
                Color::DarkGray
            };
            indicator_line.push(Span::styled(" ▲ ", Style::default().fg(color)));
        } else {
            indicator_line.push(Span::raw("   "));
        }
    }
    indicator_line.push(Span::raw("  ")); // Suffix padding to match " ║"
    lines.push(Line::from(indicator_line));

    let widget = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(widget, area);
}
