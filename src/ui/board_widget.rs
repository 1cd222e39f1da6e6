use crate::game::{Cell, Player, PlayerColor, Snapshot, WinningLine, COLS};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

/// Terminal color for a player's cosmetic color tag.
pub fn palette(color: PlayerColor) -> Color {
    match color {
        PlayerColor::Red => Color::Red,
        PlayerColor::Blue => Color::Blue,
        PlayerColor::Yellow => Color::Yellow,
        PlayerColor::Green => Color::Green,
        PlayerColor::Magenta => Color::Magenta,
        PlayerColor::Cyan => Color::Cyan,
        PlayerColor::White => Color::White,
    }
}

/// Board rows framed by a double-line border, each cell showing the owner's
/// symbol in the owner's color. Cells of `highlight` are drawn reversed.
pub fn board_lines(
    snapshot: &Snapshot,
    players: &[Player; 2],
    empty_glyph: char,
    highlight: Option<WinningLine>,
) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    let border = "═".repeat(COLS * 3 + 1);
    lines.push(Line::from(format!("  ╔{border}╗")));

    for (row, cells) in snapshot.rows().enumerate() {
        let mut row_spans = vec![Span::raw("  ║")];

        for (col, &cell) in cells.iter().enumerate() {
            let mut style = match cell.owner() {
                Some(seat) => {
                    let player = &players[seat.index()];
                    Style::default()
                        .fg(palette(player.color()))
                        .add_modifier(Modifier::BOLD)
                }
                None => Style::default().fg(Color::DarkGray),
            };
            if highlight.is_some_and(|line| line.contains(&(row, col))) {
                style = style.add_modifier(Modifier::REVERSED);
            }
            row_spans.push(Span::styled(
                format!(" {} ", glyph(cell, players, empty_glyph)),
                style,
            ));
        }

        row_spans.push(Span::raw(" ║"));
        lines.push(Line::from(row_spans));
    }

    lines.push(Line::from(format!("  ╚{border}╝")));
    lines
}

fn glyph(cell: Cell, players: &[Player; 2], empty_glyph: char) -> char {
    match cell {
        Cell::Empty => empty_glyph,
        Cell::Player1 => players[0].symbol(),
        Cell::Player2 => players[1].symbol(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{GameEngine, ROWS};

    fn row_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_board_lines_show_symbols() {
        let mut engine = GameEngine::new("Alice", "Bob").unwrap();
        engine.submit_move(1).unwrap();
        engine.submit_move(2).unwrap();

        let lines = board_lines(&engine.snapshot(), engine.players(), '.', None);
        // Top border, six rows, bottom border
        assert_eq!(lines.len(), ROWS + 2);
        assert_eq!(row_text(&lines[ROWS]), "  ║ A  B  .  .  .  .  .  ║");
        assert_eq!(row_text(&lines[1]), "  ║ .  .  .  .  .  .  .  ║");
    }

    #[test]
    fn test_highlight_reverses_winning_cells() {
        let mut engine = GameEngine::new("Alice", "Bob").unwrap();
        for _ in 0..3 {
            engine.submit_move(1).unwrap();
            engine.submit_move(2).unwrap();
        }
        engine.submit_move(1).unwrap();

        let lines = board_lines(
            &engine.snapshot(),
            engine.players(),
            '.',
            engine.winning_line(),
        );
        let bottom_left = &lines[ROWS].spans[1];
        assert!(bottom_left.style.add_modifier.contains(Modifier::REVERSED));
        let bottom_second = &lines[ROWS].spans[2];
        assert!(!bottom_second.style.add_modifier.contains(Modifier::REVERSED));
    }

    #[test]
    fn test_palette_follows_player_color() {
        let engine = GameEngine::new("Alice", "Bob").unwrap();
        assert_eq!(palette(engine.players()[0].color()), Color::Red);
        assert_eq!(palette(engine.players()[1].color()), Color::Blue);
    }
}
