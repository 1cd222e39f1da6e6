use crate::game::Seat;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::app::MENU_ITEMS;

fn split(frame: &Frame) -> std::rc::Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(6),    // Body
            Constraint::Length(3), // Message
            Constraint::Length(3), // Controls
        ])
        .split(frame.area())
}

pub fn render_menu(frame: &mut Frame, selected: usize, message: &Option<String>) {
    let chunks = split(frame);

    render_title(frame, "Welcome to Connect Four", chunks[0]);

    let mut lines = vec![Line::from("")];
    for (i, item) in MENU_ITEMS.iter().enumerate() {
        let text = format!("Press {} to {}", i + 1, item.to_lowercase());
        if i == selected {
            lines.push(Line::from(Span::styled(
                format!("> {text} <"),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )));
        } else {
            lines.push(Line::from(text));
        }
    }

    let menu = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Menu"));
    frame.render_widget(menu, chunks[1]);

    render_message(frame, message, chunks[2]);
    render_controls(frame, "1: Start  |  2/Q: Quit  |  ↑/↓ + Enter: Select", chunks[3]);
}

pub fn render_name_entry(frame: &mut Frame, seat: Seat, input: &str, message: &Option<String>) {
    let chunks = split(frame);

    render_title(frame, "Connect Four", chunks[0]);

    let prompt = Paragraph::new(vec![
        Line::from(""),
        Line::from(format!("Enter Player {}'s name:", seat.number())),
        Line::from(""),
        Line::from(vec![
            Span::styled(
                input.to_string(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::styled("_", Style::default().fg(Color::Cyan)),
        ]),
    ])
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL).title("Players"));
    frame.render_widget(prompt, chunks[1]);

    render_message(frame, message, chunks[2]);
    render_controls(frame, "Enter: Confirm  |  Backspace: Delete  |  Esc: Menu", chunks[3]);
}

fn render_title(frame: &mut Frame, title: &str, area: Rect) {
    let header = Paragraph::new(title.to_string())
        .style(Style::default().add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(header, area);
}

pub(super) fn render_message(frame: &mut Frame, message: &Option<String>, area: Rect) {
    let text = message.as_deref().unwrap_or("");
    let msg_widget = Paragraph::new(text)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

pub(super) fn render_controls(frame: &mut Frame, help: &str, area: Rect) {
    let controls = Paragraph::new(help.to_string())
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Controls"));

    frame.render_widget(controls, area);
}
