use crate::score::ScoreTally;
use ratatui::{
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::app::MENU_ITEMS;

/// Fixed-size box in the middle of the screen.
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let [area] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    let [area] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(area);
    area
}

pub fn render_menu(frame: &mut Frame, selected: usize) {
    let mut lines = vec![
        Line::styled(
            "CONNECT 4",
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ),
        Line::from(""),
    ];
    for (i, item) in MENU_ITEMS.iter().enumerate() {
        let text = format!("{}. {}", i + 1, item.label());
        if i == selected {
            lines.push(Line::styled(
                format!("> {text} <"),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ));
        } else {
            lines.push(Line::from(text));
        }
    }

    let menu = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Main Menu")
                .style(Style::default().bg(Color::Blue)),
        );
    frame.render_widget(menu, centered(frame.area(), 40, MENU_ITEMS.len() as u16 + 4));
}

pub fn render_scoreboard(frame: &mut Frame, tally: &ScoreTally) {
    let lines = vec![
        Line::from(format!("Player A Wins: {}", tally.player_a_wins)),
        Line::from(format!("Player B / Computer Wins: {}", tally.player_b_wins)),
        Line::from(format!("Draws: {}", tally.draws)),
        Line::from(""),
        Line::styled(
            "Press any key to return to the menu",
            Style::default().fg(Color::DarkGray),
        ),
    ];

    let scoreboard = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Scoreboard"));
    frame.render_widget(scoreboard, centered(frame.area(), 44, 7));
}
