use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use super::role_color;

pub fn render(frame: &mut Frame, area: Rect, roles: &[String], selected: usize) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(area);

    let mut items: Vec<ListItem> = Vec::with_capacity(roles.len());
    for (i, role) in roles.iter().enumerate() {
        let prefix = if i == selected { "  ► " } else { "    " };
        items.push(
            ListItem::new(format!("{}{}", prefix, role.to_uppercase()))
                .style(Style::default().fg(role_color(role))),
        );
    }

    let mut list_state = ListState::default();
    list_state.select(Some(selected));

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan))
                .padding(ratatui::widgets::Padding::uniform(1))
                .title("Select Your Role")
                .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
        )
        .highlight_style(Style::default().bg(Color::White).fg(Color::Black))
        .highlight_symbol("");

    frame.render_stateful_widget(list, chunks[0], &mut list_state);

    let footer = Paragraph::new("↑/↓ Navigate    Enter Select    Esc/q Back")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Right)
        .block(Block::default().borders(Borders::NONE));
    frame.render_widget(footer, chunks[1]);
}
