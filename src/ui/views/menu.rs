use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::ui::state::MenuOption;

pub fn render(frame: &mut Frame, area: Rect, selected: usize) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(area);

    // The selected option also shows its one-line description right below.
    let mut items: Vec<ListItem> = Vec::with_capacity(MenuOption::ALL.len() + 1);
    for (i, option) in MenuOption::ALL.iter().enumerate() {
        let prefix = if i == selected { "  ► " } else { "    " };
        items.push(ListItem::new(format!("{}{}", prefix, option.label())));
        if i == selected {
            items.push(
                ListItem::new(format!("      {}", option.description()))
                    .style(Style::default().fg(Color::DarkGray)),
            );
        }
    }

    let mut list_state = ListState::default();
    list_state.select(Some(selected));

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan))
                .padding(ratatui::widgets::Padding::uniform(1))
                .title("Main Menu (↑/↓ to navigate, Enter to select)")
                .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
        )
        .highlight_style(Style::default().bg(Color::White).fg(Color::Black))
        .highlight_symbol("");

    frame.render_stateful_widget(list, chunks[0], &mut list_state);

    let footer = Paragraph::new("↑/↓ Navigate    Enter Select")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Right)
        .block(Block::default().borders(Borders::NONE));
    frame.render_widget(footer, chunks[1]);
}
