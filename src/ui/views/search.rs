use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::model::champion::AnnotatedChampion;
use crate::ui::state::SearchState;
use crate::{styled_line, styled_span};

use super::role_color;

pub fn render(frame: &mut Frame, area: Rect, state: &SearchState) {
    if let Some(detail) = &state.detail {
        render_detail(frame, area, detail);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0), Constraint::Length(1)])
        .split(area);

    let query_text = if state.query.is_empty() {
        Line::from(vec![
            styled_span!("Search query: "),
            styled_span!("Start typing..."; DarkGray),
        ])
    } else {
        Line::from(vec![
            styled_span!("Search query: "),
            styled_span!("{}_", state.query; Yellow Bold),
        ])
    };

    let query = Paragraph::new(query_text).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow))
            .title("Champion Search")
            .title_style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)),
    );
    frame.render_widget(query, chunks[0]);

    if state.results.is_empty() {
        let feedback = if state.query.is_empty() {
            Paragraph::new("Type a champion name to search.")
                .style(Style::default().fg(Color::DarkGray))
        } else {
            Paragraph::new(format!("No champions found matching \"{}\"", state.query))
                .style(Style::default().fg(Color::Red))
        };
        frame.render_widget(feedback.block(Block::default().borders(Borders::NONE)), chunks[1]);
    } else {
        let items: Vec<ListItem> = state
            .results
            .iter()
            .enumerate()
            .map(|(i, champ)| {
                let prefix = if i == state.selected { "  ► " } else { "    " };
                ListItem::new(Line::from(vec![
                    Span::raw(prefix.to_string()),
                    Span::styled(
                        champ.name().to_string(),
                        Style::default().fg(role_color(&champ.role)),
                    ),
                    Span::styled(
                        format!(" ({})", champ.role.to_uppercase()),
                        Style::default().fg(Color::DarkGray),
                    ),
                ]))
            })
            .collect();

        let mut list_state = ListState::default();
        list_state.select(Some(state.selected));

        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Cyan))
                    .title("Results")
                    .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
            )
            .highlight_style(Style::default().bg(Color::White).fg(Color::Black))
            .highlight_symbol("");

        frame.render_stateful_widget(list, chunks[1], &mut list_state);
    }

    let footer =
        Paragraph::new("Type to Search    ↑/↓ Navigate    Enter View Details    Esc/q Back")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Right)
            .block(Block::default().borders(Borders::NONE));
    frame.render_widget(footer, chunks[2]);
}

fn render_detail(frame: &mut Frame, area: Rect, champ: &AnnotatedChampion) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(area);

    let mut lines: Vec<Line> = vec![
        styled_line!(LIST [
            styled_span!("{}", champ.name(); Cyan Bold),
            styled_span!("  ({})", champ.role.to_uppercase(); Yellow Bold),
        ]),
        styled_line!(),
        styled_line!("Statistics:"; White Bold),
    ];

    if let Some(winrate) = &champ.record.winrate {
        lines.push(styled_line!("  Win Rate: {}", winrate; Green));
    }
    if let Some(pick_rate) = &champ.record.pick_rate {
        lines.push(styled_line!("  Pick Rate: {}", pick_rate; Yellow));
    }
    if champ.record.winrate.is_none() && champ.record.pick_rate.is_none() {
        lines.push(styled_line!("  No statistics recorded"; DarkGray));
    }

    lines.push(styled_line!());
    if champ.record.counters.is_empty() {
        lines.push(styled_line!("No counter data available for this champion"; DarkGray));
    } else {
        lines.push(styled_line!("Countered by:"; Red Bold));
        for counter in champ.record.counters.iter().take(5) {
            lines.push(styled_line!("  • {}", counter; Red));
        }
    }

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Magenta))
            .padding(ratatui::widgets::Padding::uniform(1))
            .title(format!("{} Details", champ.name()))
            .title_style(Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD)),
    );
    frame.render_widget(paragraph, chunks[0]);

    let footer = Paragraph::new("Esc/q Back to Search")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Right)
        .block(Block::default().borders(Borders::NONE));
    frame.render_widget(footer, chunks[1]);
}
