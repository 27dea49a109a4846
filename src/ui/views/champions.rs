use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::model::champion::ChampionRecord;
use crate::ui::pagination::{paginate, CHAMPS_PER_PAGE};
use crate::{styled_line, styled_span};

use super::winrate_color;

pub fn render(
    frame: &mut Frame,
    area: Rect,
    role: &str,
    champions: &[ChampionRecord],
    page_index: usize,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .padding(ratatui::widgets::Padding::uniform(1))
        .title(format!("Best {} Champions", role.to_uppercase()))
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD));

    let page = match paginate(champions, CHAMPS_PER_PAGE, page_index) {
        Ok(page) => page,
        Err(error) => {
            // The dispatcher clamps page indices, so this branch is a bug.
            let paragraph = Paragraph::new(format!("\n  [!] Error: {}", error))
                .style(Style::default().fg(Color::Red))
                .wrap(Wrap { trim: true })
                .block(block);
            frame.render_widget(paragraph, chunks[0]);
            return;
        }
    };

    let shown_from = if page.items.is_empty() {
        0
    } else {
        page.start_offset + 1
    };
    let shown_to = page.start_offset + page.items.len();

    let mut lines: Vec<Line> = vec![
        styled_line!(LIST [
            styled_span!("Showing {}-{} of {}", shown_from, shown_to, champions.len(); DarkGray),
            styled_span!("    Page {}/{}", page_index + 1, page.total_pages; Cyan Bold),
        ]),
        styled_line!(),
    ];

    for (i, champ) in page.items.iter().enumerate() {
        let rank = page.start_offset + i + 1;
        let mut spans = vec![
            styled_span!("#{:02}", rank; DarkGray Bold),
            ratatui::text::Span::styled(
                format!(" {:<16}", champ.name),
                Style::default()
                    .fg(winrate_color(champ))
                    .add_modifier(Modifier::BOLD),
            ),
        ];
        if let Some(winrate) = &champ.winrate {
            spans.push(styled_span!("  [WR: {}]", winrate; Green Bold));
        }
        if let Some(pick_rate) = &champ.pick_rate {
            spans.push(styled_span!("  [PR: {}]", pick_rate; Yellow Bold));
        }
        lines.push(Line::from(spans));
    }

    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, chunks[0]);

    let footer = Paragraph::new("←/→ Navigate Pages    Esc/q Back to Roles")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Right)
        .block(Block::default().borders(Borders::NONE));
    frame.render_widget(footer, chunks[1]);
}
