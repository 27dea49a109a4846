use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::styled_line;

pub fn render_loading(frame: &mut Frame, area: Rect) {
    let lines: Vec<Line> = vec![
        styled_line!(),
        styled_line!("Fetching champion data from the Rift..."; Yellow),
        styled_line!("This may take a few moments"; DarkGray),
    ];

    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Yellow))
                .padding(ratatui::widgets::Padding::uniform(1))
                .title("Loading")
                .title_style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)),
        );
    frame.render_widget(paragraph, area);
}

pub fn render_error(frame: &mut Frame, area: Rect, message: &str) {
    let lines: Vec<Line> = vec![
        styled_line!(),
        styled_line!("{}", message; Red Bold),
        styled_line!(),
        styled_line!("Press Enter to retry, Esc/q to quit"; DarkGray),
    ];

    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red))
                .padding(ratatui::widgets::Padding::uniform(1))
                .title("Error")
                .title_style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)),
        );
    frame.render_widget(paragraph, area);
}
